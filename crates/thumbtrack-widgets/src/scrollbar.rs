#![forbid(unsafe_code)]

//! The scrollbar widget.
//!
//! [`Scrollbar`] owns one thumb and wires the pieces together:
//!
//! ```text
//! pointer  -> GestureController -> ThumbGeometry -> ScrollSyncEngine -> document
//! document -> ScrollSyncEngine  -> ThumbGeometry
//! layout   -> LayoutObserver    -> ThumbGeometry + DocumentMetrics
//! ```
//!
//! The host drives it with four callbacks ([`on_layout`], [`on_pointer`],
//! [`on_document_scrolled`], [`on_data_changed`]) and polls
//! [`take_redraw_request`] / [`take_layout_request`] afterwards. Drawing is
//! left to the host: [`paint`] returns a plain-data snapshot.
//!
//! [`on_layout`]: Scrollbar::on_layout
//! [`on_pointer`]: Scrollbar::on_pointer
//! [`on_document_scrolled`]: Scrollbar::on_document_scrolled
//! [`on_data_changed`]: Scrollbar::on_data_changed
//! [`take_redraw_request`]: Scrollbar::take_redraw_request
//! [`take_layout_request`]: Scrollbar::take_layout_request
//! [`paint`]: Scrollbar::paint

use thumbtrack_core::event::PointerEvent;
use thumbtrack_core::geometry::{Axis, MIN_THUMB_LENGTH_FLOOR, Span, ThumbGeometry, Track};
use thumbtrack_core::gesture::{
    GestureConfig, GestureController, GestureEffects, GestureState, TouchZoneConfig, TouchZones,
};
use thumbtrack_core::debug;

use crate::color::PackedRgba;
use crate::document::DocumentView;
use crate::error::Result;
use crate::layout_observer::{LayoutObserver, LayoutPass};
use crate::sync::{ScrollSyncEngine, SyncOutcome};

/// Default thumb length before the first layout pass, in pixels.
pub const DEFAULT_INITIAL_THUMB_LENGTH: f32 = 100.0;

/// Scrollbar configuration.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ScrollbarConfig {
    /// Scroll axis.
    pub axis: Axis,
    /// Resize bands around the thumb edges.
    pub touch_zones: TouchZoneConfig,
    /// Smallest thumb length from layout or resizing.
    pub min_thumb_length: f32,
    /// Thumb length until the first layout pass.
    pub initial_thumb_length: f32,
    /// Whether pressing a resize band starts a resize.
    pub resize_enabled: bool,
    /// Include the resize bands in the paint snapshot.
    pub show_touch_zones: bool,
    pub thumb_color: PackedRgba,
    /// Overlay drawn on the thumb while it is being resized.
    pub highlight_color: PackedRgba,
    pub touch_zone_color: PackedRgba,
}

impl Default for ScrollbarConfig {
    fn default() -> Self {
        Self {
            axis: Axis::Vertical,
            touch_zones: TouchZoneConfig::default(),
            min_thumb_length: MIN_THUMB_LENGTH_FLOOR,
            initial_thumb_length: DEFAULT_INITIAL_THUMB_LENGTH,
            resize_enabled: false,
            show_touch_zones: false,
            thumb_color: PackedRgba::LIGHT_GRAY,
            highlight_color: PackedRgba::argb(200, 0, 0, 255),
            touch_zone_color: PackedRgba::argb(160, 0, 90, 0),
        }
    }
}

impl ScrollbarConfig {
    #[must_use]
    pub const fn axis(mut self, axis: Axis) -> Self {
        self.axis = axis;
        self
    }

    #[must_use]
    pub const fn touch_zones(mut self, zones: TouchZoneConfig) -> Self {
        self.touch_zones = zones;
        self
    }

    #[must_use]
    pub const fn min_thumb_length(mut self, length: f32) -> Self {
        self.min_thumb_length = length;
        self
    }

    #[must_use]
    pub const fn initial_thumb_length(mut self, length: f32) -> Self {
        self.initial_thumb_length = length;
        self
    }

    #[must_use]
    pub const fn resize_enabled(mut self, enabled: bool) -> Self {
        self.resize_enabled = enabled;
        self
    }

    #[must_use]
    pub const fn show_touch_zones(mut self, show: bool) -> Self {
        self.show_touch_zones = show;
        self
    }

    #[must_use]
    pub const fn thumb_color(mut self, color: PackedRgba) -> Self {
        self.thumb_color = color;
        self
    }

    #[must_use]
    pub const fn highlight_color(mut self, color: PackedRgba) -> Self {
        self.highlight_color = color;
        self
    }

    #[must_use]
    pub const fn touch_zone_color(mut self, color: PackedRgba) -> Self {
        self.touch_zone_color = color;
        self
    }

    /// The gesture half of this configuration.
    #[must_use]
    pub const fn gesture_config(&self) -> GestureConfig {
        GestureConfig {
            axis: self.axis,
            touch_zones: self.touch_zones,
            resize_enabled: self.resize_enabled,
        }
    }
}

/// A colored band along the track.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PaintBand {
    pub span: Span,
    pub color: PackedRgba,
}

/// Everything a renderer needs to draw the scrollbar.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ScrollbarPaint {
    pub axis: Axis,
    pub track: Track,
    pub thumb: PaintBand,
    /// Present while a resize is in progress.
    pub highlight: Option<PaintBand>,
    /// Top and bottom resize bands, when the overlay is enabled.
    pub touch_zones: Option<[PaintBand; 2]>,
}

/// A scrollbar kept in sync with one document.
#[derive(Debug)]
pub struct Scrollbar {
    config: ScrollbarConfig,
    thumb: ThumbGeometry,
    gestures: GestureController,
    sync: ScrollSyncEngine,
    layout: LayoutObserver,
    needs_redraw: bool,
    needs_layout: bool,
}

impl Default for Scrollbar {
    fn default() -> Self {
        Self::new(ScrollbarConfig::default())
    }
}

impl Scrollbar {
    /// Create a detached scrollbar.
    #[must_use]
    pub fn new(config: ScrollbarConfig) -> Self {
        Self {
            thumb: ThumbGeometry::new(config.initial_thumb_length, config.min_thumb_length),
            gestures: GestureController::new(config.gesture_config()),
            sync: ScrollSyncEngine::new(config.axis),
            layout: LayoutObserver::new(config.axis),
            config,
            needs_redraw: false,
            needs_layout: false,
        }
    }

    // --- Document ---------------------------------------------------------

    /// Attach a document and request a layout pass. Returns the document it
    /// replaces.
    pub fn attach(&mut self, document: Box<dyn DocumentView>) -> Option<Box<dyn DocumentView>> {
        self.gestures.reset();
        self.layout.rearm();
        self.needs_layout = true;
        self.sync.attach(document)
    }

    /// Detach the document. Every callback is a no-op until the next attach.
    pub fn detach(&mut self) -> Option<Box<dyn DocumentView>> {
        if self.gestures.reset().is_some() {
            debug!("gesture abandoned on detach");
        }
        self.sync.detach()
    }

    /// The attached document.
    #[must_use]
    pub fn document(&self) -> Option<&dyn DocumentView> {
        self.sync.document()
    }

    /// The attached document, mutably. See [`ScrollSyncEngine::document_mut`].
    pub fn document_mut(&mut self) -> Option<&mut dyn DocumentView> {
        self.sync.document_mut()
    }

    // --- Host callbacks ---------------------------------------------------

    /// A layout pass assigned `track`.
    ///
    /// Returns `None` while detached. Otherwise recomputes extents, resizes
    /// the thumb and re-derives its position from the document offset. A
    /// track that differs from the previous one always gets measured, even if
    /// the observer was waiting to skip its own echo pass.
    ///
    /// # Errors
    ///
    /// Only on a geometry failure, which an assigned track rules out.
    pub fn on_layout(&mut self, track: Track) -> Result<Option<LayoutPass>> {
        if self.thumb.track() != Some(track) {
            self.layout.rearm();
        }
        self.thumb.set_track(track);
        let Some(document) = self.sync.document() else {
            return Ok(None);
        };
        let pass = self.layout.on_layout(document, &mut self.thumb);
        if let LayoutPass::Measured {
            metrics, changed, ..
        } = pass
        {
            self.sync.set_metrics(metrics);
            self.sync.sync_thumb(&mut self.thumb)?;
            if changed {
                self.needs_layout = true;
            }
            self.needs_redraw = true;
        }
        Ok(Some(pass))
    }

    /// Feed one pointer event. Returns whether the scrollbar consumed it.
    ///
    /// Without a document, or when nothing can scroll, events pass through
    /// untouched.
    ///
    /// # Errors
    ///
    /// Propagates a document's refusal of a scroll command. The thumb is put
    /// back where the document actually ended up before the error returns.
    pub fn on_pointer(&mut self, event: &PointerEvent) -> Result<bool> {
        if !self.is_interactive() {
            if self.gestures.reset().is_some() {
                debug!("gesture abandoned, nothing to scroll");
                self.needs_redraw = true;
            }
            return Ok(false);
        }

        let effects = self.gestures.handle(event, &mut self.thumb)?;
        if effects.intersects(GestureEffects::REDRAW) || effects.thumb_changed() {
            self.needs_redraw = true;
        }
        if effects.thumb_changed() {
            if let Err(err) = self.sync.on_thumb_moved(&self.thumb) {
                self.sync.sync_thumb(&mut self.thumb)?;
                return Err(err.into());
            }
        }
        Ok(effects.consumed())
    }

    /// The document scrolled by `(dx, dy)` through its own callback.
    ///
    /// # Errors
    ///
    /// Only on a geometry failure, which cannot happen once laid out.
    pub fn on_document_scrolled(&mut self, dx: f32, dy: f32) -> Result<SyncOutcome> {
        let outcome = self.sync.on_document_scrolled(dx, dy, &mut self.thumb)?;
        if matches!(outcome, SyncOutcome::Applied | SyncOutcome::NoScrollableRange) {
            self.needs_redraw = true;
        }
        Ok(outcome)
    }

    /// The document's items changed; the next layout pass must remeasure.
    pub fn on_data_changed(&mut self) {
        self.layout.rearm();
        self.needs_layout = true;
    }

    /// The widget's own scroll offset along the axis.
    pub fn set_content_offset(&mut self, offset: f32) {
        self.gestures.set_content_offset(offset);
    }

    // --- Config -----------------------------------------------------------

    #[must_use]
    pub const fn config(&self) -> &ScrollbarConfig {
        &self.config
    }

    /// Turn edge resizing on or off. An active resize keeps running.
    pub fn set_resize_enabled(&mut self, enabled: bool) {
        self.config.resize_enabled = enabled;
        self.gestures.set_config(self.config.gesture_config());
    }

    /// Show or hide the touch-zone overlay.
    pub fn set_show_touch_zones(&mut self, show: bool) {
        if self.config.show_touch_zones != show {
            self.config.show_touch_zones = show;
            self.needs_redraw = true;
        }
    }

    // --- State ------------------------------------------------------------

    #[must_use]
    pub const fn thumb(&self) -> &ThumbGeometry {
        &self.thumb
    }

    #[must_use]
    pub const fn gesture_state(&self) -> GestureState {
        self.gestures.state()
    }

    #[must_use]
    pub const fn sync(&self) -> &ScrollSyncEngine {
        &self.sync
    }

    /// Accumulated document offset along the axis.
    #[must_use]
    pub const fn scroll_offset(&self) -> f32 {
        self.sync.offset_along_axis()
    }

    /// Current resize bands.
    #[must_use]
    pub fn touch_zones(&self) -> TouchZones {
        self.gestures.touch_zones(&self.thumb)
    }

    /// Whether pointer input can move the document.
    #[must_use]
    pub fn is_interactive(&self) -> bool {
        self.sync.is_attached()
            && self
                .sync
                .mapper(&self.thumb)
                .is_some_and(|mapper| mapper.is_mappable())
    }

    /// Snapshot for drawing, or `None` before the first layout pass.
    #[must_use]
    pub fn paint(&self) -> Option<ScrollbarPaint> {
        let track = self.thumb.track()?;
        let thumb = self.thumb.span();
        let highlight = self.gestures.is_resizing().then_some(PaintBand {
            span: thumb,
            color: self.config.highlight_color,
        });
        let touch_zones = self.config.show_touch_zones.then(|| {
            let zones = self.touch_zones();
            [zones.top, zones.bottom].map(|span| PaintBand {
                span,
                color: self.config.touch_zone_color,
            })
        });
        Some(ScrollbarPaint {
            axis: self.config.axis,
            track,
            thumb: PaintBand {
                span: thumb,
                color: self.config.thumb_color,
            },
            highlight,
            touch_zones,
        })
    }

    /// Consume a pending redraw request.
    pub fn take_redraw_request(&mut self) -> bool {
        std::mem::take(&mut self.needs_redraw)
    }

    /// Consume a pending relayout request.
    pub fn take_layout_request(&mut self) -> bool {
        std::mem::take(&mut self.needs_layout)
    }
}
