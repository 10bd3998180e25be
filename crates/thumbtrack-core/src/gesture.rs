#![forbid(unsafe_code)]

//! Thumb gesture recognition: turns raw pointer events into thumb drags and
//! resizes.
//!
//! [`GestureController`] consumes [`PointerEvent`]s and mutates a
//! [`ThumbGeometry`] directly. It reports what it did through
//! [`GestureEffects`] so the caller can decide whether to scroll the document
//! or repaint.
//!
//! # State Machine
//!
//! ```text
//! Idle --down on body--------> Dragging -------up/cancel--> Idle
//!  |  --down on top zone-----> ResizingTop ----up/cancel--> Idle
//!  |  --down on bottom zone--> ResizingBottom -up/cancel--> Idle
//!  \--down elsewhere---------> Idle (not consumed)
//! ```
//!
//! The resize transitions only fire when
//! [`GestureConfig::resize_enabled`] is set. With resizing off a press in a
//! touch zone still wins the hit test, so it does *not* fall through to the
//! thumb body.
//!
//! # Invariants
//!
//! 1. Each transition depends only on the current state and the incoming
//!    event.
//! 2. After every event the thumb satisfies `0 <= position` and
//!    `position + length <= track.length()`.
//! 3. `Up` and `Cancel` always return the machine to `Idle`.
//! 4. Events received while `Idle` (other than a `Down` that hits) are never
//!    consumed, so the host can forward them to the underlying container.
//!
//! # Failure Modes
//!
//! - Dragging or resizing a thumb whose track was never assigned returns
//!   [`GeometryError::Detached`]. The machine is left in its active state; the
//!   next release still returns it to `Idle`.

use bitflags::bitflags;

use crate::error::GeometryError;
use crate::event::{PointerEvent, PointerEventKind};
use crate::geometry::{Axis, Span, ThumbGeometry};
use crate::{debug, trace};

// ---------------------------------------------------------------------------
// Configuration
// ---------------------------------------------------------------------------

/// Default height of each resize touch zone, in pixels.
pub const DEFAULT_TOUCH_ZONE_HEIGHT: f32 = 80.0;

/// Default distance each touch zone is pushed away from the thumb, in pixels.
pub const DEFAULT_TOUCH_ZONE_OFFSET: f32 = 80.0;

/// Geometry of the invisible resize bands around the thumb.
///
/// The top band spans `start - top_offset ..= start + top_height - top_offset`
/// and the bottom band spans
/// `end - bottom_height + bottom_offset ..= end + bottom_offset`. Negative
/// values are treated as zero.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TouchZoneConfig {
    /// Height of the band at the leading edge.
    pub top_height: f32,
    /// How far the leading band is shifted away from the thumb.
    pub top_offset: f32,
    /// Height of the band at the trailing edge.
    pub bottom_height: f32,
    /// How far the trailing band is shifted away from the thumb.
    pub bottom_offset: f32,
}

impl Default for TouchZoneConfig {
    fn default() -> Self {
        Self {
            top_height: DEFAULT_TOUCH_ZONE_HEIGHT,
            top_offset: DEFAULT_TOUCH_ZONE_OFFSET,
            bottom_height: DEFAULT_TOUCH_ZONE_HEIGHT,
            bottom_offset: DEFAULT_TOUCH_ZONE_OFFSET,
        }
    }
}

impl TouchZoneConfig {
    /// Same height and offset for both bands.
    #[must_use]
    pub const fn uniform(height: f32, offset: f32) -> Self {
        Self {
            top_height: height,
            top_offset: offset,
            bottom_height: height,
            bottom_offset: offset,
        }
    }

    /// Set the leading band.
    #[must_use]
    pub const fn top(mut self, height: f32, offset: f32) -> Self {
        self.top_height = height;
        self.top_offset = offset;
        self
    }

    /// Set the trailing band.
    #[must_use]
    pub const fn bottom(mut self, height: f32, offset: f32) -> Self {
        self.bottom_height = height;
        self.bottom_offset = offset;
        self
    }
}

/// Tuning for the gesture controller.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct GestureConfig {
    /// Axis the thumb moves along.
    pub axis: Axis,
    /// Resize band geometry.
    pub touch_zones: TouchZoneConfig,
    /// Whether presses in a touch zone start a resize (default: off).
    pub resize_enabled: bool,
}

impl GestureConfig {
    /// Set the scroll axis.
    #[must_use]
    pub const fn axis(mut self, axis: Axis) -> Self {
        self.axis = axis;
        self
    }

    /// Set the touch zone geometry.
    #[must_use]
    pub const fn touch_zones(mut self, zones: TouchZoneConfig) -> Self {
        self.touch_zones = zones;
        self
    }

    /// Enable or disable resize gestures.
    #[must_use]
    pub const fn resize_enabled(mut self, enabled: bool) -> Self {
        self.resize_enabled = enabled;
        self
    }
}

// ---------------------------------------------------------------------------
// Touch zones
// ---------------------------------------------------------------------------

/// Which part of the thumb a press landed on.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ZoneHit {
    /// The band around the leading edge.
    ResizeTop,
    /// The band around the trailing edge.
    ResizeBottom,
    /// The thumb itself.
    Body,
}

/// Hit-test bands derived from a thumb snapshot. Never stored; recomputed on
/// every press.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TouchZones {
    pub top: Span,
    pub bottom: Span,
    pub body: Span,
}

impl TouchZones {
    /// Compute the bands around `thumb`.
    #[must_use]
    pub fn around(thumb: Span, config: &TouchZoneConfig) -> Self {
        let top_height = config.top_height.max(0.0);
        let top_offset = config.top_offset.max(0.0);
        let bottom_height = config.bottom_height.max(0.0);
        let bottom_offset = config.bottom_offset.max(0.0);
        let end = thumb.end();
        Self {
            top: Span::new(thumb.start - top_offset, top_height),
            bottom: Span::from_edges(end - bottom_height + bottom_offset, end + bottom_offset),
            body: thumb,
        }
    }

    /// First match wins, in the order top band, bottom band, body.
    #[must_use]
    pub fn hit_test(&self, coord: f32) -> Option<ZoneHit> {
        if self.top.contains(coord) {
            Some(ZoneHit::ResizeTop)
        } else if self.bottom.contains(coord) {
            Some(ZoneHit::ResizeBottom)
        } else if self.body.contains(coord) {
            Some(ZoneHit::Body)
        } else {
            None
        }
    }
}

// ---------------------------------------------------------------------------
// State and effects
// ---------------------------------------------------------------------------

/// Lifecycle state of the gesture machine.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum GestureState {
    #[default]
    Idle,
    Dragging,
    ResizingTop,
    ResizingBottom,
}

impl GestureState {
    /// Whether a pointer session owns the thumb.
    #[must_use]
    pub const fn is_active(self) -> bool {
        !matches!(self, Self::Idle)
    }

    /// Whether either resize edge is being moved.
    #[must_use]
    pub const fn is_resizing(self) -> bool {
        matches!(self, Self::ResizingTop | Self::ResizingBottom)
    }
}

bitflags! {
    /// Side effects of handling one pointer event.
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
    pub struct GestureEffects: u8 {
        /// The event was handled; do not forward it to the container.
        const CONSUMED = 0b0001;
        /// The thumb position changed.
        const MOVED    = 0b0010;
        /// The thumb length changed.
        const RESIZED  = 0b0100;
        /// Visual state changed (highlight on or off).
        const REDRAW   = 0b1000;
    }
}

impl GestureEffects {
    /// Whether the event was consumed.
    #[must_use]
    pub const fn consumed(self) -> bool {
        self.contains(Self::CONSUMED)
    }

    /// Whether the thumb geometry changed and the document should follow.
    #[must_use]
    pub const fn thumb_changed(self) -> bool {
        self.intersects(Self::MOVED.union(Self::RESIZED))
    }
}

/// Per-press snapshot, discarded on release.
#[derive(Debug, Clone, Copy, PartialEq)]
struct GestureSession {
    /// Thumb bounds at press time.
    origin: Span,
    /// Screen coordinate of the press along the axis.
    initial_pointer: f32,
    /// `origin.start - initial_pointer`; adding it to the live pointer gives
    /// the thumb's leading edge.
    baseline: f32,
}

// ---------------------------------------------------------------------------
// GestureController
// ---------------------------------------------------------------------------

/// Pointer state machine for dragging and resizing the thumb.
///
/// Call [`handle`](GestureController::handle) for each pointer event in
/// delivery order.
#[derive(Debug, Clone)]
pub struct GestureController {
    config: GestureConfig,
    state: GestureState,
    session: Option<GestureSession>,
    content_offset: f32,
}

impl GestureController {
    /// Create an idle controller.
    #[must_use]
    pub fn new(config: GestureConfig) -> Self {
        Self {
            config,
            state: GestureState::Idle,
            session: None,
            content_offset: 0.0,
        }
    }

    /// Process one pointer event.
    ///
    /// # Errors
    ///
    /// Returns [`GeometryError::Detached`] if a drag or resize tries to move
    /// a thumb that has no track.
    pub fn handle(
        &mut self,
        event: &PointerEvent,
        thumb: &mut ThumbGeometry,
    ) -> Result<GestureEffects, GeometryError> {
        match event.kind {
            PointerEventKind::Down => Ok(self.on_pointer_down(event, thumb)),
            PointerEventKind::Move => self.on_pointer_move(event, thumb),
            PointerEventKind::Up | PointerEventKind::Cancel => Ok(self.on_pointer_release()),
        }
    }

    /// Current state.
    #[inline]
    #[must_use]
    pub const fn state(&self) -> GestureState {
        self.state
    }

    /// Whether the thumb is being dragged.
    #[inline]
    #[must_use]
    pub const fn is_dragging(&self) -> bool {
        matches!(self.state, GestureState::Dragging)
    }

    /// Whether an edge of the thumb is being dragged.
    #[inline]
    #[must_use]
    pub const fn is_resizing(&self) -> bool {
        self.state.is_resizing()
    }

    /// Bands that a press would be tested against for the given thumb.
    #[must_use]
    pub fn touch_zones(&self, thumb: &ThumbGeometry) -> TouchZones {
        TouchZones::around(thumb.span(), &self.config.touch_zones)
    }

    /// The widget's own scroll offset, added to local coordinates before
    /// hit testing.
    #[inline]
    #[must_use]
    pub const fn content_offset(&self) -> f32 {
        self.content_offset
    }

    /// Update the widget's own scroll offset.
    pub fn set_content_offset(&mut self, offset: f32) {
        self.content_offset = offset;
    }

    /// Drop any active session and return to `Idle`.
    ///
    /// Returns the state that was abandoned, or `None` if already idle.
    pub fn reset(&mut self) -> Option<GestureState> {
        let from = self.state;
        self.state = GestureState::Idle;
        self.session = None;
        from.is_active().then_some(from)
    }

    /// Get a reference to the current configuration.
    #[inline]
    #[must_use]
    pub const fn config(&self) -> &GestureConfig {
        &self.config
    }

    /// Update the configuration. An active session keeps running.
    pub fn set_config(&mut self, config: GestureConfig) {
        self.config = config;
    }
}

impl Default for GestureController {
    fn default() -> Self {
        Self::new(GestureConfig::default())
    }
}

// ---------------------------------------------------------------------------
// Internal event handlers
// ---------------------------------------------------------------------------

impl GestureController {
    fn on_pointer_down(&mut self, event: &PointerEvent, thumb: &ThumbGeometry) -> GestureEffects {
        if self.reset().is_some() {
            debug!("pointer down during active gesture, restarting");
        }

        let axis = self.config.axis;
        let origin = thumb.span();
        let zones = TouchZones::around(origin, &self.config.touch_zones);
        let coord = axis.along(event.local) + self.content_offset;

        let next = match zones.hit_test(coord) {
            Some(ZoneHit::ResizeTop) if self.config.resize_enabled => GestureState::ResizingTop,
            Some(ZoneHit::ResizeBottom) if self.config.resize_enabled => {
                GestureState::ResizingBottom
            }
            Some(ZoneHit::Body) => GestureState::Dragging,
            _ => GestureState::Idle,
        };

        if !next.is_active() {
            trace!(coord, "pointer down missed thumb");
            return GestureEffects::empty();
        }

        let initial_pointer = axis.along(event.screen);
        self.session = Some(GestureSession {
            origin,
            initial_pointer,
            baseline: origin.start - initial_pointer,
        });
        self.state = next;
        debug!(state = ?next, coord, "gesture started");
        GestureEffects::CONSUMED | GestureEffects::REDRAW
    }

    fn on_pointer_move(
        &mut self,
        event: &PointerEvent,
        thumb: &mut ThumbGeometry,
    ) -> Result<GestureEffects, GeometryError> {
        let Some(session) = self.session else {
            return Ok(GestureEffects::empty());
        };
        let track = thumb.track().ok_or(GeometryError::Detached)?;
        let pointer = self.config.axis.along(event.screen);
        let before = thumb.span();

        match self.state {
            GestureState::Idle => return Ok(GestureEffects::empty()),
            GestureState::Dragging => {
                let target = drag_target(
                    pointer + session.baseline,
                    session.origin.length,
                    track.length(),
                );
                thumb.set_position(target)?;
            }
            GestureState::ResizingTop => {
                let fixed_end = session.origin.end();
                let top = (pointer + session.baseline)
                    .min(fixed_end - thumb.min_length())
                    .max(0.0);
                thumb.set_span(Span::from_edges(top, fixed_end))?;
            }
            GestureState::ResizingBottom => {
                let start = session.origin.start;
                let end = (session.origin.end() + (pointer - session.initial_pointer))
                    .max(start + thumb.min_length())
                    .min(track.length());
                thumb.set_span(Span::from_edges(start, end))?;
            }
        }

        let after = thumb.span();
        let mut effects = GestureEffects::CONSUMED;
        if after.start != before.start {
            effects |= GestureEffects::MOVED;
        }
        if after.length != before.length {
            effects |= GestureEffects::RESIZED | GestureEffects::REDRAW;
        }
        trace!(state = ?self.state, position = after.start, length = after.length, "thumb moved");
        Ok(effects)
    }

    fn on_pointer_release(&mut self) -> GestureEffects {
        let from = self.state;
        self.state = GestureState::Idle;
        self.session = None;

        match from {
            GestureState::Idle => GestureEffects::empty(),
            GestureState::Dragging => {
                debug!("drag ended");
                GestureEffects::CONSUMED
            }
            GestureState::ResizingTop | GestureState::ResizingBottom => {
                debug!(?from, "resize ended");
                GestureEffects::CONSUMED | GestureEffects::REDRAW
            }
        }
    }
}

/// Leading edge for a dragged thumb.
///
/// Below the start snaps to zero. Past the end the thumb is shifted back by
/// exactly the overshoot, which lands its trailing edge on the track end.
fn drag_target(candidate: f32, length: f32, track_length: f32) -> f32 {
    if candidate <= 0.0 {
        return 0.0;
    }
    let end = candidate + length;
    if end > track_length {
        candidate - (end - track_length)
    } else {
        candidate
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;
    use crate::geometry::{Point, Track};

    /// Track 1000px, thumb 100px at 200: body 200..=300, top band 120..=200,
    /// bottom band 300..=380.
    fn thumb_at(position: f32) -> ThumbGeometry {
        let mut thumb = ThumbGeometry::new(100.0, 1.0);
        thumb.set_track(Track::from_length(1000.0).unwrap());
        thumb.set_position(position).unwrap();
        thumb
    }

    fn resizing() -> GestureController {
        GestureController::new(GestureConfig::default().resize_enabled(true))
    }

    // --- Touch zones ---

    #[test]
    fn zones_follow_offsets() {
        let zones = TouchZones::around(Span::new(200.0, 100.0), &TouchZoneConfig::default());
        assert_eq!(zones.top, Span::new(120.0, 80.0));
        assert_eq!(zones.bottom, Span::new(300.0, 80.0));
        assert_eq!(zones.body, Span::new(200.0, 100.0));
    }

    #[test]
    fn zone_priority_is_top_bottom_body() {
        let zones = TouchZones::around(Span::new(200.0, 100.0), &TouchZoneConfig::uniform(60.0, 10.0));
        // Top band 190..=250 overlaps the body; top wins.
        assert_eq!(zones.hit_test(220.0), Some(ZoneHit::ResizeTop));
        // Bottom band 250..=310; exact overlap at 250 still goes to top.
        assert_eq!(zones.hit_test(250.0), Some(ZoneHit::ResizeTop));
        assert_eq!(zones.hit_test(280.0), Some(ZoneHit::ResizeBottom));
        assert_eq!(zones.hit_test(400.0), None);
    }

    #[test]
    fn negative_zone_values_are_zeroed() {
        let config = TouchZoneConfig::uniform(-5.0, -5.0);
        let zones = TouchZones::around(Span::new(200.0, 100.0), &config);
        assert_eq!(zones.top, Span::new(200.0, 0.0));
        assert_eq!(zones.bottom, Span::new(300.0, 0.0));
        assert_eq!(zones.hit_test(250.0), Some(ZoneHit::Body));
    }

    // --- Press ---

    #[test]
    fn press_on_body_starts_drag() {
        let mut gc = GestureController::default();
        let mut thumb = thumb_at(200.0);
        let fx = gc.handle(&PointerEvent::down(10.0, 250.0), &mut thumb).unwrap();
        assert!(fx.consumed());
        assert!(fx.contains(GestureEffects::REDRAW));
        assert_eq!(gc.state(), GestureState::Dragging);
    }

    #[test]
    fn press_outside_thumb_is_not_consumed() {
        let mut gc = GestureController::default();
        let mut thumb = thumb_at(200.0);
        let fx = gc.handle(&PointerEvent::down(10.0, 600.0), &mut thumb).unwrap();
        assert!(fx.is_empty());
        assert_eq!(gc.state(), GestureState::Idle);
    }

    #[test]
    fn press_in_disabled_top_zone_does_not_drag() {
        let mut gc = GestureController::default();
        let mut thumb = thumb_at(200.0);
        // 200.0 is both the body's leading edge and inside the top band.
        let fx = gc.handle(&PointerEvent::down(0.0, 200.0), &mut thumb).unwrap();
        assert!(!fx.consumed());
        assert_eq!(gc.state(), GestureState::Idle);

        let fx = gc.handle(&PointerEvent::down(0.0, 150.0), &mut thumb).unwrap();
        assert!(!fx.consumed());
        assert_eq!(gc.state(), GestureState::Idle);
    }

    #[test]
    fn content_offset_shifts_hit_test() {
        let mut gc = GestureController::default();
        gc.set_content_offset(100.0);
        let mut thumb = thumb_at(200.0);
        // Local 150 + offset 100 = 250, inside the body.
        let fx = gc.handle(&PointerEvent::down(0.0, 150.0), &mut thumb).unwrap();
        assert!(fx.consumed());
        assert!(gc.is_dragging());
    }

    #[test]
    fn hit_test_uses_local_drag_uses_screen() {
        let mut gc = GestureController::default();
        let mut thumb = thumb_at(200.0);
        let origin = Point::new(0.0, 500.0);
        let down = PointerEvent::down(0.0, 750.0).with_widget_origin(origin);
        assert!(gc.handle(&down, &mut thumb).unwrap().consumed());

        let mv = PointerEvent::moved(0.0, 790.0).with_widget_origin(origin);
        gc.handle(&mv, &mut thumb).unwrap();
        assert_eq!(thumb.position(), 240.0);
    }

    #[test]
    fn horizontal_axis_reads_x() {
        let mut gc = GestureController::new(GestureConfig::default().axis(Axis::Horizontal));
        let mut thumb = thumb_at(200.0);
        assert!(
            gc.handle(&PointerEvent::down(250.0, 9999.0), &mut thumb)
                .unwrap()
                .consumed()
        );
        gc.handle(&PointerEvent::moved(300.0, 0.0), &mut thumb).unwrap();
        assert_eq!(thumb.position(), 250.0);
    }

    // --- Drag ---

    #[test]
    fn drag_follows_pointer_delta() {
        let mut gc = GestureController::default();
        let mut thumb = thumb_at(200.0);
        gc.handle(&PointerEvent::down(0.0, 250.0), &mut thumb).unwrap();

        let fx = gc.handle(&PointerEvent::moved(0.0, 200.0), &mut thumb).unwrap();
        assert!(fx.consumed());
        assert!(fx.contains(GestureEffects::MOVED));
        assert!(!fx.contains(GestureEffects::RESIZED));
        assert_eq!(thumb.position(), 150.0);

        let fx = gc.handle(&PointerEvent::up(0.0, 200.0), &mut thumb).unwrap();
        assert_eq!(fx, GestureEffects::CONSUMED);
        assert_eq!(gc.state(), GestureState::Idle);
        assert_eq!(thumb.position(), 150.0);
    }

    #[test]
    fn drag_clamps_at_start() {
        let mut gc = GestureController::default();
        let mut thumb = thumb_at(30.0);
        gc.handle(&PointerEvent::down(0.0, 60.0), &mut thumb).unwrap();
        gc.handle(&PointerEvent::moved(0.0, -500.0), &mut thumb).unwrap();
        assert_eq!(thumb.position(), 0.0);
    }

    #[test]
    fn drag_absorbs_overshoot_at_end() {
        let mut gc = GestureController::default();
        let mut thumb = thumb_at(800.0);
        gc.handle(&PointerEvent::down(0.0, 850.0), &mut thumb).unwrap();
        gc.handle(&PointerEvent::moved(0.0, 1400.0), &mut thumb).unwrap();
        assert_eq!(thumb.position(), 900.0);
        assert_eq!(thumb.end(), 1000.0);
    }

    #[test]
    fn drag_without_movement_reports_no_move() {
        let mut gc = GestureController::default();
        let mut thumb = thumb_at(200.0);
        gc.handle(&PointerEvent::down(0.0, 250.0), &mut thumb).unwrap();
        let fx = gc.handle(&PointerEvent::moved(0.0, 250.0), &mut thumb).unwrap();
        assert_eq!(fx, GestureEffects::CONSUMED);
    }

    #[test]
    fn drag_target_math() {
        assert_eq!(drag_target(-3.0, 100.0, 1000.0), 0.0);
        assert_eq!(drag_target(0.0, 100.0, 1000.0), 0.0);
        assert_eq!(drag_target(450.0, 100.0, 1000.0), 450.0);
        assert_eq!(drag_target(950.0, 100.0, 1000.0), 900.0);
    }

    #[test]
    fn drag_on_detached_thumb_fails_fast() {
        let mut gc = GestureController::default();
        let mut thumb = ThumbGeometry::new(100.0, 1.0);
        gc.handle(&PointerEvent::down(0.0, 50.0), &mut thumb).unwrap();
        assert!(gc.is_dragging());
        assert_eq!(
            gc.handle(&PointerEvent::moved(0.0, 60.0), &mut thumb),
            Err(GeometryError::Detached)
        );
        assert!(gc.handle(&PointerEvent::up(0.0, 60.0), &mut thumb).unwrap().consumed());
        assert_eq!(gc.state(), GestureState::Idle);
    }

    // --- Release ---

    #[test]
    fn cancel_behaves_like_up() {
        let mut gc = GestureController::default();
        let mut thumb = thumb_at(200.0);
        gc.handle(&PointerEvent::down(0.0, 250.0), &mut thumb).unwrap();
        gc.handle(&PointerEvent::moved(0.0, 500.0), &mut thumb).unwrap();
        let fx = gc.handle(&PointerEvent::cancel(0.0, 500.0), &mut thumb).unwrap();
        assert_eq!(fx, GestureEffects::CONSUMED);
        assert_eq!(gc.state(), GestureState::Idle);
        // Cancel does not roll back; the thumb stays where it was dragged.
        assert_eq!(thumb.position(), 450.0);
    }

    #[test]
    fn events_while_idle_fall_through() {
        let mut gc = GestureController::default();
        let mut thumb = thumb_at(200.0);
        for ev in [
            PointerEvent::moved(0.0, 250.0),
            PointerEvent::up(0.0, 250.0),
            PointerEvent::cancel(0.0, 250.0),
        ] {
            assert!(gc.handle(&ev, &mut thumb).unwrap().is_empty());
        }
        assert_eq!(thumb.position(), 200.0);
    }

    #[test]
    fn second_press_restarts_session() {
        let mut gc = GestureController::default();
        let mut thumb = thumb_at(200.0);
        gc.handle(&PointerEvent::down(0.0, 250.0), &mut thumb).unwrap();
        gc.handle(&PointerEvent::moved(0.0, 350.0), &mut thumb).unwrap();
        assert_eq!(thumb.position(), 300.0);

        // Missing release; a new press snapshots the current thumb.
        gc.handle(&PointerEvent::down(0.0, 310.0), &mut thumb).unwrap();
        gc.handle(&PointerEvent::moved(0.0, 320.0), &mut thumb).unwrap();
        assert_eq!(thumb.position(), 310.0);
    }

    #[test]
    fn reset_reports_abandoned_state() {
        let mut gc = GestureController::default();
        let mut thumb = thumb_at(200.0);
        assert_eq!(gc.reset(), None);
        gc.handle(&PointerEvent::down(0.0, 250.0), &mut thumb).unwrap();
        assert_eq!(gc.reset(), Some(GestureState::Dragging));
        assert_eq!(gc.state(), GestureState::Idle);
    }

    // --- Resize ---

    #[test]
    fn resize_top_keeps_bottom_fixed() {
        let mut gc = resizing();
        let mut thumb = thumb_at(200.0);
        let fx = gc.handle(&PointerEvent::down(0.0, 190.0), &mut thumb).unwrap();
        assert!(fx.consumed());
        assert_eq!(gc.state(), GestureState::ResizingTop);

        let fx = gc.handle(&PointerEvent::moved(0.0, 160.0), &mut thumb).unwrap();
        assert!(fx.contains(GestureEffects::MOVED | GestureEffects::RESIZED));
        assert_eq!(thumb.position(), 170.0);
        assert_eq!(thumb.end(), 300.0);
    }

    #[test]
    fn resize_top_cannot_cross_bottom() {
        let mut gc = resizing();
        let mut thumb = thumb_at(200.0);
        gc.handle(&PointerEvent::down(0.0, 190.0), &mut thumb).unwrap();
        gc.handle(&PointerEvent::moved(0.0, 900.0), &mut thumb).unwrap();
        assert_eq!(thumb.length(), 1.0);
        assert_eq!(thumb.end(), 300.0);
    }

    #[test]
    fn resize_top_stops_at_track_start() {
        let mut gc = resizing();
        let mut thumb = thumb_at(200.0);
        gc.handle(&PointerEvent::down(0.0, 190.0), &mut thumb).unwrap();
        gc.handle(&PointerEvent::moved(0.0, -400.0), &mut thumb).unwrap();
        assert_eq!(thumb.position(), 0.0);
        assert_eq!(thumb.end(), 300.0);
    }

    #[test]
    fn resize_bottom_keeps_top_fixed() {
        let mut gc = resizing();
        let mut thumb = thumb_at(200.0);
        gc.handle(&PointerEvent::down(0.0, 310.0), &mut thumb).unwrap();
        assert_eq!(gc.state(), GestureState::ResizingBottom);

        let fx = gc.handle(&PointerEvent::moved(0.0, 350.0), &mut thumb).unwrap();
        assert!(fx.contains(GestureEffects::RESIZED));
        assert!(!fx.contains(GestureEffects::MOVED));
        assert_eq!(thumb.position(), 200.0);
        assert_eq!(thumb.length(), 140.0);
    }

    #[test]
    fn resize_bottom_limits() {
        let mut gc = resizing();
        let mut thumb = thumb_at(200.0);
        gc.handle(&PointerEvent::down(0.0, 310.0), &mut thumb).unwrap();
        gc.handle(&PointerEvent::moved(0.0, -1000.0), &mut thumb).unwrap();
        assert_eq!(thumb.length(), 1.0);
        assert_eq!(thumb.position(), 200.0);

        gc.handle(&PointerEvent::moved(0.0, 5000.0), &mut thumb).unwrap();
        assert_eq!(thumb.end(), 1000.0);
        assert_eq!(thumb.position(), 200.0);
    }

    #[test]
    fn resize_release_requests_redraw() {
        let mut gc = resizing();
        let mut thumb = thumb_at(200.0);
        gc.handle(&PointerEvent::down(0.0, 310.0), &mut thumb).unwrap();
        let fx = gc.handle(&PointerEvent::up(0.0, 310.0), &mut thumb).unwrap();
        assert_eq!(fx, GestureEffects::CONSUMED | GestureEffects::REDRAW);
        assert!(!gc.is_resizing());
    }
}
