#![forbid(unsafe_code)]

//! Conversions between document-scroll space and thumb-pixel space.
//!
//! # Mapping
//!
//! With `range = content_extent - viewport_extent` (the scrollable distance)
//! and `travel = track_length - thumb_length` (how far the thumb can move):
//!
//! ```text
//! thumb_position = scroll_offset / range * travel
//! scroll_offset  = thumb_position / travel * range
//! thumb_length   = track_length * viewport_extent / content_extent
//! ```
//!
//! # Degenerate inputs
//!
//! Both divisions are guarded. When the content fits in the viewport
//! (`range <= 0`), the viewport is empty, or the thumb already fills the
//! track (`travel <= 0`), there is nothing to map: the thumb sits at zero,
//! fills the track, and every thumb position maps to offset zero.

use thumbtrack_core::geometry::MIN_THUMB_LENGTH_FLOOR;

/// Extents of the document along the scroll axis.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct DocumentMetrics {
    /// Total content length in pixels.
    pub content_extent: f32,
    /// Visible window length in pixels.
    pub viewport_extent: f32,
}

impl DocumentMetrics {
    /// Create metrics.
    #[must_use]
    pub const fn new(content_extent: f32, viewport_extent: f32) -> Self {
        Self {
            content_extent,
            viewport_extent,
        }
    }

    /// Metrics for a list whose items all share one extent.
    ///
    /// This is an approximation for lists with variable item sizes; the
    /// extent of whichever item the caller sampled is assumed for all of them.
    #[must_use]
    pub fn uniform(item_extent: f32, item_count: usize, viewport_extent: f32) -> Self {
        Self::new(item_extent * item_count as f32, viewport_extent)
    }

    /// Scrollable distance, never negative.
    #[must_use]
    pub fn scroll_range(&self) -> f32 {
        (self.content_extent - self.viewport_extent).max(0.0)
    }

    /// Whether there is anything to scroll.
    #[must_use]
    pub fn is_scrollable(&self) -> bool {
        self.viewport_extent > 0.0
            && self.content_extent.is_finite()
            && self.content_extent > self.viewport_extent
    }

    /// `content_extent / viewport_extent`, or `None` for an empty viewport.
    #[must_use]
    pub fn ratio(&self) -> Option<f32> {
        (self.viewport_extent > 0.0).then(|| self.content_extent / self.viewport_extent)
    }
}

/// Length of a thumb whose share of the track equals the viewport's share of
/// the content.
///
/// Floored at `min_length` (itself floored at one pixel) and capped at the
/// track. Content that fits the viewport yields a thumb filling the track.
#[must_use]
pub fn compute_thumb_length(metrics: DocumentMetrics, track_length: f32, min_length: f32) -> f32 {
    let track_length = track_length.max(0.0);
    let min_length = min_length.max(MIN_THUMB_LENGTH_FLOOR);
    let raw = match metrics.ratio() {
        Some(ratio) if metrics.is_scrollable() => track_length / ratio,
        _ => track_length,
    };
    raw.max(min_length).min(track_length)
}

/// Both conversions for one snapshot of metrics and geometry.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CoordinateMapper {
    metrics: DocumentMetrics,
    track_length: f32,
    thumb_length: f32,
}

impl CoordinateMapper {
    /// Snapshot the inputs.
    #[must_use]
    pub const fn new(metrics: DocumentMetrics, track_length: f32, thumb_length: f32) -> Self {
        Self {
            metrics,
            track_length,
            thumb_length,
        }
    }

    /// How far the thumb can travel, never negative.
    #[must_use]
    pub fn thumb_travel(&self) -> f32 {
        (self.track_length - self.thumb_length).max(0.0)
    }

    /// Whether a thumb movement can translate into a document movement.
    #[must_use]
    pub fn is_mappable(&self) -> bool {
        self.metrics.is_scrollable() && self.thumb_travel() > 0.0
    }

    /// Thumb position for a document offset, clamped to `[0, travel]`.
    #[must_use]
    pub fn scroll_offset_to_thumb_position(&self, scroll_offset: f32) -> f32 {
        if !self.is_mappable() {
            return 0.0;
        }
        let travel = self.thumb_travel();
        let multiplier = scroll_offset / self.metrics.scroll_range();
        (multiplier * travel).clamp(0.0, travel)
    }

    /// Document offset for a thumb position.
    ///
    /// The position is clamped to `[0, travel]` first, so the result always
    /// lies in `[0, range]`.
    #[must_use]
    pub fn thumb_position_to_scroll_offset(&self, thumb_position: f32) -> f32 {
        if !self.is_mappable() {
            return 0.0;
        }
        let travel = self.thumb_travel();
        let multiplier = thumb_position.clamp(0.0, travel) / travel;
        multiplier * self.metrics.scroll_range()
    }

    /// The metrics this mapper was built from.
    #[must_use]
    pub const fn metrics(&self) -> DocumentMetrics {
        self.metrics
    }
}
