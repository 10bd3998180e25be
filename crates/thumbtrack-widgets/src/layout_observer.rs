#![forbid(unsafe_code)]

//! Recomputes document extents and thumb length on each layout pass.
//!
//! Writing a new thumb length makes the host lay the scrollbar out again.
//! That follow-up pass is the observer's own echo, so after a length change
//! exactly one pass is skipped. [`LayoutObserver::rearm`] drops a pending
//! skip when the host knows the next pass has an external cause (the
//! document's data changed).

use thumbtrack_core::geometry::{Axis, ThumbGeometry};
use thumbtrack_core::trace;

use crate::document::DocumentView;
use crate::mapper::{DocumentMetrics, compute_thumb_length};

/// Result of one layout callback.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum LayoutPass {
    /// The pass was the echo of a previous length change.
    Skipped,
    /// The thumb has no track yet.
    NoTrack,
    /// Extents were recomputed and the thumb length written.
    Measured {
        metrics: DocumentMetrics,
        thumb_length: f32,
        /// Whether the thumb length differs from before the pass.
        changed: bool,
    },
}

impl LayoutPass {
    /// Metrics from a measured pass.
    #[must_use]
    pub const fn metrics(&self) -> Option<DocumentMetrics> {
        match self {
            Self::Measured { metrics, .. } => Some(*metrics),
            _ => None,
        }
    }
}

/// One-shot-guarded layout callback handler.
#[derive(Debug, Clone, Default)]
pub struct LayoutObserver {
    axis: Axis,
    skip_next: bool,
}

impl LayoutObserver {
    #[must_use]
    pub const fn new(axis: Axis) -> Self {
        Self {
            axis,
            skip_next: false,
        }
    }

    /// Estimate document extents from the first visible item.
    ///
    /// Every item is assumed to share that item's extent. An empty or
    /// unlaid-out document reports zero content.
    #[must_use]
    pub fn measure(&self, document: &dyn DocumentView) -> DocumentMetrics {
        let viewport = document.viewport_extent(self.axis);
        match document.first_visible_item_extent(self.axis) {
            Some(extent) => DocumentMetrics::uniform(extent, document.item_count(), viewport),
            None => DocumentMetrics::new(0.0, viewport),
        }
    }

    /// Handle a layout pass of the document.
    pub fn on_layout(&mut self, document: &dyn DocumentView, thumb: &mut ThumbGeometry) -> LayoutPass {
        if std::mem::take(&mut self.skip_next) {
            trace!("layout pass skipped");
            return LayoutPass::Skipped;
        }
        let Some(track) = thumb.track() else {
            return LayoutPass::NoTrack;
        };

        let metrics = self.measure(document);
        let previous = thumb.length();
        thumb.set_length(compute_thumb_length(metrics, track.length(), thumb.min_length()));
        let thumb_length = thumb.length();
        let changed = thumb_length != previous;
        self.skip_next = changed;

        trace!(
            content = metrics.content_extent,
            viewport = metrics.viewport_extent,
            thumb_length,
            changed,
            "layout pass measured"
        );
        LayoutPass::Measured {
            metrics,
            thumb_length,
            changed,
        }
    }

    /// Forget a pending skip.
    pub fn rearm(&mut self) {
        self.skip_next = false;
    }

    /// Whether the next pass will be skipped.
    #[must_use]
    pub const fn is_skip_pending(&self) -> bool {
        self.skip_next
    }
}
