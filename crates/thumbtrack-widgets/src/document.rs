#![forbid(unsafe_code)]

//! Capabilities the scrollbar needs from the document it controls.
//!
//! The widget never looks inside a concrete list or layout type. Hosts adapt
//! their document to two small traits:
//!
//! - [`ScrollableDocument`]: offset, viewport size, and relative scrolling.
//! - [`ItemExtentSource`]: first-visible-item extent and item count, from
//!   which content length is estimated.
//!
//! [`DocumentView`] is the union the widget stores. [`ListDocument`] is a
//! ready-made adapter for lists of uniformly sized items.

use thiserror::Error;
use thumbtrack_core::geometry::{Axis, Point};

/// Failure reported by a document adapter.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum DocumentError {
    /// The document refused the scroll command.
    #[error("scroll command rejected: {reason}")]
    Rejected { reason: String },
}

impl DocumentError {
    #[must_use]
    pub fn rejected(reason: impl Into<String>) -> Self {
        Self::Rejected {
            reason: reason.into(),
        }
    }
}

/// Scroll distance a document actually moved.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct ScrollDelta {
    pub dx: f32,
    pub dy: f32,
}

impl ScrollDelta {
    #[must_use]
    pub const fn new(dx: f32, dy: f32) -> Self {
        Self { dx, dy }
    }

    /// Component along `axis`.
    #[must_use]
    pub const fn along(self, axis: Axis) -> f32 {
        axis.delta(self.dx, self.dy)
    }
}

/// A surface that scrolls.
pub trait ScrollableDocument {
    /// Current absolute offset.
    fn scroll_offset(&self) -> Point;

    /// Visible window length along `axis`.
    fn viewport_extent(&self, axis: Axis) -> f32;

    /// Scroll by a relative amount and report how far the document moved.
    ///
    /// The returned delta is what the document's own scroll callback would
    /// have reported; documents that clamp at their edges return the clamped
    /// distance.
    fn scroll_by(&mut self, dx: f32, dy: f32) -> Result<ScrollDelta, DocumentError>;
}

/// A document made of items laid out along the scroll axis.
pub trait ItemExtentSource {
    /// Extent of the first visible item, or `None` when nothing is laid out.
    fn first_visible_item_extent(&self, axis: Axis) -> Option<f32>;

    /// Total number of items, laid out or not.
    fn item_count(&self) -> usize;
}

/// Everything the scrollbar needs from a document.
pub trait DocumentView: ScrollableDocument + ItemExtentSource {}

impl<T: ScrollableDocument + ItemExtentSource + ?Sized> DocumentView for T {}

/// A list of equally sized items scrolled along one axis.
///
/// Offsets are clamped to `[0, item_count * item_extent - viewport_extent]`.
#[derive(Debug, Clone, PartialEq)]
pub struct ListDocument {
    axis: Axis,
    item_count: usize,
    item_extent: f32,
    viewport_extent: f32,
    offset: f32,
}

impl ListDocument {
    /// Create a list scrolled to the top.
    #[must_use]
    pub fn new(axis: Axis, item_count: usize, item_extent: f32, viewport_extent: f32) -> Self {
        Self {
            axis,
            item_count,
            item_extent: item_extent.max(0.0),
            viewport_extent: viewport_extent.max(0.0),
            offset: 0.0,
        }
    }

    /// Total content length.
    #[must_use]
    pub fn content_extent(&self) -> f32 {
        self.item_extent * self.item_count as f32
    }

    /// Largest legal offset.
    #[must_use]
    pub fn max_offset(&self) -> f32 {
        (self.content_extent() - self.viewport_extent).max(0.0)
    }

    /// Offset along the list's axis.
    #[must_use]
    pub const fn offset(&self) -> f32 {
        self.offset
    }

    /// Replace the item count, re-clamping the offset. Returns the distance
    /// the offset moved.
    pub fn set_item_count(&mut self, item_count: usize) -> f32 {
        self.item_count = item_count;
        let before = self.offset;
        self.offset = self.offset.min(self.max_offset());
        self.offset - before
    }

    /// Resize the viewport, re-clamping the offset. Returns the distance the
    /// offset moved.
    pub fn set_viewport_extent(&mut self, viewport_extent: f32) -> f32 {
        self.viewport_extent = viewport_extent.max(0.0);
        let before = self.offset;
        self.offset = self.offset.min(self.max_offset());
        self.offset - before
    }
}

impl ScrollableDocument for ListDocument {
    fn scroll_offset(&self) -> Point {
        let (x, y) = self.axis.compose(self.offset);
        Point::new(x, y)
    }

    fn viewport_extent(&self, axis: Axis) -> f32 {
        if axis == self.axis {
            self.viewport_extent
        } else {
            0.0
        }
    }

    fn scroll_by(&mut self, dx: f32, dy: f32) -> Result<ScrollDelta, DocumentError> {
        let requested = self.axis.delta(dx, dy);
        if !requested.is_finite() {
            return Err(DocumentError::rejected(format!(
                "non-finite scroll delta {requested}"
            )));
        }
        let before = self.offset;
        self.offset = (self.offset + requested).clamp(0.0, self.max_offset());
        let (dx, dy) = self.axis.compose(self.offset - before);
        Ok(ScrollDelta::new(dx, dy))
    }
}

impl ItemExtentSource for ListDocument {
    fn first_visible_item_extent(&self, axis: Axis) -> Option<f32> {
        (axis == self.axis && self.item_count > 0).then_some(self.item_extent)
    }

    fn item_count(&self) -> usize {
        self.item_count
    }
}
