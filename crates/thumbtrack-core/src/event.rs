#![forbid(unsafe_code)]

//! Canonical pointer event types.
//!
//! # Design Notes
//!
//! - Every event carries two coordinates. `screen` is absolute and stable
//!   while the widget itself moves, so drag math uses it. `local` is relative
//!   to the widget's top-left corner and is what hit tests use.
//! - `Cancel` is handled exactly like `Up` by the gesture machine; the
//!   distinction is kept for hosts that want to log it.

use crate::geometry::Point;

/// Phase of a pointer interaction.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PointerEventKind {
    /// Finger or button went down.
    Down,
    /// Pointer moved while down.
    Move,
    /// Finger or button released.
    Up,
    /// The platform aborted the interaction.
    Cancel,
}

impl PointerEventKind {
    /// Whether this phase ends a pointer session.
    #[must_use]
    pub const fn is_release(self) -> bool {
        matches!(self, Self::Up | Self::Cancel)
    }
}

/// A pointer event delivered to the scrollbar.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PointerEvent {
    /// Phase of the interaction.
    pub kind: PointerEventKind,
    /// Absolute screen coordinate.
    pub screen: Point,
    /// Widget-local coordinate.
    pub local: Point,
}

impl PointerEvent {
    /// Create an event with explicit screen and local coordinates.
    #[must_use]
    pub const fn new(kind: PointerEventKind, screen: Point, local: Point) -> Self {
        Self {
            kind,
            screen,
            local,
        }
    }

    /// Create an event for a widget sitting at the screen origin, where the
    /// screen and local coordinates coincide.
    #[must_use]
    pub const fn at(kind: PointerEventKind, x: f32, y: f32) -> Self {
        let p = Point::new(x, y);
        Self::new(kind, p, p)
    }

    /// Pointer-down at `(x, y)` with coincident coordinates.
    #[must_use]
    pub const fn down(x: f32, y: f32) -> Self {
        Self::at(PointerEventKind::Down, x, y)
    }

    /// Pointer-move to `(x, y)` with coincident coordinates.
    #[must_use]
    pub const fn moved(x: f32, y: f32) -> Self {
        Self::at(PointerEventKind::Move, x, y)
    }

    /// Pointer-up at `(x, y)` with coincident coordinates.
    #[must_use]
    pub const fn up(x: f32, y: f32) -> Self {
        Self::at(PointerEventKind::Up, x, y)
    }

    /// Pointer-cancel at `(x, y)` with coincident coordinates.
    #[must_use]
    pub const fn cancel(x: f32, y: f32) -> Self {
        Self::at(PointerEventKind::Cancel, x, y)
    }

    /// Same event with the widget shifted so that `local = screen - origin`.
    #[must_use]
    pub fn with_widget_origin(mut self, origin: Point) -> Self {
        self.local = Point::new(self.screen.x - origin.x, self.screen.y - origin.y);
        self
    }
}
