#![forbid(unsafe_code)]

//! Geometric primitives along a single scroll axis.
//!
//! The scrollbar only ever reasons about one dimension: where the thumb starts
//! along the track and how long it is. [`Axis`] projects two-dimensional
//! pointer coordinates and scroll deltas onto that dimension and back.
//!
//! # Invariants
//!
//! For a [`ThumbGeometry`] with a track assigned, after every mutation:
//!
//! 1. `length >= min_length` (unless the track itself is shorter).
//! 2. `0 <= position`.
//! 3. `position + length <= track.length()`.
//!
//! Violations are clamped away silently; callers never see an error for an
//! out-of-range value, only for mutating a thumb that has no track yet.

use crate::error::GeometryError;

/// Smallest thumb length any configuration may request, in pixels.
pub const MIN_THUMB_LENGTH_FLOOR: f32 = 1.0;

/// Scroll axis.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Axis {
    /// Top-to-bottom scrolling.
    #[default]
    Vertical,
    /// Left-to-right scrolling.
    Horizontal,
}

impl Axis {
    /// Component of `point` along this axis.
    #[inline]
    #[must_use]
    pub const fn along(self, point: Point) -> f32 {
        match self {
            Self::Vertical => point.y,
            Self::Horizontal => point.x,
        }
    }

    /// Component of a `(dx, dy)` delta along this axis.
    #[inline]
    #[must_use]
    pub const fn delta(self, dx: f32, dy: f32) -> f32 {
        match self {
            Self::Vertical => dy,
            Self::Horizontal => dx,
        }
    }

    /// Build a `(dx, dy)` delta that moves `amount` along this axis only.
    #[inline]
    #[must_use]
    pub const fn compose(self, amount: f32) -> (f32, f32) {
        match self {
            Self::Vertical => (0.0, amount),
            Self::Horizontal => (amount, 0.0),
        }
    }
}

/// A point in pixel coordinates.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Point {
    pub x: f32,
    pub y: f32,
}

impl Point {
    /// Create a new point.
    #[inline]
    #[must_use]
    pub const fn new(x: f32, y: f32) -> Self {
        Self { x, y }
    }

    /// Translate by a delta.
    #[inline]
    #[must_use]
    pub fn offset(self, dx: f32, dy: f32) -> Self {
        Self::new(self.x + dx, self.y + dy)
    }
}

/// A segment along one axis: `start..=start + length`.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Span {
    /// Leading edge.
    pub start: f32,
    /// Extent along the axis.
    pub length: f32,
}

impl Span {
    /// Create a new span.
    #[inline]
    #[must_use]
    pub const fn new(start: f32, length: f32) -> Self {
        Self { start, length }
    }

    /// Create a span from its two edges.
    #[inline]
    #[must_use]
    pub fn from_edges(start: f32, end: f32) -> Self {
        Self::new(start, end - start)
    }

    /// Trailing edge.
    #[inline]
    #[must_use]
    pub fn end(&self) -> f32 {
        self.start + self.length
    }

    /// Whether `point` lies on the span, both edges included.
    #[inline]
    #[must_use]
    pub fn contains(&self, point: f32) -> bool {
        point >= self.start && point <= self.end()
    }
}

/// The scrollbar's own bounds along the scroll axis.
///
/// Owned by the widget and replaced wholesale on every layout pass.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Track {
    origin: f32,
    length: f32,
}

impl Track {
    /// Create a track.
    ///
    /// # Errors
    ///
    /// Returns [`GeometryError::InvalidTrackLength`] if `length` is negative
    /// or not finite.
    pub fn new(origin: f32, length: f32) -> Result<Self, GeometryError> {
        if !length.is_finite() || length < 0.0 {
            return Err(GeometryError::InvalidTrackLength { length });
        }
        Ok(Self { origin, length })
    }

    /// Track starting at zero.
    pub fn from_length(length: f32) -> Result<Self, GeometryError> {
        Self::new(0.0, length)
    }

    /// Offset of the track within its parent.
    #[inline]
    #[must_use]
    pub const fn origin(&self) -> f32 {
        self.origin
    }

    /// Length of the track in pixels.
    #[inline]
    #[must_use]
    pub const fn length(&self) -> f32 {
        self.length
    }

    /// The track as a span in its own coordinate space.
    #[inline]
    #[must_use]
    pub const fn span(&self) -> Span {
        Span::new(0.0, self.length)
    }
}

/// The draggable thumb: a position and length along the track.
///
/// Rendering is somebody else's job; this type only stores the rectangle and
/// keeps it inside the track.
#[derive(Debug, Clone, PartialEq)]
pub struct ThumbGeometry {
    track: Option<Track>,
    position: f32,
    length: f32,
    min_length: f32,
}

impl ThumbGeometry {
    /// Create a detached thumb with the given initial and minimum lengths.
    ///
    /// `min_length` is floored at [`MIN_THUMB_LENGTH_FLOOR`].
    #[must_use]
    pub fn new(initial_length: f32, min_length: f32) -> Self {
        let min_length = min_length.max(MIN_THUMB_LENGTH_FLOOR);
        Self {
            track: None,
            position: 0.0,
            length: initial_length.max(min_length),
            min_length,
        }
    }

    /// The assigned track, if any.
    #[inline]
    #[must_use]
    pub const fn track(&self) -> Option<Track> {
        self.track
    }

    /// Assign (or replace) the track and re-clamp to it.
    pub fn set_track(&mut self, track: Track) {
        self.track = Some(track);
        self.length = self.clamp_length(self.length);
        self.position = self.clamp_position(self.position);
    }

    /// Current offset from the track origin.
    #[inline]
    #[must_use]
    pub const fn position(&self) -> f32 {
        self.position
    }

    /// Current length.
    #[inline]
    #[must_use]
    pub const fn length(&self) -> f32 {
        self.length
    }

    /// Minimum length the thumb will shrink to.
    #[inline]
    #[must_use]
    pub const fn min_length(&self) -> f32 {
        self.min_length
    }

    /// Position plus length.
    #[inline]
    #[must_use]
    pub fn end(&self) -> f32 {
        self.position + self.length
    }

    /// The thumb as a span.
    #[inline]
    #[must_use]
    pub const fn span(&self) -> Span {
        Span::new(self.position, self.length)
    }

    /// Largest legal position for the current length, or zero when detached.
    #[must_use]
    pub fn max_position(&self) -> f32 {
        self.track
            .map_or(0.0, |track| (track.length() - self.length).max(0.0))
    }

    /// Move the thumb, clamping it inside the track.
    ///
    /// # Errors
    ///
    /// Returns [`GeometryError::Detached`] if no track has been assigned.
    pub fn set_position(&mut self, position: f32) -> Result<(), GeometryError> {
        if self.track.is_none() {
            return Err(GeometryError::Detached);
        }
        self.position = self.clamp_position(position);
        Ok(())
    }

    /// Resize the thumb, keeping its position where possible.
    ///
    /// A detached thumb records the (floored) length so that it can be sized
    /// before the first layout pass.
    pub fn set_length(&mut self, length: f32) {
        self.length = self.clamp_length(length);
        if self.track.is_some() {
            self.position = self.clamp_position(self.position);
        }
    }

    /// Set both edges at once.
    ///
    /// Length is applied first so the position clamp sees the final length.
    pub fn set_span(&mut self, span: Span) -> Result<(), GeometryError> {
        if self.track.is_none() {
            return Err(GeometryError::Detached);
        }
        self.length = self.clamp_length(span.length);
        self.position = self.clamp_position(span.start);
        Ok(())
    }

    fn clamp_length(&self, length: f32) -> f32 {
        let length = if length.is_nan() { self.min_length } else { length };
        let floored = length.max(self.min_length);
        match self.track {
            Some(track) => floored.min(track.length()),
            None => floored,
        }
    }

    fn clamp_position(&self, position: f32) -> f32 {
        if position.is_nan() {
            return 0.0;
        }
        position.clamp(0.0, self.max_position())
    }
}

impl Default for ThumbGeometry {
    fn default() -> Self {
        Self::new(MIN_THUMB_LENGTH_FLOOR, MIN_THUMB_LENGTH_FLOOR)
    }
}
