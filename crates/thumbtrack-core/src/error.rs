#![forbid(unsafe_code)]

//! Error types for geometry mutation.

use thiserror::Error;

/// Errors raised when mutating thumb or track geometry.
///
/// These are programmer errors: they mean the widget was driven before the
/// host gave it a layout, or the host handed it nonsense bounds.
#[derive(Debug, Clone, Copy, PartialEq, Error)]
pub enum GeometryError {
    /// The thumb was positioned before any track was assigned.
    #[error("thumb has no track; assign layout bounds before positioning it")]
    Detached,

    /// A track length was negative, NaN, or infinite.
    #[error("invalid track length: {length}")]
    InvalidTrackLength { length: f32 },
}
