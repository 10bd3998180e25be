#![forbid(unsafe_code)]

//! Widget-level error type.

use thiserror::Error;
use thumbtrack_core::GeometryError;

use crate::document::DocumentError;

pub type Result<T> = std::result::Result<T, ScrollbarError>;

/// Errors surfaced by [`Scrollbar`](crate::Scrollbar) entry points.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ScrollbarError {
    /// The thumb was driven before the widget had a layout.
    #[error("geometry error: {0}")]
    Geometry(#[from] GeometryError),

    /// The attached document rejected a scroll command.
    #[error("document error: {0}")]
    Document(#[from] DocumentError),
}
