#![forbid(unsafe_code)]

//! Scrollbar widget synchronized with a scrollable document.
//!
//! The pieces, leaf first:
//!
//! - [`mapper`]: pure conversions between document offsets and thumb pixels.
//! - [`document`] and [`grid`]: the narrow capability traits the widget
//!   consumes, plus a uniform-list adapter.
//! - [`sync`]: the two-way engine with its reentrancy guard.
//! - [`layout_observer`]: recomputes extents and thumb length per layout pass.
//! - [`scrollbar`]: the widget facade hosts actually hold, drawing with
//!   [`color`] values.

pub mod color;
pub mod document;
pub mod error;
pub mod grid;
pub mod layout_observer;
pub mod mapper;
pub mod scrollbar;
pub mod sync;

pub use error::ScrollbarError;
pub use scrollbar::{PaintBand, Scrollbar, ScrollbarConfig, ScrollbarPaint};
pub use sync::SyncOutcome;
