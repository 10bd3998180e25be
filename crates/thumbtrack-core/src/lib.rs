#![forbid(unsafe_code)]

//! Core: axis geometry, pointer events, and thumb gesture recognition.
//!
//! # Role in Thumbtrack
//! `thumbtrack-core` is the input layer. It owns the thumb/track geometry and
//! the gesture state machine that turns raw pointer events into thumb drags
//! and resizes. It knows nothing about documents or scroll offsets; the
//! synchronization engine in `thumbtrack-widgets` consumes the geometry this
//! crate mutates.
//!
//! # Primary responsibilities
//! - **Geometry**: [`geometry::Track`] and [`geometry::ThumbGeometry`], with
//!   the containment invariant enforced on every mutation.
//! - **Events**: [`event::PointerEvent`] carrying screen and widget-local
//!   coordinates.
//! - **Gestures**: [`gesture::GestureController`], the
//!   `Idle -> Dragging | ResizingTop | ResizingBottom -> Idle` machine.

pub mod error;
pub mod event;
pub mod geometry;
pub mod gesture;
pub mod logging;

pub use error::GeometryError;

// Re-export tracing macros at crate root for ergonomic use.
#[cfg(feature = "tracing")]
pub use logging::{debug, error, info, trace, warn};
