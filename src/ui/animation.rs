//! Animation state for the square indicator
//!
//! Time is always passed in by the caller (iced's update/view callbacks),
//! so the animation logic is deterministic and unit-testable.

pub mod square_tracer;

pub use square_tracer::{EdgeAnimator, SquareTracer};
