//! Primitive UI elements - atomic building blocks
//!
//! The lowest-level drawing code, implementing iced's `canvas::Program`
//! trait directly.
//!
//! # Design Principles
//!
//! - **No business logic**: Primitives must not import from `crate::app`
//! - **Generic Message types**: Use type parameters for flexibility
//! - **Self-contained**: Each primitive handles its own geometry and rendering

pub mod progress_square;

pub use progress_square::{ProgressSquare, view_progress_square};
