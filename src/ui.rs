//! UI module for the progress indicator application
//!
//! # Architecture
//!
//! - **Animation** (`animation`): clock-driven animation state, no rendering
//! - **Primitives** (`primitives`): low-level `canvas::Program` drawing code
//! - **Theme** (`theme`): palette and fixed style constants

pub mod animation;
pub mod primitives;
pub mod theme;
