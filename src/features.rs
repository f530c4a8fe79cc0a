//! Feature modules - business logic separated from UI
//!
//! Features should not depend on UI components directly.

pub mod settings;

pub use settings::Settings;
