//! Common types and utilities shared across the crate.
//!
//! This module provides the error type, runtime settings, and style types used
//! by both the document model and the presentation algorithms.

// Submodule declarations
pub mod config;
pub mod error;
pub mod style;

// Re-exports for convenience
pub use config::Settings;
pub use error::{Error, Result};
pub use style::RGBColor;
