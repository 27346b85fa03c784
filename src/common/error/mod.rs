//! Unified error types for slidewright.
//!
//! This module provides a single error type shared by the host capability
//! surface and the algorithms built on top of it.

// Submodule declarations
pub mod types;
pub mod conversions;

// Re-exports
pub use types::{Error, Result};
