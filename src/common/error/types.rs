//! Unified error types for slidewright.
//!
//! Every host capability call and every algorithm returns this error type, so
//! failures raised by the document engine flow through the algorithms unchanged.
use crate::document::{ShapeId, SlideId};
use thiserror::Error;

/// Main error type for slidewright operations.
#[derive(Error, Debug)]
pub enum Error {
    /// IO error
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// The shape id no longer resolves (deleted, cut, or never existed)
    #[error("Shape not found: {0}")]
    ShapeNotFound(ShapeId),

    /// The slide id no longer resolves
    #[error("Slide not found: {0}")]
    SlideNotFound(SlideId),

    /// The shape has no text frame
    #[error("Shape {0} has no text frame")]
    NoTextFrame(ShapeId),

    /// A text span reaches past the end of its text body
    #[error("Text span {start}..{end} is out of bounds for shape {shape} (length {len})")]
    InvalidSpan {
        shape: ShapeId,
        start: usize,
        end: usize,
        len: usize,
    },

    /// Paste requested while the relevant clipboard is empty
    #[error("Clipboard is empty")]
    ClipboardEmpty,

    /// Timeline index outside `1..=len`
    #[error("Effect index {index} is out of range for a timeline of {len} entries")]
    EffectIndexOutOfRange { index: usize, len: usize },

    /// The host refused the mutation for this shape kind
    #[error("Permission denied: {0}")]
    PermissionDenied(String),

    /// The host rejected an argument for this shape kind
    #[error("Invalid argument: {0}")]
    InvalidArgument(String),

    /// Platform-object failure reported by the host engine
    #[error("Platform error: {0}")]
    Platform(String),

    /// Configuration could not be parsed
    #[error("Configuration error: {0}")]
    Config(String),
}

impl Error {
    /// Whether this is a structural sync failure: the host rejected a direct
    /// property transfer because of the shape kind (groups, charts, ...).
    ///
    /// Structural failures are recovered by re-creating the shape; every other
    /// variant is propagated.
    pub fn is_structural(&self) -> bool {
        matches!(
            self,
            Error::PermissionDenied(_) | Error::InvalidArgument(_) | Error::Platform(_)
        )
    }
}

/// Result type for slidewright operations.
pub type Result<T> = std::result::Result<T, Error>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_structural_classification() {
        assert!(Error::PermissionDenied("group".into()).is_structural());
        assert!(Error::InvalidArgument("chart".into()).is_structural());
        assert!(Error::Platform("rpc".into()).is_structural());
        assert!(!Error::ShapeNotFound(ShapeId(4)).is_structural());
        assert!(!Error::ClipboardEmpty.is_structural());
    }

    #[test]
    fn test_display() {
        let err = Error::EffectIndexOutOfRange { index: 5, len: 3 };
        assert_eq!(
            err.to_string(),
            "Effect index 5 is out of range for a timeline of 3 entries"
        );
        assert_eq!(Error::SlideNotFound(SlideId(2)).to_string(), "Slide not found: slide#2");
    }
}
