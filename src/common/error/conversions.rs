//! Error conversion implementations.
//!
//! This module contains From trait implementations to convert from external
//! error types to the unified Error type.

#[cfg(feature = "yaml")]
use super::types::Error;

#[cfg(feature = "yaml")]
impl From<serde_saphyr::Error> for Error {
    fn from(err: serde_saphyr::Error) -> Self {
        Error::Config(err.to_string())
    }
}
