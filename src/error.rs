//! Defines [`GeosConvertError`], representing all errors returned by this crate.

use thiserror::Error;

#[derive(Error, Debug)]
pub enum GeosConvertError {
    /// Wrapper for errors reported by the underlying GEOS library.
    #[error(transparent)]
    Geos(#[from] geos::Error),

    #[error("General error: {0}")]
    General(String),
}

/// Crate-specific result type.
pub type Result<T> = std::result::Result<T, GeosConvertError>;
