//! Error types for Verdant

use thiserror::Error;

/// Main error type for Verdant operations.
///
/// The display-facing API never returns these: unknown ids and degenerate
/// inputs map to sentinel values there. Strict and grid entry points report
/// through this type instead.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum Error {
    #[error("Unknown spectral index: {0:?}")]
    UnknownIndex(String),

    #[error("Unknown band: {0:?}")]
    UnknownBand(String),

    #[error("Invalid color: {0:?} (expected #rrggbb)")]
    InvalidColor(String),

    #[error("Band grid size mismatch: expected ({er}, {ec}), got ({ar}, {ac})")]
    SizeMismatch { er: usize, ec: usize, ar: usize, ac: usize },

    #[error("Band grid has no cells")]
    EmptyGrid,

    #[error("{0}")]
    Other(String),
}

/// Result type alias for Verdant operations
pub type Result<T> = std::result::Result<T, Error>;
