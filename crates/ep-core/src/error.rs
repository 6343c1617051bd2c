//! Core error type.
//!
//! Sub-crates define their own error enums and wrap `CoreError` as one
//! variant via `#[from]`.

use thiserror::Error;

#[derive(Debug, Error)]
pub enum CoreError {
    #[error("invalid geometry: {what} = {value} (must be finite)")]
    InvalidGeometry { what: &'static str, value: f64 },

    #[error("configuration error: {0}")]
    Config(String),
}

/// Shorthand result type for `ep-core`.
pub type CoreResult<T> = Result<T, CoreError>;
