//! Risk-subsystem error type.

use thiserror::Error;

use ep_core::CoreError;

/// Errors produced by `ep-risk`.
#[derive(Debug, Error)]
pub enum RiskError {
    #[error("missing field `{key}` in `{section}`")]
    MissingField { section: String, key: String },

    #[error("invalid geometry at `{section}.{key}`: {reason}")]
    InvalidGeometry { section: String, key: String, reason: String },

    #[error("invalid value at `{section}.{key}`: {reason}")]
    InvalidField { section: String, key: String, reason: String },

    #[error("unsupported hazard direction {0:?}: expected one of \"+x\", \"-x\", \"+y\", \"-y\"")]
    UnsupportedDirection(String),

    #[error(transparent)]
    Core(#[from] CoreError),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

pub type RiskResult<T> = Result<T, RiskError>;
