//! Network-subsystem error type.

use thiserror::Error;

use ep_core::NodeId;

/// Errors produced by `ep-network`.
#[derive(Debug, Error)]
pub enum NetworkError {
    #[error("unknown road category {0:?}")]
    UnknownCategory(String),

    #[error("invalid road category {name:?}: {reason}")]
    InvalidCategory { name: String, reason: String },

    #[error("node label {0} not found in network")]
    UnknownNode(u32),

    #[error("no route from {from} to {to}")]
    NoRoute { from: NodeId, to: NodeId },

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

pub type NetworkResult<T> = Result<T, NetworkError>;
