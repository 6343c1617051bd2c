use thiserror::Error;

#[derive(Debug, Error)]
pub enum ApspError {
    #[error("graph parse error at line {line}: {reason}")]
    Parse { line: usize, reason: String },

    #[error("duplicate node label {0:?}")]
    DuplicateNode(String),

    #[error("node {0:?} is not in the node list")]
    UnknownNode(String),

    #[error("invalid weight {weight} on edge {u:?}-{v:?}: must be finite and >= 0")]
    InvalidWeight { u: String, v: String, weight: f64 },

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

pub type ApspResult<T> = Result<T, ApspError>;
