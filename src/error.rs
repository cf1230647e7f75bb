use thiserror::Error;

/// Result type alias used across the crate.
pub type Result<T> = std::result::Result<T, Error>;

#[derive(Error, Debug)]
pub enum Error {
    /// The layer-size sequence cannot describe a network.
    #[error("invalid topology: {0}")]
    InvalidTopology(String),

    /// A buffer or a configuration record has the wrong length.
    #[error("dimension mismatch in {what}: expected {expected}, got {actual}")]
    DimensionMismatch {
        what: String,
        expected: usize,
        actual: usize,
    },

    /// A training step was invoked out of order.
    #[error("precondition violated: {0}")]
    PreconditionViolation(String),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

impl Error {
    pub(crate) fn dimension(what: impl Into<String>, expected: usize, actual: usize) -> Error {
        Error::DimensionMismatch {
            what: what.into(),
            expected,
            actual,
        }
    }
}
