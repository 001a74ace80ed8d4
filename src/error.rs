use thiserror::Error;

pub type Result<T> = std::result::Result<T, Error>;

#[derive(Debug, Error)]
pub enum Error {
    /// An unrecognized pivot, case or partitioning tag, or a malformed size list.
    #[error("invalid argument: {0}")]
    InvalidArgument(String),

    #[error("failed to write report: {0}")]
    Io(#[from] std::io::Error),

    #[error("failed to serialize report: {0}")]
    Json(#[from] serde_json::Error),
}

impl Error {
    pub(crate) fn invalid(what: &str, got: &str, expected: &[&str]) -> Self {
        Error::InvalidArgument(format!(
            "unknown {what} `{got}`, expected one of: {}",
            expected.join(", ")
        ))
    }

    pub fn is_invalid_argument(&self) -> bool {
        matches!(self, Error::InvalidArgument(_))
    }
}
