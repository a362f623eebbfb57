use std::fmt;

#[derive(Debug)]
pub enum CompareError {
    /// Unknown or expired comparison id. The caller should re-submit the
    /// comparison rather than retry.
    NotFound(String),
    /// Invalid pagination input (non-positive limit), rejected before the
    /// cache is consulted.
    InvalidArgument(String),
}

impl fmt::Display for CompareError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::NotFound(id) => {
                write!(f, "comparison '{id}' not found or expired; re-submit the files to compare")
            }
            Self::InvalidArgument(msg) => write!(f, "invalid argument: {msg}"),
        }
    }
}

impl std::error::Error for CompareError {}
