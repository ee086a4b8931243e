use thiserror::Error as ThisError;

#[derive(Debug, ThisError)]
pub enum Error {
    #[error(transparent)]
    Io(#[from] std::io::Error),
    #[error("invalid input size: expected {expected} points, got {actual}")]
    InvalidInputSize { expected: usize, actual: usize },
    #[error("path index {index} out of range for {len} points")]
    IndexOutOfRange { index: usize, len: usize },
    #[error("solver cancelled")]
    Cancelled,
    #[error("invalid input: {0}")]
    InvalidInput(String),
    #[error("{0}")]
    Other(String),
}

pub type Result<T> = std::result::Result<T, Error>;

impl Error {
    pub fn invalid_input(message: impl Into<String>) -> Self {
        Self::InvalidInput(message.into())
    }

    pub fn other(message: impl Into<String>) -> Self {
        Self::Other(message.into())
    }
}

#[cfg(test)]
mod tests {
    use super::Error;

    #[test]
    fn invalid_input_size_reports_both_counts() {
        let err = Error::InvalidInputSize {
            expected: 2,
            actual: 3,
        };
        assert_eq!(
            err.to_string(),
            "invalid input size: expected 2 points, got 3"
        );
    }

    #[test]
    fn index_out_of_range_reports_index_and_len() {
        let err = Error::IndexOutOfRange { index: 7, len: 4 };
        assert_eq!(err.to_string(), "path index 7 out of range for 4 points");
    }
}
