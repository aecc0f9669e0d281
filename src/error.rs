//! Error types for the boardsync crate

use thiserror::Error;

/// Main error type for the boardsync crate
#[derive(Error, Debug)]
#[non_exhaustive]
pub enum Error {
    #[error("invalid move: {message}")]
    InvalidMove { message: String },

    #[error("failed to {operation}: {source}")]
    Transport {
        operation: String,
        #[source]
        source: reqwest::Error,
    },

    #[error("service answered with status {status}: {body}")]
    UnexpectedStatus { status: u16, body: String },

    #[error("malformed response to {operation}: {message}")]
    MalformedResponse { operation: String, message: String },

    #[error("board has wrong length: expected {expected} cells, got {got}")]
    InvalidBoardLength { expected: usize, got: usize },

    #[error("invalid mark '{symbol}' (expected a single visible character)")]
    InvalidMark { symbol: String },

    #[error("invalid configuration: {message}")]
    InvalidConfiguration { message: String },

    #[error("failed to {operation}: {source}")]
    Io {
        operation: String,
        #[source]
        source: std::io::Error,
    },

    #[error("serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}

impl Error {
    /// Whether this error means the service could not be reached or understood.
    ///
    /// Transport failures are logged and otherwise swallowed; everything the
    /// service deliberately rejected is surfaced to the user instead.
    pub fn is_transport(&self) -> bool {
        matches!(
            self,
            Error::Transport { .. }
                | Error::UnexpectedStatus { .. }
                | Error::MalformedResponse { .. }
                | Error::InvalidBoardLength { .. }
                | Error::InvalidMark { .. }
                | Error::Serialization(_)
        )
    }
}

/// Convenience type alias for Results using the crate's Error type
pub type Result<T> = std::result::Result<T, Error>;

impl From<std::io::Error> for Error {
    fn from(source: std::io::Error) -> Self {
        Error::Io {
            operation: "IO operation".to_string(),
            source,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rejection_is_not_transport() {
        let err = Error::InvalidMove {
            message: "Cell already taken".to_string(),
        };
        assert!(!err.is_transport());
        assert_eq!(err.to_string(), "invalid move: Cell already taken");
    }

    #[test]
    fn test_bad_payloads_count_as_transport() {
        assert!(
            Error::UnexpectedStatus {
                status: 500,
                body: "boom".to_string()
            }
            .is_transport()
        );
        assert!(Error::InvalidBoardLength { expected: 9, got: 8 }.is_transport());
        assert!(
            Error::MalformedResponse {
                operation: "move".to_string(),
                message: "eof".to_string()
            }
            .is_transport()
        );
        assert!(
            !Error::InvalidConfiguration {
                message: "base url".to_string()
            }
            .is_transport()
        );
    }
}
