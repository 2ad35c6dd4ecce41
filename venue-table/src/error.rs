//! Error types

use thiserror::Error;

/// Failure of the venues request.
///
/// Both variants end the fetch chain; the renderer turns them into the
/// error paragraph and never retries.
#[derive(Debug, Error)]
pub enum FetchError {
    /// Server answered with a non-2xx status
    #[error("Backend error: {status}")]
    Http { status: u16 },

    /// Transport or body decoding failed
    #[error("{0}")]
    Network(String),
}

impl From<reqwest::Error> for FetchError {
    fn from(err: reqwest::Error) -> Self {
        match err.status() {
            Some(status) if !status.is_success() => Self::Http {
                status: status.as_u16(),
            },
            _ => Self::Network(error_chain(&err)),
        }
    }
}

/// Message of `err` followed by each `source()` cause, joined with `: `
pub fn error_chain(err: &dyn std::error::Error) -> String {
    let mut text = err.to_string();
    let mut source = err.source();
    while let Some(cause) = source {
        let cause_text = cause.to_string();
        if !text.ends_with(&cause_text) {
            text.push_str(": ");
            text.push_str(&cause_text);
        }
        source = cause.source();
    }
    text
}

impl From<serde_json::Error> for FetchError {
    fn from(err: serde_json::Error) -> Self {
        Self::Network(err.to_string())
    }
}

/// Result type for fetch operations
pub type FetchResult<T> = Result<T, FetchError>;

/// Page-level faults outside the fetch chain
#[derive(Debug, Error)]
pub enum PageError {
    /// No element with the configured id exists in the document
    #[error("Container element not found: #{0}")]
    ContainerNotFound(String),

    /// Writing the rendered page failed
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

/// Invalid configuration value
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Invalid value for {key}: {value}")]
    InvalidValue { key: &'static str, value: String },

    #[error("Missing value for {0}")]
    Missing(&'static str),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_http_error_message_has_status() {
        let err = FetchError::Http { status: 500 };
        assert_eq!(err.to_string(), "Backend error: 500");
    }

    #[test]
    fn test_network_error_message_is_detail() {
        let err = FetchError::Network("connection refused".into());
        assert_eq!(err.to_string(), "connection refused");
    }

    #[derive(Debug, Error)]
    #[error("error sending request")]
    struct Outer(#[source] std::io::Error);

    #[test]
    fn test_error_chain_includes_causes() {
        let inner = std::io::Error::new(std::io::ErrorKind::ConnectionRefused, "Connection refused");
        let err = Outer(inner);
        assert_eq!(error_chain(&err), "error sending request: Connection refused");
    }

    #[test]
    fn test_error_chain_without_source() {
        let err = std::io::Error::other("boom");
        assert_eq!(error_chain(&err), "boom");
    }

    #[test]
    fn test_json_error_is_network() {
        let err: FetchError = serde_json::from_str::<Vec<u8>>("{").unwrap_err().into();
        assert!(matches!(err, FetchError::Network(_)));
    }
}
