//! Error handling for lens-finder

use std::time::Duration;
use thiserror::Error;

/// Main error type for lens-finder
#[derive(Error, Debug, Clone)]
pub enum LensFinderError {
    #[error("Configuration error: {message}")]
    Config { message: String },

    #[error("Validation error: {message}")]
    Validation { message: String },

    #[error("Lens API error for '{handle}': {message}")]
    Oracle { handle: String, message: String },

    #[error("Network error: {message}")]
    Network {
        message: String,
        status_code: Option<u16>,
        url: Option<String>,
    },

    #[error("Timeout error: {operation} timed out after {timeout:?}")]
    Timeout {
        operation: String,
        timeout: Duration,
    },

    #[error("Parse error: {message}")]
    Parse {
        message: String,
        content: Option<String>,
    },

    #[error("IO error: {message}")]
    Io {
        message: String,
        path: Option<String>,
    },

    #[error("Sampling gave up after {attempts} attempts: found {} of {target} available handles", .found.len())]
    SampleExhausted {
        target: usize,
        found: Vec<String>,
        attempts: usize,
        failed_queries: usize,
    },
}

impl LensFinderError {
    /// Create a configuration error
    pub fn config(message: impl Into<String>) -> Self {
        Self::Config {
            message: message.into(),
        }
    }

    /// Create a validation error
    pub fn validation(message: impl Into<String>) -> Self {
        Self::Validation {
            message: message.into(),
        }
    }

    /// Create an oracle (Lens API) error for a specific handle
    pub fn oracle(handle: impl Into<String>, message: impl Into<String>) -> Self {
        Self::Oracle {
            handle: handle.into(),
            message: message.into(),
        }
    }

    /// Create a network error
    pub fn network(
        message: impl Into<String>,
        status_code: Option<u16>,
        url: Option<String>,
    ) -> Self {
        Self::Network {
            message: message.into(),
            status_code,
            url,
        }
    }

    /// Create a timeout error
    pub fn timeout(operation: impl Into<String>, timeout: Duration) -> Self {
        Self::Timeout {
            operation: operation.into(),
            timeout,
        }
    }

    /// Create a parse error
    pub fn parse(message: impl Into<String>, content: Option<String>) -> Self {
        Self::Parse {
            message: message.into(),
            content,
        }
    }

    /// Create an IO error
    pub fn io(message: impl Into<String>, path: Option<String>) -> Self {
        Self::Io {
            message: message.into(),
            path,
        }
    }

    /// Create a sampler exhaustion error carrying the partial sample
    pub fn sample_exhausted(
        target: usize,
        found: Vec<String>,
        attempts: usize,
        failed_queries: usize,
    ) -> Self {
        Self::SampleExhausted {
            target,
            found,
            attempts,
            failed_queries,
        }
    }

    /// Whether the error came from talking to the Lens API rather than from local input
    pub fn is_query_failure(&self) -> bool {
        matches!(
            self,
            Self::Oracle { .. } | Self::Network { .. } | Self::Timeout { .. } | Self::Parse { .. }
        )
    }

    /// Get user-friendly error message with suggestions
    pub fn user_message(&self) -> String {
        match self {
            Self::Config { message } => {
                format!("❌ Configuration problem: {}\n💡 Check your .env file or LENS_* variables", message)
            }
            Self::Validation { message } => {
                format!("❌ {}\n💡 Handles use a-z, 0-9, - and _", message)
            }
            Self::Oracle { handle, message } => {
                format!("⚠️  Could not check '{}': {}", handle, message)
            }
            Self::Network { message, status_code, .. } => {
                let status = status_code.map_or(String::new(), |c| format!(" ({})", c));
                format!("❌ Network error{}: {}\n💡 Check your internet connection", status, message)
            }
            Self::Timeout { operation, timeout } => {
                format!("⏱️  Operation '{}' timed out after {:?}\n💡 Try increasing LENS_TIMEOUT_SECS", operation, timeout)
            }
            Self::Parse { message, .. } => {
                format!("❌ Parse error: {}\n💡 This might be a temporary issue, try again", message)
            }
            Self::Io { message, path } => {
                let path_info = path.as_ref().map_or(String::new(), |p| format!(" ({})", p));
                format!("❌ File error{}: {}\n💡 Check file permissions and paths", path_info, message)
            }
            Self::SampleExhausted { target, found, attempts, failed_queries } => {
                let failures = if *failed_queries > 0 {
                    format!(" ({} lookups failed)", failed_queries)
                } else {
                    String::new()
                };
                format!(
                    "😔 Only found {} of {} available handles after {} tries{}\n💡 Raise LENS_MAX_ATTEMPTS or try refreshing",
                    found.len(), target, attempts, failures
                )
            }
        }
    }
}

/// Transport failures talking to the Lens API.
/// Wall-clock timeouts are enforced by the checker, not here.
impl From<reqwest::Error> for LensFinderError {
    fn from(err: reqwest::Error) -> Self {
        let status_code = err.status().map(|s| s.as_u16());
        let url = err.url().map(|u| u.to_string());

        if err.is_connect() {
            Self::network("Connection failed", status_code, url)
        } else if err.is_timeout() {
            Self::network("Connection timed out", status_code, url)
        } else if err.is_request() {
            Self::network("Request failed", status_code, url)
        } else {
            Self::network(err.to_string(), status_code, url)
        }
    }
}

/// Result type alias for convenience
pub type Result<T> = std::result::Result<T, LensFinderError>;

/// Helper macros for common error patterns
#[macro_export]
macro_rules! config_error {
    ($msg:expr) => {
        $crate::error::LensFinderError::config($msg)
    };
    ($fmt:expr, $($arg:tt)*) => {
        $crate::error::LensFinderError::config(format!($fmt, $($arg)*))
    };
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_query_failure_classification() {
        assert!(LensFinderError::oracle("alice.lens", "boom").is_query_failure());
        assert!(LensFinderError::timeout("profile query", Duration::from_secs(10)).is_query_failure());
        assert!(!LensFinderError::validation("too short").is_query_failure());
        assert!(!LensFinderError::config("bad").is_query_failure());
    }

    #[test]
    fn test_sample_exhausted_message() {
        let err = LensFinderError::sample_exhausted(6, vec!["alpha".to_string()], 200, 3);
        assert!(err.to_string().contains("found 1 of 6"));
        assert!(err.user_message().contains("3 lookups failed"));
    }

    #[test]
    fn test_macros() {
        let err = config_error!("LENS_SAMPLE_SIZE must be positive, got {}", 0);
        assert!(err.to_string().contains("got 0"));
    }

    #[test]
    fn test_sub_second_timeout_message() {
        let err = LensFinderError::timeout("lens-api lookup", Duration::from_millis(250));
        assert!(err.to_string().contains("timed out after 250ms"));
        assert!(err.user_message().contains("after 250ms"));

        let err = LensFinderError::timeout("lens-api lookup", Duration::from_secs(10));
        assert!(err.to_string().contains("timed out after 10s"));
    }
}
