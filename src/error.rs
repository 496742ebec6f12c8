//! Application error types.
//!
//! Parse and lookup misses are modelled as `Option::None` at the resolution
//! API; this enum carries the conditions that are worth reporting: transport
//! failures (logged, then collapsed by callers), configuration defects, and
//! the unsupported-language condition that must fail loudly.

use thiserror::Error;

/// Application result type alias
pub type Result<T> = std::result::Result<T, Error>;

/// Application error types with specific context for actionable debugging
#[derive(Debug, Error)]
pub enum Error {
    /// IO error with path context
    #[error("IO error at {path:?}: {source}")]
    Io {
        /// The underlying IO error.
        source: std::io::Error,
        /// File path where the error occurred, if known.
        path: Option<std::path::PathBuf>,
    },

    /// Network error (connection, timeout, DNS, non-success status)
    #[error("Network error: {message}")]
    Network {
        /// Human-readable error description.
        message: String,
        /// HTTP status code, if from an HTTP response.
        status: Option<u16>,
    },

    /// Configuration error with guidance
    #[error("Configuration error: {message}. {hint}")]
    Config {
        /// Description of the configuration problem.
        message: String,
        /// Actionable guidance for fixing the issue.
        hint: &'static str,
    },

    /// Document or entry parsing error
    #[error("Parse error in {source_name}: {message}")]
    Parse {
        /// Document path, URL or key that failed to parse.
        source_name: String,
        /// Description of the parse failure.
        message: String,
    },

    /// A language code with no registered profile
    #[error("Language not supported: {0:?}")]
    LanguageUnsupported(String),

    /// Scripture lookup error
    #[error("Scripture lookup failed: {0}")]
    Lookup(String),

    /// Session storage or authentication error
    #[error("Session error: {0}")]
    Session(String),

    /// Generic message error (escape hatch)
    #[error("{0}")]
    Msg(String),
}

impl Error {
    /// Create an IO error with path context
    pub fn io(source: std::io::Error, path: impl Into<Option<std::path::PathBuf>>) -> Self {
        Self::Io { source, path: path.into() }
    }

    /// Create a network error without a status code
    pub fn network(message: impl Into<String>) -> Self {
        Self::Network { message: message.into(), status: None }
    }

    /// Create a network error from a non-success HTTP status
    pub fn network_status(message: impl Into<String>, status: u16) -> Self {
        Self::Network { message: message.into(), status: Some(status) }
    }

    /// Create a config error with actionable hint
    pub fn config(message: impl Into<String>, hint: &'static str) -> Self {
        Self::Config { message: message.into(), hint }
    }

    /// Create a parse error naming the document it came from
    pub fn parse(message: impl Into<String>, source_name: impl Into<String>) -> Self {
        Self::Parse { source_name: source_name.into(), message: message.into() }
    }
}

// Convenience conversions
impl From<std::io::Error> for Error {
    fn from(e: std::io::Error) -> Self {
        Self::Io { source: e, path: None }
    }
}

impl From<serde_json::Error> for Error {
    fn from(e: serde_json::Error) -> Self {
        Self::parse(e.to_string(), "json")
    }
}

#[cfg(test)]
mod tests {
    #![allow(clippy::expect_used, clippy::unwrap_used, clippy::panic)]

    use super::*;

    #[test]
    fn network_status_keeps_code() {
        let err = Error::network_status("GET bibles/ta.json returned 404", 404);
        match err {
            Error::Network { status: Some(code), .. } => assert_eq!(code, 404),
            _ => panic!("Expected Network error with status"),
        }
    }

    #[test]
    fn parse_error_names_its_source() {
        let err = Error::parse("bad json", "bibles/en.json");
        assert_eq!(err.to_string(), "Parse error in bibles/en.json: bad json");
    }

    #[test]
    fn unsupported_language_message_names_code() {
        let err = Error::LanguageUnsupported("zz".into());
        assert_eq!(err.to_string(), "Language not supported: \"zz\"");
    }
}
