//! Error types for restli-query
//!
//! Every public operation returns `Result<T, Error>`. The query core never
//! retries: a transport failure aborts the whole call and is handed back
//! verbatim, with no partially assembled result alongside it.

use thiserror::Error;

/// The main error type
#[derive(Error, Debug)]
pub enum Error {
    // ============================================================================
    // Transport Errors
    // ============================================================================
    #[error("HTTP request failed: {0}")]
    Http(#[from] reqwest::Error),

    #[error("HTTP {status}: {body}")]
    HttpStatus { status: u16, body: String },

    #[error("Request timeout after {timeout_ms}ms")]
    Timeout { timeout_ms: u64 },

    #[error("Invalid URL: {0}")]
    InvalidUrl(#[from] url::ParseError),

    // ============================================================================
    // Encoding Errors
    // ============================================================================
    #[error("Cannot encode filter '{field}': {message}")]
    Encoding { field: String, message: String },

    // ============================================================================
    // Decoding Errors
    // ============================================================================
    #[error("Failed to decode response: {message}")]
    Decode { message: String },

    #[error("Failed to reinterpret dynamic field: {message} (raw: {raw})")]
    Reinterpret { message: String, raw: String },

    // ============================================================================
    // Configuration Errors
    // ============================================================================
    #[error("Configuration error: {message}")]
    Config { message: String },

    #[error("Missing required config field: {field}")]
    MissingConfigField { field: String },

    #[error("Invalid config value for '{field}': {message}")]
    InvalidConfigValue { field: String, message: String },

    #[error("Failed to parse YAML: {0}")]
    YamlParse(#[from] serde_yaml::Error),

    #[error("Failed to parse JSON: {0}")]
    JsonParse(#[from] serde_json::Error),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    // ============================================================================
    // Generic Errors
    // ============================================================================
    #[error("{0}")]
    Other(String),
}

impl Error {
    /// Create a config error
    pub fn config(message: impl Into<String>) -> Self {
        Self::Config {
            message: message.into(),
        }
    }

    /// Create a missing field error
    pub fn missing_field(field: impl Into<String>) -> Self {
        Self::MissingConfigField {
            field: field.into(),
        }
    }

    /// Create an invalid config value error
    pub fn invalid_value(field: impl Into<String>, message: impl Into<String>) -> Self {
        Self::InvalidConfigValue {
            field: field.into(),
            message: message.into(),
        }
    }

    /// Create an HTTP status error
    pub fn http_status(status: u16, body: impl Into<String>) -> Self {
        Self::HttpStatus {
            status,
            body: body.into(),
        }
    }

    /// Create an encoding error for a named filter
    pub fn encoding(field: impl Into<String>, message: impl Into<String>) -> Self {
        Self::Encoding {
            field: field.into(),
            message: message.into(),
        }
    }

    /// Create a decode error
    pub fn decode(message: impl Into<String>) -> Self {
        Self::Decode {
            message: message.into(),
        }
    }

    /// Create a second-pass decode error carrying the raw JSON
    pub fn reinterpret(message: impl Into<String>, raw: impl Into<String>) -> Self {
        Self::Reinterpret {
            message: message.into(),
            raw: raw.into(),
        }
    }

    /// Whether this error came from the network round trip
    pub fn is_transport(&self) -> bool {
        matches!(
            self,
            Error::Http(_) | Error::HttpStatus { .. } | Error::Timeout { .. }
        )
    }

    /// Whether this error came from decoding a response
    pub fn is_decode(&self) -> bool {
        matches!(self, Error::Decode { .. } | Error::Reinterpret { .. })
    }

    /// HTTP status code, when the remote API answered with an error status
    pub fn status(&self) -> Option<u16> {
        match self {
            Error::HttpStatus { status, .. } => Some(*status),
            Error::Http(e) => e.status().map(|s| s.as_u16()),
            _ => None,
        }
    }
}

/// Result type alias for restli-query
pub type Result<T> = std::result::Result<T, Error>;

/// Extension trait for adding context to errors
pub trait ResultExt<T> {
    /// Add context to an error
    fn context(self, message: impl Into<String>) -> Result<T>;

    /// Add context with a closure (lazy evaluation)
    fn with_context<F: FnOnce() -> String>(self, f: F) -> Result<T>;
}

impl<T, E: Into<Error>> ResultExt<T> for std::result::Result<T, E> {
    fn context(self, message: impl Into<String>) -> Result<T> {
        self.map_err(|e| {
            let inner = e.into();
            Error::Other(format!("{}: {}", message.into(), inner))
        })
    }

    fn with_context<F: FnOnce() -> String>(self, f: F) -> Result<T> {
        self.map_err(|e| {
            let inner = e.into();
            Error::Other(format!("{}: {}", f(), inner))
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = Error::config("test message");
        assert_eq!(err.to_string(), "Configuration error: test message");

        let err = Error::missing_field("access_token");
        assert_eq!(
            err.to_string(),
            "Missing required config field: access_token"
        );

        let err = Error::http_status(404, "Not found");
        assert_eq!(err.to_string(), "HTTP 404: Not found");

        let err = Error::encoding("status", "duplicate filter");
        assert_eq!(
            err.to_string(),
            "Cannot encode filter 'status': duplicate filter"
        );
    }

    #[test]
    fn test_reinterpret_keeps_raw() {
        let err = Error::reinterpret("expected a map", "[1,2]");
        assert!(err.is_decode());
        assert!(err.to_string().contains("[1,2]"));
        if let Error::Reinterpret { raw, .. } = err {
            assert_eq!(raw, "[1,2]");
        } else {
            panic!("Expected Reinterpret");
        }
    }

    #[test]
    fn test_classification() {
        assert!(Error::http_status(500, "").is_transport());
        assert!(Error::Timeout { timeout_ms: 1000 }.is_transport());
        assert!(!Error::decode("bad").is_transport());
        assert!(Error::decode("bad").is_decode());
        assert!(!Error::encoding("f", "x").is_decode());
        assert_eq!(Error::http_status(401, "").status(), Some(401));
        assert_eq!(Error::config("x").status(), None);
    }

    #[test]
    fn test_result_context() {
        let result: Result<()> = Err(Error::config("inner"));
        let with_context = result.context("outer");
        assert!(with_context
            .unwrap_err()
            .to_string()
            .contains("outer: Configuration error: inner"));
    }
}
