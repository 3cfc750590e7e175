//! Client configuration
//!
//! Loaded from a YAML or JSON file. Every field has a default, so an empty
//! document is a valid configuration; the access token may come from the
//! environment instead of the file.

use crate::error::{Error, Result};
use crate::types::OptionStringExt;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;
use std::time::Duration;

/// Environment variable overriding `access_token`
pub const ACCESS_TOKEN_ENV: &str = "LINKEDIN_ACCESS_TOKEN";

// ============================================================================
// Client Config
// ============================================================================

/// Settings for [`LinkedInClient`](crate::LinkedInClient)
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ClientConfig {
    /// Base URL of the REST API
    pub base_url: String,

    /// Value of the `LinkedIn-Version` header (YYYYMM)
    pub api_version: String,

    /// Value of the `X-Restli-Protocol-Version` header
    pub restli_protocol_version: String,

    /// `pageSize` sent by token-paged finders
    pub page_size: u32,

    /// `count` sent by offset-paged finders
    pub offset_page_size: u32,

    /// Most identifiers sent in one batch get
    pub max_ids_per_call: usize,

    /// Request timeout in seconds
    pub timeout_secs: u64,

    /// OAuth2 bearer token
    #[serde(skip_serializing_if = "Option::is_none")]
    pub access_token: Option<String>,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            base_url: "https://api.linkedin.com/rest".to_string(),
            api_version: "202401".to_string(),
            restli_protocol_version: "2.0.0".to_string(),
            page_size: 100,
            offset_page_size: 50,
            max_ids_per_call: 20,
            timeout_secs: 30,
            access_token: None,
        }
    }
}

impl ClientConfig {
    /// Parse a YAML document
    pub fn from_yaml_str(yaml: &str) -> Result<Self> {
        let config: Self = serde_yaml::from_str(yaml)?;
        config.validate()?;
        Ok(config)
    }

    /// Parse a JSON document
    pub fn from_json_str(json: &str) -> Result<Self> {
        let config: Self = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    /// Load from a file; `.json` files are parsed as JSON, anything else as YAML
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let content = fs::read_to_string(path).map_err(|e| {
            Error::config(format!(
                "Failed to read config file '{}': {}",
                path.display(),
                e
            ))
        })?;

        let is_json = path
            .extension()
            .is_some_and(|ext| ext.eq_ignore_ascii_case("json"));
        if is_json {
            Self::from_json_str(&content)
        } else {
            Self::from_yaml_str(&content)
        }
    }

    /// Reject settings the query layer cannot run with
    pub fn validate(&self) -> Result<()> {
        if self.base_url.trim().is_empty() {
            return Err(Error::invalid_value("base_url", "cannot be empty"));
        }
        url::Url::parse(&self.base_url)
            .map_err(|e| Error::invalid_value("base_url", e.to_string()))?;
        if self.api_version.trim().is_empty() {
            return Err(Error::invalid_value("api_version", "cannot be empty"));
        }
        if self.page_size == 0 {
            return Err(Error::invalid_value("page_size", "must be greater than zero"));
        }
        if self.offset_page_size == 0 {
            return Err(Error::invalid_value(
                "offset_page_size",
                "must be greater than zero",
            ));
        }
        if self.max_ids_per_call == 0 {
            return Err(Error::invalid_value(
                "max_ids_per_call",
                "must be greater than zero",
            ));
        }
        if self.timeout_secs == 0 {
            return Err(Error::invalid_value("timeout_secs", "must be greater than zero"));
        }
        Ok(())
    }

    /// Replace the access token with `LINKEDIN_ACCESS_TOKEN` when it is set
    #[must_use]
    pub fn with_env_overrides(self) -> Self {
        self.with_token_override(std::env::var(ACCESS_TOKEN_ENV).ok())
    }

    /// Replace the access token when `token` is present and non-empty
    #[must_use]
    pub fn with_token_override(mut self, token: Option<String>) -> Self {
        if let Some(token) = token.none_if_empty() {
            self.access_token = Some(token);
        }
        self
    }

    /// Request timeout
    pub fn timeout(&self) -> Duration {
        Duration::from_secs(self.timeout_secs)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use std::io::Write;

    #[test]
    fn test_defaults() {
        let config = ClientConfig::default();
        assert_eq!(config.base_url, "https://api.linkedin.com/rest");
        assert_eq!(config.api_version, "202401");
        assert_eq!(config.restli_protocol_version, "2.0.0");
        assert_eq!(config.page_size, 100);
        assert_eq!(config.offset_page_size, 50);
        assert_eq!(config.max_ids_per_call, 20);
        assert_eq!(config.timeout(), Duration::from_secs(30));
        assert!(config.access_token.is_none());
    }

    #[test]
    fn test_parse_partial_yaml() {
        let yaml = r#"
api_version: "202406"
page_size: 25
access_token: abc
"#;

        let config = ClientConfig::from_yaml_str(yaml).unwrap();
        assert_eq!(config.api_version, "202406");
        assert_eq!(config.page_size, 25);
        assert_eq!(config.access_token.as_deref(), Some("abc"));
        assert_eq!(config.max_ids_per_call, 20);
    }

    #[test]
    fn test_parse_json() {
        let config = ClientConfig::from_json_str(r#"{"max_ids_per_call": 5}"#).unwrap();
        assert_eq!(config.max_ids_per_call, 5);
        assert_eq!(config.base_url, ClientConfig::default().base_url);
    }

    #[test]
    fn test_validate_rejects_zero_sizes() {
        let err = ClientConfig::from_yaml_str("page_size: 0").unwrap_err();
        assert!(matches!(err, Error::InvalidConfigValue { ref field, .. } if field == "page_size"));

        let err = ClientConfig::from_yaml_str("max_ids_per_call: 0").unwrap_err();
        assert!(matches!(
            err,
            Error::InvalidConfigValue { ref field, .. } if field == "max_ids_per_call"
        ));
    }

    #[test]
    fn test_validate_rejects_bad_url() {
        let err = ClientConfig::from_yaml_str("base_url: 'not a url'").unwrap_err();
        assert!(matches!(err, Error::InvalidConfigValue { ref field, .. } if field == "base_url"));
    }

    #[test]
    fn test_parse_invalid_yaml() {
        let err = ClientConfig::from_yaml_str("page_size: [").unwrap_err();
        assert!(matches!(err, Error::YamlParse(_)));
    }

    #[test]
    fn test_load_yaml_file() {
        let mut file = tempfile::Builder::new().suffix(".yaml").tempfile().unwrap();
        writeln!(file, "offset_page_size: 10").unwrap();

        let config = ClientConfig::load(file.path()).unwrap();
        assert_eq!(config.offset_page_size, 10);
    }

    #[test]
    fn test_load_json_file() {
        let mut file = tempfile::Builder::new().suffix(".json").tempfile().unwrap();
        write!(file, r#"{{"timeout_secs": 5}}"#).unwrap();

        let config = ClientConfig::load(file.path()).unwrap();
        assert_eq!(config.timeout_secs, 5);
    }

    #[test]
    fn test_load_missing_file() {
        let dir = tempfile::tempdir().unwrap();
        let err = ClientConfig::load(dir.path().join("absent.yaml")).unwrap_err();
        assert!(matches!(err, Error::Config { .. }));
    }

    #[test]
    fn test_token_override() {
        let base = ClientConfig {
            access_token: Some("file".to_string()),
            ..ClientConfig::default()
        };

        let config = base.clone().with_token_override(Some("env".to_string()));
        assert_eq!(config.access_token.as_deref(), Some("env"));

        let config = base.clone().with_token_override(Some(String::new()));
        assert_eq!(config.access_token.as_deref(), Some("file"));

        let config = base.with_token_override(None);
        assert_eq!(config.access_token.as_deref(), Some("file"));
    }
}
