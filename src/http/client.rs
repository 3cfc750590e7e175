//! HTTP client for pre-encoded GET requests

use crate::decode::decode_json;
use crate::error::{Error, Result};
use crate::query::QueryParams;
use reqwest::{Client, Method, StatusCode};
use serde::de::DeserializeOwned;
use std::collections::HashMap;
use std::time::Duration;
use tracing::debug;
use url::Url;

/// Configuration for the HTTP client
#[derive(Debug, Clone)]
pub struct HttpClientConfig {
    /// Base URL for all requests
    pub base_url: Option<String>,
    /// Request timeout
    pub timeout: Duration,
    /// Default headers for all requests
    pub default_headers: HashMap<String, String>,
    /// Bearer token sent as `Authorization`
    pub bearer_token: Option<String>,
    /// User agent string
    pub user_agent: String,
}

impl Default for HttpClientConfig {
    fn default() -> Self {
        Self {
            base_url: None,
            timeout: Duration::from_secs(30),
            default_headers: HashMap::new(),
            bearer_token: None,
            user_agent: format!("restli-query/{}", env!("CARGO_PKG_VERSION")),
        }
    }
}

impl HttpClientConfig {
    /// Create a new config builder
    pub fn builder() -> HttpClientConfigBuilder {
        HttpClientConfigBuilder::default()
    }
}

/// Builder for HTTP client config
#[derive(Default)]
pub struct HttpClientConfigBuilder {
    config: HttpClientConfig,
}

impl HttpClientConfigBuilder {
    /// Set the base URL
    #[must_use]
    pub fn base_url(mut self, url: impl Into<String>) -> Self {
        self.config.base_url = Some(url.into());
        self
    }

    /// Set the request timeout
    #[must_use]
    pub fn timeout(mut self, timeout: Duration) -> Self {
        self.config.timeout = timeout;
        self
    }

    /// Add a default header
    #[must_use]
    pub fn header(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.config.default_headers.insert(key.into(), value.into());
        self
    }

    /// Set the bearer token
    #[must_use]
    pub fn bearer_token(mut self, token: impl Into<String>) -> Self {
        self.config.bearer_token = Some(token.into());
        self
    }

    /// Set user agent
    #[must_use]
    pub fn user_agent(mut self, agent: impl Into<String>) -> Self {
        self.config.user_agent = agent.into();
        self
    }

    /// Build the config
    pub fn build(self) -> HttpClientConfig {
        self.config
    }
}

/// Per-request overrides
#[derive(Debug, Clone, Default)]
pub struct RequestConfig {
    /// Request headers, added after the defaults
    pub headers: HashMap<String, String>,
    /// Override timeout for this request
    pub timeout: Option<Duration>,
}

impl RequestConfig {
    /// Create a new request config
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a header
    #[must_use]
    pub fn header(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.headers.insert(key.into(), value.into());
        self
    }

    /// Set timeout
    #[must_use]
    pub fn timeout(mut self, timeout: Duration) -> Self {
        self.timeout = Some(timeout);
        self
    }
}

/// HTTP client sending one request per call
pub struct HttpClient {
    client: Client,
    config: HttpClientConfig,
}

impl HttpClient {
    /// Create a new HTTP client with default configuration
    pub fn new() -> Result<Self> {
        Self::with_config(HttpClientConfig::default())
    }

    /// Create a new HTTP client with custom configuration
    pub fn with_config(config: HttpClientConfig) -> Result<Self> {
        let client = Client::builder()
            .timeout(config.timeout)
            .user_agent(&config.user_agent)
            .build()?;

        Ok(Self { client, config })
    }

    /// Client configuration
    pub fn config(&self) -> &HttpClientConfig {
        &self.config
    }

    /// GET `path` with an already encoded query, returning the body text
    pub async fn get(
        &self,
        path: &str,
        query: &QueryParams,
        request: &RequestConfig,
    ) -> Result<String> {
        let url = self.build_url(path, query)?;
        let timeout = request.timeout.unwrap_or(self.config.timeout);

        let mut req = self.client.request(Method::GET, url.clone());

        for (key, value) in &self.config.default_headers {
            req = req.header(key.as_str(), value.as_str());
        }
        for (key, value) in &request.headers {
            req = req.header(key.as_str(), value.as_str());
        }
        if let Some(ref token) = self.config.bearer_token {
            req = req.bearer_auth(token);
        }

        let response = req.timeout(timeout).send().await.map_err(|e| {
            if e.is_timeout() {
                Error::Timeout {
                    timeout_ms: timeout.as_millis() as u64,
                }
            } else {
                Error::Http(e)
            }
        })?;

        let status = response.status();
        if status.is_client_error() || status.is_server_error() {
            let body = response.text().await.unwrap_or_default();
            debug!(status = status.as_u16(), url = %url, "Request rejected");
            return Err(Error::http_status(status.as_u16(), body));
        }

        debug!(status = status.as_u16(), url = %url, "Request succeeded");

        if status == StatusCode::NO_CONTENT {
            return Ok(String::new());
        }
        Ok(response.text().await?)
    }

    /// GET `path` and decode the body as JSON
    pub async fn get_json<T: DeserializeOwned>(
        &self,
        path: &str,
        query: &QueryParams,
        request: &RequestConfig,
    ) -> Result<T> {
        let body = self.get(path, query, request).await?;
        decode_json(&body)
    }

    /// Join base URL, path and query without touching the query's encoding
    pub fn build_url(&self, path: &str, query: &QueryParams) -> Result<Url> {
        let mut full = if path.starts_with("http://") || path.starts_with("https://") {
            path.to_string()
        } else {
            match &self.config.base_url {
                Some(base) => {
                    let base = base.trim_end_matches('/');
                    let path = path.trim_start_matches('/');
                    format!("{base}/{path}")
                }
                None => path.to_string(),
            }
        };

        if !query.is_empty() {
            full.push('?');
            full.push_str(&query.to_query_string());
        }

        Ok(Url::parse(&full)?)
    }
}

impl std::fmt::Debug for HttpClient {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("HttpClient")
            .field("base_url", &self.config.base_url)
            .field("timeout", &self.config.timeout)
            .field("has_bearer_token", &self.config.bearer_token.is_some())
            .finish_non_exhaustive()
    }
}
