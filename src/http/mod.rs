//! HTTP client module
//!
//! A thin GET client for REST endpoints whose query strings are already in
//! wire form.
//!
//! # Features
//!
//! - **Verbatim Queries**: Encoded parameters are appended without re-encoding
//! - **Default Headers**: Protocol and version headers attached to every call
//! - **Error Classification**: Status, timeout and decode failures kept apart
//!
//! There are no retries. A failed request is surfaced to the caller as is.

mod client;

pub use client::{HttpClient, HttpClientConfig, HttpClientConfigBuilder, RequestConfig};
