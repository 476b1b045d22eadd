//! HTTP transport for the ProPublica Congress API.
//!
//! The trait abstraction keeps the facade testable: [`HttpTransport`] makes
//! real requests with reqwest, while [`mock::MockTransport`] records calls
//! for unit tests (behind the `test-utils` feature).
//!
//! Response bodies are handed back unparsed. Modeling the payloads is the
//! caller's concern; this layer only attaches the API key, transmits the
//! pagination offset, and maps non-success statuses to errors.

use async_trait::async_trait;
use serde_json::Value;
use thiserror::Error;

/// Base URL of the upstream API.
pub const DEFAULT_BASE_URL: &str = "https://api.propublica.org/congress/v1";

/// Errors from the transport collaborator.
#[derive(Debug, Error)]
pub enum TransportError {
    /// HTTP request failed
    #[error("HTTP request failed: {0}")]
    Request(#[from] reqwest::Error),

    /// API returned an error response
    #[error("API error: {status} - {message}")]
    Api { status: u16, message: String },
}

/// Trait for issuing validated requests.
///
/// `endpoint` is the rendered path (no leading slash); `offset` is the
/// pagination cursor, transmitted separately from the path.
#[async_trait]
pub trait Transport: Send + Sync {
    /// Fetch `endpoint` with the given `offset`, returning the response body
    /// unparsed.
    async fn get(&self, endpoint: &str, offset: i64) -> Result<Value, TransportError>;
}

/// `reqwest`-backed implementation of [`Transport`].
///
/// Attaches the API key as an `X-API-Key` header and the offset as an
/// `offset` query parameter.
pub struct HttpTransport {
    client: reqwest::Client,
    base_url: String,
    api_key: String,
}

impl HttpTransport {
    /// Create a transport with the given base URL and API key.
    pub fn new(base_url: impl Into<String>, api_key: impl Into<String>) -> Self {
        Self {
            client: reqwest::Client::new(),
            base_url: base_url.into(),
            api_key: api_key.into(),
        }
    }

    /// Create a transport with a custom `reqwest::Client` (for testing with
    /// custom timeouts or proxies).
    pub fn with_client(
        client: reqwest::Client,
        base_url: impl Into<String>,
        api_key: impl Into<String>,
    ) -> Self {
        Self {
            client,
            base_url: base_url.into(),
            api_key: api_key.into(),
        }
    }
}

#[async_trait]
impl Transport for HttpTransport {
    async fn get(&self, endpoint: &str, offset: i64) -> Result<Value, TransportError> {
        let url = format!("{}/{}", self.base_url, endpoint);
        tracing::debug!(%url, offset, "issuing request");

        let response = self
            .client
            .get(&url)
            .query(&[("offset", offset)])
            .header("X-API-Key", &self.api_key)
            .send()
            .await?;

        let status = response.status();

        if !status.is_success() {
            let message = response.text().await.unwrap_or_default();
            return Err(TransportError::Api {
                status: status.as_u16(),
                message,
            });
        }

        Ok(response.json().await?)
    }
}

#[cfg(any(test, feature = "test-utils"))]
#[allow(
    clippy::unwrap_used,
    clippy::missing_panics_doc,
    clippy::missing_const_for_fn,
    clippy::must_use_candidate
)]
pub mod mock {
    //! Mock implementation for unit testing.

    use super::{Transport, TransportError};
    use async_trait::async_trait;
    use serde_json::Value;
    use std::sync::Mutex;

    /// Recording mock of [`Transport`] for unit tests.
    ///
    /// Queue a result with [`set_get_result`](Self::set_get_result) and
    /// inspect issued calls with [`get_calls`](Self::get_calls). Without a
    /// queued result, `get` resolves to an empty JSON object.
    pub struct MockTransport {
        get_result: Mutex<Option<Result<Value, TransportError>>>,
        get_calls: Mutex<Vec<(String, i64)>>,
    }

    impl MockTransport {
        pub fn new() -> Self {
            Self {
                get_result: Mutex::new(None),
                get_calls: Mutex::new(Vec::new()),
            }
        }

        /// Set the result for the next `get` call.
        pub fn set_get_result(&self, result: Result<Value, TransportError>) {
            *self.get_result.lock().unwrap() = Some(result);
        }

        /// All `(endpoint, offset)` pairs passed to `get`, in call order.
        pub fn get_calls(&self) -> Vec<(String, i64)> {
            self.get_calls.lock().unwrap().clone()
        }
    }

    impl Default for MockTransport {
        fn default() -> Self {
            Self::new()
        }
    }

    #[async_trait]
    impl Transport for MockTransport {
        async fn get(&self, endpoint: &str, offset: i64) -> Result<Value, TransportError> {
            self.get_calls
                .lock()
                .unwrap()
                .push((endpoint.to_string(), offset));

            self.get_result
                .lock()
                .unwrap()
                .take()
                .unwrap_or_else(|| Ok(Value::Object(serde_json::Map::new())))
        }
    }
}
