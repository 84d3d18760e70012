//! Core HTTP client handle
//!
//! [`HttpClient`] is the shared capability a request builder is handed. It
//! is a cheap clone around one transport; every clone talks to the same
//! connection pool, and nothing in this crate ever shuts it down.

use std::sync::Arc;

use bytes::Bytes;
use http_body_util::BodyExt;
use tokio::time::Instant;

use super::configuration::HttpClientBuilder;
use super::transport::{HyperTransport, ResponseBody, Transport};
use crate::config::{ConfigResult, HttpConfig};
use crate::error::{self, TimedOut};

/// HTTP client handle shared between builders and the requests they produce.
#[derive(Debug, Clone)]
pub struct HttpClient {
    transport: Arc<dyn Transport>,
    config: HttpConfig,
}

impl HttpClient {
    /// Create HttpClient with default configuration
    #[must_use]
    pub fn new() -> Self {
        Self::from_parts(Arc::new(HyperTransport::new()), HttpConfig::default())
    }

    /// Start configuring a client.
    #[must_use]
    pub fn builder() -> HttpClientBuilder {
        HttpClientBuilder::new()
    }

    /// Create HttpClient with custom configuration
    ///
    /// # Errors
    ///
    /// Returns a `ConfigError` if the configuration is invalid.
    pub fn with_config(config: HttpConfig) -> ConfigResult<Self> {
        HttpClientBuilder::new().config(config).build()
    }

    /// Wrap a custom transport with the default configuration.
    pub fn from_transport<T: Transport + 'static>(transport: T) -> Self {
        Self::from_parts(Arc::new(transport), HttpConfig::default())
    }

    pub(crate) fn from_parts(transport: Arc<dyn Transport>, config: HttpConfig) -> Self {
        Self { transport, config }
    }

    /// Get current configuration
    #[inline]
    #[must_use]
    pub fn config(&self) -> &HttpConfig {
        &self.config
    }

    /// Execute a request and return the response head with its unread body.
    ///
    /// Any status code counts as success. The configured timeout bounds the
    /// wait for the response head only; see [`fetch`](Self::fetch).
    ///
    /// # Errors
    ///
    /// Returns a transport error if the call cannot complete or times out.
    pub async fn execute(
        &self,
        request: http::Request<Bytes>,
    ) -> error::Result<http::Response<ResponseBody>> {
        self.dispatch(request, self.deadline()).await
    }

    /// Execute a request and read the whole response body.
    ///
    /// The configured timeout is a single deadline for the full exchange.
    ///
    /// # Errors
    ///
    /// Returns a transport error if no response head arrives in time or the
    /// call fails, and a read error if the body fails or the deadline passes
    /// while it is still being read.
    pub async fn fetch(
        &self,
        request: http::Request<Bytes>,
    ) -> error::Result<http::Response<Bytes>> {
        let deadline = self.deadline();
        let uri = request.uri().clone();
        let (parts, body) = self.dispatch(request, deadline).await?.into_parts();

        let collected = match deadline {
            Some(deadline) => match tokio::time::timeout_at(deadline, body.collect()).await {
                Ok(collected) => collected,
                Err(_) => {
                    tracing::warn!(%uri, "response body timed out");
                    return Err(error::read(TimedOut));
                }
            },
            None => body.collect().await,
        };

        match collected {
            Ok(collected) => Ok(http::Response::from_parts(parts, collected.to_bytes())),
            Err(source) => {
                tracing::warn!(%uri, error = %source, "response body failed");
                Err(error::read(source))
            }
        }
    }

    fn deadline(&self) -> Option<Instant> {
        self.config.timeout.map(|limit| Instant::now() + limit)
    }

    async fn dispatch(
        &self,
        request: http::Request<Bytes>,
        deadline: Option<Instant>,
    ) -> error::Result<http::Response<ResponseBody>> {
        let method = request.method().clone();
        let uri = request.uri().clone();
        tracing::debug!(%method, %uri, "dispatching request");

        let call = self.transport.execute(request);
        let outcome = match deadline {
            Some(deadline) => match tokio::time::timeout_at(deadline, call).await {
                Ok(outcome) => outcome,
                Err(_) => {
                    tracing::warn!(%method, %uri, "request timed out");
                    return Err(error::transport(TimedOut));
                }
            },
            None => call.await,
        };

        match outcome {
            Ok(response) => {
                tracing::debug!(%method, %uri, status = %response.status(), "response received");
                Ok(response)
            }
            Err(source) => {
                tracing::warn!(%method, %uri, error = %source, "transport failure");
                Err(error::transport(source))
            }
        }
    }
}

impl Default for HttpClient {
    fn default() -> Self {
        Self::new()
    }
}
