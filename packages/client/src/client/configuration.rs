//! HTTP client construction
//!
//! Assembles an [`HttpClient`] from a transport and an [`HttpConfig`].

use std::sync::Arc;
use std::time::Duration;

use super::HttpClient;
use super::transport::{HyperTransport, Transport};
use crate::config::{ConfigResult, HttpConfig};

/// HTTP client builder for configuration
#[derive(Debug, Default)]
pub struct HttpClientBuilder {
    config: HttpConfig,
    transport: Option<Arc<dyn Transport>>,
}

impl HttpClientBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    /// Bound how long one exchange may take, body included.
    #[must_use]
    pub fn timeout(mut self, timeout: Duration) -> Self {
        self.config.timeout = Some(timeout);
        self
    }

    /// Replace the whole configuration.
    #[must_use]
    pub fn config(mut self, config: HttpConfig) -> Self {
        self.config = config;
        self
    }

    /// Dispatch through `transport` instead of the default hyper client.
    #[must_use]
    pub fn transport<T: Transport + 'static>(mut self, transport: T) -> Self {
        self.transport = Some(Arc::new(transport));
        self
    }

    /// Validate the configuration and produce a client.
    ///
    /// # Errors
    ///
    /// Returns a `ConfigError` if the configuration is invalid.
    pub fn build(self) -> ConfigResult<HttpClient> {
        self.config.validate()?;
        let transport = self
            .transport
            .unwrap_or_else(|| Arc::new(HyperTransport::new()));
        tracing::debug!(timeout = ?self.config.timeout, "http client configured");
        Ok(HttpClient::from_parts(transport, self.config))
    }
}
