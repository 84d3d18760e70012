//! Client configuration
//!
//! Settings the injected [`HttpClient`](crate::HttpClient) enforces on every
//! call. The request builder itself imposes none of these.

use std::time::Duration;

/// Configuration result type
pub type ConfigResult<T> = Result<T, ConfigError>;

/// Configuration error types
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ConfigError {
    #[error("Invalid timeout value: {0}")]
    InvalidTimeout(String),
}

/// Settings for an [`HttpClient`](crate::HttpClient).
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct HttpConfig {
    /// Deadline for a whole exchange, body included. `None` waits forever.
    pub timeout: Option<Duration>,
}

impl HttpConfig {
    #[must_use]
    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = Some(timeout);
        self
    }

    /// Validates the configuration settings
    ///
    /// # Errors
    ///
    /// Returns `InvalidTimeout` if a zero timeout is configured.
    pub fn validate(&self) -> ConfigResult<()> {
        if self.timeout.is_some_and(|timeout| timeout.is_zero()) {
            return Err(ConfigError::InvalidTimeout(
                "timeout must be greater than zero".to_string(),
            ));
        }
        Ok(())
    }
}
