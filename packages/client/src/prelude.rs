//! Essential types for building and dispatching requests.

// Authentication strategies
pub use crate::auth::{AuthMethod, AuthProvider, BasicAuth, BearerToken, NoAuth};

// Error types
pub use crate::error::{Error, Kind};

// Core client for making requests
pub use crate::client::{HttpClient, HttpClientBuilder, ResponseBody, Transport, TransportFuture};
pub use crate::config::{ConfigError, HttpConfig};

// HTTP standard types from http crate
pub use ::http::{HeaderMap, HeaderName, HeaderValue, Method, StatusCode};

// URL handling
pub use url::Url;
