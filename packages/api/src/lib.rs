//! Requestable Public API
//!
//! Fluent builder for outbound HTTP requests with pluggable authentication.
//! Configure a [`RequestableBuilder`], validate it into an immutable
//! [`Request`] with `build()`, then `send()` it through the [`HttpClient`]
//! you handed in to get the raw response body.
//!
//! ```no_run
//! use requestable::{HttpClient, Method, RequestableBuilder};
//!
//! # async fn run() -> Result<(), requestable::Error> {
//! let client = HttpClient::new();
//! let body = RequestableBuilder::with_client("http://localhost:8080/items", &client)
//!     .method(Method::POST)
//!     .bearer_auth("mytoken")
//!     .content_type("application/json")
//!     .message(r#"{"key": "value"}"#)
//!     .build()?
//!     .send()
//!     .await?;
//! # let _ = body;
//! # Ok(())
//! # }
//! ```

#![deny(unsafe_code)]
#![warn(clippy::all, clippy::pedantic)]

pub mod builder;
pub mod request;

// Re-export all public API components
pub use builder::{ContentType, RequestableBuilder};
pub use request::Request;

// Re-export important types from client package
pub use requestable_client::{
    AuthMethod, AuthProvider, BasicAuth, BearerToken, ConfigError, Error, HttpClient,
    HttpClientBuilder, HttpConfig, Kind, Method, NoAuth, ResponseBody, Transport, TransportFuture,
};
pub use requestable_client::{auth, error};
