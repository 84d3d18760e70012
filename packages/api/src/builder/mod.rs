//! Request builder modules
//!
//! Provides the fluent staging API that validates into a [`Request`](crate::Request).

pub mod auth;
pub mod body;
pub mod core;
pub mod headers;
pub mod methods;

pub use self::core::{ContentType, RequestableBuilder};
