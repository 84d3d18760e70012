//! # requestable client
//!
//! The collaborators behind the `requestable` builder: the shared
//! [`HttpClient`] handle and its [`Transport`] seam, the pluggable
//! authentication strategies, and the error taxonomy both crates report.
//!
//! ## Features
//!
//! - **Injected transport** - callers own the client; requests only borrow it
//! - **Auth strategies** - none, Basic, Bearer, or any [`AuthProvider`]
//! - **Single error type** - validation, transport and read failures

#![deny(unsafe_code)]
#![warn(clippy::all, clippy::pedantic)]

pub mod auth;
pub mod client;
pub mod config;
pub mod error;

// Prelude with canonical types
pub mod prelude;

pub use crate::prelude::*;
