//! HTTP client handle, its construction, and the transport seam.

pub mod configuration;
pub mod core;
pub mod transport;

pub use configuration::HttpClientBuilder;
pub use self::core::HttpClient;
pub use transport::{HyperTransport, ResponseBody, Transport, TransportFuture};
