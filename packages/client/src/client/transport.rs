//! Transport seam
//!
//! [`Transport`] is the capability a client needs from the network: take a
//! fully formed request, hand back the response head with a readable body.
//! [`HyperTransport`] is the default implementation, speaking HTTP/1 over
//! plain TCP or rustls.

use std::fmt;

use bytes::Bytes;
use futures::future::BoxFuture;
use http_body_util::combinators::BoxBody;
use http_body_util::{BodyExt, Full};
use hyper_rustls::{HttpsConnector, HttpsConnectorBuilder};
use hyper_util::client::legacy::Client;
use hyper_util::client::legacy::connect::HttpConnector;
use hyper_util::rt::TokioExecutor;

use crate::error::BoxError;

/// Response body as produced by a transport. Read errors surface per frame.
pub type ResponseBody = BoxBody<Bytes, BoxError>;

/// Future returned by [`Transport::execute`].
pub type TransportFuture = BoxFuture<'static, Result<http::Response<ResponseBody>, BoxError>>;

/// Executes requests on behalf of an [`HttpClient`](crate::HttpClient).
///
/// Implementations must not interpret the status code; every response that
/// arrives is handed back as `Ok`.
pub trait Transport: fmt::Debug + Send + Sync {
    fn execute(&self, request: http::Request<Bytes>) -> TransportFuture;
}

/// hyper-backed HTTP/1 transport with hyper-util's default connection pool.
///
/// Accepts both `http` and `https` URLs. Server certificates are checked
/// against the bundled webpki roots.
#[derive(Debug, Clone)]
pub struct HyperTransport {
    client: Client<HttpsConnector<HttpConnector>, Full<Bytes>>,
}

impl HyperTransport {
    #[must_use]
    pub fn new() -> Self {
        let https = HttpsConnectorBuilder::new()
            .with_webpki_roots()
            .https_or_http()
            .enable_http1()
            .build();
        Self {
            client: Client::builder(TokioExecutor::new()).build(https),
        }
    }
}

impl Default for HyperTransport {
    fn default() -> Self {
        Self::new()
    }
}

impl Transport for HyperTransport {
    fn execute(&self, request: http::Request<Bytes>) -> TransportFuture {
        let pending = self.client.request(request.map(Full::new));
        Box::pin(async move {
            match pending.await {
                Ok(response) => Ok(response.map(|body| body.map_err(BoxError::from).boxed())),
                Err(source) => Err(BoxError::from(source)),
            }
        })
    }
}
