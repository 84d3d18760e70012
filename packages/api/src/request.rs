//! The frozen request and its dispatch

use bytes::Bytes;
use http::{HeaderMap, Method};
use url::Url;

use requestable_client::HttpClient;
use requestable_client::error::Result;

/// An immutable, fully validated request.
///
/// Produced only by [`RequestableBuilder::build`](crate::RequestableBuilder::build).
/// Every call to [`send`](Self::send) issues a fresh network call through the
/// client captured when the builder was created.
#[derive(Debug, Clone)]
pub struct Request {
    base_url: String,
    url: Url,
    uri: http::Uri,
    method: Method,
    headers: HeaderMap,
    body: Bytes,
    client: HttpClient,
    debug_enabled: bool,
}

impl Request {
    #[allow(clippy::too_many_arguments)]
    pub(crate) fn new(
        base_url: String,
        url: Url,
        uri: http::Uri,
        method: Method,
        headers: HeaderMap,
        body: Bytes,
        client: HttpClient,
        debug_enabled: bool,
    ) -> Self {
        Self {
            base_url,
            url,
            uri,
            method,
            headers,
            body,
            client,
            debug_enabled,
        }
    }

    /// The base URL exactly as handed to the builder.
    #[must_use]
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// The parsed target. `url` normalizes it, so `http://host:8080` reads
    /// back as `http://host:8080/`.
    #[must_use]
    pub fn url(&self) -> &Url {
        &self.url
    }

    /// HTTP method, `GET` unless one was set.
    #[must_use]
    pub fn method(&self) -> &Method {
        &self.method
    }

    /// The merged header set that goes on the wire.
    #[must_use]
    pub fn headers(&self) -> &HeaderMap {
        &self.headers
    }

    /// Request payload; empty when no message was set.
    #[must_use]
    pub fn body(&self) -> &Bytes {
        &self.body
    }

    /// Dispatch the request and return the raw response body.
    ///
    /// Every status code, 4xx and 5xx included, is a success here; the body
    /// is returned for the caller to interpret. The client's timeout covers
    /// the whole exchange, body included. Cancellation is dropping this
    /// future.
    ///
    /// # Errors
    ///
    /// Returns a transport error when the call cannot complete, or a read
    /// error when the response body cannot be read to the end. No retry is
    /// attempted.
    pub async fn send(&self) -> Result<Bytes> {
        let mut request = http::Request::new(self.body.clone());
        *request.method_mut() = self.method.clone();
        *request.uri_mut() = self.uri.clone();
        *request.headers_mut() = self.headers.clone();

        let response = self
            .client
            .fetch(request)
            .await
            .map_err(|e| e.with_url(self.url.clone()))?;
        let status = response.status();
        let body = response.into_body();

        if self.debug_enabled {
            log::debug!(
                "Requestable: {} {} -> {status} ({} bytes)",
                self.method,
                self.url,
                body.len()
            );
        }

        Ok(body)
    }
}

/// Two requests are equal when they would put the same call on the wire.
/// The client handle is not compared.
impl PartialEq for Request {
    fn eq(&self, other: &Self) -> bool {
        self.base_url == other.base_url
            && self.url == other.url
            && self.method == other.method
            && self.headers == other.headers
            && self.body == other.body
    }
}

impl Eq for Request {}
