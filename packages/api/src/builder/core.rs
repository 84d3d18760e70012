//! Core `RequestableBuilder` structure and the build step
//!
//! Holds the staged configuration, the `debug` switch, and `build()`, which
//! validates everything and freezes it into a [`Request`].

use http::header::{AUTHORIZATION, CONTENT_TYPE};
use http::{HeaderMap, HeaderName, HeaderValue, Method};
use url::Url;

use requestable_client::auth::{AuthMethod, AuthProvider};
use requestable_client::error::{self, Result};
use requestable_client::HttpClient;

use crate::request::Request;

/// Message used when the base URL is empty or unusable.
pub const INVALID_BASE_URL: &str = "missing or invalid base URL";

/// Message used when the builder was created without a client.
pub const MISSING_CLIENT: &str = "missing HTTP client";

/// Content type enumeration for elegant API
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ContentType {
    /// application/json content type
    ApplicationJson,
    /// application/x-www-form-urlencoded content type
    ApplicationFormUrlEncoded,
    /// application/octet-stream content type
    ApplicationOctetStream,
    /// text/plain content type
    TextPlain,
    /// text/html content type
    TextHtml,
}

impl ContentType {
    /// Convert content type to string representation
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            ContentType::ApplicationJson => "application/json",
            ContentType::ApplicationFormUrlEncoded => "application/x-www-form-urlencoded",
            ContentType::ApplicationOctetStream => "application/octet-stream",
            ContentType::TextPlain => "text/plain",
            ContentType::TextHtml => "text/html",
        }
    }
}

impl From<ContentType> for String {
    fn from(content_type: ContentType) -> Self {
        content_type.as_str().to_string()
    }
}

/// Staging area for one outbound request.
///
/// Created with a base URL and a client, configured through chained calls,
/// then turned into an immutable [`Request`] by [`build`](Self::build).
/// Empty header keys or values, an empty content type and an absent body are
/// ignored rather than reported. Nothing is validated until `build()`.
#[derive(Debug, Clone)]
pub struct RequestableBuilder {
    pub(crate) base_url: String,
    pub(crate) client: Option<HttpClient>,
    pub(crate) method: Option<Method>,
    /// Keys are stored ASCII-lowercased; header names are case-insensitive.
    pub(crate) headers: hashbrown::HashMap<String, String>,
    pub(crate) content_type: Option<String>,
    pub(crate) auth: AuthMethod,
    pub(crate) body: Option<bytes::Bytes>,
    /// Deferred failure reported by `build()`
    pub(crate) error: Option<String>,
    pub(crate) debug_enabled: bool,
}

impl RequestableBuilder {
    /// Start building a request against `base_url`.
    ///
    /// Both arguments are stored verbatim; a missing client or a bad URL is
    /// reported by [`build`](Self::build), not here. The client is shared,
    /// never owned: the caller keeps control of its lifetime.
    #[must_use]
    pub fn new(base_url: impl Into<String>, client: Option<&HttpClient>) -> Self {
        Self {
            base_url: base_url.into(),
            client: client.cloned(),
            method: None,
            headers: hashbrown::HashMap::new(),
            content_type: None,
            auth: AuthMethod::None,
            body: None,
            error: None,
            debug_enabled: false,
        }
    }

    /// Shorthand for `new(base_url, Some(client))`
    #[must_use]
    pub fn with_client(base_url: impl Into<String>, client: &HttpClient) -> Self {
        Self::new(base_url, Some(client))
    }

    /// Enable debug logging for this request
    ///
    /// When enabled, ignored inputs, the built request and the outcome of
    /// `send()` are logged at debug level.
    ///
    /// # Returns
    /// `Self` for method chaining
    #[must_use]
    pub fn debug(mut self) -> Self {
        self.debug_enabled = true;
        self
    }

    /// Validate the staged configuration and freeze it into a [`Request`].
    ///
    /// The builder is left untouched, so building twice without changes in
    /// between yields two equal requests.
    ///
    /// Header precedence, lowest to highest: the auth strategy's header, the
    /// content type, then headers set with `header()`.
    ///
    /// # Errors
    ///
    /// Returns a validation error when the base URL is empty or invalid, the
    /// client is missing, a deferred failure was recorded (such as an invalid
    /// method), or a header name or value is not legal on the wire.
    pub fn build(&self) -> Result<Request> {
        let (url, uri) = self
            .parse_base_url()
            .ok_or_else(|| error::validation(INVALID_BASE_URL))?;
        let client = self
            .client
            .clone()
            .ok_or_else(|| error::validation(MISSING_CLIENT))?;

        if let Some(reason) = &self.error {
            return Err(error::validation(reason.clone()).with_url(url));
        }

        let method = self.method.clone().unwrap_or(Method::GET);
        let headers = match self.merged_headers() {
            Ok(headers) => headers,
            Err(reason) => return Err(error::validation(reason).with_url(url)),
        };
        let body = self.body.clone().unwrap_or_default();

        if self.debug_enabled {
            log::debug!(
                "Requestable: built {method} {url} ({} headers, {} byte body, auth: {})",
                headers.len(),
                body.len(),
                self.auth.auth_type()
            );
        }

        Ok(Request::new(
            self.base_url.clone(),
            url,
            uri,
            method,
            headers,
            body,
            client,
            self.debug_enabled,
        ))
    }

    fn parse_base_url(&self) -> Option<(Url, http::Uri)> {
        if self.base_url.is_empty() {
            return None;
        }
        let url = Url::parse(&self.base_url).ok()?;
        if !url.has_host() {
            return None;
        }
        let uri = url.as_str().parse::<http::Uri>().ok()?;
        Some((url, uri))
    }

    fn merged_headers(&self) -> std::result::Result<HeaderMap, String> {
        let mut headers = HeaderMap::new();

        if let Some((name, value)) = self.auth.contribute_header() {
            let mut value = HeaderValue::from_str(&value).map_err(|e| {
                format!("invalid {} authorization header: {e}", self.auth.auth_type())
            })?;
            value.set_sensitive(true);
            headers.insert(name, value);
        }

        if let Some(content_type) = &self.content_type {
            let value = HeaderValue::from_str(content_type)
                .map_err(|e| format!("invalid content type '{content_type}': {e}"))?;
            headers.insert(CONTENT_TYPE, value);
        }

        for (key, value) in &self.headers {
            let name = HeaderName::from_bytes(key.as_bytes())
                .map_err(|e| format!("invalid header name '{key}': {e}"))?;
            let mut value = HeaderValue::from_str(value)
                .map_err(|e| format!("invalid value for header '{key}': {e}"))?;
            if name == AUTHORIZATION {
                value.set_sensitive(true);
            }
            headers.insert(name, value);
        }

        Ok(headers)
    }
}
