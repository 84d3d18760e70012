//! Authentication capability and the token-less strategies.

use std::fmt;

use http::HeaderName;

/// A pluggable authentication strategy.
///
/// A strategy contributes at most one header to a request. It performs no
/// validation of its credentials: empty values still produce a header.
pub trait AuthProvider: fmt::Debug + Send + Sync {
    /// The header this strategy adds to every request, if any.
    fn contribute_header(&self) -> Option<(HeaderName, String)>;

    /// Get authentication method name
    fn auth_type(&self) -> &'static str;
}

/// Strategy that adds nothing to the request.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct NoAuth;

impl AuthProvider for NoAuth {
    #[inline]
    fn contribute_header(&self) -> Option<(HeaderName, String)> {
        None
    }

    #[inline]
    fn auth_type(&self) -> &'static str {
        "None"
    }
}

/// Bearer token authentication
#[derive(Clone, PartialEq, Eq)]
pub struct BearerToken {
    token: String,
}

impl BearerToken {
    /// Create new bearer token auth
    #[must_use]
    #[inline]
    pub fn new(token: impl Into<String>) -> Self {
        Self { token: token.into() }
    }

    /// The raw token.
    #[must_use]
    pub fn token(&self) -> &str {
        &self.token
    }
}

impl AuthProvider for BearerToken {
    fn contribute_header(&self) -> Option<(HeaderName, String)> {
        Some((http::header::AUTHORIZATION, format!("Bearer {}", self.token)))
    }

    #[inline]
    fn auth_type(&self) -> &'static str {
        "Bearer"
    }
}

impl fmt::Debug for BearerToken {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("BearerToken").field("token", &"<redacted>").finish()
    }
}
