//! `AuthMethod` - the strategy slot held by a request builder.

use std::sync::Arc;

use http::HeaderName;

use crate::auth::{AuthProvider, BasicAuth, BearerToken, NoAuth};

/// One active authentication strategy.
///
/// The fixed strategies are enum variants; anything else implementing
/// [`AuthProvider`] can be attached through [`AuthMethod::Custom`].
#[derive(Debug, Clone, Default)]
pub enum AuthMethod {
    /// No authorization header
    #[default]
    None,
    /// Basic authentication
    Basic(BasicAuth),
    /// Bearer token authentication
    Bearer(BearerToken),
    /// Caller-defined strategy
    Custom(Arc<dyn AuthProvider>),
}

impl AuthMethod {
    /// Create basic authentication
    pub fn basic(username: impl Into<String>, password: impl Into<String>) -> Self {
        Self::Basic(BasicAuth::new(username, password))
    }

    /// Create bearer token authentication
    pub fn bearer(token: impl Into<String>) -> Self {
        Self::Bearer(BearerToken::new(token))
    }

    /// Wrap a caller-defined strategy
    pub fn custom<P: AuthProvider + 'static>(provider: P) -> Self {
        Self::Custom(Arc::new(provider))
    }
}

impl AuthProvider for AuthMethod {
    fn contribute_header(&self) -> Option<(HeaderName, String)> {
        match self {
            Self::None => NoAuth.contribute_header(),
            Self::Basic(basic) => basic.contribute_header(),
            Self::Bearer(bearer) => bearer.contribute_header(),
            Self::Custom(provider) => provider.contribute_header(),
        }
    }

    fn auth_type(&self) -> &'static str {
        match self {
            Self::None => NoAuth.auth_type(),
            Self::Basic(basic) => basic.auth_type(),
            Self::Bearer(bearer) => bearer.auth_type(),
            Self::Custom(provider) => provider.auth_type(),
        }
    }
}

impl From<NoAuth> for AuthMethod {
    fn from(_: NoAuth) -> Self {
        Self::None
    }
}

impl From<BasicAuth> for AuthMethod {
    fn from(basic: BasicAuth) -> Self {
        Self::Basic(basic)
    }
}

impl From<BearerToken> for AuthMethod {
    fn from(bearer: BearerToken) -> Self {
        Self::Bearer(bearer)
    }
}

impl From<Arc<dyn AuthProvider>> for AuthMethod {
    fn from(provider: Arc<dyn AuthProvider>) -> Self {
        Self::Custom(provider)
    }
}
