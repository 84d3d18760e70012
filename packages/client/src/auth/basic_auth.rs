//! Basic authentication utilities

use std::fmt;

use base64::Engine;
use base64::prelude::BASE64_STANDARD;
use http::HeaderName;

use super::AuthProvider;

/// Encode basic authentication credentials as `base64(username:password)`.
pub fn encode_basic_auth(username: &str, password: &str) -> String {
    let credentials = format!("{username}:{password}");
    BASE64_STANDARD.encode(credentials.as_bytes())
}

/// Basic authentication provider
#[derive(Clone, PartialEq, Eq)]
pub struct BasicAuth {
    username: String,
    password: String,
}

impl BasicAuth {
    pub fn new(username: impl Into<String>, password: impl Into<String>) -> Self {
        Self {
            username: username.into(),
            password: password.into(),
        }
    }

    #[must_use]
    pub fn username(&self) -> &str {
        &self.username
    }

    /// The encoded credential that follows `Basic ` in the header.
    #[must_use]
    pub fn token(&self) -> String {
        encode_basic_auth(&self.username, &self.password)
    }
}

impl AuthProvider for BasicAuth {
    fn contribute_header(&self) -> Option<(HeaderName, String)> {
        Some((http::header::AUTHORIZATION, format!("Basic {}", self.token())))
    }

    fn auth_type(&self) -> &'static str {
        "Basic"
    }
}

impl fmt::Debug for BasicAuth {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("BasicAuth")
            .field("username", &self.username)
            .field("password", &"<redacted>")
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn encodes_username_and_password() {
        // "bob:haspassword"
        assert_eq!(encode_basic_auth("bob", "haspassword"), "Ym9iOmhhc3Bhc3N3b3Jk");
    }

    #[test]
    fn header_carries_basic_prefix() {
        let (name, value) = BasicAuth::new("bob", "haspassword")
            .contribute_header()
            .expect("basic always contributes");
        assert_eq!(name, http::header::AUTHORIZATION);
        assert_eq!(value, "Basic Ym9iOmhhc3Bhc3N3b3Jk");
    }

    #[test]
    fn empty_credentials_still_produce_a_token() {
        // base64(":")
        assert_eq!(BasicAuth::new("", "").token(), "Og==");
    }

    #[test]
    fn debug_hides_password() {
        let rendered = format!("{:?}", BasicAuth::new("bob", "haspassword"));
        assert!(rendered.contains("bob"));
        assert!(!rendered.contains("haspassword"));
    }
}
