//! Authentication strategy setters
//!
//! A builder holds exactly one strategy; each call replaces the previous one.

use requestable_client::auth::AuthMethod;

use crate::builder::core::RequestableBuilder;

impl RequestableBuilder {
    /// Attach an authentication strategy, replacing any earlier one
    ///
    /// # Arguments
    /// * `strategy` - `NoAuth`, `BasicAuth`, `BearerToken` or an `AuthMethod`
    ///
    /// # Returns
    /// `Self` for method chaining
    ///
    /// # Examples
    /// ```no_run
    /// use requestable::{BearerToken, HttpClient, RequestableBuilder};
    ///
    /// let client = HttpClient::new();
    /// let request = RequestableBuilder::with_client("http://localhost:8080", &client)
    ///     .auth(BearerToken::new("your-oauth-token-here"))
    ///     .build();
    /// ```
    #[must_use]
    pub fn auth(mut self, strategy: impl Into<AuthMethod>) -> Self {
        self.auth = strategy.into();
        self
    }

    /// Set basic authentication
    ///
    /// Shorthand for `auth(AuthMethod::basic(username, password))`.
    #[must_use]
    pub fn basic_auth(self, username: impl Into<String>, password: impl Into<String>) -> Self {
        self.auth(AuthMethod::basic(username, password))
    }

    /// Set bearer token authentication
    ///
    /// Shorthand for `auth(AuthMethod::bearer(token))`.
    #[must_use]
    pub fn bearer_auth(self, token: impl Into<String>) -> Self {
        self.auth(AuthMethod::bearer(token))
    }
}
