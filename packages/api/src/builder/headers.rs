//! Header and content type setters
//!
//! Both ignore empty input instead of failing, so a chain never breaks on a
//! blank value. Names and values are checked for wire legality in `build()`.

use crate::builder::core::RequestableBuilder;

impl RequestableBuilder {
    /// Add a custom header to the request
    ///
    /// An empty key or an empty value leaves the builder unchanged. Setting
    /// the same key again (in any letter case) replaces the earlier value.
    /// Headers set here win over the auth strategy and the content type.
    ///
    /// # Arguments
    /// * `key` - The header name
    /// * `value` - The header value
    ///
    /// # Returns
    /// `Self` for method chaining
    ///
    /// # Examples
    /// ```no_run
    /// use requestable::{HttpClient, RequestableBuilder};
    ///
    /// let client = HttpClient::new();
    /// let request = RequestableBuilder::with_client("http://localhost:8080", &client)
    ///     .header("x-request-id", "42")
    ///     .build();
    /// ```
    #[must_use]
    pub fn header(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        let (key, value) = (key.into(), value.into());
        if key.is_empty() || value.is_empty() {
            if self.debug_enabled {
                log::debug!("Requestable: ignoring header with empty key or value ({key:?})");
            }
            return self;
        }
        self.headers.insert(key.to_ascii_lowercase(), value);
        self
    }

    /// Set the `Content-Type` header
    ///
    /// Accepts any string or a [`ContentType`](crate::ContentType). An empty
    /// string is ignored and never clears a previously set value.
    ///
    /// # Returns
    /// `Self` for method chaining
    #[must_use]
    pub fn content_type(mut self, content_type: impl Into<String>) -> Self {
        let content_type = content_type.into();
        if content_type.is_empty() {
            if self.debug_enabled {
                log::debug!("Requestable: ignoring empty content type");
            }
            return self;
        }
        self.content_type = Some(content_type);
        self
    }
}
