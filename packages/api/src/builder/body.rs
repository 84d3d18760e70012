//! Request body handling

use bytes::Bytes;

use crate::builder::core::RequestableBuilder;

impl RequestableBuilder {
    /// Set raw bytes as request body, replacing any earlier body
    ///
    /// The bytes are sent verbatim. Without a body the request is sent
    /// with an empty one.
    ///
    /// # Returns
    /// `Self` for method chaining
    ///
    /// # Examples
    /// ```no_run
    /// use requestable::{HttpClient, Method, RequestableBuilder};
    ///
    /// let client = HttpClient::new();
    /// let request = RequestableBuilder::with_client("http://localhost:8080", &client)
    ///     .method(Method::POST)
    ///     .message(r#"{"key": "value"}"#)
    ///     .build();
    /// ```
    #[must_use]
    pub fn message(mut self, body: impl Into<Bytes>) -> Self {
        let body = body.into();
        if self.debug_enabled {
            log::debug!("Requestable: set request body ({} bytes)", body.len());
        }
        self.body = Some(body);
        self
    }

    /// Like [`message`](Self::message), but `None` leaves the body as it was.
    #[must_use]
    pub fn maybe_message<B: Into<Bytes>>(self, body: Option<B>) -> Self {
        match body {
            Some(body) => self.message(body),
            None => self,
        }
    }
}
