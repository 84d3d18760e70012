//! HTTP method selection

use http::Method;

use crate::builder::core::RequestableBuilder;

impl RequestableBuilder {
    /// Set the HTTP method (GET when never called)
    ///
    /// Accepts a [`Method`] or its name. A name that is not a valid method
    /// token is recorded and reported by `build()`; a later valid call
    /// replaces it.
    ///
    /// # Returns
    /// `Self` for method chaining
    #[must_use]
    pub fn method<M>(mut self, method: M) -> Self
    where
        Method: TryFrom<M>,
        <Method as TryFrom<M>>::Error: Into<http::Error>,
    {
        match Method::try_from(method) {
            Ok(method) => {
                self.method = Some(method);
                self.error = None;
            }
            Err(e) => {
                let e: http::Error = e.into();
                if self.debug_enabled {
                    log::debug!("Requestable: deferring invalid method: {e}");
                }
                self.error = Some(format!("invalid method: {e}"));
            }
        }
        self
    }
}
