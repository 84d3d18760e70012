pub mod auth_method;
pub mod basic_auth;
pub mod providers;

pub use auth_method::AuthMethod;
pub use basic_auth::{BasicAuth, encode_basic_auth};
pub use providers::{AuthProvider, BearerToken, NoAuth};
