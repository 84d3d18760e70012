pub mod classification;
pub mod constructors;
pub mod types;

pub use classification::TimedOut;
pub use constructors::*;
pub use types::{Error, Kind, Result};

pub use types::BoxError;
