use super::types::{BoxError, Error, Kind};

/// Creates an `Error` for a configuration that cannot be built.
pub fn validation<E: Into<BoxError>>(e: E) -> Error {
    Error::new(Kind::Validation).with(e)
}

/// Creates an `Error` for a call the transport could not complete.
pub fn transport<E: Into<BoxError>>(e: E) -> Error {
    Error::new(Kind::Transport).with(e)
}

/// Creates an `Error` for a response body that could not be read.
pub fn read<E: Into<BoxError>>(e: E) -> Error {
    Error::new(Kind::Read).with(e)
}
