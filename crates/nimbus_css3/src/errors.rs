//! Error results that can be returned from the css3 parser

use nimbus_shared::byte_stream::Location;
use nimbus_shared::errors::CssError;
use thiserror::Error;

/// Serious errors and errors from third-party libraries
#[derive(Debug, Error)]
pub enum Error {
    #[error("parse error: {0} at {1:?}")]
    Parse(String, Location),

    #[error("css failure: {0}")]
    CssFailure(String),

    #[error("io error: {0}")]
    IO(#[from] std::io::Error),
}

impl From<CssError> for Error {
    fn from(e: CssError) -> Self {
        match e.location {
            Some(location) => Error::Parse(e.message, location),
            None => Error::CssFailure(e.message),
        }
    }
}
