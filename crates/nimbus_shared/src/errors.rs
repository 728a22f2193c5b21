//! Error results shared by the nimbus crates

use crate::byte_stream::Location;
use std::fmt::{Display, Formatter};

/// Parser error that defines an error (message) on the given position
#[derive(Clone, Debug, PartialEq)]
pub struct CssError {
    /// Error message
    pub message: String,
    /// Location of the error, if available (during parsing mostly)
    pub location: Option<Location>,
}

impl CssError {
    #[must_use]
    pub fn new(message: &str) -> Self {
        CssError {
            message: message.to_string(),
            location: None,
        }
    }

    #[must_use]
    pub fn with_location(message: &str, location: Location) -> Self {
        CssError {
            message: message.to_string(),
            location: Some(location),
        }
    }
}

impl Display for CssError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match &self.location {
            Some(location) => write!(f, "{}:{}: {}", location.line, location.column, self.message),
            None => write!(f, "{}", self.message),
        }
    }
}

impl std::error::Error for CssError {}

pub type CssResult<T> = Result<T, CssError>;

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn error_display() {
        let e = CssError::new("something failed");
        assert_eq!(e.to_string(), "something failed");

        let e = CssError::with_location("expected ':'", Location::new(3, 14, 42));
        assert_eq!(e.to_string(), "3:14: expected ':'");
    }
}
