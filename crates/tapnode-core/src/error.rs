//! Error types for tapnode.
//!
//! Widget operations themselves never fail: touch sequences are absorbed by the
//! tracker and missing slots or targets fall back silently. Errors only arise at
//! the configuration boundary, when a widget is built from untrusted input.

use thiserror::Error;

/// The main error type for tapnode operations.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum TapnodeError {
    /// A widget size was negative or not a finite number.
    #[error("invalid widget size: {width}x{height}")]
    InvalidSize { width: f32, height: f32 },

    /// A configuration document could not be parsed.
    #[error("invalid configuration: {0}")]
    Config(String),
}

/// A specialized Result type for tapnode operations.
pub type Result<T> = std::result::Result<T, TapnodeError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = TapnodeError::InvalidSize {
            width: -1.0,
            height: 4.0,
        };
        assert_eq!(err.to_string(), "invalid widget size: -1x4");

        let err = TapnodeError::Config("expected a table".into());
        assert_eq!(err.to_string(), "invalid configuration: expected a table");
    }
}
