//! Error handling for key encoding and curve arithmetic

use std::fmt;

/// The error type for key codec and curve operations
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Error {
    /// Parameter validation error
    Parameter {
        /// Name of the invalid parameter
        name: &'static str,
        /// Reason why the parameter is invalid
        reason: &'static str,
    },

    /// Length validation error
    Length {
        /// Context where the length error occurred
        context: &'static str,
        /// Expected length in bytes
        expected: usize,
        /// Actual length in bytes
        actual: usize,
    },

    /// The curve equation has no solution for the given x-coordinate
    ///
    /// Raised during decompression when x³ + ax + b is a quadratic
    /// non-residue, i.e. no point with that x exists on the curve.
    NotSquare {
        /// Context where the missing root was detected
        context: &'static str,
    },
}

impl Error {
    /// Shorthand to create a Parameter error
    pub fn param(name: &'static str, reason: &'static str) -> Self {
        Error::Parameter { name, reason }
    }
}

/// Result type for key codec and curve operations
pub type Result<T> = core::result::Result<T, Error>;

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::Parameter { name, reason } => {
                write!(f, "Invalid parameter '{}': {}", name, reason)
            }
            Error::Length {
                context,
                expected,
                actual,
            } => {
                write!(
                    f,
                    "Invalid length for {}: expected {}, got {}",
                    context, expected, actual
                )
            }
            Error::NotSquare { context } => {
                write!(f, "No square root exists for {}", context)
            }
        }
    }
}

impl std::error::Error for Error {}

pub mod validate;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display_parameter() {
        let err = Error::param("flag byte", "must be 0x00 or 0x01");
        assert_eq!(
            err.to_string(),
            "Invalid parameter 'flag byte': must be 0x00 or 0x01"
        );
    }

    #[test]
    fn test_display_length() {
        let err = Error::Length {
            context: "uncompressed public key",
            expected: 64,
            actual: 63,
        };
        assert_eq!(
            err.to_string(),
            "Invalid length for uncompressed public key: expected 64, got 63"
        );
    }

    #[test]
    fn test_display_not_square() {
        let err = Error::NotSquare {
            context: "compressed x-coordinate",
        };
        assert_eq!(
            err.to_string(),
            "No square root exists for compressed x-coordinate"
        );
    }
}
