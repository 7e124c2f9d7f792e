//! Error types for the squared crate.
//!
//! The squaring routine itself cannot fail; these cover operand parsing and
//! configuration loading.

use thiserror::Error;

/// Errors that can occur when turning user input into an operand.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum InputError {
    /// Input was empty or whitespace only
    #[error("Operand cannot be empty")]
    Empty,

    /// Input could not be parsed as a floating-point number
    #[error("Not a number: {0}")]
    NotANumber(String),

    /// NaN or infinity supplied while strict mode is on
    #[error("Non-finite operand rejected in strict mode: {0}")]
    NonFinite(f64),
}

/// Errors that can occur during configuration loading.
#[derive(Error, Debug)]
pub enum ConfigError {
    /// Environment variable has invalid value
    #[error("Invalid value for {var}: {reason}")]
    InvalidValue { var: String, reason: String },
}

/// Convenience type alias for Results with InputError
pub type InputResult<T> = Result<T, InputError>;

/// Convenience type alias for Results with ConfigError
pub type ConfigResult<T> = Result<T, ConfigError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = InputError::Empty;
        assert_eq!(err.to_string(), "Operand cannot be empty");

        let err = InputError::NotANumber("five".to_string());
        assert_eq!(err.to_string(), "Not a number: five");

        let err = ConfigError::InvalidValue {
            var: "SQUARED_OUTPUT".to_string(),
            reason: "Must be plain or json".to_string(),
        };
        assert!(err.to_string().contains("SQUARED_OUTPUT"));
        assert!(err.to_string().contains("plain or json"));
    }

    #[test]
    fn test_non_finite_display() {
        let err = InputError::NonFinite(f64::INFINITY);
        assert!(err.to_string().contains("inf"));
    }
}
