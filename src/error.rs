//! Error types for the paycheck calculator.
//!
//! This module provides strongly-typed errors using the `thiserror` crate
//! for the error conditions that can occur while resolving configuration
//! and computing a paycheck.

use thiserror::Error;

/// The main error type for the paycheck calculator.
///
/// # Example
///
/// ```
/// use paycalc::error::PaycalcError;
///
/// let error = PaycalcError::ConfigNotFound {
///     path: "/missing/config.json".to_string(),
/// };
/// assert_eq!(error.to_string(), "Configuration file not found: /missing/config.json");
/// ```
#[derive(Debug, Error)]
pub enum PaycalcError {
    /// Configuration file was not found or could not be read.
    #[error("Configuration file not found: {path}")]
    ConfigNotFound {
        /// The path that could not be read.
        path: String,
    },

    /// Configuration file could not be parsed.
    #[error("Failed to parse configuration file '{path}': {message}")]
    ConfigParseError {
        /// The path to the file that failed to parse.
        path: String,
        /// A description of the parse error.
        message: String,
    },

    /// No pay rate was supplied by the caller or by the configuration.
    #[error("You must specify pay rate in config file or by -p, --payrate arguments.")]
    MissingPayRate,

    /// An intermediate amount fell outside the representable decimal range.
    #[error("Arithmetic overflow computing {quantity}")]
    Overflow {
        /// The quantity being computed when the overflow occurred.
        quantity: String,
    },
}

/// A type alias for Results that return PaycalcError.
pub type PaycalcResult<T> = Result<T, PaycalcError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_config_not_found_displays_path() {
        let error = PaycalcError::ConfigNotFound {
            path: "/missing/config.json".to_string(),
        };
        assert_eq!(
            error.to_string(),
            "Configuration file not found: /missing/config.json"
        );
    }

    #[test]
    fn test_config_parse_error_displays_path_and_message() {
        let error = PaycalcError::ConfigParseError {
            path: "config.json".to_string(),
            message: "expected value at line 1 column 1".to_string(),
        };
        assert_eq!(
            error.to_string(),
            "Failed to parse configuration file 'config.json': expected value at line 1 column 1"
        );
    }

    #[test]
    fn test_missing_pay_rate_displays_usage_hint() {
        let error = PaycalcError::MissingPayRate;
        assert!(error.to_string().contains("-p, --payrate"));
    }

    #[test]
    fn test_overflow_displays_quantity() {
        let error = PaycalcError::Overflow {
            quantity: "regular gross".to_string(),
        };
        assert_eq!(
            error.to_string(),
            "Arithmetic overflow computing regular gross"
        );
    }

    #[test]
    fn test_errors_implement_std_error() {
        fn assert_error<T: std::error::Error>() {}
        assert_error::<PaycalcError>();
    }

    #[test]
    fn test_error_propagation_with_question_mark() {
        fn returns_missing_rate() -> PaycalcResult<()> {
            Err(PaycalcError::MissingPayRate)
        }

        fn propagates_error() -> PaycalcResult<()> {
            returns_missing_rate()?;
            Ok(())
        }

        assert!(matches!(
            propagates_error(),
            Err(PaycalcError::MissingPayRate)
        ));
    }
}
