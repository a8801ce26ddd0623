//! Error types for pricing and implied volatility calculation.

use std::fmt;

/// Errors raised before a numerical routine is entered.
///
/// Non-convergence is not an error: the solver reports it through
/// `SolveStatus` alongside its best estimate.
#[derive(Debug, Clone, PartialEq)]
pub enum PricingError {
    /// A quote field lies outside the domain of the closed form
    /// (non-positive spot or strike, negative price, or a non-finite value).
    InvalidQuoteDomain {
        /// Name of the offending field.
        field: &'static str,
        /// The rejected value.
        value: f64,
    },

    /// Solver configuration is inconsistent.
    InvalidConfig {
        /// Description of the invalid setting.
        message: String,
    },
}

impl fmt::Display for PricingError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PricingError::InvalidQuoteDomain { field, value } => {
                write!(f, "invalid quote domain: {field} = {value}")
            }
            PricingError::InvalidConfig { message } => {
                write!(f, "invalid solver configuration: {message}")
            }
        }
    }
}

impl std::error::Error for PricingError {}
