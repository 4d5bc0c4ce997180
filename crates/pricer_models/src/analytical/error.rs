//! Error types for analytical pricing operations.
//!
//! This module provides:
//! - `AnalyticalError`: Request and kernel precondition failures

use pricer_core::types::{ErrorKind, PricingError};
use thiserror::Error;

/// Analytical pricing errors.
///
/// Each numeric variant carries the offending value so the caller can
/// report which rule was broken.
///
/// # Variants
/// - `InvalidSpot`: Non-positive or non-finite underlying price
/// - `InvalidStrike`: Non-positive or non-finite strike
/// - `InvalidExpiry`: Non-positive or non-finite time to maturity
/// - `InvalidRate`: Non-finite risk-free rate
/// - `InvalidVolatility`: Non-positive or non-finite volatility
/// - `UnsupportedOptionType`: Option type outside {CALL, PUT}
/// - `NonFiniteResult`: Valid inputs whose price or Greek overflows f64
///
/// # Examples
/// ```
/// use pricer_models::analytical::AnalyticalError;
///
/// let err = AnalyticalError::InvalidVolatility { volatility: 0.0 };
/// assert_eq!(format!("{}", err), "Invalid volatility: σ = 0");
/// ```
#[derive(Debug, Clone, Error, PartialEq)]
pub enum AnalyticalError {
    /// Invalid spot price.
    #[error("Invalid spot price: S = {spot}")]
    InvalidSpot {
        /// The invalid spot price value
        spot: f64,
    },

    /// Invalid strike price.
    #[error("Invalid strike: K = {strike}")]
    InvalidStrike {
        /// The invalid strike value
        strike: f64,
    },

    /// Invalid time to maturity.
    #[error("Invalid time to maturity: T = {expiry}")]
    InvalidExpiry {
        /// The invalid expiry value
        expiry: f64,
    },

    /// Non-finite risk-free rate.
    #[error("Invalid risk-free rate: r = {rate}")]
    InvalidRate {
        /// The invalid rate value
        rate: f64,
    },

    /// Invalid volatility.
    #[error("Invalid volatility: σ = {volatility}")]
    InvalidVolatility {
        /// The invalid volatility value
        volatility: f64,
    },

    /// Option type outside the supported set.
    #[error("Unsupported option type: '{value}' (expected CALL or PUT)")]
    UnsupportedOptionType {
        /// The rejected option type text
        value: String,
    },

    /// Inputs pass validation but a computed quantity is not finite.
    #[error("Non-finite {quantity}: {value} (inputs outside representable range)")]
    NonFiniteResult {
        /// Which output overflowed (`price`, `delta`, `gamma` or `vega`)
        quantity: &'static str,
        /// The offending value
        value: f64,
    },
}

impl AnalyticalError {
    /// Returns the failure category.
    #[inline]
    pub fn kind(&self) -> ErrorKind {
        match self {
            AnalyticalError::UnsupportedOptionType { .. } => ErrorKind::UnsupportedVariant,
            _ => ErrorKind::InvalidArgument,
        }
    }
}

impl From<AnalyticalError> for PricingError {
    fn from(err: AnalyticalError) -> Self {
        match err.kind() {
            ErrorKind::UnsupportedVariant => PricingError::UnsupportedVariant(err.to_string()),
            _ => PricingError::InvalidArgument(err.to_string()),
        }
    }
}
