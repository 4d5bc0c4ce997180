//! Market data error types.
//!
//! This module provides structured error handling for volatility smile
//! construction and implied volatility lookups.

use crate::types::{ErrorKind, PricingError};
use thiserror::Error;

/// Market data operation errors.
///
/// Every variant carries the offending value so callers can build a
/// user-facing message without re-inspecting the input.
///
/// # Variants
///
/// - `BlankTenor`: Tenor label empty or whitespace only
/// - `InvalidMaturity`: Non-positive or non-finite maturity in years
/// - `InsufficientData`: Fewer points than the smile policy requires
/// - `InvalidStrike`: Non-positive or non-finite strike
/// - `InvalidVolatility`: Implied volatility outside the plausibility band
/// - `DuplicateStrike`: Two points share a strike
/// - `InvalidForward`: Non-positive or non-finite forward
/// - `EmptySmile`: Lookup requested against a smile with no points
/// - `NoBracket`: Sorted-node search found no bracketing segment
///
/// # Examples
///
/// ```
/// use pricer_core::market_data::MarketDataError;
///
/// let err = MarketDataError::DuplicateStrike { strike: 100.0 };
/// assert_eq!(format!("{}", err), "Duplicate strike found: 100");
/// ```
#[derive(Error, Debug, Clone, PartialEq)]
pub enum MarketDataError {
    /// Tenor label is blank.
    #[error("Tenor must not be blank")]
    BlankTenor,

    /// Invalid maturity (non-positive or non-finite).
    #[error("Invalid maturity: T = {maturity}")]
    InvalidMaturity {
        /// The invalid maturity value
        maturity: f64,
    },

    /// Insufficient data for construction.
    #[error("Insufficient data: got {got}, need {need}")]
    InsufficientData {
        /// Number of points provided
        got: usize,
        /// Minimum number of points required
        need: usize,
    },

    /// Invalid strike price (non-positive or non-finite).
    #[error("Invalid strike: K = {strike}")]
    InvalidStrike {
        /// The invalid strike value
        strike: f64,
    },

    /// Implied volatility outside (0, 5).
    #[error("Invalid implied volatility: σ = {volatility}")]
    InvalidVolatility {
        /// The invalid volatility value
        volatility: f64,
    },

    /// Duplicate strike in the smile.
    #[error("Duplicate strike found: {strike}")]
    DuplicateStrike {
        /// The repeated strike
        strike: f64,
    },

    /// Invalid forward (non-positive or non-finite).
    #[error("Invalid forward: F = {forward}")]
    InvalidForward {
        /// The invalid forward value
        forward: f64,
    },

    /// Smile has no points.
    #[error("Cannot interpolate empty smile")]
    EmptySmile,

    /// No bracketing segment found for an in-range query.
    #[error("No bracketing segment for {x} despite passing boundary checks")]
    NoBracket {
        /// The query coordinate
        x: f64,
    },
}

impl MarketDataError {
    /// Returns the failure category.
    #[inline]
    pub fn kind(&self) -> ErrorKind {
        match self {
            MarketDataError::NoBracket { .. } => ErrorKind::InternalConsistency,
            _ => ErrorKind::InvalidArgument,
        }
    }
}

impl From<MarketDataError> for PricingError {
    fn from(err: MarketDataError) -> Self {
        match err.kind() {
            ErrorKind::InternalConsistency => PricingError::InternalConsistency(err.to_string()),
            _ => PricingError::InvalidArgument(err.to_string()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_blank_tenor_display() {
        assert_eq!(
            format!("{}", MarketDataError::BlankTenor),
            "Tenor must not be blank"
        );
    }

    #[test]
    fn test_invalid_maturity_display() {
        let err = MarketDataError::InvalidMaturity { maturity: -1.5 };
        assert_eq!(format!("{}", err), "Invalid maturity: T = -1.5");
    }

    #[test]
    fn test_invalid_strike_display() {
        let err = MarketDataError::InvalidStrike { strike: -100.0 };
        assert_eq!(format!("{}", err), "Invalid strike: K = -100");
    }

    #[test]
    fn test_insufficient_data_display() {
        let err = MarketDataError::InsufficientData { got: 1, need: 2 };
        assert_eq!(format!("{}", err), "Insufficient data: got 1, need 2");
    }

    #[test]
    fn test_empty_smile_display() {
        assert_eq!(
            format!("{}", MarketDataError::EmptySmile),
            "Cannot interpolate empty smile"
        );
    }

    #[test]
    fn test_kind_of_no_bracket_is_internal() {
        assert_eq!(
            MarketDataError::NoBracket { x: 95.0 }.kind(),
            ErrorKind::InternalConsistency
        );
        assert_eq!(
            MarketDataError::EmptySmile.kind(),
            ErrorKind::InvalidArgument
        );
    }

    #[test]
    fn test_into_pricing_error() {
        let pricing_err: PricingError = MarketDataError::InvalidMaturity { maturity: -1.0 }.into();
        match pricing_err {
            PricingError::InvalidArgument(msg) => {
                assert!(msg.contains("-1"));
            }
            _ => panic!("Expected InvalidArgument variant"),
        }

        let pricing_err: PricingError = MarketDataError::NoBracket { x: 1.0 }.into();
        assert_eq!(pricing_err.kind(), ErrorKind::InternalConsistency);
    }

    #[test]
    fn test_error_trait_implementation() {
        let err = MarketDataError::EmptySmile;
        let _: &dyn std::error::Error = &err;
    }

    #[test]
    fn test_clone_and_equality() {
        let err1 = MarketDataError::InvalidStrike { strike: 0.0 };
        let err2 = err1.clone();
        assert_eq!(err1, err2);
    }
}
