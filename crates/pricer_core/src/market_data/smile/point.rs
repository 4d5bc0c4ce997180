//! Single (strike, implied volatility) node of a smile.

use crate::market_data::error::MarketDataError;

/// Upper bound (exclusive) of the accepted implied volatility band.
///
/// 5.0 is 500% annualised; anything at or above it is treated as
/// malformed input rather than a market quote.
pub const MAX_IMPLIED_VOLATILITY: f64 = 5.0;

/// A validated smile node.
///
/// # Invariants
///
/// - `strike` is finite and > 0
/// - `implied_volatility` is finite and in (0, [`MAX_IMPLIED_VOLATILITY`])
///
/// # Example
///
/// ```
/// use pricer_core::market_data::smile::VolPoint;
///
/// let point = VolPoint::new(100.0, 0.2).unwrap();
/// assert_eq!(point.strike(), 100.0);
/// assert_eq!(point.implied_volatility(), 0.2);
///
/// assert!(VolPoint::new(-1.0, 0.2).is_err());
/// assert!(VolPoint::new(100.0, 5.0).is_err());
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "camelCase"))]
pub struct VolPoint {
    strike: f64,
    #[cfg_attr(feature = "serde", serde(rename = "iv"))]
    implied_volatility: f64,
}

impl VolPoint {
    /// Creates a smile node.
    ///
    /// # Errors
    ///
    /// - `MarketDataError::InvalidStrike` if the strike is non-finite or <= 0
    /// - `MarketDataError::InvalidVolatility` if the volatility is non-finite
    ///   or outside (0, 5)
    pub fn new(strike: f64, implied_volatility: f64) -> Result<Self, MarketDataError> {
        if !strike.is_finite() || strike <= 0.0 {
            return Err(MarketDataError::InvalidStrike { strike });
        }

        if !implied_volatility.is_finite()
            || implied_volatility <= 0.0
            || implied_volatility >= MAX_IMPLIED_VOLATILITY
        {
            return Err(MarketDataError::InvalidVolatility {
                volatility: implied_volatility,
            });
        }

        Ok(Self {
            strike,
            implied_volatility,
        })
    }

    /// Returns the strike.
    #[inline]
    pub fn strike(&self) -> f64 {
        self.strike
    }

    /// Returns the implied volatility.
    #[inline]
    pub fn implied_volatility(&self) -> f64 {
        self.implied_volatility
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_valid_point() {
        let point = VolPoint::new(90.0, 0.25).unwrap();
        assert_eq!(point.strike(), 90.0);
        assert_eq!(point.implied_volatility(), 0.25);
    }

    #[test]
    fn test_rejects_non_positive_strike() {
        for strike in [0.0, -10.0] {
            match VolPoint::new(strike, 0.2) {
                Err(MarketDataError::InvalidStrike { strike: s }) => assert_eq!(s, strike),
                other => panic!("Expected InvalidStrike, got {:?}", other),
            }
        }
    }

    #[test]
    fn test_rejects_non_finite_strike() {
        assert!(VolPoint::new(f64::NAN, 0.2).is_err());
        assert!(VolPoint::new(f64::INFINITY, 0.2).is_err());
    }

    #[test]
    fn test_rejects_out_of_band_volatility() {
        for vol in [0.0, -0.1, MAX_IMPLIED_VOLATILITY, 7.5, f64::NAN, f64::INFINITY] {
            assert!(
                matches!(
                    VolPoint::new(100.0, vol),
                    Err(MarketDataError::InvalidVolatility { .. })
                ),
                "volatility {} should be rejected",
                vol
            );
        }
    }

    #[test]
    fn test_accepts_volatility_just_inside_band() {
        assert!(VolPoint::new(100.0, 4.999).is_ok());
        assert!(VolPoint::new(100.0, 1e-6).is_ok());
    }
}
