//! Validated European option pricing request.

use super::option_type::OptionType;
use crate::analytical::AnalyticalError;

/// Inputs for pricing one European vanilla option.
///
/// Construction through [`OptionRequest::new`] is the only way to obtain a
/// value, so every request in circulation satisfies:
/// - underlying price, strike, time to maturity and volatility are finite and > 0
/// - the risk-free rate is finite (negative rates allowed)
///
/// # Examples
/// ```
/// use pricer_models::instruments::{OptionRequest, OptionType};
///
/// let request = OptionRequest::new(100.0, 100.0, 1.0, 0.05, 0.2, OptionType::Call).unwrap();
/// assert_eq!(request.strike_price(), 100.0);
///
/// // σ = 0 is rejected before any pricing happens
/// assert!(OptionRequest::new(100.0, 100.0, 1.0, 0.05, 0.0, OptionType::Call).is_err());
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "camelCase"))]
pub struct OptionRequest {
    underlying_price: f64,
    strike_price: f64,
    time_to_maturity: f64,
    risk_free_rate: f64,
    volatility: f64,
    option_type: OptionType,
}

impl OptionRequest {
    /// Creates a validated request.
    ///
    /// Fields are checked in declaration order; the first violation wins.
    ///
    /// # Errors
    /// - `AnalyticalError::InvalidSpot` - underlying price not finite and > 0
    /// - `AnalyticalError::InvalidStrike` - strike not finite and > 0
    /// - `AnalyticalError::InvalidExpiry` - time to maturity not finite and > 0
    /// - `AnalyticalError::InvalidRate` - rate not finite
    /// - `AnalyticalError::InvalidVolatility` - volatility not finite and > 0
    pub fn new(
        underlying_price: f64,
        strike_price: f64,
        time_to_maturity: f64,
        risk_free_rate: f64,
        volatility: f64,
        option_type: OptionType,
    ) -> Result<Self, AnalyticalError> {
        if !is_positive(underlying_price) {
            return Err(AnalyticalError::InvalidSpot {
                spot: underlying_price,
            });
        }
        if !is_positive(strike_price) {
            return Err(AnalyticalError::InvalidStrike {
                strike: strike_price,
            });
        }
        if !is_positive(time_to_maturity) {
            return Err(AnalyticalError::InvalidExpiry {
                expiry: time_to_maturity,
            });
        }
        if !risk_free_rate.is_finite() {
            return Err(AnalyticalError::InvalidRate {
                rate: risk_free_rate,
            });
        }
        if !is_positive(volatility) {
            return Err(AnalyticalError::InvalidVolatility { volatility });
        }

        Ok(Self {
            underlying_price,
            strike_price,
            time_to_maturity,
            risk_free_rate,
            volatility,
            option_type,
        })
    }

    /// Underlying spot price (S).
    #[inline]
    pub fn underlying_price(&self) -> f64 {
        self.underlying_price
    }

    /// Strike price (K).
    #[inline]
    pub fn strike_price(&self) -> f64 {
        self.strike_price
    }

    /// Time to maturity in years (T).
    #[inline]
    pub fn time_to_maturity(&self) -> f64 {
        self.time_to_maturity
    }

    /// Continuously compounded risk-free rate (r).
    #[inline]
    pub fn risk_free_rate(&self) -> f64 {
        self.risk_free_rate
    }

    /// Annualised volatility (σ).
    #[inline]
    pub fn volatility(&self) -> f64 {
        self.volatility
    }

    /// Call or put.
    #[inline]
    pub fn option_type(&self) -> OptionType {
        self.option_type
    }
}

#[inline]
fn is_positive(x: f64) -> bool {
    x.is_finite() && x > 0.0
}
