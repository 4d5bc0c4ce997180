//! Smile interpolator trait and static dispatch over the available methods.

use super::linear::LinearSmileInterpolator;
use super::volatility_smile::VolatilitySmile;
use crate::market_data::error::MarketDataError;
use std::str::FromStr;

/// Strategy for reading an implied volatility off a [`VolatilitySmile`].
///
/// Implementations are stateless; the smile is passed in on every call so
/// one interpolator can be shared across threads and smiles.
///
/// # Contract
///
/// - `iv_at_strike(smile, K)` interpolates in strike space
/// - `iv_at_log_moneyness(smile, K, F)` interpolates in `ln(K/F)`
/// - Both return the node's volatility exactly when `K` is a node strike
///
/// # Errors
///
/// * `MarketDataError::InvalidStrike` - target strike not finite and positive
/// * `MarketDataError::InvalidForward` - forward not finite and positive
/// * `MarketDataError::EmptySmile` - smile has no points
/// * `MarketDataError::NoBracket` - sorted search failed (internal defect)
pub trait SmileInterpolator {
    /// Implied volatility at `strike`, interpolating in strike space.
    fn iv_at_strike(&self, smile: &VolatilitySmile, strike: f64) -> Result<f64, MarketDataError>;

    /// Implied volatility at `strike`, interpolating in log-moneyness
    /// `ln(strike / forward)`.
    fn iv_at_log_moneyness(
        &self,
        smile: &VolatilitySmile,
        strike: f64,
        forward: f64,
    ) -> Result<f64, MarketDataError>;
}

/// Static dispatch enum over the supported smile interpolation methods.
///
/// # Example
///
/// ```
/// use pricer_core::market_data::smile::{SmileInterpolation, SmileInterpolator, VolatilitySmile, VolPoint};
///
/// let method: SmileInterpolation = "linear".parse().unwrap();
/// assert_eq!(method.as_str(), "LINEAR");
///
/// let smile = VolatilitySmile::new(
///     "6M",
///     0.5,
///     vec![VolPoint::new(90.0, 0.25).unwrap(), VolPoint::new(110.0, 0.21).unwrap()],
/// )
/// .unwrap();
/// let iv = method.iv_at_strike(&smile, 100.0).unwrap();
/// assert!((iv - 0.23).abs() < 1e-12);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "SCREAMING_SNAKE_CASE"))]
pub enum SmileInterpolation {
    /// Piecewise-linear with flat extrapolation
    #[default]
    Linear,
}

impl SmileInterpolation {
    /// Return the wire name of the method.
    #[inline]
    pub fn as_str(&self) -> &'static str {
        match self {
            SmileInterpolation::Linear => "LINEAR",
        }
    }
}

impl std::fmt::Display for SmileInterpolation {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for SmileInterpolation {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "linear" => Ok(SmileInterpolation::Linear),
            other => Err(format!(
                "Unknown smile interpolation '{}'. Valid values: linear",
                other
            )),
        }
    }
}

impl SmileInterpolator for SmileInterpolation {
    #[inline]
    fn iv_at_strike(&self, smile: &VolatilitySmile, strike: f64) -> Result<f64, MarketDataError> {
        match self {
            SmileInterpolation::Linear => LinearSmileInterpolator.iv_at_strike(smile, strike),
        }
    }

    #[inline]
    fn iv_at_log_moneyness(
        &self,
        smile: &VolatilitySmile,
        strike: f64,
        forward: f64,
    ) -> Result<f64, MarketDataError> {
        match self {
            SmileInterpolation::Linear => {
                LinearSmileInterpolator.iv_at_log_moneyness(smile, strike, forward)
            }
        }
    }
}
