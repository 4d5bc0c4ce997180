//! Piecewise-linear smile interpolation with flat extrapolation.

use super::interpolator::SmileInterpolator;
use super::point::VolPoint;
use super::volatility_smile::VolatilitySmile;
use crate::market_data::error::MarketDataError;

/// Piecewise-linear interpolation in strike (or log-moneyness).
///
/// Between nodes the implied volatility is the straight line through the
/// bracketing pair; outside the node range the boundary node's volatility
/// is returned unchanged. The result therefore never leaves the
/// [min, max] range of the smile's volatilities, and is exact at every node.
///
/// # Example
///
/// ```
/// use pricer_core::market_data::smile::{
///     LinearSmileInterpolator, SmileInterpolator, SmilePolicy, VolatilitySmile,
/// };
///
/// let smile = VolatilitySmile::from_pairs(
///     "1Y",
///     1.0,
///     &[(90.0, 0.25), (100.0, 0.20), (110.0, 0.30)],
///     SmilePolicy::Strict,
/// )
/// .unwrap();
///
/// let iv = LinearSmileInterpolator.iv_at_strike(&smile, 95.0).unwrap();
/// assert!((iv - 0.225).abs() < 1e-12);
///
/// // Flat below and above the node range
/// assert_eq!(LinearSmileInterpolator.iv_at_strike(&smile, 50.0).unwrap(), 0.25);
/// assert_eq!(LinearSmileInterpolator.iv_at_strike(&smile, 500.0).unwrap(), 0.30);
/// ```
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct LinearSmileInterpolator;

impl SmileInterpolator for LinearSmileInterpolator {
    fn iv_at_strike(&self, smile: &VolatilitySmile, strike: f64) -> Result<f64, MarketDataError> {
        validate_strike(strike)?;
        interpolate_flat(smile.points(), VolPoint::strike, strike)
    }

    fn iv_at_log_moneyness(
        &self,
        smile: &VolatilitySmile,
        strike: f64,
        forward: f64,
    ) -> Result<f64, MarketDataError> {
        validate_strike(strike)?;
        if !forward.is_finite() || forward <= 0.0 {
            return Err(MarketDataError::InvalidForward { forward });
        }

        // Nodes and target go through the same expression so a node strike
        // maps to exactly the node's abscissa. Difference of logs, since
        // k / forward can underflow to 0.
        let ln_forward = forward.ln();
        let log_moneyness = |k: f64| k.ln() - ln_forward;
        interpolate_flat(
            smile.points(),
            |p| log_moneyness(p.strike()),
            log_moneyness(strike),
        )
    }
}

#[inline]
fn validate_strike(strike: f64) -> Result<(), MarketDataError> {
    if !strike.is_finite() || strike <= 0.0 {
        return Err(MarketDataError::InvalidStrike { strike });
    }
    Ok(())
}

/// Linear interpolation over nodes sorted by `abscissa`, flat outside.
///
/// `abscissa` must be strictly increasing along `points`.
fn interpolate_flat<F>(points: &[VolPoint], abscissa: F, x: f64) -> Result<f64, MarketDataError>
where
    F: Fn(&VolPoint) -> f64,
{
    let (first, last) = match (points.first(), points.last()) {
        (Some(first), Some(last)) => (first, last),
        _ => return Err(MarketDataError::EmptySmile),
    };

    if points.len() == 1 {
        return Ok(first.implied_volatility());
    }

    if x <= abscissa(first) {
        return Ok(first.implied_volatility());
    }

    if x >= abscissa(last) {
        return Ok(last.implied_volatility());
    }

    // O(log n): first node strictly greater than x, then step back one
    let pos = points.partition_point(|p| abscissa(p) <= x);
    let segment = pos
        .checked_sub(1)
        .and_then(|i| Some((points.get(i)?, points.get(i + 1)?)));

    match segment {
        Some((p1, p2)) => {
            let (x1, x2) = (abscissa(p1), abscissa(p2));
            if !(x1 <= x && x <= x2) {
                return Err(MarketDataError::NoBracket { x });
            }

            // iv = iv1 + (iv2 - iv1) * (x - x1) / (x2 - x1)
            let (iv1, iv2) = (p1.implied_volatility(), p2.implied_volatility());
            Ok(iv1 + (iv2 - iv1) * (x - x1) / (x2 - x1))
        }
        None => Err(MarketDataError::NoBracket { x }),
    }
}
