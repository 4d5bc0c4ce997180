//! Pricing orchestrator composing the kernel and the Greeks.

use super::result::{PricingModel, PricingResult};
use crate::analytical::{AnalyticalError, BlackScholes};
use crate::instruments::OptionRequest;

/// Prices European vanilla options with Black-Scholes.
///
/// Holds no state, so a single instance (or a fresh one per call) can be
/// shared freely across threads.
///
/// # Examples
/// ```
/// use pricer_models::instruments::{OptionRequest, OptionType};
/// use pricer_models::pricing::{OptionPricer, PricingModel};
///
/// let request = OptionRequest::new(100.0, 100.0, 1.0, 0.05, 0.2, OptionType::Call).unwrap();
/// let result = OptionPricer.price(&request).unwrap();
///
/// assert!((result.price() - 10.45).abs() < 0.01);
/// assert_eq!(result.pricing_model(), PricingModel::BlackScholes);
/// assert_eq!(result.volatility_used(), 0.2);
/// ```
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct OptionPricer;

impl OptionPricer {
    /// Creates a new pricer.
    pub fn new() -> Self {
        Self
    }

    /// Prices `request` and computes its Greeks.
    ///
    /// Price and Greeks share a single d₁ evaluation.
    ///
    /// # Errors
    /// Propagates kernel construction failures. A request built through
    /// [`OptionRequest::new`] already satisfies every kernel precondition.
    ///
    /// Returns [`AnalyticalError::NonFiniteResult`] when the inputs are valid
    /// but the price or a Greek overflows, e.g. `e^(-rT)` for a large
    /// negative rate over a long maturity.
    pub fn price(&self, request: &OptionRequest) -> Result<PricingResult, AnalyticalError> {
        let model = BlackScholes::new(
            request.underlying_price(),
            request.risk_free_rate(),
            request.volatility(),
        )?;

        let (price, greeks) = model.price_with_greeks(
            request.strike_price(),
            request.time_to_maturity(),
            request.option_type(),
        );

        for (quantity, value) in [
            ("price", price),
            ("delta", greeks.delta),
            ("gamma", greeks.gamma),
            ("vega", greeks.vega),
        ] {
            if !value.is_finite() {
                tracing::warn!(quantity, value, "non-finite pricing output");
                return Err(AnalyticalError::NonFiniteResult { quantity, value });
            }
        }

        tracing::debug!(
            option_type = %request.option_type(),
            spot = request.underlying_price(),
            strike = request.strike_price(),
            expiry = request.time_to_maturity(),
            price,
            "priced option"
        );

        Ok(PricingResult::new(
            price,
            greeks,
            PricingModel::BlackScholes,
            *request,
        ))
    }
}
