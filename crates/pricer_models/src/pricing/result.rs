//! Pricing result bundle.

use crate::analytical::Greeks;
use crate::instruments::OptionRequest;

/// Model that produced a [`PricingResult`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "SCREAMING_SNAKE_CASE"))]
pub enum PricingModel {
    /// Closed-form Black-Scholes
    #[default]
    BlackScholes,
}

impl PricingModel {
    /// Return the wire tag of the model.
    #[inline]
    pub fn as_str(&self) -> &'static str {
        match self {
            PricingModel::BlackScholes => "BLACK_SCHOLES",
        }
    }
}

impl std::fmt::Display for PricingModel {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Fair value and sensitivities of one option, with the request echoed
/// back for audit.
///
/// Built only by [`OptionPricer`](super::OptionPricer); immutable afterwards.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "camelCase"))]
pub struct PricingResult {
    price: f64,
    delta: f64,
    gamma: f64,
    vega: f64,
    volatility_used: f64,
    pricing_model: PricingModel,
    input: OptionRequest,
}

impl PricingResult {
    pub(crate) fn new(
        price: f64,
        greeks: Greeks<f64>,
        pricing_model: PricingModel,
        input: OptionRequest,
    ) -> Self {
        Self {
            price,
            delta: greeks.delta,
            gamma: greeks.gamma,
            vega: greeks.vega,
            volatility_used: input.volatility(),
            pricing_model,
            input,
        }
    }

    /// Option fair value.
    #[inline]
    pub fn price(&self) -> f64 {
        self.price
    }

    /// ∂V/∂S
    #[inline]
    pub fn delta(&self) -> f64 {
        self.delta
    }

    /// ∂²V/∂S²
    #[inline]
    pub fn gamma(&self) -> f64 {
        self.gamma
    }

    /// ∂V/∂σ
    #[inline]
    pub fn vega(&self) -> f64 {
        self.vega
    }

    /// The three Greeks as one value.
    #[inline]
    pub fn greeks(&self) -> Greeks<f64> {
        Greeks {
            delta: self.delta,
            gamma: self.gamma,
            vega: self.vega,
        }
    }

    /// Volatility the price was computed with.
    #[inline]
    pub fn volatility_used(&self) -> f64 {
        self.volatility_used
    }

    /// Model tag.
    #[inline]
    pub fn pricing_model(&self) -> PricingModel {
        self.pricing_model
    }

    /// The request that was priced.
    #[inline]
    pub fn input(&self) -> &OptionRequest {
        &self.input
    }
}
