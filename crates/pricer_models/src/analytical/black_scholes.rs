//! Black-Scholes pricing model for European options.
//!
//! ## Mathematical Formulas
//!
//! **Call Price**: C = S·N(d₁) - K·e^(-rT)·N(d₂)
//! **Put Price**: P = K·e^(-rT)·N(-d₂) - S·N(-d₁)
//!
//! Where:
//! - d₁ = (ln(S/K) + (r + σ²/2)T) / (σ√T)
//! - d₂ = d₁ - σ√T
//!
//! The formulas divide by σ√T, so σ = 0 and T = 0 are precondition
//! violations. Volatility is rejected by [`BlackScholes::new`]; strike and
//! expiry are validated by [`OptionRequest`](crate::instruments::OptionRequest).

use num_traits::Float;

use super::distributions::{lit, norm_cdf};
use super::error::AnalyticalError;
use crate::instruments::OptionType;

/// Black-Scholes model for European option pricing.
///
/// Holds the market state (spot, rate, volatility); strike and expiry are
/// supplied per evaluation.
///
/// # Type Parameters
/// * `T` - Floating-point type implementing `Float` (e.g., `f64`, `f32`)
///
/// # Examples
/// ```
/// use pricer_models::analytical::BlackScholes;
///
/// let bs = BlackScholes::new(100.0_f64, 0.05, 0.2).unwrap();
/// let call_price = bs.price_call(100.0, 1.0);
/// let put_price = bs.price_put(100.0, 1.0);
///
/// // Put-call parity: C - P = S - K*exp(-rT)
/// let parity = call_price - put_price - (100.0 - 100.0 * (-0.05_f64).exp());
/// assert!(parity.abs() < 1e-10);
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BlackScholes<T: Float> {
    /// Spot price (S)
    spot: T,
    /// Risk-free interest rate (r)
    rate: T,
    /// Volatility (σ)
    volatility: T,
}

impl<T: Float> BlackScholes<T> {
    /// Creates a new Black-Scholes model.
    ///
    /// # Arguments
    /// * `spot` - Current spot price (finite, positive)
    /// * `rate` - Risk-free interest rate, continuously compounded (finite)
    /// * `volatility` - Annualised volatility (finite, positive)
    ///
    /// # Errors
    /// - `AnalyticalError::InvalidSpot` if spot <= 0 or not finite
    /// - `AnalyticalError::InvalidRate` if rate is not finite
    /// - `AnalyticalError::InvalidVolatility` if volatility <= 0 or not finite
    ///
    /// # Examples
    /// ```
    /// use pricer_models::analytical::{AnalyticalError, BlackScholes};
    ///
    /// assert!(BlackScholes::new(100.0_f64, 0.05, 0.2).is_ok());
    /// assert!(BlackScholes::new(-100.0_f64, 0.05, 0.2).is_err());
    ///
    /// // Zero volatility makes d1 undefined
    /// assert_eq!(
    ///     BlackScholes::new(100.0_f64, 0.05, 0.0).unwrap_err(),
    ///     AnalyticalError::InvalidVolatility { volatility: 0.0 }
    /// );
    /// ```
    pub fn new(spot: T, rate: T, volatility: T) -> Result<Self, AnalyticalError> {
        let zero = T::zero();

        if !spot.is_finite() || spot <= zero {
            return Err(AnalyticalError::InvalidSpot {
                spot: to_f64(spot),
            });
        }

        if !rate.is_finite() {
            return Err(AnalyticalError::InvalidRate {
                rate: to_f64(rate),
            });
        }

        if !volatility.is_finite() || volatility <= zero {
            return Err(AnalyticalError::InvalidVolatility {
                volatility: to_f64(volatility),
            });
        }

        Ok(Self {
            spot,
            rate,
            volatility,
        })
    }

    /// Returns the spot price.
    #[inline]
    pub fn spot(&self) -> T {
        self.spot
    }

    /// Returns the risk-free rate.
    #[inline]
    pub fn rate(&self) -> T {
        self.rate
    }

    /// Returns the volatility.
    #[inline]
    pub fn volatility(&self) -> T {
        self.volatility
    }

    /// Computes the d1 term of the Black-Scholes formula.
    ///
    /// d₁ = (ln(S/K) + (r + σ²/2)T) / (σ√T)
    ///
    /// Every price and Greek derives from this one routine, so a price and
    /// the sensitivities computed for the same inputs share the same d₁ bits.
    ///
    /// # Arguments
    /// * `strike` - Strike price (K > 0)
    /// * `expiry` - Time to expiration in years (T > 0)
    #[inline]
    pub fn d1(&self, strike: T, expiry: T) -> T {
        let log_moneyness = (self.spot / strike).ln();
        let vol_sqrt_t = self.vol_sqrt_t(expiry);

        // Divided through by σ√T so σ² is never formed
        (log_moneyness + self.rate * expiry) / vol_sqrt_t + lit::<T>(0.5) * vol_sqrt_t
    }

    /// Computes the d2 term of the Black-Scholes formula.
    ///
    /// d₂ = d₁ - σ√T
    #[inline]
    pub fn d2(&self, strike: T, expiry: T) -> T {
        self.d1(strike, expiry) - self.vol_sqrt_t(expiry)
    }

    /// σ√T
    #[inline]
    pub(crate) fn vol_sqrt_t(&self, expiry: T) -> T {
        self.volatility * expiry.sqrt()
    }

    /// Computes European call option price.
    ///
    /// C = S·N(d₁) - K·e^(-rT)·N(d₂)
    ///
    /// # Examples
    /// ```
    /// use pricer_models::analytical::BlackScholes;
    ///
    /// let bs = BlackScholes::new(100.0_f64, 0.05, 0.2).unwrap();
    /// let price = bs.price_call(100.0, 1.0);
    /// assert!((price - 10.4506).abs() < 1e-3);
    /// ```
    #[inline]
    pub fn price_call(&self, strike: T, expiry: T) -> T {
        self.price_from_d1(self.d1(strike, expiry), strike, expiry, OptionType::Call)
    }

    /// Computes European put option price.
    ///
    /// P = K·e^(-rT)·N(-d₂) - S·N(-d₁)
    ///
    /// # Examples
    /// ```
    /// use pricer_models::analytical::BlackScholes;
    ///
    /// let bs = BlackScholes::new(100.0_f64, 0.05, 0.2).unwrap();
    /// let price = bs.price_put(100.0, 1.0);
    /// assert!((price - 5.5735).abs() < 1e-3);
    /// ```
    #[inline]
    pub fn price_put(&self, strike: T, expiry: T) -> T {
        self.price_from_d1(self.d1(strike, expiry), strike, expiry, OptionType::Put)
    }

    /// Computes the price for either option type.
    #[inline]
    pub fn price(&self, strike: T, expiry: T, option_type: OptionType) -> T {
        self.price_from_d1(self.d1(strike, expiry), strike, expiry, option_type)
    }

    /// Price given a precomputed d₁.
    #[inline]
    pub(crate) fn price_from_d1(&self, d1: T, strike: T, expiry: T, option_type: OptionType) -> T {
        let d2 = d1 - self.vol_sqrt_t(expiry);
        let discounted_strike = strike * (-self.rate * expiry).exp();

        match option_type {
            OptionType::Call => self.spot * norm_cdf(d1) - discounted_strike * norm_cdf(d2),
            OptionType::Put => discounted_strike * norm_cdf(-d2) - self.spot * norm_cdf(-d1),
        }
    }
}

#[inline]
fn to_f64<T: Float>(x: T) -> f64 {
    x.to_f64().unwrap_or(f64::NAN)
}
