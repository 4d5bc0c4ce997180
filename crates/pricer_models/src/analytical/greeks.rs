//! Analytical Black-Scholes Greeks.
//!
//! - Call Delta = N(d₁), Put Delta = N(d₁) - 1
//! - Gamma = φ(d₁) / (S·σ·√T)
//! - Vega = S·√T·φ(d₁)
//!
//! Gamma and vega are identical for calls and puts. Vega is per unit of
//! volatility (multiply by 0.01 for a one-point move).

use num_traits::Float;

use super::black_scholes::BlackScholes;
use super::distributions::{norm_cdf, norm_pdf};
use crate::instruments::OptionType;

/// First and second order sensitivities of an option price.
///
/// # Examples
/// ```
/// use pricer_models::analytical::BlackScholes;
/// use pricer_models::instruments::OptionType;
///
/// let bs = BlackScholes::new(100.0_f64, 0.05, 0.2).unwrap();
/// let greeks = bs.greeks(100.0, 1.0, OptionType::Call);
///
/// assert!((greeks.delta - 0.6368).abs() < 1e-4);
/// assert!((greeks.gamma - 0.0188).abs() < 1e-4);
/// assert!((greeks.vega - 37.52).abs() < 1e-2);
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Greeks<T> {
    /// ∂V/∂S
    pub delta: T,
    /// ∂²V/∂S²
    pub gamma: T,
    /// ∂V/∂σ
    pub vega: T,
}

impl<T: Float> BlackScholes<T> {
    /// Computes Delta (∂V/∂S).
    ///
    /// Lies in [0, 1] for calls and [-1, 0] for puts.
    #[inline]
    pub fn delta(&self, strike: T, expiry: T, option_type: OptionType) -> T {
        delta_from_d1(self.d1(strike, expiry), option_type)
    }

    /// Computes Gamma (∂²V/∂S²). Always non-negative.
    #[inline]
    pub fn gamma(&self, strike: T, expiry: T) -> T {
        self.gamma_from_d1(self.d1(strike, expiry), expiry)
    }

    /// Computes Vega (∂V/∂σ). Always non-negative.
    #[inline]
    pub fn vega(&self, strike: T, expiry: T) -> T {
        self.vega_from_d1(self.d1(strike, expiry), expiry)
    }

    /// Computes delta, gamma and vega from a single d₁ evaluation.
    pub fn greeks(&self, strike: T, expiry: T, option_type: OptionType) -> Greeks<T> {
        self.greeks_from_d1(self.d1(strike, expiry), expiry, option_type)
    }

    /// Computes the price together with its Greeks from one d₁ evaluation.
    ///
    /// # Examples
    /// ```
    /// use pricer_models::analytical::BlackScholes;
    /// use pricer_models::instruments::OptionType;
    ///
    /// let bs = BlackScholes::new(100.0_f64, 0.05, 0.2).unwrap();
    /// let (price, greeks) = bs.price_with_greeks(100.0, 1.0, OptionType::Put);
    ///
    /// assert_eq!(price, bs.price_put(100.0, 1.0));
    /// assert_eq!(greeks, bs.greeks(100.0, 1.0, OptionType::Put));
    /// ```
    pub fn price_with_greeks(
        &self,
        strike: T,
        expiry: T,
        option_type: OptionType,
    ) -> (T, Greeks<T>) {
        let d1 = self.d1(strike, expiry);
        (
            self.price_from_d1(d1, strike, expiry, option_type),
            self.greeks_from_d1(d1, expiry, option_type),
        )
    }

    #[inline]
    fn greeks_from_d1(&self, d1: T, expiry: T, option_type: OptionType) -> Greeks<T> {
        Greeks {
            delta: delta_from_d1(d1, option_type),
            gamma: self.gamma_from_d1(d1, expiry),
            vega: self.vega_from_d1(d1, expiry),
        }
    }

    #[inline]
    fn gamma_from_d1(&self, d1: T, expiry: T) -> T {
        norm_pdf(d1) / (self.spot() * self.vol_sqrt_t(expiry))
    }

    #[inline]
    fn vega_from_d1(&self, d1: T, expiry: T) -> T {
        self.spot() * expiry.sqrt() * norm_pdf(d1)
    }
}

#[inline]
fn delta_from_d1<T: Float>(d1: T, option_type: OptionType) -> T {
    match option_type {
        OptionType::Call => norm_cdf(d1),
        OptionType::Put => norm_cdf(d1) - T::one(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    fn model() -> BlackScholes<f64> {
        BlackScholes::new(100.0, 0.05, 0.2).unwrap()
    }

    // ==========================================================
    // Reference Value Tests
    // ==========================================================

    #[test]
    fn test_atm_call_greeks() {
        let g = model().greeks(100.0, 1.0, OptionType::Call);
        assert_relative_eq!(g.delta, 0.6368306511756191, epsilon = 1e-6);
        assert_relative_eq!(g.gamma, 0.018762017345846895, epsilon = 1e-9);
        assert_relative_eq!(g.vega, 37.52403469169379, epsilon = 1e-9);
    }

    #[test]
    fn test_atm_put_greeks() {
        let g = model().greeks(100.0, 1.0, OptionType::Put);
        assert_relative_eq!(g.delta, 0.6368306511756191 - 1.0, epsilon = 1e-6);
        assert_relative_eq!(g.gamma, 0.018762017345846895, epsilon = 1e-9);
        assert_relative_eq!(g.vega, 37.52403469169379, epsilon = 1e-9);
    }

    #[test]
    fn test_individual_greeks_match_bundle() {
        let bs = model();
        for option_type in [OptionType::Call, OptionType::Put] {
            let g = bs.greeks(95.0, 0.75, option_type);
            assert_eq!(g.delta, bs.delta(95.0, 0.75, option_type));
            assert_eq!(g.gamma, bs.gamma(95.0, 0.75));
            assert_eq!(g.vega, bs.vega(95.0, 0.75));
        }
    }

    #[test]
    fn test_price_with_greeks_is_bit_identical() {
        let bs = model();
        for option_type in [OptionType::Call, OptionType::Put] {
            let (price, greeks) = bs.price_with_greeks(110.0, 2.0, option_type);
            assert_eq!(price, bs.price(110.0, 2.0, option_type));
            assert_eq!(greeks, bs.greeks(110.0, 2.0, option_type));
        }
    }

    // ==========================================================
    // Relationship Tests
    // ==========================================================

    #[test]
    fn test_delta_call_put_relationship() {
        let bs = model();
        let diff = bs.delta(105.0, 1.0, OptionType::Call) - bs.delta(105.0, 1.0, OptionType::Put);
        assert_relative_eq!(diff, 1.0, epsilon = 1e-14);
    }

    #[test]
    fn test_gamma_peaks_near_the_money() {
        let bs = BlackScholes::new(100.0_f64, 0.0, 0.2).unwrap();
        let atm = bs.gamma(100.0, 1.0);
        assert!(atm > bs.gamma(70.0, 1.0));
        assert!(atm > bs.gamma(140.0, 1.0));
    }

    // ==========================================================
    // Finite Difference Verification
    // ==========================================================

    #[test]
    fn test_delta_vs_finite_diff() {
        let h = 0.01;
        let up = BlackScholes::new(100.0 + h, 0.05, 0.2).unwrap();
        let dn = BlackScholes::new(100.0 - h, 0.05, 0.2).unwrap();

        let fd = (up.price_call(100.0, 1.0) - dn.price_call(100.0, 1.0)) / (2.0 * h);
        assert_relative_eq!(model().delta(100.0, 1.0, OptionType::Call), fd, epsilon = 1e-4);
    }

    #[test]
    fn test_gamma_vs_finite_diff() {
        let h = 0.1;
        let up = BlackScholes::new(100.0 + h, 0.05, 0.2).unwrap();
        let dn = BlackScholes::new(100.0 - h, 0.05, 0.2).unwrap();

        let fd = (up.price_call(100.0, 1.0) - 2.0 * model().price_call(100.0, 1.0)
            + dn.price_call(100.0, 1.0))
            / (h * h);
        assert_relative_eq!(model().gamma(100.0, 1.0), fd, epsilon = 1e-3);
    }

    #[test]
    fn test_vega_vs_finite_diff() {
        let h = 0.001;
        let up = BlackScholes::new(100.0, 0.05, 0.2 + h).unwrap();
        let dn = BlackScholes::new(100.0, 0.05, 0.2 - h).unwrap();

        let fd = (up.price_call(100.0, 1.0) - dn.price_call(100.0, 1.0)) / (2.0 * h);
        assert_relative_eq!(model().vega(100.0, 1.0), fd, epsilon = 1e-3);
    }

    #[test]
    fn test_greeks_f32() {
        let bs = BlackScholes::new(100.0_f32, 0.05, 0.2).unwrap();
        let g = bs.greeks(100.0, 1.0, OptionType::Call);
        assert!((g.delta - 0.6368_f32).abs() < 1e-3);
    }

    // ==========================================================
    // Property-based Tests
    // ==========================================================

    mod proptest_tests {
        use super::*;
        use proptest::prelude::*;

        proptest! {
            #![proptest_config(ProptestConfig::with_cases(1000))]

            #[test]
            fn test_greek_ranges(
                spot in 1.0f64..500.0,
                strike in 1.0f64..500.0,
                expiry in 0.01f64..10.0,
                rate in -0.05f64..0.15,
                vol in 0.01f64..2.0,
            ) {
                let bs = BlackScholes::new(spot, rate, vol).unwrap();
                let call = bs.greeks(strike, expiry, OptionType::Call);
                let put = bs.greeks(strike, expiry, OptionType::Put);

                prop_assert!((0.0..=1.0).contains(&call.delta));
                prop_assert!((-1.0..=0.0).contains(&put.delta));
                prop_assert!(call.gamma >= 0.0 && call.gamma.is_finite());
                prop_assert!(call.vega >= 0.0 && call.vega.is_finite());
                prop_assert_eq!(call.gamma, put.gamma);
                prop_assert_eq!(call.vega, put.vega);
            }
        }
    }
}
