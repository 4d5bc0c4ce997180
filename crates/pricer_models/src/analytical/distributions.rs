//! Standard normal distribution functions.
//!
//! This module provides:
//! - `norm_cdf`: Cumulative distribution function (CDF)
//! - `norm_pdf`: Probability density function (PDF)
//!
//! Both are stateless, generic over `T: Float`, and safe to call from any
//! number of threads.

use num_traits::Float;

/// Square root of 2.
const SQRT_2: f64 = std::f64::consts::SQRT_2;

/// 1 / sqrt(2 * pi)
const FRAC_1_SQRT_2PI: f64 = 0.398_942_280_401_432_7;

/// Chebyshev coefficients for erfc, lowest order first.
const ERFC_COEFFS: [f64; 10] = [
    -1.265_512_23,
    1.000_023_68,
    0.374_091_96,
    0.096_784_18,
    -0.186_288_06,
    0.278_868_07,
    -1.135_203_98,
    1.488_515_87,
    -0.822_152_23,
    0.170_872_77,
];

#[inline]
pub(crate) fn lit<T: Float>(x: f64) -> T {
    T::from(x).unwrap_or_else(T::nan)
}

/// Complementary error function via a Chebyshev fit.
///
/// erfc(x) = 1 - erf(x) = (2/√π) ∫_x^∞ e^(-t²) dt
///
/// Fractional error is below 1.2e-7 on the whole real line, so tail values
/// stay accurate relative to their own magnitude instead of only in
/// absolute terms. Underflows cleanly to 0 (or 2 for negative x).
#[inline]
fn erfc<T: Float>(x: T) -> T {
    let z = x.abs();
    let t = T::one() / (T::one() + lit::<T>(0.5) * z);

    // Horner, highest order first
    let poly = ERFC_COEFFS
        .iter()
        .rev()
        .fold(T::zero(), |acc, &c| lit::<T>(c) + t * acc);

    let ans = t * (-z * z + poly).exp();

    if x < T::zero() {
        lit::<T>(2.0) - ans
    } else {
        ans
    }
}

/// Standard normal cumulative distribution function.
///
/// Computes P(X <= x) where X ~ N(0, 1) using the complementary error function.
///
/// # Mathematical Definition
/// Φ(x) = (1/2) * erfc(-x / sqrt(2))
///
/// # Accuracy
/// Relative error below 1.2e-7 for all finite x, including the far tails.
/// `Φ(x) + Φ(-x) = 1` holds to rounding.
///
/// # Examples
/// ```
/// use pricer_models::analytical::distributions::norm_cdf;
///
/// let cdf_0 = norm_cdf(0.0_f64);
/// assert!((cdf_0 - 0.5).abs() < 1e-7);
///
/// // Tail probabilities keep their relative accuracy
/// let tail = norm_cdf(-8.0_f64);
/// assert!((tail / 6.220960574271784e-16 - 1.0).abs() < 1e-6);
/// ```
#[inline]
pub fn norm_cdf<T: Float>(x: T) -> T {
    let arg = -x / lit::<T>(SQRT_2);
    lit::<T>(0.5) * erfc(arg)
}

/// Standard normal probability density function.
///
/// # Mathematical Definition
/// φ(x) = (1 / sqrt(2π)) * exp(-x² / 2)
///
/// # Examples
/// ```
/// use pricer_models::analytical::distributions::norm_pdf;
///
/// // φ(1) = exp(-0.5) / sqrt(2π) ≈ 0.2420
/// assert!((norm_pdf(1.0_f64) - 0.2419707245).abs() < 1e-7);
/// ```
#[inline]
pub fn norm_pdf<T: Float>(x: T) -> T {
    let exponent = -lit::<T>(0.5) * x * x;
    lit::<T>(FRAC_1_SQRT_2PI) * exponent.exp()
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    // ==========================================================
    // norm_cdf tests
    // ==========================================================

    #[test]
    fn test_norm_cdf_at_zero() {
        assert_relative_eq!(norm_cdf(0.0_f64), 0.5, epsilon = 1e-7);
    }

    #[test]
    fn test_norm_cdf_symmetry() {
        let test_values = [-8.0, -3.0, -2.0, -1.0, -0.5, 0.0, 0.5, 1.0, 2.0, 3.0, 8.0];
        for x in test_values {
            assert_relative_eq!(norm_cdf(x) + norm_cdf(-x), 1.0, epsilon = 1e-14);
        }
    }

    #[test]
    fn test_norm_cdf_reference_values() {
        assert_relative_eq!(norm_cdf(1.0_f64), 0.8413447460685429, epsilon = 1e-7);
        assert_relative_eq!(norm_cdf(-1.0_f64), 0.15865525393145707, epsilon = 1e-7);
        assert_relative_eq!(norm_cdf(2.0_f64), 0.9772498680518208, epsilon = 1e-7);
        assert_relative_eq!(norm_cdf(-2.0_f64), 0.022750131948179195, epsilon = 1e-7);
        assert_relative_eq!(norm_cdf(3.0_f64), 0.9986501019683699, epsilon = 1e-7);
    }

    #[test]
    fn test_norm_cdf_tail_relative_accuracy() {
        assert_relative_eq!(norm_cdf(-5.0_f64), 2.866515718791939e-7, max_relative = 1e-6);
        assert_relative_eq!(norm_cdf(-8.0_f64), 6.220960574271784e-16, max_relative = 1e-6);
        assert_relative_eq!(norm_cdf(-10.0_f64), 7.619853024160527e-24, max_relative = 1e-6);
    }

    #[test]
    fn test_norm_cdf_extreme_values() {
        for x in [8.0_f64, 10.0, 40.0, 1e10, f64::MAX] {
            let hi = norm_cdf(x);
            let lo = norm_cdf(-x);
            assert!(!hi.is_nan() && !lo.is_nan());
            assert!(hi > 0.999999 && hi <= 1.0);
            assert!(lo < 1e-6 && lo >= 0.0);
        }

        // Saturates exactly once exp(-x²) underflows
        assert_eq!(norm_cdf(40.0_f64), 1.0);
        assert_eq!(norm_cdf(-40.0_f64), 0.0);
    }

    #[test]
    fn test_norm_cdf_monotonic() {
        let values: Vec<f64> = (-50..=50).map(|i| i as f64 * 0.1).collect();
        for pair in values.windows(2) {
            assert!(
                norm_cdf(pair[1]) > norm_cdf(pair[0]),
                "CDF not monotonic at x = {}",
                pair[0]
            );
        }
    }

    #[test]
    fn test_norm_cdf_bounds() {
        let test_values: Vec<f64> = (-100..=100).map(|i| i as f64 * 0.1).collect();
        for x in test_values {
            let result = norm_cdf(x);
            assert!((0.0..=1.0).contains(&result), "CDF out of [0, 1] at x = {}", x);
        }
    }

    #[test]
    fn test_norm_cdf_f32_compatibility() {
        let result = norm_cdf(0.0_f32);
        assert!((result - 0.5).abs() < 1e-5);
    }

    // ==========================================================
    // norm_pdf tests
    // ==========================================================

    #[test]
    fn test_norm_pdf_at_zero() {
        assert_relative_eq!(norm_pdf(0.0_f64), FRAC_1_SQRT_2PI, epsilon = 1e-15);
    }

    #[test]
    fn test_norm_pdf_symmetry() {
        for x in [0.5, 1.0, 1.5, 2.0, 2.5, 3.0] {
            assert_eq!(norm_pdf(x), norm_pdf(-x));
        }
    }

    #[test]
    fn test_norm_pdf_reference_values() {
        assert_relative_eq!(norm_pdf(1.0_f64), 0.24197072451914337, epsilon = 1e-12);
        assert_relative_eq!(norm_pdf(2.0_f64), 0.05399096651318806, epsilon = 1e-12);
        assert_relative_eq!(norm_pdf(3.0_f64), 0.004431848411938008, epsilon = 1e-12);
    }

    #[test]
    fn test_norm_pdf_tails() {
        assert!(norm_pdf(8.0_f64) < 1e-12);
        assert_eq!(norm_pdf(100.0_f64), 0.0);
        assert!(!norm_pdf(f64::MAX).is_nan());
    }

    // ==========================================================
    // CDF / PDF consistency
    // ==========================================================

    #[test]
    fn test_cdf_pdf_relationship() {
        let h = 1e-4;
        for x in [-2.0, -1.0, 0.0, 1.0, 2.0] {
            let numerical_derivative = (norm_cdf(x + h) - norm_cdf(x - h)) / (2.0 * h);
            assert_relative_eq!(numerical_derivative, norm_pdf(x), epsilon = 1e-4);
        }
    }
}
