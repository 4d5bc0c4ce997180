//! Analytical pricing formulas for European options.
//!
//! This module provides closed-form solutions for option pricing:
//! - Standard normal CDF and PDF (`distributions`)
//! - Black-Scholes price, d₁ and d₂ (`black_scholes`)
//! - Analytical Greeks: Delta, Gamma, Vega (`greeks`)
//!
//! ## Design Principles
//!
//! - **Generic over `T: Float`**: Works for `f64` and `f32`
//! - **One d₁ routine**: Prices and Greeks never recompute d₁ differently
//! - **Numerical Stability**: Uses erfc-based CDF with bounded relative error

pub mod black_scholes;
pub mod distributions;
pub mod error;
pub mod greeks;

// Re-export main types at module level
pub use black_scholes::BlackScholes;
pub use distributions::{norm_cdf, norm_pdf};
pub use error::AnalyticalError;
pub use greeks::Greeks;
