//! Volatility smile for a single tenor and its interpolators.
//!
//! This module provides:
//! - [`VolPoint`]: A validated (strike, implied volatility) node
//! - [`VolatilitySmile`]: Validated, strike-sorted set of nodes for one tenor
//! - [`SmileInterpolator`]: Trait for reading implied volatility off a smile
//! - [`LinearSmileInterpolator`]: Piecewise-linear, flat outside the node range
//! - [`SmileInterpolation`]: Static dispatch over the interpolation methods
//!
//! # Example
//!
//! ```
//! use pricer_core::market_data::smile::{
//!     LinearSmileInterpolator, SmileInterpolator, VolPoint, VolatilitySmile,
//! };
//!
//! let smile = VolatilitySmile::new(
//!     "1Y",
//!     1.0,
//!     vec![
//!         VolPoint::new(110.0, 0.30).unwrap(),
//!         VolPoint::new(90.0, 0.25).unwrap(),
//!         VolPoint::new(100.0, 0.20).unwrap(),
//!     ],
//! )
//! .unwrap();
//!
//! // Points are sorted on construction
//! assert_eq!(smile.min_strike().unwrap(), 90.0);
//!
//! let iv = LinearSmileInterpolator.iv_at_strike(&smile, 95.0).unwrap();
//! assert!((iv - 0.225).abs() < 1e-12);
//! ```

mod interpolator;
mod linear;
mod point;
mod volatility_smile;

pub use interpolator::{SmileInterpolation, SmileInterpolator};
pub use linear::LinearSmileInterpolator;
pub use point::{VolPoint, MAX_IMPLIED_VOLATILITY};
pub use volatility_smile::{SmilePolicy, VolatilitySmile};
