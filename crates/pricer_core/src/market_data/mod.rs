//! Market data structures for option pricing.
//!
//! # Components
//!
//! - [`smile`]: Single-tenor volatility smile and its interpolators
//! - [`error`]: Market data error types (MarketDataError)
//!
//! Smile coordinates are plain `f64`; the smile is an input to pricing,
//! never a differentiation target.

pub mod error;
pub mod smile;

// Re-export commonly used types
pub use error::MarketDataError;
pub use smile::{
    LinearSmileInterpolator, SmileInterpolation, SmileInterpolator, SmilePolicy, VolPoint,
    VolatilitySmile,
};
