//! # pricer_core: Foundation Types for the Option Pricer
//!
//! ## Layer 1 (Foundation) Role
//!
//! pricer_core is the bottom layer of the workspace, providing:
//! - Error taxonomy: `ErrorKind`, `PricingError` (`types::error`)
//! - Volatility smile: `VolPoint`, `VolatilitySmile`, `SmilePolicy` (`market_data::smile`)
//! - Smile interpolation: `SmileInterpolator`, `LinearSmileInterpolator` (`market_data::smile`)
//!
//! ## Zero Dependency Principle
//!
//! Layer 1 has no dependencies on other pricer_* crates, with minimal external dependencies:
//! - thiserror: Error derivation
//! - serde: Serialisation support (optional)
//!
//! ## Usage Examples
//!
//! ```rust
//! use pricer_core::market_data::smile::{
//!     LinearSmileInterpolator, SmileInterpolator, SmilePolicy, VolatilitySmile,
//! };
//! use pricer_core::types::{ErrorKind, PricingError};
//!
//! let smile = VolatilitySmile::from_pairs(
//!     "3M",
//!     0.25,
//!     &[(90.0, 0.3), (100.0, 0.27), (110.0, 0.2)],
//!     SmilePolicy::Strict,
//! )
//! .unwrap();
//!
//! let iv = LinearSmileInterpolator.iv_at_strike(&smile, 105.0).unwrap();
//! # assert!((iv - 0.235).abs() < 1e-12);
//!
//! // Market data failures fold into the shared taxonomy
//! let err: PricingError = LinearSmileInterpolator
//!     .iv_at_strike(&smile, -1.0)
//!     .unwrap_err()
//!     .into();
//! assert_eq!(err.kind(), ErrorKind::InvalidArgument);
//! ```
//!
//! ## Feature Flags
//!
//! - `serde` (default): Enable serialisation for smiles, points, and error kinds

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![deny(rustdoc::private_intra_doc_links)]

pub mod market_data;
pub mod types;
