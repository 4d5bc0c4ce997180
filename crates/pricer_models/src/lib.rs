//! # Pricer Models (L2: Business Logic)
//!
//! Closed-form European option pricing under Black-Scholes.
//!
//! This crate provides:
//! - Standard normal CDF/PDF (`analytical::distributions`)
//! - Black-Scholes kernel and analytical Greeks (`analytical`)
//! - Validated option requests (`instruments`)
//! - The pricing orchestrator and result bundle (`pricing`)
//!
//! Volatility smiles live one layer down in `pricer_core::market_data::smile`.
//!
//! ## Design Principles
//!
//! - **Validate once**: `OptionRequest` enforces every kernel precondition
//! - **Shared d₁**: price and Greeks derive from the same evaluation
//! - **Stateless services**: `OptionPricer` is `Copy + Send + Sync`
//!
//! ## Example
//!
//! ```
//! use pricer_models::instruments::{OptionRequest, OptionType};
//! use pricer_models::pricing::OptionPricer;
//!
//! let request = OptionRequest::new(100.0, 100.0, 1.0, 0.05, 0.2, OptionType::Put).unwrap();
//! let result = OptionPricer.price(&request).unwrap();
//! assert!((result.price() - 5.57).abs() < 0.01);
//! ```

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![deny(rustdoc::private_intra_doc_links)]

pub mod analytical;
pub mod instruments;
pub mod pricing;
