//! Core error types.
//!
//! This module provides:
//! - `error`: The error taxonomy shared by every layer of the workspace
//!
//! # Re-exports
//!
//! [`ErrorKind`] and [`PricingError`] are re-exported at this module level.

pub mod error;

pub use error::{ErrorKind, PricingError};
