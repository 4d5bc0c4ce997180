//! Pricing orchestration.
//!
//! This module provides:
//! - [`OptionPricer`]: Stateless entry point pricing an [`OptionRequest`](crate::instruments::OptionRequest)
//! - [`PricingResult`]: Price, Greeks and audit metadata for one request
//! - [`PricingModel`]: Tag identifying the model that produced a result

mod pricer;
mod result;

pub use pricer::OptionPricer;
pub use result::{PricingModel, PricingResult};
