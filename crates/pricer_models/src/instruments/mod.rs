//! Option instrument definitions.
//!
//! # Instrument Types
//!
//! - [`OptionType`]: Call or put tag, parsed case-insensitively
//! - [`OptionRequest`]: Validated inputs for pricing one European option
//!
//! # Examples
//!
//! ```
//! use pricer_models::instruments::{OptionRequest, OptionType};
//!
//! let option_type: OptionType = "PUT".parse().unwrap();
//! let request = OptionRequest::new(100.0, 105.0, 0.5, 0.03, 0.25, option_type).unwrap();
//! assert!(request.option_type().is_put());
//! ```

mod option_type;
mod request;

pub use option_type::OptionType;
pub use request::OptionRequest;
