//! Error types for structured error handling.
//!
//! This module provides:
//! - `ErrorKind`: The three failure categories every layer reports into
//! - `PricingError`: Layer-neutral error carrying a kind and a message
//!
//! Layer-specific errors (`MarketDataError`, `AnalyticalError`) carry the
//! offending value and convert into `PricingError` via `From`.

use thiserror::Error;

/// Category of a failure.
///
/// # Variants
/// - `InvalidArgument`: Precondition violation on a primitive input
/// - `UnsupportedVariant`: Tagged value outside the supported set
/// - `InternalConsistency`: Broken invariant; a defect, not a user error
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "SCREAMING_SNAKE_CASE"))]
pub enum ErrorKind {
    /// Precondition violation on a primitive input.
    InvalidArgument,
    /// Tagged value outside the supported set.
    UnsupportedVariant,
    /// Broken internal invariant.
    InternalConsistency,
}

/// Categorised pricing errors.
///
/// Every failure raised by the core is reported synchronously to the
/// immediate caller; no partial results are ever returned.
///
/// # Examples
/// ```
/// use pricer_core::types::{ErrorKind, PricingError};
///
/// let err = PricingError::InvalidArgument("Negative spot price".to_string());
/// assert_eq!(format!("{}", err), "Invalid argument: Negative spot price");
/// assert_eq!(err.kind(), ErrorKind::InvalidArgument);
/// ```
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum PricingError {
    /// Invalid input data or parameters
    #[error("Invalid argument: {0}")]
    InvalidArgument(String),

    /// Variant outside the supported set (e.g. an unknown option type)
    #[error("Unsupported variant: {0}")]
    UnsupportedVariant(String),

    /// Internal invariant violated
    #[error("Internal consistency failure: {0}")]
    InternalConsistency(String),
}

impl PricingError {
    /// Returns the category of this error.
    #[inline]
    pub fn kind(&self) -> ErrorKind {
        match self {
            PricingError::InvalidArgument(_) => ErrorKind::InvalidArgument,
            PricingError::UnsupportedVariant(_) => ErrorKind::UnsupportedVariant,
            PricingError::InternalConsistency(_) => ErrorKind::InternalConsistency,
        }
    }

    /// Returns the message without the category prefix.
    pub fn message(&self) -> &str {
        match self {
            PricingError::InvalidArgument(msg)
            | PricingError::UnsupportedVariant(msg)
            | PricingError::InternalConsistency(msg) => msg,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display_prefixes() {
        assert_eq!(
            PricingError::InvalidArgument("bad spot".to_string()).to_string(),
            "Invalid argument: bad spot"
        );
        assert_eq!(
            PricingError::UnsupportedVariant("STRADDLE".to_string()).to_string(),
            "Unsupported variant: STRADDLE"
        );
        assert_eq!(
            PricingError::InternalConsistency("no bracket".to_string()).to_string(),
            "Internal consistency failure: no bracket"
        );
    }

    #[test]
    fn test_kind_mapping() {
        assert_eq!(
            PricingError::InvalidArgument(String::new()).kind(),
            ErrorKind::InvalidArgument
        );
        assert_eq!(
            PricingError::UnsupportedVariant(String::new()).kind(),
            ErrorKind::UnsupportedVariant
        );
        assert_eq!(
            PricingError::InternalConsistency(String::new()).kind(),
            ErrorKind::InternalConsistency
        );
    }

    #[test]
    fn test_message_strips_prefix() {
        let err = PricingError::InvalidArgument("Blank tenor".to_string());
        assert_eq!(err.message(), "Blank tenor");
    }

    #[test]
    fn test_error_trait_implementation() {
        let err = PricingError::InvalidArgument("x".to_string());
        let _: &dyn std::error::Error = &err;
    }
}
