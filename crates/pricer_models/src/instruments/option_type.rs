//! European option type tag.

use std::str::FromStr;

use crate::analytical::AnalyticalError;

/// Type of a European vanilla option.
///
/// # Variants
/// - `Call`: right to buy at the strike, payoff max(S - K, 0)
/// - `Put`: right to sell at the strike, payoff max(K - S, 0)
///
/// # Examples
/// ```
/// use pricer_models::instruments::OptionType;
///
/// let call: OptionType = "call".parse().unwrap();
/// assert_eq!(call, OptionType::Call);
/// assert_eq!(call.as_str(), "CALL");
///
/// assert!("STRADDLE".parse::<OptionType>().is_err());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "UPPERCASE"))]
pub enum OptionType {
    /// Call option
    Call,
    /// Put option
    Put,
}

impl OptionType {
    /// Return the wire tag ("CALL" or "PUT").
    #[inline]
    pub fn as_str(&self) -> &'static str {
        match self {
            OptionType::Call => "CALL",
            OptionType::Put => "PUT",
        }
    }

    /// Returns whether this is a call.
    #[inline]
    pub fn is_call(&self) -> bool {
        matches!(self, OptionType::Call)
    }

    /// Returns whether this is a put.
    #[inline]
    pub fn is_put(&self) -> bool {
        matches!(self, OptionType::Put)
    }
}

impl std::fmt::Display for OptionType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for OptionType {
    type Err = AnalyticalError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_uppercase().as_str() {
            "CALL" => Ok(OptionType::Call),
            "PUT" => Ok(OptionType::Put),
            _ => Err(AnalyticalError::UnsupportedOptionType {
                value: s.to_string(),
            }),
        }
    }
}
