//! Strike-sorted volatility smile for a single maturity.

use super::point::VolPoint;
use crate::market_data::error::MarketDataError;
use std::str::FromStr;

/// Minimum point count accepted by a smile.
///
/// Two policies coexist for degenerate smiles. `Strict` refuses to build
/// a smile that cannot be interpolated; `Relaxed` accepts empty and
/// single-point smiles and lets the interpolator degrade to boundary-value
/// behaviour.
///
/// # Example
///
/// ```
/// use pricer_core::market_data::smile::SmilePolicy;
///
/// assert_eq!(SmilePolicy::default(), SmilePolicy::Strict);
/// assert_eq!(SmilePolicy::Strict.min_points(), 2);
/// assert_eq!(SmilePolicy::Relaxed.min_points(), 0);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
pub enum SmilePolicy {
    /// At least two points required.
    #[default]
    Strict,
    /// Empty and single-point smiles accepted.
    Relaxed,
}

impl SmilePolicy {
    /// Returns the minimum number of points this policy accepts.
    #[inline]
    pub fn min_points(&self) -> usize {
        match self {
            SmilePolicy::Strict => 2,
            SmilePolicy::Relaxed => 0,
        }
    }

    /// Returns the lowercase configuration name.
    #[inline]
    pub fn as_str(&self) -> &'static str {
        match self {
            SmilePolicy::Strict => "strict",
            SmilePolicy::Relaxed => "relaxed",
        }
    }
}

impl FromStr for SmilePolicy {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "strict" => Ok(SmilePolicy::Strict),
            "relaxed" => Ok(SmilePolicy::Relaxed),
            _ => Err(format!(
                "unknown smile policy '{}', expected 'strict' or 'relaxed'",
                s
            )),
        }
    }
}

impl std::fmt::Display for SmilePolicy {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Implied volatility smile for one maturity.
///
/// Built once from an unordered point collection: the points are copied,
/// validated, and sorted by strike. The smile owns its nodes and only
/// exposes them as a read-only slice, so a constructed smile can be shared
/// across threads and interpolated concurrently without locking.
///
/// # Invariants
///
/// - `tenor` is not blank
/// - `maturity_years` is finite and > 0
/// - strikes strictly increasing (duplicates rejected, never merged)
/// - point count >= `policy.min_points()`
///
/// `tenor` and `maturity_years` are descriptive only; interpolation never
/// reads them.
///
/// # Example
///
/// ```
/// use pricer_core::market_data::smile::{VolPoint, VolatilitySmile};
///
/// let smile = VolatilitySmile::new(
///     "1Y",
///     1.0,
///     vec![VolPoint::new(110.0, 0.2).unwrap(), VolPoint::new(90.0, 0.3).unwrap()],
/// )
/// .unwrap();
///
/// assert_eq!(smile.len(), 2);
/// assert_eq!(smile.min_strike().unwrap(), 90.0);
/// assert_eq!(smile.points()[0].implied_volatility(), 0.3);
/// ```
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "camelCase"))]
pub struct VolatilitySmile {
    tenor: String,
    maturity_years: f64,
    points: Vec<VolPoint>,
    #[cfg_attr(feature = "serde", serde(skip))]
    policy: SmilePolicy,
}

impl VolatilitySmile {
    /// Builds a smile under [`SmilePolicy::Strict`].
    ///
    /// # Errors
    ///
    /// See [`VolatilitySmile::with_policy`].
    pub fn new<I>(
        tenor: impl Into<String>,
        maturity_years: f64,
        points: I,
    ) -> Result<Self, MarketDataError>
    where
        I: IntoIterator<Item = VolPoint>,
    {
        Self::with_policy(tenor, maturity_years, points, SmilePolicy::Strict)
    }

    /// Builds a smile under an explicit point-count policy.
    ///
    /// # Errors
    ///
    /// Checked in this order:
    /// - `MarketDataError::BlankTenor`
    /// - `MarketDataError::InvalidMaturity`
    /// - `MarketDataError::InsufficientData`
    /// - `MarketDataError::DuplicateStrike` (after sorting)
    pub fn with_policy<I>(
        tenor: impl Into<String>,
        maturity_years: f64,
        points: I,
        policy: SmilePolicy,
    ) -> Result<Self, MarketDataError>
    where
        I: IntoIterator<Item = VolPoint>,
    {
        let tenor = tenor.into();
        if tenor.trim().is_empty() {
            return Err(MarketDataError::BlankTenor);
        }

        if !maturity_years.is_finite() || maturity_years <= 0.0 {
            return Err(MarketDataError::InvalidMaturity {
                maturity: maturity_years,
            });
        }

        let points = normalize(points.into_iter().collect(), policy)?;

        Ok(Self {
            tenor,
            maturity_years,
            points,
            policy,
        })
    }

    /// Builds a smile from raw `(strike, implied_volatility)` pairs.
    ///
    /// Each pair is validated as a [`VolPoint`] in input order before the
    /// smile-level checks run.
    ///
    /// # Example
    ///
    /// ```
    /// use pricer_core::market_data::smile::{SmilePolicy, VolatilitySmile};
    ///
    /// let smile = VolatilitySmile::from_pairs(
    ///     "3M",
    ///     0.25,
    ///     &[(90.0, 0.25), (100.0, 0.20), (110.0, 0.30)],
    ///     SmilePolicy::Strict,
    /// )
    /// .unwrap();
    /// assert_eq!(smile.max_strike().unwrap(), 110.0);
    /// ```
    pub fn from_pairs(
        tenor: impl Into<String>,
        maturity_years: f64,
        pairs: &[(f64, f64)],
        policy: SmilePolicy,
    ) -> Result<Self, MarketDataError> {
        let points = pairs
            .iter()
            .map(|&(strike, iv)| VolPoint::new(strike, iv))
            .collect::<Result<Vec<_>, _>>()?;

        Self::with_policy(tenor, maturity_years, points, policy)
    }

    /// Returns the tenor label.
    #[inline]
    pub fn tenor(&self) -> &str {
        &self.tenor
    }

    /// Returns the maturity in years.
    #[inline]
    pub fn maturity_years(&self) -> f64 {
        self.maturity_years
    }

    /// Returns the policy the smile was validated under.
    #[inline]
    pub fn policy(&self) -> SmilePolicy {
        self.policy
    }

    /// Returns the strike-sorted nodes.
    #[inline]
    pub fn points(&self) -> &[VolPoint] {
        &self.points
    }

    /// Returns the number of nodes.
    #[inline]
    pub fn len(&self) -> usize {
        self.points.len()
    }

    /// Returns true if the smile has no nodes (only possible under
    /// [`SmilePolicy::Relaxed`]).
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    /// Returns the lowest strike.
    ///
    /// # Errors
    ///
    /// `MarketDataError::EmptySmile` if the smile has no nodes.
    pub fn min_strike(&self) -> Result<f64, MarketDataError> {
        self.points
            .first()
            .map(VolPoint::strike)
            .ok_or(MarketDataError::EmptySmile)
    }

    /// Returns the highest strike.
    ///
    /// # Errors
    ///
    /// `MarketDataError::EmptySmile` if the smile has no nodes.
    pub fn max_strike(&self) -> Result<f64, MarketDataError> {
        self.points
            .last()
            .map(VolPoint::strike)
            .ok_or(MarketDataError::EmptySmile)
    }
}

/// Sorts the owned copy by strike and enforces the count and uniqueness rules.
fn normalize(
    mut points: Vec<VolPoint>,
    policy: SmilePolicy,
) -> Result<Vec<VolPoint>, MarketDataError> {
    let need = policy.min_points();
    if points.len() < need {
        return Err(MarketDataError::InsufficientData {
            got: points.len(),
            need,
        });
    }

    // Strikes are finite by construction, so total_cmp agrees with numeric order.
    points.sort_by(|a, b| a.strike().total_cmp(&b.strike()));

    if let Some(pair) = points
        .windows(2)
        .find(|pair| pair[0].strike() == pair[1].strike())
    {
        return Err(MarketDataError::DuplicateStrike {
            strike: pair[1].strike(),
        });
    }

    Ok(points)
}
