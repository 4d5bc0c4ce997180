//! Volatility smile endpoint
//!
//! `POST /api/v1/smile/iv` builds a smile from raw quotes and reads one
//! implied volatility off it, by strike or by log-moneyness when a forward
//! is supplied. Point-count policy and interpolation method come from the
//! server configuration.

use axum::{
    extract::{rejection::JsonRejection, State},
    response::Json,
    routing::post,
    Router,
};
use pricer_core::market_data::{SmileInterpolator, VolatilitySmile};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use super::AppState;
use crate::error::{ApiError, ErrorResponse, FieldErrors};

/// One quote in a smile request.
#[derive(Debug, Clone, Default, Serialize, Deserialize, ToSchema)]
pub struct SmilePointDto {
    /// Strike (> 0)
    #[schema(example = 100.0)]
    pub strike: Option<f64>,
    /// Implied volatility in (0, 5)
    #[schema(example = 0.2)]
    pub iv: Option<f64>,
}

/// Smile lookup request body.
#[derive(Debug, Clone, Default, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct SmileRequest {
    /// Tenor label, e.g. "3M"
    #[schema(example = "3M")]
    pub tenor: Option<String>,
    /// Maturity in years (> 0)
    #[schema(example = 0.25)]
    pub maturity_years: Option<f64>,
    /// Quotes in any order
    pub points: Option<Vec<SmilePointDto>>,
    /// Strike to read the volatility at (> 0)
    #[schema(example = 95.0)]
    pub target_strike: Option<f64>,
    /// Forward; when present the lookup runs in log-moneyness
    pub forward: Option<f64>,
}

/// Coordinate the lookup was performed in.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum SmileCoordinate {
    /// Linear in strike
    Strike,
    /// Linear in ln(K/F)
    LogMoneyness,
}

/// Smile lookup response body.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct SmileResponse {
    /// Interpolated implied volatility
    pub implied_volatility: f64,
    /// Tenor label of the smile
    pub tenor: String,
    /// Abscissa used for interpolation
    pub coordinate: SmileCoordinate,
    /// Interpolation method, e.g. "LINEAR"
    pub method: String,
}

/// Smile inputs that passed field validation.
struct SmileQuery {
    smile_pairs: Vec<(f64, f64)>,
    tenor: String,
    maturity_years: f64,
    target_strike: f64,
    forward: Option<f64>,
}

impl SmileRequest {
    fn validate(self) -> Result<SmileQuery, ApiError> {
        let mut errors = FieldErrors::new();
        let tenor = errors.required("tenor", self.tenor);
        let maturity_years = errors.positive("maturityYears", self.maturity_years);
        let points = errors.required("points", self.points);
        let target_strike = errors.positive("targetStrike", self.target_strike);
        if matches!(self.forward, Some(f) if f <= 0.0) {
            errors.add("forward", crate::error::MUST_BE_POSITIVE);
        }

        let smile_pairs: Vec<Option<(f64, f64)>> = points
            .unwrap_or_default()
            .into_iter()
            .enumerate()
            .map(|(i, p)| {
                let strike = errors.required(&format!("points[{i}].strike"), p.strike);
                let iv = errors.required(&format!("points[{i}].iv"), p.iv);
                strike.zip(iv)
            })
            .collect();

        match (tenor, maturity_years, target_strike) {
            (Some(tenor), Some(maturity_years), Some(target_strike)) if errors.is_empty() => {
                Ok(SmileQuery {
                    smile_pairs: smile_pairs.into_iter().flatten().collect(),
                    tenor,
                    maturity_years,
                    target_strike,
                    forward: self.forward,
                })
            }
            _ => Err(errors.into()),
        }
    }
}

/// Build the smile routes
pub fn routes() -> Router<AppState> {
    Router::new().route("/api/v1/smile/iv", post(smile_iv))
}

/// POST /api/v1/smile/iv - Interpolate an implied volatility
#[utoipa::path(
    post,
    path = "/api/v1/smile/iv",
    tag = "smile",
    request_body = SmileRequest,
    responses(
        (status = 200, description = "Interpolated implied volatility", body = SmileResponse),
        (status = 400, description = "Invalid request or smile", body = ErrorResponse),
        (status = 500, description = "Internal error", body = ErrorResponse)
    )
)]
pub async fn smile_iv(
    State(state): State<AppState>,
    payload: Result<Json<SmileRequest>, JsonRejection>,
) -> Result<Json<SmileResponse>, ApiError> {
    let Json(body) = payload?;
    let query = body.validate()?;
    let settings = state.config.pricing;

    let smile = VolatilitySmile::from_pairs(
        query.tenor,
        query.maturity_years,
        &query.smile_pairs,
        settings.smile_policy,
    )?;

    let interpolator = settings.interpolation;
    let (implied_volatility, coordinate) = match query.forward {
        Some(forward) => (
            interpolator.iv_at_log_moneyness(&smile, query.target_strike, forward)?,
            SmileCoordinate::LogMoneyness,
        ),
        None => (
            interpolator.iv_at_strike(&smile, query.target_strike)?,
            SmileCoordinate::Strike,
        ),
    };

    tracing::info!(
        tenor = smile.tenor(),
        points = smile.len(),
        strike = query.target_strike,
        implied_volatility,
        "smile interpolated"
    );

    Ok(Json(SmileResponse {
        implied_volatility,
        tenor: smile.tenor().to_string(),
        coordinate,
        method: interpolator.as_str().to_string(),
    }))
}
