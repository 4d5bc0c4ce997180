//! Option pricing endpoint
//!
//! `POST /api/v1/price` validates the body field by field, builds an
//! [`OptionRequest`] and returns the Black-Scholes price with its Greeks.

use axum::{extract::rejection::JsonRejection, response::Json, routing::post, Router};
use pricer_models::instruments::{OptionRequest, OptionType};
use pricer_models::pricing::{OptionPricer, PricingResult};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use uuid::Uuid;

use super::AppState;
use crate::error::{ApiError, ErrorResponse, FieldErrors};

/// Pricing request body.
///
/// All fields are optional at the wire level so that missing values are
/// reported per field instead of as a parse failure.
#[derive(Debug, Clone, Default, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct PriceRequest {
    /// Spot price of the underlying (> 0)
    #[schema(example = 100.0)]
    pub underlying_price: Option<f64>,
    /// Strike price (> 0)
    #[schema(example = 100.0)]
    pub strike_price: Option<f64>,
    /// Time to maturity in years (> 0)
    #[schema(example = 1.0)]
    pub time_to_maturity: Option<f64>,
    /// Continuously compounded risk-free rate (may be negative)
    #[schema(example = 0.05)]
    pub risk_free_rate: Option<f64>,
    /// Annualised volatility (> 0)
    #[schema(example = 0.2)]
    pub volatility: Option<f64>,
    /// "CALL" or "PUT" (case-insensitive)
    #[schema(example = "CALL")]
    pub option_type: Option<String>,
}

impl PriceRequest {
    /// Validates every field and builds the domain request.
    ///
    /// Missing or non-positive fields are collected into one
    /// [`ApiError::Validation`]; an unknown option type is reported only once
    /// the numeric fields pass.
    pub fn into_request(self) -> Result<OptionRequest, ApiError> {
        let mut errors = FieldErrors::new();
        let spot = errors.positive("underlyingPrice", self.underlying_price);
        let strike = errors.positive("strikePrice", self.strike_price);
        let expiry = errors.positive("timeToMaturity", self.time_to_maturity);
        let rate = errors.required("riskFreeRate", self.risk_free_rate);
        let vol = errors.positive("volatility", self.volatility);
        let option_type = errors.required("optionType", self.option_type);

        match (spot, strike, expiry, rate, vol, option_type) {
            (Some(spot), Some(strike), Some(expiry), Some(rate), Some(vol), Some(option_type)) => {
                let option_type: OptionType = option_type.parse()?;
                Ok(OptionRequest::new(
                    spot,
                    strike,
                    expiry,
                    rate,
                    vol,
                    option_type,
                )?)
            }
            _ => Err(errors.into()),
        }
    }
}

/// Echo of the validated request inside a pricing response.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct PricedInput {
    /// Spot price of the underlying
    pub underlying_price: f64,
    /// Strike price
    pub strike_price: f64,
    /// Time to maturity in years
    pub time_to_maturity: f64,
    /// Risk-free rate
    pub risk_free_rate: f64,
    /// Volatility
    pub volatility: f64,
    /// "CALL" or "PUT"
    pub option_type: String,
}

/// Pricing response body.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct PriceResponse {
    /// Option premium
    pub price: f64,
    /// ∂V/∂S
    pub delta: f64,
    /// ∂²V/∂S²
    pub gamma: f64,
    /// ∂V/∂σ per unit of volatility
    pub vega: f64,
    /// Volatility the price was computed with
    pub volatility_used: f64,
    /// Model tag, always "BLACK_SCHOLES"
    #[schema(example = "BLACK_SCHOLES")]
    pub pricing_model: String,
    /// The request that was priced
    pub input: PricedInput,
}

impl From<&PricingResult> for PriceResponse {
    fn from(result: &PricingResult) -> Self {
        let input = result.input();
        Self {
            price: result.price(),
            delta: result.delta(),
            gamma: result.gamma(),
            vega: result.vega(),
            volatility_used: result.volatility_used(),
            pricing_model: result.pricing_model().as_str().to_string(),
            input: PricedInput {
                underlying_price: input.underlying_price(),
                strike_price: input.strike_price(),
                time_to_maturity: input.time_to_maturity(),
                risk_free_rate: input.risk_free_rate(),
                volatility: input.volatility(),
                option_type: input.option_type().as_str().to_string(),
            },
        }
    }
}

/// Build the pricing routes
pub fn routes() -> Router<AppState> {
    Router::new().route("/api/v1/price", post(price_option))
}

/// POST /api/v1/price - Price a European option
#[utoipa::path(
    post,
    path = "/api/v1/price",
    tag = "pricing",
    request_body = PriceRequest,
    responses(
        (status = 200, description = "Price and Greeks", body = PriceResponse),
        (status = 400, description = "Invalid request", body = ErrorResponse),
        (status = 500, description = "Internal error", body = ErrorResponse)
    )
)]
pub async fn price_option(
    payload: Result<Json<PriceRequest>, JsonRejection>,
) -> Result<Json<PriceResponse>, ApiError> {
    let Json(body) = payload?;
    let request_id = Uuid::new_v4();
    let span = tracing::info_span!("price_option", %request_id);

    span.in_scope(|| -> Result<Json<PriceResponse>, ApiError> {
        let request = body.into_request()?;
        let result = OptionPricer::new().price(&request)?;

        tracing::info!(
            option_type = %request.option_type(),
            price = result.price(),
            "option priced"
        );

        Ok(Json(PriceResponse::from(&result)))
    })
}
