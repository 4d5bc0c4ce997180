//! OpenAPI document
//!
//! Serves the generated specification at `/api-docs/openapi.json`.

use axum::{response::Json, routing::get, Router};
use utoipa::OpenApi;

use super::AppState;
use super::health::{DependencyStatus, HealthResponse, ReadyResponse};
use super::pricing::{PriceRequest, PriceResponse, PricedInput};
use super::smile::{SmileCoordinate, SmilePointDto, SmileRequest, SmileResponse};
use crate::error::ErrorResponse;

/// OpenAPI definition covering every route of the server.
#[derive(OpenApi)]
#[openapi(
    info(
        title = "Vanilla Pricer API",
        description = "Black-Scholes pricing with analytical Greeks and volatility smile interpolation."
    ),
    tags(
        (name = "pricing", description = "European option pricing"),
        (name = "smile", description = "Implied volatility smile interpolation"),
        (name = "health", description = "Health check endpoints")
    ),
    paths(
        crate::routes::health::health_handler,
        crate::routes::health::ready_handler,
        crate::routes::pricing::price_option,
        crate::routes::smile::smile_iv,
    ),
    components(schemas(
        HealthResponse,
        DependencyStatus,
        ReadyResponse,
        PriceRequest,
        PriceResponse,
        PricedInput,
        SmileRequest,
        SmilePointDto,
        SmileResponse,
        SmileCoordinate,
        ErrorResponse,
    ))
)]
pub struct ApiDoc;

/// Build the documentation routes
pub fn routes() -> Router<AppState> {
    Router::new().route("/api-docs/openapi.json", get(openapi_json))
}

async fn openapi_json() -> Json<utoipa::openapi::OpenApi> {
    Json(ApiDoc::openapi())
}
