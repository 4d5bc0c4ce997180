//! Health check and readiness endpoints
//!
//! Used by load balancers and orchestrators to probe service availability.

use axum::{
    extract::State,
    http::StatusCode,
    response::{IntoResponse, Json},
    routing::get,
    Router,
};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use super::AppState;

/// Health check response
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct HealthResponse {
    /// Health status ("healthy" or "unhealthy")
    pub status: String,
    /// Server version
    pub version: String,
    /// Server uptime in seconds
    pub uptime_secs: u64,
    /// Dependency status
    pub dependencies: DependencyStatus,
}

/// Dependency status for health check
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct DependencyStatus {
    /// pricer_core availability
    pub pricer_core: bool,
    /// pricer_models availability
    pub pricer_models: bool,
}

/// Readiness response
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct ReadyResponse {
    /// Ready status
    pub ready: bool,
}

/// Build the health routes
pub fn routes() -> Router<AppState> {
    Router::new()
        .route("/health", get(health_handler))
        .route("/ready", get(ready_handler))
}

/// GET /health - Health check endpoint
///
/// Returns the server health status, version, uptime, and dependency status.
#[utoipa::path(
    get,
    path = "/health",
    tag = "health",
    responses((status = 200, description = "Service is healthy", body = HealthResponse))
)]
pub async fn health_handler(State(state): State<AppState>) -> impl IntoResponse {
    let response = HealthResponse {
        status: "healthy".to_string(),
        version: crate::VERSION.to_string(),
        uptime_secs: state.start_time.elapsed().as_secs(),
        dependencies: DependencyStatus {
            pricer_core: true,
            pricer_models: true,
        },
    };

    (StatusCode::OK, Json(response))
}

/// GET /ready - Readiness probe endpoint
#[utoipa::path(
    get,
    path = "/ready",
    tag = "health",
    responses((status = 200, description = "Ready to accept requests", body = ReadyResponse))
)]
pub async fn ready_handler() -> impl IntoResponse {
    (StatusCode::OK, Json(ReadyResponse { ready: true }))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::ServerConfig;
    use axum::body::Body;
    use axum::http::Request;
    use std::sync::Arc;
    use tower::ServiceExt;

    fn create_test_state() -> AppState {
        AppState::new(Arc::new(ServerConfig::default()))
    }

    async fn get_body(uri: &str) -> (StatusCode, axum::body::Bytes) {
        let router = routes().with_state(create_test_state());

        let response = router
            .oneshot(Request::builder().uri(uri).body(Body::empty()).unwrap())
            .await
            .unwrap();

        let status = response.status();
        let body = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap();
        (status, body)
    }

    #[tokio::test]
    async fn test_health_endpoint_returns_json() {
        let (status, body) = get_body("/health").await;
        assert_eq!(status, StatusCode::OK);

        let health: HealthResponse = serde_json::from_slice(&body).unwrap();
        assert_eq!(health.status, "healthy");
        assert_eq!(health.version, crate::VERSION);
        assert!(health.dependencies.pricer_core);
        assert!(health.dependencies.pricer_models);
    }

    #[tokio::test]
    async fn test_health_response_camel_case() {
        let (_, body) = get_body("/health").await;
        let json_str = std::str::from_utf8(&body).unwrap();

        assert!(json_str.contains("uptimeSecs"));
        assert!(json_str.contains("pricerCore"));
        assert!(json_str.contains("pricerModels"));
    }

    #[tokio::test]
    async fn test_ready_endpoint_returns_json() {
        let (status, body) = get_body("/ready").await;
        assert_eq!(status, StatusCode::OK);

        let ready: ReadyResponse = serde_json::from_slice(&body).unwrap();
        assert!(ready.ready);
    }
}
