//! Route modules for the pricer server
//!
//! This module contains endpoint group-specific routers:
//! - pricing: European option pricing
//! - smile: Implied volatility smile interpolation
//! - health: Health check and readiness probes
//! - docs: OpenAPI document

pub mod docs;
pub mod health;
pub mod pricing;
pub mod smile;

use axum::Router;
use std::sync::Arc;
use tower_http::trace::TraceLayer;

use crate::config::ServerConfig;

/// Application state shared across all handlers
#[derive(Clone)]
pub struct AppState {
    /// Server configuration
    pub config: Arc<ServerConfig>,
    /// Server start time for uptime calculation
    pub start_time: std::time::Instant,
}

impl AppState {
    /// Create a new AppState
    pub fn new(config: Arc<ServerConfig>) -> Self {
        Self {
            config,
            start_time: std::time::Instant::now(),
        }
    }
}

/// Build the main application router by merging all route modules
pub fn build_router(config: Arc<ServerConfig>) -> Router {
    let state = AppState::new(config);

    Router::new()
        .merge(health::routes())
        .merge(pricing::routes())
        .merge(smile::routes())
        .merge(docs::routes())
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::body::Body;
    use axum::http::{Request, StatusCode};
    use tower::ServiceExt;

    fn router() -> Router {
        build_router(Arc::new(ServerConfig::default()))
    }

    #[tokio::test]
    async fn test_router_merges_all_route_groups() {
        let router = router();

        for uri in ["/health", "/ready", "/api-docs/openapi.json"] {
            let response = router
                .clone()
                .oneshot(Request::builder().uri(uri).body(Body::empty()).unwrap())
                .await
                .unwrap();
            assert_eq!(response.status(), StatusCode::OK, "{uri}");
        }

        // POST routes answer with a JSON error for an empty object
        for uri in ["/api/v1/price", "/api/v1/smile/iv"] {
            let response = router
                .clone()
                .oneshot(
                    Request::builder()
                        .method("POST")
                        .uri(uri)
                        .header("content-type", "application/json")
                        .body(Body::from("{}"))
                        .unwrap(),
                )
                .await
                .unwrap();
            assert_eq!(response.status(), StatusCode::BAD_REQUEST, "{uri}");
        }
    }

    #[tokio::test]
    async fn test_unknown_route_returns_404() {
        let response = router()
            .oneshot(
                Request::builder()
                    .uri("/unknown/path")
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::NOT_FOUND);
    }

    #[tokio::test]
    async fn test_app_state_uptime() {
        let state = AppState::new(Arc::new(ServerConfig::default()));

        tokio::time::sleep(std::time::Duration::from_millis(10)).await;

        assert!(state.start_time.elapsed().as_millis() >= 10);
    }
}
