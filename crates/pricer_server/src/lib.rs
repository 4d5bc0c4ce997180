//! REST API server for the vanilla pricing workspace
//!
//! Exposes Black-Scholes pricing with analytical Greeks and implied
//! volatility smile interpolation over HTTP:
//!
//! - `POST /api/v1/price` - price a European call or put
//! - `POST /api/v1/smile/iv` - read an implied volatility off a smile
//! - `GET /health`, `GET /ready` - probes
//! - `GET /api-docs/openapi.json` - OpenAPI document

pub mod config;
pub mod error;
pub mod routes;
pub mod server;

// Re-export pricer dependencies for integration
pub use pricer_core;
pub use pricer_models;

/// Server version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
