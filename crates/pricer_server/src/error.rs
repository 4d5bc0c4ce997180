//! HTTP error mapping
//!
//! Every failure leaving a handler is an [`ApiError`], rendered as a JSON
//! body with the HTTP status, a short error title and either a message or a
//! field-keyed map of validation failures.

use std::collections::BTreeMap;

use axum::{
    extract::rejection::JsonRejection,
    http::StatusCode,
    response::{IntoResponse, Json, Response},
};
use pricer_core::market_data::MarketDataError;
use pricer_core::types::PricingError;
use pricer_models::analytical::AnalyticalError;
use serde::{Deserialize, Serialize};
use thiserror::Error;
use utoipa::ToSchema;

/// Field message for a required value that was absent or `null`.
pub const MUST_NOT_BE_NULL: &str = "must not be null";
/// Field message for a value that must be strictly positive.
pub const MUST_BE_POSITIVE: &str = "must be greater than 0";

/// Error body returned for every non-2xx response.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct ErrorResponse {
    /// HTTP status code
    pub status: u16,
    /// Error title (e.g. "Validation error", "Malformed request")
    pub error: String,
    /// Human-readable detail
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
    /// Field name to violation message, for validation failures
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub fields: Option<BTreeMap<String, String>>,
    /// RFC 3339 time the error was produced
    pub timestamp: String,
}

/// Failures surfaced at the HTTP boundary.
#[derive(Debug, Error)]
pub enum ApiError {
    /// One or more request fields failed validation
    #[error("Validation error: {} invalid field(s)", .0.len())]
    Validation(BTreeMap<String, String>),

    /// Body is not valid JSON for the endpoint
    #[error("Malformed request: {0}")]
    Malformed(String),

    /// Option type outside CALL / PUT
    #[error("Unsupported or missing option type: {0}")]
    UnsupportedOptionType(String),

    /// Domain precondition rejected by the pricing core
    #[error("Invalid argument: {0}")]
    InvalidArgument(String),

    /// Broken invariant inside the pricing core
    #[error("Internal error: {0}")]
    Internal(String),
}

impl ApiError {
    /// HTTP status for this error.
    pub fn status(&self) -> StatusCode {
        match self {
            ApiError::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
            _ => StatusCode::BAD_REQUEST,
        }
    }

    /// Short title placed in the `error` field.
    pub fn title(&self) -> &'static str {
        match self {
            ApiError::Validation(_) => "Validation error",
            ApiError::Malformed(_) => "Malformed request",
            ApiError::UnsupportedOptionType(_) => "Unsupported or missing option type",
            ApiError::InvalidArgument(_) => "Invalid argument",
            ApiError::Internal(_) => "Internal error",
        }
    }

    /// Builds the JSON body, stamped with the current time.
    pub fn to_body(&self) -> ErrorResponse {
        let (message, fields) = match self {
            ApiError::Validation(fields) => (None, Some(fields.clone())),
            ApiError::Malformed(msg)
            | ApiError::UnsupportedOptionType(msg)
            | ApiError::InvalidArgument(msg)
            | ApiError::Internal(msg) => (Some(msg.clone()), None),
        };

        ErrorResponse {
            status: self.status().as_u16(),
            error: self.title().to_string(),
            message,
            fields,
            timestamp: chrono::Utc::now().to_rfc3339(),
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = self.status();
        if status.is_server_error() {
            tracing::error!(error = %self, "request failed");
        } else {
            tracing::warn!(error = %self, "request rejected");
        }

        (status, Json(self.to_body())).into_response()
    }
}

impl From<PricingError> for ApiError {
    fn from(err: PricingError) -> Self {
        match err {
            PricingError::InvalidArgument(msg) => ApiError::InvalidArgument(msg),
            PricingError::UnsupportedVariant(msg) => ApiError::UnsupportedOptionType(msg),
            PricingError::InternalConsistency(msg) => ApiError::Internal(msg),
        }
    }
}

impl From<AnalyticalError> for ApiError {
    fn from(err: AnalyticalError) -> Self {
        PricingError::from(err).into()
    }
}

impl From<MarketDataError> for ApiError {
    fn from(err: MarketDataError) -> Self {
        PricingError::from(err).into()
    }
}

impl From<JsonRejection> for ApiError {
    fn from(rejection: JsonRejection) -> Self {
        ApiError::Malformed(rejection.body_text())
    }
}

/// Collects field violations keyed by field name.
///
/// Fields are reported in name order, not in the order handlers check them.
#[derive(Debug, Default)]
pub struct FieldErrors(BTreeMap<String, String>);

impl FieldErrors {
    /// Creates an empty collector.
    pub fn new() -> Self {
        Self::default()
    }

    /// Records a violation for `field`. The first message per field wins.
    pub fn add(&mut self, field: impl Into<String>, message: &str) {
        self.0
            .entry(field.into())
            .or_insert_with(|| message.to_string());
    }

    /// Returns the value if present, recording `must not be null` otherwise.
    pub fn required<T>(&mut self, field: &str, value: Option<T>) -> Option<T> {
        if value.is_none() {
            self.add(field, MUST_NOT_BE_NULL);
        }
        value
    }

    /// Like [`FieldErrors::required`], additionally requiring a value > 0.
    pub fn positive(&mut self, field: &str, value: Option<f64>) -> Option<f64> {
        match self.required(field, value) {
            Some(v) if v > 0.0 => Some(v),
            Some(_) => {
                self.add(field, MUST_BE_POSITIVE);
                None
            }
            None => None,
        }
    }

    /// Returns `true` when nothing was recorded.
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl From<FieldErrors> for ApiError {
    fn from(errors: FieldErrors) -> Self {
        ApiError::Validation(errors.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    // ==========================================================
    // Status and Body Tests
    // ==========================================================

    #[test]
    fn test_status_codes() {
        assert_eq!(
            ApiError::Malformed("x".into()).status(),
            StatusCode::BAD_REQUEST
        );
        assert_eq!(
            ApiError::InvalidArgument("x".into()).status(),
            StatusCode::BAD_REQUEST
        );
        assert_eq!(
            ApiError::Internal("x".into()).status(),
            StatusCode::INTERNAL_SERVER_ERROR
        );
    }

    #[test]
    fn test_validation_body_has_fields_only() {
        let mut fields = BTreeMap::new();
        fields.insert("strikePrice".to_string(), MUST_BE_POSITIVE.to_string());

        let body = ApiError::Validation(fields).to_body();
        assert_eq!(body.status, 400);
        assert_eq!(body.error, "Validation error");
        assert!(body.message.is_none());
        assert_eq!(
            body.fields.unwrap()["strikePrice"],
            "must be greater than 0"
        );
        assert!(!body.timestamp.is_empty());
    }

    #[test]
    fn test_message_body_omits_fields_key() {
        let body = ApiError::Malformed("EOF while parsing".into()).to_body();
        let json = serde_json::to_value(&body).unwrap();

        assert_eq!(json["error"], "Malformed request");
        assert_eq!(json["message"], "EOF while parsing");
        assert!(json.get("fields").is_none());
    }

    // ==========================================================
    // Conversion Tests
    // ==========================================================

    #[test]
    fn test_from_analytical_error() {
        let err: ApiError = AnalyticalError::InvalidVolatility { volatility: 0.0 }.into();
        assert!(matches!(err, ApiError::InvalidArgument(_)));

        let err: ApiError = AnalyticalError::UnsupportedOptionType {
            value: "STRADDLE".into(),
        }
        .into();
        assert_eq!(err.title(), "Unsupported or missing option type");

        let err: ApiError = AnalyticalError::NonFiniteResult {
            quantity: "price",
            value: f64::NAN,
        }
        .into();
        assert_eq!(err.status(), StatusCode::BAD_REQUEST);
    }

    #[test]
    fn test_from_market_data_error() {
        let err: ApiError = MarketDataError::DuplicateStrike { strike: 100.0 }.into();
        match err {
            ApiError::InvalidArgument(msg) => assert_eq!(msg, "Duplicate strike found: 100"),
            other => panic!("unexpected {other:?}"),
        }

        let err: ApiError = MarketDataError::NoBracket { x: 95.0 }.into();
        assert_eq!(err.status(), StatusCode::INTERNAL_SERVER_ERROR);
    }

    // ==========================================================
    // Field Collector Tests
    // ==========================================================

    #[test]
    fn test_field_errors_collects_all() {
        let mut errors = FieldErrors::new();
        assert_eq!(errors.positive("a", Some(1.0)), Some(1.0));
        assert_eq!(errors.positive("b", Some(0.0)), None);
        assert_eq!(errors.positive("c", None), None);
        assert_eq!(errors.required::<String>("d", None), None);

        match ApiError::from(errors) {
            ApiError::Validation(fields) => {
                assert_eq!(fields.len(), 3);
                assert_eq!(fields["b"], MUST_BE_POSITIVE);
                assert_eq!(fields["c"], MUST_NOT_BE_NULL);
                assert_eq!(fields["d"], MUST_NOT_BE_NULL);
            }
            other => panic!("unexpected {other:?}"),
        }
    }

    #[test]
    fn test_field_errors_reported_in_name_order() {
        let mut errors = FieldErrors::new();
        errors.required::<f64>("volatility", None);
        errors.required::<f64>("strikePrice", None);
        errors.required::<f64>("optionType", None);

        match ApiError::from(errors) {
            ApiError::Validation(fields) => {
                let names: Vec<_> = fields.keys().map(String::as_str).collect();
                assert_eq!(names, ["optionType", "strikePrice", "volatility"]);
            }
            other => panic!("unexpected {other:?}"),
        }
    }

    #[test]
    fn test_field_errors_starts_empty() {
        let mut errors = FieldErrors::new();
        assert!(errors.is_empty());
        errors.required("riskFreeRate", Some(-0.01));
        assert!(errors.is_empty());
    }
}
