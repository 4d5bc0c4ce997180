//! Integration tests for module exports.
//!
//! Verify that all public modules and types are reachable via absolute paths.

/// Test that error types are accessible via absolute path.
#[test]
fn test_types_module_exports() {
    use pricer_core::types::error::{ErrorKind, PricingError};
    use pricer_core::types::PricingError as Reexported;

    let err: Reexported = PricingError::UnsupportedVariant("STRADDLE".to_string());
    assert_eq!(err.kind(), ErrorKind::UnsupportedVariant);
}

/// Test that smile types are accessible both from `smile` and `market_data`.
#[test]
fn test_market_data_module_exports() {
    use pricer_core::market_data::error::MarketDataError;
    use pricer_core::market_data::smile::{
        LinearSmileInterpolator, SmileInterpolation, SmileInterpolator, SmilePolicy, VolPoint,
        VolatilitySmile, MAX_IMPLIED_VOLATILITY,
    };
    use pricer_core::market_data::VolatilitySmile as Reexported;

    let smile: Reexported = VolatilitySmile::with_policy(
        "1M",
        1.0 / 12.0,
        vec![VolPoint::new(100.0, 0.2).unwrap()],
        SmilePolicy::Relaxed,
    )
    .unwrap();

    let linear: &dyn SmileInterpolator = &LinearSmileInterpolator;
    assert_eq!(linear.iv_at_strike(&smile, 90.0).unwrap(), 0.2);
    assert_eq!(
        SmileInterpolation::Linear.iv_at_strike(&smile, 90.0).unwrap(),
        0.2
    );

    assert!(matches!(
        VolPoint::new(100.0, MAX_IMPLIED_VOLATILITY),
        Err(MarketDataError::InvalidVolatility { .. })
    ));
}
