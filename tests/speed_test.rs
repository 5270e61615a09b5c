// ABOUTME: Integration tests for the Speed value type public surface
// ABOUTME: Covers coercion of loosely-typed values, serde, byte layout, and display
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 gpx-core contributors

#![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]
#![allow(missing_docs)]

use gpx_core::{GpxError, Speed, SpeedValue};
use serde_json::json;

#[test]
fn test_coerce_speed_is_identity() {
    let speed = Speed::from_mps(3.0);
    let coerced = Speed::coerce(SpeedValue::Speed(speed)).unwrap();
    assert_eq!(coerced, Some(speed));
}

#[test]
fn test_coerce_number() {
    let coerced = Speed::coerce(SpeedValue::Number(42.0)).unwrap();
    assert_eq!(coerced, Some(Speed::from_mps(42.0)));
}

#[test]
fn test_coerce_text() {
    let coerced = Speed::coerce(SpeedValue::Text("12.5")).unwrap();
    assert_eq!(coerced, Some(Speed::from_mps(12.5)));
}

#[test]
fn test_coerce_absent_is_none() {
    assert_eq!(Speed::coerce(SpeedValue::Absent).unwrap(), None);
}

#[test]
fn test_coerce_malformed_text_propagates_error() {
    let error = Speed::coerce(SpeedValue::Text("abc")).unwrap_err();
    match error {
        GpxError::InvalidSpeed { input, .. } => assert_eq!(input, "abc"),
        other => panic!("unexpected error: {other}"),
    }
}

#[test]
fn test_from_json_number() {
    let coerced = Speed::from_json(&json!(42)).unwrap();
    assert_eq!(coerced, Some(Speed::from_mps(42.0)));
}

#[test]
fn test_from_json_string() {
    let coerced = Speed::from_json(&json!("12.5")).unwrap();
    assert_eq!(coerced, Some(Speed::from_mps(12.5)));
}

#[test]
fn test_from_json_null_is_none() {
    assert_eq!(Speed::from_json(&json!(null)).unwrap(), None);
}

#[test]
fn test_from_json_bool_fails_numeric_parse() {
    let error = Speed::from_json(&json!(true)).unwrap_err();
    assert!(matches!(error, GpxError::InvalidSpeed { .. }));
}

#[test]
fn test_from_json_rejects_aggregates() {
    let error = Speed::from_json(&json!([1.0])).unwrap_err();
    assert!(matches!(
        error,
        GpxError::UnsupportedValue { kind: "array" }
    ));

    let error = Speed::from_json(&json!({"speed": 1.0})).unwrap_err();
    assert!(matches!(
        error,
        GpxError::UnsupportedValue { kind: "object" }
    ));
}

#[test]
fn test_from_str_round_trip() {
    let speed: Speed = "7.25".parse().unwrap();
    assert_eq!(speed, Speed::from_mps(7.25));
    assert!("not a speed".parse::<Speed>().is_err());
}

#[test]
fn test_display_includes_unit_suffix() {
    assert_eq!(Speed::from_mps(10.0).to_string(), "10 m/s");
    assert_eq!(Speed::from_mps(12.5).to_string(), "12.5 m/s");
    assert!(Speed::from_mps(f64::NAN).to_string().ends_with(" m/s"));
    assert!(Speed::from_mps(f64::INFINITY)
        .to_string()
        .ends_with(" m/s"));
}

#[test]
fn test_serde_transparent_representation() {
    let speed = Speed::from_mps(12.5);
    assert_eq!(serde_json::to_string(&speed).unwrap(), "12.5");

    let restored: Speed = serde_json::from_str("12.5").unwrap();
    assert_eq!(restored, speed);
}

#[test]
fn test_byte_layout_round_trip() {
    let speed = Speed::from_kmh(88.2);
    assert_eq!(Speed::from_be_bytes(speed.to_be_bytes()), speed);

    let nan = Speed::from_mps(f64::NAN);
    assert_eq!(Speed::from_be_bytes(nan.to_be_bytes()), nan);
}

#[test]
fn test_exact_conversion_example() {
    assert_eq!(Speed::from_kmh(36.0).as_mps(), 10.0);
    assert_eq!(Speed::from_mps(10.0).to_kmh(), 36.0);
}

#[test]
fn test_f64_conversions() {
    let speed = Speed::from(9.5);
    assert_eq!(f64::from(speed), 9.5);
}
