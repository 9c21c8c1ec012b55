//! Field decoders for telemetry events
//!
//! Each decoder takes the raw JSON value found under one field name (or `None`
//! when the field is absent) and returns either the typed value or the
//! [`ValidationErrorKind`] describing why it was rejected.

use chrono::{DateTime, SecondsFormat, Utc};
use regex::Regex;
use serde_json::Value;
use std::sync::OnceLock;
use validator::ValidateRange;

use super::error::ValidationErrorKind;
use super::event::EventType;

/// Minimum vehicle id length, in UTF-16 code units
pub const VEHICLE_ID_MIN_LEN: u64 = 5;

/// Maximum vehicle id length, in UTF-16 code units
pub const VEHICLE_ID_MAX_LEN: u64 = 40;

// Lazy static regex pattern
static TIMESTAMP_REGEX: OnceLock<Regex> = OnceLock::new();

/// Accepted date-time shape: `YYYY-MM-DDTHH:MM:SS[.fff…](Z|±HH:MM)`
fn timestamp_regex() -> &'static Regex {
    TIMESTAMP_REGEX.get_or_init(|| {
        Regex::new(r"^\d{4}-\d{2}-\d{2}T\d{2}:\d{2}:\d{2}(\.\d{1,9})?(Z|[+-]\d{2}:\d{2})$")
            .expect("Invalid timestamp regex pattern")
    })
}

/// Parse an RFC 3339 timestamp into a UTC instant
///
/// The shape check rejects forms chrono would otherwise tolerate (space or
/// lower-case separators); chrono then rejects impossible calendar values such
/// as `2026-02-30`.
pub fn parse_timestamp(timestamp: &str) -> Result<DateTime<Utc>, ValidationErrorKind> {
    if !timestamp_regex().is_match(timestamp) {
        return Err(ValidationErrorKind::InvalidTimestamp);
    }

    DateTime::parse_from_rfc3339(timestamp)
        .map(|dt| dt.with_timezone(&Utc))
        .map_err(|_| ValidationErrorKind::InvalidTimestamp)
}

/// Canonical form used in summaries: UTC, millisecond precision, `Z` suffix
pub fn canonical_timestamp(instant: &DateTime<Utc>) -> String {
    instant.to_rfc3339_opts(SecondsFormat::Millis, true)
}

/// Decode the `timestamp` field, keeping the original text and the instant
pub fn validate_timestamp(
    value: Option<&Value>,
) -> Result<(String, DateTime<Utc>), ValidationErrorKind> {
    let text = value
        .and_then(Value::as_str)
        .ok_or(ValidationErrorKind::InvalidTimestamp)?;
    let instant = parse_timestamp(text)?;
    Ok((text.to_string(), instant))
}

/// Decode the `vehicleId` field
///
/// Length is counted in UTF-16 code units, so a character outside the Basic
/// Multilingual Plane counts twice.
pub fn validate_vehicle_id(value: Option<&Value>) -> Result<String, ValidationErrorKind> {
    let id = value
        .and_then(Value::as_str)
        .ok_or(ValidationErrorKind::InvalidVehicleId)?;

    let len = id.encode_utf16().count() as u64;
    if len.validate_range(Some(VEHICLE_ID_MIN_LEN), Some(VEHICLE_ID_MAX_LEN), None, None) {
        Ok(id.to_string())
    } else {
        Err(ValidationErrorKind::InvalidVehicleId)
    }
}

/// Decode the `type` field
pub fn validate_event_type(value: Option<&Value>) -> Result<EventType, ValidationErrorKind> {
    value
        .and_then(Value::as_str)
        .ok_or(ValidationErrorKind::InvalidEventType)?
        .parse()
}

/// Decode the `value` field
///
/// Only JSON numbers qualify; `"45"` and `true` do not.
pub fn validate_value(value: Option<&Value>) -> Result<f64, ValidationErrorKind> {
    value
        .and_then(Value::as_f64)
        .ok_or(ValidationErrorKind::InvalidValue)
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_parse_timestamp_valid() {
        let valid_timestamps = vec![
            "2026-01-28T10:15:00Z",
            "2026-01-28T10:15:00+00:00",
            "2026-01-28T10:15:00.123Z",
            "2026-01-28T10:15:00.123456789Z",
            "2026-12-31T23:59:59-05:00",
        ];

        for ts in valid_timestamps {
            assert!(parse_timestamp(ts).is_ok(), "expected {} to parse", ts);
        }
    }

    #[test]
    fn test_parse_timestamp_invalid() {
        let invalid_timestamps = vec![
            "not-a-date",
            "invalid",
            "",
            "2026-01-28",
            "2026-01-28 10:15:00Z",
            "2026-01-28t10:15:00z",
            "2026-01-28T10:15:00",
            "2026-02-30T10:15:00Z",
            "2026-01-28T25:00:00Z",
            "2026-01-28T10:15:00+0100",
        ];

        for ts in invalid_timestamps {
            assert_eq!(
                parse_timestamp(ts),
                Err(ValidationErrorKind::InvalidTimestamp),
                "expected {} to be rejected",
                ts
            );
        }
    }

    #[test]
    fn test_parse_timestamp_normalises_offset() {
        let with_offset = parse_timestamp("2026-01-28T12:15:00+02:00").unwrap();
        let in_utc = parse_timestamp("2026-01-28T10:15:00Z").unwrap();
        assert_eq!(with_offset, in_utc);
    }

    #[test]
    fn test_canonical_timestamp() {
        let instant = parse_timestamp("2026-01-28T12:15:00+02:00").unwrap();
        assert_eq!(canonical_timestamp(&instant), "2026-01-28T10:15:00.000Z");

        let precise = parse_timestamp("2026-01-28T10:15:00.123456Z").unwrap();
        assert_eq!(canonical_timestamp(&precise), "2026-01-28T10:15:00.123Z");
    }

    #[test]
    fn test_validate_timestamp_field() {
        let (text, _) = validate_timestamp(Some(&json!("2026-01-28T10:15:00Z"))).unwrap();
        assert_eq!(text, "2026-01-28T10:15:00Z");

        assert!(validate_timestamp(None).is_err());
        assert!(validate_timestamp(Some(&json!(1706436900000_i64))).is_err());
        assert!(validate_timestamp(Some(&Value::Null)).is_err());
    }

    #[test]
    fn test_validate_vehicle_id() {
        assert_eq!(validate_vehicle_id(Some(&json!("ABCDE"))).unwrap(), "ABCDE");
        assert!(validate_vehicle_id(Some(&json!("A".repeat(40)))).is_ok());

        assert!(validate_vehicle_id(Some(&json!("ABCD"))).is_err());
        assert!(validate_vehicle_id(Some(&json!("A".repeat(41)))).is_err());
        assert!(validate_vehicle_id(Some(&json!(12345))).is_err());
        assert!(validate_vehicle_id(None).is_err());
    }

    #[test]
    fn test_validate_vehicle_id_counts_utf16_units() {
        // 5 units, 10 bytes
        assert!(validate_vehicle_id(Some(&json!("ÄÖÜßé"))).is_ok());

        // 3 characters, 6 units
        assert!(validate_vehicle_id(Some(&json!("😀😀😀"))).is_ok());
        assert!(validate_vehicle_id(Some(&json!("😀😀"))).is_err());
        assert!(validate_vehicle_id(Some(&json!("😀".repeat(21)))).is_err());
    }

    #[test]
    fn test_validate_event_type() {
        assert_eq!(
            validate_event_type(Some(&json!("LOCATION"))).unwrap(),
            EventType::Location
        );

        assert!(validate_event_type(Some(&json!("INVALID_TYPE"))).is_err());
        assert!(validate_event_type(Some(&json!("location"))).is_err());
        assert!(validate_event_type(Some(&json!(2))).is_err());
        assert!(validate_event_type(None).is_err());
    }

    #[test]
    fn test_validate_value() {
        assert_eq!(validate_value(Some(&json!(45))).unwrap(), 45.0);
        assert_eq!(validate_value(Some(&json!(-0.5))).unwrap(), -0.5);

        assert!(validate_value(Some(&json!("oops"))).is_err());
        assert!(validate_value(Some(&json!("45"))).is_err());
        assert!(validate_value(Some(&json!(true))).is_err());
        assert!(validate_value(Some(&Value::Null)).is_err());
        assert!(validate_value(None).is_err());
    }
}
