//! Typed value deserializer registry
//!
//! Maps UQL type tags to functions decoding one raw JSON cell into a typed
//! [`Value`]. Dispatch is by tag string, so new scalar types only need a new
//! registry entry; row-assembly call sites stay untouched.

use std::collections::HashMap;

use chrono::{DateTime, NaiveDateTime, Utc};
use once_cell::sync::Lazy;
use serde_json::value::RawValue;

use crate::error::UqlError;
use crate::models::{DataSetRef, Value};

/// Decoder for one raw JSON cell
pub type ValueDeserializer = fn(&RawValue) -> Result<Value, UqlError>;

static DESERIALIZERS: Lazy<HashMap<&'static str, ValueDeserializer>> = Lazy::new(|| {
    let mut registry: HashMap<&'static str, ValueDeserializer> = HashMap::new();
    registry.insert("long", deserialize_long);
    registry.insert("double", deserialize_double);
    registry.insert("string", deserialize_string);
    registry.insert("boolean", deserialize_boolean);
    registry.insert("timestamp", deserialize_timestamp);
    registry.insert("reference", deserialize_data_set_ref);
    registry
});

/// Look up the deserializer registered for a type tag
pub fn deserializer_for(tag: &str) -> Option<ValueDeserializer> {
    DESERIALIZERS.get(tag).copied()
}

fn decode_error(tag: &str, reason: impl ToString) -> UqlError {
    UqlError::Decode {
        tag: tag.to_string(),
        reason: reason.to_string(),
    }
}

fn deserialize_long(raw: &RawValue) -> Result<Value, UqlError> {
    let value: i64 = serde_json::from_str(raw.get()).map_err(|e| decode_error("long", e))?;
    Ok(Value::Long(value))
}

fn deserialize_double(raw: &RawValue) -> Result<Value, UqlError> {
    let value: f64 = serde_json::from_str(raw.get()).map_err(|e| decode_error("double", e))?;
    Ok(Value::Double(value))
}

fn deserialize_string(raw: &RawValue) -> Result<Value, UqlError> {
    let value: String = serde_json::from_str(raw.get()).map_err(|e| decode_error("string", e))?;
    Ok(Value::String(value))
}

fn deserialize_boolean(raw: &RawValue) -> Result<Value, UqlError> {
    let value: bool = serde_json::from_str(raw.get()).map_err(|e| decode_error("boolean", e))?;
    Ok(Value::Boolean(value))
}

// Timestamps are ISO-8601 date-time strings on the wire, not epoch numbers.
// The engine may omit the zone designator; such literals are read as UTC.
fn deserialize_timestamp(raw: &RawValue) -> Result<Value, UqlError> {
    let text: String = serde_json::from_str(raw.get()).map_err(|e| decode_error("timestamp", e))?;
    if let Ok(instant) = DateTime::parse_from_rfc3339(&text) {
        return Ok(Value::Timestamp(instant.with_timezone(&Utc)));
    }
    let naive = NaiveDateTime::parse_from_str(&text, "%Y-%m-%dT%H:%M:%S%.f")
        .map_err(|e| decode_error("timestamp", e))?;
    Ok(Value::Timestamp(naive.and_utc()))
}

fn deserialize_data_set_ref(raw: &RawValue) -> Result<Value, UqlError> {
    let reference: DataSetRef =
        serde_json::from_str(raw.get()).map_err(|e| decode_error("reference", e))?;
    Ok(Value::Ref(reference))
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    fn raw(text: &str) -> Box<RawValue> {
        RawValue::from_string(text.to_string()).unwrap()
    }

    fn decode(tag: &str, text: &str) -> Result<Value, UqlError> {
        deserializer_for(tag).unwrap()(&raw(text))
    }

    #[test]
    fn test_long_decodes_integer_literal() {
        assert_eq!(decode("long", "42").unwrap(), Value::Long(42));
    }

    #[test]
    fn test_long_rejects_fractional_literal() {
        assert!(decode("long", "4.2").is_err());
    }

    #[test]
    fn test_double_accepts_any_numeric_literal() {
        assert_eq!(decode("double", "4.2").unwrap(), Value::Double(4.2));
        assert_eq!(decode("double", "7").unwrap(), Value::Double(7.0));
    }

    #[test]
    fn test_string_requires_quoted_text() {
        assert_eq!(
            decode("string", r#""service""#).unwrap(),
            Value::String("service".to_string())
        );
        assert!(decode("string", "42").is_err());
    }

    #[test]
    fn test_boolean_accepts_literals_only() {
        assert_eq!(decode("boolean", "true").unwrap(), Value::Boolean(true));
        assert_eq!(decode("boolean", "false").unwrap(), Value::Boolean(false));
        assert!(decode("boolean", "1").is_err());
        assert!(decode("boolean", r#""true""#).is_err());
    }

    #[test]
    fn test_timestamp_decodes_iso8601_to_utc() {
        let expected = Utc.with_ymd_and_hms(2022, 1, 2, 3, 4, 5).unwrap();
        assert_eq!(
            decode("timestamp", r#""2022-01-02T03:04:05Z""#).unwrap(),
            Value::Timestamp(expected)
        );
    }

    #[test]
    fn test_timestamp_normalizes_offsets_to_utc() {
        let expected = Utc.with_ymd_and_hms(2022, 1, 2, 2, 4, 5).unwrap();
        assert_eq!(
            decode("timestamp", r#""2022-01-02T03:04:05+01:00""#).unwrap(),
            Value::Timestamp(expected)
        );
    }

    #[test]
    fn test_timestamp_accepts_zoneless_literal_as_utc() {
        let expected = Utc.with_ymd_and_hms(2022, 1, 2, 3, 4, 5).unwrap();
        assert_eq!(
            decode("timestamp", r#""2022-01-02T03:04:05""#).unwrap(),
            Value::Timestamp(expected)
        );
        assert_eq!(
            decode("timestamp", r#""2022-01-02T03:04:05.250""#).unwrap(),
            Value::Timestamp(expected + chrono::Duration::milliseconds(250))
        );
    }

    #[test]
    fn test_timestamp_rejects_garbage() {
        assert!(decode("timestamp", r#""not-a-date""#).is_err());
    }

    #[test]
    fn test_reference_decodes_locator_pair() {
        let value = decode(
            "reference",
            r#"{"$jsonPath": "$.data[0]", "$dataset": "d:child"}"#,
        )
        .unwrap();
        let reference = value.as_data_set_ref().unwrap();
        assert_eq!(reference.json_path, "$.data[0]");
        assert_eq!(reference.dataset, "d:child");
    }

    #[test]
    fn test_unknown_tag_has_no_deserializer() {
        assert!(deserializer_for("complex").is_none());
    }
}
