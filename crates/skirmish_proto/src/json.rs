//! # JSON Coercion Helpers
//!
//! Shared field-extraction logic behind every `from_json` path.
//!
//! Missing and `null` fields take the documented zero defaults. Scalar
//! fields accept JSON numbers or numeric strings; anything that does not
//! coerce to a clean number fails the whole parse instead of silently
//! turning into NaN or a truncated integer.

use serde_json::Value;

use crate::action::Action;
use crate::error::{CodecError, CodecResult};
use crate::wire::MAX_SAFE_INTEGER;

/// Looks up `key`, treating an explicit `null` the same as absence.
fn field<'a>(obj: &'a Value, key: &str) -> Option<&'a Value> {
    obj.get(key).filter(|v| !v.is_null())
}

/// Coerces a JSON value to a finite double.
fn number_from(value: &Value, field: &'static str) -> CodecResult<f64> {
    match value {
        Value::Number(n) => n.as_f64().ok_or_else(|| CodecError::MalformedJsonNumber {
            field,
            value: n.to_string(),
        }),
        Value::String(s) => {
            let parsed: f64 = s.trim().parse().map_err(|_| CodecError::MalformedJsonNumber {
                field,
                value: s.clone(),
            })?;
            if parsed.is_finite() {
                Ok(parsed)
            } else {
                Err(CodecError::MalformedJsonNumber { field, value: s.clone() })
            }
        }
        _ => Err(CodecError::MalformedJsonType { field, expected: "number" }),
    }
}

/// Reads a `double` field; missing or `null` yields 0.0.
pub(crate) fn double_field(obj: &Value, key: &'static str) -> CodecResult<f64> {
    match field(obj, key) {
        Some(value) => number_from(value, key),
        None => Ok(0.0),
    }
}

/// Coerces a JSON value to an exact unsigned integer no greater than `max`.
fn unsigned_from(value: &Value, field: &'static str, max: u64) -> CodecResult<u64> {
    // Exact integer path first; numeric strings and integral floats
    // (e.g. 7.0) go through the double coercion.
    let exact = match value {
        Value::Number(n) => n.as_u64(),
        _ => None,
    };
    let parsed = match exact {
        Some(v) => v,
        None => {
            let as_double = number_from(value, field)?;
            if as_double < 0.0 || as_double.fract() != 0.0 {
                return Err(CodecError::MalformedJsonNumber {
                    field,
                    value: value.to_string(),
                });
            }
            as_double as u64
        }
    };
    if parsed > max {
        return Err(CodecError::Overflow { field, value: parsed, max });
    }
    Ok(parsed)
}

/// Reads a `uint32` field; missing or `null` yields 0.
pub(crate) fn uint32_field(obj: &Value, key: &'static str) -> CodecResult<u32> {
    match field(obj, key) {
        Some(value) => {
            let v = unsigned_from(value, key, u64::from(u32::MAX))?;
            Ok(v as u32)
        }
        None => Ok(0),
    }
}

/// Reads a `uint64` field; missing or `null` yields 0.
///
/// Values above [`MAX_SAFE_INTEGER`] are rejected, matching the binary
/// decoder's bound.
pub(crate) fn uint64_field(obj: &Value, key: &'static str) -> CodecResult<u64> {
    match field(obj, key) {
        Some(value) => unsigned_from(value, key, MAX_SAFE_INTEGER),
        None => Ok(0),
    }
}

/// Reads the `actions` array; missing or `null` yields an empty list.
///
/// Elements may be raw integers or symbolic names, mixed freely.
pub(crate) fn actions_field(obj: &Value, key: &'static str) -> CodecResult<Vec<Action>> {
    match field(obj, key) {
        Some(Value::Array(elements)) => {
            Ok(elements.iter().map(Action::from_json_value).collect())
        }
        Some(_) => Err(CodecError::MalformedJsonType { field: key, expected: "array" }),
        None => Ok(Vec::new()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_missing_and_null_take_defaults() {
        let obj = json!({ "x": null });
        assert_eq!(double_field(&obj, "x").unwrap(), 0.0);
        assert_eq!(uint32_field(&obj, "id").unwrap(), 0);
        assert_eq!(uint64_field(&obj, "tick").unwrap(), 0);
        assert_eq!(actions_field(&obj, "actions").unwrap(), Vec::new());
    }

    #[test]
    fn test_numeric_string_coercion() {
        let obj = json!({ "x": "1.5", "id": "7", "tick": "100" });
        assert_eq!(double_field(&obj, "x").unwrap(), 1.5);
        assert_eq!(uint32_field(&obj, "id").unwrap(), 7);
        assert_eq!(uint64_field(&obj, "tick").unwrap(), 100);
    }

    #[test]
    fn test_garbage_fails_fast() {
        let obj = json!({ "x": "not a number", "id": true, "yaw": "NaN" });
        assert!(matches!(
            double_field(&obj, "x").unwrap_err(),
            CodecError::MalformedJsonNumber { field: "x", .. }
        ));
        assert!(matches!(
            uint32_field(&obj, "id").unwrap_err(),
            CodecError::MalformedJsonType { field: "id", expected: "number" }
        ));
        // "NaN" parses as a float but is not a usable field value.
        assert!(matches!(
            double_field(&obj, "yaw").unwrap_err(),
            CodecError::MalformedJsonNumber { field: "yaw", .. }
        ));
    }

    #[test]
    fn test_unsigned_bounds() {
        let obj = json!({ "id": 4_294_967_296_u64, "tick": 9_007_199_254_740_992_u64 });
        assert!(matches!(
            uint32_field(&obj, "id").unwrap_err(),
            CodecError::Overflow { field: "id", .. }
        ));
        assert!(matches!(
            uint64_field(&obj, "tick").unwrap_err(),
            CodecError::Overflow { field: "tick", .. }
        ));
    }

    #[test]
    fn test_fractional_integer_rejected() {
        let obj = json!({ "id": 7.5 });
        assert!(matches!(
            uint32_field(&obj, "id").unwrap_err(),
            CodecError::MalformedJsonNumber { field: "id", .. }
        ));
    }

    #[test]
    fn test_actions_accept_mixed_elements() {
        let obj = json!({ "actions": ["SHOOT", 0, -1, "bogus"] });
        assert_eq!(
            actions_field(&obj, "actions").unwrap(),
            vec![Action::Shoot, Action::Unknown, Action::Unrecognized, Action::Unrecognized]
        );
    }

    #[test]
    fn test_actions_wrong_type() {
        let obj = json!({ "actions": "SHOOT" });
        assert!(matches!(
            actions_field(&obj, "actions").unwrap_err(),
            CodecError::MalformedJsonType { field: "actions", expected: "array" }
        ));
    }
}
