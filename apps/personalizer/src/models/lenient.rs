//! Field deserializers that never fail. A value of the wrong shape reads as
//! absent, so the field falls back to its default instead of rejecting the report.

use serde::{Deserialize, Deserializer};
use serde_json::Value;

use crate::models::lite_report::{Pattern, PatternKind};

/// Whole numbers only; fractions, strings and out-of-range values read as absent.
pub fn integer<'de, D>(deserializer: D) -> Result<Option<i64>, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(Value::deserialize(deserializer)?.as_i64())
}

pub fn text<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(match Value::deserialize(deserializer)? {
        Value::String(s) => Some(s),
        _ => None,
    })
}

/// JSON objects only; anything else reads as an absent pattern.
pub fn pattern<'de, D>(deserializer: D) -> Result<Option<Pattern>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Value::deserialize(deserializer)?;
    if !value.is_object() {
        return Ok(None);
    }
    Ok(serde_json::from_value(value).ok())
}

/// Any string is a kind (unknown tags map to `Other`); `null` and non-strings read as absent.
pub fn pattern_kind<'de, D>(deserializer: D) -> Result<Option<PatternKind>, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(match Value::deserialize(deserializer)? {
        value @ Value::String(_) => serde_json::from_value(value).ok(),
        _ => None,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Debug, Default, Deserialize)]
    #[serde(default)]
    struct Fields {
        #[serde(deserialize_with = "integer")]
        n: Option<i64>,
        #[serde(deserialize_with = "text")]
        s: Option<String>,
    }

    fn fields(json: &str) -> Fields {
        serde_json::from_str(json).unwrap()
    }

    #[test]
    fn test_integer_keeps_negative_and_zero() {
        assert_eq!(fields(r#"{"n": -1}"#).n, Some(-1));
        assert_eq!(fields(r#"{"n": 0}"#).n, Some(0));
    }

    #[test]
    fn test_integer_drops_unusable_values() {
        for json in [
            r#"{"n": 7.5}"#,
            r#"{"n": "seven"}"#,
            r#"{"n": true}"#,
            r#"{"n": [1]}"#,
            r#"{"n": 18446744073709551615}"#,
        ] {
            assert_eq!(fields(json).n, None, "input was {json}");
        }
    }

    #[test]
    fn test_text_drops_non_strings() {
        assert_eq!(fields(r#"{"s": "ok"}"#).s.as_deref(), Some("ok"));
        assert_eq!(fields(r#"{"s": 3}"#).s, None);
        assert_eq!(fields(r#"{"s": {"x": 1}}"#).s, None);
    }
}
