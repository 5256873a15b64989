//! Permissive decoders for store rows.
//!
//! Rows come from a hosted table store populated by web forms, so numeric
//! columns can be null, missing, or strings. None of that may fail a decode:
//! malformed numbers become 0, malformed timestamps become absent.

use chrono::{DateTime, NaiveDate, NaiveDateTime, TimeZone, Utc};
use serde::{Deserialize, Deserializer};
use serde_json::Value;
use std::collections::BTreeMap;

use super::emotion::EmotionLabel;

/// Map a non-finite value to 0.0.
pub fn finite_or_zero(value: f64) -> f64 {
    if value.is_finite() {
        value
    } else {
        0.0
    }
}

/// Coerce an arbitrary JSON value to a number. Numbers pass through,
/// numeric strings are parsed, everything else is 0.
pub fn coerce_number(value: &Value) -> f64 {
    match value {
        Value::Number(n) => n.as_f64().map(finite_or_zero).unwrap_or(0.0),
        Value::String(s) => s.trim().parse::<f64>().map(finite_or_zero).unwrap_or(0.0),
        _ => 0.0,
    }
}

/// Parse the timestamp shapes the store emits: RFC 3339, naive date-time,
/// bare date, or epoch milliseconds.
pub fn coerce_timestamp(value: &Value) -> Option<DateTime<Utc>> {
    match value {
        Value::String(s) => parse_timestamp(s),
        Value::Number(n) => n
            .as_i64()
            .or_else(|| n.as_f64().filter(|f| f.is_finite()).map(|f| f as i64))
            .and_then(|ms| Utc.timestamp_millis_opt(ms).single()),
        _ => None,
    }
}

pub fn parse_timestamp(raw: &str) -> Option<DateTime<Utc>> {
    let raw = raw.trim();
    if let Ok(dt) = DateTime::parse_from_rfc3339(raw) {
        return Some(dt.with_timezone(&Utc));
    }
    for fmt in ["%Y-%m-%dT%H:%M:%S%.f", "%Y-%m-%d %H:%M:%S%.f"] {
        if let Ok(naive) = NaiveDateTime::parse_from_str(raw, fmt) {
            return Some(naive.and_utc());
        }
    }
    NaiveDate::parse_from_str(raw, "%Y-%m-%d")
        .ok()
        .and_then(|d| d.and_hms_opt(0, 0, 0))
        .map(|naive| naive.and_utc())
}

/// `deserialize_with` for a required numeric column.
pub fn number<'de, D>(deserializer: D) -> Result<f64, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Value::deserialize(deserializer)?;
    Ok(coerce_number(&value))
}

/// `deserialize_with` for a nullable numeric column. Null stays absent; any
/// other non-numeric value is present and coerced to 0.
pub fn optional_number<'de, D>(deserializer: D) -> Result<Option<f64>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Value::deserialize(deserializer)?;
    Ok(match value {
        Value::Null => None,
        other => Some(coerce_number(&other)),
    })
}

/// `deserialize_with` for a nullable timestamp column.
pub fn timestamp<'de, D>(deserializer: D) -> Result<Option<DateTime<Utc>>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Value::deserialize(deserializer)?;
    Ok(coerce_timestamp(&value))
}

/// `deserialize_with` for a text-array column. Null or a non-array becomes
/// empty; non-string elements are dropped.
pub fn string_list<'de, D>(deserializer: D) -> Result<Vec<String>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Value::deserialize(deserializer)?;
    Ok(match value {
        Value::Array(items) => items
            .into_iter()
            .filter_map(|item| match item {
                Value::String(s) => Some(s),
                _ => None,
            })
            .collect(),
        _ => Vec::new(),
    })
}

/// `deserialize_with` for a label -> score JSON column.
pub fn number_map<'de, D>(deserializer: D) -> Result<BTreeMap<String, f64>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Value::deserialize(deserializer)?;
    Ok(match value {
        Value::Object(map) => map
            .into_iter()
            .map(|(label, score)| (label, coerce_number(&score)))
            .collect(),
        _ => BTreeMap::new(),
    })
}

/// `deserialize_with` for the primary emotion column. Null becomes the empty
/// label; non-string values keep their JSON text.
pub fn emotion_label<'de, D>(deserializer: D) -> Result<EmotionLabel, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(EmotionLabel::new(optional_string(deserializer)?.unwrap_or_default()))
}

/// `deserialize_with` for free-text columns that are sometimes numbers.
pub fn optional_string<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Value::deserialize(deserializer)?;
    Ok(match value {
        Value::Null => None,
        Value::String(s) => Some(s),
        other => Some(other.to_string()),
    })
}
