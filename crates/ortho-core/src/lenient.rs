//! Permissive field deserializers for wizard payloads.
//!
//! The form widgets submit whatever they hold: numbers typed into text
//! inputs, `"ja"` from a radio group, `null` for untouched fields. None of
//! that may fail deserialization, because export must never be blocked by an
//! incomplete intake. Every model field goes through one of these.

use std::collections::BTreeMap;

use serde::{Deserialize, Deserializer};
use serde_json::{Number, Value};

/// Free text. Numbers become their decimal text; anything else is absent.
pub fn text<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(match Value::deserialize(deserializer)? {
        Value::String(s) => Some(s),
        Value::Number(n) => Some(number_text(&n)),
        _ => None,
    })
}

/// Checkbox state. See [`is_set`].
pub fn flag<'de, D>(deserializer: D) -> Result<bool, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(is_set(&Value::deserialize(deserializer)?))
}

/// Numeric input such as a price. Accepts a JSON number or a numeric string
/// with either `.` or `,` as decimal separator.
pub fn number<'de, D>(deserializer: D) -> Result<Option<f64>, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(match Value::deserialize(deserializer)? {
        Value::Number(n) => n.as_f64(),
        Value::String(s) => parse_decimal(&s),
        _ => None,
    })
}

/// Keyed checkbox group (`pathologies`, `enclosureLeft`, ...).
pub fn flags<'de, D>(deserializer: D) -> Result<BTreeMap<String, bool>, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(match Value::deserialize(deserializer)? {
        Value::Object(map) => map.into_iter().map(|(k, v)| (k, is_set(&v))).collect(),
        _ => BTreeMap::new(),
    })
}

/// Keyed measurement inputs (`enclosureLeftMm`, ...). Entries that are
/// neither text nor numbers are dropped.
pub fn measures<'de, D>(deserializer: D) -> Result<BTreeMap<String, String>, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(match Value::deserialize(deserializer)? {
        Value::Object(map) => map
            .into_iter()
            .filter_map(|(k, v)| match v {
                Value::String(s) => Some((k, s)),
                Value::Number(n) => Some((k, number_text(&n))),
                _ => None,
            })
            .collect(),
        _ => BTreeMap::new(),
    })
}

/// Decimal text of a JSON number. Whole floats lose their fraction (`3.0`
/// is `"3"`), the same as a price written by the normalizers.
pub fn number_text(n: &Number) -> String {
    match n.as_f64() {
        Some(f) if n.is_f64() => f.to_string(),
        _ => n.to_string(),
    }
}

/// Whether a raw widget value counts as "checked": `true`, or one of the
/// strings `yes`/`ja`/`true` in any case.
pub fn is_set(value: &Value) -> bool {
    match value {
        Value::Bool(b) => *b,
        Value::String(s) => matches!(s.trim().to_lowercase().as_str(), "yes" | "ja" | "true"),
        _ => false,
    }
}

fn parse_decimal(raw: &str) -> Option<f64> {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return None;
    }
    trimmed
        .replace(',', ".")
        .parse::<f64>()
        .ok()
        .filter(|v| v.is_finite())
}
