//! Single-value coercion to export strings.

use ortho_core::lenient::number_text;
use ortho_core::{ExportMap, TRUTHY};
use serde_json::{Map, Value};

/// [`TRUTHY`] for `true`, `""` for `false`.
pub fn marker(set: bool) -> String {
    if set {
        TRUTHY.to_string()
    } else {
        String::new()
    }
}

/// Coerce any JSON value to its export string.
///
/// - `null` → `""`
/// - booleans → [`marker`]
/// - `yes`/`ja` (any case) → `Ja`, `no`/`nee` → `""`, other strings unchanged
/// - numbers → their decimal text
/// - arrays → JSON array of the normalized elements
/// - objects → JSON object of [`normalize_object`]
///
/// Only the yes/no vocabulary is canonicalized; `Anders`, `other` and the
/// like pass through as typed.
pub fn normalize_value(value: &Value) -> String {
    match value {
        Value::Null => String::new(),
        Value::Bool(b) => marker(*b),
        Value::String(s) => match s.to_lowercase().as_str() {
            "yes" | "ja" => TRUTHY.to_string(),
            "no" | "nee" => String::new(),
            _ => s.clone(),
        },
        Value::Number(n) => number_text(n),
        Value::Array(items) => {
            let normalized: Vec<String> = items.iter().map(normalize_value).collect();
            serde_json::to_string(&normalized).unwrap_or_default()
        }
        Value::Object(map) => serde_json::to_string(&normalize_object(Some(map))).unwrap_or_default(),
    }
}

/// Normalize every property of an object, keeping its keys.
pub fn normalize_object(object: Option<&Map<String, Value>>) -> ExportMap {
    object
        .into_iter()
        .flatten()
        .map(|(key, value)| (key.clone(), normalize_value(value)))
        .collect()
}
