use ortho_core::ExportMap;
use ortho_core::models::enclosure::EnclosureSelection;
use ortho_core::models::{FlagMap, MeasureMap};

use crate::options::ENCLOSURE_OPTIONS;
use crate::value::marker;

/// Flatten the four per-side enclosure maps into export keys.
///
/// For options that need a measurement the thickness is exported only when
/// the option is ticked *and* a value was entered; ticked without a value
/// exports `""`. Boolean-only options export the truthy marker and ignore
/// the measurement maps.
pub fn normalize_enclosure_data(
    enclosure_left: Option<&FlagMap>,
    enclosure_right: Option<&FlagMap>,
    enclosure_left_mm: Option<&MeasureMap>,
    enclosure_right_mm: Option<&MeasureMap>,
) -> ExportMap {
    let mut map = ExportMap::new();

    for option in ENCLOSURE_OPTIONS {
        let left_enabled = is_enabled(enclosure_left, option.full_key_links);
        let right_enabled = is_enabled(enclosure_right, option.full_key_rechts);

        if option.needs_mm {
            let left_value = measurement(enclosure_left_mm, option.mm_key_links);
            let right_value = measurement(enclosure_right_mm, option.mm_key_rechts);
            map.insert(option.export_key_left, gated(left_enabled, left_value));
            map.insert(option.export_key_right, gated(right_enabled, right_value));
        } else {
            map.insert(option.export_key_left, marker(left_enabled));
            map.insert(option.export_key_right, marker(right_enabled));
        }
    }

    map
}

/// [`normalize_enclosure_data`] over a form's embedded selection.
pub fn normalize_enclosure(selection: &EnclosureSelection) -> ExportMap {
    normalize_enclosure_data(
        Some(&selection.enclosure_left),
        Some(&selection.enclosure_right),
        Some(&selection.enclosure_left_mm),
        Some(&selection.enclosure_right_mm),
    )
}

fn is_enabled(toggles: Option<&FlagMap>, key: &str) -> bool {
    toggles.and_then(|t| t.get(key)).copied().unwrap_or(false)
}

fn measurement<'a>(values: Option<&'a MeasureMap>, key: &str) -> &'a str {
    values
        .and_then(|v| v.get(key))
        .map(String::as_str)
        .unwrap_or_default()
}

fn gated(enabled: bool, value: &str) -> String {
    if enabled && !value.is_empty() {
        value.to_string()
    } else {
        String::new()
    }
}
