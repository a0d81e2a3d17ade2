//! `${name}` placeholder scanning, as used by the practice's Word templates.

use std::collections::HashSet;

use ortho_core::ExportMap;
use serde::Serialize;

/// A piece of template text.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Segment<'a> {
    Literal(&'a str),
    Placeholder(&'a str),
}

/// Split a template into literal text and placeholders.
///
/// A placeholder is `${` + one or more of `[A-Za-z0-9_]` + `}`. Anything
/// else that starts with `${` (unterminated, empty, other characters) is
/// literal text.
pub fn segments(template: &str) -> Vec<Segment<'_>> {
    let mut segments = Vec::new();
    let mut remaining = template;

    while let Some(start) = remaining.find("${") {
        let before = &remaining[..start];
        if !before.is_empty() {
            segments.push(Segment::Literal(before));
        }

        let after_start = &remaining[start + 2..];
        match after_start.find('}') {
            Some(end) if is_placeholder_name(&after_start[..end]) => {
                segments.push(Segment::Placeholder(&after_start[..end]));
                remaining = &after_start[end + 1..];
            }
            _ => {
                // Not a placeholder; keep the `${` and rescan right after it
                segments.push(Segment::Literal(&remaining[start..start + 2]));
                remaining = after_start;
            }
        }
    }

    if !remaining.is_empty() {
        segments.push(Segment::Literal(remaining));
    }

    segments
}

/// Distinct placeholder names in first-seen order.
pub fn find_placeholders(template: &str) -> Vec<String> {
    let mut seen = HashSet::new();
    segments(template)
        .into_iter()
        .filter_map(|segment| match segment {
            Segment::Placeholder(name) => Some(name),
            Segment::Literal(_) => None,
        })
        .filter(|name| seen.insert(*name))
        .map(str::to_string)
        .collect()
}

/// Which of a template's placeholders an export map can fill.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PlaceholderAudit {
    pub used: Vec<String>,
    /// Placeholders that would survive into the document unsubstituted.
    pub missing: Vec<String>,
}

impl PlaceholderAudit {
    pub fn is_complete(&self) -> bool {
        self.missing.is_empty()
    }
}

pub fn audit_template(template: &str, map: &ExportMap) -> PlaceholderAudit {
    let used = find_placeholders(template);
    let missing = used
        .iter()
        .filter(|name| !map.contains_key(name))
        .cloned()
        .collect();
    PlaceholderAudit { used, missing }
}

fn is_placeholder_name(name: &str) -> bool {
    !name.is_empty() && name.chars().all(|c| c.is_ascii_alphanumeric() || c == '_')
}
