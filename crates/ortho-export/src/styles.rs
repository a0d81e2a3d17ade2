use serde::{Deserialize, Serialize};

/// Styling for the intake summary document.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct DocumentStyles {
    /// Font for table text (e.g. "Calibri", "Arial").
    pub body_font: String,

    pub heading_font: String,

    /// Body text font size in points.
    pub body_size: usize,

    /// Document title size in points.
    pub heading1_size: usize,

    /// Section heading size in points.
    pub heading2_size: usize,

    /// Hex fill for the key column, without `#`.
    pub label_fill: String,

    /// Leave rows with an empty value out of the tables.
    pub skip_empty: bool,
}

impl Default for DocumentStyles {
    fn default() -> Self {
        Self {
            body_font: "Calibri".to_string(),
            heading_font: "Calibri".to_string(),
            body_size: 10,
            heading1_size: 16,
            heading2_size: 13,
            label_fill: "E7EEF7".to_string(),
            skip_empty: true,
        }
    }
}
