use ortho_core::ExportMap;
use ortho_core::models::FlagMap;

use crate::options::FlagOption;
use crate::value::marker;

/// Accumulates a form's export keys.
///
/// All writes are unconditional: a field with no value still writes its key
/// with `""`. A key written twice is kept (last write wins) and recorded in
/// [`ExportWriter::collisions`].
#[derive(Debug, Default)]
pub struct ExportWriter {
    map: ExportMap,
    collisions: Vec<String>,
}

impl ExportWriter {
    pub fn new() -> Self {
        Self::default()
    }

    /// Free text, `""` when absent.
    pub fn text(&mut self, key: &str, value: Option<&str>) {
        self.put(key, value.unwrap_or_default().to_string());
    }

    /// Checkbox, [`ortho_core::TRUTHY`] or `""`.
    pub fn flag(&mut self, key: &str, value: bool) {
        self.put(key, marker(value));
    }

    /// Numeric input in its shortest decimal form (`120`, `49.95`).
    pub fn number(&mut self, key: &str, value: Option<f64>) {
        self.put(key, value.map(|v| v.to_string()).unwrap_or_default());
    }

    /// One flag per option of a closed table. Sub-keys the table does not
    /// know are ignored; known ones missing from `values` are unset.
    pub fn flags(&mut self, options: &[FlagOption], values: &FlagMap) {
        for option in options {
            let set = values.get(option.key).copied().unwrap_or(false);
            self.flag(option.export_key, set);
        }
    }

    /// Spread an already normalized map into this one.
    pub fn merge(&mut self, map: ExportMap) {
        for (key, value) in map {
            self.put(&key, value);
        }
    }

    /// Keys that were written more than once.
    pub fn collisions(&self) -> &[String] {
        &self.collisions
    }

    pub fn finish(self) -> ExportMap {
        self.map
    }

    fn put(&mut self, key: &str, value: String) {
        if self.map.insert(key, value).is_some() {
            tracing::warn!(key, "export key written twice");
            self.collisions.push(key.to_string());
        }
    }
}
