//! ortho-intake
//!
//! Normalization of wizard submissions into the flat export map the Word
//! templates are filled from. Pure data and pure functions, no I/O.
//!
//! Every form (the client step and the seven intake questionnaires)
//! implements [`Questionnaire`]. Its `write_fields` is the single source of
//! the form's key set: [`normalize`] runs it over the submitted data and
//! [`empty`] runs it over the form's default, so the "data present" and
//! "data absent" maps can never disagree on keys.

pub mod enclosure;
pub mod forms;
pub mod options;
pub mod session;
pub mod value;
pub mod writer;

use ortho_core::ExportMap;

pub use session::{
    empty_intake, intake_keys, normalize_intake, normalize_intake_session, normalize_session,
};
pub use writer::ExportWriter;

/// A wizard form whose submission is flattened into export keys.
pub trait Questionnaire: Default {
    /// Stable identifier used in logs (e.g. "client", "vlos").
    fn form_id(&self) -> &'static str;

    /// Human-readable name (e.g. "VLOS", "Steunzolen").
    fn name(&self) -> &'static str;

    /// Write every export key of this form. Must write the same keys
    /// whatever the field values are.
    fn write_fields(&self, out: &mut ExportWriter);
}

/// Flatten a submitted form. Absent data yields [`empty`].
pub fn normalize<Q: Questionnaire>(data: Option<&Q>) -> ExportMap {
    let Some(data) = data else {
        return empty::<Q>();
    };

    let mut out = ExportWriter::new();
    data.write_fields(&mut out);
    let map = out.finish();
    tracing::debug!(form = data.form_id(), keys = map.len(), "normalized form");
    map
}

/// Every key `Q` can produce, all mapped to `""`.
pub fn empty<Q: Questionnaire>() -> ExportMap {
    let mut out = ExportWriter::new();
    Q::default().write_fields(&mut out);
    out.finish().cleared()
}
