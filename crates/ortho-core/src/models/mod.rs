use std::collections::BTreeMap;

pub mod client;
pub mod enclosure;
pub mod insoles;
pub mod intake;
pub mod osa;
pub mod osb;
pub mod ovac;
pub mod pulman;
pub mod rebacare;
pub mod session;
pub mod vlos;

/// Keyed checkbox group as submitted by the wizard.
pub type FlagMap = BTreeMap<String, bool>;

/// Keyed free-text measurements (millimetres, centimetres) as submitted by
/// the wizard.
pub type MeasureMap = BTreeMap<String, String>;
