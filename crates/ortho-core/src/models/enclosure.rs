use serde::{Deserialize, Serialize};
use ts_rs::TS;

use super::{FlagMap, MeasureMap};
use crate::lenient;

/// Per-side enclosure (omsluiting) selection, flattened into the VLOS, OSA
/// and OSB payloads.
///
/// The toggle maps are keyed by `omsluitingLinks<Optie>` /
/// `omsluitingRechts<Optie>`, the measurement maps by
/// `omsluitingMmLinks<Optie>` / `omsluitingMmRechts<Optie>`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize, TS)]
#[serde(rename_all = "camelCase", default)]
#[ts(export)]
pub struct EnclosureSelection {
    #[serde(deserialize_with = "lenient::flags")]
    pub enclosure_left: FlagMap,
    #[serde(deserialize_with = "lenient::flags")]
    pub enclosure_right: FlagMap,
    #[serde(deserialize_with = "lenient::measures")]
    pub enclosure_left_mm: MeasureMap,
    #[serde(deserialize_with = "lenient::measures")]
    pub enclosure_right_mm: MeasureMap,
}
