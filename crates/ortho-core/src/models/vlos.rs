use serde::{Deserialize, Serialize};
use ts_rs::TS;

use super::FlagMap;
use super::enclosure::EnclosureSelection;
use crate::lenient;

/// VLOS intake: "voorlopige orthopedische schoen", the provisional
/// orthopedic shoe made while the definitive pair is in production.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize, TS)]
#[serde(rename_all = "camelCase", default)]
#[ts(export)]
pub struct VlosData {
    /// `links`, `rechts` or `beide`.
    #[serde(deserialize_with = "lenient::text")]
    pub side: Option<String>,
    #[serde(deserialize_with = "lenient::text")]
    pub medical_indication: Option<String>,
    #[serde(deserialize_with = "lenient::text")]
    pub walking_distance: Option<String>,
    #[serde(deserialize_with = "lenient::flags")]
    pub walking_aids: FlagMap,
    #[serde(deserialize_with = "lenient::flags")]
    pub pathologies: FlagMap,
    #[serde(deserialize_with = "lenient::flags")]
    pub foot_inspection: FlagMap,
    #[serde(deserialize_with = "lenient::flags")]
    pub goals: FlagMap,

    // Shaft and enclosure heights, centimetres
    #[serde(deserialize_with = "lenient::text")]
    pub shaft_height_left_cm: Option<String>,
    #[serde(deserialize_with = "lenient::text")]
    pub shaft_height_right_cm: Option<String>,
    #[serde(deserialize_with = "lenient::text")]
    pub enclosure_left_cm: Option<String>,
    #[serde(deserialize_with = "lenient::text")]
    pub enclosure_right_cm: Option<String>,

    #[serde(flatten)]
    pub enclosure: EnclosureSelection,

    #[serde(deserialize_with = "lenient::text")]
    pub heel_raise_left: Option<String>,
    #[serde(deserialize_with = "lenient::text")]
    pub heel_raise_right: Option<String>,
    #[serde(deserialize_with = "lenient::flag")]
    pub sole_rocker: bool,
    #[serde(deserialize_with = "lenient::text")]
    pub rocker_type: Option<String>,
    #[serde(deserialize_with = "lenient::text")]
    pub closure_type: Option<String>,
    #[serde(deserialize_with = "lenient::flag")]
    pub heel_counter_reinforced: bool,
    #[serde(deserialize_with = "lenient::text")]
    pub special_notes: Option<String>,
}
