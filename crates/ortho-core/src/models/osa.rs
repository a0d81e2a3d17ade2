use serde::{Deserialize, Serialize};
use ts_rs::TS;

use super::vlos::VlosData;
use crate::lenient;

/// OSA intake. Carries the complete VLOS questionnaire plus the digital
/// scan section used when the last is milled from a 3D scan.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize, TS)]
#[serde(rename_all = "camelCase", default)]
#[ts(export)]
pub struct OsaData {
    #[serde(flatten)]
    pub vlos: VlosData,

    #[serde(deserialize_with = "lenient::flag")]
    pub digital_enabled: bool,
    /// Hielheffing, millimetres.
    #[serde(deserialize_with = "lenient::text")]
    pub heel_lift: Option<String>,
    /// Leesthoogte, millimetres.
    #[serde(deserialize_with = "lenient::text")]
    pub last_height: Option<String>,
    #[serde(deserialize_with = "lenient::flag")]
    pub mtp1_deep_left: bool,
    #[serde(deserialize_with = "lenient::flag")]
    pub mtp1_deep_right: bool,
    #[serde(deserialize_with = "lenient::flag")]
    pub claw_toes_left: bool,
    #[serde(deserialize_with = "lenient::flag")]
    pub claw_toes_right: bool,
    #[serde(deserialize_with = "lenient::flag")]
    pub scanned_with_foil: bool,
    #[serde(deserialize_with = "lenient::text")]
    pub digital_instructions: Option<String>,
}
