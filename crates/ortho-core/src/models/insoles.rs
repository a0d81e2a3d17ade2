use serde::{Deserialize, Serialize};
use ts_rs::TS;

use super::FlagMap;
use crate::lenient;

/// Custom insoles (steunzolen) intake.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, TS)]
#[serde(rename_all = "camelCase", default)]
#[ts(export)]
pub struct InsolesData {
    #[serde(deserialize_with = "lenient::text")]
    pub side: Option<String>,
    #[serde(deserialize_with = "lenient::text")]
    pub medical_indication: Option<String>,
    #[serde(deserialize_with = "lenient::text")]
    pub shoe_size: Option<String>,
    #[serde(deserialize_with = "lenient::text")]
    pub insole_type: Option<String>,
    #[serde(deserialize_with = "lenient::text")]
    pub cover_material: Option<String>,

    /// Arch support height, millimetres.
    #[serde(deserialize_with = "lenient::text")]
    pub arch_support_left: Option<String>,
    #[serde(deserialize_with = "lenient::text")]
    pub arch_support_right: Option<String>,
    #[serde(deserialize_with = "lenient::flag")]
    pub metatarsal_pad_left: bool,
    #[serde(deserialize_with = "lenient::flag")]
    pub metatarsal_pad_right: bool,
    #[serde(deserialize_with = "lenient::flag")]
    pub heel_cup_left: bool,
    #[serde(deserialize_with = "lenient::flag")]
    pub heel_cup_right: bool,
    #[serde(deserialize_with = "lenient::text")]
    pub heel_raise_left: Option<String>,
    #[serde(deserialize_with = "lenient::text")]
    pub heel_raise_right: Option<String>,

    #[serde(deserialize_with = "lenient::number")]
    pub price: Option<f64>,
    #[serde(deserialize_with = "lenient::flags")]
    pub pathologies: FlagMap,
    #[serde(deserialize_with = "lenient::flags")]
    pub goals: FlagMap,
    #[serde(deserialize_with = "lenient::flags")]
    pub foot_inspection: FlagMap,
    #[serde(deserialize_with = "lenient::text")]
    pub special_notes: Option<String>,
}
