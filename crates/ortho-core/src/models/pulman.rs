use serde::{Deserialize, Serialize};
use ts_rs::TS;

use super::FlagMap;
use crate::lenient;

/// Pulman intake: prefabricated bandage/wound shoe.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, TS)]
#[serde(rename_all = "camelCase", default)]
#[ts(export)]
pub struct PulmanData {
    #[serde(deserialize_with = "lenient::text")]
    pub side: Option<String>,
    #[serde(deserialize_with = "lenient::text")]
    pub medical_indication: Option<String>,
    /// How often the shoe will be worn (`dagelijks`, `binnenshuis`, ...).
    #[serde(deserialize_with = "lenient::text")]
    pub average_usage: Option<String>,
    #[serde(deserialize_with = "lenient::text")]
    pub pulman_type: Option<String>,
    #[serde(deserialize_with = "lenient::text")]
    pub shoe_size: Option<String>,
    /// Euro, incl. VAT.
    #[serde(deserialize_with = "lenient::number")]
    pub price: Option<f64>,
    #[serde(deserialize_with = "lenient::flag")]
    pub received_instructions: bool,
    #[serde(deserialize_with = "lenient::flags")]
    pub pathologies: FlagMap,
    #[serde(deserialize_with = "lenient::flags")]
    pub foot_inspection: FlagMap,
    #[serde(deserialize_with = "lenient::flags")]
    pub walking_aids: FlagMap,
    #[serde(deserialize_with = "lenient::text")]
    pub special_notes: Option<String>,
}
