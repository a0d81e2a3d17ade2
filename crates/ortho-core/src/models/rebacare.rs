use serde::{Deserialize, Serialize};
use ts_rs::TS;

use super::FlagMap;
use crate::lenient;

/// Rebacare intake: semi-custom therapeutic shoe ordered from the Rebacare
/// collection.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, TS)]
#[serde(rename_all = "camelCase", default)]
#[ts(export)]
pub struct RebacareData {
    #[serde(deserialize_with = "lenient::text")]
    pub side: Option<String>,
    #[serde(deserialize_with = "lenient::text")]
    pub medical_indication: Option<String>,
    #[serde(deserialize_with = "lenient::text")]
    pub rebacare_type: Option<String>,
    #[serde(deserialize_with = "lenient::text")]
    pub shoe_size: Option<String>,
    #[serde(deserialize_with = "lenient::text")]
    pub width_fitting: Option<String>,
    #[serde(deserialize_with = "lenient::text")]
    pub colour: Option<String>,
    #[serde(deserialize_with = "lenient::text")]
    pub closure_type: Option<String>,
    #[serde(deserialize_with = "lenient::number")]
    pub price: Option<f64>,
    #[serde(deserialize_with = "lenient::flag")]
    pub insole_included: bool,
    #[serde(deserialize_with = "lenient::flags")]
    pub pathologies: FlagMap,
    #[serde(deserialize_with = "lenient::flags")]
    pub walking_aids: FlagMap,
    #[serde(deserialize_with = "lenient::text")]
    pub special_notes: Option<String>,
}
