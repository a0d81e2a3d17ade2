use serde::{Deserialize, Serialize};
use ts_rs::TS;

use super::FlagMap;
use crate::lenient;

/// OVAC intake: orthopedic adaptations to the client's own ready-made
/// shoes ("orthopedische voorziening aan confectieschoeisel").
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, TS)]
#[serde(rename_all = "camelCase", default)]
#[ts(export)]
pub struct OvacData {
    #[serde(deserialize_with = "lenient::text")]
    pub side: Option<String>,
    #[serde(deserialize_with = "lenient::text")]
    pub medical_indication: Option<String>,
    #[serde(deserialize_with = "lenient::text")]
    pub shoe_brand: Option<String>,
    #[serde(deserialize_with = "lenient::text")]
    pub shoe_size: Option<String>,

    #[serde(deserialize_with = "lenient::text")]
    pub heel_raise_left: Option<String>,
    #[serde(deserialize_with = "lenient::text")]
    pub heel_raise_right: Option<String>,
    #[serde(deserialize_with = "lenient::text")]
    pub sole_raise_left: Option<String>,
    #[serde(deserialize_with = "lenient::text")]
    pub sole_raise_right: Option<String>,
    #[serde(deserialize_with = "lenient::flag")]
    pub rocker_sole_left: bool,
    #[serde(deserialize_with = "lenient::flag")]
    pub rocker_sole_right: bool,
    #[serde(deserialize_with = "lenient::flag")]
    pub flared_heel_left: bool,
    #[serde(deserialize_with = "lenient::flag")]
    pub flared_heel_right: bool,
    /// `mediaal` or `lateraal`.
    #[serde(deserialize_with = "lenient::text")]
    pub heel_wedge_left: Option<String>,
    #[serde(deserialize_with = "lenient::text")]
    pub heel_wedge_right: Option<String>,
    #[serde(deserialize_with = "lenient::text")]
    pub closure_adjustment: Option<String>,

    #[serde(deserialize_with = "lenient::number")]
    pub price: Option<f64>,
    #[serde(deserialize_with = "lenient::flags")]
    pub pathologies: FlagMap,
    #[serde(deserialize_with = "lenient::flags")]
    pub walking_aids: FlagMap,
    #[serde(deserialize_with = "lenient::text")]
    pub special_notes: Option<String>,
}
