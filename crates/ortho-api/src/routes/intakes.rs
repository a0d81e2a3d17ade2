use axum::Json;
use axum::extract::Path;
use ortho_core::models::intake::IntakeType;
use ortho_intake::intake_keys;
use ortho_intake::options::{
    ENCLOSURE_OPTIONS, EnclosureOption, FOOT_INSPECTION, FlagOption, GOALS, PATHOLOGIES,
    WALKING_AIDS,
};
use serde::Serialize;

use crate::error::ApiError;

#[derive(Serialize)]
pub struct IntakeSummary {
    id: &'static str,
    name: &'static str,
}

#[derive(Serialize)]
pub struct IntakeDetail {
    id: &'static str,
    name: &'static str,
    /// Every placeholder a template for this intake type may use.
    keys: Vec<String>,
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
pub struct OptionCatalog {
    enclosures: &'static [EnclosureOption],
    pathologies: &'static [FlagOption],
    walking_aids: &'static [FlagOption],
    foot_inspection: &'static [FlagOption],
    goals: &'static [FlagOption],
}

pub async fn list_intakes() -> Json<Vec<IntakeSummary>> {
    let intakes = IntakeType::ALL
        .iter()
        .map(|t| IntakeSummary {
            id: t.id(),
            name: t.name(),
        })
        .collect();
    Json(intakes)
}

pub async fn get_intake_detail(Path(id): Path<String>) -> Result<Json<IntakeDetail>, ApiError> {
    let intake_type: IntakeType = id
        .parse()
        .map_err(|_| ApiError::NotFound(format!("intake type not found: {id}")))?;

    Ok(Json(IntakeDetail {
        id: intake_type.id(),
        name: intake_type.name(),
        keys: intake_keys(intake_type),
    }))
}

pub async fn list_options() -> Json<OptionCatalog> {
    Json(OptionCatalog {
        enclosures: ENCLOSURE_OPTIONS,
        pathologies: PATHOLOGIES,
        walking_aids: WALKING_AIDS,
        foot_inspection: FOOT_INSPECTION,
        goals: GOALS,
    })
}
