use axum::{Extension, Json};
use axum::extract::rejection::JsonRejection;
use ortho_core::ExportMap;
use ortho_core::models::session::IntakeSession;
use ortho_intake::normalize_intake_session;

use crate::error::ApiError;
use crate::middleware::audit::ExportedIntake;

pub async fn normalize(
    payload: Result<Json<IntakeSession>, JsonRejection>,
) -> Result<(Option<Extension<ExportedIntake>>, Json<ExportMap>), ApiError> {
    let Json(session) = payload?;
    let map = normalize_intake_session(&session)?;
    Ok((ExportedIntake::of(&session), Json(map)))
}
