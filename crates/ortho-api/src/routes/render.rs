use axum::{Extension, Json};
use axum::extract::rejection::JsonRejection;
use ortho_core::models::session::IntakeSession;
use ortho_export::render::render_template;
use ortho_intake::normalize_intake_session;
use serde::{Deserialize, Serialize};

use crate::error::ApiError;
use crate::middleware::audit::ExportedIntake;

#[derive(Deserialize)]
pub struct RenderRequest {
    #[serde(default)]
    pub session: IntakeSession,
    pub template: String,
}

#[derive(Serialize)]
pub struct RenderResponse {
    pub rendered: String,
}

/// Fill a `${key}` template from a posted session.
pub async fn render(
    payload: Result<Json<RenderRequest>, JsonRejection>,
) -> Result<(Option<Extension<ExportedIntake>>, Json<RenderResponse>), ApiError> {
    let Json(req) = payload?;
    let map = normalize_intake_session(&req.session)?;
    let rendered = render_template("intake", &req.template, &map)?;
    Ok((
        ExportedIntake::of(&req.session),
        Json(RenderResponse { rendered }),
    ))
}
