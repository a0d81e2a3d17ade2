use axum::Json;
use axum::extract::State;
use axum::extract::rejection::JsonRejection;
use axum::http::header;
use axum::response::IntoResponse;
use ortho_core::models::session::IntakeSession;
use ortho_export::docx::{SummarySection, generate_summary_docx};
use ortho_intake::forms::client;
use ortho_intake::{empty_intake, normalize_intake};

use crate::error::ApiError;
use crate::middleware::audit::ExportedIntake;
use crate::state::AppState;

const DOCX_CONTENT_TYPE: &str =
    "application/vnd.openxmlformats-officedocument.wordprocessingml.document";

/// Render a posted session as a DOCX werkbon: one table for the client
/// step, one for the questionnaire.
pub async fn summary(
    State(state): State<AppState>,
    payload: Result<Json<IntakeSession>, JsonRejection>,
) -> Result<impl IntoResponse, ApiError> {
    let Json(session) = payload?;

    let mut sections = vec![SummarySection::new(
        "Cliënt",
        client::normalize(session.client.as_ref()),
    )];

    let intake = match session.intake_data()? {
        Some(data) => Some((data.intake_type(), normalize_intake(&data))),
        // Blank questionnaire of the chosen type, if one was chosen
        None => session
            .intake_type()
            .ok()
            .flatten()
            .map(|t| (t, empty_intake(t))),
    };

    let title = match &intake {
        Some((intake_type, _)) => format!("Werkbon {}", intake_type.name()),
        None => "Werkbon".to_string(),
    };
    if let Some((intake_type, map)) = intake {
        sections.push(SummarySection::new(intake_type.name(), map));
    }

    let bytes = generate_summary_docx(&title, &sections, &state.config.summary_styles)?;

    Ok((
        ExportedIntake::of(&session),
        [
            (header::CONTENT_TYPE, DOCX_CONTENT_TYPE),
            (
                header::CONTENT_DISPOSITION,
                "attachment; filename=\"werkbon.docx\"",
            ),
        ],
        bytes,
    ))
}
