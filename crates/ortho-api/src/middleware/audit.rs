use axum::Extension;
use axum::extract::Request;
use axum::middleware::Next;
use axum::response::Response;
use ortho_core::models::intake::IntakeType;
use ortho_core::models::session::IntakeSession;

/// Questionnaire an export route worked on, attached to its response for
/// [`audit_log`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ExportedIntake(pub IntakeType);

impl ExportedIntake {
    /// Response part for a session; nothing when no usable type was chosen.
    pub fn of(session: &IntakeSession) -> Option<Extension<Self>> {
        session.intake_type().ok().flatten().map(|t| Extension(Self(t)))
    }
}

/// Request logging middleware.
///
/// Logs every API request as a structured `api_request` event, with the
/// intake type on export routes. Bodies are never logged; sessions carry
/// patient data.
pub async fn audit_log(req: Request, next: Next) -> Response {
    let method = req.method().clone();
    let path = req.uri().path().to_string();

    let response = next.run(req).await;

    let status = response.status().as_u16();
    let intake = response
        .extensions()
        .get::<ExportedIntake>()
        .map_or("-", |e| e.0.id());
    tracing::info!(
        method = %method,
        path = %path,
        status,
        intake,
        "api_request"
    );

    response
}
