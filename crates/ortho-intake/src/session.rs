//! Merging the client step and the chosen questionnaire into the single
//! map handed to the document templates.

use std::collections::BTreeSet;

use ortho_core::ExportMap;
use ortho_core::error::CoreError;
use ortho_core::models::client::ClientData;
use ortho_core::models::intake::{IntakeData, IntakeType};
use ortho_core::models::session::IntakeSession;
use tracing::warn;

use crate::forms::{client, insoles, osa, osb, ovac, pulman, rebacare, vlos};

/// Normalize whichever questionnaire was filled in.
pub fn normalize_intake(data: &IntakeData) -> ExportMap {
    match data {
        IntakeData::Vlos(d) => vlos::normalize(Some(d)),
        IntakeData::Osa(d) => osa::normalize(Some(d)),
        IntakeData::Pulman(d) => pulman::normalize(Some(d)),
        IntakeData::Rebacare(d) => rebacare::normalize(Some(d)),
        IntakeData::Osb(d) => osb::normalize(Some(d)),
        IntakeData::Ovac(d) => ovac::normalize(Some(d)),
        IntakeData::Insoles(d) => insoles::normalize(Some(d)),
    }
}

/// The empty map of a questionnaire.
pub fn empty_intake(intake_type: IntakeType) -> ExportMap {
    match intake_type {
        IntakeType::Vlos => vlos::empty(),
        IntakeType::Osa => osa::empty(),
        IntakeType::Pulman => pulman::empty(),
        IntakeType::Rebacare => rebacare::empty(),
        IntakeType::Osb => osb::empty(),
        IntakeType::Ovac => ovac::empty(),
        IntakeType::Insoles => insoles::empty(),
    }
}

/// Every placeholder a template for `intake_type` may use: the client keys
/// plus the questionnaire's keys, sorted.
pub fn intake_keys(intake_type: IntakeType) -> Vec<String> {
    let keys: BTreeSet<String> = client::empty()
        .into_iter()
        .chain(empty_intake(intake_type))
        .map(|(key, _)| key)
        .collect();
    keys.into_iter().collect()
}

/// Merge the normalized client step with the normalized questionnaire.
///
/// Without questionnaire data the empty map of the client's chosen intake
/// type is merged instead, so templates for that type still find every key.
/// When no usable intake type was chosen only the client keys are returned.
pub fn normalize_session(client: Option<&ClientData>, intake: Option<&IntakeData>) -> ExportMap {
    let mut merged = client::normalize(client);

    let intake_map = match intake {
        Some(data) => Some(normalize_intake(data)),
        None => match client
            .and_then(|c| c.intake_type.as_deref())
            .map(str::trim)
            .filter(|raw| !raw.is_empty())
        {
            Some(raw) => match raw.parse::<IntakeType>() {
                Ok(intake_type) => Some(empty_intake(intake_type)),
                Err(e) => {
                    warn!(error = %e, "no questionnaire keys merged");
                    None
                }
            },
            None => {
                warn!("client step has no intake type, exporting client keys only");
                None
            }
        },
    };

    for (key, value) in intake_map.into_iter().flatten() {
        if merged.contains_key(&key) {
            warn!(key = %key, "questionnaire key shadows a client key");
        }
        merged.insert(key, value);
    }

    merged
}

/// Resolve a posted session and normalize it.
pub fn normalize_intake_session(session: &IntakeSession) -> Result<ExportMap, CoreError> {
    let intake = session.intake_data()?;
    Ok(normalize_session(session.client.as_ref(), intake.as_ref()))
}
