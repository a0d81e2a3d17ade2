use serde::{Deserialize, Serialize};
use serde_json::Value;
use ts_rs::TS;

use super::client::ClientData;
use super::intake::{IntakeData, IntakeType};
use crate::error::CoreError;

/// Everything the wizard collected for one client, as posted at export time.
///
/// `intake` stays raw until [`IntakeSession::intake_data`] resolves it
/// against the client's `intakeType`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, TS)]
#[serde(rename_all = "camelCase", default)]
#[ts(export)]
pub struct IntakeSession {
    pub client: Option<ClientData>,
    pub intake: Option<Value>,
}

impl IntakeSession {
    /// The questionnaire named by the client step, if any was chosen.
    pub fn intake_type(&self) -> Result<Option<IntakeType>, CoreError> {
        match self
            .client
            .as_ref()
            .and_then(|c| c.intake_type.as_deref())
            .map(str::trim)
        {
            None | Some("") => Ok(None),
            Some(raw) => raw.parse().map(Some),
        }
    }

    pub fn intake_data(&self) -> Result<Option<IntakeData>, CoreError> {
        let Some(value) = self.intake.as_ref().filter(|v| !v.is_null()) else {
            return Ok(None);
        };
        let intake_type = self
            .intake_type()?
            .ok_or(CoreError::MissingIntakeType)?;
        IntakeData::from_value(intake_type, value.clone())
    }
}
