use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use serde_json::Value;
use ts_rs::TS;

use super::insoles::InsolesData;
use super::osa::OsaData;
use super::osb::OsbData;
use super::ovac::OvacData;
use super::pulman::PulmanData;
use super::rebacare::RebacareData;
use super::vlos::VlosData;
use crate::error::CoreError;

/// The questionnaire a client session is filled in with.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize, TS,
)]
#[serde(rename_all = "snake_case")]
#[ts(export)]
pub enum IntakeType {
    Vlos,
    Osa,
    Pulman,
    Rebacare,
    Osb,
    Ovac,
    Insoles,
}

impl IntakeType {
    pub const ALL: [IntakeType; 7] = [
        IntakeType::Vlos,
        IntakeType::Osa,
        IntakeType::Pulman,
        IntakeType::Rebacare,
        IntakeType::Osb,
        IntakeType::Ovac,
        IntakeType::Insoles,
    ];

    /// Stable identifier, as serialized.
    pub fn id(self) -> &'static str {
        match self {
            IntakeType::Vlos => "vlos",
            IntakeType::Osa => "osa",
            IntakeType::Pulman => "pulman",
            IntakeType::Rebacare => "rebacare",
            IntakeType::Osb => "osb",
            IntakeType::Ovac => "ovac",
            IntakeType::Insoles => "insoles",
        }
    }

    /// Name shown to practitioners.
    pub fn name(self) -> &'static str {
        match self {
            IntakeType::Vlos => "VLOS",
            IntakeType::Osa => "OSA",
            IntakeType::Pulman => "Pulman",
            IntakeType::Rebacare => "Rebacare",
            IntakeType::Osb => "OSB",
            IntakeType::Ovac => "OVAC",
            IntakeType::Insoles => "Steunzolen",
        }
    }
}

impl fmt::Display for IntakeType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.id())
    }
}

impl FromStr for IntakeType {
    type Err = CoreError;

    /// Case-insensitive; accepts the Dutch `steunzolen` for insoles.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "vlos" => Ok(IntakeType::Vlos),
            "osa" => Ok(IntakeType::Osa),
            "pulman" => Ok(IntakeType::Pulman),
            "rebacare" => Ok(IntakeType::Rebacare),
            "osb" => Ok(IntakeType::Osb),
            "ovac" => Ok(IntakeType::Ovac),
            "insoles" | "steunzolen" => Ok(IntakeType::Insoles),
            _ => Err(CoreError::UnknownIntakeType(s.to_string())),
        }
    }
}

/// One populated questionnaire. Exactly one exists per client session.
#[derive(Debug, Clone, PartialEq)]
pub enum IntakeData {
    Vlos(VlosData),
    Osa(OsaData),
    Pulman(PulmanData),
    Rebacare(RebacareData),
    Osb(OsbData),
    Ovac(OvacData),
    Insoles(InsolesData),
}

impl IntakeData {
    pub fn intake_type(&self) -> IntakeType {
        match self {
            IntakeData::Vlos(_) => IntakeType::Vlos,
            IntakeData::Osa(_) => IntakeType::Osa,
            IntakeData::Pulman(_) => IntakeType::Pulman,
            IntakeData::Rebacare(_) => IntakeType::Rebacare,
            IntakeData::Osb(_) => IntakeType::Osb,
            IntakeData::Ovac(_) => IntakeType::Ovac,
            IntakeData::Insoles(_) => IntakeType::Insoles,
        }
    }

    /// Parse a raw wizard payload as the questionnaire named by
    /// `intake_type`. `null` means the step was never submitted.
    pub fn from_value(intake_type: IntakeType, value: Value) -> Result<Option<Self>, CoreError> {
        if value.is_null() {
            return Ok(None);
        }
        if !value.is_object() {
            return Err(CoreError::IntakeNotObject {
                intake_type: intake_type.id().to_string(),
            });
        }

        let data = match intake_type {
            IntakeType::Vlos => IntakeData::Vlos(serde_json::from_value(value)?),
            IntakeType::Osa => IntakeData::Osa(serde_json::from_value(value)?),
            IntakeType::Pulman => IntakeData::Pulman(serde_json::from_value(value)?),
            IntakeType::Rebacare => IntakeData::Rebacare(serde_json::from_value(value)?),
            IntakeType::Osb => IntakeData::Osb(serde_json::from_value(value)?),
            IntakeType::Ovac => IntakeData::Ovac(serde_json::from_value(value)?),
            IntakeType::Insoles => IntakeData::Insoles(serde_json::from_value(value)?),
        };
        Ok(Some(data))
    }
}
