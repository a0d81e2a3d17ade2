use serde::{Deserialize, Serialize};
use ts_rs::TS;

use crate::lenient;

/// Appointment and demographic record from the first wizard step.
///
/// `date` and `birth_date` are kept as the `DD-MM-YYYY` strings the date
/// pickers produce; they are never reparsed.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize, TS)]
#[serde(rename_all = "camelCase", default)]
#[ts(export)]
pub struct ClientData {
    #[serde(deserialize_with = "lenient::text")]
    pub practitioner_id: Option<String>,
    #[serde(deserialize_with = "lenient::text")]
    pub date: Option<String>,
    #[serde(deserialize_with = "lenient::text")]
    pub location: Option<String>,
    /// `Dhr.`, `Mevr.` or free text.
    #[serde(deserialize_with = "lenient::text")]
    pub salutation: Option<String>,
    #[serde(deserialize_with = "lenient::text")]
    pub initials: Option<String>,
    #[serde(deserialize_with = "lenient::text")]
    pub client_name: Option<String>,
    #[serde(deserialize_with = "lenient::text")]
    pub birth_date: Option<String>,

    // Address
    #[serde(deserialize_with = "lenient::text")]
    pub postal_code: Option<String>,
    #[serde(deserialize_with = "lenient::text")]
    pub house_number: Option<String>,
    #[serde(deserialize_with = "lenient::text")]
    pub house_number_addition: Option<String>,
    #[serde(deserialize_with = "lenient::text")]
    pub street: Option<String>,
    #[serde(deserialize_with = "lenient::text")]
    pub city: Option<String>,

    // Contact
    #[serde(deserialize_with = "lenient::text")]
    pub phone_one: Option<String>,
    #[serde(deserialize_with = "lenient::text")]
    pub phone_two: Option<String>,
    #[serde(deserialize_with = "lenient::text")]
    pub email: Option<String>,

    // Medical
    #[serde(deserialize_with = "lenient::text")]
    pub insurer: Option<String>,
    #[serde(deserialize_with = "lenient::text")]
    pub insurance_number: Option<String>,
    #[serde(deserialize_with = "lenient::text")]
    pub specialist: Option<String>,
    #[serde(deserialize_with = "lenient::text")]
    pub general_practitioner: Option<String>,

    /// Discriminator selecting the questionnaire. Kept as submitted; see
    /// [`crate::models::intake::IntakeType`] for the parsed form.
    #[serde(deserialize_with = "lenient::text")]
    pub intake_type: Option<String>,
}
