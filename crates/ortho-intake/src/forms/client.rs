use ortho_core::ExportMap;
use ortho_core::models::client::ClientData;

use crate::{ExportWriter, Questionnaire};

impl Questionnaire for ClientData {
    fn form_id(&self) -> &'static str {
        "client"
    }

    fn name(&self) -> &'static str {
        "Cliëntgegevens"
    }

    fn write_fields(&self, out: &mut ExportWriter) {
        out.text("practitionerId", self.practitioner_id.as_deref());
        out.text("date", self.date.as_deref());
        out.text("location", self.location.as_deref());
        out.text("salutation", self.salutation.as_deref());
        out.text("initials", self.initials.as_deref());
        out.text("clientName", self.client_name.as_deref());
        out.text("birthDate", self.birth_date.as_deref());

        out.text("postalCode", self.postal_code.as_deref());
        out.text("houseNumber", self.house_number.as_deref());
        out.text("houseNumberAddition", self.house_number_addition.as_deref());
        out.text("street", self.street.as_deref());
        out.text("city", self.city.as_deref());

        out.text("phoneOne", self.phone_one.as_deref());
        out.text("phoneTwo", self.phone_two.as_deref());
        out.text("email", self.email.as_deref());

        out.text("insurer", self.insurer.as_deref());
        out.text("insuranceNumber", self.insurance_number.as_deref());
        out.text("specialist", self.specialist.as_deref());
        out.text("generalPractitioner", self.general_practitioner.as_deref());

        out.text("intakeType", self.intake_type.as_deref());
    }
}

pub fn normalize(data: Option<&ClientData>) -> ExportMap {
    crate::normalize(data)
}

pub fn empty() -> ExportMap {
    crate::empty::<ClientData>()
}
