use ortho_core::ExportMap;
use ortho_core::models::pulman::PulmanData;

use crate::options::{FOOT_INSPECTION, PATHOLOGIES, WALKING_AIDS};
use crate::{ExportWriter, Questionnaire};

impl Questionnaire for PulmanData {
    fn form_id(&self) -> &'static str {
        "pulman"
    }

    fn name(&self) -> &'static str {
        "Pulman"
    }

    fn write_fields(&self, out: &mut ExportWriter) {
        out.text("side", self.side.as_deref());
        out.text("medicalIndication", self.medical_indication.as_deref());
        out.text("averageUsage", self.average_usage.as_deref());
        out.text("pulmanType", self.pulman_type.as_deref());
        out.text("shoeSize", self.shoe_size.as_deref());
        out.number("price", self.price);
        out.flag("receivedInstructions", self.received_instructions);
        out.flags(PATHOLOGIES, &self.pathologies);
        out.flags(FOOT_INSPECTION, &self.foot_inspection);
        out.flags(WALKING_AIDS, &self.walking_aids);
        out.text("specialNotes", self.special_notes.as_deref());
    }
}

pub fn normalize(data: Option<&PulmanData>) -> ExportMap {
    crate::normalize(data)
}

pub fn empty() -> ExportMap {
    crate::empty::<PulmanData>()
}
