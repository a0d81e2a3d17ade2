use ortho_core::ExportMap;
use ortho_core::models::rebacare::RebacareData;

use crate::options::{PATHOLOGIES, WALKING_AIDS};
use crate::{ExportWriter, Questionnaire};

impl Questionnaire for RebacareData {
    fn form_id(&self) -> &'static str {
        "rebacare"
    }

    fn name(&self) -> &'static str {
        "Rebacare"
    }

    fn write_fields(&self, out: &mut ExportWriter) {
        out.text("side", self.side.as_deref());
        out.text("medicalIndication", self.medical_indication.as_deref());
        out.text("rebacareType", self.rebacare_type.as_deref());
        out.text("shoeSize", self.shoe_size.as_deref());
        out.text("widthFitting", self.width_fitting.as_deref());
        out.text("colour", self.colour.as_deref());
        out.text("closureType", self.closure_type.as_deref());
        out.number("price", self.price);
        out.flag("insoleIncluded", self.insole_included);
        out.flags(PATHOLOGIES, &self.pathologies);
        out.flags(WALKING_AIDS, &self.walking_aids);
        out.text("specialNotes", self.special_notes.as_deref());
    }
}

pub fn normalize(data: Option<&RebacareData>) -> ExportMap {
    crate::normalize(data)
}

pub fn empty() -> ExportMap {
    crate::empty::<RebacareData>()
}
