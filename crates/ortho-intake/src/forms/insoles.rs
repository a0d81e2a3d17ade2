use ortho_core::ExportMap;
use ortho_core::models::insoles::InsolesData;

use crate::options::{FOOT_INSPECTION, GOALS, PATHOLOGIES};
use crate::{ExportWriter, Questionnaire};

impl Questionnaire for InsolesData {
    fn form_id(&self) -> &'static str {
        "insoles"
    }

    fn name(&self) -> &'static str {
        "Steunzolen"
    }

    fn write_fields(&self, out: &mut ExportWriter) {
        out.text("side", self.side.as_deref());
        out.text("medicalIndication", self.medical_indication.as_deref());
        out.text("shoeSize", self.shoe_size.as_deref());
        out.text("insoleType", self.insole_type.as_deref());
        out.text("coverMaterial", self.cover_material.as_deref());

        out.text("archSupportLeft", self.arch_support_left.as_deref());
        out.text("archSupportRight", self.arch_support_right.as_deref());
        out.flag("metatarsalPadLeft", self.metatarsal_pad_left);
        out.flag("metatarsalPadRight", self.metatarsal_pad_right);
        out.flag("heelCupLeft", self.heel_cup_left);
        out.flag("heelCupRight", self.heel_cup_right);
        out.text("heelRaiseLeft", self.heel_raise_left.as_deref());
        out.text("heelRaiseRight", self.heel_raise_right.as_deref());

        out.number("price", self.price);
        out.flags(PATHOLOGIES, &self.pathologies);
        out.flags(GOALS, &self.goals);
        out.flags(FOOT_INSPECTION, &self.foot_inspection);
        out.text("specialNotes", self.special_notes.as_deref());
    }
}

pub fn normalize(data: Option<&InsolesData>) -> ExportMap {
    crate::normalize(data)
}

pub fn empty() -> ExportMap {
    crate::empty::<InsolesData>()
}
