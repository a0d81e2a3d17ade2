use ortho_core::ExportMap;
use ortho_core::models::osb::OsbData;

use crate::enclosure::normalize_enclosure;
use crate::options::{FOOT_INSPECTION, GOALS, PATHOLOGIES, WALKING_AIDS};
use crate::{ExportWriter, Questionnaire};

impl Questionnaire for OsbData {
    fn form_id(&self) -> &'static str {
        "osb"
    }

    fn name(&self) -> &'static str {
        "OSB"
    }

    fn write_fields(&self, out: &mut ExportWriter) {
        out.text("side", self.side.as_deref());
        out.text("medicalIndication", self.medical_indication.as_deref());
        out.text("shoeModel", self.shoe_model.as_deref());

        out.text("shaftHeightLeftCm", self.shaft_height_left_cm.as_deref());
        out.text("shaftHeightRightCm", self.shaft_height_right_cm.as_deref());
        out.text("enclosureLeftCm", self.enclosure_left_cm.as_deref());
        out.text("enclosureRightCm", self.enclosure_right_cm.as_deref());
        out.merge(normalize_enclosure(&self.enclosure));

        out.text("heelRaiseLeft", self.heel_raise_left.as_deref());
        out.text("heelRaiseRight", self.heel_raise_right.as_deref());
        out.flag("soleRocker", self.sole_rocker);
        out.text("rockerType", self.rocker_type.as_deref());
        out.text("closureType", self.closure_type.as_deref());
        out.flag("paddedTongue", self.padded_tongue);
        out.flag("heelCounterReinforced", self.heel_counter_reinforced);
        out.flag("ankleSupportLeft", self.ankle_support_left);
        out.flag("ankleSupportRight", self.ankle_support_right);

        out.flags(PATHOLOGIES, &self.pathologies);
        out.flags(GOALS, &self.goals);
        out.flags(FOOT_INSPECTION, &self.foot_inspection);
        out.flags(WALKING_AIDS, &self.walking_aids);
        out.text("specialNotes", self.special_notes.as_deref());
    }
}

pub fn normalize(data: Option<&OsbData>) -> ExportMap {
    crate::normalize(data)
}

pub fn empty() -> ExportMap {
    crate::empty::<OsbData>()
}
