use ortho_core::ExportMap;
use ortho_core::models::ovac::OvacData;

use crate::options::{PATHOLOGIES, WALKING_AIDS};
use crate::{ExportWriter, Questionnaire};

impl Questionnaire for OvacData {
    fn form_id(&self) -> &'static str {
        "ovac"
    }

    fn name(&self) -> &'static str {
        "OVAC"
    }

    fn write_fields(&self, out: &mut ExportWriter) {
        out.text("side", self.side.as_deref());
        out.text("medicalIndication", self.medical_indication.as_deref());
        out.text("shoeBrand", self.shoe_brand.as_deref());
        out.text("shoeSize", self.shoe_size.as_deref());

        out.text("heelRaiseLeft", self.heel_raise_left.as_deref());
        out.text("heelRaiseRight", self.heel_raise_right.as_deref());
        out.text("soleRaiseLeft", self.sole_raise_left.as_deref());
        out.text("soleRaiseRight", self.sole_raise_right.as_deref());
        out.flag("rockerSoleLeft", self.rocker_sole_left);
        out.flag("rockerSoleRight", self.rocker_sole_right);
        out.flag("flaredHeelLeft", self.flared_heel_left);
        out.flag("flaredHeelRight", self.flared_heel_right);
        out.text("heelWedgeLeft", self.heel_wedge_left.as_deref());
        out.text("heelWedgeRight", self.heel_wedge_right.as_deref());
        out.text("closureAdjustment", self.closure_adjustment.as_deref());

        out.number("price", self.price);
        out.flags(PATHOLOGIES, &self.pathologies);
        out.flags(WALKING_AIDS, &self.walking_aids);
        out.text("specialNotes", self.special_notes.as_deref());
    }
}

pub fn normalize(data: Option<&OvacData>) -> ExportMap {
    crate::normalize(data)
}

pub fn empty() -> ExportMap {
    crate::empty::<OvacData>()
}
