use ortho_core::ExportMap;
use ortho_core::models::osa::OsaData;

use super::vlos;
use crate::{ExportWriter, Questionnaire};

/// OSA reuses the whole VLOS questionnaire and adds the digital scan
/// section on top of it.
impl Questionnaire for OsaData {
    fn form_id(&self) -> &'static str {
        "osa"
    }

    fn name(&self) -> &'static str {
        "OSA"
    }

    fn write_fields(&self, out: &mut ExportWriter) {
        out.merge(vlos::normalize(Some(&self.vlos)));

        out.flag("digitalEnabled", self.digital_enabled);
        out.text("heelLift", self.heel_lift.as_deref());
        out.text("lastHeight", self.last_height.as_deref());
        out.flag("mtp1DeepLeft", self.mtp1_deep_left);
        out.flag("mtp1DeepRight", self.mtp1_deep_right);
        out.flag("clawToesLeft", self.claw_toes_left);
        out.flag("clawToesRight", self.claw_toes_right);
        out.flag("scannedWithFoil", self.scanned_with_foil);
        out.text("digitalInstructions", self.digital_instructions.as_deref());
    }
}

pub fn normalize(data: Option<&OsaData>) -> ExportMap {
    crate::normalize(data)
}

pub fn empty() -> ExportMap {
    crate::empty::<OsaData>()
}
