//! Static option tables: the bridge between the wizard's internal record
//! keys and the stable placeholder names in the Word templates.
//!
//! Export keys must be unique within a table and must not clash with any
//! scalar field of a form that uses the table.

use serde::Serialize;

/// A checkbox in a keyed group such as `pathologies`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct FlagOption {
    /// Sub-key in the submitted map.
    pub key: &'static str,
    pub label: &'static str,
    pub export_key: &'static str,
}

const fn flag(key: &'static str, label: &'static str, export_key: &'static str) -> FlagOption {
    FlagOption {
        key,
        label,
        export_key,
    }
}

/// An enclosure (omsluiting) option, selectable per shoe side.
///
/// Options with `needs_mm` export the measured thickness; the others export
/// the truthy marker.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct EnclosureOption {
    pub key: &'static str,
    pub label: &'static str,
    pub full_key_links: &'static str,
    pub full_key_rechts: &'static str,
    pub mm_key_links: &'static str,
    pub mm_key_rechts: &'static str,
    pub needs_mm: bool,
    /// Thickness the wizard pre-fills when the option is ticked.
    pub default_mm: Option<&'static str>,
    pub export_key_left: &'static str,
    pub export_key_right: &'static str,
}

pub static ENCLOSURE_OPTIONS: &[EnclosureOption] = &[
    EnclosureOption {
        key: "multivorm",
        label: "Multivorm",
        full_key_links: "omsluitingLinksMultivorm",
        full_key_rechts: "omsluitingRechtsMultivorm",
        mm_key_links: "omsluitingMmLinksMultivorm",
        mm_key_rechts: "omsluitingMmRechtsMultivorm",
        needs_mm: true,
        default_mm: Some("3"),
        export_key_left: "multivormLeftMm",
        export_key_right: "multivormRightMm",
    },
    EnclosureOption {
        key: "plastazote",
        label: "Plastazote",
        full_key_links: "omsluitingLinksPlastazote",
        full_key_rechts: "omsluitingRechtsPlastazote",
        mm_key_links: "omsluitingMmLinksPlastazote",
        mm_key_rechts: "omsluitingMmRechtsPlastazote",
        needs_mm: true,
        default_mm: Some("3"),
        export_key_left: "plastazoteLeftMm",
        export_key_right: "plastazoteRightMm",
    },
    EnclosureOption {
        key: "lavalan",
        label: "Lavalan",
        full_key_links: "omsluitingLinksLavalan",
        full_key_rechts: "omsluitingRechtsLavalan",
        mm_key_links: "omsluitingMmLinksLavalan",
        mm_key_rechts: "omsluitingMmRechtsLavalan",
        needs_mm: true,
        default_mm: Some("5"),
        export_key_left: "lavalanLeftMm",
        export_key_right: "lavalanRightMm",
    },
    EnclosureOption {
        key: "leder",
        label: "Leder",
        full_key_links: "omsluitingLinksLeder",
        full_key_rechts: "omsluitingRechtsLeder",
        mm_key_links: "omsluitingMmLinksLeder",
        mm_key_rechts: "omsluitingMmRechtsLeder",
        needs_mm: false,
        default_mm: None,
        export_key_left: "leatherLeft",
        export_key_right: "leatherRight",
    },
    EnclosureOption {
        key: "kunststof",
        label: "Kunststof kuip",
        full_key_links: "omsluitingLinksKunststof",
        full_key_rechts: "omsluitingRechtsKunststof",
        mm_key_links: "omsluitingMmLinksKunststof",
        mm_key_rechts: "omsluitingMmRechtsKunststof",
        needs_mm: false,
        default_mm: None,
        export_key_left: "plasticShellLeft",
        export_key_right: "plasticShellRight",
    },
    EnclosureOption {
        key: "carbon",
        label: "Carbon",
        full_key_links: "omsluitingLinksCarbon",
        full_key_rechts: "omsluitingRechtsCarbon",
        mm_key_links: "omsluitingMmLinksCarbon",
        mm_key_rechts: "omsluitingMmRechtsCarbon",
        needs_mm: false,
        default_mm: None,
        export_key_left: "carbonLeft",
        export_key_right: "carbonRight",
    },
    EnclosureOption {
        key: "verstijving",
        label: "Verstijving",
        full_key_links: "omsluitingLinksVerstijving",
        full_key_rechts: "omsluitingRechtsVerstijving",
        mm_key_links: "omsluitingMmLinksVerstijving",
        mm_key_rechts: "omsluitingMmRechtsVerstijving",
        needs_mm: false,
        default_mm: None,
        export_key_left: "stiffeningLeft",
        export_key_right: "stiffeningRight",
    },
];

pub static PATHOLOGIES: &[FlagOption] = &[
    flag("diabetes", "Diabetes mellitus", "diabetes"),
    flag("rheumatoidArthritis", "Reumatoïde artritis", "rheumatoidArthritis"),
    flag("neuropathy", "Neuropathie", "neuropathy"),
    flag("vascularDisease", "Vaatlijden", "vascularDisease"),
    flag("charcotFoot", "Charcot-voet", "charcotFoot"),
    flag("halluxValgus", "Hallux valgus", "halluxValgus"),
    flag("amputation", "Amputatie", "amputation"),
    flag("paralysis", "Verlamming", "paralysis"),
    flag("lymphedema", "Lymfoedeem", "lymphedema"),
];

pub static WALKING_AIDS: &[FlagOption] = &[
    flag("cane", "Wandelstok", "walkingAidCane"),
    flag("crutches", "Krukken", "walkingAidCrutches"),
    flag("walker", "Rollator", "walkingAidWalker"),
    flag("wheelchair", "Rolstoel", "walkingAidWheelchair"),
    flag("none", "Geen", "walkingAidNone"),
];

pub static FOOT_INSPECTION: &[FlagOption] = &[
    flag("callus", "Eelt", "inspectionCallus"),
    flag("ulcer", "Ulcus", "inspectionUlcer"),
    flag("redness", "Roodheid", "inspectionRedness"),
    flag("swelling", "Zwelling", "inspectionSwelling"),
    flag("drySkin", "Droge huid", "inspectionDrySkin"),
    flag("fungalNails", "Kalknagels", "inspectionFungalNails"),
    flag("deformity", "Standsafwijking", "inspectionDeformity"),
];

pub static GOALS: &[FlagOption] = &[
    flag("painReduction", "Pijnvermindering", "goalPainReduction"),
    flag("pressureRelief", "Drukverdeling", "goalPressureRelief"),
    flag("stability", "Stabiliteit", "goalStability"),
    flag("walkingDistance", "Loopafstand vergroten", "goalWalkingDistance"),
    flag("correction", "Correctie van de stand", "goalCorrection"),
    flag("accommodation", "Accommodatie van de vorm", "goalAccommodation"),
    flag("woundPrevention", "Wondpreventie", "goalWoundPrevention"),
];
