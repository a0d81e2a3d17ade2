//! Whatever subset of fields the wizard submits, and whatever shape the
//! widget values have, a questionnaire always exports its full key set.

use std::collections::BTreeSet;

use ortho_core::models::intake::{IntakeData, IntakeType};
use ortho_intake::{empty_intake, normalize_intake};
use proptest::prelude::*;
use serde_json::{Map, Value, json};

const FIELDS: &[&str] = &[
    "side",
    "medicalIndication",
    "walkingDistance",
    "walkingAids",
    "pathologies",
    "footInspection",
    "goals",
    "shaftHeightLeftCm",
    "enclosureRightCm",
    "enclosureLeft",
    "enclosureRight",
    "enclosureLeftMm",
    "enclosureRightMm",
    "heelRaiseLeft",
    "soleRocker",
    "closureType",
    "specialNotes",
    "digitalEnabled",
    "lastHeight",
    "clawToesRight",
    "averageUsage",
    "price",
    "receivedInstructions",
    "widthFitting",
    "insoleIncluded",
    "shoeModel",
    "ankleSupportLeft",
    "soleRaiseRight",
    "flaredHeelLeft",
    "heelWedgeLeft",
    "insoleType",
    "metatarsalPadRight",
    "archSupportLeft",
];

fn widget_value() -> impl Strategy<Value = Value> {
    prop_oneof![
        Just(Value::Null),
        any::<bool>().prop_map(Value::Bool),
        any::<i32>().prop_map(|n| json!(n)),
        "[a-zA-Z0-9 ,.]{0,10}".prop_map(Value::String),
        prop::collection::btree_map("[a-zA-Z]{1,24}", any::<bool>(), 0..4).prop_map(|m| json!(m)),
        prop::collection::btree_map("[a-zA-Z]{1,24}", "[0-9]{0,2}", 0..4).prop_map(|m| json!(m)),
    ]
}

fn payload() -> impl Strategy<Value = Map<String, Value>> {
    prop::collection::vec((prop::sample::select(FIELDS), widget_value()), 0..FIELDS.len())
        .prop_map(|entries| {
            entries
                .into_iter()
                .map(|(k, v)| (k.to_string(), v))
                .collect()
        })
}

proptest! {
    #[test]
    fn partial_input_keeps_the_full_key_set(
        intake_type in prop::sample::select(IntakeType::ALL.to_vec()),
        fields in payload(),
    ) {
        let data = IntakeData::from_value(intake_type, Value::Object(fields));
        prop_assert!(data.is_ok(), "{:?}", data.as_ref().err());
        let data = data.unwrap();
        prop_assert!(data.is_some());

        let normalized = normalize_intake(&data.unwrap());
        let expected = empty_intake(intake_type);
        let got: BTreeSet<&str> = normalized.keys().collect();
        let want: BTreeSet<&str> = expected.keys().collect();
        prop_assert_eq!(got, want);
    }
}
