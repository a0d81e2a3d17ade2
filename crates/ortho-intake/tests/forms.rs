use std::collections::BTreeSet;

use ortho_core::ExportMap;
use ortho_core::models::intake::{IntakeData, IntakeType};
use ortho_core::models::osa::OsaData;
use ortho_core::models::vlos::VlosData;
use ortho_intake::forms::{client, osa, pulman, vlos};
use ortho_intake::{ExportWriter, Questionnaire, empty_intake, normalize_intake};
use serde_json::{Value, json};

fn keys(map: &ExportMap) -> BTreeSet<&str> {
    map.keys().collect()
}

/// Every flag ticked, every text field filled, for collision checks.
fn fully_populated(intake_type: IntakeType) -> IntakeData {
    let mut payload = serde_json::Map::new();
    for key in empty_intake(intake_type).keys() {
        payload.insert(key.to_string(), json!("x"));
    }
    let all = json!({
        "cane": true, "diabetes": true, "callus": true, "painReduction": true,
        "omsluitingLinksMultivorm": true, "omsluitingRechtsCarbon": true
    });
    for map_field in [
        "walkingAids",
        "pathologies",
        "footInspection",
        "goals",
        "enclosureLeft",
        "enclosureRight",
    ] {
        payload.insert(map_field.to_string(), all.clone());
    }
    payload.insert(
        "enclosureLeftMm".to_string(),
        json!({"omsluitingMmLinksMultivorm": "4"}),
    );

    IntakeData::from_value(intake_type, Value::Object(payload))
        .expect("payload is an object")
        .expect("payload is not null")
}

fn write(data: &IntakeData) -> ExportWriter {
    let mut out = ExportWriter::new();
    match data {
        IntakeData::Vlos(d) => d.write_fields(&mut out),
        IntakeData::Osa(d) => d.write_fields(&mut out),
        IntakeData::Pulman(d) => d.write_fields(&mut out),
        IntakeData::Rebacare(d) => d.write_fields(&mut out),
        IntakeData::Osb(d) => d.write_fields(&mut out),
        IntakeData::Ovac(d) => d.write_fields(&mut out),
        IntakeData::Insoles(d) => d.write_fields(&mut out),
    }
    out
}

#[test]
fn vlos_absent_is_all_empty() {
    let map = vlos::normalize(None);

    assert_eq!(map, vlos::empty());
    assert!(map.iter().all(|(_, v)| v.is_empty()));
}

#[test]
fn client_absent_is_all_empty() {
    let map = client::normalize(None);

    assert_eq!(keys(&map), keys(&client::empty()));
    assert_eq!(map.get("clientName"), Some(""));
}

#[test]
fn osa_overlays_digital_section_on_vlos() {
    let data: OsaData = serde_json::from_value(json!({
        "side": "beide",
        "medicalIndication": "Diabetische voet met neuropathie",
        "digitalEnabled": true,
        "lastHeight": "20"
    }))
    .unwrap();

    let map = osa::normalize(Some(&data));

    assert_eq!(map.get("digitalEnabled"), Some("Ja"));
    assert_eq!(map.get("lastHeight"), Some("20"));
    assert_eq!(map.get("side"), Some("beide"));
    assert_eq!(map.get("heelLift"), Some(""));
    assert_eq!(map.get("shaftHeightLeftCm"), Some(""));
    assert_eq!(map.get("multivormLeftMm"), Some(""));
    assert_eq!(keys(&map), keys(&osa::empty()));
}

#[test]
fn osa_keys_are_a_superset_of_vlos_keys() {
    let data: OsaData = serde_json::from_value(json!({
        "side": "links",
        "soleRocker": true,
        "clawToesLeft": true
    }))
    .unwrap();
    let osa_map = osa::normalize(Some(&data));
    let vlos_map = vlos::normalize(Some(&data.vlos));

    assert!(keys(&osa_map).is_superset(&keys(&vlos_map)));
    for (key, value) in vlos_map.iter() {
        assert_eq!(osa_map.get(key), Some(value), "{key}");
    }
}

#[test]
fn vlos_normalizes_every_field_kind() {
    let data: VlosData = serde_json::from_value(json!({
        "side": "rechts",
        "walkingDistance": "500 m",
        "pathologies": {"diabetes": true, "neuropathy": "ja", "gout": true},
        "goals": {"stability": true},
        "shaftHeightRightCm": 14,
        "enclosureRightCm": "9",
        "enclosureRight": {"omsluitingRechtsPlastazote": true, "omsluitingRechtsLeder": true},
        "enclosureRightMm": {"omsluitingMmRechtsPlastazote": 4},
        "soleRocker": true,
        "closureType": "Klittenband"
    }))
    .unwrap();

    let map = vlos::normalize(Some(&data));

    assert_eq!(map.get("side"), Some("rechts"));
    assert_eq!(map.get("walkingDistance"), Some("500 m"));
    assert_eq!(map.get("diabetes"), Some("Ja"));
    assert_eq!(map.get("neuropathy"), Some("Ja"));
    assert_eq!(map.get("charcotFoot"), Some(""));
    assert_eq!(map.get("gout"), None);
    assert_eq!(map.get("goalStability"), Some("Ja"));
    assert_eq!(map.get("shaftHeightRightCm"), Some("14"));
    assert_eq!(map.get("enclosureRightCm"), Some("9"));
    assert_eq!(map.get("plastazoteRightMm"), Some("4"));
    assert_eq!(map.get("leatherRight"), Some("Ja"));
    assert_eq!(map.get("leatherLeft"), Some(""));
    assert_eq!(map.get("soleRocker"), Some("Ja"));
    assert_eq!(map.get("heelCounterReinforced"), Some(""));
    assert_eq!(map.get("closureType"), Some("Klittenband"));
    assert_eq!(keys(&map), keys(&vlos::empty()));
}

#[test]
fn prices_use_shortest_decimal_text() {
    let whole = serde_json::from_value(json!({"price": 120})).unwrap();
    let cents = serde_json::from_value(json!({"price": "89,95"})).unwrap();
    let junk = serde_json::from_value(json!({"price": "n.v.t."})).unwrap();

    assert_eq!(pulman::normalize(Some(&whole)).get("price"), Some("120"));
    assert_eq!(pulman::normalize(Some(&cents)).get("price"), Some("89.95"));
    assert_eq!(pulman::normalize(Some(&junk)).get("price"), Some(""));
}

#[test]
fn no_form_writes_a_key_twice() {
    for intake_type in IntakeType::ALL {
        let data = fully_populated(intake_type);
        let out = write(&data);
        assert!(out.collisions().is_empty(), "{intake_type}: {:?}", out.collisions());
    }

    let mut out = ExportWriter::new();
    ortho_core::models::client::ClientData::default().write_fields(&mut out);
    assert!(out.collisions().is_empty());
}

#[test]
fn fully_populated_forms_keep_the_empty_key_set() {
    for intake_type in IntakeType::ALL {
        let map = normalize_intake(&fully_populated(intake_type));
        assert_eq!(keys(&map), keys(&empty_intake(intake_type)), "{intake_type}");
    }
}

#[test]
fn client_keys_never_clash_with_questionnaire_keys() {
    let client_keys: BTreeSet<String> = client::empty().keys().map(str::to_string).collect();
    for intake_type in IntakeType::ALL {
        let clashes: Vec<String> = empty_intake(intake_type)
            .keys()
            .filter(|k| client_keys.contains(*k))
            .map(str::to_string)
            .collect();
        assert!(clashes.is_empty(), "{intake_type}: {clashes:?}");
    }
}
