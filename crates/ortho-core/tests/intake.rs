use ortho_core::error::CoreError;
use ortho_core::models::intake::{IntakeData, IntakeType};
use ortho_core::models::session::IntakeSession;
use serde_json::{Value, json};

#[test]
fn intake_type_parses_case_insensitively() {
    assert_eq!("VLOS".parse::<IntakeType>().unwrap(), IntakeType::Vlos);
    assert_eq!(" osb ".parse::<IntakeType>().unwrap(), IntakeType::Osb);
    assert_eq!("Steunzolen".parse::<IntakeType>().unwrap(), IntakeType::Insoles);
}

#[test]
fn unknown_intake_type_is_an_error() {
    let err = "sandalen".parse::<IntakeType>().unwrap_err();
    assert!(matches!(err, CoreError::UnknownIntakeType(ref s) if s == "sandalen"));
}

#[test]
fn ids_round_trip_through_parse() {
    for intake_type in IntakeType::ALL {
        assert_eq!(intake_type.id().parse::<IntakeType>().unwrap(), intake_type);
    }
}

#[test]
fn null_payload_is_absent() {
    assert!(IntakeData::from_value(IntakeType::Osa, Value::Null).unwrap().is_none());
}

#[test]
fn non_object_payload_is_rejected() {
    let err = IntakeData::from_value(IntakeType::Ovac, json!("links")).unwrap_err();
    assert!(matches!(err, CoreError::IntakeNotObject { .. }));
}

#[test]
fn payload_parses_as_the_named_variant() {
    let data = IntakeData::from_value(IntakeType::Rebacare, json!({"colour": "zwart"}))
        .unwrap()
        .unwrap();

    assert_eq!(data.intake_type(), IntakeType::Rebacare);
    match data {
        IntakeData::Rebacare(r) => assert_eq!(r.colour.as_deref(), Some("zwart")),
        other => panic!("unexpected variant: {other:?}"),
    }
}

#[test]
fn session_without_client_has_no_intake_type() {
    let session = IntakeSession::default();
    assert_eq!(session.intake_type().unwrap(), None);
    assert!(session.intake_data().unwrap().is_none());
}

#[test]
fn session_intake_without_type_is_rejected() {
    let session: IntakeSession = serde_json::from_value(json!({
        "client": {"clientName": "Bakker"},
        "intake": {"side": "links"}
    }))
    .unwrap();

    assert!(matches!(
        session.intake_data().unwrap_err(),
        CoreError::MissingIntakeType
    ));
}
