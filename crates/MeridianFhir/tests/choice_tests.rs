use meridian_fhir::r4::{
    CodeableConcept, Coding, Extension, ExtensionValue, MedicationStatement,
    MedicationStatementEffective, MedicationStatementMedication, Observation, ObservationValue,
    Quantity, Reference,
};
use meridian_fhir::{decode, encode, DecodeError, FhirChoice, PreciseDecimal};
use serde_json::json;

fn statement_json() -> serde_json::Value {
    json!({
        "resourceType": "MedicationStatement",
        "id": "example001",
        "status": "active",
        "medicationReference": {"reference": "#med0309"},
        "subject": {"reference": "Patient/pat1", "display": "Donald Duck"},
        "effectiveDateTime": "2015-01-23",
        "dateAsserted": "2015-02-22",
        "dosage": [{
            "sequence": 1,
            "text": "1-2 tablets once daily at bedtime as needed for restless legs",
            "asNeededBoolean": false,
            "timing": {"repeat": {"frequency": 1, "period": 1, "periodUnit": "d"}}
        }]
    })
}

#[test]
fn test_required_choice_decodes_to_its_arm() {
    let statement: MedicationStatement = decode(statement_json()).unwrap();

    match &statement.medication {
        MedicationStatementMedication::Reference(reference) => {
            assert_eq!(reference.reference.as_ref().and_then(|r| r.value.as_deref()), Some("#med0309"));
        }
        other => panic!("unexpected medication arm {:?}", other),
    }
    assert!(matches!(
        statement.effective,
        Some(MedicationStatementEffective::DateTime(_))
    ));
    assert_eq!(encode(&statement), statement_json());
}

#[test]
fn test_missing_required_choice_names_the_group() {
    let mut document = statement_json();
    document.as_object_mut().unwrap().remove("medicationReference");

    match decode::<MedicationStatement>(document) {
        Err(DecodeError::MissingRequiredField(field)) => assert_eq!(field, "medication[x]"),
        other => panic!("expected missing medication[x], got {:?}", other),
    }
}

#[test]
fn test_two_arms_of_one_choice_are_ambiguous() {
    let document = json!({
        "resourceType": "Observation",
        "status": "final",
        "code": {"text": "glucose"},
        "valueString": "high",
        "valueBoolean": true
    });

    match decode::<Observation>(document) {
        Err(DecodeError::AmbiguousChoice { field, keys }) => {
            assert_eq!(field, "value");
            assert_eq!(keys, vec!["valueString".to_string(), "valueBoolean".to_string()]);
        }
        other => panic!("expected an ambiguous choice, got {:?}", other),
    }
}

#[test]
fn test_extension_half_counts_as_its_arm() {
    let document = json!({
        "resourceType": "Observation",
        "status": "final",
        "code": {"text": "glucose"},
        "valueString": "high",
        "_valueBoolean": {"id": "b1"}
    });

    assert!(matches!(
        decode::<Observation>(document),
        Err(DecodeError::AmbiguousChoice { .. })
    ));
}

#[test]
fn test_primitive_arm_keeps_its_extension_half() {
    let document = json!({
        "resourceType": "Observation",
        "status": "final",
        "code": {"text": "glucose"},
        "_valueString": {
            "extension": [{
                "url": "http://hl7.org/fhir/StructureDefinition/data-absent-reason",
                "valueCode": "masked"
            }]
        }
    });

    let observation: Observation = decode(document.clone()).unwrap();
    let Some(ObservationValue::String(value)) = &observation.value else {
        panic!("expected the string arm, got {:?}", observation.value);
    };
    assert!(value.value.is_none());
    assert_eq!(value.extension.as_ref().map(Vec::len), Some(1));
    assert_eq!(encode(&observation), document);
}

#[test]
fn test_complex_arm_round_trips() {
    let observation = Observation {
        status: "final".into(),
        code: CodeableConcept {
            coding: Some(vec![Coding {
                system: Some("http://loinc.org".into()),
                code: Some("15074-8".into()),
                display: Some("Glucose [Moles/volume] in Blood".into()),
                ..Default::default()
            }]),
            ..Default::default()
        },
        value: Some(ObservationValue::Quantity(Quantity {
            value: Some(PreciseDecimal::parse("6.3").unwrap().into()),
            unit: Some("mmol/l".into()),
            system: Some("http://unitsofmeasure.org".into()),
            code: Some("mmol/L".into()),
            ..Default::default()
        })),
        ..Default::default()
    };

    let encoded = encode(&observation);
    assert_eq!(encoded["valueQuantity"]["value"], json!(6.3));
    assert!(encoded.get("value").is_none());
    assert_eq!(decode::<Observation>(encoded).unwrap(), observation);
}

#[test]
fn test_choice_keys_are_listed_in_declaration_order() {
    assert_eq!(MedicationStatementMedication::BASE_NAME, "medication");
    assert_eq!(
        MedicationStatementMedication::KEYS,
        &["medicationCodeableConcept", "medicationReference"]
    );
    assert_eq!(ExtensionValue::KEYS.len(), 50);
}

#[test]
fn test_extension_value_arms() {
    let extension: Extension = decode(json!({
        "url": "http://example.org/fhir/StructureDefinition/referral",
        "valueReference": {"reference": "ServiceRequest/1"}
    }))
    .unwrap();

    assert_eq!(extension.url, "http://example.org/fhir/StructureDefinition/referral");
    assert_eq!(
        extension.value,
        Some(ExtensionValue::Reference(Reference {
            reference: Some("ServiceRequest/1".into()),
            ..Default::default()
        }))
    );
}
