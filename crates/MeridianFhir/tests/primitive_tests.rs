use meridian_fhir::r4::{Account, AccountCoverage, Attachment, ContactPoint, Patient, Quantity, Timing};
use meridian_fhir::{decode, decode_str, encode, encode_string, DecodeError, PositiveInteger};
use serde_json::json;

fn assert_constraint<T: std::fmt::Debug>(result: Result<T, DecodeError>, expected_field: &str) {
    match result {
        Err(DecodeError::PrimitiveConstraintViolation { field, .. }) => assert_eq!(field, expected_field),
        other => panic!("expected a constraint violation on {}, got {:?}", expected_field, other),
    }
}

fn assert_mismatch<T: std::fmt::Debug>(result: Result<T, DecodeError>, expected_field: &str) {
    match result {
        Err(DecodeError::TypeMismatch { field, .. }) => assert_eq!(field, expected_field),
        other => panic!("expected a type mismatch on {}, got {:?}", expected_field, other),
    }
}

#[test]
fn test_positive_int_rejects_zero() {
    let result = decode::<AccountCoverage>(json!({
        "coverage": {"reference": "Coverage/7546D"},
        "priority": 0
    }));
    assert_constraint(result, "priority");

    let coverage: AccountCoverage = decode(json!({
        "coverage": {"reference": "Coverage/7546D"},
        "priority": 1
    }))
    .unwrap();
    assert_eq!(
        coverage.priority.and_then(|p| p.value).map(PositiveInteger::get),
        Some(1)
    );
}

#[test]
fn test_positive_int_in_lists_and_nested_types() {
    assert_constraint(decode::<ContactPoint>(json!({"rank": -1})), "rank");
    assert_constraint(
        decode::<Timing>(json!({"repeat": {"frequency": 0}})),
        "frequency",
    );
}

#[test]
fn test_unsigned_int_accepts_zero_and_rejects_negative() {
    let attachment: Attachment = decode(json!({"size": 0})).unwrap();
    assert_eq!(attachment.size.and_then(|s| s.value).map(|s| s.get()), Some(0));

    assert_constraint(decode::<Attachment>(json!({"size": -3})), "size");
    assert_constraint(decode::<Attachment>(json!({"size": 2147483648u64})), "size");
}

#[test]
fn test_decimal_text_is_preserved() {
    let text = r#"{"resourceType":"Quantity","value":1.50,"unit":"mg"}"#;
    let quantity: Quantity = decode_str(text).unwrap();
    assert_eq!(
        quantity.value.as_ref().and_then(|v| v.value.as_ref()).map(|v| v.original_string()),
        Some("1.50")
    );
    assert_eq!(encode_string(&quantity), text);

    let large = r#"{"resourceType":"Quantity","value":1.000000000000000000001}"#;
    let quantity: Quantity = decode_str(large).unwrap();
    assert_eq!(encode_string(&quantity), large);
}

#[test]
fn test_decimal_rejects_non_numeric_text() {
    assert_constraint(decode::<Quantity>(json!({"value": "1,5"})), "value");
    assert_mismatch(decode::<Quantity>(json!({"value": true})), "value");
}

#[test]
fn test_date_grammar() {
    for birth_date in ["1974", "1974-12", "1974-12-25"] {
        let patient: Patient = decode(json!({"resourceType": "Patient", "birthDate": birth_date})).unwrap();
        assert_eq!(encode(&patient)["birthDate"], json!(birth_date));
    }
    for bad in ["1974-13", "1974-02-30", "74-12-25", "1974-12-25T10:00:00Z"] {
        assert_constraint(
            decode::<Patient>(json!({"resourceType": "Patient", "birthDate": bad})),
            "birthDate",
        );
    }
}

#[test]
fn test_date_time_and_instant_grammar() {
    let patient: Patient = decode(json!({
        "resourceType": "Patient",
        "deceasedDateTime": "2015-02-14T13:42:00+10:00"
    }))
    .unwrap();
    assert_eq!(
        encode(&patient)["deceasedDateTime"],
        json!("2015-02-14T13:42:00+10:00")
    );

    assert_constraint(
        decode::<Patient>(json!({"resourceType": "Patient", "deceasedDateTime": "2015-02-14T13:42"})),
        "deceasedDateTime",
    );

    let meta_only_date = json!({
        "resourceType": "Account",
        "status": "active",
        "meta": {"lastUpdated": "2015-02-14"}
    });
    assert_constraint(decode::<Account>(meta_only_date), "lastUpdated");
}

#[test]
fn test_wrong_json_shapes_are_mismatches() {
    assert_mismatch(
        decode::<Patient>(json!({"resourceType": "Patient", "active": 1})),
        "active",
    );
    assert_mismatch(
        decode::<Patient>(json!({"resourceType": "Patient", "name": {"family": "Chalmers"}})),
        "name",
    );
    assert_mismatch(
        decode::<Patient>(json!({"resourceType": "Patient", "gender": ["male"]})),
        "gender",
    );
}

#[test]
fn test_boolean_rejects_other_strings() {
    assert_constraint(
        decode::<Patient>(json!({"resourceType": "Patient", "active": "yes"})),
        "active",
    );
}

#[test]
fn test_primitive_list_with_extensions() {
    let document = json!({
        "resourceType": "Patient",
        "name": [{
            "family": "Chalmers",
            "given": ["Peter", null],
            "_given": [null, {
                "id": "given-2",
                "extension": [{
                    "url": "http://hl7.org/fhir/StructureDefinition/iso21090-EN-qualifier",
                    "valueCode": "CL"
                }]
            }]
        }]
    });

    let patient: Patient = decode(document.clone()).unwrap();
    let given = patient.name.as_ref().unwrap()[0].given.as_ref().unwrap();
    assert_eq!(given.len(), 2);
    assert_eq!(given[0].value.as_deref(), Some("Peter"));
    assert!(given[1].value.is_none());
    assert_eq!(given[1].id.as_deref(), Some("given-2"));
    assert_eq!(encode(&patient), document);
}

#[test]
fn test_mismatched_parallel_arrays() {
    let result = decode::<Patient>(json!({
        "resourceType": "Patient",
        "name": [{"given": ["Peter", "James"], "_given": [null]}]
    }));
    assert_mismatch(result, "given");
}
