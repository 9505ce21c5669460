use meridian_fhir::r4::{Account, Dosage, DosageAsNeeded, Period, Provenance};
use meridian_fhir::{decode, decode_str, encode, DecodeError, PrecisionDateTime};
use serde_json::json;

fn keys(value: &serde_json::Value) -> Vec<&str> {
    value
        .as_object()
        .map(|map| map.keys().map(String::as_str).collect())
        .unwrap_or_default()
}

#[test]
fn test_period_decodes_and_keeps_its_keys() {
    let period: Period =
        decode_str(r#"{"resourceType":"Period","start":"2021-01-01","end":"2021-02-01"}"#).unwrap();

    let start = period.start.as_ref().and_then(|s| s.value.as_ref()).unwrap();
    assert_eq!(start, &PrecisionDateTime::parse("2021-01-01").unwrap());
    assert_eq!(
        period.end.as_ref().and_then(|e| e.value.as_ref()).map(|e| e.original_string()),
        Some("2021-02-01")
    );
    assert!(period.id.is_none());
    assert!(period.extension.is_none());

    let encoded = encode(&period);
    assert_eq!(keys(&encoded), vec!["resourceType", "start", "end"]);
    assert_eq!(
        encoded,
        json!({"resourceType": "Period", "start": "2021-01-01", "end": "2021-02-01"})
    );
    assert_eq!(decode::<Period>(encoded).unwrap(), period);
}

#[test]
fn test_dosage_as_needed_boolean_from_string() {
    let dosage: Dosage = decode_str(r#"{"resourceType":"Dosage","asNeededBoolean":"true"}"#).unwrap();

    assert_eq!(dosage.as_needed, Some(DosageAsNeeded::Boolean(true.into())));
    let encoded = encode(&dosage);
    assert_eq!(encoded, json!({"resourceType": "Dosage", "asNeededBoolean": true}));
    assert!(encoded.get("asNeededCodeableConcept").is_none());
}

#[test]
fn test_account_keeps_explicit_empty_coverage() {
    let account: Account =
        decode_str(r#"{"resourceType":"Account","status":"active","coverage":[]}"#).unwrap();

    assert_eq!(account.status.value.as_deref(), Some("active"));
    assert_eq!(account.coverage, Some(vec![]));
    assert!(account.guarantor.is_none());

    let text = meridian_fhir::encode_string(&account);
    assert_eq!(text, r#"{"resourceType":"Account","status":"active","coverage":[]}"#);
}

#[test]
fn test_absent_and_empty_lists_differ() {
    let absent: Account = decode(json!({"resourceType": "Account", "status": "active"})).unwrap();
    let empty: Account =
        decode(json!({"resourceType": "Account", "status": "active", "coverage": []})).unwrap();

    assert_ne!(absent, empty);
    assert!(encode(&absent).get("coverage").is_none());
    assert_eq!(encode(&empty)["coverage"], json!([]));
}

#[test]
fn test_provenance_without_recorded_is_rejected() {
    let document = json!({
        "resourceType": "Provenance",
        "target": [{"reference": "Procedure/example/_history/1"}],
        "occurredPeriod": {"start": "2015-06-27", "end": "2015-06-28"},
        "agent": [{"who": {"reference": "Practitioner/xcda-author"}}]
    });

    match decode::<Provenance>(document) {
        Err(DecodeError::MissingRequiredField(field)) => assert_eq!(field, "recorded"),
        other => panic!("expected a missing recorded field, got {:?}", other),
    }
}

#[test]
fn test_provenance_with_recorded_decodes() {
    let document = json!({
        "resourceType": "Provenance",
        "id": "example",
        "target": [{"reference": "Procedure/example/_history/1"}],
        "recorded": "2015-06-27T08:39:24+10:00",
        "agent": [{"who": {"reference": "Practitioner/xcda-author"}}]
    });

    let provenance: Provenance = decode(document.clone()).unwrap();
    assert_eq!(provenance.target.len(), 1);
    assert_eq!(
        provenance.recorded.value.as_ref().map(|r| r.original_string()),
        Some("2015-06-27T08:39:24+10:00")
    );
    assert_eq!(encode(&provenance), document);
}

#[test]
fn test_default_provenance_writes_no_empty_recorded() {
    let encoded = encode(&Provenance::default());
    assert_eq!(encoded, json!({"resourceType": "Provenance", "target": [], "agent": []}));
    assert!(encoded.get("_recorded").is_none());

    match decode::<Provenance>(encoded) {
        Err(DecodeError::MissingRequiredField(field)) => assert_eq!(field, "recorded"),
        other => panic!("expected a missing recorded field, got {:?}", other),
    }
}
