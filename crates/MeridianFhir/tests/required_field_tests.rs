use meridian_fhir::r4::{decode_resource, Account, Bundle, Extension, Provenance, ResourceType};
use meridian_fhir::{decode, encode, DecodeError, FhirJson};
use serde_json::{json, Value};

fn missing_field<T: FhirJson + std::fmt::Debug>(document: Value) -> String {
    match decode::<T>(document) {
        Err(DecodeError::MissingRequiredField(field)) => field,
        other => panic!("expected a missing required field, got {:?}", other),
    }
}

#[test]
fn test_bare_documents_of_every_resource_type() {
    for resource_type in ResourceType::ALL {
        let name = resource_type.as_str();
        let document = json!({"resourceType": name});
        match (decode_resource(document.clone()), resource_type.required_fields()) {
            (Err(DecodeError::MissingRequiredField(field)), [first, ..]) => {
                assert_eq!(field, *first, "{}", name)
            }
            (Ok(resource), []) => {
                assert_eq!(resource.resource_type(), *resource_type);
                assert_eq!(encode(&resource), document, "{}", name);
            }
            (other, required) => {
                panic!("{}: required {:?}, got {:?}", name, required, other)
            }
        }
    }
}

#[test]
fn test_every_required_field_is_enforced() {
    let account = json!({"resourceType": "Account", "status": "active"});
    assert!(decode::<Account>(account.clone()).is_ok());
    let mut stripped = account;
    stripped.as_object_mut().unwrap().remove("status");
    assert_eq!(missing_field::<Account>(stripped), "status");

    let provenance = json!({
        "resourceType": "Provenance",
        "target": [{"reference": "Procedure/example/_history/1"}],
        "recorded": "2015-06-27T08:39:24+10:00",
        "agent": [{"who": {"reference": "Practitioner/xcda-author"}}]
    });
    assert!(decode::<Provenance>(provenance.clone()).is_ok());
    let mut stripped = provenance;
    stripped["agent"][0].as_object_mut().unwrap().remove("who");
    assert_eq!(missing_field::<Provenance>(stripped), "who");

    let extension = json!({
        "url": "http://example.org/fhir/StructureDefinition/trusted",
        "valueBoolean": true
    });
    assert!(decode::<Extension>(extension.clone()).is_ok());
    let mut stripped = extension;
    stripped.as_object_mut().unwrap().remove("url");
    assert_eq!(missing_field::<Extension>(stripped), "url");

    let bundle = json!({"resourceType": "Bundle", "type": "collection"});
    assert!(decode::<Bundle>(bundle.clone()).is_ok());
    let mut stripped = bundle;
    stripped.as_object_mut().unwrap().remove("type");
    assert_eq!(missing_field::<Bundle>(stripped), "type");
}

#[test]
fn test_required_fields_are_listed_for_lookup() {
    assert_eq!(ResourceType::Account.required_fields(), &["status"]);
    assert_eq!(ResourceType::Bundle.required_fields(), &["type"]);
    assert_eq!(ResourceType::Patient.required_fields(), &[] as &[&str]);
    assert!(ResourceType::ALL.iter().any(|t| t.required_fields().is_empty()));
}
