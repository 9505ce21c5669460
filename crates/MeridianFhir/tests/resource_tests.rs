use meridian_fhir::r4::{
    decode_resource, resource_type_of, Account, Bundle, ExampleScenario, Medication,
    MedicationIngredientItem, Organization, Patient, Resource, ResourceType,
};
use meridian_fhir::{
    decode, encode, DecodeError, DomainResourceBase, FhirResource, FhirResourceTypeProvider,
    FhirType, FhirVersion, ResourceBase,
};
use serde_json::json;

#[test]
fn test_any_resource_dispatches_on_discriminator() {
    let resource = decode_resource(json!({
        "resourceType": "Account",
        "id": "example",
        "status": "active",
        "name": "HACC Funded Billing for Peter James Chalmers"
    }))
    .unwrap();

    assert_eq!(resource.resource_type(), ResourceType::Account);
    assert_eq!(resource.id(), Some("example"));
    let Resource::Account(account) = &resource else {
        panic!("expected an account, got {:?}", resource);
    };
    assert_eq!(
        account.name.as_ref().and_then(|n| n.value.as_deref()),
        Some("HACC Funded Billing for Peter James Chalmers")
    );
}

#[test]
fn test_unknown_resource_type() {
    match decode_resource(json!({"resourceType": "Spaceship", "id": "x"})) {
        Err(DecodeError::UnknownResourceType(name)) => assert_eq!(name, "Spaceship"),
        other => panic!("expected an unknown resource type, got {:?}", other),
    }
    assert!(matches!(
        resource_type_of("SubscriptionTopic"),
        Err(DecodeError::UnknownResourceType(_))
    ));
}

#[test]
fn test_any_resource_needs_a_string_discriminator() {
    assert!(matches!(
        decode_resource(json!({"id": "x"})),
        Err(DecodeError::MissingRequiredField(field)) if field == "resourceType"
    ));
    assert!(matches!(
        decode_resource(json!({"resourceType": 7})),
        Err(DecodeError::TypeMismatch { field, .. }) if field == "resourceType"
    ));
}

#[test]
fn test_concrete_decode_checks_discriminator() {
    let result = decode::<Account>(json!({"resourceType": "Patient", "status": "active"}));
    assert!(matches!(result, Err(DecodeError::TypeMismatch { field, .. }) if field == "resourceType"));

    // the tag is optional when the concrete type is already known
    let account: Account = decode(json!({"status": "active"})).unwrap();
    assert_eq!(encode(&account)["resourceType"], json!("Account"));
}

#[test]
fn test_discriminator_is_written_first() {
    let patient = Patient {
        id: Some("pat1".into()),
        active: Some(true.into()),
        ..Default::default()
    };
    let encoded = encode(&patient);
    let first_key = encoded.as_object().and_then(|map| map.keys().next()).cloned();
    assert_eq!(first_key.as_deref(), Some("resourceType"));
    assert_eq!(encoded["resourceType"], json!(Patient::TYPE_NAME));
    assert_eq!(patient.type_name(), "Patient");
}

#[test]
fn test_unknown_fields_are_rejected() {
    match decode::<Patient>(json!({"resourceType": "Patient", "nickname": "Pete"})) {
        Err(DecodeError::UnknownField { type_name, field }) => {
            assert_eq!(type_name, "Patient");
            assert_eq!(field, "nickname");
        }
        other => panic!("expected an unknown field, got {:?}", other),
    }
}

#[test]
fn test_contained_resources_round_trip() {
    let document = json!({
        "resourceType": "Medication",
        "id": "med0310",
        "contained": [{
            "resourceType": "SubscriptionTopic",
            "id": "topic03"
        }]
    });
    assert!(matches!(
        decode::<Medication>(document),
        Err(DecodeError::UnknownResourceType(name)) if name == "SubscriptionTopic"
    ));

    let document = json!({
        "resourceType": "Medication",
        "id": "med0310",
        "contained": [{
            "resourceType": "Patient",
            "id": "p1",
            "active": true
        }],
        "code": {"text": "Oral Form Product"},
        "ingredient": [{
            "itemReference": {"reference": "#p1"},
            "strength": {
                "numerator": {"value": 5, "system": "http://unitsofmeasure.org", "code": "mg"},
                "denominator": {"value": 1, "system": "http://terminology.hl7.org/CodeSystem/v3-orderableDrugForm", "code": "TAB"}
            }
        }]
    });

    let medication: Medication = decode(document.clone()).unwrap();
    let contained = medication.contained().unwrap();
    assert_eq!(contained.len(), 1);
    assert_eq!(contained[0].resource_type(), ResourceType::Patient);
    assert_eq!(contained[0].id(), Some("p1"));
    let ingredient = &medication.ingredient.as_ref().unwrap()[0];
    assert!(matches!(ingredient.item, MedicationIngredientItem::Reference(_)));
    assert_eq!(encode(&medication), document);
}

#[test]
fn test_bundle_entries_hold_any_resource() {
    let document = json!({
        "resourceType": "Bundle",
        "id": "bundle-example",
        "meta": {"lastUpdated": "2014-08-18T01:43:30Z"},
        "type": "searchset",
        "total": 3,
        "link": [{"relation": "self", "url": "https://example.com/base/MedicationRequest?patient=347"}],
        "entry": [
            {
                "fullUrl": "https://example.com/base/Patient/3123",
                "resource": {"resourceType": "Patient", "id": "3123"},
                "search": {"mode": "match", "score": 1}
            },
            {
                "fullUrl": "https://example.com/base/Medication/example",
                "resource": {"resourceType": "Medication", "id": "example"},
                "search": {"mode": "include"}
            }
        ]
    });

    let bundle: Bundle = decode(document.clone()).unwrap();
    assert_eq!(bundle.r#type.value.as_deref(), Some("searchset"));
    assert_eq!(bundle.total.as_ref().and_then(|t| t.value).map(|t| t.get()), Some(3));
    let types: Vec<ResourceType> = bundle
        .entry
        .iter()
        .flatten()
        .filter_map(|e| e.resource.as_ref().map(Resource::resource_type))
        .collect();
    assert_eq!(types, vec![ResourceType::Patient, ResourceType::Medication]);
    assert_eq!(bundle.id(), Some("bundle-example"));
    assert_eq!(encode(&bundle), document);
}

#[test]
fn test_bundle_of_organizations() {
    let document = json!({
        "resourceType": "Bundle",
        "type": "collection",
        "entry": [{
            "fullUrl": "http://example.org/fhir/Organization/hl7",
            "resource": {
                "resourceType": "Organization",
                "id": "hl7",
                "active": true,
                "name": "Health Level Seven International",
                "alias": ["HL7 International"],
                "telecom": [{"system": "phone", "value": "(+1) 734-677-7777"}],
                "address": [{"line": ["3300 Washtenaw Avenue, Suite 227"], "city": "Ann Arbor", "state": "MI"}],
                "contact": [{"name": {"family": "Smith", "given": ["Ann"]}}]
            }
        }]
    });

    let bundle: Bundle = decode(document.clone()).unwrap();
    let entry = &bundle.entry.as_ref().unwrap()[0];
    let Some(Resource::Organization(organization)) = &entry.resource else {
        panic!("expected an organization, got {:?}", entry.resource);
    };
    assert_eq!(
        organization.name.as_ref().and_then(|n| n.value.as_deref()),
        Some("Health Level Seven International")
    );
    assert_eq!(organization.alias.as_ref().map(Vec::len), Some(1));
    assert_eq!(encode(&bundle), document);

    let standalone: Organization = decode(document["entry"][0]["resource"].clone()).unwrap();
    assert_eq!(&standalone, organization);
}

#[test]
fn test_resource_type_as_a_data_field() {
    // ExampleScenario.instance names the type of each instance it describes.
    let document = json!({
        "resourceType": "ExampleScenario",
        "status": "draft",
        "instance": [{
            "resourceId": "iherxdlorequest",
            "resourceType": "ServiceRequest",
            "name": "Lab order"
        }]
    });

    let scenario: ExampleScenario = decode(document.clone()).unwrap();
    let instance = &scenario.instance.as_ref().unwrap()[0];
    assert_eq!(instance.resource_type.value.as_deref(), Some("ServiceRequest"));
    assert_eq!(encode(&scenario), document);
    assert_eq!(encode(instance)["resourceType"], json!("ServiceRequest"));
}

#[test]
fn test_registry_lists_every_resource() {
    let names = Resource::get_resource_type_names();
    assert_eq!(names.len(), ResourceType::ALL.len());
    assert_eq!(names.len(), 146);
    for name in [
        "Account",
        "Bundle",
        "ExampleScenario",
        "Media",
        "Medication",
        "MedicationStatement",
        "Observation",
        "Organization",
        "Patient",
        "Practitioner",
        "Provenance",
        "Subscription",
        "Substance",
        "SupplyRequest",
    ] {
        assert!(Resource::is_resource_type(name), "{} should be registered", name);
        assert_eq!(resource_type_of(name).unwrap().to_string(), name);
    }
}

#[test]
fn test_serde_interop_uses_the_same_wire_format() {
    let text = r#"{"resourceType":"Account","id":"a1","status":"inactive"}"#;
    let resource: Resource = serde_json::from_str(text).unwrap();
    assert_eq!(serde_json::to_string(&resource).unwrap(), text);

    let bad: Result<Account, _> = serde_json::from_str(r#"{"resourceType":"Account"}"#);
    let message = bad.unwrap_err().to_string();
    assert!(message.contains("Missing required field: status"), "{}", message);
}

#[test]
fn test_versioned_wrapper() {
    let resource = FhirResource::decode(
        FhirVersion::R4,
        json!({"resourceType": "Patient", "id": "example"}),
    )
    .unwrap();
    assert_eq!(resource.version(), FhirVersion::R4);
    assert_eq!(resource.resource_type_name(), "Patient");
}
