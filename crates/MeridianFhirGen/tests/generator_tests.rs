use std::fs;
use std::path::Path;
use meridian_fhir::FhirVersion;
use meridian_fhir_gen::{GeneratorConfig, GeneratorError, run};
use serde_json::{Value, json};
use tempfile::TempDir;

fn element(path: &str, min: u32, max: &str, codes: &[&str]) -> Value {
    let mut element = json!({
        "id": path,
        "path": path,
        "short": format!("The {} element", path.rsplit('.').next().unwrap_or(path)),
        "min": min,
        "max": max,
    });
    if !codes.is_empty() {
        element["type"] = codes.iter().map(|c| json!({"code": c})).collect();
    }
    element
}

fn definition(name: &str, kind: &str, base: &str, elements: Vec<Value>) -> Value {
    json!({
        "resourceType": "StructureDefinition",
        "id": name,
        "url": format!("http://hl7.org/fhir/StructureDefinition/{}", name),
        "name": name,
        "description": format!("Test definition of {}.", name),
        "kind": kind,
        "abstract": false,
        "type": name,
        "baseDefinition": format!("http://hl7.org/fhir/StructureDefinition/{}", base),
        "derivation": "specialization",
        "snapshot": {"element": elements}
    })
}

fn primitive(name: &str) -> Value {
    definition(name, "primitive-type", "Element", vec![element(name, 0, "*", &[])])
}

fn write_json(path: &Path, value: &Value) {
    fs::write(path, serde_json::to_string_pretty(value).unwrap()).unwrap();
}

/// Writes a types Bundle plus a standalone resource definition.
fn write_definitions(dir: &Path) {
    let types = json!({
        "resourceType": "Bundle",
        "id": "types",
        "type": "collection",
        "entry": [
            {"resource": primitive("string")},
            {"resource": primitive("boolean")},
            {"resource": primitive("code")},
            {"resource": primitive("dateTime")},
            {"resource": definition("Element", "complex-type", "Base", vec![element("Element", 0, "*", &[])])},
            {"resource": definition("Period", "complex-type", "Element", vec![
                element("Period", 0, "*", &[]),
                element("Period.id", 0, "1", &["http://hl7.org/fhirpath/System.String"]),
                element("Period.start", 0, "1", &["dateTime"]),
                element("Period.end", 0, "1", &["dateTime"]),
            ])},
            {"resource": definition("Identifier", "complex-type", "Element", vec![
                element("Identifier", 0, "*", &[]),
                element("Identifier.value", 0, "1", &["string"]),
                element("Identifier.period", 0, "1", &["Period"]),
                element("Identifier.assigner", 0, "1", &["Reference"]),
            ])},
            {"resource": definition("Reference", "complex-type", "Element", vec![
                element("Reference", 0, "*", &[]),
                element("Reference.reference", 0, "1", &["string"]),
                element("Reference.identifier", 0, "1", &["Identifier"]),
            ])},
            {"resource": {"resourceType": "SearchParameter", "id": "ignored"}}
        ]
    });
    write_json(&dir.join("profiles-types.json"), &types);

    let mut section_ref = element("Composition.section.section", 0, "*", &[]);
    section_ref["contentReference"] = json!("#Composition.section");
    let composition = definition("Composition", "resource", "DomainResource", vec![
        element("Composition", 0, "*", &[]),
        element("Composition.id", 0, "1", &["http://hl7.org/fhirpath/System.String"]),
        element("Composition.contained", 0, "*", &["Resource"]),
        element("Composition.status", 1, "1", &["code"]),
        element("Composition.subject", 0, "1", &["Reference"]),
        element("Composition.occurrence[x]", 1, "1", &["dateTime", "Period", "Timing"]),
        element("Composition.section", 0, "*", &["BackboneElement"]),
        element("Composition.section.id", 0, "1", &["http://hl7.org/fhirpath/System.String"]),
        element("Composition.section.title", 0, "1", &["string"]),
        section_ref,
    ]);
    let resources_dir = dir.join("resources");
    fs::create_dir_all(&resources_dir).unwrap();
    write_json(&resources_dir.join("composition.json"), &composition);

    // Terminology files are never opened.
    fs::write(dir.join("valueset-status.json"), "not json").unwrap();
}

fn config(input: &Path, output: &Path, only: Option<&[&str]>) -> GeneratorConfig {
    GeneratorConfig {
        input_dir: input.to_path_buf(),
        output_dir: output.to_path_buf(),
        only: only.map(|names| names.iter().map(|n| n.to_string()).collect()),
        version: FhirVersion::R4,
    }
}

fn read(path: impl AsRef<Path>) -> String {
    fs::read_to_string(path.as_ref()).unwrap()
}

#[test]
fn generates_the_release_module() {
    let input = TempDir::new().unwrap();
    let output = TempDir::new().unwrap();
    write_definitions(input.path());

    let summary = run(&config(input.path(), output.path(), None)).unwrap();
    assert_eq!(summary.primitives, vec!["boolean", "code", "dateTime", "string"]);
    assert_eq!(summary.complex_types, vec!["Identifier", "Period", "Reference"]);
    assert_eq!(summary.resources, vec!["Composition"]);
    assert_eq!(summary.files_written, 8);

    let r4 = output.path().join("r4");
    let root = read(r4.join("mod.rs"));
    assert!(root.starts_with("//! FHIR R4 (4.0.1) data types and resources.\n"));
    assert!(root.contains("pub use resources::*;\n"));

    let primitives = read(r4.join("primitives.rs"));
    assert!(primitives.contains("pub type DateTime = Element<PrecisionDateTime, Extension>;\n"));
    assert!(primitives.contains("pub type Boolean = Element<bool, Extension>;\n"));
    assert!(primitives.contains("/// See: [code](http://hl7.org/fhir/StructureDefinition/code)\n"));
}

#[test]
fn complex_types_and_cycles() {
    let input = TempDir::new().unwrap();
    let output = TempDir::new().unwrap();
    write_definitions(input.path());
    run(&config(input.path(), output.path(), None)).unwrap();

    let complex = output.path().join("r4").join("complex_types");
    let period = read(complex.join("period.rs"));
    assert!(period.starts_with("use crate::r4::*;\nuse crate::FhirSerde;\n\n/// FHIR Period type\n///\n"));
    assert!(period.contains("#[derive(Debug, Clone, PartialEq, Default, FhirSerde)]\n#[fhir_type(name = \"Period\", kind = \"element\")]\npub struct Period {\n"));
    assert!(period.contains("    pub id: Option<std::string::String>,\n"));
    assert!(period.contains("    /// The start element\n    pub start: Option<DateTime>,\n"));

    // Only the first of the pair in name order is boxed.
    let identifier = read(complex.join("identifier.rs"));
    assert!(identifier.contains("    pub assigner: Option<Box<Reference>>,\n"));
    let reference = read(complex.join("reference.rs"));
    assert!(reference.contains("    pub identifier: Option<Identifier>,\n"));

    let index = read(complex.join("mod.rs"));
    assert!(index.starts_with("pub mod identifier;\npub use identifier::*;\n\npub mod period;\n"));
    assert!(index.contains("impl crate::FhirComplexTypeProvider for ComplexTypes {\n"));
    assert!(index.contains("            \"Reference\",\n"));
}

#[test]
fn resources_with_choices_and_backbone_elements() {
    let input = TempDir::new().unwrap();
    let output = TempDir::new().unwrap();
    write_definitions(input.path());
    run(&config(input.path(), output.path(), None)).unwrap();

    let resources = output.path().join("r4").join("resources");
    let composition = read(resources.join("composition.rs"));

    assert!(composition.contains("/// Choice of types for the occurrence\\[x\\] field in Composition\n"));
    assert!(composition.contains("#[fhir_choice_element(base_name = \"occurrence\")]\npub enum CompositionOccurrence {\n"));
    assert!(composition.contains("    #[fhir_serde(rename = \"occurrenceDateTime\")]\n    DateTime(DateTime),\n"));
    assert!(composition.contains("    Period(Period),\n"));
    assert!(!composition.contains("Timing"));

    // A required choice leaves the root without Default.
    assert!(composition.contains("#[derive(Debug, Clone, PartialEq, FhirSerde)]\n#[fhir_type(name = \"Composition\", kind = \"domain_resource\")]\n"));
    assert!(composition.contains("    pub id: Option<Id>,\n"));
    assert!(composition.contains("    pub contained: Option<Vec<Resource>>,\n"));
    assert!(composition.contains("    pub status: Code,\n"));
    assert!(composition.contains("    #[fhir_serde(flatten)]\n    pub occurrence: CompositionOccurrence,\n"));
    assert!(composition.contains("    pub subject: Option<Reference>,\n"));

    assert!(composition.contains("/// The section element\n#[derive(Debug, Clone, PartialEq, Default, FhirSerde)]\n#[fhir_type(name = \"CompositionSection\", kind = \"backbone_element\")]\n"));
    assert!(composition.contains("    pub id: Option<std::string::String>,\n"));
    assert_eq!(composition.matches("    pub section: Option<Vec<CompositionSection>>,\n").count(), 2);

    let index = read(resources.join("mod.rs"));
    assert_eq!(
        index,
        "pub mod composition;\npub use composition::*;\n\ncrate::registry::resource_registry! {\n    Composition,\n}\n"
    );
}

#[test]
fn allow_list_narrows_the_vocabulary() {
    let input = TempDir::new().unwrap();
    let output = TempDir::new().unwrap();
    write_definitions(input.path());

    let summary = run(&config(input.path(), output.path(), Some(&["Period"]))).unwrap();
    assert_eq!(summary.complex_types, vec!["Period"]);
    assert!(summary.resources.is_empty());
    assert_eq!(summary.primitives.len(), 4);
    assert_eq!(summary.files_written, 5);
    assert!(!output.path().join("r4/complex_types/identifier.rs").exists());
}

#[test]
fn references_outside_the_vocabulary_fail() {
    let input = TempDir::new().unwrap();
    let output = TempDir::new().unwrap();
    write_definitions(input.path());

    let result = run(&config(input.path(), output.path(), Some(&["Identifier"])));
    match result {
        Err(GeneratorError::MissingType { path, type_name }) => {
            assert_eq!(path, "Identifier.period");
            assert_eq!(type_name, "Period");
        }
        other => panic!("expected a missing type, got {:?}", other),
    }
}

#[test]
fn empty_input_has_no_definitions() {
    let input = TempDir::new().unwrap();
    let output = TempDir::new().unwrap();
    let result = run(&config(input.path(), output.path(), None));
    assert!(matches!(result, Err(GeneratorError::NoDefinitions(_))));
}

#[test]
fn malformed_json_names_the_file() {
    let input = TempDir::new().unwrap();
    let output = TempDir::new().unwrap();
    fs::write(input.path().join("profiles-types.json"), "{").unwrap();

    match run(&config(input.path(), output.path(), None)) {
        Err(GeneratorError::Json { path, .. }) => assert!(path.ends_with("profiles-types.json")),
        other => panic!("expected a JSON error, got {:?}", other),
    }
}

#[test]
fn checked_in_definitions_reproduce_the_model() {
    let input = Path::new(env!("CARGO_MANIFEST_DIR")).join("definitions/r4");
    let model = Path::new(env!("CARGO_MANIFEST_DIR")).join("../MeridianFhir/src/r4");
    let output = TempDir::new().unwrap();

    let summary = run(&config(&input, output.path(), None)).unwrap();
    assert_eq!(summary.primitives.len(), 20);
    assert_eq!(summary.complex_types.len(), 39);
    assert_eq!(summary.resources.len(), 146);
    assert_eq!(summary.files_written, 189);
    assert!(summary.resources.iter().any(|name| name == "Organization"));

    let r4 = output.path().join("r4");
    for file in [
        "primitives.rs",
        "complex_types/extension.rs",
        "complex_types/period.rs",
        "resources/mod.rs",
        "resources/organization.rs",
    ] {
        assert_eq!(read(r4.join(file)), read(model.join(file)), "{} is out of date", file);
    }
}
