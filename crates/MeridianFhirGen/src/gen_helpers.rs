use std::collections::{HashMap, HashSet};
use std::fs;
use std::path::{Path, PathBuf};
use serde::Deserialize;
use serde_json::Value;
use crate::bundle::Bundle;
use crate::element_definition::ElementDefinition;
use crate::error::GeneratorError;
use crate::format_helpers::{capitalize_first_letter, escape_doc_comment, wrap_words};
use crate::gen_element_definitions::{TypeContext, process_elements};
use crate::structure_definition::StructureDefinition;

/// Abstract layers that every generated type already carries through its
/// snapshot, so they are never emitted on their own.
const BASE_LAYERS: &[&str] = &["Element", "BackboneElement", "Resource", "DomainResource"];

/// Header shared by every generated complex type and resource file.
const TYPE_FILE_HEADER: &str = "use crate::r4::*;\nuse crate::FhirSerde;\n\n";

/// `(name, value type, headline)` for each primitive the model supports.
const PRIMITIVE_TYPES: &[(&str, &str, &str)] = &[
    ("base64Binary", "std::string::String", "FHIR primitive type for base64-encoded binary data"),
    ("boolean", "bool", "FHIR primitive type for boolean values"),
    ("canonical", "std::string::String", "FHIR primitive type for canonical URLs that reference FHIR resources"),
    ("code", "std::string::String", "FHIR primitive type for coded values"),
    ("date", "PrecisionDate", "FHIR primitive type for date values (year, month, day)"),
    ("dateTime", "PrecisionDateTime", "FHIR primitive type for date and time values"),
    ("decimal", "PreciseDecimal", "FHIR primitive type for decimal numbers"),
    ("id", "std::string::String", "FHIR primitive type for logical IDs within FHIR resources"),
    ("instant", "PrecisionInstant", "FHIR primitive type for instant in time values (to millisecond precision)"),
    ("integer", "i32", "FHIR primitive type for integer values"),
    ("markdown", "std::string::String", "FHIR primitive type for markdown-formatted text"),
    ("oid", "std::string::String", "FHIR primitive type for Object Identifiers (OIDs)"),
    ("positiveInt", "PositiveInteger", "FHIR primitive type for positive integer values"),
    ("string", "std::string::String", "FHIR primitive type for string values"),
    ("time", "PrecisionTime", "FHIR primitive type for time of day values"),
    ("unsignedInt", "UnsignedInteger", "FHIR primitive type for unsigned integer values"),
    ("uri", "std::string::String", "FHIR primitive type for Uniform Resource Identifiers"),
    ("url", "std::string::String", "FHIR primitive type for Uniform Resource Locators"),
    ("uuid", "std::string::String", "FHIR primitive type for Universally Unique Identifiers (UUIDs)"),
    ("xhtml", "std::string::String", "FHIR primitive type for XHTML-formatted text with limited subset"),
];

/// Recursively collects the `.json` files under a directory.
///
/// Terminology files (concept maps and value sets) are skipped. The result
/// is sorted so runs are reproducible.
pub fn visit_dirs(dir: &Path) -> Result<Vec<PathBuf>, GeneratorError> {
    let mut json_files = Vec::new();
    if dir.is_dir() {
        for entry in fs::read_dir(dir).map_err(|e| GeneratorError::io(dir, e))? {
            let path = entry.map_err(|e| GeneratorError::io(dir, e))?.path();
            if path.is_dir() {
                json_files.extend(visit_dirs(&path)?);
            } else if path.extension().is_some_and(|ext| ext == "json") {
                let filename = path
                    .file_name()
                    .map(|f| f.to_string_lossy().to_lowercase())
                    .unwrap_or_default();
                if !filename.contains("conceptmap") && !filename.contains("valueset") {
                    json_files.push(path);
                }
            }
        }
    }
    json_files.sort();
    Ok(json_files)
}

/// Reads the StructureDefinitions held by one JSON file.
///
/// The file may be a Bundle of definitions or a single StructureDefinition;
/// any other resource yields nothing.
pub fn parse_structure_definitions(path: &Path) -> Result<Vec<StructureDefinition>, GeneratorError> {
    let text = fs::read_to_string(path).map_err(|e| GeneratorError::io(path, e))?;
    let json_err = |source| GeneratorError::Json {
        path: path.to_path_buf(),
        source,
    };
    let value: Value = serde_json::from_str(&text).map_err(json_err)?;

    match value.get("resourceType").and_then(Value::as_str) {
        Some("Bundle") => {
            let bundle = Bundle::deserialize(&value).map_err(json_err)?;
            bundle.structure_definitions().map_err(json_err)
        }
        Some("StructureDefinition") => {
            let definition = StructureDefinition::deserialize(&value).map_err(json_err)?;
            Ok(vec![definition])
        }
        other => {
            tracing::debug!(path = %path.display(), resource_type = ?other, "skipping file without definitions");
            Ok(Vec::new())
        }
    }
}

/// Whether a StructureDefinition describes a concrete type to generate.
///
/// Only non-abstract specializations of kind `complex-type`,
/// `primitive-type` or `resource` qualify, and the shared base layers are
/// left out.
pub fn is_valid_structure_definition(def: &StructureDefinition) -> bool {
    (def.kind == "complex-type" || def.kind == "primitive-type" || def.kind == "resource")
        && def.derivation.as_deref() == Some("specialization")
        && !def.r#abstract
        && !BASE_LAYERS.contains(&def.name.as_str())
}

pub fn is_primitive_type(def: &StructureDefinition) -> bool {
    def.kind == "primitive-type"
}

/// Whether the model has a value representation for a primitive.
pub fn is_supported_primitive(name: &str) -> bool {
    PRIMITIVE_TYPES.iter().any(|(n, _, _)| *n == name)
}

/// The `kind` attribute value for a generated root type.
pub fn root_kind(sd: &StructureDefinition) -> &'static str {
    match (sd.kind.as_str(), sd.base_type()) {
        ("resource", Some("DomainResource")) => "domain_resource",
        ("resource", _) => "resource",
        (_, Some("BackboneElement")) => "backbone_element",
        _ => "element",
    }
}

/// Generates the type alias for one primitive.
///
/// Every primitive is `Element<V, Extension>`; only the value type differs.
pub fn generate_primitive_type(sd: &StructureDefinition) -> Result<String, GeneratorError> {
    let (_, value_type, headline) = PRIMITIVE_TYPES
        .iter()
        .find(|(name, _, _)| *name == sd.name)
        .ok_or_else(|| GeneratorError::malformed(&sd.name, "primitive type has no value representation"))?;

    let mut output = format!("/// {}\n///\n", headline);
    if let Some(description) = sd.description.as_deref() {
        for line in escape_doc_comment(description).lines() {
            output.push_str(&format!("/// {}\n", line));
        }
        output.push_str("///\n");
    }
    output.push_str(&format!("/// See: [{}]({})\n", sd.name, sd.url));
    output.push_str(&format!(
        "pub type {} = Element<{}, Extension>;\n",
        capitalize_first_letter(&sd.name),
        value_type
    ));
    Ok(output)
}

/// Renders `primitives.rs` from the selected primitive definitions.
pub fn generate_primitives_module(primitives: &[&StructureDefinition]) -> Result<String, GeneratorError> {
    let mut sorted = primitives.to_vec();
    sorted.sort_by(|a, b| a.name.cmp(&b.name));

    let mut output = String::from(
        "use crate::r4::Extension;\n\
         use crate::{Element, PositiveInteger, PreciseDecimal, UnsignedInteger};\n\
         use crate::{PrecisionDate, PrecisionDateTime, PrecisionInstant, PrecisionTime};\n",
    );
    for sd in sorted {
        output.push('\n');
        output.push_str(&generate_primitive_type(sd)?);
    }
    Ok(output)
}

/// Renders the doc block placed above a root struct.
pub fn generate_struct_documentation(sd: &StructureDefinition) -> String {
    let mut doc = format!("/// FHIR {} type\n///\n", sd.name);
    if let Some(description) = sd.description.as_deref() {
        let lines = wrap_words(&escape_doc_comment(description), 77);
        if !lines.is_empty() {
            for line in lines {
                doc.push_str(&format!("/// {}\n", line));
            }
            doc.push_str("///\n");
        }
    }
    doc.push_str(&format!("/// See: [{}]({})\n", sd.name, sd.url));
    doc
}

/// Finds pairs of types that hold each other through single-valued fields.
///
/// Two structs embedding each other by value would have infinite size, so
/// one direction must be boxed. Each cycle is reported once, as the pair
/// ordered by name, and the first type of the pair boxes its field.
pub fn detect_struct_cycles(elements: &[&ElementDefinition]) -> HashSet<(String, String)> {
    let mut graph: HashMap<&str, HashSet<&str>> = HashMap::new();

    for element in elements {
        if element.max.as_deref() != Some("1") {
            continue;
        }
        let Some((from_type, _)) = element.path.split_once('.') else {
            continue;
        };
        for code in element.type_codes() {
            if !code.contains('.') && code != from_type {
                graph.entry(from_type).or_default().insert(code);
            }
        }
    }

    let mut cycles = HashSet::new();
    for (from_type, deps) in &graph {
        for to_type in deps {
            let closes = graph.get(to_type).is_some_and(|back| back.contains(from_type));
            if closes && from_type < to_type {
                cycles.insert((from_type.to_string(), to_type.to_string()));
            }
        }
    }
    cycles
}

/// Converts a complex type or resource definition to Rust source.
pub fn structure_definition_to_rust(
    sd: &StructureDefinition,
    known_types: &HashSet<String>,
    cycles: &HashSet<(String, String)>,
) -> Result<String, GeneratorError> {
    let elements = sd.snapshot_elements();
    if elements.is_empty() {
        return Err(GeneratorError::malformed(&sd.name, "no snapshot elements"));
    }

    let ctx = TypeContext {
        known_types,
        cycles,
        root_is_resource: sd.kind == "resource",
    };
    let body = process_elements(
        elements,
        &sd.name,
        root_kind(sd),
        &generate_struct_documentation(sd),
        &ctx,
    )?;

    let mut output = String::from(TYPE_FILE_HEADER);
    output.push_str(body.trim_end());
    output.push('\n');
    Ok(output)
}

/// Appends the `ComplexTypes` provider to the complex type module index.
pub fn generate_complex_types_module(index: &str, names: &[String]) -> String {
    let mut output = String::from(index);
    output.push_str("\n/// The complex data types compiled into this release.\n");
    output.push_str("pub struct ComplexTypes;\n\n");
    output.push_str("impl crate::FhirComplexTypeProvider for ComplexTypes {\n");
    output.push_str("    fn get_complex_type_names() -> Vec<&'static str> {\n");
    output.push_str("        vec![\n");
    for name in names {
        output.push_str(&format!("            \"{}\",\n", name));
    }
    output.push_str("        ]\n    }\n}\n");
    output
}

/// Appends the registry invocation to the resource module index.
///
/// The macro expands to the `ResourceType` catalog, the `Resource` enum and
/// the `resourceType` dispatch.
pub fn generate_resources_module(index: &str, names: &[String]) -> String {
    let mut output = String::from(index);
    output.push_str("\ncrate::registry::resource_registry! {\n");
    for name in names {
        output.push_str(&format!("    {},\n", name));
    }
    output.push_str("}\n");
    output
}

/// Renders the release's top-level `mod.rs`.
pub fn generate_version_module(version: &str, release: &str) -> String {
    format!(
        "//! FHIR {version} ({release}) data types and resources.\n\
         //!\n\
         //! Generated by `meridian-fhir-gen` from the {version} StructureDefinitions. Do not edit by hand.\n\
         \n\
         pub mod complex_types;\n\
         pub mod primitives;\n\
         pub mod resources;\n\
         \n\
         pub use complex_types::*;\n\
         pub use primitives::*;\n\
         pub use resources::*;\n"
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::element_definition::ElementDefinitionType;

    fn single(path: &str, code: &str) -> ElementDefinition {
        ElementDefinition {
            path: path.to_string(),
            max: Some("1".to_string()),
            r#type: Some(vec![ElementDefinitionType {
                code: code.to_string(),
                ..Default::default()
            }]),
            ..Default::default()
        }
    }

    #[test]
    fn cycles_are_reported_once_in_name_order() {
        let assigner = single("Identifier.assigner", "Reference");
        let identifier = single("Reference.identifier", "Identifier");
        let start = single("Period.start", "dateTime");
        let cycles = detect_struct_cycles(&[&assigner, &identifier, &start]);

        assert_eq!(cycles.len(), 1);
        assert!(cycles.contains(&("Identifier".to_string(), "Reference".to_string())));
    }

    #[test]
    fn multi_valued_fields_do_not_form_cycles() {
        let mut extension = single("Extension.extension", "Extension");
        extension.max = Some("*".to_string());
        let value = single("Extension.value[x]", "Reference");
        let back = single("Reference.extension", "Extension");
        assert!(detect_struct_cycles(&[&extension, &value]).is_empty());
        // Reference.extension is single-valued here only to close the loop.
        assert_eq!(detect_struct_cycles(&[&value, &back]).len(), 1);
    }

    #[test]
    fn selection_rules() {
        let mut def = StructureDefinition {
            name: "Period".to_string(),
            kind: "complex-type".to_string(),
            derivation: Some("specialization".to_string()),
            ..Default::default()
        };
        assert!(is_valid_structure_definition(&def));

        def.derivation = Some("constraint".to_string());
        assert!(!is_valid_structure_definition(&def));

        def.derivation = Some("specialization".to_string());
        def.name = "BackboneElement".to_string();
        assert!(!is_valid_structure_definition(&def));

        def.name = "Period".to_string();
        def.kind = "logical".to_string();
        assert!(!is_valid_structure_definition(&def));
    }

    #[test]
    fn kinds_follow_the_base_definition() {
        let mut def = StructureDefinition {
            kind: "resource".to_string(),
            base_definition: Some("http://hl7.org/fhir/StructureDefinition/DomainResource".to_string()),
            ..Default::default()
        };
        assert_eq!(root_kind(&def), "domain_resource");

        def.base_definition = Some("http://hl7.org/fhir/StructureDefinition/Resource".to_string());
        assert_eq!(root_kind(&def), "resource");

        def.kind = "complex-type".to_string();
        def.base_definition = Some("http://hl7.org/fhir/StructureDefinition/BackboneElement".to_string());
        assert_eq!(root_kind(&def), "backbone_element");

        def.base_definition = Some("http://hl7.org/fhir/StructureDefinition/Element".to_string());
        assert_eq!(root_kind(&def), "element");
    }

    #[test]
    fn primitive_alias() {
        let def = StructureDefinition {
            name: "positiveInt".to_string(),
            url: "http://hl7.org/fhir/StructureDefinition/positiveInt".to_string(),
            description: Some("An integer with a value that is positive (e.g. >0)".to_string()),
            kind: "primitive-type".to_string(),
            ..Default::default()
        };
        let alias = generate_primitive_type(&def).unwrap();
        assert!(alias.starts_with("/// FHIR primitive type for positive integer values\n///\n"));
        assert!(alias.ends_with("pub type PositiveInt = Element<PositiveInteger, Extension>;\n"));

        let unknown = StructureDefinition {
            name: "integer64".to_string(),
            ..def
        };
        assert!(generate_primitive_type(&unknown).is_err());
    }
}
