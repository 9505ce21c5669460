use std::collections::{BTreeMap, HashSet};
use crate::element_definition::ElementDefinition;
use crate::error::GeneratorError;
use crate::format_helpers::{capitalize_first_letter, escape_doc_comment, generate_type_name, make_rust_safe};

/// What the element emitter needs to know about the rest of the vocabulary.
pub struct TypeContext<'a> {
    /// FHIR type codes that will exist in the generated module: primitives,
    /// complex types and `Resource`.
    pub known_types: &'a HashSet<String>,
    /// `(from, to)` pairs where a field of `from` must box its `to` value.
    pub cycles: &'a HashSet<(String, String)>,
    /// Whether the root type is a resource, whose own `id` is an `Id`.
    pub root_is_resource: bool,
}

/// Processes a snapshot's ElementDefinitions into Rust struct and enum
/// definitions.
///
/// Elements are grouped by their parent path. Each group becomes one struct
/// (the root type or a backbone element), preceded by an enum for every
/// choice group it owns. Groups are emitted in path order so output is
/// deterministic.
pub fn process_elements(
    elements: &[ElementDefinition],
    root_type_name: &str,
    root_kind: &str,
    root_doc: &str,
    ctx: &TypeContext<'_>,
) -> Result<String, GeneratorError> {
    let mut element_groups: BTreeMap<&str, Vec<&ElementDefinition>> = BTreeMap::new();
    for element in elements {
        if let Some(parent) = element.parent_path() {
            element_groups.entry(parent).or_default().push(element);
        }
    }

    let mut output = String::new();
    for (path, group) in element_groups {
        let type_name = generate_type_name(path);

        let mut has_required_choice = false;
        for choice in group.iter().filter(|e| e.is_choice()) {
            has_required_choice |= choice.is_required();
            output.push_str(&generate_choice_enum(choice, &type_name, ctx)?);
        }

        let kind = if path == root_type_name {
            output.push_str(root_doc);
            root_kind
        } else {
            let owner = elements.iter().find(|e| e.path == path);
            let short = owner.and_then(|e| e.short.as_deref()).unwrap_or("Backbone element");
            output.push_str(&format!("/// {}\n", escape_doc_comment(short)));
            match owner.and_then(|e| e.type_codes().next()) {
                Some("BackboneElement") => "backbone_element",
                _ => "element",
            }
        };

        // A required choice has no sensible empty value.
        let mut derives = vec!["Debug", "Clone", "PartialEq"];
        if !has_required_choice {
            derives.push("Default");
        }
        derives.push("FhirSerde");
        output.push_str(&format!("#[derive({})]\n", derives.join(", ")));
        output.push_str(&format!(
            "#[fhir_type(name = \"{}\", kind = \"{}\")]\n",
            type_name, kind
        ));
        output.push_str(&format!("pub struct {} {{\n", type_name));
        for element in &group {
            output.push_str(&generate_element_definition(
                element,
                &type_name,
                root_type_name,
                elements,
                ctx,
            )?);
        }
        output.push_str("}\n\n");
    }
    Ok(output)
}

/// Emits the enum for one `[x]` element.
///
/// Variants whose type is not part of the generated vocabulary are dropped,
/// so a reduced vocabulary still compiles; a choice left with no variants is
/// an error.
fn generate_choice_enum(
    choice: &ElementDefinition,
    type_name: &str,
    ctx: &TypeContext<'_>,
) -> Result<String, GeneratorError> {
    let base_name = choice.field_name().trim_end_matches("[x]");
    let enum_name = format!("{}{}", type_name, capitalize_first_letter(base_name));

    let mut variants = String::new();
    for code in choice.type_codes() {
        if !ctx.known_types.contains(code) {
            tracing::debug!(choice = %choice.path, type_code = code, "dropping choice variant outside the vocabulary");
            continue;
        }
        let type_code = capitalize_first_letter(code);
        variants.push_str(&format!("    /// Variant accepting the {} type.\n", type_code));
        variants.push_str(&format!(
            "    #[fhir_serde(rename = \"{}{}\")]\n",
            base_name, type_code
        ));
        variants.push_str(&format!("    {}({}),\n", type_code, type_code));
    }
    if variants.is_empty() {
        return Err(GeneratorError::MissingType {
            path: choice.path.clone(),
            type_name: choice.type_codes().collect::<Vec<_>>().join("|"),
        });
    }

    Ok(format!(
        "/// Choice of types for the {}\\[x\\] field in {}\n\
         #[derive(Debug, Clone, PartialEq, FhirSerde)]\n\
         #[fhir_choice_element(base_name = \"{}\")]\n\
         pub enum {} {{\n{}}}\n\n",
        base_name, type_name, base_name, enum_name, variants
    ))
}

/// Extracts the element id from a `contentReference` such as `#Bundle.link`.
pub fn extract_content_reference_id(content_ref: &str) -> &str {
    content_ref
        .find('#')
        .map(|i| &content_ref[i + 1..])
        .unwrap_or("")
}

/// Resolves the Rust type of a non-choice element, before cardinality.
fn base_rust_type(
    element: &ElementDefinition,
    root_type_name: &str,
    elements: &[ElementDefinition],
    ctx: &TypeContext<'_>,
) -> Result<String, GeneratorError> {
    if let Some(content_ref) = &element.content_reference {
        let ref_id = extract_content_reference_id(content_ref);
        if !elements.iter().any(|e| e.id.as_deref() == Some(ref_id) || e.path == ref_id) {
            return Err(GeneratorError::MissingType {
                path: element.path.clone(),
                type_name: content_ref.clone(),
            });
        }
        return Ok(generate_type_name(ref_id));
    }

    let code = element
        .type_codes()
        .next()
        .ok_or_else(|| GeneratorError::malformed(root_type_name, format!("element '{}' has no type", element.path)))?;

    let rust_type = match code {
        "http://hl7.org/fhirpath/System.String" => {
            let is_root_id = element.path == format!("{}.id", root_type_name);
            if is_root_id && ctx.root_is_resource {
                "Id".to_string()
            } else {
                "std::string::String".to_string()
            }
        }
        "http://hl7.org/fhirpath/System.Boolean" => "bool".to_string(),
        "http://hl7.org/fhirpath/System.Integer" => "i32".to_string(),
        "Element" | "BackboneElement" => generate_type_name(&element.path),
        other if ctx.known_types.contains(other) => capitalize_first_letter(other),
        other => {
            return Err(GeneratorError::MissingType {
                path: element.path.clone(),
                type_name: other.to_string(),
            })
        }
    };
    Ok(rust_type)
}

/// Generates one struct field from an ElementDefinition.
///
/// - `min = 0` wraps the type in `Option`, `max = "*"` in `Vec`
/// - choice elements use the group's enum and `#[fhir_serde(flatten)]`
/// - fields closing a detected cycle are boxed
/// - camelCase names get a `rename` back to the FHIR name
pub fn generate_element_definition(
    element: &ElementDefinition,
    type_name: &str,
    root_type_name: &str,
    elements: &[ElementDefinition],
    ctx: &TypeContext<'_>,
) -> Result<String, GeneratorError> {
    let field_name = element.field_name();
    let mut output = String::new();
    if let Some(short) = element.short.as_deref().filter(|s| !s.trim().is_empty()) {
        for line in escape_doc_comment(short).lines() {
            if line.is_empty() {
                output.push_str("    ///\n");
            } else {
                output.push_str(&format!("    /// {}\n", line));
            }
        }
    }

    let (rust_field_name, type_str) = if element.is_choice() {
        let base_name = field_name.trim_end_matches("[x]");
        let enum_name = format!("{}{}", type_name, capitalize_first_letter(base_name));
        output.push_str("    #[fhir_serde(flatten)]\n");
        let type_str = if element.is_required() {
            enum_name
        } else {
            format!("Option<{}>", enum_name)
        };
        (make_rust_safe(base_name), type_str)
    } else {
        let rust_field_name = make_rust_safe(field_name);
        if rust_field_name != field_name {
            output.push_str(&format!("    #[fhir_serde(rename = \"{}\")]\n", field_name));
        }

        let mut base_type = base_rust_type(element, root_type_name, elements, ctx)?;
        let boxed = element
            .type_codes()
            .next()
            .is_some_and(|code| ctx.cycles.contains(&(root_type_name.to_string(), code.to_string())));
        if boxed {
            base_type = format!("Box<{}>", base_type);
        }

        let type_str = match (element.is_array(), element.is_required()) {
            (true, true) => format!("Vec<{}>", base_type),
            (true, false) => format!("Option<Vec<{}>>", base_type),
            (false, true) => base_type,
            (false, false) => format!("Option<{}>", base_type),
        };
        (rust_field_name, type_str)
    };

    // rustfmt's default max width is 100: "    pub " + name + ": " + type + ","
    let line_length = 8 + rust_field_name.len() + 2 + type_str.len() + 1;
    if line_length > 100 && type_str.starts_with("Option<Vec<") {
        let inner = &type_str[7..type_str.len() - 1];
        output.push_str(&format!(
            "    pub {}: Option<\n        {},\n    >,\n",
            rust_field_name, inner
        ));
    } else if line_length > 100 {
        output.push_str(&format!("    pub {}:\n        {},\n", rust_field_name, type_str));
    } else {
        output.push_str(&format!("    pub {}: {},\n", rust_field_name, type_str));
    }
    Ok(output)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::element_definition::ElementDefinitionType;

    fn element(path: &str, min: u32, max: &str, codes: &[&str]) -> ElementDefinition {
        ElementDefinition {
            id: Some(path.to_string()),
            path: path.to_string(),
            short: Some(format!("short for {}", path)),
            min: Some(min),
            max: Some(max.to_string()),
            r#type: Some(
                codes
                    .iter()
                    .map(|c| ElementDefinitionType {
                        code: c.to_string(),
                        ..Default::default()
                    })
                    .collect(),
            ),
            ..Default::default()
        }
    }

    fn known(names: &[&str]) -> HashSet<String> {
        names.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn cardinality_drives_wrappers() {
        let known = known(&["Reference", "instant", "uri"]);
        let cycles = HashSet::new();
        let ctx = TypeContext {
            known_types: &known,
            cycles: &cycles,
            root_is_resource: true,
        };
        let elements = vec![
            element("Provenance", 0, "*", &[]),
            element("Provenance.target", 1, "*", &["Reference"]),
            element("Provenance.recorded", 1, "1", &["instant"]),
            element("Provenance.policy", 0, "*", &["uri"]),
        ];

        let field = |i: usize| {
            generate_element_definition(&elements[i], "Provenance", "Provenance", &elements, &ctx).unwrap()
        };
        assert!(field(1).ends_with("    pub target: Vec<Reference>,\n"));
        assert!(field(2).ends_with("    pub recorded: Instant,\n"));
        assert!(field(3).ends_with("    pub policy: Option<Vec<Uri>>,\n"));
    }

    #[test]
    fn choice_enum_keeps_known_variants_only() {
        let known = known(&["string", "Reference"]);
        let cycles = HashSet::new();
        let ctx = TypeContext {
            known_types: &known,
            cycles: &cycles,
            root_is_resource: false,
        };
        let choice = element("Annotation.author[x]", 0, "1", &["Reference", "string", "Contributor"]);

        let enum_code = generate_choice_enum(&choice, "Annotation", &ctx).unwrap();
        assert!(enum_code.contains("pub enum AnnotationAuthor {"));
        assert!(enum_code.contains("    #[fhir_serde(rename = \"authorReference\")]\n    Reference(Reference),\n"));
        assert!(enum_code.contains("    String(String),\n"));
        assert!(!enum_code.contains("Contributor"));

        let field = generate_element_definition(&choice, "Annotation", "Annotation", &[], &ctx).unwrap();
        assert!(field.contains("    #[fhir_serde(flatten)]\n    pub author: Option<AnnotationAuthor>,\n"));
    }

    #[test]
    fn unknown_field_type_is_an_error() {
        let known = known(&[]);
        let cycles = HashSet::new();
        let ctx = TypeContext {
            known_types: &known,
            cycles: &cycles,
            root_is_resource: false,
        };
        let elements = vec![element("Money.value", 0, "1", &["decimal"])];
        let result = generate_element_definition(&elements[0], "Money", "Money", &elements, &ctx);
        assert!(matches!(result, Err(GeneratorError::MissingType { type_name, .. }) if type_name == "decimal"));
    }

    #[test]
    fn content_references() {
        assert_eq!(extract_content_reference_id("#Bundle.link"), "Bundle.link");
        assert_eq!(extract_content_reference_id("no-fragment"), "");
    }
}
