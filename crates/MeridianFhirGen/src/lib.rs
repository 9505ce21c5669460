//! # FHIR Code Generator
//!
//! Turns the StructureDefinitions published with a FHIR release into the
//! typed Rust model found under `meridian_fhir::<release>`.
//!
//! ## Pipeline
//!
//! 1. **Discovery**: every `.json` file under the input directory is read;
//!    Bundles of definitions and lone StructureDefinitions are both accepted
//! 2. **Selection**: concrete specializations of kind `primitive-type`,
//!    `complex-type` and `resource` are kept, optionally narrowed to an
//!    allow-list of names
//! 3. **Cycle detection**: types that embed each other through
//!    single-valued fields get one direction boxed
//! 4. **Emission**: primitives become `Element<V, Extension>` aliases,
//!    everything else becomes `FhirSerde` structs and choice enums, and the
//!    resource index invokes `resource_registry!`
//!
//! ## Output layout
//!
//! ```text
//! <output>/<release>/mod.rs
//! <output>/<release>/primitives.rs
//! <output>/<release>/complex_types/{mod.rs, <type>.rs...}
//! <output>/<release>/resources/{mod.rs, <resource>.rs...}
//! ```

pub mod bundle;
pub mod directory_output_helpers;
pub mod element_definition;
pub mod error;
pub mod format_helpers;
pub mod gen_element_definitions;
pub mod gen_helpers;
pub mod structure_definition;

use std::collections::HashSet;
use std::path::PathBuf;
use meridian_fhir::FhirVersion;
use crate::directory_output_helpers::{module_file_stem, render_mod_index, write_file};
pub use crate::error::GeneratorError;
use crate::gen_helpers::{
    detect_struct_cycles, generate_complex_types_module, generate_primitives_module,
    generate_resources_module, generate_version_module, is_primitive_type, is_supported_primitive,
    is_valid_structure_definition, parse_structure_definitions, structure_definition_to_rust,
    visit_dirs,
};
use crate::structure_definition::StructureDefinition;

/// Settings for one generator run.
#[derive(Debug, Clone)]
pub struct GeneratorConfig {
    /// Directory searched recursively for definition files.
    pub input_dir: PathBuf,
    /// Crate source directory; the release module is written beneath it.
    pub output_dir: PathBuf,
    /// Complex types and resources to generate. `None` generates all of them.
    /// Primitives are always generated.
    pub only: Option<Vec<String>>,
    pub version: FhirVersion,
}

/// What a run produced.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct GenerationSummary {
    pub primitives: Vec<String>,
    pub complex_types: Vec<String>,
    pub resources: Vec<String>,
    pub files_written: usize,
}

/// Generates the release module described by `config`.
pub fn run(config: &GeneratorConfig) -> Result<GenerationSummary, GeneratorError> {
    let mut definitions = Vec::new();
    for path in visit_dirs(&config.input_dir)? {
        let parsed = parse_structure_definitions(&path)?;
        tracing::debug!(path = %path.display(), definitions = parsed.len(), "parsed definition file");
        definitions.extend(parsed);
    }
    if definitions.is_empty() {
        return Err(GeneratorError::NoDefinitions(config.input_dir.clone()));
    }

    let all_elements: Vec<_> = definitions
        .iter()
        .flat_map(|sd| sd.snapshot_elements())
        .collect();
    let cycles = detect_struct_cycles(&all_elements);

    let selected: Vec<&StructureDefinition> = definitions
        .iter()
        .filter(|sd| is_valid_structure_definition(sd))
        .filter(|sd| {
            if is_primitive_type(sd) {
                return is_supported_primitive(&sd.name);
            }
            config
                .only
                .as_ref()
                .is_none_or(|only| only.iter().any(|name| name == &sd.name))
        })
        .collect();

    let mut summary = GenerationSummary::default();
    let mut known_types: HashSet<String> = HashSet::from(["Resource".to_string()]);
    for sd in &selected {
        known_types.insert(sd.name.clone());
        match sd.kind.as_str() {
            "primitive-type" => summary.primitives.push(sd.name.clone()),
            "complex-type" => summary.complex_types.push(sd.name.clone()),
            _ => summary.resources.push(sd.name.clone()),
        }
    }
    summary.primitives.sort();
    summary.complex_types.sort();
    summary.complex_types.dedup();
    summary.resources.sort();
    summary.resources.dedup();

    let module_dir = config.output_dir.join(config.version.as_str().to_lowercase());
    tracing::info!(
        version = %config.version,
        primitives = summary.primitives.len(),
        complex_types = summary.complex_types.len(),
        resources = summary.resources.len(),
        output = %module_dir.display(),
        "generating release module"
    );

    let primitives: Vec<&StructureDefinition> = selected
        .iter()
        .copied()
        .filter(|sd| is_primitive_type(sd))
        .collect();
    write_file(&module_dir.join("primitives.rs"), &generate_primitives_module(&primitives)?)?;
    summary.files_written += 1;

    let mut complex_stems = Vec::new();
    let mut resource_stems = Vec::new();
    for sd in selected.iter().filter(|sd| !is_primitive_type(sd)) {
        let code = structure_definition_to_rust(sd, &known_types, &cycles)?;
        let stem = module_file_stem(&sd.name);
        let subdir = if sd.kind == "resource" {
            resource_stems.push(stem.clone());
            "resources"
        } else {
            complex_stems.push(stem.clone());
            "complex_types"
        };
        write_file(&module_dir.join(subdir).join(format!("{}.rs", stem)), &code)?;
        summary.files_written += 1;
    }

    write_file(
        &module_dir.join("complex_types").join("mod.rs"),
        &generate_complex_types_module(&render_mod_index(&complex_stems), &summary.complex_types),
    )?;
    write_file(
        &module_dir.join("resources").join("mod.rs"),
        &generate_resources_module(&render_mod_index(&resource_stems), &summary.resources),
    )?;
    write_file(
        &module_dir.join("mod.rs"),
        &generate_version_module(config.version.as_str(), config.version.fhir_release()),
    )?;
    summary.files_written += 3;

    tracing::info!(files = summary.files_written, "generation complete");
    Ok(summary)
}
