use std::fs;
use std::path::Path;
use crate::error::GeneratorError;

/// Converts a FHIR type name like `MedicationStatement` or `unsignedInt` into
/// a snake_case module file stem.
pub fn module_file_stem(name: &str) -> String {
    let mut out = String::new();
    let mut prev_is_lower_or_digit = false;

    for ch in name.chars() {
        if ch.is_ascii_uppercase() {
            if prev_is_lower_or_digit && !out.ends_with('_') {
                out.push('_');
            }
            out.push(ch.to_ascii_lowercase());
            prev_is_lower_or_digit = true;
        } else if ch.is_ascii_lowercase() || ch.is_ascii_digit() {
            out.push(ch);
            prev_is_lower_or_digit = true;
        } else {
            if !out.ends_with('_') {
                out.push('_');
            }
            prev_is_lower_or_digit = false;
        }
    }

    let trimmed = out.trim_matches('_');
    if trimmed.is_empty() {
        "type_".to_string()
    } else {
        trimmed.to_string()
    }
}

/// Renders `pub mod x; pub use x::*;` pairs in sorted order.
pub fn render_mod_index(modules: &[String]) -> String {
    let mut modules = modules.to_vec();
    modules.sort();
    modules.dedup();

    modules
        .iter()
        .map(|m| format!("pub mod {m};\npub use {m}::*;\n"))
        .collect::<Vec<_>>()
        .join("\n")
}

/// Writes a generated file, creating its directory first.
pub fn write_file(path: &Path, contents: &str) -> Result<(), GeneratorError> {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent).map_err(|e| GeneratorError::io(parent, e))?;
    }
    fs::write(path, contents).map_err(|e| GeneratorError::io(path, e))?;
    tracing::debug!(path = %path.display(), bytes = contents.len(), "wrote generated file");
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn file_stems() {
        assert_eq!(module_file_stem("MedicationStatement"), "medication_statement");
        assert_eq!(module_file_stem("unsignedInt"), "unsigned_int");
        assert_eq!(module_file_stem("CodeableConcept"), "codeable_concept");
        assert_eq!(module_file_stem("---"), "type_");
    }

    #[test]
    fn mod_index_is_sorted_and_deduplicated() {
        let index = render_mod_index(&["period".to_string(), "coding".to_string(), "period".to_string()]);
        assert_eq!(index, "pub mod coding;\npub use coding::*;\n\npub mod period;\npub use period::*;\n");
    }
}
