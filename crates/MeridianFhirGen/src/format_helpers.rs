/// Converts a FHIR field name to a valid Rust identifier.
///
/// camelCase becomes snake_case and Rust keywords get the `r#` prefix.
///
/// # Examples
///
/// ```
/// # use meridian_fhir_gen::format_helpers::make_rust_safe;
/// assert_eq!(make_rust_safe("birthDate"), "birth_date");
/// assert_eq!(make_rust_safe("type"), "r#type");
/// assert_eq!(make_rust_safe("use"), "r#use");
/// ```
pub fn make_rust_safe(input: &str) -> String {
    let snake_case = input
        .chars()
        .enumerate()
        .fold(String::new(), |mut acc, (i, c)| {
            if i > 0 && c.is_uppercase() {
                acc.push('_');
            }
            acc.extend(c.to_lowercase());
            acc
        });

    match snake_case.as_str() {
        "type" | "use" | "abstract" | "for" | "ref" | "const" | "where" => {
            format!("r#{}", snake_case)
        }
        _ => snake_case,
    }
}

/// Capitalizes the first letter of a string.
///
/// ```
/// # use meridian_fhir_gen::format_helpers::capitalize_first_letter;
/// assert_eq!(capitalize_first_letter("dateTime"), "DateTime");
/// assert_eq!(capitalize_first_letter("HumanName"), "HumanName");
/// ```
pub fn capitalize_first_letter(s: &str) -> String {
    let mut chars = s.chars();
    match chars.next() {
        None => String::new(),
        Some(first) => first.to_uppercase().chain(chars).collect(),
    }
}

/// Makes FHIR definition prose safe to place in a `///` comment.
///
/// Line endings are normalized, comment delimiters are broken up and bare
/// comparison operators are escaped so rustdoc does not read them as
/// markup.
pub fn escape_doc_comment(text: &str) -> String {
    let normalized = text.replace("\r\n", "\n").replace('\r', "\n");

    let mut result = String::new();
    for line in normalized.lines() {
        let processed = line
            .replace("*/", "*\\/")
            .replace("/*", "/\\*")
            .replace('[', "\\[")
            .replace(']', "\\]")
            .replace(" <=", " \\<=")
            .replace(" >=", " \\>=");
        result.push_str(processed.trim_end());
        result.push('\n');
    }

    while result.contains("\n\n\n") {
        result = result.replace("\n\n\n", "\n\n");
    }
    result.trim_end().to_string()
}

/// Greedily wraps prose into lines of at most `width` characters.
pub fn wrap_words(text: &str, width: usize) -> Vec<String> {
    let mut lines = Vec::new();
    let mut current = String::new();
    for word in text.split_whitespace() {
        if current.is_empty() {
            current.push_str(word);
        } else if current.len() + 1 + word.len() <= width {
            current.push(' ');
            current.push_str(word);
        } else {
            lines.push(std::mem::take(&mut current));
            current.push_str(word);
        }
    }
    if !current.is_empty() {
        lines.push(current);
    }
    lines
}

/// Turns a dotted element path into a Rust type name.
///
/// ```
/// # use meridian_fhir_gen::format_helpers::generate_type_name;
/// assert_eq!(generate_type_name("Patient"), "Patient");
/// assert_eq!(generate_type_name("Bundle.entry.request"), "BundleEntryRequest");
/// ```
pub fn generate_type_name(path: &str) -> String {
    let mut parts = path.split('.');
    let mut result = parts.next().map(capitalize_first_letter).unwrap_or_default();
    for part in parts {
        result.push_str(&capitalize_first_letter(part));
    }
    result
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn escapes_doc_markup() {
        assert_eq!(
            escape_doc_comment("Value of [x] <= 3\r\nsee /* here */"),
            "Value of \\[x\\] \\<= 3\nsee /\\* here *\\/"
        );
    }

    #[test]
    fn wraps_on_word_boundaries() {
        let lines = wrap_words("a time period defined by a start and end", 16);
        assert_eq!(lines, vec!["a time period", "defined by a", "start and end"]);
        assert!(wrap_words("   ", 10).is_empty());
    }

    #[test]
    fn rust_safe_names() {
        assert_eq!(make_rust_safe("modifierExtension"), "modifier_extension");
        assert_eq!(make_rust_safe("value[x]"), "value[x]");
    }
}
