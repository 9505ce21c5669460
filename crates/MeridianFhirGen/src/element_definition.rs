use serde::Deserialize;

/// Bootstrap representation of a FHIR ElementDefinition.
///
/// One element (field) of a type, found in a StructureDefinition snapshot.
///
/// ## Key Fields
///
/// - `path`: the full path to this element (e.g. "Patient.contact.name")
/// - `type`: the data type(s) the element can hold; more than one means a
///   choice group whose path ends in `[x]`
/// - `min`/`max`: cardinality (0..1, 1..1, 0..*, 1..*)
/// - `contentReference`: reuse of another element's structure, e.g.
///   `#Bundle.link` for `Bundle.entry.link`
#[derive(Debug, Deserialize, Default)]
pub struct ElementDefinition {
    pub id: Option<String>,
    pub path: String,
    pub short: Option<String>,
    pub definition: Option<String>,
    pub min: Option<u32>,
    pub max: Option<String>,
    #[serde(rename = "contentReference")]
    pub content_reference: Option<String>,
    #[serde(rename = "type")]
    pub r#type: Option<Vec<ElementDefinitionType>>,
}

#[derive(Debug, Deserialize, Default)]
pub struct ElementDefinitionType {
    pub code: String,
    #[serde(rename = "targetProfile")]
    pub target_profile: Option<Vec<String>>,
}

impl ElementDefinition {
    /// The last path segment, e.g. `value[x]` for `Observation.value[x]`.
    pub fn field_name(&self) -> &str {
        self.path.rsplit('.').next().unwrap_or(&self.path)
    }

    /// The path of the element that owns this one.
    pub fn parent_path(&self) -> Option<&str> {
        self.path.rsplit_once('.').map(|(parent, _)| parent)
    }

    pub fn is_choice(&self) -> bool {
        self.path.ends_with("[x]")
    }

    pub fn is_array(&self) -> bool {
        self.max.as_deref() == Some("*")
    }

    pub fn is_required(&self) -> bool {
        self.min.unwrap_or(0) > 0
    }

    pub fn type_codes(&self) -> impl Iterator<Item = &str> {
        self.r#type.iter().flatten().map(|t| t.code.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn path_helpers() {
        let element = ElementDefinition {
            path: "Observation.component.value[x]".to_string(),
            min: Some(0),
            max: Some("1".to_string()),
            ..Default::default()
        };
        assert_eq!(element.field_name(), "value[x]");
        assert_eq!(element.parent_path(), Some("Observation.component"));
        assert!(element.is_choice());
        assert!(!element.is_array());
        assert!(!element.is_required());
    }
}
