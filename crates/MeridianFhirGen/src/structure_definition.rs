use serde::Deserialize;
use crate::element_definition::ElementDefinition;

/// Bootstrap representation of a FHIR StructureDefinition.
///
/// Describes one data type or resource. The generator reads:
///
/// - `name`: the type being defined (e.g. "Patient", "string", "Period")
/// - `kind`: "resource", "complex-type" or "primitive-type"
/// - `abstract` and `derivation`: only concrete specializations are generated
/// - `baseDefinition`: decides the base layer (element, backbone element,
///   resource or domain resource)
/// - `snapshot`: the complete, flattened element list
#[derive(Debug, Deserialize, Default)]
pub struct StructureDefinition {
    pub id: Option<String>,
    pub url: String,
    pub name: String,
    pub description: Option<String>,
    pub kind: String,
    #[serde(rename = "abstract")]
    pub r#abstract: bool,
    #[serde(rename = "type")]
    pub r#type: String,
    #[serde(rename = "baseDefinition")]
    pub base_definition: Option<String>,
    pub derivation: Option<String>,
    pub snapshot: Option<StructureDefinitionSnapshot>,
}

#[derive(Debug, Deserialize, Default)]
pub struct StructureDefinitionSnapshot {
    pub element: Option<Vec<ElementDefinition>>,
}

impl StructureDefinition {
    /// The last segment of `baseDefinition`, e.g. `DomainResource`.
    pub fn base_type(&self) -> Option<&str> {
        self.base_definition.as_deref()?.rsplit('/').next()
    }

    pub fn snapshot_elements(&self) -> &[ElementDefinition] {
        self.snapshot
            .as_ref()
            .and_then(|s| s.element.as_deref())
            .unwrap_or_default()
    }
}
