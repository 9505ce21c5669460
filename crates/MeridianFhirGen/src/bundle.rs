use serde::Deserialize;
use serde_json::Value;
use crate::structure_definition::StructureDefinition;

/// Bootstrap representation of a FHIR Bundle.
///
/// FHIR publishes its definitions as `collection` Bundles
/// (`profiles-types.json`, `profiles-resources.json`). Only the parts needed
/// to reach the StructureDefinitions are modelled; every other key is
/// ignored. Entry resources stay as raw JSON until their `resourceType` is
/// known, since the same files also carry SearchParameters,
/// OperationDefinitions and CapabilityStatements.
#[derive(Debug, Deserialize)]
pub struct Bundle {
    #[serde(rename = "resourceType")]
    pub resource_type: String,
    pub id: Option<String>,
    #[serde(rename = "type")]
    pub r#type: Option<String>,
    pub entry: Option<Vec<BundleEntry>>,
}

#[derive(Debug, Deserialize)]
pub struct BundleEntry {
    #[serde(rename = "fullUrl")]
    pub full_url: Option<String>,
    pub resource: Option<Value>,
}

impl Bundle {
    /// Decodes every StructureDefinition entry, skipping other resources.
    pub fn structure_definitions(&self) -> Result<Vec<StructureDefinition>, serde_json::Error> {
        self.entry
            .iter()
            .flatten()
            .filter_map(|entry| entry.resource.as_ref())
            .filter(|resource| {
                resource.get("resourceType").and_then(Value::as_str) == Some("StructureDefinition")
            })
            .map(|resource| StructureDefinition::deserialize(resource))
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn only_structure_definitions_are_decoded() {
        let bundle: Bundle = serde_json::from_value(json!({
            "resourceType": "Bundle",
            "id": "types",
            "type": "collection",
            "entry": [
                {"fullUrl": "http://hl7.org/fhir/SearchParameter/x", "resource": {"resourceType": "SearchParameter", "id": "x"}},
                {"fullUrl": "http://hl7.org/fhir/StructureDefinition/Period", "resource": {
                    "resourceType": "StructureDefinition",
                    "url": "http://hl7.org/fhir/StructureDefinition/Period",
                    "name": "Period",
                    "kind": "complex-type",
                    "abstract": false,
                    "type": "Period"
                }}
            ]
        }))
        .unwrap();

        let definitions = bundle.structure_definitions().unwrap();
        assert_eq!(definitions.len(), 1);
        assert_eq!(definitions[0].name, "Period");
    }
}
