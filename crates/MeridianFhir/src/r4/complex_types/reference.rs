use crate::r4::*;
use crate::FhirSerde;

/// FHIR Reference type
///
/// A reference from one resource to another.
///
/// See: [Reference](http://hl7.org/fhir/StructureDefinition/Reference)
#[derive(Debug, Clone, PartialEq, Default, FhirSerde)]
#[fhir_type(name = "Reference", kind = "element")]
pub struct Reference {
    /// Unique id for inter-element referencing
    pub id: Option<std::string::String>,
    /// Additional content defined by implementations
    pub extension: Option<Vec<Extension>>,
    /// Literal reference, Relative, internal or absolute URL
    pub reference: Option<String>,
    /// Type the reference refers to (e.g. "Patient")
    #[fhir_serde(rename = "type")]
    pub r#type: Option<Uri>,
    /// Logical reference, when literal reference is not known
    pub identifier: Option<Identifier>,
    /// Text alternative for the resource
    pub display: Option<String>,
}
