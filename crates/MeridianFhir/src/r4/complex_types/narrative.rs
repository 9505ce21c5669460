use crate::r4::*;
use crate::FhirSerde;

/// FHIR Narrative type
///
/// A human-readable summary of the resource conveying the essential clinical and
/// business information for the resource.
///
/// See: [Narrative](http://hl7.org/fhir/StructureDefinition/Narrative)
#[derive(Debug, Clone, PartialEq, Default, FhirSerde)]
#[fhir_type(name = "Narrative", kind = "element")]
pub struct Narrative {
    /// Unique id for inter-element referencing
    pub id: Option<std::string::String>,
    /// Additional content defined by implementations
    pub extension: Option<Vec<Extension>>,
    /// generated | extensions | additional | empty
    pub status: Code,
    /// Limited xhtml content
    pub div: Xhtml,
}
