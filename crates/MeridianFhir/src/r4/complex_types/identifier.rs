use crate::r4::*;
use crate::FhirSerde;

/// FHIR Identifier type
///
/// An identifier - identifies some entity uniquely and unambiguously. Typically
/// this is used for business identifiers.
///
/// See: [Identifier](http://hl7.org/fhir/StructureDefinition/Identifier)
#[derive(Debug, Clone, PartialEq, Default, FhirSerde)]
#[fhir_type(name = "Identifier", kind = "element")]
pub struct Identifier {
    /// Unique id for inter-element referencing
    pub id: Option<std::string::String>,
    /// Additional content defined by implementations
    pub extension: Option<Vec<Extension>>,
    /// usual | official | temp | secondary | old (If known)
    #[fhir_serde(rename = "use")]
    pub r#use: Option<Code>,
    /// Description of identifier
    #[fhir_serde(rename = "type")]
    pub r#type: Option<CodeableConcept>,
    /// The namespace for the identifier value
    pub system: Option<Uri>,
    /// The value that is unique
    pub value: Option<String>,
    /// Time period when id is/was valid for use
    pub period: Option<Period>,
    /// Organization that issued id (may be just text)
    pub assigner: Option<Box<Reference>>,
}
