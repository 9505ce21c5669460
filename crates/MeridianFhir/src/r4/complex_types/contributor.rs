use crate::r4::*;
use crate::FhirSerde;

/// FHIR Contributor type
///
/// A contributor to the content of a knowledge asset, including authors,
/// editors, reviewers, and endorsers.
///
/// See: [Contributor](http://hl7.org/fhir/StructureDefinition/Contributor)
#[derive(Debug, Clone, PartialEq, Default, FhirSerde)]
#[fhir_type(name = "Contributor", kind = "element")]
pub struct Contributor {
    /// Unique id for inter-element referencing
    pub id: Option<std::string::String>,
    /// Additional content defined by implementations
    pub extension: Option<Vec<Extension>>,
    /// author | editor | reviewer | endorser
    #[fhir_serde(rename = "type")]
    pub r#type: Code,
    /// Who contributed the content
    pub name: String,
    /// Contact details of the contributor
    pub contact: Option<Vec<ContactDetail>>,
}
