use crate::r4::*;
use crate::FhirSerde;

/// FHIR ContactDetail type
///
/// Specifies contact information for a person or organization.
///
/// See: [ContactDetail](http://hl7.org/fhir/StructureDefinition/ContactDetail)
#[derive(Debug, Clone, PartialEq, Default, FhirSerde)]
#[fhir_type(name = "ContactDetail", kind = "element")]
pub struct ContactDetail {
    /// Unique id for inter-element referencing
    pub id: Option<std::string::String>,
    /// Additional content defined by implementations
    pub extension: Option<Vec<Extension>>,
    /// Name of an individual to contact
    pub name: Option<String>,
    /// Contact details for individual or organization
    pub telecom: Option<Vec<ContactPoint>>,
}
