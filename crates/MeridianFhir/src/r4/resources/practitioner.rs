use crate::r4::*;
use crate::FhirSerde;

/// FHIR Practitioner type
///
/// A person who is directly or indirectly involved in the provisioning of
/// healthcare.
///
/// See: [Practitioner](http://hl7.org/fhir/StructureDefinition/Practitioner)
#[derive(Debug, Clone, PartialEq, Default, FhirSerde)]
#[fhir_type(name = "Practitioner", kind = "domain_resource")]
pub struct Practitioner {
    /// Logical id of this artifact
    pub id: Option<Id>,
    /// Metadata about the resource
    pub meta: Option<Meta>,
    /// A set of rules under which this content was created
    #[fhir_serde(rename = "implicitRules")]
    pub implicit_rules: Option<Uri>,
    /// Language of the resource content
    pub language: Option<Code>,
    /// Text summary of the resource, for human interpretation
    pub text: Option<Narrative>,
    /// Contained, inline Resources
    pub contained: Option<Vec<Resource>>,
    /// Additional content defined by implementations
    pub extension: Option<Vec<Extension>>,
    /// Extensions that cannot be ignored
    #[fhir_serde(rename = "modifierExtension")]
    pub modifier_extension: Option<Vec<Extension>>,
    /// An identifier for the person as this agent
    pub identifier: Option<Vec<Identifier>>,
    /// Whether this practitioner's record is in active use
    pub active: Option<Boolean>,
    /// The name(s) associated with the practitioner
    pub name: Option<Vec<HumanName>>,
    /// A contact detail for the practitioner (that apply to all roles)
    pub telecom: Option<Vec<ContactPoint>>,
    /// Address(es) of the practitioner that are not role specific (typically home address)
    pub address: Option<Vec<Address>>,
    /// male | female | other | unknown
    pub gender: Option<Code>,
    /// The date  on which the practitioner was born
    #[fhir_serde(rename = "birthDate")]
    pub birth_date: Option<Date>,
    /// Image of the person
    pub photo: Option<Vec<Attachment>>,
    /// Certification, licenses, or training pertaining to the provision of care
    pub qualification: Option<Vec<PractitionerQualification>>,
    /// A language the practitioner can use in patient communication
    pub communication: Option<Vec<CodeableConcept>>,
}

/// Certification, licenses, or training pertaining to the provision of care
#[derive(Debug, Clone, PartialEq, Default, FhirSerde)]
#[fhir_type(name = "PractitionerQualification", kind = "backbone_element")]
pub struct PractitionerQualification {
    /// Unique id for inter-element referencing
    pub id: Option<std::string::String>,
    /// Additional content defined by implementations
    pub extension: Option<Vec<Extension>>,
    /// Extensions that cannot be ignored even if unrecognized
    #[fhir_serde(rename = "modifierExtension")]
    pub modifier_extension: Option<Vec<Extension>>,
    /// An identifier for this qualification for the practitioner
    pub identifier: Option<Vec<Identifier>>,
    /// Coded representation of the qualification
    pub code: CodeableConcept,
    /// Period during which the qualification is valid
    pub period: Option<Period>,
    /// Organization that regulates and issues the qualification
    pub issuer: Option<Reference>,
}
