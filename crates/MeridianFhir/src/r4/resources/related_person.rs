use crate::r4::*;
use crate::FhirSerde;

/// FHIR RelatedPerson type
///
/// Information about a person that is involved in the care for a patient, but
/// who is not the target of healthcare, nor has a formal responsibility in the
/// care process.
///
/// See: [RelatedPerson](http://hl7.org/fhir/StructureDefinition/RelatedPerson)
#[derive(Debug, Clone, PartialEq, Default, FhirSerde)]
#[fhir_type(name = "RelatedPerson", kind = "domain_resource")]
pub struct RelatedPerson {
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
    /// A human identifier for this person
    pub identifier: Option<Vec<Identifier>>,
    /// Whether this related person's record is in active use
    pub active: Option<Boolean>,
    /// The patient this person is related to
    pub patient: Reference,
    /// The nature of the relationship
    pub relationship: Option<Vec<CodeableConcept>>,
    /// A name associated with the person
    pub name: Option<Vec<HumanName>>,
    /// A contact detail for the person
    pub telecom: Option<Vec<ContactPoint>>,
    /// male | female | other | unknown
    pub gender: Option<Code>,
    /// The date on which the related person was born
    #[fhir_serde(rename = "birthDate")]
    pub birth_date: Option<Date>,
    /// Address where the related person can be contacted or visited
    pub address: Option<Vec<Address>>,
    /// Image of the person
    pub photo: Option<Vec<Attachment>>,
    /// Period of time that this relationship is considered valid
    pub period: Option<Period>,
    /// A language which may be used to communicate with about the patient's health
    pub communication: Option<Vec<RelatedPersonCommunication>>,
}

/// A language which may be used to communicate with about the patient's health
#[derive(Debug, Clone, PartialEq, Default, FhirSerde)]
#[fhir_type(name = "RelatedPersonCommunication", kind = "backbone_element")]
pub struct RelatedPersonCommunication {
    /// Unique id for inter-element referencing
    pub id: Option<std::string::String>,
    /// Additional content defined by implementations
    pub extension: Option<Vec<Extension>>,
    /// Extensions that cannot be ignored even if unrecognized
    #[fhir_serde(rename = "modifierExtension")]
    pub modifier_extension: Option<Vec<Extension>>,
    /// The language which can be used to communicate with the patient about his or her health
    pub language: CodeableConcept,
    /// Language preference indicator
    pub preferred: Option<Boolean>,
}
