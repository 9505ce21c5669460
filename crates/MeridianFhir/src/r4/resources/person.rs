use crate::r4::*;
use crate::FhirSerde;

/// FHIR Person type
///
/// Demographics and administrative information about a person independent of a
/// specific health-related context.
///
/// See: [Person](http://hl7.org/fhir/StructureDefinition/Person)
#[derive(Debug, Clone, PartialEq, Default, FhirSerde)]
#[fhir_type(name = "Person", kind = "domain_resource")]
pub struct Person {
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
    /// A name associated with the person
    pub name: Option<Vec<HumanName>>,
    /// A contact detail for the person
    pub telecom: Option<Vec<ContactPoint>>,
    /// male | female | other | unknown
    pub gender: Option<Code>,
    /// The date on which the person was born
    #[fhir_serde(rename = "birthDate")]
    pub birth_date: Option<Date>,
    /// One or more addresses for the person
    pub address: Option<Vec<Address>>,
    /// Image of the person
    pub photo: Option<Attachment>,
    /// The organization that is the custodian of the person record
    #[fhir_serde(rename = "managingOrganization")]
    pub managing_organization: Option<Reference>,
    /// This person's record is in active use
    pub active: Option<Boolean>,
    /// Link to a resource that concerns the same actual person
    pub link: Option<Vec<PersonLink>>,
}

/// Link to a resource that concerns the same actual person
#[derive(Debug, Clone, PartialEq, Default, FhirSerde)]
#[fhir_type(name = "PersonLink", kind = "backbone_element")]
pub struct PersonLink {
    /// Unique id for inter-element referencing
    pub id: Option<std::string::String>,
    /// Additional content defined by implementations
    pub extension: Option<Vec<Extension>>,
    /// Extensions that cannot be ignored even if unrecognized
    #[fhir_serde(rename = "modifierExtension")]
    pub modifier_extension: Option<Vec<Extension>>,
    /// The resource to which this actual person is associated
    pub target: Reference,
    /// level1 | level2 | level3 | level4
    pub assurance: Option<Code>,
}
