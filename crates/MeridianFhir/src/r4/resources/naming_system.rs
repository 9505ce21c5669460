use crate::r4::*;
use crate::FhirSerde;

/// FHIR NamingSystem type
///
/// A curated namespace that issues unique symbols within that namespace for the
/// identification of concepts, people, devices, etc. Represents a "System" used
/// within the Identifier and Coding data types.
///
/// See: [NamingSystem](http://hl7.org/fhir/StructureDefinition/NamingSystem)
#[derive(Debug, Clone, PartialEq, Default, FhirSerde)]
#[fhir_type(name = "NamingSystem", kind = "domain_resource")]
pub struct NamingSystem {
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
    /// Name for this naming system (computer friendly)
    pub name: String,
    /// draft | active | retired | unknown
    pub status: Code,
    /// codesystem | identifier | root
    pub kind: Code,
    /// Date last changed
    pub date: DateTime,
    /// Name of the publisher (organization or individual)
    pub publisher: Option<String>,
    /// Contact details for the publisher
    pub contact: Option<Vec<ContactDetail>>,
    /// Who maintains system namespace?
    pub responsible: Option<String>,
    /// e.g. driver,  provider,  patient, bank etc.
    #[fhir_serde(rename = "type")]
    pub r#type: Option<CodeableConcept>,
    /// Natural language description of the naming system
    pub description: Option<Markdown>,
    /// The context that the content is intended to support
    #[fhir_serde(rename = "useContext")]
    pub use_context: Option<Vec<UsageContext>>,
    /// Intended jurisdiction for naming system (if applicable)
    pub jurisdiction: Option<Vec<CodeableConcept>>,
    /// How/where is it used
    pub usage: Option<String>,
    /// Unique identifiers used for system
    #[fhir_serde(rename = "uniqueId")]
    pub unique_id: Vec<NamingSystemUniqueId>,
}

/// Unique identifiers used for system
#[derive(Debug, Clone, PartialEq, Default, FhirSerde)]
#[fhir_type(name = "NamingSystemUniqueId", kind = "backbone_element")]
pub struct NamingSystemUniqueId {
    /// Unique id for inter-element referencing
    pub id: Option<std::string::String>,
    /// Additional content defined by implementations
    pub extension: Option<Vec<Extension>>,
    /// Extensions that cannot be ignored even if unrecognized
    #[fhir_serde(rename = "modifierExtension")]
    pub modifier_extension: Option<Vec<Extension>>,
    /// oid | uuid | uri | other
    #[fhir_serde(rename = "type")]
    pub r#type: Code,
    /// The unique identifier
    pub value: String,
    /// Is this the id that should be used for this type
    pub preferred: Option<Boolean>,
    /// Notes about identifier usage
    pub comment: Option<String>,
    /// When is identifier valid?
    pub period: Option<Period>,
}
