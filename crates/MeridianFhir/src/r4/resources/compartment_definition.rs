use crate::r4::*;
use crate::FhirSerde;

/// FHIR CompartmentDefinition type
///
/// A compartment definition that defines how resources are accessed on a server.
///
/// See: [CompartmentDefinition](http://hl7.org/fhir/StructureDefinition/CompartmentDefinition)
#[derive(Debug, Clone, PartialEq, Default, FhirSerde)]
#[fhir_type(name = "CompartmentDefinition", kind = "domain_resource")]
pub struct CompartmentDefinition {
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
    /// Canonical identifier for this compartment definition, represented as a URI (globally unique)
    pub url: Uri,
    /// Business version of the compartment definition
    pub version: Option<String>,
    /// Name for this compartment definition (computer friendly)
    pub name: String,
    /// draft | active | retired | unknown
    pub status: Code,
    /// For testing purposes, not real usage
    pub experimental: Option<Boolean>,
    /// Date last changed
    pub date: Option<DateTime>,
    /// Name of the publisher (organization or individual)
    pub publisher: Option<String>,
    /// Contact details for the publisher
    pub contact: Option<Vec<ContactDetail>>,
    /// Natural language description of the compartment definition
    pub description: Option<Markdown>,
    /// The context that the content is intended to support
    #[fhir_serde(rename = "useContext")]
    pub use_context: Option<Vec<UsageContext>>,
    /// Why this compartment definition is defined
    pub purpose: Option<Markdown>,
    /// Patient | Encounter | RelatedPerson | Practitioner | Device
    pub code: Code,
    /// Whether the search syntax is supported
    pub search: Boolean,
    /// How a resource is related to the compartment
    pub resource: Option<Vec<CompartmentDefinitionResource>>,
}

/// How a resource is related to the compartment
#[derive(Debug, Clone, PartialEq, Default, FhirSerde)]
#[fhir_type(name = "CompartmentDefinitionResource", kind = "backbone_element")]
pub struct CompartmentDefinitionResource {
    /// Unique id for inter-element referencing
    pub id: Option<std::string::String>,
    /// Additional content defined by implementations
    pub extension: Option<Vec<Extension>>,
    /// Extensions that cannot be ignored even if unrecognized
    #[fhir_serde(rename = "modifierExtension")]
    pub modifier_extension: Option<Vec<Extension>>,
    /// Name of resource type
    pub code: Code,
    /// Search Parameter Name, or chained parameters
    pub param: Option<Vec<String>>,
    /// Additional documentation about the resource and compartment
    pub documentation: Option<String>,
}
