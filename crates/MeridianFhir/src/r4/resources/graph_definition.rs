use crate::r4::*;
use crate::FhirSerde;

/// FHIR GraphDefinition type
///
/// A formal computable definition of a graph of resources - that is, a coherent
/// set of resources that form a graph by following references. The Graph
/// Definition resource defines a set and makes rules about the set.
///
/// See: [GraphDefinition](http://hl7.org/fhir/StructureDefinition/GraphDefinition)
#[derive(Debug, Clone, PartialEq, Default, FhirSerde)]
#[fhir_type(name = "GraphDefinition", kind = "domain_resource")]
pub struct GraphDefinition {
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
    /// Canonical identifier for this graph definition, represented as a URI (globally unique)
    pub url: Option<Uri>,
    /// Business version of the graph definition
    pub version: Option<String>,
    /// Name for this graph definition (computer friendly)
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
    /// Natural language description of the graph definition
    pub description: Option<Markdown>,
    /// The context that the content is intended to support
    #[fhir_serde(rename = "useContext")]
    pub use_context: Option<Vec<UsageContext>>,
    /// Intended jurisdiction for graph definition (if applicable)
    pub jurisdiction: Option<Vec<CodeableConcept>>,
    /// Why this graph definition is defined
    pub purpose: Option<Markdown>,
    /// Type of resource at which the graph starts
    pub start: Code,
    /// Profile on base resource
    pub profile: Option<Canonical>,
    /// Links this graph makes rules about
    pub link: Option<Vec<GraphDefinitionLink>>,
}

/// Links this graph makes rules about
#[derive(Debug, Clone, PartialEq, Default, FhirSerde)]
#[fhir_type(name = "GraphDefinitionLink", kind = "backbone_element")]
pub struct GraphDefinitionLink {
    /// Unique id for inter-element referencing
    pub id: Option<std::string::String>,
    /// Additional content defined by implementations
    pub extension: Option<Vec<Extension>>,
    /// Extensions that cannot be ignored even if unrecognized
    #[fhir_serde(rename = "modifierExtension")]
    pub modifier_extension: Option<Vec<Extension>>,
    /// Path in the resource that contains the link
    pub path: Option<String>,
    /// Which slice (if profiled)
    #[fhir_serde(rename = "sliceName")]
    pub slice_name: Option<String>,
    /// Minimum occurrences for this link
    pub min: Option<Integer>,
    /// Maximum occurrences for this link
    pub max: Option<String>,
    /// Why this link is specified
    pub description: Option<String>,
    /// Potential target for the link
    pub target: Option<Vec<GraphDefinitionLinkTarget>>,
}

/// Potential target for the link
#[derive(Debug, Clone, PartialEq, Default, FhirSerde)]
#[fhir_type(name = "GraphDefinitionLinkTarget", kind = "backbone_element")]
pub struct GraphDefinitionLinkTarget {
    /// Unique id for inter-element referencing
    pub id: Option<std::string::String>,
    /// Additional content defined by implementations
    pub extension: Option<Vec<Extension>>,
    /// Extensions that cannot be ignored even if unrecognized
    #[fhir_serde(rename = "modifierExtension")]
    pub modifier_extension: Option<Vec<Extension>>,
    /// Type of resource this link refers to
    #[fhir_serde(rename = "type")]
    pub r#type: Code,
    /// Criteria for reverse lookup
    pub params: Option<String>,
    /// Profile for the target resource
    pub profile: Option<Canonical>,
    /// Compartment Consistency Rules
    pub compartment: Option<Vec<GraphDefinitionLinkTargetCompartment>>,
    /// Additional links from target resource
    pub link: Option<Vec<GraphDefinitionLink>>,
}

/// Compartment Consistency Rules
#[derive(Debug, Clone, PartialEq, Default, FhirSerde)]
#[fhir_type(name = "GraphDefinitionLinkTargetCompartment", kind = "backbone_element")]
pub struct GraphDefinitionLinkTargetCompartment {
    /// Unique id for inter-element referencing
    pub id: Option<std::string::String>,
    /// Additional content defined by implementations
    pub extension: Option<Vec<Extension>>,
    /// Extensions that cannot be ignored even if unrecognized
    #[fhir_serde(rename = "modifierExtension")]
    pub modifier_extension: Option<Vec<Extension>>,
    /// condition | requirement
    #[fhir_serde(rename = "use")]
    pub r#use: Code,
    /// Patient | Encounter | RelatedPerson | Practitioner | Device
    pub code: Code,
    /// identical | matching | different | custom
    pub rule: Code,
    /// Custom rule, as a FHIRPath expression
    pub expression: Option<String>,
    /// Documentation for FHIRPath expression
    pub description: Option<String>,
}
