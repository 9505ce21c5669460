use crate::r4::*;
use crate::FhirSerde;

/// FHIR StructureDefinition type
///
/// A definition of a FHIR structure. This resource is used to describe the
/// underlying resources, data types defined in FHIR, and also for describing
/// extensions and constraints on resources and data types.
///
/// See: [StructureDefinition](http://hl7.org/fhir/StructureDefinition/StructureDefinition)
#[derive(Debug, Clone, PartialEq, Default, FhirSerde)]
#[fhir_type(name = "StructureDefinition", kind = "domain_resource")]
pub struct StructureDefinition {
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
    /// Canonical identifier for this structure definition, represented as a URI (globally unique)
    pub url: Uri,
    /// Additional identifier for the structure definition
    pub identifier: Option<Vec<Identifier>>,
    /// Business version of the structure definition
    pub version: Option<String>,
    /// Name for this structure definition (computer friendly)
    pub name: String,
    /// Name for this structure definition (human friendly)
    pub title: Option<String>,
    /// The status of this structure definition. Enables tracking the life-cycle of the content.
    pub status: Code,
    /// For testing purposes, not real usage
    pub experimental: Option<Boolean>,
    /// Date last changed
    pub date: Option<DateTime>,
    /// Name of the publisher (organization or individual)
    pub publisher: Option<String>,
    /// Contact details for the publisher
    pub contact: Option<Vec<ContactDetail>>,
    /// Natural language description of the structure definition
    pub description: Option<Markdown>,
    /// The context that the content is intended to support
    #[fhir_serde(rename = "useContext")]
    pub use_context: Option<Vec<UsageContext>>,
    /// Intended jurisdiction for structure definition (if applicable)
    pub jurisdiction: Option<Vec<CodeableConcept>>,
    /// Why this structure definition is defined
    pub purpose: Option<Markdown>,
    /// Use and/or publishing restrictions
    pub copyright: Option<Markdown>,
    /// Assist with indexing and finding
    pub keyword: Option<Vec<Coding>>,
    /// FHIR Version this StructureDefinition targets
    #[fhir_serde(rename = "fhirVersion")]
    pub fhir_version: Option<String>,
    /// External specification that the content is mapped to
    pub mapping: Option<Vec<StructureDefinitionMapping>>,
    /// Defines the kind of structure that this definition is describing
    pub kind: Code,
    /// Whether the structure is abstract
    #[fhir_serde(rename = "abstract")]
    pub r#abstract: Boolean,
    /// If an extension, where it can be used in instances
    pub context: Option<Vec<StructureDefinitionContext>>,
    /// FHIRPath invariants - when the extension can be used
    #[fhir_serde(rename = "contextInvariant")]
    pub context_invariant: Option<Vec<String>>,
    /// Type defined or constrained by this structure
    #[fhir_serde(rename = "type")]
    pub r#type: String,
    /// Definition that this type is constrained/specialized from
    #[fhir_serde(rename = "baseDefinition")]
    pub base_definition: Option<String>,
    /// How the type relates to the baseDefinition
    pub derivation: Option<Code>,
    /// Snapshot view of the structure
    pub snapshot: Option<StructureDefinitionSnapshot>,
    /// Differential view of the structure
    pub differential: Option<StructureDefinitionDifferential>,
}

/// If an extension, where it can be used in instances
#[derive(Debug, Clone, PartialEq, Default, FhirSerde)]
#[fhir_type(name = "StructureDefinitionContext", kind = "backbone_element")]
pub struct StructureDefinitionContext {
    /// Unique id for inter-element referencing
    pub id: Option<std::string::String>,
    /// Additional content defined by implementations
    pub extension: Option<Vec<Extension>>,
    /// Extensions that cannot be ignored even if unrecognized
    #[fhir_serde(rename = "modifierExtension")]
    pub modifier_extension: Option<Vec<Extension>>,
    /// Defines how to interpret the expression that defines what the context of the extension is
    #[fhir_serde(rename = "type")]
    pub r#type: Code,
    /// Where the extension can be used in instances
    pub expression: String,
}

/// Differential view of the structure
#[derive(Debug, Clone, PartialEq, Default, FhirSerde)]
#[fhir_type(name = "StructureDefinitionDifferential", kind = "backbone_element")]
pub struct StructureDefinitionDifferential {
    /// Unique id for inter-element referencing
    pub id: Option<std::string::String>,
    /// Additional content defined by implementations
    pub extension: Option<Vec<Extension>>,
    /// Extensions that cannot be ignored even if unrecognized
    #[fhir_serde(rename = "modifierExtension")]
    pub modifier_extension: Option<Vec<Extension>>,
    /// Definition of elements in the resource (if no StructureDefinition)
    pub element: Vec<ElementDefinition>,
}

/// External specification that the content is mapped to
#[derive(Debug, Clone, PartialEq, Default, FhirSerde)]
#[fhir_type(name = "StructureDefinitionMapping", kind = "backbone_element")]
pub struct StructureDefinitionMapping {
    /// Unique id for inter-element referencing
    pub id: Option<std::string::String>,
    /// Additional content defined by implementations
    pub extension: Option<Vec<Extension>>,
    /// Extensions that cannot be ignored even if unrecognized
    #[fhir_serde(rename = "modifierExtension")]
    pub modifier_extension: Option<Vec<Extension>>,
    /// Internal id when this mapping is used
    pub identity: String,
    /// Identifies what this mapping refers to
    pub uri: Option<String>,
    /// Names what this mapping refers to
    pub name: Option<String>,
    /// Versions, Issues, Scope limitations etc.
    pub comment: Option<String>,
}

/// Snapshot view of the structure
#[derive(Debug, Clone, PartialEq, Default, FhirSerde)]
#[fhir_type(name = "StructureDefinitionSnapshot", kind = "backbone_element")]
pub struct StructureDefinitionSnapshot {
    /// Unique id for inter-element referencing
    pub id: Option<std::string::String>,
    /// Additional content defined by implementations
    pub extension: Option<Vec<Extension>>,
    /// Extensions that cannot be ignored even if unrecognized
    #[fhir_serde(rename = "modifierExtension")]
    pub modifier_extension: Option<Vec<Extension>>,
    /// Definition of elements in the resource (if no StructureDefinition)
    pub element: Vec<ElementDefinition>,
}
