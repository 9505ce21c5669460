use crate::r4::*;
use crate::FhirSerde;

/// FHIR TerminologyCapabilities type
///
/// A TerminologyCapabilities resource documents a set of capabilities
/// (behaviors) of a FHIR Terminology Server that may be used as a statement of
/// actual server functionality or a statement of required or desired server
/// implementation.
///
/// See: [TerminologyCapabilities](http://hl7.org/fhir/StructureDefinition/TerminologyCapabilities)
#[derive(Debug, Clone, PartialEq, Default, FhirSerde)]
#[fhir_type(name = "TerminologyCapabilities", kind = "domain_resource")]
pub struct TerminologyCapabilities {
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
    /// Canonical identifier for this terminology capabilities, represented as a URI (globally unique)
    pub url: Option<Uri>,
    /// Business version of the terminology capabilities
    pub version: Option<String>,
    /// Name for this terminology capabilities (computer friendly)
    pub name: Option<String>,
    /// Name for this terminology capabilities (human friendly)
    pub title: Option<String>,
    /// The status of this terminology capabilities. Enables tracking the life-cycle of the content.
    pub status: Code,
    /// For testing purposes, not real usage
    pub experimental: Option<Boolean>,
    /// Date last changed
    pub date: DateTime,
    /// Name of the publisher (organization or individual)
    pub publisher: Option<String>,
    /// Contact details for the publisher
    pub contact: Option<Vec<ContactDetail>>,
    /// Natural language description of the terminology capabilities
    pub description: Option<Markdown>,
    /// The context that the content is intended to support
    #[fhir_serde(rename = "useContext")]
    pub use_context: Option<Vec<UsageContext>>,
    /// Intended jurisdiction for terminology capabilities (if applicable)
    pub jurisdiction: Option<Vec<CodeableConcept>>,
    /// Why this terminology capabilities is defined
    pub purpose: Option<Markdown>,
    /// Use and/or publishing restrictions
    pub copyright: Option<Markdown>,
    /// The way that this statement is intended to be used, to describe an actual running instance of software, a particular product (kind, not instance of software) or a class of implementation (e.g. a desired purchase).
    pub kind: Code,
    /// Software that is covered by this terminology capability statement
    pub software: Option<TerminologyCapabilitiesSoftware>,
    /// If this describes a specific instance
    pub implementation: Option<TerminologyCapabilitiesImplementation>,
    /// Whether lockedDate is supported
    #[fhir_serde(rename = "lockedDate")]
    pub locked_date: Option<Boolean>,
    /// A code system supported by the server
    #[fhir_serde(rename = "codeSystem")]
    pub code_system: Option<Vec<TerminologyCapabilitiesCodeSystem>>,
    /// Information about the \[ValueSet/$expand\](valueset-operation-expand.html) operation
    pub expansion: Option<TerminologyCapabilitiesExpansion>,
    /// The degree to which the server supports the code search parameter on ValueSet, if it is supported
    #[fhir_serde(rename = "codeSearch")]
    pub code_search: Option<Code>,
    /// Information about the \[ValueSet/$validate-code\](valueset-operation-validate- code.html) operation
    #[fhir_serde(rename = "validateCode")]
    pub validate_code: Option<TerminologyCapabilitiesValidateCode>,
    /// Information about the \[ConceptMap/$translate\](conceptmap-operation- translate.html) operation
    pub translation: Option<TerminologyCapabilitiesTranslation>,
    /// Information about the \[ConceptMap/$closure\](conceptmap-operation-closure.html) operation
    pub closure: Option<TerminologyCapabilitiesClosure>,
}

/// Information about the \[ConceptMap/$closure\](conceptmap-operation-closure.html) operation
#[derive(Debug, Clone, PartialEq, Default, FhirSerde)]
#[fhir_type(name = "TerminologyCapabilitiesClosure", kind = "backbone_element")]
pub struct TerminologyCapabilitiesClosure {
    /// Unique id for inter-element referencing
    pub id: Option<std::string::String>,
    /// Additional content defined by implementations
    pub extension: Option<Vec<Extension>>,
    /// Extensions that cannot be ignored even if unrecognized
    #[fhir_serde(rename = "modifierExtension")]
    pub modifier_extension: Option<Vec<Extension>>,
    /// If cross-system closure is supported
    pub translation: Option<Boolean>,
}

/// A code system supported by the server
#[derive(Debug, Clone, PartialEq, Default, FhirSerde)]
#[fhir_type(name = "TerminologyCapabilitiesCodeSystem", kind = "backbone_element")]
pub struct TerminologyCapabilitiesCodeSystem {
    /// Unique id for inter-element referencing
    pub id: Option<std::string::String>,
    /// Additional content defined by implementations
    pub extension: Option<Vec<Extension>>,
    /// Extensions that cannot be ignored even if unrecognized
    #[fhir_serde(rename = "modifierExtension")]
    pub modifier_extension: Option<Vec<Extension>>,
    /// URI for the Code System
    pub uri: Option<String>,
    /// Version of Code System supported
    pub version: Option<Vec<TerminologyCapabilitiesCodeSystemVersion>>,
    /// Whether subsumption is supported
    pub subsumption: Option<Boolean>,
}

/// Version of Code System supported
#[derive(Debug, Clone, PartialEq, Default, FhirSerde)]
#[fhir_type(name = "TerminologyCapabilitiesCodeSystemVersion", kind = "backbone_element")]
pub struct TerminologyCapabilitiesCodeSystemVersion {
    /// Unique id for inter-element referencing
    pub id: Option<std::string::String>,
    /// Additional content defined by implementations
    pub extension: Option<Vec<Extension>>,
    /// Extensions that cannot be ignored even if unrecognized
    #[fhir_serde(rename = "modifierExtension")]
    pub modifier_extension: Option<Vec<Extension>>,
    /// Version identifier for this version
    pub code: Option<String>,
    /// If this is the default version for this code system
    #[fhir_serde(rename = "isDefault")]
    pub is_default: Option<Boolean>,
    /// If compositional grammar is supported
    pub compositional: Option<Boolean>,
    /// Language Displays supported
    pub language: Option<Vec<Code>>,
    /// Filter Properties supported
    pub filter: Option<Vec<TerminologyCapabilitiesCodeSystemVersionFilter>>,
    /// Properties supported for $lookup
    pub property: Option<Vec<String>>,
}

/// Filter Properties supported
#[derive(Debug, Clone, PartialEq, Default, FhirSerde)]
#[fhir_type(name = "TerminologyCapabilitiesCodeSystemVersionFilter", kind = "backbone_element")]
pub struct TerminologyCapabilitiesCodeSystemVersionFilter {
    /// Unique id for inter-element referencing
    pub id: Option<std::string::String>,
    /// Additional content defined by implementations
    pub extension: Option<Vec<Extension>>,
    /// Extensions that cannot be ignored even if unrecognized
    #[fhir_serde(rename = "modifierExtension")]
    pub modifier_extension: Option<Vec<Extension>>,
    /// Code of the property supported
    pub code: String,
    /// Operations supported for the property
    pub op: Vec<String>,
}

/// Information about the \[ValueSet/$expand\](valueset-operation-expand.html) operation
#[derive(Debug, Clone, PartialEq, Default, FhirSerde)]
#[fhir_type(name = "TerminologyCapabilitiesExpansion", kind = "backbone_element")]
pub struct TerminologyCapabilitiesExpansion {
    /// Unique id for inter-element referencing
    pub id: Option<std::string::String>,
    /// Additional content defined by implementations
    pub extension: Option<Vec<Extension>>,
    /// Extensions that cannot be ignored even if unrecognized
    #[fhir_serde(rename = "modifierExtension")]
    pub modifier_extension: Option<Vec<Extension>>,
    /// Whether the server can return nested value sets
    pub hierarchical: Option<Boolean>,
    /// Whether the server supports paging on expansion
    pub paging: Option<Boolean>,
    /// Allow request for incomplete expansions?
    pub incomplete: Option<Boolean>,
    /// Supported expansion parameter
    pub parameter: Option<Vec<TerminologyCapabilitiesExpansionParameter>>,
    /// Documentation about text searching works
    #[fhir_serde(rename = "textFilter")]
    pub text_filter: Option<String>,
}

/// Supported expansion parameter
#[derive(Debug, Clone, PartialEq, Default, FhirSerde)]
#[fhir_type(name = "TerminologyCapabilitiesExpansionParameter", kind = "backbone_element")]
pub struct TerminologyCapabilitiesExpansionParameter {
    /// Unique id for inter-element referencing
    pub id: Option<std::string::String>,
    /// Additional content defined by implementations
    pub extension: Option<Vec<Extension>>,
    /// Extensions that cannot be ignored even if unrecognized
    #[fhir_serde(rename = "modifierExtension")]
    pub modifier_extension: Option<Vec<Extension>>,
    /// Expansion Parameter name
    pub name: String,
    /// Description of support for parameter
    pub documentation: Option<String>,
}

/// If this describes a specific instance
#[derive(Debug, Clone, PartialEq, Default, FhirSerde)]
#[fhir_type(name = "TerminologyCapabilitiesImplementation", kind = "backbone_element")]
pub struct TerminologyCapabilitiesImplementation {
    /// Unique id for inter-element referencing
    pub id: Option<std::string::String>,
    /// Additional content defined by implementations
    pub extension: Option<Vec<Extension>>,
    /// Extensions that cannot be ignored even if unrecognized
    #[fhir_serde(rename = "modifierExtension")]
    pub modifier_extension: Option<Vec<Extension>>,
    /// Describes this specific instance
    pub description: String,
    /// Base URL for the implementation
    pub url: Option<Url>,
}

/// Software that is covered by this terminology capability statement
#[derive(Debug, Clone, PartialEq, Default, FhirSerde)]
#[fhir_type(name = "TerminologyCapabilitiesSoftware", kind = "backbone_element")]
pub struct TerminologyCapabilitiesSoftware {
    /// Unique id for inter-element referencing
    pub id: Option<std::string::String>,
    /// Additional content defined by implementations
    pub extension: Option<Vec<Extension>>,
    /// Extensions that cannot be ignored even if unrecognized
    #[fhir_serde(rename = "modifierExtension")]
    pub modifier_extension: Option<Vec<Extension>>,
    /// A name the software is known by
    pub name: String,
    /// Version covered by this statement
    pub version: Option<String>,
}

/// Information about the \[ConceptMap/$translate\](conceptmap-operation- translate.html) operation
#[derive(Debug, Clone, PartialEq, Default, FhirSerde)]
#[fhir_type(name = "TerminologyCapabilitiesTranslation", kind = "backbone_element")]
pub struct TerminologyCapabilitiesTranslation {
    /// Unique id for inter-element referencing
    pub id: Option<std::string::String>,
    /// Additional content defined by implementations
    pub extension: Option<Vec<Extension>>,
    /// Extensions that cannot be ignored even if unrecognized
    #[fhir_serde(rename = "modifierExtension")]
    pub modifier_extension: Option<Vec<Extension>>,
    /// Whether the client must identify the map
    #[fhir_serde(rename = "needsMap")]
    pub needs_map: Boolean,
}

/// Information about the \[ValueSet/$validate-code\](valueset-operation-validate- code.html) operation
#[derive(Debug, Clone, PartialEq, Default, FhirSerde)]
#[fhir_type(name = "TerminologyCapabilitiesValidateCode", kind = "backbone_element")]
pub struct TerminologyCapabilitiesValidateCode {
    /// Unique id for inter-element referencing
    pub id: Option<std::string::String>,
    /// Additional content defined by implementations
    pub extension: Option<Vec<Extension>>,
    /// Extensions that cannot be ignored even if unrecognized
    #[fhir_serde(rename = "modifierExtension")]
    pub modifier_extension: Option<Vec<Extension>>,
    /// Whether translations are validated
    pub translations: Boolean,
}
