use crate::r4::*;
use crate::FhirSerde;

/// FHIR DocumentManifest type
///
/// A collection of documents compiled for a purpose together with metadata that
/// applies to the collection.
///
/// See: [DocumentManifest](http://hl7.org/fhir/StructureDefinition/DocumentManifest)
#[derive(Debug, Clone, PartialEq, Default, FhirSerde)]
#[fhir_type(name = "DocumentManifest", kind = "domain_resource")]
pub struct DocumentManifest {
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
    /// Unique Identifier for the set of documents
    #[fhir_serde(rename = "masterIdentifier")]
    pub master_identifier: Option<Identifier>,
    /// Other identifiers for the manifest
    pub identifier: Option<Vec<Identifier>>,
    /// current | superseded | entered-in-error
    pub status: Code,
    /// Kind of document set
    #[fhir_serde(rename = "type")]
    pub r#type: Option<CodeableConcept>,
    /// The subject of the set of documents
    pub subject: Option<Reference>,
    /// When this document manifest created
    pub created: Option<DateTime>,
    /// Who and/or what authored the DocumentManifest
    pub author: Option<Vec<Reference>>,
    /// Intended to get notified about this set of documents
    pub recipient: Option<Vec<Reference>>,
    /// The source system/application/software
    pub source: Option<Uri>,
    /// Human-readable description (title)
    pub description: Option<String>,
    /// Items in manifest
    pub content: Vec<Reference>,
    /// Related things
    pub related: Option<Vec<DocumentManifestRelated>>,
}

/// Related things
#[derive(Debug, Clone, PartialEq, Default, FhirSerde)]
#[fhir_type(name = "DocumentManifestRelated", kind = "backbone_element")]
pub struct DocumentManifestRelated {
    /// Unique id for inter-element referencing
    pub id: Option<std::string::String>,
    /// Additional content defined by implementations
    pub extension: Option<Vec<Extension>>,
    /// Extensions that cannot be ignored even if unrecognized
    #[fhir_serde(rename = "modifierExtension")]
    pub modifier_extension: Option<Vec<Extension>>,
    /// Identifiers of things that are related
    pub identifier: Option<Identifier>,
    /// Related Resource
    #[fhir_serde(rename = "ref")]
    pub r#ref: Option<Reference>,
}
