use crate::r4::*;
use crate::FhirSerde;

/// Choice of types for the subject\[x\] field in Library
#[derive(Debug, Clone, PartialEq, FhirSerde)]
#[fhir_choice_element(base_name = "subject")]
pub enum LibrarySubject {
    /// Variant accepting the CodeableConcept type.
    #[fhir_serde(rename = "subjectCodeableConcept")]
    CodeableConcept(CodeableConcept),
    /// Variant accepting the Reference type.
    #[fhir_serde(rename = "subjectReference")]
    Reference(Reference),
}

/// FHIR Library type
///
/// The Library resource is a general-purpose container for knowledge asset
/// definitions. It can be used to describe and expose existing knowledge assets
/// such as logic libraries and information model descriptions, as well as to
/// describe a collection of knowledge assets.
///
/// See: [Library](http://hl7.org/fhir/StructureDefinition/Library)
#[derive(Debug, Clone, PartialEq, Default, FhirSerde)]
#[fhir_type(name = "Library", kind = "domain_resource")]
pub struct Library {
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
    /// Canonical identifier for this library, represented as a URI (globally unique)
    pub url: Option<Uri>,
    /// Additional identifier for the library
    pub identifier: Option<Vec<Identifier>>,
    /// Business version of the library
    pub version: Option<String>,
    /// Name for this library (computer friendly)
    pub name: Option<String>,
    /// Name for this library (human friendly)
    pub title: Option<String>,
    /// Subordinate title of the library
    pub subtitle: Option<String>,
    /// The status of this library. Enables tracking the life-cycle of the content.
    pub status: Code,
    /// For testing purposes, not real usage
    pub experimental: Option<Boolean>,
    /// logic-library | model-definition | asset-collection | module-definition
    #[fhir_serde(rename = "type")]
    pub r#type: CodeableConcept,
    /// Type of individual the library content is focused on
    #[fhir_serde(flatten)]
    pub subject: Option<LibrarySubject>,
    /// Date last changed
    pub date: Option<DateTime>,
    /// Name of the publisher (organization or individual)
    pub publisher: Option<String>,
    /// Contact details for the publisher
    pub contact: Option<Vec<ContactDetail>>,
    /// Natural language description of the library
    pub description: Option<Markdown>,
    /// The context that the content is intended to support
    #[fhir_serde(rename = "useContext")]
    pub use_context: Option<Vec<UsageContext>>,
    /// Intended jurisdiction for library (if applicable)
    pub jurisdiction: Option<Vec<CodeableConcept>>,
    /// Why this library is defined
    pub purpose: Option<Markdown>,
    /// Describes the clinical usage of the library
    pub usage: Option<String>,
    /// Use and/or publishing restrictions
    pub copyright: Option<Markdown>,
    /// When the library was approved by publisher
    #[fhir_serde(rename = "approvalDate")]
    pub approval_date: Option<Date>,
    /// When the library was last reviewed
    #[fhir_serde(rename = "lastReviewDate")]
    pub last_review_date: Option<Date>,
    /// When the library is expected to be used
    #[fhir_serde(rename = "effectivePeriod")]
    pub effective_period: Option<Period>,
    /// E.g. Education, Treatment, Assessment, etc..
    pub topic: Option<Vec<CodeableConcept>>,
    /// Who authored the content
    pub author: Option<Vec<ContactDetail>>,
    /// Who edited the content
    pub editor: Option<Vec<ContactDetail>>,
    /// Who reviewed the content
    pub reviewer: Option<Vec<ContactDetail>>,
    /// Who endorsed the content
    pub endorser: Option<Vec<ContactDetail>>,
    /// Additional documentation, citations, etc.
    #[fhir_serde(rename = "relatedArtifact")]
    pub related_artifact: Option<Vec<RelatedArtifact>>,
    /// Parameters defined by the library
    pub parameter: Option<Vec<ParameterDefinition>>,
    /// What data is referenced by this library
    #[fhir_serde(rename = "dataRequirement")]
    pub data_requirement: Option<Vec<DataRequirement>>,
    /// Contents of the library, either embedded or referenced
    pub content: Option<Vec<Attachment>>,
}
