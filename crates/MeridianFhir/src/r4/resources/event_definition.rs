use crate::r4::*;
use crate::FhirSerde;

/// Choice of types for the subject\[x\] field in EventDefinition
#[derive(Debug, Clone, PartialEq, FhirSerde)]
#[fhir_choice_element(base_name = "subject")]
pub enum EventDefinitionSubject {
    /// Variant accepting the CodeableConcept type.
    #[fhir_serde(rename = "subjectCodeableConcept")]
    CodeableConcept(CodeableConcept),
    /// Variant accepting the Reference type.
    #[fhir_serde(rename = "subjectReference")]
    Reference(Reference),
}

/// FHIR EventDefinition type
///
/// The EventDefinition resource provides a reusable description of when a
/// particular event can occur.
///
/// See: [EventDefinition](http://hl7.org/fhir/StructureDefinition/EventDefinition)
#[derive(Debug, Clone, PartialEq, Default, FhirSerde)]
#[fhir_type(name = "EventDefinition", kind = "domain_resource")]
pub struct EventDefinition {
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
    /// Canonical identifier for this event definition, represented as a URI (globally unique)
    pub url: Option<Uri>,
    /// Additional identifier for the event definition
    pub identifier: Option<Vec<Identifier>>,
    /// Business version of the event definition
    pub version: Option<String>,
    /// Name for this event definition (computer friendly)
    pub name: Option<String>,
    /// Name for this event definition (human friendly)
    pub title: Option<String>,
    /// Subordinate title of the event definition
    pub subtitle: Option<String>,
    /// The status of this event definition. Enables tracking the life-cycle of the content.
    pub status: Code,
    /// For testing purposes, not real usage
    pub experimental: Option<Boolean>,
    /// Type of individual the event definition is focused on
    #[fhir_serde(flatten)]
    pub subject: Option<EventDefinitionSubject>,
    /// Date last changed
    pub date: Option<DateTime>,
    /// Name of the publisher (organization or individual)
    pub publisher: Option<String>,
    /// Contact details for the publisher
    pub contact: Option<Vec<ContactDetail>>,
    /// Natural language description of the event definition
    pub description: Option<Markdown>,
    /// The context that the content is intended to support
    #[fhir_serde(rename = "useContext")]
    pub use_context: Option<Vec<UsageContext>>,
    /// Intended jurisdiction for event definition (if applicable)
    pub jurisdiction: Option<Vec<CodeableConcept>>,
    /// Why this event definition is defined
    pub purpose: Option<Markdown>,
    /// Describes the clinical usage of the event definition
    pub usage: Option<String>,
    /// Use and/or publishing restrictions
    pub copyright: Option<Markdown>,
    /// When the event definition was approved by publisher
    #[fhir_serde(rename = "approvalDate")]
    pub approval_date: Option<Date>,
    /// When the event definition was last reviewed
    #[fhir_serde(rename = "lastReviewDate")]
    pub last_review_date: Option<Date>,
    /// When the event definition is expected to be used
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
    /// "when" the event occurs (multiple = 'or')
    pub trigger: Vec<TriggerDefinition>,
}
