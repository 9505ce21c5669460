use crate::r4::*;
use crate::FhirSerde;

/// Choice of types for the subject\[x\] field in ResearchDefinition
#[derive(Debug, Clone, PartialEq, FhirSerde)]
#[fhir_choice_element(base_name = "subject")]
pub enum ResearchDefinitionSubject {
    /// Variant accepting the CodeableConcept type.
    #[fhir_serde(rename = "subjectCodeableConcept")]
    CodeableConcept(CodeableConcept),
    /// Variant accepting the Reference type.
    #[fhir_serde(rename = "subjectReference")]
    Reference(Reference),
}

/// FHIR ResearchDefinition type
///
/// The ResearchDefinition resource describes the conditional state (population
/// and any exposures being compared within the population) and outcome (if
/// specified) that the knowledge (evidence, assertion, recommendation) is about.
///
/// See: [ResearchDefinition](http://hl7.org/fhir/StructureDefinition/ResearchDefinition)
#[derive(Debug, Clone, PartialEq, Default, FhirSerde)]
#[fhir_type(name = "ResearchDefinition", kind = "domain_resource")]
pub struct ResearchDefinition {
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
    /// Canonical identifier for this research definition, represented as a URI (globally unique)
    pub url: Option<Uri>,
    /// Additional identifier for the research definition
    pub identifier: Option<Vec<Identifier>>,
    /// Business version of the research definition
    pub version: Option<String>,
    /// Name for this research definition (computer friendly)
    pub name: Option<String>,
    /// Name for this research definition (human friendly)
    pub title: Option<String>,
    /// Title for use in informal contexts
    #[fhir_serde(rename = "shortTitle")]
    pub short_title: Option<String>,
    /// Subordinate title of the ResearchDefinition
    pub subtitle: Option<String>,
    /// The status of this research definition. Enables tracking the life-cycle of the content.
    pub status: Code,
    /// For testing purposes, not real usage
    pub experimental: Option<Boolean>,
    /// E.g. Patient, Practitioner, RelatedPerson, Organization, Location, Device.
    #[fhir_serde(flatten)]
    pub subject: Option<ResearchDefinitionSubject>,
    /// Date last changed
    pub date: Option<DateTime>,
    /// Name of the publisher (organization or individual)
    pub publisher: Option<String>,
    /// Contact details for the publisher
    pub contact: Option<Vec<ContactDetail>>,
    /// Natural language description of the research definition
    pub description: Option<Markdown>,
    /// Used for footnotes or explanatory notes
    pub comment: Option<Vec<String>>,
    /// The context that the content is intended to support
    #[fhir_serde(rename = "useContext")]
    pub use_context: Option<Vec<UsageContext>>,
    /// Intended jurisdiction for research definition (if applicable)
    pub jurisdiction: Option<Vec<CodeableConcept>>,
    /// Why this research definition is defined
    pub purpose: Option<Markdown>,
    /// Describes the clinical usage of the ResearchDefinition
    pub usage: Option<String>,
    /// Use and/or publishing restrictions
    pub copyright: Option<Markdown>,
    /// When the research definition was approved by publisher
    #[fhir_serde(rename = "approvalDate")]
    pub approval_date: Option<Date>,
    /// When the research definition was last reviewed
    #[fhir_serde(rename = "lastReviewDate")]
    pub last_review_date: Option<Date>,
    /// When the research definition is expected to be used
    #[fhir_serde(rename = "effectivePeriod")]
    pub effective_period: Option<Period>,
    /// The category of the ResearchDefinition, such as Education, Treatment, Assessment, etc.
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
    /// Logic used by the ResearchDefinition
    pub library: Option<Vec<Canonical>>,
    /// What population?
    pub population: Reference,
    /// What exposure?
    pub exposure: Option<Reference>,
    /// What alternative exposure state?
    #[fhir_serde(rename = "exposureAlternative")]
    pub exposure_alternative: Option<Reference>,
    /// What outcome?
    pub outcome: Option<Reference>,
}
