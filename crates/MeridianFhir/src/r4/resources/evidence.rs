use crate::r4::*;
use crate::FhirSerde;

/// FHIR Evidence type
///
/// The Evidence resource describes the conditional state (population and any
/// exposures being compared within the population) and outcome (if specified)
/// that the knowledge (evidence, assertion, recommendation) is about.
///
/// See: [Evidence](http://hl7.org/fhir/StructureDefinition/Evidence)
#[derive(Debug, Clone, PartialEq, Default, FhirSerde)]
#[fhir_type(name = "Evidence", kind = "domain_resource")]
pub struct Evidence {
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
    /// Canonical identifier for this evidence, represented as a URI (globally unique)
    pub url: Option<Uri>,
    /// Additional identifier for the evidence
    pub identifier: Option<Vec<Identifier>>,
    /// Business version of the evidence
    pub version: Option<String>,
    /// Name for this evidence (computer friendly)
    pub name: Option<String>,
    /// Name for this evidence (human friendly)
    pub title: Option<String>,
    /// Title for use in informal contexts
    #[fhir_serde(rename = "shortTitle")]
    pub short_title: Option<String>,
    /// Subordinate title of the Evidence
    pub subtitle: Option<String>,
    /// draft | active | retired | unknown
    pub status: Code,
    /// Date last changed
    pub date: Option<DateTime>,
    /// Name of the publisher (organization or individual)
    pub publisher: Option<String>,
    /// Contact details for the publisher
    pub contact: Option<Vec<ContactDetail>>,
    /// Natural language description of the evidence
    pub description: Option<Markdown>,
    /// Used for footnotes or explanatory notes
    pub note: Option<Vec<Annotation>>,
    /// The context that the content is intended to support
    #[fhir_serde(rename = "useContext")]
    pub use_context: Option<Vec<UsageContext>>,
    /// Intended jurisdiction for evidence (if applicable)
    pub jurisdiction: Option<Vec<CodeableConcept>>,
    /// Use and/or publishing restrictions
    pub copyright: Option<Markdown>,
    /// When the evidence was approved by publisher
    #[fhir_serde(rename = "approvalDate")]
    pub approval_date: Option<Date>,
    /// When the evidence was last reviewed
    #[fhir_serde(rename = "lastReviewDate")]
    pub last_review_date: Option<Date>,
    /// When the evidence is expected to be used
    #[fhir_serde(rename = "effectivePeriod")]
    pub effective_period: Option<Period>,
    /// The category of the Evidence, such as Education, Treatment, Assessment, etc.
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
    /// What population?
    #[fhir_serde(rename = "exposureBackground")]
    pub exposure_background: Reference,
    /// What exposure?
    #[fhir_serde(rename = "exposureVariant")]
    pub exposure_variant: Option<Vec<Reference>>,
    /// What outcome?
    pub outcome: Option<Vec<Reference>>,
}
