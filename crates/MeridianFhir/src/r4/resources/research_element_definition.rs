use crate::r4::*;
use crate::FhirSerde;

/// Choice of types for the subject\[x\] field in ResearchElementDefinition
#[derive(Debug, Clone, PartialEq, FhirSerde)]
#[fhir_choice_element(base_name = "subject")]
pub enum ResearchElementDefinitionSubject {
    /// Variant accepting the CodeableConcept type.
    #[fhir_serde(rename = "subjectCodeableConcept")]
    CodeableConcept(CodeableConcept),
    /// Variant accepting the Reference type.
    #[fhir_serde(rename = "subjectReference")]
    Reference(Reference),
}

/// FHIR ResearchElementDefinition type
///
/// The ResearchElementDefinition resource describes a "PICO" element that
/// knowledge (evidence, assertion, recommendation) is about.
///
/// See: [ResearchElementDefinition](http://hl7.org/fhir/StructureDefinition/ResearchElementDefinition)
#[derive(Debug, Clone, PartialEq, Default, FhirSerde)]
#[fhir_type(name = "ResearchElementDefinition", kind = "domain_resource")]
pub struct ResearchElementDefinition {
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
    /// Canonical identifier for this research element definition, represented as a URI (globally unique)
    pub url: Option<Uri>,
    /// Additional identifier for the research element definition
    pub identifier: Option<Vec<Identifier>>,
    /// Business version of the research element definition
    pub version: Option<String>,
    /// Name for this research element definition (computer friendly)
    pub name: Option<String>,
    /// Name for this research element definition (human friendly)
    pub title: Option<String>,
    /// Title for use in informal contexts
    #[fhir_serde(rename = "shortTitle")]
    pub short_title: Option<String>,
    /// Subordinate title of the ResearchElementDefinition
    pub subtitle: Option<String>,
    /// The status of this research element definition. Enables tracking the life-cycle of the content.
    pub status: Code,
    /// For testing purposes, not real usage
    pub experimental: Option<Boolean>,
    /// E.g. Patient, Practitioner, RelatedPerson, Organization, Location, Device.
    #[fhir_serde(flatten)]
    pub subject: Option<ResearchElementDefinitionSubject>,
    /// Date last changed
    pub date: Option<DateTime>,
    /// Name of the publisher (organization or individual)
    pub publisher: Option<String>,
    /// Contact details for the publisher
    pub contact: Option<Vec<ContactDetail>>,
    /// Natural language description of the research element definition
    pub description: Option<Markdown>,
    /// Used for footnotes or explanatory notes
    pub comment: Option<Vec<String>>,
    /// The context that the content is intended to support
    #[fhir_serde(rename = "useContext")]
    pub use_context: Option<Vec<UsageContext>>,
    /// Intended jurisdiction for research element definition (if applicable)
    pub jurisdiction: Option<Vec<CodeableConcept>>,
    /// Why this research element definition is defined
    pub purpose: Option<Markdown>,
    /// Describes the clinical usage of the ResearchElementDefinition
    pub usage: Option<String>,
    /// Use and/or publishing restrictions
    pub copyright: Option<Markdown>,
    /// When the research element definition was approved by publisher
    #[fhir_serde(rename = "approvalDate")]
    pub approval_date: Option<Date>,
    /// When the research element definition was last reviewed
    #[fhir_serde(rename = "lastReviewDate")]
    pub last_review_date: Option<Date>,
    /// When the research element definition is expected to be used
    #[fhir_serde(rename = "effectivePeriod")]
    pub effective_period: Option<Period>,
    /// The category of the ResearchElementDefinition, such as Education, Treatment, Assessment, etc.
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
    /// Logic used by the ResearchElementDefinition
    pub library: Option<Vec<Canonical>>,
    /// The type of research element, a population, an exposure, or an outcome
    #[fhir_serde(rename = "type")]
    pub r#type: Code,
    /// The type of the outcome (e.g. Dichotomous, Continuous, or Descriptive).
    #[fhir_serde(rename = "variableType")]
    pub variable_type: Option<Code>,
    /// What defines the members of the research element
    pub characteristic: Vec<ResearchElementDefinitionCharacteristic>,
}

/// Choice of types for the definition\[x\] field in ResearchElementDefinitionCharacteristic
#[derive(Debug, Clone, PartialEq, FhirSerde)]
#[fhir_choice_element(base_name = "definition")]
pub enum ResearchElementDefinitionCharacteristicDefinition {
    /// Variant accepting the CodeableConcept type.
    #[fhir_serde(rename = "definitionCodeableConcept")]
    CodeableConcept(CodeableConcept),
    /// Variant accepting the Canonical type.
    #[fhir_serde(rename = "definitionCanonical")]
    Canonical(Canonical),
    /// Variant accepting the Expression type.
    #[fhir_serde(rename = "definitionExpression")]
    Expression(Expression),
    /// Variant accepting the DataRequirement type.
    #[fhir_serde(rename = "definitionDataRequirement")]
    DataRequirement(DataRequirement),
}

/// Choice of types for the studyEffective\[x\] field in ResearchElementDefinitionCharacteristic
#[derive(Debug, Clone, PartialEq, FhirSerde)]
#[fhir_choice_element(base_name = "studyEffective")]
pub enum ResearchElementDefinitionCharacteristicStudyEffective {
    /// Variant accepting the DateTime type.
    #[fhir_serde(rename = "studyEffectiveDateTime")]
    DateTime(DateTime),
    /// Variant accepting the Period type.
    #[fhir_serde(rename = "studyEffectivePeriod")]
    Period(Period),
    /// Variant accepting the Duration type.
    #[fhir_serde(rename = "studyEffectiveDuration")]
    Duration(Duration),
    /// Variant accepting the Timing type.
    #[fhir_serde(rename = "studyEffectiveTiming")]
    Timing(Timing),
}

/// Choice of types for the participantEffective\[x\] field in ResearchElementDefinitionCharacteristic
#[derive(Debug, Clone, PartialEq, FhirSerde)]
#[fhir_choice_element(base_name = "participantEffective")]
pub enum ResearchElementDefinitionCharacteristicParticipantEffective {
    /// Variant accepting the DateTime type.
    #[fhir_serde(rename = "participantEffectiveDateTime")]
    DateTime(DateTime),
    /// Variant accepting the Period type.
    #[fhir_serde(rename = "participantEffectivePeriod")]
    Period(Period),
    /// Variant accepting the Duration type.
    #[fhir_serde(rename = "participantEffectiveDuration")]
    Duration(Duration),
    /// Variant accepting the Timing type.
    #[fhir_serde(rename = "participantEffectiveTiming")]
    Timing(Timing),
}

/// What defines the members of the research element
#[derive(Debug, Clone, PartialEq, FhirSerde)]
#[fhir_type(name = "ResearchElementDefinitionCharacteristic", kind = "backbone_element")]
pub struct ResearchElementDefinitionCharacteristic {
    /// Unique id for inter-element referencing
    pub id: Option<std::string::String>,
    /// Additional content defined by implementations
    pub extension: Option<Vec<Extension>>,
    /// Extensions that cannot be ignored even if unrecognized
    #[fhir_serde(rename = "modifierExtension")]
    pub modifier_extension: Option<Vec<Extension>>,
    /// What code or expression defines members?
    #[fhir_serde(flatten)]
    pub definition: ResearchElementDefinitionCharacteristicDefinition,
    /// What code/value pairs define members?
    #[fhir_serde(rename = "usageContext")]
    pub usage_context: Option<Vec<UsageContext>>,
    /// Whether the characteristic includes or excludes members
    pub exclude: Option<Boolean>,
    /// What unit is the outcome described in?
    #[fhir_serde(rename = "unitOfMeasure")]
    pub unit_of_measure: Option<CodeableConcept>,
    /// What time period does the study cover
    #[fhir_serde(rename = "studyEffectiveDescription")]
    pub study_effective_description: Option<String>,
    /// What time period does the study cover
    #[fhir_serde(flatten)]
    pub study_effective: Option<ResearchElementDefinitionCharacteristicStudyEffective>,
    /// Observation time from study start
    #[fhir_serde(rename = "studyEffectiveTimeFromStart")]
    pub study_effective_time_from_start: Option<Duration>,
    /// Indicates how elements are aggregated within the study effective period
    #[fhir_serde(rename = "studyEffectiveGroupMeasure")]
    pub study_effective_group_measure: Option<Code>,
    /// What time period do participants cover
    #[fhir_serde(rename = "participantEffectiveDescription")]
    pub participant_effective_description: Option<String>,
    /// What time period do participants cover
    #[fhir_serde(flatten)]
    pub participant_effective: Option<ResearchElementDefinitionCharacteristicParticipantEffective>,
    /// Observation time from study start
    #[fhir_serde(rename = "participantEffectiveTimeFromStart")]
    pub participant_effective_time_from_start: Option<Duration>,
    /// Indicates how elements are aggregated within the study effective period
    #[fhir_serde(rename = "participantEffectiveGroupMeasure")]
    pub participant_effective_group_measure: Option<Code>,
}
