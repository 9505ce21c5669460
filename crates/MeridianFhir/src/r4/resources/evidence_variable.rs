use crate::r4::*;
use crate::FhirSerde;

/// FHIR EvidenceVariable type
///
/// The EvidenceVariable resource describes a "PICO" element that knowledge
/// (evidence, assertion, recommendation) is about.
///
/// See: [EvidenceVariable](http://hl7.org/fhir/StructureDefinition/EvidenceVariable)
#[derive(Debug, Clone, PartialEq, Default, FhirSerde)]
#[fhir_type(name = "EvidenceVariable", kind = "domain_resource")]
pub struct EvidenceVariable {
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
    /// Canonical identifier for this evidence variable, represented as a URI (globally unique)
    pub url: Option<Uri>,
    /// Additional identifier for the evidence variable
    pub identifier: Option<Vec<Identifier>>,
    /// Business version of the evidence variable
    pub version: Option<String>,
    /// Name for this evidence variable (computer friendly)
    pub name: Option<String>,
    /// Name for this evidence variable (human friendly)
    pub title: Option<String>,
    /// Title for use in informal contexts
    #[fhir_serde(rename = "shortTitle")]
    pub short_title: Option<String>,
    /// Subordinate title of the EvidenceVariable
    pub subtitle: Option<String>,
    /// The status of this evidence variable. Enables tracking the life-cycle of the content.
    pub status: Code,
    /// Date last changed
    pub date: Option<DateTime>,
    /// Name of the publisher (organization or individual)
    pub publisher: Option<String>,
    /// Contact details for the publisher
    pub contact: Option<Vec<ContactDetail>>,
    /// Natural language description of the evidence variable
    pub description: Option<Markdown>,
    /// Used for footnotes or explanatory notes
    pub note: Option<Vec<Annotation>>,
    /// The context that the content is intended to support
    #[fhir_serde(rename = "useContext")]
    pub use_context: Option<Vec<UsageContext>>,
    /// Intended jurisdiction for evidence variable (if applicable)
    pub jurisdiction: Option<Vec<CodeableConcept>>,
    /// Use and/or publishing restrictions
    pub copyright: Option<Markdown>,
    /// When the evidence variable was approved by publisher
    #[fhir_serde(rename = "approvalDate")]
    pub approval_date: Option<Date>,
    /// When the evidence variable was last reviewed
    #[fhir_serde(rename = "lastReviewDate")]
    pub last_review_date: Option<Date>,
    /// When the evidence variable is expected to be used
    #[fhir_serde(rename = "effectivePeriod")]
    pub effective_period: Option<Period>,
    /// The category of the EvidenceVariable, such as Education, Treatment, Assessment, etc.
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
    /// The type of evidence element, a population, an exposure, or an outcome
    #[fhir_serde(rename = "type")]
    pub r#type: Option<Code>,
    /// What defines the members of the evidence element
    pub characteristic: Vec<EvidenceVariableCharacteristic>,
}

/// Choice of types for the definition\[x\] field in EvidenceVariableCharacteristic
#[derive(Debug, Clone, PartialEq, FhirSerde)]
#[fhir_choice_element(base_name = "definition")]
pub enum EvidenceVariableCharacteristicDefinition {
    /// Variant accepting the Reference type.
    #[fhir_serde(rename = "definitionReference")]
    Reference(Reference),
    /// Variant accepting the Canonical type.
    #[fhir_serde(rename = "definitionCanonical")]
    Canonical(Canonical),
    /// Variant accepting the CodeableConcept type.
    #[fhir_serde(rename = "definitionCodeableConcept")]
    CodeableConcept(CodeableConcept),
    /// Variant accepting the Expression type.
    #[fhir_serde(rename = "definitionExpression")]
    Expression(Expression),
    /// Variant accepting the DataRequirement type.
    #[fhir_serde(rename = "definitionDataRequirement")]
    DataRequirement(DataRequirement),
    /// Variant accepting the TriggerDefinition type.
    #[fhir_serde(rename = "definitionTriggerDefinition")]
    TriggerDefinition(TriggerDefinition),
}

/// Choice of types for the participantEffective\[x\] field in EvidenceVariableCharacteristic
#[derive(Debug, Clone, PartialEq, FhirSerde)]
#[fhir_choice_element(base_name = "participantEffective")]
pub enum EvidenceVariableCharacteristicParticipantEffective {
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

/// What defines the members of the evidence element
#[derive(Debug, Clone, PartialEq, FhirSerde)]
#[fhir_type(name = "EvidenceVariableCharacteristic", kind = "backbone_element")]
pub struct EvidenceVariableCharacteristic {
    /// Unique id for inter-element referencing
    pub id: Option<std::string::String>,
    /// Additional content defined by implementations
    pub extension: Option<Vec<Extension>>,
    /// Extensions that cannot be ignored even if unrecognized
    #[fhir_serde(rename = "modifierExtension")]
    pub modifier_extension: Option<Vec<Extension>>,
    /// Natural language description of the characteristic
    pub description: Option<String>,
    /// What code or expression defines members?
    #[fhir_serde(flatten)]
    pub definition: EvidenceVariableCharacteristicDefinition,
    /// What code/value pairs define members?
    #[fhir_serde(rename = "usageContext")]
    pub usage_context: Option<Vec<UsageContext>>,
    /// Whether the characteristic includes or excludes members
    pub exclude: Option<Boolean>,
    /// What time period do participants cover
    #[fhir_serde(flatten)]
    pub participant_effective: Option<EvidenceVariableCharacteristicParticipantEffective>,
    /// Observation time from study start
    #[fhir_serde(rename = "timeFromStart")]
    pub time_from_start: Option<Duration>,
    /// Indicates how elements are aggregated within the study effective period
    #[fhir_serde(rename = "groupMeasure")]
    pub group_measure: Option<Code>,
}
