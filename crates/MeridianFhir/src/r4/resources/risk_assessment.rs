use crate::r4::*;
use crate::FhirSerde;

/// Choice of types for the occurrence\[x\] field in RiskAssessment
#[derive(Debug, Clone, PartialEq, FhirSerde)]
#[fhir_choice_element(base_name = "occurrence")]
pub enum RiskAssessmentOccurrence {
    /// Variant accepting the DateTime type.
    #[fhir_serde(rename = "occurrenceDateTime")]
    DateTime(DateTime),
    /// Variant accepting the Period type.
    #[fhir_serde(rename = "occurrencePeriod")]
    Period(Period),
}

/// FHIR RiskAssessment type
///
/// An assessment of the likely outcome(s) for a patient or other subject as well
/// as the likelihood of each outcome.
///
/// See: [RiskAssessment](http://hl7.org/fhir/StructureDefinition/RiskAssessment)
#[derive(Debug, Clone, PartialEq, Default, FhirSerde)]
#[fhir_type(name = "RiskAssessment", kind = "domain_resource")]
pub struct RiskAssessment {
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
    /// Unique identifier for the assessment
    pub identifier: Option<Vec<Identifier>>,
    /// Request fulfilled by this assessment
    #[fhir_serde(rename = "basedOn")]
    pub based_on: Option<Reference>,
    /// Part of this occurrence
    pub parent: Option<Reference>,
    /// The status of the RiskAssessment, using the same statuses as an Observation
    pub status: Code,
    /// Evaluation mechanism
    pub method: Option<CodeableConcept>,
    /// Type of assessment
    pub code: Option<CodeableConcept>,
    /// Who/what does assessment apply to?
    pub subject: Reference,
    /// Where was assessment performed?
    pub encounter: Option<Reference>,
    /// When was assessment made?
    #[fhir_serde(flatten)]
    pub occurrence: Option<RiskAssessmentOccurrence>,
    /// Condition assessed
    pub condition: Option<Reference>,
    /// Who did assessment?
    pub performer: Option<Reference>,
    /// Why the assessment was necessary?
    #[fhir_serde(rename = "reasonCode")]
    pub reason_code: Option<Vec<CodeableConcept>>,
    /// Why the assessment was necessary?
    #[fhir_serde(rename = "reasonReference")]
    pub reason_reference: Option<Vec<Reference>>,
    /// Information used in assessment
    pub basis: Option<Vec<Reference>>,
    /// Outcome predicted
    pub prediction: Option<Vec<RiskAssessmentPrediction>>,
    /// How to reduce risk
    pub mitigation: Option<String>,
    /// Comments on the risk assessment
    pub note: Option<Vec<Annotation>>,
}

/// Choice of types for the probability\[x\] field in RiskAssessmentPrediction
#[derive(Debug, Clone, PartialEq, FhirSerde)]
#[fhir_choice_element(base_name = "probability")]
pub enum RiskAssessmentPredictionProbability {
    /// Variant accepting the Decimal type.
    #[fhir_serde(rename = "probabilityDecimal")]
    Decimal(Decimal),
    /// Variant accepting the Range type.
    #[fhir_serde(rename = "probabilityRange")]
    Range(Range),
}

/// Choice of types for the when\[x\] field in RiskAssessmentPrediction
#[derive(Debug, Clone, PartialEq, FhirSerde)]
#[fhir_choice_element(base_name = "when")]
pub enum RiskAssessmentPredictionWhen {
    /// Variant accepting the Period type.
    #[fhir_serde(rename = "whenPeriod")]
    Period(Period),
    /// Variant accepting the Range type.
    #[fhir_serde(rename = "whenRange")]
    Range(Range),
}

/// Outcome predicted
#[derive(Debug, Clone, PartialEq, Default, FhirSerde)]
#[fhir_type(name = "RiskAssessmentPrediction", kind = "backbone_element")]
pub struct RiskAssessmentPrediction {
    /// Unique id for inter-element referencing
    pub id: Option<std::string::String>,
    /// Additional content defined by implementations
    pub extension: Option<Vec<Extension>>,
    /// Extensions that cannot be ignored even if unrecognized
    #[fhir_serde(rename = "modifierExtension")]
    pub modifier_extension: Option<Vec<Extension>>,
    /// Possible outcome for the subject
    pub outcome: Option<CodeableConcept>,
    /// Likelihood of specified outcome
    #[fhir_serde(flatten)]
    pub probability: Option<RiskAssessmentPredictionProbability>,
    /// Likelihood of specified outcome as a qualitative value
    #[fhir_serde(rename = "qualitativeRisk")]
    pub qualitative_risk: Option<CodeableConcept>,
    /// Relative likelihood
    #[fhir_serde(rename = "relativeRisk")]
    pub relative_risk: Option<Decimal>,
    /// Timeframe or age range
    #[fhir_serde(flatten)]
    pub when: Option<RiskAssessmentPredictionWhen>,
    /// Explanation of prediction
    pub rationale: Option<String>,
}
