use crate::r4::*;
use crate::FhirSerde;

/// Choice of types for the doseNumber\[x\] field in ImmunizationEvaluation
#[derive(Debug, Clone, PartialEq, FhirSerde)]
#[fhir_choice_element(base_name = "doseNumber")]
pub enum ImmunizationEvaluationDoseNumber {
    /// Variant accepting the PositiveInt type.
    #[fhir_serde(rename = "doseNumberPositiveInt")]
    PositiveInt(PositiveInt),
    /// Variant accepting the String type.
    #[fhir_serde(rename = "doseNumberString")]
    String(String),
}

/// Choice of types for the seriesDoses\[x\] field in ImmunizationEvaluation
#[derive(Debug, Clone, PartialEq, FhirSerde)]
#[fhir_choice_element(base_name = "seriesDoses")]
pub enum ImmunizationEvaluationSeriesDoses {
    /// Variant accepting the PositiveInt type.
    #[fhir_serde(rename = "seriesDosesPositiveInt")]
    PositiveInt(PositiveInt),
    /// Variant accepting the String type.
    #[fhir_serde(rename = "seriesDosesString")]
    String(String),
}

/// FHIR ImmunizationEvaluation type
///
/// Describes a comparison of an immunization event against published
/// recommendations to determine if the administration is "valid" in relation to
/// those recommendations.
///
/// See: [ImmunizationEvaluation](http://hl7.org/fhir/StructureDefinition/ImmunizationEvaluation)
#[derive(Debug, Clone, PartialEq, Default, FhirSerde)]
#[fhir_type(name = "ImmunizationEvaluation", kind = "domain_resource")]
pub struct ImmunizationEvaluation {
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
    /// Business identifier
    pub identifier: Option<Vec<Identifier>>,
    /// completed | entered-in-error
    pub status: Code,
    /// Who this evaluation is for
    pub patient: Reference,
    /// Date evaluation was performed
    pub date: Option<DateTime>,
    /// Who is responsible for publishing the recommendations
    pub authority: Option<Reference>,
    /// Evaluation target disease
    #[fhir_serde(rename = "targetDisease")]
    pub target_disease: CodeableConcept,
    /// Immunization being evaluated
    #[fhir_serde(rename = "immunizationEvent")]
    pub immunization_event: Reference,
    /// Status of the dose relative to published recommendations
    #[fhir_serde(rename = "doseStatus")]
    pub dose_status: CodeableConcept,
    /// Reason for the dose status
    #[fhir_serde(rename = "doseStatusReason")]
    pub dose_status_reason: Option<Vec<CodeableConcept>>,
    /// Evaluation notes
    pub description: Option<String>,
    /// Name of vaccine series
    pub series: Option<String>,
    /// Dose number within series
    #[fhir_serde(flatten)]
    pub dose_number: Option<ImmunizationEvaluationDoseNumber>,
    /// Recommended number of doses for immunity
    #[fhir_serde(flatten)]
    pub series_doses: Option<ImmunizationEvaluationSeriesDoses>,
}
