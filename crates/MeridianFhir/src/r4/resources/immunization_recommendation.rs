use crate::r4::*;
use crate::FhirSerde;

/// FHIR ImmunizationRecommendation type
///
/// A patient's point-in-time set of recommendations (i.e. forecasting) according
/// to a published schedule with optional supporting justification.
///
/// See: [ImmunizationRecommendation](http://hl7.org/fhir/StructureDefinition/ImmunizationRecommendation)
#[derive(Debug, Clone, PartialEq, Default, FhirSerde)]
#[fhir_type(name = "ImmunizationRecommendation", kind = "domain_resource")]
pub struct ImmunizationRecommendation {
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
    /// Who this profile is for
    pub patient: Reference,
    /// Date recommendation(s) created
    pub date: DateTime,
    /// Who is responsible for protocol
    pub authority: Option<Reference>,
    /// Vaccine administration recommendations
    pub recommendation: Vec<ImmunizationRecommendationRecommendation>,
}

/// Choice of types for the doseNumber\[x\] field in ImmunizationRecommendationRecommendation
#[derive(Debug, Clone, PartialEq, FhirSerde)]
#[fhir_choice_element(base_name = "doseNumber")]
pub enum ImmunizationRecommendationRecommendationDoseNumber {
    /// Variant accepting the PositiveInt type.
    #[fhir_serde(rename = "doseNumberPositiveInt")]
    PositiveInt(PositiveInt),
    /// Variant accepting the String type.
    #[fhir_serde(rename = "doseNumberString")]
    String(String),
}

/// Choice of types for the seriesDoses\[x\] field in ImmunizationRecommendationRecommendation
#[derive(Debug, Clone, PartialEq, FhirSerde)]
#[fhir_choice_element(base_name = "seriesDoses")]
pub enum ImmunizationRecommendationRecommendationSeriesDoses {
    /// Variant accepting the PositiveInt type.
    #[fhir_serde(rename = "seriesDosesPositiveInt")]
    PositiveInt(PositiveInt),
    /// Variant accepting the String type.
    #[fhir_serde(rename = "seriesDosesString")]
    String(String),
}

/// Vaccine administration recommendations
#[derive(Debug, Clone, PartialEq, Default, FhirSerde)]
#[fhir_type(name = "ImmunizationRecommendationRecommendation", kind = "backbone_element")]
pub struct ImmunizationRecommendationRecommendation {
    /// Unique id for inter-element referencing
    pub id: Option<std::string::String>,
    /// Additional content defined by implementations
    pub extension: Option<Vec<Extension>>,
    /// Extensions that cannot be ignored even if unrecognized
    #[fhir_serde(rename = "modifierExtension")]
    pub modifier_extension: Option<Vec<Extension>>,
    /// Vaccine or vaccine group recommendation applies to
    #[fhir_serde(rename = "vaccineCode")]
    pub vaccine_code: Option<Vec<CodeableConcept>>,
    /// Disease to be immunized against
    #[fhir_serde(rename = "targetDisease")]
    pub target_disease: Option<CodeableConcept>,
    /// Vaccine which is contraindicated to fulfill the recommendation
    #[fhir_serde(rename = "contraindicatedVaccineCode")]
    pub contraindicated_vaccine_code: Option<Vec<CodeableConcept>>,
    /// Vaccine recommendation status
    #[fhir_serde(rename = "forecastStatus")]
    pub forecast_status: CodeableConcept,
    /// Vaccine administration status reason
    #[fhir_serde(rename = "forecastReason")]
    pub forecast_reason: Option<Vec<CodeableConcept>>,
    /// Dates governing proposed immunization
    #[fhir_serde(rename = "dateCriterion")]
    pub date_criterion: Option<Vec<ImmunizationRecommendationRecommendationDateCriterion>>,
    /// Protocol details
    pub description: Option<String>,
    /// Name of vaccination series
    pub series: Option<String>,
    /// Recommended dose number within series
    #[fhir_serde(flatten)]
    pub dose_number: Option<ImmunizationRecommendationRecommendationDoseNumber>,
    /// Recommended number of doses for immunity
    #[fhir_serde(flatten)]
    pub series_doses: Option<ImmunizationRecommendationRecommendationSeriesDoses>,
    /// Past immunizations supporting recommendation
    #[fhir_serde(rename = "supportingImmunization")]
    pub supporting_immunization: Option<Vec<Reference>>,
    /// Patient observations supporting recommendation
    #[fhir_serde(rename = "supportingPatientInformation")]
    pub supporting_patient_information: Option<Vec<Reference>>,
}

/// Dates governing proposed immunization
#[derive(Debug, Clone, PartialEq, Default, FhirSerde)]
#[fhir_type(name = "ImmunizationRecommendationRecommendationDateCriterion", kind = "backbone_element")]
pub struct ImmunizationRecommendationRecommendationDateCriterion {
    /// Unique id for inter-element referencing
    pub id: Option<std::string::String>,
    /// Additional content defined by implementations
    pub extension: Option<Vec<Extension>>,
    /// Extensions that cannot be ignored even if unrecognized
    #[fhir_serde(rename = "modifierExtension")]
    pub modifier_extension: Option<Vec<Extension>>,
    /// Type of date
    pub code: CodeableConcept,
    /// Recommended date
    pub value: DateTime,
}
