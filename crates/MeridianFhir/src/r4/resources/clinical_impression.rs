use crate::r4::*;
use crate::FhirSerde;

/// Choice of types for the effective\[x\] field in ClinicalImpression
#[derive(Debug, Clone, PartialEq, FhirSerde)]
#[fhir_choice_element(base_name = "effective")]
pub enum ClinicalImpressionEffective {
    /// Variant accepting the DateTime type.
    #[fhir_serde(rename = "effectiveDateTime")]
    DateTime(DateTime),
    /// Variant accepting the Period type.
    #[fhir_serde(rename = "effectivePeriod")]
    Period(Period),
}

/// FHIR ClinicalImpression type
///
/// A record of a clinical assessment performed to determine what problem(s) may
/// affect the patient and before planning the treatments or management
/// strategies that are best to manage a patient's condition. Assessments are
/// often 1:1 with a clinical consultation / encounter, but this varies greatly
/// depending on the clinical workflow. This resource is called
/// "ClinicalImpression" rather than "ClinicalAssessment" to avoid confusion with
/// the recording of assessment tools such as Apgar score.
///
/// See: [ClinicalImpression](http://hl7.org/fhir/StructureDefinition/ClinicalImpression)
#[derive(Debug, Clone, PartialEq, Default, FhirSerde)]
#[fhir_type(name = "ClinicalImpression", kind = "domain_resource")]
pub struct ClinicalImpression {
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
    /// Identifies the workflow status of the assessment. Only use: \['in-progress', 'completed', 'entered-in-error'\]
    pub status: Code,
    /// Reason for current status
    #[fhir_serde(rename = "statusReason")]
    pub status_reason: Option<CodeableConcept>,
    /// Kind of assessment performed
    pub code: Option<CodeableConcept>,
    /// Why/how the assessment was performed
    pub description: Option<Markdown>,
    /// Patient or group assessed
    pub subject: Reference,
    /// Encounter created as part of
    pub encounter: Option<Reference>,
    /// Time of assessment
    #[fhir_serde(flatten)]
    pub effective: Option<ClinicalImpressionEffective>,
    /// When the assessment was documented
    pub date: Option<DateTime>,
    /// The clinician performing the assessment
    pub assessor: Option<Reference>,
    /// Reference to last assessment
    pub previous: Option<Reference>,
    /// Relevant impressions of patient state
    pub problem: Option<Vec<Reference>>,
    /// One or more sets of investigations (signs, symptoms, etc.)
    pub investigation: Option<Vec<ClinicalImpressionInvestigation>>,
    /// Clinical Protocol followed
    pub protocol: Option<Vec<String>>,
    /// Summary of the assessment
    pub summary: Option<String>,
    /// Possible or likely findings and diagnoses
    pub finding: Option<Vec<ClinicalImpressionFinding>>,
    /// Estimate of likely outcome
    #[fhir_serde(rename = "prognosisCodeableConcept")]
    pub prognosis_codeable_concept: Option<Vec<CodeableConcept>>,
    /// RiskAssessment expressing likely outcome
    #[fhir_serde(rename = "prognosisReference")]
    pub prognosis_reference: Option<Vec<Reference>>,
    /// Information supporting the clinical impression
    #[fhir_serde(rename = "supportingInfo")]
    pub supporting_info: Option<Vec<Reference>>,
    /// Comments made about the ClinicalImpression
    pub note: Option<Vec<Annotation>>,
}

/// Possible or likely findings and diagnoses
#[derive(Debug, Clone, PartialEq, Default, FhirSerde)]
#[fhir_type(name = "ClinicalImpressionFinding", kind = "backbone_element")]
pub struct ClinicalImpressionFinding {
    /// Unique id for inter-element referencing
    pub id: Option<std::string::String>,
    /// Additional content defined by implementations
    pub extension: Option<Vec<Extension>>,
    /// Extensions that cannot be ignored even if unrecognized
    #[fhir_serde(rename = "modifierExtension")]
    pub modifier_extension: Option<Vec<Extension>>,
    /// What was found
    #[fhir_serde(rename = "itemCodeableConcept")]
    pub item_codeable_concept: Option<CodeableConcept>,
    /// What was found
    #[fhir_serde(rename = "itemReference")]
    pub item_reference: Option<Reference>,
    /// Which investigations support finding
    pub basis: Option<String>,
}

/// One or more sets of investigations (signs, symptoms, etc.)
#[derive(Debug, Clone, PartialEq, Default, FhirSerde)]
#[fhir_type(name = "ClinicalImpressionInvestigation", kind = "backbone_element")]
pub struct ClinicalImpressionInvestigation {
    /// Unique id for inter-element referencing
    pub id: Option<std::string::String>,
    /// Additional content defined by implementations
    pub extension: Option<Vec<Extension>>,
    /// Extensions that cannot be ignored even if unrecognized
    #[fhir_serde(rename = "modifierExtension")]
    pub modifier_extension: Option<Vec<Extension>>,
    /// A name/code for the set
    pub code: CodeableConcept,
    /// Record of a specific investigation
    pub item: Option<Vec<Reference>>,
}
