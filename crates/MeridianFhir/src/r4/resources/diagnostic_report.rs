use crate::r4::*;
use crate::FhirSerde;

/// Choice of types for the effective\[x\] field in DiagnosticReport
#[derive(Debug, Clone, PartialEq, FhirSerde)]
#[fhir_choice_element(base_name = "effective")]
pub enum DiagnosticReportEffective {
    /// Variant accepting the DateTime type.
    #[fhir_serde(rename = "effectiveDateTime")]
    DateTime(DateTime),
    /// Variant accepting the Period type.
    #[fhir_serde(rename = "effectivePeriod")]
    Period(Period),
}

/// FHIR DiagnosticReport type
///
/// The findings and interpretation of diagnostic tests performed on patients,
/// groups of patients, devices, and locations, and/or specimens derived from
/// these. The report includes clinical context such as requesting and provider
/// information, and some mix of atomic results, images, textual and coded
/// interpretations, and formatted representation of diagnostic reports.
///
/// See: [DiagnosticReport](http://hl7.org/fhir/StructureDefinition/DiagnosticReport)
#[derive(Debug, Clone, PartialEq, Default, FhirSerde)]
#[fhir_type(name = "DiagnosticReport", kind = "domain_resource")]
pub struct DiagnosticReport {
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
    /// Business identifier for report
    pub identifier: Option<Vec<Identifier>>,
    /// What was requested
    #[fhir_serde(rename = "basedOn")]
    pub based_on: Option<Vec<Reference>>,
    /// The status of the diagnostic report
    pub status: Code,
    /// Service category
    pub category: Option<Vec<CodeableConcept>>,
    /// Name/Code for this diagnostic report
    pub code: CodeableConcept,
    /// The subject of the report - usually, but not always, the patient
    pub subject: Option<Reference>,
    /// Health care event when test ordered
    pub encounter: Option<Reference>,
    /// Clinically relevant time/time-period for report
    #[fhir_serde(flatten)]
    pub effective: Option<DiagnosticReportEffective>,
    /// DateTime this version was made
    pub issued: Option<Instant>,
    /// Responsible Diagnostic Service
    pub performer: Option<Vec<Reference>>,
    /// Primary result interpreter
    #[fhir_serde(rename = "resultsInterpreter")]
    pub results_interpreter: Option<Vec<Reference>>,
    /// Specimens this report is based on
    pub specimen: Option<Vec<Reference>>,
    /// Observations
    pub result: Option<Vec<Reference>>,
    /// Reference to full details of imaging associated with the diagnostic report
    #[fhir_serde(rename = "imagingStudy")]
    pub imaging_study: Option<Vec<Reference>>,
    /// Key images associated with this report
    pub media: Option<Vec<DiagnosticReportMedia>>,
    /// Clinical conclusion (interpretation) of test results
    pub conclusion: Option<String>,
    /// Codes for the clinical conclusion of test results
    #[fhir_serde(rename = "conclusionCode")]
    pub conclusion_code: Option<Vec<CodeableConcept>>,
    /// Entire report as issued
    #[fhir_serde(rename = "presentedForm")]
    pub presented_form: Option<Vec<Attachment>>,
}

/// Key images associated with this report
#[derive(Debug, Clone, PartialEq, Default, FhirSerde)]
#[fhir_type(name = "DiagnosticReportMedia", kind = "backbone_element")]
pub struct DiagnosticReportMedia {
    /// Unique id for inter-element referencing
    pub id: Option<std::string::String>,
    /// Additional content defined by implementations
    pub extension: Option<Vec<Extension>>,
    /// Extensions that cannot be ignored even if unrecognized
    #[fhir_serde(rename = "modifierExtension")]
    pub modifier_extension: Option<Vec<Extension>>,
    /// Comment about the image (e.g. explanation).
    pub comment: Option<String>,
    /// Reference to the image source
    pub link: Reference,
}
