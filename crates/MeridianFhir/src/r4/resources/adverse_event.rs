use crate::r4::*;
use crate::FhirSerde;

/// FHIR AdverseEvent type
///
/// Actual or potential/avoided event causing unintended physical injury
/// resulting from or contributed to by medical care, a research study or other
/// healthcare setting factors that requires additional monitoring, treatment, or
/// hospitalization, or that results in death.
///
/// See: [AdverseEvent](http://hl7.org/fhir/StructureDefinition/AdverseEvent)
#[derive(Debug, Clone, PartialEq, Default, FhirSerde)]
#[fhir_type(name = "AdverseEvent", kind = "domain_resource")]
pub struct AdverseEvent {
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
    /// Business identifier for the event
    pub identifier: Option<Identifier>,
    /// Whether the event actually happened, or just had the potential to. Note that this is independent of whether anyone was affected or harmed or how severely.
    pub actuality: Code,
    /// product-problem | product-quality | product-use-error | wrong-dose | incorrect- prescribing-information | wrong-technique | wrong-route-of-administration | wrong-rate | wrong-duration | wrong-time | expired-drug | medical-device-use- error | problem-different-manufacturer | unsafe-physical-environment
    pub category: Option<Vec<CodeableConcept>>,
    /// Type of the event itself in relation to the subject
    pub event: Option<CodeableConcept>,
    /// Subject impacted by event
    pub subject: Reference,
    /// Encounter created as part of
    pub encounter: Option<Reference>,
    /// When the event occurred
    pub date: Option<DateTime>,
    /// When the event was detected
    pub detected: Option<DateTime>,
    /// When the event was recorded
    #[fhir_serde(rename = "recordedDate")]
    pub recorded_date: Option<DateTime>,
    /// Effect on the subject due to this event
    #[fhir_serde(rename = "resultingCondition")]
    pub resulting_condition: Option<Vec<Reference>>,
    /// Location where adverse event occurred
    pub location: Option<Reference>,
    /// Seriousness of the event
    pub seriousness: Option<CodeableConcept>,
    /// mild | moderate | severe
    pub severity: Option<CodeableConcept>,
    /// resolved | recovering | ongoing | resolvedWithSequelae | fatal | unknown
    pub outcome: Option<CodeableConcept>,
    /// Who recorded the adverse event
    pub recorder: Option<Reference>,
    /// Who was involved in the adverse event or the potential adverse event
    pub contributor: Option<Vec<Reference>>,
    /// The suspected agent causing the adverse event
    #[fhir_serde(rename = "suspectEntity")]
    pub suspect_entity: Option<Vec<AdverseEventSuspectEntity>>,
    /// AdverseEvent.subjectMedicalHistory
    #[fhir_serde(rename = "subjectMedicalHistory")]
    pub subject_medical_history: Option<Vec<Reference>>,
    /// AdverseEvent.referenceDocument
    #[fhir_serde(rename = "referenceDocument")]
    pub reference_document: Option<Vec<Reference>>,
    /// AdverseEvent.study
    pub study: Option<Vec<Reference>>,
}

/// The suspected agent causing the adverse event
#[derive(Debug, Clone, PartialEq, Default, FhirSerde)]
#[fhir_type(name = "AdverseEventSuspectEntity", kind = "backbone_element")]
pub struct AdverseEventSuspectEntity {
    /// Unique id for inter-element referencing
    pub id: Option<std::string::String>,
    /// Additional content defined by implementations
    pub extension: Option<Vec<Extension>>,
    /// Extensions that cannot be ignored even if unrecognized
    #[fhir_serde(rename = "modifierExtension")]
    pub modifier_extension: Option<Vec<Extension>>,
    /// Refers to the specific entity that caused the adverse event
    pub instance: Reference,
    /// Information on the possible cause of the event
    pub causality: Option<Vec<AdverseEventSuspectEntityCausality>>,
}

/// Information on the possible cause of the event
#[derive(Debug, Clone, PartialEq, Default, FhirSerde)]
#[fhir_type(name = "AdverseEventSuspectEntityCausality", kind = "backbone_element")]
pub struct AdverseEventSuspectEntityCausality {
    /// Unique id for inter-element referencing
    pub id: Option<std::string::String>,
    /// Additional content defined by implementations
    pub extension: Option<Vec<Extension>>,
    /// Extensions that cannot be ignored even if unrecognized
    #[fhir_serde(rename = "modifierExtension")]
    pub modifier_extension: Option<Vec<Extension>>,
    /// Assessment of if the entity caused the event
    pub assessment: Option<CodeableConcept>,
    /// AdverseEvent.suspectEntity.causalityProductRelatedness
    #[fhir_serde(rename = "productRelatedness")]
    pub product_relatedness: Option<String>,
    /// AdverseEvent.suspectEntity.causalityAuthor
    pub author: Option<Reference>,
    /// ProbabilityScale | Bayesian | Checklist
    pub method: Option<CodeableConcept>,
}
