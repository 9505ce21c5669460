use crate::r4::*;
use crate::FhirSerde;

/// FHIR ResearchStudy type
///
/// A process where a researcher or organization plans and then executes a series
/// of steps intended to increase the field of healthcare-related knowledge. This
/// includes studies of safety, efficacy, comparative effectiveness and other
/// information about medications, devices, therapies and other interventional
/// and investigative techniques. A ResearchStudy involves the gathering of
/// information about human or animal subjects.
///
/// See: [ResearchStudy](http://hl7.org/fhir/StructureDefinition/ResearchStudy)
#[derive(Debug, Clone, PartialEq, Default, FhirSerde)]
#[fhir_type(name = "ResearchStudy", kind = "domain_resource")]
pub struct ResearchStudy {
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
    /// Business Identifier for study
    pub identifier: Option<Vec<Identifier>>,
    /// Name for this study
    pub title: Option<String>,
    /// Steps followed in executing study
    pub protocol: Option<Vec<Reference>>,
    /// Part of larger study
    #[fhir_serde(rename = "partOf")]
    pub part_of: Option<Vec<Reference>>,
    /// The current state of the study
    pub status: Code,
    /// treatment | prevention | diagnostic | supportive-care | screening | health- services-research | basic-science | device-feasibility
    #[fhir_serde(rename = "primaryPurposeType")]
    pub primary_purpose_type: Option<CodeableConcept>,
    /// n-a | early-phase-1 | phase-1 | phase-1-phase-2 | phase-2 | phase-2-phase-3 | phase-3 | phase-4
    pub phase: Option<CodeableConcept>,
    /// Classifications for the study
    pub category: Option<Vec<CodeableConcept>>,
    /// Drugs, devices, etc. under study.
    pub focus: Option<Vec<CodeableConcept>>,
    /// Condition being studied
    pub condition: Option<Vec<CodeableConcept>>,
    /// Contact details for the study
    pub contact: Option<Vec<ContactDetail>>,
    /// References and dependencies
    #[fhir_serde(rename = "relatedArtifact")]
    pub related_artifact: Option<Vec<RelatedArtifact>>,
    /// Used to search for the study
    pub keyword: Option<Vec<CodeableConcept>>,
    /// Geographic region(s) for study
    pub location: Option<Vec<CodeableConcept>>,
    /// What this is study doing
    pub description: Option<Markdown>,
    /// Inclusion & exclusion criteria
    pub enrollment: Option<Vec<Reference>>,
    /// When the study began and ended
    pub period: Option<Period>,
    /// Organization that initiates and is legally responsible for the study
    pub sponsor: Option<Reference>,
    /// Researcher who oversees multiple aspects of the study
    #[fhir_serde(rename = "principalInvestigator")]
    pub principal_investigator: Option<Reference>,
    /// Facility where study activities are conducted
    pub site: Option<Vec<Reference>>,
    /// accrual-goal-met | closed-due-to-toxicity | closed-due-to-lack-of-study-progress | temporarily-closed-per-study-design
    #[fhir_serde(rename = "reasonStopped")]
    pub reason_stopped: Option<CodeableConcept>,
    /// Comments made about the study
    pub note: Option<Vec<Annotation>>,
    /// Defined path through the study for a subject
    pub arm: Option<Vec<ResearchStudyArm>>,
    /// A goal for the study
    pub objective: Option<Vec<ResearchStudyObjective>>,
}

/// Defined path through the study for a subject
#[derive(Debug, Clone, PartialEq, Default, FhirSerde)]
#[fhir_type(name = "ResearchStudyArm", kind = "backbone_element")]
pub struct ResearchStudyArm {
    /// Unique id for inter-element referencing
    pub id: Option<std::string::String>,
    /// Additional content defined by implementations
    pub extension: Option<Vec<Extension>>,
    /// Extensions that cannot be ignored even if unrecognized
    #[fhir_serde(rename = "modifierExtension")]
    pub modifier_extension: Option<Vec<Extension>>,
    /// Label for study arm
    pub name: String,
    /// Categorization of study arm
    #[fhir_serde(rename = "type")]
    pub r#type: Option<CodeableConcept>,
    /// Short explanation of study path
    pub description: Option<String>,
}

/// A goal for the study
#[derive(Debug, Clone, PartialEq, Default, FhirSerde)]
#[fhir_type(name = "ResearchStudyObjective", kind = "backbone_element")]
pub struct ResearchStudyObjective {
    /// Unique id for inter-element referencing
    pub id: Option<std::string::String>,
    /// Additional content defined by implementations
    pub extension: Option<Vec<Extension>>,
    /// Extensions that cannot be ignored even if unrecognized
    #[fhir_serde(rename = "modifierExtension")]
    pub modifier_extension: Option<Vec<Extension>>,
    /// Label for the objective
    pub name: Option<String>,
    /// primary | secondary | exploratory
    #[fhir_serde(rename = "type")]
    pub r#type: Option<CodeableConcept>,
}
