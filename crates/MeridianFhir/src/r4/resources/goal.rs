use crate::r4::*;
use crate::FhirSerde;

/// Choice of types for the start\[x\] field in Goal
#[derive(Debug, Clone, PartialEq, FhirSerde)]
#[fhir_choice_element(base_name = "start")]
pub enum GoalStart {
    /// Variant accepting the Date type.
    #[fhir_serde(rename = "startDate")]
    Date(Date),
    /// Variant accepting the CodeableConcept type.
    #[fhir_serde(rename = "startCodeableConcept")]
    CodeableConcept(CodeableConcept),
}

/// FHIR Goal type
///
/// Describes the intended objective(s) for a patient, group or organization
/// care, for example, weight loss, restoring an activity of daily living,
/// obtaining herd immunity via immunization, meeting a process improvement
/// objective, etc.
///
/// See: [Goal](http://hl7.org/fhir/StructureDefinition/Goal)
#[derive(Debug, Clone, PartialEq, Default, FhirSerde)]
#[fhir_type(name = "Goal", kind = "domain_resource")]
pub struct Goal {
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
    /// External Ids for this goal
    pub identifier: Option<Vec<Identifier>>,
    /// proposed | planned | accepted | active | on-hold | completed | cancelled | entered-in-error | rejected
    #[fhir_serde(rename = "lifecycleStatus")]
    pub lifecycle_status: Code,
    /// in-progress | improving | worsening | no-change | achieved | sustaining | not-achieved | no-progress | not-attainable
    #[fhir_serde(rename = "achievementStatus")]
    pub achievement_status: Option<CodeableConcept>,
    /// E.g. Treatment, dietary, behavioral, etc.
    pub category: Option<Vec<CodeableConcept>>,
    /// high-priority | medium-priority | low-priority
    pub priority: Option<CodeableConcept>,
    /// Code or text describing goal
    pub description: CodeableConcept,
    /// Who this goal is intended for
    pub subject: Reference,
    /// When goal pursuit begins
    #[fhir_serde(flatten)]
    pub start: Option<GoalStart>,
    /// Target outcome for the goal
    pub target: Option<Vec<GoalTarget>>,
    /// When goal status took effect
    #[fhir_serde(rename = "statusDate")]
    pub status_date: Option<Date>,
    /// Reason for current status
    #[fhir_serde(rename = "statusReason")]
    pub status_reason: Option<String>,
    /// Who's responsible for creating Goal?
    #[fhir_serde(rename = "expressedBy")]
    pub expressed_by: Option<Reference>,
    /// Issues addressed by this goal
    pub addresses: Option<Vec<Reference>>,
    /// Comments about the goal
    pub note: Option<Vec<Annotation>>,
    /// What result was achieved regarding the goal?
    #[fhir_serde(rename = "outcomeCode")]
    pub outcome_code: Option<Vec<CodeableConcept>>,
    /// Observation that resulted from goal
    #[fhir_serde(rename = "outcomeReference")]
    pub outcome_reference: Option<Vec<Reference>>,
}

/// Choice of types for the detail\[x\] field in GoalTarget
#[derive(Debug, Clone, PartialEq, FhirSerde)]
#[fhir_choice_element(base_name = "detail")]
pub enum GoalTargetDetail {
    /// Variant accepting the Quantity type.
    #[fhir_serde(rename = "detailQuantity")]
    Quantity(Quantity),
    /// Variant accepting the Range type.
    #[fhir_serde(rename = "detailRange")]
    Range(Range),
    /// Variant accepting the CodeableConcept type.
    #[fhir_serde(rename = "detailCodeableConcept")]
    CodeableConcept(CodeableConcept),
    /// Variant accepting the String type.
    #[fhir_serde(rename = "detailString")]
    String(String),
    /// Variant accepting the Boolean type.
    #[fhir_serde(rename = "detailBoolean")]
    Boolean(Boolean),
    /// Variant accepting the Integer type.
    #[fhir_serde(rename = "detailInteger")]
    Integer(Integer),
    /// Variant accepting the Ratio type.
    #[fhir_serde(rename = "detailRatio")]
    Ratio(Ratio),
}

/// Choice of types for the due\[x\] field in GoalTarget
#[derive(Debug, Clone, PartialEq, FhirSerde)]
#[fhir_choice_element(base_name = "due")]
pub enum GoalTargetDue {
    /// Variant accepting the Date type.
    #[fhir_serde(rename = "dueDate")]
    Date(Date),
    /// Variant accepting the Duration type.
    #[fhir_serde(rename = "dueDuration")]
    Duration(Duration),
}

/// Target outcome for the goal
#[derive(Debug, Clone, PartialEq, Default, FhirSerde)]
#[fhir_type(name = "GoalTarget", kind = "backbone_element")]
pub struct GoalTarget {
    /// Unique id for inter-element referencing
    pub id: Option<std::string::String>,
    /// Additional content defined by implementations
    pub extension: Option<Vec<Extension>>,
    /// Extensions that cannot be ignored even if unrecognized
    #[fhir_serde(rename = "modifierExtension")]
    pub modifier_extension: Option<Vec<Extension>>,
    /// The parameter whose value is being tracked
    pub measure: Option<CodeableConcept>,
    /// The target value to be achieved
    #[fhir_serde(flatten)]
    pub detail: Option<GoalTargetDetail>,
    /// Reach goal on or before
    #[fhir_serde(flatten)]
    pub due: Option<GoalTargetDue>,
}
