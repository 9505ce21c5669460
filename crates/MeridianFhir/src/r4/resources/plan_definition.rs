use crate::r4::*;
use crate::FhirSerde;

/// Choice of types for the subject\[x\] field in PlanDefinition
#[derive(Debug, Clone, PartialEq, FhirSerde)]
#[fhir_choice_element(base_name = "subject")]
pub enum PlanDefinitionSubject {
    /// Variant accepting the CodeableConcept type.
    #[fhir_serde(rename = "subjectCodeableConcept")]
    CodeableConcept(CodeableConcept),
    /// Variant accepting the Reference type.
    #[fhir_serde(rename = "subjectReference")]
    Reference(Reference),
}

/// FHIR PlanDefinition type
///
/// This resource allows for the definition of various types of plans as a
/// sharable, consumable, and executable artifact. The resource is general enough
/// to support the description of a broad range of clinical artifacts such as
/// clinical decision support rules, order sets and protocols.
///
/// See: [PlanDefinition](http://hl7.org/fhir/StructureDefinition/PlanDefinition)
#[derive(Debug, Clone, PartialEq, Default, FhirSerde)]
#[fhir_type(name = "PlanDefinition", kind = "domain_resource")]
pub struct PlanDefinition {
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
    /// Canonical identifier for this plan definition, represented as a URI (globally unique)
    pub url: Option<Uri>,
    /// Additional identifier for the plan definition
    pub identifier: Option<Vec<Identifier>>,
    /// Business version of the plan definition
    pub version: Option<String>,
    /// Name for this plan definition (computer friendly)
    pub name: Option<String>,
    /// Name for this plan definition (human friendly)
    pub title: Option<String>,
    /// Subordinate title of the plan definition
    pub subtitle: Option<String>,
    /// order-set | clinical-protocol | eca-rule | workflow-definition
    #[fhir_serde(rename = "type")]
    pub r#type: Option<CodeableConcept>,
    /// The status of this plan definition. Enables tracking the life-cycle of the content.
    pub status: Code,
    /// For testing purposes, not real usage
    pub experimental: Option<Boolean>,
    /// Type of individual the plan definition is focused on
    #[fhir_serde(flatten)]
    pub subject: Option<PlanDefinitionSubject>,
    /// Date last changed
    pub date: Option<DateTime>,
    /// Name of the publisher (organization or individual)
    pub publisher: Option<String>,
    /// Contact details for the publisher
    pub contact: Option<Vec<ContactDetail>>,
    /// Natural language description of the plan definition
    pub description: Option<Markdown>,
    /// The context that the content is intended to support
    #[fhir_serde(rename = "useContext")]
    pub use_context: Option<Vec<UsageContext>>,
    /// Intended jurisdiction for plan definition (if applicable)
    pub jurisdiction: Option<Vec<CodeableConcept>>,
    /// Why this plan definition is defined
    pub purpose: Option<Markdown>,
    /// Describes the clinical usage of the plan
    pub usage: Option<String>,
    /// Use and/or publishing restrictions
    pub copyright: Option<Markdown>,
    /// When the plan definition was approved by publisher
    #[fhir_serde(rename = "approvalDate")]
    pub approval_date: Option<Date>,
    /// When the plan definition was last reviewed
    #[fhir_serde(rename = "lastReviewDate")]
    pub last_review_date: Option<Date>,
    /// When the plan definition is expected to be used
    #[fhir_serde(rename = "effectivePeriod")]
    pub effective_period: Option<Period>,
    /// E.g. Education, Treatment, Assessment.
    pub topic: Option<Vec<CodeableConcept>>,
    /// Who authored the content
    pub author: Option<Vec<ContactDetail>>,
    /// Who edited the content
    pub editor: Option<Vec<ContactDetail>>,
    /// Who reviewed the content
    pub reviewer: Option<Vec<ContactDetail>>,
    /// Who endorsed the content
    pub endorser: Option<Vec<ContactDetail>>,
    /// Additional documentation, citations
    #[fhir_serde(rename = "relatedArtifact")]
    pub related_artifact: Option<Vec<RelatedArtifact>>,
    /// Logic used by the plan definition
    pub library: Option<Vec<Canonical>>,
    /// What the plan is trying to accomplish
    pub goal: Option<Vec<PlanDefinitionGoal>>,
    /// Action defined by the plan
    pub action: Option<Vec<PlanDefinitionAction>>,
}

/// Choice of types for the subject\[x\] field in PlanDefinitionAction
#[derive(Debug, Clone, PartialEq, FhirSerde)]
#[fhir_choice_element(base_name = "subject")]
pub enum PlanDefinitionActionSubject {
    /// Variant accepting the CodeableConcept type.
    #[fhir_serde(rename = "subjectCodeableConcept")]
    CodeableConcept(CodeableConcept),
    /// Variant accepting the Reference type.
    #[fhir_serde(rename = "subjectReference")]
    Reference(Reference),
}

/// Choice of types for the timing\[x\] field in PlanDefinitionAction
#[derive(Debug, Clone, PartialEq, FhirSerde)]
#[fhir_choice_element(base_name = "timing")]
pub enum PlanDefinitionActionTiming {
    /// Variant accepting the DateTime type.
    #[fhir_serde(rename = "timingDateTime")]
    DateTime(DateTime),
    /// Variant accepting the Age type.
    #[fhir_serde(rename = "timingAge")]
    Age(Age),
    /// Variant accepting the Period type.
    #[fhir_serde(rename = "timingPeriod")]
    Period(Period),
    /// Variant accepting the Duration type.
    #[fhir_serde(rename = "timingDuration")]
    Duration(Duration),
    /// Variant accepting the Range type.
    #[fhir_serde(rename = "timingRange")]
    Range(Range),
    /// Variant accepting the Timing type.
    #[fhir_serde(rename = "timingTiming")]
    Timing(Timing),
}

/// Choice of types for the definition\[x\] field in PlanDefinitionAction
#[derive(Debug, Clone, PartialEq, FhirSerde)]
#[fhir_choice_element(base_name = "definition")]
pub enum PlanDefinitionActionDefinition {
    /// Variant accepting the Canonical type.
    #[fhir_serde(rename = "definitionCanonical")]
    Canonical(Canonical),
    /// Variant accepting the Uri type.
    #[fhir_serde(rename = "definitionUri")]
    Uri(Uri),
}

/// Action defined by the plan
#[derive(Debug, Clone, PartialEq, Default, FhirSerde)]
#[fhir_type(name = "PlanDefinitionAction", kind = "backbone_element")]
pub struct PlanDefinitionAction {
    /// Unique id for inter-element referencing
    pub id: Option<std::string::String>,
    /// Additional content defined by implementations
    pub extension: Option<Vec<Extension>>,
    /// Extensions that cannot be ignored even if unrecognized
    #[fhir_serde(rename = "modifierExtension")]
    pub modifier_extension: Option<Vec<Extension>>,
    /// User-visible prefix for the action (e.g. 1. or A.).
    pub prefix: Option<String>,
    /// User-visible title
    pub title: Option<String>,
    /// Brief description of the action
    pub description: Option<String>,
    /// Static text equivalent of the action, used if the dynamic aspects cannot be interpreted by the receiving system
    #[fhir_serde(rename = "textEquivalent")]
    pub text_equivalent: Option<String>,
    /// Indicates how quickly the action should be addressed with respect to other actions
    pub priority: Option<Code>,
    /// Code representing the meaning of the action or sub-actions
    pub code: Option<Vec<CodeableConcept>>,
    /// Why the action should be performed
    pub reason: Option<Vec<CodeableConcept>>,
    /// Supporting documentation for the intended performer of the action
    pub documentation: Option<Vec<RelatedArtifact>>,
    /// What goals this action supports
    #[fhir_serde(rename = "goalId")]
    pub goal_id: Option<Vec<String>>,
    /// Type of individual the action is focused on
    #[fhir_serde(flatten)]
    pub subject: Option<PlanDefinitionActionSubject>,
    /// When the action should be triggered
    pub trigger: Option<Vec<TriggerDefinition>>,
    /// Whether or not the action is applicable
    pub condition: Option<Vec<PlanDefinitionActionCondition>>,
    /// Input data requirements
    pub input: Option<Vec<DataRequirement>>,
    /// Output data definition
    pub output: Option<Vec<DataRequirement>>,
    /// Relationship to another action
    #[fhir_serde(rename = "relatedAction")]
    pub related_action: Option<Vec<PlanDefinitionActionRelatedAction>>,
    /// When the action should take place
    #[fhir_serde(flatten)]
    pub timing: Option<PlanDefinitionActionTiming>,
    /// Who should participate in the action
    pub participant: Option<Vec<PlanDefinitionActionParticipant>>,
    /// create | update | remove | fire-event
    #[fhir_serde(rename = "type")]
    pub r#type: Option<CodeableConcept>,
    /// Defines the grouping behavior for the action and its children
    #[fhir_serde(rename = "groupingBehavior")]
    pub grouping_behavior: Option<Code>,
    /// Defines the selection behavior for the action and its children
    #[fhir_serde(rename = "selectionBehavior")]
    pub selection_behavior: Option<Code>,
    /// Defines the required behavior for the action
    #[fhir_serde(rename = "requiredBehavior")]
    pub required_behavior: Option<Code>,
    /// Defines whether the action should usually be preselected
    #[fhir_serde(rename = "precheckBehavior")]
    pub precheck_behavior: Option<Code>,
    /// Defines whether the action can be selected multiple times
    #[fhir_serde(rename = "cardinalityBehavior")]
    pub cardinality_behavior: Option<Code>,
    /// Description of the activity to be performed
    #[fhir_serde(flatten)]
    pub definition: Option<PlanDefinitionActionDefinition>,
    /// Transform to apply the template
    pub transform: Option<String>,
    /// Dynamic aspects of the definition
    #[fhir_serde(rename = "dynamicValue")]
    pub dynamic_value: Option<Vec<PlanDefinitionActionDynamicValue>>,
    /// A sub-action
    pub action: Option<Vec<PlanDefinitionAction>>,
}

/// Whether or not the action is applicable
#[derive(Debug, Clone, PartialEq, Default, FhirSerde)]
#[fhir_type(name = "PlanDefinitionActionCondition", kind = "backbone_element")]
pub struct PlanDefinitionActionCondition {
    /// Unique id for inter-element referencing
    pub id: Option<std::string::String>,
    /// Additional content defined by implementations
    pub extension: Option<Vec<Extension>>,
    /// Extensions that cannot be ignored even if unrecognized
    #[fhir_serde(rename = "modifierExtension")]
    pub modifier_extension: Option<Vec<Extension>>,
    /// The kind of condition
    pub kind: Code,
    /// Boolean-valued expression
    pub expression: Option<Expression>,
}

/// Dynamic aspects of the definition
#[derive(Debug, Clone, PartialEq, Default, FhirSerde)]
#[fhir_type(name = "PlanDefinitionActionDynamicValue", kind = "backbone_element")]
pub struct PlanDefinitionActionDynamicValue {
    /// Unique id for inter-element referencing
    pub id: Option<std::string::String>,
    /// Additional content defined by implementations
    pub extension: Option<Vec<Extension>>,
    /// Extensions that cannot be ignored even if unrecognized
    #[fhir_serde(rename = "modifierExtension")]
    pub modifier_extension: Option<Vec<Extension>>,
    /// The path to the element to be set dynamically
    pub path: Option<String>,
    /// An expression that provides the dynamic value for the customization
    pub expression: Option<Expression>,
}

/// Who should participate in the action
#[derive(Debug, Clone, PartialEq, Default, FhirSerde)]
#[fhir_type(name = "PlanDefinitionActionParticipant", kind = "backbone_element")]
pub struct PlanDefinitionActionParticipant {
    /// Unique id for inter-element referencing
    pub id: Option<std::string::String>,
    /// Additional content defined by implementations
    pub extension: Option<Vec<Extension>>,
    /// Extensions that cannot be ignored even if unrecognized
    #[fhir_serde(rename = "modifierExtension")]
    pub modifier_extension: Option<Vec<Extension>>,
    /// The type of participant in the action
    #[fhir_serde(rename = "type")]
    pub r#type: Code,
    /// E.g. Nurse, Surgeon, Parent.
    pub role: Option<CodeableConcept>,
}

/// Choice of types for the offset\[x\] field in PlanDefinitionActionRelatedAction
#[derive(Debug, Clone, PartialEq, FhirSerde)]
#[fhir_choice_element(base_name = "offset")]
pub enum PlanDefinitionActionRelatedActionOffset {
    /// Variant accepting the Duration type.
    #[fhir_serde(rename = "offsetDuration")]
    Duration(Duration),
    /// Variant accepting the Range type.
    #[fhir_serde(rename = "offsetRange")]
    Range(Range),
}

/// Relationship to another action
#[derive(Debug, Clone, PartialEq, Default, FhirSerde)]
#[fhir_type(name = "PlanDefinitionActionRelatedAction", kind = "backbone_element")]
pub struct PlanDefinitionActionRelatedAction {
    /// Unique id for inter-element referencing
    pub id: Option<std::string::String>,
    /// Additional content defined by implementations
    pub extension: Option<Vec<Extension>>,
    /// Extensions that cannot be ignored even if unrecognized
    #[fhir_serde(rename = "modifierExtension")]
    pub modifier_extension: Option<Vec<Extension>>,
    /// What action is this related to
    #[fhir_serde(rename = "actionId")]
    pub action_id: String,
    /// The relationship of this action to the related action
    pub relationship: Code,
    /// Time offset for the relationship
    #[fhir_serde(flatten)]
    pub offset: Option<PlanDefinitionActionRelatedActionOffset>,
}

/// What the plan is trying to accomplish
#[derive(Debug, Clone, PartialEq, Default, FhirSerde)]
#[fhir_type(name = "PlanDefinitionGoal", kind = "backbone_element")]
pub struct PlanDefinitionGoal {
    /// Unique id for inter-element referencing
    pub id: Option<std::string::String>,
    /// Additional content defined by implementations
    pub extension: Option<Vec<Extension>>,
    /// Extensions that cannot be ignored even if unrecognized
    #[fhir_serde(rename = "modifierExtension")]
    pub modifier_extension: Option<Vec<Extension>>,
    /// E.g. Treatment, dietary, behavioral.
    pub category: Option<CodeableConcept>,
    /// Code or text describing the goal
    pub description: CodeableConcept,
    /// high-priority | medium-priority | low-priority
    pub priority: Option<CodeableConcept>,
    /// When goal pursuit begins
    pub start: Option<CodeableConcept>,
    /// What does the goal address
    pub addresses: Option<Vec<CodeableConcept>>,
    /// Supporting documentation for the goal
    pub documentation: Option<Vec<RelatedArtifact>>,
    /// Target outcome for the goal
    pub target: Option<Vec<PlanDefinitionGoalTarget>>,
}

/// Choice of types for the detail\[x\] field in PlanDefinitionGoalTarget
#[derive(Debug, Clone, PartialEq, FhirSerde)]
#[fhir_choice_element(base_name = "detail")]
pub enum PlanDefinitionGoalTargetDetail {
    /// Variant accepting the Quantity type.
    #[fhir_serde(rename = "detailQuantity")]
    Quantity(Quantity),
    /// Variant accepting the Range type.
    #[fhir_serde(rename = "detailRange")]
    Range(Range),
    /// Variant accepting the CodeableConcept type.
    #[fhir_serde(rename = "detailCodeableConcept")]
    CodeableConcept(CodeableConcept),
}

/// Target outcome for the goal
#[derive(Debug, Clone, PartialEq, Default, FhirSerde)]
#[fhir_type(name = "PlanDefinitionGoalTarget", kind = "backbone_element")]
pub struct PlanDefinitionGoalTarget {
    /// Unique id for inter-element referencing
    pub id: Option<std::string::String>,
    /// Additional content defined by implementations
    pub extension: Option<Vec<Extension>>,
    /// Extensions that cannot be ignored even if unrecognized
    #[fhir_serde(rename = "modifierExtension")]
    pub modifier_extension: Option<Vec<Extension>>,
    /// The parameter whose value is to be tracked
    pub measure: Option<CodeableConcept>,
    /// The target value to be achieved
    #[fhir_serde(flatten)]
    pub detail: Option<PlanDefinitionGoalTargetDetail>,
    /// Reach goal within
    pub due: Option<Duration>,
}
