use crate::r4::*;
use crate::FhirSerde;

/// FHIR RequestGroup type
///
/// A group of related requests that can be used to capture intended activities
/// that have inter- dependencies such as "give this medication after that one".
///
/// See: [RequestGroup](http://hl7.org/fhir/StructureDefinition/RequestGroup)
#[derive(Debug, Clone, PartialEq, Default, FhirSerde)]
#[fhir_type(name = "RequestGroup", kind = "domain_resource")]
pub struct RequestGroup {
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
    /// Instantiates FHIR protocol or definition
    #[fhir_serde(rename = "instantiatesCanonical")]
    pub instantiates_canonical: Option<Vec<Canonical>>,
    /// Instantiates external protocol or definition
    #[fhir_serde(rename = "instantiatesUri")]
    pub instantiates_uri: Option<Vec<Uri>>,
    /// Fulfills plan, proposal, or order
    #[fhir_serde(rename = "basedOn")]
    pub based_on: Option<Vec<Reference>>,
    /// Request(s) replaced by this request
    pub replaces: Option<Vec<Reference>>,
    /// Composite request this is part of
    #[fhir_serde(rename = "groupIdentifier")]
    pub group_identifier: Option<Identifier>,
    /// The current state of the request. For request groups, the status reflects the status of all the requests in the group.
    pub status: Code,
    /// Indicates the level of authority/intentionality associated with the request and where the request fits into the workflow chain
    pub intent: Code,
    /// Indicates how quickly the request should be addressed with respect to other requests
    pub priority: Option<Code>,
    /// What's being requested/ordered
    pub code: Option<CodeableConcept>,
    /// Who the request group is about
    pub subject: Option<Reference>,
    /// Created as part of
    pub encounter: Option<Reference>,
    /// When the request group was authored
    #[fhir_serde(rename = "authoredOn")]
    pub authored_on: Option<DateTime>,
    /// Device or practitioner that authored the request group
    pub author: Option<Reference>,
    /// Why the request group is needed
    #[fhir_serde(rename = "reasonCode")]
    pub reason_code: Option<Vec<CodeableConcept>>,
    /// Why the request group is needed
    #[fhir_serde(rename = "reasonReference")]
    pub reason_reference: Option<Vec<Reference>>,
    /// Additional notes about the response
    pub note: Option<Vec<Annotation>>,
    /// Proposed actions, if any
    pub action: Option<Vec<RequestGroupAction>>,
}

/// Choice of types for the timing\[x\] field in RequestGroupAction
#[derive(Debug, Clone, PartialEq, FhirSerde)]
#[fhir_choice_element(base_name = "timing")]
pub enum RequestGroupActionTiming {
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

/// Proposed actions, if any
#[derive(Debug, Clone, PartialEq, Default, FhirSerde)]
#[fhir_type(name = "RequestGroupAction", kind = "backbone_element")]
pub struct RequestGroupAction {
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
    /// Short description of the action
    pub description: Option<String>,
    /// Static text equivalent of the action, used if the dynamic aspects cannot be interpreted by the receiving system
    #[fhir_serde(rename = "textEquivalent")]
    pub text_equivalent: Option<String>,
    /// Indicates how quickly the action should be addressed with respect to other actions
    pub priority: Option<Code>,
    /// Code representing the meaning of the action or sub-actions
    pub code: Option<Vec<CodeableConcept>>,
    /// Supporting documentation for the intended performer of the action
    pub documentation: Option<Vec<RelatedArtifact>>,
    /// Whether or not the action is applicable
    pub condition: Option<Vec<RequestGroupActionCondition>>,
    /// Relationship to another action
    #[fhir_serde(rename = "relatedAction")]
    pub related_action: Option<Vec<RequestGroupActionRelatedAction>>,
    /// When the action should take place
    #[fhir_serde(flatten)]
    pub timing: Option<RequestGroupActionTiming>,
    /// Who should perform the action
    pub participant: Option<Vec<Reference>>,
    /// create | update | remove | fire-event
    #[fhir_serde(rename = "type")]
    pub r#type: Option<CodeableConcept>,
    /// Defines the grouping behavior for the action and its children
    #[fhir_serde(rename = "groupingBehavior")]
    pub grouping_behavior: Option<Code>,
    /// Defines the selection behavior for the action and its children
    #[fhir_serde(rename = "selectionBehavior")]
    pub selection_behavior: Option<Code>,
    /// Defines expectations around whether an action is required
    #[fhir_serde(rename = "requiredBehavior")]
    pub required_behavior: Option<Code>,
    /// Defines whether the action should usually be preselected
    #[fhir_serde(rename = "precheckBehavior")]
    pub precheck_behavior: Option<Code>,
    /// Defines whether the action can be selected multiple times
    #[fhir_serde(rename = "cardinalityBehavior")]
    pub cardinality_behavior: Option<Code>,
    /// The target of the action
    pub resource: Option<Reference>,
    /// Sub action
    pub action: Option<Vec<RequestGroupAction>>,
}

/// Whether or not the action is applicable
#[derive(Debug, Clone, PartialEq, Default, FhirSerde)]
#[fhir_type(name = "RequestGroupActionCondition", kind = "backbone_element")]
pub struct RequestGroupActionCondition {
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

/// Choice of types for the offset\[x\] field in RequestGroupActionRelatedAction
#[derive(Debug, Clone, PartialEq, FhirSerde)]
#[fhir_choice_element(base_name = "offset")]
pub enum RequestGroupActionRelatedActionOffset {
    /// Variant accepting the Duration type.
    #[fhir_serde(rename = "offsetDuration")]
    Duration(Duration),
    /// Variant accepting the Range type.
    #[fhir_serde(rename = "offsetRange")]
    Range(Range),
}

/// Relationship to another action
#[derive(Debug, Clone, PartialEq, Default, FhirSerde)]
#[fhir_type(name = "RequestGroupActionRelatedAction", kind = "backbone_element")]
pub struct RequestGroupActionRelatedAction {
    /// Unique id for inter-element referencing
    pub id: Option<std::string::String>,
    /// Additional content defined by implementations
    pub extension: Option<Vec<Extension>>,
    /// Extensions that cannot be ignored even if unrecognized
    #[fhir_serde(rename = "modifierExtension")]
    pub modifier_extension: Option<Vec<Extension>>,
    /// What action this is related to
    #[fhir_serde(rename = "actionId")]
    pub action_id: String,
    /// The relationship of this action to the related action
    pub relationship: Code,
    /// Time offset for the relationship
    #[fhir_serde(flatten)]
    pub offset: Option<RequestGroupActionRelatedActionOffset>,
}
