use crate::r4::*;
use crate::FhirSerde;

/// FHIR ExampleScenario type
///
/// Example of workflow instance.
///
/// See: [ExampleScenario](http://hl7.org/fhir/StructureDefinition/ExampleScenario)
#[derive(Debug, Clone, PartialEq, Default, FhirSerde)]
#[fhir_type(name = "ExampleScenario", kind = "domain_resource")]
pub struct ExampleScenario {
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
    /// Canonical identifier for this example scenario, represented as a URI (globally unique)
    pub url: Option<Uri>,
    /// Additional identifier for the example scenario
    pub identifier: Option<Vec<Identifier>>,
    /// Business version of the example scenario
    pub version: Option<String>,
    /// Name for this example scenario (computer friendly)
    pub name: Option<String>,
    /// draft | active | retired | unknown
    pub status: Code,
    /// For testing purposes, not real usage
    pub experimental: Option<Boolean>,
    /// Date last changed
    pub date: Option<DateTime>,
    /// Name of the publisher (organization or individual)
    pub publisher: Option<String>,
    /// Contact details for the publisher
    pub contact: Option<Vec<ContactDetail>>,
    /// The context that the content is intended to support
    #[fhir_serde(rename = "useContext")]
    pub use_context: Option<Vec<UsageContext>>,
    /// Intended jurisdiction for example scenario (if applicable)
    pub jurisdiction: Option<Vec<CodeableConcept>>,
    /// Use and/or publishing restrictions
    pub copyright: Option<Markdown>,
    /// The purpose of the example, e.g. to illustrate a scenario
    pub purpose: Option<Markdown>,
    /// Actor participating in the resource
    pub actor: Option<Vec<ExampleScenarioActor>>,
    /// Each resource and each version that is present in the workflow
    pub instance: Option<Vec<ExampleScenarioInstance>>,
    /// Each major process - a group of operations
    pub process: Option<Vec<ExampleScenarioProcess>>,
    /// Another nested workflow
    pub workflow: Option<Vec<Canonical>>,
}

/// Actor participating in the resource
#[derive(Debug, Clone, PartialEq, Default, FhirSerde)]
#[fhir_type(name = "ExampleScenarioActor", kind = "backbone_element")]
pub struct ExampleScenarioActor {
    /// Unique id for inter-element referencing
    pub id: Option<std::string::String>,
    /// Additional content defined by implementations
    pub extension: Option<Vec<Extension>>,
    /// Extensions that cannot be ignored even if unrecognized
    #[fhir_serde(rename = "modifierExtension")]
    pub modifier_extension: Option<Vec<Extension>>,
    /// ID or acronym of the actor
    #[fhir_serde(rename = "actorId")]
    pub actor_id: String,
    /// person | entity
    #[fhir_serde(rename = "type")]
    pub r#type: Code,
    /// The name of the actor as shown in the page
    pub name: Option<String>,
    /// The description of the actor
    pub description: Option<Markdown>,
}

/// Each resource and each version that is present in the workflow
#[derive(Debug, Clone, PartialEq, Default, FhirSerde)]
#[fhir_type(name = "ExampleScenarioInstance", kind = "backbone_element")]
pub struct ExampleScenarioInstance {
    /// Unique id for inter-element referencing
    pub id: Option<std::string::String>,
    /// Additional content defined by implementations
    pub extension: Option<Vec<Extension>>,
    /// Extensions that cannot be ignored even if unrecognized
    #[fhir_serde(rename = "modifierExtension")]
    pub modifier_extension: Option<Vec<Extension>>,
    /// The id of the resource for referencing
    #[fhir_serde(rename = "resourceId")]
    pub resource_id: String,
    /// The type of the resource
    #[fhir_serde(rename = "resourceType")]
    pub resource_type: Code,
    /// A short name for the resource instance
    pub name: Option<String>,
    /// Human-friendly description of the resource instance
    pub description: Option<Markdown>,
    /// A specific version of the resource
    pub version: Option<Vec<ExampleScenarioInstanceVersion>>,
    /// Resources contained in the instance
    #[fhir_serde(rename = "containedInstance")]
    pub contained_instance: Option<Vec<ExampleScenarioInstanceContainedInstance>>,
}

/// Resources contained in the instance
#[derive(Debug, Clone, PartialEq, Default, FhirSerde)]
#[fhir_type(name = "ExampleScenarioInstanceContainedInstance", kind = "backbone_element")]
pub struct ExampleScenarioInstanceContainedInstance {
    /// Unique id for inter-element referencing
    pub id: Option<std::string::String>,
    /// Additional content defined by implementations
    pub extension: Option<Vec<Extension>>,
    /// Extensions that cannot be ignored even if unrecognized
    #[fhir_serde(rename = "modifierExtension")]
    pub modifier_extension: Option<Vec<Extension>>,
    /// Each resource contained in the instance
    #[fhir_serde(rename = "resourceId")]
    pub resource_id: String,
    /// A specific version of a resource contained in the instance
    #[fhir_serde(rename = "versionId")]
    pub version_id: Option<String>,
}

/// A specific version of the resource
#[derive(Debug, Clone, PartialEq, Default, FhirSerde)]
#[fhir_type(name = "ExampleScenarioInstanceVersion", kind = "backbone_element")]
pub struct ExampleScenarioInstanceVersion {
    /// Unique id for inter-element referencing
    pub id: Option<std::string::String>,
    /// Additional content defined by implementations
    pub extension: Option<Vec<Extension>>,
    /// Extensions that cannot be ignored even if unrecognized
    #[fhir_serde(rename = "modifierExtension")]
    pub modifier_extension: Option<Vec<Extension>>,
    /// The identifier of a specific version of a resource
    #[fhir_serde(rename = "versionId")]
    pub version_id: String,
    /// The description of the resource version
    pub description: Markdown,
}

/// Each major process - a group of operations
#[derive(Debug, Clone, PartialEq, Default, FhirSerde)]
#[fhir_type(name = "ExampleScenarioProcess", kind = "backbone_element")]
pub struct ExampleScenarioProcess {
    /// Unique id for inter-element referencing
    pub id: Option<std::string::String>,
    /// Additional content defined by implementations
    pub extension: Option<Vec<Extension>>,
    /// Extensions that cannot be ignored even if unrecognized
    #[fhir_serde(rename = "modifierExtension")]
    pub modifier_extension: Option<Vec<Extension>>,
    /// The diagram title of the group of operations
    pub title: String,
    /// A longer description of the group of operations
    pub description: Option<Markdown>,
    /// Description of initial status before the process starts
    #[fhir_serde(rename = "preConditions")]
    pub pre_conditions: Option<Markdown>,
    /// Description of final status after the process ends
    #[fhir_serde(rename = "postConditions")]
    pub post_conditions: Option<Markdown>,
    /// Each step of the process
    pub step: Option<Vec<ExampleScenarioProcessStep>>,
}

/// Each step of the process
#[derive(Debug, Clone, PartialEq, Default, FhirSerde)]
#[fhir_type(name = "ExampleScenarioProcessStep", kind = "backbone_element")]
pub struct ExampleScenarioProcessStep {
    /// Unique id for inter-element referencing
    pub id: Option<std::string::String>,
    /// Additional content defined by implementations
    pub extension: Option<Vec<Extension>>,
    /// Extensions that cannot be ignored even if unrecognized
    #[fhir_serde(rename = "modifierExtension")]
    pub modifier_extension: Option<Vec<Extension>>,
    /// Nested process
    pub process: Option<Vec<ExampleScenarioProcess>>,
    /// If there is a pause in the flow
    pub pause: Option<Boolean>,
    /// Each interaction or action
    pub operation: Option<ExampleScenarioProcessStepOperation>,
    /// Alternate non-typical step action
    pub alternative: Option<Vec<ExampleScenarioProcessStepAlternative>>,
}

/// Alternate non-typical step action
#[derive(Debug, Clone, PartialEq, Default, FhirSerde)]
#[fhir_type(name = "ExampleScenarioProcessStepAlternative", kind = "backbone_element")]
pub struct ExampleScenarioProcessStepAlternative {
    /// Unique id for inter-element referencing
    pub id: Option<std::string::String>,
    /// Additional content defined by implementations
    pub extension: Option<Vec<Extension>>,
    /// Extensions that cannot be ignored even if unrecognized
    #[fhir_serde(rename = "modifierExtension")]
    pub modifier_extension: Option<Vec<Extension>>,
    /// Label for alternative
    pub title: String,
    /// A human-readable description of each option
    pub description: Option<Markdown>,
    /// What happens in each alternative option
    pub step: Option<Vec<ExampleScenarioProcessStep>>,
}

/// Each interaction or action
#[derive(Debug, Clone, PartialEq, Default, FhirSerde)]
#[fhir_type(name = "ExampleScenarioProcessStepOperation", kind = "backbone_element")]
pub struct ExampleScenarioProcessStepOperation {
    /// Unique id for inter-element referencing
    pub id: Option<std::string::String>,
    /// Additional content defined by implementations
    pub extension: Option<Vec<Extension>>,
    /// Extensions that cannot be ignored even if unrecognized
    #[fhir_serde(rename = "modifierExtension")]
    pub modifier_extension: Option<Vec<Extension>>,
    /// The sequential number of the interaction
    pub number: String,
    /// The type of operation - CRUD
    #[fhir_serde(rename = "type")]
    pub r#type: Option<String>,
    /// The human-friendly name of the interaction
    pub name: Option<String>,
    /// Who starts the transaction
    pub initiator: Option<String>,
    /// Who receives the transaction
    pub receiver: Option<String>,
    /// A comment to be inserted in the diagram
    pub description: Option<Markdown>,
    /// Whether the initiator is deactivated right after the transaction
    #[fhir_serde(rename = "initiatorActive")]
    pub initiator_active: Option<Boolean>,
    /// Whether the receiver is deactivated right after the transaction
    #[fhir_serde(rename = "receiverActive")]
    pub receiver_active: Option<Boolean>,
    /// Each resource instance used by the initiator
    pub request: Option<ExampleScenarioInstanceContainedInstance>,
    /// Each resource instance used by the responder
    pub response: Option<ExampleScenarioInstanceContainedInstance>,
}
