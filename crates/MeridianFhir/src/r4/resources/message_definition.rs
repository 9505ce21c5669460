use crate::r4::*;
use crate::FhirSerde;

/// Choice of types for the event\[x\] field in MessageDefinition
#[derive(Debug, Clone, PartialEq, FhirSerde)]
#[fhir_choice_element(base_name = "event")]
pub enum MessageDefinitionEvent {
    /// Variant accepting the Coding type.
    #[fhir_serde(rename = "eventCoding")]
    Coding(Coding),
    /// Variant accepting the Uri type.
    #[fhir_serde(rename = "eventUri")]
    Uri(Uri),
}

/// FHIR MessageDefinition type
///
/// Defines the characteristics of a message that can be shared between systems,
/// including the type of event that initiates the message, the content to be
/// transmitted and what response(s), if any, are permitted.
///
/// See: [MessageDefinition](http://hl7.org/fhir/StructureDefinition/MessageDefinition)
#[derive(Debug, Clone, PartialEq, Default, FhirSerde)]
#[fhir_type(name = "MessageDefinition", kind = "domain_resource")]
pub struct MessageDefinition {
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
    /// Business Identifier for a given MessageDefinition
    pub url: Option<Uri>,
    /// Primary key for the message definition on a given server
    pub identifier: Option<Vec<Identifier>>,
    /// Business version of the message definition
    pub version: Option<String>,
    /// Name for this message definition (computer friendly)
    pub name: Option<String>,
    /// Name for this message definition (human friendly)
    pub title: Option<String>,
    /// Takes the place of
    pub replaces: Option<Vec<String>>,
    /// The status of this message definition. Enables tracking the life-cycle of the content.
    pub status: Code,
    /// For testing purposes, not real usage
    pub experimental: Option<Boolean>,
    /// Date last changed
    pub date: DateTime,
    /// Name of the publisher (organization or individual)
    pub publisher: Option<String>,
    /// Contact details for the publisher
    pub contact: Option<Vec<ContactDetail>>,
    /// Natural language description of the message definition
    pub description: Option<Markdown>,
    /// The context that the content is intended to support
    #[fhir_serde(rename = "useContext")]
    pub use_context: Option<Vec<UsageContext>>,
    /// Intended jurisdiction for message definition (if applicable)
    pub jurisdiction: Option<Vec<CodeableConcept>>,
    /// Why this message definition is defined
    pub purpose: Option<Markdown>,
    /// Use and/or publishing restrictions
    pub copyright: Option<Markdown>,
    /// Definition this one is based on
    pub base: Option<String>,
    /// Protocol/workflow this is part of
    pub parent: Option<Vec<String>>,
    /// Event code or link to the EventDefinition
    #[fhir_serde(flatten)]
    pub event: Option<MessageDefinitionEvent>,
    /// The impact of the content of the message
    pub category: Option<Code>,
    /// Resource(s) that are the subject of the event
    pub focus: Option<Vec<MessageDefinitionFocus>>,
    /// Declare at a message definition level whether a response is required or only upon error or success, or never
    #[fhir_serde(rename = "responseRequired")]
    pub response_required: Option<Code>,
    /// Responses to this message
    #[fhir_serde(rename = "allowedResponse")]
    pub allowed_response: Option<Vec<MessageDefinitionAllowedResponse>>,
    /// Canonical reference to a GraphDefinition
    pub graph: Option<Vec<String>>,
}

/// Responses to this message
#[derive(Debug, Clone, PartialEq, Default, FhirSerde)]
#[fhir_type(name = "MessageDefinitionAllowedResponse", kind = "backbone_element")]
pub struct MessageDefinitionAllowedResponse {
    /// Unique id for inter-element referencing
    pub id: Option<std::string::String>,
    /// Additional content defined by implementations
    pub extension: Option<Vec<Extension>>,
    /// Extensions that cannot be ignored even if unrecognized
    #[fhir_serde(rename = "modifierExtension")]
    pub modifier_extension: Option<Vec<Extension>>,
    /// Reference to allowed message definition response
    pub message: String,
    /// When should this response be used
    pub situation: Option<String>,
}

/// Resource(s) that are the subject of the event
#[derive(Debug, Clone, PartialEq, Default, FhirSerde)]
#[fhir_type(name = "MessageDefinitionFocus", kind = "backbone_element")]
pub struct MessageDefinitionFocus {
    /// Unique id for inter-element referencing
    pub id: Option<std::string::String>,
    /// Additional content defined by implementations
    pub extension: Option<Vec<Extension>>,
    /// Extensions that cannot be ignored even if unrecognized
    #[fhir_serde(rename = "modifierExtension")]
    pub modifier_extension: Option<Vec<Extension>>,
    /// The kind of resource that must be the focus for this message
    pub code: Code,
    /// Profile that must be adhered to by focus
    pub profile: Option<Canonical>,
    /// Minimum number of focuses of this type
    pub min: UnsignedInt,
    /// Maximum number of focuses of this type
    pub max: Option<String>,
}
