use crate::r4::*;
use crate::FhirSerde;

/// Choice of types for the event\[x\] field in MessageHeader
#[derive(Debug, Clone, PartialEq, FhirSerde)]
#[fhir_choice_element(base_name = "event")]
pub enum MessageHeaderEvent {
    /// Variant accepting the Coding type.
    #[fhir_serde(rename = "eventCoding")]
    Coding(Coding),
    /// Variant accepting the Uri type.
    #[fhir_serde(rename = "eventUri")]
    Uri(Uri),
}

/// FHIR MessageHeader type
///
/// The header for a message exchange that is either requesting or responding to
/// an action. The reference(s) that are the subject of the action as well as
/// other information related to the action are typically transmitted in a bundle
/// in which the MessageHeader resource instance is the first resource in the
/// bundle.
///
/// See: [MessageHeader](http://hl7.org/fhir/StructureDefinition/MessageHeader)
#[derive(Debug, Clone, PartialEq, FhirSerde)]
#[fhir_type(name = "MessageHeader", kind = "domain_resource")]
pub struct MessageHeader {
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
    /// Code for the event this message represents or link to event definition
    #[fhir_serde(flatten)]
    pub event: MessageHeaderEvent,
    /// Message destination application(s)
    pub destination: Option<Vec<MessageHeaderDestination>>,
    /// Real world sender of the message
    pub sender: Option<Reference>,
    /// The source of the data entry
    pub enterer: Option<Reference>,
    /// The source of the decision
    pub author: Option<Reference>,
    /// Message source application
    pub source: MessageHeaderSource,
    /// Final responsibility for event
    pub responsible: Option<Reference>,
    /// Cause of event
    pub reason: Option<CodeableConcept>,
    /// If this is a reply to prior message
    pub response: Option<MessageHeaderResponse>,
    /// The actual content of the message
    pub focus: Option<Vec<Reference>>,
    /// Link to the definition for this message
    pub definition: Option<Canonical>,
}

/// Message destination application(s)
#[derive(Debug, Clone, PartialEq, Default, FhirSerde)]
#[fhir_type(name = "MessageHeaderDestination", kind = "backbone_element")]
pub struct MessageHeaderDestination {
    /// Unique id for inter-element referencing
    pub id: Option<std::string::String>,
    /// Additional content defined by implementations
    pub extension: Option<Vec<Extension>>,
    /// Extensions that cannot be ignored even if unrecognized
    #[fhir_serde(rename = "modifierExtension")]
    pub modifier_extension: Option<Vec<Extension>>,
    /// Name of system
    pub name: Option<String>,
    /// Particular delivery destination within the destination
    pub target: Option<Reference>,
    /// Actual destination address or id
    pub endpoint: Url,
    /// Intended "real-world" recipient for the data
    pub receiver: Option<Reference>,
}

/// If this is a reply to prior message
#[derive(Debug, Clone, PartialEq, Default, FhirSerde)]
#[fhir_type(name = "MessageHeaderResponse", kind = "backbone_element")]
pub struct MessageHeaderResponse {
    /// Unique id for inter-element referencing
    pub id: Option<std::string::String>,
    /// Additional content defined by implementations
    pub extension: Option<Vec<Extension>>,
    /// Extensions that cannot be ignored even if unrecognized
    #[fhir_serde(rename = "modifierExtension")]
    pub modifier_extension: Option<Vec<Extension>>,
    /// Id of original message
    pub identifier: Id,
    /// ok | transient-error | fatal-error
    pub code: Code,
    /// Specific list of hints/warnings/errors
    pub details: Option<Reference>,
}

/// Message source application
#[derive(Debug, Clone, PartialEq, Default, FhirSerde)]
#[fhir_type(name = "MessageHeaderSource", kind = "backbone_element")]
pub struct MessageHeaderSource {
    /// Unique id for inter-element referencing
    pub id: Option<std::string::String>,
    /// Additional content defined by implementations
    pub extension: Option<Vec<Extension>>,
    /// Extensions that cannot be ignored even if unrecognized
    #[fhir_serde(rename = "modifierExtension")]
    pub modifier_extension: Option<Vec<Extension>>,
    /// Name of system
    pub name: Option<String>,
    /// Name of software running the system
    pub software: Option<String>,
    /// Version of software running
    pub version: Option<String>,
    /// Human contact for problems
    pub contact: Option<ContactPoint>,
    /// Actual message source address or id
    pub endpoint: Url,
}
