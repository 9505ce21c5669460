use crate::r4::*;
use crate::FhirSerde;

/// FHIR Communication type
///
/// An occurrence of information being transmitted; e.g. an alert that was sent
/// to a responsible provider, a public health agency that was notified about a
/// reportable condition.
///
/// See: [Communication](http://hl7.org/fhir/StructureDefinition/Communication)
#[derive(Debug, Clone, PartialEq, Default, FhirSerde)]
#[fhir_type(name = "Communication", kind = "domain_resource")]
pub struct Communication {
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
    /// Unique identifier
    pub identifier: Option<Vec<Identifier>>,
    /// Instantiates FHIR protocol or definition
    #[fhir_serde(rename = "instantiatesCanonical")]
    pub instantiates_canonical: Option<Vec<Canonical>>,
    /// Instantiates external protocol or definition
    #[fhir_serde(rename = "instantiatesUri")]
    pub instantiates_uri: Option<Vec<Uri>>,
    /// Request fulfilled by this communication
    #[fhir_serde(rename = "basedOn")]
    pub based_on: Option<Vec<Reference>>,
    /// Part of this action
    #[fhir_serde(rename = "partOf")]
    pub part_of: Option<Vec<Reference>>,
    /// Reply to
    #[fhir_serde(rename = "inResponseTo")]
    pub in_response_to: Option<Vec<Reference>>,
    /// The status of the transmission
    pub status: Code,
    /// Reason for current status
    #[fhir_serde(rename = "statusReason")]
    pub status_reason: Option<CodeableConcept>,
    /// Message category
    pub category: Option<Vec<CodeableConcept>>,
    /// Characterizes how quickly the planned or in progress communication must be addressed. Includes concepts such as stat, urgent, routine.
    pub priority: Option<Code>,
    /// A channel of communication
    pub medium: Option<Vec<CodeableConcept>>,
    /// Focus of message
    pub subject: Option<Reference>,
    /// Description of the purpose/content
    pub topic: Option<CodeableConcept>,
    /// Resources that pertain to this communication
    pub about: Option<Vec<Reference>>,
    /// Encounter created as part of
    pub encounter: Option<Reference>,
    /// When sent
    pub sent: Option<DateTime>,
    /// When received
    pub received: Option<DateTime>,
    /// Message recipient
    pub recipient: Option<Vec<Reference>>,
    /// Message sender
    pub sender: Option<Reference>,
    /// Indication for message
    #[fhir_serde(rename = "reasonCode")]
    pub reason_code: Option<Vec<CodeableConcept>>,
    /// Why was communication done?
    #[fhir_serde(rename = "reasonReference")]
    pub reason_reference: Option<Vec<Reference>>,
    /// Message payload
    pub payload: Option<Vec<CommunicationPayload>>,
    /// Comments made about the communication
    pub note: Option<Vec<Annotation>>,
}

/// Choice of types for the content\[x\] field in CommunicationPayload
#[derive(Debug, Clone, PartialEq, FhirSerde)]
#[fhir_choice_element(base_name = "content")]
pub enum CommunicationPayloadContent {
    /// Variant accepting the String type.
    #[fhir_serde(rename = "contentString")]
    String(String),
    /// Variant accepting the Attachment type.
    #[fhir_serde(rename = "contentAttachment")]
    Attachment(Attachment),
    /// Variant accepting the Reference type.
    #[fhir_serde(rename = "contentReference")]
    Reference(Reference),
}

/// Message payload
#[derive(Debug, Clone, PartialEq, FhirSerde)]
#[fhir_type(name = "CommunicationPayload", kind = "backbone_element")]
pub struct CommunicationPayload {
    /// Unique id for inter-element referencing
    pub id: Option<std::string::String>,
    /// Additional content defined by implementations
    pub extension: Option<Vec<Extension>>,
    /// Extensions that cannot be ignored even if unrecognized
    #[fhir_serde(rename = "modifierExtension")]
    pub modifier_extension: Option<Vec<Extension>>,
    /// Message part content
    #[fhir_serde(flatten)]
    pub content: CommunicationPayloadContent,
}
