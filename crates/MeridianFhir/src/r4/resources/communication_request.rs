use crate::r4::*;
use crate::FhirSerde;

/// Choice of types for the occurrence\[x\] field in CommunicationRequest
#[derive(Debug, Clone, PartialEq, FhirSerde)]
#[fhir_choice_element(base_name = "occurrence")]
pub enum CommunicationRequestOccurrence {
    /// Variant accepting the DateTime type.
    #[fhir_serde(rename = "occurrenceDateTime")]
    DateTime(DateTime),
    /// Variant accepting the Period type.
    #[fhir_serde(rename = "occurrencePeriod")]
    Period(Period),
}

/// FHIR CommunicationRequest type
///
/// A request to convey information; e.g. the CDS system proposes that an alert
/// be sent to a responsible provider, the CDS system proposes that the public
/// health agency be notified about a reportable condition.
///
/// See: [CommunicationRequest](http://hl7.org/fhir/StructureDefinition/CommunicationRequest)
#[derive(Debug, Clone, PartialEq, Default, FhirSerde)]
#[fhir_type(name = "CommunicationRequest", kind = "domain_resource")]
pub struct CommunicationRequest {
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
    /// Fulfills plan or proposal
    #[fhir_serde(rename = "basedOn")]
    pub based_on: Option<Vec<Reference>>,
    /// Request(s) replaced by this request
    pub replaces: Option<Vec<Reference>>,
    /// Composite request this is part of
    #[fhir_serde(rename = "groupIdentifier")]
    pub group_identifier: Option<Identifier>,
    /// The status of the proposal or order
    pub status: Code,
    /// Reason for current status
    #[fhir_serde(rename = "statusReason")]
    pub status_reason: Option<CodeableConcept>,
    /// Message category
    pub category: Option<Vec<CodeableConcept>>,
    /// Characterizes how quickly the proposed act must be initiated. Includes concepts such as stat, urgent, routine.
    pub priority: Option<Code>,
    /// True if request is prohibiting action
    #[fhir_serde(rename = "doNotPerform")]
    pub do_not_perform: Option<Boolean>,
    /// A channel of communication
    pub medium: Option<Vec<CodeableConcept>>,
    /// Focus of message
    pub subject: Option<Reference>,
    /// Resources that pertain to this communication request
    pub about: Option<Vec<Reference>>,
    /// Encounter created as part of
    pub encounter: Option<Reference>,
    /// Message payload
    pub payload: Option<Vec<CommunicationRequestPayload>>,
    /// When scheduled
    #[fhir_serde(flatten)]
    pub occurrence: Option<CommunicationRequestOccurrence>,
    /// When request transitioned to being actionable
    #[fhir_serde(rename = "authoredOn")]
    pub authored_on: Option<DateTime>,
    /// Who/what is requesting service
    pub requester: Option<Reference>,
    /// Message recipient
    pub recipient: Option<Vec<Reference>>,
    /// Message sender
    pub sender: Option<Reference>,
    /// Why is communication needed?
    #[fhir_serde(rename = "reasonCode")]
    pub reason_code: Option<Vec<CodeableConcept>>,
    /// Why is communication needed?
    #[fhir_serde(rename = "reasonReference")]
    pub reason_reference: Option<Vec<Reference>>,
    /// Comments made about communication request
    pub note: Option<Vec<Annotation>>,
}

/// Choice of types for the content\[x\] field in CommunicationRequestPayload
#[derive(Debug, Clone, PartialEq, FhirSerde)]
#[fhir_choice_element(base_name = "content")]
pub enum CommunicationRequestPayloadContent {
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
#[fhir_type(name = "CommunicationRequestPayload", kind = "backbone_element")]
pub struct CommunicationRequestPayload {
    /// Unique id for inter-element referencing
    pub id: Option<std::string::String>,
    /// Additional content defined by implementations
    pub extension: Option<Vec<Extension>>,
    /// Extensions that cannot be ignored even if unrecognized
    #[fhir_serde(rename = "modifierExtension")]
    pub modifier_extension: Option<Vec<Extension>>,
    /// Message part content
    #[fhir_serde(flatten)]
    pub content: CommunicationRequestPayloadContent,
}
