use crate::r4::*;
use crate::FhirSerde;

/// Choice of types for the code\[x\] field in DeviceRequest
#[derive(Debug, Clone, PartialEq, FhirSerde)]
#[fhir_choice_element(base_name = "code")]
pub enum DeviceRequestCode {
    /// Variant accepting the Reference type.
    #[fhir_serde(rename = "codeReference")]
    Reference(Reference),
    /// Variant accepting the CodeableConcept type.
    #[fhir_serde(rename = "codeCodeableConcept")]
    CodeableConcept(CodeableConcept),
}

/// Choice of types for the occurrence\[x\] field in DeviceRequest
#[derive(Debug, Clone, PartialEq, FhirSerde)]
#[fhir_choice_element(base_name = "occurrence")]
pub enum DeviceRequestOccurrence {
    /// Variant accepting the DateTime type.
    #[fhir_serde(rename = "occurrenceDateTime")]
    DateTime(DateTime),
    /// Variant accepting the Period type.
    #[fhir_serde(rename = "occurrencePeriod")]
    Period(Period),
    /// Variant accepting the Timing type.
    #[fhir_serde(rename = "occurrenceTiming")]
    Timing(Timing),
}

/// FHIR DeviceRequest type
///
/// Represents a request for a patient to employ a medical device. The device may
/// be an implantable device, or an external assistive device, such as a walker.
///
/// See: [DeviceRequest](http://hl7.org/fhir/StructureDefinition/DeviceRequest)
#[derive(Debug, Clone, PartialEq, FhirSerde)]
#[fhir_type(name = "DeviceRequest", kind = "domain_resource")]
pub struct DeviceRequest {
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
    /// External Request identifier
    pub identifier: Option<Vec<Identifier>>,
    /// Instantiates FHIR protocol or definition
    #[fhir_serde(rename = "instantiatesCanonical")]
    pub instantiates_canonical: Option<Vec<Canonical>>,
    /// Instantiates external protocol or definition
    #[fhir_serde(rename = "instantiatesUri")]
    pub instantiates_uri: Option<Vec<Uri>>,
    /// What request fulfills
    #[fhir_serde(rename = "basedOn")]
    pub based_on: Option<Vec<Reference>>,
    /// What request replaces
    #[fhir_serde(rename = "priorRequest")]
    pub prior_request: Option<Vec<Reference>>,
    /// Identifier of composite request
    #[fhir_serde(rename = "groupIdentifier")]
    pub group_identifier: Option<Identifier>,
    /// The status of the request
    pub status: Option<Code>,
    /// Whether the request is a proposal, plan, an original order or a reflex order
    pub intent: Code,
    /// Indicates how quickly the {{title}} should be addressed with respect to other requests
    pub priority: Option<Code>,
    /// Device requested
    #[fhir_serde(flatten)]
    pub code: DeviceRequestCode,
    /// Device details
    pub parameter: Option<Vec<DeviceRequestParameter>>,
    /// Focus of request
    pub subject: Reference,
    /// Encounter motivating request
    pub encounter: Option<Reference>,
    /// Desired time or schedule for use
    #[fhir_serde(flatten)]
    pub occurrence: Option<DeviceRequestOccurrence>,
    /// When recorded
    #[fhir_serde(rename = "authoredOn")]
    pub authored_on: Option<DateTime>,
    /// Who/what is requesting diagnostics
    pub requester: Option<Reference>,
    /// Filler role
    #[fhir_serde(rename = "performerType")]
    pub performer_type: Option<CodeableConcept>,
    /// Requested Filler
    pub performer: Option<Reference>,
    /// Coded Reason for request
    #[fhir_serde(rename = "reasonCode")]
    pub reason_code: Option<Vec<CodeableConcept>>,
    /// Linked Reason for request
    #[fhir_serde(rename = "reasonReference")]
    pub reason_reference: Option<Vec<Reference>>,
    /// Associated insurance coverage
    pub insurance: Option<Vec<Reference>>,
    /// Additional clinical information
    #[fhir_serde(rename = "supportingInfo")]
    pub supporting_info: Option<Vec<Reference>>,
    /// Notes or comments
    pub note: Option<Vec<Annotation>>,
    /// Request provenance
    #[fhir_serde(rename = "relevantHistory")]
    pub relevant_history: Option<Vec<Reference>>,
}

/// Choice of types for the value\[x\] field in DeviceRequestParameter
#[derive(Debug, Clone, PartialEq, FhirSerde)]
#[fhir_choice_element(base_name = "value")]
pub enum DeviceRequestParameterValue {
    /// Variant accepting the CodeableConcept type.
    #[fhir_serde(rename = "valueCodeableConcept")]
    CodeableConcept(CodeableConcept),
    /// Variant accepting the Quantity type.
    #[fhir_serde(rename = "valueQuantity")]
    Quantity(Quantity),
    /// Variant accepting the Range type.
    #[fhir_serde(rename = "valueRange")]
    Range(Range),
    /// Variant accepting the Boolean type.
    #[fhir_serde(rename = "valueBoolean")]
    Boolean(Boolean),
}

/// Device details
#[derive(Debug, Clone, PartialEq, Default, FhirSerde)]
#[fhir_type(name = "DeviceRequestParameter", kind = "backbone_element")]
pub struct DeviceRequestParameter {
    /// Unique id for inter-element referencing
    pub id: Option<std::string::String>,
    /// Additional content defined by implementations
    pub extension: Option<Vec<Extension>>,
    /// Extensions that cannot be ignored even if unrecognized
    #[fhir_serde(rename = "modifierExtension")]
    pub modifier_extension: Option<Vec<Extension>>,
    /// Device detail
    pub code: Option<CodeableConcept>,
    /// Value of detail
    #[fhir_serde(flatten)]
    pub value: Option<DeviceRequestParameterValue>,
}
