use crate::r4::*;
use crate::FhirSerde;

/// Choice of types for the quantity\[x\] field in ServiceRequest
#[derive(Debug, Clone, PartialEq, FhirSerde)]
#[fhir_choice_element(base_name = "quantity")]
pub enum ServiceRequestQuantity {
    /// Variant accepting the Quantity type.
    #[fhir_serde(rename = "quantityQuantity")]
    Quantity(Quantity),
    /// Variant accepting the Ratio type.
    #[fhir_serde(rename = "quantityRatio")]
    Ratio(Ratio),
    /// Variant accepting the Range type.
    #[fhir_serde(rename = "quantityRange")]
    Range(Range),
}

/// Choice of types for the occurrence\[x\] field in ServiceRequest
#[derive(Debug, Clone, PartialEq, FhirSerde)]
#[fhir_choice_element(base_name = "occurrence")]
pub enum ServiceRequestOccurrence {
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

/// Choice of types for the asNeeded\[x\] field in ServiceRequest
#[derive(Debug, Clone, PartialEq, FhirSerde)]
#[fhir_choice_element(base_name = "asNeeded")]
pub enum ServiceRequestAsNeeded {
    /// Variant accepting the Boolean type.
    #[fhir_serde(rename = "asNeededBoolean")]
    Boolean(Boolean),
    /// Variant accepting the CodeableConcept type.
    #[fhir_serde(rename = "asNeededCodeableConcept")]
    CodeableConcept(CodeableConcept),
}

/// FHIR ServiceRequest type
///
/// A record of a request for service such as diagnostic investigations,
/// treatments, or operations to be performed.
///
/// See: [ServiceRequest](http://hl7.org/fhir/StructureDefinition/ServiceRequest)
#[derive(Debug, Clone, PartialEq, Default, FhirSerde)]
#[fhir_type(name = "ServiceRequest", kind = "domain_resource")]
pub struct ServiceRequest {
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
    /// Identifiers assigned to this order
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
    pub replaces: Option<Vec<Reference>>,
    /// Composite Request ID
    pub requisition: Option<Identifier>,
    /// The status of the order
    pub status: Code,
    /// Whether the request is a proposal, plan, an original order or a reflex order
    pub intent: Code,
    /// Classification of service
    pub category: Option<Vec<CodeableConcept>>,
    /// Indicates how quickly the ServiceRequest should be addressed with respect to other requests
    pub priority: Option<Code>,
    /// True if service/procedure should not be performed
    #[fhir_serde(rename = "doNotPerform")]
    pub do_not_perform: Option<Boolean>,
    /// What is being requested/ordered
    pub code: Option<CodeableConcept>,
    /// Additional order information
    #[fhir_serde(rename = "orderDetail")]
    pub order_detail: Option<Vec<CodeableConcept>>,
    /// Service amount
    #[fhir_serde(flatten)]
    pub quantity: Option<ServiceRequestQuantity>,
    /// Individual or Entity the service is ordered for
    pub subject: Reference,
    /// Encounter in which the request was created
    pub encounter: Option<Reference>,
    /// When service should occur
    #[fhir_serde(flatten)]
    pub occurrence: Option<ServiceRequestOccurrence>,
    /// Preconditions for service
    #[fhir_serde(flatten)]
    pub as_needed: Option<ServiceRequestAsNeeded>,
    /// Date request signed
    #[fhir_serde(rename = "authoredOn")]
    pub authored_on: Option<DateTime>,
    /// Who/what is requesting service
    pub requester: Option<Reference>,
    /// Performer role
    #[fhir_serde(rename = "performerType")]
    pub performer_type: Option<CodeableConcept>,
    /// Requested performer
    pub performer: Option<Vec<Reference>>,
    /// Requested location
    #[fhir_serde(rename = "locationCode")]
    pub location_code: Option<Vec<CodeableConcept>>,
    /// Requested location
    #[fhir_serde(rename = "locationReference")]
    pub location_reference: Option<Vec<Reference>>,
    /// Explanation/Justification for procedure or service
    #[fhir_serde(rename = "reasonCode")]
    pub reason_code: Option<Vec<CodeableConcept>>,
    /// Explanation/Justification for service or service
    #[fhir_serde(rename = "reasonReference")]
    pub reason_reference: Option<Vec<Reference>>,
    /// Associated insurance coverage
    pub insurance: Option<Vec<Reference>>,
    /// Additional clinical information
    #[fhir_serde(rename = "supportingInfo")]
    pub supporting_info: Option<Vec<Reference>>,
    /// Procedure Samples
    pub specimen: Option<Vec<Reference>>,
    /// Location on Body
    #[fhir_serde(rename = "bodySite")]
    pub body_site: Option<Vec<CodeableConcept>>,
    /// Comments
    pub note: Option<Vec<Annotation>>,
    /// Patient or consumer-oriented instructions
    #[fhir_serde(rename = "patientInstruction")]
    pub patient_instruction: Option<String>,
    /// Request provenance
    #[fhir_serde(rename = "relevantHistory")]
    pub relevant_history: Option<Vec<Reference>>,
}
