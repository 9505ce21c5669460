use crate::r4::*;
use crate::FhirSerde;

/// FHIR Appointment type
///
/// A booking of a healthcare event among patient(s), practitioner(s), related
/// person(s) and/or device(s) for a specific date/time. This may result in one
/// or more Encounter(s)
///
/// See: [Appointment](http://hl7.org/fhir/StructureDefinition/Appointment)
#[derive(Debug, Clone, PartialEq, Default, FhirSerde)]
#[fhir_type(name = "Appointment", kind = "domain_resource")]
pub struct Appointment {
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
    /// External Ids for this item
    pub identifier: Option<Vec<Identifier>>,
    /// The overall status of the Appointment. Each of the participants has their own participation status which indicates their involvement in the process, however this status indicates the shared status.
    pub status: Code,
    /// The coded reason for the appointment being cancelled
    #[fhir_serde(rename = "cancelationReason")]
    pub cancelation_reason: Option<CodeableConcept>,
    /// A broad categorization of the service that is to be performed during this appointment
    #[fhir_serde(rename = "serviceCategory")]
    pub service_category: Option<Vec<CodeableConcept>>,
    /// The specific service that is to be performed during this appointment
    #[fhir_serde(rename = "serviceType")]
    pub service_type: Option<Vec<CodeableConcept>>,
    /// The specialty of a practitioner that would be required to perform the service requested in this appointment
    pub specialty: Option<Vec<CodeableConcept>>,
    /// The style of appointment or patient that has been booked in the slot (not service type)
    #[fhir_serde(rename = "appointmentType")]
    pub appointment_type: Option<CodeableConcept>,
    /// Coded reason this appointment is scheduled
    #[fhir_serde(rename = "reasonCode")]
    pub reason_code: Option<Vec<CodeableConcept>>,
    /// Reason the appointment is to take place (resource)
    #[fhir_serde(rename = "reasonReference")]
    pub reason_reference: Option<Vec<Reference>>,
    /// Used to make informed decisions if needing to re-prioritize
    pub priority: Option<UnsignedInt>,
    /// Shown on a subject line in a meeting request, or appointment list
    pub description: Option<Markdown>,
    /// Additional information to support the appointment
    #[fhir_serde(rename = "supportingInformation")]
    pub supporting_information: Option<Vec<Reference>>,
    /// When appointment is to take place
    pub start: Option<Instant>,
    /// When appointment is to conclude
    pub end: Option<Instant>,
    /// Can be less than start/end (e.g. estimate).
    #[fhir_serde(rename = "minutesDuration")]
    pub minutes_duration: Option<PositiveInt>,
    /// The slots that this appointment is filling
    pub slot: Option<Vec<Reference>>,
    /// The date that this appointment was initially created
    pub created: Option<DateTime>,
    /// Additional comments
    pub comment: Option<String>,
    /// Detailed information and instructions for the patient
    #[fhir_serde(rename = "patientInstruction")]
    pub patient_instruction: Option<String>,
    /// The service request this appointment is allocated to assess
    #[fhir_serde(rename = "basedOn")]
    pub based_on: Option<Vec<Reference>>,
    /// Participants involved in appointment
    pub participant: Vec<AppointmentParticipant>,
    /// Potential date/time interval(s) requested to allocate the appointment within
    #[fhir_serde(rename = "requestedPeriod")]
    pub requested_period: Option<Vec<Period>>,
}

/// Participants involved in appointment
#[derive(Debug, Clone, PartialEq, Default, FhirSerde)]
#[fhir_type(name = "AppointmentParticipant", kind = "backbone_element")]
pub struct AppointmentParticipant {
    /// Unique id for inter-element referencing
    pub id: Option<std::string::String>,
    /// Additional content defined by implementations
    pub extension: Option<Vec<Extension>>,
    /// Extensions that cannot be ignored even if unrecognized
    #[fhir_serde(rename = "modifierExtension")]
    pub modifier_extension: Option<Vec<Extension>>,
    /// Role of participant in the appointment
    #[fhir_serde(rename = "type")]
    pub r#type: Option<Vec<CodeableConcept>>,
    /// Person, Location/HealthcareService or Device
    pub actor: Option<Reference>,
    /// Whether this participant is required to be present at the meeting. This covers a use-case where two doctors need to meet to discuss the results for a specific patient, and the patient is not required to be present.
    pub required: Option<Code>,
    /// Participation status of the actor
    pub status: Code,
    /// Participation period of the actor
    pub period: Option<Period>,
}
