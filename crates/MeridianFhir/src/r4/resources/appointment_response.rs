use crate::r4::*;
use crate::FhirSerde;

/// FHIR AppointmentResponse type
///
/// A reply to an appointment request for a patient and/or practitioner(s), such
/// as a confirmation or rejection.
///
/// See: [AppointmentResponse](http://hl7.org/fhir/StructureDefinition/AppointmentResponse)
#[derive(Debug, Clone, PartialEq, Default, FhirSerde)]
#[fhir_type(name = "AppointmentResponse", kind = "domain_resource")]
pub struct AppointmentResponse {
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
    /// Appointment this response relates to
    pub appointment: Reference,
    /// Time from appointment, or requested new start time
    pub start: Option<Instant>,
    /// Time from appointment, or requested new end time
    pub end: Option<Instant>,
    /// Role of participant in the appointment
    #[fhir_serde(rename = "participantType")]
    pub participant_type: Option<Vec<CodeableConcept>>,
    /// Person, Location, HealthcareService, or Device
    pub actor: Option<Reference>,
    /// accepted | declined | tentative | needs-action
    #[fhir_serde(rename = "participantStatus")]
    pub participant_status: Code,
    /// Additional comments
    pub comment: Option<String>,
}
