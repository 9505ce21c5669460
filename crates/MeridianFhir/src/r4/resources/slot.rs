use crate::r4::*;
use crate::FhirSerde;

/// FHIR Slot type
///
/// A slot of time on a schedule that may be available for booking appointments.
///
/// See: [Slot](http://hl7.org/fhir/StructureDefinition/Slot)
#[derive(Debug, Clone, PartialEq, Default, FhirSerde)]
#[fhir_type(name = "Slot", kind = "domain_resource")]
pub struct Slot {
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
    /// A broad categorization of the service that is to be performed during this appointment
    #[fhir_serde(rename = "serviceCategory")]
    pub service_category: Option<Vec<CodeableConcept>>,
    /// The type of appointments that can be booked into this slot (ideally this would be an identifiable service - which is at a location, rather than the location itself). If provided then this overrides the value provided on the availability resource
    #[fhir_serde(rename = "serviceType")]
    pub service_type: Option<Vec<CodeableConcept>>,
    /// The specialty of a practitioner that would be required to perform the service requested in this appointment
    pub specialty: Option<Vec<CodeableConcept>>,
    /// The style of appointment or patient that may be booked in the slot (not service type)
    #[fhir_serde(rename = "appointmentType")]
    pub appointment_type: Option<CodeableConcept>,
    /// The schedule resource that this slot defines an interval of status information
    pub schedule: Reference,
    /// busy | free | busy-unavailable | busy-tentative | entered-in-error
    pub status: Code,
    /// Date/Time that the slot is to begin
    pub start: Instant,
    /// Date/Time that the slot is to conclude
    pub end: Instant,
    /// This slot has already been overbooked, appointments are unlikely to be accepted for this time
    pub overbooked: Option<Boolean>,
    /// Comments on the slot to describe any extended information. Such as custom constraints on the slot
    pub comment: Option<String>,
}
