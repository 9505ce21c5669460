use crate::r4::*;
use crate::FhirSerde;

/// FHIR HealthcareService type
///
/// The details of a healthcare service available at a location
///
/// See: [HealthcareService](http://hl7.org/fhir/StructureDefinition/HealthcareService)
#[derive(Debug, Clone, PartialEq, Default, FhirSerde)]
#[fhir_type(name = "HealthcareService", kind = "domain_resource")]
pub struct HealthcareService {
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
    /// External identifiers for this item
    pub identifier: Option<Vec<Identifier>>,
    /// Whether this HealthcareService record is in active use
    pub active: Option<Boolean>,
    /// Organization that provides this service
    #[fhir_serde(rename = "providedBy")]
    pub provided_by: Option<Reference>,
    /// Broad category of service being performed or delivered
    pub category: Option<Vec<CodeableConcept>>,
    /// Type of service that may be delivered or performed
    #[fhir_serde(rename = "type")]
    pub r#type: Option<Vec<CodeableConcept>>,
    /// Specialties handled by the HealthcareService
    pub specialty: Option<Vec<CodeableConcept>>,
    /// Location(s) where service may be provided
    pub location: Option<Vec<Reference>>,
    /// Description of service as presented to a consumer while searching
    pub name: Option<String>,
    /// Additional description and/or any specific issues not covered elsewhere
    pub comment: Option<String>,
    /// Extra details about the service that can't be placed in the other fields
    #[fhir_serde(rename = "extraDetails")]
    pub extra_details: Option<String>,
    /// Facilitates quick identification of the service
    pub photo: Option<Attachment>,
    /// Contacts related to the healthcare service
    pub telecom: Option<Vec<ContactPoint>>,
    /// Location(s) service is intended for/available to
    #[fhir_serde(rename = "coverageArea")]
    pub coverage_area: Option<Vec<Reference>>,
    /// Conditions under which service is available/offered
    #[fhir_serde(rename = "serviceProvisionCode")]
    pub service_provision_code: Option<Vec<CodeableConcept>>,
    /// Specific eligibility requirements required to use the service
    pub eligibility: Option<Vec<HealthcareServiceEligibility>>,
    /// Programs that this service is applicable to
    pub program: Option<Vec<CodeableConcept>>,
    /// Collection of characteristics (attributes)
    pub characteristic: Option<Vec<CodeableConcept>>,
    /// The language that this service is offered in
    pub communication: Option<Vec<CodeableConcept>>,
    /// Ways that the service accepts referrals
    #[fhir_serde(rename = "referralMethod")]
    pub referral_method: Option<Vec<CodeableConcept>>,
    /// If an appointment is required for access to this service
    #[fhir_serde(rename = "appointmentRequired")]
    pub appointment_required: Option<Boolean>,
    /// Times the Service Site is available
    #[fhir_serde(rename = "availableTime")]
    pub available_time: Option<Vec<HealthcareServiceAvailableTime>>,
    /// Not available during this time due to provided reason
    #[fhir_serde(rename = "notAvailable")]
    pub not_available: Option<Vec<HealthcareServiceNotAvailable>>,
    /// Description of availability exceptions
    #[fhir_serde(rename = "availabilityExceptions")]
    pub availability_exceptions: Option<String>,
    /// Technical endpoints providing access to electronic services operated for the healthcare service
    pub endpoint: Option<Vec<Reference>>,
}

/// Times the Service Site is available
#[derive(Debug, Clone, PartialEq, Default, FhirSerde)]
#[fhir_type(name = "HealthcareServiceAvailableTime", kind = "backbone_element")]
pub struct HealthcareServiceAvailableTime {
    /// Unique id for inter-element referencing
    pub id: Option<std::string::String>,
    /// Additional content defined by implementations
    pub extension: Option<Vec<Extension>>,
    /// Extensions that cannot be ignored even if unrecognized
    #[fhir_serde(rename = "modifierExtension")]
    pub modifier_extension: Option<Vec<Extension>>,
    /// Indicates which days of the week are available between the start and end Times
    #[fhir_serde(rename = "daysOfWeek")]
    pub days_of_week: Option<Vec<Code>>,
    /// Always available? e.g. 24 hour service.
    #[fhir_serde(rename = "allDay")]
    pub all_day: Option<Boolean>,
    /// Opening time of day (ignored if allDay = true)
    #[fhir_serde(rename = "availableStartTime")]
    pub available_start_time: Option<Time>,
    /// Closing time of day (ignored if allDay = true)
    #[fhir_serde(rename = "availableEndTime")]
    pub available_end_time: Option<Time>,
}

/// Specific eligibility requirements required to use the service
#[derive(Debug, Clone, PartialEq, Default, FhirSerde)]
#[fhir_type(name = "HealthcareServiceEligibility", kind = "backbone_element")]
pub struct HealthcareServiceEligibility {
    /// Unique id for inter-element referencing
    pub id: Option<std::string::String>,
    /// Additional content defined by implementations
    pub extension: Option<Vec<Extension>>,
    /// Extensions that cannot be ignored even if unrecognized
    #[fhir_serde(rename = "modifierExtension")]
    pub modifier_extension: Option<Vec<Extension>>,
    /// Coded value for the eligibility
    pub code: Option<CodeableConcept>,
    /// Describes the eligibility conditions for the service
    pub comment: Option<String>,
}

/// Not available during this time due to provided reason
#[derive(Debug, Clone, PartialEq, Default, FhirSerde)]
#[fhir_type(name = "HealthcareServiceNotAvailable", kind = "backbone_element")]
pub struct HealthcareServiceNotAvailable {
    /// Unique id for inter-element referencing
    pub id: Option<std::string::String>,
    /// Additional content defined by implementations
    pub extension: Option<Vec<Extension>>,
    /// Extensions that cannot be ignored even if unrecognized
    #[fhir_serde(rename = "modifierExtension")]
    pub modifier_extension: Option<Vec<Extension>>,
    /// Reason presented to the user explaining why time not available
    pub description: String,
    /// Service not available from this date
    pub during: Option<Period>,
}
