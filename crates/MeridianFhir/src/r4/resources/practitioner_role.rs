use crate::r4::*;
use crate::FhirSerde;

/// FHIR PractitionerRole type
///
/// Copyright (c) 2021 D4L data4life gGmbH / All rights reserved. D4L owns all
/// legal rights, title and interest in and to the Software Development Kit
/// ("SDK"), including any intellectual property rights that subsist in the SDK.
/// The SDK and its documentation may be accessed and used for viewing/review
/// purposes only. Any usage of the SDK for other purposes, including usage for
/// the development of applications/third-party applications shall require the
/// conclusion of a license agreement between you and D4L. If you are interested
/// in licensing the SDK for your own applications/third-party applications
/// and/or if you’d like to contribute to the development of the SDK, please
/// contact D4L by email to help@data4life.care.
///
/// See: [PractitionerRole](http://hl7.org/fhir/StructureDefinition/PractitionerRole)
#[derive(Debug, Clone, PartialEq, Default, FhirSerde)]
#[fhir_type(name = "PractitionerRole", kind = "domain_resource")]
pub struct PractitionerRole {
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
    /// Business Identifiers that are specific to a role/location
    pub identifier: Option<Vec<Identifier>>,
    /// Whether this practitioner role record is in active use
    pub active: Option<Boolean>,
    /// The period during which the practitioner is authorized to perform in these role(s)
    pub period: Option<Period>,
    /// Practitioner that is able to provide the defined services for the organization
    pub practitioner: Option<Reference>,
    /// Organization where the roles are available
    pub organization: Option<Reference>,
    /// Roles which this practitioner may perform
    pub code: Option<Vec<CodeableConcept>>,
    /// Specific specialty of the practitioner
    pub specialty: Option<Vec<CodeableConcept>>,
    /// The location(s) at which this practitioner provides care
    pub location: Option<Vec<Reference>>,
    /// The list of healthcare services that this worker provides for this role's Organization/Location(s)
    #[fhir_serde(rename = "healthcareService")]
    pub healthcare_service: Option<Vec<Reference>>,
    /// Contact details that are specific to the role/location/service
    pub telecom: Option<Vec<ContactPoint>>,
    /// Times the Service Site is available
    #[fhir_serde(rename = "availableTime")]
    pub available_time: Option<Vec<PractitionerRoleAvailableTime>>,
    /// Not available during this time due to provided reason
    #[fhir_serde(rename = "notAvailable")]
    pub not_available: Option<Vec<PractitionerRoleNotAvailable>>,
    /// Description of availability exceptions
    #[fhir_serde(rename = "availabilityExceptions")]
    pub availability_exceptions: Option<String>,
    /// Technical endpoints providing access to services operated for the practitioner with this role
    pub endpoint: Option<Vec<Reference>>,
}

/// Times the Service Site is available
#[derive(Debug, Clone, PartialEq, Default, FhirSerde)]
#[fhir_type(name = "PractitionerRoleAvailableTime", kind = "backbone_element")]
pub struct PractitionerRoleAvailableTime {
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

/// Not available during this time due to provided reason
#[derive(Debug, Clone, PartialEq, Default, FhirSerde)]
#[fhir_type(name = "PractitionerRoleNotAvailable", kind = "backbone_element")]
pub struct PractitionerRoleNotAvailable {
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
