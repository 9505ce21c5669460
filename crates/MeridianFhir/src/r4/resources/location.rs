use crate::r4::*;
use crate::FhirSerde;

/// FHIR Location type
///
/// Details and position information for a physical place where services are
/// provided and resources and participants may be stored, found, contained, or
/// accommodated.
///
/// See: [Location](http://hl7.org/fhir/StructureDefinition/Location)
#[derive(Debug, Clone, PartialEq, Default, FhirSerde)]
#[fhir_type(name = "Location", kind = "domain_resource")]
pub struct Location {
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
    /// Unique code or number identifying the location to its users
    pub identifier: Option<Vec<Identifier>>,
    /// The status property covers the general availability of the resource, not the current value which may be covered by the operationStatus, or by a schedule/slots if they are configured for the location
    pub status: Option<Code>,
    /// The operational status of the location (typically only for a bed/room)
    #[fhir_serde(rename = "operationalStatus")]
    pub operational_status: Option<Coding>,
    /// Name of the location as used by humans
    pub name: Option<String>,
    /// A list of alternate names that the location is known as, or was known as, in the past
    pub alias: Option<Vec<String>>,
    /// Additional details about the location that could be displayed as further information to identify the location beyond its name
    pub description: Option<Markdown>,
    /// Indicates whether a resource instance represents a specific location or a class of locations
    pub mode: Option<Code>,
    /// Type of function performed
    #[fhir_serde(rename = "type")]
    pub r#type: Option<Vec<CodeableConcept>>,
    /// Contact details of the location
    pub telecom: Option<Vec<ContactPoint>>,
    /// Physical location
    pub address: Option<Address>,
    /// Physical form of the location
    #[fhir_serde(rename = "physicalType")]
    pub physical_type: Option<CodeableConcept>,
    /// The absolute geographic location
    pub position: Option<LocationPosition>,
    /// Organization responsible for provisioning and upkeep
    #[fhir_serde(rename = "managingOrganization")]
    pub managing_organization: Option<Reference>,
    /// Another Location this one is physically a part of
    #[fhir_serde(rename = "partOf")]
    pub part_of: Option<Reference>,
    /// What days/times during a week is this location usually open
    #[fhir_serde(rename = "hoursOfOperation")]
    pub hours_of_operation: Option<Vec<LocationHoursOfOperation>>,
    /// Description of availability exceptions
    #[fhir_serde(rename = "availabilityExceptions")]
    pub availability_exceptions: Option<String>,
    /// Technical endpoints providing access to services operated for the location
    pub endpoint: Option<Vec<Reference>>,
}

/// What days/times during a week is this location usually open
#[derive(Debug, Clone, PartialEq, Default, FhirSerde)]
#[fhir_type(name = "LocationHoursOfOperation", kind = "backbone_element")]
pub struct LocationHoursOfOperation {
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
    /// The Location is open all day
    #[fhir_serde(rename = "allDay")]
    pub all_day: Option<Boolean>,
    /// Time that the Location opens
    #[fhir_serde(rename = "openingTime")]
    pub opening_time: Option<Time>,
    /// Time that the Location closes
    #[fhir_serde(rename = "closingTime")]
    pub closing_time: Option<Time>,
}

/// The absolute geographic location
#[derive(Debug, Clone, PartialEq, Default, FhirSerde)]
#[fhir_type(name = "LocationPosition", kind = "backbone_element")]
pub struct LocationPosition {
    /// Unique id for inter-element referencing
    pub id: Option<std::string::String>,
    /// Additional content defined by implementations
    pub extension: Option<Vec<Extension>>,
    /// Extensions that cannot be ignored even if unrecognized
    #[fhir_serde(rename = "modifierExtension")]
    pub modifier_extension: Option<Vec<Extension>>,
    /// Longitude with WGS84 datum
    pub longitude: Decimal,
    /// Latitude with WGS84 datum
    pub latitude: Decimal,
    /// Altitude with WGS84 datum
    pub altitude: Option<Decimal>,
}
