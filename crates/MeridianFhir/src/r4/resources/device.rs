use crate::r4::*;
use crate::FhirSerde;

/// FHIR Device type
///
/// A type of a manufactured item that is used in the provision of healthcare
/// without being substantially changed through that activity. The device may be
/// a medical or non-medical device.
///
/// See: [Device](http://hl7.org/fhir/StructureDefinition/Device)
#[derive(Debug, Clone, PartialEq, Default, FhirSerde)]
#[fhir_type(name = "Device", kind = "domain_resource")]
pub struct Device {
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
    /// Instance identifier
    pub identifier: Option<Vec<Identifier>>,
    /// The reference to the definition for the device
    pub definition: Option<Reference>,
    /// Unique Device Identifier (UDI) Barcode string
    #[fhir_serde(rename = "udiCarrier")]
    pub udi_carrier: Option<Vec<DeviceUdiCarrier>>,
    /// Status of the Device availability
    pub status: Option<Code>,
    /// online | paused | standby | offline | not-ready | transduc-discon | hw-discon | off
    #[fhir_serde(rename = "statusReason")]
    pub status_reason: Option<Vec<CodeableConcept>>,
    /// The distinct identification string
    #[fhir_serde(rename = "distinctIdentifier")]
    pub distinct_identifier: Option<String>,
    /// Name of device manufacturer
    pub manufacturer: Option<String>,
    /// Date when the device was made
    #[fhir_serde(rename = "manufactureDate")]
    pub manufacture_date: Option<DateTime>,
    /// Date and time of expiry of this device (if applicable)
    #[fhir_serde(rename = "expirationDate")]
    pub expiration_date: Option<DateTime>,
    /// Lot number of manufacture
    #[fhir_serde(rename = "lotNumber")]
    pub lot_number: Option<String>,
    /// Serial number assigned by the manufacturer
    #[fhir_serde(rename = "serialNumber")]
    pub serial_number: Option<String>,
    /// The name of the device as given by the manufacturer
    #[fhir_serde(rename = "deviceName")]
    pub device_name: Option<Vec<DeviceDeviceName>>,
    /// The model number for the device
    #[fhir_serde(rename = "modelNumber")]
    pub model_number: Option<String>,
    /// The part number of the device
    #[fhir_serde(rename = "partNumber")]
    pub part_number: Option<String>,
    /// The kind or type of device
    #[fhir_serde(rename = "type")]
    pub r#type: Option<CodeableConcept>,
    /// The capabilities supported on a device, the standards to which the device conforms for a particular purpose, and used for the communication
    pub specialization: Option<Vec<DeviceSpecialization>>,
    /// The actual design of the device or software version running on the device
    pub version: Option<Vec<DeviceVersion>>,
    /// The actual configuration settings of a device as it actually operates, e.g., regulation status, time properties
    pub property: Option<Vec<DeviceProperty>>,
    /// Patient to whom Device is affixed
    pub patient: Option<Reference>,
    /// Organization responsible for device
    pub owner: Option<Reference>,
    /// Details for human/organization for support
    pub contact: Option<Vec<ContactPoint>>,
    /// Where the device is found
    pub location: Option<Reference>,
    /// Network address to contact device
    pub url: Option<Uri>,
    /// Device notes and comments
    pub note: Option<Vec<Annotation>>,
    /// Safety Characteristics of Device
    pub safety: Option<Vec<CodeableConcept>>,
    /// The parent device
    pub parent: Option<Reference>,
}

/// The name of the device as given by the manufacturer
#[derive(Debug, Clone, PartialEq, Default, FhirSerde)]
#[fhir_type(name = "DeviceDeviceName", kind = "backbone_element")]
pub struct DeviceDeviceName {
    /// Unique id for inter-element referencing
    pub id: Option<std::string::String>,
    /// Additional content defined by implementations
    pub extension: Option<Vec<Extension>>,
    /// Extensions that cannot be ignored even if unrecognized
    #[fhir_serde(rename = "modifierExtension")]
    pub modifier_extension: Option<Vec<Extension>>,
    /// The name of the device
    pub name: String,
    /// The type of deviceName. UDILabelName | UserFriendlyName | PatientReportedName | ManufactureDeviceName | ModelName.
    #[fhir_serde(rename = "type")]
    pub r#type: Code,
}

/// The actual configuration settings of a device as it actually operates, e.g., regulation status, time properties
#[derive(Debug, Clone, PartialEq, Default, FhirSerde)]
#[fhir_type(name = "DeviceProperty", kind = "backbone_element")]
pub struct DeviceProperty {
    /// Unique id for inter-element referencing
    pub id: Option<std::string::String>,
    /// Additional content defined by implementations
    pub extension: Option<Vec<Extension>>,
    /// Extensions that cannot be ignored even if unrecognized
    #[fhir_serde(rename = "modifierExtension")]
    pub modifier_extension: Option<Vec<Extension>>,
    /// Code that specifies the property DeviceDefinitionPropetyCode (Extensible)
    #[fhir_serde(rename = "type")]
    pub r#type: CodeableConcept,
    /// Property value as a quantity
    #[fhir_serde(rename = "valueQuantity")]
    pub value_quantity: Option<Vec<Quantity>>,
    /// Property value as a code, e.g., NTP4 (synced to NTP)
    #[fhir_serde(rename = "valueCode")]
    pub value_code: Option<Vec<CodeableConcept>>,
}

/// The capabilities supported on a device, the standards to which the device conforms for a particular purpose, and used for the communication
#[derive(Debug, Clone, PartialEq, Default, FhirSerde)]
#[fhir_type(name = "DeviceSpecialization", kind = "backbone_element")]
pub struct DeviceSpecialization {
    /// Unique id for inter-element referencing
    pub id: Option<std::string::String>,
    /// Additional content defined by implementations
    pub extension: Option<Vec<Extension>>,
    /// Extensions that cannot be ignored even if unrecognized
    #[fhir_serde(rename = "modifierExtension")]
    pub modifier_extension: Option<Vec<Extension>>,
    /// The standard that is used to operate and communicate
    #[fhir_serde(rename = "systemType")]
    pub system_type: CodeableConcept,
    /// The version of the standard that is used to operate and communicate
    pub version: Option<String>,
}

/// Unique Device Identifier (UDI) Barcode string
#[derive(Debug, Clone, PartialEq, Default, FhirSerde)]
#[fhir_type(name = "DeviceUdiCarrier", kind = "backbone_element")]
pub struct DeviceUdiCarrier {
    /// Unique id for inter-element referencing
    pub id: Option<std::string::String>,
    /// Additional content defined by implementations
    pub extension: Option<Vec<Extension>>,
    /// Extensions that cannot be ignored even if unrecognized
    #[fhir_serde(rename = "modifierExtension")]
    pub modifier_extension: Option<Vec<Extension>>,
    /// Mandatory fixed portion of UDI
    #[fhir_serde(rename = "deviceIdentifier")]
    pub device_identifier: Option<String>,
    /// UDI Issuing Organization
    pub issuer: Option<String>,
    /// Regional UDI authority
    pub jurisdiction: Option<String>,
    /// UDI Machine Readable Barcode String
    #[fhir_serde(rename = "carrierAIDC")]
    pub carrier_a_i_d_c: Option<String>,
    /// UDI Human Readable Barcode String
    #[fhir_serde(rename = "carrierHRF")]
    pub carrier_h_r_f: Option<String>,
    /// A coded entry to indicate how the data was entered
    #[fhir_serde(rename = "entryType")]
    pub entry_type: Option<Code>,
}

/// The actual design of the device or software version running on the device
#[derive(Debug, Clone, PartialEq, Default, FhirSerde)]
#[fhir_type(name = "DeviceVersion", kind = "backbone_element")]
pub struct DeviceVersion {
    /// Unique id for inter-element referencing
    pub id: Option<std::string::String>,
    /// Additional content defined by implementations
    pub extension: Option<Vec<Extension>>,
    /// Extensions that cannot be ignored even if unrecognized
    #[fhir_serde(rename = "modifierExtension")]
    pub modifier_extension: Option<Vec<Extension>>,
    /// The type of the device version
    #[fhir_serde(rename = "type")]
    pub r#type: Option<CodeableConcept>,
    /// A single component of the device version
    pub component: Option<Identifier>,
    /// The version text
    pub value: String,
}
