use crate::r4::*;
use crate::FhirSerde;

/// Choice of types for the manufacturer\[x\] field in DeviceDefinition
#[derive(Debug, Clone, PartialEq, FhirSerde)]
#[fhir_choice_element(base_name = "manufacturer")]
pub enum DeviceDefinitionManufacturer {
    /// Variant accepting the String type.
    #[fhir_serde(rename = "manufacturerString")]
    String(String),
    /// Variant accepting the Reference type.
    #[fhir_serde(rename = "manufacturerReference")]
    Reference(Reference),
}

/// FHIR DeviceDefinition type
///
/// The characteristics, operational status and capabilities of a medical-related
/// component of a medical device.
///
/// See: [DeviceDefinition](http://hl7.org/fhir/StructureDefinition/DeviceDefinition)
#[derive(Debug, Clone, PartialEq, Default, FhirSerde)]
#[fhir_type(name = "DeviceDefinition", kind = "domain_resource")]
pub struct DeviceDefinition {
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
    /// Unique Device Identifier (UDI) Barcode string
    #[fhir_serde(rename = "udiDeviceIdentifier")]
    pub udi_device_identifier: Option<Vec<DeviceDefinitionUdiDeviceIdentifier>>,
    /// Name of device manufacturer
    #[fhir_serde(flatten)]
    pub manufacturer: Option<DeviceDefinitionManufacturer>,
    /// A name given to the device to identify it
    #[fhir_serde(rename = "deviceName")]
    pub device_name: Option<Vec<DeviceDefinitionDeviceName>>,
    /// The model number for the device
    #[fhir_serde(rename = "modelNumber")]
    pub model_number: Option<String>,
    /// What kind of device or device system this is
    #[fhir_serde(rename = "type")]
    pub r#type: Option<CodeableConcept>,
    /// The capabilities supported on a device, the standards to which the device conforms for a particular purpose, and used for the communication
    pub specialization: Option<Vec<DeviceDefinitionSpecialization>>,
    /// Available versions
    pub version: Option<Vec<String>>,
    /// Safety characteristics of the device
    pub safety: Option<Vec<CodeableConcept>>,
    /// Shelf Life and storage information
    #[fhir_serde(rename = "shelfLifeStorage")]
    pub shelf_life_storage: Option<Vec<ProductShelfLife>>,
    /// Dimensions, color etc.
    #[fhir_serde(rename = "physicalCharacteristics")]
    pub physical_characteristics: Option<ProdCharacteristic>,
    /// Language code for the human-readable text strings produced by the device (all supported)
    #[fhir_serde(rename = "languageCode")]
    pub language_code: Option<Vec<CodeableConcept>>,
    /// Device capabilities
    pub capability: Option<Vec<DeviceDefinitionCapability>>,
    /// The actual configuration settings of a device as it actually operates, e.g., regulation status, time properties
    pub property: Option<Vec<DeviceDefinitionProperty>>,
    /// Organization responsible for device
    pub owner: Option<Reference>,
    /// Details for human/organization for support
    pub contact: Option<Vec<ContactPoint>>,
    /// Network address to contact device
    pub url: Option<Uri>,
    /// Access to on-line information
    #[fhir_serde(rename = "onlineInformation")]
    pub online_information: Option<String>,
    /// Device notes and comments
    pub note: Option<Vec<Annotation>>,
    /// The quantity of the device present in the packaging (e.g. the number of devices present in a pack, or the number of devices in the same package of the medicinal product).
    pub quantity: Option<Quantity>,
    /// The parent device it can be part of
    #[fhir_serde(rename = "parentDevice")]
    pub parent_device: Option<Reference>,
    /// A substance used to create the material(s) of which the device is made
    pub material: Option<Vec<DeviceDefinitionMaterial>>,
}

/// Device capabilities
#[derive(Debug, Clone, PartialEq, Default, FhirSerde)]
#[fhir_type(name = "DeviceDefinitionCapability", kind = "backbone_element")]
pub struct DeviceDefinitionCapability {
    /// Unique id for inter-element referencing
    pub id: Option<std::string::String>,
    /// Additional content defined by implementations
    pub extension: Option<Vec<Extension>>,
    /// Extensions that cannot be ignored even if unrecognized
    #[fhir_serde(rename = "modifierExtension")]
    pub modifier_extension: Option<Vec<Extension>>,
    /// Type of capability
    #[fhir_serde(rename = "type")]
    pub r#type: CodeableConcept,
    /// Description of capability
    pub description: Option<Vec<CodeableConcept>>,
}

/// A name given to the device to identify it
#[derive(Debug, Clone, PartialEq, Default, FhirSerde)]
#[fhir_type(name = "DeviceDefinitionDeviceName", kind = "backbone_element")]
pub struct DeviceDefinitionDeviceName {
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

/// A substance used to create the material(s) of which the device is made
#[derive(Debug, Clone, PartialEq, Default, FhirSerde)]
#[fhir_type(name = "DeviceDefinitionMaterial", kind = "backbone_element")]
pub struct DeviceDefinitionMaterial {
    /// Unique id for inter-element referencing
    pub id: Option<std::string::String>,
    /// Additional content defined by implementations
    pub extension: Option<Vec<Extension>>,
    /// Extensions that cannot be ignored even if unrecognized
    #[fhir_serde(rename = "modifierExtension")]
    pub modifier_extension: Option<Vec<Extension>>,
    /// The substance
    pub substance: CodeableConcept,
    /// Indicates an alternative material of the device
    pub alternate: Option<Boolean>,
    /// Whether the substance is a known or suspected allergen
    #[fhir_serde(rename = "allergenicIndicator")]
    pub allergenic_indicator: Option<Boolean>,
}

/// The actual configuration settings of a device as it actually operates, e.g., regulation status, time properties
#[derive(Debug, Clone, PartialEq, Default, FhirSerde)]
#[fhir_type(name = "DeviceDefinitionProperty", kind = "backbone_element")]
pub struct DeviceDefinitionProperty {
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
#[fhir_type(name = "DeviceDefinitionSpecialization", kind = "backbone_element")]
pub struct DeviceDefinitionSpecialization {
    /// Unique id for inter-element referencing
    pub id: Option<std::string::String>,
    /// Additional content defined by implementations
    pub extension: Option<Vec<Extension>>,
    /// Extensions that cannot be ignored even if unrecognized
    #[fhir_serde(rename = "modifierExtension")]
    pub modifier_extension: Option<Vec<Extension>>,
    /// The standard that is used to operate and communicate
    #[fhir_serde(rename = "systemType")]
    pub system_type: String,
    /// The version of the standard that is used to operate and communicate
    pub version: Option<String>,
}

/// Unique Device Identifier (UDI) Barcode string
#[derive(Debug, Clone, PartialEq, Default, FhirSerde)]
#[fhir_type(name = "DeviceDefinitionUdiDeviceIdentifier", kind = "backbone_element")]
pub struct DeviceDefinitionUdiDeviceIdentifier {
    /// Unique id for inter-element referencing
    pub id: Option<std::string::String>,
    /// Additional content defined by implementations
    pub extension: Option<Vec<Extension>>,
    /// Extensions that cannot be ignored even if unrecognized
    #[fhir_serde(rename = "modifierExtension")]
    pub modifier_extension: Option<Vec<Extension>>,
    /// The identifier that is to be associated with every Device that references this DeviceDefintiion for the issuer and jurisdication porvided in the DeviceDefinition.udiDeviceIdentifier
    #[fhir_serde(rename = "deviceIdentifier")]
    pub device_identifier: String,
    /// The organization that assigns the identifier algorithm
    pub issuer: String,
    /// The jurisdiction to which the deviceIdentifier applies
    pub jurisdiction: String,
}
