use crate::r4::*;
use crate::FhirSerde;

/// FHIR MedicinalProductPackaged type
///
/// A medicinal product in a container or package
///
/// See: [MedicinalProductPackaged](http://hl7.org/fhir/StructureDefinition/MedicinalProductPackaged)
#[derive(Debug, Clone, PartialEq, Default, FhirSerde)]
#[fhir_type(name = "MedicinalProductPackaged", kind = "domain_resource")]
pub struct MedicinalProductPackaged {
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
    /// Unique identifier
    pub identifier: Option<Vec<Identifier>>,
    /// The product with this is a pack for
    pub subject: Option<Vec<Reference>>,
    /// Textual description
    pub description: Option<Markdown>,
    /// The legal status of supply of the medicinal product as classified by the regulator
    #[fhir_serde(rename = "legalStatusOfSupply")]
    pub legal_status_of_supply: Option<CodeableConcept>,
    /// Marketing information
    #[fhir_serde(rename = "marketingStatus")]
    pub marketing_status: Option<Vec<MarketingStatus>>,
    /// Manufacturer of this Package Item
    #[fhir_serde(rename = "marketingAuthorization")]
    pub marketing_authorization: Option<Reference>,
    /// Manufacturer of this Package Item
    pub manufacturer: Option<Vec<Reference>>,
    /// Batch numbering
    #[fhir_serde(rename = "batchIdentifier")]
    pub batch_identifier: Option<Vec<MedicinalProductPackagedBatchIdentifier>>,
    /// A packaging item, as a contained for medicine, possibly with other packaging items within
    #[fhir_serde(rename = "packageItem")]
    pub package_item: Vec<MedicinalProductPackagedPackageItem>,
}

/// Batch numbering
#[derive(Debug, Clone, PartialEq, Default, FhirSerde)]
#[fhir_type(name = "MedicinalProductPackagedBatchIdentifier", kind = "backbone_element")]
pub struct MedicinalProductPackagedBatchIdentifier {
    /// Unique id for inter-element referencing
    pub id: Option<std::string::String>,
    /// Additional content defined by implementations
    pub extension: Option<Vec<Extension>>,
    /// Extensions that cannot be ignored even if unrecognized
    #[fhir_serde(rename = "modifierExtension")]
    pub modifier_extension: Option<Vec<Extension>>,
    /// A number appearing on the outer packaging of a specific batch
    #[fhir_serde(rename = "outerPackaging")]
    pub outer_packaging: Identifier,
    /// A number appearing on the immediate packaging (and not the outer packaging)
    #[fhir_serde(rename = "immediatePackaging")]
    pub immediate_packaging: Option<Identifier>,
}

/// A packaging item, as a contained for medicine, possibly with other packaging items within
#[derive(Debug, Clone, PartialEq, Default, FhirSerde)]
#[fhir_type(name = "MedicinalProductPackagedPackageItem", kind = "backbone_element")]
pub struct MedicinalProductPackagedPackageItem {
    /// Unique id for inter-element referencing
    pub id: Option<std::string::String>,
    /// Additional content defined by implementations
    pub extension: Option<Vec<Extension>>,
    /// Extensions that cannot be ignored even if unrecognized
    #[fhir_serde(rename = "modifierExtension")]
    pub modifier_extension: Option<Vec<Extension>>,
    /// Including possibly Data Carrier Identifier
    pub identifier: Option<Vec<Identifier>>,
    /// The physical type of the container of the medicine
    #[fhir_serde(rename = "type")]
    pub r#type: CodeableConcept,
    /// The quantity of this package in the medicinal product, at the current level of packaging. The outermost is always 1.
    pub quantity: Quantity,
    /// Material type of the package item
    pub material: Option<Vec<CodeableConcept>>,
    /// A possible alternate material for the packaging
    #[fhir_serde(rename = "alternateMaterial")]
    pub alternate_material: Option<Vec<CodeableConcept>>,
    /// A device accompanying a medicinal product
    pub device: Option<Vec<Reference>>,
    /// The manufactured item as contained in the packaged medicinal product
    #[fhir_serde(rename = "manufacturedItem")]
    pub manufactured_item: Option<Vec<Reference>>,
    /// Allows containers within containers
    #[fhir_serde(rename = "packageItem")]
    pub package_item: Option<Vec<MedicinalProductPackagedPackageItem>>,
    /// Dimensions, color etc.
    #[fhir_serde(rename = "physicalCharacteristics")]
    pub physical_characteristics: Option<ProdCharacteristic>,
    /// Other codeable characteristics
    #[fhir_serde(rename = "otherCharacteristics")]
    pub other_characteristics: Option<Vec<CodeableConcept>>,
    /// Shelf Life and storage information
    #[fhir_serde(rename = "shelfLifeStorage")]
    pub shelf_life_storage: Option<Vec<ProductShelfLife>>,
    /// Manufacturer of this Package Item
    pub manufacturer: Option<Vec<Reference>>,
}
