use crate::r4::*;
use crate::FhirSerde;

/// FHIR MedicinalProduct type
///
/// Detailed definition of a medicinal product, typically for uses other than
/// direct patient care (e.g. regulatory use)
///
/// See: [MedicinalProduct](http://hl7.org/fhir/StructureDefinition/MedicinalProduct)
#[derive(Debug, Clone, PartialEq, Default, FhirSerde)]
#[fhir_type(name = "MedicinalProduct", kind = "domain_resource")]
pub struct MedicinalProduct {
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
    /// Business identifier for this product. Could be an MPID.
    pub identifier: Option<Vec<Identifier>>,
    /// Regulatory type, e.g. Investigational or Authorized.
    #[fhir_serde(rename = "type")]
    pub r#type: Option<CodeableConcept>,
    /// If this medicine applies to human or veterinary uses
    pub domain: Option<Coding>,
    /// The dose form for a single part product, or combined form of a multiple part product
    #[fhir_serde(rename = "combinedPharmaceuticalDoseForm")]
    pub combined_pharmaceutical_dose_form: Option<CodeableConcept>,
    /// The legal status of supply of the medicinal product as classified by the regulator
    #[fhir_serde(rename = "legalStatusOfSupply")]
    pub legal_status_of_supply: Option<CodeableConcept>,
    /// Whether the Medicinal Product is subject to additional monitoring for regulatory reasons
    #[fhir_serde(rename = "additionalMonitoringIndicator")]
    pub additional_monitoring_indicator: Option<CodeableConcept>,
    /// Whether the Medicinal Product is subject to special measures for regulatory reasons
    #[fhir_serde(rename = "specialMeasures")]
    pub special_measures: Option<Vec<String>>,
    /// If authorised for use in children
    #[fhir_serde(rename = "paediatricUseIndicator")]
    pub paediatric_use_indicator: Option<CodeableConcept>,
    /// Allows the product to be classified by various systems
    #[fhir_serde(rename = "productClassification")]
    pub product_classification: Option<Vec<CodeableConcept>>,
    /// Marketing status of the medicinal product, in contrast to marketing authorizaton
    #[fhir_serde(rename = "marketingStatus")]
    pub marketing_status: Option<Vec<MarketingStatus>>,
    /// Pharmaceutical aspects of product
    #[fhir_serde(rename = "pharmaceuticalProduct")]
    pub pharmaceutical_product: Option<Vec<Reference>>,
    /// Package representation for the product
    #[fhir_serde(rename = "packagedMedicinalProduct")]
    pub packaged_medicinal_product: Option<Vec<Reference>>,
    /// Supporting documentation, typically for regulatory submission
    #[fhir_serde(rename = "attachedDocument")]
    pub attached_document: Option<Vec<Reference>>,
    /// A master file for to the medicinal product (e.g. Pharmacovigilance System Master File).
    #[fhir_serde(rename = "masterFile")]
    pub master_file: Option<Vec<Reference>>,
    /// A product specific contact, person (in a role), or an organization
    pub contact: Option<Vec<Reference>>,
    /// Clinical trials or studies that this product is involved in
    #[fhir_serde(rename = "clinicalTrial")]
    pub clinical_trial: Option<Vec<Reference>>,
    /// The product's name, including full name and possibly coded parts
    pub name: Vec<MedicinalProductName>,
    /// Reference to another product, e.g. for linking authorised to investigational product.
    #[fhir_serde(rename = "crossReference")]
    pub cross_reference: Option<Vec<Identifier>>,
    /// An operation applied to the product, for manufacturing or adminsitrative purpose
    #[fhir_serde(rename = "manufacturingBusinessOperation")]
    pub manufacturing_business_operation: Option<
        Vec<MedicinalProductManufacturingBusinessOperation>,
    >,
    /// Indicates if the medicinal product has an orphan designation for the treatment of a rare disease
    #[fhir_serde(rename = "specialDesignation")]
    pub special_designation: Option<Vec<MedicinalProductSpecialDesignation>>,
}

/// An operation applied to the product, for manufacturing or adminsitrative purpose
#[derive(Debug, Clone, PartialEq, Default, FhirSerde)]
#[fhir_type(name = "MedicinalProductManufacturingBusinessOperation", kind = "backbone_element")]
pub struct MedicinalProductManufacturingBusinessOperation {
    /// Unique id for inter-element referencing
    pub id: Option<std::string::String>,
    /// Additional content defined by implementations
    pub extension: Option<Vec<Extension>>,
    /// Extensions that cannot be ignored even if unrecognized
    #[fhir_serde(rename = "modifierExtension")]
    pub modifier_extension: Option<Vec<Extension>>,
    /// The type of manufacturing operation
    #[fhir_serde(rename = "operationType")]
    pub operation_type: Option<CodeableConcept>,
    /// Regulatory authorization reference number
    #[fhir_serde(rename = "authorisationReferenceNumber")]
    pub authorisation_reference_number: Option<Identifier>,
    /// Regulatory authorization date
    #[fhir_serde(rename = "effectiveDate")]
    pub effective_date: Option<DateTime>,
    /// To indicate if this proces is commercially confidential
    #[fhir_serde(rename = "confidentialityIndicator")]
    pub confidentiality_indicator: Option<CodeableConcept>,
    /// The manufacturer or establishment associated with the process
    pub manufacturer: Option<Vec<Reference>>,
    /// A regulator which oversees the operation
    pub regulator: Option<Reference>,
}

/// The product's name, including full name and possibly coded parts
#[derive(Debug, Clone, PartialEq, Default, FhirSerde)]
#[fhir_type(name = "MedicinalProductName", kind = "backbone_element")]
pub struct MedicinalProductName {
    /// Unique id for inter-element referencing
    pub id: Option<std::string::String>,
    /// Additional content defined by implementations
    pub extension: Option<Vec<Extension>>,
    /// Extensions that cannot be ignored even if unrecognized
    #[fhir_serde(rename = "modifierExtension")]
    pub modifier_extension: Option<Vec<Extension>>,
    /// The full product name
    #[fhir_serde(rename = "productName")]
    pub product_name: String,
    /// Coding words or phrases of the name
    #[fhir_serde(rename = "namePart")]
    pub name_part: Option<Vec<MedicinalProductNameNamePart>>,
    /// Country where the name applies
    #[fhir_serde(rename = "countryLanguage")]
    pub country_language: Option<Vec<MedicinalProductNameCountryLanguage>>,
}

/// Country where the name applies
#[derive(Debug, Clone, PartialEq, Default, FhirSerde)]
#[fhir_type(name = "MedicinalProductNameCountryLanguage", kind = "backbone_element")]
pub struct MedicinalProductNameCountryLanguage {
    /// Unique id for inter-element referencing
    pub id: Option<std::string::String>,
    /// Additional content defined by implementations
    pub extension: Option<Vec<Extension>>,
    /// Extensions that cannot be ignored even if unrecognized
    #[fhir_serde(rename = "modifierExtension")]
    pub modifier_extension: Option<Vec<Extension>>,
    /// Country code for where this name applies
    pub country: CodeableConcept,
    /// Jurisdiction code for where this name applies
    pub jurisdiction: Option<CodeableConcept>,
    /// Language code for this name
    pub language: CodeableConcept,
}

/// Coding words or phrases of the name
#[derive(Debug, Clone, PartialEq, Default, FhirSerde)]
#[fhir_type(name = "MedicinalProductNameNamePart", kind = "backbone_element")]
pub struct MedicinalProductNameNamePart {
    /// Unique id for inter-element referencing
    pub id: Option<std::string::String>,
    /// Additional content defined by implementations
    pub extension: Option<Vec<Extension>>,
    /// Extensions that cannot be ignored even if unrecognized
    #[fhir_serde(rename = "modifierExtension")]
    pub modifier_extension: Option<Vec<Extension>>,
    /// A fragment of a product name
    pub part: String,
    /// Idenifying type for this part of the name (e.g. strength part).
    #[fhir_serde(rename = "type")]
    pub r#type: Coding,
}

/// Choice of types for the indication\[x\] field in MedicinalProductSpecialDesignation
#[derive(Debug, Clone, PartialEq, FhirSerde)]
#[fhir_choice_element(base_name = "indication")]
pub enum MedicinalProductSpecialDesignationIndication {
    /// Variant accepting the CodeableConcept type.
    #[fhir_serde(rename = "indicationCodeableConcept")]
    CodeableConcept(CodeableConcept),
    /// Variant accepting the Reference type.
    #[fhir_serde(rename = "indicationReference")]
    Reference(Reference),
}

/// Indicates if the medicinal product has an orphan designation for the treatment of a rare disease
#[derive(Debug, Clone, PartialEq, Default, FhirSerde)]
#[fhir_type(name = "MedicinalProductSpecialDesignation", kind = "backbone_element")]
pub struct MedicinalProductSpecialDesignation {
    /// Unique id for inter-element referencing
    pub id: Option<std::string::String>,
    /// Additional content defined by implementations
    pub extension: Option<Vec<Extension>>,
    /// Extensions that cannot be ignored even if unrecognized
    #[fhir_serde(rename = "modifierExtension")]
    pub modifier_extension: Option<Vec<Extension>>,
    /// Identifier for the designation, or procedure number
    pub identifier: Option<Vec<Identifier>>,
    /// The type of special designation, e.g. orphan drug, minor use.
    #[fhir_serde(rename = "type")]
    pub r#type: Option<CodeableConcept>,
    /// The intended use of the product, e.g. prevention, treatment.
    #[fhir_serde(rename = "intendedUse")]
    pub intended_use: Option<CodeableConcept>,
    /// Condition for which the medicinal use applies
    #[fhir_serde(flatten)]
    pub indication: Option<MedicinalProductSpecialDesignationIndication>,
    /// For example granted, pending, expired or withdrawn
    pub status: Option<CodeableConcept>,
    /// Date when the designation was granted
    pub date: Option<DateTime>,
    /// Animal species for which this applies
    pub species: Option<CodeableConcept>,
}
