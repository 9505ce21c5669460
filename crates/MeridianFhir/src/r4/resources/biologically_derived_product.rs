use crate::r4::*;
use crate::FhirSerde;

/// FHIR BiologicallyDerivedProduct type
///
/// A material substance originating from a biological entity intended to be
/// transplanted or infused into another (possibly the same) biological entity.
///
/// See: [BiologicallyDerivedProduct](http://hl7.org/fhir/StructureDefinition/BiologicallyDerivedProduct)
#[derive(Debug, Clone, PartialEq, Default, FhirSerde)]
#[fhir_type(name = "BiologicallyDerivedProduct", kind = "domain_resource")]
pub struct BiologicallyDerivedProduct {
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
    /// External ids for this item
    pub identifier: Option<Vec<Identifier>>,
    /// Broad category of this product
    #[fhir_serde(rename = "productCategory")]
    pub product_category: Option<Code>,
    /// What this biologically derived product is
    #[fhir_serde(rename = "productCode")]
    pub product_code: Option<CodeableConcept>,
    /// Whether the product is currently available
    pub status: Option<Code>,
    /// Procedure request
    pub request: Option<Vec<Reference>>,
    /// The amount of this biologically derived product
    pub quantity: Option<Integer>,
    /// BiologicallyDerivedProduct parent
    pub parent: Option<Vec<Reference>>,
    /// How this product was collected
    pub collection: Option<BiologicallyDerivedProductCollection>,
    /// Any processing of the product during collection
    pub processing: Option<Vec<BiologicallyDerivedProductProcessing>>,
    /// Any manipulation of product post-collection
    pub manipulation: Option<BiologicallyDerivedProductManipulation>,
    /// Product storage
    pub storage: Option<Vec<BiologicallyDerivedProductStorage>>,
}

/// Choice of types for the collected\[x\] field in BiologicallyDerivedProductCollection
#[derive(Debug, Clone, PartialEq, FhirSerde)]
#[fhir_choice_element(base_name = "collected")]
pub enum BiologicallyDerivedProductCollectionCollected {
    /// Variant accepting the DateTime type.
    #[fhir_serde(rename = "collectedDateTime")]
    DateTime(DateTime),
    /// Variant accepting the Period type.
    #[fhir_serde(rename = "collectedPeriod")]
    Period(Period),
}

/// How this product was collected
#[derive(Debug, Clone, PartialEq, Default, FhirSerde)]
#[fhir_type(name = "BiologicallyDerivedProductCollection", kind = "backbone_element")]
pub struct BiologicallyDerivedProductCollection {
    /// Unique id for inter-element referencing
    pub id: Option<std::string::String>,
    /// Additional content defined by implementations
    pub extension: Option<Vec<Extension>>,
    /// Extensions that cannot be ignored even if unrecognized
    #[fhir_serde(rename = "modifierExtension")]
    pub modifier_extension: Option<Vec<Extension>>,
    /// Individual performing collection
    pub collector: Option<Reference>,
    /// Who is product from
    pub source: Option<Reference>,
    /// Time of product collection
    #[fhir_serde(flatten)]
    pub collected: Option<BiologicallyDerivedProductCollectionCollected>,
}

/// Choice of types for the time\[x\] field in BiologicallyDerivedProductManipulation
#[derive(Debug, Clone, PartialEq, FhirSerde)]
#[fhir_choice_element(base_name = "time")]
pub enum BiologicallyDerivedProductManipulationTime {
    /// Variant accepting the DateTime type.
    #[fhir_serde(rename = "timeDateTime")]
    DateTime(DateTime),
    /// Variant accepting the Period type.
    #[fhir_serde(rename = "timePeriod")]
    Period(Period),
}

/// Any manipulation of product post-collection
#[derive(Debug, Clone, PartialEq, Default, FhirSerde)]
#[fhir_type(name = "BiologicallyDerivedProductManipulation", kind = "backbone_element")]
pub struct BiologicallyDerivedProductManipulation {
    /// Unique id for inter-element referencing
    pub id: Option<std::string::String>,
    /// Additional content defined by implementations
    pub extension: Option<Vec<Extension>>,
    /// Extensions that cannot be ignored even if unrecognized
    #[fhir_serde(rename = "modifierExtension")]
    pub modifier_extension: Option<Vec<Extension>>,
    /// Description of manipulation
    pub description: Option<String>,
    /// Time of manipulation
    #[fhir_serde(flatten)]
    pub time: Option<BiologicallyDerivedProductManipulationTime>,
}

/// Choice of types for the time\[x\] field in BiologicallyDerivedProductProcessing
#[derive(Debug, Clone, PartialEq, FhirSerde)]
#[fhir_choice_element(base_name = "time")]
pub enum BiologicallyDerivedProductProcessingTime {
    /// Variant accepting the DateTime type.
    #[fhir_serde(rename = "timeDateTime")]
    DateTime(DateTime),
    /// Variant accepting the Period type.
    #[fhir_serde(rename = "timePeriod")]
    Period(Period),
}

/// Any processing of the product during collection
#[derive(Debug, Clone, PartialEq, Default, FhirSerde)]
#[fhir_type(name = "BiologicallyDerivedProductProcessing", kind = "backbone_element")]
pub struct BiologicallyDerivedProductProcessing {
    /// Unique id for inter-element referencing
    pub id: Option<std::string::String>,
    /// Additional content defined by implementations
    pub extension: Option<Vec<Extension>>,
    /// Extensions that cannot be ignored even if unrecognized
    #[fhir_serde(rename = "modifierExtension")]
    pub modifier_extension: Option<Vec<Extension>>,
    /// Description of of processing
    pub description: Option<String>,
    /// Procesing code
    pub procedure: Option<CodeableConcept>,
    /// Substance added during processing
    pub additive: Option<Reference>,
    /// Time of processing
    #[fhir_serde(flatten)]
    pub time: Option<BiologicallyDerivedProductProcessingTime>,
}

/// Product storage
#[derive(Debug, Clone, PartialEq, Default, FhirSerde)]
#[fhir_type(name = "BiologicallyDerivedProductStorage", kind = "backbone_element")]
pub struct BiologicallyDerivedProductStorage {
    /// Unique id for inter-element referencing
    pub id: Option<std::string::String>,
    /// Additional content defined by implementations
    pub extension: Option<Vec<Extension>>,
    /// Extensions that cannot be ignored even if unrecognized
    #[fhir_serde(rename = "modifierExtension")]
    pub modifier_extension: Option<Vec<Extension>>,
    /// Description of storage
    pub description: Option<String>,
    /// Storage temperature
    pub temperature: Option<Decimal>,
    /// Temperature scale used
    pub scale: Option<Code>,
    /// Storage timeperiod
    pub duration: Option<Period>,
}
