use crate::r4::*;
use crate::FhirSerde;

/// Choice of types for the occurrence\[x\] field in SupplyDelivery
#[derive(Debug, Clone, PartialEq, FhirSerde)]
#[fhir_choice_element(base_name = "occurrence")]
pub enum SupplyDeliveryOccurrence {
    /// Variant accepting the DateTime type.
    #[fhir_serde(rename = "occurrenceDateTime")]
    DateTime(DateTime),
    /// Variant accepting the Period type.
    #[fhir_serde(rename = "occurrencePeriod")]
    Period(Period),
    /// Variant accepting the Timing type.
    #[fhir_serde(rename = "occurrenceTiming")]
    Timing(Timing),
}

/// FHIR SupplyDelivery type
///
/// Record of delivery of what is supplied.
///
/// See: [SupplyDelivery](http://hl7.org/fhir/StructureDefinition/SupplyDelivery)
#[derive(Debug, Clone, PartialEq, Default, FhirSerde)]
#[fhir_type(name = "SupplyDelivery", kind = "domain_resource")]
pub struct SupplyDelivery {
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
    /// External identifier
    pub identifier: Option<Vec<Identifier>>,
    /// Fulfills plan, proposal or order
    #[fhir_serde(rename = "basedOn")]
    pub based_on: Option<Vec<Reference>>,
    /// Part of referenced event
    #[fhir_serde(rename = "partOf")]
    pub part_of: Option<Vec<Reference>>,
    /// in-progress | completed | abandoned | entered-in-error
    pub status: Option<Code>,
    /// Patient for whom the item is supplied
    pub patient: Option<Reference>,
    /// Category of dispense event
    #[fhir_serde(rename = "type")]
    pub r#type: Option<CodeableConcept>,
    /// The item that is delivered or supplied
    #[fhir_serde(rename = "suppliedItem")]
    pub supplied_item: Option<SupplyDeliverySuppliedItem>,
    /// When event occurred
    #[fhir_serde(flatten)]
    pub occurrence: Option<SupplyDeliveryOccurrence>,
    /// Dispenser
    pub supplier: Option<Reference>,
    /// Where the Supply was sent
    pub destination: Option<Reference>,
    /// Who collected the Supply
    pub receiver: Option<Vec<Reference>>,
}

/// Choice of types for the item\[x\] field in SupplyDeliverySuppliedItem
#[derive(Debug, Clone, PartialEq, FhirSerde)]
#[fhir_choice_element(base_name = "item")]
pub enum SupplyDeliverySuppliedItemItem {
    /// Variant accepting the CodeableConcept type.
    #[fhir_serde(rename = "itemCodeableConcept")]
    CodeableConcept(CodeableConcept),
    /// Variant accepting the Reference type.
    #[fhir_serde(rename = "itemReference")]
    Reference(Reference),
}

/// The item that is delivered or supplied
#[derive(Debug, Clone, PartialEq, Default, FhirSerde)]
#[fhir_type(name = "SupplyDeliverySuppliedItem", kind = "backbone_element")]
pub struct SupplyDeliverySuppliedItem {
    /// Unique id for inter-element referencing
    pub id: Option<std::string::String>,
    /// Additional content defined by implementations
    pub extension: Option<Vec<Extension>>,
    /// Extensions that cannot be ignored even if unrecognized
    #[fhir_serde(rename = "modifierExtension")]
    pub modifier_extension: Option<Vec<Extension>>,
    /// Amount dispensed
    pub quantity: Option<Quantity>,
    /// Medication, Substance, or Device supplied
    #[fhir_serde(flatten)]
    pub item: Option<SupplyDeliverySuppliedItemItem>,
}
