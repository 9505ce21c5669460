use crate::r4::*;
use crate::FhirSerde;

/// Choice of types for the item\[x\] field in SupplyRequest
#[derive(Debug, Clone, PartialEq, FhirSerde)]
#[fhir_choice_element(base_name = "item")]
pub enum SupplyRequestItem {
    /// Variant accepting the CodeableConcept type.
    #[fhir_serde(rename = "itemCodeableConcept")]
    CodeableConcept(CodeableConcept),
    /// Variant accepting the Reference type.
    #[fhir_serde(rename = "itemReference")]
    Reference(Reference),
}

/// Choice of types for the occurrence\[x\] field in SupplyRequest
#[derive(Debug, Clone, PartialEq, FhirSerde)]
#[fhir_choice_element(base_name = "occurrence")]
pub enum SupplyRequestOccurrence {
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

/// FHIR SupplyRequest type
///
/// A record of a request for a medication, substance or device used in the
/// healthcare setting.
///
/// See: [SupplyRequest](http://hl7.org/fhir/StructureDefinition/SupplyRequest)
#[derive(Debug, Clone, PartialEq, FhirSerde)]
#[fhir_type(name = "SupplyRequest", kind = "domain_resource")]
pub struct SupplyRequest {
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
    /// Business Identifier for SupplyRequest
    pub identifier: Option<Vec<Identifier>>,
    /// draft | active | suspended +
    pub status: Option<Code>,
    /// The kind of supply (central, non-stock, etc.)
    pub category: Option<CodeableConcept>,
    /// routine | urgent | asap | stat
    pub priority: Option<Code>,
    /// Medication, Substance, or Device requested to be supplied
    #[fhir_serde(flatten)]
    pub item: SupplyRequestItem,
    /// The requested amount of the item indicated
    pub quantity: Quantity,
    /// Ordered item details
    pub parameter: Option<Vec<SupplyRequestParameter>>,
    /// When the request should be fulfilled
    #[fhir_serde(flatten)]
    pub occurrence: Option<SupplyRequestOccurrence>,
    /// When the request was made
    #[fhir_serde(rename = "authoredOn")]
    pub authored_on: Option<DateTime>,
    /// Individual making the request
    pub requester: Option<Reference>,
    /// Who is intended to fulfill the request
    pub supplier: Option<Vec<Reference>>,
    /// The reason why the supply item was requested
    #[fhir_serde(rename = "reasonCode")]
    pub reason_code: Option<Vec<CodeableConcept>>,
    /// The reason why the supply item was requested
    #[fhir_serde(rename = "reasonReference")]
    pub reason_reference: Option<Vec<Reference>>,
    /// The origin of the supply
    #[fhir_serde(rename = "deliverFrom")]
    pub deliver_from: Option<Reference>,
    /// The destination of the supply
    #[fhir_serde(rename = "deliverTo")]
    pub deliver_to: Option<Reference>,
}

/// Choice of types for the value\[x\] field in SupplyRequestParameter
#[derive(Debug, Clone, PartialEq, FhirSerde)]
#[fhir_choice_element(base_name = "value")]
pub enum SupplyRequestParameterValue {
    /// Variant accepting the CodeableConcept type.
    #[fhir_serde(rename = "valueCodeableConcept")]
    CodeableConcept(CodeableConcept),
    /// Variant accepting the Quantity type.
    #[fhir_serde(rename = "valueQuantity")]
    Quantity(Quantity),
    /// Variant accepting the Range type.
    #[fhir_serde(rename = "valueRange")]
    Range(Range),
    /// Variant accepting the Boolean type.
    #[fhir_serde(rename = "valueBoolean")]
    Boolean(Boolean),
}

/// Ordered item details
#[derive(Debug, Clone, PartialEq, Default, FhirSerde)]
#[fhir_type(name = "SupplyRequestParameter", kind = "backbone_element")]
pub struct SupplyRequestParameter {
    /// Unique id for inter-element referencing
    pub id: Option<std::string::String>,
    /// Additional content defined by implementations
    pub extension: Option<Vec<Extension>>,
    /// Extensions that cannot be ignored even if unrecognized
    #[fhir_serde(rename = "modifierExtension")]
    pub modifier_extension: Option<Vec<Extension>>,
    /// Item detail
    pub code: Option<CodeableConcept>,
    /// Value of detail
    #[fhir_serde(flatten)]
    pub value: Option<SupplyRequestParameterValue>,
}
