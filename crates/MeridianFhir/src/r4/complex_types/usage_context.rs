use crate::r4::*;
use crate::FhirSerde;

/// Choice of types for the value\[x\] field in UsageContext
#[derive(Debug, Clone, PartialEq, FhirSerde)]
#[fhir_choice_element(base_name = "value")]
pub enum UsageContextValue {
    /// Variant accepting the CodeableConcept type.
    #[fhir_serde(rename = "valueCodeableConcept")]
    CodeableConcept(CodeableConcept),
    /// Variant accepting the Quantity type.
    #[fhir_serde(rename = "valueQuantity")]
    Quantity(Quantity),
    /// Variant accepting the Range type.
    #[fhir_serde(rename = "valueRange")]
    Range(Range),
    /// Variant accepting the Reference type.
    #[fhir_serde(rename = "valueReference")]
    Reference(Reference),
}

/// FHIR UsageContext type
///
/// Specifies clinical/business/etc. metadata that can be used to retrieve, index
/// and/or categorize an artifact. This metadata can either be specific to the
/// applicable population (e.g., age category, DRG) or the specific context of
/// care (e.g., venue, care setting, provider of care).
///
/// See: [UsageContext](http://hl7.org/fhir/StructureDefinition/UsageContext)
#[derive(Debug, Clone, PartialEq, FhirSerde)]
#[fhir_type(name = "UsageContext", kind = "element")]
pub struct UsageContext {
    /// Unique id for inter-element referencing
    pub id: Option<std::string::String>,
    /// Additional content defined by implementations
    pub extension: Option<Vec<Extension>>,
    /// Type of context being specified
    pub code: Coding,
    /// Value that defines the context
    #[fhir_serde(flatten)]
    pub value: UsageContextValue,
}
