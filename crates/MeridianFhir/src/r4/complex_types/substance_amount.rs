use crate::r4::*;
use crate::FhirSerde;

/// Choice of types for the amount\[x\] field in SubstanceAmount
#[derive(Debug, Clone, PartialEq, FhirSerde)]
#[fhir_choice_element(base_name = "amount")]
pub enum SubstanceAmountAmount {
    /// Variant accepting the Quantity type.
    #[fhir_serde(rename = "amountQuantity")]
    Quantity(Quantity),
    /// Variant accepting the Range type.
    #[fhir_serde(rename = "amountRange")]
    Range(Range),
    /// Variant accepting the String type.
    #[fhir_serde(rename = "amountString")]
    String(String),
}

/// FHIR SubstanceAmount type
///
/// Chemical substances are a single substance type whose primary defining
/// element is the molecular structure. Chemical substances shall be defined on
/// the basis of their complete covalent molecular structure; the presence of a
/// salt (counter-ion) and/or solvates (water, alcohols) is also captured.
/// Purity, grade, physical form or particle size are not taken into account in
/// the definition of a chemical substance or in the assignment of a Substance
/// ID.
///
/// See: [SubstanceAmount](http://hl7.org/fhir/StructureDefinition/SubstanceAmount)
#[derive(Debug, Clone, PartialEq, Default, FhirSerde)]
#[fhir_type(name = "SubstanceAmount", kind = "backbone_element")]
pub struct SubstanceAmount {
    /// Unique id for inter-element referencing
    pub id: Option<std::string::String>,
    /// Additional content defined by implementations
    pub extension: Option<Vec<Extension>>,
    /// Extensions that cannot be ignored even if unrecognized
    #[fhir_serde(rename = "modifierExtension")]
    pub modifier_extension: Option<Vec<Extension>>,
    /// Used to capture quantitative values for a variety of elements. If only limits are given, the arithmetic mean would be the average. If only a single definite value for a given element is given, it would be captured in this field
    #[fhir_serde(flatten)]
    pub amount: Option<SubstanceAmountAmount>,
    /// Most elements captured in space do not require a range and can be captured in a single value field
    #[fhir_serde(rename = "amountType")]
    pub amount_type: Option<CodeableConcept>,
    /// A textual comment on a numeric value
    #[fhir_serde(rename = "amountText")]
    pub amount_text: Option<String>,
    /// Reference range of possible or expected values
    #[fhir_serde(rename = "referenceRange")]
    pub reference_range: Option<SubstanceAmountReferenceRange>,
}

/// Reference range of possible or expected values
#[derive(Debug, Clone, PartialEq, Default, FhirSerde)]
#[fhir_type(name = "SubstanceAmountReferenceRange", kind = "element")]
pub struct SubstanceAmountReferenceRange {
    /// Unique id for inter-element referencing
    pub id: Option<std::string::String>,
    /// Additional content defined by implementations
    pub extension: Option<Vec<Extension>>,
    /// Lower limit possible or expected
    #[fhir_serde(rename = "lowLimit")]
    pub low_limit: Option<Quantity>,
    /// Upper limit possible or expected
    #[fhir_serde(rename = "highLimit")]
    pub high_limit: Option<Quantity>,
}
