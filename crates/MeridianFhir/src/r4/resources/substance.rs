use crate::r4::*;
use crate::FhirSerde;

/// FHIR Substance type
///
/// A homogeneous material with a definite composition.
///
/// See: [Substance](http://hl7.org/fhir/StructureDefinition/Substance)
#[derive(Debug, Clone, PartialEq, Default, FhirSerde)]
#[fhir_type(name = "Substance", kind = "domain_resource")]
pub struct Substance {
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
    /// active | inactive | entered-in-error
    pub status: Option<Code>,
    /// What class/type of substance this is
    pub category: Option<Vec<CodeableConcept>>,
    /// What substance this is
    pub code: CodeableConcept,
    /// Textual description of the substance, comments
    pub description: Option<String>,
    /// If this describes a specific package/container of the substance
    pub instance: Option<Vec<SubstanceInstance>>,
    /// Composition information about the substance
    pub ingredient: Option<Vec<SubstanceIngredient>>,
}

/// Choice of types for the substance\[x\] field in SubstanceIngredient
#[derive(Debug, Clone, PartialEq, FhirSerde)]
#[fhir_choice_element(base_name = "substance")]
pub enum SubstanceIngredientSubstance {
    /// Variant accepting the CodeableConcept type.
    #[fhir_serde(rename = "substanceCodeableConcept")]
    CodeableConcept(CodeableConcept),
    /// Variant accepting the Reference type.
    #[fhir_serde(rename = "substanceReference")]
    Reference(Reference),
}

/// Composition information about the substance
#[derive(Debug, Clone, PartialEq, FhirSerde)]
#[fhir_type(name = "SubstanceIngredient", kind = "backbone_element")]
pub struct SubstanceIngredient {
    /// Unique id for inter-element referencing
    pub id: Option<std::string::String>,
    /// Additional content defined by implementations
    pub extension: Option<Vec<Extension>>,
    /// Extensions that cannot be ignored even if unrecognized
    #[fhir_serde(rename = "modifierExtension")]
    pub modifier_extension: Option<Vec<Extension>>,
    /// Optional amount (concentration)
    pub quantity: Option<Ratio>,
    /// A component of the substance
    #[fhir_serde(flatten)]
    pub substance: SubstanceIngredientSubstance,
}

/// If this describes a specific package/container of the substance
#[derive(Debug, Clone, PartialEq, Default, FhirSerde)]
#[fhir_type(name = "SubstanceInstance", kind = "backbone_element")]
pub struct SubstanceInstance {
    /// Unique id for inter-element referencing
    pub id: Option<std::string::String>,
    /// Additional content defined by implementations
    pub extension: Option<Vec<Extension>>,
    /// Extensions that cannot be ignored even if unrecognized
    #[fhir_serde(rename = "modifierExtension")]
    pub modifier_extension: Option<Vec<Extension>>,
    /// Identifier of the package/container
    pub identifier: Option<Identifier>,
    /// When no longer valid to use
    pub expiry: Option<DateTime>,
    /// Amount of substance in the package
    pub quantity: Option<Quantity>,
}
