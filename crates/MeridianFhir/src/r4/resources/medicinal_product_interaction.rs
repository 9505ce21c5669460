use crate::r4::*;
use crate::FhirSerde;

/// FHIR MedicinalProductInteraction type
///
/// The interactions of the medicinal product with other medicinal products, or
/// other forms of interactions.
///
/// See: [MedicinalProductInteraction](http://hl7.org/fhir/StructureDefinition/MedicinalProductInteraction)
#[derive(Debug, Clone, PartialEq, Default, FhirSerde)]
#[fhir_type(name = "MedicinalProductInteraction", kind = "domain_resource")]
pub struct MedicinalProductInteraction {
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
    /// The medication for which this is a described interaction
    pub subject: Option<Vec<Reference>>,
    /// The interaction described
    pub description: Option<String>,
    /// The specific medication, food or laboratory test that interacts
    pub interactant: Option<Vec<MedicinalProductInteractionInteractant>>,
    /// The type of the interaction e.g. drug-drug interaction, drug-food interaction, drug-lab test interaction
    #[fhir_serde(rename = "type")]
    pub r#type: Option<CodeableConcept>,
    /// The effect of the interaction, for example "reduced gastric absorption of primary medication"
    pub effect: Option<CodeableConcept>,
    /// The incidence of the interaction, e.g. theoretical, observed
    pub incidence: Option<CodeableConcept>,
    /// Actions for managing the interaction
    pub management: Option<CodeableConcept>,
}

/// Choice of types for the item\[x\] field in MedicinalProductInteractionInteractant
#[derive(Debug, Clone, PartialEq, FhirSerde)]
#[fhir_choice_element(base_name = "item")]
pub enum MedicinalProductInteractionInteractantItem {
    /// Variant accepting the Reference type.
    #[fhir_serde(rename = "itemReference")]
    Reference(Reference),
    /// Variant accepting the CodeableConcept type.
    #[fhir_serde(rename = "itemCodeableConcept")]
    CodeableConcept(CodeableConcept),
}

/// The specific medication, food or laboratory test that interacts
#[derive(Debug, Clone, PartialEq, FhirSerde)]
#[fhir_type(name = "MedicinalProductInteractionInteractant", kind = "backbone_element")]
pub struct MedicinalProductInteractionInteractant {
    /// Unique id for inter-element referencing
    pub id: Option<std::string::String>,
    /// Additional content defined by implementations
    pub extension: Option<Vec<Extension>>,
    /// Extensions that cannot be ignored even if unrecognized
    #[fhir_serde(rename = "modifierExtension")]
    pub modifier_extension: Option<Vec<Extension>>,
    /// The specific medication, food or laboratory test that interacts
    #[fhir_serde(flatten)]
    pub item: MedicinalProductInteractionInteractantItem,
}
