use crate::r4::*;
use crate::FhirSerde;

/// FHIR NutritionOrder type
///
/// A request to supply a diet, formula feeding (enteral) or oral nutritional
/// supplement to a patient/resident.
///
/// See: [NutritionOrder](http://hl7.org/fhir/StructureDefinition/NutritionOrder)
#[derive(Debug, Clone, PartialEq, Default, FhirSerde)]
#[fhir_type(name = "NutritionOrder", kind = "domain_resource")]
pub struct NutritionOrder {
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
    /// Identifiers assigned to this order
    pub identifier: Option<Vec<Identifier>>,
    /// Instantiates FHIR protocol or definition
    #[fhir_serde(rename = "instantiatesCanonical")]
    pub instantiates_canonical: Option<Vec<Canonical>>,
    /// Instantiates external protocol or definition
    #[fhir_serde(rename = "instantiatesUri")]
    pub instantiates_uri: Option<Vec<Uri>>,
    /// Instantiates protocol or definition
    pub instantiates: Option<Vec<Uri>>,
    /// draft | active | on-hold | revoked | completed | entered-in-error | unknown
    pub status: Code,
    /// proposal | plan | directive | order | original-order | reflex-order | filler-order | instance-order | option
    pub intent: Code,
    /// The person who requires the diet, formula or nutritional supplement
    pub patient: Reference,
    /// The encounter associated with this nutrition order
    pub encounter: Option<Reference>,
    /// Date and time the nutrition order was requested
    #[fhir_serde(rename = "dateTime")]
    pub date_time: DateTime,
    /// Who ordered the diet, formula or nutritional supplement
    pub orderer: Option<Reference>,
    /// List of the patient's food and nutrition-related allergies and intolerances
    #[fhir_serde(rename = "allergyIntolerance")]
    pub allergy_intolerance: Option<Vec<Reference>>,
    /// Order-specific modifier about the type of food that should be given
    #[fhir_serde(rename = "foodPreferenceModifier")]
    pub food_preference_modifier: Option<Vec<CodeableConcept>>,
    /// Order-specific modifier about the type of food that should not be given
    #[fhir_serde(rename = "excludeFoodModifier")]
    pub exclude_food_modifier: Option<Vec<CodeableConcept>>,
    /// Oral diet components
    #[fhir_serde(rename = "oralDiet")]
    pub oral_diet: Option<NutritionOrderOralDiet>,
    /// Supplement components
    pub supplement: Option<Vec<NutritionOrderSupplement>>,
    /// Enteral formula components
    #[fhir_serde(rename = "enteralFormula")]
    pub enteral_formula: Option<NutritionOrderEnteralFormula>,
    /// Comments
    pub note: Option<Vec<Annotation>>,
}

/// Enteral formula components
#[derive(Debug, Clone, PartialEq, Default, FhirSerde)]
#[fhir_type(name = "NutritionOrderEnteralFormula", kind = "backbone_element")]
pub struct NutritionOrderEnteralFormula {
    /// Unique id for inter-element referencing
    pub id: Option<std::string::String>,
    /// Additional content defined by implementations
    pub extension: Option<Vec<Extension>>,
    /// Extensions that cannot be ignored even if unrecognized
    #[fhir_serde(rename = "modifierExtension")]
    pub modifier_extension: Option<Vec<Extension>>,
    /// Type of enteral or infant formula
    #[fhir_serde(rename = "baseFormulaType")]
    pub base_formula_type: Option<CodeableConcept>,
    /// Product or brand name of the enteral or infant formula
    #[fhir_serde(rename = "baseFormulaProductName")]
    pub base_formula_product_name: Option<String>,
    /// Type of modular component to add to the feeding
    #[fhir_serde(rename = "additiveType")]
    pub additive_type: Option<CodeableConcept>,
    /// Product or brand name of the modular additive
    #[fhir_serde(rename = "additiveProductName")]
    pub additive_product_name: Option<String>,
    /// Amount of energy per specified volume that is required
    #[fhir_serde(rename = "caloricDensity")]
    pub caloric_density: Option<Quantity>,
    /// How the formula should enter the patient's gastrointestinal tract
    #[fhir_serde(rename = "routeofAdministration")]
    pub routeof_administration: Option<CodeableConcept>,
    /// Formula feeding instruction as structured data
    pub administration: Option<Vec<NutritionOrderEnteralFormulaAdministration>>,
    /// Upper limit on formula volume per unit of time
    #[fhir_serde(rename = "maxVolumeToDeliver")]
    pub max_volume_to_deliver: Option<Quantity>,
    /// Formula feeding instructions expressed as text
    #[fhir_serde(rename = "administrationInstruction")]
    pub administration_instruction: Option<String>,
}

/// Choice of types for the rate\[x\] field in NutritionOrderEnteralFormulaAdministration
#[derive(Debug, Clone, PartialEq, FhirSerde)]
#[fhir_choice_element(base_name = "rate")]
pub enum NutritionOrderEnteralFormulaAdministrationRate {
    /// Variant accepting the Quantity type.
    #[fhir_serde(rename = "rateQuantity")]
    Quantity(Quantity),
    /// Variant accepting the Ratio type.
    #[fhir_serde(rename = "rateRatio")]
    Ratio(Ratio),
}

/// Formula feeding instruction as structured data
#[derive(Debug, Clone, PartialEq, Default, FhirSerde)]
#[fhir_type(name = "NutritionOrderEnteralFormulaAdministration", kind = "backbone_element")]
pub struct NutritionOrderEnteralFormulaAdministration {
    /// Unique id for inter-element referencing
    pub id: Option<std::string::String>,
    /// Additional content defined by implementations
    pub extension: Option<Vec<Extension>>,
    /// Extensions that cannot be ignored even if unrecognized
    #[fhir_serde(rename = "modifierExtension")]
    pub modifier_extension: Option<Vec<Extension>>,
    /// Scheduled frequency of enteral feeding
    pub schedule: Option<Timing>,
    /// The volume of formula to provide
    pub quantity: Option<Quantity>,
    /// Speed with which the formula is provided per period of time
    #[fhir_serde(flatten)]
    pub rate: Option<NutritionOrderEnteralFormulaAdministrationRate>,
}

/// Oral diet components
#[derive(Debug, Clone, PartialEq, Default, FhirSerde)]
#[fhir_type(name = "NutritionOrderOralDiet", kind = "backbone_element")]
pub struct NutritionOrderOralDiet {
    /// Unique id for inter-element referencing
    pub id: Option<std::string::String>,
    /// Additional content defined by implementations
    pub extension: Option<Vec<Extension>>,
    /// Extensions that cannot be ignored even if unrecognized
    #[fhir_serde(rename = "modifierExtension")]
    pub modifier_extension: Option<Vec<Extension>>,
    /// Type of oral diet or diet restrictions that describe what can be consumed orally
    #[fhir_serde(rename = "type")]
    pub r#type: Option<Vec<CodeableConcept>>,
    /// Scheduled frequency of diet
    pub schedule: Option<Vec<Timing>>,
    /// Required  nutrient modifications
    pub nutrient: Option<Vec<NutritionOrderOralDietNutrient>>,
    /// Required  texture modifications
    pub texture: Option<Vec<NutritionOrderOralDietTexture>>,
    /// The required consistency of fluids and liquids provided to the patient
    #[fhir_serde(rename = "fluidConsistencyType")]
    pub fluid_consistency_type: Option<Vec<CodeableConcept>>,
    /// Instructions or additional information about the oral diet
    pub instruction: Option<String>,
}

/// Required  nutrient modifications
#[derive(Debug, Clone, PartialEq, Default, FhirSerde)]
#[fhir_type(name = "NutritionOrderOralDietNutrient", kind = "backbone_element")]
pub struct NutritionOrderOralDietNutrient {
    /// Unique id for inter-element referencing
    pub id: Option<std::string::String>,
    /// Additional content defined by implementations
    pub extension: Option<Vec<Extension>>,
    /// Extensions that cannot be ignored even if unrecognized
    #[fhir_serde(rename = "modifierExtension")]
    pub modifier_extension: Option<Vec<Extension>>,
    /// Type of nutrient that is being modified
    pub modifier: Option<CodeableConcept>,
    /// Quantity of the specified nutrient
    pub amount: Option<Quantity>,
}

/// Required  texture modifications
#[derive(Debug, Clone, PartialEq, Default, FhirSerde)]
#[fhir_type(name = "NutritionOrderOralDietTexture", kind = "backbone_element")]
pub struct NutritionOrderOralDietTexture {
    /// Unique id for inter-element referencing
    pub id: Option<std::string::String>,
    /// Additional content defined by implementations
    pub extension: Option<Vec<Extension>>,
    /// Extensions that cannot be ignored even if unrecognized
    #[fhir_serde(rename = "modifierExtension")]
    pub modifier_extension: Option<Vec<Extension>>,
    /// Code to indicate how to alter the texture of the foods, e.g. pureed
    pub modifier: Option<CodeableConcept>,
    /// Concepts that are used to identify an entity that is ingested for nutritional purposes
    #[fhir_serde(rename = "foodType")]
    pub food_type: Option<CodeableConcept>,
}

/// Supplement components
#[derive(Debug, Clone, PartialEq, Default, FhirSerde)]
#[fhir_type(name = "NutritionOrderSupplement", kind = "backbone_element")]
pub struct NutritionOrderSupplement {
    /// Unique id for inter-element referencing
    pub id: Option<std::string::String>,
    /// Additional content defined by implementations
    pub extension: Option<Vec<Extension>>,
    /// Extensions that cannot be ignored even if unrecognized
    #[fhir_serde(rename = "modifierExtension")]
    pub modifier_extension: Option<Vec<Extension>>,
    /// Type of supplement product requested
    #[fhir_serde(rename = "type")]
    pub r#type: Option<CodeableConcept>,
    /// Product or brand name of the nutritional supplement
    #[fhir_serde(rename = "productName")]
    pub product_name: Option<String>,
    /// Scheduled frequency of supplement
    pub schedule: Option<Vec<Timing>>,
    /// Amount of the nutritional supplement
    pub quantity: Option<Quantity>,
    /// Instructions or additional information about the oral supplement
    pub instruction: Option<String>,
}
