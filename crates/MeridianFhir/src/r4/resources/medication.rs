use crate::r4::*;
use crate::FhirSerde;

/// FHIR Medication type
///
/// This resource is primarily used for the identification and definition of a
/// medication for the purposes of prescribing, dispensing, and administering a
/// medication as well as for making statements about medication use.
///
/// See: [Medication](http://hl7.org/fhir/StructureDefinition/Medication)
#[derive(Debug, Clone, PartialEq, Default, FhirSerde)]
#[fhir_type(name = "Medication", kind = "domain_resource")]
pub struct Medication {
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
    /// Business identifier for this medication
    pub identifier: Option<Vec<Identifier>>,
    /// Codes that identify this medication
    pub code: Option<CodeableConcept>,
    /// active | inactive | entered-in-error
    pub status: Option<Code>,
    /// Manufacturer of the item
    pub manufacturer: Option<Reference>,
    /// powder | tablets | capsule +
    pub form: Option<CodeableConcept>,
    /// Amount of drug in package
    pub amount: Option<Ratio>,
    /// Active or inactive ingredient
    pub ingredient: Option<Vec<MedicationIngredient>>,
    /// Details about packaged medications
    pub batch: Option<MedicationBatch>,
}

/// Details about packaged medications
#[derive(Debug, Clone, PartialEq, Default, FhirSerde)]
#[fhir_type(name = "MedicationBatch", kind = "backbone_element")]
pub struct MedicationBatch {
    /// Unique id for inter-element referencing
    pub id: Option<std::string::String>,
    /// Additional content defined by implementations
    pub extension: Option<Vec<Extension>>,
    /// Extensions that cannot be ignored even if unrecognized
    #[fhir_serde(rename = "modifierExtension")]
    pub modifier_extension: Option<Vec<Extension>>,
    /// Identifier assigned to batch
    #[fhir_serde(rename = "lotNumber")]
    pub lot_number: Option<String>,
    /// When batch will expire
    #[fhir_serde(rename = "expirationDate")]
    pub expiration_date: Option<DateTime>,
}

/// Choice of types for the item\[x\] field in MedicationIngredient
#[derive(Debug, Clone, PartialEq, FhirSerde)]
#[fhir_choice_element(base_name = "item")]
pub enum MedicationIngredientItem {
    /// Variant accepting the CodeableConcept type.
    #[fhir_serde(rename = "itemCodeableConcept")]
    CodeableConcept(CodeableConcept),
    /// Variant accepting the Reference type.
    #[fhir_serde(rename = "itemReference")]
    Reference(Reference),
}

/// Active or inactive ingredient
#[derive(Debug, Clone, PartialEq, FhirSerde)]
#[fhir_type(name = "MedicationIngredient", kind = "backbone_element")]
pub struct MedicationIngredient {
    /// Unique id for inter-element referencing
    pub id: Option<std::string::String>,
    /// Additional content defined by implementations
    pub extension: Option<Vec<Extension>>,
    /// Extensions that cannot be ignored even if unrecognized
    #[fhir_serde(rename = "modifierExtension")]
    pub modifier_extension: Option<Vec<Extension>>,
    /// The actual ingredient or content
    #[fhir_serde(flatten)]
    pub item: MedicationIngredientItem,
    /// Active ingredient indicator
    #[fhir_serde(rename = "isActive")]
    pub is_active: Option<Boolean>,
    /// Quantity of ingredient present
    pub strength: Option<Ratio>,
}
