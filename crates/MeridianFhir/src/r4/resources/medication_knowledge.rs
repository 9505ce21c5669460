use crate::r4::*;
use crate::FhirSerde;

/// FHIR MedicationKnowledge type
///
/// Information about a medication that is used to support knowledge.
///
/// See: [MedicationKnowledge](http://hl7.org/fhir/StructureDefinition/MedicationKnowledge)
#[derive(Debug, Clone, PartialEq, Default, FhirSerde)]
#[fhir_type(name = "MedicationKnowledge", kind = "domain_resource")]
pub struct MedicationKnowledge {
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
    /// Code that identifies this medication
    pub code: Option<CodeableConcept>,
    /// A code to indicate if the medication is in active use. The status refers to the validity about the information of the medication and not to its medicinal properties.
    pub status: Option<Code>,
    /// Manufacturer of the item
    pub manufacturer: Option<Reference>,
    /// powder | tablets | capsule +
    #[fhir_serde(rename = "doseForm")]
    pub dose_form: Option<CodeableConcept>,
    /// Amount of drug in package
    pub amount: Option<Quantity>,
    /// Additional names for a medication
    pub synonym: Option<Vec<String>>,
    /// Associated or related medication information
    #[fhir_serde(rename = "relatedMedicationKnowledge")]
    pub related_medication_knowledge: Option<Vec<MedicationKnowledgeRelatedMedicationKnowledge>>,
    /// A medication resource that is associated with this medication
    #[fhir_serde(rename = "associatedMedication")]
    pub associated_medication: Option<Vec<Reference>>,
    /// Category of the medication or product
    #[fhir_serde(rename = "productType")]
    pub product_type: Option<Vec<CodeableConcept>>,
    /// Associated documentation about the medication
    pub monograph: Option<Vec<MedicationKnowledgeMonograph>>,
    /// Active or inactive ingredient
    pub ingredient: Option<Vec<MedicationKnowledgeIngredient>>,
    /// The instructions for preparing the medication
    #[fhir_serde(rename = "preparationInstruction")]
    pub preparation_instruction: Option<String>,
    /// The intended or approved route of administration
    #[fhir_serde(rename = "intendedRoute")]
    pub intended_route: Option<Vec<CodeableConcept>>,
    /// The pricing of the medication
    pub cost: Option<Vec<MedicationKnowledgeCost>>,
    /// Program under which a medication is reviewed
    #[fhir_serde(rename = "monitoringProgram")]
    pub monitoring_program: Option<Vec<MedicationKnowledgeMonitoringProgram>>,
    /// Guidelines for administration of the medication
    #[fhir_serde(rename = "administrationGuidelines")]
    pub administration_guidelines: Option<Vec<MedicationKnowledgeAdministrationGuidelines>>,
    /// Categorization of the medication within a formulary or classification system
    #[fhir_serde(rename = "medicineClassification")]
    pub medicine_classification: Option<Vec<MedicationKnowledgeMedicineClassification>>,
    /// Details about packaged medications
    pub packaging: Option<MedicationKnowledgePackaging>,
    /// Specifies descriptive properties of the medicine
    #[fhir_serde(rename = "drugCharacteristic")]
    pub drug_characteristic: Option<Vec<MedicationKnowledgeDrugCharacteristic>>,
    /// Potential clinical issue with or between medication(s)
    pub contraindication: Option<Vec<Reference>>,
    /// Regulatory information about a medication
    pub regulatory: Option<Vec<MedicationKnowledgeRegulatory>>,
    /// The time course of drug absorption, distribution, metabolism and excretion of a medication from the body
    pub kinetics: Option<Vec<MedicationKnowledgeKinetics>>,
}

/// Choice of types for the indication\[x\] field in MedicationKnowledgeAdministrationGuidelines
#[derive(Debug, Clone, PartialEq, FhirSerde)]
#[fhir_choice_element(base_name = "indication")]
pub enum MedicationKnowledgeAdministrationGuidelinesIndication {
    /// Variant accepting the CodeableConcept type.
    #[fhir_serde(rename = "indicationCodeableConcept")]
    CodeableConcept(CodeableConcept),
    /// Variant accepting the Reference type.
    #[fhir_serde(rename = "indicationReference")]
    Reference(Reference),
}

/// Guidelines for administration of the medication
#[derive(Debug, Clone, PartialEq, Default, FhirSerde)]
#[fhir_type(name = "MedicationKnowledgeAdministrationGuidelines", kind = "backbone_element")]
pub struct MedicationKnowledgeAdministrationGuidelines {
    /// Unique id for inter-element referencing
    pub id: Option<std::string::String>,
    /// Additional content defined by implementations
    pub extension: Option<Vec<Extension>>,
    /// Extensions that cannot be ignored even if unrecognized
    #[fhir_serde(rename = "modifierExtension")]
    pub modifier_extension: Option<Vec<Extension>>,
    /// Dosage for the medication for the specific guidelines
    pub dosage: Option<Vec<MedicationKnowledgeAdministrationGuidelinesDosage>>,
    /// Indication for use that apply to the specific administration guidelines
    #[fhir_serde(flatten)]
    pub indication: Option<MedicationKnowledgeAdministrationGuidelinesIndication>,
    /// Characteristics of the patient that are relevant to the administration guidelines
    #[fhir_serde(rename = "patientCharacteristics")]
    pub patient_characteristics: Option<
        Vec<MedicationKnowledgeAdministrationGuidelinesPatientCharacteristics>,
    >,
}

/// Dosage for the medication for the specific guidelines
#[derive(Debug, Clone, PartialEq, Default, FhirSerde)]
#[fhir_type(name = "MedicationKnowledgeAdministrationGuidelinesDosage", kind = "backbone_element")]
pub struct MedicationKnowledgeAdministrationGuidelinesDosage {
    /// Unique id for inter-element referencing
    pub id: Option<std::string::String>,
    /// Additional content defined by implementations
    pub extension: Option<Vec<Extension>>,
    /// Extensions that cannot be ignored even if unrecognized
    #[fhir_serde(rename = "modifierExtension")]
    pub modifier_extension: Option<Vec<Extension>>,
    /// Type of dosage
    #[fhir_serde(rename = "type")]
    pub r#type: CodeableConcept,
    /// Dosage for the medication for the specific guidelines
    pub dosage: Vec<Dosage>,
}

/// Choice of types for the characteristic\[x\] field in MedicationKnowledgeAdministrationGuidelinesPatientCharacteristics
#[derive(Debug, Clone, PartialEq, FhirSerde)]
#[fhir_choice_element(base_name = "characteristic")]
pub enum MedicationKnowledgeAdministrationGuidelinesPatientCharacteristicsCharacteristic {
    /// Variant accepting the CodeableConcept type.
    #[fhir_serde(rename = "characteristicCodeableConcept")]
    CodeableConcept(CodeableConcept),
    /// Variant accepting the Quantity type.
    #[fhir_serde(rename = "characteristicQuantity")]
    Quantity(Quantity),
}

/// Characteristics of the patient that are relevant to the administration guidelines
#[derive(Debug, Clone, PartialEq, FhirSerde)]
#[fhir_type(name = "MedicationKnowledgeAdministrationGuidelinesPatientCharacteristics", kind = "backbone_element")]
pub struct MedicationKnowledgeAdministrationGuidelinesPatientCharacteristics {
    /// Unique id for inter-element referencing
    pub id: Option<std::string::String>,
    /// Additional content defined by implementations
    pub extension: Option<Vec<Extension>>,
    /// Extensions that cannot be ignored even if unrecognized
    #[fhir_serde(rename = "modifierExtension")]
    pub modifier_extension: Option<Vec<Extension>>,
    /// Specific characteristic that is relevant to the administration guideline
    #[fhir_serde(flatten)]
    pub characteristic:
        MedicationKnowledgeAdministrationGuidelinesPatientCharacteristicsCharacteristic,
    /// The specific characteristic
    pub value: Option<Vec<String>>,
}

/// The pricing of the medication
#[derive(Debug, Clone, PartialEq, Default, FhirSerde)]
#[fhir_type(name = "MedicationKnowledgeCost", kind = "backbone_element")]
pub struct MedicationKnowledgeCost {
    /// Unique id for inter-element referencing
    pub id: Option<std::string::String>,
    /// Additional content defined by implementations
    pub extension: Option<Vec<Extension>>,
    /// Extensions that cannot be ignored even if unrecognized
    #[fhir_serde(rename = "modifierExtension")]
    pub modifier_extension: Option<Vec<Extension>>,
    /// The category of the cost information
    #[fhir_serde(rename = "type")]
    pub r#type: CodeableConcept,
    /// The source or owner for the price information
    pub source: Option<String>,
    /// The price of the medication
    pub cost: Money,
}

/// Choice of types for the value\[x\] field in MedicationKnowledgeDrugCharacteristic
#[derive(Debug, Clone, PartialEq, FhirSerde)]
#[fhir_choice_element(base_name = "value")]
pub enum MedicationKnowledgeDrugCharacteristicValue {
    /// Variant accepting the CodeableConcept type.
    #[fhir_serde(rename = "valueCodeableConcept")]
    CodeableConcept(CodeableConcept),
    /// Variant accepting the String type.
    #[fhir_serde(rename = "valueString")]
    String(String),
    /// Variant accepting the Quantity type.
    #[fhir_serde(rename = "valueQuantity")]
    Quantity(Quantity),
    /// Variant accepting the Base64Binary type.
    #[fhir_serde(rename = "valueBase64Binary")]
    Base64Binary(Base64Binary),
}

/// Specifies descriptive properties of the medicine
#[derive(Debug, Clone, PartialEq, Default, FhirSerde)]
#[fhir_type(name = "MedicationKnowledgeDrugCharacteristic", kind = "backbone_element")]
pub struct MedicationKnowledgeDrugCharacteristic {
    /// Unique id for inter-element referencing
    pub id: Option<std::string::String>,
    /// Additional content defined by implementations
    pub extension: Option<Vec<Extension>>,
    /// Extensions that cannot be ignored even if unrecognized
    #[fhir_serde(rename = "modifierExtension")]
    pub modifier_extension: Option<Vec<Extension>>,
    /// Code specifying the type of characteristic of medication
    #[fhir_serde(rename = "type")]
    pub r#type: Option<CodeableConcept>,
    /// Description of the characteristic
    #[fhir_serde(flatten)]
    pub value: Option<MedicationKnowledgeDrugCharacteristicValue>,
}

/// Choice of types for the item\[x\] field in MedicationKnowledgeIngredient
#[derive(Debug, Clone, PartialEq, FhirSerde)]
#[fhir_choice_element(base_name = "item")]
pub enum MedicationKnowledgeIngredientItem {
    /// Variant accepting the CodeableConcept type.
    #[fhir_serde(rename = "itemCodeableConcept")]
    CodeableConcept(CodeableConcept),
    /// Variant accepting the Reference type.
    #[fhir_serde(rename = "itemReference")]
    Reference(Reference),
}

/// Active or inactive ingredient
#[derive(Debug, Clone, PartialEq, FhirSerde)]
#[fhir_type(name = "MedicationKnowledgeIngredient", kind = "backbone_element")]
pub struct MedicationKnowledgeIngredient {
    /// Unique id for inter-element referencing
    pub id: Option<std::string::String>,
    /// Additional content defined by implementations
    pub extension: Option<Vec<Extension>>,
    /// Extensions that cannot be ignored even if unrecognized
    #[fhir_serde(rename = "modifierExtension")]
    pub modifier_extension: Option<Vec<Extension>>,
    /// Medication(s) or substance(s) contained in the medication
    #[fhir_serde(flatten)]
    pub item: MedicationKnowledgeIngredientItem,
    /// Active ingredient indicator
    #[fhir_serde(rename = "isActive")]
    pub is_active: Option<Boolean>,
    /// Quantity of ingredient present
    pub strength: Option<Ratio>,
}

/// The time course of drug absorption, distribution, metabolism and excretion of a medication from the body
#[derive(Debug, Clone, PartialEq, Default, FhirSerde)]
#[fhir_type(name = "MedicationKnowledgeKinetics", kind = "backbone_element")]
pub struct MedicationKnowledgeKinetics {
    /// Unique id for inter-element referencing
    pub id: Option<std::string::String>,
    /// Additional content defined by implementations
    pub extension: Option<Vec<Extension>>,
    /// Extensions that cannot be ignored even if unrecognized
    #[fhir_serde(rename = "modifierExtension")]
    pub modifier_extension: Option<Vec<Extension>>,
    /// The drug concentration measured at certain discrete points in time
    #[fhir_serde(rename = "areaUnderCurve")]
    pub area_under_curve: Option<Vec<Quantity>>,
    /// The median lethal dose of a drug
    #[fhir_serde(rename = "lethalDose50")]
    pub lethal_dose50: Option<Vec<Quantity>>,
    /// Time required for concentration in the body to decrease by half
    #[fhir_serde(rename = "halfLifePeriod")]
    pub half_life_period: Option<Duration>,
}

/// Categorization of the medication within a formulary or classification system
#[derive(Debug, Clone, PartialEq, Default, FhirSerde)]
#[fhir_type(name = "MedicationKnowledgeMedicineClassification", kind = "backbone_element")]
pub struct MedicationKnowledgeMedicineClassification {
    /// Unique id for inter-element referencing
    pub id: Option<std::string::String>,
    /// Additional content defined by implementations
    pub extension: Option<Vec<Extension>>,
    /// Extensions that cannot be ignored even if unrecognized
    #[fhir_serde(rename = "modifierExtension")]
    pub modifier_extension: Option<Vec<Extension>>,
    /// The type of category for the medication (for example, therapeutic classification, therapeutic sub-classification)
    #[fhir_serde(rename = "type")]
    pub r#type: CodeableConcept,
    /// Specific category assigned to the medication
    pub classification: Option<Vec<CodeableConcept>>,
}

/// Program under which a medication is reviewed
#[derive(Debug, Clone, PartialEq, Default, FhirSerde)]
#[fhir_type(name = "MedicationKnowledgeMonitoringProgram", kind = "backbone_element")]
pub struct MedicationKnowledgeMonitoringProgram {
    /// Unique id for inter-element referencing
    pub id: Option<std::string::String>,
    /// Additional content defined by implementations
    pub extension: Option<Vec<Extension>>,
    /// Extensions that cannot be ignored even if unrecognized
    #[fhir_serde(rename = "modifierExtension")]
    pub modifier_extension: Option<Vec<Extension>>,
    /// Type of program under which the medication is monitored
    #[fhir_serde(rename = "type")]
    pub r#type: Option<CodeableConcept>,
    /// Name of the reviewing program
    pub name: Option<String>,
}

/// Associated documentation about the medication
#[derive(Debug, Clone, PartialEq, Default, FhirSerde)]
#[fhir_type(name = "MedicationKnowledgeMonograph", kind = "backbone_element")]
pub struct MedicationKnowledgeMonograph {
    /// Unique id for inter-element referencing
    pub id: Option<std::string::String>,
    /// Additional content defined by implementations
    pub extension: Option<Vec<Extension>>,
    /// Extensions that cannot be ignored even if unrecognized
    #[fhir_serde(rename = "modifierExtension")]
    pub modifier_extension: Option<Vec<Extension>>,
    /// The category of medication document
    #[fhir_serde(rename = "type")]
    pub r#type: Option<CodeableConcept>,
    /// Associated documentation about the medication
    pub source: Option<Reference>,
}

/// Details about packaged medications
#[derive(Debug, Clone, PartialEq, Default, FhirSerde)]
#[fhir_type(name = "MedicationKnowledgePackaging", kind = "backbone_element")]
pub struct MedicationKnowledgePackaging {
    /// Unique id for inter-element referencing
    pub id: Option<std::string::String>,
    /// Additional content defined by implementations
    pub extension: Option<Vec<Extension>>,
    /// Extensions that cannot be ignored even if unrecognized
    #[fhir_serde(rename = "modifierExtension")]
    pub modifier_extension: Option<Vec<Extension>>,
    /// A code that defines the specific type of packaging that the medication can be found in
    #[fhir_serde(rename = "type")]
    pub r#type: Option<CodeableConcept>,
    /// The number of product units the package would contain if fully loaded
    pub quantity: Option<Quantity>,
}

/// Regulatory information about a medication
#[derive(Debug, Clone, PartialEq, Default, FhirSerde)]
#[fhir_type(name = "MedicationKnowledgeRegulatory", kind = "backbone_element")]
pub struct MedicationKnowledgeRegulatory {
    /// Unique id for inter-element referencing
    pub id: Option<std::string::String>,
    /// Additional content defined by implementations
    pub extension: Option<Vec<Extension>>,
    /// Extensions that cannot be ignored even if unrecognized
    #[fhir_serde(rename = "modifierExtension")]
    pub modifier_extension: Option<Vec<Extension>>,
    /// Specifies the authority of the regulation
    #[fhir_serde(rename = "regulatoryAuthority")]
    pub regulatory_authority: Reference,
    /// Specifies if changes are allowed when dispensing a medication from a regulatory perspective
    pub substitution: Option<Vec<MedicationKnowledgeRegulatorySubstitution>>,
    /// Specifies the schedule of a medication in jurisdiction
    pub schedule: Option<Vec<MedicationKnowledgeRegulatorySchedule>>,
    /// The maximum number of units of the medication that can be dispensed in a period
    #[fhir_serde(rename = "maxDispense")]
    pub max_dispense: Option<MedicationKnowledgeRegulatoryMaxDispense>,
}

/// The maximum number of units of the medication that can be dispensed in a period
#[derive(Debug, Clone, PartialEq, Default, FhirSerde)]
#[fhir_type(name = "MedicationKnowledgeRegulatoryMaxDispense", kind = "backbone_element")]
pub struct MedicationKnowledgeRegulatoryMaxDispense {
    /// Unique id for inter-element referencing
    pub id: Option<std::string::String>,
    /// Additional content defined by implementations
    pub extension: Option<Vec<Extension>>,
    /// Extensions that cannot be ignored even if unrecognized
    #[fhir_serde(rename = "modifierExtension")]
    pub modifier_extension: Option<Vec<Extension>>,
    /// The maximum number of units of the medication that can be dispensed
    pub quantity: Quantity,
    /// The period that applies to the maximum number of units
    pub period: Option<Duration>,
}

/// Specifies the schedule of a medication in jurisdiction
#[derive(Debug, Clone, PartialEq, Default, FhirSerde)]
#[fhir_type(name = "MedicationKnowledgeRegulatorySchedule", kind = "backbone_element")]
pub struct MedicationKnowledgeRegulatorySchedule {
    /// Unique id for inter-element referencing
    pub id: Option<std::string::String>,
    /// Additional content defined by implementations
    pub extension: Option<Vec<Extension>>,
    /// Extensions that cannot be ignored even if unrecognized
    #[fhir_serde(rename = "modifierExtension")]
    pub modifier_extension: Option<Vec<Extension>>,
    /// Specifies the specific drug schedule
    pub schedule: CodeableConcept,
}

/// Specifies if changes are allowed when dispensing a medication from a regulatory perspective
#[derive(Debug, Clone, PartialEq, Default, FhirSerde)]
#[fhir_type(name = "MedicationKnowledgeRegulatorySubstitution", kind = "backbone_element")]
pub struct MedicationKnowledgeRegulatorySubstitution {
    /// Unique id for inter-element referencing
    pub id: Option<std::string::String>,
    /// Additional content defined by implementations
    pub extension: Option<Vec<Extension>>,
    /// Extensions that cannot be ignored even if unrecognized
    #[fhir_serde(rename = "modifierExtension")]
    pub modifier_extension: Option<Vec<Extension>>,
    /// Specifies the type of substitution allowed
    #[fhir_serde(rename = "type")]
    pub r#type: CodeableConcept,
    /// Specifies if regulation allows for changes in the medication when dispensing
    pub allowed: Boolean,
}

/// Associated or related medication information
#[derive(Debug, Clone, PartialEq, Default, FhirSerde)]
#[fhir_type(name = "MedicationKnowledgeRelatedMedicationKnowledge", kind = "backbone_element")]
pub struct MedicationKnowledgeRelatedMedicationKnowledge {
    /// Unique id for inter-element referencing
    pub id: Option<std::string::String>,
    /// Additional content defined by implementations
    pub extension: Option<Vec<Extension>>,
    /// Extensions that cannot be ignored even if unrecognized
    #[fhir_serde(rename = "modifierExtension")]
    pub modifier_extension: Option<Vec<Extension>>,
    /// Category of medicationKnowledge
    #[fhir_serde(rename = "type")]
    pub r#type: CodeableConcept,
    /// Associated documentation about the associated medication knowledge
    pub reference: Vec<Reference>,
}
