use crate::r4::*;
use crate::FhirSerde;

/// FHIR SubstancePolymer type
///
/// Todo
///
/// See: [SubstancePolymer](http://hl7.org/fhir/StructureDefinition/SubstancePolymer)
#[derive(Debug, Clone, PartialEq, Default, FhirSerde)]
#[fhir_type(name = "SubstancePolymer", kind = "domain_resource")]
pub struct SubstancePolymer {
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
    /// Todo
    pub class: Option<CodeableConcept>,
    /// Todo
    pub geometry: Option<CodeableConcept>,
    /// Todo
    #[fhir_serde(rename = "copolymerConnectivity")]
    pub copolymer_connectivity: Option<Vec<CodeableConcept>>,
    /// Todo
    pub modification: Option<Vec<String>>,
    /// Todo
    #[fhir_serde(rename = "monomerSet")]
    pub monomer_set: Option<Vec<SubstancePolymerMonomerSet>>,
    /// Todo
    pub repeat: Option<Vec<SubstancePolymerRepeat>>,
}

/// Todo
#[derive(Debug, Clone, PartialEq, Default, FhirSerde)]
#[fhir_type(name = "SubstancePolymerMonomerSet", kind = "backbone_element")]
pub struct SubstancePolymerMonomerSet {
    /// Unique id for inter-element referencing
    pub id: Option<std::string::String>,
    /// Additional content defined by implementations
    pub extension: Option<Vec<Extension>>,
    /// Extensions that cannot be ignored even if unrecognized
    #[fhir_serde(rename = "modifierExtension")]
    pub modifier_extension: Option<Vec<Extension>>,
    /// Todo
    #[fhir_serde(rename = "ratioType")]
    pub ratio_type: Option<CodeableConcept>,
    /// Todo
    #[fhir_serde(rename = "startingMaterial")]
    pub starting_material: Option<Vec<SubstancePolymerMonomerSetStartingMaterial>>,
}

/// Todo
#[derive(Debug, Clone, PartialEq, Default, FhirSerde)]
#[fhir_type(name = "SubstancePolymerMonomerSetStartingMaterial", kind = "backbone_element")]
pub struct SubstancePolymerMonomerSetStartingMaterial {
    /// Unique id for inter-element referencing
    pub id: Option<std::string::String>,
    /// Additional content defined by implementations
    pub extension: Option<Vec<Extension>>,
    /// Extensions that cannot be ignored even if unrecognized
    #[fhir_serde(rename = "modifierExtension")]
    pub modifier_extension: Option<Vec<Extension>>,
    /// Todo
    pub material: Option<CodeableConcept>,
    /// Todo
    #[fhir_serde(rename = "type")]
    pub r#type: Option<CodeableConcept>,
    /// Todo
    #[fhir_serde(rename = "isDefining")]
    pub is_defining: Option<Boolean>,
    /// Todo
    pub amount: Option<SubstanceAmount>,
}

/// Todo
#[derive(Debug, Clone, PartialEq, Default, FhirSerde)]
#[fhir_type(name = "SubstancePolymerRepeat", kind = "backbone_element")]
pub struct SubstancePolymerRepeat {
    /// Unique id for inter-element referencing
    pub id: Option<std::string::String>,
    /// Additional content defined by implementations
    pub extension: Option<Vec<Extension>>,
    /// Extensions that cannot be ignored even if unrecognized
    #[fhir_serde(rename = "modifierExtension")]
    pub modifier_extension: Option<Vec<Extension>>,
    /// Todo
    #[fhir_serde(rename = "numberOfUnits")]
    pub number_of_units: Option<Integer>,
    /// Todo
    #[fhir_serde(rename = "averageMolecularFormula")]
    pub average_molecular_formula: Option<String>,
    /// Todo
    #[fhir_serde(rename = "repeatUnitAmountType")]
    pub repeat_unit_amount_type: Option<CodeableConcept>,
    /// Todo
    #[fhir_serde(rename = "repeatUnit")]
    pub repeat_unit: Option<Vec<SubstancePolymerRepeatRepeatUnit>>,
}

/// Todo
#[derive(Debug, Clone, PartialEq, Default, FhirSerde)]
#[fhir_type(name = "SubstancePolymerRepeatRepeatUnit", kind = "backbone_element")]
pub struct SubstancePolymerRepeatRepeatUnit {
    /// Unique id for inter-element referencing
    pub id: Option<std::string::String>,
    /// Additional content defined by implementations
    pub extension: Option<Vec<Extension>>,
    /// Extensions that cannot be ignored even if unrecognized
    #[fhir_serde(rename = "modifierExtension")]
    pub modifier_extension: Option<Vec<Extension>>,
    /// Todo
    #[fhir_serde(rename = "orientationOfPolymerisation")]
    pub orientation_of_polymerisation: Option<CodeableConcept>,
    /// Todo
    #[fhir_serde(rename = "repeatUnit")]
    pub repeat_unit: Option<String>,
    /// Todo
    pub amount: Option<SubstanceAmount>,
    /// Todo
    #[fhir_serde(rename = "degreeOfPolymerisation")]
    pub degree_of_polymerisation: Option<
        Vec<SubstancePolymerRepeatRepeatUnitDegreeOfPolymerisation>,
    >,
    /// Todo
    #[fhir_serde(rename = "structuralRepresentation")]
    pub structural_representation: Option<
        Vec<SubstancePolymerRepeatRepeatUnitStructuralRepresentation>,
    >,
}

/// Todo
#[derive(Debug, Clone, PartialEq, Default, FhirSerde)]
#[fhir_type(name = "SubstancePolymerRepeatRepeatUnitDegreeOfPolymerisation", kind = "backbone_element")]
pub struct SubstancePolymerRepeatRepeatUnitDegreeOfPolymerisation {
    /// Unique id for inter-element referencing
    pub id: Option<std::string::String>,
    /// Additional content defined by implementations
    pub extension: Option<Vec<Extension>>,
    /// Extensions that cannot be ignored even if unrecognized
    #[fhir_serde(rename = "modifierExtension")]
    pub modifier_extension: Option<Vec<Extension>>,
    /// Todo
    pub degree: Option<CodeableConcept>,
    /// Todo
    pub amount: Option<SubstanceAmount>,
}

/// Todo
#[derive(Debug, Clone, PartialEq, Default, FhirSerde)]
#[fhir_type(name = "SubstancePolymerRepeatRepeatUnitStructuralRepresentation", kind = "backbone_element")]
pub struct SubstancePolymerRepeatRepeatUnitStructuralRepresentation {
    /// Unique id for inter-element referencing
    pub id: Option<std::string::String>,
    /// Additional content defined by implementations
    pub extension: Option<Vec<Extension>>,
    /// Extensions that cannot be ignored even if unrecognized
    #[fhir_serde(rename = "modifierExtension")]
    pub modifier_extension: Option<Vec<Extension>>,
    /// Todo
    #[fhir_serde(rename = "type")]
    pub r#type: Option<CodeableConcept>,
    /// Todo
    pub representation: Option<String>,
    /// Todo
    pub attachment: Option<Attachment>,
}
