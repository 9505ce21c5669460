use crate::r4::*;
use crate::FhirSerde;

/// FHIR SubstanceSpecification type
///
/// The detailed description of a substance, typically at a level beyond what is
/// used for prescribing
///
/// See: [SubstanceSpecification](http://hl7.org/fhir/StructureDefinition/SubstanceSpecification)
#[derive(Debug, Clone, PartialEq, Default, FhirSerde)]
#[fhir_type(name = "SubstanceSpecification", kind = "domain_resource")]
pub struct SubstanceSpecification {
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
    /// Identifier by which this substance is known
    pub identifier: Option<Identifier>,
    /// High level categorization, e.g. polymer or nucleic acid.
    #[fhir_serde(rename = "type")]
    pub r#type: Option<CodeableConcept>,
    /// Status of substance within the catalogue e.g. approved.
    pub status: Option<CodeableConcept>,
    /// If the substance applies to only human or veterinary use
    pub domain: Option<CodeableConcept>,
    /// Textual description of the substance
    pub description: Option<Markdown>,
    /// Supporting literature
    pub source: Option<Vec<Reference>>,
    /// Textual comment about this record of a substance
    pub comment: Option<String>,
    /// Moiety, for structural modifications
    pub moiety: Option<Vec<SubstanceSpecificationMoiety>>,
    /// General specifications for this substance, including how it is related to other substances
    pub property: Option<Vec<SubstanceSpecificationProperty>>,
    /// General information detailing this substance
    #[fhir_serde(rename = "referenceInformation")]
    pub reference_information: Option<Reference>,
    /// Structural information
    pub structure: Option<SubstanceSpecificationStructure>,
    /// Codes associated with the substance
    pub code: Option<Vec<SubstanceSpecificationCode>>,
    /// Names applicable to this substance
    pub name: Option<Vec<SubstanceSpecificationName>>,
    /// The molecular weight or weight range (for proteins, polymers or nucleic acids)
    #[fhir_serde(rename = "molecularWeight")]
    pub molecular_weight: Option<Vec<SubstanceSpecificationStructureIsotopeMolecularWeight>>,
    /// A link between this substance and another, with details of the relationship
    pub relationship: Option<Vec<SubstanceSpecificationRelationship>>,
    /// Data items specific to nucleic acids
    #[fhir_serde(rename = "nucleicAcid")]
    pub nucleic_acid: Option<Reference>,
    /// Data items specific to polymers
    pub polymer: Option<Reference>,
    /// Data items specific to proteins
    pub protein: Option<Reference>,
    /// Material or taxonomic/anatomical source for the substance
    #[fhir_serde(rename = "sourceMaterial")]
    pub source_material: Option<Reference>,
}

/// Codes associated with the substance
#[derive(Debug, Clone, PartialEq, Default, FhirSerde)]
#[fhir_type(name = "SubstanceSpecificationCode", kind = "backbone_element")]
pub struct SubstanceSpecificationCode {
    /// Unique id for inter-element referencing
    pub id: Option<std::string::String>,
    /// Additional content defined by implementations
    pub extension: Option<Vec<Extension>>,
    /// Extensions that cannot be ignored even if unrecognized
    #[fhir_serde(rename = "modifierExtension")]
    pub modifier_extension: Option<Vec<Extension>>,
    /// The specific code
    pub code: Option<CodeableConcept>,
    /// Status of the code assignment
    pub status: Option<CodeableConcept>,
    /// The date at which the code status is changed as part of the terminology maintenance
    #[fhir_serde(rename = "statusDate")]
    pub status_date: Option<DateTime>,
    /// Any comment can be provided in this field, if necessary
    pub comment: Option<String>,
    /// Supporting literature
    pub source: Option<Vec<Reference>>,
}

/// Choice of types for the amount\[x\] field in SubstanceSpecificationMoiety
#[derive(Debug, Clone, PartialEq, FhirSerde)]
#[fhir_choice_element(base_name = "amount")]
pub enum SubstanceSpecificationMoietyAmount {
    /// Variant accepting the Quantity type.
    #[fhir_serde(rename = "amountQuantity")]
    Quantity(Quantity),
    /// Variant accepting the String type.
    #[fhir_serde(rename = "amountString")]
    String(String),
}

/// Moiety, for structural modifications
#[derive(Debug, Clone, PartialEq, Default, FhirSerde)]
#[fhir_type(name = "SubstanceSpecificationMoiety", kind = "backbone_element")]
pub struct SubstanceSpecificationMoiety {
    /// Unique id for inter-element referencing
    pub id: Option<std::string::String>,
    /// Additional content defined by implementations
    pub extension: Option<Vec<Extension>>,
    /// Extensions that cannot be ignored even if unrecognized
    #[fhir_serde(rename = "modifierExtension")]
    pub modifier_extension: Option<Vec<Extension>>,
    /// Role that the moiety is playing
    pub role: Option<CodeableConcept>,
    /// Identifier by which this moiety substance is known
    pub identifier: Option<Identifier>,
    /// Textual name for this moiety substance
    pub name: Option<String>,
    /// Stereochemistry type
    pub stereochemistry: Option<CodeableConcept>,
    /// Optical activity type
    #[fhir_serde(rename = "opticalActivity")]
    pub optical_activity: Option<CodeableConcept>,
    /// Molecular formula
    #[fhir_serde(rename = "molecularFormula")]
    pub molecular_formula: Option<String>,
    /// Quantitative value for this moiety
    #[fhir_serde(flatten)]
    pub amount: Option<SubstanceSpecificationMoietyAmount>,
}

/// Names applicable to this substance
#[derive(Debug, Clone, PartialEq, Default, FhirSerde)]
#[fhir_type(name = "SubstanceSpecificationName", kind = "backbone_element")]
pub struct SubstanceSpecificationName {
    /// Unique id for inter-element referencing
    pub id: Option<std::string::String>,
    /// Additional content defined by implementations
    pub extension: Option<Vec<Extension>>,
    /// Extensions that cannot be ignored even if unrecognized
    #[fhir_serde(rename = "modifierExtension")]
    pub modifier_extension: Option<Vec<Extension>>,
    /// The actual name
    pub name: String,
    /// Name type
    #[fhir_serde(rename = "type")]
    pub r#type: Option<CodeableConcept>,
    /// The status of the name
    pub status: Option<CodeableConcept>,
    /// If this is the preferred name for this substance
    pub preferred: Option<Boolean>,
    /// Language of the name
    pub language: Option<Vec<CodeableConcept>>,
    /// The use context of this name for example if there is a different name a drug active ingredient as opposed to a food colour additive
    pub domain: Option<Vec<CodeableConcept>>,
    /// The jurisdiction where this name applies
    pub jurisdiction: Option<Vec<CodeableConcept>>,
    /// A synonym of this name
    pub synonym: Option<Vec<SubstanceSpecificationName>>,
    /// A translation for this name
    pub translation: Option<Vec<SubstanceSpecificationName>>,
    /// Details of the official nature of this name
    pub official: Option<Vec<SubstanceSpecificationNameOfficial>>,
    /// Supporting literature
    pub source: Option<Vec<Reference>>,
}

/// Details of the official nature of this name
#[derive(Debug, Clone, PartialEq, Default, FhirSerde)]
#[fhir_type(name = "SubstanceSpecificationNameOfficial", kind = "backbone_element")]
pub struct SubstanceSpecificationNameOfficial {
    /// Unique id for inter-element referencing
    pub id: Option<std::string::String>,
    /// Additional content defined by implementations
    pub extension: Option<Vec<Extension>>,
    /// Extensions that cannot be ignored even if unrecognized
    #[fhir_serde(rename = "modifierExtension")]
    pub modifier_extension: Option<Vec<Extension>>,
    /// Which authority uses this official name
    pub authority: Option<CodeableConcept>,
    /// The status of the official name
    pub status: Option<CodeableConcept>,
    /// Date of official name change
    pub date: Option<DateTime>,
}

/// Choice of types for the definingSubstance\[x\] field in SubstanceSpecificationProperty
#[derive(Debug, Clone, PartialEq, FhirSerde)]
#[fhir_choice_element(base_name = "definingSubstance")]
pub enum SubstanceSpecificationPropertyDefiningSubstance {
    /// Variant accepting the Reference type.
    #[fhir_serde(rename = "definingSubstanceReference")]
    Reference(Reference),
    /// Variant accepting the CodeableConcept type.
    #[fhir_serde(rename = "definingSubstanceCodeableConcept")]
    CodeableConcept(CodeableConcept),
}

/// Choice of types for the amount\[x\] field in SubstanceSpecificationProperty
#[derive(Debug, Clone, PartialEq, FhirSerde)]
#[fhir_choice_element(base_name = "amount")]
pub enum SubstanceSpecificationPropertyAmount {
    /// Variant accepting the Quantity type.
    #[fhir_serde(rename = "amountQuantity")]
    Quantity(Quantity),
    /// Variant accepting the String type.
    #[fhir_serde(rename = "amountString")]
    String(String),
}

/// General specifications for this substance, including how it is related to other substances
#[derive(Debug, Clone, PartialEq, Default, FhirSerde)]
#[fhir_type(name = "SubstanceSpecificationProperty", kind = "backbone_element")]
pub struct SubstanceSpecificationProperty {
    /// Unique id for inter-element referencing
    pub id: Option<std::string::String>,
    /// Additional content defined by implementations
    pub extension: Option<Vec<Extension>>,
    /// Extensions that cannot be ignored even if unrecognized
    #[fhir_serde(rename = "modifierExtension")]
    pub modifier_extension: Option<Vec<Extension>>,
    /// A category for this property, e.g. Physical, Chemical, Enzymatic.
    pub category: Option<CodeableConcept>,
    /// Property type e.g. viscosity, pH, isoelectric point.
    pub code: Option<CodeableConcept>,
    /// Parameters that were used in the measurement of a property (e.g. for viscosity: measured at 20C with a pH of 7.1).
    pub parameters: Option<String>,
    /// A substance upon which a defining property depends (e.g. for solubility: in water, in alcohol).
    #[fhir_serde(flatten)]
    pub defining_substance: Option<SubstanceSpecificationPropertyDefiningSubstance>,
    /// Quantitative value for this property
    #[fhir_serde(flatten)]
    pub amount: Option<SubstanceSpecificationPropertyAmount>,
}

/// Choice of types for the substance\[x\] field in SubstanceSpecificationRelationship
#[derive(Debug, Clone, PartialEq, FhirSerde)]
#[fhir_choice_element(base_name = "substance")]
pub enum SubstanceSpecificationRelationshipSubstance {
    /// Variant accepting the Reference type.
    #[fhir_serde(rename = "substanceReference")]
    Reference(Reference),
    /// Variant accepting the CodeableConcept type.
    #[fhir_serde(rename = "substanceCodeableConcept")]
    CodeableConcept(CodeableConcept),
}

/// Choice of types for the amount\[x\] field in SubstanceSpecificationRelationship
#[derive(Debug, Clone, PartialEq, FhirSerde)]
#[fhir_choice_element(base_name = "amount")]
pub enum SubstanceSpecificationRelationshipAmount {
    /// Variant accepting the Quantity type.
    #[fhir_serde(rename = "amountQuantity")]
    Quantity(Quantity),
    /// Variant accepting the Range type.
    #[fhir_serde(rename = "amountRange")]
    Range(Range),
    /// Variant accepting the Ratio type.
    #[fhir_serde(rename = "amountRatio")]
    Ratio(Ratio),
    /// Variant accepting the String type.
    #[fhir_serde(rename = "amountString")]
    String(String),
}

/// A link between this substance and another, with details of the relationship
#[derive(Debug, Clone, PartialEq, Default, FhirSerde)]
#[fhir_type(name = "SubstanceSpecificationRelationship", kind = "backbone_element")]
pub struct SubstanceSpecificationRelationship {
    /// Unique id for inter-element referencing
    pub id: Option<std::string::String>,
    /// Additional content defined by implementations
    pub extension: Option<Vec<Extension>>,
    /// Extensions that cannot be ignored even if unrecognized
    #[fhir_serde(rename = "modifierExtension")]
    pub modifier_extension: Option<Vec<Extension>>,
    /// A pointer to another substance, as a resource or just a representational code
    #[fhir_serde(flatten)]
    pub substance: Option<SubstanceSpecificationRelationshipSubstance>,
    /// For example "salt to parent", "active moiety", "starting material"
    pub relationship: Option<CodeableConcept>,
    /// For example where an enzyme strongly bonds with a particular substance, this is a defining relationship for that enzyme, out of several possible substance relationships
    #[fhir_serde(rename = "isDefining")]
    pub is_defining: Option<Boolean>,
    /// A numeric factor for the relationship, for instance to express that the salt of a substance has some percentage of the active substance in relation to some other
    #[fhir_serde(flatten)]
    pub amount: Option<SubstanceSpecificationRelationshipAmount>,
    /// For use when the numeric
    #[fhir_serde(rename = "amountRatioLowLimit")]
    pub amount_ratio_low_limit: Option<Ratio>,
    /// An operator for the amount, for example "average", "approximately", "less than"
    #[fhir_serde(rename = "amountType")]
    pub amount_type: Option<CodeableConcept>,
    /// Supporting literature
    pub source: Option<Vec<Reference>>,
}

/// Structural information
#[derive(Debug, Clone, PartialEq, Default, FhirSerde)]
#[fhir_type(name = "SubstanceSpecificationStructure", kind = "backbone_element")]
pub struct SubstanceSpecificationStructure {
    /// Unique id for inter-element referencing
    pub id: Option<std::string::String>,
    /// Additional content defined by implementations
    pub extension: Option<Vec<Extension>>,
    /// Extensions that cannot be ignored even if unrecognized
    #[fhir_serde(rename = "modifierExtension")]
    pub modifier_extension: Option<Vec<Extension>>,
    /// Stereochemistry type
    pub stereochemistry: Option<CodeableConcept>,
    /// Optical activity type
    #[fhir_serde(rename = "opticalActivity")]
    pub optical_activity: Option<CodeableConcept>,
    /// Molecular formula
    #[fhir_serde(rename = "molecularFormula")]
    pub molecular_formula: Option<String>,
    /// Specified per moiety according to the Hill system, i.e. first C, then H, then alphabetical, each moiety separated by a dot.
    #[fhir_serde(rename = "molecularFormulaByMoiety")]
    pub molecular_formula_by_moiety: Option<String>,
    /// Applicable for single substances that contain a radionuclide or a non-natural isotopic ratio
    pub isotope: Option<Vec<SubstanceSpecificationStructureIsotope>>,
    /// The molecular weight or weight range (for proteins, polymers or nucleic acids)
    #[fhir_serde(rename = "molecularWeight")]
    pub molecular_weight: Option<SubstanceSpecificationStructureIsotopeMolecularWeight>,
    /// Supporting literature
    pub source: Option<Vec<Reference>>,
    /// Molecular structural representation
    pub representation: Option<Vec<SubstanceSpecificationStructureRepresentation>>,
}

/// Applicable for single substances that contain a radionuclide or a non-natural isotopic ratio
#[derive(Debug, Clone, PartialEq, Default, FhirSerde)]
#[fhir_type(name = "SubstanceSpecificationStructureIsotope", kind = "backbone_element")]
pub struct SubstanceSpecificationStructureIsotope {
    /// Unique id for inter-element referencing
    pub id: Option<std::string::String>,
    /// Additional content defined by implementations
    pub extension: Option<Vec<Extension>>,
    /// Extensions that cannot be ignored even if unrecognized
    #[fhir_serde(rename = "modifierExtension")]
    pub modifier_extension: Option<Vec<Extension>>,
    /// Substance identifier for each non-natural or radioisotope
    pub identifier: Option<Identifier>,
    /// Substance name for each non-natural or radioisotope
    pub name: Option<CodeableConcept>,
    /// The type of isotopic substitution present in a single substance
    pub substitution: Option<CodeableConcept>,
    /// Half life - for a non-natural nuclide
    #[fhir_serde(rename = "halfLife")]
    pub half_life: Option<Quantity>,
    /// The molecular weight or weight range (for proteins, polymers or nucleic acids)
    #[fhir_serde(rename = "molecularWeight")]
    pub molecular_weight: Option<SubstanceSpecificationStructureIsotopeMolecularWeight>,
}

/// The molecular weight or weight range (for proteins, polymers or nucleic acids)
#[derive(Debug, Clone, PartialEq, Default, FhirSerde)]
#[fhir_type(name = "SubstanceSpecificationStructureIsotopeMolecularWeight", kind = "backbone_element")]
pub struct SubstanceSpecificationStructureIsotopeMolecularWeight {
    /// Unique id for inter-element referencing
    pub id: Option<std::string::String>,
    /// Additional content defined by implementations
    pub extension: Option<Vec<Extension>>,
    /// Extensions that cannot be ignored even if unrecognized
    #[fhir_serde(rename = "modifierExtension")]
    pub modifier_extension: Option<Vec<Extension>>,
    /// The method by which the molecular weight was determined
    pub method: Option<CodeableConcept>,
    /// Type of molecular weight such as exact, average (also known as. number average), weight average.
    #[fhir_serde(rename = "type")]
    pub r#type: Option<CodeableConcept>,
    /// Used to capture quantitative values for a variety of elements. If only limits are given, the arithmetic mean would be the average. If only a single definite value for a given element is given, it would be captured in this field.
    pub amount: Option<Quantity>,
}

/// Molecular structural representation
#[derive(Debug, Clone, PartialEq, Default, FhirSerde)]
#[fhir_type(name = "SubstanceSpecificationStructureRepresentation", kind = "backbone_element")]
pub struct SubstanceSpecificationStructureRepresentation {
    /// Unique id for inter-element referencing
    pub id: Option<std::string::String>,
    /// Additional content defined by implementations
    pub extension: Option<Vec<Extension>>,
    /// Extensions that cannot be ignored even if unrecognized
    #[fhir_serde(rename = "modifierExtension")]
    pub modifier_extension: Option<Vec<Extension>>,
    /// The type of structure (e.g. Full, Partial, Representative).
    #[fhir_serde(rename = "type")]
    pub r#type: Option<CodeableConcept>,
    /// The structural representation as text string in a format e.g. InChI, SMILES, MOLFILE, CDX.
    pub representation: Option<String>,
    /// An attached file with the structural representation
    pub attachment: Option<Attachment>,
}
