use crate::r4::*;
use crate::FhirSerde;

/// FHIR SubstanceReferenceInformation type
///
/// Todo
///
/// See: [SubstanceReferenceInformation](http://hl7.org/fhir/StructureDefinition/SubstanceReferenceInformation)
#[derive(Debug, Clone, PartialEq, Default, FhirSerde)]
#[fhir_type(name = "SubstanceReferenceInformation", kind = "domain_resource")]
pub struct SubstanceReferenceInformation {
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
    pub comment: Option<String>,
    /// Todo
    pub gene: Option<Vec<SubstanceReferenceInformationGene>>,
    /// Todo
    #[fhir_serde(rename = "geneElement")]
    pub gene_element: Option<Vec<SubstanceReferenceInformationGeneElement>>,
    /// Todo
    pub classification: Option<Vec<SubstanceReferenceInformationClassification>>,
    /// Todo
    pub target: Option<Vec<SubstanceReferenceInformationTarget>>,
}

/// Todo
#[derive(Debug, Clone, PartialEq, Default, FhirSerde)]
#[fhir_type(name = "SubstanceReferenceInformationClassification", kind = "backbone_element")]
pub struct SubstanceReferenceInformationClassification {
    /// Unique id for inter-element referencing
    pub id: Option<std::string::String>,
    /// Additional content defined by implementations
    pub extension: Option<Vec<Extension>>,
    /// Extensions that cannot be ignored even if unrecognized
    #[fhir_serde(rename = "modifierExtension")]
    pub modifier_extension: Option<Vec<Extension>>,
    /// Todo
    pub domain: Option<CodeableConcept>,
    /// Todo
    pub classification: Option<CodeableConcept>,
    /// Todo
    pub subtype: Option<Vec<CodeableConcept>>,
    /// Todo
    pub source: Option<Vec<Reference>>,
}

/// Todo
#[derive(Debug, Clone, PartialEq, Default, FhirSerde)]
#[fhir_type(name = "SubstanceReferenceInformationGene", kind = "backbone_element")]
pub struct SubstanceReferenceInformationGene {
    /// Unique id for inter-element referencing
    pub id: Option<std::string::String>,
    /// Additional content defined by implementations
    pub extension: Option<Vec<Extension>>,
    /// Extensions that cannot be ignored even if unrecognized
    #[fhir_serde(rename = "modifierExtension")]
    pub modifier_extension: Option<Vec<Extension>>,
    /// Todo
    #[fhir_serde(rename = "geneSequenceOrigin")]
    pub gene_sequence_origin: Option<CodeableConcept>,
    /// Todo
    pub gene: Option<CodeableConcept>,
    /// Todo
    pub source: Option<Vec<Reference>>,
}

/// Todo
#[derive(Debug, Clone, PartialEq, Default, FhirSerde)]
#[fhir_type(name = "SubstanceReferenceInformationGeneElement", kind = "backbone_element")]
pub struct SubstanceReferenceInformationGeneElement {
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
    pub element: Option<Identifier>,
    /// Todo
    pub source: Option<Vec<Reference>>,
}

/// Choice of types for the amount\[x\] field in SubstanceReferenceInformationTarget
#[derive(Debug, Clone, PartialEq, FhirSerde)]
#[fhir_choice_element(base_name = "amount")]
pub enum SubstanceReferenceInformationTargetAmount {
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

/// Todo
#[derive(Debug, Clone, PartialEq, Default, FhirSerde)]
#[fhir_type(name = "SubstanceReferenceInformationTarget", kind = "backbone_element")]
pub struct SubstanceReferenceInformationTarget {
    /// Unique id for inter-element referencing
    pub id: Option<std::string::String>,
    /// Additional content defined by implementations
    pub extension: Option<Vec<Extension>>,
    /// Extensions that cannot be ignored even if unrecognized
    #[fhir_serde(rename = "modifierExtension")]
    pub modifier_extension: Option<Vec<Extension>>,
    /// Todo
    pub target: Option<Identifier>,
    /// Todo
    #[fhir_serde(rename = "type")]
    pub r#type: Option<CodeableConcept>,
    /// Todo
    pub interaction: Option<CodeableConcept>,
    /// Todo
    pub organism: Option<CodeableConcept>,
    /// Todo
    #[fhir_serde(rename = "organismType")]
    pub organism_type: Option<CodeableConcept>,
    /// Todo
    #[fhir_serde(flatten)]
    pub amount: Option<SubstanceReferenceInformationTargetAmount>,
    /// Todo
    #[fhir_serde(rename = "amountType")]
    pub amount_type: Option<CodeableConcept>,
    /// Todo
    pub source: Option<Vec<Reference>>,
}
