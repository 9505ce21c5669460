use crate::r4::*;
use crate::FhirSerde;

/// FHIR MedicinalProductIndication type
///
/// Indication for the Medicinal Product.
///
/// See: [MedicinalProductIndication](http://hl7.org/fhir/StructureDefinition/MedicinalProductIndication)
#[derive(Debug, Clone, PartialEq, Default, FhirSerde)]
#[fhir_type(name = "MedicinalProductIndication", kind = "domain_resource")]
pub struct MedicinalProductIndication {
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
    /// The medication for which this is an indication
    pub subject: Option<Vec<Reference>>,
    /// The disease, symptom or procedure that is the indication for treatment
    #[fhir_serde(rename = "diseaseSymptomProcedure")]
    pub disease_symptom_procedure: Option<CodeableConcept>,
    /// The status of the disease or symptom for which the indication applies
    #[fhir_serde(rename = "diseaseStatus")]
    pub disease_status: Option<CodeableConcept>,
    /// Comorbidity (concurrent condition) or co-infection as part of the indication
    pub comorbidity: Option<Vec<CodeableConcept>>,
    /// The intended effect, aim or strategy to be achieved by the indication
    #[fhir_serde(rename = "intendedEffect")]
    pub intended_effect: Option<CodeableConcept>,
    /// Timing or duration information as part of the indication
    pub duration: Option<Quantity>,
    /// Information about the use of the medicinal product in relation to other therapies described as part of the indication
    #[fhir_serde(rename = "otherTherapy")]
    pub other_therapy: Option<Vec<MedicinalProductIndicationOtherTherapy>>,
    /// Describe the undesirable effects of the medicinal product
    #[fhir_serde(rename = "undesirableEffect")]
    pub undesirable_effect: Option<Vec<Reference>>,
    /// The population group to which this applies
    pub population: Option<Vec<Population>>,
}

/// Choice of types for the medication\[x\] field in MedicinalProductIndicationOtherTherapy
#[derive(Debug, Clone, PartialEq, FhirSerde)]
#[fhir_choice_element(base_name = "medication")]
pub enum MedicinalProductIndicationOtherTherapyMedication {
    /// Variant accepting the CodeableConcept type.
    #[fhir_serde(rename = "medicationCodeableConcept")]
    CodeableConcept(CodeableConcept),
    /// Variant accepting the Reference type.
    #[fhir_serde(rename = "medicationReference")]
    Reference(Reference),
}

/// Information about the use of the medicinal product in relation to other therapies described as part of the indication
#[derive(Debug, Clone, PartialEq, FhirSerde)]
#[fhir_type(name = "MedicinalProductIndicationOtherTherapy", kind = "backbone_element")]
pub struct MedicinalProductIndicationOtherTherapy {
    /// Unique id for inter-element referencing
    pub id: Option<std::string::String>,
    /// Additional content defined by implementations
    pub extension: Option<Vec<Extension>>,
    /// Extensions that cannot be ignored even if unrecognized
    #[fhir_serde(rename = "modifierExtension")]
    pub modifier_extension: Option<Vec<Extension>>,
    /// The type of relationship between the medicinal product indication or contraindication and another therapy
    #[fhir_serde(rename = "therapyRelationshipType")]
    pub therapy_relationship_type: CodeableConcept,
    /// Reference to a specific medication (active substance, medicinal product or class of products) as part of an indication or contraindication
    #[fhir_serde(flatten)]
    pub medication: MedicinalProductIndicationOtherTherapyMedication,
}
