use crate::r4::*;
use crate::FhirSerde;

/// FHIR MedicinalProductUndesirableEffect type
///
/// Describe the undesirable effects of the medicinal product.
///
/// See: [MedicinalProductUndesirableEffect](http://hl7.org/fhir/StructureDefinition/MedicinalProductUndesirableEffect)
#[derive(Debug, Clone, PartialEq, Default, FhirSerde)]
#[fhir_type(name = "MedicinalProductUndesirableEffect", kind = "domain_resource")]
pub struct MedicinalProductUndesirableEffect {
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
    /// The symptom, condition or undesirable effect
    #[fhir_serde(rename = "symptomConditionEffect")]
    pub symptom_condition_effect: Option<CodeableConcept>,
    /// Classification of the effect
    pub classification: Option<CodeableConcept>,
    /// The frequency of occurrence of the effect
    #[fhir_serde(rename = "frequencyOfOccurrence")]
    pub frequency_of_occurrence: Option<CodeableConcept>,
    /// The population group to which this applies
    pub population: Option<Vec<Population>>,
}
