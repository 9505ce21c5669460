use crate::r4::*;
use crate::FhirSerde;

/// Choice of types for the age\[x\] field in Population
#[derive(Debug, Clone, PartialEq, FhirSerde)]
#[fhir_choice_element(base_name = "age")]
pub enum PopulationAge {
    /// Variant accepting the Range type.
    #[fhir_serde(rename = "ageRange")]
    Range(Range),
    /// Variant accepting the CodeableConcept type.
    #[fhir_serde(rename = "ageCodeableConcept")]
    CodeableConcept(CodeableConcept),
}

/// FHIR Population type
///
/// A populatioof people with some set of grouping criteria.
///
/// See: [Population](http://hl7.org/fhir/StructureDefinition/Population)
#[derive(Debug, Clone, PartialEq, Default, FhirSerde)]
#[fhir_type(name = "Population", kind = "backbone_element")]
pub struct Population {
    /// Unique id for inter-element referencing
    pub id: Option<std::string::String>,
    /// Additional content defined by implementations
    pub extension: Option<Vec<Extension>>,
    /// Extensions that cannot be ignored even if unrecognized
    #[fhir_serde(rename = "modifierExtension")]
    pub modifier_extension: Option<Vec<Extension>>,
    /// The age of the specific population
    #[fhir_serde(flatten)]
    pub age: Option<PopulationAge>,
    /// The gender of the specific population
    pub gender: Option<CodeableConcept>,
    /// Race of the specific population
    pub race: Option<CodeableConcept>,
    /// The existing physiological conditions of the specific population to which this applies
    #[fhir_serde(rename = "physiologicalCondition")]
    pub physiological_condition: Option<CodeableConcept>,
}
