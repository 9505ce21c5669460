use crate::r4::*;
use crate::FhirSerde;

/// FHIR SpecimenDefinition type
///
/// A kind of specimen with associated set of requirements.
///
/// See: [SpecimenDefinition](http://hl7.org/fhir/StructureDefinition/SpecimenDefinition)
#[derive(Debug, Clone, PartialEq, Default, FhirSerde)]
#[fhir_type(name = "SpecimenDefinition", kind = "domain_resource")]
pub struct SpecimenDefinition {
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
    /// Business identifier of a kind of specimen
    pub identifier: Option<Identifier>,
    /// Kind of material to collect
    #[fhir_serde(rename = "typeCollected")]
    pub type_collected: Option<CodeableConcept>,
    /// Patient preparation for collection
    #[fhir_serde(rename = "patientPreparation")]
    pub patient_preparation: Option<Vec<CodeableConcept>>,
    /// Time aspect for collection
    #[fhir_serde(rename = "timeAspect")]
    pub time_aspect: Option<String>,
    /// Specimen collection procedure
    pub collection: Option<Vec<CodeableConcept>>,
    /// Specimen in container intended for testing by lab
    #[fhir_serde(rename = "typeTested")]
    pub type_tested: Option<Vec<SpecimenDefinitionTypeTested>>,
}

/// Specimen in container intended for testing by lab
#[derive(Debug, Clone, PartialEq, Default, FhirSerde)]
#[fhir_type(name = "SpecimenDefinitionTypeTested", kind = "backbone_element")]
pub struct SpecimenDefinitionTypeTested {
    /// Unique id for inter-element referencing
    pub id: Option<std::string::String>,
    /// Additional content defined by implementations
    pub extension: Option<Vec<Extension>>,
    /// Extensions that cannot be ignored even if unrecognized
    #[fhir_serde(rename = "modifierExtension")]
    pub modifier_extension: Option<Vec<Extension>>,
    /// Primary or secondary specimen
    #[fhir_serde(rename = "isDerived")]
    pub is_derived: Option<Boolean>,
    /// Type of intended specimen
    #[fhir_serde(rename = "type")]
    pub r#type: Option<CodeableConcept>,
    /// The preference for this type of conditioned specimen
    pub preference: Code,
    /// The specimen's container
    pub container: Option<SpecimenDefinitionTypeTestedContainer>,
    /// Specimen requirements
    pub requirement: Option<String>,
    /// Specimen retention time
    #[fhir_serde(rename = "retentionTime")]
    pub retention_time: Option<Duration>,
    /// Rejection criterion
    #[fhir_serde(rename = "rejectionCriterion")]
    pub rejection_criterion: Option<Vec<CodeableConcept>>,
    /// Specimen handling before testing
    pub handling: Option<Vec<SpecimenDefinitionTypeTestedHandling>>,
}

/// Choice of types for the minimumVolume\[x\] field in SpecimenDefinitionTypeTestedContainer
#[derive(Debug, Clone, PartialEq, FhirSerde)]
#[fhir_choice_element(base_name = "minimumVolume")]
pub enum SpecimenDefinitionTypeTestedContainerMinimumVolume {
    /// Variant accepting the Quantity type.
    #[fhir_serde(rename = "minimumVolumeQuantity")]
    Quantity(Quantity),
    /// Variant accepting the String type.
    #[fhir_serde(rename = "minimumVolumeString")]
    String(String),
}

/// The specimen's container
#[derive(Debug, Clone, PartialEq, Default, FhirSerde)]
#[fhir_type(name = "SpecimenDefinitionTypeTestedContainer", kind = "backbone_element")]
pub struct SpecimenDefinitionTypeTestedContainer {
    /// Unique id for inter-element referencing
    pub id: Option<std::string::String>,
    /// Additional content defined by implementations
    pub extension: Option<Vec<Extension>>,
    /// Extensions that cannot be ignored even if unrecognized
    #[fhir_serde(rename = "modifierExtension")]
    pub modifier_extension: Option<Vec<Extension>>,
    /// Container material
    pub material: Option<CodeableConcept>,
    /// Kind of container associated with the kind of specimen
    #[fhir_serde(rename = "type")]
    pub r#type: Option<CodeableConcept>,
    /// Color of container cap
    pub cap: Option<CodeableConcept>,
    /// Container description
    pub description: Option<String>,
    /// Container capacity
    pub capacity: Option<Quantity>,
    /// Minimum volume
    #[fhir_serde(flatten)]
    pub minimum_volume: Option<SpecimenDefinitionTypeTestedContainerMinimumVolume>,
    /// Additive associated with container
    pub additive: Option<Vec<SpecimenDefinitionTypeTestedContainerAdditive>>,
    /// Specimen container preparation
    pub preparation: Option<String>,
}

/// Choice of types for the additive\[x\] field in SpecimenDefinitionTypeTestedContainerAdditive
#[derive(Debug, Clone, PartialEq, FhirSerde)]
#[fhir_choice_element(base_name = "additive")]
pub enum SpecimenDefinitionTypeTestedContainerAdditiveAdditive {
    /// Variant accepting the CodeableConcept type.
    #[fhir_serde(rename = "additiveCodeableConcept")]
    CodeableConcept(CodeableConcept),
    /// Variant accepting the Reference type.
    #[fhir_serde(rename = "additiveReference")]
    Reference(Reference),
}

/// Additive associated with container
#[derive(Debug, Clone, PartialEq, FhirSerde)]
#[fhir_type(name = "SpecimenDefinitionTypeTestedContainerAdditive", kind = "backbone_element")]
pub struct SpecimenDefinitionTypeTestedContainerAdditive {
    /// Unique id for inter-element referencing
    pub id: Option<std::string::String>,
    /// Additional content defined by implementations
    pub extension: Option<Vec<Extension>>,
    /// Extensions that cannot be ignored even if unrecognized
    #[fhir_serde(rename = "modifierExtension")]
    pub modifier_extension: Option<Vec<Extension>>,
    /// Additive associated with container
    #[fhir_serde(flatten)]
    pub additive: SpecimenDefinitionTypeTestedContainerAdditiveAdditive,
}

/// Specimen handling before testing
#[derive(Debug, Clone, PartialEq, Default, FhirSerde)]
#[fhir_type(name = "SpecimenDefinitionTypeTestedHandling", kind = "backbone_element")]
pub struct SpecimenDefinitionTypeTestedHandling {
    /// Unique id for inter-element referencing
    pub id: Option<std::string::String>,
    /// Additional content defined by implementations
    pub extension: Option<Vec<Extension>>,
    /// Extensions that cannot be ignored even if unrecognized
    #[fhir_serde(rename = "modifierExtension")]
    pub modifier_extension: Option<Vec<Extension>>,
    /// Temperature qualifier
    #[fhir_serde(rename = "temperatureQualifier")]
    pub temperature_qualifier: Option<CodeableConcept>,
    /// Temperature range
    #[fhir_serde(rename = "temperatureRange")]
    pub temperature_range: Option<Range>,
    /// Maximum preservation time
    #[fhir_serde(rename = "maxDuration")]
    pub max_duration: Option<Duration>,
    /// Preservation instruction
    pub instruction: Option<String>,
}
