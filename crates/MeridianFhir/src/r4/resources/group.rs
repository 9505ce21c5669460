use crate::r4::*;
use crate::FhirSerde;

/// FHIR Group type
///
/// Represents a defined collection of entities that may be discussed or acted
/// upon collectively but which are not expected to act collectively, and are not
/// formally or legally recognized; i.e. a collection of entities that isn't an
/// Organization.
///
/// See: [Group](http://hl7.org/fhir/StructureDefinition/Group)
#[derive(Debug, Clone, PartialEq, Default, FhirSerde)]
#[fhir_type(name = "Group", kind = "domain_resource")]
pub struct Group {
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
    /// Unique id
    pub identifier: Option<Vec<Identifier>>,
    /// Whether this group's record is in active use
    pub active: Option<Boolean>,
    /// person | animal | practitioner | device | medication | substance
    #[fhir_serde(rename = "type")]
    pub r#type: Code,
    /// Descriptive or actual
    pub actual: Boolean,
    /// Kind of Group members
    pub code: Option<CodeableConcept>,
    /// Label for Group
    pub name: Option<String>,
    /// Number of members
    pub quantity: Option<UnsignedInt>,
    /// Entity that is the custodian of the Group's definition
    #[fhir_serde(rename = "managingEntity")]
    pub managing_entity: Option<Reference>,
    /// Include / Exclude group members by Trait
    pub characteristic: Option<Vec<GroupCharacteristic>>,
    /// Who or what is in group
    pub member: Option<Vec<GroupMember>>,
}

/// Choice of types for the value\[x\] field in GroupCharacteristic
#[derive(Debug, Clone, PartialEq, FhirSerde)]
#[fhir_choice_element(base_name = "value")]
pub enum GroupCharacteristicValue {
    /// Variant accepting the CodeableConcept type.
    #[fhir_serde(rename = "valueCodeableConcept")]
    CodeableConcept(CodeableConcept),
    /// Variant accepting the Boolean type.
    #[fhir_serde(rename = "valueBoolean")]
    Boolean(Boolean),
    /// Variant accepting the Quantity type.
    #[fhir_serde(rename = "valueQuantity")]
    Quantity(Quantity),
    /// Variant accepting the Range type.
    #[fhir_serde(rename = "valueRange")]
    Range(Range),
    /// Variant accepting the Reference type.
    #[fhir_serde(rename = "valueReference")]
    Reference(Reference),
}

/// Include / Exclude group members by Trait
#[derive(Debug, Clone, PartialEq, FhirSerde)]
#[fhir_type(name = "GroupCharacteristic", kind = "backbone_element")]
pub struct GroupCharacteristic {
    /// Unique id for inter-element referencing
    pub id: Option<std::string::String>,
    /// Additional content defined by implementations
    pub extension: Option<Vec<Extension>>,
    /// Extensions that cannot be ignored even if unrecognized
    #[fhir_serde(rename = "modifierExtension")]
    pub modifier_extension: Option<Vec<Extension>>,
    /// Kind of characteristic
    pub code: CodeableConcept,
    /// Value held by characteristic
    #[fhir_serde(flatten)]
    pub value: GroupCharacteristicValue,
    /// Group includes or excludes
    pub exclude: Boolean,
    /// Period over which characteristic is tested
    pub period: Option<Period>,
}

/// Who or what is in group
#[derive(Debug, Clone, PartialEq, Default, FhirSerde)]
#[fhir_type(name = "GroupMember", kind = "backbone_element")]
pub struct GroupMember {
    /// Unique id for inter-element referencing
    pub id: Option<std::string::String>,
    /// Additional content defined by implementations
    pub extension: Option<Vec<Extension>>,
    /// Extensions that cannot be ignored even if unrecognized
    #[fhir_serde(rename = "modifierExtension")]
    pub modifier_extension: Option<Vec<Extension>>,
    /// Reference to the group member
    pub entity: Reference,
    /// Period member belonged to the group
    pub period: Option<Period>,
    /// If member is no longer in group
    pub inactive: Option<Boolean>,
}
