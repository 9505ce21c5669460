use crate::r4::*;
use crate::FhirSerde;

/// Choice of types for the born\[x\] field in FamilyMemberHistory
#[derive(Debug, Clone, PartialEq, FhirSerde)]
#[fhir_choice_element(base_name = "born")]
pub enum FamilyMemberHistoryBorn {
    /// Variant accepting the Period type.
    #[fhir_serde(rename = "bornPeriod")]
    Period(Period),
    /// Variant accepting the Date type.
    #[fhir_serde(rename = "bornDate")]
    Date(Date),
    /// Variant accepting the String type.
    #[fhir_serde(rename = "bornString")]
    String(String),
}

/// Choice of types for the age\[x\] field in FamilyMemberHistory
#[derive(Debug, Clone, PartialEq, FhirSerde)]
#[fhir_choice_element(base_name = "age")]
pub enum FamilyMemberHistoryAge {
    /// Variant accepting the Age type.
    #[fhir_serde(rename = "ageAge")]
    Age(Age),
    /// Variant accepting the Range type.
    #[fhir_serde(rename = "ageRange")]
    Range(Range),
    /// Variant accepting the String type.
    #[fhir_serde(rename = "ageString")]
    String(String),
}

/// Choice of types for the deceased\[x\] field in FamilyMemberHistory
#[derive(Debug, Clone, PartialEq, FhirSerde)]
#[fhir_choice_element(base_name = "deceased")]
pub enum FamilyMemberHistoryDeceased {
    /// Variant accepting the Boolean type.
    #[fhir_serde(rename = "deceasedBoolean")]
    Boolean(Boolean),
    /// Variant accepting the Age type.
    #[fhir_serde(rename = "deceasedAge")]
    Age(Age),
    /// Variant accepting the Range type.
    #[fhir_serde(rename = "deceasedRange")]
    Range(Range),
    /// Variant accepting the Date type.
    #[fhir_serde(rename = "deceasedDate")]
    Date(Date),
    /// Variant accepting the String type.
    #[fhir_serde(rename = "deceasedString")]
    String(String),
}

/// FHIR FamilyMemberHistory type
///
/// Significant health conditions for a person related to the patient relevant in
/// the context of care for the patient.
///
/// See: [FamilyMemberHistory](http://hl7.org/fhir/StructureDefinition/FamilyMemberHistory)
#[derive(Debug, Clone, PartialEq, Default, FhirSerde)]
#[fhir_type(name = "FamilyMemberHistory", kind = "domain_resource")]
pub struct FamilyMemberHistory {
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
    /// External Id(s) for this record
    pub identifier: Option<Vec<Identifier>>,
    /// Instantiates FHIR protocol or definition
    #[fhir_serde(rename = "instantiatesCanonical")]
    pub instantiates_canonical: Option<Vec<Canonical>>,
    /// Instantiates external protocol or definition
    #[fhir_serde(rename = "instantiatesUri")]
    pub instantiates_uri: Option<Vec<Uri>>,
    /// partial | completed | entered-in-error | health-unknown
    pub status: Code,
    /// subject-unknown | withheld | unable-to-obtain | deferred
    #[fhir_serde(rename = "dataAbsentReason")]
    pub data_absent_reason: Option<CodeableConcept>,
    /// Patient history is about
    pub patient: Reference,
    /// When history was recorded or last updated
    pub date: Option<DateTime>,
    /// The family member described
    pub name: Option<String>,
    /// Relationship to the subject
    pub relationship: CodeableConcept,
    /// male | female | other | unknown
    pub sex: Option<CodeableConcept>,
    /// (approximate) date of birth
    #[fhir_serde(flatten)]
    pub born: Option<FamilyMemberHistoryBorn>,
    /// (approximate) age
    #[fhir_serde(flatten)]
    pub age: Option<FamilyMemberHistoryAge>,
    /// Age is estimated?
    #[fhir_serde(rename = "estimatedAge")]
    pub estimated_age: Option<Boolean>,
    /// Dead? How old/when?
    #[fhir_serde(flatten)]
    pub deceased: Option<FamilyMemberHistoryDeceased>,
    /// Why was family member history performed?
    #[fhir_serde(rename = "reasonCode")]
    pub reason_code: Option<Vec<CodeableConcept>>,
    /// Why was family member history performed?
    #[fhir_serde(rename = "reasonReference")]
    pub reason_reference: Option<Vec<Reference>>,
    /// General note about related person
    pub note: Option<Vec<Annotation>>,
    /// Condition that the related person had
    pub condition: Option<Vec<FamilyMemberHistoryCondition>>,
}

/// Choice of types for the onset\[x\] field in FamilyMemberHistoryCondition
#[derive(Debug, Clone, PartialEq, FhirSerde)]
#[fhir_choice_element(base_name = "onset")]
pub enum FamilyMemberHistoryConditionOnset {
    /// Variant accepting the Age type.
    #[fhir_serde(rename = "onsetAge")]
    Age(Age),
    /// Variant accepting the Range type.
    #[fhir_serde(rename = "onsetRange")]
    Range(Range),
    /// Variant accepting the Period type.
    #[fhir_serde(rename = "onsetPeriod")]
    Period(Period),
    /// Variant accepting the String type.
    #[fhir_serde(rename = "onsetString")]
    String(String),
}

/// Condition that the related person had
#[derive(Debug, Clone, PartialEq, Default, FhirSerde)]
#[fhir_type(name = "FamilyMemberHistoryCondition", kind = "backbone_element")]
pub struct FamilyMemberHistoryCondition {
    /// Unique id for inter-element referencing
    pub id: Option<std::string::String>,
    /// Additional content defined by implementations
    pub extension: Option<Vec<Extension>>,
    /// Extensions that cannot be ignored even if unrecognized
    #[fhir_serde(rename = "modifierExtension")]
    pub modifier_extension: Option<Vec<Extension>>,
    /// Condition suffered by relation
    pub code: CodeableConcept,
    /// deceased | permanent disability | etc.
    pub outcome: Option<CodeableConcept>,
    /// Whether the condition contributed to the cause of death
    #[fhir_serde(rename = "contributedToDeath")]
    pub contributed_to_death: Option<Boolean>,
    /// When condition first manifested
    #[fhir_serde(flatten)]
    pub onset: Option<FamilyMemberHistoryConditionOnset>,
    /// Extra information about condition
    pub note: Option<Vec<Annotation>>,
}
