use crate::r4::*;
use crate::FhirSerde;

/// Choice of types for the onset\[x\] field in AllergyIntolerance
#[derive(Debug, Clone, PartialEq, FhirSerde)]
#[fhir_choice_element(base_name = "onset")]
pub enum AllergyIntoleranceOnset {
    /// Variant accepting the DateTime type.
    #[fhir_serde(rename = "onsetDateTime")]
    DateTime(DateTime),
    /// Variant accepting the Age type.
    #[fhir_serde(rename = "onsetAge")]
    Age(Age),
    /// Variant accepting the Period type.
    #[fhir_serde(rename = "onsetPeriod")]
    Period(Period),
    /// Variant accepting the Range type.
    #[fhir_serde(rename = "onsetRange")]
    Range(Range),
    /// Variant accepting the String type.
    #[fhir_serde(rename = "onsetString")]
    String(String),
}

/// FHIR AllergyIntolerance type
///
/// Risk of harmful or undesirable, physiological response which is unique to an
/// individual and associated with exposure to a substance.
///
/// See: [AllergyIntolerance](http://hl7.org/fhir/StructureDefinition/AllergyIntolerance)
#[derive(Debug, Clone, PartialEq, Default, FhirSerde)]
#[fhir_type(name = "AllergyIntolerance", kind = "domain_resource")]
pub struct AllergyIntolerance {
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
    /// External ids for this item
    pub identifier: Option<Vec<Identifier>>,
    /// active | inactive | resolved
    #[fhir_serde(rename = "clinicalStatus")]
    pub clinical_status: Option<CodeableConcept>,
    /// unconfirmed | confirmed | refuted | entered-in-error
    #[fhir_serde(rename = "verificationStatus")]
    pub verification_status: Option<CodeableConcept>,
    /// allergy | intolerance - Underlying mechanism (if known)
    #[fhir_serde(rename = "type")]
    pub r#type: Option<Code>,
    /// food | medication | environment | biologic
    pub category: Option<Vec<Code>>,
    /// low | high | unable-to-assess
    pub criticality: Option<Code>,
    /// Code that identifies the allergy or intolerance
    pub code: Option<CodeableConcept>,
    /// Who the sensitivity is for
    pub patient: Reference,
    /// Encounter when the allergy or intolerance was asserted
    pub encounter: Option<Reference>,
    /// When allergy or intolerance was identified
    #[fhir_serde(flatten)]
    pub onset: Option<AllergyIntoleranceOnset>,
    /// Date first version of the resource instance was recorded
    #[fhir_serde(rename = "recordedDate")]
    pub recorded_date: Option<DateTime>,
    /// Who recorded the sensitivity
    pub recorder: Option<Reference>,
    /// Source of the information about the allergy
    pub asserter: Option<Reference>,
    /// Date(/time) of last known occurrence of a reaction
    #[fhir_serde(rename = "lastOccurrence")]
    pub last_occurrence: Option<DateTime>,
    /// Additional text not captured in other fields
    pub note: Option<Vec<Annotation>>,
    /// Adverse Reaction Events linked to exposure to substance
    pub reaction: Option<Vec<AllergyIntoleranceReaction>>,
}

/// Adverse Reaction Events linked to exposure to substance
#[derive(Debug, Clone, PartialEq, Default, FhirSerde)]
#[fhir_type(name = "AllergyIntoleranceReaction", kind = "backbone_element")]
pub struct AllergyIntoleranceReaction {
    /// Unique id for inter-element referencing
    pub id: Option<std::string::String>,
    /// Additional content defined by implementations
    pub extension: Option<Vec<Extension>>,
    /// Extensions that cannot be ignored even if unrecognized
    #[fhir_serde(rename = "modifierExtension")]
    pub modifier_extension: Option<Vec<Extension>>,
    /// Specific substance or pharmaceutical product considered to be responsible for event
    pub substance: Option<CodeableConcept>,
    /// Clinical symptoms/signs associated with the Event
    pub manifestation: Vec<CodeableConcept>,
    /// Description of the event as a whole
    pub description: Option<String>,
    /// Date(/time) when manifestations showed
    pub onset: Option<DateTime>,
    /// mild | moderate | severe (of event as a whole)
    pub severity: Option<Code>,
    /// How the subject was exposed to the substance
    #[fhir_serde(rename = "exposureRoute")]
    pub exposure_route: Option<CodeableConcept>,
    /// Text about event not captured in other fields
    pub note: Option<Vec<Annotation>>,
}
