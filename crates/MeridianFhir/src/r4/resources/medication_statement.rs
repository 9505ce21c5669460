use crate::r4::*;
use crate::FhirSerde;

/// Choice of types for the medication\[x\] field in MedicationStatement
#[derive(Debug, Clone, PartialEq, FhirSerde)]
#[fhir_choice_element(base_name = "medication")]
pub enum MedicationStatementMedication {
    /// Variant accepting the CodeableConcept type.
    #[fhir_serde(rename = "medicationCodeableConcept")]
    CodeableConcept(CodeableConcept),
    /// Variant accepting the Reference type.
    #[fhir_serde(rename = "medicationReference")]
    Reference(Reference),
}

/// Choice of types for the effective\[x\] field in MedicationStatement
#[derive(Debug, Clone, PartialEq, FhirSerde)]
#[fhir_choice_element(base_name = "effective")]
pub enum MedicationStatementEffective {
    /// Variant accepting the DateTime type.
    #[fhir_serde(rename = "effectiveDateTime")]
    DateTime(DateTime),
    /// Variant accepting the Period type.
    #[fhir_serde(rename = "effectivePeriod")]
    Period(Period),
}

/// FHIR MedicationStatement type
///
/// A record of a medication that is being consumed by a patient.
///
/// See: [MedicationStatement](http://hl7.org/fhir/StructureDefinition/MedicationStatement)
#[derive(Debug, Clone, PartialEq, FhirSerde)]
#[fhir_type(name = "MedicationStatement", kind = "domain_resource")]
pub struct MedicationStatement {
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
    /// External identifier
    pub identifier: Option<Vec<Identifier>>,
    /// Fulfils plan, proposal or order
    #[fhir_serde(rename = "basedOn")]
    pub based_on: Option<Vec<Reference>>,
    /// Part of referenced event
    #[fhir_serde(rename = "partOf")]
    pub part_of: Option<Vec<Reference>>,
    /// active | completed | entered-in-error | intended | stopped | on-hold | unknown | not-taken
    pub status: Code,
    /// Reason for current status
    #[fhir_serde(rename = "statusReason")]
    pub status_reason: Option<Vec<CodeableConcept>>,
    /// Type of medication usage
    pub category: Option<CodeableConcept>,
    /// What medication was taken
    #[fhir_serde(flatten)]
    pub medication: MedicationStatementMedication,
    /// Who is/was taking  the medication
    pub subject: Reference,
    /// Encounter / Episode associated with MedicationStatement
    pub context: Option<Reference>,
    /// The date/time or interval when the medication is/was/will be taken
    #[fhir_serde(flatten)]
    pub effective: Option<MedicationStatementEffective>,
    /// When the statement was asserted?
    #[fhir_serde(rename = "dateAsserted")]
    pub date_asserted: Option<DateTime>,
    /// Person or organization that provided the information about the taking of this medication
    #[fhir_serde(rename = "informationSource")]
    pub information_source: Option<Reference>,
    /// Additional supporting information
    #[fhir_serde(rename = "derivedFrom")]
    pub derived_from: Option<Vec<Reference>>,
    /// Reason for why the medication is being/was taken
    #[fhir_serde(rename = "reasonCode")]
    pub reason_code: Option<Vec<CodeableConcept>>,
    /// Condition or observation that supports why the medication is being/was taken
    #[fhir_serde(rename = "reasonReference")]
    pub reason_reference: Option<Vec<Reference>>,
    /// Further information about the statement
    pub note: Option<Vec<Annotation>>,
    /// Details of how medication is/was taken or should be taken
    pub dosage: Option<Vec<Dosage>>,
}
