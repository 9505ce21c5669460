use crate::r4::*;
use crate::FhirSerde;

/// Choice of types for the statusReason\[x\] field in MedicationDispense
#[derive(Debug, Clone, PartialEq, FhirSerde)]
#[fhir_choice_element(base_name = "statusReason")]
pub enum MedicationDispenseStatusReason {
    /// Variant accepting the CodeableConcept type.
    #[fhir_serde(rename = "statusReasonCodeableConcept")]
    CodeableConcept(CodeableConcept),
    /// Variant accepting the Reference type.
    #[fhir_serde(rename = "statusReasonReference")]
    Reference(Reference),
}

/// Choice of types for the medication\[x\] field in MedicationDispense
#[derive(Debug, Clone, PartialEq, FhirSerde)]
#[fhir_choice_element(base_name = "medication")]
pub enum MedicationDispenseMedication {
    /// Variant accepting the CodeableConcept type.
    #[fhir_serde(rename = "medicationCodeableConcept")]
    CodeableConcept(CodeableConcept),
    /// Variant accepting the Reference type.
    #[fhir_serde(rename = "medicationReference")]
    Reference(Reference),
}

/// FHIR MedicationDispense type
///
/// Indicates that a medication product is to be or has been dispensed for a
/// named person/patient. This includes a description of the medication product
/// (supply) provided and the instructions for administering the medication. The
/// medication dispense is the result of a pharmacy system responding to a
/// medication order.
///
/// See: [MedicationDispense](http://hl7.org/fhir/StructureDefinition/MedicationDispense)
#[derive(Debug, Clone, PartialEq, FhirSerde)]
#[fhir_type(name = "MedicationDispense", kind = "domain_resource")]
pub struct MedicationDispense {
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
    /// Event that dispense is part of
    #[fhir_serde(rename = "partOf")]
    pub part_of: Option<Vec<Reference>>,
    /// A code specifying the state of the set of dispense events
    pub status: Code,
    /// Why a dispense was not performed
    #[fhir_serde(flatten)]
    pub status_reason: Option<MedicationDispenseStatusReason>,
    /// Type of medication dispense
    pub category: Option<CodeableConcept>,
    /// What medication was supplied
    #[fhir_serde(flatten)]
    pub medication: MedicationDispenseMedication,
    /// Who the dispense is for
    pub subject: Option<Reference>,
    /// Encounter / Episode associated with event
    pub context: Option<Reference>,
    /// Information that supports the dispensing of the medication
    #[fhir_serde(rename = "supportingInformation")]
    pub supporting_information: Option<Vec<Reference>>,
    /// Who performed event
    pub performer: Option<Vec<MedicationDispensePerformer>>,
    /// Where the dispense occurred
    pub location: Option<Reference>,
    /// Medication order that authorizes the dispense
    #[fhir_serde(rename = "authorizingPrescription")]
    pub authorizing_prescription: Option<Vec<Reference>>,
    /// Trial fill, partial fill, emergency fill, etc.
    #[fhir_serde(rename = "type")]
    pub r#type: Option<CodeableConcept>,
    /// Amount dispensed
    pub quantity: Option<Quantity>,
    /// Amount of medication expressed as a timing amount
    #[fhir_serde(rename = "daysSupply")]
    pub days_supply: Option<Quantity>,
    /// When product was packaged and reviewed
    #[fhir_serde(rename = "whenPrepared")]
    pub when_prepared: Option<DateTime>,
    /// When product was given out
    #[fhir_serde(rename = "whenHandedOver")]
    pub when_handed_over: Option<DateTime>,
    /// Where the medication was sent
    pub destination: Option<Reference>,
    /// Who collected the medication
    pub receiver: Option<Vec<Reference>>,
    /// Information about the dispense
    pub note: Option<Vec<Annotation>>,
    /// How the medication is to be used by the patient or administered by the caregiver
    #[fhir_serde(rename = "dosageInstruction")]
    pub dosage_instruction: Option<Vec<Dosage>>,
    /// Whether a substitution was performed on the dispense
    pub substitution: Option<MedicationDispenseSubstitution>,
    /// Clinical issue with action
    #[fhir_serde(rename = "detectedIssue")]
    pub detected_issue: Option<Vec<Reference>>,
    /// A list of relevant lifecycle events
    #[fhir_serde(rename = "eventHistory")]
    pub event_history: Option<Vec<Reference>>,
}

/// Who performed event
#[derive(Debug, Clone, PartialEq, Default, FhirSerde)]
#[fhir_type(name = "MedicationDispensePerformer", kind = "backbone_element")]
pub struct MedicationDispensePerformer {
    /// Unique id for inter-element referencing
    pub id: Option<std::string::String>,
    /// Additional content defined by implementations
    pub extension: Option<Vec<Extension>>,
    /// Extensions that cannot be ignored even if unrecognized
    #[fhir_serde(rename = "modifierExtension")]
    pub modifier_extension: Option<Vec<Extension>>,
    /// Who performed the dispense and what they did
    pub function: Option<CodeableConcept>,
    /// Individual who was performing
    pub actor: Reference,
}

/// Whether a substitution was performed on the dispense
#[derive(Debug, Clone, PartialEq, Default, FhirSerde)]
#[fhir_type(name = "MedicationDispenseSubstitution", kind = "backbone_element")]
pub struct MedicationDispenseSubstitution {
    /// Unique id for inter-element referencing
    pub id: Option<std::string::String>,
    /// Additional content defined by implementations
    pub extension: Option<Vec<Extension>>,
    /// Extensions that cannot be ignored even if unrecognized
    #[fhir_serde(rename = "modifierExtension")]
    pub modifier_extension: Option<Vec<Extension>>,
    /// Whether a substitution was or was not performed on the dispense
    #[fhir_serde(rename = "wasSubstituted")]
    pub was_substituted: Boolean,
    /// Code signifying whether a different drug was dispensed from what was prescribed
    #[fhir_serde(rename = "type")]
    pub r#type: Option<CodeableConcept>,
    /// Why was substitution made
    pub reason: Option<Vec<CodeableConcept>>,
    /// Who is responsible for the substitution
    #[fhir_serde(rename = "responsibleParty")]
    pub responsible_party: Option<Vec<Reference>>,
}
