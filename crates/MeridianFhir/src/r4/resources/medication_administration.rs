use crate::r4::*;
use crate::FhirSerde;

/// Choice of types for the medication\[x\] field in MedicationAdministration
#[derive(Debug, Clone, PartialEq, FhirSerde)]
#[fhir_choice_element(base_name = "medication")]
pub enum MedicationAdministrationMedication {
    /// Variant accepting the CodeableConcept type.
    #[fhir_serde(rename = "medicationCodeableConcept")]
    CodeableConcept(CodeableConcept),
    /// Variant accepting the Reference type.
    #[fhir_serde(rename = "medicationReference")]
    Reference(Reference),
}

/// Choice of types for the effective\[x\] field in MedicationAdministration
#[derive(Debug, Clone, PartialEq, FhirSerde)]
#[fhir_choice_element(base_name = "effective")]
pub enum MedicationAdministrationEffective {
    /// Variant accepting the DateTime type.
    #[fhir_serde(rename = "effectiveDateTime")]
    DateTime(DateTime),
    /// Variant accepting the Period type.
    #[fhir_serde(rename = "effectivePeriod")]
    Period(Period),
}

/// FHIR MedicationAdministration type
///
/// Describes the event of a patient consuming or otherwise being administered a
/// medication. This may be as simple as swallowing a tablet or it may be a long
/// running infusion. Related resources tie this event to the authorizing
/// prescription, and the specific encounter between patient and health care
/// practitioner.
///
/// See: [MedicationAdministration](http://hl7.org/fhir/StructureDefinition/MedicationAdministration)
#[derive(Debug, Clone, PartialEq, FhirSerde)]
#[fhir_type(name = "MedicationAdministration", kind = "domain_resource")]
pub struct MedicationAdministration {
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
    /// Instantiates protocol or definition
    pub instantiates: Option<Vec<String>>,
    /// Part of referenced event
    #[fhir_serde(rename = "partOf")]
    pub part_of: Option<Vec<Reference>>,
    /// Will generally be set to show that the administration has been completed. For some long running administrations such as infusions, it is possible for an administration to be started but not completed or it may be paused while some other process is under way.
    pub status: Code,
    /// Reason administration not performed
    #[fhir_serde(rename = "statusReason")]
    pub status_reason: Option<Vec<CodeableConcept>>,
    /// Type of medication usage
    pub category: Option<CodeableConcept>,
    /// What was administered
    #[fhir_serde(flatten)]
    pub medication: MedicationAdministrationMedication,
    /// Who received medication
    pub subject: Reference,
    /// Encounter or Episode of Care administered as part of
    pub context: Option<Reference>,
    /// Additional information to support administration
    #[fhir_serde(rename = "supportingInformation")]
    pub supporting_information: Option<Vec<Reference>>,
    /// Start and end time of administration
    #[fhir_serde(flatten)]
    pub effective: MedicationAdministrationEffective,
    /// Who performed the medication administration and what they did
    pub performer: Option<Vec<MedicationAdministrationPerformer>>,
    /// Reason administration performed
    #[fhir_serde(rename = "reasonCode")]
    pub reason_code: Option<Vec<CodeableConcept>>,
    /// Condition or observation that supports why the medication was administered
    #[fhir_serde(rename = "reasonReference")]
    pub reason_reference: Option<Vec<Reference>>,
    /// Request administration performed against
    pub request: Option<Reference>,
    /// Device used to administer
    pub device: Option<Vec<Reference>>,
    /// Information about the administration
    pub note: Option<Vec<Annotation>>,
    /// Details of how medication was taken
    pub dosage: Option<MedicationAdministrationDosage>,
    /// A list of events of interest in the lifecycle
    #[fhir_serde(rename = "eventHistory")]
    pub event_history: Option<Vec<Reference>>,
}

/// Choice of types for the rate\[x\] field in MedicationAdministrationDosage
#[derive(Debug, Clone, PartialEq, FhirSerde)]
#[fhir_choice_element(base_name = "rate")]
pub enum MedicationAdministrationDosageRate {
    /// Variant accepting the Ratio type.
    #[fhir_serde(rename = "rateRatio")]
    Ratio(Ratio),
    /// Variant accepting the Quantity type.
    #[fhir_serde(rename = "rateQuantity")]
    Quantity(Quantity),
}

/// Details of how medication was taken
#[derive(Debug, Clone, PartialEq, Default, FhirSerde)]
#[fhir_type(name = "MedicationAdministrationDosage", kind = "backbone_element")]
pub struct MedicationAdministrationDosage {
    /// Unique id for inter-element referencing
    pub id: Option<std::string::String>,
    /// Additional content defined by implementations
    pub extension: Option<Vec<Extension>>,
    /// Extensions that cannot be ignored even if unrecognized
    #[fhir_serde(rename = "modifierExtension")]
    pub modifier_extension: Option<Vec<Extension>>,
    /// Free text dosage instructions e.g. SIG.
    pub text: Option<String>,
    /// Body site administered to
    pub site: Option<CodeableConcept>,
    /// Path of substance into body
    pub route: Option<CodeableConcept>,
    /// How drug was administered
    pub method: Option<CodeableConcept>,
    /// Amount of medication per dose
    pub dose: Option<Quantity>,
    /// Dose quantity per unit of time
    #[fhir_serde(flatten)]
    pub rate: Option<MedicationAdministrationDosageRate>,
}

/// Who performed the medication administration and what they did
#[derive(Debug, Clone, PartialEq, Default, FhirSerde)]
#[fhir_type(name = "MedicationAdministrationPerformer", kind = "backbone_element")]
pub struct MedicationAdministrationPerformer {
    /// Unique id for inter-element referencing
    pub id: Option<std::string::String>,
    /// Additional content defined by implementations
    pub extension: Option<Vec<Extension>>,
    /// Extensions that cannot be ignored even if unrecognized
    #[fhir_serde(rename = "modifierExtension")]
    pub modifier_extension: Option<Vec<Extension>>,
    /// Type of performance
    pub function: Option<CodeableConcept>,
    /// Who performed the medication administration
    pub actor: Reference,
}
