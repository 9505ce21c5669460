use crate::r4::*;
use crate::FhirSerde;

/// Choice of types for the reported\[x\] field in MedicationRequest
#[derive(Debug, Clone, PartialEq, FhirSerde)]
#[fhir_choice_element(base_name = "reported")]
pub enum MedicationRequestReported {
    /// Variant accepting the Boolean type.
    #[fhir_serde(rename = "reportedBoolean")]
    Boolean(Boolean),
    /// Variant accepting the Reference type.
    #[fhir_serde(rename = "reportedReference")]
    Reference(Reference),
}

/// Choice of types for the medication\[x\] field in MedicationRequest
#[derive(Debug, Clone, PartialEq, FhirSerde)]
#[fhir_choice_element(base_name = "medication")]
pub enum MedicationRequestMedication {
    /// Variant accepting the CodeableConcept type.
    #[fhir_serde(rename = "medicationCodeableConcept")]
    CodeableConcept(CodeableConcept),
    /// Variant accepting the Reference type.
    #[fhir_serde(rename = "medicationReference")]
    Reference(Reference),
}

/// FHIR MedicationRequest type
///
/// An order or request for both supply of the medication and the instructions
/// for administration of the medication to a patient. The resource is called
/// "MedicationRequest" rather than "MedicationPrescription" or "MedicationOrder"
/// to generalize the use across inpatient and outpatient settings, including
/// care plans, etc., and to harmonize with workflow patterns.
///
/// See: [MedicationRequest](http://hl7.org/fhir/StructureDefinition/MedicationRequest)
#[derive(Debug, Clone, PartialEq, FhirSerde)]
#[fhir_type(name = "MedicationRequest", kind = "domain_resource")]
pub struct MedicationRequest {
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
    /// External ids for this request
    pub identifier: Option<Vec<Identifier>>,
    /// A code specifying the current state of the order. Generally, this will be active or completed state.
    pub status: Code,
    /// Reason for current status
    #[fhir_serde(rename = "statusReason")]
    pub status_reason: Option<CodeableConcept>,
    /// Whether the request is a proposal, plan, or an original order
    pub intent: Code,
    /// Type of medication usage
    pub category: Option<Vec<CodeableConcept>>,
    /// Indicates how quickly the Medication Request should be addressed with respect to other requests
    pub priority: Option<Code>,
    /// True if request is prohibiting action
    #[fhir_serde(rename = "doNotPerform")]
    pub do_not_perform: Option<Boolean>,
    /// Reported rather than primary record
    #[fhir_serde(flatten)]
    pub reported: Option<MedicationRequestReported>,
    /// Medication to be taken
    #[fhir_serde(flatten)]
    pub medication: MedicationRequestMedication,
    /// Who or group medication request is for
    pub subject: Reference,
    /// Encounter created as part of encounter/admission/stay
    pub encounter: Option<Reference>,
    /// Information to support ordering of the medication
    #[fhir_serde(rename = "supportingInformation")]
    pub supporting_information: Option<Vec<Reference>>,
    /// When request was initially authored
    #[fhir_serde(rename = "authoredOn")]
    pub authored_on: Option<DateTime>,
    /// Who/What requested the Request
    pub requester: Option<Reference>,
    /// Intended performer of administration
    pub performer: Option<Reference>,
    /// Desired kind of performer of the medication administration
    #[fhir_serde(rename = "performerType")]
    pub performer_type: Option<CodeableConcept>,
    /// Person who entered the request
    pub recorder: Option<Reference>,
    /// Reason or indication for ordering or not ordering the medication
    #[fhir_serde(rename = "reasonCode")]
    pub reason_code: Option<Vec<CodeableConcept>>,
    /// Condition or observation that supports why the prescription is being written
    #[fhir_serde(rename = "reasonReference")]
    pub reason_reference: Option<Vec<Reference>>,
    /// Instantiates FHIR protocol or definition
    #[fhir_serde(rename = "instantiatesCanonical")]
    pub instantiates_canonical: Option<Vec<Canonical>>,
    /// Instantiates external protocol or definition
    #[fhir_serde(rename = "instantiatesUri")]
    pub instantiates_uri: Option<Vec<Uri>>,
    /// What request fulfills
    #[fhir_serde(rename = "basedOn")]
    pub based_on: Option<Vec<Reference>>,
    /// Composite request this is part of
    #[fhir_serde(rename = "groupIdentifier")]
    pub group_identifier: Option<Identifier>,
    /// Overall pattern of medication administration
    #[fhir_serde(rename = "courseOfTherapyType")]
    pub course_of_therapy_type: Option<CodeableConcept>,
    /// Associated insurance coverage
    pub insurance: Option<Vec<Reference>>,
    /// Information about the prescription
    pub note: Option<Vec<Annotation>>,
    /// How the medication should be taken
    #[fhir_serde(rename = "dosageInstruction")]
    pub dosage_instruction: Option<Vec<Dosage>>,
    /// Medication supply authorization
    #[fhir_serde(rename = "dispenseRequest")]
    pub dispense_request: Option<MedicationRequestDispenseRequest>,
    /// Any restrictions on medication substitution
    pub substitution: Option<MedicationRequestSubstitution>,
    /// An order/prescription that is being replaced
    #[fhir_serde(rename = "priorPrescription")]
    pub prior_prescription: Option<Reference>,
    /// Clinical Issue with action
    #[fhir_serde(rename = "detectedIssue")]
    pub detected_issue: Option<Vec<Reference>>,
    /// A list of events of interest in the lifecycle
    #[fhir_serde(rename = "eventHistory")]
    pub event_history: Option<Vec<Reference>>,
}

/// Medication supply authorization
#[derive(Debug, Clone, PartialEq, Default, FhirSerde)]
#[fhir_type(name = "MedicationRequestDispenseRequest", kind = "backbone_element")]
pub struct MedicationRequestDispenseRequest {
    /// Unique id for inter-element referencing
    pub id: Option<std::string::String>,
    /// Additional content defined by implementations
    pub extension: Option<Vec<Extension>>,
    /// Extensions that cannot be ignored even if unrecognized
    #[fhir_serde(rename = "modifierExtension")]
    pub modifier_extension: Option<Vec<Extension>>,
    /// First fill details
    #[fhir_serde(rename = "initialFill")]
    pub initial_fill: Option<MedicationRequestDispenseRequestInitialFill>,
    /// Minimum period of time between dispenses
    #[fhir_serde(rename = "dispenseInterval")]
    pub dispense_interval: Option<Duration>,
    /// Time period supply is authorized for
    #[fhir_serde(rename = "validityPeriod")]
    pub validity_period: Option<Period>,
    /// Number of refills authorized
    #[fhir_serde(rename = "numberOfRepeatsAllowed")]
    pub number_of_repeats_allowed: Option<UnsignedInt>,
    /// Amount of medication to supply per dispense
    pub quantity: Option<Quantity>,
    /// Number of days supply per dispense
    #[fhir_serde(rename = "expectedSupplyDuration")]
    pub expected_supply_duration: Option<Duration>,
    /// Intended dispenser
    pub performer: Option<Reference>,
}

/// First fill details
#[derive(Debug, Clone, PartialEq, Default, FhirSerde)]
#[fhir_type(name = "MedicationRequestDispenseRequestInitialFill", kind = "backbone_element")]
pub struct MedicationRequestDispenseRequestInitialFill {
    /// Unique id for inter-element referencing
    pub id: Option<std::string::String>,
    /// Additional content defined by implementations
    pub extension: Option<Vec<Extension>>,
    /// Extensions that cannot be ignored even if unrecognized
    #[fhir_serde(rename = "modifierExtension")]
    pub modifier_extension: Option<Vec<Extension>>,
    /// First fill quantity
    pub quantity: Option<Quantity>,
    /// First fill duration
    pub duration: Option<Duration>,
}

/// Choice of types for the allowed\[x\] field in MedicationRequestSubstitution
#[derive(Debug, Clone, PartialEq, FhirSerde)]
#[fhir_choice_element(base_name = "allowed")]
pub enum MedicationRequestSubstitutionAllowed {
    /// Variant accepting the Boolean type.
    #[fhir_serde(rename = "allowedBoolean")]
    Boolean(Boolean),
    /// Variant accepting the CodeableConcept type.
    #[fhir_serde(rename = "allowedCodeableConcept")]
    CodeableConcept(CodeableConcept),
}

/// Any restrictions on medication substitution
#[derive(Debug, Clone, PartialEq, FhirSerde)]
#[fhir_type(name = "MedicationRequestSubstitution", kind = "backbone_element")]
pub struct MedicationRequestSubstitution {
    /// Unique id for inter-element referencing
    pub id: Option<std::string::String>,
    /// Additional content defined by implementations
    pub extension: Option<Vec<Extension>>,
    /// Extensions that cannot be ignored even if unrecognized
    #[fhir_serde(rename = "modifierExtension")]
    pub modifier_extension: Option<Vec<Extension>>,
    /// Whether substitution is allowed or not
    #[fhir_serde(flatten)]
    pub allowed: MedicationRequestSubstitutionAllowed,
    /// Why should (not) substitution be made
    pub reason: Option<CodeableConcept>,
}
