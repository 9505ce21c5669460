use crate::r4::*;
use crate::FhirSerde;

/// FHIR Encounter type
///
/// An interaction between a patient and healthcare provider(s) for the purpose
/// of providing healthcare service(s) or assessing the health status of a
/// patient.
///
/// See: [Encounter](http://hl7.org/fhir/StructureDefinition/Encounter)
#[derive(Debug, Clone, PartialEq, Default, FhirSerde)]
#[fhir_type(name = "Encounter", kind = "domain_resource")]
pub struct Encounter {
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
    /// Identifier(s) by which this encounter is known
    pub identifier: Option<Vec<Identifier>>,
    /// None
    pub status: Code,
    /// List of past encounter statuses
    #[fhir_serde(rename = "statusHistory")]
    pub status_history: Option<Vec<EncounterStatusHistory>>,
    /// Classification of patient encounter
    pub class: Coding,
    /// List of past encounter classes
    #[fhir_serde(rename = "classHistory")]
    pub class_history: Option<Vec<EncounterClassHistory>>,
    /// Specific type of encounter
    #[fhir_serde(rename = "type")]
    pub r#type: Option<Vec<CodeableConcept>>,
    /// Specific type of service
    #[fhir_serde(rename = "serviceType")]
    pub service_type: Option<CodeableConcept>,
    /// Indicates the urgency of the encounter
    pub priority: Option<CodeableConcept>,
    /// The patient or group present at the encounter
    pub subject: Option<Reference>,
    /// Episode(s) of care that this encounter should be recorded against
    #[fhir_serde(rename = "episodeOfCare")]
    pub episode_of_care: Option<Vec<Reference>>,
    /// The ServiceRequest that initiated this encounter
    #[fhir_serde(rename = "basedOn")]
    pub based_on: Option<Vec<Reference>>,
    /// List of participants involved in the encounter
    pub participant: Option<Vec<EncounterParticipant>>,
    /// The appointment that scheduled this encounter
    pub appointment: Option<Vec<Reference>>,
    /// The start and end time of the encounter
    pub period: Option<Period>,
    /// Quantity of time the encounter lasted (less time absent)
    pub length: Option<Duration>,
    /// Coded reason the encounter takes place
    #[fhir_serde(rename = "reasonCode")]
    pub reason_code: Option<Vec<CodeableConcept>>,
    /// Reason the encounter takes place (reference)
    #[fhir_serde(rename = "reasonReference")]
    pub reason_reference: Option<Vec<Reference>>,
    /// The list of diagnosis relevant to this encounter
    pub diagnosis: Option<Vec<EncounterDiagnosis>>,
    /// The set of accounts that may be used for billing for this Encounter
    pub account: Option<Vec<Reference>>,
    /// Details about the admission to a healthcare service
    pub hospitalization: Option<EncounterHospitalization>,
    /// List of locations where the patient has been
    pub location: Option<Vec<EncounterLocation>>,
    /// The organization (facility) responsible for this encounter
    #[fhir_serde(rename = "serviceProvider")]
    pub service_provider: Option<Reference>,
    /// Another Encounter this encounter is part of
    #[fhir_serde(rename = "partOf")]
    pub part_of: Option<Reference>,
}

/// List of past encounter classes
#[derive(Debug, Clone, PartialEq, Default, FhirSerde)]
#[fhir_type(name = "EncounterClassHistory", kind = "backbone_element")]
pub struct EncounterClassHistory {
    /// Unique id for inter-element referencing
    pub id: Option<std::string::String>,
    /// Additional content defined by implementations
    pub extension: Option<Vec<Extension>>,
    /// Extensions that cannot be ignored even if unrecognized
    #[fhir_serde(rename = "modifierExtension")]
    pub modifier_extension: Option<Vec<Extension>>,
    /// inpatient | outpatient | ambulatory | emergency +
    pub class: Coding,
    /// The time that the episode was in the specified class
    pub period: Period,
}

/// The list of diagnosis relevant to this encounter
#[derive(Debug, Clone, PartialEq, Default, FhirSerde)]
#[fhir_type(name = "EncounterDiagnosis", kind = "backbone_element")]
pub struct EncounterDiagnosis {
    /// Unique id for inter-element referencing
    pub id: Option<std::string::String>,
    /// Additional content defined by implementations
    pub extension: Option<Vec<Extension>>,
    /// Extensions that cannot be ignored even if unrecognized
    #[fhir_serde(rename = "modifierExtension")]
    pub modifier_extension: Option<Vec<Extension>>,
    /// The diagnosis or procedure relevant to the encounter
    pub condition: Reference,
    /// Role that this diagnosis has within the encounter (e.g. admission, billing, discharge …).
    #[fhir_serde(rename = "use")]
    pub r#use: Option<CodeableConcept>,
    /// Ranking of the diagnosis (for each role type)
    pub rank: Option<PositiveInt>,
}

/// Details about the admission to a healthcare service
#[derive(Debug, Clone, PartialEq, Default, FhirSerde)]
#[fhir_type(name = "EncounterHospitalization", kind = "backbone_element")]
pub struct EncounterHospitalization {
    /// Unique id for inter-element referencing
    pub id: Option<std::string::String>,
    /// Additional content defined by implementations
    pub extension: Option<Vec<Extension>>,
    /// Extensions that cannot be ignored even if unrecognized
    #[fhir_serde(rename = "modifierExtension")]
    pub modifier_extension: Option<Vec<Extension>>,
    /// Pre-admission identifier
    #[fhir_serde(rename = "preAdmissionIdentifier")]
    pub pre_admission_identifier: Option<Identifier>,
    /// The location/organization from which the patient came before admission
    pub origin: Option<Reference>,
    /// From where patient was admitted (physician referral, transfer)
    #[fhir_serde(rename = "admitSource")]
    pub admit_source: Option<CodeableConcept>,
    /// The type of hospital re-admission that has occurred (if any). If the value is absent, then this is not identified as a readmission.
    #[fhir_serde(rename = "reAdmission")]
    pub re_admission: Option<CodeableConcept>,
    /// Diet preferences reported by the patient
    #[fhir_serde(rename = "dietPreference")]
    pub diet_preference: Option<Vec<CodeableConcept>>,
    /// Special courtesies (VIP, board member)
    #[fhir_serde(rename = "specialCourtesy")]
    pub special_courtesy: Option<Vec<CodeableConcept>>,
    /// Wheelchair, translator, stretcher, etc.
    #[fhir_serde(rename = "specialArrangement")]
    pub special_arrangement: Option<Vec<CodeableConcept>>,
    /// Location/organization to which the patient is discharged
    pub destination: Option<Reference>,
    /// Category or kind of location after discharge
    #[fhir_serde(rename = "dischargeDisposition")]
    pub discharge_disposition: Option<CodeableConcept>,
}

/// List of locations where the patient has been
#[derive(Debug, Clone, PartialEq, Default, FhirSerde)]
#[fhir_type(name = "EncounterLocation", kind = "backbone_element")]
pub struct EncounterLocation {
    /// Unique id for inter-element referencing
    pub id: Option<std::string::String>,
    /// Additional content defined by implementations
    pub extension: Option<Vec<Extension>>,
    /// Extensions that cannot be ignored even if unrecognized
    #[fhir_serde(rename = "modifierExtension")]
    pub modifier_extension: Option<Vec<Extension>>,
    /// Location the encounter takes place
    pub location: Reference,
    /// The status of the participants' presence at the specified location during the period specified. If the participant is no longer at the location, then the period will have an end date/time.
    pub status: Option<Code>,
    /// The physical type of the location (usually the level in the location hierachy - bed room ward etc.)
    #[fhir_serde(rename = "physicalType")]
    pub physical_type: Option<CodeableConcept>,
    /// Time period during which the patient was present at the location
    pub period: Option<Period>,
}

/// List of participants involved in the encounter
#[derive(Debug, Clone, PartialEq, Default, FhirSerde)]
#[fhir_type(name = "EncounterParticipant", kind = "backbone_element")]
pub struct EncounterParticipant {
    /// Unique id for inter-element referencing
    pub id: Option<std::string::String>,
    /// Additional content defined by implementations
    pub extension: Option<Vec<Extension>>,
    /// Extensions that cannot be ignored even if unrecognized
    #[fhir_serde(rename = "modifierExtension")]
    pub modifier_extension: Option<Vec<Extension>>,
    /// Role of participant in encounter
    #[fhir_serde(rename = "type")]
    pub r#type: Option<Vec<CodeableConcept>>,
    /// Period of time during the encounter that the participant participated
    pub period: Option<Period>,
    /// Persons involved in the encounter other than the patient
    pub individual: Option<Reference>,
}

/// List of past encounter statuses
#[derive(Debug, Clone, PartialEq, Default, FhirSerde)]
#[fhir_type(name = "EncounterStatusHistory", kind = "backbone_element")]
pub struct EncounterStatusHistory {
    /// Unique id for inter-element referencing
    pub id: Option<std::string::String>,
    /// Additional content defined by implementations
    pub extension: Option<Vec<Extension>>,
    /// Extensions that cannot be ignored even if unrecognized
    #[fhir_serde(rename = "modifierExtension")]
    pub modifier_extension: Option<Vec<Extension>>,
    /// None
    pub status: Code,
    /// The time that the episode was in the specified status
    pub period: Period,
}
