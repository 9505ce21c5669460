use crate::r4::*;
use crate::FhirSerde;

/// Choice of types for the occurrence\[x\] field in Immunization
#[derive(Debug, Clone, PartialEq, FhirSerde)]
#[fhir_choice_element(base_name = "occurrence")]
pub enum ImmunizationOccurrence {
    /// Variant accepting the DateTime type.
    #[fhir_serde(rename = "occurrenceDateTime")]
    DateTime(DateTime),
    /// Variant accepting the String type.
    #[fhir_serde(rename = "occurrenceString")]
    String(String),
}

/// FHIR Immunization type
///
/// Describes the event of a patient being administered a vaccine or a record of
/// an immunization as reported by a patient, a clinician or another party.
///
/// See: [Immunization](http://hl7.org/fhir/StructureDefinition/Immunization)
#[derive(Debug, Clone, PartialEq, FhirSerde)]
#[fhir_type(name = "Immunization", kind = "domain_resource")]
pub struct Immunization {
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
    /// Business identifier
    pub identifier: Option<Vec<Identifier>>,
    /// Indicates the current status of the immunization event. Only use: \['completed', 'entered-in-error', 'not-done'\]
    pub status: Code,
    /// Reason not done
    #[fhir_serde(rename = "statusReason")]
    pub status_reason: Option<CodeableConcept>,
    /// Vaccine product administered
    #[fhir_serde(rename = "vaccineCode")]
    pub vaccine_code: CodeableConcept,
    /// Who was immunized
    pub patient: Reference,
    /// Encounter immunization was part of
    pub encounter: Option<Reference>,
    /// Vaccine administration date
    #[fhir_serde(flatten)]
    pub occurrence: ImmunizationOccurrence,
    /// When the immunization was first captured in the subject's record
    pub recorded: Option<DateTime>,
    /// Indicates context the data was recorded in
    #[fhir_serde(rename = "primarySource")]
    pub primary_source: Option<Boolean>,
    /// Indicates the source of a secondarily reported record
    #[fhir_serde(rename = "reportOrigin")]
    pub report_origin: Option<CodeableConcept>,
    /// Where immunization occurred
    pub location: Option<Reference>,
    /// Vaccine manufacturer
    pub manufacturer: Option<Reference>,
    /// Vaccine lot number
    #[fhir_serde(rename = "lotNumber")]
    pub lot_number: Option<String>,
    /// Vaccine expiration date
    #[fhir_serde(rename = "expirationDate")]
    pub expiration_date: Option<Date>,
    /// Body site vaccine was administered
    pub site: Option<CodeableConcept>,
    /// How vaccine entered body
    pub route: Option<CodeableConcept>,
    /// Amount of vaccine administered
    #[fhir_serde(rename = "doseQuantity")]
    pub dose_quantity: Option<Quantity>,
    /// Who performed event
    pub performer: Option<Vec<ImmunizationPerformer>>,
    /// Additional immunization notes
    pub note: Option<Vec<Annotation>>,
    /// Why immunization occurred
    #[fhir_serde(rename = "reasonCode")]
    pub reason_code: Option<Vec<CodeableConcept>>,
    /// Why immunization occurred
    #[fhir_serde(rename = "reasonReference")]
    pub reason_reference: Option<Vec<Reference>>,
    /// Dose potency
    #[fhir_serde(rename = "isSubpotent")]
    pub is_subpotent: Option<Boolean>,
    /// Reason for being subpotent
    #[fhir_serde(rename = "subpotentReason")]
    pub subpotent_reason: Option<Vec<CodeableConcept>>,
    /// Educational material presented to patient
    pub education: Option<Vec<ImmunizationEducation>>,
    /// Patient eligibility for a vaccination program
    #[fhir_serde(rename = "programEligibility")]
    pub program_eligibility: Option<Vec<CodeableConcept>>,
    /// Funding source for the vaccine
    #[fhir_serde(rename = "fundingSource")]
    pub funding_source: Option<CodeableConcept>,
    /// Details of a reaction that follows immunization
    pub reaction: Option<Vec<ImmunizationReaction>>,
    /// Protocol followed by the provider
    #[fhir_serde(rename = "protocolApplied")]
    pub protocol_applied: Option<Vec<ImmunizationProtocolApplied>>,
}

/// Educational material presented to patient
#[derive(Debug, Clone, PartialEq, Default, FhirSerde)]
#[fhir_type(name = "ImmunizationEducation", kind = "backbone_element")]
pub struct ImmunizationEducation {
    /// Unique id for inter-element referencing
    pub id: Option<std::string::String>,
    /// Additional content defined by implementations
    pub extension: Option<Vec<Extension>>,
    /// Extensions that cannot be ignored even if unrecognized
    #[fhir_serde(rename = "modifierExtension")]
    pub modifier_extension: Option<Vec<Extension>>,
    /// Educational material document identifier
    #[fhir_serde(rename = "documentType")]
    pub document_type: Option<String>,
    /// Educational material reference pointer
    pub reference: Option<String>,
    /// Educational material publication date
    #[fhir_serde(rename = "publicationDate")]
    pub publication_date: Option<DateTime>,
    /// Educational material presentation date
    #[fhir_serde(rename = "presentationDate")]
    pub presentation_date: Option<DateTime>,
}

/// Who performed event
#[derive(Debug, Clone, PartialEq, Default, FhirSerde)]
#[fhir_type(name = "ImmunizationPerformer", kind = "backbone_element")]
pub struct ImmunizationPerformer {
    /// Unique id for inter-element referencing
    pub id: Option<std::string::String>,
    /// Additional content defined by implementations
    pub extension: Option<Vec<Extension>>,
    /// Extensions that cannot be ignored even if unrecognized
    #[fhir_serde(rename = "modifierExtension")]
    pub modifier_extension: Option<Vec<Extension>>,
    /// What type of performance was done
    pub function: Option<CodeableConcept>,
    /// Individual or organization who was performing
    pub actor: Reference,
}

/// Choice of types for the doseNumber\[x\] field in ImmunizationProtocolApplied
#[derive(Debug, Clone, PartialEq, FhirSerde)]
#[fhir_choice_element(base_name = "doseNumber")]
pub enum ImmunizationProtocolAppliedDoseNumber {
    /// Variant accepting the PositiveInt type.
    #[fhir_serde(rename = "doseNumberPositiveInt")]
    PositiveInt(PositiveInt),
    /// Variant accepting the String type.
    #[fhir_serde(rename = "doseNumberString")]
    String(String),
}

/// Choice of types for the seriesDoses\[x\] field in ImmunizationProtocolApplied
#[derive(Debug, Clone, PartialEq, FhirSerde)]
#[fhir_choice_element(base_name = "seriesDoses")]
pub enum ImmunizationProtocolAppliedSeriesDoses {
    /// Variant accepting the PositiveInt type.
    #[fhir_serde(rename = "seriesDosesPositiveInt")]
    PositiveInt(PositiveInt),
    /// Variant accepting the String type.
    #[fhir_serde(rename = "seriesDosesString")]
    String(String),
}

/// Protocol followed by the provider
#[derive(Debug, Clone, PartialEq, FhirSerde)]
#[fhir_type(name = "ImmunizationProtocolApplied", kind = "backbone_element")]
pub struct ImmunizationProtocolApplied {
    /// Unique id for inter-element referencing
    pub id: Option<std::string::String>,
    /// Additional content defined by implementations
    pub extension: Option<Vec<Extension>>,
    /// Extensions that cannot be ignored even if unrecognized
    #[fhir_serde(rename = "modifierExtension")]
    pub modifier_extension: Option<Vec<Extension>>,
    /// Name of vaccine series
    pub series: Option<String>,
    /// Who is responsible for publishing the recommendations
    pub authority: Option<Reference>,
    /// Vaccine preventatable disease being targetted
    #[fhir_serde(rename = "targetDisease")]
    pub target_disease: Option<Vec<CodeableConcept>>,
    /// Dose number within series
    #[fhir_serde(flatten)]
    pub dose_number: ImmunizationProtocolAppliedDoseNumber,
    /// Recommended number of doses for immunity
    #[fhir_serde(flatten)]
    pub series_doses: Option<ImmunizationProtocolAppliedSeriesDoses>,
}

/// Details of a reaction that follows immunization
#[derive(Debug, Clone, PartialEq, Default, FhirSerde)]
#[fhir_type(name = "ImmunizationReaction", kind = "backbone_element")]
pub struct ImmunizationReaction {
    /// Unique id for inter-element referencing
    pub id: Option<std::string::String>,
    /// Additional content defined by implementations
    pub extension: Option<Vec<Extension>>,
    /// Extensions that cannot be ignored even if unrecognized
    #[fhir_serde(rename = "modifierExtension")]
    pub modifier_extension: Option<Vec<Extension>>,
    /// When reaction started
    pub date: Option<DateTime>,
    /// Additional information on reaction
    pub detail: Option<Reference>,
    /// Indicates self-reported reaction
    pub reported: Option<Boolean>,
}
