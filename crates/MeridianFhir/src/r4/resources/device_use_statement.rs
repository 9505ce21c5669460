use crate::r4::*;
use crate::FhirSerde;

/// Choice of types for the timing\[x\] field in DeviceUseStatement
#[derive(Debug, Clone, PartialEq, FhirSerde)]
#[fhir_choice_element(base_name = "timing")]
pub enum DeviceUseStatementTiming {
    /// Variant accepting the Timing type.
    #[fhir_serde(rename = "timingTiming")]
    Timing(Timing),
    /// Variant accepting the Period type.
    #[fhir_serde(rename = "timingPeriod")]
    Period(Period),
    /// Variant accepting the DateTime type.
    #[fhir_serde(rename = "timingDateTime")]
    DateTime(DateTime),
}

/// FHIR DeviceUseStatement type
///
/// A record of a device being used by a patient where the record is the result
/// of a report from the patient or another clinician.
///
/// See: [DeviceUseStatement](http://hl7.org/fhir/StructureDefinition/DeviceUseStatement)
#[derive(Debug, Clone, PartialEq, Default, FhirSerde)]
#[fhir_type(name = "DeviceUseStatement", kind = "domain_resource")]
pub struct DeviceUseStatement {
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
    /// External identifier for this record
    pub identifier: Option<Vec<Identifier>>,
    /// Fulfills plan, proposal or order
    #[fhir_serde(rename = "basedOn")]
    pub based_on: Option<Vec<Reference>>,
    /// active | completed | entered-in-error +
    pub status: Code,
    /// Patient using device
    pub subject: Reference,
    /// Supporting information
    #[fhir_serde(rename = "derivedFrom")]
    pub derived_from: Option<Vec<Reference>>,
    /// How often  the device was used
    #[fhir_serde(flatten)]
    pub timing: Option<DeviceUseStatementTiming>,
    /// When statement was recorded
    #[fhir_serde(rename = "recordedOn")]
    pub recorded_on: Option<DateTime>,
    /// Who made the statement
    pub source: Option<Reference>,
    /// Reference to device used
    pub device: Reference,
    /// Why device was used
    #[fhir_serde(rename = "reasonCode")]
    pub reason_code: Option<Vec<CodeableConcept>>,
    /// Why was DeviceUseStatement performed?
    #[fhir_serde(rename = "reasonReference")]
    pub reason_reference: Option<Vec<Reference>>,
    /// Target body site
    #[fhir_serde(rename = "bodySite")]
    pub body_site: Option<CodeableConcept>,
    /// Addition details (comments, instructions)
    pub note: Option<Vec<Annotation>>,
}
