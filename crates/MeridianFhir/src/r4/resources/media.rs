use crate::r4::*;
use crate::FhirSerde;

/// Choice of types for the created\[x\] field in Media
#[derive(Debug, Clone, PartialEq, FhirSerde)]
#[fhir_choice_element(base_name = "created")]
pub enum MediaCreated {
    /// Variant accepting the DateTime type.
    #[fhir_serde(rename = "createdDateTime")]
    DateTime(DateTime),
    /// Variant accepting the Period type.
    #[fhir_serde(rename = "createdPeriod")]
    Period(Period),
}

/// FHIR Media type
///
/// A photo, video, or audio recording acquired or used in healthcare. The actual
/// content may be inline or provided by direct reference.
///
/// See: [Media](http://hl7.org/fhir/StructureDefinition/Media)
#[derive(Debug, Clone, PartialEq, Default, FhirSerde)]
#[fhir_type(name = "Media", kind = "domain_resource")]
pub struct Media {
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
    /// Identifier(s) for the image
    pub identifier: Option<Vec<Identifier>>,
    /// Procedure that caused this media to be created
    #[fhir_serde(rename = "basedOn")]
    pub based_on: Option<Vec<Reference>>,
    /// Part of referenced event
    #[fhir_serde(rename = "partOf")]
    pub part_of: Option<Vec<Reference>>,
    /// preparation | in-progress | not-done | on-hold | stopped | completed | entered-in-error | unknown
    pub status: Code,
    /// Classification of media as image, video, or audio
    #[fhir_serde(rename = "type")]
    pub r#type: Option<CodeableConcept>,
    /// The type of acquisition equipment/process
    pub modality: Option<CodeableConcept>,
    /// Imaging view, e.g. Lateral or Antero-posterior
    pub view: Option<CodeableConcept>,
    /// Who/What this Media is a record of
    pub subject: Option<Reference>,
    /// Encounter associated with media
    pub encounter: Option<Reference>,
    /// When Media was collected
    #[fhir_serde(flatten)]
    pub created: Option<MediaCreated>,
    /// Date/Time this version was made available
    pub issued: Option<Instant>,
    /// The person who generated the image
    pub operator: Option<Reference>,
    /// Why was event performed?
    #[fhir_serde(rename = "reasonCode")]
    pub reason_code: Option<Vec<CodeableConcept>>,
    /// Observed body part
    #[fhir_serde(rename = "bodySite")]
    pub body_site: Option<CodeableConcept>,
    /// Name of the device/manufacturer
    #[fhir_serde(rename = "deviceName")]
    pub device_name: Option<String>,
    /// Observing Device
    pub device: Option<Reference>,
    /// Height of the image in pixels (photo/video)
    pub height: Option<PositiveInt>,
    /// Width of the image in pixels (photo/video)
    pub width: Option<PositiveInt>,
    /// Number of frames if > 1 (photo)
    pub frames: Option<PositiveInt>,
    /// Length in seconds (audio / video)
    pub duration: Option<Decimal>,
    /// Actual Media - reference or data
    pub content: Attachment,
    /// Comments made about the media
    pub note: Option<Vec<Annotation>>,
}
