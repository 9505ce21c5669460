use crate::r4::*;
use crate::FhirSerde;

/// FHIR ImagingStudy type
///
/// Representation of the content produced in a DICOM imaging study. A study
/// comprises a set of series, each of which includes a set of Service-Object
/// Pair Instances (SOP Instances - images or other data) acquired or produced in
/// a common context. A series is of only one modality (e.g. X-ray, CT, MR,
/// ultrasound), but a study may have multiple series of different modalities.
///
/// See: [ImagingStudy](http://hl7.org/fhir/StructureDefinition/ImagingStudy)
#[derive(Debug, Clone, PartialEq, Default, FhirSerde)]
#[fhir_type(name = "ImagingStudy", kind = "domain_resource")]
pub struct ImagingStudy {
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
    /// Identifiers for the whole study
    pub identifier: Option<Vec<Identifier>>,
    /// The current state of the ImagingStudy
    pub status: Code,
    /// All series modality if actual acquisition modalities
    pub modality: Option<Vec<Coding>>,
    /// Who or what is the subject of the study
    pub subject: Reference,
    /// Encounter with which this imaging study is associated
    pub encounter: Option<Reference>,
    /// When the study was started
    pub started: Option<DateTime>,
    /// Request fulfilled
    #[fhir_serde(rename = "basedOn")]
    pub based_on: Option<Vec<Reference>>,
    /// Referring physician
    pub referrer: Option<Reference>,
    /// Who interpreted images
    pub interpreter: Option<Vec<Reference>>,
    /// Study access endpoint
    pub endpoint: Option<Vec<Reference>>,
    /// Number of Study Related Series
    #[fhir_serde(rename = "numberOfSeries")]
    pub number_of_series: Option<UnsignedInt>,
    /// Number of Study Related Instances
    #[fhir_serde(rename = "numberOfInstances")]
    pub number_of_instances: Option<UnsignedInt>,
    /// The performed Procedure reference
    #[fhir_serde(rename = "procedureReference")]
    pub procedure_reference: Option<Reference>,
    /// The performed procedure code
    #[fhir_serde(rename = "procedureCode")]
    pub procedure_code: Option<Vec<CodeableConcept>>,
    /// Where ImagingStudy occurred
    pub location: Option<Reference>,
    /// Why the study was requested
    #[fhir_serde(rename = "reasonCode")]
    pub reason_code: Option<Vec<CodeableConcept>>,
    /// Why was study performed
    #[fhir_serde(rename = "reasonReference")]
    pub reason_reference: Option<Vec<Reference>>,
    /// User-defined comments
    pub note: Option<Vec<Annotation>>,
    /// Institution-generated description
    pub description: Option<Markdown>,
    /// Each study has one or more series of instances
    pub series: Option<Vec<ImagingStudySeries>>,
}

/// Each study has one or more series of instances
#[derive(Debug, Clone, PartialEq, Default, FhirSerde)]
#[fhir_type(name = "ImagingStudySeries", kind = "backbone_element")]
pub struct ImagingStudySeries {
    /// Unique id for inter-element referencing
    pub id: Option<std::string::String>,
    /// Additional content defined by implementations
    pub extension: Option<Vec<Extension>>,
    /// Extensions that cannot be ignored even if unrecognized
    #[fhir_serde(rename = "modifierExtension")]
    pub modifier_extension: Option<Vec<Extension>>,
    /// DICOM Series Instance UID for the series
    pub uid: String,
    /// Numeric identifier of this series
    pub number: Option<UnsignedInt>,
    /// The modality of the instances in the series
    pub modality: Coding,
    /// A short human readable summary of the series
    pub description: Option<String>,
    /// Number of Series Related Instances
    #[fhir_serde(rename = "numberOfInstances")]
    pub number_of_instances: Option<UnsignedInt>,
    /// Series access endpoint
    pub endpoint: Option<Vec<Reference>>,
    /// Body part examined
    #[fhir_serde(rename = "bodySite")]
    pub body_site: Option<Coding>,
    /// Body part laterality
    pub laterality: Option<Coding>,
    /// Specimen imaged
    pub specimen: Option<Vec<Reference>>,
    /// When the series started
    pub started: Option<DateTime>,
    /// Who performed the series
    pub performer: Option<Vec<ImagingStudySeriesPerformer>>,
    /// A single SOP instance from the series
    pub instance: Option<Vec<ImagingStudySeriesInstance>>,
}

/// A single SOP instance from the series
#[derive(Debug, Clone, PartialEq, Default, FhirSerde)]
#[fhir_type(name = "ImagingStudySeriesInstance", kind = "backbone_element")]
pub struct ImagingStudySeriesInstance {
    /// Unique id for inter-element referencing
    pub id: Option<std::string::String>,
    /// Additional content defined by implementations
    pub extension: Option<Vec<Extension>>,
    /// Extensions that cannot be ignored even if unrecognized
    #[fhir_serde(rename = "modifierExtension")]
    pub modifier_extension: Option<Vec<Extension>>,
    /// DICOM SOP Instance UID
    pub uid: String,
    /// DICOM class type
    #[fhir_serde(rename = "sopClass")]
    pub sop_class: Coding,
    /// The number of this instance in the series
    pub number: Option<UnsignedInt>,
    /// Description of instance
    pub title: Option<String>,
}

/// Who performed the series
#[derive(Debug, Clone, PartialEq, Default, FhirSerde)]
#[fhir_type(name = "ImagingStudySeriesPerformer", kind = "backbone_element")]
pub struct ImagingStudySeriesPerformer {
    /// Unique id for inter-element referencing
    pub id: Option<std::string::String>,
    /// Additional content defined by implementations
    pub extension: Option<Vec<Extension>>,
    /// Extensions that cannot be ignored even if unrecognized
    #[fhir_serde(rename = "modifierExtension")]
    pub modifier_extension: Option<Vec<Extension>>,
    /// Type of performance
    pub function: Option<CodeableConcept>,
    /// Who performed the series
    pub actor: Reference,
}
