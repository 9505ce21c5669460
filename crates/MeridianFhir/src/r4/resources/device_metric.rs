use crate::r4::*;
use crate::FhirSerde;

/// FHIR DeviceMetric type
///
/// Describes a measurement, calculation or setting capability of a medical
/// device.
///
/// See: [DeviceMetric](http://hl7.org/fhir/StructureDefinition/DeviceMetric)
#[derive(Debug, Clone, PartialEq, Default, FhirSerde)]
#[fhir_type(name = "DeviceMetric", kind = "domain_resource")]
pub struct DeviceMetric {
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
    /// Instance identifier
    pub identifier: Option<Vec<Identifier>>,
    /// Identity of metric, for example Heart Rate or PEEP Setting
    #[fhir_serde(rename = "type")]
    pub r#type: CodeableConcept,
    /// Unit of Measure for the Metric
    pub unit: Option<CodeableConcept>,
    /// Describes the link to the source Device
    pub source: Option<Reference>,
    /// Describes the link to the parent Device
    pub parent: Option<Reference>,
    /// on | off | standby | entered-in-error
    #[fhir_serde(rename = "operationalStatus")]
    pub operational_status: Option<Code>,
    /// black | red | green | yellow | blue | magenta | cyan | white
    pub color: Option<Code>,
    /// measurement | setting | calculation | unspecified
    pub category: Code,
    /// Describes the measurement repetition time
    #[fhir_serde(rename = "measurementPeriod")]
    pub measurement_period: Option<Timing>,
    /// Describes the calibrations that have been performed or that are required to be performed
    pub calibration: Option<Vec<DeviceMetricCalibration>>,
}

/// Describes the calibrations that have been performed or that are required to be performed
#[derive(Debug, Clone, PartialEq, Default, FhirSerde)]
#[fhir_type(name = "DeviceMetricCalibration", kind = "backbone_element")]
pub struct DeviceMetricCalibration {
    /// Unique id for inter-element referencing
    pub id: Option<std::string::String>,
    /// Additional content defined by implementations
    pub extension: Option<Vec<Extension>>,
    /// Extensions that cannot be ignored even if unrecognized
    #[fhir_serde(rename = "modifierExtension")]
    pub modifier_extension: Option<Vec<Extension>>,
    /// unspecified | offset | gain | two-point
    #[fhir_serde(rename = "type")]
    pub r#type: Option<Code>,
    /// not-calibrated | calibration-required | calibrated | unspecified
    pub state: Option<Code>,
    /// Describes the time last calibration has been performed
    pub time: Option<Instant>,
}
