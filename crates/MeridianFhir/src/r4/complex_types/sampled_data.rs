use crate::r4::*;
use crate::FhirSerde;

/// FHIR SampledData type
///
/// A series of measurements taken by a device, with upper and lower limits.
/// There may be more than one dimension in the data.
///
/// See: [SampledData](http://hl7.org/fhir/StructureDefinition/SampledData)
#[derive(Debug, Clone, PartialEq, Default, FhirSerde)]
#[fhir_type(name = "SampledData", kind = "element")]
pub struct SampledData {
    /// Unique id for inter-element referencing
    pub id: Option<std::string::String>,
    /// Additional content defined by implementations
    pub extension: Option<Vec<Extension>>,
    /// Zero value and units
    pub origin: Quantity,
    /// Number of milliseconds between samples
    pub period: Decimal,
    /// Multiply data by this before adding to origin
    pub factor: Option<Decimal>,
    /// Lower limit of detection
    #[fhir_serde(rename = "lowerLimit")]
    pub lower_limit: Option<Decimal>,
    /// Upper limit of detection
    #[fhir_serde(rename = "upperLimit")]
    pub upper_limit: Option<Decimal>,
    /// Number of sample points at each time point
    pub dimensions: PositiveInt,
    /// Decimal values with spaces, or "E" | "U" | "L"
    pub data: Option<String>,
}
