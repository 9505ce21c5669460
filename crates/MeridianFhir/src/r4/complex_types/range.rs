use crate::r4::*;
use crate::FhirSerde;

/// FHIR Range type
///
/// A set of ordered Quantities defined by a low and high limit.
///
/// See: [Range](http://hl7.org/fhir/StructureDefinition/Range)
#[derive(Debug, Clone, PartialEq, Default, FhirSerde)]
#[fhir_type(name = "Range", kind = "element")]
pub struct Range {
    /// Unique id for inter-element referencing
    pub id: Option<std::string::String>,
    /// Additional content defined by implementations
    pub extension: Option<Vec<Extension>>,
    /// Low limit
    pub low: Option<Quantity>,
    /// High limit
    pub high: Option<Quantity>,
}
