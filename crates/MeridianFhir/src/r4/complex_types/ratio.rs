use crate::r4::*;
use crate::FhirSerde;

/// FHIR Ratio type
///
/// A relationship of two Quantity values - expressed as a numerator and a
/// denominator.
///
/// See: [Ratio](http://hl7.org/fhir/StructureDefinition/Ratio)
#[derive(Debug, Clone, PartialEq, Default, FhirSerde)]
#[fhir_type(name = "Ratio", kind = "element")]
pub struct Ratio {
    /// Unique id for inter-element referencing
    pub id: Option<std::string::String>,
    /// Additional content defined by implementations
    pub extension: Option<Vec<Extension>>,
    /// Numerator value
    pub numerator: Option<Quantity>,
    /// Denominator value
    pub denominator: Option<Quantity>,
}
