use crate::r4::*;
use crate::FhirSerde;

/// FHIR Distance type
///
/// A length - a value with a unit that is a physical distance.
///
/// See: [Distance](http://hl7.org/fhir/StructureDefinition/Distance)
#[derive(Debug, Clone, PartialEq, Default, FhirSerde)]
#[fhir_type(name = "Distance", kind = "element")]
pub struct Distance {
    /// Unique id for inter-element referencing
    pub id: Option<std::string::String>,
    /// Additional content defined by implementations
    pub extension: Option<Vec<Extension>>,
    /// Numerical value (with implicit precision)
    pub value: Option<Decimal>,
    /// < | \<= | \>= | > - how to understand the value
    pub comparator: Option<Code>,
    /// Unit representation
    pub unit: Option<String>,
    /// System that defines coded unit form
    pub system: Option<Uri>,
    /// Coded form of the unit
    pub code: Option<Code>,
}
