use crate::r4::*;
use crate::FhirSerde;

/// FHIR Age type
///
/// A duration of time during which an organism (or a process) has existed.
///
/// See: [Age](http://hl7.org/fhir/StructureDefinition/Age)
#[derive(Debug, Clone, PartialEq, Default, FhirSerde)]
#[fhir_type(name = "Age", kind = "element")]
pub struct Age {
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
