use crate::r4::*;
use crate::FhirSerde;

/// FHIR Money type
///
/// An amount of economic utility in some recognized currency.
///
/// See: [Money](http://hl7.org/fhir/StructureDefinition/Money)
#[derive(Debug, Clone, PartialEq, Default, FhirSerde)]
#[fhir_type(name = "Money", kind = "element")]
pub struct Money {
    /// Unique id for inter-element referencing
    pub id: Option<std::string::String>,
    /// Additional content defined by implementations
    pub extension: Option<Vec<Extension>>,
    /// Numerical value (with implicit precision)
    pub value: Option<Decimal>,
    /// ISO 4217 Currency Code
    pub currency: Option<Code>,
}
