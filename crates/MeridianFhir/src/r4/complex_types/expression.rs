use crate::r4::*;
use crate::FhirSerde;

/// FHIR Expression type
///
/// A expression that is evaluated in a specified context and returns a value.
/// The context of use of the expression must specify the context in which the
/// expression is evaluated, and how the result of the expression is used.
///
/// See: [Expression](http://hl7.org/fhir/StructureDefinition/Expression)
#[derive(Debug, Clone, PartialEq, Default, FhirSerde)]
#[fhir_type(name = "Expression", kind = "element")]
pub struct Expression {
    /// Unique id for inter-element referencing
    pub id: Option<std::string::String>,
    /// Additional content defined by implementations
    pub extension: Option<Vec<Extension>>,
    /// Natural language description of the condition
    pub description: Option<String>,
    /// Short name assigned to expression for reuse
    pub name: Option<Id>,
    /// text/cql | text/fhirpath | application/x-fhir-query | etc.
    pub language: Code,
    /// Expression in specified language
    pub expression: Option<String>,
    /// Where the expression is found
    pub reference: Option<Uri>,
}
