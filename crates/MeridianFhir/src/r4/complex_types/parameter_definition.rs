use crate::r4::*;
use crate::FhirSerde;

/// FHIR ParameterDefinition type
///
/// The parameters to the module. This collection specifies both the input and
/// output parameters. Input parameters are provided by the caller as part of the
/// $evaluate operation. Output parameters are included in the GuidanceResponse.
///
/// See: [ParameterDefinition](http://hl7.org/fhir/StructureDefinition/ParameterDefinition)
#[derive(Debug, Clone, PartialEq, Default, FhirSerde)]
#[fhir_type(name = "ParameterDefinition", kind = "element")]
pub struct ParameterDefinition {
    /// Unique id for inter-element referencing
    pub id: Option<std::string::String>,
    /// Additional content defined by implementations
    pub extension: Option<Vec<Extension>>,
    /// Name used to access the parameter value
    pub name: Option<Code>,
    /// in | out
    #[fhir_serde(rename = "use")]
    pub r#use: Code,
    /// Minimum cardinality
    pub min: Option<Integer>,
    /// Maximum cardinality (a number of *)
    pub max: Option<String>,
    /// A brief description of the parameter
    pub documentation: Option<String>,
    /// What type of value
    #[fhir_serde(rename = "type")]
    pub r#type: Code,
    /// What profile the value is expected to be
    pub profile: Option<Canonical>,
}
