use crate::r4::*;
use crate::FhirSerde;

/// Choice of types for the timing\[x\] field in TriggerDefinition
#[derive(Debug, Clone, PartialEq, FhirSerde)]
#[fhir_choice_element(base_name = "timing")]
pub enum TriggerDefinitionTiming {
    /// Variant accepting the Timing type.
    #[fhir_serde(rename = "timingTiming")]
    Timing(Timing),
    /// Variant accepting the Reference type.
    #[fhir_serde(rename = "timingReference")]
    Reference(Reference),
    /// Variant accepting the Date type.
    #[fhir_serde(rename = "timingDate")]
    Date(Date),
    /// Variant accepting the DateTime type.
    #[fhir_serde(rename = "timingDateTime")]
    DateTime(DateTime),
}

/// FHIR TriggerDefinition type
///
/// A description of a triggering event. Triggering events can be named events,
/// data events, or periodic, as determined by the type element.
///
/// See: [TriggerDefinition](http://hl7.org/fhir/StructureDefinition/TriggerDefinition)
#[derive(Debug, Clone, PartialEq, Default, FhirSerde)]
#[fhir_type(name = "TriggerDefinition", kind = "element")]
pub struct TriggerDefinition {
    /// Unique id for inter-element referencing
    pub id: Option<std::string::String>,
    /// Additional content defined by implementations
    pub extension: Option<Vec<Extension>>,
    /// named-event | periodic | data-changed | data-added | data-modified | data-removed | data-accessed | data-access-ended
    #[fhir_serde(rename = "type")]
    pub r#type: Code,
    /// Name or URI that identifies the event
    pub name: Option<String>,
    /// Timing of the event
    #[fhir_serde(flatten)]
    pub timing: Option<TriggerDefinitionTiming>,
    /// Triggering data of the event (multiple = 'and')
    pub data: Option<Vec<DataRequirement>>,
    /// Whether the event triggers (boolean expression)
    pub condition: Option<Expression>,
}
