use crate::r4::*;
use crate::FhirSerde;

/// FHIR Schedule type
///
/// A container for slots of time that may be available for booking appointments.
///
/// See: [Schedule](http://hl7.org/fhir/StructureDefinition/Schedule)
#[derive(Debug, Clone, PartialEq, Default, FhirSerde)]
#[fhir_type(name = "Schedule", kind = "domain_resource")]
pub struct Schedule {
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
    /// External Ids for this item
    pub identifier: Option<Vec<Identifier>>,
    /// Whether this schedule is in active use
    pub active: Option<Boolean>,
    /// High-level category
    #[fhir_serde(rename = "serviceCategory")]
    pub service_category: Option<Vec<CodeableConcept>>,
    /// Specific service
    #[fhir_serde(rename = "serviceType")]
    pub service_type: Option<Vec<CodeableConcept>>,
    /// Type of specialty needed
    pub specialty: Option<Vec<CodeableConcept>>,
    /// Resource(s) that availability information is being provided for
    pub actor: Vec<Reference>,
    /// Period of time covered by schedule
    #[fhir_serde(rename = "planningHorizon")]
    pub planning_horizon: Option<Period>,
    /// Comments on availability
    pub comment: Option<String>,
}
