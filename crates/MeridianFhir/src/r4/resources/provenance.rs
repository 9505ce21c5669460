use crate::r4::*;
use crate::FhirSerde;

/// Choice of types for the occurred\[x\] field in Provenance
#[derive(Debug, Clone, PartialEq, FhirSerde)]
#[fhir_choice_element(base_name = "occurred")]
pub enum ProvenanceOccurred {
    /// Variant accepting the Period type.
    #[fhir_serde(rename = "occurredPeriod")]
    Period(Period),
    /// Variant accepting the DateTime type.
    #[fhir_serde(rename = "occurredDateTime")]
    DateTime(DateTime),
}

/// FHIR Provenance type
///
/// Provenance of a resource is a record that describes entities and processes
/// involved in producing and delivering or otherwise influencing that resource.
///
/// See: [Provenance](http://hl7.org/fhir/StructureDefinition/Provenance)
#[derive(Debug, Clone, PartialEq, Default, FhirSerde)]
#[fhir_type(name = "Provenance", kind = "domain_resource")]
pub struct Provenance {
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
    /// Target Reference(s) (usually version specific)
    pub target: Vec<Reference>,
    /// When the activity occurred
    #[fhir_serde(flatten)]
    pub occurred: Option<ProvenanceOccurred>,
    /// When the activity was recorded / updated
    pub recorded: Instant,
    /// Policy or plan the activity was defined by
    pub policy: Option<Vec<Uri>>,
    /// Where the activity occurred, if relevant
    pub location: Option<Reference>,
    /// Reason the activity is occurring
    pub reason: Option<Vec<CodeableConcept>>,
    /// Activity that occurred
    pub activity: Option<CodeableConcept>,
    /// Actor involved
    pub agent: Vec<ProvenanceAgent>,
    /// An entity used in this activity
    pub entity: Option<Vec<ProvenanceEntity>>,
    /// Signature on target
    pub signature: Option<Vec<Signature>>,
}

/// Actor involved
#[derive(Debug, Clone, PartialEq, Default, FhirSerde)]
#[fhir_type(name = "ProvenanceAgent", kind = "backbone_element")]
pub struct ProvenanceAgent {
    /// Unique id for inter-element referencing
    pub id: Option<std::string::String>,
    /// Additional content defined by implementations
    pub extension: Option<Vec<Extension>>,
    /// Extensions that cannot be ignored even if unrecognized
    #[fhir_serde(rename = "modifierExtension")]
    pub modifier_extension: Option<Vec<Extension>>,
    /// How the agent participated
    #[fhir_serde(rename = "type")]
    pub r#type: Option<CodeableConcept>,
    /// What the agents role was
    pub role: Option<Vec<CodeableConcept>>,
    /// Who participated
    pub who: Reference,
    /// Who the agent is representing
    #[fhir_serde(rename = "onBehalfOf")]
    pub on_behalf_of: Option<Reference>,
}

/// An entity used in this activity
#[derive(Debug, Clone, PartialEq, Default, FhirSerde)]
#[fhir_type(name = "ProvenanceEntity", kind = "backbone_element")]
pub struct ProvenanceEntity {
    /// Unique id for inter-element referencing
    pub id: Option<std::string::String>,
    /// Additional content defined by implementations
    pub extension: Option<Vec<Extension>>,
    /// Extensions that cannot be ignored even if unrecognized
    #[fhir_serde(rename = "modifierExtension")]
    pub modifier_extension: Option<Vec<Extension>>,
    /// derivation | revision | quotation | source | removal
    pub role: Code,
    /// Identity of entity
    pub what: Reference,
    /// Entity is attributed to this agent
    pub agent: Option<Vec<ProvenanceAgent>>,
}
