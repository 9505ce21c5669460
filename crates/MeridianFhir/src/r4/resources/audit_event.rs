use crate::r4::*;
use crate::FhirSerde;

/// FHIR AuditEvent type
///
/// A record of an event made for purposes of maintaining a security log. Typical
/// uses include detection of intrusion attempts and monitoring for inappropriate
/// usage.
///
/// See: [AuditEvent](http://hl7.org/fhir/StructureDefinition/AuditEvent)
#[derive(Debug, Clone, PartialEq, Default, FhirSerde)]
#[fhir_type(name = "AuditEvent", kind = "domain_resource")]
pub struct AuditEvent {
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
    /// Type/identifier of event
    #[fhir_serde(rename = "type")]
    pub r#type: Coding,
    /// More specific type/id for the event
    pub subtype: Option<Vec<Coding>>,
    /// Indicator for type of action performed during the event that generated the audit
    pub action: Option<Code>,
    /// When the activity occurred
    pub period: Option<Period>,
    /// Time when the event was recorded
    pub recorded: Instant,
    /// Whether the event succeeded or failed
    pub outcome: Option<String>,
    /// Description of the event outcome
    #[fhir_serde(rename = "outcomeDesc")]
    pub outcome_desc: Option<String>,
    /// The purposeOfUse of the event
    #[fhir_serde(rename = "purposeOfEvent")]
    pub purpose_of_event: Option<Vec<CodeableConcept>>,
    /// Actor involved in the event
    pub agent: Vec<AuditEventAgent>,
    /// Audit Event Reporter
    pub source: AuditEventSource,
    /// Data or objects used
    pub entity: Option<Vec<AuditEventEntity>>,
}

/// Actor involved in the event
#[derive(Debug, Clone, PartialEq, Default, FhirSerde)]
#[fhir_type(name = "AuditEventAgent", kind = "backbone_element")]
pub struct AuditEventAgent {
    /// Unique id for inter-element referencing
    pub id: Option<std::string::String>,
    /// Additional content defined by implementations
    pub extension: Option<Vec<Extension>>,
    /// Extensions that cannot be ignored even if unrecognized
    #[fhir_serde(rename = "modifierExtension")]
    pub modifier_extension: Option<Vec<Extension>>,
    /// How agent participated
    #[fhir_serde(rename = "type")]
    pub r#type: Option<CodeableConcept>,
    /// Agent role in the event
    pub role: Option<Vec<CodeableConcept>>,
    /// Identifier of who
    pub who: Option<Reference>,
    /// Alternative User identity
    #[fhir_serde(rename = "altId")]
    pub alt_id: Option<String>,
    /// Human friendly name for the agent
    pub name: Option<String>,
    /// Whether user is initiator
    pub requestor: Boolean,
    /// Where
    pub location: Option<Reference>,
    /// Policy that authorized event
    pub policy: Option<Vec<String>>,
    /// Type of media
    pub media: Option<Coding>,
    /// Logical network location for application activity
    pub network: Option<AuditEventAgentNetwork>,
    /// Reason given for this user
    #[fhir_serde(rename = "purposeOfUse")]
    pub purpose_of_use: Option<Vec<CodeableConcept>>,
}

/// Logical network location for application activity
#[derive(Debug, Clone, PartialEq, Default, FhirSerde)]
#[fhir_type(name = "AuditEventAgentNetwork", kind = "backbone_element")]
pub struct AuditEventAgentNetwork {
    /// Unique id for inter-element referencing
    pub id: Option<std::string::String>,
    /// Additional content defined by implementations
    pub extension: Option<Vec<Extension>>,
    /// Extensions that cannot be ignored even if unrecognized
    #[fhir_serde(rename = "modifierExtension")]
    pub modifier_extension: Option<Vec<Extension>>,
    /// Identifier for the network access point of the user device
    pub address: Option<String>,
    /// The type of network access point
    #[fhir_serde(rename = "type")]
    pub r#type: Option<String>,
}

/// Data or objects used
#[derive(Debug, Clone, PartialEq, Default, FhirSerde)]
#[fhir_type(name = "AuditEventEntity", kind = "backbone_element")]
pub struct AuditEventEntity {
    /// Unique id for inter-element referencing
    pub id: Option<std::string::String>,
    /// Additional content defined by implementations
    pub extension: Option<Vec<Extension>>,
    /// Extensions that cannot be ignored even if unrecognized
    #[fhir_serde(rename = "modifierExtension")]
    pub modifier_extension: Option<Vec<Extension>>,
    /// Specific instance of resource
    pub what: Option<Reference>,
    /// Type of entity involved
    #[fhir_serde(rename = "type")]
    pub r#type: Option<Coding>,
    /// What role the entity played
    pub role: Option<Coding>,
    /// Life-cycle stage for the entity
    pub lifecycle: Option<Coding>,
    /// Security labels on the entity
    #[fhir_serde(rename = "securityLabel")]
    pub security_label: Option<Vec<Coding>>,
    /// Descriptor for entity
    pub name: Option<String>,
    /// Descriptive text
    pub description: Option<String>,
    /// Query parameters
    pub query: Option<String>,
    /// Additional Information about the entity
    pub detail: Option<Vec<AuditEventEntityDetail>>,
}

/// Choice of types for the value\[x\] field in AuditEventEntityDetail
#[derive(Debug, Clone, PartialEq, FhirSerde)]
#[fhir_choice_element(base_name = "value")]
pub enum AuditEventEntityDetailValue {
    /// Variant accepting the String type.
    #[fhir_serde(rename = "valueString")]
    String(String),
    /// Variant accepting the Base64Binary type.
    #[fhir_serde(rename = "valueBase64Binary")]
    Base64Binary(Base64Binary),
}

/// Additional Information about the entity
#[derive(Debug, Clone, PartialEq, FhirSerde)]
#[fhir_type(name = "AuditEventEntityDetail", kind = "backbone_element")]
pub struct AuditEventEntityDetail {
    /// Unique id for inter-element referencing
    pub id: Option<std::string::String>,
    /// Additional content defined by implementations
    pub extension: Option<Vec<Extension>>,
    /// Extensions that cannot be ignored even if unrecognized
    #[fhir_serde(rename = "modifierExtension")]
    pub modifier_extension: Option<Vec<Extension>>,
    /// Name of the property
    #[fhir_serde(rename = "type")]
    pub r#type: String,
    /// Property value
    #[fhir_serde(flatten)]
    pub value: AuditEventEntityDetailValue,
}

/// Audit Event Reporter
#[derive(Debug, Clone, PartialEq, Default, FhirSerde)]
#[fhir_type(name = "AuditEventSource", kind = "backbone_element")]
pub struct AuditEventSource {
    /// Unique id for inter-element referencing
    pub id: Option<std::string::String>,
    /// Additional content defined by implementations
    pub extension: Option<Vec<Extension>>,
    /// Extensions that cannot be ignored even if unrecognized
    #[fhir_serde(rename = "modifierExtension")]
    pub modifier_extension: Option<Vec<Extension>>,
    /// Logical source location within the enterprise
    pub site: Option<String>,
    /// The identity of source detecting the event
    pub observer: Reference,
    /// The type of source where event originated
    #[fhir_serde(rename = "type")]
    pub r#type: Option<Vec<Coding>>,
}
