use crate::r4::*;
use crate::FhirSerde;

/// FHIR Subscription type
///
/// The subscription resource is used to define a push-based subscription from a
/// server to another system. Once a subscription is registered with the server,
/// the server checks every resource that is created or updated, and if the
/// resource matches the given criteria, it sends a message on the defined
/// "channel" so that another system can take an appropriate action.
///
/// See: [Subscription](http://hl7.org/fhir/StructureDefinition/Subscription)
#[derive(Debug, Clone, PartialEq, Default, FhirSerde)]
#[fhir_type(name = "Subscription", kind = "domain_resource")]
pub struct Subscription {
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
    /// requested | active | error | off
    pub status: Code,
    /// Contact details for source (e.g. troubleshooting)
    pub contact: Option<Vec<ContactPoint>>,
    /// When to automatically delete the subscription
    pub end: Option<Instant>,
    /// Description of why this subscription was created
    pub reason: String,
    /// Rule for server push
    pub criteria: String,
    /// Latest error note
    pub error: Option<String>,
    /// The channel on which to report matches to the criteria
    pub channel: SubscriptionChannel,
}

/// The channel on which to report matches to the criteria
#[derive(Debug, Clone, PartialEq, Default, FhirSerde)]
#[fhir_type(name = "SubscriptionChannel", kind = "backbone_element")]
pub struct SubscriptionChannel {
    /// Unique id for inter-element referencing
    pub id: Option<std::string::String>,
    /// Additional content defined by implementations
    pub extension: Option<Vec<Extension>>,
    /// Extensions that cannot be ignored even if unrecognized
    #[fhir_serde(rename = "modifierExtension")]
    pub modifier_extension: Option<Vec<Extension>>,
    /// rest-hook | websocket | email | sms | message
    #[fhir_serde(rename = "type")]
    pub r#type: Code,
    /// Where the channel points to
    pub endpoint: Option<Url>,
    /// MIME type to send, or omit for no payload
    pub payload: Option<Code>,
    /// Usage depends on the channel type
    pub header: Option<Vec<String>>,
}
