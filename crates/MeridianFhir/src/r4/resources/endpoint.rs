use crate::r4::*;
use crate::FhirSerde;

/// FHIR Endpoint type
///
/// The technical details of an endpoint that can be used for electronic
/// services, such as for web services providing XDS.b or a REST endpoint for
/// another FHIR server. This may include any security context information.
///
/// See: [Endpoint](http://hl7.org/fhir/StructureDefinition/Endpoint)
#[derive(Debug, Clone, PartialEq, Default, FhirSerde)]
#[fhir_type(name = "Endpoint", kind = "domain_resource")]
pub struct Endpoint {
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
    /// Identifies this endpoint across multiple systems
    pub identifier: Option<Vec<Identifier>>,
    /// active | suspended | error | off | entered-in-error | test
    pub status: Code,
    /// Protocol/Profile/Standard to be used with this endpoint connection
    #[fhir_serde(rename = "connectionType")]
    pub connection_type: Coding,
    /// A name that this endpoint can be identified by
    pub name: Option<String>,
    /// Organization that manages this endpoint (might not be the organization that exposes the endpoint)
    #[fhir_serde(rename = "managingOrganization")]
    pub managing_organization: Option<Reference>,
    /// Contact details for source (e.g. troubleshooting)
    pub contact: Option<Vec<ContactPoint>>,
    /// Interval the endpoint is expected to be operational
    pub period: Option<Period>,
    /// The type of content that may be used at this endpoint (e.g. XDS Discharge summaries)
    #[fhir_serde(rename = "payloadType")]
    pub payload_type: Vec<CodeableConcept>,
    /// Mimetype to send. If not specified, the content could be anything (including no payload, if the connectionType defined this)
    #[fhir_serde(rename = "payloadMimeType")]
    pub payload_mime_type: Option<Vec<Code>>,
    /// The technical base address for connecting to this endpoint
    pub address: Url,
    /// Usage depends on the channel type
    pub header: Option<Vec<String>>,
}
