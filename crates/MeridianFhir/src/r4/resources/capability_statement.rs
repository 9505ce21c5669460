use crate::r4::*;
use crate::FhirSerde;

/// FHIR CapabilityStatement type
///
/// A Capability Statement documents a set of capabilities (behaviors) of a FHIR
/// Server for a particular version of FHIR that may be used as a statement of
/// actual server functionality or a statement of required or desired server
/// implementation.
///
/// See: [CapabilityStatement](http://hl7.org/fhir/StructureDefinition/CapabilityStatement)
#[derive(Debug, Clone, PartialEq, Default, FhirSerde)]
#[fhir_type(name = "CapabilityStatement", kind = "domain_resource")]
pub struct CapabilityStatement {
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
    /// Canonical identifier for this capability statement, represented as a URI (globally unique)
    pub url: Option<Uri>,
    /// Business version of the capability statement
    pub version: Option<String>,
    /// Name for this capability statement (computer friendly)
    pub name: Option<String>,
    /// Name for this capability statement (human friendly)
    pub title: Option<String>,
    /// The status of this capability statement. Enables tracking the life-cycle of the content.
    pub status: Code,
    /// For testing purposes, not real usage
    pub experimental: Option<Boolean>,
    /// Date last changed
    pub date: DateTime,
    /// Name of the publisher (organization or individual)
    pub publisher: Option<String>,
    /// Contact details for the publisher
    pub contact: Option<Vec<ContactDetail>>,
    /// Natural language description of the capability statement
    pub description: Option<Markdown>,
    /// The context that the content is intended to support
    #[fhir_serde(rename = "useContext")]
    pub use_context: Option<Vec<UsageContext>>,
    /// Intended jurisdiction for capability statement (if applicable)
    pub jurisdiction: Option<Vec<CodeableConcept>>,
    /// Why this capability statement is defined
    pub purpose: Option<Markdown>,
    /// Use and/or publishing restrictions
    pub copyright: Option<Markdown>,
    /// The way that this statement is intended to be used, to describe an actual running instance of software, a particular product (kind, not instance of software) or a class of implementation (e.g. a desired purchase).
    pub kind: Code,
    /// Canonical URL of another capability statement this implements
    pub instantiates: Option<Vec<String>>,
    /// Canonical URL of another capability statement this adds to
    pub imports: Option<Vec<String>>,
    /// Software that is covered by this capability statement
    pub software: Option<CapabilityStatementSoftware>,
    /// If this describes a specific instance
    pub implementation: Option<CapabilityStatementImplementation>,
    /// FHIR Version the system supports
    #[fhir_serde(rename = "fhirVersion")]
    pub fhir_version: String,
    /// formats supported (xml | json | ttl | mime type)
    pub format: Vec<String>,
    /// Patch formats supported
    #[fhir_serde(rename = "patchFormat")]
    pub patch_format: Option<Vec<String>>,
    /// Implementation guides supported
    #[fhir_serde(rename = "implementationGuide")]
    pub implementation_guide: Option<Vec<String>>,
    /// If the endpoint is a RESTful one
    pub rest: Option<Vec<CapabilityStatementRest>>,
    /// If messaging is supported
    pub messaging: Option<Vec<CapabilityStatementMessaging>>,
    /// Document definition
    pub document: Option<Vec<CapabilityStatementDocument>>,
}

/// Document definition
#[derive(Debug, Clone, PartialEq, Default, FhirSerde)]
#[fhir_type(name = "CapabilityStatementDocument", kind = "backbone_element")]
pub struct CapabilityStatementDocument {
    /// Unique id for inter-element referencing
    pub id: Option<std::string::String>,
    /// Additional content defined by implementations
    pub extension: Option<Vec<Extension>>,
    /// Extensions that cannot be ignored even if unrecognized
    #[fhir_serde(rename = "modifierExtension")]
    pub modifier_extension: Option<Vec<Extension>>,
    /// Mode of this document declaration - whether an application is a producer or consumer
    pub mode: Code,
    /// Description of document support
    pub documentation: Option<String>,
    /// Constraint on the resources used in the document
    pub profile: Canonical,
}

/// If this describes a specific instance
#[derive(Debug, Clone, PartialEq, Default, FhirSerde)]
#[fhir_type(name = "CapabilityStatementImplementation", kind = "backbone_element")]
pub struct CapabilityStatementImplementation {
    /// Unique id for inter-element referencing
    pub id: Option<std::string::String>,
    /// Additional content defined by implementations
    pub extension: Option<Vec<Extension>>,
    /// Extensions that cannot be ignored even if unrecognized
    #[fhir_serde(rename = "modifierExtension")]
    pub modifier_extension: Option<Vec<Extension>>,
    /// Describes this specific instance
    pub description: String,
    /// Base URL for the installation
    pub url: Option<Url>,
    /// Organization that manages the data
    pub custodian: Option<Reference>,
}

/// If messaging is supported
#[derive(Debug, Clone, PartialEq, Default, FhirSerde)]
#[fhir_type(name = "CapabilityStatementMessaging", kind = "backbone_element")]
pub struct CapabilityStatementMessaging {
    /// Unique id for inter-element referencing
    pub id: Option<std::string::String>,
    /// Additional content defined by implementations
    pub extension: Option<Vec<Extension>>,
    /// Extensions that cannot be ignored even if unrecognized
    #[fhir_serde(rename = "modifierExtension")]
    pub modifier_extension: Option<Vec<Extension>>,
    /// Where messages should be sent
    pub endpoint: Option<Vec<CapabilityStatementMessagingEndpoint>>,
    /// Reliable Message Cache Length (min)
    #[fhir_serde(rename = "reliableCache")]
    pub reliable_cache: Option<UnsignedInt>,
    /// Messaging interface behavior details
    pub documentation: Option<String>,
    /// Messages supported by this system
    #[fhir_serde(rename = "supportedMessage")]
    pub supported_message: Option<Vec<CapabilityStatementMessagingSupportedMessage>>,
}

/// Where messages should be sent
#[derive(Debug, Clone, PartialEq, Default, FhirSerde)]
#[fhir_type(name = "CapabilityStatementMessagingEndpoint", kind = "backbone_element")]
pub struct CapabilityStatementMessagingEndpoint {
    /// Unique id for inter-element referencing
    pub id: Option<std::string::String>,
    /// Additional content defined by implementations
    pub extension: Option<Vec<Extension>>,
    /// Extensions that cannot be ignored even if unrecognized
    #[fhir_serde(rename = "modifierExtension")]
    pub modifier_extension: Option<Vec<Extension>>,
    /// http | ftp | mllp +
    pub protocol: Coding,
    /// Network address or identifier of the end-point
    pub address: String,
}

/// Messages supported by this system
#[derive(Debug, Clone, PartialEq, Default, FhirSerde)]
#[fhir_type(name = "CapabilityStatementMessagingSupportedMessage", kind = "backbone_element")]
pub struct CapabilityStatementMessagingSupportedMessage {
    /// Unique id for inter-element referencing
    pub id: Option<std::string::String>,
    /// Additional content defined by implementations
    pub extension: Option<Vec<Extension>>,
    /// Extensions that cannot be ignored even if unrecognized
    #[fhir_serde(rename = "modifierExtension")]
    pub modifier_extension: Option<Vec<Extension>>,
    /// The mode of this event declaration - whether application is sender or receiver
    pub mode: Code,
    /// Message supported by this system
    pub definition: String,
}

/// If the endpoint is a RESTful one
#[derive(Debug, Clone, PartialEq, Default, FhirSerde)]
#[fhir_type(name = "CapabilityStatementRest", kind = "backbone_element")]
pub struct CapabilityStatementRest {
    /// Unique id for inter-element referencing
    pub id: Option<std::string::String>,
    /// Additional content defined by implementations
    pub extension: Option<Vec<Extension>>,
    /// Extensions that cannot be ignored even if unrecognized
    #[fhir_serde(rename = "modifierExtension")]
    pub modifier_extension: Option<Vec<Extension>>,
    /// Identifies whether this portion of the statement is describing the ability to initiate or receive restful operations
    pub mode: Code,
    /// General description of implementation
    pub documentation: Option<String>,
    /// Information about security of implementation
    pub security: Option<CapabilityStatementRestSecurity>,
    /// Resource served on the REST interface
    pub resource: Option<Vec<CapabilityStatementRestResource>>,
    /// What operations are supported?
    pub interaction: Option<Vec<CapabilityStatementRestInteraction>>,
    /// Search parameters for searching all resources
    #[fhir_serde(rename = "searchParam")]
    pub search_param: Option<Vec<CapabilityStatementRestResourceSearchParam>>,
    /// Definition of a system level operation
    pub operation: Option<Vec<CapabilityStatementRestResourceOperation>>,
    /// Compartments served/used by system
    pub compartment: Option<Vec<String>>,
}

/// What operations are supported?
#[derive(Debug, Clone, PartialEq, Default, FhirSerde)]
#[fhir_type(name = "CapabilityStatementRestInteraction", kind = "backbone_element")]
pub struct CapabilityStatementRestInteraction {
    /// Unique id for inter-element referencing
    pub id: Option<std::string::String>,
    /// Additional content defined by implementations
    pub extension: Option<Vec<Extension>>,
    /// Extensions that cannot be ignored even if unrecognized
    #[fhir_serde(rename = "modifierExtension")]
    pub modifier_extension: Option<Vec<Extension>>,
    /// A coded identifier of the operation, supported by the system. Only use: \['transaction', 'batch', 'search-system', 'history-system'\]
    pub code: Code,
    /// Anything special about operation behavior
    pub documentation: Option<String>,
}

/// Resource served on the REST interface
#[derive(Debug, Clone, PartialEq, Default, FhirSerde)]
#[fhir_type(name = "CapabilityStatementRestResource", kind = "backbone_element")]
pub struct CapabilityStatementRestResource {
    /// Unique id for inter-element referencing
    pub id: Option<std::string::String>,
    /// Additional content defined by implementations
    pub extension: Option<Vec<Extension>>,
    /// Extensions that cannot be ignored even if unrecognized
    #[fhir_serde(rename = "modifierExtension")]
    pub modifier_extension: Option<Vec<Extension>>,
    /// A type of resource exposed via the restful interface
    #[fhir_serde(rename = "type")]
    pub r#type: Code,
    /// Base System profile for all uses of resource
    pub profile: Option<Canonical>,
    /// Profiles for use cases supported
    #[fhir_serde(rename = "supportedProfile")]
    pub supported_profile: Option<Vec<String>>,
    /// Additional information about the use of the resource type
    pub documentation: Option<String>,
    /// What operations are supported?
    pub interaction: Option<Vec<CapabilityStatementRestResourceInteraction>>,
    /// This field is set to no-version to specify that the system does not support (server) or use (client) versioning for this resource type. If this has some other value, the server must at least correctly track and populate the versionId meta-property on resources. If the value is 'versioned-update', then the server supports all the versioning features, including using e-tags for version integrity in the API.
    pub versioning: Option<Code>,
    /// Whether vRead can return past versions
    #[fhir_serde(rename = "readHistory")]
    pub read_history: Option<Boolean>,
    /// If update can commit to a new identity
    #[fhir_serde(rename = "updateCreate")]
    pub update_create: Option<Boolean>,
    /// If allows/uses conditional create
    #[fhir_serde(rename = "conditionalCreate")]
    pub conditional_create: Option<Boolean>,
    /// A code that indicates how the server supports conditional read
    #[fhir_serde(rename = "conditionalRead")]
    pub conditional_read: Option<Code>,
    /// If allows/uses conditional update
    #[fhir_serde(rename = "conditionalUpdate")]
    pub conditional_update: Option<Boolean>,
    /// A code that indicates how the server supports conditional delete
    #[fhir_serde(rename = "conditionalDelete")]
    pub conditional_delete: Option<Code>,
    /// A set of flags that defines how references are supported
    #[fhir_serde(rename = "referencePolicy")]
    pub reference_policy: Option<Vec<Code>>,
    /// _include values supported by the server
    #[fhir_serde(rename = "searchInclude")]
    pub search_include: Option<Vec<String>>,
    /// _revinclude values supported by the server
    #[fhir_serde(rename = "searchRevInclude")]
    pub search_rev_include: Option<Vec<String>>,
    /// Search parameters supported by implementation
    #[fhir_serde(rename = "searchParam")]
    pub search_param: Option<Vec<CapabilityStatementRestResourceSearchParam>>,
    /// Definition of a resource operation
    pub operation: Option<Vec<CapabilityStatementRestResourceOperation>>,
}

/// What operations are supported?
#[derive(Debug, Clone, PartialEq, Default, FhirSerde)]
#[fhir_type(name = "CapabilityStatementRestResourceInteraction", kind = "backbone_element")]
pub struct CapabilityStatementRestResourceInteraction {
    /// Unique id for inter-element referencing
    pub id: Option<std::string::String>,
    /// Additional content defined by implementations
    pub extension: Option<Vec<Extension>>,
    /// Extensions that cannot be ignored even if unrecognized
    #[fhir_serde(rename = "modifierExtension")]
    pub modifier_extension: Option<Vec<Extension>>,
    /// Coded identifier of the operation, supported by the system resource. Only use: \['read', 'vread', 'update', 'patch', 'delete', 'history-instance', 'history-type', 'create', 'search-type'\]
    pub code: Code,
    /// Anything special about operation behavior
    pub documentation: Option<String>,
}

/// Definition of a resource operation
#[derive(Debug, Clone, PartialEq, Default, FhirSerde)]
#[fhir_type(name = "CapabilityStatementRestResourceOperation", kind = "backbone_element")]
pub struct CapabilityStatementRestResourceOperation {
    /// Unique id for inter-element referencing
    pub id: Option<std::string::String>,
    /// Additional content defined by implementations
    pub extension: Option<Vec<Extension>>,
    /// Extensions that cannot be ignored even if unrecognized
    #[fhir_serde(rename = "modifierExtension")]
    pub modifier_extension: Option<Vec<Extension>>,
    /// Name by which the operation/query is invoked
    pub name: String,
    /// The defined operation/query
    pub definition: String,
    /// Specific details about operation behavior
    pub documentation: Option<String>,
}

/// Search parameters supported by implementation
#[derive(Debug, Clone, PartialEq, Default, FhirSerde)]
#[fhir_type(name = "CapabilityStatementRestResourceSearchParam", kind = "backbone_element")]
pub struct CapabilityStatementRestResourceSearchParam {
    /// Unique id for inter-element referencing
    pub id: Option<std::string::String>,
    /// Additional content defined by implementations
    pub extension: Option<Vec<Extension>>,
    /// Extensions that cannot be ignored even if unrecognized
    #[fhir_serde(rename = "modifierExtension")]
    pub modifier_extension: Option<Vec<Extension>>,
    /// Name of search parameter
    pub name: String,
    /// Source of definition for parameter
    pub definition: Option<String>,
    /// The type of value a search parameter refers to, and how the content is interpreted
    #[fhir_serde(rename = "type")]
    pub r#type: Code,
    /// Server-specific usage
    pub documentation: Option<String>,
}

/// Information about security of implementation
#[derive(Debug, Clone, PartialEq, Default, FhirSerde)]
#[fhir_type(name = "CapabilityStatementRestSecurity", kind = "backbone_element")]
pub struct CapabilityStatementRestSecurity {
    /// Unique id for inter-element referencing
    pub id: Option<std::string::String>,
    /// Additional content defined by implementations
    pub extension: Option<Vec<Extension>>,
    /// Extensions that cannot be ignored even if unrecognized
    #[fhir_serde(rename = "modifierExtension")]
    pub modifier_extension: Option<Vec<Extension>>,
    /// Adds CORS Headers (http://enable-cors.org/)
    pub cors: Option<Boolean>,
    /// OAuth | SMART-on-FHIR | NTLM | Basic | Kerberos | Certificates
    pub service: Option<Vec<CodeableConcept>>,
    /// General description of how security works
    pub description: Option<String>,
}

/// Software that is covered by this capability statement
#[derive(Debug, Clone, PartialEq, Default, FhirSerde)]
#[fhir_type(name = "CapabilityStatementSoftware", kind = "backbone_element")]
pub struct CapabilityStatementSoftware {
    /// Unique id for inter-element referencing
    pub id: Option<std::string::String>,
    /// Additional content defined by implementations
    pub extension: Option<Vec<Extension>>,
    /// Extensions that cannot be ignored even if unrecognized
    #[fhir_serde(rename = "modifierExtension")]
    pub modifier_extension: Option<Vec<Extension>>,
    /// A name the software is known by
    pub name: String,
    /// Version covered by this statement
    pub version: Option<String>,
    /// Date this version was released
    #[fhir_serde(rename = "releaseDate")]
    pub release_date: Option<DateTime>,
}
