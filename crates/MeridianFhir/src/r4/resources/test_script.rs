use crate::r4::*;
use crate::FhirSerde;

/// FHIR TestScript type
///
/// A structured set of tests against a FHIR server or client implementation to
/// determine compliance against the FHIR specification.
///
/// See: [TestScript](http://hl7.org/fhir/StructureDefinition/TestScript)
#[derive(Debug, Clone, PartialEq, Default, FhirSerde)]
#[fhir_type(name = "TestScript", kind = "domain_resource")]
pub struct TestScript {
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
    /// Canonical identifier for this test script, represented as a URI (globally unique)
    pub url: Uri,
    /// Additional identifier for the test script
    pub identifier: Option<Identifier>,
    /// Business version of the test script
    pub version: Option<String>,
    /// Name for this test script (computer friendly)
    pub name: String,
    /// Name for this test script (human friendly)
    pub title: Option<String>,
    /// The status of this test script. Enables tracking the life-cycle of the content.
    pub status: Code,
    /// For testing purposes, not real usage
    pub experimental: Option<Boolean>,
    /// Date last changed
    pub date: Option<DateTime>,
    /// Name of the publisher (organization or individual)
    pub publisher: Option<String>,
    /// Contact details for the publisher
    pub contact: Option<Vec<ContactDetail>>,
    /// Natural language description of the test script
    pub description: Option<Markdown>,
    /// The context that the content is intended to support
    #[fhir_serde(rename = "useContext")]
    pub use_context: Option<Vec<UsageContext>>,
    /// Intended jurisdiction for test script (if applicable)
    pub jurisdiction: Option<Vec<CodeableConcept>>,
    /// Why this test script is defined
    pub purpose: Option<Markdown>,
    /// Use and/or publishing restrictions
    pub copyright: Option<Markdown>,
    /// An abstract server representing a client or sender in a message exchange
    pub origin: Option<Vec<TestScriptOrigin>>,
    /// An abstract server representing a destination or receiver in a message exchange
    pub destination: Option<Vec<TestScriptDestination>>,
    /// Required capability that is assumed to function correctly on the FHIR server being tested
    pub metadata: Option<TestScriptMetadata>,
    /// Fixture in the test script - by reference (uri)
    pub fixture: Option<Vec<TestScriptFixture>>,
    /// Reference of the validation profile
    pub profile: Option<Vec<Reference>>,
    /// Placeholder for evaluated elements
    pub variable: Option<Vec<TestScriptVariable>>,
    /// A series of required setup operations before tests are executed
    pub setup: Option<TestScriptSetup>,
    /// A test in this script
    pub test: Option<Vec<TestScriptTest>>,
    /// A series of required clean up steps
    pub teardown: Option<TestScriptTeardown>,
}

/// An abstract server representing a destination or receiver in a message exchange
#[derive(Debug, Clone, PartialEq, Default, FhirSerde)]
#[fhir_type(name = "TestScriptDestination", kind = "backbone_element")]
pub struct TestScriptDestination {
    /// Unique id for inter-element referencing
    pub id: Option<std::string::String>,
    /// Additional content defined by implementations
    pub extension: Option<Vec<Extension>>,
    /// Extensions that cannot be ignored even if unrecognized
    #[fhir_serde(rename = "modifierExtension")]
    pub modifier_extension: Option<Vec<Extension>>,
    /// The index of the abstract destination server starting at 1
    pub index: Integer,
    /// FHIR-Server | FHIR-SDC-FormManager | FHIR-SDC-FormReceiver | FHIR-SDC- FormProcessor
    pub profile: Coding,
}

/// Fixture in the test script - by reference (uri)
#[derive(Debug, Clone, PartialEq, Default, FhirSerde)]
#[fhir_type(name = "TestScriptFixture", kind = "backbone_element")]
pub struct TestScriptFixture {
    /// Unique id for inter-element referencing
    pub id: Option<std::string::String>,
    /// Additional content defined by implementations
    pub extension: Option<Vec<Extension>>,
    /// Extensions that cannot be ignored even if unrecognized
    #[fhir_serde(rename = "modifierExtension")]
    pub modifier_extension: Option<Vec<Extension>>,
    /// Whether or not to implicitly create the fixture during setup
    pub autocreate: Boolean,
    /// Whether or not to implicitly delete the fixture during teardown
    pub autodelete: Boolean,
    /// Reference of the resource
    pub resource: Option<Reference>,
}

/// Required capability that is assumed to function correctly on the FHIR server being tested
#[derive(Debug, Clone, PartialEq, Default, FhirSerde)]
#[fhir_type(name = "TestScriptMetadata", kind = "backbone_element")]
pub struct TestScriptMetadata {
    /// Unique id for inter-element referencing
    pub id: Option<std::string::String>,
    /// Additional content defined by implementations
    pub extension: Option<Vec<Extension>>,
    /// Extensions that cannot be ignored even if unrecognized
    #[fhir_serde(rename = "modifierExtension")]
    pub modifier_extension: Option<Vec<Extension>>,
    /// Links to the FHIR specification
    pub link: Option<Vec<TestScriptMetadataLink>>,
    /// Capabilities that are assumed to function correctly on the FHIR server being tested
    pub capability: Vec<TestScriptMetadataCapability>,
}

/// Capabilities that are assumed to function correctly on the FHIR server being tested
#[derive(Debug, Clone, PartialEq, Default, FhirSerde)]
#[fhir_type(name = "TestScriptMetadataCapability", kind = "backbone_element")]
pub struct TestScriptMetadataCapability {
    /// Unique id for inter-element referencing
    pub id: Option<std::string::String>,
    /// Additional content defined by implementations
    pub extension: Option<Vec<Extension>>,
    /// Extensions that cannot be ignored even if unrecognized
    #[fhir_serde(rename = "modifierExtension")]
    pub modifier_extension: Option<Vec<Extension>>,
    /// Are the capabilities required?
    pub required: Boolean,
    /// Are the capabilities validated?
    pub validated: Boolean,
    /// The expected capabilities of the server
    pub description: Option<String>,
    /// Which origin server these requirements apply to
    pub origin: Option<Vec<Integer>>,
    /// Which server these requirements apply to
    pub destination: Option<Integer>,
    /// Links to the FHIR specification
    pub link: Option<Vec<String>>,
    /// Required Capability Statement
    pub capabilities: String,
}

/// Links to the FHIR specification
#[derive(Debug, Clone, PartialEq, Default, FhirSerde)]
#[fhir_type(name = "TestScriptMetadataLink", kind = "backbone_element")]
pub struct TestScriptMetadataLink {
    /// Unique id for inter-element referencing
    pub id: Option<std::string::String>,
    /// Additional content defined by implementations
    pub extension: Option<Vec<Extension>>,
    /// Extensions that cannot be ignored even if unrecognized
    #[fhir_serde(rename = "modifierExtension")]
    pub modifier_extension: Option<Vec<Extension>>,
    /// URL to the specification
    pub url: Url,
    /// Short description
    pub description: Option<String>,
}

/// An abstract server representing a client or sender in a message exchange
#[derive(Debug, Clone, PartialEq, Default, FhirSerde)]
#[fhir_type(name = "TestScriptOrigin", kind = "backbone_element")]
pub struct TestScriptOrigin {
    /// Unique id for inter-element referencing
    pub id: Option<std::string::String>,
    /// Additional content defined by implementations
    pub extension: Option<Vec<Extension>>,
    /// Extensions that cannot be ignored even if unrecognized
    #[fhir_serde(rename = "modifierExtension")]
    pub modifier_extension: Option<Vec<Extension>>,
    /// The index of the abstract origin server starting at 1
    pub index: Integer,
    /// FHIR-Client | FHIR-SDC-FormFiller
    pub profile: Coding,
}

/// A series of required setup operations before tests are executed
#[derive(Debug, Clone, PartialEq, Default, FhirSerde)]
#[fhir_type(name = "TestScriptSetup", kind = "backbone_element")]
pub struct TestScriptSetup {
    /// Unique id for inter-element referencing
    pub id: Option<std::string::String>,
    /// Additional content defined by implementations
    pub extension: Option<Vec<Extension>>,
    /// Extensions that cannot be ignored even if unrecognized
    #[fhir_serde(rename = "modifierExtension")]
    pub modifier_extension: Option<Vec<Extension>>,
    /// A setup operation or assert to perform
    pub action: Vec<TestScriptSetupAction>,
}

/// A setup operation or assert to perform
#[derive(Debug, Clone, PartialEq, Default, FhirSerde)]
#[fhir_type(name = "TestScriptSetupAction", kind = "backbone_element")]
pub struct TestScriptSetupAction {
    /// Unique id for inter-element referencing
    pub id: Option<std::string::String>,
    /// Additional content defined by implementations
    pub extension: Option<Vec<Extension>>,
    /// Extensions that cannot be ignored even if unrecognized
    #[fhir_serde(rename = "modifierExtension")]
    pub modifier_extension: Option<Vec<Extension>>,
    /// The setup operation to perform
    pub operation: Option<TestScriptSetupActionOperation>,
    /// The assertion to perform
    pub assert: Option<TestScriptSetupActionAssert>,
}

/// The assertion to perform
#[derive(Debug, Clone, PartialEq, Default, FhirSerde)]
#[fhir_type(name = "TestScriptSetupActionAssert", kind = "backbone_element")]
pub struct TestScriptSetupActionAssert {
    /// Unique id for inter-element referencing
    pub id: Option<std::string::String>,
    /// Additional content defined by implementations
    pub extension: Option<Vec<Extension>>,
    /// Extensions that cannot be ignored even if unrecognized
    #[fhir_serde(rename = "modifierExtension")]
    pub modifier_extension: Option<Vec<Extension>>,
    /// Tracking/logging assertion label
    pub label: Option<String>,
    /// Tracking/reporting assertion description
    pub description: Option<String>,
    /// The direction to use for the assertion
    pub direction: Option<Code>,
    /// Id of the source fixture to be evaluated
    #[fhir_serde(rename = "compareToSourceId")]
    pub compare_to_source_id: Option<String>,
    /// The FHIRPath expression to evaluate against the source fixture
    #[fhir_serde(rename = "compareToSourceExpression")]
    pub compare_to_source_expression: Option<String>,
    /// XPath or JSONPath expression to evaluate against the source fixture
    #[fhir_serde(rename = "compareToSourcePath")]
    pub compare_to_source_path: Option<String>,
    /// Mime type to compare against the 'Content-Type' header
    #[fhir_serde(rename = "contentType")]
    pub content_type: Option<Code>,
    /// The FHIRPath expression to be evaluated
    pub expression: Option<String>,
    /// HTTP header field name
    #[fhir_serde(rename = "headerField")]
    pub header_field: Option<String>,
    /// Fixture Id of minimum content resource
    #[fhir_serde(rename = "minimumId")]
    pub minimum_id: Option<String>,
    /// Perform validation on navigation links?
    #[fhir_serde(rename = "navigationLinks")]
    pub navigation_links: Option<Boolean>,
    /// The operator type defines the conditional behavior of the assert. If not defined, the default is equals.
    pub operator: Option<Code>,
    /// XPath or JSONPath expression
    pub path: Option<String>,
    /// The request method or HTTP operation code to compare against that used by the client system under test
    #[fhir_serde(rename = "requestMethod")]
    pub request_method: Option<Code>,
    /// Request URL comparison value
    #[fhir_serde(rename = "requestURL")]
    pub request_u_r_l: Option<String>,
    /// Resource type
    pub resource: Option<String>,
    /// None
    pub response: Option<Code>,
    /// HTTP response code to test
    #[fhir_serde(rename = "responseCode")]
    pub response_code: Option<String>,
    /// Fixture Id of source expression or headerField
    #[fhir_serde(rename = "sourceId")]
    pub source_id: Option<String>,
    /// Profile Id of validation profile reference
    #[fhir_serde(rename = "validateProfileId")]
    pub validate_profile_id: Option<String>,
    /// The value to compare to
    pub value: Option<String>,
    /// Will this assert produce a warning only on error?
    #[fhir_serde(rename = "warningOnly")]
    pub warning_only: Boolean,
}

/// The setup operation to perform
#[derive(Debug, Clone, PartialEq, Default, FhirSerde)]
#[fhir_type(name = "TestScriptSetupActionOperation", kind = "backbone_element")]
pub struct TestScriptSetupActionOperation {
    /// Unique id for inter-element referencing
    pub id: Option<std::string::String>,
    /// Additional content defined by implementations
    pub extension: Option<Vec<Extension>>,
    /// Extensions that cannot be ignored even if unrecognized
    #[fhir_serde(rename = "modifierExtension")]
    pub modifier_extension: Option<Vec<Extension>>,
    /// The operation code type that will be executed
    #[fhir_serde(rename = "type")]
    pub r#type: Option<Coding>,
    /// Resource type
    pub resource: Option<String>,
    /// Tracking/logging operation label
    pub label: Option<String>,
    /// Tracking/reporting operation description
    pub description: Option<String>,
    /// Mime type to accept in the payload of the response, with charset etc.
    pub accept: Option<String>,
    /// Mime type of the request payload contents, with charset etc.
    #[fhir_serde(rename = "contentType")]
    pub content_type: Option<Code>,
    /// Server responding to the request
    pub destination: Option<Integer>,
    /// Whether or not to send the request url in encoded format
    #[fhir_serde(rename = "encodeRequestUrl")]
    pub encode_request_url: Boolean,
    /// The HTTP method the test engine MUST use for this operation regardless of any other operation details
    pub method: Option<Code>,
    /// Server initiating the request
    pub origin: Option<Integer>,
    /// Explicitly defined path parameters
    pub params: Option<String>,
    /// Each operation can have one or more header elements
    #[fhir_serde(rename = "requestHeader")]
    pub request_header: Option<Vec<TestScriptSetupActionOperationRequestHeader>>,
    /// Fixture Id of mapped request
    #[fhir_serde(rename = "requestId")]
    pub request_id: Option<String>,
    /// Fixture Id of mapped response
    #[fhir_serde(rename = "responseId")]
    pub response_id: Option<String>,
    /// Fixture Id of body for PUT and POST requests
    #[fhir_serde(rename = "sourceId")]
    pub source_id: Option<String>,
    /// Id of fixture used for extracting the \[id\], \[type\], and \[vid\] for GET requests
    #[fhir_serde(rename = "targetId")]
    pub target_id: Option<String>,
    /// Request URL
    pub url: Option<Url>,
}

/// Each operation can have one or more header elements
#[derive(Debug, Clone, PartialEq, Default, FhirSerde)]
#[fhir_type(name = "TestScriptSetupActionOperationRequestHeader", kind = "backbone_element")]
pub struct TestScriptSetupActionOperationRequestHeader {
    /// Unique id for inter-element referencing
    pub id: Option<std::string::String>,
    /// Additional content defined by implementations
    pub extension: Option<Vec<Extension>>,
    /// Extensions that cannot be ignored even if unrecognized
    #[fhir_serde(rename = "modifierExtension")]
    pub modifier_extension: Option<Vec<Extension>>,
    /// HTTP header field name
    pub field: String,
    /// HTTP headerfield value
    pub value: String,
}

/// A series of required clean up steps
#[derive(Debug, Clone, PartialEq, Default, FhirSerde)]
#[fhir_type(name = "TestScriptTeardown", kind = "backbone_element")]
pub struct TestScriptTeardown {
    /// Unique id for inter-element referencing
    pub id: Option<std::string::String>,
    /// Additional content defined by implementations
    pub extension: Option<Vec<Extension>>,
    /// Extensions that cannot be ignored even if unrecognized
    #[fhir_serde(rename = "modifierExtension")]
    pub modifier_extension: Option<Vec<Extension>>,
    /// One or more teardown operations to perform
    pub action: Vec<TestScriptTeardownAction>,
}

/// One or more teardown operations to perform
#[derive(Debug, Clone, PartialEq, Default, FhirSerde)]
#[fhir_type(name = "TestScriptTeardownAction", kind = "backbone_element")]
pub struct TestScriptTeardownAction {
    /// Unique id for inter-element referencing
    pub id: Option<std::string::String>,
    /// Additional content defined by implementations
    pub extension: Option<Vec<Extension>>,
    /// Extensions that cannot be ignored even if unrecognized
    #[fhir_serde(rename = "modifierExtension")]
    pub modifier_extension: Option<Vec<Extension>>,
    /// The teardown operation to perform
    pub operation: TestScriptSetupActionOperation,
}

/// A test in this script
#[derive(Debug, Clone, PartialEq, Default, FhirSerde)]
#[fhir_type(name = "TestScriptTest", kind = "backbone_element")]
pub struct TestScriptTest {
    /// Unique id for inter-element referencing
    pub id: Option<std::string::String>,
    /// Additional content defined by implementations
    pub extension: Option<Vec<Extension>>,
    /// Extensions that cannot be ignored even if unrecognized
    #[fhir_serde(rename = "modifierExtension")]
    pub modifier_extension: Option<Vec<Extension>>,
    /// Tracking/logging name of this test
    pub name: Option<String>,
    /// Tracking/reporting short description of the test
    pub description: Option<String>,
    /// A test operation or assert to perform
    pub action: Vec<TestScriptTestAction>,
}

/// A test operation or assert to perform
#[derive(Debug, Clone, PartialEq, Default, FhirSerde)]
#[fhir_type(name = "TestScriptTestAction", kind = "backbone_element")]
pub struct TestScriptTestAction {
    /// Unique id for inter-element referencing
    pub id: Option<std::string::String>,
    /// Additional content defined by implementations
    pub extension: Option<Vec<Extension>>,
    /// Extensions that cannot be ignored even if unrecognized
    #[fhir_serde(rename = "modifierExtension")]
    pub modifier_extension: Option<Vec<Extension>>,
    /// The setup operation to perform
    pub operation: Option<TestScriptSetupActionOperation>,
    /// The setup assertion to perform
    pub assert: Option<TestScriptSetupActionAssert>,
}

/// Placeholder for evaluated elements
#[derive(Debug, Clone, PartialEq, Default, FhirSerde)]
#[fhir_type(name = "TestScriptVariable", kind = "backbone_element")]
pub struct TestScriptVariable {
    /// Unique id for inter-element referencing
    pub id: Option<std::string::String>,
    /// Additional content defined by implementations
    pub extension: Option<Vec<Extension>>,
    /// Extensions that cannot be ignored even if unrecognized
    #[fhir_serde(rename = "modifierExtension")]
    pub modifier_extension: Option<Vec<Extension>>,
    /// Descriptive name for this variable
    pub name: String,
    /// Default, hard-coded, or user-defined value for this variable
    #[fhir_serde(rename = "defaultValue")]
    pub default_value: Option<String>,
    /// Natural language description of the variable
    pub description: Option<String>,
    /// The FHIRPath expression against the fixture body
    pub expression: Option<String>,
    /// HTTP header field name for source
    #[fhir_serde(rename = "headerField")]
    pub header_field: Option<String>,
    /// Hint help text for default value to enter
    pub hint: Option<String>,
    /// XPath or JSONPath against the fixture body
    pub path: Option<String>,
    /// Fixture Id of source expression or headerField within this variable
    #[fhir_serde(rename = "sourceId")]
    pub source_id: Option<String>,
}
