use crate::r4::*;
use crate::FhirSerde;

/// FHIR TestReport type
///
/// A summary of information based on the results of executing a TestScript.
///
/// See: [TestReport](http://hl7.org/fhir/StructureDefinition/TestReport)
#[derive(Debug, Clone, PartialEq, Default, FhirSerde)]
#[fhir_type(name = "TestReport", kind = "domain_resource")]
pub struct TestReport {
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
    /// External identifier
    pub identifier: Option<Identifier>,
    /// Informal name of the executed TestScript
    pub name: Option<String>,
    /// completed | in-progress | waiting | stopped | entered-in-error
    pub status: Code,
    /// Reference to the  version-specific TestScript that was executed to produce this TestReport
    #[fhir_serde(rename = "testScript")]
    pub test_script: Reference,
    /// pass | fail | pending
    pub result: Code,
    /// The final score (percentage of tests passed) resulting from the execution of the TestScript
    pub score: Option<Decimal>,
    /// Name of the tester producing this report (Organization or individual)
    pub tester: Option<String>,
    /// When the TestScript was executed and this TestReport was generated
    pub issued: Option<DateTime>,
    /// A participant in the test execution, either the execution engine, a client, or a server
    pub participant: Option<Vec<TestReportParticipant>>,
    /// The results of the series of required setup operations before the tests were executed
    pub setup: Option<TestReportSetup>,
    /// A test executed from the test script
    pub test: Option<Vec<TestReportTest>>,
    /// The results of running the series of required clean up steps
    pub teardown: Option<TestReportTeardown>,
}

/// A participant in the test execution, either the execution engine, a client, or a server
#[derive(Debug, Clone, PartialEq, Default, FhirSerde)]
#[fhir_type(name = "TestReportParticipant", kind = "backbone_element")]
pub struct TestReportParticipant {
    /// Unique id for inter-element referencing
    pub id: Option<std::string::String>,
    /// Additional content defined by implementations
    pub extension: Option<Vec<Extension>>,
    /// Extensions that cannot be ignored even if unrecognized
    #[fhir_serde(rename = "modifierExtension")]
    pub modifier_extension: Option<Vec<Extension>>,
    /// test-engine | client | server
    #[fhir_serde(rename = "type")]
    pub r#type: Code,
    /// The uri of the participant. An absolute URL is preferred
    pub uri: Uri,
    /// The display name of the participant
    pub display: Option<String>,
}

/// The results of the series of required setup operations before the tests were executed
#[derive(Debug, Clone, PartialEq, Default, FhirSerde)]
#[fhir_type(name = "TestReportSetup", kind = "backbone_element")]
pub struct TestReportSetup {
    /// Unique id for inter-element referencing
    pub id: Option<std::string::String>,
    /// Additional content defined by implementations
    pub extension: Option<Vec<Extension>>,
    /// Extensions that cannot be ignored even if unrecognized
    #[fhir_serde(rename = "modifierExtension")]
    pub modifier_extension: Option<Vec<Extension>>,
    /// A setup operation or assert that was executed
    pub action: Vec<TestReportSetupAction>,
}

/// A setup operation or assert that was executed
#[derive(Debug, Clone, PartialEq, Default, FhirSerde)]
#[fhir_type(name = "TestReportSetupAction", kind = "backbone_element")]
pub struct TestReportSetupAction {
    /// Unique id for inter-element referencing
    pub id: Option<std::string::String>,
    /// Additional content defined by implementations
    pub extension: Option<Vec<Extension>>,
    /// Extensions that cannot be ignored even if unrecognized
    #[fhir_serde(rename = "modifierExtension")]
    pub modifier_extension: Option<Vec<Extension>>,
    /// The operation to perform
    pub operation: Option<TestReportSetupActionOperation>,
    /// The assertion to perform
    pub assert: Option<TestReportSetupActionAssert>,
}

/// The assertion to perform
#[derive(Debug, Clone, PartialEq, Default, FhirSerde)]
#[fhir_type(name = "TestReportSetupActionAssert", kind = "backbone_element")]
pub struct TestReportSetupActionAssert {
    /// Unique id for inter-element referencing
    pub id: Option<std::string::String>,
    /// Additional content defined by implementations
    pub extension: Option<Vec<Extension>>,
    /// Extensions that cannot be ignored even if unrecognized
    #[fhir_serde(rename = "modifierExtension")]
    pub modifier_extension: Option<Vec<Extension>>,
    /// pass | skip | fail | warning | error
    pub result: Code,
    /// A message associated with the result
    pub message: Option<Markdown>,
    /// A link to further details on the result
    pub detail: Option<String>,
}

/// The operation to perform
#[derive(Debug, Clone, PartialEq, Default, FhirSerde)]
#[fhir_type(name = "TestReportSetupActionOperation", kind = "backbone_element")]
pub struct TestReportSetupActionOperation {
    /// Unique id for inter-element referencing
    pub id: Option<std::string::String>,
    /// Additional content defined by implementations
    pub extension: Option<Vec<Extension>>,
    /// Extensions that cannot be ignored even if unrecognized
    #[fhir_serde(rename = "modifierExtension")]
    pub modifier_extension: Option<Vec<Extension>>,
    /// pass | skip | fail | warning | error
    pub result: Code,
    /// A message associated with the result
    pub message: Option<Markdown>,
    /// A link to further details on the result
    pub detail: Option<Uri>,
}

/// The results of running the series of required clean up steps
#[derive(Debug, Clone, PartialEq, Default, FhirSerde)]
#[fhir_type(name = "TestReportTeardown", kind = "backbone_element")]
pub struct TestReportTeardown {
    /// Unique id for inter-element referencing
    pub id: Option<std::string::String>,
    /// Additional content defined by implementations
    pub extension: Option<Vec<Extension>>,
    /// Extensions that cannot be ignored even if unrecognized
    #[fhir_serde(rename = "modifierExtension")]
    pub modifier_extension: Option<Vec<Extension>>,
    /// One or more teardown operations performed
    pub action: Vec<TestReportTeardownAction>,
}

/// One or more teardown operations performed
#[derive(Debug, Clone, PartialEq, Default, FhirSerde)]
#[fhir_type(name = "TestReportTeardownAction", kind = "backbone_element")]
pub struct TestReportTeardownAction {
    /// Unique id for inter-element referencing
    pub id: Option<std::string::String>,
    /// Additional content defined by implementations
    pub extension: Option<Vec<Extension>>,
    /// Extensions that cannot be ignored even if unrecognized
    #[fhir_serde(rename = "modifierExtension")]
    pub modifier_extension: Option<Vec<Extension>>,
    /// The teardown operation performed
    pub operation: TestReportSetupActionOperation,
}

/// A test executed from the test script
#[derive(Debug, Clone, PartialEq, Default, FhirSerde)]
#[fhir_type(name = "TestReportTest", kind = "backbone_element")]
pub struct TestReportTest {
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
    /// A test operation or assert that was performed
    pub action: Vec<TestReportTestAction>,
}

/// A test operation or assert that was performed
#[derive(Debug, Clone, PartialEq, Default, FhirSerde)]
#[fhir_type(name = "TestReportTestAction", kind = "backbone_element")]
pub struct TestReportTestAction {
    /// Unique id for inter-element referencing
    pub id: Option<std::string::String>,
    /// Additional content defined by implementations
    pub extension: Option<Vec<Extension>>,
    /// Extensions that cannot be ignored even if unrecognized
    #[fhir_serde(rename = "modifierExtension")]
    pub modifier_extension: Option<Vec<Extension>>,
    /// The operation performed
    pub operation: Option<TestReportSetupActionOperation>,
    /// The assertion performed
    pub assert: Option<TestReportSetupActionAssert>,
}
