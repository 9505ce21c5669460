use crate::r4::*;
use crate::FhirSerde;

/// FHIR OperationOutcome type
///
/// A collection of error, warning, or information messages that result from a
/// system action.
///
/// See: [OperationOutcome](http://hl7.org/fhir/StructureDefinition/OperationOutcome)
#[derive(Debug, Clone, PartialEq, Default, FhirSerde)]
#[fhir_type(name = "OperationOutcome", kind = "domain_resource")]
pub struct OperationOutcome {
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
    /// A single issue associated with the action
    pub issue: Vec<OperationOutcomeIssue>,
}

/// A single issue associated with the action
#[derive(Debug, Clone, PartialEq, Default, FhirSerde)]
#[fhir_type(name = "OperationOutcomeIssue", kind = "backbone_element")]
pub struct OperationOutcomeIssue {
    /// Unique id for inter-element referencing
    pub id: Option<std::string::String>,
    /// Additional content defined by implementations
    pub extension: Option<Vec<Extension>>,
    /// Extensions that cannot be ignored even if unrecognized
    #[fhir_serde(rename = "modifierExtension")]
    pub modifier_extension: Option<Vec<Extension>>,
    /// fatal | error | warning | information
    pub severity: Code,
    /// Error or warning code
    pub code: Code,
    /// Additional details about the error
    pub details: Option<CodeableConcept>,
    /// Additional diagnostic information about the issue
    pub diagnostics: Option<String>,
    /// Deprecated: Path of element(s) related to issue
    pub location: Option<Vec<String>>,
    /// FHIRPath of element(s) related to issue
    pub expression: Option<Vec<String>>,
}
