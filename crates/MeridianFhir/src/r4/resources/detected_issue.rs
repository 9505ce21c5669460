use crate::r4::*;
use crate::FhirSerde;

/// Choice of types for the identified\[x\] field in DetectedIssue
#[derive(Debug, Clone, PartialEq, FhirSerde)]
#[fhir_choice_element(base_name = "identified")]
pub enum DetectedIssueIdentified {
    /// Variant accepting the DateTime type.
    #[fhir_serde(rename = "identifiedDateTime")]
    DateTime(DateTime),
    /// Variant accepting the Period type.
    #[fhir_serde(rename = "identifiedPeriod")]
    Period(Period),
}

/// FHIR DetectedIssue type
///
/// Indicates an actual or potential clinical issue with or between one or more
/// active or proposed clinical actions for a patient; e.g. Drug-drug
/// interaction, Ineffective treatment frequency, Procedure-condition conflict,
/// etc.
///
/// See: [DetectedIssue](http://hl7.org/fhir/StructureDefinition/DetectedIssue)
#[derive(Debug, Clone, PartialEq, Default, FhirSerde)]
#[fhir_type(name = "DetectedIssue", kind = "domain_resource")]
pub struct DetectedIssue {
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
    /// Unique id for the detected issue
    pub identifier: Option<Vec<Identifier>>,
    /// registered | preliminary | final | amended +
    pub status: Code,
    /// Issue Category, e.g. drug-drug, duplicate therapy, etc.
    pub code: Option<CodeableConcept>,
    /// high | moderate | low
    pub severity: Option<Code>,
    /// Associated patient
    pub patient: Option<Reference>,
    /// When identified
    #[fhir_serde(flatten)]
    pub identified: Option<DetectedIssueIdentified>,
    /// The provider or device that identified the issue
    pub author: Option<Reference>,
    /// Problem resource
    pub implicated: Option<Vec<Reference>>,
    /// Supporting evidence
    pub evidence: Option<Vec<DetectedIssueEvidence>>,
    /// Description and context
    pub detail: Option<String>,
    /// Authority for issue
    pub reference: Option<Uri>,
    /// Step taken to address
    pub mitigation: Option<Vec<DetectedIssueMitigation>>,
}

/// Supporting evidence
#[derive(Debug, Clone, PartialEq, Default, FhirSerde)]
#[fhir_type(name = "DetectedIssueEvidence", kind = "backbone_element")]
pub struct DetectedIssueEvidence {
    /// Unique id for inter-element referencing
    pub id: Option<std::string::String>,
    /// Additional content defined by implementations
    pub extension: Option<Vec<Extension>>,
    /// Extensions that cannot be ignored even if unrecognized
    #[fhir_serde(rename = "modifierExtension")]
    pub modifier_extension: Option<Vec<Extension>>,
    /// Manifestation
    pub code: Option<Vec<CodeableConcept>>,
    /// Supporting information
    pub detail: Option<Vec<Reference>>,
}

/// Step taken to address
#[derive(Debug, Clone, PartialEq, Default, FhirSerde)]
#[fhir_type(name = "DetectedIssueMitigation", kind = "backbone_element")]
pub struct DetectedIssueMitigation {
    /// Unique id for inter-element referencing
    pub id: Option<std::string::String>,
    /// Additional content defined by implementations
    pub extension: Option<Vec<Extension>>,
    /// Extensions that cannot be ignored even if unrecognized
    #[fhir_serde(rename = "modifierExtension")]
    pub modifier_extension: Option<Vec<Extension>>,
    /// What mitigation?
    pub action: CodeableConcept,
    /// Date committed
    pub date: Option<DateTime>,
    /// Who is committing?
    pub author: Option<Reference>,
}
