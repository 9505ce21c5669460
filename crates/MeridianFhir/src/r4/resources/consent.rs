use crate::r4::*;
use crate::FhirSerde;

/// Choice of types for the source\[x\] field in Consent
#[derive(Debug, Clone, PartialEq, FhirSerde)]
#[fhir_choice_element(base_name = "source")]
pub enum ConsentSource {
    /// Variant accepting the Attachment type.
    #[fhir_serde(rename = "sourceAttachment")]
    Attachment(Attachment),
    /// Variant accepting the Reference type.
    #[fhir_serde(rename = "sourceReference")]
    Reference(Reference),
}

/// FHIR Consent type
///
/// A record of a healthcare consumer’s choices, which permits or denies
/// identified recipient(s) or recipient role(s) to perform one or more actions
/// within a given policy context, for specific purposes and periods of time.
///
/// See: [Consent](http://hl7.org/fhir/StructureDefinition/Consent)
#[derive(Debug, Clone, PartialEq, Default, FhirSerde)]
#[fhir_type(name = "Consent", kind = "domain_resource")]
pub struct Consent {
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
    /// Identifier for this record (external references)
    pub identifier: Option<Vec<Identifier>>,
    /// Indicates the current state of this consent
    pub status: Code,
    /// Which of the four areas this resource covers (extensible)
    pub scope: CodeableConcept,
    /// Classification of the consent statement - for indexing/retrieval
    pub category: Vec<CodeableConcept>,
    /// Who the consent applies to
    pub patient: Option<Reference>,
    /// When this Consent was created or indexed
    #[fhir_serde(rename = "dateTime")]
    pub date_time: Option<DateTime>,
    /// Who is agreeing to the policy and rules
    pub performer: Option<Vec<Reference>>,
    /// Custodian of the consent
    pub organization: Option<Vec<Reference>>,
    /// Source from which this consent is taken
    #[fhir_serde(flatten)]
    pub source: Option<ConsentSource>,
    /// Policies covered by this consent
    pub policy: Option<Vec<ConsentPolicy>>,
    /// Regulation that this consents to
    #[fhir_serde(rename = "policyRule")]
    pub policy_rule: Option<CodeableConcept>,
    /// Consent Verified by patient or family
    pub verification: Option<Vec<ConsentVerification>>,
    /// Constraints to the base Consent.policyRule
    pub provision: Option<ConsentProvision>,
}

/// Policies covered by this consent
#[derive(Debug, Clone, PartialEq, Default, FhirSerde)]
#[fhir_type(name = "ConsentPolicy", kind = "backbone_element")]
pub struct ConsentPolicy {
    /// Unique id for inter-element referencing
    pub id: Option<std::string::String>,
    /// Additional content defined by implementations
    pub extension: Option<Vec<Extension>>,
    /// Extensions that cannot be ignored even if unrecognized
    #[fhir_serde(rename = "modifierExtension")]
    pub modifier_extension: Option<Vec<Extension>>,
    /// Enforcement source for policy
    pub authority: Option<String>,
    /// Specific policy covered by this consent
    pub uri: Option<String>,
}

/// Constraints to the base Consent.policyRule
#[derive(Debug, Clone, PartialEq, Default, FhirSerde)]
#[fhir_type(name = "ConsentProvision", kind = "backbone_element")]
pub struct ConsentProvision {
    /// Unique id for inter-element referencing
    pub id: Option<std::string::String>,
    /// Additional content defined by implementations
    pub extension: Option<Vec<Extension>>,
    /// Extensions that cannot be ignored even if unrecognized
    #[fhir_serde(rename = "modifierExtension")]
    pub modifier_extension: Option<Vec<Extension>>,
    /// Action to take - permit or deny - when the rule conditions are met. Not permitted in root rule, required in all nested rules.
    #[fhir_serde(rename = "type")]
    pub r#type: Option<Code>,
    /// Timeframe for this rule
    pub period: Option<Period>,
    /// Who|what controlled by this rule (or group, by role)
    pub actor: Option<Vec<ConsentProvisionActor>>,
    /// Actions controlled by this rule
    pub action: Option<Vec<CodeableConcept>>,
    /// Security Labels that define affected resources
    #[fhir_serde(rename = "securityLabel")]
    pub security_label: Option<Vec<Coding>>,
    /// Context of activities covered by this rule
    pub purpose: Option<Vec<Coding>>,
    /// e.g. Resource Type, Profile, CDA, etc..
    pub class: Option<Vec<Coding>>,
    /// e.g. LOINC or SNOMED CT code, etc. in the content.
    pub code: Option<Vec<CodeableConcept>>,
    /// Timeframe for data controlled by this rule
    #[fhir_serde(rename = "dataPeriod")]
    pub data_period: Option<Period>,
    /// Data controlled by this rule
    pub data: Option<Vec<ConsentProvisionData>>,
    /// Nested Exception Rules
    pub provision: Option<Vec<ConsentProvision>>,
}

/// Who|what controlled by this rule (or group, by role)
#[derive(Debug, Clone, PartialEq, Default, FhirSerde)]
#[fhir_type(name = "ConsentProvisionActor", kind = "backbone_element")]
pub struct ConsentProvisionActor {
    /// Unique id for inter-element referencing
    pub id: Option<std::string::String>,
    /// Additional content defined by implementations
    pub extension: Option<Vec<Extension>>,
    /// Extensions that cannot be ignored even if unrecognized
    #[fhir_serde(rename = "modifierExtension")]
    pub modifier_extension: Option<Vec<Extension>>,
    /// How the actor is involved
    pub role: CodeableConcept,
    /// Resource for the actor (or group, by role)
    pub reference: Reference,
}

/// Data controlled by this rule
#[derive(Debug, Clone, PartialEq, Default, FhirSerde)]
#[fhir_type(name = "ConsentProvisionData", kind = "backbone_element")]
pub struct ConsentProvisionData {
    /// Unique id for inter-element referencing
    pub id: Option<std::string::String>,
    /// Additional content defined by implementations
    pub extension: Option<Vec<Extension>>,
    /// Extensions that cannot be ignored even if unrecognized
    #[fhir_serde(rename = "modifierExtension")]
    pub modifier_extension: Option<Vec<Extension>>,
    /// How the resource reference is interpreted when testing consent restrictions
    pub meaning: Code,
    /// The actual data reference
    pub reference: Reference,
}

/// Consent Verified by patient or family
#[derive(Debug, Clone, PartialEq, Default, FhirSerde)]
#[fhir_type(name = "ConsentVerification", kind = "backbone_element")]
pub struct ConsentVerification {
    /// Unique id for inter-element referencing
    pub id: Option<std::string::String>,
    /// Additional content defined by implementations
    pub extension: Option<Vec<Extension>>,
    /// Extensions that cannot be ignored even if unrecognized
    #[fhir_serde(rename = "modifierExtension")]
    pub modifier_extension: Option<Vec<Extension>>,
    /// Has been verified
    pub verified: Boolean,
    /// Person who verified
    #[fhir_serde(rename = "verifiedWith")]
    pub verified_with: Option<Reference>,
    /// When consent verified
    #[fhir_serde(rename = "verificationDate")]
    pub verification_date: Option<DateTime>,
}
