use crate::r4::*;
use crate::FhirSerde;

/// FHIR VerificationResult type
///
/// Describes validation requirements, source(s), status and dates for one or
/// more elements
///
/// See: [VerificationResult](http://hl7.org/fhir/StructureDefinition/VerificationResult)
#[derive(Debug, Clone, PartialEq, Default, FhirSerde)]
#[fhir_type(name = "VerificationResult", kind = "domain_resource")]
pub struct VerificationResult {
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
    /// A resource that was validated
    pub target: Option<Vec<Reference>>,
    /// The fhirpath location(s) within the resource that was validated
    #[fhir_serde(rename = "targetLocation")]
    pub target_location: Option<Vec<String>>,
    /// none | initial | periodic
    pub need: Option<CodeableConcept>,
    /// The validation status of the target (attested; validated; in process; requires revalidation; validation failed; revalidation failed)
    pub status: Code,
    /// When the validation status was updated
    #[fhir_serde(rename = "statusDate")]
    pub status_date: Option<DateTime>,
    /// nothing | primary | multiple
    #[fhir_serde(rename = "validationType")]
    pub validation_type: Option<CodeableConcept>,
    /// The primary process by which the target is validated (edit check; value set; primary source; multiple sources; standalone; in context)
    #[fhir_serde(rename = "validationProcess")]
    pub validation_process: Option<Vec<CodeableConcept>>,
    /// Frequency of revalidation
    pub frequency: Option<Timing>,
    /// The date/time validation was last completed (including failed validations)
    #[fhir_serde(rename = "lastPerformed")]
    pub last_performed: Option<DateTime>,
    /// The date when target is next validated, if appropriate
    #[fhir_serde(rename = "nextScheduled")]
    pub next_scheduled: Option<Date>,
    /// fatal | warn | rec-only | none
    #[fhir_serde(rename = "failureAction")]
    pub failure_action: Option<CodeableConcept>,
    /// Information about the primary source(s) involved in validation
    #[fhir_serde(rename = "primarySource")]
    pub primary_source: Option<Vec<VerificationResultPrimarySource>>,
    /// Information about the entity attesting to information
    pub attestation: Option<VerificationResultAttestation>,
    /// Information about the entity validating information
    pub validator: Option<Vec<VerificationResultValidator>>,
}

/// Information about the entity attesting to information
#[derive(Debug, Clone, PartialEq, Default, FhirSerde)]
#[fhir_type(name = "VerificationResultAttestation", kind = "backbone_element")]
pub struct VerificationResultAttestation {
    /// Unique id for inter-element referencing
    pub id: Option<std::string::String>,
    /// Additional content defined by implementations
    pub extension: Option<Vec<Extension>>,
    /// Extensions that cannot be ignored even if unrecognized
    #[fhir_serde(rename = "modifierExtension")]
    pub modifier_extension: Option<Vec<Extension>>,
    /// The individual or organization attesting to information
    pub who: Option<Reference>,
    /// When the who is asserting on behalf of another (organization or individual)
    #[fhir_serde(rename = "onBehalfOf")]
    pub on_behalf_of: Option<Reference>,
    /// The method by which attested information was submitted/retrieved
    #[fhir_serde(rename = "communicationMethod")]
    pub communication_method: Option<CodeableConcept>,
    /// The date the information was attested to
    pub date: Option<Date>,
    /// A digital identity certificate associated with the attestation source
    #[fhir_serde(rename = "sourceIdentityCertificate")]
    pub source_identity_certificate: Option<String>,
    /// A digital identity certificate associated with the proxy entity submitting attested information on behalf of the attestation source
    #[fhir_serde(rename = "proxyIdentityCertificate")]
    pub proxy_identity_certificate: Option<String>,
    /// Proxy signature
    #[fhir_serde(rename = "proxySignature")]
    pub proxy_signature: Option<Signature>,
    /// Attester signature
    #[fhir_serde(rename = "sourceSignature")]
    pub source_signature: Option<Signature>,
}

/// Information about the primary source(s) involved in validation
#[derive(Debug, Clone, PartialEq, Default, FhirSerde)]
#[fhir_type(name = "VerificationResultPrimarySource", kind = "backbone_element")]
pub struct VerificationResultPrimarySource {
    /// Unique id for inter-element referencing
    pub id: Option<std::string::String>,
    /// Additional content defined by implementations
    pub extension: Option<Vec<Extension>>,
    /// Extensions that cannot be ignored even if unrecognized
    #[fhir_serde(rename = "modifierExtension")]
    pub modifier_extension: Option<Vec<Extension>>,
    /// Reference to the primary source
    pub who: Option<Reference>,
    /// Type of primary source (License Board; Primary Education; Continuing Education; Postal Service; Relationship owner; Registration Authority; legal source; issuing source; authoritative source)
    #[fhir_serde(rename = "type")]
    pub r#type: Option<Vec<CodeableConcept>>,
    /// Method for exchanging information with the primary source
    #[fhir_serde(rename = "communicationMethod")]
    pub communication_method: Option<Vec<CodeableConcept>>,
    /// successful | failed | unknown
    #[fhir_serde(rename = "validationStatus")]
    pub validation_status: Option<CodeableConcept>,
    /// When the target was validated against the primary source
    #[fhir_serde(rename = "validationDate")]
    pub validation_date: Option<DateTime>,
    /// yes | no | undetermined
    #[fhir_serde(rename = "canPushUpdates")]
    pub can_push_updates: Option<CodeableConcept>,
    /// specific | any | source
    #[fhir_serde(rename = "pushTypeAvailable")]
    pub push_type_available: Option<Vec<CodeableConcept>>,
}

/// Information about the entity validating information
#[derive(Debug, Clone, PartialEq, Default, FhirSerde)]
#[fhir_type(name = "VerificationResultValidator", kind = "backbone_element")]
pub struct VerificationResultValidator {
    /// Unique id for inter-element referencing
    pub id: Option<std::string::String>,
    /// Additional content defined by implementations
    pub extension: Option<Vec<Extension>>,
    /// Extensions that cannot be ignored even if unrecognized
    #[fhir_serde(rename = "modifierExtension")]
    pub modifier_extension: Option<Vec<Extension>>,
    /// Reference to the organization validating information
    pub organization: Reference,
    /// A digital identity certificate associated with the validator
    #[fhir_serde(rename = "identityCertificate")]
    pub identity_certificate: Option<String>,
    /// Validator signature
    #[fhir_serde(rename = "attestationSignature")]
    pub attestation_signature: Option<Signature>,
}
