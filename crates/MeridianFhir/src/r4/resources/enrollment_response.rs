use crate::r4::*;
use crate::FhirSerde;

/// FHIR EnrollmentResponse type
///
/// This resource provides enrollment and plan details from the processing of an
/// EnrollmentRequest resource.
///
/// See: [EnrollmentResponse](http://hl7.org/fhir/StructureDefinition/EnrollmentResponse)
#[derive(Debug, Clone, PartialEq, Default, FhirSerde)]
#[fhir_type(name = "EnrollmentResponse", kind = "domain_resource")]
pub struct EnrollmentResponse {
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
    /// Business Identifier
    pub identifier: Option<Vec<Identifier>>,
    /// active | cancelled | draft | entered-in-error
    pub status: Option<Code>,
    /// Claim reference
    pub request: Option<Reference>,
    /// queued | complete | error | partial
    pub outcome: Option<Code>,
    /// Disposition Message
    pub disposition: Option<String>,
    /// Creation date
    pub created: Option<DateTime>,
    /// Insurer
    pub organization: Option<Reference>,
    /// Responsible practitioner
    #[fhir_serde(rename = "requestProvider")]
    pub request_provider: Option<Reference>,
}
