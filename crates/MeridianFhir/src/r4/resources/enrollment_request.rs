use crate::r4::*;
use crate::FhirSerde;

/// FHIR EnrollmentRequest type
///
/// This resource provides the insurance enrollment details to the insurer
/// regarding a specified coverage.
///
/// See: [EnrollmentRequest](http://hl7.org/fhir/StructureDefinition/EnrollmentRequest)
#[derive(Debug, Clone, PartialEq, Default, FhirSerde)]
#[fhir_type(name = "EnrollmentRequest", kind = "domain_resource")]
pub struct EnrollmentRequest {
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
    /// Creation date
    pub created: Option<DateTime>,
    /// Target
    pub insurer: Option<Reference>,
    /// Responsible practitioner
    pub provider: Option<Reference>,
    /// The subject to be enrolled
    pub candidate: Option<Reference>,
    /// Insurance information
    pub coverage: Option<Reference>,
}
