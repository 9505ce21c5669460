use crate::r4::*;
use crate::FhirSerde;

/// FHIR Basic type
///
/// Basic is used for handling concepts not yet defined in FHIR, narrative-only
/// resources that don't map to an existing resource, and custom resources not
/// appropriate for inclusion in the FHIR specification.
///
/// See: [Basic](http://hl7.org/fhir/StructureDefinition/Basic)
#[derive(Debug, Clone, PartialEq, Default, FhirSerde)]
#[fhir_type(name = "Basic", kind = "domain_resource")]
pub struct Basic {
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
    /// Business identifier
    pub identifier: Option<Vec<Identifier>>,
    /// Kind of Resource
    pub code: CodeableConcept,
    /// Identifies the focus of this resource
    pub subject: Option<Reference>,
    /// When created
    pub created: Option<Date>,
    /// Who created
    pub author: Option<Reference>,
}
