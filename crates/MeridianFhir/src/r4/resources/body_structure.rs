use crate::r4::*;
use crate::FhirSerde;

/// FHIR BodyStructure type
///
/// Record details about an anatomical structure. This resource may be used when
/// a coded concept does not provide the necessary detail needed for the use
/// case.
///
/// See: [BodyStructure](http://hl7.org/fhir/StructureDefinition/BodyStructure)
#[derive(Debug, Clone, PartialEq, Default, FhirSerde)]
#[fhir_type(name = "BodyStructure", kind = "domain_resource")]
pub struct BodyStructure {
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
    /// Bodystructure identifier
    pub identifier: Option<Vec<Identifier>>,
    /// Whether this record is in active use
    pub active: Option<Boolean>,
    /// Kind of Structure
    pub morphology: Option<CodeableConcept>,
    /// Body site
    pub location: Option<CodeableConcept>,
    /// Body site modifier
    #[fhir_serde(rename = "locationQualifier")]
    pub location_qualifier: Option<Vec<CodeableConcept>>,
    /// Text description
    pub description: Option<String>,
    /// Attached images
    pub image: Option<Vec<Attachment>>,
    /// Who this is about
    pub patient: Reference,
}
