use crate::r4::*;
use crate::FhirSerde;

/// FHIR Binary type
///
/// A resource that represents the data of a single raw artifact as digital
/// content accessible in its native format. A Binary resource can contain any
/// content, whether text, image, pdf, zip archive, etc.
///
/// See: [Binary](http://hl7.org/fhir/StructureDefinition/Binary)
#[derive(Debug, Clone, PartialEq, Default, FhirSerde)]
#[fhir_type(name = "Binary", kind = "resource")]
pub struct Binary {
    /// Logical id of this artifact
    pub id: Option<Id>,
    /// Metadata about the resource
    pub meta: Option<Meta>,
    /// A set of rules under which this content was created
    #[fhir_serde(rename = "implicitRules")]
    pub implicit_rules: Option<Uri>,
    /// Language of the resource content
    pub language: Option<Code>,
    /// MimeType of the binary content
    #[fhir_serde(rename = "contentType")]
    pub content_type: Code,
    /// Identifies another resource to use as proxy when enforcing access control
    #[fhir_serde(rename = "securityContext")]
    pub security_context: Option<Reference>,
    /// The actual content
    pub data: Option<Base64Binary>,
}
