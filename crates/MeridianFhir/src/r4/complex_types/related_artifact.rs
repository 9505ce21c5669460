use crate::r4::*;
use crate::FhirSerde;

/// FHIR RelatedArtifact type
///
/// Related artifacts such as additional documentation, justification, or
/// bibliographic references.
///
/// See: [RelatedArtifact](http://hl7.org/fhir/StructureDefinition/RelatedArtifact)
#[derive(Debug, Clone, PartialEq, Default, FhirSerde)]
#[fhir_type(name = "RelatedArtifact", kind = "element")]
pub struct RelatedArtifact {
    /// Unique id for inter-element referencing
    pub id: Option<std::string::String>,
    /// Additional content defined by implementations
    pub extension: Option<Vec<Extension>>,
    /// documentation | justification | citation | predecessor | successor | derived-from | depends-on | composed-of
    #[fhir_serde(rename = "type")]
    pub r#type: Code,
    /// Short label
    pub label: Option<String>,
    /// Brief description of the related artifact
    pub display: Option<String>,
    /// Bibliographic citation for the artifact
    pub citation: Option<Markdown>,
    /// Where the artifact can be accessed
    pub url: Option<Url>,
    /// What document is being referenced
    pub document: Option<Attachment>,
    /// What resource is being referenced
    pub resource: Option<Canonical>,
}
