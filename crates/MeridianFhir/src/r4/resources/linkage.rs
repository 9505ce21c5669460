use crate::r4::*;
use crate::FhirSerde;

/// FHIR Linkage type
///
/// Identifies two or more records (resource instances) that refer to the same
/// real-world "occurrence".
///
/// See: [Linkage](http://hl7.org/fhir/StructureDefinition/Linkage)
#[derive(Debug, Clone, PartialEq, Default, FhirSerde)]
#[fhir_type(name = "Linkage", kind = "domain_resource")]
pub struct Linkage {
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
    /// Whether this linkage assertion is active or not
    pub active: Option<Boolean>,
    /// Who is responsible for linkages
    pub author: Option<Reference>,
    /// Item to be linked
    pub item: Vec<LinkageItem>,
}

/// Item to be linked
#[derive(Debug, Clone, PartialEq, Default, FhirSerde)]
#[fhir_type(name = "LinkageItem", kind = "backbone_element")]
pub struct LinkageItem {
    /// Unique id for inter-element referencing
    pub id: Option<std::string::String>,
    /// Additional content defined by implementations
    pub extension: Option<Vec<Extension>>,
    /// Extensions that cannot be ignored even if unrecognized
    #[fhir_serde(rename = "modifierExtension")]
    pub modifier_extension: Option<Vec<Extension>>,
    /// source | alternate | historical
    #[fhir_serde(rename = "type")]
    pub r#type: Code,
    /// Resource being linked
    pub resource: Reference,
}
