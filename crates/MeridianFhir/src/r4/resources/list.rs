use crate::r4::*;
use crate::FhirSerde;

/// FHIR List type
///
/// A list is a curated collection of resources.
///
/// See: [List](http://hl7.org/fhir/StructureDefinition/List)
#[derive(Debug, Clone, PartialEq, Default, FhirSerde)]
#[fhir_type(name = "List", kind = "domain_resource")]
pub struct List {
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
    /// current | retired | entered-in-error
    pub status: Code,
    /// working | snapshot | changes
    pub mode: Code,
    /// Descriptive name for the list
    pub title: Option<String>,
    /// What the purpose of this list is
    pub code: Option<CodeableConcept>,
    /// If all resources have the same subject
    pub subject: Option<Reference>,
    /// Context in which list created
    pub encounter: Option<Reference>,
    /// When the list was prepared
    pub date: Option<DateTime>,
    /// Who and/or what defined the list contents (aka Author)
    pub source: Option<Reference>,
    /// What order the list has
    #[fhir_serde(rename = "orderedBy")]
    pub ordered_by: Option<CodeableConcept>,
    /// Comments about the list
    pub note: Option<Vec<Annotation>>,
    /// Entries in the list
    pub entry: Option<Vec<ListEntry>>,
    /// Why list is empty
    #[fhir_serde(rename = "emptyReason")]
    pub empty_reason: Option<CodeableConcept>,
}

/// Entries in the list
#[derive(Debug, Clone, PartialEq, Default, FhirSerde)]
#[fhir_type(name = "ListEntry", kind = "backbone_element")]
pub struct ListEntry {
    /// Unique id for inter-element referencing
    pub id: Option<std::string::String>,
    /// Additional content defined by implementations
    pub extension: Option<Vec<Extension>>,
    /// Extensions that cannot be ignored even if unrecognized
    #[fhir_serde(rename = "modifierExtension")]
    pub modifier_extension: Option<Vec<Extension>>,
    /// Status/Workflow information about this item
    pub flag: Option<CodeableConcept>,
    /// If this item is actually marked as deleted
    pub deleted: Option<Boolean>,
    /// When item added to list
    pub date: Option<DateTime>,
    /// Actual entry
    pub item: Reference,
}
