use crate::r4::*;
use crate::FhirSerde;

/// FHIR CatalogEntry type
///
/// Catalog entries are wrappers that contextualize items included in a catalog.
///
/// See: [CatalogEntry](http://hl7.org/fhir/StructureDefinition/CatalogEntry)
#[derive(Debug, Clone, PartialEq, Default, FhirSerde)]
#[fhir_type(name = "CatalogEntry", kind = "domain_resource")]
pub struct CatalogEntry {
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
    /// Unique identifier of the catalog item
    pub identifier: Option<Vec<Identifier>>,
    /// The type of item - medication, device, service, protocol or other
    #[fhir_serde(rename = "type")]
    pub r#type: Option<CodeableConcept>,
    /// Whether the entry represents an orderable item
    pub orderable: Boolean,
    /// The item that is being defined
    #[fhir_serde(rename = "referencedItem")]
    pub referenced_item: Reference,
    /// Any additional identifier(s) for the catalog item, in the same granularity or concept
    #[fhir_serde(rename = "additionalIdentifier")]
    pub additional_identifier: Option<Vec<Identifier>>,
    /// Classification (category or class) of the item entry
    pub classification: Option<Vec<CodeableConcept>>,
    /// draft | active | retired | unknown
    pub status: Option<Code>,
    /// The time period in which this catalog entry is expected to be active
    #[fhir_serde(rename = "validityPeriod")]
    pub validity_period: Option<Period>,
    /// The date until which this catalog entry is expected to be active
    #[fhir_serde(rename = "validTo")]
    pub valid_to: Option<DateTime>,
    /// When was this catalog last updated
    #[fhir_serde(rename = "lastUpdated")]
    pub last_updated: Option<DateTime>,
    /// Additional characteristics of the catalog entry
    #[fhir_serde(rename = "additionalCharacteristic")]
    pub additional_characteristic: Option<Vec<CodeableConcept>>,
    /// Additional classification of the catalog entry
    #[fhir_serde(rename = "additionalClassification")]
    pub additional_classification: Option<Vec<CodeableConcept>>,
    /// An item that this catalog entry is related to
    #[fhir_serde(rename = "relatedEntry")]
    pub related_entry: Option<Vec<CatalogEntryRelatedEntry>>,
}

/// An item that this catalog entry is related to
#[derive(Debug, Clone, PartialEq, Default, FhirSerde)]
#[fhir_type(name = "CatalogEntryRelatedEntry", kind = "backbone_element")]
pub struct CatalogEntryRelatedEntry {
    /// Unique id for inter-element referencing
    pub id: Option<std::string::String>,
    /// Additional content defined by implementations
    pub extension: Option<Vec<Extension>>,
    /// Extensions that cannot be ignored even if unrecognized
    #[fhir_serde(rename = "modifierExtension")]
    pub modifier_extension: Option<Vec<Extension>>,
    /// triggers | is-replaced-by
    pub relationtype: Code,
    /// The reference to the related item
    pub item: Reference,
}
