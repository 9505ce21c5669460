use crate::r4::*;
use crate::FhirSerde;

/// Choice of types for the source\[x\] field in ConceptMap
#[derive(Debug, Clone, PartialEq, FhirSerde)]
#[fhir_choice_element(base_name = "source")]
pub enum ConceptMapSource {
    /// Variant accepting the Uri type.
    #[fhir_serde(rename = "sourceUri")]
    Uri(Uri),
    /// Variant accepting the Canonical type.
    #[fhir_serde(rename = "sourceCanonical")]
    Canonical(Canonical),
}

/// Choice of types for the target\[x\] field in ConceptMap
#[derive(Debug, Clone, PartialEq, FhirSerde)]
#[fhir_choice_element(base_name = "target")]
pub enum ConceptMapTarget {
    /// Variant accepting the Uri type.
    #[fhir_serde(rename = "targetUri")]
    Uri(Uri),
    /// Variant accepting the Canonical type.
    #[fhir_serde(rename = "targetCanonical")]
    Canonical(Canonical),
}

/// FHIR ConceptMap type
///
/// A statement of relationships from one set of concepts to one or more other
/// concepts - either concepts in code systems, or data element/data element
/// concepts, or classes in class models.
///
/// See: [ConceptMap](http://hl7.org/fhir/StructureDefinition/ConceptMap)
#[derive(Debug, Clone, PartialEq, Default, FhirSerde)]
#[fhir_type(name = "ConceptMap", kind = "domain_resource")]
pub struct ConceptMap {
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
    /// Canonical identifier for this concept map, represented as a URI (globally unique)
    pub url: Option<Uri>,
    /// Additional identifier for the concept map
    pub identifier: Option<Identifier>,
    /// Business version of the concept map
    pub version: Option<String>,
    /// Name for this concept map (computer friendly)
    pub name: Option<String>,
    /// Name for this concept map (human friendly)
    pub title: Option<String>,
    /// draft | active | retired | unknown
    pub status: Code,
    /// For testing purposes, not real usage
    pub experimental: Option<Boolean>,
    /// Date last changed
    pub date: Option<DateTime>,
    /// Name of the publisher (organization or individual)
    pub publisher: Option<String>,
    /// Contact details for the publisher
    pub contact: Option<Vec<ContactDetail>>,
    /// Natural language description of the concept map
    pub description: Option<Markdown>,
    /// The context that the content is intended to support
    #[fhir_serde(rename = "useContext")]
    pub use_context: Option<Vec<UsageContext>>,
    /// Intended jurisdiction for concept map (if applicable)
    pub jurisdiction: Option<Vec<CodeableConcept>>,
    /// Why this concept map is defined
    pub purpose: Option<Markdown>,
    /// Use and/or publishing restrictions
    pub copyright: Option<Markdown>,
    /// The source value set that contains the concepts that are being mapped
    #[fhir_serde(flatten)]
    pub source: Option<ConceptMapSource>,
    /// The target value set which provides context for the mappings
    #[fhir_serde(flatten)]
    pub target: Option<ConceptMapTarget>,
    /// Same source and target systems
    pub group: Option<Vec<ConceptMapGroup>>,
}

/// Same source and target systems
#[derive(Debug, Clone, PartialEq, Default, FhirSerde)]
#[fhir_type(name = "ConceptMapGroup", kind = "backbone_element")]
pub struct ConceptMapGroup {
    /// Unique id for inter-element referencing
    pub id: Option<std::string::String>,
    /// Additional content defined by implementations
    pub extension: Option<Vec<Extension>>,
    /// Extensions that cannot be ignored even if unrecognized
    #[fhir_serde(rename = "modifierExtension")]
    pub modifier_extension: Option<Vec<Extension>>,
    /// Source system where concepts to be mapped are defined
    pub source: Option<Uri>,
    /// Specific version of the  code system
    #[fhir_serde(rename = "sourceVersion")]
    pub source_version: Option<String>,
    /// Target system that the concepts are to be mapped to
    pub target: Option<Uri>,
    /// Specific version of the  code system
    #[fhir_serde(rename = "targetVersion")]
    pub target_version: Option<String>,
    /// Mappings for a concept from the source set
    pub element: Vec<ConceptMapGroupElement>,
    /// What to do when there is no mapping for the source concept
    pub unmapped: Option<ConceptMapGroupUnmapped>,
}

/// Mappings for a concept from the source set
#[derive(Debug, Clone, PartialEq, Default, FhirSerde)]
#[fhir_type(name = "ConceptMapGroupElement", kind = "backbone_element")]
pub struct ConceptMapGroupElement {
    /// Unique id for inter-element referencing
    pub id: Option<std::string::String>,
    /// Additional content defined by implementations
    pub extension: Option<Vec<Extension>>,
    /// Extensions that cannot be ignored even if unrecognized
    #[fhir_serde(rename = "modifierExtension")]
    pub modifier_extension: Option<Vec<Extension>>,
    /// Identifies element being mapped
    pub code: Option<Code>,
    /// Display for the code
    pub display: Option<String>,
    /// Concept in target system for element
    pub target: Option<Vec<ConceptMapGroupElementTarget>>,
}

/// Concept in target system for element
#[derive(Debug, Clone, PartialEq, Default, FhirSerde)]
#[fhir_type(name = "ConceptMapGroupElementTarget", kind = "backbone_element")]
pub struct ConceptMapGroupElementTarget {
    /// Unique id for inter-element referencing
    pub id: Option<std::string::String>,
    /// Additional content defined by implementations
    pub extension: Option<Vec<Extension>>,
    /// Extensions that cannot be ignored even if unrecognized
    #[fhir_serde(rename = "modifierExtension")]
    pub modifier_extension: Option<Vec<Extension>>,
    /// Code that identifies the target element
    pub code: Option<Code>,
    /// Display for the code
    pub display: Option<String>,
    /// relatedto | equivalent | equal | wider | subsumes | narrower | specializes | inexact | unmatched | disjoint
    pub equivalence: Code,
    /// Description of status/issues in mapping
    pub comment: Option<String>,
    /// Other elements required for this mapping (from context)
    #[fhir_serde(rename = "dependsOn")]
    pub depends_on: Option<Vec<ConceptMapGroupElementTargetDependsOn>>,
    /// Other concepts that this mapping also produces
    pub product: Option<Vec<ConceptMapGroupElementTargetDependsOn>>,
}

/// Other elements required for this mapping (from context)
#[derive(Debug, Clone, PartialEq, Default, FhirSerde)]
#[fhir_type(name = "ConceptMapGroupElementTargetDependsOn", kind = "backbone_element")]
pub struct ConceptMapGroupElementTargetDependsOn {
    /// Unique id for inter-element referencing
    pub id: Option<std::string::String>,
    /// Additional content defined by implementations
    pub extension: Option<Vec<Extension>>,
    /// Extensions that cannot be ignored even if unrecognized
    #[fhir_serde(rename = "modifierExtension")]
    pub modifier_extension: Option<Vec<Extension>>,
    /// Reference to property mapping depends on
    pub property: Uri,
    /// Code System (if necessary)
    pub system: Option<Canonical>,
    /// Value of the referenced element
    pub value: String,
    /// Display for the code (if value is a code)
    pub display: Option<String>,
}

/// What to do when there is no mapping for the source concept
#[derive(Debug, Clone, PartialEq, Default, FhirSerde)]
#[fhir_type(name = "ConceptMapGroupUnmapped", kind = "backbone_element")]
pub struct ConceptMapGroupUnmapped {
    /// Unique id for inter-element referencing
    pub id: Option<std::string::String>,
    /// Additional content defined by implementations
    pub extension: Option<Vec<Extension>>,
    /// Extensions that cannot be ignored even if unrecognized
    #[fhir_serde(rename = "modifierExtension")]
    pub modifier_extension: Option<Vec<Extension>>,
    /// provided | fixed | other-map
    pub mode: Code,
    /// Fixed code when mode = fixed
    pub code: Option<Code>,
    /// Display for the code
    pub display: Option<String>,
    /// canonical reference to an additional ConceptMap to use for mapping if the source concept is unmapped
    pub url: Option<Canonical>,
}
