use crate::r4::*;
use crate::FhirSerde;

/// FHIR CodeSystem type
///
/// The CodeSystem resource is used to declare the existence of and describe a
/// code system or code system supplement and its key properties, and optionally
/// define a part or all of its content.
///
/// See: [CodeSystem](http://hl7.org/fhir/StructureDefinition/CodeSystem)
#[derive(Debug, Clone, PartialEq, Default, FhirSerde)]
#[fhir_type(name = "CodeSystem", kind = "domain_resource")]
pub struct CodeSystem {
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
    /// Canonical identifier for this code system, represented as a URI (globally unique) (Coding.system)
    pub url: Option<Uri>,
    /// Additional identifier for the code system (business identifier)
    pub identifier: Option<Vec<Identifier>>,
    /// Business version of the code system (Coding.version)
    pub version: Option<String>,
    /// Name for this code system (computer friendly)
    pub name: Option<String>,
    /// Name for this code system (human friendly)
    pub title: Option<String>,
    /// The date (and optionally time) when the code system resource was created or revised
    pub status: Code,
    /// For testing purposes, not real usage
    pub experimental: Option<Boolean>,
    /// Date last changed
    pub date: Option<DateTime>,
    /// Name of the publisher (organization or individual)
    pub publisher: Option<String>,
    /// Contact details for the publisher
    pub contact: Option<Vec<ContactDetail>>,
    /// Natural language description of the code system
    pub description: Option<Markdown>,
    /// The context that the content is intended to support
    #[fhir_serde(rename = "useContext")]
    pub use_context: Option<Vec<UsageContext>>,
    /// Intended jurisdiction for code system (if applicable)
    pub jurisdiction: Option<Vec<CodeableConcept>>,
    /// Why this code system is defined
    pub purpose: Option<Markdown>,
    /// Use and/or publishing restrictions
    pub copyright: Option<Markdown>,
    /// If code comparison is case sensitive
    #[fhir_serde(rename = "caseSensitive")]
    pub case_sensitive: Option<Boolean>,
    /// Canonical reference to the value set with entire code system
    #[fhir_serde(rename = "valueSet")]
    pub value_set: Option<Canonical>,
    /// The meaning of the hierarchy of concepts as represented in this resource
    #[fhir_serde(rename = "hierarchyMeaning")]
    pub hierarchy_meaning: Option<Code>,
    /// If code system defines a compositional grammar
    pub compositional: Option<Boolean>,
    /// If definitions are not stable
    #[fhir_serde(rename = "versionNeeded")]
    pub version_needed: Option<Boolean>,
    /// The extent of the content of the code system (the concepts and codes it defines) are represented in this resource instance
    pub content: Code,
    /// Canonical URL of Code System this adds designations and properties to
    pub supplements: Option<String>,
    /// Total concepts in the code system
    pub count: Option<UnsignedInt>,
    /// Filter that can be used in a value set
    pub filter: Option<Vec<CodeSystemFilter>>,
    /// Additional information supplied about each concept
    pub property: Option<Vec<CodeSystemProperty>>,
    /// Concepts in the code system
    pub concept: Option<Vec<CodeSystemConcept>>,
}

/// Concepts in the code system
#[derive(Debug, Clone, PartialEq, Default, FhirSerde)]
#[fhir_type(name = "CodeSystemConcept", kind = "backbone_element")]
pub struct CodeSystemConcept {
    /// Unique id for inter-element referencing
    pub id: Option<std::string::String>,
    /// Additional content defined by implementations
    pub extension: Option<Vec<Extension>>,
    /// Extensions that cannot be ignored even if unrecognized
    #[fhir_serde(rename = "modifierExtension")]
    pub modifier_extension: Option<Vec<Extension>>,
    /// Code that identifies concept
    pub code: String,
    /// Text to display to the user
    pub display: Option<String>,
    /// Formal definition
    pub definition: Option<String>,
    /// Additional representations for the concept
    pub designation: Option<Vec<CodeSystemConceptDesignation>>,
    /// Property value for the concept
    pub property: Option<Vec<CodeSystemConceptProperty>>,
    /// Child Concepts (is-a/contains/categorizes)
    pub concept: Option<Vec<CodeSystemConcept>>,
}

/// Additional representations for the concept
#[derive(Debug, Clone, PartialEq, Default, FhirSerde)]
#[fhir_type(name = "CodeSystemConceptDesignation", kind = "backbone_element")]
pub struct CodeSystemConceptDesignation {
    /// Unique id for inter-element referencing
    pub id: Option<std::string::String>,
    /// Additional content defined by implementations
    pub extension: Option<Vec<Extension>>,
    /// Extensions that cannot be ignored even if unrecognized
    #[fhir_serde(rename = "modifierExtension")]
    pub modifier_extension: Option<Vec<Extension>>,
    /// Human language of the designation
    pub language: Option<Code>,
    /// Details how this designation would be used
    #[fhir_serde(rename = "use")]
    pub r#use: Option<Coding>,
    /// The text value for this designation
    pub value: String,
}

/// Choice of types for the value\[x\] field in CodeSystemConceptProperty
#[derive(Debug, Clone, PartialEq, FhirSerde)]
#[fhir_choice_element(base_name = "value")]
pub enum CodeSystemConceptPropertyValue {
    /// Variant accepting the Code type.
    #[fhir_serde(rename = "valueCode")]
    Code(Code),
    /// Variant accepting the Coding type.
    #[fhir_serde(rename = "valueCoding")]
    Coding(Coding),
    /// Variant accepting the String type.
    #[fhir_serde(rename = "valueString")]
    String(String),
    /// Variant accepting the Integer type.
    #[fhir_serde(rename = "valueInteger")]
    Integer(Integer),
    /// Variant accepting the Boolean type.
    #[fhir_serde(rename = "valueBoolean")]
    Boolean(Boolean),
    /// Variant accepting the DateTime type.
    #[fhir_serde(rename = "valueDateTime")]
    DateTime(DateTime),
    /// Variant accepting the Decimal type.
    #[fhir_serde(rename = "valueDecimal")]
    Decimal(Decimal),
}

/// Property value for the concept
#[derive(Debug, Clone, PartialEq, FhirSerde)]
#[fhir_type(name = "CodeSystemConceptProperty", kind = "backbone_element")]
pub struct CodeSystemConceptProperty {
    /// Unique id for inter-element referencing
    pub id: Option<std::string::String>,
    /// Additional content defined by implementations
    pub extension: Option<Vec<Extension>>,
    /// Extensions that cannot be ignored even if unrecognized
    #[fhir_serde(rename = "modifierExtension")]
    pub modifier_extension: Option<Vec<Extension>>,
    /// Reference to CodeSystem.property.code
    pub code: String,
    /// Value of the property for this concept
    #[fhir_serde(flatten)]
    pub value: CodeSystemConceptPropertyValue,
}

/// Filter that can be used in a value set
#[derive(Debug, Clone, PartialEq, Default, FhirSerde)]
#[fhir_type(name = "CodeSystemFilter", kind = "backbone_element")]
pub struct CodeSystemFilter {
    /// Unique id for inter-element referencing
    pub id: Option<std::string::String>,
    /// Additional content defined by implementations
    pub extension: Option<Vec<Extension>>,
    /// Extensions that cannot be ignored even if unrecognized
    #[fhir_serde(rename = "modifierExtension")]
    pub modifier_extension: Option<Vec<Extension>>,
    /// Code that identifies the filter
    pub code: String,
    /// How or why the filter is used
    pub description: Option<String>,
    /// A list of operators that can be used with the filter
    pub operator: Vec<Code>,
    /// What to use for the value
    pub value: String,
}

/// Additional information supplied about each concept
#[derive(Debug, Clone, PartialEq, Default, FhirSerde)]
#[fhir_type(name = "CodeSystemProperty", kind = "backbone_element")]
pub struct CodeSystemProperty {
    /// Unique id for inter-element referencing
    pub id: Option<std::string::String>,
    /// Additional content defined by implementations
    pub extension: Option<Vec<Extension>>,
    /// Extensions that cannot be ignored even if unrecognized
    #[fhir_serde(rename = "modifierExtension")]
    pub modifier_extension: Option<Vec<Extension>>,
    /// Identifies the property on the concepts, and when referred to in operations
    pub code: String,
    /// Formal identifier for the property
    pub uri: Option<String>,
    /// Why the property is defined, and/or what it conveys
    pub description: Option<String>,
    /// The type of the property value. Properties of type "code" contain a code defined by the code system (e.g. a reference to another defined concept).
    #[fhir_serde(rename = "type")]
    pub r#type: Code,
}
