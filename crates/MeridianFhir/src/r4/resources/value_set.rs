use crate::r4::*;
use crate::FhirSerde;

/// FHIR ValueSet type
///
/// A ValueSet resource instance specifies a set of codes drawn from one or more
/// code systems, intended for use in a particular context. Value sets link
/// between \[CodeSystem\](codesystem.html) definitions and their use in \[coded
/// elements\](terminologies.html).
///
/// See: [ValueSet](http://hl7.org/fhir/StructureDefinition/ValueSet)
#[derive(Debug, Clone, PartialEq, Default, FhirSerde)]
#[fhir_type(name = "ValueSet", kind = "domain_resource")]
pub struct ValueSet {
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
    /// Canonical identifier for this value set, represented as a URI (globally unique)
    pub url: Option<Uri>,
    /// Additional identifier for the value set (business identifier)
    pub identifier: Option<Vec<Identifier>>,
    /// Business version of the value set
    pub version: Option<String>,
    /// Name for this value set (computer friendly)
    pub name: Option<String>,
    /// Name for this value set (human friendly)
    pub title: Option<String>,
    /// The status of this value set. Enables tracking the life-cycle of the content. The status of the value set applies to the value set definition (ValueSet.compose) and the associated ValueSet metadata. Expansions do not have a state.
    pub status: Code,
    /// For testing purposes, not real usage
    pub experimental: Option<Boolean>,
    /// Date last changed
    pub date: Option<DateTime>,
    /// Name of the publisher (organization or individual)
    pub publisher: Option<String>,
    /// Contact details for the publisher
    pub contact: Option<Vec<ContactDetail>>,
    /// Natural language description of the value set
    pub description: Option<Markdown>,
    /// The context that the content is intended to support
    #[fhir_serde(rename = "useContext")]
    pub use_context: Option<Vec<UsageContext>>,
    /// Intended jurisdiction for value set (if applicable)
    pub jurisdiction: Option<Vec<CodeableConcept>>,
    /// Indicates whether or not any change to the content logical definition may occur
    pub immutable: Option<Boolean>,
    /// Why this value set is defined
    pub purpose: Option<Markdown>,
    /// Use and/or publishing restrictions
    pub copyright: Option<Markdown>,
    /// Content logical definition of the value set (CLD)
    pub compose: Option<ValueSetCompose>,
    /// Used when the value set is "expanded"
    pub expansion: Option<ValueSetExpansion>,
}

/// Content logical definition of the value set (CLD)
#[derive(Debug, Clone, PartialEq, Default, FhirSerde)]
#[fhir_type(name = "ValueSetCompose", kind = "backbone_element")]
pub struct ValueSetCompose {
    /// Unique id for inter-element referencing
    pub id: Option<std::string::String>,
    /// Additional content defined by implementations
    pub extension: Option<Vec<Extension>>,
    /// Extensions that cannot be ignored even if unrecognized
    #[fhir_serde(rename = "modifierExtension")]
    pub modifier_extension: Option<Vec<Extension>>,
    /// Fixed date for references with no specified version (transitive)
    #[fhir_serde(rename = "lockedDate")]
    pub locked_date: Option<Date>,
    /// Whether inactive codes are in the value set
    pub inactive: Option<Boolean>,
    /// Include one or more codes from a code system or other value set(s)
    pub include: Vec<ValueSetComposeInclude>,
    /// Explicitly exclude codes from a code system or other value sets
    pub exclude: Option<Vec<ValueSetComposeInclude>>,
}

/// Include one or more codes from a code system or other value set(s)
#[derive(Debug, Clone, PartialEq, Default, FhirSerde)]
#[fhir_type(name = "ValueSetComposeInclude", kind = "backbone_element")]
pub struct ValueSetComposeInclude {
    /// Unique id for inter-element referencing
    pub id: Option<std::string::String>,
    /// Additional content defined by implementations
    pub extension: Option<Vec<Extension>>,
    /// Extensions that cannot be ignored even if unrecognized
    #[fhir_serde(rename = "modifierExtension")]
    pub modifier_extension: Option<Vec<Extension>>,
    /// The system the codes come from
    pub system: Option<Uri>,
    /// Specific version of the code system referred to
    pub version: Option<String>,
    /// A concept defined in the system
    pub concept: Option<Vec<ValueSetComposeIncludeConcept>>,
    /// Select codes/concepts by their properties (including relationships)
    pub filter: Option<Vec<ValueSetComposeIncludeFilter>>,
    /// Select the contents included in this value set
    #[fhir_serde(rename = "valueSet")]
    pub value_set: Option<Vec<Canonical>>,
}

/// A concept defined in the system
#[derive(Debug, Clone, PartialEq, Default, FhirSerde)]
#[fhir_type(name = "ValueSetComposeIncludeConcept", kind = "backbone_element")]
pub struct ValueSetComposeIncludeConcept {
    /// Unique id for inter-element referencing
    pub id: Option<std::string::String>,
    /// Additional content defined by implementations
    pub extension: Option<Vec<Extension>>,
    /// Extensions that cannot be ignored even if unrecognized
    #[fhir_serde(rename = "modifierExtension")]
    pub modifier_extension: Option<Vec<Extension>>,
    /// Code or expression from system
    pub code: String,
    /// Text to display for this code for this value set in this valueset
    pub display: Option<String>,
    /// Additional representations for this concept
    pub designation: Option<Vec<ValueSetComposeIncludeConceptDesignation>>,
}

/// Additional representations for this concept
#[derive(Debug, Clone, PartialEq, Default, FhirSerde)]
#[fhir_type(name = "ValueSetComposeIncludeConceptDesignation", kind = "backbone_element")]
pub struct ValueSetComposeIncludeConceptDesignation {
    /// Unique id for inter-element referencing
    pub id: Option<std::string::String>,
    /// Additional content defined by implementations
    pub extension: Option<Vec<Extension>>,
    /// Extensions that cannot be ignored even if unrecognized
    #[fhir_serde(rename = "modifierExtension")]
    pub modifier_extension: Option<Vec<Extension>>,
    /// Human language of the designation
    pub language: Option<Code>,
    /// Types of uses of designations
    #[fhir_serde(rename = "use")]
    pub r#use: Option<Coding>,
    /// The text value for this designation
    pub value: String,
}

/// Select codes/concepts by their properties (including relationships)
#[derive(Debug, Clone, PartialEq, Default, FhirSerde)]
#[fhir_type(name = "ValueSetComposeIncludeFilter", kind = "backbone_element")]
pub struct ValueSetComposeIncludeFilter {
    /// Unique id for inter-element referencing
    pub id: Option<std::string::String>,
    /// Additional content defined by implementations
    pub extension: Option<Vec<Extension>>,
    /// Extensions that cannot be ignored even if unrecognized
    #[fhir_serde(rename = "modifierExtension")]
    pub modifier_extension: Option<Vec<Extension>>,
    /// A property/filter defined by the code system
    pub property: String,
    /// The kind of operation to perform as a part of the filter criteria
    pub op: Code,
    /// Code from the system, or regex criteria, or boolean value for exists
    pub value: String,
}

/// Used when the value set is "expanded"
#[derive(Debug, Clone, PartialEq, Default, FhirSerde)]
#[fhir_type(name = "ValueSetExpansion", kind = "backbone_element")]
pub struct ValueSetExpansion {
    /// Unique id for inter-element referencing
    pub id: Option<std::string::String>,
    /// Additional content defined by implementations
    pub extension: Option<Vec<Extension>>,
    /// Extensions that cannot be ignored even if unrecognized
    #[fhir_serde(rename = "modifierExtension")]
    pub modifier_extension: Option<Vec<Extension>>,
    /// Identifies the value set expansion (business identifier)
    pub identifier: Option<String>,
    /// Time ValueSet expansion happened
    pub timestamp: DateTime,
    /// Total number of codes in the expansion
    pub total: Option<Integer>,
    /// Offset at which this resource starts
    pub offset: Option<Integer>,
    /// Parameter that controlled the expansion process
    pub parameter: Option<Vec<ValueSetExpansionParameter>>,
    /// Codes in the value set
    pub contains: Option<Vec<ValueSetExpansionContains>>,
}

/// Codes in the value set
#[derive(Debug, Clone, PartialEq, Default, FhirSerde)]
#[fhir_type(name = "ValueSetExpansionContains", kind = "backbone_element")]
pub struct ValueSetExpansionContains {
    /// Unique id for inter-element referencing
    pub id: Option<std::string::String>,
    /// Additional content defined by implementations
    pub extension: Option<Vec<Extension>>,
    /// Extensions that cannot be ignored even if unrecognized
    #[fhir_serde(rename = "modifierExtension")]
    pub modifier_extension: Option<Vec<Extension>>,
    /// System value for the code
    pub system: Option<Uri>,
    /// If user cannot select this entry
    #[fhir_serde(rename = "abstract")]
    pub r#abstract: Option<Boolean>,
    /// If concept is inactive in the code system
    pub inactive: Option<Boolean>,
    /// Version in which this code/display is defined
    pub version: Option<String>,
    /// Code - if blank, this is not a selectable code
    pub code: Option<String>,
    /// User display for the concept
    pub display: Option<String>,
    /// Additional representations for this item
    pub designation: Option<Vec<ValueSetComposeIncludeConceptDesignation>>,
    /// Codes contained under this entry
    pub contains: Option<Vec<ValueSetExpansionContains>>,
}

/// Choice of types for the value\[x\] field in ValueSetExpansionParameter
#[derive(Debug, Clone, PartialEq, FhirSerde)]
#[fhir_choice_element(base_name = "value")]
pub enum ValueSetExpansionParameterValue {
    /// Variant accepting the String type.
    #[fhir_serde(rename = "valueString")]
    String(String),
    /// Variant accepting the Boolean type.
    #[fhir_serde(rename = "valueBoolean")]
    Boolean(Boolean),
    /// Variant accepting the Integer type.
    #[fhir_serde(rename = "valueInteger")]
    Integer(Integer),
    /// Variant accepting the Decimal type.
    #[fhir_serde(rename = "valueDecimal")]
    Decimal(Decimal),
    /// Variant accepting the Uri type.
    #[fhir_serde(rename = "valueUri")]
    Uri(Uri),
    /// Variant accepting the Code type.
    #[fhir_serde(rename = "valueCode")]
    Code(Code),
    /// Variant accepting the DateTime type.
    #[fhir_serde(rename = "valueDateTime")]
    DateTime(DateTime),
}

/// Parameter that controlled the expansion process
#[derive(Debug, Clone, PartialEq, Default, FhirSerde)]
#[fhir_type(name = "ValueSetExpansionParameter", kind = "backbone_element")]
pub struct ValueSetExpansionParameter {
    /// Unique id for inter-element referencing
    pub id: Option<std::string::String>,
    /// Additional content defined by implementations
    pub extension: Option<Vec<Extension>>,
    /// Extensions that cannot be ignored even if unrecognized
    #[fhir_serde(rename = "modifierExtension")]
    pub modifier_extension: Option<Vec<Extension>>,
    /// Name as assigned by the client or server
    pub name: String,
    /// Value of the named parameter
    #[fhir_serde(flatten)]
    pub value: Option<ValueSetExpansionParameterValue>,
}
