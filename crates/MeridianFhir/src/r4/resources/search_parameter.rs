use crate::r4::*;
use crate::FhirSerde;

/// FHIR SearchParameter type
///
/// A search parameter that defines a named search item that can be used to
/// search/filter on a resource.
///
/// See: [SearchParameter](http://hl7.org/fhir/StructureDefinition/SearchParameter)
#[derive(Debug, Clone, PartialEq, Default, FhirSerde)]
#[fhir_type(name = "SearchParameter", kind = "domain_resource")]
pub struct SearchParameter {
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
    /// Canonical identifier for this search parameter, represented as a URI (globally unique)
    pub url: Uri,
    /// Business version of the search parameter
    pub version: Option<String>,
    /// Name for this search parameter (computer friendly)
    pub name: String,
    /// Original definition for the search parameter
    #[fhir_serde(rename = "derivedFrom")]
    pub derived_from: Option<Canonical>,
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
    /// Natural language description of the search parameter
    pub description: Markdown,
    /// The context that the content is intended to support
    #[fhir_serde(rename = "useContext")]
    pub use_context: Option<Vec<UsageContext>>,
    /// Intended jurisdiction for search parameter (if applicable)
    pub jurisdiction: Option<Vec<CodeableConcept>>,
    /// Why this search parameter is defined
    pub purpose: Option<Markdown>,
    /// Code used in URL
    pub code: Code,
    /// The resource type(s) this search parameter applies to
    pub base: Vec<Code>,
    /// number | date | string | token | reference | composite | quantity | uri | special
    #[fhir_serde(rename = "type")]
    pub r#type: Code,
    /// FHIRPath expression that extracts the values
    pub expression: Option<String>,
    /// XPath that extracts the values
    pub xpath: Option<String>,
    /// normal | phonetic | nearby | distance | other
    #[fhir_serde(rename = "xpathUsage")]
    pub xpath_usage: Option<Code>,
    /// Types of resource (if a resource reference)
    pub target: Option<Vec<Code>>,
    /// Allow multiple values per parameter (or)
    #[fhir_serde(rename = "multipleOr")]
    pub multiple_or: Option<Boolean>,
    /// Allow multiple parameters (and)
    #[fhir_serde(rename = "multipleAnd")]
    pub multiple_and: Option<Boolean>,
    /// eq | ne | gt | lt | ge | le | sa | eb | ap
    pub comparator: Option<Vec<Code>>,
    /// missing | exact | contains | not | text | in | not-in | below | above | type | identifier | ofType
    pub modifier: Option<Vec<Code>>,
    /// Chained names supported
    pub chain: Option<Vec<String>>,
    /// For Composite resources to define the parts
    pub component: Option<Vec<SearchParameterComponent>>,
}

/// For Composite resources to define the parts
#[derive(Debug, Clone, PartialEq, Default, FhirSerde)]
#[fhir_type(name = "SearchParameterComponent", kind = "backbone_element")]
pub struct SearchParameterComponent {
    /// Unique id for inter-element referencing
    pub id: Option<std::string::String>,
    /// Additional content defined by implementations
    pub extension: Option<Vec<Extension>>,
    /// Extensions that cannot be ignored even if unrecognized
    #[fhir_serde(rename = "modifierExtension")]
    pub modifier_extension: Option<Vec<Extension>>,
    /// Defines how the part works
    pub definition: Canonical,
    /// Subexpression relative to main expression
    pub expression: String,
}
