use crate::r4::*;
use crate::FhirSerde;

/// FHIR OperationDefinition type
///
/// A formal computable definition of an operation (on the RESTful interface) or
/// a named query (using the search interaction).
///
/// See: [OperationDefinition](http://hl7.org/fhir/StructureDefinition/OperationDefinition)
#[derive(Debug, Clone, PartialEq, Default, FhirSerde)]
#[fhir_type(name = "OperationDefinition", kind = "domain_resource")]
pub struct OperationDefinition {
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
    /// Canonical identifier for this operation definition, represented as a URI (globally unique)
    pub url: Option<Uri>,
    /// Business version of the operation definition
    pub version: Option<String>,
    /// Name for this operation definition (computer friendly)
    pub name: String,
    /// Name for this operation definition (human friendly)
    pub title: Option<String>,
    /// The status of this operation definition. Enables tracking the life-cycle of the content.
    pub status: Code,
    /// Whether this is an operation or a named query
    pub kind: Code,
    /// For testing purposes, not real usage
    pub experimental: Option<Boolean>,
    /// Date last changed
    pub date: Option<DateTime>,
    /// Name of the publisher (organization or individual)
    pub publisher: Option<String>,
    /// Contact details for the publisher
    pub contact: Option<Vec<ContactDetail>>,
    /// Natural language description of the operation definition
    pub description: Option<Markdown>,
    /// The context that the content is intended to support
    #[fhir_serde(rename = "useContext")]
    pub use_context: Option<Vec<UsageContext>>,
    /// Intended jurisdiction for operation definition (if applicable)
    pub jurisdiction: Option<Vec<CodeableConcept>>,
    /// Why this operation definition is defined
    pub purpose: Option<Markdown>,
    /// Whether content is changed by the operation
    #[fhir_serde(rename = "affectsState")]
    pub affects_state: Option<Boolean>,
    /// Name used to invoke the operation
    pub code: String,
    /// Additional information about use
    pub comment: Option<String>,
    /// Marks this as a profile of the base
    pub base: Option<String>,
    /// The types on which this operation can be executed
    pub resource: Option<Vec<Code>>,
    /// Invoke at the system level?
    pub system: Boolean,
    /// Invoke at the type level?
    #[fhir_serde(rename = "type")]
    pub r#type: Boolean,
    /// Invoke on an instance?
    pub instance: Boolean,
    /// Validation information for in parameters
    #[fhir_serde(rename = "inputProfile")]
    pub input_profile: Option<String>,
    /// Validation information for out parameters
    #[fhir_serde(rename = "outputProfile")]
    pub output_profile: Option<String>,
    /// Parameters for the operation/query
    pub parameter: Option<Vec<OperationDefinitionParameter>>,
    /// Define overloaded variants for when generating code
    pub overload: Option<Vec<OperationDefinitionOverload>>,
}

/// Define overloaded variants for when generating code
#[derive(Debug, Clone, PartialEq, Default, FhirSerde)]
#[fhir_type(name = "OperationDefinitionOverload", kind = "backbone_element")]
pub struct OperationDefinitionOverload {
    /// Unique id for inter-element referencing
    pub id: Option<std::string::String>,
    /// Additional content defined by implementations
    pub extension: Option<Vec<Extension>>,
    /// Extensions that cannot be ignored even if unrecognized
    #[fhir_serde(rename = "modifierExtension")]
    pub modifier_extension: Option<Vec<Extension>>,
    /// Name of parameter to include in overload
    #[fhir_serde(rename = "parameterName")]
    pub parameter_name: Option<Vec<String>>,
    /// Comments to go on overload
    pub comment: Option<String>,
}

/// Parameters for the operation/query
#[derive(Debug, Clone, PartialEq, Default, FhirSerde)]
#[fhir_type(name = "OperationDefinitionParameter", kind = "backbone_element")]
pub struct OperationDefinitionParameter {
    /// Unique id for inter-element referencing
    pub id: Option<std::string::String>,
    /// Additional content defined by implementations
    pub extension: Option<Vec<Extension>>,
    /// Extensions that cannot be ignored even if unrecognized
    #[fhir_serde(rename = "modifierExtension")]
    pub modifier_extension: Option<Vec<Extension>>,
    /// Name in Parameters.parameter.name or in URL
    pub name: String,
    /// Whether this is an input or an output parameter
    #[fhir_serde(rename = "use")]
    pub r#use: Code,
    /// Minimum Cardinality
    pub min: Integer,
    /// Maximum Cardinality (a number or *)
    pub max: String,
    /// Description of meaning/use
    pub documentation: Option<String>,
    /// What type this parameter has
    #[fhir_serde(rename = "type")]
    pub r#type: Option<String>,
    /// If type is Reference | canonical, allowed targets
    #[fhir_serde(rename = "targetProfile")]
    pub target_profile: Option<Vec<Canonical>>,
    /// How the parameter is understood as a search parameter. This is only used if the parameter type is 'string'.
    #[fhir_serde(rename = "searchType")]
    pub search_type: Option<Code>,
    /// ValueSet details if this is coded
    pub binding: Option<OperationDefinitionParameterBinding>,
    /// References to this parameter
    #[fhir_serde(rename = "referencedFrom")]
    pub referenced_from: Option<Vec<OperationDefinitionParameterReferencedFrom>>,
    /// Parts of a nested Parameter
    pub part: Option<Vec<OperationDefinitionParameter>>,
}

/// ValueSet details if this is coded
#[derive(Debug, Clone, PartialEq, Default, FhirSerde)]
#[fhir_type(name = "OperationDefinitionParameterBinding", kind = "backbone_element")]
pub struct OperationDefinitionParameterBinding {
    /// Unique id for inter-element referencing
    pub id: Option<std::string::String>,
    /// Additional content defined by implementations
    pub extension: Option<Vec<Extension>>,
    /// Extensions that cannot be ignored even if unrecognized
    #[fhir_serde(rename = "modifierExtension")]
    pub modifier_extension: Option<Vec<Extension>>,
    /// Indicates the degree of conformance expectations associated with this binding - that is, the degree to which the provided value set must be adhered to in the instances
    pub strength: Code,
    /// Source of value set
    #[fhir_serde(rename = "valueSet")]
    pub value_set: Canonical,
}

/// References to this parameter
#[derive(Debug, Clone, PartialEq, Default, FhirSerde)]
#[fhir_type(name = "OperationDefinitionParameterReferencedFrom", kind = "backbone_element")]
pub struct OperationDefinitionParameterReferencedFrom {
    /// Unique id for inter-element referencing
    pub id: Option<std::string::String>,
    /// Additional content defined by implementations
    pub extension: Option<Vec<Extension>>,
    /// Extensions that cannot be ignored even if unrecognized
    #[fhir_serde(rename = "modifierExtension")]
    pub modifier_extension: Option<Vec<Extension>>,
    /// Referencing parameter
    pub source: String,
    /// Element id of reference
    #[fhir_serde(rename = "sourceId")]
    pub source_id: Option<String>,
}
