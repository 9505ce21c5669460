use crate::r4::*;
use crate::FhirSerde;

/// FHIR StructureMap type
///
/// A Map of relationships between 2 structures that can be used to transform
/// data
///
/// See: [StructureMap](http://hl7.org/fhir/StructureDefinition/StructureMap)
#[derive(Debug, Clone, PartialEq, Default, FhirSerde)]
#[fhir_type(name = "StructureMap", kind = "domain_resource")]
pub struct StructureMap {
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
    /// Canonical identifier for this structure map, represented as a URI (globally unique)
    pub url: Uri,
    /// Additional identifier for the structure map
    pub identifier: Option<Vec<Identifier>>,
    /// Business version of the structure map
    pub version: Option<String>,
    /// Name for this structure map (computer friendly)
    pub name: String,
    /// Name for this structure map (human friendly)
    pub title: Option<String>,
    /// The status of this structure map. Enables tracking the life-cycle of the content.
    pub status: Code,
    /// For testing purposes, not real usage
    pub experimental: Option<Boolean>,
    /// Date last changed
    pub date: Option<DateTime>,
    /// Name of the publisher (organization or individual)
    pub publisher: Option<String>,
    /// Contact details for the publisher
    pub contact: Option<Vec<ContactDetail>>,
    /// Natural language description of the structure map
    pub description: Option<Markdown>,
    /// The context that the content is intended to support
    #[fhir_serde(rename = "useContext")]
    pub use_context: Option<Vec<UsageContext>>,
    /// Intended jurisdiction for structure map (if applicable)
    pub jurisdiction: Option<Vec<CodeableConcept>>,
    /// Why this structure map is defined
    pub purpose: Option<Markdown>,
    /// Use and/or publishing restrictions
    pub copyright: Option<Markdown>,
    /// Structure Definition used by this map
    pub structure: Option<Vec<StructureMapStructure>>,
    /// Other maps used by this map (canonical URLs)
    pub import: Option<Vec<String>>,
    /// Named sections for reader convenience
    pub group: Vec<StructureMapGroup>,
}

/// Named sections for reader convenience
#[derive(Debug, Clone, PartialEq, Default, FhirSerde)]
#[fhir_type(name = "StructureMapGroup", kind = "backbone_element")]
pub struct StructureMapGroup {
    /// Unique id for inter-element referencing
    pub id: Option<std::string::String>,
    /// Additional content defined by implementations
    pub extension: Option<Vec<Extension>>,
    /// Extensions that cannot be ignored even if unrecognized
    #[fhir_serde(rename = "modifierExtension")]
    pub modifier_extension: Option<Vec<Extension>>,
    /// Human-readable label
    pub name: String,
    /// Another group that this group adds rules to
    pub extends: Option<String>,
    /// If this is the default rule set to apply for the source type or this combination of types
    #[fhir_serde(rename = "typeMode")]
    pub type_mode: Code,
    /// Additional description/explanation for group
    pub documentation: Option<String>,
    /// Named instance provided when invoking the map
    pub input: Vec<StructureMapGroupInput>,
    /// Transform Rule from source to target
    pub rule: Vec<StructureMapGroupRule>,
}

/// Named instance provided when invoking the map
#[derive(Debug, Clone, PartialEq, Default, FhirSerde)]
#[fhir_type(name = "StructureMapGroupInput", kind = "backbone_element")]
pub struct StructureMapGroupInput {
    /// Unique id for inter-element referencing
    pub id: Option<std::string::String>,
    /// Additional content defined by implementations
    pub extension: Option<Vec<Extension>>,
    /// Extensions that cannot be ignored even if unrecognized
    #[fhir_serde(rename = "modifierExtension")]
    pub modifier_extension: Option<Vec<Extension>>,
    /// Name for this instance of data
    pub name: String,
    /// Type for this instance of data
    #[fhir_serde(rename = "type")]
    pub r#type: Option<String>,
    /// Mode for this instance of data
    pub mode: Code,
    /// Documentation for this instance of data
    pub documentation: Option<String>,
}

/// Transform Rule from source to target
#[derive(Debug, Clone, PartialEq, Default, FhirSerde)]
#[fhir_type(name = "StructureMapGroupRule", kind = "backbone_element")]
pub struct StructureMapGroupRule {
    /// Unique id for inter-element referencing
    pub id: Option<std::string::String>,
    /// Additional content defined by implementations
    pub extension: Option<Vec<Extension>>,
    /// Extensions that cannot be ignored even if unrecognized
    #[fhir_serde(rename = "modifierExtension")]
    pub modifier_extension: Option<Vec<Extension>>,
    /// Name of the rule for internal references
    pub name: String,
    /// Source inputs to the mapping
    pub source: Vec<StructureMapGroupRuleSource>,
    /// Content to create because of this mapping rule
    pub target: Option<Vec<StructureMapGroupRuleTarget>>,
    /// Rules contained in this rule
    pub rule: Option<Vec<StructureMapGroupRule>>,
    /// Which other rules to apply in the context of this rule
    pub dependent: Option<Vec<StructureMapGroupRuleDependent>>,
    /// Documentation for this instance of data
    pub documentation: Option<String>,
}

/// Which other rules to apply in the context of this rule
#[derive(Debug, Clone, PartialEq, Default, FhirSerde)]
#[fhir_type(name = "StructureMapGroupRuleDependent", kind = "backbone_element")]
pub struct StructureMapGroupRuleDependent {
    /// Unique id for inter-element referencing
    pub id: Option<std::string::String>,
    /// Additional content defined by implementations
    pub extension: Option<Vec<Extension>>,
    /// Extensions that cannot be ignored even if unrecognized
    #[fhir_serde(rename = "modifierExtension")]
    pub modifier_extension: Option<Vec<Extension>>,
    /// Name of a rule or group to apply
    pub name: String,
    /// Variable to pass to the rule or group
    pub variable: Vec<String>,
}

/// Choice of types for the defaultValue\[x\] field in StructureMapGroupRuleSource
#[derive(Debug, Clone, PartialEq, FhirSerde)]
#[fhir_choice_element(base_name = "defaultValue")]
pub enum StructureMapGroupRuleSourceDefaultValue {
    /// Variant accepting the Base64Binary type.
    #[fhir_serde(rename = "defaultValueBase64Binary")]
    Base64Binary(Base64Binary),
    /// Variant accepting the Boolean type.
    #[fhir_serde(rename = "defaultValueBoolean")]
    Boolean(Boolean),
    /// Variant accepting the Canonical type.
    #[fhir_serde(rename = "defaultValueCanonical")]
    Canonical(Canonical),
    /// Variant accepting the Code type.
    #[fhir_serde(rename = "defaultValueCode")]
    Code(Code),
    /// Variant accepting the Date type.
    #[fhir_serde(rename = "defaultValueDate")]
    Date(Date),
    /// Variant accepting the DateTime type.
    #[fhir_serde(rename = "defaultValueDateTime")]
    DateTime(DateTime),
    /// Variant accepting the Decimal type.
    #[fhir_serde(rename = "defaultValueDecimal")]
    Decimal(Decimal),
    /// Variant accepting the Id type.
    #[fhir_serde(rename = "defaultValueId")]
    Id(Id),
    /// Variant accepting the Instant type.
    #[fhir_serde(rename = "defaultValueInstant")]
    Instant(Instant),
    /// Variant accepting the Integer type.
    #[fhir_serde(rename = "defaultValueInteger")]
    Integer(Integer),
    /// Variant accepting the Markdown type.
    #[fhir_serde(rename = "defaultValueMarkdown")]
    Markdown(Markdown),
    /// Variant accepting the Oid type.
    #[fhir_serde(rename = "defaultValueOid")]
    Oid(Oid),
    /// Variant accepting the PositiveInt type.
    #[fhir_serde(rename = "defaultValuePositiveInt")]
    PositiveInt(PositiveInt),
    /// Variant accepting the String type.
    #[fhir_serde(rename = "defaultValueString")]
    String(String),
    /// Variant accepting the Time type.
    #[fhir_serde(rename = "defaultValueTime")]
    Time(Time),
    /// Variant accepting the UnsignedInt type.
    #[fhir_serde(rename = "defaultValueUnsignedInt")]
    UnsignedInt(UnsignedInt),
    /// Variant accepting the Uri type.
    #[fhir_serde(rename = "defaultValueUri")]
    Uri(Uri),
    /// Variant accepting the Url type.
    #[fhir_serde(rename = "defaultValueUrl")]
    Url(Url),
    /// Variant accepting the Uuid type.
    #[fhir_serde(rename = "defaultValueUuid")]
    Uuid(Uuid),
    /// Variant accepting the Address type.
    #[fhir_serde(rename = "defaultValueAddress")]
    Address(Address),
    /// Variant accepting the Age type.
    #[fhir_serde(rename = "defaultValueAge")]
    Age(Age),
    /// Variant accepting the Annotation type.
    #[fhir_serde(rename = "defaultValueAnnotation")]
    Annotation(Annotation),
    /// Variant accepting the Attachment type.
    #[fhir_serde(rename = "defaultValueAttachment")]
    Attachment(Attachment),
    /// Variant accepting the CodeableConcept type.
    #[fhir_serde(rename = "defaultValueCodeableConcept")]
    CodeableConcept(CodeableConcept),
    /// Variant accepting the Coding type.
    #[fhir_serde(rename = "defaultValueCoding")]
    Coding(Coding),
    /// Variant accepting the ContactPoint type.
    #[fhir_serde(rename = "defaultValueContactPoint")]
    ContactPoint(ContactPoint),
    /// Variant accepting the Count type.
    #[fhir_serde(rename = "defaultValueCount")]
    Count(Count),
    /// Variant accepting the Distance type.
    #[fhir_serde(rename = "defaultValueDistance")]
    Distance(Distance),
    /// Variant accepting the Duration type.
    #[fhir_serde(rename = "defaultValueDuration")]
    Duration(Duration),
    /// Variant accepting the HumanName type.
    #[fhir_serde(rename = "defaultValueHumanName")]
    HumanName(HumanName),
    /// Variant accepting the Identifier type.
    #[fhir_serde(rename = "defaultValueIdentifier")]
    Identifier(Identifier),
    /// Variant accepting the Money type.
    #[fhir_serde(rename = "defaultValueMoney")]
    Money(Money),
    /// Variant accepting the Period type.
    #[fhir_serde(rename = "defaultValuePeriod")]
    Period(Period),
    /// Variant accepting the Quantity type.
    #[fhir_serde(rename = "defaultValueQuantity")]
    Quantity(Quantity),
    /// Variant accepting the Range type.
    #[fhir_serde(rename = "defaultValueRange")]
    Range(Range),
    /// Variant accepting the Ratio type.
    #[fhir_serde(rename = "defaultValueRatio")]
    Ratio(Ratio),
    /// Variant accepting the Reference type.
    #[fhir_serde(rename = "defaultValueReference")]
    Reference(Reference),
    /// Variant accepting the SampledData type.
    #[fhir_serde(rename = "defaultValueSampledData")]
    SampledData(SampledData),
    /// Variant accepting the Signature type.
    #[fhir_serde(rename = "defaultValueSignature")]
    Signature(Signature),
    /// Variant accepting the Timing type.
    #[fhir_serde(rename = "defaultValueTiming")]
    Timing(Timing),
    /// Variant accepting the ContactDetail type.
    #[fhir_serde(rename = "defaultValueContactDetail")]
    ContactDetail(ContactDetail),
    /// Variant accepting the Contributor type.
    #[fhir_serde(rename = "defaultValueContributor")]
    Contributor(Contributor),
    /// Variant accepting the DataRequirement type.
    #[fhir_serde(rename = "defaultValueDataRequirement")]
    DataRequirement(DataRequirement),
    /// Variant accepting the Expression type.
    #[fhir_serde(rename = "defaultValueExpression")]
    Expression(Expression),
    /// Variant accepting the ParameterDefinition type.
    #[fhir_serde(rename = "defaultValueParameterDefinition")]
    ParameterDefinition(ParameterDefinition),
    /// Variant accepting the RelatedArtifact type.
    #[fhir_serde(rename = "defaultValueRelatedArtifact")]
    RelatedArtifact(RelatedArtifact),
    /// Variant accepting the TriggerDefinition type.
    #[fhir_serde(rename = "defaultValueTriggerDefinition")]
    TriggerDefinition(TriggerDefinition),
    /// Variant accepting the UsageContext type.
    #[fhir_serde(rename = "defaultValueUsageContext")]
    UsageContext(UsageContext),
    /// Variant accepting the Dosage type.
    #[fhir_serde(rename = "defaultValueDosage")]
    Dosage(Dosage),
    /// Variant accepting the Meta type.
    #[fhir_serde(rename = "defaultValueMeta")]
    Meta(Meta),
}

/// Source inputs to the mapping
#[derive(Debug, Clone, PartialEq, Default, FhirSerde)]
#[fhir_type(name = "StructureMapGroupRuleSource", kind = "backbone_element")]
pub struct StructureMapGroupRuleSource {
    /// Unique id for inter-element referencing
    pub id: Option<std::string::String>,
    /// Additional content defined by implementations
    pub extension: Option<Vec<Extension>>,
    /// Extensions that cannot be ignored even if unrecognized
    #[fhir_serde(rename = "modifierExtension")]
    pub modifier_extension: Option<Vec<Extension>>,
    /// Type or variable this rule applies to
    pub context: String,
    /// Specified minimum cardinality
    pub min: Option<Integer>,
    /// Specified maximum cardinality (number or *)
    pub max: Option<String>,
    /// Rule only applies if source has this type
    #[fhir_serde(rename = "type")]
    pub r#type: Option<String>,
    /// Default value if no value exists
    #[fhir_serde(flatten)]
    pub default_value: Option<StructureMapGroupRuleSourceDefaultValue>,
    /// Optional field for this source
    pub element: Option<String>,
    /// How to handle the list mode for this element
    #[fhir_serde(rename = "listMode")]
    pub list_mode: Option<Code>,
    /// Named context for field, if a field is specified
    pub variable: Option<String>,
    /// FHIRPath expression - must be true or the rule does not apply
    pub condition: Option<String>,
    /// FHIRPath expression - must be true or the mapping engine throws an error instead of completing
    pub check: Option<String>,
    /// Message to put in log if source exists (FHIRPath)
    #[fhir_serde(rename = "logMessage")]
    pub log_message: Option<String>,
}

/// Content to create because of this mapping rule
#[derive(Debug, Clone, PartialEq, Default, FhirSerde)]
#[fhir_type(name = "StructureMapGroupRuleTarget", kind = "backbone_element")]
pub struct StructureMapGroupRuleTarget {
    /// Unique id for inter-element referencing
    pub id: Option<std::string::String>,
    /// Additional content defined by implementations
    pub extension: Option<Vec<Extension>>,
    /// Extensions that cannot be ignored even if unrecognized
    #[fhir_serde(rename = "modifierExtension")]
    pub modifier_extension: Option<Vec<Extension>>,
    /// Type or variable this rule applies to
    pub context: Option<String>,
    /// How to interpret the context
    #[fhir_serde(rename = "contextType")]
    pub context_type: Option<Code>,
    /// Field to create in the context
    pub element: Option<String>,
    /// Named context for field, if desired, and a field is specified
    pub variable: Option<String>,
    /// If field is a list, how to manage the list
    #[fhir_serde(rename = "listMode")]
    pub list_mode: Option<Vec<Code>>,
    /// Internal rule reference for shared list items
    #[fhir_serde(rename = "listRuleId")]
    pub list_rule_id: Option<String>,
    /// How the data is copied / created
    pub transform: Option<Code>,
    /// Parameters to the transform
    pub parameter: Option<Vec<StructureMapGroupRuleTargetParameter>>,
}

/// Choice of types for the value\[x\] field in StructureMapGroupRuleTargetParameter
#[derive(Debug, Clone, PartialEq, FhirSerde)]
#[fhir_choice_element(base_name = "value")]
pub enum StructureMapGroupRuleTargetParameterValue {
    /// Variant accepting the Id type.
    #[fhir_serde(rename = "valueId")]
    Id(Id),
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
}

/// Parameters to the transform
#[derive(Debug, Clone, PartialEq, FhirSerde)]
#[fhir_type(name = "StructureMapGroupRuleTargetParameter", kind = "backbone_element")]
pub struct StructureMapGroupRuleTargetParameter {
    /// Unique id for inter-element referencing
    pub id: Option<std::string::String>,
    /// Additional content defined by implementations
    pub extension: Option<Vec<Extension>>,
    /// Extensions that cannot be ignored even if unrecognized
    #[fhir_serde(rename = "modifierExtension")]
    pub modifier_extension: Option<Vec<Extension>>,
    /// Parameter value - variable or literal
    #[fhir_serde(flatten)]
    pub value: StructureMapGroupRuleTargetParameterValue,
}

/// Structure Definition used by this map
#[derive(Debug, Clone, PartialEq, Default, FhirSerde)]
#[fhir_type(name = "StructureMapStructure", kind = "backbone_element")]
pub struct StructureMapStructure {
    /// Unique id for inter-element referencing
    pub id: Option<std::string::String>,
    /// Additional content defined by implementations
    pub extension: Option<Vec<Extension>>,
    /// Extensions that cannot be ignored even if unrecognized
    #[fhir_serde(rename = "modifierExtension")]
    pub modifier_extension: Option<Vec<Extension>>,
    /// Canonical reference to structure definition
    pub url: Url,
    /// How the referenced structure is used in this mapping
    pub mode: Code,
    /// Name for type in this map
    pub alias: Option<String>,
    /// Documentation on use of structure
    pub documentation: Option<String>,
}
