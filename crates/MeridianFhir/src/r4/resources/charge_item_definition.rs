use crate::r4::*;
use crate::FhirSerde;

/// FHIR ChargeItemDefinition type
///
/// The ChargeItemDefinition resource provides the properties that apply to the
/// (billing) codes necessary to calculate costs and prices. The properties may
/// differ largely depending on type and realm, therefore this resource gives
/// only a rough structure and requires profiling for each type of billing code
/// system.
///
/// See: [ChargeItemDefinition](http://hl7.org/fhir/StructureDefinition/ChargeItemDefinition)
#[derive(Debug, Clone, PartialEq, Default, FhirSerde)]
#[fhir_type(name = "ChargeItemDefinition", kind = "domain_resource")]
pub struct ChargeItemDefinition {
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
    /// Canonical identifier for this charge item definition, represented as a URI (globally unique)
    pub url: Uri,
    /// Additional identifier for the charge item definition
    pub identifier: Option<Vec<Identifier>>,
    /// Business version of the charge item definition
    pub version: Option<String>,
    /// Name for this charge item definition (human friendly)
    pub title: Option<String>,
    /// Underlying externally-defined charge item definition
    #[fhir_serde(rename = "derivedFromUri")]
    pub derived_from_uri: Option<Vec<String>>,
    /// A larger definition of which this particular definition is a component or step
    #[fhir_serde(rename = "partOf")]
    pub part_of: Option<Vec<String>>,
    /// Completed or terminated request(s) whose function is taken by this new request
    pub replaces: Option<Vec<String>>,
    /// The current state of the ChargeItemDefinition
    pub status: Code,
    /// For testing purposes, not real usage
    pub experimental: Option<Boolean>,
    /// Date last changed
    pub date: Option<DateTime>,
    /// Name of the publisher (organization or individual)
    pub publisher: Option<String>,
    /// Contact details for the publisher
    pub contact: Option<Vec<ContactDetail>>,
    /// Natural language description of the charge item definition
    pub description: Option<Markdown>,
    /// The context that the content is intended to support
    #[fhir_serde(rename = "useContext")]
    pub use_context: Option<Vec<UsageContext>>,
    /// Intended jurisdiction for charge item definition (if applicable)
    pub jurisdiction: Option<Vec<CodeableConcept>>,
    /// Use and/or publishing restrictions
    pub copyright: Option<Markdown>,
    /// When the charge item definition was approved by publisher
    #[fhir_serde(rename = "approvalDate")]
    pub approval_date: Option<Date>,
    /// When the charge item definition was last reviewed
    #[fhir_serde(rename = "lastReviewDate")]
    pub last_review_date: Option<Date>,
    /// When the charge item definition is expected to be used
    #[fhir_serde(rename = "effectivePeriod")]
    pub effective_period: Option<Period>,
    /// Billing codes or product types this definition applies to
    pub code: Option<CodeableConcept>,
    /// Instances this definition applies to
    pub instance: Option<Vec<Reference>>,
    /// Whether or not the billing code is applicable
    pub applicability: Option<Vec<ChargeItemDefinitionApplicability>>,
    /// Group of properties which are applicable under the same conditions
    #[fhir_serde(rename = "propertyGroup")]
    pub property_group: Option<Vec<ChargeItemDefinitionPropertyGroup>>,
}

/// Whether or not the billing code is applicable
#[derive(Debug, Clone, PartialEq, Default, FhirSerde)]
#[fhir_type(name = "ChargeItemDefinitionApplicability", kind = "backbone_element")]
pub struct ChargeItemDefinitionApplicability {
    /// Unique id for inter-element referencing
    pub id: Option<std::string::String>,
    /// Additional content defined by implementations
    pub extension: Option<Vec<Extension>>,
    /// Extensions that cannot be ignored even if unrecognized
    #[fhir_serde(rename = "modifierExtension")]
    pub modifier_extension: Option<Vec<Extension>>,
    /// Natural language description of the condition
    pub description: Option<String>,
    /// Language of the expression
    pub language: Option<Code>,
    /// Boolean-valued expression
    pub expression: Option<String>,
}

/// Group of properties which are applicable under the same conditions
#[derive(Debug, Clone, PartialEq, Default, FhirSerde)]
#[fhir_type(name = "ChargeItemDefinitionPropertyGroup", kind = "backbone_element")]
pub struct ChargeItemDefinitionPropertyGroup {
    /// Unique id for inter-element referencing
    pub id: Option<std::string::String>,
    /// Additional content defined by implementations
    pub extension: Option<Vec<Extension>>,
    /// Extensions that cannot be ignored even if unrecognized
    #[fhir_serde(rename = "modifierExtension")]
    pub modifier_extension: Option<Vec<Extension>>,
    /// Conditions under which the priceComponent is applicable
    pub applicability: Option<Vec<ChargeItemDefinitionApplicability>>,
    /// Components of total line item price
    #[fhir_serde(rename = "priceComponent")]
    pub price_component: Option<Vec<ChargeItemDefinitionPropertyGroupPriceComponent>>,
}

/// Components of total line item price
#[derive(Debug, Clone, PartialEq, Default, FhirSerde)]
#[fhir_type(name = "ChargeItemDefinitionPropertyGroupPriceComponent", kind = "backbone_element")]
pub struct ChargeItemDefinitionPropertyGroupPriceComponent {
    /// Unique id for inter-element referencing
    pub id: Option<std::string::String>,
    /// Additional content defined by implementations
    pub extension: Option<Vec<Extension>>,
    /// Extensions that cannot be ignored even if unrecognized
    #[fhir_serde(rename = "modifierExtension")]
    pub modifier_extension: Option<Vec<Extension>>,
    /// This code identifies the type of the component
    #[fhir_serde(rename = "type")]
    pub r#type: Code,
    /// Code identifying the specific component
    pub code: Option<CodeableConcept>,
    /// Factor used for calculating this component
    pub factor: Option<Decimal>,
    /// Monetary amount associated with this component
    pub amount: Option<Money>,
}
