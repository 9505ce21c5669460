use crate::r4::*;
use crate::FhirSerde;

/// FHIR InsurancePlan type
///
/// Details of a Health Insurance product/plan provided by an organization
///
/// See: [InsurancePlan](http://hl7.org/fhir/StructureDefinition/InsurancePlan)
#[derive(Debug, Clone, PartialEq, Default, FhirSerde)]
#[fhir_type(name = "InsurancePlan", kind = "domain_resource")]
pub struct InsurancePlan {
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
    /// Business Identifier for Product
    pub identifier: Option<Vec<Identifier>>,
    /// The current state of the health insurance product
    pub status: Option<Code>,
    /// Kind of product
    #[fhir_serde(rename = "type")]
    pub r#type: Option<Vec<CodeableConcept>>,
    /// Official name
    pub name: Option<String>,
    /// Alternate names
    pub alias: Option<Vec<String>>,
    /// When the product is available
    pub period: Option<Period>,
    /// Plan issuer
    #[fhir_serde(rename = "ownedBy")]
    pub owned_by: Option<Reference>,
    /// Product administrator
    #[fhir_serde(rename = "administeredBy")]
    pub administered_by: Option<Reference>,
    /// Where product applies
    #[fhir_serde(rename = "coverageArea")]
    pub coverage_area: Option<Vec<Reference>>,
    /// Contact for the product
    pub contact: Option<Vec<InsurancePlanContact>>,
    /// Technical endpoint
    pub endpoint: Option<Vec<Reference>>,
    /// What networks are Included
    pub network: Option<Vec<Reference>>,
    /// Coverage details
    pub coverage: Option<Vec<InsurancePlanCoverage>>,
    /// Plan details
    pub plan: Option<Vec<InsurancePlanPlan>>,
}

/// Contact for the product
#[derive(Debug, Clone, PartialEq, Default, FhirSerde)]
#[fhir_type(name = "InsurancePlanContact", kind = "backbone_element")]
pub struct InsurancePlanContact {
    /// Unique id for inter-element referencing
    pub id: Option<std::string::String>,
    /// Additional content defined by implementations
    pub extension: Option<Vec<Extension>>,
    /// Extensions that cannot be ignored even if unrecognized
    #[fhir_serde(rename = "modifierExtension")]
    pub modifier_extension: Option<Vec<Extension>>,
    /// The type of contact
    pub purpose: Option<CodeableConcept>,
    /// A name associated with the contact
    pub name: Option<HumanName>,
    /// Contact details (telephone, email, etc.) for a contact
    pub telecom: Option<Vec<ContactPoint>>,
    /// Visiting or postal addresses for the contact
    pub address: Option<Address>,
}

/// Coverage details
#[derive(Debug, Clone, PartialEq, Default, FhirSerde)]
#[fhir_type(name = "InsurancePlanCoverage", kind = "backbone_element")]
pub struct InsurancePlanCoverage {
    /// Unique id for inter-element referencing
    pub id: Option<std::string::String>,
    /// Additional content defined by implementations
    pub extension: Option<Vec<Extension>>,
    /// Extensions that cannot be ignored even if unrecognized
    #[fhir_serde(rename = "modifierExtension")]
    pub modifier_extension: Option<Vec<Extension>>,
    /// Type of coverage
    #[fhir_serde(rename = "type")]
    pub r#type: CodeableConcept,
    /// What networks provide coverage
    pub network: Option<Vec<Reference>>,
    /// List of benefits
    pub benefit: Vec<InsurancePlanCoverageBenefit>,
}

/// List of benefits
#[derive(Debug, Clone, PartialEq, Default, FhirSerde)]
#[fhir_type(name = "InsurancePlanCoverageBenefit", kind = "backbone_element")]
pub struct InsurancePlanCoverageBenefit {
    /// Unique id for inter-element referencing
    pub id: Option<std::string::String>,
    /// Additional content defined by implementations
    pub extension: Option<Vec<Extension>>,
    /// Extensions that cannot be ignored even if unrecognized
    #[fhir_serde(rename = "modifierExtension")]
    pub modifier_extension: Option<Vec<Extension>>,
    /// Type of benefit
    #[fhir_serde(rename = "type")]
    pub r#type: CodeableConcept,
    /// Referral requirements
    pub requirement: Option<String>,
    /// Benefit limits
    pub limit: Option<Vec<InsurancePlanCoverageBenefitLimit>>,
}

/// Benefit limits
#[derive(Debug, Clone, PartialEq, Default, FhirSerde)]
#[fhir_type(name = "InsurancePlanCoverageBenefitLimit", kind = "backbone_element")]
pub struct InsurancePlanCoverageBenefitLimit {
    /// Unique id for inter-element referencing
    pub id: Option<std::string::String>,
    /// Additional content defined by implementations
    pub extension: Option<Vec<Extension>>,
    /// Extensions that cannot be ignored even if unrecognized
    #[fhir_serde(rename = "modifierExtension")]
    pub modifier_extension: Option<Vec<Extension>>,
    /// Maximum value allowed
    pub value: Option<Quantity>,
    /// Benefit limit details
    pub code: Option<CodeableConcept>,
}

/// Plan details
#[derive(Debug, Clone, PartialEq, Default, FhirSerde)]
#[fhir_type(name = "InsurancePlanPlan", kind = "backbone_element")]
pub struct InsurancePlanPlan {
    /// Unique id for inter-element referencing
    pub id: Option<std::string::String>,
    /// Additional content defined by implementations
    pub extension: Option<Vec<Extension>>,
    /// Extensions that cannot be ignored even if unrecognized
    #[fhir_serde(rename = "modifierExtension")]
    pub modifier_extension: Option<Vec<Extension>>,
    /// Business Identifier for Product
    pub identifier: Option<Vec<Identifier>>,
    /// Type of plan
    #[fhir_serde(rename = "type")]
    pub r#type: Option<CodeableConcept>,
    /// Where product applies
    #[fhir_serde(rename = "coverageArea")]
    pub coverage_area: Option<Vec<Reference>>,
    /// What networks provide coverage
    pub network: Option<Vec<Reference>>,
    /// Overall costs
    #[fhir_serde(rename = "generalCost")]
    pub general_cost: Option<Vec<InsurancePlanPlanGeneralCost>>,
    /// Specific costs
    #[fhir_serde(rename = "specificCost")]
    pub specific_cost: Option<Vec<InsurancePlanPlanSpecificCost>>,
}

/// Overall costs
#[derive(Debug, Clone, PartialEq, Default, FhirSerde)]
#[fhir_type(name = "InsurancePlanPlanGeneralCost", kind = "backbone_element")]
pub struct InsurancePlanPlanGeneralCost {
    /// Unique id for inter-element referencing
    pub id: Option<std::string::String>,
    /// Additional content defined by implementations
    pub extension: Option<Vec<Extension>>,
    /// Extensions that cannot be ignored even if unrecognized
    #[fhir_serde(rename = "modifierExtension")]
    pub modifier_extension: Option<Vec<Extension>>,
    /// Type of cost
    #[fhir_serde(rename = "type")]
    pub r#type: Option<CodeableConcept>,
    /// Number of enrollees
    #[fhir_serde(rename = "groupSize")]
    pub group_size: Option<PositiveInt>,
    /// Cost value
    pub cost: Option<Money>,
    /// Additional cost information
    pub comment: Option<String>,
}

/// Specific costs
#[derive(Debug, Clone, PartialEq, Default, FhirSerde)]
#[fhir_type(name = "InsurancePlanPlanSpecificCost", kind = "backbone_element")]
pub struct InsurancePlanPlanSpecificCost {
    /// Unique id for inter-element referencing
    pub id: Option<std::string::String>,
    /// Additional content defined by implementations
    pub extension: Option<Vec<Extension>>,
    /// Extensions that cannot be ignored even if unrecognized
    #[fhir_serde(rename = "modifierExtension")]
    pub modifier_extension: Option<Vec<Extension>>,
    /// General category of benefit
    pub category: CodeableConcept,
    /// Benefits list
    pub benefit: Option<Vec<InsurancePlanPlanSpecificCostBenefit>>,
}

/// Benefits list
#[derive(Debug, Clone, PartialEq, Default, FhirSerde)]
#[fhir_type(name = "InsurancePlanPlanSpecificCostBenefit", kind = "backbone_element")]
pub struct InsurancePlanPlanSpecificCostBenefit {
    /// Unique id for inter-element referencing
    pub id: Option<std::string::String>,
    /// Additional content defined by implementations
    pub extension: Option<Vec<Extension>>,
    /// Extensions that cannot be ignored even if unrecognized
    #[fhir_serde(rename = "modifierExtension")]
    pub modifier_extension: Option<Vec<Extension>>,
    /// Type of specific benefit
    #[fhir_serde(rename = "type")]
    pub r#type: CodeableConcept,
    /// List of the costs
    pub cost: Option<Vec<InsurancePlanPlanSpecificCostBenefitCost>>,
}

/// List of the costs
#[derive(Debug, Clone, PartialEq, Default, FhirSerde)]
#[fhir_type(name = "InsurancePlanPlanSpecificCostBenefitCost", kind = "backbone_element")]
pub struct InsurancePlanPlanSpecificCostBenefitCost {
    /// Unique id for inter-element referencing
    pub id: Option<std::string::String>,
    /// Additional content defined by implementations
    pub extension: Option<Vec<Extension>>,
    /// Extensions that cannot be ignored even if unrecognized
    #[fhir_serde(rename = "modifierExtension")]
    pub modifier_extension: Option<Vec<Extension>>,
    /// Type of cost
    #[fhir_serde(rename = "type")]
    pub r#type: CodeableConcept,
    /// in-network | out-of-network | other
    pub applicability: Option<CodeableConcept>,
    /// Additional information about the cost
    pub qualifiers: Option<Vec<CodeableConcept>>,
    /// The actual cost value
    pub value: Option<Quantity>,
}
