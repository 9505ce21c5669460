use crate::r4::*;
use crate::FhirSerde;

/// FHIR Coverage type
///
/// Financial instrument which may be used to reimburse or pay for health care
/// products and services. Includes both insurance and self-payment.
///
/// See: [Coverage](http://hl7.org/fhir/StructureDefinition/Coverage)
#[derive(Debug, Clone, PartialEq, Default, FhirSerde)]
#[fhir_type(name = "Coverage", kind = "domain_resource")]
pub struct Coverage {
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
    /// Business Identifier for the coverage
    pub identifier: Option<Vec<Identifier>>,
    /// The status of the resource instance
    pub status: Code,
    /// Coverage category such as medical or accident
    #[fhir_serde(rename = "type")]
    pub r#type: Option<CodeableConcept>,
    /// Owner of the policy
    #[fhir_serde(rename = "policyHolder")]
    pub policy_holder: Option<Reference>,
    /// Subscriber to the policy
    pub subscriber: Option<Reference>,
    /// ID assigned to the subscriber
    #[fhir_serde(rename = "subscriberId")]
    pub subscriber_id: Option<String>,
    /// Plan beneficiary
    pub beneficiary: Reference,
    /// Dependent number
    pub dependent: Option<String>,
    /// Beneficiary relationship to the subscriber
    pub relationship: Option<CodeableConcept>,
    /// Coverage start and end dates
    pub period: Option<Period>,
    /// Issuer of the policy
    pub payor: Vec<Reference>,
    /// Additional coverage classifications
    pub class: Option<Vec<CoverageClass>>,
    /// Relative order of the coverage
    pub order: Option<PositiveInt>,
    /// Insurer network
    pub network: Option<String>,
    /// Patient payments for services/products
    #[fhir_serde(rename = "costToBeneficiary")]
    pub cost_to_beneficiary: Option<Vec<CoverageCostToBeneficiary>>,
    /// Reimbursement to insurer
    pub subrogation: Option<Boolean>,
    /// Contract details
    pub contract: Option<Vec<Reference>>,
}

/// Additional coverage classifications
#[derive(Debug, Clone, PartialEq, Default, FhirSerde)]
#[fhir_type(name = "CoverageClass", kind = "backbone_element")]
pub struct CoverageClass {
    /// Unique id for inter-element referencing
    pub id: Option<std::string::String>,
    /// Additional content defined by implementations
    pub extension: Option<Vec<Extension>>,
    /// Extensions that cannot be ignored even if unrecognized
    #[fhir_serde(rename = "modifierExtension")]
    pub modifier_extension: Option<Vec<Extension>>,
    /// Type of class such as 'group' or 'plan'
    #[fhir_serde(rename = "type")]
    pub r#type: CodeableConcept,
    /// Value associated with the type
    pub value: String,
    /// Human readable description of the type and value
    pub name: Option<String>,
}

/// Choice of types for the value\[x\] field in CoverageCostToBeneficiary
#[derive(Debug, Clone, PartialEq, FhirSerde)]
#[fhir_choice_element(base_name = "value")]
pub enum CoverageCostToBeneficiaryValue {
    /// Variant accepting the Quantity type.
    #[fhir_serde(rename = "valueQuantity")]
    Quantity(Quantity),
    /// Variant accepting the Money type.
    #[fhir_serde(rename = "valueMoney")]
    Money(Money),
}

/// Patient payments for services/products
#[derive(Debug, Clone, PartialEq, FhirSerde)]
#[fhir_type(name = "CoverageCostToBeneficiary", kind = "backbone_element")]
pub struct CoverageCostToBeneficiary {
    /// Unique id for inter-element referencing
    pub id: Option<std::string::String>,
    /// Additional content defined by implementations
    pub extension: Option<Vec<Extension>>,
    /// Extensions that cannot be ignored even if unrecognized
    #[fhir_serde(rename = "modifierExtension")]
    pub modifier_extension: Option<Vec<Extension>>,
    /// Cost category
    #[fhir_serde(rename = "type")]
    pub r#type: Option<CodeableConcept>,
    /// The amount or percentage due from the beneficiary
    #[fhir_serde(flatten)]
    pub value: CoverageCostToBeneficiaryValue,
    /// Exceptions for patient payments
    pub exception: Option<Vec<CoverageCostToBeneficiaryException>>,
}

/// Exceptions for patient payments
#[derive(Debug, Clone, PartialEq, Default, FhirSerde)]
#[fhir_type(name = "CoverageCostToBeneficiaryException", kind = "backbone_element")]
pub struct CoverageCostToBeneficiaryException {
    /// Unique id for inter-element referencing
    pub id: Option<std::string::String>,
    /// Additional content defined by implementations
    pub extension: Option<Vec<Extension>>,
    /// Extensions that cannot be ignored even if unrecognized
    #[fhir_serde(rename = "modifierExtension")]
    pub modifier_extension: Option<Vec<Extension>>,
    /// Exception category
    #[fhir_serde(rename = "type")]
    pub r#type: CodeableConcept,
    /// The effective period of the exception
    pub period: Option<Period>,
}
