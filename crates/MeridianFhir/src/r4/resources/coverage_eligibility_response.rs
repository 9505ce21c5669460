use crate::r4::*;
use crate::FhirSerde;

/// Choice of types for the serviced\[x\] field in CoverageEligibilityResponse
#[derive(Debug, Clone, PartialEq, FhirSerde)]
#[fhir_choice_element(base_name = "serviced")]
pub enum CoverageEligibilityResponseServiced {
    /// Variant accepting the Date type.
    #[fhir_serde(rename = "servicedDate")]
    Date(Date),
    /// Variant accepting the Period type.
    #[fhir_serde(rename = "servicedPeriod")]
    Period(Period),
}

/// FHIR CoverageEligibilityResponse type
///
/// This resource provides eligibility and plan details from the processing of an
/// CoverageEligibilityRequest resource.
///
/// See: [CoverageEligibilityResponse](http://hl7.org/fhir/StructureDefinition/CoverageEligibilityResponse)
#[derive(Debug, Clone, PartialEq, Default, FhirSerde)]
#[fhir_type(name = "CoverageEligibilityResponse", kind = "domain_resource")]
pub struct CoverageEligibilityResponse {
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
    /// Business Identifier for coverage eligiblity request
    pub identifier: Option<Vec<Identifier>>,
    /// The status of the resource instance
    pub status: Code,
    /// Code to specify whether requesting: prior authorization requirements for some service categories or billing codes; benefits for coverages specified or discovered; discovery and return of coverages for the patient; and/or validation that the specified coverage is in-force at the date/period specified or 'now' if not specified
    pub purpose: Vec<Code>,
    /// Intended recipient of products and services
    pub patient: Reference,
    /// Estimated date or dates of service
    #[fhir_serde(flatten)]
    pub serviced: Option<CoverageEligibilityResponseServiced>,
    /// Response creation date
    pub created: DateTime,
    /// Party responsible for the request
    pub requestor: Option<Reference>,
    /// Eligibility request reference
    pub request: Reference,
    /// The outcome of the request processing
    pub outcome: Code,
    /// Disposition Message
    pub disposition: Option<String>,
    /// Coverage issuer
    pub insurer: Reference,
    /// Patient insurance information
    pub insurance: Option<Vec<CoverageEligibilityResponseInsurance>>,
    /// Preauthorization reference
    #[fhir_serde(rename = "preAuthRef")]
    pub pre_auth_ref: Option<String>,
    /// Printed form identifier
    pub form: Option<CodeableConcept>,
    /// Processing errors
    pub error: Option<Vec<CoverageEligibilityResponseError>>,
}

/// Processing errors
#[derive(Debug, Clone, PartialEq, Default, FhirSerde)]
#[fhir_type(name = "CoverageEligibilityResponseError", kind = "backbone_element")]
pub struct CoverageEligibilityResponseError {
    /// Unique id for inter-element referencing
    pub id: Option<std::string::String>,
    /// Additional content defined by implementations
    pub extension: Option<Vec<Extension>>,
    /// Extensions that cannot be ignored even if unrecognized
    #[fhir_serde(rename = "modifierExtension")]
    pub modifier_extension: Option<Vec<Extension>>,
    /// Error code detailing processing issues
    pub code: CodeableConcept,
}

/// Patient insurance information
#[derive(Debug, Clone, PartialEq, Default, FhirSerde)]
#[fhir_type(name = "CoverageEligibilityResponseInsurance", kind = "backbone_element")]
pub struct CoverageEligibilityResponseInsurance {
    /// Unique id for inter-element referencing
    pub id: Option<std::string::String>,
    /// Additional content defined by implementations
    pub extension: Option<Vec<Extension>>,
    /// Extensions that cannot be ignored even if unrecognized
    #[fhir_serde(rename = "modifierExtension")]
    pub modifier_extension: Option<Vec<Extension>>,
    /// Insurance information
    pub coverage: Reference,
    /// Coverage inforce indicator
    pub inforce: Option<Boolean>,
    /// When the benefits are applicable
    #[fhir_serde(rename = "benefitPeriod")]
    pub benefit_period: Option<Period>,
    /// Benefits and authorization details
    pub item: Option<Vec<CoverageEligibilityResponseInsuranceItem>>,
}

/// Benefits and authorization details
#[derive(Debug, Clone, PartialEq, Default, FhirSerde)]
#[fhir_type(name = "CoverageEligibilityResponseInsuranceItem", kind = "backbone_element")]
pub struct CoverageEligibilityResponseInsuranceItem {
    /// Unique id for inter-element referencing
    pub id: Option<std::string::String>,
    /// Additional content defined by implementations
    pub extension: Option<Vec<Extension>>,
    /// Extensions that cannot be ignored even if unrecognized
    #[fhir_serde(rename = "modifierExtension")]
    pub modifier_extension: Option<Vec<Extension>>,
    /// Benefit classification
    pub category: Option<CodeableConcept>,
    /// Billing, service, product, or drug code
    #[fhir_serde(rename = "productOrService")]
    pub product_or_service: Option<CodeableConcept>,
    /// Product or service billing modifiers
    pub modifier: Option<Vec<CodeableConcept>>,
    /// Performing practitioner
    pub provider: Option<Reference>,
    /// Excluded from the plan
    pub excluded: Option<Boolean>,
    /// Short name for the benefit
    pub name: Option<String>,
    /// Description of the benefit or services covered
    pub description: Option<String>,
    /// In or out of network
    pub network: Option<CodeableConcept>,
    /// Individual or family
    pub unit: Option<CodeableConcept>,
    /// Annual or lifetime
    pub term: Option<CodeableConcept>,
    /// Benefit Summary
    pub benefit: Option<Vec<CoverageEligibilityResponseInsuranceItemBenefit>>,
    /// Authorization required flag
    #[fhir_serde(rename = "authorizationRequired")]
    pub authorization_required: Option<Boolean>,
    /// Type of required supporting materials
    #[fhir_serde(rename = "authorizationSupporting")]
    pub authorization_supporting: Option<Vec<CodeableConcept>>,
    /// Preauthorization requirements endpoint
    #[fhir_serde(rename = "authorizationUrl")]
    pub authorization_url: Option<String>,
}

/// Choice of types for the allowed\[x\] field in CoverageEligibilityResponseInsuranceItemBenefit
#[derive(Debug, Clone, PartialEq, FhirSerde)]
#[fhir_choice_element(base_name = "allowed")]
pub enum CoverageEligibilityResponseInsuranceItemBenefitAllowed {
    /// Variant accepting the UnsignedInt type.
    #[fhir_serde(rename = "allowedUnsignedInt")]
    UnsignedInt(UnsignedInt),
    /// Variant accepting the String type.
    #[fhir_serde(rename = "allowedString")]
    String(String),
    /// Variant accepting the Money type.
    #[fhir_serde(rename = "allowedMoney")]
    Money(Money),
}

/// Choice of types for the used\[x\] field in CoverageEligibilityResponseInsuranceItemBenefit
#[derive(Debug, Clone, PartialEq, FhirSerde)]
#[fhir_choice_element(base_name = "used")]
pub enum CoverageEligibilityResponseInsuranceItemBenefitUsed {
    /// Variant accepting the UnsignedInt type.
    #[fhir_serde(rename = "usedUnsignedInt")]
    UnsignedInt(UnsignedInt),
    /// Variant accepting the String type.
    #[fhir_serde(rename = "usedString")]
    String(String),
    /// Variant accepting the Money type.
    #[fhir_serde(rename = "usedMoney")]
    Money(Money),
}

/// Benefit Summary
#[derive(Debug, Clone, PartialEq, Default, FhirSerde)]
#[fhir_type(name = "CoverageEligibilityResponseInsuranceItemBenefit", kind = "backbone_element")]
pub struct CoverageEligibilityResponseInsuranceItemBenefit {
    /// Unique id for inter-element referencing
    pub id: Option<std::string::String>,
    /// Additional content defined by implementations
    pub extension: Option<Vec<Extension>>,
    /// Extensions that cannot be ignored even if unrecognized
    #[fhir_serde(rename = "modifierExtension")]
    pub modifier_extension: Option<Vec<Extension>>,
    /// Benefit classification
    #[fhir_serde(rename = "type")]
    pub r#type: CodeableConcept,
    /// Benefits allowed
    #[fhir_serde(flatten)]
    pub allowed: Option<CoverageEligibilityResponseInsuranceItemBenefitAllowed>,
    /// Benefits used
    #[fhir_serde(flatten)]
    pub used: Option<CoverageEligibilityResponseInsuranceItemBenefitUsed>,
}
