use crate::r4::*;
use crate::FhirSerde;

/// Choice of types for the serviced\[x\] field in CoverageEligibilityRequest
#[derive(Debug, Clone, PartialEq, FhirSerde)]
#[fhir_choice_element(base_name = "serviced")]
pub enum CoverageEligibilityRequestServiced {
    /// Variant accepting the Date type.
    #[fhir_serde(rename = "servicedDate")]
    Date(Date),
    /// Variant accepting the Period type.
    #[fhir_serde(rename = "servicedPeriod")]
    Period(Period),
}

/// FHIR CoverageEligibilityRequest type
///
/// The CoverageEligibilityRequest provides patient and insurance coverage
/// information to an insurer for them to respond, in the form of an
/// CoverageEligibilityResponse, with information regarding whether the stated
/// coverage is valid and in-force and optionally to provide the insurance
/// details of the policy.
///
/// See: [CoverageEligibilityRequest](http://hl7.org/fhir/StructureDefinition/CoverageEligibilityRequest)
#[derive(Debug, Clone, PartialEq, Default, FhirSerde)]
#[fhir_type(name = "CoverageEligibilityRequest", kind = "domain_resource")]
pub struct CoverageEligibilityRequest {
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
    /// Desired processing priority
    pub priority: Option<CodeableConcept>,
    /// Code to specify whether requesting: prior authorization requirements for some service categories or billing codes; benefits for coverages specified or discovered; discovery and return of coverages for the patient; and/or validation that the specified coverage is in-force at the date/period specified or 'now' if not specified
    pub purpose: Vec<Code>,
    /// Intended recipient of products and services
    pub patient: Reference,
    /// Estimated date or dates of service
    #[fhir_serde(flatten)]
    pub serviced: Option<CoverageEligibilityRequestServiced>,
    /// Creation date
    pub created: DateTime,
    /// Author
    pub enterer: Option<Reference>,
    /// Party responsible for the request
    pub provider: Option<Reference>,
    /// Coverage issuer
    pub insurer: Reference,
    /// Servicing facility
    pub facility: Option<Reference>,
    /// Supporting information
    #[fhir_serde(rename = "supportingInfo")]
    pub supporting_info: Option<Vec<CoverageEligibilityRequestSupportingInfo>>,
    /// Patient insurance information
    pub insurance: Option<Vec<CoverageEligibilityRequestInsurance>>,
    /// Item to be evaluated for eligibiity
    pub item: Option<Vec<CoverageEligibilityRequestItem>>,
}

/// Patient insurance information
#[derive(Debug, Clone, PartialEq, Default, FhirSerde)]
#[fhir_type(name = "CoverageEligibilityRequestInsurance", kind = "backbone_element")]
pub struct CoverageEligibilityRequestInsurance {
    /// Unique id for inter-element referencing
    pub id: Option<std::string::String>,
    /// Additional content defined by implementations
    pub extension: Option<Vec<Extension>>,
    /// Extensions that cannot be ignored even if unrecognized
    #[fhir_serde(rename = "modifierExtension")]
    pub modifier_extension: Option<Vec<Extension>>,
    /// Applicable coverage
    pub focal: Option<Boolean>,
    /// Insurance information
    pub coverage: Reference,
    /// Additional provider contract number
    #[fhir_serde(rename = "businessArrangement")]
    pub business_arrangement: Option<String>,
}

/// Item to be evaluated for eligibiity
#[derive(Debug, Clone, PartialEq, Default, FhirSerde)]
#[fhir_type(name = "CoverageEligibilityRequestItem", kind = "backbone_element")]
pub struct CoverageEligibilityRequestItem {
    /// Unique id for inter-element referencing
    pub id: Option<std::string::String>,
    /// Additional content defined by implementations
    pub extension: Option<Vec<Extension>>,
    /// Extensions that cannot be ignored even if unrecognized
    #[fhir_serde(rename = "modifierExtension")]
    pub modifier_extension: Option<Vec<Extension>>,
    /// Applicable exception or supporting information
    #[fhir_serde(rename = "supportingInfoSequence")]
    pub supporting_info_sequence: Option<Vec<PositiveInt>>,
    /// Benefit classification
    pub category: Option<CodeableConcept>,
    /// Billing, service, product, or drug code
    #[fhir_serde(rename = "productOrService")]
    pub product_or_service: Option<CodeableConcept>,
    /// Product or service billing modifiers
    pub modifier: Option<Vec<CodeableConcept>>,
    /// Perfoming practitioner
    pub provider: Option<Reference>,
    /// Count of products or services
    pub quantity: Option<Quantity>,
    /// Fee, charge or cost per item
    #[fhir_serde(rename = "unitPrice")]
    pub unit_price: Option<Money>,
    /// Servicing facility
    pub facility: Option<Reference>,
    /// Applicable diagnosis
    pub diagnosis: Option<Vec<CoverageEligibilityRequestItemDiagnosis>>,
    /// Product or service details
    pub detail: Option<Vec<Reference>>,
}

/// Choice of types for the diagnosis\[x\] field in CoverageEligibilityRequestItemDiagnosis
#[derive(Debug, Clone, PartialEq, FhirSerde)]
#[fhir_choice_element(base_name = "diagnosis")]
pub enum CoverageEligibilityRequestItemDiagnosisDiagnosis {
    /// Variant accepting the CodeableConcept type.
    #[fhir_serde(rename = "diagnosisCodeableConcept")]
    CodeableConcept(CodeableConcept),
    /// Variant accepting the Reference type.
    #[fhir_serde(rename = "diagnosisReference")]
    Reference(Reference),
}

/// Applicable diagnosis
#[derive(Debug, Clone, PartialEq, Default, FhirSerde)]
#[fhir_type(name = "CoverageEligibilityRequestItemDiagnosis", kind = "backbone_element")]
pub struct CoverageEligibilityRequestItemDiagnosis {
    /// Unique id for inter-element referencing
    pub id: Option<std::string::String>,
    /// Additional content defined by implementations
    pub extension: Option<Vec<Extension>>,
    /// Extensions that cannot be ignored even if unrecognized
    #[fhir_serde(rename = "modifierExtension")]
    pub modifier_extension: Option<Vec<Extension>>,
    /// Nature of illness or problem
    #[fhir_serde(flatten)]
    pub diagnosis: Option<CoverageEligibilityRequestItemDiagnosisDiagnosis>,
}

/// Supporting information
#[derive(Debug, Clone, PartialEq, Default, FhirSerde)]
#[fhir_type(name = "CoverageEligibilityRequestSupportingInfo", kind = "backbone_element")]
pub struct CoverageEligibilityRequestSupportingInfo {
    /// Unique id for inter-element referencing
    pub id: Option<std::string::String>,
    /// Additional content defined by implementations
    pub extension: Option<Vec<Extension>>,
    /// Extensions that cannot be ignored even if unrecognized
    #[fhir_serde(rename = "modifierExtension")]
    pub modifier_extension: Option<Vec<Extension>>,
    /// Information instance identifier
    pub sequence: PositiveInt,
    /// Data to be provided
    pub information: Reference,
    /// Applies to all items
    #[fhir_serde(rename = "appliesToAll")]
    pub applies_to_all: Option<Boolean>,
}
