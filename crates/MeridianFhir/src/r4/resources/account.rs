use crate::r4::*;
use crate::FhirSerde;

/// FHIR Account type
///
/// A financial tool for tracking value accrued for a particular purpose. In the
/// healthcare field, used to track charges for a patient, cost centers, etc.
///
/// See: [Account](http://hl7.org/fhir/StructureDefinition/Account)
#[derive(Debug, Clone, PartialEq, Default, FhirSerde)]
#[fhir_type(name = "Account", kind = "domain_resource")]
pub struct Account {
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
    /// Account number
    pub identifier: Option<Vec<Identifier>>,
    /// active | inactive | entered-in-error | on-hold | unknown
    pub status: Code,
    /// E.g. patient, expense, depreciation
    #[fhir_serde(rename = "type")]
    pub r#type: Option<CodeableConcept>,
    /// Human-readable label
    pub name: Option<String>,
    /// The entity that caused the expenses
    pub subject: Option<Vec<Reference>>,
    /// Transaction window
    #[fhir_serde(rename = "servicePeriod")]
    pub service_period: Option<Period>,
    /// The party(s) that are responsible for covering the payment of this account, and what order should they be applied to the account
    pub coverage: Option<Vec<AccountCoverage>>,
    /// Entity managing the Account
    pub owner: Option<Reference>,
    /// Explanation of purpose/use
    pub description: Option<String>,
    /// The parties ultimately responsible for balancing the Account
    pub guarantor: Option<Vec<AccountGuarantor>>,
    /// Reference to a parent Account
    #[fhir_serde(rename = "partOf")]
    pub part_of: Option<Reference>,
}

/// The party(s) that are responsible for covering the payment of this account, and what order should they be applied to the account
#[derive(Debug, Clone, PartialEq, Default, FhirSerde)]
#[fhir_type(name = "AccountCoverage", kind = "backbone_element")]
pub struct AccountCoverage {
    /// Unique id for inter-element referencing
    pub id: Option<std::string::String>,
    /// Additional content defined by implementations
    pub extension: Option<Vec<Extension>>,
    /// Extensions that cannot be ignored even if unrecognized
    #[fhir_serde(rename = "modifierExtension")]
    pub modifier_extension: Option<Vec<Extension>>,
    /// The party(s), such as insurances, that may contribute to the payment of this account
    pub coverage: Reference,
    /// The priority of the coverage in the context of this account
    pub priority: Option<PositiveInt>,
}

/// The parties ultimately responsible for balancing the Account
#[derive(Debug, Clone, PartialEq, Default, FhirSerde)]
#[fhir_type(name = "AccountGuarantor", kind = "backbone_element")]
pub struct AccountGuarantor {
    /// Unique id for inter-element referencing
    pub id: Option<std::string::String>,
    /// Additional content defined by implementations
    pub extension: Option<Vec<Extension>>,
    /// Extensions that cannot be ignored even if unrecognized
    #[fhir_serde(rename = "modifierExtension")]
    pub modifier_extension: Option<Vec<Extension>>,
    /// Responsible entity
    pub party: Reference,
    /// Credit or other hold applied
    #[fhir_serde(rename = "onHold")]
    pub on_hold: Option<Boolean>,
    /// Guarantee account during
    pub period: Option<Period>,
}
