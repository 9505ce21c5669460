use crate::r4::*;
use crate::FhirSerde;

/// Choice of types for the occurrence\[x\] field in ChargeItem
#[derive(Debug, Clone, PartialEq, FhirSerde)]
#[fhir_choice_element(base_name = "occurrence")]
pub enum ChargeItemOccurrence {
    /// Variant accepting the DateTime type.
    #[fhir_serde(rename = "occurrenceDateTime")]
    DateTime(DateTime),
    /// Variant accepting the Period type.
    #[fhir_serde(rename = "occurrencePeriod")]
    Period(Period),
    /// Variant accepting the Timing type.
    #[fhir_serde(rename = "occurrenceTiming")]
    Timing(Timing),
}

/// Choice of types for the product\[x\] field in ChargeItem
#[derive(Debug, Clone, PartialEq, FhirSerde)]
#[fhir_choice_element(base_name = "product")]
pub enum ChargeItemProduct {
    /// Variant accepting the Reference type.
    #[fhir_serde(rename = "productReference")]
    Reference(Reference),
    /// Variant accepting the CodeableConcept type.
    #[fhir_serde(rename = "productCodeableConcept")]
    CodeableConcept(CodeableConcept),
}

/// FHIR ChargeItem type
///
/// The resource ChargeItem describes the provision of healthcare provider
/// products for a certain patient, therefore referring not only to the product,
/// but containing in addition details of the provision, like date, time, amounts
/// and participating organizations and persons. Main Usage of the ChargeItem is
/// to enable the billing process and internal cost allocation.
///
/// See: [ChargeItem](http://hl7.org/fhir/StructureDefinition/ChargeItem)
#[derive(Debug, Clone, PartialEq, Default, FhirSerde)]
#[fhir_type(name = "ChargeItem", kind = "domain_resource")]
pub struct ChargeItem {
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
    /// Business Identifier for item
    pub identifier: Option<Vec<Identifier>>,
    /// Defining information about the code of this charge item
    #[fhir_serde(rename = "definitionUri")]
    pub definition_uri: Option<Vec<String>>,
    /// Resource defining the code of this ChargeItem
    #[fhir_serde(rename = "definitionCanonical")]
    pub definition_canonical: Option<Vec<Canonical>>,
    /// The current state of the ChargeItem
    pub status: Code,
    /// Part of referenced ChargeItem
    #[fhir_serde(rename = "partOf")]
    pub part_of: Option<Vec<Reference>>,
    /// A code that identifies the charge, like a billing code
    pub code: CodeableConcept,
    /// Individual service was done for/to
    pub subject: Reference,
    /// Encounter / Episode associated with event
    pub context: Option<Reference>,
    /// When the charged service was applied
    #[fhir_serde(flatten)]
    pub occurrence: Option<ChargeItemOccurrence>,
    /// Who performed charged service
    pub performer: Option<Vec<ChargeItemPerformer>>,
    /// Organization providing the charged service
    #[fhir_serde(rename = "performingOrganization")]
    pub performing_organization: Option<Reference>,
    /// Organization requesting the charged service
    #[fhir_serde(rename = "requestingOrganization")]
    pub requesting_organization: Option<Reference>,
    /// Organization that has ownership of the (potential, future) revenue
    #[fhir_serde(rename = "costCenter")]
    pub cost_center: Option<Reference>,
    /// Quantity of which the charge item has been serviced
    pub quantity: Option<Quantity>,
    /// Anatomical location, if relevant
    pub bodysite: Option<Vec<CodeableConcept>>,
    /// Factor overriding the associated rules
    #[fhir_serde(rename = "factorOverride")]
    pub factor_override: Option<Decimal>,
    /// Price overriding the associated rules
    #[fhir_serde(rename = "priceOverride")]
    pub price_override: Option<Money>,
    /// Reason for overriding the list price/factor
    #[fhir_serde(rename = "overrideReason")]
    pub override_reason: Option<String>,
    /// Individual who was entering
    pub enterer: Option<Reference>,
    /// Date the charge item was entered
    #[fhir_serde(rename = "enteredDate")]
    pub entered_date: Option<DateTime>,
    /// Why was the charged service rendered?
    pub reason: Option<Vec<CodeableConcept>>,
    /// Which rendered service is being charged?
    pub service: Option<Vec<Reference>>,
    /// Product charged
    #[fhir_serde(flatten)]
    pub product: Option<ChargeItemProduct>,
    /// Account to place this charge
    pub account: Option<Vec<Reference>>,
    /// Comments made about the ChargeItem
    pub note: Option<Vec<Annotation>>,
    /// Further information supporting this charge
    #[fhir_serde(rename = "supportingInformation")]
    pub supporting_information: Option<Vec<Reference>>,
}

/// Who performed charged service
#[derive(Debug, Clone, PartialEq, Default, FhirSerde)]
#[fhir_type(name = "ChargeItemPerformer", kind = "backbone_element")]
pub struct ChargeItemPerformer {
    /// Unique id for inter-element referencing
    pub id: Option<std::string::String>,
    /// Additional content defined by implementations
    pub extension: Option<Vec<Extension>>,
    /// Extensions that cannot be ignored even if unrecognized
    #[fhir_serde(rename = "modifierExtension")]
    pub modifier_extension: Option<Vec<Extension>>,
    /// What type of performance was done
    pub function: Option<CodeableConcept>,
    /// Individual who was performing
    pub actor: Reference,
}
