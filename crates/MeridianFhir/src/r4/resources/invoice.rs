use crate::r4::*;
use crate::FhirSerde;

/// FHIR Invoice type
///
/// Invoice containing collected ChargeItems from an Account with calculated
/// individual and total price for Billing purpose.
///
/// See: [Invoice](http://hl7.org/fhir/StructureDefinition/Invoice)
#[derive(Debug, Clone, PartialEq, Default, FhirSerde)]
#[fhir_type(name = "Invoice", kind = "domain_resource")]
pub struct Invoice {
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
    /// The current state of the Invoice
    pub status: Code,
    /// Reason for cancellation of this Invoice
    #[fhir_serde(rename = "cancelledReason")]
    pub cancelled_reason: Option<String>,
    /// Type of Invoice
    #[fhir_serde(rename = "type")]
    pub r#type: Option<CodeableConcept>,
    /// Recipient(s) of goods and services
    pub subject: Option<Reference>,
    /// Recipient of this invoice
    pub recipient: Option<Reference>,
    /// Invoice date / posting date
    pub date: Option<DateTime>,
    /// Participant in creation of this Invoice
    pub participant: Option<Vec<InvoiceParticipant>>,
    /// Issuing Organization of Invoice
    pub issuer: Option<Reference>,
    /// Account that is being balanced
    pub account: Option<Reference>,
    /// Line items of this Invoice
    #[fhir_serde(rename = "lineItem")]
    pub line_item: Option<Vec<InvoiceLineItem>>,
    /// Components of Invoice total
    #[fhir_serde(rename = "totalPriceComponent")]
    pub total_price_component: Option<Vec<InvoiceLineItemPriceComponent>>,
    /// Net total of this Invoice
    #[fhir_serde(rename = "totalNet")]
    pub total_net: Option<Money>,
    /// Gross total of this Invoice
    #[fhir_serde(rename = "totalGross")]
    pub total_gross: Option<Money>,
    /// Payment details
    #[fhir_serde(rename = "paymentTerms")]
    pub payment_terms: Option<String>,
    /// Comments made about the invoice
    pub note: Option<Vec<Annotation>>,
}

/// Choice of types for the chargeItem\[x\] field in InvoiceLineItem
#[derive(Debug, Clone, PartialEq, FhirSerde)]
#[fhir_choice_element(base_name = "chargeItem")]
pub enum InvoiceLineItemChargeItem {
    /// Variant accepting the Reference type.
    #[fhir_serde(rename = "chargeItemReference")]
    Reference(Reference),
    /// Variant accepting the CodeableConcept type.
    #[fhir_serde(rename = "chargeItemCodeableConcept")]
    CodeableConcept(CodeableConcept),
}

/// Line items of this Invoice
#[derive(Debug, Clone, PartialEq, FhirSerde)]
#[fhir_type(name = "InvoiceLineItem", kind = "backbone_element")]
pub struct InvoiceLineItem {
    /// Unique id for inter-element referencing
    pub id: Option<std::string::String>,
    /// Additional content defined by implementations
    pub extension: Option<Vec<Extension>>,
    /// Extensions that cannot be ignored even if unrecognized
    #[fhir_serde(rename = "modifierExtension")]
    pub modifier_extension: Option<Vec<Extension>>,
    /// Sequence number of line item
    pub sequence: Option<PositiveInt>,
    /// Reference to ChargeItem containing details of this line item or an inline billing code
    #[fhir_serde(flatten)]
    pub charge_item: InvoiceLineItemChargeItem,
    /// Components of total line item price
    #[fhir_serde(rename = "priceComponent")]
    pub price_component: Option<Vec<InvoiceLineItemPriceComponent>>,
}

/// Components of total line item price
#[derive(Debug, Clone, PartialEq, Default, FhirSerde)]
#[fhir_type(name = "InvoiceLineItemPriceComponent", kind = "backbone_element")]
pub struct InvoiceLineItemPriceComponent {
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

/// Participant in creation of this Invoice
#[derive(Debug, Clone, PartialEq, Default, FhirSerde)]
#[fhir_type(name = "InvoiceParticipant", kind = "backbone_element")]
pub struct InvoiceParticipant {
    /// Unique id for inter-element referencing
    pub id: Option<std::string::String>,
    /// Additional content defined by implementations
    pub extension: Option<Vec<Extension>>,
    /// Extensions that cannot be ignored even if unrecognized
    #[fhir_serde(rename = "modifierExtension")]
    pub modifier_extension: Option<Vec<Extension>>,
    /// Type of involvement in creation of this Invoice
    pub role: Option<CodeableConcept>,
    /// Individual who was involved
    pub actor: Reference,
}
