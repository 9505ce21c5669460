use crate::r4::*;
use crate::FhirSerde;

/// FHIR PaymentReconciliation type
///
/// This resource provides the details including amount of a payment and
/// allocates the payment items being paid.
///
/// See: [PaymentReconciliation](http://hl7.org/fhir/StructureDefinition/PaymentReconciliation)
#[derive(Debug, Clone, PartialEq, Default, FhirSerde)]
#[fhir_type(name = "PaymentReconciliation", kind = "domain_resource")]
pub struct PaymentReconciliation {
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
    /// Business Identifier for a payment reconciliation
    pub identifier: Option<Vec<Identifier>>,
    /// The status of the resource instance
    pub status: Code,
    /// Period covered
    pub period: Option<Period>,
    /// Creation date
    pub created: DateTime,
    /// Party generating payment
    #[fhir_serde(rename = "paymentIssuer")]
    pub payment_issuer: Option<Reference>,
    /// Reference to requesting resource
    pub request: Option<Reference>,
    /// Responsible practitioner
    pub requestor: Option<Reference>,
    /// The outcome of a request for a reconciliation
    pub outcome: Option<Code>,
    /// Disposition message
    pub disposition: Option<String>,
    /// When payment issued
    #[fhir_serde(rename = "paymentDate")]
    pub payment_date: Date,
    /// Total amount of Payment
    #[fhir_serde(rename = "paymentAmount")]
    pub payment_amount: Money,
    /// Business identifier for the payment
    #[fhir_serde(rename = "paymentIdentifier")]
    pub payment_identifier: Option<Identifier>,
    /// Settlement particulars
    pub detail: Option<Vec<PaymentReconciliationDetail>>,
    /// Printed form identifier
    #[fhir_serde(rename = "formCode")]
    pub form_code: Option<CodeableConcept>,
    /// Note concerning processing
    #[fhir_serde(rename = "processNote")]
    pub process_note: Option<Vec<PaymentReconciliationProcessNote>>,
}

/// Settlement particulars
#[derive(Debug, Clone, PartialEq, Default, FhirSerde)]
#[fhir_type(name = "PaymentReconciliationDetail", kind = "backbone_element")]
pub struct PaymentReconciliationDetail {
    /// Unique id for inter-element referencing
    pub id: Option<std::string::String>,
    /// Additional content defined by implementations
    pub extension: Option<Vec<Extension>>,
    /// Extensions that cannot be ignored even if unrecognized
    #[fhir_serde(rename = "modifierExtension")]
    pub modifier_extension: Option<Vec<Extension>>,
    /// Business identifier of the payment detail
    pub identifier: Option<Identifier>,
    /// Business identifier of the prior payment detail
    pub predecessor: Option<Identifier>,
    /// Category of payment
    #[fhir_serde(rename = "type")]
    pub r#type: CodeableConcept,
    /// Request giving rise to the payment
    pub request: Option<Reference>,
    /// Submitter of the request
    pub submitter: Option<Reference>,
    /// Response committing to a payment
    pub response: Option<Reference>,
    /// Date of commitment to pay
    pub date: Option<Date>,
    /// Contact for the response
    pub responsible: Option<Reference>,
    /// Recipient of the payment
    pub payee: Option<Reference>,
    /// Amount allocated to this payable
    pub amount: Option<Money>,
}

/// Note concerning processing
#[derive(Debug, Clone, PartialEq, Default, FhirSerde)]
#[fhir_type(name = "PaymentReconciliationProcessNote", kind = "backbone_element")]
pub struct PaymentReconciliationProcessNote {
    /// Unique id for inter-element referencing
    pub id: Option<std::string::String>,
    /// Additional content defined by implementations
    pub extension: Option<Vec<Extension>>,
    /// Extensions that cannot be ignored even if unrecognized
    #[fhir_serde(rename = "modifierExtension")]
    pub modifier_extension: Option<Vec<Extension>>,
    /// The business purpose of the note text
    #[fhir_serde(rename = "type")]
    pub r#type: Option<Code>,
    /// Note explanatory text
    pub text: Option<String>,
}
