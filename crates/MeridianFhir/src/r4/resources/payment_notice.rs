use crate::r4::*;
use crate::FhirSerde;

/// FHIR PaymentNotice type
///
/// This resource provides the status of the payment for goods and services
/// rendered, and the request and response resource references.
///
/// See: [PaymentNotice](http://hl7.org/fhir/StructureDefinition/PaymentNotice)
#[derive(Debug, Clone, PartialEq, Default, FhirSerde)]
#[fhir_type(name = "PaymentNotice", kind = "domain_resource")]
pub struct PaymentNotice {
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
    /// Business Identifier for the payment noctice
    pub identifier: Option<Vec<Identifier>>,
    /// active | cancelled | draft | entered-in-error
    pub status: Code,
    /// Request reference
    pub request: Option<Reference>,
    /// Response reference
    pub response: Option<Reference>,
    /// Creation date
    pub created: DateTime,
    /// Responsible practitioner
    pub provider: Option<Reference>,
    /// Payment reference
    pub payment: Reference,
    /// Payment or clearing date
    #[fhir_serde(rename = "paymentDate")]
    pub payment_date: Option<Date>,
    /// Party being paid
    pub payee: Option<Reference>,
    /// Party being notified
    pub recipient: Reference,
    /// Monetary amount of the payment
    pub amount: Money,
    /// Issued or cleared Status of the payment
    #[fhir_serde(rename = "paymentStatus")]
    pub payment_status: Option<CodeableConcept>,
}
