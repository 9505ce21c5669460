use crate::r4::*;
use crate::FhirSerde;

/// FHIR ClaimResponse type
///
/// This resource provides the adjudication details from the processing of a
/// Claim resource.
///
/// See: [ClaimResponse](http://hl7.org/fhir/StructureDefinition/ClaimResponse)
#[derive(Debug, Clone, PartialEq, Default, FhirSerde)]
#[fhir_type(name = "ClaimResponse", kind = "domain_resource")]
pub struct ClaimResponse {
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
    /// Business Identifier for a claim response
    pub identifier: Option<Vec<Identifier>>,
    /// The status of the resource instance
    pub status: Code,
    /// More granular claim type
    #[fhir_serde(rename = "type")]
    pub r#type: CodeableConcept,
    /// More granular claim type
    #[fhir_serde(rename = "subType")]
    pub sub_type: Option<CodeableConcept>,
    /// A code to indicate whether the nature of the request is: to request adjudication of products and services previously rendered; or requesting authorization and adjudication for provision in the future; or requesting the non-binding adjudication of the listed products and services which could be provided in the future
    #[fhir_serde(rename = "use")]
    pub r#use: Code,
    /// The recipient of the products and services
    pub patient: Reference,
    /// Response creation date
    pub created: DateTime,
    /// Party responsible for reimbursement
    pub insurer: Reference,
    /// Party responsible for the claim
    pub requestor: Option<Reference>,
    /// Id of resource triggering adjudication
    pub request: Option<Reference>,
    /// The outcome of the claim, predetermination, or preauthorization processing
    pub outcome: Code,
    /// Disposition Message
    pub disposition: Option<String>,
    /// Preauthorization reference
    #[fhir_serde(rename = "preAuthRef")]
    pub pre_auth_ref: Option<String>,
    /// Preauthorization reference effective period
    #[fhir_serde(rename = "preAuthPeriod")]
    pub pre_auth_period: Option<Period>,
    /// Party to be paid any benefits payable
    #[fhir_serde(rename = "payeeType")]
    pub payee_type: Option<CodeableConcept>,
    /// Adjudication for claim line items
    pub item: Option<Vec<ClaimResponseItem>>,
    /// Insurer added line items
    #[fhir_serde(rename = "addItem")]
    pub add_item: Option<Vec<ClaimResponseAddItem>>,
    /// Header-level adjudication
    pub adjudication: Option<Vec<ClaimResponseItemAdjudication>>,
    /// Adjudication totals
    pub total: Option<Vec<ClaimResponseTotal>>,
    /// Payment Details
    pub payment: Option<ClaimResponsePayment>,
    /// Funds reserved status
    #[fhir_serde(rename = "fundsReserve")]
    pub funds_reserve: Option<CodeableConcept>,
    /// Printed form identifier
    #[fhir_serde(rename = "formCode")]
    pub form_code: Option<CodeableConcept>,
    /// Printed reference or actual form
    pub form: Option<Attachment>,
    /// Note concerning adjudication
    #[fhir_serde(rename = "processNote")]
    pub process_note: Option<Vec<ClaimResponseProcessNote>>,
    /// Request for additional information
    #[fhir_serde(rename = "communicationRequest")]
    pub communication_request: Option<Vec<Reference>>,
    /// Patient insurance information
    pub insurance: Option<Vec<ClaimResponseInsurance>>,
    /// Processing errors
    pub error: Option<Vec<ClaimResponseError>>,
}

/// Choice of types for the serviced\[x\] field in ClaimResponseAddItem
#[derive(Debug, Clone, PartialEq, FhirSerde)]
#[fhir_choice_element(base_name = "serviced")]
pub enum ClaimResponseAddItemServiced {
    /// Variant accepting the Date type.
    #[fhir_serde(rename = "servicedDate")]
    Date(Date),
    /// Variant accepting the Period type.
    #[fhir_serde(rename = "servicedPeriod")]
    Period(Period),
}

/// Choice of types for the location\[x\] field in ClaimResponseAddItem
#[derive(Debug, Clone, PartialEq, FhirSerde)]
#[fhir_choice_element(base_name = "location")]
pub enum ClaimResponseAddItemLocation {
    /// Variant accepting the CodeableConcept type.
    #[fhir_serde(rename = "locationCodeableConcept")]
    CodeableConcept(CodeableConcept),
    /// Variant accepting the Address type.
    #[fhir_serde(rename = "locationAddress")]
    Address(Address),
    /// Variant accepting the Reference type.
    #[fhir_serde(rename = "locationReference")]
    Reference(Reference),
}

/// Insurer added line items
#[derive(Debug, Clone, PartialEq, Default, FhirSerde)]
#[fhir_type(name = "ClaimResponseAddItem", kind = "backbone_element")]
pub struct ClaimResponseAddItem {
    /// Unique id for inter-element referencing
    pub id: Option<std::string::String>,
    /// Additional content defined by implementations
    pub extension: Option<Vec<Extension>>,
    /// Extensions that cannot be ignored even if unrecognized
    #[fhir_serde(rename = "modifierExtension")]
    pub modifier_extension: Option<Vec<Extension>>,
    /// Item sequence number
    #[fhir_serde(rename = "itemSequence")]
    pub item_sequence: Option<Vec<PositiveInt>>,
    /// Detail sequence number
    #[fhir_serde(rename = "detailSequence")]
    pub detail_sequence: Option<Vec<PositiveInt>>,
    /// Subdetail sequence number
    #[fhir_serde(rename = "subdetailSequence")]
    pub subdetail_sequence: Option<Vec<PositiveInt>>,
    /// Authorized providers
    pub provider: Option<Vec<Reference>>,
    /// Billing, service, product, or drug code
    #[fhir_serde(rename = "productOrService")]
    pub product_or_service: CodeableConcept,
    /// Service/Product billing modifiers
    pub modifier: Option<Vec<CodeableConcept>>,
    /// Program the product or service is provided under
    #[fhir_serde(rename = "programCode")]
    pub program_code: Option<Vec<CodeableConcept>>,
    /// Date or dates of service or product delivery
    #[fhir_serde(flatten)]
    pub serviced: Option<ClaimResponseAddItemServiced>,
    /// Place of service or where product was supplied
    #[fhir_serde(flatten)]
    pub location: Option<ClaimResponseAddItemLocation>,
    /// Count of products or services
    pub quantity: Option<Quantity>,
    /// Fee, charge or cost per item
    #[fhir_serde(rename = "unitPrice")]
    pub unit_price: Option<Money>,
    /// Price scaling factor
    pub factor: Option<Decimal>,
    /// Total item cost
    pub net: Option<Money>,
    /// Anatomical location
    #[fhir_serde(rename = "bodySite")]
    pub body_site: Option<CodeableConcept>,
    /// Anatomical sub-location
    #[fhir_serde(rename = "subSite")]
    pub sub_site: Option<Vec<CodeableConcept>>,
    /// Applicable note numbers
    #[fhir_serde(rename = "noteNumber")]
    pub note_number: Option<Vec<PositiveInt>>,
    /// Added items adjudication
    pub adjudication: Vec<ClaimResponseItemAdjudication>,
    /// Insurer added line details
    pub detail: Option<Vec<ClaimResponseAddItemDetail>>,
}

/// Insurer added line details
#[derive(Debug, Clone, PartialEq, Default, FhirSerde)]
#[fhir_type(name = "ClaimResponseAddItemDetail", kind = "backbone_element")]
pub struct ClaimResponseAddItemDetail {
    /// Unique id for inter-element referencing
    pub id: Option<std::string::String>,
    /// Additional content defined by implementations
    pub extension: Option<Vec<Extension>>,
    /// Extensions that cannot be ignored even if unrecognized
    #[fhir_serde(rename = "modifierExtension")]
    pub modifier_extension: Option<Vec<Extension>>,
    /// Billing, service, product, or drug code
    #[fhir_serde(rename = "productOrService")]
    pub product_or_service: CodeableConcept,
    /// Service/Product billing modifiers
    pub modifier: Option<Vec<CodeableConcept>>,
    /// Count of products or services
    pub quantity: Option<Quantity>,
    /// Fee, charge or cost per item
    #[fhir_serde(rename = "unitPrice")]
    pub unit_price: Option<Money>,
    /// Price scaling factor
    pub factor: Option<Decimal>,
    /// Total item cost
    pub net: Option<Money>,
    /// Applicable note numbers
    #[fhir_serde(rename = "noteNumber")]
    pub note_number: Option<Vec<PositiveInt>>,
    /// Added items detail adjudication
    pub adjudication: Vec<ClaimResponseItemAdjudication>,
    /// Insurer added line items
    #[fhir_serde(rename = "subDetail")]
    pub sub_detail: Option<Vec<ClaimResponseAddItemDetailSubDetail>>,
}

/// Insurer added line items
#[derive(Debug, Clone, PartialEq, Default, FhirSerde)]
#[fhir_type(name = "ClaimResponseAddItemDetailSubDetail", kind = "backbone_element")]
pub struct ClaimResponseAddItemDetailSubDetail {
    /// Unique id for inter-element referencing
    pub id: Option<std::string::String>,
    /// Additional content defined by implementations
    pub extension: Option<Vec<Extension>>,
    /// Extensions that cannot be ignored even if unrecognized
    #[fhir_serde(rename = "modifierExtension")]
    pub modifier_extension: Option<Vec<Extension>>,
    /// Billing, service, product, or drug code
    #[fhir_serde(rename = "productOrService")]
    pub product_or_service: CodeableConcept,
    /// Service/Product billing modifiers
    pub modifier: Option<Vec<CodeableConcept>>,
    /// Count of products or services
    pub quantity: Option<Quantity>,
    /// Fee, charge or cost per item
    #[fhir_serde(rename = "unitPrice")]
    pub unit_price: Option<Money>,
    /// Price scaling factor
    pub factor: Option<Decimal>,
    /// Total item cost
    pub net: Option<Money>,
    /// Applicable note numbers
    #[fhir_serde(rename = "noteNumber")]
    pub note_number: Option<Vec<PositiveInt>>,
    /// Added items detail adjudication
    pub adjudication: Vec<ClaimResponseItemAdjudication>,
}

/// Processing errors
#[derive(Debug, Clone, PartialEq, Default, FhirSerde)]
#[fhir_type(name = "ClaimResponseError", kind = "backbone_element")]
pub struct ClaimResponseError {
    /// Unique id for inter-element referencing
    pub id: Option<std::string::String>,
    /// Additional content defined by implementations
    pub extension: Option<Vec<Extension>>,
    /// Extensions that cannot be ignored even if unrecognized
    #[fhir_serde(rename = "modifierExtension")]
    pub modifier_extension: Option<Vec<Extension>>,
    /// Item sequence number
    #[fhir_serde(rename = "itemSequence")]
    pub item_sequence: Option<PositiveInt>,
    /// Detail sequence number
    #[fhir_serde(rename = "detailSequence")]
    pub detail_sequence: Option<PositiveInt>,
    /// Subdetail sequence number
    #[fhir_serde(rename = "subDetailSequence")]
    pub sub_detail_sequence: Option<PositiveInt>,
    /// Error code detailing processing issues
    pub code: CodeableConcept,
}

/// Patient insurance information
#[derive(Debug, Clone, PartialEq, Default, FhirSerde)]
#[fhir_type(name = "ClaimResponseInsurance", kind = "backbone_element")]
pub struct ClaimResponseInsurance {
    /// Unique id for inter-element referencing
    pub id: Option<std::string::String>,
    /// Additional content defined by implementations
    pub extension: Option<Vec<Extension>>,
    /// Extensions that cannot be ignored even if unrecognized
    #[fhir_serde(rename = "modifierExtension")]
    pub modifier_extension: Option<Vec<Extension>>,
    /// Insurance instance identifier
    pub sequence: PositiveInt,
    /// Coverage to be used for adjudication
    pub focal: Boolean,
    /// Insurance information
    pub coverage: Reference,
    /// Additional provider contract number
    #[fhir_serde(rename = "businessArrangement")]
    pub business_arrangement: Option<String>,
    /// Adjudication results
    #[fhir_serde(rename = "claimResponse")]
    pub claim_response: Option<Reference>,
}

/// Adjudication for claim line items
#[derive(Debug, Clone, PartialEq, Default, FhirSerde)]
#[fhir_type(name = "ClaimResponseItem", kind = "backbone_element")]
pub struct ClaimResponseItem {
    /// Unique id for inter-element referencing
    pub id: Option<std::string::String>,
    /// Additional content defined by implementations
    pub extension: Option<Vec<Extension>>,
    /// Extensions that cannot be ignored even if unrecognized
    #[fhir_serde(rename = "modifierExtension")]
    pub modifier_extension: Option<Vec<Extension>>,
    /// Claim item instance identifier
    #[fhir_serde(rename = "itemSequence")]
    pub item_sequence: PositiveInt,
    /// Applicable note numbers
    #[fhir_serde(rename = "noteNumber")]
    pub note_number: Option<Vec<PositiveInt>>,
    /// Adjudication details
    pub adjudication: Vec<ClaimResponseItemAdjudication>,
    /// Adjudication for claim details
    pub detail: Option<Vec<ClaimResponseItemDetail>>,
}

/// Adjudication details
#[derive(Debug, Clone, PartialEq, Default, FhirSerde)]
#[fhir_type(name = "ClaimResponseItemAdjudication", kind = "backbone_element")]
pub struct ClaimResponseItemAdjudication {
    /// Unique id for inter-element referencing
    pub id: Option<std::string::String>,
    /// Additional content defined by implementations
    pub extension: Option<Vec<Extension>>,
    /// Extensions that cannot be ignored even if unrecognized
    #[fhir_serde(rename = "modifierExtension")]
    pub modifier_extension: Option<Vec<Extension>>,
    /// Type of adjudication information
    pub category: CodeableConcept,
    /// Explanation of adjudication outcome
    pub reason: Option<CodeableConcept>,
    /// Monetary amount
    pub amount: Option<Money>,
    /// Non-monetary value
    pub value: Option<Decimal>,
}

/// Adjudication for claim details
#[derive(Debug, Clone, PartialEq, Default, FhirSerde)]
#[fhir_type(name = "ClaimResponseItemDetail", kind = "backbone_element")]
pub struct ClaimResponseItemDetail {
    /// Unique id for inter-element referencing
    pub id: Option<std::string::String>,
    /// Additional content defined by implementations
    pub extension: Option<Vec<Extension>>,
    /// Extensions that cannot be ignored even if unrecognized
    #[fhir_serde(rename = "modifierExtension")]
    pub modifier_extension: Option<Vec<Extension>>,
    /// Claim detail instance identifier
    #[fhir_serde(rename = "detailSequence")]
    pub detail_sequence: PositiveInt,
    /// Applicable note numbers
    #[fhir_serde(rename = "noteNumber")]
    pub note_number: Option<Vec<PositiveInt>>,
    /// Detail level adjudication details
    pub adjudication: Vec<ClaimResponseItemAdjudication>,
    /// Adjudication for claim sub-details
    #[fhir_serde(rename = "subDetail")]
    pub sub_detail: Option<Vec<ClaimResponseItemDetailSubDetail>>,
}

/// Adjudication for claim sub-details
#[derive(Debug, Clone, PartialEq, Default, FhirSerde)]
#[fhir_type(name = "ClaimResponseItemDetailSubDetail", kind = "backbone_element")]
pub struct ClaimResponseItemDetailSubDetail {
    /// Unique id for inter-element referencing
    pub id: Option<std::string::String>,
    /// Additional content defined by implementations
    pub extension: Option<Vec<Extension>>,
    /// Extensions that cannot be ignored even if unrecognized
    #[fhir_serde(rename = "modifierExtension")]
    pub modifier_extension: Option<Vec<Extension>>,
    /// Claim sub-detail instance identifier
    #[fhir_serde(rename = "subDetailSequence")]
    pub sub_detail_sequence: PositiveInt,
    /// Applicable note numbers
    #[fhir_serde(rename = "noteNumber")]
    pub note_number: Option<Vec<PositiveInt>>,
    /// Subdetail level adjudication details
    pub adjudication: Option<Vec<ClaimResponseItemAdjudication>>,
}

/// Payment Details
#[derive(Debug, Clone, PartialEq, Default, FhirSerde)]
#[fhir_type(name = "ClaimResponsePayment", kind = "backbone_element")]
pub struct ClaimResponsePayment {
    /// Unique id for inter-element referencing
    pub id: Option<std::string::String>,
    /// Additional content defined by implementations
    pub extension: Option<Vec<Extension>>,
    /// Extensions that cannot be ignored even if unrecognized
    #[fhir_serde(rename = "modifierExtension")]
    pub modifier_extension: Option<Vec<Extension>>,
    /// Partial or complete payment
    #[fhir_serde(rename = "type")]
    pub r#type: CodeableConcept,
    /// Payment adjustment for non-claim issues
    pub adjustment: Option<Money>,
    /// Explanation for the adjustment
    #[fhir_serde(rename = "adjustmentReason")]
    pub adjustment_reason: Option<CodeableConcept>,
    /// Expected date of payment
    pub date: Option<Date>,
    /// Payable amount after adjustment
    pub amount: Money,
    /// Business identifier for the payment
    pub identifier: Option<Identifier>,
}

/// Note concerning adjudication
#[derive(Debug, Clone, PartialEq, Default, FhirSerde)]
#[fhir_type(name = "ClaimResponseProcessNote", kind = "backbone_element")]
pub struct ClaimResponseProcessNote {
    /// Unique id for inter-element referencing
    pub id: Option<std::string::String>,
    /// Additional content defined by implementations
    pub extension: Option<Vec<Extension>>,
    /// Extensions that cannot be ignored even if unrecognized
    #[fhir_serde(rename = "modifierExtension")]
    pub modifier_extension: Option<Vec<Extension>>,
    /// Note instance identifier
    pub number: Option<PositiveInt>,
    /// The business purpose of the note text
    #[fhir_serde(rename = "type")]
    pub r#type: Option<Code>,
    /// Note explanatory text
    pub text: String,
    /// Language of the text
    pub language: Option<CodeableConcept>,
}

/// Adjudication totals
#[derive(Debug, Clone, PartialEq, Default, FhirSerde)]
#[fhir_type(name = "ClaimResponseTotal", kind = "backbone_element")]
pub struct ClaimResponseTotal {
    /// Unique id for inter-element referencing
    pub id: Option<std::string::String>,
    /// Additional content defined by implementations
    pub extension: Option<Vec<Extension>>,
    /// Extensions that cannot be ignored even if unrecognized
    #[fhir_serde(rename = "modifierExtension")]
    pub modifier_extension: Option<Vec<Extension>>,
    /// Type of adjudication information
    pub category: CodeableConcept,
    /// Financial total for the category
    pub amount: Money,
}
