use crate::r4::*;
use crate::FhirSerde;

/// FHIR ExplanationOfBenefit type
///
/// This resource provides: the claim details; adjudication details from the
/// processing of a Claim; and optionally account balance information, for
/// informing the subscriber of the benefits provided.
///
/// See: [ExplanationOfBenefit](http://hl7.org/fhir/StructureDefinition/ExplanationOfBenefit)
#[derive(Debug, Clone, PartialEq, Default, FhirSerde)]
#[fhir_type(name = "ExplanationOfBenefit", kind = "domain_resource")]
pub struct ExplanationOfBenefit {
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
    /// Business Identifier for the resource
    pub identifier: Option<Vec<Identifier>>,
    /// The status of the resource instance
    pub status: Code,
    /// Category or discipline
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
    /// Relevant time frame for the claim
    #[fhir_serde(rename = "billablePeriod")]
    pub billable_period: Option<Period>,
    /// Response creation date
    pub created: DateTime,
    /// Author of the claim
    pub enterer: Option<Reference>,
    /// Party responsible for reimbursement
    pub insurer: Reference,
    /// Party responsible for the claim
    pub provider: Reference,
    /// Desired processing urgency
    pub priority: Option<CodeableConcept>,
    /// For whom to reserve funds
    #[fhir_serde(rename = "fundsReserveRequested")]
    pub funds_reserve_requested: Option<CodeableConcept>,
    /// Funds reserved status
    #[fhir_serde(rename = "fundsReserve")]
    pub funds_reserve: Option<CodeableConcept>,
    /// Prior or corollary claims
    pub related: Option<Vec<ExplanationOfBenefitRelated>>,
    /// Prescription authorizing services or products
    pub prescription: Option<Reference>,
    /// Original prescription if superceded by fulfiller
    #[fhir_serde(rename = "originalPrescription")]
    pub original_prescription: Option<Reference>,
    /// Recipient of benefits payable
    pub payee: Option<ExplanationOfBenefitPayee>,
    /// Treatment Referral
    pub referral: Option<Reference>,
    /// Servicing Facility
    pub facility: Option<Reference>,
    /// Claim reference
    pub claim: Option<Reference>,
    /// Claim response reference
    #[fhir_serde(rename = "claimResponse")]
    pub claim_response: Option<Reference>,
    /// The outcome of the claim, predetermination, or preauthorization processing
    pub outcome: Code,
    /// Disposition Message
    pub disposition: Option<String>,
    /// Preauthorization reference
    #[fhir_serde(rename = "preAuthRef")]
    pub pre_auth_ref: Option<Vec<String>>,
    /// Preauthorization in-effect period
    #[fhir_serde(rename = "preAuthRefPeriod")]
    pub pre_auth_ref_period: Option<Vec<Period>>,
    /// Care Team members
    #[fhir_serde(rename = "careTeam")]
    pub care_team: Option<Vec<ExplanationOfBenefitCareTeam>>,
    /// Supporting information
    #[fhir_serde(rename = "supportingInfo")]
    pub supporting_info: Option<Vec<ExplanationOfBenefitSupportingInfo>>,
    /// Pertinent diagnosis information
    pub diagnosis: Option<Vec<ExplanationOfBenefitDiagnosis>>,
    /// Clinical procedures performed
    pub procedure: Option<Vec<ExplanationOfBenefitProcedure>>,
    /// Precedence (primary, secondary, etc.)
    pub precedence: Option<PositiveInt>,
    /// Patient insurance information
    pub insurance: Vec<ExplanationOfBenefitInsurance>,
    /// Details of the event
    pub accident: Option<ExplanationOfBenefitAccident>,
    /// Product or service provided
    pub item: Option<Vec<ExplanationOfBenefitItem>>,
    /// Insurer added line items
    #[fhir_serde(rename = "addItem")]
    pub add_item: Option<Vec<ExplanationOfBenefitAddItem>>,
    /// Header-level adjudication
    pub adjudication: Option<Vec<ExplanationOfBenefitItemAdjudication>>,
    /// Adjudication totals
    pub total: Option<Vec<ExplanationOfBenefitTotal>>,
    /// Payment Details
    pub payment: Option<ExplanationOfBenefitPayment>,
    /// Printed form identifier
    #[fhir_serde(rename = "formCode")]
    pub form_code: Option<CodeableConcept>,
    /// Printed reference or actual form
    pub form: Option<Attachment>,
    /// Note concerning adjudication
    #[fhir_serde(rename = "processNote")]
    pub process_note: Option<Vec<ExplanationOfBenefitProcessNote>>,
    /// When the benefits are applicable
    #[fhir_serde(rename = "benefitPeriod")]
    pub benefit_period: Option<Period>,
    /// Balance by Benefit Category
    #[fhir_serde(rename = "benefitBalance")]
    pub benefit_balance: Option<Vec<ExplanationOfBenefitBenefitBalance>>,
}

/// Choice of types for the location\[x\] field in ExplanationOfBenefitAccident
#[derive(Debug, Clone, PartialEq, FhirSerde)]
#[fhir_choice_element(base_name = "location")]
pub enum ExplanationOfBenefitAccidentLocation {
    /// Variant accepting the Address type.
    #[fhir_serde(rename = "locationAddress")]
    Address(Address),
    /// Variant accepting the Reference type.
    #[fhir_serde(rename = "locationReference")]
    Reference(Reference),
}

/// Details of the event
#[derive(Debug, Clone, PartialEq, Default, FhirSerde)]
#[fhir_type(name = "ExplanationOfBenefitAccident", kind = "backbone_element")]
pub struct ExplanationOfBenefitAccident {
    /// Unique id for inter-element referencing
    pub id: Option<std::string::String>,
    /// Additional content defined by implementations
    pub extension: Option<Vec<Extension>>,
    /// Extensions that cannot be ignored even if unrecognized
    #[fhir_serde(rename = "modifierExtension")]
    pub modifier_extension: Option<Vec<Extension>>,
    /// When the incident occurred
    pub date: Option<Date>,
    /// The nature of the accident
    #[fhir_serde(rename = "type")]
    pub r#type: Option<CodeableConcept>,
    /// Where the event occurred
    #[fhir_serde(flatten)]
    pub location: Option<ExplanationOfBenefitAccidentLocation>,
}

/// Choice of types for the serviced\[x\] field in ExplanationOfBenefitAddItem
#[derive(Debug, Clone, PartialEq, FhirSerde)]
#[fhir_choice_element(base_name = "serviced")]
pub enum ExplanationOfBenefitAddItemServiced {
    /// Variant accepting the Date type.
    #[fhir_serde(rename = "servicedDate")]
    Date(Date),
    /// Variant accepting the Period type.
    #[fhir_serde(rename = "servicedPeriod")]
    Period(Period),
}

/// Choice of types for the location\[x\] field in ExplanationOfBenefitAddItem
#[derive(Debug, Clone, PartialEq, FhirSerde)]
#[fhir_choice_element(base_name = "location")]
pub enum ExplanationOfBenefitAddItemLocation {
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
#[fhir_type(name = "ExplanationOfBenefitAddItem", kind = "backbone_element")]
pub struct ExplanationOfBenefitAddItem {
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
    #[fhir_serde(rename = "subDetailSequence")]
    pub sub_detail_sequence: Option<Vec<PositiveInt>>,
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
    pub serviced: Option<ExplanationOfBenefitAddItemServiced>,
    /// Place of service or where product was supplied
    #[fhir_serde(flatten)]
    pub location: Option<ExplanationOfBenefitAddItemLocation>,
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
    pub adjudication: Option<Vec<ExplanationOfBenefitItemAdjudication>>,
    /// Insurer added line items
    pub detail: Option<Vec<ExplanationOfBenefitAddItemDetail>>,
}

/// Insurer added line items
#[derive(Debug, Clone, PartialEq, Default, FhirSerde)]
#[fhir_type(name = "ExplanationOfBenefitAddItemDetail", kind = "backbone_element")]
pub struct ExplanationOfBenefitAddItemDetail {
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
    /// Added items adjudication
    pub adjudication: Option<Vec<ExplanationOfBenefitItemAdjudication>>,
    /// Insurer added line items
    #[fhir_serde(rename = "subDetail")]
    pub sub_detail: Option<Vec<ExplanationOfBenefitAddItemDetailSubDetail>>,
}

/// Insurer added line items
#[derive(Debug, Clone, PartialEq, Default, FhirSerde)]
#[fhir_type(name = "ExplanationOfBenefitAddItemDetailSubDetail", kind = "backbone_element")]
pub struct ExplanationOfBenefitAddItemDetailSubDetail {
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
    /// Added items adjudication
    pub adjudication: Option<Vec<ExplanationOfBenefitItemAdjudication>>,
}

/// Balance by Benefit Category
#[derive(Debug, Clone, PartialEq, Default, FhirSerde)]
#[fhir_type(name = "ExplanationOfBenefitBenefitBalance", kind = "backbone_element")]
pub struct ExplanationOfBenefitBenefitBalance {
    /// Unique id for inter-element referencing
    pub id: Option<std::string::String>,
    /// Additional content defined by implementations
    pub extension: Option<Vec<Extension>>,
    /// Extensions that cannot be ignored even if unrecognized
    #[fhir_serde(rename = "modifierExtension")]
    pub modifier_extension: Option<Vec<Extension>>,
    /// Benefit classification
    pub category: CodeableConcept,
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
    pub financial: Option<Vec<ExplanationOfBenefitBenefitBalanceFinancial>>,
}

/// Choice of types for the allowed\[x\] field in ExplanationOfBenefitBenefitBalanceFinancial
#[derive(Debug, Clone, PartialEq, FhirSerde)]
#[fhir_choice_element(base_name = "allowed")]
pub enum ExplanationOfBenefitBenefitBalanceFinancialAllowed {
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

/// Choice of types for the used\[x\] field in ExplanationOfBenefitBenefitBalanceFinancial
#[derive(Debug, Clone, PartialEq, FhirSerde)]
#[fhir_choice_element(base_name = "used")]
pub enum ExplanationOfBenefitBenefitBalanceFinancialUsed {
    /// Variant accepting the UnsignedInt type.
    #[fhir_serde(rename = "usedUnsignedInt")]
    UnsignedInt(UnsignedInt),
    /// Variant accepting the Money type.
    #[fhir_serde(rename = "usedMoney")]
    Money(Money),
}

/// Benefit Summary
#[derive(Debug, Clone, PartialEq, Default, FhirSerde)]
#[fhir_type(name = "ExplanationOfBenefitBenefitBalanceFinancial", kind = "backbone_element")]
pub struct ExplanationOfBenefitBenefitBalanceFinancial {
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
    pub allowed: Option<ExplanationOfBenefitBenefitBalanceFinancialAllowed>,
    /// Benefits used
    #[fhir_serde(flatten)]
    pub used: Option<ExplanationOfBenefitBenefitBalanceFinancialUsed>,
}

/// Care Team members
#[derive(Debug, Clone, PartialEq, Default, FhirSerde)]
#[fhir_type(name = "ExplanationOfBenefitCareTeam", kind = "backbone_element")]
pub struct ExplanationOfBenefitCareTeam {
    /// Unique id for inter-element referencing
    pub id: Option<std::string::String>,
    /// Additional content defined by implementations
    pub extension: Option<Vec<Extension>>,
    /// Extensions that cannot be ignored even if unrecognized
    #[fhir_serde(rename = "modifierExtension")]
    pub modifier_extension: Option<Vec<Extension>>,
    /// Order of care team
    pub sequence: PositiveInt,
    /// Practitioner or organization
    pub provider: Reference,
    /// Indicator of the lead practitioner
    pub responsible: Option<Boolean>,
    /// Function within the team
    pub role: Option<CodeableConcept>,
    /// Practitioner credential or specialization
    pub qualification: Option<CodeableConcept>,
}

/// Choice of types for the diagnosis\[x\] field in ExplanationOfBenefitDiagnosis
#[derive(Debug, Clone, PartialEq, FhirSerde)]
#[fhir_choice_element(base_name = "diagnosis")]
pub enum ExplanationOfBenefitDiagnosisDiagnosis {
    /// Variant accepting the CodeableConcept type.
    #[fhir_serde(rename = "diagnosisCodeableConcept")]
    CodeableConcept(CodeableConcept),
    /// Variant accepting the Reference type.
    #[fhir_serde(rename = "diagnosisReference")]
    Reference(Reference),
}

/// Pertinent diagnosis information
#[derive(Debug, Clone, PartialEq, FhirSerde)]
#[fhir_type(name = "ExplanationOfBenefitDiagnosis", kind = "backbone_element")]
pub struct ExplanationOfBenefitDiagnosis {
    /// Unique id for inter-element referencing
    pub id: Option<std::string::String>,
    /// Additional content defined by implementations
    pub extension: Option<Vec<Extension>>,
    /// Extensions that cannot be ignored even if unrecognized
    #[fhir_serde(rename = "modifierExtension")]
    pub modifier_extension: Option<Vec<Extension>>,
    /// Diagnosis instance identifier
    pub sequence: PositiveInt,
    /// Nature of illness or problem
    #[fhir_serde(flatten)]
    pub diagnosis: ExplanationOfBenefitDiagnosisDiagnosis,
    /// Timing or nature of the diagnosis
    #[fhir_serde(rename = "type")]
    pub r#type: Option<Vec<CodeableConcept>>,
    /// Present on admission
    #[fhir_serde(rename = "onAdmission")]
    pub on_admission: Option<CodeableConcept>,
    /// Package billing code
    #[fhir_serde(rename = "packageCode")]
    pub package_code: Option<CodeableConcept>,
}

/// Patient insurance information
#[derive(Debug, Clone, PartialEq, Default, FhirSerde)]
#[fhir_type(name = "ExplanationOfBenefitInsurance", kind = "backbone_element")]
pub struct ExplanationOfBenefitInsurance {
    /// Unique id for inter-element referencing
    pub id: Option<std::string::String>,
    /// Additional content defined by implementations
    pub extension: Option<Vec<Extension>>,
    /// Extensions that cannot be ignored even if unrecognized
    #[fhir_serde(rename = "modifierExtension")]
    pub modifier_extension: Option<Vec<Extension>>,
    /// Coverage to be used for adjudication
    pub focal: Boolean,
    /// Insurance information
    pub coverage: Reference,
    /// Prior authorization reference number
    #[fhir_serde(rename = "preAuthRef")]
    pub pre_auth_ref: Option<Vec<String>>,
}

/// Choice of types for the serviced\[x\] field in ExplanationOfBenefitItem
#[derive(Debug, Clone, PartialEq, FhirSerde)]
#[fhir_choice_element(base_name = "serviced")]
pub enum ExplanationOfBenefitItemServiced {
    /// Variant accepting the Date type.
    #[fhir_serde(rename = "servicedDate")]
    Date(Date),
    /// Variant accepting the Period type.
    #[fhir_serde(rename = "servicedPeriod")]
    Period(Period),
}

/// Choice of types for the location\[x\] field in ExplanationOfBenefitItem
#[derive(Debug, Clone, PartialEq, FhirSerde)]
#[fhir_choice_element(base_name = "location")]
pub enum ExplanationOfBenefitItemLocation {
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

/// Product or service provided
#[derive(Debug, Clone, PartialEq, Default, FhirSerde)]
#[fhir_type(name = "ExplanationOfBenefitItem", kind = "backbone_element")]
pub struct ExplanationOfBenefitItem {
    /// Unique id for inter-element referencing
    pub id: Option<std::string::String>,
    /// Additional content defined by implementations
    pub extension: Option<Vec<Extension>>,
    /// Extensions that cannot be ignored even if unrecognized
    #[fhir_serde(rename = "modifierExtension")]
    pub modifier_extension: Option<Vec<Extension>>,
    /// Item instance identifier
    pub sequence: PositiveInt,
    /// Applicable care team members
    #[fhir_serde(rename = "careTeamSequence")]
    pub care_team_sequence: Option<Vec<PositiveInt>>,
    /// Applicable diagnoses
    #[fhir_serde(rename = "diagnosisSequence")]
    pub diagnosis_sequence: Option<Vec<PositiveInt>>,
    /// Applicable procedures
    #[fhir_serde(rename = "procedureSequence")]
    pub procedure_sequence: Option<Vec<PositiveInt>>,
    /// Applicable exception and supporting information
    #[fhir_serde(rename = "informationSequence")]
    pub information_sequence: Option<Vec<PositiveInt>>,
    /// Revenue or cost center code
    pub revenue: Option<CodeableConcept>,
    /// Benefit classification
    pub category: Option<CodeableConcept>,
    /// Billing, service, product, or drug code
    #[fhir_serde(rename = "productOrService")]
    pub product_or_service: CodeableConcept,
    /// Product or service billing modifiers
    pub modifier: Option<Vec<CodeableConcept>>,
    /// Program the product or service is provided under
    #[fhir_serde(rename = "programCode")]
    pub program_code: Option<Vec<CodeableConcept>>,
    /// Date or dates of service or product delivery
    #[fhir_serde(flatten)]
    pub serviced: Option<ExplanationOfBenefitItemServiced>,
    /// Place of service or where product was supplied
    #[fhir_serde(flatten)]
    pub location: Option<ExplanationOfBenefitItemLocation>,
    /// Count of products or services
    pub quantity: Option<Quantity>,
    /// Fee, charge or cost per item
    #[fhir_serde(rename = "unitPrice")]
    pub unit_price: Option<Money>,
    /// Price scaling factor
    pub factor: Option<Decimal>,
    /// Total item cost
    pub net: Option<Money>,
    /// Unique device identifier
    pub udi: Option<Vec<Reference>>,
    /// Anatomical location
    #[fhir_serde(rename = "bodySite")]
    pub body_site: Option<CodeableConcept>,
    /// Anatomical sub-location
    #[fhir_serde(rename = "subSite")]
    pub sub_site: Option<Vec<CodeableConcept>>,
    /// Encounters related to this billed item
    pub encounter: Option<Vec<Reference>>,
    /// Applicable note numbers
    #[fhir_serde(rename = "noteNumber")]
    pub note_number: Option<Vec<PositiveInt>>,
    /// Adjudication details
    pub adjudication: Option<Vec<ExplanationOfBenefitItemAdjudication>>,
    /// Additional items
    pub detail: Option<Vec<ExplanationOfBenefitItemDetail>>,
}

/// Adjudication details
#[derive(Debug, Clone, PartialEq, Default, FhirSerde)]
#[fhir_type(name = "ExplanationOfBenefitItemAdjudication", kind = "backbone_element")]
pub struct ExplanationOfBenefitItemAdjudication {
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
    /// Non-monitary value
    pub value: Option<Decimal>,
}

/// Additional items
#[derive(Debug, Clone, PartialEq, Default, FhirSerde)]
#[fhir_type(name = "ExplanationOfBenefitItemDetail", kind = "backbone_element")]
pub struct ExplanationOfBenefitItemDetail {
    /// Unique id for inter-element referencing
    pub id: Option<std::string::String>,
    /// Additional content defined by implementations
    pub extension: Option<Vec<Extension>>,
    /// Extensions that cannot be ignored even if unrecognized
    #[fhir_serde(rename = "modifierExtension")]
    pub modifier_extension: Option<Vec<Extension>>,
    /// Product or service provided
    pub sequence: PositiveInt,
    /// Revenue or cost center code
    pub revenue: Option<CodeableConcept>,
    /// Benefit classification
    pub category: Option<CodeableConcept>,
    /// Billing, service, product, or drug code
    #[fhir_serde(rename = "productOrService")]
    pub product_or_service: CodeableConcept,
    /// Service/Product billing modifiers
    pub modifier: Option<Vec<CodeableConcept>>,
    /// Program the product or service is provided under
    #[fhir_serde(rename = "programCode")]
    pub program_code: Option<Vec<CodeableConcept>>,
    /// Count of products or services
    pub quantity: Option<Quantity>,
    /// Fee, charge or cost per item
    #[fhir_serde(rename = "unitPrice")]
    pub unit_price: Option<Money>,
    /// Price scaling factor
    pub factor: Option<Decimal>,
    /// Total item cost
    pub net: Option<Money>,
    /// Unique device identifier
    pub udi: Option<Vec<Reference>>,
    /// Applicable note numbers
    #[fhir_serde(rename = "noteNumber")]
    pub note_number: Option<Vec<PositiveInt>>,
    /// Detail level adjudication details
    pub adjudication: Option<Vec<ExplanationOfBenefitItemAdjudication>>,
    /// Additional items
    #[fhir_serde(rename = "subDetail")]
    pub sub_detail: Option<Vec<ExplanationOfBenefitItemDetailSubDetail>>,
}

/// Additional items
#[derive(Debug, Clone, PartialEq, Default, FhirSerde)]
#[fhir_type(name = "ExplanationOfBenefitItemDetailSubDetail", kind = "backbone_element")]
pub struct ExplanationOfBenefitItemDetailSubDetail {
    /// Unique id for inter-element referencing
    pub id: Option<std::string::String>,
    /// Additional content defined by implementations
    pub extension: Option<Vec<Extension>>,
    /// Extensions that cannot be ignored even if unrecognized
    #[fhir_serde(rename = "modifierExtension")]
    pub modifier_extension: Option<Vec<Extension>>,
    /// Product or service provided
    pub sequence: PositiveInt,
    /// Revenue or cost center code
    pub revenue: Option<CodeableConcept>,
    /// Benefit classification
    pub category: Option<CodeableConcept>,
    /// Billing, service, product, or drug code
    #[fhir_serde(rename = "productOrService")]
    pub product_or_service: CodeableConcept,
    /// Service/Product billing modifiers
    pub modifier: Option<Vec<CodeableConcept>>,
    /// Program the product or service is provided under
    #[fhir_serde(rename = "programCode")]
    pub program_code: Option<Vec<CodeableConcept>>,
    /// Count of products or services
    pub quantity: Option<Quantity>,
    /// Fee, charge or cost per item
    #[fhir_serde(rename = "unitPrice")]
    pub unit_price: Option<Money>,
    /// Price scaling factor
    pub factor: Option<Decimal>,
    /// Total item cost
    pub net: Option<Money>,
    /// Unique device identifier
    pub udi: Option<Vec<Reference>>,
    /// Applicable note numbers
    #[fhir_serde(rename = "noteNumber")]
    pub note_number: Option<Vec<PositiveInt>>,
    /// Subdetail level adjudication details
    pub adjudication: Option<Vec<ExplanationOfBenefitItemAdjudication>>,
}

/// Recipient of benefits payable
#[derive(Debug, Clone, PartialEq, Default, FhirSerde)]
#[fhir_type(name = "ExplanationOfBenefitPayee", kind = "backbone_element")]
pub struct ExplanationOfBenefitPayee {
    /// Unique id for inter-element referencing
    pub id: Option<std::string::String>,
    /// Additional content defined by implementations
    pub extension: Option<Vec<Extension>>,
    /// Extensions that cannot be ignored even if unrecognized
    #[fhir_serde(rename = "modifierExtension")]
    pub modifier_extension: Option<Vec<Extension>>,
    /// Category of recipient
    #[fhir_serde(rename = "type")]
    pub r#type: Option<CodeableConcept>,
    /// Recipient reference
    pub party: Option<Reference>,
}

/// Payment Details
#[derive(Debug, Clone, PartialEq, Default, FhirSerde)]
#[fhir_type(name = "ExplanationOfBenefitPayment", kind = "backbone_element")]
pub struct ExplanationOfBenefitPayment {
    /// Unique id for inter-element referencing
    pub id: Option<std::string::String>,
    /// Additional content defined by implementations
    pub extension: Option<Vec<Extension>>,
    /// Extensions that cannot be ignored even if unrecognized
    #[fhir_serde(rename = "modifierExtension")]
    pub modifier_extension: Option<Vec<Extension>>,
    /// Partial or complete payment
    #[fhir_serde(rename = "type")]
    pub r#type: Option<CodeableConcept>,
    /// Payment adjustment for non-claim issues
    pub adjustment: Option<Money>,
    /// Explanation for the variance
    #[fhir_serde(rename = "adjustmentReason")]
    pub adjustment_reason: Option<CodeableConcept>,
    /// Expected date of payment
    pub date: Option<Date>,
    /// Payable amount after adjustment
    pub amount: Option<Money>,
    /// Business identifier for the payment
    pub identifier: Option<Identifier>,
}

/// Choice of types for the procedure\[x\] field in ExplanationOfBenefitProcedure
#[derive(Debug, Clone, PartialEq, FhirSerde)]
#[fhir_choice_element(base_name = "procedure")]
pub enum ExplanationOfBenefitProcedureProcedure {
    /// Variant accepting the CodeableConcept type.
    #[fhir_serde(rename = "procedureCodeableConcept")]
    CodeableConcept(CodeableConcept),
    /// Variant accepting the Reference type.
    #[fhir_serde(rename = "procedureReference")]
    Reference(Reference),
}

/// Clinical procedures performed
#[derive(Debug, Clone, PartialEq, FhirSerde)]
#[fhir_type(name = "ExplanationOfBenefitProcedure", kind = "backbone_element")]
pub struct ExplanationOfBenefitProcedure {
    /// Unique id for inter-element referencing
    pub id: Option<std::string::String>,
    /// Additional content defined by implementations
    pub extension: Option<Vec<Extension>>,
    /// Extensions that cannot be ignored even if unrecognized
    #[fhir_serde(rename = "modifierExtension")]
    pub modifier_extension: Option<Vec<Extension>>,
    /// Procedure instance identifier
    pub sequence: PositiveInt,
    /// Category of Procedure
    #[fhir_serde(rename = "type")]
    pub r#type: Option<Vec<CodeableConcept>>,
    /// When the procedure was performed
    pub date: Option<DateTime>,
    /// Specific clinical procedure
    #[fhir_serde(flatten)]
    pub procedure: ExplanationOfBenefitProcedureProcedure,
    /// Unique device identifier
    pub udi: Option<Vec<Reference>>,
}

/// Note concerning adjudication
#[derive(Debug, Clone, PartialEq, Default, FhirSerde)]
#[fhir_type(name = "ExplanationOfBenefitProcessNote", kind = "backbone_element")]
pub struct ExplanationOfBenefitProcessNote {
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
    pub text: Option<String>,
    /// Language of the text
    pub language: Option<CodeableConcept>,
}

/// Prior or corollary claims
#[derive(Debug, Clone, PartialEq, Default, FhirSerde)]
#[fhir_type(name = "ExplanationOfBenefitRelated", kind = "backbone_element")]
pub struct ExplanationOfBenefitRelated {
    /// Unique id for inter-element referencing
    pub id: Option<std::string::String>,
    /// Additional content defined by implementations
    pub extension: Option<Vec<Extension>>,
    /// Extensions that cannot be ignored even if unrecognized
    #[fhir_serde(rename = "modifierExtension")]
    pub modifier_extension: Option<Vec<Extension>>,
    /// Reference to the related claim
    pub claim: Option<Reference>,
    /// How the reference claim is related
    pub relationship: Option<CodeableConcept>,
    /// File or case reference
    pub reference: Option<Identifier>,
}

/// Choice of types for the timing\[x\] field in ExplanationOfBenefitSupportingInfo
#[derive(Debug, Clone, PartialEq, FhirSerde)]
#[fhir_choice_element(base_name = "timing")]
pub enum ExplanationOfBenefitSupportingInfoTiming {
    /// Variant accepting the Date type.
    #[fhir_serde(rename = "timingDate")]
    Date(Date),
    /// Variant accepting the Period type.
    #[fhir_serde(rename = "timingPeriod")]
    Period(Period),
}

/// Choice of types for the value\[x\] field in ExplanationOfBenefitSupportingInfo
#[derive(Debug, Clone, PartialEq, FhirSerde)]
#[fhir_choice_element(base_name = "value")]
pub enum ExplanationOfBenefitSupportingInfoValue {
    /// Variant accepting the Boolean type.
    #[fhir_serde(rename = "valueBoolean")]
    Boolean(Boolean),
    /// Variant accepting the String type.
    #[fhir_serde(rename = "valueString")]
    String(String),
    /// Variant accepting the Quantity type.
    #[fhir_serde(rename = "valueQuantity")]
    Quantity(Quantity),
    /// Variant accepting the Attachment type.
    #[fhir_serde(rename = "valueAttachment")]
    Attachment(Attachment),
    /// Variant accepting the Reference type.
    #[fhir_serde(rename = "valueReference")]
    Reference(Reference),
}

/// Supporting information
#[derive(Debug, Clone, PartialEq, Default, FhirSerde)]
#[fhir_type(name = "ExplanationOfBenefitSupportingInfo", kind = "backbone_element")]
pub struct ExplanationOfBenefitSupportingInfo {
    /// Unique id for inter-element referencing
    pub id: Option<std::string::String>,
    /// Additional content defined by implementations
    pub extension: Option<Vec<Extension>>,
    /// Extensions that cannot be ignored even if unrecognized
    #[fhir_serde(rename = "modifierExtension")]
    pub modifier_extension: Option<Vec<Extension>>,
    /// Information instance identifier
    pub sequence: PositiveInt,
    /// Classification of the supplied information
    pub category: CodeableConcept,
    /// Type of information
    pub code: Option<CodeableConcept>,
    /// When it occurred
    #[fhir_serde(flatten)]
    pub timing: Option<ExplanationOfBenefitSupportingInfoTiming>,
    /// Data to be provided
    #[fhir_serde(flatten)]
    pub value: Option<ExplanationOfBenefitSupportingInfoValue>,
    /// Explanation for the information
    pub reason: Option<Coding>,
}

/// Adjudication totals
#[derive(Debug, Clone, PartialEq, Default, FhirSerde)]
#[fhir_type(name = "ExplanationOfBenefitTotal", kind = "backbone_element")]
pub struct ExplanationOfBenefitTotal {
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
