use crate::r4::*;
use crate::FhirSerde;

/// FHIR Claim type
///
/// A provider issued list of professional services and products which have been
/// provided, or are to be provided, to a patient which is sent to an insurer for
/// reimbursement.
///
/// See: [Claim](http://hl7.org/fhir/StructureDefinition/Claim)
#[derive(Debug, Clone, PartialEq, Default, FhirSerde)]
#[fhir_type(name = "Claim", kind = "domain_resource")]
pub struct Claim {
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
    /// Business Identifier for claim
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
    /// Resource creation date
    pub created: DateTime,
    /// Author of the claim
    pub enterer: Option<Reference>,
    /// Target
    pub insurer: Option<Reference>,
    /// Party responsible for the claim
    pub provider: Reference,
    /// Desired processing ugency
    pub priority: CodeableConcept,
    /// For whom to reserve funds
    #[fhir_serde(rename = "fundsReserve")]
    pub funds_reserve: Option<CodeableConcept>,
    /// Prior or corollary claims
    pub related: Option<Vec<ClaimRelated>>,
    /// Prescription authorizing services and products
    pub prescription: Option<Reference>,
    /// Original prescription if superseded by fulfiller
    #[fhir_serde(rename = "originalPrescription")]
    pub original_prescription: Option<Reference>,
    /// Recipient of benefits payable
    pub payee: Option<ClaimPayee>,
    /// Treatment referral
    pub referral: Option<Reference>,
    /// Servicing facility
    pub facility: Option<Reference>,
    /// Members of the care team
    #[fhir_serde(rename = "careTeam")]
    pub care_team: Option<Vec<ClaimCareTeam>>,
    /// Supporting information
    #[fhir_serde(rename = "supportingInfo")]
    pub supporting_info: Option<Vec<ClaimSupportingInfo>>,
    /// Pertinent diagnosis information
    pub diagnosis: Option<Vec<ClaimDiagnosis>>,
    /// Clinical procedures performed
    pub procedure: Option<Vec<ClaimProcedure>>,
    /// Patient insurance information
    pub insurance: Vec<ClaimInsurance>,
    /// Details of the event
    pub accident: Option<ClaimAccident>,
    /// Product or service provided
    pub item: Option<Vec<ClaimItem>>,
    /// Total claim cost
    pub total: Option<Money>,
}

/// Choice of types for the location\[x\] field in ClaimAccident
#[derive(Debug, Clone, PartialEq, FhirSerde)]
#[fhir_choice_element(base_name = "location")]
pub enum ClaimAccidentLocation {
    /// Variant accepting the Address type.
    #[fhir_serde(rename = "locationAddress")]
    Address(Address),
    /// Variant accepting the Reference type.
    #[fhir_serde(rename = "locationReference")]
    Reference(Reference),
}

/// Details of the event
#[derive(Debug, Clone, PartialEq, Default, FhirSerde)]
#[fhir_type(name = "ClaimAccident", kind = "backbone_element")]
pub struct ClaimAccident {
    /// Unique id for inter-element referencing
    pub id: Option<std::string::String>,
    /// Additional content defined by implementations
    pub extension: Option<Vec<Extension>>,
    /// Extensions that cannot be ignored even if unrecognized
    #[fhir_serde(rename = "modifierExtension")]
    pub modifier_extension: Option<Vec<Extension>>,
    /// When the incident occurred
    pub date: Date,
    /// The nature of the accident
    #[fhir_serde(rename = "type")]
    pub r#type: Option<CodeableConcept>,
    /// Where the event occurred
    #[fhir_serde(flatten)]
    pub location: Option<ClaimAccidentLocation>,
}

/// Members of the care team
#[derive(Debug, Clone, PartialEq, Default, FhirSerde)]
#[fhir_type(name = "ClaimCareTeam", kind = "backbone_element")]
pub struct ClaimCareTeam {
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

/// Choice of types for the diagnosis\[x\] field in ClaimDiagnosis
#[derive(Debug, Clone, PartialEq, FhirSerde)]
#[fhir_choice_element(base_name = "diagnosis")]
pub enum ClaimDiagnosisDiagnosis {
    /// Variant accepting the CodeableConcept type.
    #[fhir_serde(rename = "diagnosisCodeableConcept")]
    CodeableConcept(CodeableConcept),
    /// Variant accepting the Reference type.
    #[fhir_serde(rename = "diagnosisReference")]
    Reference(Reference),
}

/// Pertinent diagnosis information
#[derive(Debug, Clone, PartialEq, FhirSerde)]
#[fhir_type(name = "ClaimDiagnosis", kind = "backbone_element")]
pub struct ClaimDiagnosis {
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
    pub diagnosis: ClaimDiagnosisDiagnosis,
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
#[fhir_type(name = "ClaimInsurance", kind = "backbone_element")]
pub struct ClaimInsurance {
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
    /// Pre-assigned Claim number
    pub identifier: Option<Identifier>,
    /// Insurance information
    pub coverage: Reference,
    /// Additional provider contract number
    #[fhir_serde(rename = "businessArrangement")]
    pub business_arrangement: Option<String>,
    /// Prior authorization reference number
    #[fhir_serde(rename = "preAuthRef")]
    pub pre_auth_ref: Option<Vec<String>>,
    /// Adjudication results
    #[fhir_serde(rename = "claimResponse")]
    pub claim_response: Option<Reference>,
}

/// Choice of types for the serviced\[x\] field in ClaimItem
#[derive(Debug, Clone, PartialEq, FhirSerde)]
#[fhir_choice_element(base_name = "serviced")]
pub enum ClaimItemServiced {
    /// Variant accepting the Date type.
    #[fhir_serde(rename = "servicedDate")]
    Date(Date),
    /// Variant accepting the Period type.
    #[fhir_serde(rename = "servicedPeriod")]
    Period(Period),
}

/// Choice of types for the location\[x\] field in ClaimItem
#[derive(Debug, Clone, PartialEq, FhirSerde)]
#[fhir_choice_element(base_name = "location")]
pub enum ClaimItemLocation {
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
#[fhir_type(name = "ClaimItem", kind = "backbone_element")]
pub struct ClaimItem {
    /// Unique id for inter-element referencing
    pub id: Option<std::string::String>,
    /// Additional content defined by implementations
    pub extension: Option<Vec<Extension>>,
    /// Extensions that cannot be ignored even if unrecognized
    #[fhir_serde(rename = "modifierExtension")]
    pub modifier_extension: Option<Vec<Extension>>,
    /// Item instance identifier
    pub sequence: PositiveInt,
    /// Applicable careTeam members
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
    pub serviced: Option<ClaimItemServiced>,
    /// Place of service or where product was supplied
    #[fhir_serde(flatten)]
    pub location: Option<ClaimItemLocation>,
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
    /// Product or service provided
    pub detail: Option<Vec<ClaimItemDetail>>,
}

/// Product or service provided
#[derive(Debug, Clone, PartialEq, Default, FhirSerde)]
#[fhir_type(name = "ClaimItemDetail", kind = "backbone_element")]
pub struct ClaimItemDetail {
    /// Unique id for inter-element referencing
    pub id: Option<std::string::String>,
    /// Additional content defined by implementations
    pub extension: Option<Vec<Extension>>,
    /// Extensions that cannot be ignored even if unrecognized
    #[fhir_serde(rename = "modifierExtension")]
    pub modifier_extension: Option<Vec<Extension>>,
    /// Item instance identifier
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
    /// Product or service provided
    #[fhir_serde(rename = "subDetail")]
    pub sub_detail: Option<Vec<ClaimItemDetailSubDetail>>,
}

/// Product or service provided
#[derive(Debug, Clone, PartialEq, Default, FhirSerde)]
#[fhir_type(name = "ClaimItemDetailSubDetail", kind = "backbone_element")]
pub struct ClaimItemDetailSubDetail {
    /// Unique id for inter-element referencing
    pub id: Option<std::string::String>,
    /// Additional content defined by implementations
    pub extension: Option<Vec<Extension>>,
    /// Extensions that cannot be ignored even if unrecognized
    #[fhir_serde(rename = "modifierExtension")]
    pub modifier_extension: Option<Vec<Extension>>,
    /// Item instance identifier
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
}

/// Recipient of benefits payable
#[derive(Debug, Clone, PartialEq, Default, FhirSerde)]
#[fhir_type(name = "ClaimPayee", kind = "backbone_element")]
pub struct ClaimPayee {
    /// Unique id for inter-element referencing
    pub id: Option<std::string::String>,
    /// Additional content defined by implementations
    pub extension: Option<Vec<Extension>>,
    /// Extensions that cannot be ignored even if unrecognized
    #[fhir_serde(rename = "modifierExtension")]
    pub modifier_extension: Option<Vec<Extension>>,
    /// Category of recipient
    #[fhir_serde(rename = "type")]
    pub r#type: CodeableConcept,
    /// Recipient reference
    pub party: Option<Reference>,
}

/// Choice of types for the procedure\[x\] field in ClaimProcedure
#[derive(Debug, Clone, PartialEq, FhirSerde)]
#[fhir_choice_element(base_name = "procedure")]
pub enum ClaimProcedureProcedure {
    /// Variant accepting the CodeableConcept type.
    #[fhir_serde(rename = "procedureCodeableConcept")]
    CodeableConcept(CodeableConcept),
    /// Variant accepting the Reference type.
    #[fhir_serde(rename = "procedureReference")]
    Reference(Reference),
}

/// Clinical procedures performed
#[derive(Debug, Clone, PartialEq, FhirSerde)]
#[fhir_type(name = "ClaimProcedure", kind = "backbone_element")]
pub struct ClaimProcedure {
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
    pub procedure: ClaimProcedureProcedure,
    /// Unique device identifier
    pub udi: Option<Vec<Reference>>,
}

/// Prior or corollary claims
#[derive(Debug, Clone, PartialEq, Default, FhirSerde)]
#[fhir_type(name = "ClaimRelated", kind = "backbone_element")]
pub struct ClaimRelated {
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

/// Choice of types for the timing\[x\] field in ClaimSupportingInfo
#[derive(Debug, Clone, PartialEq, FhirSerde)]
#[fhir_choice_element(base_name = "timing")]
pub enum ClaimSupportingInfoTiming {
    /// Variant accepting the Date type.
    #[fhir_serde(rename = "timingDate")]
    Date(Date),
    /// Variant accepting the Period type.
    #[fhir_serde(rename = "timingPeriod")]
    Period(Period),
}

/// Choice of types for the value\[x\] field in ClaimSupportingInfo
#[derive(Debug, Clone, PartialEq, FhirSerde)]
#[fhir_choice_element(base_name = "value")]
pub enum ClaimSupportingInfoValue {
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
#[fhir_type(name = "ClaimSupportingInfo", kind = "backbone_element")]
pub struct ClaimSupportingInfo {
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
    pub timing: Option<ClaimSupportingInfoTiming>,
    /// Data to be provided
    #[fhir_serde(flatten)]
    pub value: Option<ClaimSupportingInfoValue>,
    /// Explanation for the information
    pub reason: Option<CodeableConcept>,
}
