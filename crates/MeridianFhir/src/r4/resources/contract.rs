use crate::r4::*;
use crate::FhirSerde;

/// Choice of types for the topic\[x\] field in Contract
#[derive(Debug, Clone, PartialEq, FhirSerde)]
#[fhir_choice_element(base_name = "topic")]
pub enum ContractTopic {
    /// Variant accepting the CodeableConcept type.
    #[fhir_serde(rename = "topicCodeableConcept")]
    CodeableConcept(CodeableConcept),
    /// Variant accepting the Reference type.
    #[fhir_serde(rename = "topicReference")]
    Reference(Reference),
}

/// Choice of types for the legallyBinding\[x\] field in Contract
#[derive(Debug, Clone, PartialEq, FhirSerde)]
#[fhir_choice_element(base_name = "legallyBinding")]
pub enum ContractLegallyBinding {
    /// Variant accepting the Attachment type.
    #[fhir_serde(rename = "legallyBindingAttachment")]
    Attachment(Attachment),
    /// Variant accepting the Reference type.
    #[fhir_serde(rename = "legallyBindingReference")]
    Reference(Reference),
}

/// FHIR Contract type
///
/// Legally enforceable, formally recorded unilateral or bilateral directive
/// i.e., a policy or agreement.
///
/// See: [Contract](http://hl7.org/fhir/StructureDefinition/Contract)
#[derive(Debug, Clone, PartialEq, Default, FhirSerde)]
#[fhir_type(name = "Contract", kind = "domain_resource")]
pub struct Contract {
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
    /// Contract number
    pub identifier: Option<Vec<Identifier>>,
    /// Basal definition
    pub url: Option<Uri>,
    /// Business edition
    pub version: Option<String>,
    /// The status of the resource instance
    pub status: Option<Code>,
    /// Negotiation status
    #[fhir_serde(rename = "legalState")]
    pub legal_state: Option<CodeableConcept>,
    /// Source Contract Definition
    #[fhir_serde(rename = "instantiatesCanonical")]
    pub instantiates_canonical: Option<Reference>,
    /// External Contract Definition
    #[fhir_serde(rename = "instantiatesUri")]
    pub instantiates_uri: Option<Uri>,
    /// Content derived from the basal information
    #[fhir_serde(rename = "contentDerivative")]
    pub content_derivative: Option<CodeableConcept>,
    /// When this Contract was issued
    pub issued: Option<DateTime>,
    /// Effective time
    pub applies: Option<Period>,
    /// Contract cessation cause
    #[fhir_serde(rename = "expirationType")]
    pub expiration_type: Option<CodeableConcept>,
    /// Contract Target Entity
    pub subject: Option<Vec<Reference>>,
    /// Authority under which this Contract has standing
    pub authority: Option<Vec<Reference>>,
    /// A sphere of control governed by an authoritative jurisdiction, organization, or person
    pub domain: Option<Vec<Reference>>,
    /// Specific Location
    pub site: Option<Vec<Reference>>,
    /// Computer friendly designation
    pub name: Option<String>,
    /// Human Friendly name
    pub title: Option<String>,
    /// Subordinate Friendly name
    pub subtitle: Option<String>,
    /// Acronym or short name
    pub alias: Option<Vec<String>>,
    /// Source of Contract
    pub author: Option<Reference>,
    /// Range of Legal Concerns
    pub scope: Option<CodeableConcept>,
    /// Focus of contract interest
    #[fhir_serde(flatten)]
    pub topic: Option<ContractTopic>,
    /// Legal instrument category
    #[fhir_serde(rename = "type")]
    pub r#type: Option<CodeableConcept>,
    /// Subtype within the context of type
    #[fhir_serde(rename = "subType")]
    pub sub_type: Option<Vec<CodeableConcept>>,
    /// Contract precursor content
    #[fhir_serde(rename = "contentDefinition")]
    pub content_definition: Option<ContractContentDefinition>,
    /// Contract Term List
    pub term: Option<Vec<ContractTerm>>,
    /// Extra Information
    #[fhir_serde(rename = "supportingInfo")]
    pub supporting_info: Option<Vec<Reference>>,
    /// Key event in Contract History
    #[fhir_serde(rename = "relevantHistory")]
    pub relevant_history: Option<Vec<Reference>>,
    /// Contract Signatory
    pub signer: Option<Vec<ContractSigner>>,
    /// Contract Friendly Language
    pub friendly: Option<Vec<ContractFriendly>>,
    /// Contract Legal Language
    pub legal: Option<Vec<ContractLegal>>,
    /// Computable Contract Language
    pub rule: Option<Vec<ContractRule>>,
    /// Binding Contract
    #[fhir_serde(flatten)]
    pub legally_binding: Option<ContractLegallyBinding>,
}

/// Contract precursor content
#[derive(Debug, Clone, PartialEq, Default, FhirSerde)]
#[fhir_type(name = "ContractContentDefinition", kind = "backbone_element")]
pub struct ContractContentDefinition {
    /// Unique id for inter-element referencing
    pub id: Option<std::string::String>,
    /// Additional content defined by implementations
    pub extension: Option<Vec<Extension>>,
    /// Extensions that cannot be ignored even if unrecognized
    #[fhir_serde(rename = "modifierExtension")]
    pub modifier_extension: Option<Vec<Extension>>,
    /// Content structure and use
    #[fhir_serde(rename = "type")]
    pub r#type: CodeableConcept,
    /// Detailed Content Type Definition
    #[fhir_serde(rename = "subType")]
    pub sub_type: Option<CodeableConcept>,
    /// Publisher Entity
    pub publisher: Option<Reference>,
    /// When published
    #[fhir_serde(rename = "publicationDate")]
    pub publication_date: Option<DateTime>,
    /// None
    #[fhir_serde(rename = "publicationStatus")]
    pub publication_status: Code,
    /// Publication Ownership
    pub copyright: Option<String>,
}

/// Choice of types for the content\[x\] field in ContractFriendly
#[derive(Debug, Clone, PartialEq, FhirSerde)]
#[fhir_choice_element(base_name = "content")]
pub enum ContractFriendlyContent {
    /// Variant accepting the Attachment type.
    #[fhir_serde(rename = "contentAttachment")]
    Attachment(Attachment),
    /// Variant accepting the Reference type.
    #[fhir_serde(rename = "contentReference")]
    Reference(Reference),
}

/// Contract Friendly Language
#[derive(Debug, Clone, PartialEq, FhirSerde)]
#[fhir_type(name = "ContractFriendly", kind = "backbone_element")]
pub struct ContractFriendly {
    /// Unique id for inter-element referencing
    pub id: Option<std::string::String>,
    /// Additional content defined by implementations
    pub extension: Option<Vec<Extension>>,
    /// Extensions that cannot be ignored even if unrecognized
    #[fhir_serde(rename = "modifierExtension")]
    pub modifier_extension: Option<Vec<Extension>>,
    /// Easily comprehended representation of this Contract
    #[fhir_serde(flatten)]
    pub content: ContractFriendlyContent,
}

/// Choice of types for the content\[x\] field in ContractLegal
#[derive(Debug, Clone, PartialEq, FhirSerde)]
#[fhir_choice_element(base_name = "content")]
pub enum ContractLegalContent {
    /// Variant accepting the Attachment type.
    #[fhir_serde(rename = "contentAttachment")]
    Attachment(Attachment),
    /// Variant accepting the Reference type.
    #[fhir_serde(rename = "contentReference")]
    Reference(Reference),
}

/// Contract Legal Language
#[derive(Debug, Clone, PartialEq, FhirSerde)]
#[fhir_type(name = "ContractLegal", kind = "backbone_element")]
pub struct ContractLegal {
    /// Unique id for inter-element referencing
    pub id: Option<std::string::String>,
    /// Additional content defined by implementations
    pub extension: Option<Vec<Extension>>,
    /// Extensions that cannot be ignored even if unrecognized
    #[fhir_serde(rename = "modifierExtension")]
    pub modifier_extension: Option<Vec<Extension>>,
    /// Contract Legal Text
    #[fhir_serde(flatten)]
    pub content: ContractLegalContent,
}

/// Choice of types for the content\[x\] field in ContractRule
#[derive(Debug, Clone, PartialEq, FhirSerde)]
#[fhir_choice_element(base_name = "content")]
pub enum ContractRuleContent {
    /// Variant accepting the Attachment type.
    #[fhir_serde(rename = "contentAttachment")]
    Attachment(Attachment),
    /// Variant accepting the Reference type.
    #[fhir_serde(rename = "contentReference")]
    Reference(Reference),
}

/// Computable Contract Language
#[derive(Debug, Clone, PartialEq, FhirSerde)]
#[fhir_type(name = "ContractRule", kind = "backbone_element")]
pub struct ContractRule {
    /// Unique id for inter-element referencing
    pub id: Option<std::string::String>,
    /// Additional content defined by implementations
    pub extension: Option<Vec<Extension>>,
    /// Extensions that cannot be ignored even if unrecognized
    #[fhir_serde(rename = "modifierExtension")]
    pub modifier_extension: Option<Vec<Extension>>,
    /// Computable Contract Rules
    #[fhir_serde(flatten)]
    pub content: ContractRuleContent,
}

/// Contract Signatory
#[derive(Debug, Clone, PartialEq, Default, FhirSerde)]
#[fhir_type(name = "ContractSigner", kind = "backbone_element")]
pub struct ContractSigner {
    /// Unique id for inter-element referencing
    pub id: Option<std::string::String>,
    /// Additional content defined by implementations
    pub extension: Option<Vec<Extension>>,
    /// Extensions that cannot be ignored even if unrecognized
    #[fhir_serde(rename = "modifierExtension")]
    pub modifier_extension: Option<Vec<Extension>>,
    /// Contract Signatory Role
    #[fhir_serde(rename = "type")]
    pub r#type: Coding,
    /// Contract Signatory Party
    pub party: Reference,
    /// Contract Documentation Signature
    pub signature: Vec<Signature>,
}

/// Choice of types for the topic\[x\] field in ContractTerm
#[derive(Debug, Clone, PartialEq, FhirSerde)]
#[fhir_choice_element(base_name = "topic")]
pub enum ContractTermTopic {
    /// Variant accepting the CodeableConcept type.
    #[fhir_serde(rename = "topicCodeableConcept")]
    CodeableConcept(CodeableConcept),
    /// Variant accepting the Reference type.
    #[fhir_serde(rename = "topicReference")]
    Reference(Reference),
}

/// Contract Term List
#[derive(Debug, Clone, PartialEq, Default, FhirSerde)]
#[fhir_type(name = "ContractTerm", kind = "backbone_element")]
pub struct ContractTerm {
    /// Unique id for inter-element referencing
    pub id: Option<std::string::String>,
    /// Additional content defined by implementations
    pub extension: Option<Vec<Extension>>,
    /// Extensions that cannot be ignored even if unrecognized
    #[fhir_serde(rename = "modifierExtension")]
    pub modifier_extension: Option<Vec<Extension>>,
    /// Contract Term Number
    pub identifier: Option<Identifier>,
    /// Contract Term Issue Date Time
    pub issued: Option<DateTime>,
    /// Contract Term Effective Time
    pub applies: Option<Period>,
    /// Term Concern
    #[fhir_serde(flatten)]
    pub topic: Option<ContractTermTopic>,
    /// Contract Term Type or Form
    #[fhir_serde(rename = "type")]
    pub r#type: Option<CodeableConcept>,
    /// Contract Term Type specific classification
    #[fhir_serde(rename = "subType")]
    pub sub_type: Option<CodeableConcept>,
    /// Term Statement
    pub text: Option<String>,
    /// Protection for the Term
    #[fhir_serde(rename = "securityLabel")]
    pub security_label: Option<Vec<ContractTermSecurityLabel>>,
    /// Context of the Contract term
    pub offer: ContractTermOffer,
    /// Contract Term Asset List
    pub asset: Option<Vec<ContractTermAsset>>,
    /// Entity being ascribed responsibility
    pub action: Option<Vec<ContractTermAction>>,
    /// Nested Contract Term Group
    pub group: Option<Vec<ContractTerm>>,
}

/// Choice of types for the occurrence\[x\] field in ContractTermAction
#[derive(Debug, Clone, PartialEq, FhirSerde)]
#[fhir_choice_element(base_name = "occurrence")]
pub enum ContractTermActionOccurrence {
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

/// Entity being ascribed responsibility
#[derive(Debug, Clone, PartialEq, Default, FhirSerde)]
#[fhir_type(name = "ContractTermAction", kind = "backbone_element")]
pub struct ContractTermAction {
    /// Unique id for inter-element referencing
    pub id: Option<std::string::String>,
    /// Additional content defined by implementations
    pub extension: Option<Vec<Extension>>,
    /// Extensions that cannot be ignored even if unrecognized
    #[fhir_serde(rename = "modifierExtension")]
    pub modifier_extension: Option<Vec<Extension>>,
    /// True if the term prohibits the action
    #[fhir_serde(rename = "doNotPerform")]
    pub do_not_perform: Option<Boolean>,
    /// Type or form of the action
    #[fhir_serde(rename = "type")]
    pub r#type: CodeableConcept,
    /// Entity of the action
    pub subject: Option<Vec<ContractTermActionSubject>>,
    /// Purpose for the Contract Term Action
    pub intent: CodeableConcept,
    /// Pointer to specific item
    #[fhir_serde(rename = "linkId")]
    pub link_id: Option<Vec<String>>,
    /// State of the action
    pub status: CodeableConcept,
    /// Episode associated with action
    pub context: Option<Reference>,
    /// Pointer to specific item
    #[fhir_serde(rename = "contextLinkId")]
    pub context_link_id: Option<Vec<String>>,
    /// When action happens
    #[fhir_serde(flatten)]
    pub occurrence: Option<ContractTermActionOccurrence>,
    /// Who asked for action
    pub requester: Option<Vec<Reference>>,
    /// Pointer to specific item
    #[fhir_serde(rename = "requesterLinkId")]
    pub requester_link_id: Option<Vec<String>>,
    /// Kind of service performer
    #[fhir_serde(rename = "performerType")]
    pub performer_type: Option<Vec<CodeableConcept>>,
    /// Competency of the performer
    #[fhir_serde(rename = "performerRole")]
    pub performer_role: Option<CodeableConcept>,
    /// Actor that wil execute (or not) the action
    pub performer: Option<Reference>,
    /// Pointer to specific item
    #[fhir_serde(rename = "performerLinkId")]
    pub performer_link_id: Option<Vec<String>>,
    /// Why is action (not) needed?
    #[fhir_serde(rename = "reasonCode")]
    pub reason_code: Option<Vec<CodeableConcept>>,
    /// Why is action (not) needed?
    #[fhir_serde(rename = "reasonReference")]
    pub reason_reference: Option<Vec<Reference>>,
    /// Why action is to be performed
    pub reason: Option<Vec<String>>,
    /// Pointer to specific item
    #[fhir_serde(rename = "reasonLinkId")]
    pub reason_link_id: Option<Vec<String>>,
    /// Comments about the action
    pub note: Option<Vec<Annotation>>,
    /// Action restriction numbers
    #[fhir_serde(rename = "securityLabelNumber")]
    pub security_label_number: Option<Vec<UnsignedInt>>,
}

/// Entity of the action
#[derive(Debug, Clone, PartialEq, Default, FhirSerde)]
#[fhir_type(name = "ContractTermActionSubject", kind = "backbone_element")]
pub struct ContractTermActionSubject {
    /// Unique id for inter-element referencing
    pub id: Option<std::string::String>,
    /// Additional content defined by implementations
    pub extension: Option<Vec<Extension>>,
    /// Extensions that cannot be ignored even if unrecognized
    #[fhir_serde(rename = "modifierExtension")]
    pub modifier_extension: Option<Vec<Extension>>,
    /// Entity of the action
    pub reference: Vec<Reference>,
    /// Role type of the agent
    pub role: Option<CodeableConcept>,
}

/// Contract Term Asset List
#[derive(Debug, Clone, PartialEq, Default, FhirSerde)]
#[fhir_type(name = "ContractTermAsset", kind = "backbone_element")]
pub struct ContractTermAsset {
    /// Unique id for inter-element referencing
    pub id: Option<std::string::String>,
    /// Additional content defined by implementations
    pub extension: Option<Vec<Extension>>,
    /// Extensions that cannot be ignored even if unrecognized
    #[fhir_serde(rename = "modifierExtension")]
    pub modifier_extension: Option<Vec<Extension>>,
    /// Range of asset
    pub scope: Option<CodeableConcept>,
    /// Asset category
    #[fhir_serde(rename = "type")]
    pub r#type: Option<Vec<CodeableConcept>>,
    /// Associated entities
    #[fhir_serde(rename = "typeReference")]
    pub type_reference: Option<Vec<Reference>>,
    /// Asset sub-category
    pub subtype: Option<Vec<CodeableConcept>>,
    /// Kinship of the asset
    pub relationship: Option<Coding>,
    /// Circumstance of the asset
    pub context: Option<Vec<ContractTermAssetContext>>,
    /// Quality desctiption of asset
    pub condition: Option<String>,
    /// Asset availability types
    #[fhir_serde(rename = "periodType")]
    pub period_type: Option<Vec<CodeableConcept>>,
    /// Time period of the asset
    pub period: Option<Vec<Period>>,
    /// Time period
    #[fhir_serde(rename = "usePeriod")]
    pub use_period: Option<Vec<Period>>,
    /// Asset clause or question text
    pub text: Option<String>,
    /// Pointer to asset text
    #[fhir_serde(rename = "linkId")]
    pub link_id: Option<Vec<String>>,
    /// Response to assets
    pub answer: Option<Vec<ContractTermOfferAnswer>>,
    /// Asset restriction numbers
    #[fhir_serde(rename = "securityLabelNumber")]
    pub security_label_number: Option<Vec<UnsignedInt>>,
    /// Contract Valued Item List
    #[fhir_serde(rename = "valuedItem")]
    pub valued_item: Option<Vec<ContractTermAssetValuedItem>>,
}

/// Circumstance of the asset
#[derive(Debug, Clone, PartialEq, Default, FhirSerde)]
#[fhir_type(name = "ContractTermAssetContext", kind = "backbone_element")]
pub struct ContractTermAssetContext {
    /// Unique id for inter-element referencing
    pub id: Option<std::string::String>,
    /// Additional content defined by implementations
    pub extension: Option<Vec<Extension>>,
    /// Extensions that cannot be ignored even if unrecognized
    #[fhir_serde(rename = "modifierExtension")]
    pub modifier_extension: Option<Vec<Extension>>,
    /// Creator,custodian or owner
    pub reference: Option<Reference>,
    /// Codeable asset context
    pub code: Option<Vec<CodeableConcept>>,
    /// Context description
    pub text: Option<String>,
}

/// Choice of types for the entity\[x\] field in ContractTermAssetValuedItem
#[derive(Debug, Clone, PartialEq, FhirSerde)]
#[fhir_choice_element(base_name = "entity")]
pub enum ContractTermAssetValuedItemEntity {
    /// Variant accepting the CodeableConcept type.
    #[fhir_serde(rename = "entityCodeableConcept")]
    CodeableConcept(CodeableConcept),
    /// Variant accepting the Reference type.
    #[fhir_serde(rename = "entityReference")]
    Reference(Reference),
}

/// Contract Valued Item List
#[derive(Debug, Clone, PartialEq, Default, FhirSerde)]
#[fhir_type(name = "ContractTermAssetValuedItem", kind = "backbone_element")]
pub struct ContractTermAssetValuedItem {
    /// Unique id for inter-element referencing
    pub id: Option<std::string::String>,
    /// Additional content defined by implementations
    pub extension: Option<Vec<Extension>>,
    /// Extensions that cannot be ignored even if unrecognized
    #[fhir_serde(rename = "modifierExtension")]
    pub modifier_extension: Option<Vec<Extension>>,
    /// Contract Valued Item Type
    #[fhir_serde(flatten)]
    pub entity: Option<ContractTermAssetValuedItemEntity>,
    /// Contract Valued Item Number
    pub identifier: Option<Identifier>,
    /// Contract Valued Item Effective Tiem
    #[fhir_serde(rename = "effectiveTime")]
    pub effective_time: Option<DateTime>,
    /// Count of Contract Valued Items
    pub quantity: Option<Quantity>,
    /// Contract Valued Item fee, charge, or cost
    #[fhir_serde(rename = "unitPrice")]
    pub unit_price: Option<Money>,
    /// Contract Valued Item Price Scaling Factor
    pub factor: Option<Decimal>,
    /// Contract Valued Item Difficulty Scaling Factor
    pub points: Option<Decimal>,
    /// Total Contract Valued Item Value
    pub net: Option<Money>,
    /// Terms of valuation
    pub payment: Option<String>,
    /// When payment is due
    #[fhir_serde(rename = "paymentDate")]
    pub payment_date: Option<DateTime>,
    /// Who will make payment
    pub responsible: Option<Reference>,
    /// Who will receive payment
    pub recipient: Option<Reference>,
    /// Pointer to specific item
    #[fhir_serde(rename = "linkId")]
    pub link_id: Option<Vec<String>>,
    /// Security Labels that define affected terms
    #[fhir_serde(rename = "securityLabelNumber")]
    pub security_label_number: Option<Vec<UnsignedInt>>,
}

/// Context of the Contract term
#[derive(Debug, Clone, PartialEq, Default, FhirSerde)]
#[fhir_type(name = "ContractTermOffer", kind = "backbone_element")]
pub struct ContractTermOffer {
    /// Unique id for inter-element referencing
    pub id: Option<std::string::String>,
    /// Additional content defined by implementations
    pub extension: Option<Vec<Extension>>,
    /// Extensions that cannot be ignored even if unrecognized
    #[fhir_serde(rename = "modifierExtension")]
    pub modifier_extension: Option<Vec<Extension>>,
    /// Offer business ID
    pub identifier: Option<Vec<Identifier>>,
    /// Offer Recipient
    pub party: Option<Vec<ContractTermOfferParty>>,
    /// Negotiable offer asset
    pub topic: Option<Reference>,
    /// Contract Offer Type or Form
    #[fhir_serde(rename = "type")]
    pub r#type: Option<CodeableConcept>,
    /// Accepting party choice
    pub decision: Option<CodeableConcept>,
    /// How decision is conveyed
    #[fhir_serde(rename = "decisionMode")]
    pub decision_mode: Option<Vec<CodeableConcept>>,
    /// Response to offer text
    pub answer: Option<Vec<ContractTermOfferAnswer>>,
    /// Human readable offer text
    pub text: Option<String>,
    /// Pointer to text
    #[fhir_serde(rename = "linkId")]
    pub link_id: Option<Vec<String>>,
    /// Offer restriction numbers
    #[fhir_serde(rename = "securityLabelNumber")]
    pub security_label_number: Option<Vec<UnsignedInt>>,
}

/// Choice of types for the value\[x\] field in ContractTermOfferAnswer
#[derive(Debug, Clone, PartialEq, FhirSerde)]
#[fhir_choice_element(base_name = "value")]
pub enum ContractTermOfferAnswerValue {
    /// Variant accepting the Boolean type.
    #[fhir_serde(rename = "valueBoolean")]
    Boolean(Boolean),
    /// Variant accepting the Decimal type.
    #[fhir_serde(rename = "valueDecimal")]
    Decimal(Decimal),
    /// Variant accepting the Integer type.
    #[fhir_serde(rename = "valueInteger")]
    Integer(Integer),
    /// Variant accepting the Date type.
    #[fhir_serde(rename = "valueDate")]
    Date(Date),
    /// Variant accepting the DateTime type.
    #[fhir_serde(rename = "valueDateTime")]
    DateTime(DateTime),
    /// Variant accepting the Time type.
    #[fhir_serde(rename = "valueTime")]
    Time(Time),
    /// Variant accepting the String type.
    #[fhir_serde(rename = "valueString")]
    String(String),
    /// Variant accepting the Uri type.
    #[fhir_serde(rename = "valueUri")]
    Uri(Uri),
    /// Variant accepting the Attachment type.
    #[fhir_serde(rename = "valueAttachment")]
    Attachment(Attachment),
    /// Variant accepting the Coding type.
    #[fhir_serde(rename = "valueCoding")]
    Coding(Coding),
    /// Variant accepting the Quantity type.
    #[fhir_serde(rename = "valueQuantity")]
    Quantity(Quantity),
    /// Variant accepting the Reference type.
    #[fhir_serde(rename = "valueReference")]
    Reference(Reference),
}

/// Response to offer text
#[derive(Debug, Clone, PartialEq, FhirSerde)]
#[fhir_type(name = "ContractTermOfferAnswer", kind = "backbone_element")]
pub struct ContractTermOfferAnswer {
    /// Unique id for inter-element referencing
    pub id: Option<std::string::String>,
    /// Additional content defined by implementations
    pub extension: Option<Vec<Extension>>,
    /// Extensions that cannot be ignored even if unrecognized
    #[fhir_serde(rename = "modifierExtension")]
    pub modifier_extension: Option<Vec<Extension>>,
    /// The actual answer response
    #[fhir_serde(flatten)]
    pub value: ContractTermOfferAnswerValue,
}

/// Offer Recipient
#[derive(Debug, Clone, PartialEq, Default, FhirSerde)]
#[fhir_type(name = "ContractTermOfferParty", kind = "backbone_element")]
pub struct ContractTermOfferParty {
    /// Unique id for inter-element referencing
    pub id: Option<std::string::String>,
    /// Additional content defined by implementations
    pub extension: Option<Vec<Extension>>,
    /// Extensions that cannot be ignored even if unrecognized
    #[fhir_serde(rename = "modifierExtension")]
    pub modifier_extension: Option<Vec<Extension>>,
    /// Referenced entity
    pub reference: Vec<Reference>,
    /// Participant engagement type
    pub role: CodeableConcept,
}

/// Protection for the Term
#[derive(Debug, Clone, PartialEq, Default, FhirSerde)]
#[fhir_type(name = "ContractTermSecurityLabel", kind = "backbone_element")]
pub struct ContractTermSecurityLabel {
    /// Unique id for inter-element referencing
    pub id: Option<std::string::String>,
    /// Additional content defined by implementations
    pub extension: Option<Vec<Extension>>,
    /// Extensions that cannot be ignored even if unrecognized
    #[fhir_serde(rename = "modifierExtension")]
    pub modifier_extension: Option<Vec<Extension>>,
    /// Link to Security Labels
    pub number: Option<Vec<UnsignedInt>>,
    /// Confidentiality Protection
    pub classification: Coding,
    /// Applicable Policy
    pub category: Option<Vec<Coding>>,
    /// Handling Instructions
    pub control: Option<Vec<Coding>>,
}
