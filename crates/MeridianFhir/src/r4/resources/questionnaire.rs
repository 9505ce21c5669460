use crate::r4::*;
use crate::FhirSerde;

/// FHIR Questionnaire type
///
/// A structured set of questions intended to guide the collection of answers
/// from end-users. Questionnaires provide detailed control over order,
/// presentation, phraseology and grouping to allow coherent, consistent data
/// collection.
///
/// See: [Questionnaire](http://hl7.org/fhir/StructureDefinition/Questionnaire)
#[derive(Debug, Clone, PartialEq, Default, FhirSerde)]
#[fhir_type(name = "Questionnaire", kind = "domain_resource")]
pub struct Questionnaire {
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
    /// Canonical identifier for this questionnaire, represented as a URI (globally unique)
    pub url: Option<Uri>,
    /// Additional identifier for the questionnaire
    pub identifier: Option<Vec<Identifier>>,
    /// Business version of the questionnaire
    pub version: Option<String>,
    /// Name for this questionnaire (computer friendly)
    pub name: Option<String>,
    /// Name for this questionnaire (human friendly)
    pub title: Option<String>,
    /// Instantiates protocol or definition
    #[fhir_serde(rename = "derivedFrom")]
    pub derived_from: Option<Vec<Canonical>>,
    /// The status of this questionnaire. Enables tracking the life-cycle of the content.
    pub status: Code,
    /// For testing purposes, not real usage
    pub experimental: Option<Boolean>,
    /// The types of subjects that can be the subject of responses created for the questionnaire
    #[fhir_serde(rename = "subjectType")]
    pub subject_type: Option<Vec<Code>>,
    /// Date last changed
    pub date: Option<DateTime>,
    /// Name of the publisher (organization or individual)
    pub publisher: Option<String>,
    /// Contact details for the publisher
    pub contact: Option<Vec<ContactDetail>>,
    /// Natural language description of the questionnaire
    pub description: Option<Markdown>,
    /// The context that the content is intended to support
    #[fhir_serde(rename = "useContext")]
    pub use_context: Option<Vec<UsageContext>>,
    /// Intended jurisdiction for questionnaire (if applicable)
    pub jurisdiction: Option<Vec<CodeableConcept>>,
    /// Why this questionnaire is defined
    pub purpose: Option<Markdown>,
    /// Use and/or publishing restrictions
    pub copyright: Option<Markdown>,
    /// When the questionnaire was approved by publisher
    #[fhir_serde(rename = "approvalDate")]
    pub approval_date: Option<Date>,
    /// When the questionnaire was last reviewed
    #[fhir_serde(rename = "lastReviewDate")]
    pub last_review_date: Option<Date>,
    /// When the questionnaire is expected to be used
    #[fhir_serde(rename = "effectivePeriod")]
    pub effective_period: Option<Period>,
    /// Concept that represents the overall questionnaire
    pub code: Option<Vec<Coding>>,
    /// Questions and sections within the Questionnaire
    pub item: Option<Vec<QuestionnaireItem>>,
}

/// Questions and sections within the Questionnaire
#[derive(Debug, Clone, PartialEq, Default, FhirSerde)]
#[fhir_type(name = "QuestionnaireItem", kind = "backbone_element")]
pub struct QuestionnaireItem {
    /// Unique id for inter-element referencing
    pub id: Option<std::string::String>,
    /// Additional content defined by implementations
    pub extension: Option<Vec<Extension>>,
    /// Extensions that cannot be ignored even if unrecognized
    #[fhir_serde(rename = "modifierExtension")]
    pub modifier_extension: Option<Vec<Extension>>,
    /// Unique id for item in questionnaire
    #[fhir_serde(rename = "linkId")]
    pub link_id: String,
    /// ElementDefinition - details for the item
    pub definition: Option<String>,
    /// Corresponding concept for this item in a terminology
    pub code: Option<Vec<Coding>>,
    /// E.g. "1(a)", "2.5.3".
    pub prefix: Option<String>,
    /// Primary text for the item
    pub text: Option<String>,
    /// The type of questionnaire item this is - whether text for display, a grouping of other items or a particular type of data to be captured (string, integer, coded choice, etc.)
    #[fhir_serde(rename = "type")]
    pub r#type: Code,
    /// Only allow data when
    #[fhir_serde(rename = "enableWhen")]
    pub enable_when: Option<Vec<QuestionnaireItemEnableWhen>>,
    /// Controls how multiple enableWhen values are interpreted - whether all or any must be true
    #[fhir_serde(rename = "enableBehavior")]
    pub enable_behavior: Option<Code>,
    /// Whether the item must be included in data results
    pub required: Option<Boolean>,
    /// Whether the item may repeat
    pub repeats: Option<Boolean>,
    /// Don't allow human editing
    #[fhir_serde(rename = "readOnly")]
    pub read_only: Option<Boolean>,
    /// No more than this many characters
    #[fhir_serde(rename = "maxLength")]
    pub max_length: Option<Integer>,
    /// Valueset containing permitted answers
    #[fhir_serde(rename = "answerValueSet")]
    pub answer_value_set: Option<String>,
    /// Permitted answer
    #[fhir_serde(rename = "answerOption")]
    pub answer_option: Option<Vec<QuestionnaireItemAnswerOption>>,
    /// Initial value(s) when item is first rendered
    pub initial: Option<Vec<QuestionnaireItemInitial>>,
    /// Nested questionnaire items
    pub item: Option<Vec<QuestionnaireItem>>,
}

/// Choice of types for the value\[x\] field in QuestionnaireItemAnswerOption
#[derive(Debug, Clone, PartialEq, FhirSerde)]
#[fhir_choice_element(base_name = "value")]
pub enum QuestionnaireItemAnswerOptionValue {
    /// Variant accepting the Integer type.
    #[fhir_serde(rename = "valueInteger")]
    Integer(Integer),
    /// Variant accepting the Date type.
    #[fhir_serde(rename = "valueDate")]
    Date(Date),
    /// Variant accepting the Time type.
    #[fhir_serde(rename = "valueTime")]
    Time(Time),
    /// Variant accepting the String type.
    #[fhir_serde(rename = "valueString")]
    String(String),
    /// Variant accepting the Coding type.
    #[fhir_serde(rename = "valueCoding")]
    Coding(Coding),
    /// Variant accepting the Reference type.
    #[fhir_serde(rename = "valueReference")]
    Reference(Reference),
}

/// Permitted answer
#[derive(Debug, Clone, PartialEq, FhirSerde)]
#[fhir_type(name = "QuestionnaireItemAnswerOption", kind = "backbone_element")]
pub struct QuestionnaireItemAnswerOption {
    /// Unique id for inter-element referencing
    pub id: Option<std::string::String>,
    /// Additional content defined by implementations
    pub extension: Option<Vec<Extension>>,
    /// Extensions that cannot be ignored even if unrecognized
    #[fhir_serde(rename = "modifierExtension")]
    pub modifier_extension: Option<Vec<Extension>>,
    /// Answer value
    #[fhir_serde(flatten)]
    pub value: QuestionnaireItemAnswerOptionValue,
    /// Whether option is selected by default
    #[fhir_serde(rename = "initialSelected")]
    pub initial_selected: Option<Boolean>,
}

/// Choice of types for the answer\[x\] field in QuestionnaireItemEnableWhen
#[derive(Debug, Clone, PartialEq, FhirSerde)]
#[fhir_choice_element(base_name = "answer")]
pub enum QuestionnaireItemEnableWhenAnswer {
    /// Variant accepting the Boolean type.
    #[fhir_serde(rename = "answerBoolean")]
    Boolean(Boolean),
    /// Variant accepting the Decimal type.
    #[fhir_serde(rename = "answerDecimal")]
    Decimal(Decimal),
    /// Variant accepting the Integer type.
    #[fhir_serde(rename = "answerInteger")]
    Integer(Integer),
    /// Variant accepting the Date type.
    #[fhir_serde(rename = "answerDate")]
    Date(Date),
    /// Variant accepting the DateTime type.
    #[fhir_serde(rename = "answerDateTime")]
    DateTime(DateTime),
    /// Variant accepting the Time type.
    #[fhir_serde(rename = "answerTime")]
    Time(Time),
    /// Variant accepting the String type.
    #[fhir_serde(rename = "answerString")]
    String(String),
    /// Variant accepting the Coding type.
    #[fhir_serde(rename = "answerCoding")]
    Coding(Coding),
    /// Variant accepting the Quantity type.
    #[fhir_serde(rename = "answerQuantity")]
    Quantity(Quantity),
    /// Variant accepting the Reference type.
    #[fhir_serde(rename = "answerReference")]
    Reference(Reference),
}

/// Only allow data when
#[derive(Debug, Clone, PartialEq, FhirSerde)]
#[fhir_type(name = "QuestionnaireItemEnableWhen", kind = "backbone_element")]
pub struct QuestionnaireItemEnableWhen {
    /// Unique id for inter-element referencing
    pub id: Option<std::string::String>,
    /// Additional content defined by implementations
    pub extension: Option<Vec<Extension>>,
    /// Extensions that cannot be ignored even if unrecognized
    #[fhir_serde(rename = "modifierExtension")]
    pub modifier_extension: Option<Vec<Extension>>,
    /// Question that determines whether item is enabled
    pub question: String,
    /// Specifies the criteria by which the question is enabled
    pub operator: Code,
    /// Value for question comparison based on operator
    #[fhir_serde(flatten)]
    pub answer: QuestionnaireItemEnableWhenAnswer,
}

/// Choice of types for the value\[x\] field in QuestionnaireItemInitial
#[derive(Debug, Clone, PartialEq, FhirSerde)]
#[fhir_choice_element(base_name = "value")]
pub enum QuestionnaireItemInitialValue {
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

/// Initial value(s) when item is first rendered
#[derive(Debug, Clone, PartialEq, FhirSerde)]
#[fhir_type(name = "QuestionnaireItemInitial", kind = "backbone_element")]
pub struct QuestionnaireItemInitial {
    /// Unique id for inter-element referencing
    pub id: Option<std::string::String>,
    /// Additional content defined by implementations
    pub extension: Option<Vec<Extension>>,
    /// Extensions that cannot be ignored even if unrecognized
    #[fhir_serde(rename = "modifierExtension")]
    pub modifier_extension: Option<Vec<Extension>>,
    /// Actual value for initializing the question
    #[fhir_serde(flatten)]
    pub value: QuestionnaireItemInitialValue,
}
