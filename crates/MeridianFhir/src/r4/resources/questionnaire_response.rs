use crate::r4::*;
use crate::FhirSerde;

/// FHIR QuestionnaireResponse type
///
/// A structured set of questions and their answers. The questions are ordered
/// and grouped into coherent subsets, corresponding to the structure of the
/// grouping of the questionnaire being responded to.
///
/// See: [QuestionnaireResponse](http://hl7.org/fhir/StructureDefinition/QuestionnaireResponse)
#[derive(Debug, Clone, PartialEq, Default, FhirSerde)]
#[fhir_type(name = "QuestionnaireResponse", kind = "domain_resource")]
pub struct QuestionnaireResponse {
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
    /// Unique id for this set of answers
    pub identifier: Option<Identifier>,
    /// Request fulfilled by this QuestionnaireResponse
    #[fhir_serde(rename = "basedOn")]
    pub based_on: Option<Vec<Reference>>,
    /// Part of this action
    #[fhir_serde(rename = "partOf")]
    pub part_of: Option<Vec<Reference>>,
    /// Form being answered
    pub questionnaire: Option<Canonical>,
    /// in-progress | completed | amended | entered-in-error | stopped
    pub status: Code,
    /// The subject of the questions
    pub subject: Option<Reference>,
    /// Encounter created as part of
    pub encounter: Option<Reference>,
    /// Date the answers were gathered
    pub authored: Option<DateTime>,
    /// Person who received and recorded the answers
    pub author: Option<Reference>,
    /// The person who answered the questions
    pub source: Option<Reference>,
    /// Groups and questions
    pub item: Option<Vec<QuestionnaireResponseItem>>,
}

/// Groups and questions
#[derive(Debug, Clone, PartialEq, Default, FhirSerde)]
#[fhir_type(name = "QuestionnaireResponseItem", kind = "backbone_element")]
pub struct QuestionnaireResponseItem {
    /// Unique id for inter-element referencing
    pub id: Option<std::string::String>,
    /// Additional content defined by implementations
    pub extension: Option<Vec<Extension>>,
    /// Extensions that cannot be ignored even if unrecognized
    #[fhir_serde(rename = "modifierExtension")]
    pub modifier_extension: Option<Vec<Extension>>,
    /// Pointer to specific item from Questionnaire
    #[fhir_serde(rename = "linkId")]
    pub link_id: String,
    /// ElementDefinition - details for the item
    pub definition: Option<Uri>,
    /// Name for group or question text
    pub text: Option<String>,
    /// The response(s) to the question
    pub answer: Option<Vec<QuestionnaireResponseItemAnswer>>,
    /// Nested questionnaire response items
    pub item: Option<Vec<QuestionnaireResponseItem>>,
}

/// Choice of types for the value\[x\] field in QuestionnaireResponseItemAnswer
#[derive(Debug, Clone, PartialEq, FhirSerde)]
#[fhir_choice_element(base_name = "value")]
pub enum QuestionnaireResponseItemAnswerValue {
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

/// The response(s) to the question
#[derive(Debug, Clone, PartialEq, Default, FhirSerde)]
#[fhir_type(name = "QuestionnaireResponseItemAnswer", kind = "backbone_element")]
pub struct QuestionnaireResponseItemAnswer {
    /// Unique id for inter-element referencing
    pub id: Option<std::string::String>,
    /// Additional content defined by implementations
    pub extension: Option<Vec<Extension>>,
    /// Extensions that cannot be ignored even if unrecognized
    #[fhir_serde(rename = "modifierExtension")]
    pub modifier_extension: Option<Vec<Extension>>,
    /// Single-valued answer to the question
    #[fhir_serde(flatten)]
    pub value: Option<QuestionnaireResponseItemAnswerValue>,
    /// Nested groups and questions
    pub item: Option<Vec<QuestionnaireResponseItem>>,
}
