use crate::r4::*;
use crate::FhirSerde;

/// Choice of types for the subject\[x\] field in ActivityDefinition
#[derive(Debug, Clone, PartialEq, FhirSerde)]
#[fhir_choice_element(base_name = "subject")]
pub enum ActivityDefinitionSubject {
    /// Variant accepting the CodeableConcept type.
    #[fhir_serde(rename = "subjectCodeableConcept")]
    CodeableConcept(CodeableConcept),
    /// Variant accepting the Reference type.
    #[fhir_serde(rename = "subjectReference")]
    Reference(Reference),
}

/// Choice of types for the timing\[x\] field in ActivityDefinition
#[derive(Debug, Clone, PartialEq, FhirSerde)]
#[fhir_choice_element(base_name = "timing")]
pub enum ActivityDefinitionTiming {
    /// Variant accepting the Timing type.
    #[fhir_serde(rename = "timingTiming")]
    Timing(Timing),
    /// Variant accepting the DateTime type.
    #[fhir_serde(rename = "timingDateTime")]
    DateTime(DateTime),
    /// Variant accepting the Age type.
    #[fhir_serde(rename = "timingAge")]
    Age(Age),
    /// Variant accepting the Period type.
    #[fhir_serde(rename = "timingPeriod")]
    Period(Period),
    /// Variant accepting the Range type.
    #[fhir_serde(rename = "timingRange")]
    Range(Range),
    /// Variant accepting the Duration type.
    #[fhir_serde(rename = "timingDuration")]
    Duration(Duration),
}

/// Choice of types for the product\[x\] field in ActivityDefinition
#[derive(Debug, Clone, PartialEq, FhirSerde)]
#[fhir_choice_element(base_name = "product")]
pub enum ActivityDefinitionProduct {
    /// Variant accepting the Reference type.
    #[fhir_serde(rename = "productReference")]
    Reference(Reference),
    /// Variant accepting the CodeableConcept type.
    #[fhir_serde(rename = "productCodeableConcept")]
    CodeableConcept(CodeableConcept),
}

/// FHIR ActivityDefinition type
///
/// This resource allows for the definition of some activity to be performed,
/// independent of a particular patient, practitioner, or other performance
/// context.
///
/// See: [ActivityDefinition](http://hl7.org/fhir/StructureDefinition/ActivityDefinition)
#[derive(Debug, Clone, PartialEq, Default, FhirSerde)]
#[fhir_type(name = "ActivityDefinition", kind = "domain_resource")]
pub struct ActivityDefinition {
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
    /// Canonical identifier for this activity definition, represented as a URI (globally unique)
    pub url: Option<Uri>,
    /// Additional identifier for the activity definition
    pub identifier: Option<Vec<Identifier>>,
    /// Business version of the activity definition
    pub version: Option<String>,
    /// Name for this activity definition (computer friendly)
    pub name: Option<String>,
    /// Name for this activity definition (human friendly)
    pub title: Option<String>,
    /// Subordinate title of the activity definition
    pub subtitle: Option<String>,
    /// The status of this activity definition. Enables tracking the life-cycle of the content.
    pub status: Code,
    /// For testing purposes, not real usage
    pub experimental: Option<Boolean>,
    /// Type of individual the activity definition is intended for
    #[fhir_serde(flatten)]
    pub subject: Option<ActivityDefinitionSubject>,
    /// Date last changed
    pub date: Option<DateTime>,
    /// Name of the publisher (organization or individual)
    pub publisher: Option<String>,
    /// Contact details for the publisher
    pub contact: Option<Vec<ContactDetail>>,
    /// Natural language description of the activity definition
    pub description: Option<Markdown>,
    /// The context that the content is intended to support
    #[fhir_serde(rename = "useContext")]
    pub use_context: Option<Vec<UsageContext>>,
    /// Intended jurisdiction for activity definition (if applicable)
    pub jurisdiction: Option<Vec<CodeableConcept>>,
    /// Why this activity definition is defined
    pub purpose: Option<Markdown>,
    /// Describes the clinical usage of the activity definition
    pub usage: Option<String>,
    /// Use and/or publishing restrictions
    pub copyright: Option<Markdown>,
    /// When the activity definition was approved by publisher
    #[fhir_serde(rename = "approvalDate")]
    pub approval_date: Option<Date>,
    /// When the activity definition was last reviewed
    #[fhir_serde(rename = "lastReviewDate")]
    pub last_review_date: Option<Date>,
    /// When the activity definition is expected to be used
    #[fhir_serde(rename = "effectivePeriod")]
    pub effective_period: Option<Period>,
    /// E.g. Education, Treatment, Assessment, etc..
    pub topic: Option<Vec<CodeableConcept>>,
    /// Who authored the content
    pub author: Option<Vec<ContactDetail>>,
    /// Who edited the content
    pub editor: Option<Vec<ContactDetail>>,
    /// Who reviewed the content
    pub reviewer: Option<Vec<ContactDetail>>,
    /// Who endorsed the content
    pub endorser: Option<Vec<ContactDetail>>,
    /// Additional documentation, citations, etc.
    #[fhir_serde(rename = "relatedArtifact")]
    pub related_artifact: Option<Vec<RelatedArtifact>>,
    /// Logic used by the activity definition
    pub library: Option<Vec<Canonical>>,
    /// A description of the kind of resource the activity definition is representing. For example, a MedicationRequest, a ServiceRequest, or a CommunicationRequest. Typically, but not always, this is a Request resource.
    pub kind: Option<Code>,
    /// What profile the resource needs to conform to
    pub profile: Option<Canonical>,
    /// Detail type of activity
    pub code: Option<CodeableConcept>,
    /// Indicates the level of authority/intentionality associated with the activity and where the request should fit into the workflow chain
    pub intent: Option<Code>,
    /// Indicates how quickly the activity should be addressed with respect to other requests
    pub priority: Option<Code>,
    /// True if the activity should not be performed
    #[fhir_serde(rename = "doNotPerform")]
    pub do_not_perform: Option<Boolean>,
    /// When activity is to occur
    #[fhir_serde(flatten)]
    pub timing: Option<ActivityDefinitionTiming>,
    /// Where it should happen
    pub location: Option<Reference>,
    /// Who should participate in the action
    pub participant: Option<Vec<ActivityDefinitionParticipant>>,
    /// What's administered/supplied
    #[fhir_serde(flatten)]
    pub product: Option<ActivityDefinitionProduct>,
    /// How much is administered/consumed/supplied
    pub quantity: Option<Quantity>,
    /// Detailed dosage instructions
    pub dosage: Option<Vec<Dosage>>,
    /// What part of body to perform on
    #[fhir_serde(rename = "bodySite")]
    pub body_site: Option<Vec<CodeableConcept>>,
    /// What specimens are required to perform this action
    #[fhir_serde(rename = "specimenRequirement")]
    pub specimen_requirement: Option<Vec<Reference>>,
    /// What observations are required to perform this action
    #[fhir_serde(rename = "observationRequirement")]
    pub observation_requirement: Option<Vec<Reference>>,
    /// What observations must be produced by this action
    #[fhir_serde(rename = "observationResultRequirement")]
    pub observation_result_requirement: Option<Vec<Reference>>,
    /// Transform to apply the template
    pub transform: Option<String>,
    /// Dynamic aspects of the definition
    #[fhir_serde(rename = "dynamicValue")]
    pub dynamic_value: Option<Vec<ActivityDefinitionDynamicValue>>,
}

/// Dynamic aspects of the definition
#[derive(Debug, Clone, PartialEq, Default, FhirSerde)]
#[fhir_type(name = "ActivityDefinitionDynamicValue", kind = "backbone_element")]
pub struct ActivityDefinitionDynamicValue {
    /// Unique id for inter-element referencing
    pub id: Option<std::string::String>,
    /// Additional content defined by implementations
    pub extension: Option<Vec<Extension>>,
    /// Extensions that cannot be ignored even if unrecognized
    #[fhir_serde(rename = "modifierExtension")]
    pub modifier_extension: Option<Vec<Extension>>,
    /// The path to the element to be set dynamically
    pub path: String,
    /// An expression that provides the dynamic value for the customization
    pub expression: Expression,
}

/// Who should participate in the action
#[derive(Debug, Clone, PartialEq, Default, FhirSerde)]
#[fhir_type(name = "ActivityDefinitionParticipant", kind = "backbone_element")]
pub struct ActivityDefinitionParticipant {
    /// Unique id for inter-element referencing
    pub id: Option<std::string::String>,
    /// Additional content defined by implementations
    pub extension: Option<Vec<Extension>>,
    /// Extensions that cannot be ignored even if unrecognized
    #[fhir_serde(rename = "modifierExtension")]
    pub modifier_extension: Option<Vec<Extension>>,
    /// The type of participant in the action
    #[fhir_serde(rename = "type")]
    pub r#type: Code,
    /// E.g. Nurse, Surgeon, Parent, etc..
    pub role: Option<CodeableConcept>,
}
