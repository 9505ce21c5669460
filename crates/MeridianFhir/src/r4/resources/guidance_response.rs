use crate::r4::*;
use crate::FhirSerde;

/// Choice of types for the module\[x\] field in GuidanceResponse
#[derive(Debug, Clone, PartialEq, FhirSerde)]
#[fhir_choice_element(base_name = "module")]
pub enum GuidanceResponseModule {
    /// Variant accepting the Uri type.
    #[fhir_serde(rename = "moduleUri")]
    Uri(Uri),
    /// Variant accepting the Canonical type.
    #[fhir_serde(rename = "moduleCanonical")]
    Canonical(Canonical),
    /// Variant accepting the CodeableConcept type.
    #[fhir_serde(rename = "moduleCodeableConcept")]
    CodeableConcept(CodeableConcept),
}

/// FHIR GuidanceResponse type
///
/// A guidance response is the formal response to a guidance request, including
/// any output parameters returned by the evaluation, as well as the description
/// of any proposed actions to be taken.
///
/// See: [GuidanceResponse](http://hl7.org/fhir/StructureDefinition/GuidanceResponse)
#[derive(Debug, Clone, PartialEq, FhirSerde)]
#[fhir_type(name = "GuidanceResponse", kind = "domain_resource")]
pub struct GuidanceResponse {
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
    /// The identifier of the request associated with this response, if any
    #[fhir_serde(rename = "requestIdentifier")]
    pub request_identifier: Option<Identifier>,
    /// Business identifier
    pub identifier: Option<Vec<Identifier>>,
    /// What guidance was requested
    #[fhir_serde(flatten)]
    pub module: GuidanceResponseModule,
    /// success | data-requested | data-required | in-progress | failure | entered-in-error
    pub status: Code,
    /// Patient the request was performed for
    pub subject: Option<Reference>,
    /// Encounter during which the response was returned
    pub encounter: Option<Reference>,
    /// When the guidance response was processed
    #[fhir_serde(rename = "occurrenceDateTime")]
    pub occurrence_date_time: Option<DateTime>,
    /// Device returning the guidance
    pub performer: Option<Reference>,
    /// Why guidance is needed
    #[fhir_serde(rename = "reasonCode")]
    pub reason_code: Option<Vec<CodeableConcept>>,
    /// Why guidance is needed
    #[fhir_serde(rename = "reasonReference")]
    pub reason_reference: Option<Vec<Reference>>,
    /// Additional notes about the response
    pub note: Option<Vec<Annotation>>,
    /// Messages resulting from the evaluation of the artifact or artifacts
    #[fhir_serde(rename = "evaluationMessage")]
    pub evaluation_message: Option<Vec<Reference>>,
    /// The output parameters of the evaluation, if any
    #[fhir_serde(rename = "outputParameters")]
    pub output_parameters: Option<Reference>,
    /// Proposed actions, if any
    pub result: Option<Reference>,
    /// Additional required data
    #[fhir_serde(rename = "dataRequirement")]
    pub data_requirement: Option<Vec<DataRequirement>>,
}
