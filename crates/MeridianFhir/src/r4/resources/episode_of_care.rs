use crate::r4::*;
use crate::FhirSerde;

/// FHIR EpisodeOfCare type
///
/// An association between a patient and an organization / healthcare provider(s)
/// during which time encounters may occur. The managing organization assumes a
/// level of responsibility for the patient during this time.
///
/// See: [EpisodeOfCare](http://hl7.org/fhir/StructureDefinition/EpisodeOfCare)
#[derive(Debug, Clone, PartialEq, Default, FhirSerde)]
#[fhir_type(name = "EpisodeOfCare", kind = "domain_resource")]
pub struct EpisodeOfCare {
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
    /// Business Identifier(s) relevant for this EpisodeOfCare
    pub identifier: Option<Vec<Identifier>>,
    /// planned | waitlist | active | onhold | finished | cancelled | entered-in-error
    pub status: Code,
    /// Past list of status codes (the current status may be included to cover the start date of the status)
    #[fhir_serde(rename = "statusHistory")]
    pub status_history: Option<Vec<EpisodeOfCareStatusHistory>>,
    /// Type/class  - e.g. specialist referral, disease management
    #[fhir_serde(rename = "type")]
    pub r#type: Option<Vec<CodeableConcept>>,
    /// The list of diagnosis relevant to this episode of care
    pub diagnosis: Option<Vec<EpisodeOfCareDiagnosis>>,
    /// The patient who is the focus of this episode of care
    pub patient: Reference,
    /// Organization that assumes care
    #[fhir_serde(rename = "managingOrganization")]
    pub managing_organization: Option<Reference>,
    /// Interval during responsibility is assumed
    pub period: Option<Period>,
    /// Originating Referral Request(s)
    #[fhir_serde(rename = "referralRequest")]
    pub referral_request: Option<Vec<Reference>>,
    /// Care manager/care coordinator for the patient
    #[fhir_serde(rename = "careManager")]
    pub care_manager: Option<Reference>,
    /// Other practitioners facilitating this episode of care
    pub team: Option<Vec<Reference>>,
    /// The set of accounts that may be used for billing for this EpisodeOfCare
    pub account: Option<Vec<Reference>>,
}

/// The list of diagnosis relevant to this episode of care
#[derive(Debug, Clone, PartialEq, Default, FhirSerde)]
#[fhir_type(name = "EpisodeOfCareDiagnosis", kind = "backbone_element")]
pub struct EpisodeOfCareDiagnosis {
    /// Unique id for inter-element referencing
    pub id: Option<std::string::String>,
    /// Additional content defined by implementations
    pub extension: Option<Vec<Extension>>,
    /// Extensions that cannot be ignored even if unrecognized
    #[fhir_serde(rename = "modifierExtension")]
    pub modifier_extension: Option<Vec<Extension>>,
    /// Conditions/problems/diagnoses this episode of care is for
    pub condition: Reference,
    /// Role that this diagnosis has within the episode of care (e.g. admission, billing, discharge …)
    pub role: Option<CodeableConcept>,
    /// Ranking of the diagnosis (for each role type)
    pub rank: Option<PositiveInt>,
}

/// Past list of status codes (the current status may be included to cover the start date of the status)
#[derive(Debug, Clone, PartialEq, Default, FhirSerde)]
#[fhir_type(name = "EpisodeOfCareStatusHistory", kind = "backbone_element")]
pub struct EpisodeOfCareStatusHistory {
    /// Unique id for inter-element referencing
    pub id: Option<std::string::String>,
    /// Additional content defined by implementations
    pub extension: Option<Vec<Extension>>,
    /// Extensions that cannot be ignored even if unrecognized
    #[fhir_serde(rename = "modifierExtension")]
    pub modifier_extension: Option<Vec<Extension>>,
    /// planned | waitlist | active | onhold | finished | cancelled | entered-in-error
    pub status: Code,
    /// Duration the EpisodeOfCare was in the specified status
    pub period: Period,
}
