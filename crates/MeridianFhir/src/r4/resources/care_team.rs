use crate::r4::*;
use crate::FhirSerde;

/// FHIR CareTeam type
///
/// The Care Team includes all the people and organizations who plan to
/// participate in the coordination and delivery of care for a patient.
///
/// See: [CareTeam](http://hl7.org/fhir/StructureDefinition/CareTeam)
#[derive(Debug, Clone, PartialEq, Default, FhirSerde)]
#[fhir_type(name = "CareTeam", kind = "domain_resource")]
pub struct CareTeam {
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
    /// External Ids for this team
    pub identifier: Option<Vec<Identifier>>,
    /// proposed | active | suspended | inactive | entered-in-error
    pub status: Option<Code>,
    /// Type of team
    pub category: Option<Vec<CodeableConcept>>,
    /// Name of the team, such as crisis assessment team
    pub name: Option<String>,
    /// Who care team is for
    pub subject: Option<Reference>,
    /// Encounter created as part of
    pub encounter: Option<Reference>,
    /// Time period team covers
    pub period: Option<Period>,
    /// Members of the team
    pub participant: Option<Vec<CareTeamParticipant>>,
    /// Why the care team exists
    #[fhir_serde(rename = "reasonCode")]
    pub reason_code: Option<Vec<CodeableConcept>>,
    /// Why the care team exists
    #[fhir_serde(rename = "reasonReference")]
    pub reason_reference: Option<Vec<Reference>>,
    /// Organization responsible for the care team
    #[fhir_serde(rename = "managingOrganization")]
    pub managing_organization: Option<Vec<Reference>>,
    /// A contact detail for the care team (that applies to all members)
    pub telecom: Option<Vec<ContactPoint>>,
    /// Comments made about the CareTeam
    pub note: Option<Vec<Annotation>>,
}

/// Members of the team
#[derive(Debug, Clone, PartialEq, Default, FhirSerde)]
#[fhir_type(name = "CareTeamParticipant", kind = "backbone_element")]
pub struct CareTeamParticipant {
    /// Unique id for inter-element referencing
    pub id: Option<std::string::String>,
    /// Additional content defined by implementations
    pub extension: Option<Vec<Extension>>,
    /// Extensions that cannot be ignored even if unrecognized
    #[fhir_serde(rename = "modifierExtension")]
    pub modifier_extension: Option<Vec<Extension>>,
    /// Type of involvement
    pub role: Option<Vec<CodeableConcept>>,
    /// Who is involved
    pub member: Option<Reference>,
    /// Organization of the practitioner
    #[fhir_serde(rename = "onBehalfOf")]
    pub on_behalf_of: Option<Reference>,
    /// Time period of participant
    pub period: Option<Period>,
}
