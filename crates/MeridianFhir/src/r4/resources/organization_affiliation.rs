use crate::r4::*;
use crate::FhirSerde;

/// FHIR OrganizationAffiliation type
///
/// Defines an affiliation/assotiation/relationship between 2 distinct
/// oganizations, that is not a part-of relationship/sub-division relationship.
///
/// See: [OrganizationAffiliation](http://hl7.org/fhir/StructureDefinition/OrganizationAffiliation)
#[derive(Debug, Clone, PartialEq, Default, FhirSerde)]
#[fhir_type(name = "OrganizationAffiliation", kind = "domain_resource")]
pub struct OrganizationAffiliation {
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
    /// Business identifiers that are specific to this role
    pub identifier: Option<Vec<Identifier>>,
    /// Whether this organization affiliation record is in active use
    pub active: Option<Boolean>,
    /// The period during which the participatingOrganization is affiliated with the primary organization
    pub period: Option<Period>,
    /// Organization where the role is available
    pub organization: Option<Reference>,
    /// Organization that provides/performs the role (e.g. providing services or is a member of)
    #[fhir_serde(rename = "participatingOrganization")]
    pub participating_organization: Option<Reference>,
    /// Health insurance provider network in which the participatingOrganization provides the role's services (if defined) at the indicated locations (if defined)
    pub network: Option<Vec<Reference>>,
    /// Definition of the role the participatingOrganization plays
    pub code: Option<Vec<CodeableConcept>>,
    /// Specific specialty of the participatingOrganization in the context of the role
    pub specialty: Option<Vec<CodeableConcept>>,
    /// The location(s) at which the role occurs
    pub location: Option<Vec<Reference>>,
    /// Healthcare services provided through the role
    #[fhir_serde(rename = "healthcareService")]
    pub healthcare_service: Option<Vec<Reference>>,
    /// Contact details at the participatingOrganization relevant to this Affiliation
    pub telecom: Option<Vec<ContactPoint>>,
    /// Technical endpoints providing access to services operated for this role
    pub endpoint: Option<Vec<Reference>>,
}
