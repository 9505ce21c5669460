use crate::r4::*;
use crate::FhirSerde;

/// FHIR MedicinalProductAuthorization type
///
/// The regulatory authorization of a medicinal product
///
/// See: [MedicinalProductAuthorization](http://hl7.org/fhir/StructureDefinition/MedicinalProductAuthorization)
#[derive(Debug, Clone, PartialEq, Default, FhirSerde)]
#[fhir_type(name = "MedicinalProductAuthorization", kind = "domain_resource")]
pub struct MedicinalProductAuthorization {
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
    /// Business identifier for the marketing authorization, as assigned by a regulator
    pub identifier: Option<Vec<Identifier>>,
    /// The medicinal product that is being authorized
    pub subject: Option<Reference>,
    /// The country in which the marketing authorization has been granted
    pub country: Option<Vec<CodeableConcept>>,
    /// Jurisdiction within a country
    pub jurisdiction: Option<Vec<CodeableConcept>>,
    /// The status of the marketing authorization
    pub status: Option<CodeableConcept>,
    /// The date at which the given status has become applicable
    #[fhir_serde(rename = "statusDate")]
    pub status_date: Option<DateTime>,
    /// The date when a suspended the marketing or the marketing authorization of the product is anticipated to be restored
    #[fhir_serde(rename = "restoreDate")]
    pub restore_date: Option<DateTime>,
    /// The beginning of the time period in which the marketing authorization is in the specific status shall be specified A complete date consisting of day, month and year shall be specified using the ISO 8601 date format
    #[fhir_serde(rename = "validityPeriod")]
    pub validity_period: Option<Period>,
    /// A period of time after authorization before generic product applicatiosn can be submitted
    #[fhir_serde(rename = "dataExclusivityPeriod")]
    pub data_exclusivity_period: Option<Period>,
    /// The date when the first authorization was granted by a Medicines Regulatory Agency
    #[fhir_serde(rename = "dateOfFirstAuthorization")]
    pub date_of_first_authorization: Option<DateTime>,
    /// Date of first marketing authorization for a company's new medicinal product in any country in the World
    #[fhir_serde(rename = "internationalBirthDate")]
    pub international_birth_date: Option<DateTime>,
    /// The legal framework against which this authorization is granted
    #[fhir_serde(rename = "legalBasis")]
    pub legal_basis: Option<CodeableConcept>,
    /// Authorization in areas within a country
    #[fhir_serde(rename = "jurisdictionalAuthorization")]
    pub jurisdictional_authorization: Option<
        Vec<MedicinalProductAuthorizationJurisdictionalAuthorization>,
    >,
    /// Marketing Authorization Holder
    pub holder: Option<Reference>,
    /// Medicines Regulatory Agency
    pub regulator: Option<Reference>,
    /// The regulatory procedure for granting or amending a marketing authorization
    pub procedure: Option<MedicinalProductAuthorizationProcedure>,
}

/// Authorization in areas within a country
#[derive(Debug, Clone, PartialEq, Default, FhirSerde)]
#[fhir_type(name = "MedicinalProductAuthorizationJurisdictionalAuthorization", kind = "backbone_element")]
pub struct MedicinalProductAuthorizationJurisdictionalAuthorization {
    /// Unique id for inter-element referencing
    pub id: Option<std::string::String>,
    /// Additional content defined by implementations
    pub extension: Option<Vec<Extension>>,
    /// Extensions that cannot be ignored even if unrecognized
    #[fhir_serde(rename = "modifierExtension")]
    pub modifier_extension: Option<Vec<Extension>>,
    /// The assigned number for the marketing authorization
    pub identifier: Option<Vec<Identifier>>,
    /// Country of authorization
    pub country: Option<CodeableConcept>,
    /// Jurisdiction within a country
    pub jurisdiction: Option<Vec<CodeableConcept>>,
    /// The legal status of supply in a jurisdiction or region
    #[fhir_serde(rename = "legalStatusOfSupply")]
    pub legal_status_of_supply: Option<CodeableConcept>,
    /// The start and expected end date of the authorization
    #[fhir_serde(rename = "validityPeriod")]
    pub validity_period: Option<Period>,
}

/// Choice of types for the date\[x\] field in MedicinalProductAuthorizationProcedure
#[derive(Debug, Clone, PartialEq, FhirSerde)]
#[fhir_choice_element(base_name = "date")]
pub enum MedicinalProductAuthorizationProcedureDate {
    /// Variant accepting the Period type.
    #[fhir_serde(rename = "datePeriod")]
    Period(Period),
    /// Variant accepting the DateTime type.
    #[fhir_serde(rename = "dateDateTime")]
    DateTime(DateTime),
}

/// The regulatory procedure for granting or amending a marketing authorization
#[derive(Debug, Clone, PartialEq, Default, FhirSerde)]
#[fhir_type(name = "MedicinalProductAuthorizationProcedure", kind = "backbone_element")]
pub struct MedicinalProductAuthorizationProcedure {
    /// Unique id for inter-element referencing
    pub id: Option<std::string::String>,
    /// Additional content defined by implementations
    pub extension: Option<Vec<Extension>>,
    /// Extensions that cannot be ignored even if unrecognized
    #[fhir_serde(rename = "modifierExtension")]
    pub modifier_extension: Option<Vec<Extension>>,
    /// Identifier for this procedure
    pub identifier: Option<Identifier>,
    /// Type of procedure
    #[fhir_serde(rename = "type")]
    pub r#type: CodeableConcept,
    /// Date of procedure
    #[fhir_serde(flatten)]
    pub date: Option<MedicinalProductAuthorizationProcedureDate>,
    /// Applcations submitted to obtain a marketing authorization
    pub application: Option<Vec<MedicinalProductAuthorizationProcedure>>,
}
