use crate::r4::*;
use crate::FhirSerde;

/// FHIR ObservationDefinition type
///
/// Set of definitional characteristics for a kind of observation or measurement
/// produced or consumed by an orderable health care service.
///
/// See: [ObservationDefinition](http://hl7.org/fhir/StructureDefinition/ObservationDefinition)
#[derive(Debug, Clone, PartialEq, Default, FhirSerde)]
#[fhir_type(name = "ObservationDefinition", kind = "domain_resource")]
pub struct ObservationDefinition {
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
    /// Category of observation
    pub category: Option<Vec<CodeableConcept>>,
    /// Type of observation (code / type)
    pub code: CodeableConcept,
    /// Business identifier for this ObservationDefinition instance
    pub identifier: Option<Vec<Identifier>>,
    /// The data types allowed for the value element of the instance observations conforming to this ObservationDefinition
    #[fhir_serde(rename = "permittedDataType")]
    pub permitted_data_type: Option<Vec<Code>>,
    /// Multiple results allowed
    #[fhir_serde(rename = "multipleResultsAllowed")]
    pub multiple_results_allowed: Option<Boolean>,
    /// Method used to produce the observation
    pub method: Option<CodeableConcept>,
    /// Preferred report name
    #[fhir_serde(rename = "preferredReportName")]
    pub preferred_report_name: Option<String>,
    /// Characteristics of quantitative results
    #[fhir_serde(rename = "quantitativeDetails")]
    pub quantitative_details: Option<ObservationDefinitionQuantitativeDetails>,
    /// Qualified range for continuous and ordinal observation results
    #[fhir_serde(rename = "qualifiedInterval")]
    pub qualified_interval: Option<Vec<ObservationDefinitionQualifiedInterval>>,
    /// Value set of valid coded values for the observations conforming to this ObservationDefinition
    #[fhir_serde(rename = "validCodedValueSet")]
    pub valid_coded_value_set: Option<Reference>,
    /// Value set of normal coded values for the observations conforming to this ObservationDefinition
    #[fhir_serde(rename = "normalCodedValueSet")]
    pub normal_coded_value_set: Option<Reference>,
    /// Value set of abnormal coded values for the observations conforming to this ObservationDefinition
    #[fhir_serde(rename = "abnormalCodedValueSet")]
    pub abnormal_coded_value_set: Option<Reference>,
    /// Value set of critical coded values for the observations conforming to this ObservationDefinition
    #[fhir_serde(rename = "criticalCodedValueSet")]
    pub critical_coded_value_set: Option<Reference>,
}

/// Qualified range for continuous and ordinal observation results
#[derive(Debug, Clone, PartialEq, Default, FhirSerde)]
#[fhir_type(name = "ObservationDefinitionQualifiedInterval", kind = "backbone_element")]
pub struct ObservationDefinitionQualifiedInterval {
    /// Unique id for inter-element referencing
    pub id: Option<std::string::String>,
    /// Additional content defined by implementations
    pub extension: Option<Vec<Extension>>,
    /// Extensions that cannot be ignored even if unrecognized
    #[fhir_serde(rename = "modifierExtension")]
    pub modifier_extension: Option<Vec<Extension>>,
    /// The category of interval of values for continuous or ordinal observations conforming to this ObservationDefinition
    pub category: Option<Code>,
    /// The interval itself, for continuous or ordinal observations
    pub range: Option<Range>,
    /// Range context qualifier
    pub context: Option<CodeableConcept>,
    /// Targetted population of the range
    #[fhir_serde(rename = "appliesTo")]
    pub applies_to: Option<Vec<CodeableConcept>>,
    /// Sex of the population the range applies to
    pub gender: Option<Code>,
    /// Applicable age range, if relevant
    pub age: Option<Range>,
    /// Applicable gestational age range, if relevant
    #[fhir_serde(rename = "gestationalAge")]
    pub gestational_age: Option<Range>,
    /// Condition associated with the reference range
    pub condition: Option<String>,
}

/// Characteristics of quantitative results
#[derive(Debug, Clone, PartialEq, Default, FhirSerde)]
#[fhir_type(name = "ObservationDefinitionQuantitativeDetails", kind = "backbone_element")]
pub struct ObservationDefinitionQuantitativeDetails {
    /// Unique id for inter-element referencing
    pub id: Option<std::string::String>,
    /// Additional content defined by implementations
    pub extension: Option<Vec<Extension>>,
    /// Extensions that cannot be ignored even if unrecognized
    #[fhir_serde(rename = "modifierExtension")]
    pub modifier_extension: Option<Vec<Extension>>,
    /// Customary unit for quantitative results
    #[fhir_serde(rename = "customaryUnit")]
    pub customary_unit: Option<CodeableConcept>,
    /// SI unit for quantitative results
    pub unit: Option<CodeableConcept>,
    /// SI to Customary unit conversion factor
    #[fhir_serde(rename = "conversionFactor")]
    pub conversion_factor: Option<Decimal>,
    /// Decimal precision of observation quantitative results
    #[fhir_serde(rename = "decimalPrecision")]
    pub decimal_precision: Option<Integer>,
}
