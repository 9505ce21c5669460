use crate::r4::*;
use crate::FhirSerde;

/// Choice of types for the subject\[x\] field in DataRequirement
#[derive(Debug, Clone, PartialEq, FhirSerde)]
#[fhir_choice_element(base_name = "subject")]
pub enum DataRequirementSubject {
    /// Variant accepting the CodeableConcept type.
    #[fhir_serde(rename = "subjectCodeableConcept")]
    CodeableConcept(CodeableConcept),
    /// Variant accepting the Reference type.
    #[fhir_serde(rename = "subjectReference")]
    Reference(Reference),
}

/// FHIR DataRequirement type
///
/// Describes a required data item for evaluation in terms of the type of data,
/// and optional code or date-based filters of the data.
///
/// See: [DataRequirement](http://hl7.org/fhir/StructureDefinition/DataRequirement)
#[derive(Debug, Clone, PartialEq, Default, FhirSerde)]
#[fhir_type(name = "DataRequirement", kind = "element")]
pub struct DataRequirement {
    /// Unique id for inter-element referencing
    pub id: Option<std::string::String>,
    /// Additional content defined by implementations
    pub extension: Option<Vec<Extension>>,
    /// The type of the required data
    #[fhir_serde(rename = "type")]
    pub r#type: String,
    /// The profile of the required data
    pub profile: Option<Vec<Canonical>>,
    /// E.g. Patient, Practitioner, RelatedPerson, Organization, Location, Device.
    #[fhir_serde(flatten)]
    pub subject: Option<DataRequirementSubject>,
    /// Indicates specific structure elements that are referenced by the knowledge module
    #[fhir_serde(rename = "mustSupport")]
    pub must_support: Option<Vec<String>>,
    /// What codes are expected
    #[fhir_serde(rename = "codeFilter")]
    pub code_filter: Option<Vec<DataRequirementCodeFilter>>,
    /// What dates/date ranges are expected
    #[fhir_serde(rename = "dateFilter")]
    pub date_filter: Option<Vec<DataRequirementDateFilter>>,
    /// Number of results
    pub limit: Option<PositiveInt>,
    /// Order of the results
    pub sort: Option<Vec<DataRequirementSort>>,
}

/// What codes are expected
#[derive(Debug, Clone, PartialEq, Default, FhirSerde)]
#[fhir_type(name = "DataRequirementCodeFilter", kind = "element")]
pub struct DataRequirementCodeFilter {
    /// Unique id for inter-element referencing
    pub id: Option<std::string::String>,
    /// Additional content defined by implementations
    pub extension: Option<Vec<Extension>>,
    /// A code-valued attribute to filter on
    pub path: Option<String>,
    /// A coded (token) parameter to search on
    #[fhir_serde(rename = "searchParam")]
    pub search_param: Option<String>,
    /// Valueset for the filter
    #[fhir_serde(rename = "valueSet")]
    pub value_set: Option<Canonical>,
    /// What code is expected
    pub code: Option<Vec<Coding>>,
}

/// Choice of types for the value\[x\] field in DataRequirementDateFilter
#[derive(Debug, Clone, PartialEq, FhirSerde)]
#[fhir_choice_element(base_name = "value")]
pub enum DataRequirementDateFilterValue {
    /// Variant accepting the DateTime type.
    #[fhir_serde(rename = "valueDateTime")]
    DateTime(DateTime),
    /// Variant accepting the Period type.
    #[fhir_serde(rename = "valuePeriod")]
    Period(Period),
    /// Variant accepting the Duration type.
    #[fhir_serde(rename = "valueDuration")]
    Duration(Duration),
}

/// What dates/date ranges are expected
#[derive(Debug, Clone, PartialEq, Default, FhirSerde)]
#[fhir_type(name = "DataRequirementDateFilter", kind = "element")]
pub struct DataRequirementDateFilter {
    /// Unique id for inter-element referencing
    pub id: Option<std::string::String>,
    /// Additional content defined by implementations
    pub extension: Option<Vec<Extension>>,
    /// A date-valued attribute to filter on
    pub path: Option<String>,
    /// A date valued parameter to search on
    #[fhir_serde(rename = "searchParam")]
    pub search_param: Option<String>,
    /// The value of the filter, as a Period, DateTime, or Duration value
    #[fhir_serde(flatten)]
    pub value: Option<DataRequirementDateFilterValue>,
}

/// Order of the results
#[derive(Debug, Clone, PartialEq, Default, FhirSerde)]
#[fhir_type(name = "DataRequirementSort", kind = "element")]
pub struct DataRequirementSort {
    /// Unique id for inter-element referencing
    pub id: Option<std::string::String>,
    /// Additional content defined by implementations
    pub extension: Option<Vec<Extension>>,
    /// The name of the attribute to perform the sort
    pub path: String,
    /// The direction of the sort, ascending or descending
    pub direction: Code,
}
