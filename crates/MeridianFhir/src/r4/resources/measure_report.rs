use crate::r4::*;
use crate::FhirSerde;

/// FHIR MeasureReport type
///
/// The MeasureReport resource contains the results of the calculation of a
/// measure; and optionally a reference to the resources involved in that
/// calculation.
///
/// See: [MeasureReport](http://hl7.org/fhir/StructureDefinition/MeasureReport)
#[derive(Debug, Clone, PartialEq, Default, FhirSerde)]
#[fhir_type(name = "MeasureReport", kind = "domain_resource")]
pub struct MeasureReport {
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
    /// Additional identifier for the MeasureReport
    pub identifier: Option<Vec<Identifier>>,
    /// The MeasureReport status. No data will be available until the MeasureReport status is complete.
    pub status: Code,
    /// The type of measure report. This may be an individual report, which provides the score for the measure for an individual member of the population; a subject- listing, which returns the list of members that meet the various criteria in the measure; a summary report, which returns a population count for each of the criteria in the measure; or a data-collection, which enables the MeasureReport to be used to exchange the data-of-interest for a quality measure.
    #[fhir_serde(rename = "type")]
    pub r#type: Code,
    /// What measure was calculated
    pub measure: String,
    /// What individual(s) the report is for
    pub subject: Option<Reference>,
    /// When the report was generated
    pub date: Option<DateTime>,
    /// Who is reporting the data
    pub reporter: Option<Reference>,
    /// What period the report covers
    pub period: Period,
    /// increase | decrease
    #[fhir_serde(rename = "improvementNotation")]
    pub improvement_notation: Option<CodeableConcept>,
    /// Measure results for each group
    pub group: Option<Vec<MeasureReportGroup>>,
    /// What data was used to calculate the measure score
    #[fhir_serde(rename = "evaluatedResource")]
    pub evaluated_resource: Option<Vec<Reference>>,
}

/// Measure results for each group
#[derive(Debug, Clone, PartialEq, Default, FhirSerde)]
#[fhir_type(name = "MeasureReportGroup", kind = "backbone_element")]
pub struct MeasureReportGroup {
    /// Unique id for inter-element referencing
    pub id: Option<std::string::String>,
    /// Additional content defined by implementations
    pub extension: Option<Vec<Extension>>,
    /// Extensions that cannot be ignored even if unrecognized
    #[fhir_serde(rename = "modifierExtension")]
    pub modifier_extension: Option<Vec<Extension>>,
    /// Meaning of the group
    pub code: Option<CodeableConcept>,
    /// The populations in the group
    pub population: Option<Vec<MeasureReportGroupPopulation>>,
    /// What score this group achieved
    #[fhir_serde(rename = "measureScore")]
    pub measure_score: Option<Quantity>,
    /// Stratification results
    pub stratifier: Option<Vec<MeasureReportGroupStratifier>>,
}

/// The populations in the group
#[derive(Debug, Clone, PartialEq, Default, FhirSerde)]
#[fhir_type(name = "MeasureReportGroupPopulation", kind = "backbone_element")]
pub struct MeasureReportGroupPopulation {
    /// Unique id for inter-element referencing
    pub id: Option<std::string::String>,
    /// Additional content defined by implementations
    pub extension: Option<Vec<Extension>>,
    /// Extensions that cannot be ignored even if unrecognized
    #[fhir_serde(rename = "modifierExtension")]
    pub modifier_extension: Option<Vec<Extension>>,
    /// initial-population | numerator | numerator-exclusion | denominator | denominator-exclusion | denominator-exception | measure-population | measure- population-exclusion | measure-observation
    pub code: Option<CodeableConcept>,
    /// Size of the population
    pub count: Option<Integer>,
    /// For subject-list reports, the subject results in this population
    #[fhir_serde(rename = "subjectResults")]
    pub subject_results: Option<Reference>,
}

/// Stratification results
#[derive(Debug, Clone, PartialEq, Default, FhirSerde)]
#[fhir_type(name = "MeasureReportGroupStratifier", kind = "backbone_element")]
pub struct MeasureReportGroupStratifier {
    /// Unique id for inter-element referencing
    pub id: Option<std::string::String>,
    /// Additional content defined by implementations
    pub extension: Option<Vec<Extension>>,
    /// Extensions that cannot be ignored even if unrecognized
    #[fhir_serde(rename = "modifierExtension")]
    pub modifier_extension: Option<Vec<Extension>>,
    /// What stratifier of the group
    pub code: Option<Vec<CodeableConcept>>,
    /// Stratum results, one for each unique value, or set of values, in the stratifier, or stratifier components
    pub stratum: Option<Vec<MeasureReportGroupStratifierStratum>>,
}

/// Stratum results, one for each unique value, or set of values, in the stratifier, or stratifier components
#[derive(Debug, Clone, PartialEq, Default, FhirSerde)]
#[fhir_type(name = "MeasureReportGroupStratifierStratum", kind = "backbone_element")]
pub struct MeasureReportGroupStratifierStratum {
    /// Unique id for inter-element referencing
    pub id: Option<std::string::String>,
    /// Additional content defined by implementations
    pub extension: Option<Vec<Extension>>,
    /// Extensions that cannot be ignored even if unrecognized
    #[fhir_serde(rename = "modifierExtension")]
    pub modifier_extension: Option<Vec<Extension>>,
    /// The stratum value, e.g. male.
    pub value: Option<CodeableConcept>,
    /// Stratifier component values
    pub component: Option<Vec<MeasureReportGroupStratifierStratumComponent>>,
    /// Population results in this stratum
    pub population: Option<Vec<MeasureReportGroupStratifierStratumPopulation>>,
    /// What score this stratum achieved
    #[fhir_serde(rename = "measureScore")]
    pub measure_score: Option<Quantity>,
}

/// Stratifier component values
#[derive(Debug, Clone, PartialEq, Default, FhirSerde)]
#[fhir_type(name = "MeasureReportGroupStratifierStratumComponent", kind = "backbone_element")]
pub struct MeasureReportGroupStratifierStratumComponent {
    /// Unique id for inter-element referencing
    pub id: Option<std::string::String>,
    /// Additional content defined by implementations
    pub extension: Option<Vec<Extension>>,
    /// Extensions that cannot be ignored even if unrecognized
    #[fhir_serde(rename = "modifierExtension")]
    pub modifier_extension: Option<Vec<Extension>>,
    /// What stratifier component of the group
    pub code: CodeableConcept,
    /// The stratum component value, e.g. male.
    pub value: CodeableConcept,
}

/// Population results in this stratum
#[derive(Debug, Clone, PartialEq, Default, FhirSerde)]
#[fhir_type(name = "MeasureReportGroupStratifierStratumPopulation", kind = "backbone_element")]
pub struct MeasureReportGroupStratifierStratumPopulation {
    /// Unique id for inter-element referencing
    pub id: Option<std::string::String>,
    /// Additional content defined by implementations
    pub extension: Option<Vec<Extension>>,
    /// Extensions that cannot be ignored even if unrecognized
    #[fhir_serde(rename = "modifierExtension")]
    pub modifier_extension: Option<Vec<Extension>>,
    /// initial-population | numerator | numerator-exclusion | denominator | denominator-exclusion | denominator-exception | measure-population | measure- population-exclusion | measure-observation
    pub code: Option<CodeableConcept>,
    /// Size of the population
    pub count: Option<Integer>,
    /// For subject-list reports, the subject results in this population
    #[fhir_serde(rename = "subjectResults")]
    pub subject_results: Option<Reference>,
}
