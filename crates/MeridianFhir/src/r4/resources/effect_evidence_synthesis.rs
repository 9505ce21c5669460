use crate::r4::*;
use crate::FhirSerde;

/// FHIR EffectEvidenceSynthesis type
///
/// The EffectEvidenceSynthesis resource describes the difference in an outcome
/// between exposures states in a population where the effect estimate is derived
/// from a combination of research studies.
///
/// See: [EffectEvidenceSynthesis](http://hl7.org/fhir/StructureDefinition/EffectEvidenceSynthesis)
#[derive(Debug, Clone, PartialEq, Default, FhirSerde)]
#[fhir_type(name = "EffectEvidenceSynthesis", kind = "domain_resource")]
pub struct EffectEvidenceSynthesis {
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
    /// Canonical identifier for this effect evidence synthesis, represented as a URI (globally unique)
    pub url: Option<Uri>,
    /// Additional identifier for the effect evidence synthesis
    pub identifier: Option<Vec<Identifier>>,
    /// Business version of the effect evidence synthesis
    pub version: Option<String>,
    /// Name for this effect evidence synthesis (computer friendly)
    pub name: Option<String>,
    /// Name for this effect evidence synthesis (human friendly)
    pub title: Option<String>,
    /// The status of this effect evidence synthesis. Enables tracking the life-cycle of the content.
    pub status: Code,
    /// Date last changed
    pub date: Option<DateTime>,
    /// Name of the publisher (organization or individual)
    pub publisher: Option<String>,
    /// Contact details for the publisher
    pub contact: Option<Vec<ContactDetail>>,
    /// Natural language description of the effect evidence synthesis
    pub description: Option<Markdown>,
    /// Used for footnotes or explanatory notes
    pub note: Option<Vec<Annotation>>,
    /// The context that the content is intended to support
    #[fhir_serde(rename = "useContext")]
    pub use_context: Option<Vec<UsageContext>>,
    /// Intended jurisdiction for effect evidence synthesis (if applicable)
    pub jurisdiction: Option<Vec<CodeableConcept>>,
    /// Use and/or publishing restrictions
    pub copyright: Option<Markdown>,
    /// When the effect evidence synthesis was approved by publisher
    #[fhir_serde(rename = "approvalDate")]
    pub approval_date: Option<Date>,
    /// When the effect evidence synthesis was last reviewed
    #[fhir_serde(rename = "lastReviewDate")]
    pub last_review_date: Option<Date>,
    /// When the effect evidence synthesis is expected to be used
    #[fhir_serde(rename = "effectivePeriod")]
    pub effective_period: Option<Period>,
    /// The category of the EffectEvidenceSynthesis, such as Education, Treatment, Assessment, etc.
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
    /// Type of synthesis
    #[fhir_serde(rename = "synthesisType")]
    pub synthesis_type: Option<CodeableConcept>,
    /// Type of study
    #[fhir_serde(rename = "studyType")]
    pub study_type: Option<CodeableConcept>,
    /// What population?
    pub population: Reference,
    /// What exposure?
    pub exposure: Reference,
    /// What comparison exposure?
    #[fhir_serde(rename = "exposureAlternative")]
    pub exposure_alternative: Reference,
    /// What outcome?
    pub outcome: Reference,
    /// What sample size was involved?
    #[fhir_serde(rename = "sampleSize")]
    pub sample_size: Option<EffectEvidenceSynthesisSampleSize>,
    /// What was the result per exposure?
    #[fhir_serde(rename = "resultsByExposure")]
    pub results_by_exposure: Option<Vec<EffectEvidenceSynthesisResultsByExposure>>,
    /// What was the estimated effect
    #[fhir_serde(rename = "effectEstimate")]
    pub effect_estimate: Option<Vec<EffectEvidenceSynthesisEffectEstimate>>,
    /// How certain is the effect
    pub certainty: Option<Vec<EffectEvidenceSynthesisCertainty>>,
}

/// How certain is the effect
#[derive(Debug, Clone, PartialEq, Default, FhirSerde)]
#[fhir_type(name = "EffectEvidenceSynthesisCertainty", kind = "backbone_element")]
pub struct EffectEvidenceSynthesisCertainty {
    /// Unique id for inter-element referencing
    pub id: Option<std::string::String>,
    /// Additional content defined by implementations
    pub extension: Option<Vec<Extension>>,
    /// Extensions that cannot be ignored even if unrecognized
    #[fhir_serde(rename = "modifierExtension")]
    pub modifier_extension: Option<Vec<Extension>>,
    /// Certainty rating
    pub rating: Option<Vec<CodeableConcept>>,
    /// Used for footnotes or explanatory notes
    pub note: Option<Vec<Annotation>>,
    /// A component that contributes to the overall certainty
    #[fhir_serde(rename = "certaintySubcomponent")]
    pub certainty_subcomponent: Option<Vec<EffectEvidenceSynthesisCertaintyCertaintySubcomponent>>,
}

/// A component that contributes to the overall certainty
#[derive(Debug, Clone, PartialEq, Default, FhirSerde)]
#[fhir_type(name = "EffectEvidenceSynthesisCertaintyCertaintySubcomponent", kind = "backbone_element")]
pub struct EffectEvidenceSynthesisCertaintyCertaintySubcomponent {
    /// Unique id for inter-element referencing
    pub id: Option<std::string::String>,
    /// Additional content defined by implementations
    pub extension: Option<Vec<Extension>>,
    /// Extensions that cannot be ignored even if unrecognized
    #[fhir_serde(rename = "modifierExtension")]
    pub modifier_extension: Option<Vec<Extension>>,
    /// Type of subcomponent of certainty rating
    #[fhir_serde(rename = "type")]
    pub r#type: Option<CodeableConcept>,
    /// Subcomponent certainty rating
    pub rating: Option<Vec<CodeableConcept>>,
    /// Used for footnotes or explanatory notes
    pub note: Option<Vec<Annotation>>,
}

/// What was the estimated effect
#[derive(Debug, Clone, PartialEq, Default, FhirSerde)]
#[fhir_type(name = "EffectEvidenceSynthesisEffectEstimate", kind = "backbone_element")]
pub struct EffectEvidenceSynthesisEffectEstimate {
    /// Unique id for inter-element referencing
    pub id: Option<std::string::String>,
    /// Additional content defined by implementations
    pub extension: Option<Vec<Extension>>,
    /// Extensions that cannot be ignored even if unrecognized
    #[fhir_serde(rename = "modifierExtension")]
    pub modifier_extension: Option<Vec<Extension>>,
    /// Description of effect estimate
    pub description: Option<String>,
    /// Type of efffect estimate
    #[fhir_serde(rename = "type")]
    pub r#type: Option<CodeableConcept>,
    /// Variant exposure states
    #[fhir_serde(rename = "variantState")]
    pub variant_state: Option<CodeableConcept>,
    /// Point estimate
    pub value: Option<Decimal>,
    /// What unit is the outcome described in?
    #[fhir_serde(rename = "unitOfMeasure")]
    pub unit_of_measure: Option<CodeableConcept>,
    /// How precise the estimate is
    #[fhir_serde(rename = "precisionEstimate")]
    pub precision_estimate: Option<Vec<EffectEvidenceSynthesisEffectEstimatePrecisionEstimate>>,
}

/// How precise the estimate is
#[derive(Debug, Clone, PartialEq, Default, FhirSerde)]
#[fhir_type(name = "EffectEvidenceSynthesisEffectEstimatePrecisionEstimate", kind = "backbone_element")]
pub struct EffectEvidenceSynthesisEffectEstimatePrecisionEstimate {
    /// Unique id for inter-element referencing
    pub id: Option<std::string::String>,
    /// Additional content defined by implementations
    pub extension: Option<Vec<Extension>>,
    /// Extensions that cannot be ignored even if unrecognized
    #[fhir_serde(rename = "modifierExtension")]
    pub modifier_extension: Option<Vec<Extension>>,
    /// Type of precision estimate
    #[fhir_serde(rename = "type")]
    pub r#type: Option<CodeableConcept>,
    /// Level of confidence interval
    pub level: Option<Decimal>,
    /// Lower bound
    pub from: Option<Decimal>,
    /// Upper bound
    pub to: Option<Decimal>,
}

/// What was the result per exposure?
#[derive(Debug, Clone, PartialEq, Default, FhirSerde)]
#[fhir_type(name = "EffectEvidenceSynthesisResultsByExposure", kind = "backbone_element")]
pub struct EffectEvidenceSynthesisResultsByExposure {
    /// Unique id for inter-element referencing
    pub id: Option<std::string::String>,
    /// Additional content defined by implementations
    pub extension: Option<Vec<Extension>>,
    /// Extensions that cannot be ignored even if unrecognized
    #[fhir_serde(rename = "modifierExtension")]
    pub modifier_extension: Option<Vec<Extension>>,
    /// Description of results by exposure
    pub description: Option<String>,
    /// Whether these results are for the exposure state or alternative exposure state
    #[fhir_serde(rename = "exposureState")]
    pub exposure_state: Option<Code>,
    /// Variant exposure states
    #[fhir_serde(rename = "variantState")]
    pub variant_state: Option<CodeableConcept>,
    /// Risk evidence synthesis
    #[fhir_serde(rename = "riskEvidenceSynthesis")]
    pub risk_evidence_synthesis: Reference,
}

/// What sample size was involved?
#[derive(Debug, Clone, PartialEq, Default, FhirSerde)]
#[fhir_type(name = "EffectEvidenceSynthesisSampleSize", kind = "backbone_element")]
pub struct EffectEvidenceSynthesisSampleSize {
    /// Unique id for inter-element referencing
    pub id: Option<std::string::String>,
    /// Additional content defined by implementations
    pub extension: Option<Vec<Extension>>,
    /// Extensions that cannot be ignored even if unrecognized
    #[fhir_serde(rename = "modifierExtension")]
    pub modifier_extension: Option<Vec<Extension>>,
    /// Description of sample size
    pub description: Option<String>,
    /// How many studies?
    #[fhir_serde(rename = "numberOfStudies")]
    pub number_of_studies: Option<Integer>,
    /// How many participants?
    #[fhir_serde(rename = "numberOfParticipants")]
    pub number_of_participants: Option<Integer>,
}
