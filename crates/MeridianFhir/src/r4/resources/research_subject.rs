use crate::r4::*;
use crate::FhirSerde;

/// FHIR ResearchSubject type
///
/// A physical entity which is the primary unit of operational and/or
/// administrative interest in a study.
///
/// See: [ResearchSubject](http://hl7.org/fhir/StructureDefinition/ResearchSubject)
#[derive(Debug, Clone, PartialEq, Default, FhirSerde)]
#[fhir_type(name = "ResearchSubject", kind = "domain_resource")]
pub struct ResearchSubject {
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
    /// Business Identifier for research subject in a study
    pub identifier: Option<Vec<Identifier>>,
    /// candidate | eligible | follow-up | ineligible | not-registered | off-study | on-study | on-study-intervention | on-study-observation | pending-on-study | potential-candidate | screening | withdrawn
    pub status: Code,
    /// Start and end of participation
    pub period: Option<Period>,
    /// Study subject is part of
    pub study: Reference,
    /// Who is part of study
    pub individual: Reference,
    /// What path should be followed
    #[fhir_serde(rename = "assignedArm")]
    pub assigned_arm: Option<String>,
    /// What path was followed
    #[fhir_serde(rename = "actualArm")]
    pub actual_arm: Option<String>,
    /// Agreement to participate in study
    pub consent: Option<Reference>,
}
