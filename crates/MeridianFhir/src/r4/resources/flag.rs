use crate::r4::*;
use crate::FhirSerde;

/// FHIR Flag type
///
/// Prospective warnings of potential issues when providing care to the patient.
///
/// See: [Flag](http://hl7.org/fhir/StructureDefinition/Flag)
#[derive(Debug, Clone, PartialEq, Default, FhirSerde)]
#[fhir_type(name = "Flag", kind = "domain_resource")]
pub struct Flag {
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
    /// Business identifier
    pub identifier: Option<Vec<Identifier>>,
    /// active | inactive | entered-in-error
    pub status: Code,
    /// Clinical, administrative, etc.
    pub category: Option<Vec<CodeableConcept>>,
    /// Coded or textual message to display to user
    pub code: CodeableConcept,
    /// Who/What is flag about?
    pub subject: Reference,
    /// Time period when flag is active
    pub period: Option<Period>,
    /// Alert relevant during encounter
    pub encounter: Option<Reference>,
    /// Flag creator
    pub author: Option<Reference>,
}
