use crate::r4::*;
use crate::FhirSerde;

/// FHIR Composition type
///
/// A set of healthcare-related information that is assembled together into a
/// single logical package that provides a single coherent statement of meaning,
/// establishes its own context and that has clinical attestation with regard to
/// who is making the statement. A Composition defines the structure and
/// narrative content necessary for a document. However, a Composition alone does
/// not constitute a document. Rather, the Composition must be the first entry in
/// a Bundle where Bundle.type=document, and any other resources referenced from
/// Composition must be included as subsequent entries in the Bundle (for example
/// Patient, Practitioner, Encounter, etc.).
///
/// See: [Composition](http://hl7.org/fhir/StructureDefinition/Composition)
#[derive(Debug, Clone, PartialEq, Default, FhirSerde)]
#[fhir_type(name = "Composition", kind = "domain_resource")]
pub struct Composition {
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
    /// Version-independent identifier for the Composition
    pub identifier: Option<Identifier>,
    /// The workflow/clinical status of this composition. The status is a marker for the clinical standing of the document.
    pub status: Code,
    /// Kind of composition (LOINC if possible)
    #[fhir_serde(rename = "type")]
    pub r#type: CodeableConcept,
    /// Categorization of Composition
    pub category: Option<Vec<CodeableConcept>>,
    /// Who and/or what the composition is about
    pub subject: Option<Reference>,
    /// Context of the Composition
    pub encounter: Option<Reference>,
    /// Composition editing time
    pub date: DateTime,
    /// Who and/or what authored the composition
    pub author: Vec<Reference>,
    /// Human Readable name/title
    pub title: String,
    /// As defined by affinity domain
    pub confidentiality: Option<String>,
    /// Attests to accuracy of composition
    pub attester: Option<Vec<CompositionAttester>>,
    /// Organization which maintains the composition
    pub custodian: Option<Reference>,
    /// Relationships to other compositions/documents
    #[fhir_serde(rename = "relatesTo")]
    pub relates_to: Option<Vec<CompositionRelatesTo>>,
    /// The clinical service(s) being documented
    pub event: Option<Vec<CompositionEvent>>,
    /// Composition is broken into sections
    pub section: Option<Vec<CompositionSection>>,
}

/// Attests to accuracy of composition
#[derive(Debug, Clone, PartialEq, Default, FhirSerde)]
#[fhir_type(name = "CompositionAttester", kind = "backbone_element")]
pub struct CompositionAttester {
    /// Unique id for inter-element referencing
    pub id: Option<std::string::String>,
    /// Additional content defined by implementations
    pub extension: Option<Vec<Extension>>,
    /// Extensions that cannot be ignored even if unrecognized
    #[fhir_serde(rename = "modifierExtension")]
    pub modifier_extension: Option<Vec<Extension>>,
    /// The type of attestation the authenticator offers
    pub mode: Code,
    /// When the composition was attested
    pub time: Option<DateTime>,
    /// Who attested the composition
    pub party: Option<Reference>,
}

/// The clinical service(s) being documented
#[derive(Debug, Clone, PartialEq, Default, FhirSerde)]
#[fhir_type(name = "CompositionEvent", kind = "backbone_element")]
pub struct CompositionEvent {
    /// Unique id for inter-element referencing
    pub id: Option<std::string::String>,
    /// Additional content defined by implementations
    pub extension: Option<Vec<Extension>>,
    /// Extensions that cannot be ignored even if unrecognized
    #[fhir_serde(rename = "modifierExtension")]
    pub modifier_extension: Option<Vec<Extension>>,
    /// Code(s) that apply to the event being documented
    pub code: Option<Vec<CodeableConcept>>,
    /// The period covered by the documentation
    pub period: Option<Period>,
    /// The event(s) being documented
    pub detail: Option<Vec<Reference>>,
}

/// Choice of types for the target\[x\] field in CompositionRelatesTo
#[derive(Debug, Clone, PartialEq, FhirSerde)]
#[fhir_choice_element(base_name = "target")]
pub enum CompositionRelatesToTarget {
    /// Variant accepting the Identifier type.
    #[fhir_serde(rename = "targetIdentifier")]
    Identifier(Identifier),
    /// Variant accepting the Reference type.
    #[fhir_serde(rename = "targetReference")]
    Reference(Reference),
}

/// Relationships to other compositions/documents
#[derive(Debug, Clone, PartialEq, FhirSerde)]
#[fhir_type(name = "CompositionRelatesTo", kind = "backbone_element")]
pub struct CompositionRelatesTo {
    /// Unique id for inter-element referencing
    pub id: Option<std::string::String>,
    /// Additional content defined by implementations
    pub extension: Option<Vec<Extension>>,
    /// Extensions that cannot be ignored even if unrecognized
    #[fhir_serde(rename = "modifierExtension")]
    pub modifier_extension: Option<Vec<Extension>>,
    /// The type of relationship that this composition has with anther composition or document
    pub code: Code,
    /// Target of the relationship
    #[fhir_serde(flatten)]
    pub target: CompositionRelatesToTarget,
}

/// Composition is broken into sections
#[derive(Debug, Clone, PartialEq, Default, FhirSerde)]
#[fhir_type(name = "CompositionSection", kind = "backbone_element")]
pub struct CompositionSection {
    /// Unique id for inter-element referencing
    pub id: Option<std::string::String>,
    /// Additional content defined by implementations
    pub extension: Option<Vec<Extension>>,
    /// Extensions that cannot be ignored even if unrecognized
    #[fhir_serde(rename = "modifierExtension")]
    pub modifier_extension: Option<Vec<Extension>>,
    /// Label for section (e.g. for ToC).
    pub title: Option<String>,
    /// Classification of section (recommended)
    pub code: Option<CodeableConcept>,
    /// Who and/or what authored the section
    pub author: Option<Vec<Reference>>,
    /// Who/what the section is about, when it is not about the subject of composition
    pub focus: Option<Reference>,
    /// Text summary of the section, for human interpretation
    pub text: Option<Narrative>,
    /// How the entry list was prepared - whether it is a working list that is suitable for being maintained on an ongoing basis, or if it represents a snapshot of a list of items from another source, or whether it is a prepared list where items may be marked as added, modified or deleted
    pub mode: Option<Code>,
    /// Order of section entries
    #[fhir_serde(rename = "orderedBy")]
    pub ordered_by: Option<CodeableConcept>,
    /// A reference to data that supports this section
    pub entry: Option<Vec<Reference>>,
    /// Why the section is empty
    #[fhir_serde(rename = "emptyReason")]
    pub empty_reason: Option<CodeableConcept>,
    /// Nested Section
    pub section: Option<Vec<CompositionSection>>,
}
