use crate::r4::*;
use crate::FhirSerde;

/// FHIR DocumentReference type
///
/// A reference to a document of any kind for any purpose. Provides metadata
/// about the document so that the document can be discovered and managed. The
/// scope of a document is any seralized object with a mime-type, so includes
/// formal patient centric documents (CDA), cliical notes, scanned paper, and
/// non-patient specific documents like policy text.
///
/// See: [DocumentReference](http://hl7.org/fhir/StructureDefinition/DocumentReference)
#[derive(Debug, Clone, PartialEq, Default, FhirSerde)]
#[fhir_type(name = "DocumentReference", kind = "domain_resource")]
pub struct DocumentReference {
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
    /// Master Version Specific Identifier
    #[fhir_serde(rename = "masterIdentifier")]
    pub master_identifier: Option<Identifier>,
    /// Other identifiers for the document
    pub identifier: Option<Vec<Identifier>>,
    /// The status of this document reference
    pub status: Code,
    /// The status of the underlying document
    #[fhir_serde(rename = "docStatus")]
    pub doc_status: Option<Code>,
    /// Kind of document (LOINC if possible)
    #[fhir_serde(rename = "type")]
    pub r#type: Option<CodeableConcept>,
    /// Categorization of document
    pub category: Option<Vec<CodeableConcept>>,
    /// Who/what is the subject of the document
    pub subject: Option<Reference>,
    /// When this document reference was created
    pub date: Option<Instant>,
    /// Who and/or what authored the document
    pub author: Option<Vec<Reference>>,
    /// Who/what authenticated the document
    pub authenticator: Option<Reference>,
    /// Organization which maintains the document
    pub custodian: Option<Reference>,
    /// Relationships to other documents
    #[fhir_serde(rename = "relatesTo")]
    pub relates_to: Option<Vec<DocumentReferenceRelatesTo>>,
    /// Human-readable description
    pub description: Option<Markdown>,
    /// Document security-tags
    #[fhir_serde(rename = "securityLabel")]
    pub security_label: Option<Vec<CodeableConcept>>,
    /// Document referenced
    pub content: Vec<DocumentReferenceContent>,
    /// Clinical context of document
    pub context: Option<DocumentReferenceContext>,
}

/// Document referenced
#[derive(Debug, Clone, PartialEq, Default, FhirSerde)]
#[fhir_type(name = "DocumentReferenceContent", kind = "backbone_element")]
pub struct DocumentReferenceContent {
    /// Unique id for inter-element referencing
    pub id: Option<std::string::String>,
    /// Additional content defined by implementations
    pub extension: Option<Vec<Extension>>,
    /// Extensions that cannot be ignored even if unrecognized
    #[fhir_serde(rename = "modifierExtension")]
    pub modifier_extension: Option<Vec<Extension>>,
    /// Where to access the document
    pub attachment: Attachment,
    /// Format/content rules for the document
    pub format: Option<Coding>,
}

/// Clinical context of document
#[derive(Debug, Clone, PartialEq, Default, FhirSerde)]
#[fhir_type(name = "DocumentReferenceContext", kind = "backbone_element")]
pub struct DocumentReferenceContext {
    /// Unique id for inter-element referencing
    pub id: Option<std::string::String>,
    /// Additional content defined by implementations
    pub extension: Option<Vec<Extension>>,
    /// Extensions that cannot be ignored even if unrecognized
    #[fhir_serde(rename = "modifierExtension")]
    pub modifier_extension: Option<Vec<Extension>>,
    /// Context of the document content
    pub encounter: Option<Vec<Reference>>,
    /// Main clinical acts documented
    pub event: Option<Vec<CodeableConcept>>,
    /// Time of service that is being documented
    pub period: Option<Period>,
    /// Kind of facility where patient was seen
    #[fhir_serde(rename = "facilityType")]
    pub facility_type: Option<CodeableConcept>,
    /// Additional details about where the content was created (e.g. clinical specialty).
    #[fhir_serde(rename = "practiceSetting")]
    pub practice_setting: Option<CodeableConcept>,
    /// Patient demographics from source
    #[fhir_serde(rename = "sourcePatientInfo")]
    pub source_patient_info: Option<Reference>,
    /// Related identifiers or resources
    pub related: Option<Vec<Reference>>,
}

/// Relationships to other documents
#[derive(Debug, Clone, PartialEq, Default, FhirSerde)]
#[fhir_type(name = "DocumentReferenceRelatesTo", kind = "backbone_element")]
pub struct DocumentReferenceRelatesTo {
    /// Unique id for inter-element referencing
    pub id: Option<std::string::String>,
    /// Additional content defined by implementations
    pub extension: Option<Vec<Extension>>,
    /// Extensions that cannot be ignored even if unrecognized
    #[fhir_serde(rename = "modifierExtension")]
    pub modifier_extension: Option<Vec<Extension>>,
    /// The type of relationship that this document has with anther document
    pub code: Code,
    /// Target of the relationship
    pub target: Reference,
}
