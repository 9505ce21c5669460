use crate::r4::*;
use crate::FhirSerde;

/// FHIR VisionPrescription type
///
/// An authorization for the provision of glasses and/or contact lenses to a
/// patient.
///
/// See: [VisionPrescription](http://hl7.org/fhir/StructureDefinition/VisionPrescription)
#[derive(Debug, Clone, PartialEq, Default, FhirSerde)]
#[fhir_type(name = "VisionPrescription", kind = "domain_resource")]
pub struct VisionPrescription {
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
    /// Business Identifier for vision prescription
    pub identifier: Option<Vec<Identifier>>,
    /// active | cancelled | draft | entered-in-error
    pub status: Code,
    /// Response creation date
    pub created: DateTime,
    /// Who prescription is for
    pub patient: Reference,
    /// Created during encounter / admission / stay
    pub encounter: Option<Reference>,
    /// When prescription was authorized
    #[fhir_serde(rename = "dateWritten")]
    pub date_written: DateTime,
    /// Who authorized the vision prescription
    pub prescriber: Reference,
    /// Vision lens authorization
    #[fhir_serde(rename = "lensSpecification")]
    pub lens_specification: Vec<VisionPrescriptionLensSpecification>,
}

/// Vision lens authorization
#[derive(Debug, Clone, PartialEq, Default, FhirSerde)]
#[fhir_type(name = "VisionPrescriptionLensSpecification", kind = "backbone_element")]
pub struct VisionPrescriptionLensSpecification {
    /// Unique id for inter-element referencing
    pub id: Option<std::string::String>,
    /// Additional content defined by implementations
    pub extension: Option<Vec<Extension>>,
    /// Extensions that cannot be ignored even if unrecognized
    #[fhir_serde(rename = "modifierExtension")]
    pub modifier_extension: Option<Vec<Extension>>,
    /// Product to be supplied
    pub product: CodeableConcept,
    /// right | left
    pub eye: Code,
    /// Power of the lens
    pub sphere: Option<Decimal>,
    /// Lens power for astigmatism
    pub cylinder: Option<Decimal>,
    /// Lens meridian which contain no power for astigmatism
    pub axis: Option<Integer>,
    /// Eye alignment compensation
    pub prism: Option<Vec<VisionPrescriptionLensSpecificationPrism>>,
    /// Added power for multifocal levels
    pub add: Option<Decimal>,
    /// Contact lens power
    pub power: Option<Decimal>,
    /// Contact lens back curvature
    #[fhir_serde(rename = "backCurve")]
    pub back_curve: Option<Decimal>,
    /// Contact lens diameter
    pub diameter: Option<Decimal>,
    /// Lens wear duration
    pub duration: Option<Quantity>,
    /// Color required
    pub color: Option<String>,
    /// Brand required
    pub brand: Option<String>,
    /// Notes for coatings
    pub note: Option<Vec<Annotation>>,
}

/// Eye alignment compensation
#[derive(Debug, Clone, PartialEq, Default, FhirSerde)]
#[fhir_type(name = "VisionPrescriptionLensSpecificationPrism", kind = "backbone_element")]
pub struct VisionPrescriptionLensSpecificationPrism {
    /// Unique id for inter-element referencing
    pub id: Option<std::string::String>,
    /// Additional content defined by implementations
    pub extension: Option<Vec<Extension>>,
    /// Extensions that cannot be ignored even if unrecognized
    #[fhir_serde(rename = "modifierExtension")]
    pub modifier_extension: Option<Vec<Extension>>,
    /// Amount of adjustment
    pub amount: Decimal,
    /// up | down | in | out
    pub base: Code,
}
