use crate::r4::*;
use crate::FhirSerde;

/// FHIR ProductShelfLife type
///
/// The shelf-life and storage information for a medicinal product item or
/// container can be described using this class.
///
/// See: [ProductShelfLife](http://hl7.org/fhir/StructureDefinition/ProductShelfLife)
#[derive(Debug, Clone, PartialEq, Default, FhirSerde)]
#[fhir_type(name = "ProductShelfLife", kind = "backbone_element")]
pub struct ProductShelfLife {
    /// Unique id for inter-element referencing
    pub id: Option<std::string::String>,
    /// Additional content defined by implementations
    pub extension: Option<Vec<Extension>>,
    /// Extensions that cannot be ignored even if unrecognized
    #[fhir_serde(rename = "modifierExtension")]
    pub modifier_extension: Option<Vec<Extension>>,
    /// Unique identifier for the packaged Medicinal Product
    pub identifier: Option<Identifier>,
    /// This describes the shelf life, taking into account various scenarios such as shelf life of the packaged Medicinal Product itself, shelf life after transformation where necessary and shelf life after the first opening of a bottle, etc. The shelf life type shall be specified using an appropriate controlled vocabulary The controlled term and the controlled term identifier shall be specified
    #[fhir_serde(rename = "type")]
    pub r#type: CodeableConcept,
    /// The shelf life time period can be specified using a numerical value for the period of time and its unit of time measurement The unit of measurement shall be specified in accordance with ISO 11240 and the resulting terminology The symbol and the symbol identifier shall be used
    pub period: Quantity,
    /// Special precautions for storage, if any, can be specified using an appropriate controlled vocabulary The controlled term and the controlled term identifier shall be specified
    #[fhir_serde(rename = "specialPrecautionsForStorage")]
    pub special_precautions_for_storage: Option<Vec<CodeableConcept>>,
}
