use crate::r4::*;
use crate::FhirSerde;

/// FHIR ProdCharacteristic type
///
/// The marketing status describes the date when a medicinal product is actually
/// put on the market or the date as of which it is no longer available.
///
/// See: [ProdCharacteristic](http://hl7.org/fhir/StructureDefinition/ProdCharacteristic)
#[derive(Debug, Clone, PartialEq, Default, FhirSerde)]
#[fhir_type(name = "ProdCharacteristic", kind = "backbone_element")]
pub struct ProdCharacteristic {
    /// Unique id for inter-element referencing
    pub id: Option<std::string::String>,
    /// Additional content defined by implementations
    pub extension: Option<Vec<Extension>>,
    /// Extensions that cannot be ignored even if unrecognized
    #[fhir_serde(rename = "modifierExtension")]
    pub modifier_extension: Option<Vec<Extension>>,
    /// Where applicable, the height can be specified using a numerical value and its unit of measurement
    pub height: Option<Quantity>,
    /// Where applicable, the width can be specified using a numerical value and its unit of measurement
    pub width: Option<Quantity>,
    /// Where applicable, the depth can be specified using a numerical value and its unit of measurement
    pub depth: Option<Quantity>,
    /// Where applicable, the weight can be specified using a numerical value and its unit of measurement
    pub weight: Option<Quantity>,
    /// Where applicable, the nominal volume can be specified using a numerical value and its unit of measurement
    #[fhir_serde(rename = "nominalVolume")]
    pub nominal_volume: Option<Quantity>,
    /// Where applicable, the external diameter can be specified using a numerical value and its unit of measurement
    #[fhir_serde(rename = "externalDiameter")]
    pub external_diameter: Option<Quantity>,
    /// Where applicable, the shape can be specified An appropriate controlled vocabulary shall be used The term and the term identifier shall be used
    pub shape: Option<String>,
    /// Where applicable, the color can be specified An appropriate controlled vocabulary shall be used The term and the term identifier shall be used
    pub color: Option<Vec<String>>,
    /// Where applicable, the imprint can be specified as text
    pub imprint: Option<Vec<String>>,
    /// Where applicable, the image can be provided The format of the image attachment shall be specified by regional implementations
    pub image: Option<Vec<Attachment>>,
    /// Where applicable, the scoring can be specified An appropriate controlled vocabulary shall be used The term and the term identifier shall be used
    pub scoring: Option<CodeableConcept>,
}
