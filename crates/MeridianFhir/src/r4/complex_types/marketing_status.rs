use crate::r4::*;
use crate::FhirSerde;

/// FHIR MarketingStatus type
///
/// The marketing status describes the date when a medicinal product is actually
/// put on the market or the date as of which it is no longer available.
///
/// See: [MarketingStatus](http://hl7.org/fhir/StructureDefinition/MarketingStatus)
#[derive(Debug, Clone, PartialEq, Default, FhirSerde)]
#[fhir_type(name = "MarketingStatus", kind = "backbone_element")]
pub struct MarketingStatus {
    /// Unique id for inter-element referencing
    pub id: Option<std::string::String>,
    /// Additional content defined by implementations
    pub extension: Option<Vec<Extension>>,
    /// Extensions that cannot be ignored even if unrecognized
    #[fhir_serde(rename = "modifierExtension")]
    pub modifier_extension: Option<Vec<Extension>>,
    /// The country in which the marketing authorisation has been granted
    pub country: CodeableConcept,
    /// Where a Medicines Regulatory Agency has granted a marketing authorisation for which specific provisions within a jurisdiction apply
    pub jurisdiction: Option<CodeableConcept>,
    /// This attribute provides information on the status of the marketing of the medicinal product
    pub status: CodeableConcept,
    /// The date when the Medicinal Product is placed on the market by the Marketing Authorisation Holder
    #[fhir_serde(rename = "dateRange")]
    pub date_range: Period,
    /// The date when the Medicinal Product is placed on the market after a suspension
    #[fhir_serde(rename = "restoreDate")]
    pub restore_date: Option<DateTime>,
}
