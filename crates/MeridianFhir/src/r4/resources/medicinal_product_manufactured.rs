use crate::r4::*;
use crate::FhirSerde;

/// FHIR MedicinalProductManufactured type
///
/// The manufactured item as contained in the packaged medicinal product.
///
/// See: [MedicinalProductManufactured](http://hl7.org/fhir/StructureDefinition/MedicinalProductManufactured)
#[derive(Debug, Clone, PartialEq, Default, FhirSerde)]
#[fhir_type(name = "MedicinalProductManufactured", kind = "domain_resource")]
pub struct MedicinalProductManufactured {
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
    /// Dose form as manufactured and before any transformation into the pharmaceutical product
    #[fhir_serde(rename = "manufacturedDoseForm")]
    pub manufactured_dose_form: CodeableConcept,
    /// The “real world” units in which the quantity of the manufactured item is described
    #[fhir_serde(rename = "unitOfPresentation")]
    pub unit_of_presentation: Option<CodeableConcept>,
    /// The quantity or "count number" of the manufactured item
    pub quantity: Quantity,
    /// Manufacturer of the item (Note that this should be named "manufacturer" but it currently causes technical issues)
    pub manufacturer: Option<Vec<Reference>>,
    /// Ingredient
    pub ingredient: Option<Vec<Reference>>,
    /// Dimensions, color etc.
    #[fhir_serde(rename = "physicalCharacteristics")]
    pub physical_characteristics: Option<ProdCharacteristic>,
    /// Other codeable characteristics
    #[fhir_serde(rename = "otherCharacteristics")]
    pub other_characteristics: Option<Vec<CodeableConcept>>,
}
