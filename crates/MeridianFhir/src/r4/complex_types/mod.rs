pub mod address;
pub use address::*;

pub mod age;
pub use age::*;

pub mod annotation;
pub use annotation::*;

pub mod attachment;
pub use attachment::*;

pub mod codeable_concept;
pub use codeable_concept::*;

pub mod coding;
pub use coding::*;

pub mod contact_detail;
pub use contact_detail::*;

pub mod contact_point;
pub use contact_point::*;

pub mod contributor;
pub use contributor::*;

pub mod count;
pub use count::*;

pub mod data_requirement;
pub use data_requirement::*;

pub mod distance;
pub use distance::*;

pub mod dosage;
pub use dosage::*;

pub mod duration;
pub use duration::*;

pub mod element_definition;
pub use element_definition::*;

pub mod expression;
pub use expression::*;

pub mod extension;
pub use extension::*;

pub mod human_name;
pub use human_name::*;

pub mod identifier;
pub use identifier::*;

pub mod marketing_status;
pub use marketing_status::*;

pub mod meta;
pub use meta::*;

pub mod money;
pub use money::*;

pub mod narrative;
pub use narrative::*;

pub mod parameter_definition;
pub use parameter_definition::*;

pub mod period;
pub use period::*;

pub mod population;
pub use population::*;

pub mod prod_characteristic;
pub use prod_characteristic::*;

pub mod product_shelf_life;
pub use product_shelf_life::*;

pub mod quantity;
pub use quantity::*;

pub mod range;
pub use range::*;

pub mod ratio;
pub use ratio::*;

pub mod reference;
pub use reference::*;

pub mod related_artifact;
pub use related_artifact::*;

pub mod sampled_data;
pub use sampled_data::*;

pub mod signature;
pub use signature::*;

pub mod substance_amount;
pub use substance_amount::*;

pub mod timing;
pub use timing::*;

pub mod trigger_definition;
pub use trigger_definition::*;

pub mod usage_context;
pub use usage_context::*;

/// The complex data types compiled into this release.
pub struct ComplexTypes;

impl crate::FhirComplexTypeProvider for ComplexTypes {
    fn get_complex_type_names() -> Vec<&'static str> {
        vec![
            "Address",
            "Age",
            "Annotation",
            "Attachment",
            "CodeableConcept",
            "Coding",
            "ContactDetail",
            "ContactPoint",
            "Contributor",
            "Count",
            "DataRequirement",
            "Distance",
            "Dosage",
            "Duration",
            "ElementDefinition",
            "Expression",
            "Extension",
            "HumanName",
            "Identifier",
            "MarketingStatus",
            "Meta",
            "Money",
            "Narrative",
            "ParameterDefinition",
            "Period",
            "Population",
            "ProdCharacteristic",
            "ProductShelfLife",
            "Quantity",
            "Range",
            "Ratio",
            "Reference",
            "RelatedArtifact",
            "SampledData",
            "Signature",
            "SubstanceAmount",
            "Timing",
            "TriggerDefinition",
            "UsageContext",
        ]
    }
}
