use crate::r4::*;
use crate::FhirSerde;

/// FHIR MedicinalProductPharmaceutical type
///
/// A pharmaceutical product described in terms of its composition and dose form
///
/// See: [MedicinalProductPharmaceutical](http://hl7.org/fhir/StructureDefinition/MedicinalProductPharmaceutical)
#[derive(Debug, Clone, PartialEq, Default, FhirSerde)]
#[fhir_type(name = "MedicinalProductPharmaceutical", kind = "domain_resource")]
pub struct MedicinalProductPharmaceutical {
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
    /// An identifier for the pharmaceutical medicinal product
    pub identifier: Option<Vec<Identifier>>,
    /// The administrable dose form, after necessary reconstitution
    #[fhir_serde(rename = "administrableDoseForm")]
    pub administrable_dose_form: CodeableConcept,
    /// Todo
    #[fhir_serde(rename = "unitOfPresentation")]
    pub unit_of_presentation: Option<CodeableConcept>,
    /// Ingredient
    pub ingredient: Option<Vec<Reference>>,
    /// Accompanying device
    pub device: Option<Vec<Reference>>,
    /// Characteristics e.g. a products onset of action.
    pub characteristics: Option<Vec<MedicinalProductPharmaceuticalCharacteristics>>,
    /// The path by which the pharmaceutical product is taken into or makes contact with the body
    #[fhir_serde(rename = "routeOfAdministration")]
    pub route_of_administration: Vec<MedicinalProductPharmaceuticalRouteOfAdministration>,
}

/// Characteristics e.g. a products onset of action.
#[derive(Debug, Clone, PartialEq, Default, FhirSerde)]
#[fhir_type(name = "MedicinalProductPharmaceuticalCharacteristics", kind = "backbone_element")]
pub struct MedicinalProductPharmaceuticalCharacteristics {
    /// Unique id for inter-element referencing
    pub id: Option<std::string::String>,
    /// Additional content defined by implementations
    pub extension: Option<Vec<Extension>>,
    /// Extensions that cannot be ignored even if unrecognized
    #[fhir_serde(rename = "modifierExtension")]
    pub modifier_extension: Option<Vec<Extension>>,
    /// A coded characteristic
    pub code: CodeableConcept,
    /// The status of characteristic e.g. assigned or pending.
    pub status: Option<CodeableConcept>,
}

/// The path by which the pharmaceutical product is taken into or makes contact with the body
#[derive(Debug, Clone, PartialEq, Default, FhirSerde)]
#[fhir_type(name = "MedicinalProductPharmaceuticalRouteOfAdministration", kind = "backbone_element")]
pub struct MedicinalProductPharmaceuticalRouteOfAdministration {
    /// Unique id for inter-element referencing
    pub id: Option<std::string::String>,
    /// Additional content defined by implementations
    pub extension: Option<Vec<Extension>>,
    /// Extensions that cannot be ignored even if unrecognized
    #[fhir_serde(rename = "modifierExtension")]
    pub modifier_extension: Option<Vec<Extension>>,
    /// Coded expression for the route
    pub code: CodeableConcept,
    /// The first dose (dose quantity) administered in humans can be specified, for a product under investigation, using a numerical value and its unit of measurement
    #[fhir_serde(rename = "firstDose")]
    pub first_dose: Option<Quantity>,
    /// The maximum single dose that can be administered as per the protocol of a clinical trial can be specified using a numerical value and its unit of measurement
    #[fhir_serde(rename = "maxSingleDose")]
    pub max_single_dose: Option<Quantity>,
    /// The maximum dose per day (maximum dose quantity to be administered in any one 24-h period) that can be administered as per the protocol referenced in the clinical trial authorisation
    #[fhir_serde(rename = "maxDosePerDay")]
    pub max_dose_per_day: Option<Quantity>,
    /// The maximum dose per treatment period that can be administered as per the protocol referenced in the clinical trial authorisation
    #[fhir_serde(rename = "maxDosePerTreatmentPeriod")]
    pub max_dose_per_treatment_period: Option<Ratio>,
    /// The maximum treatment period during which an Investigational Medicinal Product can be administered as per the protocol referenced in the clinical trial authorisation
    #[fhir_serde(rename = "maxTreatmentPeriod")]
    pub max_treatment_period: Option<Duration>,
    /// A species for which this route applies
    #[fhir_serde(rename = "targetSpecies")]
    pub target_species: Option<
        Vec<MedicinalProductPharmaceuticalRouteOfAdministrationTargetSpecies>,
    >,
}

/// A species for which this route applies
#[derive(Debug, Clone, PartialEq, Default, FhirSerde)]
#[fhir_type(name = "MedicinalProductPharmaceuticalRouteOfAdministrationTargetSpecies", kind = "backbone_element")]
pub struct MedicinalProductPharmaceuticalRouteOfAdministrationTargetSpecies {
    /// Unique id for inter-element referencing
    pub id: Option<std::string::String>,
    /// Additional content defined by implementations
    pub extension: Option<Vec<Extension>>,
    /// Extensions that cannot be ignored even if unrecognized
    #[fhir_serde(rename = "modifierExtension")]
    pub modifier_extension: Option<Vec<Extension>>,
    /// Coded expression for the species
    pub code: CodeableConcept,
    /// A species specific time during which consumption of animal product is not appropriate
    #[fhir_serde(rename = "withdrawalPeriod")]
    pub withdrawal_period: Option<
        Vec<MedicinalProductPharmaceuticalRouteOfAdministrationTargetSpeciesWithdrawalPeriod>,
    >,
}

/// A species specific time during which consumption of animal product is not appropriate
#[derive(Debug, Clone, PartialEq, Default, FhirSerde)]
#[fhir_type(name = "MedicinalProductPharmaceuticalRouteOfAdministrationTargetSpeciesWithdrawalPeriod", kind = "backbone_element")]
pub struct MedicinalProductPharmaceuticalRouteOfAdministrationTargetSpeciesWithdrawalPeriod {
    /// Unique id for inter-element referencing
    pub id: Option<std::string::String>,
    /// Additional content defined by implementations
    pub extension: Option<Vec<Extension>>,
    /// Extensions that cannot be ignored even if unrecognized
    #[fhir_serde(rename = "modifierExtension")]
    pub modifier_extension: Option<Vec<Extension>>,
    /// Coded expression for the type of tissue for which the withdrawal period applues, e.g. meat, milk.
    pub tissue: CodeableConcept,
    /// A value for the time
    pub value: Quantity,
    /// Extra information about the withdrawal period
    #[fhir_serde(rename = "supportingInformation")]
    pub supporting_information: Option<String>,
}
