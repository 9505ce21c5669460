use crate::r4::*;
use crate::FhirSerde;

/// FHIR Address type
///
/// An address expressed using postal conventions (as opposed to GPS or other
/// location definition formats). This data type may be used to convey addresses
/// for use in delivering mail as well as for visiting locations which might not
/// be valid for mail delivery.
///
/// See: [Address](http://hl7.org/fhir/StructureDefinition/Address)
#[derive(Debug, Clone, PartialEq, Default, FhirSerde)]
#[fhir_type(name = "Address", kind = "element")]
pub struct Address {
    /// Unique id for inter-element referencing
    pub id: Option<std::string::String>,
    /// Additional content defined by implementations
    pub extension: Option<Vec<Extension>>,
    /// home | work | temp | old | billing - purpose of this address
    #[fhir_serde(rename = "use")]
    pub r#use: Option<Code>,
    /// postal | physical | both
    #[fhir_serde(rename = "type")]
    pub r#type: Option<Code>,
    /// Text representation of the address
    pub text: Option<String>,
    /// Street name, number, direction & P.O. Box etc.
    pub line: Option<Vec<String>>,
    /// Name of city, town etc.
    pub city: Option<String>,
    /// District name (aka county)
    pub district: Option<String>,
    /// Sub-unit of country (abbreviations ok)
    pub state: Option<String>,
    /// Postal code for area
    #[fhir_serde(rename = "postalCode")]
    pub postal_code: Option<String>,
    /// Country (e.g. can be ISO 3166 2 or 3 letter code)
    pub country: Option<String>,
    /// Time period when address was/is in use
    pub period: Option<Period>,
}
