use serde_json::Value;
use crate::error::DecodeError;
#[cfg(feature = "R4")]
use crate::r4;
use crate::wire::FhirJson;

/// A decoded resource tagged with the FHIR release it belongs to.
///
/// ```rust
/// use meridian_fhir::{FhirResource, FhirVersion};
/// use serde_json::json;
///
/// # #[cfg(feature = "R4")]
/// # {
/// let resource = FhirResource::decode(
///     FhirVersion::R4,
///     json!({"resourceType": "Patient", "id": "example"}),
/// ).unwrap();
/// assert_eq!(resource.version(), FhirVersion::R4);
/// assert_eq!(resource.resource_type_name(), "Patient");
/// # }
/// ```
#[derive(Debug, Clone, PartialEq)]
pub enum FhirResource {
    /// FHIR 4.0.1 (normative) resource
    #[cfg(feature = "R4")]
    R4(Box<r4::Resource>),
}

impl FhirResource {
    /// Decodes any resource of the given release, dispatching on `resourceType`.
    pub fn decode(version: FhirVersion, value: Value) -> Result<Self, DecodeError> {
        match version {
            #[cfg(feature = "R4")]
            FhirVersion::R4 => r4::Resource::from_json(value).map(|r| FhirResource::R4(Box::new(r))),
        }
    }

    pub fn version(&self) -> FhirVersion {
        match self {
            #[cfg(feature = "R4")]
            FhirResource::R4(_) => FhirVersion::R4,
        }
    }

    pub fn resource_type_name(&self) -> &'static str {
        match self {
            #[cfg(feature = "R4")]
            FhirResource::R4(r) => r.resource_type().as_str(),
        }
    }

    pub fn to_json(&self) -> Value {
        match self {
            #[cfg(feature = "R4")]
            FhirResource::R4(r) => r.to_json(),
        }
    }
}

/// FHIR releases compiled into this build.
///
/// Each release is gated by a Cargo feature of the same name. The enum
/// implements `clap::ValueEnum` so tools can take it as an argument:
///
/// ```rust,no_run
/// use clap::Parser;
/// use meridian_fhir::FhirVersion;
///
/// #[derive(Parser)]
/// struct Args {
///     #[arg(long, value_enum, default_value_t = FhirVersion::default())]
///     version: FhirVersion,
/// }
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FhirVersion {
    /// FHIR 4.0.1 (normative)
    #[cfg(feature = "R4")]
    R4,
}

impl FhirVersion {
    /// Returns the release identifier, e.g. `"R4"`.
    pub fn as_str(&self) -> &'static str {
        match self {
            #[cfg(feature = "R4")]
            FhirVersion::R4 => "R4",
        }
    }

    /// Returns the FHIR semantic version string of the release.
    pub fn fhir_release(&self) -> &'static str {
        match self {
            #[cfg(feature = "R4")]
            FhirVersion::R4 => "4.0.1",
        }
    }
}

impl std::fmt::Display for FhirVersion {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

#[cfg(feature = "R4")]
impl Default for FhirVersion {
    fn default() -> Self {
        FhirVersion::R4
    }
}

impl clap::ValueEnum for FhirVersion {
    fn value_variants<'a>() -> &'a [Self] {
        &[
            #[cfg(feature = "R4")]
            FhirVersion::R4,
        ]
    }

    fn to_possible_value(&self) -> Option<clap::builder::PossibleValue> {
        Some(clap::builder::PossibleValue::new(self.as_str()))
    }
}

/// Lists the resource types compiled for a release.
pub trait FhirResourceTypeProvider {
    /// Returns every resource type name of this release.
    fn get_resource_type_names() -> Vec<&'static str>;

    /// Checks if a given type name is a resource type of this release.
    fn is_resource_type(type_name: &str) -> bool {
        Self::get_resource_type_names()
            .iter()
            .any(|&resource_type| resource_type == type_name)
    }
}

/// Lists the complex data types compiled for a release.
pub trait FhirComplexTypeProvider {
    /// Returns every complex type name of this release.
    fn get_complex_type_names() -> Vec<&'static str>;

    fn is_complex_type(type_name: &str) -> bool {
        Self::get_complex_type_names()
            .iter()
            .any(|&complex_type| complex_type == type_name)
    }
}

#[cfg(all(test, feature = "R4"))]
mod tests {
    use super::*;
    use clap::ValueEnum;
    use serde_json::json;

    #[test]
    fn version_names() {
        assert_eq!(FhirVersion::default(), FhirVersion::R4);
        assert_eq!(FhirVersion::R4.to_string(), "R4");
        assert_eq!(FhirVersion::R4.fhir_release(), "4.0.1");
        assert_eq!(FhirVersion::from_str("R4", false).unwrap(), FhirVersion::R4);
    }

    #[test]
    fn decode_tags_the_release() {
        let resource = FhirResource::decode(
            FhirVersion::R4,
            json!({"resourceType": "Account", "status": "active"}),
        )
        .unwrap();
        assert_eq!(resource.resource_type_name(), "Account");
        assert_eq!(resource.to_json()["status"], json!("active"));
    }

    #[test]
    fn providers_list_the_vocabulary() {
        assert!(r4::Resource::is_resource_type("Provenance"));
        assert!(!r4::Resource::is_resource_type("Period"));
        assert!(r4::ComplexTypes::is_complex_type("Period"));
        assert!(!r4::ComplexTypes::is_complex_type("Account"));
    }
}
