//! Typed FHIR data model with a strict JSON codec.
//!
//! Every FHIR resource and data type is a plain Rust struct, every choice
//! group (`value[x]`) an enum with one arm per allowed type. Records are read
//! and written through [`FhirJson`], which `#[derive(FhirSerde)]` implements:
//!
//! ```rust
//! # #[cfg(feature = "R4")]
//! # {
//! use meridian_fhir::r4::{Dosage, DosageAsNeeded};
//! use meridian_fhir::decode_str;
//!
//! let dosage: Dosage = decode_str(r#"{"resourceType":"Dosage","asNeededBoolean":"true"}"#).unwrap();
//! assert_eq!(dosage.as_needed, Some(DosageAsNeeded::Boolean(true.into())));
//! # }
//! ```
//!
//! Decoding is strict: unknown keys, missing required fields, ambiguous
//! choices and malformed primitives are all reported as [`DecodeError`].
//! Encoding a constructed record never fails.

// Lets generated code name this crate as `meridian_fhir` from inside it.
extern crate self as meridian_fhir;

pub mod base;
pub mod codec;
pub mod date_time;
pub mod error;
pub mod fhir_version;
pub mod precise_decimal;
pub mod primitive;
pub mod registry;
pub mod wire;
mod element;
#[cfg(feature = "R4")]
pub mod r4;

pub use base::{BackboneElementBase, DomainResourceBase, ElementBase, FhirType, ResourceBase};
pub use codec::{decode, decode_slice, decode_str, encode, encode_string, encode_string_pretty};
pub use date_time::{
    DatePrecision, DateTimePrecision, PrecisionDate, PrecisionDateTime, PrecisionInstant,
    PrecisionTime, TimePrecision,
};
pub use element::Element;
pub use error::DecodeError;
pub use fhir_version::{FhirComplexTypeProvider, FhirResource, FhirResourceTypeProvider, FhirVersion};
pub use precise_decimal::PreciseDecimal;
pub use primitive::{FhirPrimitive, PositiveInteger, UnsignedInteger};
pub use wire::{FhirChoice, FhirJson};

pub use meridian_macros::FhirSerde;
