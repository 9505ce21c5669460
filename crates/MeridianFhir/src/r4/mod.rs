//! FHIR R4 (4.0.1) data types and resources.
//!
//! Generated by `meridian-fhir-gen` from the R4 StructureDefinitions. Do not edit by hand.

pub mod complex_types;
pub mod primitives;
pub mod resources;

pub use complex_types::*;
pub use primitives::*;
pub use resources::*;
