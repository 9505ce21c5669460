//! # Meridian Macros
//!
//! `#[derive(FhirSerde)]` turns a plain struct or enum into a FHIR JSON record.
//! It is applied to every type in the generated vocabulary, so no codec code is
//! written by hand.
//!
//! ## Extension Pattern
//!
//! FHIR primitives keep their metadata in a parallel `_fieldName` object:
//!
//! ```json
//! {
//!   "status": "active",
//!   "_status": {
//!     "id": "status-1",
//!     "extension": [...]
//!   }
//! }
//! ```
//!
//! Arrays of primitives are split into two parallel arrays padded with `null`:
//!
//! ```json
//! {
//!   "given": ["John", null],
//!   "_given": [null, {"id": "name-2"}]
//! }
//! ```
//!
//! ## Choice Types
//!
//! FHIR's `[x]` fields appear as one key with a type suffix:
//!
//! ```json
//! { "valueQuantity": {...} }
//! { "valueString": "text" }
//! ```
//!
//! ## Usage
//!
//! ```ignore
//! use meridian_fhir::FhirSerde;
//!
//! #[derive(Debug, Clone, PartialEq, Default, FhirSerde)]
//! #[fhir_type(name = "Period", kind = "element")]
//! pub struct Period {
//!     pub id: Option<std::string::String>,
//!     pub extension: Option<Vec<Extension>>,
//!     pub start: Option<DateTime>,
//!     pub end: Option<DateTime>,
//! }
//! ```

extern crate proc_macro;

use proc_macro::TokenStream;
use syn::{parse_macro_input, Data, DeriveInput};
use crate::choice_impl::generate_choice_impl;
use crate::struct_impl::generate_struct_impl;

pub(crate) mod choice_impl;
pub(crate) mod field_helpers;
pub(crate) mod struct_impl;
pub(crate) mod type_helpers;

/// Derives the FHIR JSON codec for a record struct or a choice enum.
///
/// # Supported Attributes
///
/// - `#[fhir_type(name = "...", kind = "...")]` on structs. `kind` is one of
///   `element`, `backbone_element`, `resource`, `domain_resource` and selects
///   the base accessor traits to implement.
/// - `#[fhir_choice_element(base_name = "...")]` on choice enums.
/// - `#[fhir_serde(rename = "name")]` on fields and variants sets the wire name.
/// - `#[fhir_serde(flatten)]` marks a field holding a choice enum.
///
/// # Generated Implementations
///
/// ## For Structs:
/// - `FhirType` with the type name
/// - `FhirJson`, decoding each field in declaration order and rejecting
///   undeclared keys; resources write `resourceType` first
/// - `ElementBase`/`BackboneElementBase` or `ResourceBase`/`DomainResourceBase`
/// - `serde::Serialize` and `serde::Deserialize` through `FhirJson`
///
/// ## For Enums:
/// - `FhirChoice`, one sibling key per variant
/// - `serde::Serialize` and `serde::Deserialize` as a one-key object
///
/// Required fields (declared without `Option`) raise `MissingRequiredField`
/// when absent; a required choice reports its group as `name[x]`.
#[proc_macro_derive(FhirSerde, attributes(fhir_serde, fhir_type, fhir_choice_element))]
pub fn fhir_serde_derive(input: TokenStream) -> TokenStream {
    let input = parse_macro_input!(input as DeriveInput);

    let expanded = match &input.data {
        Data::Struct(_) => generate_struct_impl(&input),
        Data::Enum(_) => generate_choice_impl(&input),
        Data::Union(_) => Err(syn::Error::new_spanned(
            &input.ident,
            "FhirSerde derive macro does not support unions.",
        )),
    };

    expanded.unwrap_or_else(syn::Error::into_compile_error).into()
}
