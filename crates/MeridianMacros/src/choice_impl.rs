use proc_macro2::TokenStream;
use quote::quote;
use syn::{Data, DeriveInput, Fields};
use crate::field_helpers::{get_effective_field_name, parse_choice_base_name};
use crate::type_helpers::{classify_base_type, get_box_inner_type, WireShape};

/// Generates `FhirChoice` and serde adapters for a choice enum.
///
/// Every variant wraps exactly one value, and its wire key is the base name
/// followed by the FHIR type name:
///
/// ```rust,ignore
/// #[derive(FhirSerde)]
/// #[fhir_choice_element(base_name = "asNeeded")]
/// pub enum DosageAsNeeded {
///     #[fhir_serde(rename = "asNeededBoolean")]
///     Boolean(Boolean),
///     #[fhir_serde(rename = "asNeededCodeableConcept")]
///     CodeableConcept(CodeableConcept),
/// }
/// ```
pub(crate) fn generate_choice_impl(input: &DeriveInput) -> syn::Result<TokenStream> {
    let name = &input.ident;
    let Data::Enum(data) = &input.data else {
        return Err(syn::Error::new_spanned(name, "expected an enum"));
    };
    let base_name = parse_choice_base_name(input)?;

    let mut keys = Vec::new();
    let mut takes = Vec::new();
    let mut writes = Vec::new();
    for variant in &data.variants {
        let variant_ident = &variant.ident;
        let inner_ty = match &variant.fields {
            Fields::Unnamed(fields) if fields.unnamed.len() == 1 => &fields.unnamed[0].ty,
            _ => {
                return Err(syn::Error::new_spanned(
                    variant,
                    "choice variants must wrap exactly one value",
                ))
            }
        };
        let key = get_effective_field_name(&variant.attrs, variant_ident);
        let shape = classify_base_type(get_box_inner_type(inner_ty).unwrap_or(inner_ty));
        let (take_fn, put_fn) = match shape {
            WireShape::Element => (quote!(take_element), quote!(put_element)),
            WireShape::Plain => (quote!(take_plain), quote!(put_plain)),
            WireShape::Complex => (quote!(take_complex), quote!(put_complex)),
        };
        takes.push(quote! {
            let taken: Option<#inner_ty> = ::meridian_fhir::wire::#take_fn(map, #key)?;
            if let Some(value) = taken {
                return Ok(Some(Self::#variant_ident(value)));
            }
        });
        writes.push(quote! {
            Self::#variant_ident(value) => ::meridian_fhir::wire::#put_fn(map, #key, Some(value)),
        });
        keys.push(key);
    }

    Ok(quote! {
        impl ::meridian_fhir::FhirChoice for #name {
            const BASE_NAME: &'static str = #base_name;
            const KEYS: &'static [&'static str] = &[#(#keys),*];

            fn take_from(
                map: &mut ::meridian_fhir::wire::JsonMap,
            ) -> Result<Option<Self>, ::meridian_fhir::DecodeError> {
                #(#takes)*
                Ok(None)
            }

            fn write_into(&self, map: &mut ::meridian_fhir::wire::JsonMap) {
                match self {
                    #(#writes)*
                }
            }
        }

        impl ::serde::Serialize for #name {
            fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
            where
                S: ::serde::Serializer,
            {
                let mut map = ::serde_json::Map::new();
                ::meridian_fhir::FhirChoice::write_into(self, &mut map);
                ::serde::Serialize::serialize(&map, serializer)
            }
        }

        impl<'de> ::serde::Deserialize<'de> for #name {
            fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
            where
                D: ::serde::Deserializer<'de>,
            {
                let value = <::serde_json::Value as ::serde::Deserialize>::deserialize(deserializer)?;
                let mut map = ::meridian_fhir::wire::expect_object(value, #base_name)
                    .map_err(::serde::de::Error::custom)?;
                let choice = ::meridian_fhir::wire::take_choice::<Self>(&mut map)
                    .map_err(::serde::de::Error::custom)?;
                ::meridian_fhir::wire::reject_unknown_fields(&map, #base_name)
                    .map_err(::serde::de::Error::custom)?;
                choice.ok_or_else(|| {
                    ::serde::de::Error::custom(::meridian_fhir::DecodeError::MissingRequiredField(
                        ::meridian_fhir::wire::choice_field_name::<Self>(),
                    ))
                })
            }
        }
    })
}
