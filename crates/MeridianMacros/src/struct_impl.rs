use proc_macro2::TokenStream;
use quote::quote;
use syn::{Data, DeriveInput, Fields, Type};
use crate::field_helpers::{get_effective_field_name, is_flattened, parse_type_attributes, TypeKind};
use crate::type_helpers::{analyze_field_type, get_item_type, WireShape};

/// One field of a record, resolved to the wire operations it needs.
struct FieldPlan<'a> {
    ident: &'a syn::Ident,
    ty: &'a Type,
    decode: TokenStream,
    encode: TokenStream,
    /// Wire name reported when the field is missing, for required fields.
    required: Option<String>,
}

fn plan_field<'a>(field: &'a syn::Field) -> syn::Result<FieldPlan<'a>> {
    let ident = field
        .ident
        .as_ref()
        .ok_or_else(|| syn::Error::new_spanned(field, "FhirSerde needs named fields"))?;
    let ty = &field.ty;
    let info = analyze_field_type(ty);

    if is_flattened(&field.attrs) {
        let choice_ty = info.present_ty;
        let (decode, encode) = if info.is_option {
            (
                quote! { ::meridian_fhir::wire::take_choice::<#choice_ty>(&mut json_map)? },
                quote! { ::meridian_fhir::wire::put_choice(&mut json_map, self.#ident.as_ref()); },
            )
        } else {
            (
                quote! {
                    match ::meridian_fhir::wire::take_choice::<#choice_ty>(&mut json_map)? {
                        Some(choice) => choice,
                        None => {
                            return Err(::meridian_fhir::DecodeError::MissingRequiredField(
                                ::meridian_fhir::wire::choice_field_name::<#choice_ty>(),
                            ))
                        }
                    }
                },
                quote! { ::meridian_fhir::wire::put_choice(&mut json_map, Some(&self.#ident)); },
            )
        };
        let required = (!info.is_option)
            .then(|| format!("{}[x]", get_effective_field_name(&field.attrs, ident)));
        return Ok(FieldPlan { ident, ty, decode, encode, required });
    }

    let key = get_effective_field_name(&field.attrs, ident);
    let (take_fn, put_fn) = match (info.shape, info.is_vec) {
        (WireShape::Element, false) => (quote!(take_element), quote!(put_element)),
        (WireShape::Element, true) => (quote!(take_element_list), quote!(put_element_list)),
        (WireShape::Plain, false) => (quote!(take_plain), quote!(put_plain)),
        (WireShape::Plain, true) => (quote!(take_plain_list), quote!(put_plain_list)),
        (WireShape::Complex, false) => (quote!(take_complex), quote!(put_complex)),
        (WireShape::Complex, true) => (quote!(take_complex_list), quote!(put_complex_list)),
    };

    let take = quote! { ::meridian_fhir::wire::#take_fn(&mut json_map, #key)? };
    let decode = if info.is_option {
        take
    } else {
        quote! { ::meridian_fhir::wire::require(#take, #key)? }
    };

    let value_ref = match (info.is_option, info.is_vec) {
        (true, true) => quote! { self.#ident.as_deref() },
        (true, false) => quote! { self.#ident.as_ref() },
        (false, true) => quote! { Some(self.#ident.as_slice()) },
        (false, false) => quote! { Some(&self.#ident) },
    };
    let encode = quote! { ::meridian_fhir::wire::#put_fn(&mut json_map, #key, #value_ref); };
    let required = (!info.is_option).then(|| key.clone());

    Ok(FieldPlan { ident, ty, decode, encode, required })
}

fn find_field<'a>(fields: &'a Fields, name: &str) -> Option<&'a syn::Field> {
    fields
        .iter()
        .find(|f| f.ident.as_ref().is_some_and(|i| i == name))
}

fn base_field_type<'a>(input: &DeriveInput, fields: &'a Fields, name: &str) -> syn::Result<&'a Type> {
    find_field(fields, name)
        .map(|f| get_item_type(&f.ty))
        .ok_or_else(|| {
            syn::Error::new_spanned(
                &input.ident,
                format!("this fhir_type kind requires a `{}` field", name),
            )
        })
}

/// Implements the base accessor traits for the struct's kind.
fn generate_base_impls(input: &DeriveInput, fields: &Fields, kind: TypeKind) -> syn::Result<TokenStream> {
    let name = &input.ident;
    let element_base = |extension_ty: &Type| {
        quote! {
            impl ::meridian_fhir::ElementBase for #name {
                type Extension = #extension_ty;

                fn id(&self) -> Option<&str> {
                    self.id.as_deref()
                }

                fn extension(&self) -> Option<&[Self::Extension]> {
                    self.extension.as_deref()
                }
            }
        }
    };

    let tokens = match kind {
        TypeKind::Element => {
            let extension_ty = base_field_type(input, fields, "extension")?;
            element_base(extension_ty)
        }
        TypeKind::BackboneElement => {
            let extension_ty = base_field_type(input, fields, "extension")?;
            base_field_type(input, fields, "modifier_extension")?;
            let element = element_base(extension_ty);
            quote! {
                #element

                impl ::meridian_fhir::BackboneElementBase for #name {
                    fn modifier_extension(&self) -> Option<&[Self::Extension]> {
                        self.modifier_extension.as_deref()
                    }
                }
            }
        }
        TypeKind::Resource | TypeKind::DomainResource => {
            let meta_ty = base_field_type(input, fields, "meta")?;
            base_field_type(input, fields, "id")?;
            base_field_type(input, fields, "implicit_rules")?;
            base_field_type(input, fields, "language")?;
            let resource = quote! {
                impl ::meridian_fhir::ResourceBase for #name {
                    type Meta = #meta_ty;

                    fn id(&self) -> Option<&str> {
                        self.id.as_ref().and_then(|e| e.value.as_deref())
                    }

                    fn meta(&self) -> Option<&Self::Meta> {
                        self.meta.as_ref()
                    }

                    fn implicit_rules(&self) -> Option<&str> {
                        self.implicit_rules.as_ref().and_then(|e| e.value.as_deref())
                    }

                    fn language(&self) -> Option<&str> {
                        self.language.as_ref().and_then(|e| e.value.as_deref())
                    }
                }
            };
            if kind == TypeKind::Resource {
                resource
            } else {
                let extension_ty = base_field_type(input, fields, "extension")?;
                let narrative_ty = base_field_type(input, fields, "text")?;
                let resource_ty = base_field_type(input, fields, "contained")?;
                base_field_type(input, fields, "modifier_extension")?;
                quote! {
                    #resource

                    impl ::meridian_fhir::DomainResourceBase for #name {
                        type Extension = #extension_ty;
                        type Narrative = #narrative_ty;
                        type Resource = #resource_ty;

                        fn text(&self) -> Option<&Self::Narrative> {
                            self.text.as_ref()
                        }

                        fn contained(&self) -> Option<&[Self::Resource]> {
                            self.contained.as_deref()
                        }

                        fn extension(&self) -> Option<&[Self::Extension]> {
                            self.extension.as_deref()
                        }

                        fn modifier_extension(&self) -> Option<&[Self::Extension]> {
                            self.modifier_extension.as_deref()
                        }
                    }
                }
            }
        }
    };
    Ok(tokens)
}

/// Generates `FhirType`, `FhirJson`, the base traits and serde adapters for a
/// record struct.
pub(crate) fn generate_struct_impl(input: &DeriveInput) -> syn::Result<TokenStream> {
    let name = &input.ident;
    let Data::Struct(data) = &input.data else {
        return Err(syn::Error::new_spanned(name, "expected a struct"));
    };
    let Fields::Named(_) = &data.fields else {
        return Err(syn::Error::new_spanned(name, "FhirSerde needs named fields"));
    };
    let attrs = parse_type_attributes(input)?;
    let type_name = &attrs.name;

    let plans = data.fields.iter().map(plan_field).collect::<syn::Result<Vec<_>>>()?;
    let decode_lets = plans.iter().map(|p| {
        let ident = p.ident;
        let ty = p.ty;
        let decode = &p.decode;
        quote! { let #ident: #ty = #decode; }
    });
    let idents = plans.iter().map(|p| p.ident);
    let encodes = plans.iter().map(|p| &p.encode);
    let required_fields = plans.iter().filter_map(|p| p.required.as_deref());
    let put_resource_type = attrs.kind.is_resource().then(|| {
        quote! { ::meridian_fhir::wire::put_resource_type(&mut json_map, #type_name); }
    });
    // A record with its own `resourceType` field (ExampleScenario.instance)
    // keeps that key as data.
    let declares_resource_type = data.fields.iter().any(|f| {
        f.ident
            .as_ref()
            .is_some_and(|ident| get_effective_field_name(&f.attrs, ident) == "resourceType")
    });
    let check_resource_type = (!declares_resource_type).then(|| {
        quote! { ::meridian_fhir::wire::check_resource_type(&mut json_map, #type_name)?; }
    });
    // Resources already lead with their discriminator.
    let to_document = (!attrs.kind.is_resource() && !declares_resource_type).then(|| {
        quote! {
            fn to_document(&self) -> ::serde_json::Value {
                ::meridian_fhir::wire::lead_with_resource_type(#type_name, self.to_json())
            }
        }
    });
    let base_impls = generate_base_impls(input, &data.fields, attrs.kind)?;

    Ok(quote! {
        impl ::meridian_fhir::FhirType for #name {
            const TYPE_NAME: &'static str = #type_name;
            const REQUIRED_FIELDS: &'static [&'static str] = &[#(#required_fields),*];
        }

        impl ::meridian_fhir::FhirJson for #name {
            fn from_json(value: ::serde_json::Value) -> Result<Self, ::meridian_fhir::DecodeError> {
                let mut json_map = ::meridian_fhir::wire::expect_object(value, #type_name)?;
                #check_resource_type
                #(#decode_lets)*
                ::meridian_fhir::wire::reject_unknown_fields(&json_map, #type_name)?;
                Ok(Self { #(#idents),* })
            }

            fn to_json(&self) -> ::serde_json::Value {
                let mut json_map = ::serde_json::Map::new();
                #put_resource_type
                #(#encodes)*
                ::serde_json::Value::Object(json_map)
            }

            #to_document
        }

        #base_impls

        impl ::serde::Serialize for #name {
            fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
            where
                S: ::serde::Serializer,
            {
                ::serde::Serialize::serialize(&::meridian_fhir::FhirJson::to_json(self), serializer)
            }
        }

        impl<'de> ::serde::Deserialize<'de> for #name {
            fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
            where
                D: ::serde::Deserializer<'de>,
            {
                let value = <::serde_json::Value as ::serde::Deserialize>::deserialize(deserializer)?;
                <Self as ::meridian_fhir::FhirJson>::from_json(value).map_err(::serde::de::Error::custom)
            }
        }
    })
}
