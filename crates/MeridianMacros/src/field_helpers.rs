use heck::ToLowerCamelCase;
use syn::punctuated::Punctuated;
use syn::{token, Attribute, Expr, Lit, Meta};

/// Determines the wire name of a field or choice variant.
///
/// - If `#[fhir_serde(rename = "customName")]` is present, uses the custom name
/// - Otherwise, converts the Rust field name from `snake_case` to `camelCase`
///
/// ```rust,ignore
/// // pub implicit_rules: Option<Uri>  => "implicitRules"
/// // #[fhir_serde(rename = "type")] pub type_: Option<Code>  => "type"
/// ```
pub(crate) fn get_effective_field_name(attrs: &[Attribute], ident: &syn::Ident) -> String {
    if let Some(name) = find_name_value(attrs, "fhir_serde", "rename") {
        return name;
    }
    ident
        .to_string()
        .trim_start_matches("r#")
        .trim_end_matches('_')
        .to_lower_camel_case()
}

/// Checks for `#[fhir_serde(flatten)]`, which marks a choice group field.
pub(crate) fn is_flattened(attrs: &[Attribute]) -> bool {
    for attr in attrs {
        if attr.path().is_ident("fhir_serde")
            && let Ok(list) = attr.parse_args_with(Punctuated::<Meta, token::Comma>::parse_terminated)
        {
            for meta in list {
                if let Meta::Path(path) = meta
                    && path.is_ident("flatten")
                {
                    return true;
                }
            }
        }
    }
    false
}

/// Reads `key = "value"` out of `#[attr_name(...)]`.
pub(crate) fn find_name_value(attrs: &[Attribute], attr_name: &str, key: &str) -> Option<String> {
    for attr in attrs {
        if attr.path().is_ident(attr_name)
            && let Ok(list) = attr.parse_args_with(Punctuated::<Meta, token::Comma>::parse_terminated)
        {
            for meta in list {
                if let Meta::NameValue(nv) = meta
                    && nv.path.is_ident(key)
                    && let Expr::Lit(expr_lit) = nv.value
                    && let Lit::Str(lit_str) = expr_lit.lit
                {
                    return Some(lit_str.value());
                }
            }
        }
    }
    None
}

/// The base-type family a struct flattens in, from `#[fhir_type(kind = "...")]`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum TypeKind {
    Element,
    BackboneElement,
    Resource,
    DomainResource,
}

impl TypeKind {
    fn parse(text: &str) -> Option<Self> {
        match text {
            "element" => Some(TypeKind::Element),
            "backbone_element" => Some(TypeKind::BackboneElement),
            "resource" => Some(TypeKind::Resource),
            "domain_resource" => Some(TypeKind::DomainResource),
            _ => None,
        }
    }

    pub(crate) fn is_resource(self) -> bool {
        matches!(self, TypeKind::Resource | TypeKind::DomainResource)
    }
}

/// Struct-level settings from `#[fhir_type(name = "...", kind = "...")]`.
pub(crate) struct TypeAttributes {
    pub(crate) name: String,
    pub(crate) kind: TypeKind,
}

pub(crate) fn parse_type_attributes(input: &syn::DeriveInput) -> syn::Result<TypeAttributes> {
    let name = find_name_value(&input.attrs, "fhir_type", "name").unwrap_or_else(|| input.ident.to_string());
    let kind_text = find_name_value(&input.attrs, "fhir_type", "kind").ok_or_else(|| {
        syn::Error::new_spanned(
            &input.ident,
            "FhirSerde structs need #[fhir_type(kind = \"element\" | \"backbone_element\" | \"resource\" | \"domain_resource\")]",
        )
    })?;
    let kind = TypeKind::parse(&kind_text)
        .ok_or_else(|| syn::Error::new_spanned(&input.ident, format!("unknown fhir_type kind '{}'", kind_text)))?;
    Ok(TypeAttributes { name, kind })
}

/// Reads `#[fhir_choice_element(base_name = "...")]` from a choice enum.
pub(crate) fn parse_choice_base_name(input: &syn::DeriveInput) -> syn::Result<String> {
    find_name_value(&input.attrs, "fhir_choice_element", "base_name").ok_or_else(|| {
        syn::Error::new_spanned(
            &input.ident,
            "FhirSerde enums need #[fhir_choice_element(base_name = \"...\")]",
        )
    })
}
