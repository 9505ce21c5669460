//=============================================================================
// Type Analysis Helper Functions
//=============================================================================

use syn::{GenericArgument, PathArguments, Type, TypePath};

/// FHIR primitive aliases of `Element<V, Extension>`.
///
/// A field of one of these types is split on the wire into `name` and `_name`.
/// The bare Rust `String` never reaches this list: generated code spells the
/// plain string as `std::string::String`, which has more than one segment.
const KNOWN_ELEMENT_ALIASES: &[&str] = &[
    "Base64Binary",
    "Boolean",
    "Canonical",
    "Code",
    "Date",
    "DateTime",
    "Decimal",
    "Id",
    "Instant",
    "Integer",
    "Markdown",
    "Oid",
    "PositiveInt",
    "String",
    "Time",
    "UnsignedInt",
    "Uri",
    "Url",
    "Uuid",
    "Xhtml",
];

/// Rust types that sit in a JSON property directly, without a `_name` half.
const PLAIN_PRIMITIVES: &[&str] = &[
    "bool",
    "i32",
    "PositiveInteger",
    "UnsignedInteger",
    "PreciseDecimal",
    "PrecisionDate",
    "PrecisionDateTime",
    "PrecisionInstant",
    "PrecisionTime",
];

fn wrapper_inner<'a>(ty: &'a Type, wrapper: &str) -> Option<&'a Type> {
    if let Type::Path(TypePath { path, qself: None }) = ty
        && let Some(segment) = path.segments.last()
        && segment.ident == wrapper
        && let PathArguments::AngleBracketed(args) = &segment.arguments
        && let Some(GenericArgument::Type(inner_ty)) = args.args.first()
    {
        return Some(inner_ty);
    }
    None
}

/// Extracts `T` from `Option<T>`.
pub(crate) fn get_option_inner_type(ty: &Type) -> Option<&Type> {
    wrapper_inner(ty, "Option")
}

/// Extracts `T` from `Vec<T>`.
pub(crate) fn get_vec_inner_type(ty: &Type) -> Option<&Type> {
    wrapper_inner(ty, "Vec")
}

/// Extracts `T` from `Box<T>`, used to break cycles such as
/// `Identifier.assigner -> Reference -> Identifier`.
pub(crate) fn get_box_inner_type(ty: &Type) -> Option<&Type> {
    wrapper_inner(ty, "Box")
}

/// How a field's value travels on the wire.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum WireShape {
    /// `Element<V, E>` or one of its aliases: `name` plus `_name`.
    Element,
    /// A primitive with no metadata half.
    Plain,
    /// A nested object decoded by its own `FhirJson` impl.
    Complex,
}

/// The shape of a declared field type after peeling `Option`/`Vec`/`Box`.
#[derive(Clone)]
pub(crate) struct FieldType<'a> {
    pub(crate) shape: WireShape,
    pub(crate) is_option: bool,
    pub(crate) is_vec: bool,
    /// The type inside `Option`, i.e. the type a present value has.
    pub(crate) present_ty: &'a Type,
}

/// Analyzes a declared type, recording the `Option`/`Vec` wrappers and the
/// wire shape of the innermost type.
///
/// ```rust,ignore
/// // Option<Vec<Boolean>>           => Element, option, vec
/// // Option<std::string::String>    => Plain,   option
/// // Option<Box<Reference>>         => Complex, option
/// // Reference                      => Complex, required
/// ```
pub(crate) fn analyze_field_type(field_ty: &Type) -> FieldType<'_> {
    let mut is_option = false;
    let mut is_vec = false;
    let mut current_ty = field_ty;

    if let Some(inner) = get_option_inner_type(current_ty) {
        is_option = true;
        current_ty = inner;
    }
    let present_ty = current_ty;

    if let Some(inner) = get_vec_inner_type(current_ty) {
        is_vec = true;
        current_ty = inner;
    }
    if let Some(inner) = get_box_inner_type(current_ty) {
        current_ty = inner;
    }

    FieldType {
        shape: classify_base_type(current_ty),
        is_option,
        is_vec,
        present_ty,
    }
}

/// Decides the wire shape of an unwrapped type from its path.
pub(crate) fn classify_base_type(ty: &Type) -> WireShape {
    let Type::Path(TypePath { path, .. }) = ty else {
        return WireShape::Complex;
    };
    let Some(segment) = path.segments.last() else {
        return WireShape::Complex;
    };
    let name = segment.ident.to_string();

    if path.segments.len() > 1 && name == "String" {
        return WireShape::Plain;
    }
    if PLAIN_PRIMITIVES.contains(&name.as_str()) {
        return WireShape::Plain;
    }
    if name == "Element" || KNOWN_ELEMENT_ALIASES.contains(&name.as_str()) {
        return WireShape::Element;
    }
    WireShape::Complex
}

/// Returns the `T` of a field declared as `Option<Vec<T>>`, `Vec<T>` or
/// `Option<T>`.
pub(crate) fn get_item_type(ty: &Type) -> &Type {
    let ty = get_option_inner_type(ty).unwrap_or(ty);
    get_vec_inner_type(ty).unwrap_or(ty)
}

#[cfg(test)]
mod tests {
    use super::*;
    use quote::quote;
    use syn::parse_quote;

    #[test]
    fn classifies_wrappers_and_shapes() {
        let ty: Type = parse_quote!(Option<Vec<Boolean>>);
        let info = analyze_field_type(&ty);
        assert_eq!(info.shape, WireShape::Element);
        assert!(info.is_option && info.is_vec);

        let ty: Type = parse_quote!(Option<std::string::String>);
        assert_eq!(analyze_field_type(&ty).shape, WireShape::Plain);

        let ty: Type = parse_quote!(Option<String>);
        assert_eq!(analyze_field_type(&ty).shape, WireShape::Element);

        let ty: Type = parse_quote!(Option<Box<Reference>>);
        let info = analyze_field_type(&ty);
        assert_eq!(info.shape, WireShape::Complex);
        assert!(info.is_option && !info.is_vec);

        let ty: Type = parse_quote!(Reference);
        let info = analyze_field_type(&ty);
        assert!(!info.is_option);
    }

    #[test]
    fn item_type_peels_option_and_vec() {
        let ty: Type = parse_quote!(Option<Vec<Extension>>);
        let item = get_item_type(&ty);
        assert_eq!(quote!(#item).to_string(), "Extension");
    }
}
