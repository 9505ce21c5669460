//! Runtime support for the code emitted by `#[derive(FhirSerde)]`.
//!
//! A record is decoded by turning its JSON object into a [`Map`] and taking
//! each declared property out of it in declaration order. Whatever is left at
//! the end is an undeclared key and is rejected. Encoding inserts the
//! properties into a fresh map in the same order, skipping absent ones.
//!
//! Three field shapes exist on the wire:
//!
//! - **element** fields (`Element<V, E>` aliases) split into `name` holding the
//!   value and `_name` holding `id`/`extension`; lists become two parallel
//!   arrays padded with `null`;
//! - **plain** fields hold a primitive with no metadata half;
//! - **complex** fields hold a nested object (or array of objects) decoded by
//!   its own [`FhirJson`] implementation.
//!
//! A JSON `null` in any property is treated as if the property were absent.

use serde_json::{Map, Value};
use crate::element::Element;
use crate::error::DecodeError;
use crate::primitive::FhirPrimitive;

pub type JsonMap = Map<String, Value>;

/// A record or union that has a FHIR JSON representation.
pub trait FhirJson: Sized {
    fn from_json(value: Value) -> Result<Self, DecodeError>;

    fn to_json(&self) -> Value;

    /// The top-level document form. Records that are not resources still
    /// lead with their type name as `resourceType`.
    fn to_document(&self) -> Value {
        self.to_json()
    }
}

/// A choice group (`value[x]`) spread over sibling keys of its owner.
pub trait FhirChoice: Sized {
    /// The group name without the `[x]` suffix.
    const BASE_NAME: &'static str;
    /// Every sibling key, in declaration order.
    const KEYS: &'static [&'static str];

    /// Removes this group's key from the owner object, if present.
    fn take_from(map: &mut JsonMap) -> Result<Option<Self>, DecodeError>;

    /// Inserts the populated sibling key into the owner object.
    fn write_into(&self, map: &mut JsonMap);
}

impl<T: FhirJson> FhirJson for Box<T> {
    fn from_json(value: Value) -> Result<Self, DecodeError> {
        T::from_json(value).map(Box::new)
    }

    fn to_json(&self) -> Value {
        (**self).to_json()
    }

    fn to_document(&self) -> Value {
        (**self).to_document()
    }
}

fn take_non_null(map: &mut JsonMap, key: &str) -> Option<Value> {
    map.remove(key).filter(|v| !v.is_null())
}

fn extension_key(key: &str) -> String {
    format!("_{}", key)
}

/// Unwraps a JSON object or reports what was found instead.
pub fn expect_object(value: Value, type_name: &str) -> Result<JsonMap, DecodeError> {
    match value {
        Value::Object(map) => Ok(map),
        other => Err(DecodeError::mismatch(
            type_name,
            format!("expected an object, found {}", describe(&other)),
        )),
    }
}

fn expect_array(value: Value, key: &str) -> Result<Vec<Value>, DecodeError> {
    match value {
        Value::Array(items) => Ok(items),
        other => Err(DecodeError::mismatch(
            key,
            format!("expected an array, found {}", describe(&other)),
        )),
    }
}

fn describe(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Array(_) => "an array",
        Value::Object(_) => "an object",
    }
}

/// Consumes `resourceType` if present and checks it names `type_name`.
pub fn check_resource_type(map: &mut JsonMap, type_name: &str) -> Result<(), DecodeError> {
    match map.remove("resourceType") {
        None | Some(Value::Null) => Ok(()),
        Some(Value::String(found)) if found == type_name => Ok(()),
        Some(Value::String(found)) => Err(DecodeError::mismatch(
            "resourceType",
            format!("expected {}, found {}", type_name, found),
        )),
        Some(other) => Err(DecodeError::mismatch(
            "resourceType",
            format!("expected a string, found {}", describe(&other)),
        )),
    }
}

pub fn put_resource_type(map: &mut JsonMap, type_name: &str) {
    map.insert("resourceType".to_string(), Value::String(type_name.to_string()));
}

/// Puts `resourceType` ahead of the keys of an encoded record.
pub fn lead_with_resource_type(type_name: &str, body: Value) -> Value {
    let mut map = JsonMap::new();
    put_resource_type(&mut map, type_name);
    if let Value::Object(fields) = body {
        map.extend(fields);
    }
    Value::Object(map)
}

/// Fails on the first key left over after every declared field was taken.
pub fn reject_unknown_fields(map: &JsonMap, type_name: &str) -> Result<(), DecodeError> {
    match map.keys().next() {
        Some(field) => Err(DecodeError::UnknownField {
            type_name: type_name.to_string(),
            field: field.clone(),
        }),
        None => Ok(()),
    }
}

/// Turns an absent required field into [`DecodeError::MissingRequiredField`].
pub fn require<T>(value: Option<T>, key: &str) -> Result<T, DecodeError> {
    value.ok_or_else(|| DecodeError::MissingRequiredField(key.to_string()))
}

/// Returns the sibling keys of a choice group that carry a value or metadata.
pub fn present_choice_keys(map: &JsonMap, keys: &[&str]) -> Vec<String> {
    keys.iter()
        .filter(|key| {
            let has = |k: &str| map.get(k).is_some_and(|v| !v.is_null());
            has(key) || has(&extension_key(key))
        })
        .map(|key| key.to_string())
        .collect()
}

/// Rejects a choice group with more than one populated sibling.
pub fn ensure_single_choice(map: &JsonMap, base_name: &str, keys: &[&str]) -> Result<(), DecodeError> {
    let present = present_choice_keys(map, keys);
    if present.len() > 1 {
        return Err(DecodeError::AmbiguousChoice {
            field: base_name.to_string(),
            keys: present,
        });
    }
    Ok(())
}

/// Takes a choice group out of its owner after checking exclusivity.
pub fn take_choice<C: FhirChoice>(map: &mut JsonMap) -> Result<Option<C>, DecodeError> {
    ensure_single_choice(map, C::BASE_NAME, C::KEYS)?;
    C::take_from(map)
}

pub fn put_choice<C: FhirChoice>(map: &mut JsonMap, choice: Option<&C>) {
    if let Some(choice) = choice {
        choice.write_into(map);
    }
}

/// The wire name reported when a required choice group is absent.
pub fn choice_field_name<C: FhirChoice>() -> String {
    format!("{}[x]", C::BASE_NAME)
}

// --- element fields ---

pub fn take_element<V, E>(map: &mut JsonMap, key: &str) -> Result<Option<Element<V, E>>, DecodeError>
where
    V: FhirPrimitive,
    E: FhirJson,
{
    let value = take_non_null(map, key);
    let metadata = take_non_null(map, &extension_key(key));
    if value.is_none() && metadata.is_none() {
        return Ok(None);
    }
    let mut element = match metadata {
        Some(metadata) => Element::metadata_from_json(metadata, key)?,
        None => Element::default(),
    };
    if let Some(value) = value {
        element.value = Some(V::from_json(&value, key)?);
    }
    Ok(Some(element))
}

pub fn take_element_list<V, E>(
    map: &mut JsonMap,
    key: &str,
) -> Result<Option<Vec<Element<V, E>>>, DecodeError>
where
    V: FhirPrimitive,
    E: FhirJson,
{
    let values = take_non_null(map, key).map(|v| expect_array(v, key)).transpose()?;
    let ext_key = extension_key(key);
    let metadata = take_non_null(map, &ext_key)
        .map(|v| expect_array(v, &ext_key))
        .transpose()?;

    let len = match (&values, &metadata) {
        (None, None) => return Ok(None),
        (Some(values), Some(metadata)) if values.len() != metadata.len() => {
            return Err(DecodeError::mismatch(
                key,
                format!(
                    "'{}' has {} entries but '{}' has {}",
                    key,
                    values.len(),
                    ext_key,
                    metadata.len()
                ),
            ));
        }
        (Some(values), _) => values.len(),
        (None, Some(metadata)) => metadata.len(),
    };

    let mut values = values.map(|v| v.into_iter());
    let mut metadata = metadata.map(|m| m.into_iter());
    let mut elements = Vec::with_capacity(len);
    for _ in 0..len {
        let value = values.as_mut().and_then(Iterator::next).filter(|v| !v.is_null());
        let meta = metadata.as_mut().and_then(Iterator::next).filter(|v| !v.is_null());
        let mut element = match meta {
            Some(meta) => Element::metadata_from_json(meta, key)?,
            None => Element::default(),
        };
        if let Some(value) = value {
            element.value = Some(V::from_json(&value, key)?);
        }
        elements.push(element);
    }
    Ok(Some(elements))
}

pub fn put_element<V, E>(map: &mut JsonMap, key: &str, element: Option<&Element<V, E>>)
where
    V: FhirPrimitive,
    E: FhirJson,
{
    let Some(element) = element else {
        return;
    };
    if let Some(value) = &element.value {
        map.insert(key.to_string(), value.to_json());
    }
    // An empty element is written as absent.
    if element.has_metadata() {
        map.insert(extension_key(key), element.metadata_to_json());
    }
}

pub fn put_element_list<V, E>(map: &mut JsonMap, key: &str, elements: Option<&[Element<V, E>]>)
where
    V: FhirPrimitive,
    E: FhirJson,
{
    let Some(elements) = elements else {
        return;
    };
    let any_value = elements.iter().any(|e| e.value.is_some());
    let any_metadata = elements.iter().any(Element::has_metadata);

    if any_value || !any_metadata {
        let values = elements
            .iter()
            .map(|e| e.value.as_ref().map_or(Value::Null, FhirPrimitive::to_json))
            .collect();
        map.insert(key.to_string(), Value::Array(values));
    }
    if any_metadata {
        let metadata = elements
            .iter()
            .map(|e| {
                if e.has_metadata() {
                    e.metadata_to_json()
                } else {
                    Value::Null
                }
            })
            .collect();
        map.insert(extension_key(key), Value::Array(metadata));
    }
}

// --- plain fields ---

pub fn take_plain<T: FhirPrimitive>(map: &mut JsonMap, key: &str) -> Result<Option<T>, DecodeError> {
    take_non_null(map, key)
        .map(|value| T::from_json(&value, key))
        .transpose()
}

pub fn take_plain_list<T: FhirPrimitive>(
    map: &mut JsonMap,
    key: &str,
) -> Result<Option<Vec<T>>, DecodeError> {
    let Some(items) = take_non_null(map, key) else {
        return Ok(None);
    };
    expect_array(items, key)?
        .iter()
        .map(|item| T::from_json(item, key))
        .collect::<Result<Vec<_>, _>>()
        .map(Some)
}

pub fn put_plain<T: FhirPrimitive>(map: &mut JsonMap, key: &str, value: Option<&T>) {
    if let Some(value) = value {
        map.insert(key.to_string(), value.to_json());
    }
}

pub fn put_plain_list<T: FhirPrimitive>(map: &mut JsonMap, key: &str, values: Option<&[T]>) {
    if let Some(values) = values {
        map.insert(
            key.to_string(),
            Value::Array(values.iter().map(FhirPrimitive::to_json).collect()),
        );
    }
}

// --- complex fields ---

pub fn take_complex<T: FhirJson>(map: &mut JsonMap, key: &str) -> Result<Option<T>, DecodeError> {
    take_non_null(map, key).map(T::from_json).transpose()
}

pub fn take_complex_list<T: FhirJson>(
    map: &mut JsonMap,
    key: &str,
) -> Result<Option<Vec<T>>, DecodeError> {
    let Some(items) = take_non_null(map, key) else {
        return Ok(None);
    };
    expect_array(items, key)?
        .into_iter()
        .map(|item| {
            if item.is_null() {
                Err(DecodeError::mismatch(key, "null entry in array"))
            } else {
                T::from_json(item)
            }
        })
        .collect::<Result<Vec<_>, _>>()
        .map(Some)
}

pub fn put_complex<T: FhirJson>(map: &mut JsonMap, key: &str, value: Option<&T>) {
    if let Some(value) = value {
        map.insert(key.to_string(), value.to_json());
    }
}

pub fn put_complex_list<T: FhirJson>(map: &mut JsonMap, key: &str, values: Option<&[T]>) {
    if let Some(values) = values {
        map.insert(
            key.to_string(),
            Value::Array(values.iter().map(FhirJson::to_json).collect()),
        );
    }
}

#[cfg(all(test, feature = "R4"))]
mod tests {
    use super::*;
    use crate::r4::{Extension, ExtensionValue, Coding};
    use serde_json::json;

    fn object(value: Value) -> JsonMap {
        match value {
            Value::Object(map) => map,
            _ => panic!("fixture must be an object"),
        }
    }

    #[test]
    fn element_merges_value_and_metadata() {
        let mut map = object(json!({
            "birthDate": "1974-12-25",
            "_birthDate": {"extension": [{"url": "http://example.org/time", "valueDateTime": "1974-12-25T14:35:45-05:00"}]}
        }));
        let element: Option<crate::r4::Date> = take_element(&mut map, "birthDate").unwrap();
        let element = element.unwrap();
        assert_eq!(element.value.unwrap().original_string(), "1974-12-25");
        assert_eq!(element.extension.unwrap().len(), 1);
        assert!(map.is_empty());
    }

    #[test]
    fn element_list_pads_with_nulls() {
        let mut map = object(json!({
            "given": ["Peter", null],
            "_given": [null, {"id": "g2"}]
        }));
        let given: Vec<crate::r4::String> = take_element_list(&mut map, "given").unwrap().unwrap();
        assert_eq!(given.len(), 2);
        assert_eq!(given[0].value.as_deref(), Some("Peter"));
        assert_eq!(given[1].id.as_deref(), Some("g2"));
        assert!(given[1].value.is_none());

        let mut out = JsonMap::new();
        put_element_list(&mut out, "given", Some(given.as_slice()));
        assert_eq!(
            Value::Object(out),
            json!({"given": ["Peter", null], "_given": [null, {"id": "g2"}]})
        );
    }

    #[test]
    fn element_list_lengths_must_agree() {
        let mut map = object(json!({"given": ["a", "b"], "_given": [null]}));
        let result: Result<Option<Vec<crate::r4::String>>, _> = take_element_list(&mut map, "given");
        assert!(matches!(result, Err(DecodeError::TypeMismatch { .. })));
    }

    #[test]
    fn empty_lists_survive() {
        let mut map = object(json!({"coding": [], "given": []}));
        let coding: Option<Vec<Coding>> = take_complex_list(&mut map, "coding").unwrap();
        assert_eq!(coding, Some(vec![]));
        let given: Option<Vec<crate::r4::String>> = take_element_list(&mut map, "given").unwrap();
        assert_eq!(given, Some(vec![]));

        let mut out = JsonMap::new();
        put_complex_list(&mut out, "coding", coding.as_deref());
        put_element_list(&mut out, "given", given.as_deref());
        assert_eq!(Value::Object(out), json!({"coding": [], "given": []}));
    }

    #[test]
    fn empty_element_is_not_written() {
        let mut out = JsonMap::new();
        put_element::<_, Extension>(&mut out, "recorded", Some(&crate::Element::<bool, Extension>::default()));
        assert!(out.is_empty());

        let only_id = crate::Element::<bool, Extension> {
            id: Some("r1".to_string()),
            ..Default::default()
        };
        put_element(&mut out, "recorded", Some(&only_id));
        assert_eq!(Value::Object(out), json!({"_recorded": {"id": "r1"}}));
    }

    #[test]
    fn resource_type_leads_the_document() {
        let document = lead_with_resource_type("Period", json!({"start": "2021", "end": "2022"}));
        let keys: Vec<&str> = document.as_object().unwrap().keys().map(|k| k.as_str()).collect();
        assert_eq!(keys, vec!["resourceType", "start", "end"]);
    }

    #[test]
    fn null_means_absent() {
        let mut map = object(json!({"system": null}));
        let system: Option<crate::r4::Uri> = take_element(&mut map, "system").unwrap();
        assert!(system.is_none());
    }

    #[test]
    fn resource_type_must_match_when_present() {
        let mut map = object(json!({"resourceType": "Period"}));
        assert!(check_resource_type(&mut map, "Period").is_ok());
        assert!(map.is_empty());

        let mut map = object(json!({"resourceType": "Patient"}));
        assert!(matches!(
            check_resource_type(&mut map, "Period"),
            Err(DecodeError::TypeMismatch { .. })
        ));
    }

    #[test]
    fn choice_counts_extension_siblings() {
        let map = object(json!({"valueString": "a", "_valueBoolean": {"id": "x"}}));
        let err = ensure_single_choice(&map, "value", &["valueBoolean", "valueString"]).unwrap_err();
        match err {
            DecodeError::AmbiguousChoice { field, keys } => {
                assert_eq!(field, "value");
                assert_eq!(keys, vec!["valueBoolean".to_string(), "valueString".to_string()]);
            }
            other => panic!("unexpected error: {other:?}"),
        }
    }

    #[test]
    fn leftover_keys_are_rejected() {
        let mut map = object(json!({"url": "http://example.org", "valueCode": "x", "colour": "red"}));
        let err = Extension::from_json(Value::Object(map.clone())).unwrap_err();
        assert!(matches!(err, DecodeError::UnknownField { ref field, .. } if field == "colour"));
        map.remove("colour");
        let ext = Extension::from_json(Value::Object(map)).unwrap();
        assert_eq!(ext.value, Some(ExtensionValue::Code("x".into())));
    }
}
