use serde::{de, Deserialize, Deserializer, Serialize, Serializer};
use serde_json::{Map, Value};
use crate::error::DecodeError;
use crate::primitive::FhirPrimitive;
use crate::wire::{self, FhirJson};

/// Generic element container supporting FHIR's extension mechanism.
///
/// In FHIR, most primitive elements can be extended with additional metadata
/// through the `id` and `extension` fields. On the wire the value lives under
/// the property name and the metadata under the same name prefixed with `_`:
///
/// ```json
/// {
///   "status": "active",
///   "_status": { "id": "s1", "extension": [ ... ] }
/// }
/// ```
///
/// All three parts are optional, so an element can carry only an extension
/// (for example a data-absent-reason) and no value at all.
///
/// # Type Parameters
///
/// * `V` - The value type (e.g., `String`, `bool`, `PreciseDecimal`)
/// * `E` - The extension type (the generated `Extension` struct)
///
/// # Examples
///
/// ```rust
/// use meridian_fhir::r4::{Code, Extension};
/// use meridian_fhir::Element;
///
/// let status: Code = "active".into();
/// assert_eq!(status.value.as_deref(), Some("active"));
///
/// let absent: Code = Element {
///     id: Some("s1".to_string()),
///     ..Element::default()
/// };
/// assert!(absent.value.is_none());
/// # let _: Option<Vec<Extension>> = absent.extension;
/// ```
#[derive(Debug, PartialEq, Eq, Clone, Hash)]
pub struct Element<V, E> {
    /// Optional element identifier for referencing within the resource
    pub id: Option<String>,
    /// Optional extensions providing additional metadata
    pub extension: Option<Vec<E>>,
    /// The actual primitive value
    pub value: Option<V>,
}

impl<V, E> Default for Element<V, E> {
    fn default() -> Self {
        Self {
            id: None,
            extension: None,
            value: None,
        }
    }
}

impl<V, E> Element<V, E> {
    /// Creates an element holding only a value.
    pub fn new(value: V) -> Self {
        Self {
            value: Some(value),
            ..Self::default()
        }
    }

    /// Returns `true` if no value, id, or extensions are present.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.value.is_none() && self.id.is_none() && self.extension.is_none()
    }

    /// Returns `true` if the `_name` half of the wire form is needed.
    #[inline]
    pub fn has_metadata(&self) -> bool {
        self.id.is_some() || self.extension.is_some()
    }
}

impl<V, E> From<V> for Element<V, E> {
    fn from(value: V) -> Self {
        Element::new(value)
    }
}

impl<E> From<&str> for Element<String, E> {
    fn from(value: &str) -> Self {
        Element::new(value.to_string())
    }
}

impl<V, E: FhirJson> Element<V, E> {
    /// Decodes the `_name` object holding `id` and `extension`.
    pub(crate) fn metadata_from_json(value: Value, field: &str) -> Result<Self, DecodeError> {
        let mut map = wire::expect_object(value, field)?;
        let id = wire::take_plain(&mut map, "id")?;
        let extension = wire::take_complex_list(&mut map, "extension")?;
        wire::reject_unknown_fields(&map, "Element")?;
        Ok(Self {
            id,
            extension,
            value: None,
        })
    }

    /// Encodes `id` and `extension` as the `_name` object.
    pub(crate) fn metadata_to_json(&self) -> Value {
        let mut map = Map::new();
        wire::put_plain(&mut map, "id", self.id.as_ref());
        wire::put_complex_list(&mut map, "extension", self.extension.as_deref());
        Value::Object(map)
    }
}

/// Writes the bare value when there is no metadata, otherwise an object with
/// `id`, `extension` and `value`.
impl<V, E> Serialize for Element<V, E>
where
    V: FhirPrimitive,
    E: FhirJson,
{
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        if !self.has_metadata() {
            return match &self.value {
                Some(value) => value.to_json().serialize(serializer),
                None => serializer.serialize_none(),
            };
        }
        let mut object = match self.metadata_to_json() {
            Value::Object(map) => map,
            _ => Map::new(),
        };
        if let Some(value) = &self.value {
            object.insert("value".to_string(), value.to_json());
        }
        Value::Object(object).serialize(serializer)
    }
}

impl<'de, V, E> Deserialize<'de> for Element<V, E>
where
    V: FhirPrimitive,
    E: FhirJson,
{
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let json_value = Value::deserialize(deserializer)?;
        match json_value {
            Value::Null => Ok(Element::default()),
            Value::Object(mut map) => {
                let value = map.remove("value").filter(|v| !v.is_null());
                let mut element = Self::metadata_from_json(Value::Object(map), "value")
                    .map_err(de::Error::custom)?;
                element.value = value
                    .map(|v| V::from_json(&v, "value"))
                    .transpose()
                    .map_err(de::Error::custom)?;
                Ok(element)
            }
            other => V::from_json(&other, "value")
                .map(Element::new)
                .map_err(de::Error::custom),
        }
    }
}

#[cfg(all(test, feature = "R4"))]
mod tests {
    use super::*;
    use crate::r4::{Boolean, Code, Extension, ExtensionValue};
    use serde_json::json;

    #[test]
    fn bare_value_without_metadata() {
        let code: Code = "final".into();
        assert_eq!(serde_json::to_value(&code).unwrap(), json!("final"));
        let back: Code = serde_json::from_value(json!("final")).unwrap();
        assert_eq!(back, code);
    }

    #[test]
    fn object_form_with_metadata() {
        let flag = Boolean {
            id: Some("b1".to_string()),
            extension: Some(vec![Extension {
                url: "http://example.org/reason".to_string(),
                value: Some(ExtensionValue::Code("masked".into())),
                ..Default::default()
            }]),
            value: Some(true),
        };
        let json = serde_json::to_value(&flag).unwrap();
        assert_eq!(
            json,
            json!({
                "id": "b1",
                "extension": [{"url": "http://example.org/reason", "valueCode": "masked"}],
                "value": true
            })
        );
        let back: Boolean = serde_json::from_value(json).unwrap();
        assert_eq!(back, flag);
    }

    #[test]
    fn null_is_empty() {
        let empty: Code = serde_json::from_value(Value::Null).unwrap();
        assert!(empty.is_empty());
    }
}
