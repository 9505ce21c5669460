use thiserror::Error;

/// Errors raised while decoding FHIR JSON into typed records.
///
/// Every variant aborts the record being decoded and is returned to the caller
/// exactly as raised by the innermost record. Encoding a constructed record never
/// fails, so there is no encode counterpart.
#[derive(Debug, Error)]
pub enum DecodeError {
    /// A `resourceType` discriminator named no compiled resource.
    ///
    /// Raised by the registry lookup and by any "any Resource" slot, such as
    /// `contained` or `Bundle.entry.resource`.
    #[error("Unknown resource type: {0}")]
    UnknownResourceType(String),

    /// A field with a minimum cardinality of one was absent (or `null`).
    ///
    /// Carries the wire name of the field. Choice groups are reported as
    /// `<base>[x]`, for example `medication[x]`.
    #[error("Missing required field: {0}")]
    MissingRequiredField(String),

    /// A value had the wrong JSON shape for its declared type, or a discriminator
    /// disagreed with the type being decoded.
    #[error("Type mismatch for '{field}': {message}")]
    TypeMismatch { field: String, message: String },

    /// A value had the right JSON shape but broke the lexical or range rules of
    /// its primitive type.
    #[error("Invalid value for '{field}': {message}")]
    PrimitiveConstraintViolation { field: String, message: String },

    /// More than one sibling key of a single choice group was present.
    #[error("Ambiguous choice for '{field}[x]': found {keys:?}")]
    AmbiguousChoice { field: String, keys: Vec<String> },

    /// A key that the record does not declare.
    #[error("Unknown field '{field}' in {type_name}")]
    UnknownField { type_name: String, field: String },

    /// The input text was not well-formed JSON.
    #[error("JSON syntax error: {0}")]
    Json(#[from] serde_json::Error),
}

impl DecodeError {
    pub(crate) fn mismatch(field: &str, message: impl Into<String>) -> Self {
        DecodeError::TypeMismatch {
            field: field.to_string(),
            message: message.into(),
        }
    }

    pub(crate) fn constraint(field: &str, message: impl Into<String>) -> Self {
        DecodeError::PrimitiveConstraintViolation {
            field: field.to_string(),
            message: message.into(),
        }
    }

    /// Returns the wire name of the field the error refers to, if any.
    pub fn field(&self) -> Option<&str> {
        match self {
            DecodeError::MissingRequiredField(field) => Some(field),
            DecodeError::TypeMismatch { field, .. }
            | DecodeError::PrimitiveConstraintViolation { field, .. }
            | DecodeError::AmbiguousChoice { field, .. }
            | DecodeError::UnknownField { field, .. } => Some(field),
            DecodeError::UnknownResourceType(_) | DecodeError::Json(_) => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn messages_name_the_offending_field() {
        let err = DecodeError::MissingRequiredField("recorded".to_string());
        assert_eq!(err.to_string(), "Missing required field: recorded");
        assert_eq!(err.field(), Some("recorded"));

        let err = DecodeError::AmbiguousChoice {
            field: "value".to_string(),
            keys: vec!["valueString".to_string(), "valueBoolean".to_string()],
        };
        assert!(err.to_string().contains("value[x]"));
        assert_eq!(err.field(), Some("value"));
    }

    #[test]
    fn syntax_errors_convert_from_serde_json() {
        let parse = serde_json::from_str::<serde_json::Value>("{").unwrap_err();
        let err: DecodeError = parse.into();
        assert!(matches!(err, DecodeError::Json(_)));
        assert_eq!(err.field(), None);
    }
}
