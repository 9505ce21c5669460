//! Primitive value types and their JSON lexical rules.
//!
//! [`FhirPrimitive`] is the leaf of the codec: every `Element<V, E>` value and
//! every plain string field goes through it. Wrong JSON shapes are reported as
//! [`DecodeError::TypeMismatch`]; well-shaped values that break the FHIR grammar
//! or range of their type are reported as
//! [`DecodeError::PrimitiveConstraintViolation`].

use std::fmt;
use serde_json::Value;
use crate::date_time::{PrecisionDate, PrecisionDateTime, PrecisionInstant, PrecisionTime};
use crate::error::DecodeError;
use crate::precise_decimal::PreciseDecimal;

/// Largest value a FHIR integer may hold.
pub const FHIR_INTEGER_MAX: i64 = i32::MAX as i64;

/// A value that can stand on its own in a JSON property.
pub trait FhirPrimitive: Sized {
    /// The FHIR primitive name used in error messages.
    const FHIR_NAME: &'static str;

    /// Decodes the value found under `field`.
    fn from_json(value: &Value, field: &str) -> Result<Self, DecodeError>;

    fn to_json(&self) -> Value;
}

fn shape_name(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "boolean",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}

fn wrong_shape<T: FhirPrimitive>(value: &Value, field: &str) -> DecodeError {
    DecodeError::mismatch(
        field,
        format!("expected {}, found {}", T::FHIR_NAME, shape_name(value)),
    )
}

/// Reads a whole number from a JSON number or a numeric string.
fn integer_text(value: &Value) -> Option<String> {
    match value {
        Value::Number(n) => Some(n.to_string()),
        Value::String(s) => Some(s.trim().to_string()),
        _ => None,
    }
}

fn parse_bounded<T: FhirPrimitive>(value: &Value, field: &str, min: i64) -> Result<i64, DecodeError> {
    let text = integer_text(value).ok_or_else(|| wrong_shape::<T>(value, field))?;
    let parsed: i64 = text
        .parse()
        .map_err(|_| DecodeError::constraint(field, format!("'{}' is not a valid {}", text, T::FHIR_NAME)))?;
    if parsed < min || parsed > FHIR_INTEGER_MAX {
        return Err(DecodeError::constraint(
            field,
            format!("{} is outside the range of {} ({}..={})", parsed, T::FHIR_NAME, min, FHIR_INTEGER_MAX),
        ));
    }
    Ok(parsed)
}

impl FhirPrimitive for bool {
    const FHIR_NAME: &'static str = "boolean";

    /// Also accepts the strings `"true"` and `"false"`.
    fn from_json(value: &Value, field: &str) -> Result<Self, DecodeError> {
        match value {
            Value::Bool(b) => Ok(*b),
            Value::String(s) => match s.as_str() {
                "true" => Ok(true),
                "false" => Ok(false),
                other => Err(DecodeError::constraint(field, format!("'{}' is not a boolean", other))),
            },
            other => Err(wrong_shape::<Self>(other, field)),
        }
    }

    fn to_json(&self) -> Value {
        Value::Bool(*self)
    }
}

impl FhirPrimitive for i32 {
    const FHIR_NAME: &'static str = "integer";

    fn from_json(value: &Value, field: &str) -> Result<Self, DecodeError> {
        let parsed = parse_bounded::<Self>(value, field, i32::MIN as i64)?;
        Ok(parsed as i32)
    }

    fn to_json(&self) -> Value {
        Value::from(*self)
    }
}

/// A FHIR `positiveInt`: a whole number from 1 to 2,147,483,647.
///
/// ```rust
/// use meridian_fhir::PositiveInteger;
///
/// assert_eq!(PositiveInteger::new(3).map(|p| p.get()), Some(3));
/// assert!(PositiveInteger::new(0).is_none());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct PositiveInteger(u32);

impl PositiveInteger {
    pub fn new(value: u32) -> Option<Self> {
        (value >= 1 && i64::from(value) <= FHIR_INTEGER_MAX).then_some(Self(value))
    }

    pub fn get(self) -> u32 {
        self.0
    }
}

/// A FHIR `unsignedInt`: a whole number from 0 to 2,147,483,647.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Default)]
pub struct UnsignedInteger(u32);

impl UnsignedInteger {
    pub fn new(value: u32) -> Option<Self> {
        (i64::from(value) <= FHIR_INTEGER_MAX).then_some(Self(value))
    }

    pub fn get(self) -> u32 {
        self.0
    }
}

impl fmt::Display for PositiveInteger {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl fmt::Display for UnsignedInteger {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl FhirPrimitive for PositiveInteger {
    const FHIR_NAME: &'static str = "positiveInt";

    fn from_json(value: &Value, field: &str) -> Result<Self, DecodeError> {
        parse_bounded::<Self>(value, field, 1).map(|v| Self(v as u32))
    }

    fn to_json(&self) -> Value {
        Value::from(self.0)
    }
}

impl FhirPrimitive for UnsignedInteger {
    const FHIR_NAME: &'static str = "unsignedInt";

    fn from_json(value: &Value, field: &str) -> Result<Self, DecodeError> {
        parse_bounded::<Self>(value, field, 0).map(|v| Self(v as u32))
    }

    fn to_json(&self) -> Value {
        Value::from(self.0)
    }
}

impl FhirPrimitive for PreciseDecimal {
    const FHIR_NAME: &'static str = "decimal";

    fn from_json(value: &Value, field: &str) -> Result<Self, DecodeError> {
        let text = match value {
            Value::Number(n) => n.to_string(),
            Value::String(s) => s.clone(),
            other => return Err(wrong_shape::<Self>(other, field)),
        };
        PreciseDecimal::parse(&text)
            .ok_or_else(|| DecodeError::constraint(field, format!("'{}' is not a valid decimal", text)))
    }

    /// Writes the original digits as a JSON number.
    fn to_json(&self) -> Value {
        match serde_json::from_str::<serde_json::Number>(self.original_string()) {
            Ok(number) => Value::Number(number),
            Err(_) => Value::String(self.original_string().to_string()),
        }
    }
}

impl FhirPrimitive for String {
    const FHIR_NAME: &'static str = "string";

    fn from_json(value: &Value, field: &str) -> Result<Self, DecodeError> {
        match value {
            Value::String(s) => Ok(s.clone()),
            other => Err(wrong_shape::<Self>(other, field)),
        }
    }

    fn to_json(&self) -> Value {
        Value::String(self.clone())
    }
}

macro_rules! text_primitive {
    ($ty:ty, $name:literal) => {
        impl FhirPrimitive for $ty {
            const FHIR_NAME: &'static str = $name;

            fn from_json(value: &Value, field: &str) -> Result<Self, DecodeError> {
                match value {
                    Value::String(s) => <$ty>::parse(s).ok_or_else(|| {
                        DecodeError::constraint(field, format!(concat!("'{}' is not a valid ", $name), s))
                    }),
                    other => Err(wrong_shape::<Self>(other, field)),
                }
            }

            fn to_json(&self) -> Value {
                Value::String(self.original_string().to_string())
            }
        }
    };
}

text_primitive!(PrecisionDate, "date");
text_primitive!(PrecisionDateTime, "dateTime");
text_primitive!(PrecisionInstant, "instant");
text_primitive!(PrecisionTime, "time");

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn boolean_accepts_literal_strings() {
        assert!(bool::from_json(&json!("true"), "flag").unwrap());
        assert!(!bool::from_json(&json!(false), "flag").unwrap());
        assert!(matches!(
            bool::from_json(&json!("yes"), "flag"),
            Err(DecodeError::PrimitiveConstraintViolation { .. })
        ));
        assert!(matches!(
            bool::from_json(&json!(1), "flag"),
            Err(DecodeError::TypeMismatch { .. })
        ));
    }

    #[test]
    fn integer_accepts_numeric_strings() {
        assert_eq!(i32::from_json(&json!("42"), "n").unwrap(), 42);
        assert_eq!(i32::from_json(&json!(-7), "n").unwrap(), -7);
        assert!(matches!(
            i32::from_json(&json!(1.5), "n"),
            Err(DecodeError::PrimitiveConstraintViolation { .. })
        ));
        assert!(matches!(
            i32::from_json(&json!(4_000_000_000u64), "n"),
            Err(DecodeError::PrimitiveConstraintViolation { .. })
        ));
    }

    #[test]
    fn positive_int_rejects_zero() {
        assert_eq!(PositiveInteger::from_json(&json!(1), "priority").unwrap().get(), 1);
        let err = PositiveInteger::from_json(&json!(0), "priority").unwrap_err();
        match err {
            DecodeError::PrimitiveConstraintViolation { field, .. } => assert_eq!(field, "priority"),
            other => panic!("unexpected error: {other:?}"),
        }
    }

    #[test]
    fn unsigned_int_accepts_zero_but_not_negatives() {
        assert_eq!(UnsignedInteger::from_json(&json!(0), "n").unwrap().get(), 0);
        assert!(matches!(
            UnsignedInteger::from_json(&json!(-1), "n"),
            Err(DecodeError::PrimitiveConstraintViolation { .. })
        ));
        assert!(UnsignedInteger::new(u32::MAX).is_none());
    }

    #[test]
    fn decimal_round_trips_digits() {
        let value: Value = serde_json::from_str("0.0100").unwrap();
        let decimal = PreciseDecimal::from_json(&value, "value").unwrap();
        assert_eq!(decimal.to_json().to_string(), "0.0100");
    }

    #[test]
    fn dates_report_grammar_violations() {
        assert!(PrecisionDate::from_json(&json!("2021-01-01"), "start").is_ok());
        assert!(matches!(
            PrecisionDateTime::from_json(&json!("01/01/2021"), "start"),
            Err(DecodeError::PrimitiveConstraintViolation { .. })
        ));
        assert!(matches!(
            PrecisionInstant::from_json(&json!(20210101), "recorded"),
            Err(DecodeError::TypeMismatch { .. })
        ));
    }
}
