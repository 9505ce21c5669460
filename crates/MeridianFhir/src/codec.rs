//! Entry points for reading and writing FHIR JSON.
//!
//! ```rust
//! # #[cfg(feature = "R4")]
//! # {
//! use meridian_fhir::r4::Period;
//! use meridian_fhir::{decode_str, encode_string};
//!
//! let period: Period = decode_str(r#"{"start":"2021-01-01","end":"2021-02-01"}"#).unwrap();
//! assert_eq!(
//!     encode_string(&period),
//!     r#"{"resourceType":"Period","start":"2021-01-01","end":"2021-02-01"}"#
//! );
//! # }
//! ```

use std::any::type_name;
use serde_json::Value;
use tracing::{debug, trace};
use crate::error::DecodeError;
use crate::wire::FhirJson;

/// Decodes a parsed JSON value into `T`.
pub fn decode<T: FhirJson>(value: Value) -> Result<T, DecodeError> {
    trace!(target_type = type_name::<T>(), "decoding FHIR JSON value");
    T::from_json(value).inspect_err(|e| {
        debug!(target_type = type_name::<T>(), error = %e, "decode failed");
    })
}

/// Parses and decodes JSON text.
pub fn decode_str<T: FhirJson>(text: &str) -> Result<T, DecodeError> {
    let value: Value = serde_json::from_str(text)?;
    decode(value)
}

/// Parses and decodes JSON bytes.
pub fn decode_slice<T: FhirJson>(bytes: &[u8]) -> Result<T, DecodeError> {
    let value: Value = serde_json::from_slice(bytes)?;
    decode(value)
}

/// Encodes a record as a standalone document.
///
/// The result always starts with `resourceType`. For a data type or backbone
/// element it holds the type name, e.g. `"Period"`. Records nested inside the
/// document never carry one.
pub fn encode<T: FhirJson>(record: &T) -> Value {
    record.to_document()
}

/// Encodes to compact JSON text.
pub fn encode_string<T: FhirJson>(record: &T) -> String {
    encode(record).to_string()
}

/// Encodes to indented JSON text.
pub fn encode_string_pretty<T: FhirJson>(record: &T) -> String {
    format!("{:#}", encode(record))
}

#[cfg(all(test, feature = "R4"))]
mod tests {
    use super::*;
    use crate::r4::{Coding, Patient};

    #[test]
    fn syntax_errors_surface_as_json_errors() {
        let err = decode_str::<Coding>("{\"code\":").unwrap_err();
        assert!(matches!(err, DecodeError::Json(_)));
    }

    #[test]
    fn slice_and_str_agree() {
        let text = r#"{"system":"http://loinc.org","code":"8867-4"}"#;
        let a: Coding = decode_str(text).unwrap();
        let b: Coding = decode_slice(text.as_bytes()).unwrap();
        assert_eq!(a, b);
        assert_eq!(
            encode_string(&a),
            r#"{"resourceType":"Coding","system":"http://loinc.org","code":"8867-4"}"#
        );
    }

    #[test]
    fn nested_data_types_omit_resource_type() {
        let patient: Patient = decode_str(
            r#"{"resourceType":"Patient","identifier":[{"period":{"start":"2001"}}]}"#,
        )
        .unwrap();
        let encoded = encode(&patient);
        assert_eq!(encoded["resourceType"], "Patient");
        assert!(encoded["identifier"][0].get("resourceType").is_none());
        assert!(encoded["identifier"][0]["period"].get("resourceType").is_none());
    }

    #[test]
    fn pretty_output_parses_back() {
        let patient = Patient {
            id: Some("pretty".into()),
            active: Some(true.into()),
            ..Default::default()
        };
        let pretty = encode_string_pretty(&patient);
        assert!(pretty.contains('\n'));
        let back: Patient = decode_str(&pretty).unwrap();
        assert_eq!(back, patient);
    }
}
