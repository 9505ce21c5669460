use std::fmt;
use std::sync::Arc;
use rust_decimal::Decimal;
use serde::{de, Deserialize, Deserializer, Serialize, Serializer};

/// High-precision decimal that remembers the exact text it was read from.
///
/// FHIR decimals carry their precision in their text: `12.30` and `12.3` are the
/// same number but not the same value on the wire. `PreciseDecimal` keeps the
/// parsed [`Decimal`] for arithmetic and comparison, and the original text for
/// encoding, so a decode/encode round trip reproduces the input digits.
///
/// # Examples
///
/// ```rust
/// use meridian_fhir::PreciseDecimal;
/// use rust_decimal::Decimal;
///
/// let precise = PreciseDecimal::parse("12.340").unwrap();
/// assert_eq!(precise.value(), Decimal::new(12340, 3));
/// assert_eq!(precise.original_string(), "12.340");
///
/// // Equality is numeric
/// assert_eq!(precise, PreciseDecimal::parse("12.34").unwrap());
/// ```
#[derive(Debug, Clone)]
pub struct PreciseDecimal {
    value: Decimal,
    original_string: Arc<str>,
}

impl PartialEq for PreciseDecimal {
    fn eq(&self, other: &Self) -> bool {
        self.value == other.value
    }
}

impl Eq for PreciseDecimal {}

impl PartialOrd for PreciseDecimal {
    fn partial_cmp(&self, other: &Self) -> Option<std::cmp::Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for PreciseDecimal {
    fn cmp(&self, other: &Self) -> std::cmp::Ordering {
        self.value.cmp(&other.value)
    }
}

impl PreciseDecimal {
    /// Parses FHIR decimal text, keeping the text as given.
    ///
    /// Accepts the JSON number grammar (`-?(0|[1-9][0-9]*)(\.[0-9]+)?([eE][+-]?[0-9]+)?`).
    /// Returns `None` for anything else, including values outside the range of
    /// [`Decimal`].
    pub fn parse(text: &str) -> Option<Self> {
        if !is_decimal_lexical(text) {
            return None;
        }
        let value = parse_decimal_string(text)?;
        Some(Self {
            value,
            original_string: Arc::from(text),
        })
    }

    /// Returns the numeric value.
    pub fn value(&self) -> Decimal {
        self.value
    }

    /// Returns the text this decimal encodes to.
    pub fn original_string(&self) -> &str {
        &self.original_string
    }
}

/// Parses decimal text, normalising an upper-case exponent marker first.
fn parse_decimal_string(s: &str) -> Option<Decimal> {
    let normalized = s.replace('E', "e");

    if normalized.contains('e') {
        Decimal::from_scientific(&normalized).ok()
    } else {
        normalized.parse::<Decimal>().ok()
    }
}

fn is_decimal_lexical(text: &str) -> bool {
    let bytes = text.as_bytes();
    let mut i = 0;
    if bytes.get(i) == Some(&b'-') {
        i += 1;
    }
    let int_start = i;
    while i < bytes.len() && bytes[i].is_ascii_digit() {
        i += 1;
    }
    let int_len = i - int_start;
    if int_len == 0 || (int_len > 1 && bytes[int_start] == b'0') {
        return false;
    }
    if bytes.get(i) == Some(&b'.') {
        i += 1;
        let frac_start = i;
        while i < bytes.len() && bytes[i].is_ascii_digit() {
            i += 1;
        }
        if i == frac_start {
            return false;
        }
    }
    if matches!(bytes.get(i), Some(b'e') | Some(b'E')) {
        i += 1;
        if matches!(bytes.get(i), Some(b'+') | Some(b'-')) {
            i += 1;
        }
        let exp_start = i;
        while i < bytes.len() && bytes[i].is_ascii_digit() {
            i += 1;
        }
        if i == exp_start {
            return false;
        }
    }
    i == bytes.len()
}

/// Derives the text from the decimal's `Display` output.
impl From<Decimal> for PreciseDecimal {
    fn from(value: Decimal) -> Self {
        Self {
            original_string: Arc::from(value.to_string()),
            value,
        }
    }
}

impl fmt::Display for PreciseDecimal {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.original_string)
    }
}

/// Writes the original text as a raw JSON number.
impl Serialize for PreciseDecimal {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        match serde_json::value::RawValue::from_string(self.original_string.to_string()) {
            Ok(raw_value) => raw_value.serialize(serializer),
            Err(e) => Err(serde::ser::Error::custom(format!(
                "Failed to serialize PreciseDecimal '{}': {}",
                self.original_string, e
            ))),
        }
    }
}

/// Reads a JSON number or a numeric string.
impl<'de> Deserialize<'de> for PreciseDecimal {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let json_value = serde_json::Value::deserialize(deserializer)?;

        let text = match json_value {
            serde_json::Value::Number(n) => n.to_string(),
            serde_json::Value::String(s) => s,
            serde_json::Value::Bool(b) => {
                return Err(de::Error::invalid_type(de::Unexpected::Bool(b), &"a decimal"));
            }
            serde_json::Value::Array(_) => {
                return Err(de::Error::invalid_type(de::Unexpected::Seq, &"a decimal"));
            }
            serde_json::Value::Object(_) => {
                return Err(de::Error::invalid_type(de::Unexpected::Map, &"a decimal"));
            }
            serde_json::Value::Null => {
                return Err(de::Error::invalid_type(de::Unexpected::Unit, &"a decimal"));
            }
        };
        PreciseDecimal::parse(&text)
            .ok_or_else(|| de::Error::custom(format!("Invalid FHIR decimal: {}", text)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    #[test]
    fn keeps_trailing_zeros() {
        let d = PreciseDecimal::parse("1.50").unwrap();
        assert_eq!(d.value(), dec!(1.5));
        assert_eq!(d.original_string(), "1.50");
        assert_eq!(serde_json::to_string(&d).unwrap(), "1.50");
    }

    #[test]
    fn accepts_exponents() {
        let d = PreciseDecimal::parse("1.23E2").unwrap();
        assert_eq!(d.value(), dec!(123));
        assert_eq!(d.original_string(), "1.23E2");
    }

    #[test]
    fn rejects_non_json_numbers() {
        for text in ["", "-", "01", "1.", ".5", "1e", "abc", "1.0.0", "+1"] {
            assert!(PreciseDecimal::parse(text).is_none(), "{text} should not parse");
        }
    }

    #[test]
    fn orders_numerically() {
        let a = PreciseDecimal::parse("2.0").unwrap();
        let b = PreciseDecimal::parse("10").unwrap();
        assert!(a < b);
        assert_eq!(PreciseDecimal::from(dec!(2.00)), a);
    }

    #[test]
    fn serde_reads_numbers_and_strings() {
        let from_number: PreciseDecimal = serde_json::from_str("3.140").unwrap();
        assert_eq!(from_number.original_string(), "3.140");
        let from_string: PreciseDecimal = serde_json::from_str("\"3.140\"").unwrap();
        assert_eq!(from_string, from_number);
        assert!(serde_json::from_str::<PreciseDecimal>("true").is_err());
    }
}
