use crate::r4::Extension;
use crate::{Element, PositiveInteger, PreciseDecimal, UnsignedInteger};
use crate::{PrecisionDate, PrecisionDateTime, PrecisionInstant, PrecisionTime};

/// FHIR primitive type for base64-encoded binary data
///
/// A stream of bytes, base64 encoded
///
/// See: [base64Binary](http://hl7.org/fhir/StructureDefinition/base64Binary)
pub type Base64Binary = Element<std::string::String, Extension>;

/// FHIR primitive type for boolean values
///
/// Value of "true" or "false"
///
/// See: [boolean](http://hl7.org/fhir/StructureDefinition/boolean)
pub type Boolean = Element<bool, Extension>;

/// FHIR primitive type for canonical URLs that reference FHIR resources
///
/// A URI that is a reference to a canonical URL on a FHIR resource
///
/// See: [canonical](http://hl7.org/fhir/StructureDefinition/canonical)
pub type Canonical = Element<std::string::String, Extension>;

/// FHIR primitive type for coded values
///
/// A string which has at least one character and no leading or trailing whitespace and where there is no whitespace other than single spaces in the contents
///
/// See: [code](http://hl7.org/fhir/StructureDefinition/code)
pub type Code = Element<std::string::String, Extension>;

/// FHIR primitive type for date values (year, month, day)
///
/// A date or partial date (e.g. just year or year + month). There is no time zone.
///
/// See: [date](http://hl7.org/fhir/StructureDefinition/date)
pub type Date = Element<PrecisionDate, Extension>;

/// FHIR primitive type for date and time values
///
/// A date, date-time or partial date (e.g. just year or year + month). If hours and minutes are specified, a time zone SHALL be populated.
///
/// See: [dateTime](http://hl7.org/fhir/StructureDefinition/dateTime)
pub type DateTime = Element<PrecisionDateTime, Extension>;

/// FHIR primitive type for decimal numbers
///
/// A rational number with implicit precision
///
/// See: [decimal](http://hl7.org/fhir/StructureDefinition/decimal)
pub type Decimal = Element<PreciseDecimal, Extension>;

/// FHIR primitive type for logical IDs within FHIR resources
///
/// Any combination of letters, numerals, "-" and ".", with a length limit of 64 characters.
///
/// See: [id](http://hl7.org/fhir/StructureDefinition/id)
pub type Id = Element<std::string::String, Extension>;

/// FHIR primitive type for instant in time values (to millisecond precision)
///
/// An instant in time - known at least to the second
///
/// See: [instant](http://hl7.org/fhir/StructureDefinition/instant)
pub type Instant = Element<PrecisionInstant, Extension>;

/// FHIR primitive type for integer values
///
/// A whole number
///
/// See: [integer](http://hl7.org/fhir/StructureDefinition/integer)
pub type Integer = Element<i32, Extension>;

/// FHIR primitive type for markdown-formatted text
///
/// A string that may contain Github Flavored Markdown syntax for optional processing by a mark down presentation engine
///
/// See: [markdown](http://hl7.org/fhir/StructureDefinition/markdown)
pub type Markdown = Element<std::string::String, Extension>;

/// FHIR primitive type for Object Identifiers (OIDs)
///
/// An OID represented as a URI
///
/// See: [oid](http://hl7.org/fhir/StructureDefinition/oid)
pub type Oid = Element<std::string::String, Extension>;

/// FHIR primitive type for positive integer values
///
/// An integer with a value that is positive (e.g. >0)
///
/// See: [positiveInt](http://hl7.org/fhir/StructureDefinition/positiveInt)
pub type PositiveInt = Element<PositiveInteger, Extension>;

/// FHIR primitive type for string values
///
/// A sequence of Unicode characters
///
/// See: [string](http://hl7.org/fhir/StructureDefinition/string)
pub type String = Element<std::string::String, Extension>;

/// FHIR primitive type for time of day values
///
/// A time during the day, with no date specified
///
/// See: [time](http://hl7.org/fhir/StructureDefinition/time)
pub type Time = Element<PrecisionTime, Extension>;

/// FHIR primitive type for unsigned integer values
///
/// An integer with a value that is not negative (e.g. \>= 0)
///
/// See: [unsignedInt](http://hl7.org/fhir/StructureDefinition/unsignedInt)
pub type UnsignedInt = Element<UnsignedInteger, Extension>;

/// FHIR primitive type for Uniform Resource Identifiers
///
/// String of characters used to identify a name or a resource
///
/// See: [uri](http://hl7.org/fhir/StructureDefinition/uri)
pub type Uri = Element<std::string::String, Extension>;

/// FHIR primitive type for Uniform Resource Locators
///
/// A URI that is a literal reference
///
/// See: [url](http://hl7.org/fhir/StructureDefinition/url)
pub type Url = Element<std::string::String, Extension>;

/// FHIR primitive type for Universally Unique Identifiers (UUIDs)
///
/// A UUID, represented as a URI
///
/// See: [uuid](http://hl7.org/fhir/StructureDefinition/uuid)
pub type Uuid = Element<std::string::String, Extension>;

/// FHIR primitive type for XHTML-formatted text with limited subset
///
/// XHTML
///
/// See: [xhtml](http://hl7.org/fhir/StructureDefinition/xhtml)
pub type Xhtml = Element<std::string::String, Extension>;
