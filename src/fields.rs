//! # Sentence Fields
//!
//! [`Fields`] holds the comma-split view of one sentence and guards every positional
//! access. [`FromField`] and [`NmeaField`] convert the raw fields into typed values.

use crate::{
    Error, Result,
    parsing::{field_value, split},
};

/// The comma-delimited fields of a single sentence.
///
/// Field 0 is the sentence ID (e.g. `$GPGGA`). Every access is bounds-checked, so a short
/// sentence surfaces as [`Error::MalformedSentence`] instead of a panic.
///
/// # Examples
///
/// ```rust
/// use nmea0183_decoder::Fields;
///
/// let fields = Fields::split("$GPGLL,1929.045,S,02410.506,E,184353.07,A*33");
/// assert_eq!(fields.len(), 7);
/// assert_eq!(fields.sentence_id(), "$GPGLL");
/// assert_eq!(fields.get(2), Ok("S"));
/// assert!(fields.get(7).is_err());
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct Fields<'a> {
    fields: Vec<&'a str>,
}

impl<'a> Fields<'a> {
    /// Splits a sentence on `,`.
    pub fn split(sentence: &'a str) -> Self {
        Self {
            fields: split(sentence, ","),
        }
    }

    /// Number of fields, sentence ID included.
    pub fn len(&self) -> usize {
        self.fields.len()
    }

    /// Always `false`: splitting yields at least one field.
    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }

    /// The leading talker and sentence ID field.
    pub fn sentence_id(&self) -> &'a str {
        self.fields.first().copied().unwrap_or_default()
    }

    /// Fails with [`Error::MalformedSentence`] unless at least `required` fields are present.
    pub fn require(&self, required: usize) -> Result<()> {
        if self.fields.len() < required {
            return Err(Error::MalformedSentence {
                required,
                found: self.fields.len(),
            });
        }

        Ok(())
    }

    /// Returns the raw field at `index`.
    pub fn get(&self, index: usize) -> Result<&'a str> {
        self.fields
            .get(index)
            .copied()
            .ok_or(Error::MalformedSentence {
                required: index + 1,
                found: self.fields.len(),
            })
    }

    /// All fields in transmission order.
    pub fn as_slice(&self) -> &[&'a str] {
        &self.fields
    }
}

/// Conversion of a single raw field into a typed value.
///
/// Implementations must either accept the field as a whole or fail with
/// [`Error::InvalidField`] naming `field` and carrying the raw value.
///
/// ```rust
/// use nmea0183_decoder::{Error, FromField};
///
/// assert_eq!(u8::from_field("satellite_count", "10"), Ok(10));
/// assert_eq!(<Option<u8>>::from_field("satellite_id", ""), Ok(None));
/// assert!(matches!(
///     u8::from_field("satellite_count", "1O"),
///     Err(Error::InvalidField { field: "satellite_count", .. })
/// ));
/// ```
pub trait FromField: Sized {
    /// Converts `raw`, reporting failures against `field`.
    fn from_field(field: &'static str, raw: &str) -> Result<Self>;
}

/// A value decoded from one or more consecutive fields of a sentence.
///
/// Every [`FromField`] type is an `NmeaField` of width 1. Composite values such as
/// coordinates span several fields and implement this trait directly.
pub trait NmeaField: Sized {
    /// Number of consecutive fields the value occupies.
    const WIDTH: usize = 1;

    /// Decodes the value starting at `index`.
    fn decode_at(fields: &Fields<'_>, index: usize, field: &'static str) -> Result<Self>;
}

impl<T: FromField> NmeaField for T {
    fn decode_at(fields: &Fields<'_>, index: usize, field: &'static str) -> Result<Self> {
        T::from_field(field, fields.get(index)?)
    }
}

impl FromField for String {
    fn from_field(_: &'static str, raw: &str) -> Result<Self> {
        Ok(raw.to_owned())
    }
}

impl<T: FromField> FromField for Option<T> {
    fn from_field(field: &'static str, raw: &str) -> Result<Self> {
        if raw.is_empty() {
            return Ok(None);
        }

        T::from_field(field, raw).map(Some)
    }
}

macro_rules! impl_uints_field {
    ($($t:tt),*) => ($(
        impl FromField for $t {
            fn from_field(field: &'static str, raw: &str) -> Result<Self> {
                field_value(
                    field,
                    raw,
                    nom::character::complete::$t::<&str, nom::error::Error<&str>>,
                )
            }
        }
    )*)
}

impl_uints_field!(u8, u16, u32);

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fields_bounds() {
        let fields = Fields::split("$GPGGA,1,2");
        assert_eq!(fields.len(), 3);
        assert!(!fields.is_empty());
        assert_eq!(fields.get(0), Ok("$GPGGA"));
        assert_eq!(fields.get(2), Ok("2"));
        assert_eq!(
            fields.get(3),
            Err(Error::MalformedSentence {
                required: 4,
                found: 3
            })
        );
        assert_eq!(fields.require(3), Ok(()));
        assert_eq!(
            fields.require(10),
            Err(Error::MalformedSentence {
                required: 10,
                found: 3
            })
        );
    }

    #[test]
    fn test_fields_of_empty_input() {
        let fields = Fields::split("");
        assert_eq!(fields.len(), 1);
        assert_eq!(fields.sentence_id(), "");
        assert_eq!(fields.as_slice(), &[""]);
    }

    #[test]
    fn test_uints() {
        assert_eq!(u8::from_field("count", "0"), Ok(0));
        assert_eq!(u8::from_field("count", "08"), Ok(8));
        assert_eq!(u8::from_field("count", "255"), Ok(255));
        assert_eq!(u16::from_field("count", "65535"), Ok(65535));
        assert_eq!(u32::from_field("count", "4294967295"), Ok(u32::MAX));

        for raw in ["", "256", "-1", "+1", "1.0", "A8", " 8", "8 "] {
            assert_eq!(
                u8::from_field("count", raw),
                Err(Error::invalid_field("count", raw)),
                "Failed: {raw:?}"
            );
        }
    }

    #[test]
    fn test_option() {
        assert_eq!(<Option<u8>>::from_field("id", ""), Ok(None));
        assert_eq!(<Option<u8>>::from_field("id", "24"), Ok(Some(24)));
        assert_eq!(
            <Option<u8>>::from_field("id", "x"),
            Err(Error::invalid_field("id", "x"))
        );
    }

    #[test]
    fn test_string_is_verbatim() {
        assert_eq!(String::from_field("hdop", ""), Ok(String::new()));
        assert_eq!(String::from_field("hdop", "1.2"), Ok("1.2".to_owned()));
    }

    #[test]
    fn test_decode_at() {
        let fields = Fields::split("$GPGSA,A,3,04");
        assert_eq!(u8::decode_at(&fields, 3, "satellite_id"), Ok(4));
        assert_eq!(
            String::decode_at(&fields, 4, "pdop"),
            Err(Error::MalformedSentence {
                required: 5,
                found: 4
            })
        );
        assert_eq!(String::decode_at(&fields, 1, "mode"), Ok("A".to_owned()));
    }
}
