//! # Parsing Utilities
//!
//! Low-level building blocks shared by every sentence decoder: the field splitter,
//! checksum truncation, and the adapter that runs a `nom` parser over a single field.

use nom::{
    IResult, Parser,
    branch::alt,
    bytes::complete::{tag, take_until},
    combinator::{all_consuming, rest},
    multi::separated_list1,
};

use crate::{Error, Result};

/// Splits `input` into the ordered sequence of substrings delimited by `separator`.
///
/// Empty fields produced by consecutive, leading or trailing separators are kept as
/// empty strings, so positional indices stay stable. The separator itself never appears
/// in the output. An input without any separator yields a single element holding the
/// whole input, and so does an empty separator.
///
/// # Examples
///
/// ```rust
/// use nmea0183_decoder::parsing::split;
///
/// assert_eq!(split("a,b,,d", ","), vec!["a", "b", "", "d"]);
/// assert_eq!(split("GPGGA", ","), vec!["GPGGA"]);
/// assert_eq!(split("scott>=tiger>=", ">="), vec!["scott", "tiger", ""]);
/// ```
pub fn split<'a>(input: &'a str, separator: &str) -> Vec<&'a str> {
    let field = alt((take_until(separator), rest));
    let result: IResult<&'a str, Vec<&'a str>> =
        separated_list1(tag(separator), field).parse(input);

    match result {
        Ok((_, fields)) => fields,
        // only an empty separator makes the list parser bail out
        Err(_) => vec![input],
    }
}

/// Truncates a field at the checksum marker `*`, discarding the checksum digits.
///
/// The checksum is not verified. A field without a marker is returned unchanged.
///
/// # Examples
///
/// ```rust
/// use nmea0183_decoder::parsing::strip_checksum;
///
/// assert_eq!(strip_checksum("2.1*39"), "2.1");
/// assert_eq!(strip_checksum("2.1"), "2.1");
/// assert_eq!(strip_checksum("*39"), "");
/// ```
pub fn strip_checksum(field: &str) -> &str {
    let result: IResult<&str, &str> = alt((take_until("*"), rest)).parse(field);
    result.map_or(field, |(_, value)| value)
}

/// Runs `parser` over a whole field.
///
/// The parser must consume the field entirely. Any failure, including leftover input,
/// is reported as [`Error::InvalidField`] carrying `field` and the raw value.
pub(crate) fn field_value<'a, O, P>(field: &'static str, raw: &'a str, parser: P) -> Result<O>
where
    P: Parser<&'a str, Output = O, Error = nom::error::Error<&'a str>>,
{
    all_consuming(parser)
        .parse(raw)
        .map(|(_, value)| value)
        .map_err(|_| Error::invalid_field(field, raw))
}
