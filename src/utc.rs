//! UTC time-of-day conversion for the raw `hhmmss[.sss]` fields.

use nom::{
    Parser,
    bytes::complete::take,
    character::complete::{char, digit1, u8},
    combinator::{all_consuming, opt},
    sequence::preceded,
};

use crate::{Error, Result, parsing::field_value};

/// Parses a `hhmmss[.sss]` field into a time of day.
///
/// Fractional seconds are kept to millisecond precision. Further digits are truncated.
///
/// ```rust
/// use nmea0183_decoder::utc::parse_utc_time;
///
/// let time = parse_utc_time("time", "184353.07")?;
/// assert_eq!(time, time::Time::from_hms_milli(18, 43, 53, 70).unwrap());
/// # Ok::<(), nmea0183_decoder::Error>(())
/// ```
pub fn parse_utc_time(field: &'static str, raw: &str) -> Result<time::Time> {
    let (hour, minute, second, fraction) = field_value(
        field,
        raw,
        (
            take(2u8).and_then(all_consuming(u8)),
            take(2u8).and_then(all_consuming(u8)),
            take(2u8).and_then(all_consuming(u8)),
            opt(preceded(char('.'), digit1)),
        ),
    )?;

    let millisecond = fraction.map_or(0, |digits: &str| {
        digits
            .bytes()
            .chain(std::iter::repeat(b'0'))
            .take(3)
            .fold(0u16, |millis, digit| millis * 10 + u16::from(digit - b'0'))
    });

    time::Time::from_hms_milli(hour, minute, second, millisecond)
        .map_err(|_| Error::invalid_field(field, raw))
}
