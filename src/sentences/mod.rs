mod gga;
mod gll;
mod gsa;

pub use gga::GGA;
pub use gll::GLL;
pub use gsa::GSA;

use std::{fmt, str::FromStr};

use nom::{
    IResult, Parser,
    bytes::complete::take,
    character::complete::{char, u8},
    combinator::{all_consuming, opt},
    number::complete::double,
    sequence::preceded,
};

use crate::{
    Error, Fields, FromField, NmeaField, Result,
    parsing::field_value,
};

/// A record that can be decoded from the comma-split fields of a sentence.
///
/// Implementors read their fields at fixed positions. [`FromFields::FIELD_COUNT`] is the
/// minimum number of fields (sentence ID included) the record needs, and
/// [`FromFields::from_fields`] must check it before touching any field.
///
/// The trait can be derived with `#[derive(FromFields)]`, placing every struct field with
/// `#[nmea(index = N)]` and optionally renaming it in errors with `#[nmea(name = "...")]`.
///
/// # Example
///
/// ```rust
/// use nmea0183_decoder::{FromFields, GGA, PositionFixIndicator};
///
/// let gga = GGA::decode("$GPGGA,002153.000,3342.6618,N,11751.3858,W,1,10,1.2,27.0,M,-34.2,M,,0000*5E")?;
/// assert_eq!(gga.fix_indicator, PositionFixIndicator::GpsSps);
/// assert_eq!(GGA::FIELD_COUNT, 10);
/// # Ok::<(), nmea0183_decoder::Error>(())
/// ```
pub trait FromFields: Sized {
    /// Minimum number of fields, sentence ID included.
    const FIELD_COUNT: usize;

    /// Builds the record from already split fields.
    fn from_fields(fields: &Fields<'_>) -> Result<Self>;

    /// Splits `sentence` on `,` and builds the record.
    fn decode(sentence: &str) -> Result<Self> {
        Self::from_fields(&Fields::split(sentence))
    }
}

/// The sentence types this crate knows how to decode.
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SentenceType {
    /// Global Positioning System Fix Data
    GGA,
    /// Geographic Position - Latitude/Longitude
    GLL,
    /// GNSS DOP and active satellites
    GSA,
}

impl SentenceType {
    /// The three-letter sentence type identifier.
    pub const fn id(&self) -> &'static str {
        match self {
            Self::GGA => GGA::ID,
            Self::GLL => GLL::ID,
            Self::GSA => GSA::ID,
        }
    }

    /// Derives the sentence type from a sentence ID field such as `$GPGGA`.
    ///
    /// The leading `$` is optional. The ID must consist of a two-character talker
    /// followed by a three-character sentence type.
    ///
    /// ```rust
    /// use nmea0183_decoder::SentenceType;
    ///
    /// assert_eq!(SentenceType::from_sentence_id("$GNGSA"), Ok(SentenceType::GSA));
    /// assert_eq!(SentenceType::from_sentence_id("GPGLL"), Ok(SentenceType::GLL));
    /// assert!(SentenceType::from_sentence_id("$GPRMC").is_err());
    /// ```
    pub fn from_sentence_id(id: &str) -> Result<Self> {
        let result: IResult<&str, &str> =
            all_consuming(preceded((opt(char('$')), take(2u8)), take(3u8))).parse(id);

        match result {
            Ok((_, sentence_type)) => Self::from_str(sentence_type)
                .map_err(|_| Error::UnsupportedSentenceType(id.to_owned())),
            Err(_) => Err(Error::UnsupportedSentenceType(id.to_owned())),
        }
    }
}

impl FromStr for SentenceType {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        match s {
            GGA::ID => Ok(Self::GGA),
            GLL::ID => Ok(Self::GLL),
            GSA::ID => Ok(Self::GSA),
            _ => Err(Error::UnsupportedSentenceType(s.to_owned())),
        }
    }
}

impl fmt::Display for SentenceType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.id())
    }
}

/// A decoded sentence of any supported type.
///
/// Each variant wraps the strongly-typed record of one sentence type. The decoder is
/// picked either by an explicit [`SentenceType`] ([`NmeaSentence::decode_as`]) or from
/// the sentence ID field ([`NmeaSentence::decode`]).
///
/// ## Example Usage
///
/// ```rust
/// use nmea0183_decoder::{NmeaSentence, SentenceType};
///
/// let sentence = NmeaSentence::decode("$GPGSA,A,3,04,05,,09,12,,,24,,,,,2.5,1.3,2.1*39")?;
/// assert_eq!(sentence.sentence_type(), SentenceType::GSA);
///
/// match sentence {
///     NmeaSentence::GSA(gsa) => assert_eq!(gsa.satellite_ids, [4, 5, 9, 12, 24]),
///     _ => unreachable!(),
/// }
///
/// // Unknown sentence types are reported rather than silently skipped
/// assert!(NmeaSentence::decode("$GPRMC,123519,A").is_err());
/// # Ok::<(), nmea0183_decoder::Error>(())
/// ```
///
/// ## Supported Sentence Types
///
/// | Variant      | Sentence Type                            | Description                  |
/// |--------------|------------------------------------------|------------------------------|
/// | GGA([`GGA`]) | Global Positioning System Fix Data       | GPS position and fix quality |
/// | GLL([`GLL`]) | Geographic Position - Latitude/Longitude | Latitude/longitude with time |
/// | GSA([`GSA`]) | GNSS DOP and active satellites           | Satellites used and DOP      |
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[derive(Debug, Clone, PartialEq)]
pub enum NmeaSentence {
    /// Global Positioning System Fix Data
    GGA(GGA),
    /// Geographic Position - Latitude/Longitude
    GLL(GLL),
    /// GNSS DOP and active satellites
    GSA(GSA),
}

impl NmeaSentence {
    /// Decodes a sentence, selecting the decoder from its sentence ID field.
    pub fn decode(sentence: &str) -> Result<Self> {
        let fields = Fields::split(sentence);
        let sentence_type = SentenceType::from_sentence_id(fields.sentence_id())?;

        Self::from_fields(sentence_type, &fields)
    }

    /// Decodes a sentence as `sentence_type`.
    ///
    /// The sentence ID field is not inspected.
    pub fn decode_as(sentence_type: SentenceType, sentence: &str) -> Result<Self> {
        Self::from_fields(sentence_type, &Fields::split(sentence))
    }

    /// The type of the wrapped record.
    pub fn sentence_type(&self) -> SentenceType {
        match self {
            Self::GGA(_) => SentenceType::GGA,
            Self::GLL(_) => SentenceType::GLL,
            Self::GSA(_) => SentenceType::GSA,
        }
    }

    fn from_fields(sentence_type: SentenceType, fields: &Fields<'_>) -> Result<Self> {
        match sentence_type {
            SentenceType::GGA => GGA::from_fields(fields).map(Self::GGA),
            SentenceType::GLL => GLL::from_fields(fields).map(Self::GLL),
            SentenceType::GSA => GSA::from_fields(fields).map(Self::GSA),
        }
    }
}

macro_rules! field_enum {
    (
        $(#[$meta:meta])*
        $vis:vis enum $name:ident {
            $(
                $(#[$variant_meta:meta])*
                $token:literal => $variant:ident
            ),* $(,)?
        }
    ) => {
        $(#[$meta])*
        #[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
        $vis enum $name {
            $(
                $(#[$variant_meta])*
                $variant,
            )*
        }

        impl $name {
            /// The token this value is transmitted as.
            pub const fn token(&self) -> &'static str {
                match self {
                    $(Self::$variant => $token,)*
                }
            }
        }

        impl FromField for $name {
            fn from_field(field: &'static str, raw: &str) -> Result<Self> {
                field_value(
                    field,
                    raw,
                    nom::branch::alt(($(
                        nom::combinator::value(Self::$variant, nom::bytes::complete::tag($token)),
                    )*)),
                )
            }
        }
    };
}

field_enum! {
    /// Northern or southern hemisphere
    pub enum VerticalHemisphere {
        /// N - North
        "N" => North,
        /// S - South
        "S" => South,
    }
}

field_enum! {
    /// Eastern or western hemisphere
    pub enum HorizontalHemisphere {
        /// E - East
        "E" => East,
        /// W - West
        "W" => West,
    }
}

field_enum! {
    /// Position Fix Indicator
    ///
    /// Variants are declared in code order, so the discriminant is the transmitted digit.
    pub enum PositionFixIndicator {
        /// 0 - Fix not available or invalid
        "0" => NoFix,
        /// 1 - GPS SPS mode, fix valid
        "1" => GpsSps,
        /// 2 - Differential GPS, SPS mode, fix valid
        "2" => DifferentialGps,
        /// 3 - Not supported
        "3" => Reserved3,
        /// 4 - Not supported
        "4" => Reserved4,
        /// 5 - Not supported
        "5" => Reserved5,
        /// 6 - Dead reckoning mode, fix valid
        "6" => DeadReckoning,
    }
}

impl PositionFixIndicator {
    /// The ordinal code, 0 to 6.
    pub const fn code(&self) -> u8 {
        *self as u8
    }

    /// Whether the receiver reports a usable fix.
    pub const fn is_valid(&self) -> bool {
        matches!(
            self,
            Self::GpsSps | Self::DifferentialGps | Self::DeadReckoning
        )
    }
}

field_enum! {
    /// Status Mode Indicator
    pub enum Status {
        /// A - Valid
        "A" => Valid,
        /// V - Invalid
        "V" => Invalid,
    }
}

/// Latitude as transmitted.
///
/// `value` keeps the raw `ddmm.mmmm` text. Use [`Latitude::to_degrees`] for a numeric
/// value.
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Latitude {
    /// Degrees and decimal minutes, e.g. `3342.6618`
    pub value: String,
    /// Northern or southern hemisphere
    pub hemisphere: VerticalHemisphere,
}

impl Latitude {
    /// Converts to signed decimal degrees, negative in the southern hemisphere.
    ///
    /// ```rust
    /// use nmea0183_decoder::{Latitude, VerticalHemisphere};
    ///
    /// let latitude = Latitude {
    ///     value: "1929.045".to_owned(),
    ///     hemisphere: VerticalHemisphere::South,
    /// };
    /// assert!((latitude.to_degrees()? + 19.48408).abs() < 1e-5);
    /// # Ok::<(), nmea0183_decoder::Error>(())
    /// ```
    pub fn to_degrees(&self) -> Result<f64> {
        let degrees = coordinate_degrees("latitude", &self.value, 2, 90.0)?;

        Ok(match self.hemisphere {
            VerticalHemisphere::North => degrees,
            VerticalHemisphere::South => -degrees,
        })
    }
}

impl NmeaField for Latitude {
    const WIDTH: usize = 2;

    fn decode_at(fields: &Fields<'_>, index: usize, field: &'static str) -> Result<Self> {
        Ok(Self {
            value: String::decode_at(fields, index, field)?,
            hemisphere: VerticalHemisphere::decode_at(fields, index + 1, "vertical_hemisphere")?,
        })
    }
}

/// Longitude as transmitted.
///
/// `value` keeps the raw `dddmm.mmmm` text. Use [`Longitude::to_degrees`] for a numeric
/// value.
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Longitude {
    /// Degrees and decimal minutes, e.g. `11751.3858`
    pub value: String,
    /// Eastern or western hemisphere
    pub hemisphere: HorizontalHemisphere,
}

impl Longitude {
    /// Converts to signed decimal degrees, negative in the western hemisphere.
    pub fn to_degrees(&self) -> Result<f64> {
        let degrees = coordinate_degrees("longitude", &self.value, 3, 180.0)?;

        Ok(match self.hemisphere {
            HorizontalHemisphere::East => degrees,
            HorizontalHemisphere::West => -degrees,
        })
    }
}

impl NmeaField for Longitude {
    const WIDTH: usize = 2;

    fn decode_at(fields: &Fields<'_>, index: usize, field: &'static str) -> Result<Self> {
        Ok(Self {
            value: String::decode_at(fields, index, field)?,
            hemisphere: HorizontalHemisphere::decode_at(
                fields,
                index + 1,
                "horizontal_hemisphere",
            )?,
        })
    }
}

fn coordinate_degrees(field: &'static str, raw: &str, width: u8, limit: f64) -> Result<f64> {
    let (degrees, minutes) = field_value(
        field,
        raw,
        (take(width).and_then(all_consuming(u8)), double),
    )?;

    let degrees = f64::from(degrees) + minutes / 60.0;
    if !(0.0..60.0).contains(&minutes) || degrees > limit {
        return Err(Error::invalid_field(field, raw));
    }

    Ok(degrees)
}
