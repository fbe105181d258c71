//! # NMEA 0183 Decoder
//!
//! This library decodes single NMEA 0183 sentences of the form
//! `$TTSSS,D1,D2,...,Dn*CC` into strongly-typed, owned records.
//!
//! Supported sentence types:
//! - [`GGA`]: Global Positioning System Fix Data
//! - [`GLL`]: Geographic Position - Latitude/Longitude
//! - [`GSA`]: GNSS DOP and active satellites
//!
//! Sentences are split on `,` with empty fields kept, so every field sits at a fixed
//! position. Fields with a closed vocabulary (hemispheres, fix indicator, status) and
//! numeric fields are validated. Everything else is kept as raw text. The checksum is
//! not verified.
//!
//! ## Usage
//!
//! ```rust
//! use nmea0183_decoder::{Decoder, NmeaSentence, VerticalHemisphere};
//!
//! let decoder = Decoder::new();
//!
//! match decoder.decode("$GPGLL,1929.045,S,02410.506,E,184353.07,A*33")? {
//!     NmeaSentence::GLL(gll) => {
//!         assert_eq!(gll.latitude.value, "1929.045");
//!         assert_eq!(gll.latitude.hemisphere, VerticalHemisphere::South);
//!         assert_eq!(gll.time, "184353.07");
//!     }
//!     other => panic!("unexpected sentence: {other:?}"),
//! }
//! # Ok::<(), nmea0183_decoder::Error>(())
//! ```
//!
//! ## Features
//!
//! - `serde`: derives `Serialize` and `Deserialize` for every record and enumeration.
//! - `time`: enables the `utc` module and the `fix_time` accessors of [`GGA`] and [`GLL`].

pub mod error;
pub mod parsing;
#[cfg(feature = "time")]
pub mod utc;

mod decoder;
mod fields;
mod sentences;

pub use decoder::{Decoder, DecoderBuilder, LineEndingMode};
pub use error::{Error, Result};
pub use fields::{Fields, FromField, NmeaField};
pub use nmea0183_decoder_derive::FromFields;
pub use sentences::{
    FromFields, GGA, GLL, GSA, HorizontalHemisphere, Latitude, Longitude, NmeaSentence,
    PositionFixIndicator, SentenceType, Status, VerticalHemisphere,
};

#[cfg(doctest)]
#[doc = include_str!("../README.md")]
struct README;
