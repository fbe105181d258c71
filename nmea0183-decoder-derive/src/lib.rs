//! # A Rust procedural macro for positional NMEA 0183 records
//!
//! `nmea0183-decoder-derive` derives the `FromFields` trait of [`nmea0183-decoder`] for
//! structs whose fields sit at fixed positions of a comma-split sentence.
//!
//! [`nmea0183-decoder`]: https://crates.io/crates/nmea0183-decoder

use generate::generate_from_fields_impl;
use proc_macro::TokenStream;
use syn::{DeriveInput, parse_macro_input};

mod config;
mod generate;
mod meta;

/// Derives `FromFields` for a struct.
///
/// Every field must carry `#[nmea(index = N)]`, the position of its first field in the
/// sentence (the sentence ID is field 0). `#[nmea(name = "...")]` overrides the field
/// name reported in decoding errors. Both accept the `key = value` and `key(value)` forms.
///
/// The generated `FIELD_COUNT` is the end of the farthest field, taking the
/// `NmeaField::WIDTH` of each field type into account. The generated `from_fields`
/// checks it before decoding any field.
///
/// ```rust,ignore
/// use nmea0183_decoder::{FromFields, Latitude};
///
/// #[derive(FromFields)]
/// struct Position {
///     #[nmea(index = 1)]
///     latitude: Latitude,
///     #[nmea(index = 3, name = "satellites")]
///     satellite_count: u8,
/// }
///
/// assert_eq!(Position::FIELD_COUNT, 4);
/// ```
#[proc_macro_derive(FromFields, attributes(nmea))]
pub fn derive_from_fields(input: TokenStream) -> TokenStream {
    let input = parse_macro_input!(input as DeriveInput);

    match generate_from_fields_impl(&input) {
        Ok(tokens) => tokens.into(),
        Err(err) => err.to_compile_error().into(),
    }
}
