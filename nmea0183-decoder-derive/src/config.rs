use proc_macro2::Span;
use syn::{Ident, Path, parse_quote};

#[derive(Clone)]
pub struct Config {
    pub fields_name: Ident,
    pub crate_path: Path,
}

impl Config {
    pub fn new() -> Self {
        Self {
            fields_name: Ident::new("nmea_fields", Span::call_site()),
            crate_path: parse_quote!(nmea0183_decoder),
        }
    }
}
