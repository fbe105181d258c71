use std::fmt::Display;

use proc_macro2::Span;
use syn::{
    Attribute, Error, Ident, Lit, Result, Token, parenthesized,
    parse::{Parse, ParseStream},
    punctuated::Punctuated,
    token::Paren,
};

#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq)]
pub enum MetaAttributeType {
    Index,
    Name,
}

impl MetaAttributeType {
    pub fn from_ident(ident: &Ident) -> Option<Self> {
        match ident.to_string().as_str() {
            "index" => Some(Self::Index),
            "name" => Some(Self::Name),
            _ => None,
        }
    }
}

impl Display for MetaAttributeType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            Self::Index => "index",
            Self::Name => "name",
        };
        write!(f, "{name}")
    }
}

pub struct MetaAttribute {
    pub r#type: MetaAttributeType,
    arg: Lit,
    span: Span,
}

impl MetaAttribute {
    pub fn span(&self) -> Span {
        self.span
    }

    /// The `index` argument as a field position.
    pub fn index(&self) -> Result<usize> {
        match &self.arg {
            Lit::Int(index) => index.base10_parse(),
            arg => Err(Error::new(
                arg.span(),
                "nmea0183-decoder-derive: Expected an integer for `index`",
            )),
        }
    }

    /// The `name` argument.
    pub fn name(&self) -> Result<String> {
        match &self.arg {
            Lit::Str(name) => Ok(name.value()),
            arg => Err(Error::new(
                arg.span(),
                "nmea0183-decoder-derive: Expected a string for `name`",
            )),
        }
    }
}

impl Parse for MetaAttribute {
    fn parse(input: ParseStream) -> Result<Self> {
        let ident: Ident = input.parse()?;
        let attribute_type = MetaAttributeType::from_ident(&ident).ok_or_else(|| {
            Error::new(
                ident.span(),
                "nmea0183-decoder-derive: Unknown nmea attribute",
            )
        })?;

        // read (value) or = value
        let arg = if input.peek(Token![=]) {
            let _: Token![=] = input.parse()?;
            input.parse()?
        } else if input.peek(Paren) {
            let content;
            parenthesized!(content in input);
            content.parse()?
        } else {
            return Err(Error::new(
                input.span(),
                "nmea0183-decoder-derive: Expected '= <value>' or '(<value>)' for nmea attribute",
            ));
        };

        Ok(MetaAttribute {
            r#type: attribute_type,
            arg,
            span: ident.span(),
        })
    }
}

pub struct List<T: Parse>(pub Vec<T>);

impl<T: Parse> Parse for List<T> {
    fn parse(input: ParseStream) -> Result<Self> {
        Ok(List(
            Punctuated::<T, Token![,]>::parse_terminated(input)?
                .into_iter()
                .collect(),
        ))
    }
}

pub fn reject_top_level_attributes(attrs: &[Attribute]) -> Result<()> {
    match attrs.iter().find(|attr| attr.path().is_ident("nmea")) {
        Some(attr) => Err(Error::new_spanned(
            attr,
            "nmea0183-decoder-derive: nmea attributes are only allowed on fields",
        )),
        None => Ok(()),
    }
}

pub fn parse_field_level_attributes(attrs: &[Attribute]) -> Result<Vec<MetaAttribute>> {
    let mut attributes_set = std::collections::HashSet::new();

    attrs
        .iter()
        .filter_map(|attr| {
            if attr.path().is_ident("nmea") {
                Some(attr.parse_args::<List<MetaAttribute>>())
            } else {
                None
            }
        })
        .collect::<Result<Vec<_>>>()?
        .into_iter()
        .flat_map(|list| list.0.into_iter())
        .map(|meta_attr| {
            if !attributes_set.insert(meta_attr.r#type) {
                return Err(Error::new(
                    meta_attr.span(),
                    format!(
                        "nmea0183-decoder-derive: Duplicate nmea attribute `{}`",
                        meta_attr.r#type
                    ),
                ));
            }

            Ok(meta_attr)
        })
        .collect()
}
