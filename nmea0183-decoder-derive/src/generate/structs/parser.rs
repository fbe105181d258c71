use std::collections::HashMap;

use proc_macro2::{Ident, TokenStream};
use quote::{ToTokens, quote};
use syn::{Error, Fields, Path, Result, Type, spanned::Spanned};

use crate::{
    config::Config,
    meta::{self, MetaAttributeType},
};

/// Decodes one struct field from its position in the sentence.
#[derive(Clone)]
pub struct FieldDecoder {
    pub variable_name: String,
    pub ty: Type,
    pub index: usize,
    pub name: String,
    fields_name: Ident,
    crate_path: Path,
}

#[derive(Clone)]
pub struct StructParser {
    pub empty: bool,
    pub unnamed: bool,
    pub decoders: Vec<FieldDecoder>,
}

impl StructParser {
    pub fn from_fields(fields: &Fields, config: &Config) -> Result<Self> {
        let mut empty = false;
        let mut unnamed = false;
        match fields {
            Fields::Named(_) => (),
            Fields::Unnamed(_) => {
                unnamed = true;
            }
            Fields::Unit => {
                empty = true;
            }
        }

        let mut indices = HashMap::new();
        let mut decoders = vec![];
        for (position, field) in fields.iter().enumerate() {
            let (variable_name, default_name) = match &field.ident {
                Some(ident) => (ident.to_string(), ident.to_string()),
                None => (
                    format!("_nmea_unnamed_{position}"),
                    format!("field_{position}"),
                ),
            };
            let attributes = meta::parse_field_level_attributes(&field.attrs)?;

            let mut index = None;
            let mut name = default_name;
            for attribute in &attributes {
                match attribute.r#type {
                    MetaAttributeType::Index => index = Some(attribute.index()?),
                    MetaAttributeType::Name => name = attribute.name()?,
                }
            }

            let index = index.ok_or_else(|| {
                Error::new(
                    field.span(),
                    "nmea0183-decoder-derive: Missing `index` attribute on field",
                )
            })?;

            if let Some(other) = indices.insert(index, variable_name.clone()) {
                return Err(Error::new(
                    field.span(),
                    format!(
                        "nmea0183-decoder-derive: Field index {index} is already used by `{other}`"
                    ),
                ));
            }

            decoders.push(FieldDecoder {
                variable_name,
                ty: field.ty.clone(),
                index,
                name,
                fields_name: config.fields_name.clone(),
                crate_path: config.crate_path.clone(),
            });
        }

        Ok(Self {
            empty,
            unnamed,
            decoders,
        })
    }
}

impl ToTokens for FieldDecoder {
    fn to_tokens(&self, tokens: &mut TokenStream) {
        let Self {
            ty,
            index,
            name,
            fields_name,
            crate_path,
            ..
        } = self;

        tokens.extend(quote! {
            <#ty as #crate_path::NmeaField>::decode_at(#fields_name, #index, #name)?
        });
    }
}
