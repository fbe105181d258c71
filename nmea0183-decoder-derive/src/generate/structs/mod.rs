use proc_macro2::{Span, TokenStream};
use quote::quote;
use syn::{Attribute, DataStruct, Generics, Ident, Path, Result, Type, parse_quote};

use crate::{
    config::Config,
    generate::{Generator, structs::parser::StructParser},
    meta,
};

pub mod parser;

pub struct Struct {
    pub name: Path,
    pub config: Config,
    pub generics: Generics,
    pub struct_parser: StructParser,
}

impl Struct {
    pub fn from_datastruct(
        name: &Ident,
        datastruct: &DataStruct,
        attributes: &[Attribute],
        generics: &Generics,
    ) -> Result<Self> {
        meta::reject_top_level_attributes(attributes)?;

        let config = Config::new();
        let struct_parser = StructParser::from_fields(&datastruct.fields, &config)?;

        Ok(Self {
            name: parse_quote!(#name),
            config,
            generics: generics.clone(),
            struct_parser,
        })
    }
}

impl Generator for Struct {
    fn name(&self) -> &Path {
        &self.name
    }

    fn config(&self) -> &Config {
        &self.config
    }

    fn generics(&self) -> &Generics {
        &self.generics
    }

    fn field_types(&self) -> Vec<&Type> {
        self.struct_parser
            .decoders
            .iter()
            .map(|decoder| &decoder.ty)
            .collect()
    }

    fn generate_field_count(&self) -> TokenStream {
        let krate = &self.config.crate_path;

        let (index, ty): (Vec<_>, Vec<_>) = self
            .struct_parser
            .decoders
            .iter()
            .map(|decoder| (decoder.index, &decoder.ty))
            .unzip();

        quote! {
            {
                #[allow(unused_mut)]
                let mut count = 0usize;
                #(
                    let end = #index + <#ty as #krate::NmeaField>::WIDTH;
                    if end > count {
                        count = end;
                    }
                )*
                count
            }
        }
    }

    fn generate_from_fields_body(&self) -> TokenStream {
        let name = &self.name;
        let fields_name = &self.config.fields_name;
        let krate = &self.config.crate_path;

        let variable_name: Vec<_> = self
            .struct_parser
            .decoders
            .iter()
            .map(|decoder| Ident::new(&decoder.variable_name, Span::call_site()))
            .collect();

        let decoder = &self.struct_parser.decoders;

        let struct_def = match (self.struct_parser.empty, self.struct_parser.unnamed) {
            (true, _) => {
                // If the struct is empty, we just return an empty struct
                quote! { #name }
            }
            (_, true) => {
                // If the struct is unnamed, we create a tuple struct
                quote! { #name(#(#variable_name),*) }
            }
            (_, false) => {
                // If the struct is named, we create a named struct
                quote! { #name { #(#variable_name),* } }
            }
        };

        quote! {
            #fields_name.require(<Self as #krate::FromFields>::FIELD_COUNT)?;
            #(let #variable_name = #decoder;)*
            ::core::result::Result::Ok(#struct_def)
        }
    }
}
