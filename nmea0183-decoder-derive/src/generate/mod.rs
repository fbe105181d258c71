use proc_macro2::TokenStream;
use quote::quote;
use syn::{Data, DeriveInput, Error, Generics, Path, Result, WhereClause, parse_quote};

use crate::{config::Config, generate::structs::Struct};

mod structs;

// Usage:
// #[derive(FromFields)]
// pub struct MySentence {
//     #[nmea(index = 1)]
//     pub time: String,
//     #[nmea(index = 2)]
//     pub latitude: Latitude,
//     #[nmea(index = 4, name = "satellites")]
//     pub satellite_count: Option<u8>,
// }

trait Generator {
    fn name(&self) -> &Path;
    fn config(&self) -> &Config;
    fn generics(&self) -> &Generics;
    fn generate_field_count(&self) -> TokenStream;
    fn generate_from_fields_body(&self) -> TokenStream;

    /// Types that must implement `NmeaField` for the impl to hold.
    fn field_types(&self) -> Vec<&syn::Type>;

    fn generate_from_fields(&self) -> TokenStream {
        let fields_name = &self.config().fields_name;
        let krate = &self.config().crate_path;
        let body = self.generate_from_fields_body();

        quote! {
            fn from_fields(#fields_name: &#krate::Fields<'_>) -> #krate::Result<Self> {
                #body
            }
        }
    }

    fn generate_impl(&self) -> Result<TokenStream> {
        let name = self.name();
        let krate = &self.config().crate_path;
        let field_count = self.generate_field_count();
        let from_fields = self.generate_from_fields();
        let generics = self.generics();
        let (impl_generics, ty_generics, where_clause) = generics.split_for_impl();

        // If there is no where clause, create a new one
        let mut impl_where: WhereClause = if where_clause.is_some() {
            parse_quote!(#where_clause)
        } else {
            parse_quote!(where)
        };

        // Generic field types must be decodable
        if generics.type_params().next().is_some() {
            for ty in self.field_types() {
                impl_where
                    .predicates
                    .push(parse_quote!(#ty: #krate::NmeaField));
            }
        }

        let impl_tokens = quote! {
            impl #impl_generics #krate::FromFields for #name #ty_generics #impl_where {
                const FIELD_COUNT: usize = #field_count;

                #from_fields
            }
        };

        Ok(impl_tokens)
    }
}

pub fn generate_from_fields_impl(input: &DeriveInput) -> Result<TokenStream> {
    let generator: Box<dyn Generator> = match &input.data {
        Data::Struct(datastruct) => {
            let name = &input.ident;
            let attributes = &input.attrs;
            let generics = &input.generics;

            Box::new(Struct::from_datastruct(
                name, datastruct, attributes, generics,
            )?)
        }
        Data::Enum(_) => {
            return Err(Error::new(
                input.ident.span(),
                "nmea0183-decoder-derive: Enums not supported",
            ));
        }
        Data::Union(_) => {
            return Err(Error::new(
                input.ident.span(),
                "nmea0183-decoder-derive: Unions not supported",
            ));
        }
    };

    generator.generate_impl()
}
