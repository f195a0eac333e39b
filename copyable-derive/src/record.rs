//! Implementation of the `#[derive(Record)]` macro.
//!
//! A record is a plain structure rendered in the compact form. It has no
//! copy or equality semantics of its own; fields holding records are shared
//! behind `Rc`/`Arc` and compared by identity.

use darling::FromDeriveInput;
use proc_macro2::TokenStream as TokenStream2;
use quote::quote;
use syn::{DeriveInput, WherePredicate, parse_quote};

use crate::parse::{ObjectInput, validate};

/// Main entry point of the Record derive.
pub fn expand(input: &DeriveInput) -> syn::Result<TokenStream2> {
    let parsed = ObjectInput::from_derive_input(input)
        .map_err(|error| syn::Error::new_spanned(&input.ident, error.to_string()))?;
    validate(&parsed, false)?;

    let name = &parsed.ident;
    let display_name = parsed.display_name();
    let fields: Vec<_> = parsed
        .fields()
        .into_iter()
        .filter(|field| field.is_included())
        .collect();

    let mut generics = parsed.generics.clone();
    if !generics.params.is_empty() {
        let bounds = fields.iter().map(|field| -> WherePredicate {
            let ty = &field.ty;
            parse_quote!(#ty: ::copyable::Property)
        });
        generics.make_where_clause().predicates.extend(bounds);
    }
    let (impl_generics, type_generics, where_clause) = generics.split_for_impl();

    let visits = fields.iter().map(|field| {
        let ident = field.ident();
        let key = field.key();
        quote! { visitor(#key, &self.#ident as &dyn ::copyable::Property); }
    });

    Ok(quote! {
        impl #impl_generics ::copyable::Record for #name #type_generics #where_clause {
            fn record_name(&self) -> &str {
                #display_name
            }

            fn visit_entries<'__copyable>(
                &'__copyable self,
                visitor: &mut dyn ::core::ops::FnMut(
                    &str,
                    &'__copyable dyn ::copyable::Property,
                ),
            ) {
                #(#visits)*
            }
        }
    })
}
