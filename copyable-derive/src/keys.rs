//! Generation of typed field keys.
//!
//! Every included field `foo: T` gets an associated function
//! `foo_field() -> ::copyable::Field<Self, T>` carrying the field name and
//! accessor function pointers. Typed patches and mappers only accept these
//! keys, so a misspelled field name is a compile error.

use proc_macro2::TokenStream as TokenStream2;
use quote::{format_ident, quote};

use crate::parse::{FieldInput, ObjectInput};

/// Generates the inherent impl holding the key methods of `parsed`.
pub fn generate_keys(parsed: &ObjectInput) -> TokenStream2 {
    let name = &parsed.ident;
    let key_methods: Vec<TokenStream2> = parsed
        .fields()
        .into_iter()
        .filter(|field| field.is_included())
        .map(generate_key)
        .collect();

    let (impl_generics, type_generics, where_clause) = parsed.generics.split_for_impl();

    quote! {
        impl #impl_generics #name #type_generics #where_clause {
            #(#key_methods)*
        }
    }
}

fn generate_key(field: &FieldInput) -> TokenStream2 {
    let field_name = field.ident();
    let field_type = &field.ty;
    let visibility = &field.vis;
    let method_name = format_ident!("{}_field", field_name);
    let key = field.key();
    let doc = format!("Returns the key of the `{key}` field.");

    quote! {
        #[doc = #doc]
        #[inline]
        #[must_use]
        #visibility fn #method_name() -> ::copyable::Field<Self, #field_type> {
            ::copyable::Field::<Self, #field_type>::new(
                #key,
                |source: &Self| &source.#field_name,
                |source: &mut Self| &mut source.#field_name,
            )
        }
    }
}
