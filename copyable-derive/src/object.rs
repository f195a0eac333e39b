//! Implementation of the `#[derive(Copyable)]` macro.
//!
//! Expands a named struct into:
//!
//! - typed field keys (see [`crate::keys`]),
//! - `impl Introspect`: the ordered own-field table,
//! - `impl Property`: so the struct can sit inside other value objects,
//! - `impl Copyable`: field-by-field equality,
//! - `impl Display`: the structured rendering.

use darling::FromDeriveInput;
use proc_macro2::TokenStream as TokenStream2;
use quote::quote;
use syn::{DeriveInput, Generics, WherePredicate, parse_quote};

use crate::keys::generate_keys;
use crate::parse::{FieldInput, ObjectInput, validate};

/// Main entry point of the Copyable derive.
pub fn expand(input: &DeriveInput) -> syn::Result<TokenStream2> {
    let parsed = ObjectInput::from_derive_input(input)
        .map_err(|error| syn::Error::new_spanned(&input.ident, error.to_string()))?;
    validate(&parsed, true)?;

    let keys = generate_keys(&parsed);
    let introspect = generate_introspect(&parsed);
    let capability = generate_capability(&parsed);

    Ok(quote! {
        #keys
        #introspect
        #capability
    })
}

/// Adds the bounds every included field needs to the struct's where clause.
pub fn bounded_generics(parsed: &ObjectInput) -> Generics {
    let mut generics = parsed.generics.clone();
    if generics.params.is_empty() {
        return generics;
    }

    let ident = &parsed.ident;
    let (_, type_generics, _) = parsed.generics.split_for_impl();
    let clone_bound: WherePredicate = parse_quote!(#ident #type_generics: ::core::clone::Clone);

    let field_bounds = parsed
        .fields()
        .into_iter()
        .filter(|field| field.is_included())
        .map(|field| -> WherePredicate {
            let ty = &field.ty;
            if field.flatten {
                parse_quote!(#ty: ::copyable::Copyable)
            } else {
                parse_quote!(#ty: ::copyable::Property)
            }
        });
    let predicates: Vec<WherePredicate> = std::iter::once(clone_bound).chain(field_bounds).collect();

    generics.make_where_clause().predicates.extend(predicates);
    generics
}

fn generate_introspect(parsed: &ObjectInput) -> TokenStream2 {
    let name = &parsed.ident;
    let display_name = parsed.display_name();
    let generics = bounded_generics(parsed);
    let (impl_generics, type_generics, where_clause) = generics.split_for_impl();

    let fields = parsed.fields();
    let included: Vec<&FieldInput> = fields
        .iter()
        .copied()
        .filter(|field| field.is_included())
        .collect();

    let visits = included.iter().map(|field| {
        let ident = field.ident();
        if field.flatten {
            quote! { ::copyable::Introspect::visit_fields(&self.#ident, visitor); }
        } else {
            let key = field.key();
            quote! { visitor(#key, &self.#ident as &dyn ::copyable::Property); }
        }
    });

    let own: Vec<&FieldInput> = included.iter().copied().filter(|field| !field.flatten).collect();
    let flattened: Vec<&FieldInput> = included.iter().copied().filter(|field| field.flatten).collect();

    let own_keys: Vec<String> = own.iter().map(|field| field.key()).collect();
    let own_idents: Vec<_> = own.iter().map(|field| field.ident()).collect();
    let flat_idents: Vec<_> = flattened.iter().map(|field| field.ident()).collect();

    quote! {
        impl #impl_generics ::copyable::Introspect for #name #type_generics #where_clause {
            fn type_name(&self) -> &'static str {
                #display_name
            }

            fn visit_fields<'__copyable>(
                &'__copyable self,
                visitor: &mut dyn ::core::ops::FnMut(
                    &'static str,
                    &'__copyable dyn ::copyable::Property,
                ),
            ) {
                let _ = &visitor;
                #(#visits)*
            }

            fn field(&self, name: &str) -> ::core::option::Option<&dyn ::copyable::Property> {
                match name {
                    #(#own_keys => ::core::option::Option::Some(&self.#own_idents),)*
                    _ => {
                        #(
                            if let ::core::option::Option::Some(found) =
                                ::copyable::Introspect::field(&self.#flat_idents, name)
                            {
                                return ::core::option::Option::Some(found);
                            }
                        )*
                        ::core::option::Option::None
                    }
                }
            }

            fn field_mut(
                &mut self,
                name: &str,
            ) -> ::core::option::Option<&mut dyn ::copyable::Property> {
                match name {
                    #(#own_keys => ::core::option::Option::Some(&mut self.#own_idents),)*
                    _ => {
                        #(
                            if let ::core::option::Option::Some(found) =
                                ::copyable::Introspect::field_mut(&mut self.#flat_idents, name)
                            {
                                return ::core::option::Option::Some(found);
                            }
                        )*
                        ::core::option::Option::None
                    }
                }
            }
        }
    }
}

fn generate_capability(parsed: &ObjectInput) -> TokenStream2 {
    let name = &parsed.ident;
    let generics = bounded_generics(parsed);
    let (impl_generics, type_generics, where_clause) = generics.split_for_impl();

    let comparisons = parsed
        .fields()
        .into_iter()
        .filter(|field| field.is_included())
        .map(|field| {
            let ident = field.ident();
            if field.flatten {
                quote! { ::copyable::Copyable::fields_equal(&self.#ident, &other.#ident) }
            } else {
                quote! {
                    ::copyable::Property::same_as(
                        &self.#ident,
                        &other.#ident as &dyn ::copyable::Property,
                    )
                }
            }
        });

    quote! {
        impl #impl_generics ::copyable::Property for #name #type_generics #where_clause {
            fn shape(&self) -> ::copyable::Shape<'_> {
                ::copyable::Shape::Object(self)
            }

            fn same_as(&self, other: &dyn ::copyable::Property) -> bool {
                ::copyable::equality::same_object(self, other)
            }

            fn assign(
                &mut self,
                value: ::std::boxed::Box<dyn ::core::any::Any>,
            ) -> ::core::result::Result<(), &'static str> {
                ::copyable::property::assign_boxed(self, value)
            }
        }

        impl #impl_generics ::copyable::Copyable for #name #type_generics #where_clause {
            fn fields_equal(&self, other: &Self) -> bool {
                let _ = other;
                true #(&& #comparisons)*
            }
        }

        impl #impl_generics ::core::fmt::Display for #name #type_generics #where_clause {
            fn fmt(&self, formatter: &mut ::core::fmt::Formatter<'_>) -> ::core::fmt::Result {
                formatter.write_str(&::copyable::printer::render_structured(self))
            }
        }
    }
}
