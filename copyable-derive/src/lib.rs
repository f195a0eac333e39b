//! Derive macros for `copyable` value objects.
//!
//! # Available Derive Macros
//!
//! - [`Copyable`]: Turns a named struct into a value object with typed field
//!   keys, introspection, equality and structured rendering
//! - [`Record`]: Gives a plain named struct the compact rendering
//!
//! # Example
//!
//! ```rust,ignore
//! use copyable::{Copyable, Patch};
//!
//! #[derive(Clone, Copyable)]
//! struct Person {
//!     name: String,
//!     age: u32,
//! }
//!
//! // Generated key functions:
//! // - Person::name_field() -> Field<Person, String>
//! // - Person::age_field() -> Field<Person, u32>
//!
//! let person = Person { name: "John".to_string(), age: 25 };
//! let older = person.copy_field(Person::age_field(), 45);
//! assert_eq!(older.to_string(), "Person(\n  name=\"John\",\n  age=45\n)");
//! ```

#![forbid(unsafe_code)]
#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![warn(clippy::nursery)]

mod keys;
mod object;
mod parse;
mod record;

use proc_macro::TokenStream;
use syn::{DeriveInput, parse_macro_input};

/// Derive macro turning a named struct into a value object.
///
/// The struct must also implement `Clone`; copies are made through it.
///
/// # Generated Code
///
/// For a struct `Name` with fields `foo: T`, generates:
///
/// ```rust,ignore
/// impl Name {
///     pub fn foo_field() -> copyable::Field<Name, T> { ... }
/// }
/// impl copyable::Introspect for Name { ... }
/// impl copyable::Property for Name { ... }
/// impl copyable::Copyable for Name { ... }
/// impl core::fmt::Display for Name { ... }
/// ```
///
/// # Attributes
///
/// ## Struct Attributes
///
/// - `#[copyable(name = "Other")]`: Type name used by `type_name` and the printer
///
/// ## Field Attributes
///
/// - `#[copyable(rename = "other")]`: Own-field name used by introspection,
///   rendering and dynamic patches
/// - `#[copyable(skip)]`: Copied by `Clone`, but invisible to introspection,
///   equality and rendering
/// - `#[copyable(flatten)]`: The field is another value object whose fields
///   become own fields of this one, in place
///
/// # Example
///
/// ```rust,ignore
/// use copyable::Copyable;
///
/// #[derive(Clone, Copyable)]
/// struct Inner {
///     bool: bool,
///     str: String,
/// }
///
/// #[derive(Clone, Copyable)]
/// struct Derived {
///     #[copyable(flatten)]
///     base: Inner,
///     derived_val: i32,
/// }
///
/// let derived = Derived {
///     base: Inner { bool: true, str: "hello world".to_string() },
///     derived_val: 5,
/// };
/// assert_eq!(derived.field_names(), vec!["bool", "str", "derived_val"]);
/// ```
#[proc_macro_derive(Copyable, attributes(copyable))]
pub fn derive_copyable(input: TokenStream) -> TokenStream {
    let input = parse_macro_input!(input as DeriveInput);

    match object::expand(&input) {
        Ok(tokens) => tokens.into(),
        Err(error) => error.to_compile_error().into(),
    }
}

/// Derive macro giving a plain named struct the compact rendering.
///
/// Records are not value objects: they are neither copied field by field nor
/// compared structurally. Hold them behind `Rc` or `Arc` inside a value object.
///
/// # Example
///
/// ```rust,ignore
/// use std::rc::Rc;
/// use copyable::{Copyable, Record};
///
/// #[derive(Record)]
/// struct Pair {
///     a: i32,
///     b: i32,
/// }
///
/// #[derive(Clone, Copyable)]
/// struct Holder {
///     pair: Rc<Pair>,
/// }
///
/// let holder = Holder { pair: Rc::new(Pair { a: 5, b: 6 }) };
/// assert_eq!(holder.to_string(), "Holder(\n  pair=Pair { a: 5, b: 6 }\n)");
/// ```
#[proc_macro_derive(Record, attributes(copyable))]
pub fn derive_record(input: TokenStream) -> TokenStream {
    let input = parse_macro_input!(input as DeriveInput);

    match record::expand(&input) {
        Ok(tokens) => tokens.into(),
        Err(error) => error.to_compile_error().into(),
    }
}
