//! # copyable
//!
//! Immutable value objects for Rust: copy with changes, structural
//! equality and a deterministic textual rendering.
//!
//! ## Overview
//!
//! A value object is a struct whose identity is the set of its own fields.
//! `#[derive(Copyable)]` gives such a struct:
//!
//! - **Copying**: [`Copyable::copy`], [`Copyable::copy_with`] and
//!   [`Copyable::copy_field`] return new instances, optionally with some
//!   fields replaced; the original is never touched
//! - **Mapping**: [`Copyable::map_with`] and [`Copyable::map_field`] derive
//!   replacement values from the current ones
//! - **Equality**: [`Copyable::equals`] compares own fields, recursing into
//!   nested value objects
//! - **Rendering**: `Display` prints the structured form, e.g.
//!   `Person(\n  name="John",\n  age=25\n)`
//!
//! Field keys are generated per field (`Person::age_field()`), so typed
//! patches only ever name fields that exist. [`DynPatch`] addresses fields by
//! name instead and reports mistakes as [`PatchError`].
//!
//! ## Feature Flags
//!
//! - `derive` (default): the `Copyable` and `Record` derive macros
//!
//! ## Example
//!
//! ```rust
//! use copyable::prelude::*;
//!
//! #[derive(Clone, Copyable)]
//! struct Person {
//!     name: String,
//!     age: u32,
//! }
//!
//! let person = Person { name: "John".to_string(), age: 25 };
//! let older = person.map_field(Person::age_field(), |age| age + 20);
//!
//! assert_eq!(person.age, 25);
//! assert_eq!(older.to_string(), "Person(\n  name=\"John\",\n  age=45\n)");
//! assert!(older.equals(Some(&older.copy())));
//! assert!(!older.equals(Some(&person)));
//! ```

#![forbid(unsafe_code)]
#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![warn(clippy::nursery)]

// Lets derive output written against `::copyable` resolve inside this crate.
extern crate self as copyable;

/// Prelude module for convenient imports.
///
/// # Usage
///
/// ```rust
/// use copyable::prelude::*;
/// ```
pub mod prelude {
    pub use crate::capability::{AnyCopyable, Copyable};
    pub use crate::error::PatchError;
    pub use crate::key::{Field, Key};
    pub use crate::patch::{DynPatch, Mapper, Patch};
    pub use crate::property::{Introspect, Property};
    pub use crate::record::Record;

    #[cfg(feature = "derive")]
    pub use copyable_derive::{Copyable, Record};
}

pub mod capability;
pub mod equality;
pub mod error;
pub mod key;
pub mod patch;
pub mod printer;
pub mod property;
pub mod record;

pub use capability::{AnyCopyable, Copyable};
pub use error::PatchError;
pub use key::{Field, Key, Then};
pub use patch::{DynPatch, Mapper, Patch};
pub use printer::{ObjectPrinter, PrinterOptions};
pub use property::{Introspect, Property, Shape};
pub use record::Record;

#[cfg(feature = "derive")]
pub use copyable_derive::{Copyable, Record};

static_assertions::assert_obj_safe!(AnyCopyable, Introspect, Property, Record);
static_assertions::assert_impl_all!(PatchError: std::error::Error, Send, Sync, Clone);
