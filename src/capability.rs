//! The value-object capability.
//!
//! [`Copyable`] is the trait `#[derive(Copyable)]` implements. Its only
//! required method is the generated field-by-field comparison; copying,
//! patching, mapping and equality are provided on top of `Clone` and the
//! [`Introspect`] field table.
//!
//! [`AnyCopyable`] is the object-safe side of the same capability: a boxed
//! value object of any concrete type can be copied (the copy keeps the
//! concrete type), compared and printed.
//!
//! # Example
//!
//! ```
//! use copyable::Copyable;
//!
//! #[derive(Clone, Copyable)]
//! struct Book { title: String }
//!
//! let book = Book { title: "TypeScript Deep Dive".to_string() };
//! let handbook = book.copy_field(Book::title_field(), "TypeScript handbook".to_string());
//!
//! assert!(!book.equals(Some(&handbook)));
//! assert!(book.equals(Some(&Book { title: "TypeScript Deep Dive".to_string() })));
//! assert_eq!(handbook.to_string(), "Book(\n  title=\"TypeScript handbook\"\n)");
//! ```

use std::any::Any;
use std::fmt;

use crate::equality;
use crate::error::PatchError;
use crate::key::Key;
use crate::patch::{DynPatch, Mapper, Patch};
use crate::printer;
use crate::property::{Introspect, Property, Shape, assign_boxed};

/// A value object: a type whose identity is its own fields.
pub trait Copyable: Introspect + Clone + 'static {
    /// Compares every own field of `self` with the same field of `other`.
    ///
    /// Generated by `#[derive(Copyable)]`.
    fn fields_equal(&self, other: &Self) -> bool;

    /// Returns a new instance with every own field duplicated.
    #[must_use]
    fn copy(&self) -> Self {
        tracing::trace!(type_name = self.type_name(), "copying value object");
        self.clone()
    }

    /// Returns a copy with the fields named in `patch` replaced.
    ///
    /// Fields the patch does not name keep their values.
    #[must_use]
    fn copy_with(&self, patch: Patch<Self>) -> Self {
        let mut copy = self.copy();
        patch.apply(&mut copy);
        copy
    }

    /// Returns a copy with the single field behind `key` replaced by `value`.
    #[must_use]
    fn copy_field<K>(&self, key: K, value: K::Value) -> Self
    where
        K: Key<Self>,
    {
        let mut copy = self.copy();
        *key.get_mut(&mut copy) = value;
        copy
    }

    /// Maps without transforms: a plain copy.
    #[must_use]
    fn map(&self) -> Self {
        self.map_with(Mapper::new())
    }

    /// Returns a copy with every field named in `mapper` replaced by its
    /// transform of the current value.
    #[must_use]
    fn map_with(&self, mapper: Mapper<Self>) -> Self {
        let mut copy = self.copy();
        mapper.apply(&mut copy);
        copy
    }

    /// Returns a copy with the field behind `key` replaced by
    /// `transform(&current)`.
    #[must_use]
    fn map_field<K, F>(&self, key: K, transform: F) -> Self
    where
        K: Key<Self>,
        F: FnOnce(&K::Value) -> K::Value,
    {
        let mut copy = self.copy();
        let slot = key.get_mut(&mut copy);
        let next = transform(&*slot);
        *slot = next;
        copy
    }

    /// Structural equality.
    ///
    /// `None` is never equal; the same instance always is. Otherwise every
    /// own field must match: nested value objects by their own equality,
    /// everything else by value or, for shared structures, by identity.
    fn equals(&self, other: Option<&Self>) -> bool {
        other.is_some_and(|other| std::ptr::eq(self, other) || self.fields_equal(other))
    }

    /// Receiver-driven equality against a value object of any type.
    ///
    /// Only the receiver's own fields are enumerated, so
    /// `a.equals_dyn(b)` and `b.equals_dyn(a)` may disagree when the two
    /// have different field sets.
    fn equals_dyn(&self, other: &dyn AnyCopyable) -> bool {
        equality::receiver_equals(self, other)
    }

    /// Returns a copy with fields replaced by name.
    ///
    /// # Errors
    ///
    /// Returns [`PatchError::UnknownField`] for a name that is not an own
    /// field and [`PatchError::TypeMismatch`] for a value of the wrong type.
    fn try_copy_dyn(&self, patch: DynPatch) -> Result<Self, PatchError> {
        let mut copy = self.copy();
        patch.apply(&mut copy)?;
        Ok(copy)
    }
}

/// Object-safe view of a value object of any concrete type.
///
/// # Example
///
/// ```
/// use copyable::{AnyCopyable, Copyable};
///
/// #[derive(Clone, Copyable)]
/// struct Point { x: i32, y: i32 }
///
/// let boxed: Box<dyn AnyCopyable> = Box::new(Point { x: 1, y: 2 });
/// let copy = boxed.clone();
///
/// assert!(copy.is::<Point>());
/// assert!(copy.equals(Some(&*boxed)));
/// assert_eq!(copy.to_string(), "Point(\n  x=1,\n  y=2\n)");
/// ```
pub trait AnyCopyable: Introspect + Any {
    /// Copies the value into a new box of the same concrete type.
    fn copy_boxed(&self) -> Box<dyn AnyCopyable>;
}

impl<T: Copyable> AnyCopyable for T {
    fn copy_boxed(&self) -> Box<dyn AnyCopyable> {
        Box::new(self.copy())
    }
}

impl dyn AnyCopyable {
    /// Returns `true` if the concrete type is `T`.
    #[must_use]
    pub fn is<T: Copyable>(&self) -> bool {
        let any: &dyn Any = self;
        any.is::<T>()
    }

    /// Returns the value as a `T` if that is its concrete type.
    #[must_use]
    pub fn downcast_ref<T: Copyable>(&self) -> Option<&T> {
        let any: &dyn Any = self;
        any.downcast_ref::<T>()
    }

    /// Receiver-driven structural equality; see [`Copyable::equals_dyn`].
    #[must_use]
    pub fn equals(&self, other: Option<&dyn AnyCopyable>) -> bool {
        other.is_some_and(|other| equality::receiver_equals(self, other))
    }

    /// Returns a copy with fields replaced by name, keeping the concrete type.
    ///
    /// # Errors
    ///
    /// See [`Copyable::try_copy_dyn`].
    pub fn try_copy_dyn(&self, patch: DynPatch) -> Result<Box<dyn AnyCopyable>, PatchError> {
        let mut copy = self.copy_boxed();
        patch.apply(&mut *copy)?;
        Ok(copy)
    }
}

impl Clone for Box<dyn AnyCopyable> {
    fn clone(&self) -> Self {
        (**self).copy_boxed()
    }
}

impl fmt::Display for dyn AnyCopyable {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        formatter.write_str(&printer::render_structured(self))
    }
}

impl fmt::Debug for dyn AnyCopyable {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        formatter.write_str(&printer::render_structured(self))
    }
}

impl Property for Box<dyn AnyCopyable> {
    fn shape(&self) -> Shape<'_> {
        Shape::Object(&**self)
    }

    fn same_as(&self, other: &dyn Property) -> bool {
        match other.shape() {
            Shape::Object(other) => (**self).equals(Some(other)),
            _ => false,
        }
    }

    fn assign(&mut self, value: Box<dyn Any>) -> Result<(), &'static str> {
        assign_boxed(self, value)
    }
}
