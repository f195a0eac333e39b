//! Patches and mappers consumed by the copy engine.
//!
//! - [`Patch`]: field → replacement value, applied by [`Copyable::copy_with`]
//! - [`Mapper`]: field → transform, applied by [`Copyable::map_with`]
//! - [`DynPatch`]: field name → boxed value, applied by
//!   [`Copyable::try_copy_dyn`]; names and types are only checked at runtime
//!
//! Entries apply in insertion order, so a later entry for the same field wins.
//!
//! [`Copyable::copy_with`]: crate::Copyable::copy_with
//! [`Copyable::map_with`]: crate::Copyable::map_with
//! [`Copyable::try_copy_dyn`]: crate::Copyable::try_copy_dyn

use std::any::Any;
use std::fmt;

use smallvec::SmallVec;

use crate::error::PatchError;
use crate::key::Key;
use crate::property::Introspect;

type Apply<S> = Box<dyn FnOnce(&mut S)>;

/// Most patches touch a handful of fields.
const INLINE_ENTRIES: usize = 4;

/// Replacement values for a subset of the fields of `S`.
///
/// # Example
///
/// ```
/// use copyable::{Copyable, Patch};
///
/// #[derive(Clone, Copyable)]
/// struct Person { name: String, age: u32 }
///
/// let person = Person { name: "John".to_string(), age: 25 };
/// let patch = Patch::new()
///     .set(Person::name_field(), "James".to_string())
///     .set(Person::age_field(), 20);
///
/// let james = person.copy_with(patch);
/// assert_eq!(james.name, "James");
/// assert_eq!(james.age, 20);
/// assert_eq!(person.name, "John");
/// ```
pub struct Patch<S> {
    entries: SmallVec<[(&'static str, Apply<S>); INLINE_ENTRIES]>,
}

impl<S> Patch<S> {
    /// Creates an empty patch.
    #[must_use]
    pub fn new() -> Self {
        Self { entries: SmallVec::new() }
    }

    /// Adds a replacement value for the field behind `key`.
    #[must_use]
    pub fn set<K>(mut self, key: K, value: K::Value) -> Self
    where
        K: Key<S> + 'static,
        K::Value: 'static,
    {
        let name = key.name();
        self.entries.push((
            name,
            Box::new(move |target: &mut S| *key.get_mut(target) = value),
        ));
        self
    }

    /// Names of the patched fields, in insertion order.
    pub fn keys(&self) -> impl Iterator<Item = &'static str> + '_ {
        self.entries.iter().map(|(name, _)| *name)
    }

    /// Number of entries.
    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Returns `true` if the patch has no entries.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub(crate) fn apply(self, target: &mut S) {
        for (_, apply) in self.entries {
            apply(target);
        }
    }
}

impl<S> Default for Patch<S> {
    fn default() -> Self {
        Self::new()
    }
}

impl<S> fmt::Debug for Patch<S> {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        formatter.debug_tuple("Patch").field(&self.keys().collect::<Vec<_>>()).finish()
    }
}

/// Transforms for a subset of the fields of `S`.
///
/// Each transform receives the field's current value in the copy and returns
/// its replacement.
///
/// # Example
///
/// ```
/// use copyable::{Copyable, Mapper};
///
/// #[derive(Clone, Copyable)]
/// struct Person { name: String, age: u32 }
///
/// let person = Person { name: "John".to_string(), age: 25 };
/// let older = person.map_with(
///     Mapper::new()
///         .update(Person::name_field(), |name| format!("Older {name}"))
///         .update(Person::age_field(), |age| age + 20),
/// );
///
/// assert_eq!(older.name, "Older John");
/// assert_eq!(older.age, 45);
/// ```
pub struct Mapper<S> {
    entries: SmallVec<[(&'static str, Apply<S>); INLINE_ENTRIES]>,
}

impl<S> Mapper<S> {
    /// Creates a mapper without transforms.
    #[must_use]
    pub fn new() -> Self {
        Self { entries: SmallVec::new() }
    }

    /// Adds a transform for the field behind `key`.
    #[must_use]
    pub fn update<K, F>(mut self, key: K, transform: F) -> Self
    where
        K: Key<S> + 'static,
        F: FnOnce(&K::Value) -> K::Value + 'static,
    {
        let name = key.name();
        self.entries.push((
            name,
            Box::new(move |target: &mut S| {
                let slot = key.get_mut(target);
                let next = transform(&*slot);
                *slot = next;
            }),
        ));
        self
    }

    /// Names of the mapped fields, in insertion order.
    pub fn keys(&self) -> impl Iterator<Item = &'static str> + '_ {
        self.entries.iter().map(|(name, _)| *name)
    }

    /// Number of transforms.
    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Returns `true` if the mapper has no transforms.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub(crate) fn apply(self, target: &mut S) {
        for (_, apply) in self.entries {
            apply(target);
        }
    }
}

impl<S> Default for Mapper<S> {
    fn default() -> Self {
        Self::new()
    }
}

impl<S> fmt::Debug for Mapper<S> {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        formatter.debug_tuple("Mapper").field(&self.keys().collect::<Vec<_>>()).finish()
    }
}

/// Replacement values addressed by field name.
///
/// Unlike [`Patch`], nothing is checked until the patch is applied: an unknown
/// name or a value of the wrong type is reported as a [`PatchError`].
///
/// # Example
///
/// ```
/// use copyable::{Copyable, DynPatch, PatchError};
///
/// #[derive(Clone, Debug, Copyable)]
/// struct Book { title: String }
///
/// let book = Book { title: "TypeScript Deep Dive".to_string() };
///
/// let renamed = book
///     .try_copy_dyn(DynPatch::new().set("title", "Rust in Action".to_string()))
///     .unwrap();
/// assert_eq!(renamed.title, "Rust in Action");
///
/// let error = book.try_copy_dyn(DynPatch::new().set("author", 1)).unwrap_err();
/// assert!(matches!(error, PatchError::UnknownField { .. }));
/// ```
#[derive(Default)]
pub struct DynPatch {
    entries: SmallVec<[(String, Box<dyn Any>); INLINE_ENTRIES]>,
}

impl DynPatch {
    /// Creates an empty patch.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds a replacement value for the field called `name`.
    #[must_use]
    pub fn set<V: Any>(mut self, name: impl Into<String>, value: V) -> Self {
        self.entries.push((name.into(), Box::new(value)));
        self
    }

    /// Names of the patched fields, in insertion order.
    pub fn keys(&self) -> impl Iterator<Item = &str> + '_ {
        self.entries.iter().map(|(name, _)| name.as_str())
    }

    /// Number of entries.
    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Returns `true` if the patch has no entries.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Assigns every entry to the matching own field of `target`.
    ///
    /// Stops at the first entry that cannot be applied; entries before it
    /// have already been assigned.
    pub(crate) fn apply(self, target: &mut dyn Introspect) -> Result<(), PatchError> {
        let type_name = target.type_name();
        for (name, value) in self.entries {
            let Some(slot) = target.field_mut(&name) else {
                tracing::debug!(type_name, field = %name, "dynamic patch names an unknown field");
                return Err(PatchError::UnknownField { type_name, field: name });
            };
            if let Err(expected) = slot.assign(value) {
                tracing::debug!(type_name, field = %name, expected, "dynamic patch value has the wrong type");
                return Err(PatchError::TypeMismatch { type_name, field: name, expected });
            }
            tracing::trace!(type_name, field = %name, "dynamic patch entry applied");
        }
        Ok(())
    }
}

impl fmt::Debug for DynPatch {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        formatter.debug_tuple("DynPatch").field(&self.keys().collect::<Vec<_>>()).finish()
    }
}
