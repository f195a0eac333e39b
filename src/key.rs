//! Typed field keys.
//!
//! A key names one own field of a value object and gives typed access to it.
//! `#[derive(Copyable)]` generates a [`Field`] per field as
//! `Type::{field}_field()`, so patches and mappers can only target fields that
//! exist, with values of the right type. Keys compose with [`Key::then`] to
//! reach the fields of a flattened base object.
//!
//! # Example
//!
//! ```
//! use copyable::{Copyable, Key};
//!
//! #[derive(Clone, Copyable)]
//! struct Point { x: i32, y: i32 }
//!
//! let x = Point::x_field();
//! let point = Point { x: 10, y: 20 };
//! assert_eq!(x.name(), "x");
//! assert_eq!(*x.get(&point), 10);
//! ```
//!
//! A key for a field that does not exist does not compile:
//!
//! ```compile_fail
//! use copyable::Copyable;
//!
//! #[derive(Clone, Copyable)]
//! struct Point { x: i32, y: i32 }
//!
//! let point = Point { x: 10, y: 20 };
//! let moved = point.copy_field(Point::z_field(), 3);
//! ```
//!
//! Neither does a value of the wrong type:
//!
//! ```compile_fail
//! use copyable::Copyable;
//!
//! #[derive(Clone, Copyable)]
//! struct Point { x: i32, y: i32 }
//!
//! let point = Point { x: 10, y: 20 };
//! let moved = point.copy_field(Point::x_field(), "ten");
//! ```

use std::fmt;

/// Typed access to one own field of `S`.
pub trait Key<S> {
    /// Type of the field.
    type Value;

    /// Own-field name the key targets.
    fn name(&self) -> &'static str;

    /// Gets a reference to the field.
    fn get<'a>(&self, source: &'a S) -> &'a Self::Value;

    /// Gets a mutable reference to the field.
    fn get_mut<'a>(&self, source: &'a mut S) -> &'a mut Self::Value;

    /// Composes this key with a key into the field's own value.
    ///
    /// Used to reach the fields of a `#[copyable(flatten)]` base object; the
    /// composed key reports the inner name, because flattened fields are own
    /// fields of the outer object.
    ///
    /// # Example
    ///
    /// ```
    /// use copyable::{Copyable, Key};
    ///
    /// #[derive(Clone, Copyable)]
    /// struct Base { num: i32 }
    ///
    /// #[derive(Clone, Copyable)]
    /// struct Derived {
    ///     #[copyable(flatten)]
    ///     base: Base,
    ///     field: String,
    /// }
    ///
    /// let num = Derived::base_field().then(Base::num_field());
    /// let derived = Derived { base: Base { num: 5 }, field: "test".to_string() };
    ///
    /// assert_eq!(num.name(), "num");
    /// assert_eq!(derived.copy_field(num, -5).base.num, -5);
    /// ```
    fn then<K>(self, next: K) -> Then<Self, K>
    where
        Self: Sized,
        K: Key<Self::Value>,
    {
        Then { outer: self, inner: next }
    }
}

/// A field key backed by accessor function pointers.
pub struct Field<S, A> {
    name: &'static str,
    get: fn(&S) -> &A,
    get_mut: fn(&mut S) -> &mut A,
}

impl<S, A> Field<S, A> {
    /// Creates a key from the field name and its accessors.
    #[must_use]
    pub const fn new(name: &'static str, get: fn(&S) -> &A, get_mut: fn(&mut S) -> &mut A) -> Self {
        Self { name, get, get_mut }
    }
}

impl<S, A> Key<S> for Field<S, A> {
    type Value = A;

    fn name(&self) -> &'static str {
        self.name
    }

    fn get<'a>(&self, source: &'a S) -> &'a A {
        (self.get)(source)
    }

    fn get_mut<'a>(&self, source: &'a mut S) -> &'a mut A {
        (self.get_mut)(source)
    }
}

impl<S, A> Clone for Field<S, A> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<S, A> Copy for Field<S, A> {}

impl<S, A> fmt::Debug for Field<S, A> {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        formatter.debug_tuple("Field").field(&self.name).finish()
    }
}

/// Two keys applied one after the other.
#[derive(Debug, Clone, Copy)]
pub struct Then<O, I> {
    outer: O,
    inner: I,
}

impl<S, O, I> Key<S> for Then<O, I>
where
    O: Key<S>,
    O::Value: 'static,
    I: Key<O::Value>,
{
    type Value = I::Value;

    fn name(&self) -> &'static str {
        self.inner.name()
    }

    fn get<'a>(&self, source: &'a S) -> &'a I::Value {
        self.inner.get(self.outer.get(source))
    }

    fn get_mut<'a>(&self, source: &'a mut S) -> &'a mut I::Value {
        self.inner.get_mut(self.outer.get_mut(source))
    }
}
