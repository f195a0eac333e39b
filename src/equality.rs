//! Structural equality of value objects.
//!
//! Two paths lead here:
//!
//! - typed: `Copyable::fields_equal`, generated field by field, used when
//!   both sides have the same concrete type;
//! - receiver-driven: [`receiver_equals`], which walks the receiver's own
//!   fields by name and looks each one up on the other object. It is used
//!   when the concrete types differ, and only ever inspects the receiver's
//!   field set.
//!
//! Either way, a field pair is compared through [`Property::same_as`]:
//! nested value objects recurse, everything else compares by value or by
//! identity.

use std::any::Any;

use crate::capability::Copyable;
use crate::property::{Introspect, Property, Shape};

/// `Property::same_as` for value objects.
///
/// A field holding the same concrete type compares with the typed equality;
/// a field holding another value object falls back to [`receiver_equals`];
/// anything else is never equal to a value object.
pub fn same_object<T: Copyable>(this: &T, other: &dyn Property) -> bool {
    let any: &dyn Any = other;
    if let Some(other) = any.downcast_ref::<T>() {
        return this.equals(Some(other));
    }
    match other.shape() {
        Shape::Object(other) => receiver_equals(this, other),
        _ => false,
    }
}

/// Compares every own field of `this` with the same-named field of `other`.
///
/// A field missing on `other` is a mismatch. Fields only `other` has are
/// never looked at.
///
/// There is no identity shortcut: a flattened base or a leading field shares
/// its parent's address while having a different field set.
pub fn receiver_equals(this: &dyn Introspect, other: &dyn Introspect) -> bool {
    let mut equal = true;
    this.visit_fields(&mut |name, value| {
        if equal {
            equal = other.field(name).is_some_and(|other| value.same_as(other));
        }
    });
    equal
}
