//! Field introspection.
//!
//! [`Introspect`] exposes the own fields of a value object in declaration
//! order, and [`Property`] describes what a single field value is: a nested
//! value object, a plain record, text, a scalar or an absent optional. The
//! copy, equality and printing engines only ever look at values through
//! these two traits.
//!
//! # Shapes
//!
//! | Field type                                | Shape            | Equality              |
//! |-------------------------------------------|------------------|-----------------------|
//! | `#[derive(Copyable)]` struct              | `Object`         | structural (`equals`) |
//! | `Box<dyn AnyCopyable>`                    | `Object`         | structural (`equals`) |
//! | `Rc<R>` / `Arc<R>` with `R: Record`       | `Record`         | pointer identity      |
//! | `String`, `&'static str`, `Box<str>`      | `Text`           | by content            |
//! | integers, floats, `bool`, `char`          | `Scalar`         | `==`                  |
//! | `Option<T>`                               | `T`'s / `Absent` | by variant, then `T`  |
//!
//! Maps and lists are records (`BTreeMap<String, V>`, `Vec<V>`), so they sit
//! in value objects behind `Rc`/`Arc`.

use std::any::Any;
use std::borrow::Cow;
use std::fmt;
use std::rc::Rc;
use std::sync::Arc;

use crate::capability::AnyCopyable;
use crate::record::Record;

/// What a field value is, as far as copying, equality and printing care.
#[derive(Clone, Copy)]
pub enum Shape<'a> {
    /// A nested value object; rendered in the structured form.
    Object(&'a dyn AnyCopyable),
    /// A plain structure; rendered in the compact form.
    Record(&'a dyn Record),
    /// Text; rendered in double quotes.
    Text(&'a str),
    /// Anything else with a textual conversion.
    Scalar(&'a dyn fmt::Display),
    /// An empty optional.
    Absent,
}

impl Shape<'_> {
    /// Returns `true` if the shape is a nested value object.
    #[must_use]
    pub const fn is_object(&self) -> bool {
        matches!(self, Self::Object(_))
    }
}

impl fmt::Debug for Shape<'_> {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Object(object) => write!(formatter, "Object({})", object.type_name()),
            Self::Record(record) => write!(formatter, "Record({})", record.record_name()),
            Self::Text(text) => write!(formatter, "Text({text:?})"),
            Self::Scalar(scalar) => write!(formatter, "Scalar({scalar})"),
            Self::Absent => formatter.write_str("Absent"),
        }
    }
}

/// A value that can live in an own field of a value object.
pub trait Property: Any {
    /// Classifies the value.
    fn shape(&self) -> Shape<'_>;

    /// Compares this value with the same-named field of another object.
    fn same_as(&self, other: &dyn Property) -> bool;

    /// Replaces the value with `value` if it has exactly this type.
    ///
    /// # Errors
    ///
    /// Returns the expected type name when `value` has another type.
    fn assign(&mut self, value: Box<dyn Any>) -> Result<(), &'static str>;
}

/// Own-field table of a value object.
pub trait Introspect {
    /// Name printed in front of the field block.
    fn type_name(&self) -> &'static str;

    /// Calls `visitor` with every own field, in declaration order.
    fn visit_fields<'a>(&'a self, visitor: &mut dyn FnMut(&'static str, &'a dyn Property));

    /// Looks up an own field by name.
    fn field(&self, name: &str) -> Option<&dyn Property>;

    /// Looks up an own field by name for assignment.
    fn field_mut(&mut self, name: &str) -> Option<&mut dyn Property>;

    /// Returns the own field names, in declaration order.
    fn field_names(&self) -> Vec<&'static str> {
        let mut names = Vec::new();
        self.visit_fields(&mut |name, _| names.push(name));
        names
    }
}

/// Moves `value` into `slot` if it holds a `T`.
///
/// # Errors
///
/// Returns the name of `T` when `value` holds another type; `slot` is left
/// untouched.
pub fn assign_boxed<T: Any>(slot: &mut T, value: Box<dyn Any>) -> Result<(), &'static str> {
    match value.downcast::<T>() {
        Ok(value) => {
            *slot = *value;
            Ok(())
        }
        Err(_) => Err(std::any::type_name::<T>()),
    }
}

/// Compares `this` with `other` by `==` when `other` is also a `T`.
pub fn same_value<T: PartialEq + Any>(this: &T, other: &dyn Property) -> bool {
    let other: &dyn Any = other;
    other.downcast_ref::<T>().is_some_and(|other| other == this)
}

/// Compares `this` with `other` by content when `other` is text.
pub fn same_text(this: &str, other: &dyn Property) -> bool {
    match other.shape() {
        Shape::Text(other) => other == this,
        _ => false,
    }
}

macro_rules! scalar_property {
    ($($ty:ty),* $(,)?) => {
        $(
            impl Property for $ty {
                fn shape(&self) -> Shape<'_> {
                    Shape::Scalar(self)
                }

                fn same_as(&self, other: &dyn Property) -> bool {
                    same_value(self, other)
                }

                fn assign(&mut self, value: Box<dyn Any>) -> Result<(), &'static str> {
                    assign_boxed(self, value)
                }
            }
        )*
    };
}

scalar_property!(
    bool, char, i8, i16, i32, i64, i128, isize, u8, u16, u32, u64, u128, usize, f32, f64,
);

macro_rules! text_property {
    ($($ty:ty),* $(,)?) => {
        $(
            impl Property for $ty {
                fn shape(&self) -> Shape<'_> {
                    Shape::Text(self)
                }

                fn same_as(&self, other: &dyn Property) -> bool {
                    same_text(self, other)
                }

                fn assign(&mut self, value: Box<dyn Any>) -> Result<(), &'static str> {
                    assign_boxed(self, value)
                }
            }
        )*
    };
}

text_property!(String, &'static str, Box<str>, Cow<'static, str>);

impl<T: Property> Property for Option<T> {
    fn shape(&self) -> Shape<'_> {
        self.as_ref().map_or(Shape::Absent, Property::shape)
    }

    fn same_as(&self, other: &dyn Property) -> bool {
        let other: &dyn Any = other;
        match (self, other.downcast_ref::<Self>()) {
            (None, Some(None)) => true,
            (Some(this), Some(Some(other))) => this.same_as(other),
            _ => false,
        }
    }

    fn assign(&mut self, value: Box<dyn Any>) -> Result<(), &'static str> {
        assign_boxed(self, value)
    }
}

impl<R: Record + 'static> Property for Rc<R> {
    fn shape(&self) -> Shape<'_> {
        Shape::Record(&**self)
    }

    fn same_as(&self, other: &dyn Property) -> bool {
        let other: &dyn Any = other;
        other
            .downcast_ref::<Self>()
            .is_some_and(|other| Self::ptr_eq(self, other))
    }

    fn assign(&mut self, value: Box<dyn Any>) -> Result<(), &'static str> {
        assign_boxed(self, value)
    }
}

impl<R: Record + 'static> Property for Arc<R> {
    fn shape(&self) -> Shape<'_> {
        Shape::Record(&**self)
    }

    fn same_as(&self, other: &dyn Property) -> bool {
        let other: &dyn Any = other;
        other
            .downcast_ref::<Self>()
            .is_some_and(|other| Self::ptr_eq(self, other))
    }

    fn assign(&mut self, value: Box<dyn Any>) -> Result<(), &'static str> {
        assign_boxed(self, value)
    }
}
