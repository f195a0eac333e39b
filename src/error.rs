//! Errors reported by the dynamic copy path.
//!
//! The typed API (`copy_with`, `map_with` and friends) cannot fail: field
//! keys are checked at compile time. Patches addressed by field name are
//! only checked when applied, and report failures with [`PatchError`].

/// Represents a dynamic patch entry that could not be applied.
///
/// # Examples
///
/// ```rust
/// use copyable::PatchError;
///
/// let error = PatchError::UnknownField {
///     type_name: "Person",
///     field: "nickname".to_string(),
/// };
/// assert_eq!(format!("{error}"), "Person has no own field `nickname`");
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PatchError {
    /// The name is not an own field of the target.
    UnknownField {
        /// Name of the patched value object type.
        type_name: &'static str,
        /// The rejected field name.
        field: String,
    },
    /// The value does not have the field's type.
    TypeMismatch {
        /// Name of the patched value object type.
        type_name: &'static str,
        /// The field the value was meant for.
        field: String,
        /// Type the field holds.
        expected: &'static str,
    },
}

impl PatchError {
    /// Returns the field name the failing entry targeted.
    #[must_use]
    pub fn field(&self) -> &str {
        match self {
            Self::UnknownField { field, .. } | Self::TypeMismatch { field, .. } => field,
        }
    }
}

impl std::fmt::Display for PatchError {
    fn fmt(&self, formatter: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::UnknownField { type_name, field } => {
                write!(formatter, "{type_name} has no own field `{field}`")
            }
            Self::TypeMismatch {
                type_name,
                field,
                expected,
            } => write!(
                formatter,
                "{type_name}::{field}: expected a value of type `{expected}`"
            ),
        }
    }
}

impl std::error::Error for PatchError {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_type_mismatch_display() {
        let error = PatchError::TypeMismatch {
            type_name: "Person",
            field: "age".to_string(),
            expected: "u32",
        };
        assert_eq!(
            format!("{error}"),
            "Person::age: expected a value of type `u32`"
        );
        assert_eq!(error.field(), "age");
    }

    #[test]
    fn test_is_std_error() {
        let error: Box<dyn std::error::Error> = Box::new(PatchError::UnknownField {
            type_name: "Book",
            field: "author".to_string(),
        });
        assert_eq!(error.to_string(), "Book has no own field `author`");
    }
}
