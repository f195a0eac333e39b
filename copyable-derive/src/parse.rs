//! Attribute parsing shared by the `Copyable` and `Record` derives.

use darling::{FromDeriveInput, FromField, ast};
use syn::{Generics, Ident, Type, Visibility};

/// Parsed struct-level options.
#[derive(Debug, FromDeriveInput)]
#[darling(attributes(copyable), supports(struct_named))]
pub struct ObjectInput {
    /// The struct identifier.
    pub ident: Ident,

    /// Generic parameters.
    pub generics: Generics,

    /// Struct data (fields).
    pub data: ast::Data<(), FieldInput>,

    /// Type name used by the printer (`#[copyable(name = "Point2D")]`).
    #[darling(default)]
    pub name: Option<String>,
}

impl ObjectInput {
    /// Get the fields in declaration order.
    pub fn fields(&self) -> Vec<&FieldInput> {
        self.data
            .as_ref()
            .take_struct()
            .map(|fields| fields.fields)
            .unwrap_or_default()
    }

    /// Name reported by `type_name` and printed in front of the field block.
    pub fn display_name(&self) -> String {
        self.name
            .clone()
            .unwrap_or_else(|| self.ident.to_string())
    }
}

/// Parsed field-level options.
#[derive(Debug, FromField)]
#[darling(attributes(copyable))]
pub struct FieldInput {
    /// Field identifier.
    pub ident: Option<Ident>,

    /// Field visibility, reused for the generated key method.
    pub vis: Visibility,

    /// Field type.
    pub ty: Type,

    /// Name used by introspection and rendering.
    #[darling(default)]
    pub rename: Option<String>,

    /// Keep the field out of introspection, equality and rendering.
    #[darling(default)]
    pub skip: bool,

    /// Splice the fields of a nested value object into this one.
    #[darling(default)]
    pub flatten: bool,
}

impl FieldInput {
    /// Get the field identifier (panics if None).
    pub fn ident(&self) -> &Ident {
        self.ident.as_ref().expect("named field required")
    }

    /// Own-field name of this field.
    pub fn key(&self) -> String {
        self.rename
            .clone()
            .unwrap_or_else(|| self.ident().to_string())
    }

    /// Check if this field takes part in introspection.
    pub const fn is_included(&self) -> bool {
        !self.skip
    }
}

/// Rejects attribute combinations that have no meaning.
pub fn validate(parsed: &ObjectInput, allow_flatten: bool) -> syn::Result<()> {
    for field in parsed.fields() {
        if field.flatten && !allow_flatten {
            return Err(syn::Error::new_spanned(
                field.ident(),
                "#[copyable(flatten)] is only supported by #[derive(Copyable)].",
            ));
        }
        if field.flatten && field.rename.is_some() {
            return Err(syn::Error::new_spanned(
                field.ident(),
                "#[copyable(flatten)] and #[copyable(rename)] cannot be used together. \
                 Flattened fields are merged into the parent, so the outer name is never visible.",
            ));
        }
        if field.flatten && field.skip {
            return Err(syn::Error::new_spanned(
                field.ident(),
                "#[copyable(flatten)] and #[copyable(skip)] cannot be used together.",
            ));
        }
    }
    Ok(())
}
