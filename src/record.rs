//! Plain structures rendered in the compact form.
//!
//! A [`Record`] is any structure that is not a value object but still has
//! named entries worth printing, such as a `#[derive(Record)]` struct or a
//! `BTreeMap<String, V>` or a `Vec<V>`. Inside a value object records are held behind
//! `Rc`/`Arc`, so copies alias them and equality compares them by identity.

use std::collections::BTreeMap;

use crate::property::Property;

/// A plain structure with named entries.
pub trait Record {
    /// Name printed in front of the entries; empty for anonymous maps.
    fn record_name(&self) -> &str;

    /// Calls `visitor` with every entry, in a deterministic order.
    ///
    /// Entry names may be computed on the fly, so they only live for the
    /// duration of the call.
    fn visit_entries<'a>(&'a self, visitor: &mut dyn FnMut(&str, &'a dyn Property));
}

impl<V: Property> Record for BTreeMap<String, V> {
    fn record_name(&self) -> &str {
        ""
    }

    fn visit_entries<'a>(&'a self, visitor: &mut dyn FnMut(&str, &'a dyn Property)) {
        for (key, value) in self {
            visitor(key, value);
        }
    }
}

/// Lists render by index: `Vec { 0: 1, 1: 2 }`.
impl<V: Property> Record for Vec<V> {
    fn record_name(&self) -> &str {
        "Vec"
    }

    fn visit_entries<'a>(&'a self, visitor: &mut dyn FnMut(&str, &'a dyn Property)) {
        for (index, value) in self.iter().enumerate() {
            visitor(&index.to_string(), value);
        }
    }
}
