//! Deterministic textual rendering.
//!
//! Value objects print in the structured form:
//!
//! ```text
//! Person(
//!   name="John",
//!   age=25
//! )
//! ```
//!
//! and every other structure in the compact form:
//!
//! ```text
//! Pair { a: 5, b: 6 }
//! ```
//!
//! Field values render recursively: value objects structured, records
//! compact, text in double quotes, and everything else through its `Display`
//! conversion. The field block of a structured value is indented line by
//! line, so nested value objects nest correctly.
//!
//! # Example
//!
//! ```
//! use copyable::Copyable;
//!
//! #[derive(Clone, Copyable)]
//! struct Inner { bool: bool, str: String }
//!
//! #[derive(Clone, Copyable)]
//! struct Outer { num: i32, inner: Inner }
//!
//! let outer = Outer {
//!     num: 10,
//!     inner: Inner { bool: true, str: "hello world".to_string() },
//! };
//!
//! assert_eq!(
//!     outer.to_string(),
//!     "Outer(\n  num=10,\n  inner=Inner(\n    bool=true,\n    str=\"hello world\"\n  )\n)"
//! );
//! ```

use crate::property::{Introspect, Property, Shape};
use crate::record::Record;

/// Punctuation of one rendering style.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PrinterOptions {
    /// Printed between the type name and the first field.
    pub open: &'static str,
    /// Printed after the last field.
    pub close: &'static str,
    /// Printed between two fields.
    pub delimiter: &'static str,
    /// Number of spaces the field block is indented by.
    pub indent: usize,
    /// Printed between a field name and its value.
    pub eq: &'static str,
}

/// Multi-line form used for value objects.
pub const STRUCTURED: PrinterOptions = PrinterOptions {
    open: "(\n",
    close: "\n)",
    delimiter: ",\n",
    indent: 2,
    eq: "=",
};

/// Single-line form used for every other structure.
pub const COMPACT: PrinterOptions = PrinterOptions {
    open: " { ",
    close: " }",
    delimiter: ", ",
    indent: 0,
    eq: ": ",
};

/// Renders named fields with a fixed set of [`PrinterOptions`].
///
/// Only the outermost level uses the printer's options; field values are
/// rendered with [`render`].
///
/// # Example
///
/// ```
/// use copyable::printer::{ObjectPrinter, PrinterOptions};
///
/// let printer = ObjectPrinter::new(PrinterOptions {
///     open: "<",
///     close: ">",
///     delimiter: "; ",
///     indent: 0,
///     eq: " -> ",
/// });
///
/// let fields: [(&str, &dyn copyable::Property); 2] = [("x", &1), ("y", &"two")];
/// assert_eq!(printer.print("Point", &fields), "Point<x -> 1; y -> \"two\">");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ObjectPrinter {
    options: PrinterOptions,
}

impl ObjectPrinter {
    /// Creates a printer with the given options.
    #[must_use]
    pub const fn new(options: PrinterOptions) -> Self {
        Self { options }
    }

    /// Returns the printer's options.
    #[must_use]
    pub const fn options(&self) -> &PrinterOptions {
        &self.options
    }

    /// Renders `name` followed by `fields`.
    ///
    /// An empty `name` drops the whitespace before the opening punctuation.
    /// An empty field list still prints both punctuation strings, so a
    /// structured value without fields renders as `Name(\n\n)`.
    #[must_use]
    pub fn print(&self, name: &str, fields: &[(&str, &dyn Property)]) -> String {
        let PrinterOptions {
            open,
            close,
            delimiter,
            indent: size,
            eq,
        } = self.options;

        let block = fields
            .iter()
            .map(|(key, value)| format!("{key}{eq}{}", render(*value)))
            .collect::<Vec<_>>()
            .join(delimiter);
        let open = if name.is_empty() { open.trim_start() } else { open };

        format!("{name}{open}{}{close}", indent(&block, size))
    }

    /// Renders a value object's own fields.
    #[must_use]
    pub fn print_object(&self, object: &dyn Introspect) -> String {
        let mut fields = Vec::new();
        object.visit_fields(&mut |name, value| fields.push((name, value)));
        self.print(object.type_name(), &fields)
    }

    /// Renders a record's entries.
    #[must_use]
    pub fn print_record(&self, record: &dyn Record) -> String {
        let mut entries = Vec::new();
        record.visit_entries(&mut |name, value| entries.push((name.to_owned(), value)));
        let fields: Vec<(&str, &dyn Property)> = entries
            .iter()
            .map(|(name, value)| (name.as_str(), *value))
            .collect();
        self.print(record.record_name(), &fields)
    }
}

/// Renders a value object in the structured form.
///
/// This is what `Display` of a `#[derive(Copyable)]` type prints.
#[must_use]
pub fn render_structured(object: &dyn Introspect) -> String {
    ObjectPrinter::new(STRUCTURED).print_object(object)
}

/// Renders a record in the compact form.
#[must_use]
pub fn render_compact(record: &dyn Record) -> String {
    ObjectPrinter::new(COMPACT).print_record(record)
}

/// Renders a single field value.
#[must_use]
pub fn render(value: &dyn Property) -> String {
    match value.shape() {
        Shape::Object(object) => render_structured(object),
        Shape::Record(record) => render_compact(record),
        Shape::Text(text) => format!("\"{text}\""),
        Shape::Scalar(scalar) => scalar.to_string(),
        Shape::Absent => "None".to_owned(),
    }
}

/// Prefixes every non-blank line of `text` with `size` spaces.
///
/// Returns `text` unchanged when `size` is zero.
///
/// # Example
///
/// ```
/// use copyable::printer::indent;
///
/// assert_eq!(indent("a\n\nb", 2), "  a\n\n  b");
/// assert_eq!(indent("a", 0), "a");
/// ```
#[must_use]
pub fn indent(text: &str, size: usize) -> String {
    if size == 0 {
        return text.to_owned();
    }
    let prefix = " ".repeat(size);
    text.split('\n')
        .map(|line| {
            if line.trim().is_empty() {
                line.to_owned()
            } else {
                format!("{prefix}{line}")
            }
        })
        .collect::<Vec<_>>()
        .join("\n")
}
