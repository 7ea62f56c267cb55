// src/serialize/mod.rs
//! Pure serializers from selected entries to export payloads.
//!
//! Both layouts take entries that are already filtered to the selection and
//! keep their order. Nothing here looks at `Entry::selected`.

mod csv;
mod xml;

pub use csv::{escape_csv_field, render_csv};
pub use xml::{escape_xml, render_xml};

use crate::types::{Entry, ExportFormat};

/// Renders `entries` in the given layout.
pub fn render<'a, I>(format: ExportFormat, entries: I) -> String
where
    I: IntoIterator<Item = &'a Entry>,
{
    match format {
        ExportFormat::Xml => render_xml(entries),
        ExportFormat::Csv => render_csv(entries),
    }
}
