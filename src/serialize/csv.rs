// src/serialize/csv.rs
use crate::constants::{CHARS_PER_ENTRY_ESTIMATE, CSV_HEADER, SERVICE_NAME};
use crate::types::Entry;
use std::fmt::Write;

/// Header row plus one row per entry; every line ends with `\n`.
pub fn render_csv<'a, I>(entries: I) -> String
where
    I: IntoIterator<Item = &'a Entry>,
{
    let entries = entries.into_iter();
    let mut out = String::with_capacity(
        CSV_HEADER.len() + 1 + entries.size_hint().0 * CHARS_PER_ENTRY_ESTIMATE / 2,
    );
    out.push_str(CSV_HEADER);
    out.push('\n');

    for entry in entries {
        let _ = writeln!(
            out,
            "\"{}\",{},{},{}",
            escape_csv_field(&entry.title),
            entry.id.mod_file_name(),
            entry.id,
            SERVICE_NAME
        );
    }

    out
}

/// Doubles embedded quotes when the field holds a quote or a comma.
///
/// The caller always wraps the result in quotes.
pub fn escape_csv_field(raw: &str) -> String {
    if raw.contains('"') || raw.contains(',') {
        raw.replace('"', "\"\"")
    } else {
        raw.to_string()
    }
}
