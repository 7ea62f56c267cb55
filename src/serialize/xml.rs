// src/serialize/xml.rs
use crate::constants::{CHARS_PER_ENTRY_ESTIMATE, SERVICE_NAME};
use crate::types::Entry;
use std::fmt::Write;

/// One `<ModItem>` block per entry, without a surrounding root element.
pub fn render_xml<'a, I>(entries: I) -> String
where
    I: IntoIterator<Item = &'a Entry>,
{
    let entries = entries.into_iter();
    let mut out = String::with_capacity(entries.size_hint().0 * CHARS_PER_ENTRY_ESTIMATE);

    for entry in entries {
        // Writing into a String cannot fail.
        let _ = write!(
            out,
            concat!(
                "    <ModItem FriendlyName=\"{title}\">\n",
                "      <Name>{name}</Name>\n",
                "      <PublishedFileId>{id}</PublishedFileId>\n",
                "      <PublishedServiceName>{service}</PublishedServiceName>\n",
                "    </ModItem>\n",
            ),
            title = escape_xml(&entry.title),
            name = entry.id.mod_file_name(),
            id = entry.id,
            service = SERVICE_NAME,
        );
    }

    out
}

/// Escapes the five XML special characters, ampersand first.
pub fn escape_xml(raw: &str) -> String {
    raw.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
        .replace('\'', "&apos;")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::PublishedFileId;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_escape_xml() {
        assert_eq!(escape_xml("A & B <C>"), "A &amp; B &lt;C&gt;");
        assert_eq!(escape_xml(r#"Say "hi", it's"#), "Say &quot;hi&quot;, it&apos;s");
        // Existing entities are escaped again, not passed through
        assert_eq!(escape_xml("&lt;"), "&amp;lt;");
        assert_eq!(escape_xml("plain"), "plain");
    }

    #[test]
    fn test_render_single_entry() {
        let entry = Entry::new("A & B <C>", PublishedFileId::parse("123").unwrap());
        let xml = render_xml([&entry]);
        assert_eq!(
            xml,
            "    <ModItem FriendlyName=\"A &amp; B &lt;C&gt;\">\n\
             \x20     <Name>123.sbm</Name>\n\
             \x20     <PublishedFileId>123</PublishedFileId>\n\
             \x20     <PublishedServiceName>Steam</PublishedServiceName>\n\
             \x20   </ModItem>\n"
        );
    }

    #[test]
    fn test_render_empty() {
        let none: Vec<&Entry> = Vec::new();
        assert_eq!(render_xml(none), "");
    }
}
