// tests/export_formats.rs
//! Serializer behavior over collected and selected entries.

use pretty_assertions::assert_eq;
use url::Url;
use workshop_export::{
    collect_entries, render, render_csv, render_xml, Entry, ExportFormat, HtmlPage,
    PublishedFileId, SelectionStore,
};

const SUBSCRIPTIONS_PAGE: &str = include_str!("fixtures/subscriptions.html");

fn entry(title: &str, id: &str) -> Entry {
    Entry::new(title, PublishedFileId::parse(id).unwrap())
}

fn saved_page_store() -> SelectionStore {
    let base = Url::parse("https://steamcommunity.com").ok();
    let page = HtmlPage::parse(SUBSCRIPTIONS_PAGE, base);
    SelectionStore::new(collect_entries(&page).unwrap())
}

#[test]
fn test_saved_page_csv() {
    let store = saved_page_store();
    let csv = render(ExportFormat::Csv, store.selected());
    insta::assert_snapshot!("saved_page_csv", csv);
}

#[test]
fn test_foo_bar_example_xml() {
    let entries = vec![entry("Foo", "123"), entry("Bar", "456")];
    let expected = concat!(
        "    <ModItem FriendlyName=\"Foo\">\n",
        "      <Name>123.sbm</Name>\n",
        "      <PublishedFileId>123</PublishedFileId>\n",
        "      <PublishedServiceName>Steam</PublishedServiceName>\n",
        "    </ModItem>\n",
        "    <ModItem FriendlyName=\"Bar\">\n",
        "      <Name>456.sbm</Name>\n",
        "      <PublishedFileId>456</PublishedFileId>\n",
        "      <PublishedServiceName>Steam</PublishedServiceName>\n",
        "    </ModItem>\n",
    );
    assert_eq!(render_xml(&entries), expected);
}

#[test]
fn test_title_escaping_in_both_formats() {
    let quoted = entry(r#"He said "hi", bye"#, "1");
    assert_eq!(
        render_csv([&quoted]),
        "FriendlyName,Name,PublishedFileId,PublishedServiceName\n\
         \"He said \"\"hi\"\", bye\",1.sbm,1,Steam\n"
    );

    let markup = entry("A & B <C>", "2");
    let xml = render_xml([&markup]);
    assert!(xml.starts_with("    <ModItem FriendlyName=\"A &amp; B &lt;C&gt;\">\n"));
}

#[test]
fn test_only_selected_ids_are_exported_once() {
    let mut store = SelectionStore::new(vec![
        entry("One", "11"),
        entry("Two", "22"),
        entry("Three", "33"),
        entry("Four", "44"),
    ]);
    store.set_selected(1, false).unwrap();
    store.set_selected(3, false).unwrap();

    let xml = render(ExportFormat::Xml, store.selected());
    let csv = render(ExportFormat::Csv, store.selected());

    for id in ["11", "33"] {
        let tag = format!("<PublishedFileId>{}</PublishedFileId>", id);
        assert_eq!(xml.matches(&tag).count(), 1, "xml for {}", id);
        let row_count = csv
            .lines()
            .filter(|line| line.split(',').nth(2) == Some(id))
            .count();
        assert_eq!(row_count, 1, "csv for {}", id);
    }
    for id in ["22", "44"] {
        assert!(!xml.contains(&format!("<PublishedFileId>{}<", id)));
        assert!(!csv.contains(&format!(",{}.sbm,", id)));
    }
}

#[test]
fn test_select_all_roundtrip() {
    let mut store = saved_page_store();
    let total = store.len();

    store.select_all(false);
    assert!(store.selected().is_empty());
    assert_eq!(store.count().to_string(), format!("0/{} mods", total));

    store.select_all(true);
    assert_eq!(store.selected().len(), total);
    assert_eq!(render_csv(store.selected()).lines().count(), total + 1);
}

#[test]
fn test_empty_selection_renders_header_only() {
    assert_eq!(render_xml(std::iter::empty()), "");
    assert_eq!(
        render_csv(std::iter::empty()),
        "FriendlyName,Name,PublishedFileId,PublishedServiceName\n"
    );
}
