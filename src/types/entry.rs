// src/types/entry.rs
use super::PublishedFileId;
use serde::Serialize;

/// One deduplicated subscribed item.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Entry {
    pub title: String,
    pub id: PublishedFileId,
    pub selected: bool,
}

impl Entry {
    /// New entries start selected.
    pub fn new(title: impl Into<String>, id: PublishedFileId) -> Self {
        Self {
            title: title.into(),
            id,
            selected: true,
        }
    }

    /// The `(id)` label shown next to the title in the checklist.
    pub fn id_label(&self) -> String {
        format!("({})", self.id)
    }

    /// Case-insensitive match against the title or the id label.
    ///
    /// `query` must already be lowercase.
    pub fn matches_filter(&self, query: &str) -> bool {
        self.title.to_lowercase().contains(query) || self.id_label().contains(query)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn entry(title: &str, id: &str) -> Entry {
        Entry::new(title, PublishedFileId::parse(id).unwrap())
    }

    #[test]
    fn test_new_entry_is_selected() {
        assert!(entry("Foo", "1").selected);
    }

    #[test]
    fn test_matches_filter() {
        let e = entry("Better Turrets", "12345");
        assert!(e.matches_filter("turret"));
        assert!(e.matches_filter("234"));
        assert!(e.matches_filter("(12345)"));
        assert!(e.matches_filter(""));
        assert!(!e.matches_filter("armor"));
    }
}
