// src/collect.rs
//! Builds the entry collection from a node source.
//!
//! One full scan produces a fresh collection: entries in document order,
//! deduplicated by published file ID (first occurrence wins), all selected.

use crate::constants::{ITEM_LINK_MARKER, UNKNOWN_TITLE};
use crate::extract::extract_published_file_id;
use crate::source::{discover_nodes, CandidateNode, NodeSource};
use crate::types::{Entry, PublishedFileId};
use indexmap::map::Entry as MapEntry;
use indexmap::IndexMap;

/// Scans the source for subscribed items.
///
/// Returns `None` when no container selector matched any node, and
/// `Some(vec![])` when nodes were found but none carried a usable link.
pub fn collect_entries<S: NodeSource + ?Sized>(source: &S) -> Option<Vec<Entry>> {
    let nodes = discover_nodes(source)?;
    let entries = entries_from_nodes(&nodes);

    log::info!(
        "Collected {} unique entries from {} candidate nodes",
        entries.len(),
        nodes.len()
    );
    Some(entries)
}

/// Per-node extraction and ordered dedup.
pub fn entries_from_nodes(nodes: &[CandidateNode]) -> Vec<Entry> {
    let mut by_id: IndexMap<PublishedFileId, Entry> = IndexMap::with_capacity(nodes.len());

    for (position, node) in nodes.iter().enumerate() {
        let Some(link) = node.representative_link(ITEM_LINK_MARKER) else {
            log::debug!("Node {} has no link, skipping", position);
            continue;
        };

        let Some(id) = extract_published_file_id(link) else {
            log::debug!("No published file ID in '{}' (node {}), skipping", link, position);
            continue;
        };

        match by_id.entry(id) {
            MapEntry::Vacant(slot) => {
                let title = node.title.as_deref().unwrap_or(UNKNOWN_TITLE);
                let id = slot.key().clone();
                slot.insert(Entry::new(title, id));
            }
            MapEntry::Occupied(existing) => {
                log::debug!(
                    "Duplicate ID {} at node {}, keeping '{}'",
                    existing.key(),
                    position,
                    existing.get().title
                );
            }
        }
    }

    by_id.into_values().collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn ids(entries: &[Entry]) -> Vec<&str> {
        entries.iter().map(|e| e.id.as_str()).collect()
    }

    #[test]
    fn test_first_occurrence_wins() {
        let nodes = vec![
            CandidateNode::new(Some("Foo"), &["https://x.test/filedetails/?id=123"]),
            CandidateNode::new(Some("Bar"), &["https://x.test/456/"]),
            CandidateNode::new(Some("Dup"), &["https://x.test/filedetails/?id=123"]),
        ];

        let entries = entries_from_nodes(&nodes);
        assert_eq!(ids(&entries), vec!["123", "456"]);
        assert_eq!(entries[0].title, "Foo");
        assert!(entries.iter().all(|e| e.selected));
    }

    #[test]
    fn test_missing_title_uses_placeholder() {
        let nodes = vec![CandidateNode::new(None, &["https://x.test/?id=1"])];
        assert_eq!(entries_from_nodes(&nodes)[0].title, "Unknown Title");
    }

    #[test]
    fn test_empty_title_is_kept() {
        let nodes = vec![CandidateNode::new(Some(""), &["https://x.test/?id=1"])];
        assert_eq!(entries_from_nodes(&nodes)[0].title, "");
    }

    #[test]
    fn test_nodes_without_usable_links_are_skipped() {
        let nodes = vec![
            CandidateNode::new(Some("No links"), &[]),
            CandidateNode::new(Some("No href"), &[""]),
            CandidateNode::new(Some("Profile only"), &["https://x.test/id/someone/"]),
            CandidateNode::new(Some("Good"), &["https://x.test/?id=9"]),
        ];
        let entries = entries_from_nodes(&nodes);
        assert_eq!(ids(&entries), vec!["9"]);
    }

    #[test]
    fn test_marker_link_preferred_over_first_link() {
        let nodes = vec![CandidateNode::new(
            Some("Item"),
            &["https://x.test/profiles/765/", "https://x.test/filedetails/?id=321"],
        )];
        assert_eq!(ids(&entries_from_nodes(&nodes)), vec!["321"]);
    }

    #[test]
    fn test_first_link_used_without_marker() {
        // The first link decides, even when a later one would have matched.
        let nodes = vec![CandidateNode::new(
            Some("Item"),
            &["https://x.test/profiles/765/", "https://x.test/workshop/321/"],
        )];
        assert_eq!(ids(&entries_from_nodes(&nodes)), vec!["765"]);
    }
}
