// src/source/mod.rs
//! Node discovery behind a narrow interface.
//!
//! The collector never touches markup directly. It asks a [`NodeSource`] for
//! the nodes matching a selector and works on the plain [`CandidateNode`]
//! values it gets back, so tests can feed prepared node lists.

mod html;

pub use html::HtmlPage;

use crate::constants::ENTRY_CONTAINER_SELECTORS;

/// What the collector needs to know about one entry container.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CandidateNode {
    /// Text of the title sub-element, or `None` when the node has none.
    pub title: Option<String>,
    /// Hrefs of every anchor in the node, in document order. Anchors without
    /// an `href` attribute contribute an empty string.
    pub links: Vec<String>,
}

impl CandidateNode {
    pub fn new(title: Option<&str>, links: &[&str]) -> Self {
        Self {
            title: title.map(str::to_string),
            links: links.iter().map(|l| l.to_string()).collect(),
        }
    }

    /// The first link containing `marker`, else the first link of the node.
    pub fn representative_link(&self, marker: &str) -> Option<&str> {
        self.links
            .iter()
            .find(|href| href.contains(marker))
            .or_else(|| self.links.first())
            .map(String::as_str)
    }
}

/// Anything that can answer "which nodes match this selector".
pub trait NodeSource {
    fn query(&self, selector: &str) -> Vec<CandidateNode>;
}

impl<T: NodeSource + ?Sized> NodeSource for &T {
    fn query(&self, selector: &str) -> Vec<CandidateNode> {
        (**self).query(selector)
    }
}

/// Tries the container selectors in priority order; the first non-empty
/// result wins. `None` means no selector matched anything.
pub fn discover_nodes<S: NodeSource + ?Sized>(source: &S) -> Option<Vec<CandidateNode>> {
    ENTRY_CONTAINER_SELECTORS.iter().find_map(|selector| {
        let nodes = source.query(selector);
        if nodes.is_empty() {
            log::debug!("Selector '{}' matched no nodes", selector);
            None
        } else {
            log::debug!("Selector '{}' matched {} nodes", selector, nodes.len());
            Some(nodes)
        }
    })
}
