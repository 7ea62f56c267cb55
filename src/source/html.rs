// src/source/html.rs
//! [`NodeSource`] over a parsed HTML document.

use super::{CandidateNode, NodeSource};
use crate::constants::ENTRY_TITLE_SELECTOR;
use scraper::{ElementRef, Html, Selector};
use url::Url;

/// A saved (or piped) subscriptions page.
pub struct HtmlPage {
    document: Html,
    base_url: Option<Url>,
    title_selector: Selector,
    anchor_selector: Selector,
}

impl HtmlPage {
    /// Parses a full HTML document. Relative hrefs are resolved against
    /// `base_url` when one is given, the way a browser reports `anchor.href`.
    pub fn parse(html: &str, base_url: Option<Url>) -> Self {
        let document = Html::parse_document(html);
        if !document.errors.is_empty() {
            log::debug!("HTML parser reported {} recoverable errors", document.errors.len());
        }

        Self {
            document,
            base_url,
            title_selector: Selector::parse(ENTRY_TITLE_SELECTOR)
                .expect("Failed to compile title selector - this is a bug in the code"),
            anchor_selector: Selector::parse("a")
                .expect("Failed to compile anchor selector - this is a bug in the code"),
        }
    }

    fn candidate_from(&self, element: ElementRef<'_>) -> CandidateNode {
        let title = element
            .select(&self.title_selector)
            .next()
            .map(|t| collapse_whitespace(&t.text().collect::<String>()));

        let links = element
            .select(&self.anchor_selector)
            .map(|a| match a.value().attr("href") {
                Some(href) => self.resolve_href(href),
                None => String::new(),
            })
            .collect();

        CandidateNode { title, links }
    }

    fn resolve_href(&self, href: &str) -> String {
        let href = href.trim();
        match &self.base_url {
            Some(base) => base
                .join(href)
                .map(|u| u.to_string())
                .unwrap_or_else(|_| href.to_string()),
            None => href.to_string(),
        }
    }
}

impl NodeSource for HtmlPage {
    fn query(&self, selector: &str) -> Vec<CandidateNode> {
        let parsed = match Selector::parse(selector) {
            Ok(parsed) => parsed,
            Err(e) => {
                log::warn!("Ignoring invalid selector '{}': {:?}", selector, e);
                return Vec::new();
            }
        };

        self.document
            .select(&parsed)
            .map(|element| self.candidate_from(element))
            .collect()
    }
}

/// Trims and collapses runs of whitespace, approximating rendered text.
fn collapse_whitespace(s: &str) -> String {
    s.split_whitespace().collect::<Vec<_>>().join(" ")
}
