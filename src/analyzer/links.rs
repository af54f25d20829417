//! Link resolution and classification
//!
//! Walks every hyperlink reference in the document, resolves it against the
//! page's base URL, strips fragment and query string down to the canonical
//! comparison form, and tags it internal or external. A reference that fails
//! to resolve is logged and skipped; it never fails the analysis.

use crate::report::{LinkRecord, LinkScope};
use scraper::{Html, Selector};
use url::Url;

/// Resolves and classifies every eligible hyperlink on the page
///
/// Skipped outright: missing, empty, and anchor-only (`#`) references.
/// Classification: internal iff the resolved host equals the base URL's host
/// exactly; everything else (other hosts, hostless schemes like mailto:) is
/// external.
pub fn classify_links(document: &Html, base_url: &Url) -> Vec<LinkRecord> {
    let mut records = Vec::new();

    let anchor_selector = match Selector::parse("a[href]") {
        Ok(selector) => selector,
        Err(_) => return records,
    };

    for element in document.select(&anchor_selector) {
        let href = element.value().attr("href").unwrap_or("");
        if href.is_empty() || href == "#" {
            continue;
        }

        let resolved = match base_url.join(href) {
            Ok(resolved) => resolved,
            Err(error) => {
                tracing::debug!(
                    "Skipping unresolvable link {} on {}: {}",
                    href,
                    base_url,
                    error
                );
                continue;
            }
        };

        let scope = if resolved.host_str() == base_url.host_str() {
            LinkScope::Internal
        } else {
            LinkScope::External
        };

        records.push(LinkRecord::new(strip_for_comparison(resolved), scope));
    }

    records
}

/// Strips fragment and query string, producing the canonical comparison form
fn strip_for_comparison(mut url: Url) -> Url {
    url.set_fragment(None);
    url.set_query(None);
    url
}
