use crate::filter::{LinkFilter, normalize_url};
use scraper::{Html, Selector};
use std::collections::HashSet;
use url::Url;

/// Extracts the same-domain links worth crawling from one HTML document.
///
/// Hrefs carrying a fragment and `mailto:`/`tel:`/`javascript:` schemes
/// never reach resolution; everything else is resolved against the page's
/// own URL, run through the filter, normalized, and deduplicated in
/// first-seen order. A malformed individual href is silently skipped.
pub fn extract_links(html: &str, base: &Url, filter: &LinkFilter) -> Vec<String> {
    let doc = Html::parse_document(html);
    let selector = Selector::parse("a[href]").unwrap();

    let mut seen = HashSet::new();
    let mut links = Vec::new();

    for element in doc.select(&selector) {
        let Some(href) = element.value().attr("href") else {
            continue;
        };
        let href = href.trim();

        if href.is_empty() || href.contains('#') {
            continue;
        }

        let lower = href.to_ascii_lowercase();
        if lower.starts_with("mailto:")
            || lower.starts_with("tel:")
            || lower.starts_with("javascript:")
        {
            continue;
        }

        let Ok(resolved) = base.join(href) else {
            ::log::debug!("skipping malformed href: {}", href);
            continue;
        };

        if !filter.should_follow(&resolved) {
            continue;
        }

        let normalized = normalize_url(&resolved);
        if seen.insert(normalized.clone()) {
            links.push(normalized);
        }
    }

    ::log::debug!("extracted {} links from {}", links.len(), base);
    links
}
