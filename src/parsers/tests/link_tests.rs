use crate::config::CrawlConfig;
use crate::filter::LinkFilter;
use crate::parsers::links::extract_links;
use url::Url;

#[cfg(test)]
mod tests {
    use super::*;

    fn example_filter() -> LinkFilter {
        let config = CrawlConfig::new("https://example.com");
        LinkFilter::new("example.com", &config.skip_patterns).unwrap()
    }

    fn base() -> Url {
        Url::parse("https://example.com/").unwrap()
    }

    #[test]
    fn test_links_returned_in_document_order() {
        let html = r#"
            <a href="/pricing">Pricing</a>
            <a href="/about">About</a>
            <a href="/contact">Contact</a>
        "#;
        let links = extract_links(html, &base(), &example_filter());
        assert_eq!(
            links,
            vec![
                "https://example.com/pricing",
                "https://example.com/about",
                "https://example.com/contact",
            ]
        );
    }

    #[test]
    fn test_other_hostnames_filtered_out() {
        let html = r#"<a href="https://other.com/page">Elsewhere</a>
                      <a href="/local">Local</a>"#;
        let links = extract_links(html, &base(), &example_filter());
        assert_eq!(links, vec!["https://example.com/local"]);
    }

    #[test]
    fn test_asset_links_filtered_out() {
        let html = r#"<a href="https://example.com/img.png">Image</a>"#;
        let links = extract_links(html, &base(), &example_filter());
        assert!(links.is_empty());
    }

    #[test]
    fn test_fragment_hrefs_never_resolved() {
        let html = r##"<a href="#top">Top</a>
                       <a href="/about#team">Team</a>
                       <a href="/about">About</a>"##;
        let links = extract_links(html, &base(), &example_filter());
        assert_eq!(links, vec!["https://example.com/about"]);
    }

    #[test]
    fn test_non_web_schemes_skipped() {
        let html = r#"<a href="mailto:hello@example.com">Mail</a>
                      <a href="tel:+15550100">Call</a>
                      <a href="javascript:void(0)">Click</a>"#;
        let links = extract_links(html, &base(), &example_filter());
        assert!(links.is_empty());
    }

    #[test]
    fn test_trailing_slash_and_query_collapse_to_one_entry() {
        let html = r#"<a href="/about">A</a>
                      <a href="/about/">B</a>
                      <a href="/about?utm_source=nav">C</a>"#;
        let links = extract_links(html, &base(), &example_filter());
        assert_eq!(links, vec!["https://example.com/about"]);
    }

    #[test]
    fn test_relative_hrefs_resolve_against_page_url() {
        let page = Url::parse("https://example.com/blog/post-1").unwrap();
        let html = r#"<a href="../team">Team</a> <a href="next">Next</a>"#;
        let links = extract_links(html, &page, &example_filter());
        assert_eq!(
            links,
            vec!["https://example.com/team", "https://example.com/blog/next"]
        );
    }

    #[test]
    fn test_malformed_href_skipped_without_aborting() {
        let html = r#"<a href="http://[broken">Bad</a>
                      <a href="/fine">Fine</a>"#;
        let links = extract_links(html, &base(), &example_filter());
        assert_eq!(links, vec!["https://example.com/fine"]);
    }

    #[test]
    fn test_legal_and_admin_links_filtered_out() {
        let html = r#"<a href="/privacy-policy">Privacy</a>
                      <a href="/wp-admin/">Admin</a>
                      <a href="/api/v2/status">API</a>
                      <a href="/features">Features</a>"#;
        let links = extract_links(html, &base(), &example_filter());
        assert_eq!(links, vec!["https://example.com/features"]);
    }
}
