use regex::Regex;
use url::Url;

/// Decides which discovered links are worth fetching.
///
/// A link is followed only when its hostname exactly matches the seed's
/// hostname and its path matches none of the configured skip patterns.
/// Patterns are compiled once per crawl.
#[derive(Debug)]
pub struct LinkFilter {
    seed_host: String,
    skip_regexes: Vec<Regex>,
}

impl LinkFilter {
    /// Compile a filter scoped to the given seed hostname
    pub fn new(seed_host: &str, skip_patterns: &[String]) -> Result<Self, regex::Error> {
        let mut skip_regexes = Vec::with_capacity(skip_patterns.len());
        for pattern in skip_patterns {
            skip_regexes.push(Regex::new(pattern)?);
        }

        Ok(Self {
            seed_host: seed_host.to_string(),
            skip_regexes,
        })
    }

    /// Determine if a resolved URL should be fetched
    pub fn should_follow(&self, url: &Url) -> bool {
        if !matches!(url.scheme(), "http" | "https") {
            return false;
        }

        if !self.is_in_host_scope(url) {
            return false;
        }

        let path = url.path();
        for regex in &self.skip_regexes {
            if regex.is_match(path) {
                ::log::debug!("skip pattern rejected: {}", url);
                return false;
            }
        }

        true
    }

    /// Check if a URL's hostname matches the seed's hostname exactly
    fn is_in_host_scope(&self, url: &Url) -> bool {
        match url.host_str() {
            Some(host) => host == self.seed_host,
            None => false,
        }
    }
}

/// Reduce a URL to origin plus path, with the trailing slash stripped and
/// query and fragment discarded. Two links differing only by query string
/// or trailing slash collapse to the same crawl target.
pub fn normalize_url(url: &Url) -> String {
    let origin = url.origin().ascii_serialization();
    let path = url.path().trim_end_matches('/');
    format!("{}{}", origin, path)
}
