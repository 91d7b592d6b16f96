pub mod links;
pub mod markdown;

#[cfg(test)]
mod tests;

pub use links::extract_links;
pub use markdown::{TextRenderer, to_markdown};

use scraper::{Html, Selector};

/// Everything extracted from one successfully fetched HTML document
#[derive(Debug, Clone, Default)]
pub struct PageContent {
    /// Body converted to Markdown-like text
    pub markdown: String,
    /// `<title>` text
    pub title: String,
    /// Meta description content
    pub description: String,
    /// Meta keywords content
    pub keywords: String,
}

impl PageContent {
    /// Parse title, meta description/keywords and the Markdown body out of
    /// one document. Meta names are matched case-insensitively and the
    /// `name`/`content` attribute order does not matter.
    pub fn from_html(html: &str, renderer: &TextRenderer) -> Self {
        let doc = Html::parse_document(html);

        let title_selector = Selector::parse("title").unwrap();
        let title = doc
            .select(&title_selector)
            .next()
            .map(|el| el.text().collect::<String>().trim().to_string())
            .unwrap_or_default();

        let meta_selector = Selector::parse("meta").unwrap();
        let mut description = String::new();
        let mut keywords = String::new();
        for element in doc.select(&meta_selector) {
            let Some(name) = element.value().attr("name") else {
                continue;
            };
            let Some(content) = element.value().attr("content") else {
                continue;
            };
            match name.to_ascii_lowercase().as_str() {
                "description" if description.is_empty() => {
                    description = content.trim().to_string();
                }
                "keywords" if keywords.is_empty() => {
                    keywords = content.trim().to_string();
                }
                _ => {}
            }
        }

        Self {
            markdown: renderer.render(html),
            title,
            description,
            keywords,
        }
    }
}
