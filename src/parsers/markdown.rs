use regex::Regex;

/// Tags removed together with their entire content before any other
/// transformation runs.
const STRIPPED_ELEMENTS: [&str; 5] = ["script", "style", "noscript", "svg", "head"];

/// Regex-based HTML to Markdown-like text converter.
///
/// This is a best-effort text extraction, not an HTML parser: unbalanced
/// or malformed markup degrades to partially-converted text instead of
/// failing. Patterns are compiled once; the transformation order is load
/// bearing, since later steps assume earlier ones already ran.
#[derive(Debug)]
pub struct TextRenderer {
    element_strips: Vec<Regex>,
    heading: Regex,
    anchor: Regex,
    image: Regex,
    list_item: Regex,
    line_break: Regex,
    paragraph_close: Regex,
    paragraph_open: Regex,
    bold: Regex,
    italic: Regex,
    any_tag: Regex,
    horizontal_ws: Regex,
    newline_runs: Regex,
}

impl Default for TextRenderer {
    fn default() -> Self {
        Self::new()
    }
}

impl TextRenderer {
    /// Compile the transformation patterns
    pub fn new() -> Self {
        let element_strips = STRIPPED_ELEMENTS
            .iter()
            .map(|tag| {
                Regex::new(&format!(r"(?is)<{tag}\b[^>]*>.*?</{tag}\s*>"))
                    .expect("element strip pattern should be valid")
            })
            .collect();

        Self {
            element_strips,
            heading: Regex::new(r"(?is)<h([1-6])\b[^>]*>(.*?)</h[1-6]\s*>")
                .expect("heading pattern should be valid"),
            anchor: Regex::new(r#"(?is)<a\b[^>]*?href\s*=\s*["']([^"']*)["'][^>]*>(.*?)</a\s*>"#)
                .expect("anchor pattern should be valid"),
            image: Regex::new(r#"(?is)<img\b[^>]*?alt\s*=\s*["']([^"']*)["'][^>]*>"#)
                .expect("image pattern should be valid"),
            list_item: Regex::new(r"(?is)<li\b[^>]*>(.*?)</li\s*>")
                .expect("list item pattern should be valid"),
            line_break: Regex::new(r"(?i)<br\s*/?\s*>").expect("br pattern should be valid"),
            paragraph_close: Regex::new(r"(?i)</p\s*>").expect("p close pattern should be valid"),
            paragraph_open: Regex::new(r"(?is)<p\b[^>]*>").expect("p open pattern should be valid"),
            bold: Regex::new(r"(?is)<(?:b|strong)\b[^>]*>(.*?)</(?:b|strong)\s*>")
                .expect("bold pattern should be valid"),
            italic: Regex::new(r"(?is)<(?:i|em)\b[^>]*>(.*?)</(?:i|em)\s*>")
                .expect("italic pattern should be valid"),
            any_tag: Regex::new(r"(?s)<[^>]+>").expect("tag strip pattern should be valid"),
            horizontal_ws: Regex::new(r"[^\S\n]+").expect("whitespace pattern should be valid"),
            newline_runs: Regex::new(r"\n{3,}").expect("newline pattern should be valid"),
        }
    }

    /// Convert an HTML document to Markdown-like text
    pub fn render(&self, html: &str) -> String {
        let mut text = html.to_string();

        // 1. Drop script/style/noscript/svg/head with their content
        for regex in &self.element_strips {
            text = regex.replace_all(&text, "").into_owned();
        }

        // 2. Headings become #-prefixed lines
        text = self
            .heading
            .replace_all(&text, |caps: &regex::Captures| {
                let level: usize = caps[1].parse().unwrap_or(1);
                format!("\n\n{} {}\n", "#".repeat(level), &caps[2])
            })
            .into_owned();

        // 3. Anchors become [text](href)
        text = self.anchor.replace_all(&text, "[${2}](${1})").into_owned();

        // 4. Images keep only their alt text
        text = self.image.replace_all(&text, "![${1}]").into_owned();

        // 5. List items become bullet lines
        text = self.list_item.replace_all(&text, "\n- ${1}").into_owned();

        // 6. Line breaks and paragraph boundaries
        text = self.line_break.replace_all(&text, "\n").into_owned();
        text = self.paragraph_close.replace_all(&text, "\n\n").into_owned();
        text = self.paragraph_open.replace_all(&text, "").into_owned();

        // 7. Bold and italic emphasis
        text = self.bold.replace_all(&text, "**${1}**").into_owned();
        text = self.italic.replace_all(&text, "*${1}*").into_owned();

        // 8. Strip every remaining tag
        text = self.any_tag.replace_all(&text, "").into_owned();

        // 9. Decode the common named entities, nothing more
        text = text
            .replace("&amp;", "&")
            .replace("&lt;", "<")
            .replace("&gt;", ">")
            .replace("&quot;", "\"")
            .replace("&#39;", "'")
            .replace("&nbsp;", " ");

        // 10. Collapse whitespace and trim
        text = self.horizontal_ws.replace_all(&text, " ").into_owned();
        text = self.newline_runs.replace_all(&text, "\n\n").into_owned();
        text.trim().to_string()
    }
}

/// Convert HTML to Markdown-like text with a one-shot renderer
pub fn to_markdown(html: &str) -> String {
    TextRenderer::new().render(html)
}
