//! Minimal HTML scraping for server-rendered pages
//!
//! Only what the legacy wishlist page and backend error pages need: the first
//! table, its body rows and cells, link/image attributes and paragraph text.

use once_cell::sync::Lazy;
use regex::Regex;

static SCRAPER: Lazy<Result<HtmlScraper, regex::Error>> = Lazy::new(HtmlScraper::new);

/// Process-wide scraper, or `None` if its patterns failed to compile.
pub fn scraper() -> Option<&'static HtmlScraper> {
    match &*SCRAPER {
        Ok(scraper) => Some(scraper),
        Err(err) => {
            tracing::error!(error = %err, "HTML scraper patterns are invalid");
            None
        }
    }
}

pub struct HtmlScraper {
    table: Regex,
    tbody: Regex,
    thead: Regex,
    row: Regex,
    cell: Regex,
    href: Regex,
    img_src: Regex,
    paragraph: Regex,
    tag: Regex,
    whitespace: Regex,
}

impl HtmlScraper {
    pub fn new() -> Result<Self, regex::Error> {
        Ok(Self {
            table: Regex::new(r"(?is)<table\b[^>]*>(.*?)</table\s*>")?,
            tbody: Regex::new(r"(?is)<tbody\b[^>]*>(.*?)</tbody\s*>")?,
            thead: Regex::new(r"(?is)<thead\b[^>]*>.*?</thead\s*>")?,
            row: Regex::new(r"(?is)<tr\b[^>]*>(.*?)</tr\s*>")?,
            cell: Regex::new(r"(?is)<td\b[^>]*>(.*?)</td\s*>")?,
            href: Regex::new(r#"(?is)<a\b[^>]*?\bhref\s*=\s*["']([^"']*)["']"#)?,
            img_src: Regex::new(r#"(?is)<img\b[^>]*?\bsrc\s*=\s*["']([^"']*)["']"#)?,
            paragraph: Regex::new(r"(?is)<p\b[^>]*>(.*?)</p\s*>")?,
            tag: Regex::new(r"(?s)<[^>]*>")?,
            whitespace: Regex::new(r"\s+")?,
        })
    }

    /// Inner HTML of the first `<table>`.
    pub fn first_table<'a>(&self, html: &'a str) -> Option<&'a str> {
        self.table
            .captures(html)
            .and_then(|caps| caps.get(1))
            .map(|m| m.as_str())
    }

    /// Cells (inner HTML) of every body row. Rows inside `<tbody>` when the
    /// table has one, otherwise every row outside `<thead>`.
    pub fn body_rows<'a>(&self, table: &'a str) -> Vec<Vec<&'a str>> {
        let bodies: Vec<&str> = self
            .tbody
            .captures_iter(table)
            .filter_map(|caps| caps.get(1))
            .map(|m| m.as_str())
            .collect();

        let rows_of = |section: &'a str| -> Vec<Vec<&'a str>> {
            self.row
                .captures_iter(section)
                .filter_map(|caps| caps.get(1))
                .map(|row| {
                    self.cell
                        .captures_iter(row.as_str())
                        .filter_map(|caps| caps.get(1))
                        .map(|m| m.as_str())
                        .collect()
                })
                .collect()
        };

        if bodies.is_empty() {
            // Headers use <th>, so a thead row would yield no cells anyway
            let header_end = self.thead.find(table).map(|m| m.end()).unwrap_or(0);
            rows_of(&table[header_end..])
        } else {
            bodies.into_iter().flat_map(rows_of).collect()
        }
    }

    pub fn link_href(&self, fragment: &str) -> Option<String> {
        self.href
            .captures(fragment)
            .and_then(|caps| caps.get(1))
            .map(|m| decode_entities(m.as_str()))
    }

    pub fn image_src(&self, fragment: &str) -> Option<String> {
        self.img_src
            .captures(fragment)
            .and_then(|caps| caps.get(1))
            .map(|m| decode_entities(m.as_str()))
    }

    /// Text content with tags stripped and whitespace collapsed.
    pub fn text(&self, fragment: &str) -> String {
        let stripped = self.tag.replace_all(fragment, " ");
        let decoded = decode_entities(&stripped);
        self.whitespace
            .replace_all(&decoded, " ")
            .trim()
            .to_string()
    }

    /// Text of every `<p>`, in document order.
    pub fn paragraphs(&self, html: &str) -> Vec<String> {
        self.paragraph
            .captures_iter(html)
            .filter_map(|caps| caps.get(1))
            .map(|m| self.text(m.as_str()))
            .collect()
    }
}

/// Text of the first non-empty paragraph in an HTML document.
pub fn first_paragraph_text(html: &str) -> Option<String> {
    scraper()?
        .paragraphs(html)
        .into_iter()
        .find(|text| !text.is_empty())
}

fn decode_entities(text: &str) -> String {
    text.replace("&nbsp;", " ")
        .replace("&lt;", "<")
        .replace("&gt;", ">")
        .replace("&quot;", "\"")
        .replace("&#39;", "'")
        .replace("&#x27;", "'")
        .replace("&amp;", "&")
}
