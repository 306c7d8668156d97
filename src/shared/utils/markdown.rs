use pulldown_cmark::{html, Event, Options, Parser};

/// Render assistant Markdown to HTML.
///
/// Raw HTML in the source is emitted as escaped text, never as markup.
pub fn render_markdown(markdown: &str) -> String {
    let mut options = Options::empty();
    options.insert(Options::ENABLE_STRIKETHROUGH);
    options.insert(Options::ENABLE_TABLES);

    let parser = Parser::new_ext(markdown, options).map(|event| match event {
        Event::Html(raw) | Event::InlineHtml(raw) => Event::Text(raw),
        other => other,
    });
    let mut html_output = String::new();
    html::push_html(&mut html_output, parser);
    html_output
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_renders_emphasis_and_lists() {
        let html = render_markdown("**Top pick**\n\n- Lamp\n- Desk");
        assert!(html.contains("<strong>Top pick</strong>"));
        assert!(html.contains("<li>Lamp</li>"));
    }

    #[test]
    fn test_inline_html_is_escaped() {
        let html = render_markdown("Great pick! <img src=x onerror=\"alert(document.cookie)\">");
        assert!(!html.contains("<img"));
        assert!(html.contains("&lt;img src=x onerror="));
        assert!(html.starts_with("<p>Great pick! "));
    }

    #[test]
    fn test_html_block_is_escaped() {
        let html = render_markdown("<script>alert(1)</script>\n\nBuy the lamp.");
        assert!(!html.contains("<script>"));
        assert!(html.contains("&lt;script&gt;alert(1)&lt;/script&gt;"));
        assert!(html.contains("<p>Buy the lamp.</p>"));
    }
}
