//! Markdown to HTML conversion for chat content.

use comrak::{markdown_to_html as comrak_to_html, Options};

/// Convert markdown to HTML.
///
/// Raw HTML embedded in the source is not passed through, and link targets
/// with unsafe schemes are dropped, so the output is safe to insert as
/// markup whatever the input.
pub fn markdown_to_html(text: &str) -> String {
    let mut options = Options::default();
    options.extension.table = true;
    options.extension.strikethrough = true;
    options.extension.autolink = true;
    options.render.r#unsafe = false;
    comrak_to_html(text, &options)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_basic_markdown() {
        let html = markdown_to_html("**bold** and `code`");
        assert!(html.contains("<strong>bold</strong>"));
        assert!(html.contains("<code>code</code>"));
    }

    #[test]
    fn test_raw_html_not_passed_through() {
        let html = markdown_to_html("hi <script>alert(1)</script>");
        assert!(!html.contains("<script>"));
    }

    #[test]
    fn test_javascript_links_dropped() {
        let html = markdown_to_html("[click](javascript:alert(1))");
        assert!(!html.contains("javascript:"));
    }

    #[test]
    fn test_plain_text_wrapped_in_paragraph() {
        assert_eq!(markdown_to_html("hello"), "<p>hello</p>\n");
    }
}
