//! HTML/Markdown export for the buffer.

use crate::buffer::TextBuffer;

/// Render the buffer as an HTML fragment, one `<p>` per line.
pub fn to_html(buf: &TextBuffer) -> String {
    let mut out = String::new();
    out.push_str("<div class=\"buffer\">\n");
    for line in buf.read().lines() {
        out.push_str("  <p>");
        out.push_str(&html_escape::encode_text(line));
        out.push_str("</p>\n");
    }
    out.push_str("</div>");
    out
}

/// Render the buffer as Markdown, one paragraph per line.
pub fn to_markdown(buf: &TextBuffer) -> String {
    let mut out = String::new();
    for line in buf.read().lines() {
        out.push_str(line);
        out.push_str("\n\n");
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn html_escapes_markup() {
        let buf = TextBuffer::with_text("a < b & c");
        let html = to_html(&buf);
        assert!(html.contains("a &lt; b &amp; c"));
        assert!(html.starts_with("<div class=\"buffer\">"));
    }

    #[test]
    fn markdown_keeps_lines_as_paragraphs() {
        let buf = TextBuffer::with_text("first\nsecond");
        assert_eq!(to_markdown(&buf), "first\n\nsecond\n\n");
    }

    #[test]
    fn empty_buffer_renders_empty_shell() {
        let buf = TextBuffer::new();
        assert_eq!(to_html(&buf), "<div class=\"buffer\">\n</div>");
        assert_eq!(to_markdown(&buf), "");
    }
}
