use html_escape::{encode_double_quoted_attribute, encode_text};

use super::page::{Namespace, PageEntry};

/// Render a resolved listing: namespace heading, then one link per page.
///
/// Output shape: `<p><strong>NS</strong></p><ul><li><a href="LINK">TITLE</a></li>...</ul>`.
/// A namespace without pages still gets its heading and an empty list.
pub fn render_listing(namespace: &Namespace, pages: &[PageEntry]) -> String {
    let mut markup = String::new();

    markup.push_str("<p><strong>");
    markup.push_str(&encode_text(namespace.label()));
    markup.push_str("</strong></p>");

    markup.push_str("<ul>");
    for page in pages {
        markup.push_str("<li><a href=\"");
        markup.push_str(&encode_double_quoted_attribute(&page.link));
        markup.push_str("\">");
        markup.push_str(&encode_text(&page.title));
        markup.push_str("</a></li>");
    }
    markup.push_str("</ul>");

    markup
}
