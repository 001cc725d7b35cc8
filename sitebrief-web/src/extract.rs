//! HTML content extraction.
//!
//! Converts a raw HTML byte stream into a `(title, body_text)` pair suitable
//! for summarization. Parsing is lenient (html5ever via `scraper`): unclosed
//! tags, missing head/body, and invalid nesting all degrade gracefully instead
//! of erroring, which keeps downstream summary quality consistent across
//! real-world pages.

use scraper::{ElementRef, Html, Node};
use sitebrief_common::Result;

/// Title used when the document has no `title` element at all.
///
/// An *empty* `<title></title>` yields an empty string, not this sentinel;
/// the sentinel marks absence of the element, nothing else.
pub const NO_TITLE_SENTINEL: &str = "No title found";

/// Element kinds whose entire subtree is dropped before text extraction.
const PRUNED_TAGS: [&str; 4] = ["script", "style", "img", "input"];

/// Text content extracted from a single fetched page.
///
/// Constructed once per page and never mutated afterwards.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExtractedPage {
    /// Page title, verbatim (internal whitespace preserved), or
    /// [`NO_TITLE_SENTINEL`] when no `title` element exists.
    pub title: String,
    /// Newline-joined text of the page body with script/style/img/input
    /// subtrees removed. One line per non-empty text node, document order,
    /// trimmed as a whole.
    pub body_text: String,
}

/// Extract title and body text from raw HTML bytes.
///
/// The byte stream is decoded best-effort (lossy UTF-8) and never rejected;
/// a document without a `body` element produces an empty `body_text`. The
/// result is a pure function of the input bytes.
pub fn extract(html: &[u8]) -> Result<ExtractedPage> {
    let document = Html::parse_document(&String::from_utf8_lossy(html));
    let root = document.root_element();

    let title = match find_first_element(root, "title") {
        Some(el) => el.text().collect::<String>(),
        None => NO_TITLE_SENTINEL.to_string(),
    };

    let body_text = match find_first_element(root, "body") {
        Some(body) => {
            let mut lines = Vec::new();
            collect_text_lines(body, &mut lines);
            lines.join("\n").trim().to_string()
        }
        None => String::new(),
    };

    Ok(ExtractedPage { title, body_text })
}

/// Depth-first search for the first element with the given local name.
fn find_first_element<'a>(el: ElementRef<'a>, name: &str) -> Option<ElementRef<'a>> {
    if el.value().name() == name {
        return Some(el);
    }
    el.children()
        .filter_map(ElementRef::wrap)
        .find_map(|child| find_first_element(child, name))
}

/// Walk the subtree in document order, skipping pruned element kinds
/// entirely, and push one trimmed line per non-empty text node.
fn collect_text_lines(el: ElementRef<'_>, lines: &mut Vec<String>) {
    for child in el.children() {
        match child.value() {
            Node::Text(text) => {
                let trimmed = text.trim();
                if !trimmed.is_empty() {
                    lines.push(trimmed.to_string());
                }
            }
            Node::Element(element) => {
                if PRUNED_TAGS.contains(&element.name()) {
                    continue;
                }
                if let Some(child_el) = ElementRef::wrap(child) {
                    collect_text_lines(child_el, lines);
                }
            }
            _ => {}
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn extract_str(html: &str) -> ExtractedPage {
        extract(html.as_bytes()).expect("extraction should not fail")
    }

    #[test]
    fn title_and_body_with_script_removed() {
        let page = extract_str(
            "<html><head><title>Home</title></head>\
             <body><p>Hello</p><script>evil()</script></body></html>",
        );
        assert_eq!(page.title, "Home");
        assert_eq!(page.body_text, "Hello");
    }

    #[test]
    fn missing_title_uses_sentinel() {
        let page = extract_str("<html><body><h1>News</h1><p>Line1</p><p>Line2</p></body></html>");
        assert_eq!(page.title, NO_TITLE_SENTINEL);
        assert_eq!(page.body_text, "News\nLine1\nLine2");
    }

    #[test]
    fn empty_title_element_is_empty_not_sentinel() {
        let page = extract_str("<html><head><title></title></head><body><p>x</p></body></html>");
        assert_eq!(page.title, "");
    }

    #[test]
    fn title_whitespace_is_preserved_verbatim() {
        let page = extract_str("<html><head><title>  Two  Words  </title></head><body></body></html>");
        assert_eq!(page.title, "  Two  Words  ");
    }

    #[test]
    fn pruned_subtrees_contribute_nothing() {
        let page = extract_str(
            "<html><body>\
             <div><style>p { color: red }</style><p>kept</p></div>\
             <div><script>var hidden = 'secret';</script></div>\
             <form><input value=\"typed\">also kept</form>\
             </body></html>",
        );
        assert!(!page.body_text.contains("color"));
        assert!(!page.body_text.contains("secret"));
        assert!(!page.body_text.contains("typed"));
        assert_eq!(page.body_text, "kept\nalso kept");
    }

    #[test]
    fn descendants_of_pruned_elements_are_gone() {
        // Anything nested under a pruned node is dropped with it.
        let page = extract_str(
            "<html><body><p>visible</p>\
             <style>.x { content: \"inner text\" }</style></body></html>",
        );
        assert_eq!(page.body_text, "visible");
    }

    #[test]
    fn body_of_only_pruned_elements_is_empty() {
        let page = extract_str(
            "<html><body><script>a()</script><style>b{}</style>\
             <img src=\"c.png\"><input name=\"d\"></body></html>",
        );
        assert_eq!(page.body_text, "");
    }

    #[test]
    fn malformed_markup_degrades_gracefully() {
        // Unclosed tags and stray closers still yield the readable text.
        let page = extract_str("<html><body><p>first<p>second</div><b>third</body>");
        assert_eq!(page.body_text, "first\nsecond\nthird");
    }

    #[test]
    fn non_utf8_bytes_do_not_fail() {
        let mut bytes = b"<html><head><title>caf".to_vec();
        bytes.push(0xE9); // latin-1 e-acute
        bytes.extend_from_slice(b"</title></head><body><p>ok</p></body></html>");
        let page = extract(&bytes).expect("lossy decode");
        assert!(page.title.starts_with("caf"));
        assert_eq!(page.body_text, "ok");
    }

    #[test]
    fn extraction_is_idempotent() {
        let html = b"<html><head><title>T</title></head><body><p>a</p><p>b</p></body></html>";
        assert_eq!(extract(html).unwrap(), extract(html).unwrap());
    }

    #[test]
    fn interleaved_inline_markup_keeps_document_order() {
        let page = extract_str(
            "<html><body><h1>Header</h1><p>one <em>two</em> three</p></body></html>",
        );
        assert_eq!(page.body_text, "Header\none\ntwo\nthree");
    }
}
