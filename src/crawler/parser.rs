//! HTML extraction of the page title and classified links
//!
//! Extraction runs over the html5ever token stream, not a parsed tree. Each
//! `<a>` start tag in the markup yields at most one link, however badly the
//! document is nested. Only two kinds of tag matter:
//! - `<a>`: its `href` is classified as in-domain or out-of-domain
//! - `<title>`: the text following the first one becomes the page title
//!
//! Raw-text elements (`<script>`, `<style>`, `<title>`, ...) are switched into
//! the matching tokenizer state, so markup inside them is plain text. Malformed
//! markup never fails; the tokenizer always runs to the end of input.

use crate::state::Page;
use crate::url::{classify_link, LinkClass};
use html5ever::tendril::StrTendril;
use html5ever::tokenizer::states::RawKind;
use html5ever::tokenizer::{
    BufferQueue, Tag, TagKind, Token, TokenSink, TokenSinkResult, Tokenizer, TokenizerOpts,
};

/// Extracts the title and classified links from an HTML document
///
/// # Link Extraction Rules
///
/// - Links come from `<a>` start tags only, in document order, one per tag
/// - Self-closing `<a/>` tags are not start tags and are skipped
/// - Only the first `href` attribute of an anchor is consulted; anchors
///   without one are skipped and appear in neither list
/// - Link targets are kept verbatim (not resolved or normalized) and
///   classified with [`classify_link`]
///
/// # Title Rules
///
/// - The text right after the first `<title>` start tag wins while the title
///   is still empty; later ones are ignored
/// - The text is taken as-is (character references decoded, no trimming)
/// - A document with no titled element yields an empty title
///
/// # Example
///
/// ```
/// use sumi_reach::crawler::extract_page;
///
/// let html = r#"<html><head><title>Test</title></head>
///     <body><a href="/docs/page">Docs</a><a href="https://other.org/">Out</a></body></html>"#;
/// let page = extract_page(html);
/// assert_eq!(page.title, "Test");
/// assert_eq!(page.in_domain_links, vec!["/docs/page"]);
/// assert_eq!(page.out_domain_links, vec!["https://other.org/"]);
/// ```
pub fn extract_page(html: &str) -> Page {
    let mut input = BufferQueue::new();
    input.push_back(StrTendril::from_slice(html));

    let mut tokenizer = Tokenizer::new(PageSink::default(), TokenizerOpts::default());
    // The sink never yields a script handle, so one feed drains the queue
    let _ = tokenizer.feed(&mut input);
    tokenizer.end();

    std::mem::take(&mut tokenizer.sink.page)
}

/// Token sink accumulating a [`Page`]
#[derive(Default)]
struct PageSink {
    page: Page,
    /// Set after a `<title>` start tag until its text has been read
    reading_title: bool,
}

impl PageSink {
    fn start_tag(&mut self, tag: &Tag) {
        if tag.self_closing {
            return;
        }

        match &*tag.name {
            "a" => self.record_anchor(tag),
            "title" if self.page.title.is_empty() => self.reading_title = true,
            _ => {}
        }
    }

    fn record_anchor(&mut self, tag: &Tag) {
        // The tokenizer already dropped any repeated attribute
        let Some(href) = tag.attrs.iter().find(|attr| &*attr.name.local == "href") else {
            return;
        };

        let href = href.value.to_string();
        match classify_link(&href) {
            LinkClass::InDomain => self.page.in_domain_links.push(href),
            LinkClass::OutDomain => self.page.out_domain_links.push(href),
        }
    }
}

/// Tokenizer state a start tag switches into, if any
fn raw_content(tag: &Tag) -> Option<TokenSinkResult<()>> {
    let kind = match &*tag.name {
        "title" | "textarea" => RawKind::Rcdata,
        "script" => RawKind::ScriptData,
        "style" | "xmp" | "iframe" | "noembed" | "noframes" | "noscript" => RawKind::Rawtext,
        "plaintext" => return Some(TokenSinkResult::Plaintext),
        _ => return None,
    };
    Some(TokenSinkResult::RawData(kind))
}

impl TokenSink for PageSink {
    type Handle = ();

    fn process_token(&mut self, token: Token, _line_number: u64) -> TokenSinkResult<()> {
        match token {
            Token::CharacterTokens(text) if self.reading_title => {
                // Text runs may arrive split around character references
                self.page.title.push_str(&text);
            }
            Token::ParseError(_) => {}
            Token::TagToken(tag) => {
                self.reading_title = false;
                if tag.kind == TagKind::StartTag {
                    self.start_tag(&tag);
                    if let Some(raw) = raw_content(&tag) {
                        return raw;
                    }
                }
            }
            _ => self.reading_title = false,
        }
        TokenSinkResult::Continue
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_extract_title() {
        let html = r#"<html><head><title>Test Page</title></head><body></body></html>"#;
        assert_eq!(extract_page(html).title, "Test Page");
    }

    #[test]
    fn test_first_title_wins() {
        let html = r#"<html><head><title>First</title><title>Second</title></head></html>"#;
        assert_eq!(extract_page(html).title, "First");
    }

    #[test]
    fn test_title_is_not_trimmed() {
        let html = r#"<html><head><title>  Spaced  </title></head></html>"#;
        assert_eq!(extract_page(html).title, "  Spaced  ");
    }

    #[test]
    fn test_title_decodes_character_references() {
        let html = r#"<title>Tom &amp; Jerry</title>"#;
        assert_eq!(extract_page(html).title, "Tom & Jerry");
    }

    #[test]
    fn test_empty_title_does_not_block_later_one() {
        let html = r#"<html><head><title></title></head><body><title>Later</title></body></html>"#;
        assert_eq!(extract_page(html).title, "Later");
    }

    #[test]
    fn test_no_title() {
        let html = r#"<html><head></head><body><p>hello</p></body></html>"#;
        assert_eq!(extract_page(html).title, "");
    }

    #[test]
    fn test_in_domain_link() {
        let html = r#"<html><body><a href="/docs/page">Docs</a></body></html>"#;
        let page = extract_page(html);
        assert_eq!(page.in_domain_links, vec!["/docs/page"]);
        assert!(page.out_domain_links.is_empty());
    }

    #[test]
    fn test_uppercase_markup_is_recognized() {
        let html = r#"<A HREF="/upper/case">Up</A>"#;
        assert_eq!(extract_page(html).in_domain_links, vec!["/upper/case"]);
    }

    #[test]
    fn test_protocol_relative_link_is_out_domain() {
        let html = r#"<html><body><a href="//example.com/x">X</a></body></html>"#;
        let page = extract_page(html);
        assert!(page.in_domain_links.is_empty());
        assert_eq!(page.out_domain_links, vec!["//example.com/x"]);
    }

    #[test]
    fn test_fragment_link_is_out_domain() {
        let html = r##"<html><body><a href="/a#frag">A</a></body></html>"##;
        let page = extract_page(html);
        assert!(page.in_domain_links.is_empty());
        assert_eq!(page.out_domain_links, vec!["/a#frag"]);
    }

    #[test]
    fn test_absolute_link_is_out_domain() {
        let html = r#"<html><body><a href="https://other.org/">Other</a></body></html>"#;
        let page = extract_page(html);
        assert!(page.in_domain_links.is_empty());
        assert_eq!(page.out_domain_links, vec!["https://other.org/"]);
    }

    #[test]
    fn test_anchor_without_href_is_ignored() {
        let html = r#"<html><body><a name="top">Top</a><a id="x">X</a></body></html>"#;
        let page = extract_page(html);
        assert!(page.in_domain_links.is_empty());
        assert!(page.out_domain_links.is_empty());
    }

    #[test]
    fn test_self_closing_anchor_is_ignored() {
        let html = r#"<a href="/closed/tag"/><a href="/open/tag">x</a>"#;
        assert_eq!(extract_page(html).in_domain_links, vec!["/open/tag"]);
    }

    #[test]
    fn test_duplicate_href_uses_first() {
        let html = r#"<html><body><a href="/first/one" href="/second/one">A</a></body></html>"#;
        let page = extract_page(html);
        assert_eq!(page.in_domain_links, vec!["/first/one"]);
    }

    #[test]
    fn test_link_order_is_preserved() {
        let html = r#"
            <html>
            <body>
                <a href="/page1">Link 1</a>
                <a href="https://other.com/page3">Link 3</a>
                <a href="/page2">Link 2</a>
                <a href="/page1">Link 1 again</a>
            </body>
            </html>
        "#;
        let page = extract_page(html);
        assert_eq!(page.in_domain_links, vec!["/page1", "/page2", "/page1"]);
        assert_eq!(page.out_domain_links, vec!["https://other.com/page3"]);
    }

    #[test]
    fn test_non_anchor_links_are_ignored() {
        let html = r#"
            <html>
            <head><link rel="stylesheet" href="/style.css"></head>
            <body><img src="/logo.png"><script src="/app.js"></script></body>
            </html>
        "#;
        let page = extract_page(html);
        assert_eq!(page.link_count(), 0);
    }

    #[test]
    fn test_misnested_anchor_yields_one_link() {
        let html = r#"<p><a href="/docs/x">foo</p>bar<div>baz</div>"#;
        let page = extract_page(html);
        assert_eq!(page.in_domain_links, vec!["/docs/x"]);
        assert!(page.out_domain_links.is_empty());
    }

    #[test]
    fn test_unclosed_formatting_around_anchors() {
        let html = r#"<b><a href="/one/link">1<i></b><a href="https://x.org/">2</i></a>"#;
        let page = extract_page(html);
        assert_eq!(page.in_domain_links, vec!["/one/link"]);
        assert_eq!(page.out_domain_links, vec!["https://x.org/"]);
    }

    #[test]
    fn test_markup_inside_script_is_text() {
        let html = r#"<script>document.write('<a href="/in/script">');</script><a href="/real/link">x</a>"#;
        let page = extract_page(html);
        assert_eq!(page.in_domain_links, vec!["/real/link"]);
    }

    #[test]
    fn test_unterminated_title_swallows_rest_of_document() {
        let html = r#"<title>Broken<a href="/still/here">x"#;
        let page = extract_page(html);
        assert_eq!(page.title, r#"Broken<a href="/still/here">x"#);
        assert_eq!(page.link_count(), 0);
    }
}
