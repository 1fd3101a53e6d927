//! Readability extraction via `dom_smoothie`.
//!
//! The extraction algorithm itself (boilerplate removal, content scoring,
//! encoding handling) is entirely the library's; this module only adapts its
//! API and error type. Collaborator defaults are used as-is — no tuning.

use dom_smoothie::Readability;

use readcache_shared::{ReadcacheError, Result};

/// Run Readability on the given HTML and return the article's plain text.
///
/// `url` is optional but recommended for resolving relative links.
/// Structured metadata the library produces (title, byline, excerpt) is
/// discarded; only the text body is kept.
pub fn article_text(html: &str, url: Option<&str>) -> Result<String> {
    let mut readability = Readability::new(html, url, None)
        .map_err(|e| ReadcacheError::extract(format!("readability setup failed: {e}")))?;

    let article = readability
        .parse()
        .map_err(|e| ReadcacheError::extract(format!("readability parse failed: {e}")))?;

    let text = article.text_content.trim().to_string();
    if text.is_empty() {
        return Err(ReadcacheError::extract("page contains no article text"));
    }

    Ok(text)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn article_html(body: &str) -> String {
        format!(
            "<html><head><title>Test Page</title></head><body>\
             <nav><a href=\"/\">Home</a><a href=\"/feed\">Feed</a></nav>\
             <article><h1>Headline</h1>{body}</article>\
             <footer>Copyright 2026 Example Corp</footer>\
             </body></html>"
        )
    }

    fn long_paragraphs() -> String {
        // Readability needs a realistic amount of body text before it
        // accepts a content block.
        (0..6)
            .map(|i| {
                format!(
                    "<p>Paragraph {i}: the quick brown fox jumps over the lazy dog, \
                     again and again, while the reader scrolls past advertising \
                     chrome that should never survive extraction.</p>"
                )
            })
            .collect()
    }

    #[test]
    fn extracts_body_text() {
        let html = article_html(&long_paragraphs());
        let text = article_text(&html, Some("https://example.com/post")).expect("extract");
        assert!(text.contains("quick brown fox"));
        assert!(text.contains("Paragraph 5"));
    }

    #[test]
    fn discards_navigation_chrome() {
        let html = article_html(&long_paragraphs());
        let text = article_text(&html, None).expect("extract");
        assert!(!text.contains("Copyright 2026 Example Corp"));
    }

    #[test]
    fn empty_page_is_an_extract_error() {
        let err = article_text("<html><body></body></html>", None).unwrap_err();
        assert_eq!(err.exit_code(), 4);
    }
}
