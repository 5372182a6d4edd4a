//! A parsed dictionary page and a narrow interface for querying it.

use scraper::html::Select;
use scraper::{ElementRef, Html, Selector};

use crate::Error;

/// A parsed HTML page.
///
/// The underlying parser is html5ever, which recovers from malformed and partial markup the
/// same way a browser would, so a `Document` can be built from almost anything.
#[derive(Debug)]
pub struct Document {
    html: Html,
}

impl Document {
    /// Parses raw page bytes into a document.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Parse`] if `raw` is not valid UTF-8, or if it contains no markup at
    /// all.
    pub fn parse(raw: &[u8]) -> Result<Document, Error> {
        let markup = std::str::from_utf8(raw)
            .map_err(|err| Error::Parse(format!("page is not valid utf-8: {err}")))?;

        if markup.trim().is_empty() {
            return Err(Error::Parse("page is empty".to_string()));
        }

        Ok(Document::from_html(markup))
    }

    /// Parses an HTML string into a document.
    #[must_use]
    pub fn from_html(html: &str) -> Document {
        let html = Html::parse_document(html);

        Document { html }
    }

    /// Returns every element matching `selector`, in document order.
    pub fn select<'a, 'b>(&'a self, selector: &'b Selector) -> Select<'a, 'b> {
        self.html.select(selector)
    }

    /// Returns the first element matching `selector`.
    #[must_use]
    pub fn select_first(&self, selector: &Selector) -> Option<ElementRef<'_>> {
        self.html.select(selector).next()
    }
}

/// Returns the nearest sibling after `anchor` that matches `selector`.
pub fn next_sibling<'a>(anchor: ElementRef<'a>, selector: &Selector) -> Option<ElementRef<'a>> {
    anchor
        .next_siblings()
        .filter_map(ElementRef::wrap)
        .find(|elem| selector.matches(elem))
}

/// Returns the first descendant of `elem` matching `selector`.
pub fn first_in<'a>(elem: ElementRef<'a>, selector: &Selector) -> Option<ElementRef<'a>> {
    elem.select(selector).next()
}

/// Returns the concatenated text of `elem` and all its descendants.
pub fn element_text(elem: ElementRef<'_>) -> String {
    elem.text().collect()
}

/// Returns the concatenated text of `elem` with leading and trailing whitespace removed.
pub fn trimmed_text(elem: ElementRef<'_>) -> String {
    element_text(elem).trim().to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn selector(s: &str) -> Selector {
        Selector::parse(s).unwrap()
    }

    #[test]
    fn test_parse_rejects_blank_page() {
        assert!(matches!(Document::parse(b"  \n\t "), Err(Error::Parse(_))));
    }

    #[test]
    fn test_parse_rejects_invalid_utf8() {
        assert!(matches!(
            Document::parse(&[0x3c, 0x70, 0xff, 0xfe]),
            Err(Error::Parse(_))
        ));
    }

    #[test]
    fn test_parse_tolerates_unclosed_tags() {
        let document = Document::parse(b"<div class=\"def\">to run <b>fast</div><p>tail").unwrap();
        let def = document.select_first(&selector("div.def")).unwrap();

        assert_eq!(element_text(def), "to run fast");
    }

    #[test]
    fn test_next_sibling_skips_other_elements() {
        let document = Document::from_html(
            r#"<div><span id="anchor">x</span>
               <p></p>
               <div class="b" id="first"></div>
               <div class="b" id="second"></div></div>"#,
        );
        let anchor = document.select_first(&selector("#anchor")).unwrap();
        let next = next_sibling(anchor, &selector("div.b")).unwrap();

        assert_eq!(next.attr("id"), Some("first"));
    }

    #[test]
    fn test_next_sibling_stays_within_parent() {
        let document = Document::from_html(
            r#"<div class="b" id="before"></div>
               <div><span id="anchor"><div class="b"></div></span></div>
               <div class="b" id="after"></div>"#,
        );
        let anchor = document.select_first(&selector("#anchor")).unwrap();

        assert!(next_sibling(anchor, &selector("div.b")).is_none());
    }

    #[test]
    fn test_trimmed_text() {
        let document = Document::from_html("<div class=\"examp\">\n  she ran  \n</div>");
        let examp = document.select_first(&selector("div.examp")).unwrap();

        assert_eq!(trimmed_text(examp), "she ran");
    }
}
