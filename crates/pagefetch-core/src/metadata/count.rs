//! Link and image counting over parsed HTML.

use scraper::{Html, Selector};

/// Number of `<a>` and `<img>` elements in a document.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct ElementCounts {
    pub links: usize,
    pub images: usize,
}

/// Parses `html` leniently and counts every anchor and image element,
/// with or without `href`/`src`.
pub fn count_elements(html: &str) -> ElementCounts {
    let document = Html::parse_document(html);
    ElementCounts {
        links: count_matching(&document, "a"),
        images: count_matching(&document, "img"),
    }
}

fn count_matching(document: &Html, css: &str) -> usize {
    Selector::parse(css)
        .map(|selector| document.select(&selector).count())
        .unwrap_or(0)
}
