//! Pick a representative image URL out of a topic detail page.
//!
//! Two-rule lookup in strict order: a thumbnail `<img>` first, then the
//! OpenGraph `og:image` meta tag. Document order decides which element is
//! "first" for each rule, and only the first match per rule is considered.

use scraper::{Html, Selector};

/// Extract the image URL a topic page declares, if any.
///
/// Rule 1: the first `<img alt="thumbnail">` whose `src` is non-empty wins
/// outright; rule 2 is never consulted.
/// Rule 2: the first `<meta property="og:image">` whose `content` is
/// non-empty.
pub fn extract_image_url(html: &str) -> Option<String> {
    let document = Html::parse_document(html);

    let thumb_sel =
        Selector::parse(r#"img[alt="thumbnail"]"#).expect("thumbnail selector is valid");
    if let Some(img) = document.select(&thumb_sel).next() {
        if let Some(src) = img.value().attr("src") {
            if !src.is_empty() {
                return Some(src.to_string());
            }
        }
    }

    let og_sel =
        Selector::parse(r#"meta[property="og:image"]"#).expect("og:image selector is valid");
    if let Some(meta) = document.select(&og_sel).next() {
        if let Some(content) = meta.value().attr("content") {
            if !content.is_empty() {
                return Some(content.to_string());
            }
        }
    }

    None
}
