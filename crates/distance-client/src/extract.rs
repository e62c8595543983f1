//! HTML extraction of the distance field.

use scraper::{Html, Selector};

/// Marker element carrying the distance on the route page.
pub const DISTANCE_SELECTOR: &str = "span.dist";

/// Returns the trimmed text of the first `span.dist` in `html`, or None when there is none.
pub fn extract_distance(html: &str) -> Option<String> {
    let selector = Selector::parse(DISTANCE_SELECTOR).ok()?;
    let document = Html::parse_document(html);
    document
        .select(&selector)
        .next()
        .map(|element| element.text().collect::<String>().trim().to_string())
}
