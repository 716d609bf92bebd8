use scraper::node::Node;
use scraper::Html;

use crate::error::{Result, ScrapeError};

pub const MAX_SUGGESTIONS: usize = 5;

/// Parses the autocomplete body: a JSON array of HTML fragments like `<span>cat</span>`.
pub fn parse(body: &str) -> Result<Vec<String>> {
    let fragments: Vec<String> =
        serde_json::from_str(body).map_err(|e| ScrapeError::Suggestions(e.to_string()))?;

    Ok(fragments.iter().map(|f| fragment_text(f)).collect())
}

/// The first text node inside the fragment's first element, or the whole
/// fragment text when it carries no markup.
pub fn fragment_text(fragment: &str) -> String {
    let doc = Html::parse_fragment(fragment);

    // parse_fragment wraps the content in a synthetic <html> root.
    let first_element = doc
        .root_element()
        .descendants()
        .skip(1)
        .find(|n| n.value().is_element());

    match first_element {
        Some(el) => el
            .descendants()
            .find_map(|n| match n.value() {
                Node::Text(t) => Some((**t).to_string()),
                _ => None,
            })
            .unwrap_or_default(),
        None => doc.root_element().text().collect::<String>().trim().to_string(),
    }
}

/// Puts `term` first when the service did not return it, then keeps at most
/// [`MAX_SUGGESTIONS`].
pub fn normalize(term: &str, mut suggestions: Vec<String>) -> Vec<String> {
    if !suggestions.iter().any(|s| s == term) {
        suggestions.insert(0, term.to_string());
    }
    suggestions.truncate(MAX_SUGGESTIONS);
    suggestions
}
