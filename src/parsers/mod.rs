pub mod definition_page;
pub mod help_page;
pub mod search_page;
pub mod suggestions;

use scraper::{ElementRef, Selector};

pub(crate) fn element_text(el: &ElementRef) -> String {
    el.text().collect()
}

/// Concatenated text of every descendant of `scope` matching `css`.
pub(crate) fn select_text(scope: &ElementRef, css: &str) -> String {
    let Ok(sel) = Selector::parse(css) else {
        return String::new();
    };
    scope.select(&sel).map(|e| element_text(&e)).collect()
}
