use std::sync::OnceLock;

use regex::Regex;
use scraper::{Html, Selector};

use super::{element_text, select_text};

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct EntryInfo {
    pub notes: String,
    pub numbers: Vec<String>,
}

fn rule_number_re() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(r"[0-9]+[a-zA-Z]?").expect("valid regex"))
}

/// Reads the last `.tervikart` of a definition page. Entries for compound
/// headwords (`"<term>+..."`) are skipped. `None` when nothing is left.
pub fn parse(html: &str, est_term: &str) -> Option<EntryInfo> {
    let doc = Html::parse_document(html);
    let sel = Selector::parse(".tervikart").ok()?;
    let compound = format!("{est_term}+");

    let entry = doc
        .select(&sel)
        .filter(|e| !element_text(e).trim().starts_with(&compound))
        .last()?;

    let notes = select_text(&entry, ".grg .mvq");
    let numbers = rule_numbers(&select_text(&entry, ".grg .mt"));

    Some(EntryInfo { notes, numbers })
}

pub fn rule_numbers(text: &str) -> Vec<String> {
    rule_number_re()
        .find_iter(text)
        .map(|m| m.as_str().to_string())
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn numbers_with_optional_letter() {
        assert_eq!(rule_numbers("17, 22A; 3b"), vec!["17", "22A", "3b"]);
        assert!(rule_numbers(" ").is_empty());
    }

    #[test]
    fn numbers_are_ascii_only() {
        // Arabic-Indic digits, then a Kelvin sign and a long s after ASCII digits.
        assert!(rule_numbers("\u{0661}\u{0662}").is_empty());
        assert_eq!(rule_numbers("3\u{212A} 4\u{017F}"), vec!["3", "4"]);
    }

    #[test]
    fn compound_headwords_are_skipped() {
        let html = r#"<div class="tervikart">kass <span class="grg"><span class="mt">17</span></span></div>
            <div class="tervikart"> kass+poeg <span class="grg"><span class="mt">1</span></span></div>"#;
        assert_eq!(
            parse(html, "kass"),
            Some(EntryInfo {
                notes: String::new(),
                numbers: vec!["17".into()],
            })
        );
    }

    #[test]
    fn only_the_last_remaining_entry_counts() {
        let html = r#"
            <div class="tervikart">tee<span class="grg"><span class="mvq">s, teed</span><span class="mt">26</span></span></div>
            <div class="tervikart">tee<span class="grg"><span class="mvq">v, teha</span><span class="mt">37 38</span></span></div>"#;
        let info = parse(html, "tee").unwrap();
        assert_eq!(info.notes, "v, teha");
        assert_eq!(info.numbers, vec!["37", "38"]);
    }

    #[test]
    fn nothing_left_after_filtering() {
        let html = r#"<div class="tervikart">kass+poeg</div>"#;
        assert_eq!(parse(html, "kass"), None);
        assert_eq!(parse("<p>Ei leitud</p>", "kass"), None);
    }

    #[test]
    fn entry_without_grammar_block() {
        let info = parse(r#"<div class="tervikart">kass</div>"#, "kass").unwrap();
        assert_eq!(info, EntryInfo::default());
    }
}
