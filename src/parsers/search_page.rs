use scraper::{ElementRef, Html, Selector};

use super::element_text;
use crate::model::translation::TranslationCandidate;

/// Estonian candidates listed under every `span[lang=en]` that spells `engl_term`
/// exactly. Document order, duplicates kept.
pub fn parse(html: &str, engl_term: &str) -> Vec<TranslationCandidate> {
    let doc = Html::parse_document(html);
    let (Ok(lemma_sel), Ok(target_sel)) = (Selector::parse(r#"span[lang="en"]"#), Selector::parse(".x"))
    else {
        return Vec::new();
    };

    let mut candidates = Vec::new();

    for lemma in doc.select(&lemma_sel) {
        if element_text(&lemma) != engl_term {
            continue;
        }

        let Some(entry) = lemma.parent().and_then(ElementRef::wrap) else {
            continue;
        };

        for target in entry.select(&target_sel) {
            // Only a leading text node names the term; anything else is markup noise.
            let Some(est_term) = target
                .first_child()
                .and_then(|n| n.value().as_text().map(|t| (**t).to_string()))
            else {
                continue;
            };

            candidates.push(TranslationCandidate {
                source_term: engl_term.to_string(),
                est_term,
            });
        }
    }

    candidates
}
