use scraper::{ElementRef, Html, Selector};

use super::{element_text, select_text};
use crate::model::rule::{RuleEntry, RuleTable};

const COMPARISON_MARKER: &str = "võrdlus:";

// Layout of muuttyybid.html, one group per inflection type:
//   <tr><td><span class="nr">12a</span></td><td>base description</td></tr>
//   <tr><td>... <i>võrdlus:</i> comparative forms</td></tr>
pub fn parse(html: &str) -> RuleTable {
    let mut table = RuleTable::new();

    let doc = Html::parse_document(html);
    let Ok(number_sel) = Selector::parse(r#"table td > span[class="nr"]"#) else {
        return table;
    };

    for span in doc.select(&number_sel) {
        let number = element_text(&span).trim().to_string();

        let Some(row) = span
            .parent()
            .and_then(|cell| cell.parent())
            .and_then(ElementRef::wrap)
        else {
            continue;
        };

        let base = select_text(&row, "td:nth-child(2)").trim().to_string();

        let additional = row
            .next_siblings()
            .find_map(ElementRef::wrap)
            .and_then(|next| comparison(&element_text(&next)));

        table.insert(number, RuleEntry { base, additional });
    }

    table
}

fn comparison(text: &str) -> Option<String> {
    let at = text.find(COMPARISON_MARKER)?;
    Some(text[at + COMPARISON_MARKER.len()..].trim().to_string())
}
