use crate::config::Endpoints;
use crate::error::Result;
use crate::model::rule::RuleTable;
use crate::model::translation::Definition;
use crate::parsers::definition_page;
use crate::services::fetch::Fetch;
use crate::services::rules;

/// Fetches the definition page of `est_term`. `Ok(None)` when the page has no
/// usable entry.
pub async fn fetch(
    fetcher: &dyn Fetch,
    endpoints: &Endpoints,
    table: &RuleTable,
    est_term: &str,
) -> Result<Option<Definition>> {
    let body = fetcher.get_text(&endpoints.definition(est_term)).await?;

    let Some(info) = definition_page::parse(&body, est_term) else {
        tracing::debug!(est_term, "no complete entry");
        return Ok(None);
    };

    let notes = (!info.notes.is_empty()).then_some(info.notes);
    let rule = (!info.numbers.is_empty()).then(|| rules::resolve(table, &info.numbers));

    Ok(Some(Definition {
        est_term: est_term.to_string(),
        notes,
        rule,
    }))
}
