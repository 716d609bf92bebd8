use crate::config::Endpoints;
use crate::error::Result;
use crate::parsers::suggestions;
use crate::services::fetch::Fetch;

/// Autocomplete candidates for `term` (already lower-cased), with `term` itself
/// guaranteed among at most five entries.
pub async fn fetch(fetcher: &dyn Fetch, endpoints: &Endpoints, term: &str) -> Result<Vec<String>> {
    let body = fetcher.get_text(&endpoints.suggestions(term)).await?;
    let returned = suggestions::parse(&body)?;

    let list = suggestions::normalize(term, returned);
    tracing::debug!(term, ?list, "suggestions");
    Ok(list)
}
