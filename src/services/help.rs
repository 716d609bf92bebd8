use crate::config::Endpoints;
use crate::model::rule::RuleTable;
use crate::parsers::help_page;
use crate::services::fetch::Fetch;

/// Loads the rule table from the help page. Any failure leaves it empty.
pub async fn load(fetcher: &dyn Fetch, endpoints: &Endpoints) -> RuleTable {
    let url = endpoints.help();

    match fetcher.get_text(&url).await {
        Ok(body) => {
            let table = help_page::parse(&body);
            tracing::info!(rules = table.len(), "help table loaded");
            table
        }
        Err(e) => {
            tracing::warn!(error = %e, "help table unavailable, rule texts will be empty");
            RuleTable::new()
        }
    }
}
