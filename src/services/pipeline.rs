use std::sync::Arc;

use futures::future::join_all;

use crate::config::Endpoints;
use crate::error::Result;
use crate::model::rule::RuleTable;
use crate::model::translation::TranslationResult;
use crate::services::fetch::Fetch;
use crate::services::{help, suggestions, translate};

/// Suggestions → translations → definitions, against a rule table loaded once.
#[derive(Clone)]
pub struct Pipeline {
    fetcher: Arc<dyn Fetch>,
    endpoints: Endpoints,
    rules: Arc<RuleTable>,
}

impl Pipeline {
    pub fn new(fetcher: Arc<dyn Fetch>, endpoints: Endpoints, rules: RuleTable) -> Self {
        Self {
            fetcher,
            endpoints,
            rules: Arc::new(rules),
        }
    }

    /// Loads the help table before handing out the pipeline.
    pub async fn start(fetcher: Arc<dyn Fetch>, endpoints: Endpoints) -> Self {
        let rules = help::load(fetcher.as_ref(), &endpoints).await;
        Self::new(fetcher, endpoints, rules)
    }

    pub async fn run(&self, term: &str) -> Result<Vec<TranslationResult>> {
        let fetcher = self.fetcher.as_ref();

        let terms = suggestions::fetch(fetcher, &self.endpoints, term).await?;

        let settled = join_all(
            terms
                .iter()
                .map(|t| translate::translate(fetcher, &self.endpoints, &self.rules, t)),
        )
        .await;

        let results: Vec<TranslationResult> = settled
            .into_iter()
            .collect::<Result<Vec<_>>>()?
            .into_iter()
            .filter(|r| !r.list.is_empty())
            .collect();

        tracing::info!(term, suggestions = terms.len(), results = results.len(), "translated");
        Ok(results)
    }
}
