use futures::future::join_all;

use crate::config::Endpoints;
use crate::error::Result;
use crate::model::rule::RuleTable;
use crate::model::translation::{Definition, TranslationResult};
use crate::parsers::search_page;
use crate::services::definitions;
use crate::services::fetch::Fetch;

/// English → Estonian: finds the candidates for `engl_term`, then fetches every
/// candidate's definition concurrently. The list keeps candidate order.
pub async fn translate(
    fetcher: &dyn Fetch,
    endpoints: &Endpoints,
    table: &RuleTable,
    engl_term: &str,
) -> Result<TranslationResult> {
    let body = fetcher.get_text(&endpoints.en_to_est(engl_term)).await?;
    let candidates = search_page::parse(&body, engl_term);
    tracing::debug!(engl_term, candidates = candidates.len(), "search page parsed");

    // Every branch settles before the first error (in candidate order) is returned.
    let settled = join_all(
        candidates
            .iter()
            .map(|c| definitions::fetch(fetcher, endpoints, table, &c.est_term)),
    )
    .await;

    let list: Vec<Definition> = settled
        .into_iter()
        .collect::<Result<Vec<_>>>()?
        .into_iter()
        .flatten()
        .collect();

    Ok(TranslationResult {
        engl_term: engl_term.to_string(),
        list,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::services::fetch::testing::StaticFetcher;

    const SEARCH: &str = r#"<div><span lang="en">cat</span>
        <span class="x">kass</span> <span class="x">kiisu</span> <span class="x">kaslane</span></div>"#;

    fn entry(word: &str) -> String {
        format!(r#"<div class="tervikart">{word}<span class="grg"><span class="mvq">s</span></span></div>"#)
    }

    #[tokio::test]
    async fn definitions_follow_candidate_order() {
        let ep = Endpoints::default();
        let fetcher = StaticFetcher::new()
            .page(ep.en_to_est("cat"), SEARCH)
            .page(ep.definition("kass"), entry("kass"))
            .page(ep.definition("kiisu"), r#"<div class="tervikart">kiisu+pai</div>"#)
            .page(ep.definition("kaslane"), entry("kaslane"));

        let got = translate(&fetcher, &ep, &RuleTable::new(), "cat").await.unwrap();
        assert_eq!(got.engl_term, "cat");
        assert_eq!(
            got.list.iter().map(|d| d.est_term.as_str()).collect::<Vec<_>>(),
            vec!["kass", "kaslane"]
        );
    }

    #[tokio::test]
    async fn one_failed_definition_fails_the_term() {
        let ep = Endpoints::default();
        let fetcher = StaticFetcher::new()
            .page(ep.en_to_est("cat"), SEARCH)
            .page(ep.definition("kass"), entry("kass"))
            .failing(ep.definition("kiisu"))
            .page(ep.definition("kaslane"), entry("kaslane"));

        assert!(translate(&fetcher, &ep, &RuleTable::new(), "cat").await.is_err());

        // Siblings were still issued.
        let calls = fetcher.calls.lock().unwrap();
        assert!(calls.contains(&ep.definition("kaslane")));
    }

    #[tokio::test]
    async fn search_failure_propagates() {
        let ep = Endpoints::default();
        let fetcher = StaticFetcher::new().failing(ep.en_to_est("cat"));
        assert!(translate(&fetcher, &ep, &RuleTable::new(), "cat").await.is_err());
    }
}
