use axum::extract::{RawQuery, State};
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::routing::get;
use axum::{Json, Router};
use serde_json::json;
use tower_http::cors::CorsLayer;
use url::form_urlencoded;

use crate::services::pipeline::Pipeline;

pub const NO_TERMS: &str = "No Terms Were Provided";

/// The first `term` in the query string. Later repeats are ignored and an empty value counts as missing.
pub fn first_term(query: Option<&str>) -> Option<String> {
    form_urlencoded::parse(query?.as_bytes())
        .find(|(key, _)| key == "term")
        .map(|(_, value)| value.into_owned())
        .filter(|t| !t.is_empty())
}

fn err(status: StatusCode, message: impl Into<String>) -> Response {
    (status, Json(json!({ "error": message.into() }))).into_response()
}

pub fn router(pipeline: Pipeline) -> Router {
    Router::new()
        .route("/eestikeelt", get(eestikeelt))
        .layer(CorsLayer::permissive())
        .with_state(pipeline)
}

async fn eestikeelt(State(pipeline): State<Pipeline>, RawQuery(query): RawQuery) -> Response {
    let Some(term) = first_term(query.as_deref()) else {
        // Missing input still answers 200.
        return err(StatusCode::OK, NO_TERMS);
    };

    let term = term.to_lowercase();

    match pipeline.run(&term).await {
        Ok(results) => Json(results).into_response(),
        Err(e) => {
            tracing::error!(term, error = %e, "lookup failed");
            err(StatusCode::INTERNAL_SERVER_ERROR, e.to_string())
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn first_term_wins() {
        assert_eq!(first_term(Some("term=cat&term=dog")), Some("cat".into()));
        assert_eq!(first_term(Some("x=1&term=ice%20cream")), Some("ice cream".into()));
        assert_eq!(first_term(Some("term=&x=1")), None);
        assert_eq!(first_term(None), None);
    }
}
