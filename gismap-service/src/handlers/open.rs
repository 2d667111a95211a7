use askama::Template;
use axum::{
    extract::{Query, State},
    http::StatusCode,
    response::{Html, IntoResponse, Response},
};
use serde::Deserialize;

use crate::services::{metrics, DeepLink};
use crate::startup::AppState;
use service_core::error::AppError;

#[derive(Debug, Deserialize)]
pub struct OpenQuery {
    pub words: Option<String>,
}

/// Redirect page: tries the native app, then falls back to the web map.
/// Values are HTML-escaped by askama on top of their percent-encoding.
#[derive(Template)]
#[template(path = "open.html")]
pub struct OpenTemplate {
    pub app_url: String,
    pub web_url: String,
    pub fallback_delay_ms: u64,
}

#[tracing::instrument(skip(state, query))]
pub async fn open_page(State(state): State<AppState>, Query(query): Query<OpenQuery>) -> Response {
    let Some(words) = query.words.filter(|w| !w.is_empty()) else {
        metrics::record_open_page("missing_words");
        return (StatusCode::BAD_REQUEST, "Missing words parameter").into_response();
    };

    let link = DeepLink::new(&state.config.deep_link, &words);
    let page = OpenTemplate {
        app_url: link.app_url,
        web_url: link.web_url,
        fallback_delay_ms: state.config.deep_link.fallback_delay_ms,
    };

    match page.render() {
        Ok(html) => {
            metrics::record_open_page("rendered");
            Html(html).into_response()
        }
        Err(e) => {
            AppError::InternalError(anyhow::anyhow!("failed to render open page: {}", e))
                .into_response()
        }
    }
}
