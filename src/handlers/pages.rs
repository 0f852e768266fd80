//! HTML page handlers.
//!
//! Rendering reads artifacts with blocking `std::fs` calls, so every page is
//! built on the blocking pool, the same way [`super::api::footer`] loads its
//! record.

use axum::{
    extract::{Path, Query, State},
    http::{StatusCode, Uri, header},
    response::{Html, IntoResponse, Response},
};
use maud::Markup;
use serde::Deserialize;

use crate::{config::SiteConfig, content::ContentStore, render, site, state::AppState};

/// Build a page off the async runtime. `None` from `build` renders the 404
/// page for `path`.
async fn render_page<F>(state: AppState, path: String, build: F) -> Response
where
    F: FnOnce(&ContentStore, &SiteConfig) -> Option<Markup> + Send + 'static,
{
    let task = tokio::task::spawn_blocking(move || match build(&state.store, &state.config) {
        Some(page) => (StatusCode::OK, page),
        None => {
            tracing::debug!(path = %path, "no page for path");
            let page = site::not_found_page(&state.store, &state.config, &path);
            (StatusCode::NOT_FOUND, page)
        }
    })
    .await;

    match task {
        Ok((status, page)) => (status, Html(page.into_string())).into_response(),
        Err(e) => {
            tracing::error!(error = %e, "page render task failed");
            (StatusCode::INTERNAL_SERVER_ERROR, "Internal Server Error").into_response()
        }
    }
}

pub async fn index(State(state): State<AppState>, uri: Uri) -> Response {
    render_page(state, uri.path().to_string(), |store, config| {
        Some(site::home_page(store, config))
    })
    .await
}

pub async fn about(State(state): State<AppState>, uri: Uri) -> Response {
    render_page(state, uri.path().to_string(), |store, config| {
        Some(site::about_page(store, config))
    })
    .await
}

pub async fn resume(State(state): State<AppState>, uri: Uri) -> Response {
    render_page(state, uri.path().to_string(), |store, config| {
        Some(site::resume_page(store, config))
    })
    .await
}

pub async fn case_studies(State(state): State<AppState>, uri: Uri) -> Response {
    render_page(state, uri.path().to_string(), |store, config| {
        Some(site::case_studies_page(store, config))
    })
    .await
}

pub async fn case_study(
    State(state): State<AppState>,
    Path(slug): Path<String>,
    uri: Uri,
) -> Response {
    render_page(state, uri.path().to_string(), move |store, config| {
        site::case_study_page(store, config, &slug)
    })
    .await
}

/// `/invite/casestudies/{slug}`
pub async fn deck(
    State(state): State<AppState>,
    Path(slug): Path<String>,
    uri: Uri,
) -> Response {
    deck_response(state, slug, uri).await
}

/// `/invite/casestudies/{slug}/{*rest}`: deep link into a deck.
pub async fn deck_section(
    State(state): State<AppState>,
    Path((slug, _rest)): Path<(String, String)>,
    uri: Uri,
) -> Response {
    deck_response(state, slug, uri).await
}

async fn deck_response(state: AppState, slug: String, uri: Uri) -> Response {
    let path = uri.path().to_string();
    let deck_path = path.clone();
    render_page(state, path, move |store, config| {
        site::deck_page(store, config, &slug, Some(&deck_path))
    })
    .await
}

#[derive(Debug, Deserialize)]
pub struct ContactQuery {
    pub study: Option<String>,
}

pub async fn contact(
    State(state): State<AppState>,
    Query(query): Query<ContactQuery>,
    uri: Uri,
) -> Response {
    render_page(state, uri.path().to_string(), move |store, config| {
        Some(site::contact_page(store, config, query.study.as_deref()))
    })
    .await
}

pub async fn stylesheet(State(state): State<AppState>) -> impl IntoResponse {
    (
        [(header::CONTENT_TYPE, "text/css; charset=utf-8")],
        render::site_css(&state.config),
    )
}

/// Fallback for every unmatched route.
pub async fn not_found(State(state): State<AppState>, uri: Uri) -> Response {
    render_page(state, uri.path().to_string(), |_, _| None).await
}
