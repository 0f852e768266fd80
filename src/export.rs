//! Static export: render every route to HTML files.
//!
//! Produces a directory that any static file server can host:
//!
//! ```text
//! dist/
//! ├── index.html
//! ├── about/index.html
//! ├── resume/index.html
//! ├── case-studies/index.html
//! ├── contact/index.html
//! ├── case-study/<key>/index.html
//! ├── invite/casestudies/<key>/index.html
//! ├── api/footer.json
//! ├── 404.html
//! └── style.css
//! ```
//!
//! Pages go through the same [`crate::site`] functions as the server, so an
//! exported page is byte-for-byte what `serve` would return for that path.
//! `POST /api/send-email` has no static equivalent; the exported contact
//! form only works behind a running server.

use crate::config::SiteConfig;
use crate::content::ContentStore;
use crate::layout::PRESENTATION_PREFIX;
use crate::registry::{CASE_STUDY_KEYS, ComponentKey};
use crate::render;
use crate::site;
use crate::types::FooterContent;
use maud::Markup;
use rayon::prelude::*;
use std::fs;
use std::path::{Path, PathBuf};
use thiserror::Error;

#[derive(Error, Debug)]
pub enum ExportError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

/// A file written by [`export`], relative to the output directory.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExportedPage {
    pub route: String,
    pub file: PathBuf,
}

/// File a route is written to: `/` → `index.html`, `/about` → `about/index.html`.
pub fn route_file(route: &str) -> PathBuf {
    let trimmed = route.trim_matches('/');
    if trimmed.is_empty() {
        PathBuf::from("index.html")
    } else {
        Path::new(trimmed).join("index.html")
    }
}

pub fn export(
    store: &ContentStore,
    config: &SiteConfig,
    output_dir: &Path,
) -> Result<Vec<ExportedPage>, ExportError> {
    fs::create_dir_all(output_dir)?;

    let mut pages: Vec<(String, Markup)> = vec![
        ("/".into(), site::home_page(store, config)),
        ("/about".into(), site::about_page(store, config)),
        ("/resume".into(), site::resume_page(store, config)),
        ("/case-studies".into(), site::case_studies_page(store, config)),
        ("/contact".into(), site::contact_page(store, config, None)),
    ];

    // Two pages per case study; render them in parallel.
    let studies: Vec<(String, Markup)> = CASE_STUDY_KEYS
        .par_iter()
        .flat_map_iter(|key| {
            let article = site::case_study_page(store, config, key)
                .map(|page| (format!("/case-study/{key}"), page));
            let deck = site::deck_page(store, config, key, None)
                .map(|page| (format!("{PRESENTATION_PREFIX}/{key}"), page));
            article.into_iter().chain(deck)
        })
        .collect();
    pages.extend(studies);

    let mut exported = Vec::with_capacity(pages.len() + 3);
    for (route, page) in pages {
        let file = route_file(&route);
        write_file(output_dir, &file, &page.into_string())?;
        exported.push(ExportedPage { route, file });
    }

    let not_found = site::not_found_page(store, config, "/404");
    exported.push(write_extra(output_dir, "/404", "404.html", &not_found.into_string())?);
    exported.push(write_extra(
        output_dir,
        "/style.css",
        "style.css",
        &render::site_css(config),
    )?);

    // Mirrors the API: only a resolved footer is published.
    match store.resolve_component_content::<FooterContent>(ComponentKey::Footer.as_str()) {
        Some(footer) => {
            let json = serde_json::to_string_pretty(&footer)?;
            exported.push(write_extra(output_dir, "/api/footer", "api/footer.json", &json)?);
        }
        None => tracing::warn!("footer artifact unavailable, skipping api/footer.json"),
    }

    tracing::info!(count = exported.len(), output = %output_dir.display(), "export finished");
    Ok(exported)
}

fn write_extra(
    output_dir: &Path,
    route: &str,
    file: &str,
    contents: &str,
) -> Result<ExportedPage, ExportError> {
    let file = PathBuf::from(file);
    write_file(output_dir, &file, contents)?;
    Ok(ExportedPage {
        route: route.to_string(),
        file,
    })
}

fn write_file(output_dir: &Path, rel: &Path, contents: &str) -> Result<(), ExportError> {
    let path = output_dir.join(rel);
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)?;
    }
    fs::write(path, contents)?;
    Ok(())
}
