//! Page assembly: resolve content, fall back to defaults, render.
//!
//! Both the HTTP handlers and the static exporter build pages through these
//! functions, so a route looks the same whether it is served or exported.
//! Each call resolves its records afresh from the store.

use crate::config::SiteConfig;
use crate::content::ContentStore;
use crate::deck;
use crate::defaults;
use crate::layout::PRESENTATION_PREFIX;
use crate::registry::{CASE_STUDY_KEYS, ComponentKey, PageKey, case_study_key};
use crate::render::{self, Frame};
use crate::types::{
    AboutContent, CaseStudiesContent, CaseStudyCard, HomeContent, ResumeContent,
};
use maud::Markup;

/// Resolve the navigation and footer records for a page.
pub fn frame<'a>(store: &ContentStore, config: &'a SiteConfig) -> Frame<'a> {
    Frame {
        config,
        navigation: store.component_or_default(ComponentKey::Navigation),
        footer: store.component_or_default(ComponentKey::Footer),
    }
}

/// Cards for `keys` from the store; when none resolve, the built-in cards.
pub fn cards_or_default(store: &ContentStore, keys: &[&str]) -> Vec<CaseStudyCard> {
    let cards = store.resolve_all_case_study_cards(keys);
    if !cards.is_empty() {
        return cards;
    }
    keys.iter()
        .filter_map(|key| defaults::builtin_case_study(key)?.card(key))
        .collect()
}

pub fn home_page(store: &ContentStore, config: &SiteConfig) -> Markup {
    let home: HomeContent = store.page_or_default(PageKey::Home);
    let featured_keys: Vec<&str> = home
        .featured
        .iter()
        .filter_map(|k| case_study_key(k))
        .collect();
    let featured = cards_or_default(store, &featured_keys);
    let body = render::home(&home, &featured, &config.brands);
    render::page(&frame(store, config), "/", "", None, body)
}

pub fn about_page(store: &ContentStore, config: &SiteConfig) -> Markup {
    let about: AboutContent = store.page_or_default(PageKey::About);
    let body = render::about(&about);
    render::page(&frame(store, config), "/about", "About", None, body)
}

pub fn resume_page(store: &ContentStore, config: &SiteConfig) -> Markup {
    let resume: ResumeContent = store.page_or_default(PageKey::Resume);
    let body = render::resume(&resume);
    render::page(&frame(store, config), "/resume", "Resume", None, body)
}

pub fn case_studies_page(store: &ContentStore, config: &SiteConfig) -> Markup {
    let content: CaseStudiesContent = store.page_or_default(PageKey::CaseStudies);
    let cards = cards_or_default(store, &CASE_STUDY_KEYS);
    let body = render::case_studies(&content, &cards, &config.brands);
    let title = content.hero.title.clone();
    render::page(&frame(store, config), "/case-studies", &title, None, body)
}

/// Article page for a case study; `None` for slugs outside the registry.
pub fn case_study_page(store: &ContentStore, config: &SiteConfig, slug: &str) -> Option<Markup> {
    let key = case_study_key(slug)?;
    let study = store.case_study_or_default(key)?;
    let path = format!("/case-study/{key}");
    let body = render::case_study(&study, key, &config.brands);
    Some(render::page(&frame(store, config), &path, &study.title, None, body))
}

/// Slide deck for a case study; `None` for slugs outside the registry.
///
/// `path` is the request path, so deep links inside the deck keep the
/// presentation chrome rules.
pub fn deck_page(
    store: &ContentStore,
    config: &SiteConfig,
    slug: &str,
    path: Option<&str>,
) -> Option<Markup> {
    let key = case_study_key(slug)?;
    let study = store.case_study_or_default(key)?;
    let slides = deck::build(&study);
    let default_path = format!("{PRESENTATION_PREFIX}/{key}");
    let path = path.unwrap_or(&default_path);
    let body = render::deck(&slides, key);
    Some(render::page(
        &frame(store, config),
        path,
        &study.title,
        Some("deck"),
        body,
    ))
}

pub fn contact_page(store: &ContentStore, config: &SiteConfig, study: Option<&str>) -> Markup {
    let study = study.and_then(case_study_key);
    render::page(
        &frame(store, config),
        "/contact",
        "Contact",
        None,
        render::contact(study),
    )
}

pub fn not_found_page(store: &ContentStore, config: &SiteConfig, path: &str) -> Markup {
    render::page(
        &frame(store, config),
        path,
        "Not found",
        None,
        render::not_found(path),
    )
}
