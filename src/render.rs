//! HTML rendering.
//!
//! Pure functions from typed content records to [`Markup`]. Nothing in here
//! touches the filesystem; [`crate::site`] resolves the records and calls in.
//!
//! Every full page goes through [`page`], which asks [`crate::layout`] which
//! chrome (navigation, footer, `<main>`) the request path gets.
//!
//! Uses [maud](https://maud.lambda.xyz/) for compile-time HTML templating,
//! so every interpolated string is escaped. Markdown fields (the about bio
//! and case-study sections) go through `pulldown-cmark` first.

use crate::config::{self, BrandPalette, SiteConfig};
use crate::deck::Slide;
use crate::layout::{self, Chrome};
use crate::types::{
    AboutContent, CaseStudiesContent, CaseStudy, CaseStudyCard, Experience, FooterContent, Hero,
    HomeContent, Metric, NavigationContent, ResumeContent, SkillGroup,
};
use maud::{DOCTYPE, Markup, PreEscaped, html};
use pulldown_cmark::{Event, Parser, html as md_html};

const CSS_STATIC: &str = include_str!("../static/style.css");
const CONTACT_JS: &str = include_str!("../static/contact.js");

/// Shared surroundings of every page: config plus the resolved navigation
/// and footer records.
#[derive(Debug, Clone)]
pub struct Frame<'a> {
    pub config: &'a SiteConfig,
    pub navigation: NavigationContent,
    pub footer: FooterContent,
}

/// Full stylesheet: theme colors, brand palette, then the static rules.
pub fn site_css(config: &SiteConfig) -> String {
    format!(
        "{}\n\n{}\n\n{}",
        config::generate_color_css(&config.colors),
        config::generate_brand_css(&config.brands),
        CSS_STATIC
    )
}

// ============================================================================
// Document structure
// ============================================================================

/// Renders the base HTML document structure
fn base_document(title: &str, css: &str, body_class: Option<&str>, content: Markup) -> Markup {
    html! {
        (DOCTYPE)
        html lang="en" {
            head {
                meta charset="UTF-8";
                meta name="viewport" content="width=device-width, initial-scale=1.0";
                title { (title) }
                style { (PreEscaped(css)) }
            }
            body class=[body_class] {
                (content)
            }
        }
    }
}

/// Wrap a page body in the chrome its path calls for.
pub fn page(
    frame: &Frame<'_>,
    path: &str,
    title: &str,
    body_class: Option<&str>,
    body: Markup,
) -> Markup {
    let chrome = Chrome::for_path(path);
    let site_title = &frame.config.site.title;
    let full_title = if title.is_empty() {
        site_title.clone()
    } else {
        format!("{title} · {site_title}")
    };

    let content = html! {
        @if chrome.navigation {
            (render_nav(&frame.navigation, path))
        }
        @if chrome.main {
            main { (body) }
        } @else {
            (body)
        }
        @if chrome.footer {
            (render_footer(&frame.footer))
        }
    };

    base_document(&full_title, &site_css(frame.config), body_class, content)
}

/// Renders the global navigation bar.
pub fn render_nav(nav: &NavigationContent, current_path: &str) -> Markup {
    html! {
        nav.site-nav {
            a.brand href="/" { (nav.brand) }
            ul {
                @for link in &nav.links {
                    @let is_current = link.href.starts_with('/') && layout::is_under(current_path, &link.href);
                    li class=[is_current.then_some("current")] {
                        a href=(link.href) { (link.label) }
                    }
                }
            }
            @if let Some(cta) = &nav.cta {
                a.nav-cta href=(cta.href) { (cta.label) }
            }
        }
    }
}

pub fn render_footer(footer: &FooterContent) -> Markup {
    html! {
        footer.site-footer {
            h2 { (footer.headline) }
            a.footer-email href={ "mailto:" (footer.email) } { (footer.email) }
            @if !footer.socials.is_empty() {
                ul {
                    @for social in &footer.socials {
                        li { a href=(social.href) rel="noopener" target="_blank" { (social.label) } }
                    }
                }
            }
            @if !footer.copyright.is_empty() {
                p.copyright { (footer.copyright) }
            }
        }
    }
}

// ============================================================================
// Shared blocks
// ============================================================================

fn render_hero(hero: &Hero) -> Markup {
    html! {
        header.hero {
            @if !hero.eyebrow.is_empty() {
                p.eyebrow { (hero.eyebrow) }
            }
            h1 { (hero.title) }
            @if !hero.subtitle.is_empty() {
                p.subtitle { (hero.subtitle) }
            }
            @if let Some(cta) = &hero.cta {
                a.hero-cta href=(cta.href) { (cta.label) }
            }
        }
    }
}

fn render_metrics(metrics: &[Metric]) -> Markup {
    html! {
        @if !metrics.is_empty() {
            ul.metrics {
                @for metric in metrics {
                    li {
                        span.metric-value { (metric.value) }
                        span.metric-label { (metric.label) }
                    }
                }
            }
        }
    }
}

fn render_skills(skills: &[String]) -> Markup {
    html! {
        @if !skills.is_empty() {
            ul.skills {
                @for skill in skills {
                    li { (skill) }
                }
            }
        }
    }
}

fn render_skill_groups(groups: &[SkillGroup]) -> Markup {
    html! {
        @for group in groups {
            div.skill-group {
                h3 { (group.name) }
                (render_skills(&group.items))
            }
        }
    }
}

/// A case-study card, tinted with its brand color.
pub fn render_card(card: &CaseStudyCard, brands: &BrandPalette) -> Markup {
    let brand_style = format!("--brand: {};", brands.css_value(&card.brand_color));
    html! {
        a.study-card href=(card.href) style=(brand_style) {
            p.meta { (card.company) " · " (card.year) }
            h3 { (card.title) }
            @if !card.subtitle.is_empty() {
                p.card-subtitle { (card.subtitle) }
            }
            p { (card.description) }
            (render_metrics(&card.metrics))
            (render_skills(&card.skills))
        }
    }
}

fn render_card_grid(cards: &[CaseStudyCard], brands: &BrandPalette) -> Markup {
    html! {
        div.card-grid {
            @for card in cards {
                (render_card(card, brands))
            }
        }
    }
}

/// Convert markdown to HTML. Raw HTML in the source is emitted as text.
pub fn markdown(text: &str) -> Markup {
    let parser = Parser::new(text).map(|event| match event {
        Event::Html(raw) | Event::InlineHtml(raw) => Event::Text(raw),
        other => other,
    });
    let mut out = String::new();
    md_html::push_html(&mut out, parser);
    PreEscaped(out)
}

// ============================================================================
// Page bodies
// ============================================================================

pub fn home(home: &HomeContent, featured: &[CaseStudyCard], brands: &BrandPalette) -> Markup {
    html! {
        div.home-page {
            (render_hero(&home.hero))
            (render_metrics(&home.metrics))
            @if !home.clients.is_empty() {
                ul.clients {
                    @for client in &home.clients {
                        li { (client) }
                    }
                }
            }
            @if !featured.is_empty() {
                section.featured {
                    h2 { "Selected work" }
                    (render_card_grid(featured, brands))
                }
            }
        }
    }
}

pub fn about(about: &AboutContent) -> Markup {
    html! {
        div.about-page {
            (render_hero(&about.hero))
            article.bio { (markdown(&about.bio)) }
            @if !about.principles.is_empty() {
                section.principles {
                    h2 { "How I work" }
                    @for principle in &about.principles {
                        h3 { (principle.heading) }
                        (markdown(&principle.body))
                    }
                }
            }
            @if !about.skills.is_empty() {
                section.skill-groups {
                    h2 { "Skills" }
                    (render_skill_groups(&about.skills))
                }
            }
        }
    }
}

fn render_experience(entries: &[Experience]) -> Markup {
    html! {
        @for entry in entries {
            div.resume-entry {
                h3 { (entry.role) ", " (entry.company) }
                p.period {
                    (entry.period)
                    @if !entry.location.is_empty() { " · " (entry.location) }
                }
                @if !entry.highlights.is_empty() {
                    ul {
                        @for highlight in &entry.highlights {
                            li { (highlight) }
                        }
                    }
                }
            }
        }
    }
}

pub fn resume(resume: &ResumeContent) -> Markup {
    html! {
        div.resume-page {
            header.hero {
                h1 { (resume.name) }
                p.subtitle { (resume.headline) }
                @if let Some(download) = &resume.download {
                    a.hero-cta href=(download.href) download { (download.label) }
                }
            }
            @if !resume.summary.is_empty() {
                p.summary { (resume.summary) }
            }
            @if !resume.experience.is_empty() {
                section {
                    h2 { "Experience" }
                    (render_experience(&resume.experience))
                }
            }
            @if !resume.education.is_empty() {
                section {
                    h2 { "Education" }
                    (render_experience(&resume.education))
                }
            }
            @if !resume.skills.is_empty() {
                section {
                    h2 { "Skills" }
                    (render_skill_groups(&resume.skills))
                }
            }
        }
    }
}

pub fn case_studies(
    content: &CaseStudiesContent,
    cards: &[CaseStudyCard],
    brands: &BrandPalette,
) -> Markup {
    html! {
        div.case-studies-page {
            (render_hero(&content.hero))
            @if cards.is_empty() {
                p.empty { (content.empty_message) }
            } @else {
                (render_card_grid(cards, brands))
            }
        }
    }
}

pub fn case_study(study: &CaseStudy, key: &str, brands: &BrandPalette) -> Markup {
    let brand_style = format!("--brand: {};", brands.css_value(&study.brand_color));
    html! {
        article.article style=(brand_style) {
            header.hero {
                p.eyebrow { (study.company) " · " (study.year) }
                h1 { (study.title) }
                @if !study.subtitle.is_empty() {
                    p.subtitle { (study.subtitle) }
                }
            }
            p.lede { (study.description) }
            @if !study.role.is_empty() {
                p.role { "Role: " (study.role) }
            }
            (render_metrics(&study.metrics))
            (render_skills(&study.skills))
            @for section in &study.sections {
                section {
                    h2 { (section.heading) }
                    (markdown(&section.body))
                }
            }
            @if !study.outcome.is_empty() {
                section.outcome {
                    h2 { "Outcome" }
                    p { (study.outcome) }
                }
            }
            nav.article-links {
                a href={ (layout::PRESENTATION_PREFIX) "/" (key) } { "View as presentation" }
                " · "
                a href={ "/contact?study=" (key) } { "Ask me about this project" }
            }
        }
    }
}

/// Slide deck body. Rendered without any site chrome.
pub fn deck(slides: &[Slide], key: &str) -> Markup {
    let total = slides.len();
    html! {
        div.deck-track {
            @for (idx, slide) in slides.iter().enumerate() {
                section.slide id={ "slide-" (idx + 1) } {
                    p.counter { (idx + 1) " / " (total) }
                    (render_slide(slide, key))
                }
            }
        }
    }
}

fn render_slide(slide: &Slide, key: &str) -> Markup {
    match slide {
        Slide::Cover {
            company,
            title,
            subtitle,
            year,
        } => html! {
            p.eyebrow { (company) " · " (year) }
            h1 { (title) }
            @if !subtitle.is_empty() { p.subtitle { (subtitle) } }
        },
        Slide::Context {
            role,
            description,
            skills,
        } => html! {
            h2 { "Context" }
            p { (description) }
            @if !role.is_empty() { p.role { (role) } }
            (render_skills(skills))
        },
        Slide::Metrics(metrics) => html! {
            h2 { "Impact" }
            (render_metrics(metrics))
        },
        Slide::Section(section) => html! {
            h2 { (section.heading) }
            (markdown(&section.body))
        },
        Slide::Outcome(outcome) => html! {
            h2 { "Outcome" }
            p { (outcome) }
        },
        Slide::Closing { title } => html! {
            h2 { "Thank you" }
            p { (title) }
            a href={ "/case-study/" (key) } { "Read the full case study" }
        },
    }
}

/// Contact form, optionally tied to a case study.
pub fn contact(study: Option<&str>) -> Markup {
    html! {
        div.contact-page {
            header.hero {
                h1 { "Get in touch" }
                p.subtitle { "Leave a short note and I will reply by email." }
            }
            form.contact-form method="post" action="/api/send-email" {
                label { "Name" input name="name" required; }
                label { "Email" input type="email" name="email" required; }
                label {
                    "Message"
                    textarea name="message" maxlength="160" required {}
                }
                label { input type="checkbox" name="isRecruiter"; " I am a recruiter" }
                input type="hidden" name="caseStudySlug" value=(study.unwrap_or("general"));
                button type="submit" { "Send" }
                p.form-status aria-live="polite" {}
            }
            script { (PreEscaped(CONTACT_JS)) }
        }
    }
}

pub fn not_found(path: &str) -> Markup {
    html! {
        div.not-found {
            h1 { "Page not found" }
            p { "Nothing lives at " code { (path) } "." }
            a href="/" { "Back to the home page" }
        }
    }
}
