//! # Casefolio
//!
//! A portfolio site for a product designer: a home page, an about page, a
//! resume, a case-study index, one article and one slide deck per case study,
//! and a contact form. Page copy is not written by hand in this crate. An
//! offline generator writes JSON artifacts into a content directory and the
//! server renders whatever it finds there.
//!
//! # Architecture: Resolve, Compose, Render
//!
//! ```text
//! 1. Resolve   content/<namespace>/<key>.json  →  typed record (or None)
//! 2. Fallback  None                            →  built-in record
//! 3. Compose   request path                    →  which chrome to draw
//! 4. Render    record + chrome                 →  HTML via Maud
//! ```
//!
//! Resolution never fails. A missing file, broken JSON, or a record of the
//! wrong shape all come back as `None` and are logged; the page then renders
//! the built-in record instead. A half-written artifact can therefore never
//! take a page down.
//!
//! # Module Map
//!
//! | Module | Role |
//! |--------|------|
//! | [`registry`] | The fixed set of content keys per namespace |
//! | [`content`] | Artifact store: typed, failure-tolerant resolution and auditing |
//! | [`types`] | Record shapes for every page, component, and case study |
//! | [`defaults`] | Built-in records used when an artifact does not resolve |
//! | [`layout`] | Path-conditional chrome: navigation, footer, `<main>` wrapper |
//! | [`deck`] | Slide sequence for the presentation routes |
//! | [`render`] | Maud templates |
//! | [`site`] | Page assembly shared by the server and the exporter |
//! | [`config`] | `config.toml` loading, validation, merging, and CSS generation |
//! | [`email`] | Contact request validation and delivery through a [`email::Mailer`] |
//! | [`app`] | Axum router and middleware |
//! | [`handlers`] | HTTP handlers for pages and the JSON API |
//! | [`state`] | Shared application state |
//! | [`export`] | Static export of every page to a directory |
//! | [`output`] | CLI output formatting for `check` and `export` |
//!
//! # Design Decisions
//!
//! ## Keys Are Closed
//!
//! Every namespace has a fixed list of keys in [`registry`]. A lookup for a
//! key outside that list never touches the filesystem, so request paths such
//! as `/case-study/../components/footer` cannot reach arbitrary files.
//!
//! ## No Cache
//!
//! Artifacts are re-read on every request. The generator may rewrite them at
//! any time and the next request sees the new copy.
//!
//! ## Maud Over Template Engines
//!
//! HTML is generated with [Maud](https://maud.lambda.xyz/). Malformed markup
//! is a build error and every interpolation is escaped, which matters here
//! because artifact text comes from a generator, not a trusted author.

pub mod app;
pub mod config;
pub mod content;
pub mod deck;
pub mod defaults;
pub mod email;
pub mod export;
pub mod handlers;
pub mod layout;
pub mod output;
pub mod registry;
pub mod render;
pub mod site;
pub mod state;
pub mod types;

#[cfg(test)]
pub(crate) mod test_helpers;
