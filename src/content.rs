//! Content resolution.
//!
//! Maps a content key to a typed record loaded from the artifact store:
//!
//! ```text
//! content/
//! ├── config.toml
//! ├── pages/
//! │   ├── home.json
//! │   ├── about.json
//! │   ├── case-studies.json
//! │   └── resume.json
//! ├── components/
//! │   ├── navigation.json
//! │   └── footer.json
//! └── case-studies/
//!     ├── zalando-contextual.json
//!     └── ...
//! ```
//!
//! ## Contract
//!
//! Resolvers never fail. An unknown key, a missing file, an I/O error, bad
//! JSON, or JSON that does not fit the record shape are all logged and
//! reported as `None`. The caller decides what to render instead, normally
//! the built-in default from [`crate::defaults`]:
//!
//! ```rust,no_run
//! # use casefolio::content::ContentStore;
//! # use casefolio::defaults::Builtin;
//! # use casefolio::types::HomeContent;
//! let store = ContentStore::new("content");
//! let home: HomeContent = store
//!     .resolve_page_content("home")
//!     .unwrap_or_else(HomeContent::builtin);
//! ```
//!
//! Every call reads from disk. There is no cache, so an artifact rewritten by
//! the offline generator is picked up on the next request.

use crate::defaults::{self, Builtin};
use crate::registry::{ComponentKey, Namespace, PageKey};
use crate::types::{
    AboutContent, CaseStudiesContent, CaseStudy, CaseStudyCard, FooterContent, HomeContent,
    NavigationContent, ResumeContent,
};
use serde::de::DeserializeOwned;
use std::fs;
use std::path::{Path, PathBuf};
use thiserror::Error;
use walkdir::WalkDir;

/// Why an artifact could not be loaded. Logged, never returned by resolvers.
#[derive(Error, Debug)]
pub enum LoadError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

impl LoadError {
    fn is_not_found(&self) -> bool {
        matches!(self, Self::Io(e) if e.kind() == std::io::ErrorKind::NotFound)
    }
}

/// Outcome of inspecting a single artifact, used by the `check` command.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ArtifactStatus {
    /// The artifact exists and fits its record shape.
    Resolved,
    /// No artifact on disk; the built-in default will be used.
    Missing,
    /// The artifact exists but cannot be used; the built-in default will be used.
    Invalid(String),
}

/// Read-only view of the artifact store rooted at a content directory.
#[derive(Debug, Clone)]
pub struct ContentStore {
    root: PathBuf,
}

impl ContentStore {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    /// Path of the artifact for a registered key, `None` for unknown keys.
    pub fn artifact_path(&self, namespace: Namespace, key: &str) -> Option<PathBuf> {
        let key = namespace.lookup(key)?;
        Some(self.root.join(namespace.dir()).join(format!("{key}.json")))
    }

    pub fn resolve_page_content<T: DeserializeOwned>(&self, key: &str) -> Option<T> {
        self.load(Namespace::Pages, key)
    }

    pub fn resolve_component_content<T: DeserializeOwned>(&self, key: &str) -> Option<T> {
        self.load(Namespace::Components, key)
    }

    pub fn resolve_case_study_content(&self, key: &str) -> Option<CaseStudy> {
        self.load(Namespace::CaseStudies, key)
    }

    /// Resolve the card projection of each key, in order.
    ///
    /// Keys that do not resolve, or whose record has no usable card, are
    /// skipped, so the result may be shorter than `known_keys`.
    pub fn resolve_all_case_study_cards(&self, known_keys: &[&str]) -> Vec<CaseStudyCard> {
        known_keys
            .iter()
            .filter_map(|key| {
                let card = self.resolve_case_study_content(key)?.card(key);
                if card.is_none() {
                    tracing::debug!(key, "case study has no usable card, skipping");
                }
                card
            })
            .collect()
    }

    /// Untyped load, for diagnostics.
    pub fn resolve_raw(&self, namespace: Namespace, key: &str) -> Option<serde_json::Value> {
        self.load(namespace, key)
    }

    /// Resolved page record, or its built-in default.
    pub fn page_or_default<T: DeserializeOwned + Builtin>(&self, key: PageKey) -> T {
        self.resolve_page_content(key.as_str())
            .unwrap_or_else(T::builtin)
    }

    /// Resolved component record, or its built-in default.
    pub fn component_or_default<T: DeserializeOwned + Builtin>(&self, key: ComponentKey) -> T {
        self.resolve_component_content(key.as_str())
            .unwrap_or_else(T::builtin)
    }

    /// Resolved case study, or its built-in default. `None` only for keys
    /// outside the registry.
    pub fn case_study_or_default(&self, key: &str) -> Option<CaseStudy> {
        self.resolve_case_study_content(key)
            .or_else(|| defaults::builtin_case_study(key))
    }

    /// Report whether an artifact would resolve, distinguishing missing
    /// from invalid. Resolvers themselves never make this distinction.
    pub fn inspect(&self, namespace: Namespace, key: &str) -> ArtifactStatus {
        let Some(path) = self.artifact_path(namespace, key) else {
            return ArtifactStatus::Invalid(format!("'{key}' is not a registered {namespace} key"));
        };
        let result = match (namespace, key) {
            (Namespace::Pages, "home") => probe::<HomeContent>(&path),
            (Namespace::Pages, "about") => probe::<AboutContent>(&path),
            (Namespace::Pages, "case-studies") => probe::<CaseStudiesContent>(&path),
            (Namespace::Pages, "resume") => probe::<ResumeContent>(&path),
            (Namespace::Components, "navigation") => probe::<NavigationContent>(&path),
            (Namespace::Components, "footer") => probe::<FooterContent>(&path),
            (Namespace::CaseStudies, _) => probe::<CaseStudy>(&path),
            _ => probe::<serde_json::Value>(&path),
        };
        match result {
            Ok(()) => ArtifactStatus::Resolved,
            Err(e) if e.is_not_found() => ArtifactStatus::Missing,
            Err(e) => ArtifactStatus::Invalid(e.to_string()),
        }
    }

    fn load<T: DeserializeOwned>(&self, namespace: Namespace, key: &str) -> Option<T> {
        let Some(path) = self.artifact_path(namespace, key) else {
            tracing::debug!(%namespace, key, "unknown content key");
            return None;
        };
        match read_record(&path) {
            Ok(record) => Some(record),
            Err(e) if e.is_not_found() => {
                tracing::debug!(%namespace, key, path = %path.display(), "no artifact, using default");
                None
            }
            Err(e) => {
                tracing::warn!(
                    %namespace,
                    key,
                    path = %path.display(),
                    error = %e,
                    "unusable artifact, using default"
                );
                None
            }
        }
    }
}

// ============================================================================
// Audit
// ============================================================================

/// Status of one registered artifact.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AuditEntry {
    pub namespace: Namespace,
    pub key: &'static str,
    pub status: ArtifactStatus,
}

/// Every registered artifact's status, plus JSON files in the store that no
/// key maps to (usually a typo in a generated file name).
#[derive(Debug, Clone, Default)]
pub struct Audit {
    pub entries: Vec<AuditEntry>,
    pub unregistered: Vec<PathBuf>,
}

impl Audit {
    pub fn resolved_count(&self) -> usize {
        self.entries
            .iter()
            .filter(|e| e.status == ArtifactStatus::Resolved)
            .count()
    }
}

impl ContentStore {
    /// Inspect every registered key and look for stray artifacts.
    pub fn audit(&self) -> Audit {
        let entries = Namespace::ALL
            .iter()
            .flat_map(|&namespace| {
                namespace.keys().into_iter().map(move |key| AuditEntry {
                    namespace,
                    key,
                    status: self.inspect(namespace, key),
                })
            })
            .collect();
        Audit {
            entries,
            unregistered: self.unregistered_artifacts(),
        }
    }

    fn unregistered_artifacts(&self) -> Vec<PathBuf> {
        let mut stray: Vec<PathBuf> = WalkDir::new(&self.root)
            .into_iter()
            .filter_map(|e| e.ok())
            .filter(|e| e.file_type().is_file())
            .filter(|e| e.path().extension().is_some_and(|ext| ext == "json"))
            .filter_map(|e| {
                let rel = e.path().strip_prefix(&self.root).ok()?.to_path_buf();
                (!is_registered(&rel)).then_some(rel)
            })
            .collect();
        stray.sort();
        stray
    }
}

fn is_registered(rel: &Path) -> bool {
    let Some(stem) = rel.file_stem().and_then(|s| s.to_str()) else {
        return false;
    };
    Namespace::ALL.iter().any(|ns| {
        rel.parent() == Some(Path::new(ns.dir())) && ns.lookup(stem).is_some()
    })
}

fn read_record<T: DeserializeOwned>(path: &Path) -> Result<T, LoadError> {
    let content = fs::read_to_string(path)?;
    Ok(serde_json::from_str(&content)?)
}

fn probe<T: DeserializeOwned>(path: &Path) -> Result<(), LoadError> {
    read_record::<T>(path).map(|_| ())
}
