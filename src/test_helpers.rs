//! Shared test utilities.
//!
//! Tests work against a private copy of `fixtures/content/` so they can
//! rewrite or delete artifacts freely.
//!
//! # Usage
//!
//! ```rust
//! use crate::test_helpers::*;
//!
//! let tmp = setup_fixtures();
//! remove_artifact(tmp.path(), "case-studies/ai-assistant.json");
//! let store = ContentStore::new(tmp.path());
//! let cards = store.resolve_all_case_study_cards(&CASE_STUDY_KEYS);
//! assert!(!card_hrefs(&cards).contains(&"/case-study/ai-assistant"));
//! ```

use serde::de::DeserializeOwned;
use std::path::Path;
use tempfile::TempDir;

use crate::types::CaseStudyCard;

// =========================================================================
// Fixture setup
// =========================================================================

/// Copy `fixtures/content/` to a temp directory and return it.
pub fn setup_fixtures() -> TempDir {
    let tmp = TempDir::new().unwrap();
    let fixtures = Path::new(env!("CARGO_MANIFEST_DIR")).join("fixtures/content");
    copy_dir_recursive(&fixtures, tmp.path()).unwrap();
    tmp
}

fn copy_dir_recursive(src: &Path, dst: &Path) -> std::io::Result<()> {
    for entry in std::fs::read_dir(src)? {
        let entry = entry?;
        let src_path = entry.path();
        let dst_path = dst.join(entry.file_name());

        if src_path.is_dir() {
            std::fs::create_dir_all(&dst_path)?;
            copy_dir_recursive(&src_path, &dst_path)?;
        } else {
            std::fs::copy(&src_path, &dst_path)?;
        }
    }
    Ok(())
}

// =========================================================================
// Artifact manipulation
// =========================================================================

/// Parse an artifact from the fixture copy, bypassing the store.
pub fn read_fixture<T: DeserializeOwned>(root: &Path, rel: &str) -> T {
    let content = std::fs::read_to_string(root.join(rel))
        .unwrap_or_else(|e| panic!("fixture {rel} not readable: {e}"));
    serde_json::from_str(&content).unwrap_or_else(|e| panic!("fixture {rel} not parseable: {e}"))
}

/// Overwrite (or create) an artifact with raw text.
pub fn write_artifact(root: &Path, rel: &str, content: &str) {
    let path = root.join(rel);
    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent).unwrap();
    }
    std::fs::write(path, content).unwrap();
}

pub fn remove_artifact(root: &Path, rel: &str) {
    std::fs::remove_file(root.join(rel)).unwrap();
}

// =========================================================================
// Extractors
// =========================================================================

pub fn card_hrefs(cards: &[CaseStudyCard]) -> Vec<&str> {
    cards.iter().map(|c| c.href.as_str()).collect()
}

// =========================================================================
// Markup probes
// =========================================================================

/// Opening tag of the navigation bar. The inline stylesheet mentions the
/// class names too, so tests match on the element.
pub const NAV_TAG: &str = r#"<nav class="site-nav""#;
pub const FOOTER_TAG: &str = r#"<footer class="site-footer""#;
