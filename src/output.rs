//! CLI output formatting for `check` and `export`.
//!
//! # Information-First Display
//!
//! Every entity leads with its positional index and key. Where its data came
//! from is secondary context, shown on indented lines underneath:
//!
//! ```text
//! Pages
//! 001 home
//!     Source: pages/home.json
//! 002 about
//!     Default: no artifact
//! 003 case-studies
//!     Default: invalid artifact (missing field `hero` at line 1 column 2)
//!
//! Unregistered
//!     case-studies/zalando-contextal.json
//!
//! 12 of 14 artifacts resolved, 2 using built-in defaults
//! ```
//!
//! ```text
//! / → index.html
//! /about → about/index.html
//! /case-study/zalando-contextual → case-study/zalando-contextual/index.html
//!
//! Exported 24 files
//! ```
//!
//! # Architecture
//!
//! Each command has a `format_*` function (returns `Vec<String>`) for
//! testability and a `print_*` wrapper that writes to stdout. Format
//! functions are pure: no I/O, no side effects.

use crate::content::{ArtifactStatus, Audit};
use crate::export::ExportedPage;
use crate::registry::Namespace;

/// Longest invalid-artifact reason shown before truncation.
const MAX_REASON_CHARS: usize = 80;

// ============================================================================
// Shared display helpers
// ============================================================================

/// Format a 1-based positional index as 3-digit zero-padded.
fn format_index(pos: usize) -> String {
    format!("{:0>3}", pos)
}

/// Return indentation string: 4 spaces per depth level.
fn indent(depth: usize) -> String {
    "    ".repeat(depth)
}

/// Truncate text to `max` characters, appending `...` if truncated.
fn truncate(text: &str, max: usize) -> String {
    if text.chars().count() <= max {
        text.to_string()
    } else {
        let head: String = text.chars().take(max).collect();
        format!("{head}...")
    }
}

fn section_title(namespace: Namespace) -> &'static str {
    match namespace {
        Namespace::Pages => "Pages",
        Namespace::Components => "Components",
        Namespace::CaseStudies => "Case studies",
    }
}

fn status_line(namespace: Namespace, key: &str, status: &ArtifactStatus) -> String {
    match status {
        ArtifactStatus::Resolved => {
            format!("{}Source: {}/{}.json", indent(1), namespace.dir(), key)
        }
        ArtifactStatus::Missing => format!("{}Default: no artifact", indent(1)),
        ArtifactStatus::Invalid(reason) => format!(
            "{}Default: invalid artifact ({})",
            indent(1),
            truncate(reason, MAX_REASON_CHARS)
        ),
    }
}

// ============================================================================
// check
// ============================================================================

/// Format the content audit, grouped by namespace in registry order.
pub fn format_check_output(audit: &Audit) -> Vec<String> {
    let mut lines = Vec::new();

    for namespace in Namespace::ALL {
        let entries: Vec<_> = audit
            .entries
            .iter()
            .filter(|e| e.namespace == namespace)
            .collect();
        if entries.is_empty() {
            continue;
        }
        if !lines.is_empty() {
            lines.push(String::new());
        }
        lines.push(section_title(namespace).to_string());
        for (i, entry) in entries.iter().enumerate() {
            lines.push(format!("{} {}", format_index(i + 1), entry.key));
            lines.push(status_line(namespace, entry.key, &entry.status));
        }
    }

    if !audit.unregistered.is_empty() {
        lines.push(String::new());
        lines.push("Unregistered".to_string());
        for path in &audit.unregistered {
            lines.push(format!("{}{}", indent(1), path.display()));
        }
    }

    let total = audit.entries.len();
    let resolved = audit.resolved_count();
    lines.push(String::new());
    lines.push(format!(
        "{} of {} artifacts resolved, {} using built-in defaults",
        resolved,
        total,
        total - resolved
    ));
    lines
}

pub fn print_check_output(audit: &Audit) {
    for line in format_check_output(audit) {
        println!("{}", line);
    }
}

// ============================================================================
// export
// ============================================================================

pub fn format_export_output(pages: &[ExportedPage]) -> Vec<String> {
    let mut lines: Vec<String> = pages
        .iter()
        .map(|p| format!("{} → {}", p.route, p.file.display()))
        .collect();
    lines.push(String::new());
    let noun = if pages.len() == 1 { "file" } else { "files" };
    lines.push(format!("Exported {} {}", pages.len(), noun));
    lines
}

pub fn print_export_output(pages: &[ExportedPage]) {
    for line in format_export_output(pages) {
        println!("{}", line);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::content::AuditEntry;
    use std::path::PathBuf;

    // =========================================================================
    // Helper tests
    // =========================================================================

    #[test]
    fn format_index_pads_to_three_digits() {
        assert_eq!(format_index(1), "001");
        assert_eq!(format_index(42), "042");
        assert_eq!(format_index(123), "123");
    }

    #[test]
    fn indent_levels() {
        assert_eq!(indent(0), "");
        assert_eq!(indent(2), "        ");
    }

    #[test]
    fn truncate_short() {
        assert_eq!(truncate("hello", 10), "hello");
    }

    #[test]
    fn truncate_counts_chars_not_bytes() {
        assert_eq!(truncate("ééééé", 5), "ééééé");
        assert_eq!(truncate("éééééé", 5), "ééééé...");
    }

    // =========================================================================
    // check
    // =========================================================================

    fn entry(namespace: Namespace, key: &'static str, status: ArtifactStatus) -> AuditEntry {
        AuditEntry {
            namespace,
            key,
            status,
        }
    }

    #[test]
    fn check_output_groups_by_namespace() {
        let audit = Audit {
            entries: vec![
                entry(Namespace::Pages, "home", ArtifactStatus::Resolved),
                entry(Namespace::Pages, "about", ArtifactStatus::Missing),
                entry(Namespace::Components, "footer", ArtifactStatus::Resolved),
            ],
            unregistered: vec![],
        };

        let lines = format_check_output(&audit);

        assert_eq!(
            lines,
            vec![
                "Pages",
                "001 home",
                "    Source: pages/home.json",
                "002 about",
                "    Default: no artifact",
                "",
                "Components",
                "001 footer",
                "    Source: components/footer.json",
                "",
                "2 of 3 artifacts resolved, 1 using built-in defaults",
            ]
        );
    }

    #[test]
    fn check_output_lists_unregistered() {
        let audit = Audit {
            entries: vec![entry(
                Namespace::CaseStudies,
                "travel-search",
                ArtifactStatus::Invalid("expected value at line 1 column 1".into()),
            )],
            unregistered: vec![PathBuf::from("drafts/home.json")],
        };

        let lines = format_check_output(&audit);

        assert_eq!(lines[0], "Case studies");
        assert_eq!(
            lines[2],
            "    Default: invalid artifact (expected value at line 1 column 1)"
        );
        assert!(lines.contains(&"Unregistered".to_string()));
        assert!(lines.contains(&"    drafts/home.json".to_string()));
        assert_eq!(
            lines.last().unwrap(),
            "0 of 1 artifacts resolved, 1 using built-in defaults"
        );
    }

    // =========================================================================
    // export
    // =========================================================================

    #[test]
    fn export_output_lists_routes_and_total() {
        let pages = vec![
            ExportedPage {
                route: "/".into(),
                file: PathBuf::from("index.html"),
            },
            ExportedPage {
                route: "/about".into(),
                file: PathBuf::from("about/index.html"),
            },
        ];

        let lines = format_export_output(&pages);

        assert_eq!(
            lines,
            vec![
                "/ → index.html",
                "/about → about/index.html",
                "",
                "Exported 2 files",
            ]
        );
    }
}
