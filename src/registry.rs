//! The fixed set of content keys the site knows about.
//!
//! Every artifact the resolver can load is addressed by one of these keys.
//! Strings coming from the outside (URL slugs, CLI input) are checked against
//! this registry before they ever touch the filesystem, so a request for
//! `../../etc/passwd` is simply an unknown key.

use std::fmt;

/// Artifact namespace, one directory per namespace under the content root.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Namespace {
    Pages,
    Components,
    CaseStudies,
}

impl Namespace {
    pub const ALL: [Namespace; 3] = [Self::Pages, Self::Components, Self::CaseStudies];

    /// Directory name under the content root.
    pub fn dir(self) -> &'static str {
        match self {
            Self::Pages => "pages",
            Self::Components => "components",
            Self::CaseStudies => "case-studies",
        }
    }

    /// Keys registered in this namespace, in display order.
    pub fn keys(self) -> Vec<&'static str> {
        match self {
            Self::Pages => PageKey::ALL.iter().map(|k| k.as_str()).collect(),
            Self::Components => ComponentKey::ALL.iter().map(|k| k.as_str()).collect(),
            Self::CaseStudies => CASE_STUDY_KEYS.to_vec(),
        }
    }

    /// Look up `key` in this namespace, returning the canonical static key.
    pub fn lookup(self, key: &str) -> Option<&'static str> {
        match self {
            Self::Pages => PageKey::parse(key).map(PageKey::as_str),
            Self::Components => ComponentKey::parse(key).map(ComponentKey::as_str),
            Self::CaseStudies => case_study_key(key),
        }
    }
}

impl fmt::Display for Namespace {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.dir())
    }
}

/// Top-level pages backed by a content record.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PageKey {
    Home,
    About,
    CaseStudies,
    Resume,
}

impl PageKey {
    pub const ALL: [PageKey; 4] = [Self::Home, Self::About, Self::CaseStudies, Self::Resume];

    pub fn as_str(self) -> &'static str {
        match self {
            Self::Home => "home",
            Self::About => "about",
            Self::CaseStudies => "case-studies",
            Self::Resume => "resume",
        }
    }

    pub fn parse(key: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|k| k.as_str() == key)
    }
}

/// Shared components backed by a content record.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ComponentKey {
    Navigation,
    Footer,
}

impl ComponentKey {
    pub const ALL: [ComponentKey; 2] = [Self::Navigation, Self::Footer];

    pub fn as_str(self) -> &'static str {
        match self {
            Self::Navigation => "navigation",
            Self::Footer => "footer",
        }
    }

    pub fn parse(key: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|k| k.as_str() == key)
    }
}

/// Case studies, in the order they are listed on the site.
pub const CASE_STUDY_KEYS: [&str; 8] = [
    "zalando-contextual",
    "zalando-sizing",
    "zalando-design-system",
    "fintech-onboarding",
    "mobility-driver-app",
    "health-booking",
    "travel-search",
    "ai-assistant",
];

/// Canonical static key for a registered case study.
pub fn case_study_key(key: &str) -> Option<&'static str> {
    CASE_STUDY_KEYS.iter().copied().find(|k| *k == key)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn page_keys_roundtrip() {
        for key in PageKey::ALL {
            assert_eq!(PageKey::parse(key.as_str()), Some(key));
        }
    }

    #[test]
    fn unknown_page_key_is_none() {
        assert_eq!(PageKey::parse("contact"), None);
        assert_eq!(PageKey::parse(""), None);
        assert_eq!(PageKey::parse("Home"), None);
    }

    #[test]
    fn component_lookup() {
        assert_eq!(Namespace::Components.lookup("footer"), Some("footer"));
        assert_eq!(Namespace::Components.lookup("header"), None);
    }

    #[test]
    fn case_study_registry_has_eight_unique_keys() {
        let mut keys = CASE_STUDY_KEYS.to_vec();
        keys.sort();
        keys.dedup();
        assert_eq!(keys.len(), 8);
    }

    #[test]
    fn traversal_is_not_a_key() {
        assert_eq!(Namespace::CaseStudies.lookup("../pages/home"), None);
        assert_eq!(Namespace::Pages.lookup("../../etc/passwd"), None);
    }

    #[test]
    fn namespace_keys_follow_registry_order() {
        assert_eq!(
            Namespace::Pages.keys(),
            vec!["home", "about", "case-studies", "resume"]
        );
        assert_eq!(Namespace::CaseStudies.keys()[0], "zalando-contextual");
    }
}
