//! Route-dependent page chrome.
//!
//! Whether a page gets the global navigation, the global footer and the
//! `<main>` landmark depends only on its path. Every renderer asks this
//! module; nothing else in the crate compares path prefixes.
//!
//! | Route family   | Paths                         | Nav | Footer | `<main>` |
//! |----------------|-------------------------------|-----|--------|----------|
//! | Presentation   | `/invite/casestudies`, `/invite/casestudies/...` | no | no | no |
//! | About          | `/about`, `/about/...`        | yes | no     | yes      |
//! | Default        | everything else               | yes | yes    | yes      |
//!
//! Prefixes match whole segments: `/about-me` is not under `/about`.
//! Empty or otherwise odd paths fall into the default family, so a bad path
//! never hides navigation.

/// Root of the slide-deck presentation routes.
pub const PRESENTATION_PREFIX: &str = "/invite/casestudies";

/// The about page.
pub const ABOUT_PATH: &str = "/about";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RouteFamily {
    Presentation,
    About,
    Default,
}

impl RouteFamily {
    pub fn classify(path: &str) -> Self {
        if is_under(path, PRESENTATION_PREFIX) {
            Self::Presentation
        } else if is_under(path, ABOUT_PATH) {
            Self::About
        } else {
            Self::Default
        }
    }
}

/// Which pieces of global chrome wrap a page.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Chrome {
    pub navigation: bool,
    pub footer: bool,
    pub main: bool,
}

impl Chrome {
    pub fn for_family(family: RouteFamily) -> Self {
        match family {
            RouteFamily::Presentation => Self {
                navigation: false,
                footer: false,
                main: false,
            },
            RouteFamily::About => Self {
                navigation: true,
                footer: false,
                main: true,
            },
            RouteFamily::Default => Self {
                navigation: true,
                footer: true,
                main: true,
            },
        }
    }

    pub fn for_path(path: &str) -> Self {
        Self::for_family(RouteFamily::classify(path))
    }
}

pub fn should_show_navigation(path: &str) -> bool {
    Chrome::for_path(path).navigation
}

pub fn should_show_footer(path: &str) -> bool {
    Chrome::for_path(path).footer
}

pub fn should_wrap_in_main(path: &str) -> bool {
    Chrome::for_path(path).main
}

/// `true` when `path` is `prefix` itself or lies below it.
pub fn is_under(path: &str, prefix: &str) -> bool {
    match path.strip_prefix(prefix) {
        Some(rest) => rest.is_empty() || rest.starts_with('/'),
        None => false,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn about_hides_footer_only() {
        assert!(!should_show_footer("/about"));
        assert!(should_show_navigation("/about"));
        assert!(should_wrap_in_main("/about"));
    }

    #[test]
    fn about_prefix_respects_segment_boundary() {
        assert!(should_show_footer("/about-me"));
        assert!(should_show_footer("/aboutness"));
        assert!(!should_show_footer("/about/"));
    }

    #[test]
    fn presentation_hides_everything() {
        let path = "/invite/casestudies/zalando/deck";
        assert!(!should_show_navigation(path));
        assert!(!should_show_footer(path));
        assert!(!should_wrap_in_main(path));
        assert_eq!(RouteFamily::classify(PRESENTATION_PREFIX), RouteFamily::Presentation);
    }

    #[test]
    fn presentation_prefix_respects_segment_boundary() {
        assert_eq!(
            RouteFamily::classify("/invite/casestudies-old"),
            RouteFamily::Default
        );
        assert_eq!(RouteFamily::classify("/invite"), RouteFamily::Default);
    }

    #[test]
    fn root_is_default() {
        assert!(should_wrap_in_main("/"));
        assert!(should_show_navigation("/"));
        assert!(should_show_footer("/"));
    }

    #[test]
    fn malformed_paths_fail_open() {
        for path in ["", "about", "invite/casestudies/x", "//", "?q=1"] {
            assert_eq!(
                Chrome::for_path(path),
                Chrome::for_family(RouteFamily::Default),
                "{path:?}"
            );
        }
        assert!(should_show_navigation(""));
    }

    #[test]
    fn default_routes() {
        for path in ["/case-studies", "/case-study/zalando-contextual", "/resume", "/contact"] {
            assert_eq!(RouteFamily::classify(path), RouteFamily::Default, "{path}");
        }
    }

    #[test]
    fn is_under_matches_whole_segments() {
        assert!(is_under("/a/b", "/a"));
        assert!(is_under("/a", "/a"));
        assert!(!is_under("/ab", "/a"));
        assert!(!is_under("/b/a", "/a"));
    }
}
