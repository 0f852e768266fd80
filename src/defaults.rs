//! Built-in content, compiled into the binary.
//!
//! These records are what the site renders when a generated artifact is
//! missing or unreadable. Callers combine them with the resolver as
//! `store.resolve_page_content(key).unwrap_or_else(T::builtin)`; see
//! [`crate::content::ContentStore::page_or_default`].

use crate::types::{
    AboutContent, CaseStudiesContent, CaseStudy, Experience, FooterContent, Hero, HomeContent,
    Link, Metric, NavigationContent, ResumeContent, Section, SkillGroup,
};

/// A record type with an always-available in-source default.
pub trait Builtin: Sized {
    fn builtin() -> Self;
}

fn s(text: &str) -> String {
    text.to_string()
}

fn link(label: &str, href: &str) -> Link {
    Link {
        label: s(label),
        href: s(href),
    }
}

fn metric(value: &str, label: &str) -> Metric {
    Metric {
        value: s(value),
        label: s(label),
    }
}

fn section(heading: &str, body: &str) -> Section {
    Section {
        heading: s(heading),
        body: s(body),
    }
}

fn strings(items: &[&str]) -> Vec<String> {
    items.iter().map(|i| s(i)).collect()
}

impl Builtin for HomeContent {
    fn builtin() -> Self {
        Self {
            hero: Hero {
                eyebrow: s("Product designer"),
                title: s("I design products people come back to."),
                subtitle: s(
                    "Ten years of shaping commerce, mobility and fintech experiences from research to release.",
                ),
                cta: Some(link("See case studies", "/case-studies")),
            },
            metrics: vec![
                metric("10+", "years in product design"),
                metric("40M", "monthly users reached"),
                metric("8", "shipped case studies"),
            ],
            featured: strings(&[
                "zalando-contextual",
                "fintech-onboarding",
                "mobility-driver-app",
            ]),
            clients: strings(&["Zalando", "N26", "FREE NOW", "Doctolib", "Booking"]),
        }
    }
}

impl Builtin for AboutContent {
    fn builtin() -> Self {
        Self {
            hero: Hero {
                eyebrow: s("About"),
                title: s("Designer, facilitator, systems thinker."),
                subtitle: String::new(),
                cta: None,
            },
            bio: s(
                "I lead end-to-end product design: framing the problem with research, \
                 shaping the solution with cross-functional teams, and **measuring** \
                 whether it worked.",
            ),
            principles: vec![
                section("Evidence over opinion", "Decisions start from what users do."),
                section("Systems, not screens", "Every component should earn its place."),
            ],
            skills: vec![
                SkillGroup {
                    name: s("Design"),
                    items: strings(&["Interaction design", "Prototyping", "Design systems"]),
                },
                SkillGroup {
                    name: s("Research"),
                    items: strings(&["Interviews", "Usability testing", "A/B analysis"]),
                },
            ],
        }
    }
}

impl Builtin for CaseStudiesContent {
    fn builtin() -> Self {
        Self {
            hero: Hero {
                eyebrow: s("Work"),
                title: s("Case studies"),
                subtitle: s("Selected projects, with the numbers behind them."),
                cta: None,
            },
            empty_message: s("Case studies are being updated. Check back soon."),
        }
    }
}

impl Builtin for ResumeContent {
    fn builtin() -> Self {
        Self {
            name: s("Alex Morgan"),
            headline: s("Senior Product Designer"),
            summary: s("Product designer focused on commerce and consumer fintech."),
            experience: vec![
                Experience {
                    company: s("Zalando"),
                    role: s("Senior Product Designer"),
                    period: s("2020 – present"),
                    location: s("Berlin"),
                    highlights: strings(&[
                        "Led contextual shopping experiences across web and app",
                        "Co-owned the size advice roadmap",
                    ]),
                },
                Experience {
                    company: s("N26"),
                    role: s("Product Designer"),
                    period: s("2017 – 2020"),
                    location: s("Berlin"),
                    highlights: strings(&["Redesigned onboarding and identity verification"]),
                },
            ],
            education: vec![Experience {
                company: s("HfG Schwäbisch Gmünd"),
                role: s("B.A. Interaction Design"),
                period: s("2011 – 2015"),
                location: String::new(),
                highlights: Vec::new(),
            }],
            skills: vec![SkillGroup {
                name: s("Tools"),
                items: strings(&["Figma", "Protopie", "Amplitude"]),
            }],
            download: None,
        }
    }
}

impl Builtin for NavigationContent {
    fn builtin() -> Self {
        Self {
            brand: s("Alex Morgan"),
            links: vec![
                link("Work", "/case-studies"),
                link("About", "/about"),
                link("Resume", "/resume"),
            ],
            cta: Some(link("Get in touch", "/contact")),
        }
    }
}

impl Builtin for FooterContent {
    fn builtin() -> Self {
        Self {
            headline: s("Let's build something together."),
            email: s("hello@example.com"),
            socials: vec![
                link("LinkedIn", "https://www.linkedin.com/"),
                link("Dribbble", "https://dribbble.com/"),
            ],
            copyright: s("© Alex Morgan"),
        }
    }
}

/// Built-in record for a registered case study, `None` for unknown keys.
pub fn builtin_case_study(key: &str) -> Option<CaseStudy> {
    let study = match key {
        "zalando-contextual" => study(
            "Zalando",
            "2023",
            "Contextual shopping",
            "Bringing outfits into the product page",
            "Surfacing styling context where customers decide, not three taps away.",
            &[("+6%", "add-to-cart rate"), ("-12%", "returns on styled items")],
            &["Research", "Interaction design", "Experimentation"],
            "zalando",
        ),
        "zalando-sizing" => study(
            "Zalando",
            "2022",
            "Size advice",
            "Helping customers pick the right size the first time",
            "Turning return data into a size recommendation customers trust.",
            &[("-4%", "size-related returns")],
            &["Data-informed design", "Prototyping"],
            "zalando",
        ),
        "zalando-design-system" => study(
            "Zalando",
            "2021",
            "Design system foundations",
            "One component library for five product teams",
            "Consolidating divergent UI into a shared, documented system.",
            &[("5", "teams onboarded"), ("30%", "faster UI delivery")],
            &["Design systems", "Facilitation"],
            "zalando",
        ),
        "fintech-onboarding" => study(
            "N26",
            "2019",
            "Account opening",
            "From sign-up to first transaction in minutes",
            "Rebuilding identity verification around the moments people drop off.",
            &[("+18%", "completed sign-ups")],
            &["Journey mapping", "Usability testing"],
            "fintech",
        ),
        "mobility-driver-app" => study(
            "FREE NOW",
            "2018",
            "Driver app",
            "Fewer taps between rides",
            "Reducing cognitive load for drivers working twelve-hour shifts.",
            &[("-22%", "time to accept a ride")],
            &["Field research", "Interaction design"],
            "mobility",
        ),
        "health-booking" => study(
            "Doctolib",
            "2017",
            "Appointment booking",
            "Finding a doctor without the phone call",
            "Making availability legible across practitioners and locations.",
            &[("+9%", "online bookings")],
            &["Information architecture", "Prototyping"],
            "health",
        ),
        "travel-search" => study(
            "Booking",
            "2016",
            "Search results",
            "Comparing stays at a glance",
            "Reshaping the result card around the criteria guests actually use.",
            &[("+3%", "click-through rate")],
            &["Experimentation", "Visual design"],
            "travel",
        ),
        "ai-assistant" => study(
            "Personal project",
            "2024",
            "Shopping assistant",
            "Conversational product discovery",
            "Exploring where a conversational assistant helps, and where it gets in the way.",
            &[("12", "concept tests")],
            &["Conversation design", "Prototyping"],
            "neutral",
        ),
        _ => return None,
    };
    Some(study)
}

#[allow(clippy::too_many_arguments)]
fn study(
    company: &str,
    year: &str,
    title: &str,
    subtitle: &str,
    description: &str,
    metrics: &[(&str, &str)],
    skills: &[&str],
    brand_color: &str,
) -> CaseStudy {
    CaseStudy {
        company: s(company),
        year: s(year),
        title: s(title),
        subtitle: s(subtitle),
        description: s(description),
        role: s("Lead product designer"),
        metrics: metrics.iter().map(|(v, l)| metric(v, l)).collect(),
        skills: strings(skills),
        brand_color: s(brand_color),
        sections: vec![
            section("Context", description),
            section("Approach", "Research, framing, prototyping and iteration with the team."),
        ],
        outcome: s("Shipped to all markets after a successful experiment."),
    }
}
