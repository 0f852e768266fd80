//! Content record shapes.
//!
//! Each page and component has an explicit record type. The JSON artifacts
//! and the built-in defaults in [`crate::defaults`] both have to fit these
//! shapes, so drift between the two is a deserialization failure rather than
//! a silently missing field on the rendered page.
//!
//! Artifacts use camelCase keys. Collections default to empty; scalar text
//! fields that a renderer cannot do without are required.

use serde::{Deserialize, Serialize};

/// A labelled hyperlink.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Link {
    pub label: String,
    pub href: String,
}

/// Headline block at the top of a page.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Hero {
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub eyebrow: String,
    pub title: String,
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub subtitle: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub cta: Option<Link>,
}

/// A single headline number, e.g. `+12%` / `conversion`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Metric {
    pub value: String,
    pub label: String,
}

/// A named list of skills or tools.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SkillGroup {
    pub name: String,
    #[serde(default)]
    pub items: Vec<String>,
}

/// Titled markdown block inside an article.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Section {
    pub heading: String,
    /// Markdown body.
    pub body: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct HomeContent {
    pub hero: Hero,
    #[serde(default)]
    pub metrics: Vec<Metric>,
    /// Case-study keys to feature, in order. Unknown keys are dropped.
    #[serde(default)]
    pub featured: Vec<String>,
    /// Client names shown in the logo strip.
    #[serde(default)]
    pub clients: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AboutContent {
    pub hero: Hero,
    /// Markdown biography.
    pub bio: String,
    #[serde(default)]
    pub principles: Vec<Section>,
    #[serde(default)]
    pub skills: Vec<SkillGroup>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CaseStudiesContent {
    pub hero: Hero,
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub empty_message: String,
}

/// One position on the resume.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Experience {
    pub company: String,
    pub role: String,
    pub period: String,
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub location: String,
    #[serde(default)]
    pub highlights: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ResumeContent {
    pub name: String,
    pub headline: String,
    #[serde(default)]
    pub summary: String,
    #[serde(default)]
    pub experience: Vec<Experience>,
    #[serde(default)]
    pub education: Vec<Experience>,
    #[serde(default)]
    pub skills: Vec<SkillGroup>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub download: Option<Link>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NavigationContent {
    pub brand: String,
    #[serde(default)]
    pub links: Vec<Link>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub cta: Option<Link>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FooterContent {
    pub headline: String,
    pub email: String,
    #[serde(default)]
    pub socials: Vec<Link>,
    #[serde(default)]
    pub copyright: String,
}

/// Full case-study record, as stored under `case-studies/<key>.json`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CaseStudy {
    pub company: String,
    pub year: String,
    pub title: String,
    #[serde(default)]
    pub subtitle: String,
    pub description: String,
    #[serde(default)]
    pub role: String,
    #[serde(default)]
    pub metrics: Vec<Metric>,
    #[serde(default)]
    pub skills: Vec<String>,
    /// Key into the `[brands]` palette of the site config.
    #[serde(default)]
    pub brand_color: String,
    #[serde(default)]
    pub sections: Vec<Section>,
    #[serde(default)]
    pub outcome: String,
}

/// The subset of a case study shown in list and grid views.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CaseStudyCard {
    pub company: String,
    pub year: String,
    pub title: String,
    pub subtitle: String,
    pub description: String,
    pub metrics: Vec<Metric>,
    pub skills: Vec<String>,
    pub href: String,
    pub brand_color: String,
}

impl CaseStudy {
    /// Project this record into a list card linking to `/case-study/<key>`.
    ///
    /// Returns `None` when the record has no usable title or company; such a
    /// card would render as an empty tile.
    pub fn card(&self, key: &str) -> Option<CaseStudyCard> {
        if self.title.trim().is_empty() || self.company.trim().is_empty() {
            return None;
        }
        Some(CaseStudyCard {
            company: self.company.clone(),
            year: self.year.clone(),
            title: self.title.clone(),
            subtitle: self.subtitle.clone(),
            description: self.description.clone(),
            metrics: self.metrics.clone(),
            skills: self.skills.clone(),
            href: format!("/case-study/{key}"),
            brand_color: self.brand_color.clone(),
        })
    }
}
