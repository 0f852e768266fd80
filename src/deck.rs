//! Slide deck for the presentation routes.
//!
//! A presentation is a fixed sequence of slide kinds. The sequence is static;
//! the words and numbers on each slide come from the resolved case study.
//! Section slides repeat once per article section, and slides whose source
//! data is empty are dropped so the deck never shows a blank page.

use crate::types::{CaseStudy, Metric, Section};

/// Slide kinds in presentation order.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SlideKind {
    Cover,
    Context,
    Metrics,
    Section,
    Outcome,
    Closing,
}

pub const SEQUENCE: [SlideKind; 6] = [
    SlideKind::Cover,
    SlideKind::Context,
    SlideKind::Metrics,
    SlideKind::Section,
    SlideKind::Outcome,
    SlideKind::Closing,
];

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Slide {
    Cover {
        company: String,
        title: String,
        subtitle: String,
        year: String,
    },
    Context {
        role: String,
        description: String,
        skills: Vec<String>,
    },
    Metrics(Vec<Metric>),
    Section(Section),
    Outcome(String),
    Closing {
        title: String,
    },
}

impl Slide {
    pub fn kind(&self) -> SlideKind {
        match self {
            Self::Cover { .. } => SlideKind::Cover,
            Self::Context { .. } => SlideKind::Context,
            Self::Metrics(_) => SlideKind::Metrics,
            Self::Section(_) => SlideKind::Section,
            Self::Outcome(_) => SlideKind::Outcome,
            Self::Closing { .. } => SlideKind::Closing,
        }
    }
}

/// Build the slides for a case study.
pub fn build(study: &CaseStudy) -> Vec<Slide> {
    let mut slides = Vec::new();
    for kind in SEQUENCE {
        match kind {
            SlideKind::Cover => slides.push(Slide::Cover {
                company: study.company.clone(),
                title: study.title.clone(),
                subtitle: study.subtitle.clone(),
                year: study.year.clone(),
            }),
            SlideKind::Context => slides.push(Slide::Context {
                role: study.role.clone(),
                description: study.description.clone(),
                skills: study.skills.clone(),
            }),
            SlideKind::Metrics if !study.metrics.is_empty() => {
                slides.push(Slide::Metrics(study.metrics.clone()))
            }
            SlideKind::Section => slides.extend(study.sections.iter().cloned().map(Slide::Section)),
            SlideKind::Outcome if !study.outcome.trim().is_empty() => {
                slides.push(Slide::Outcome(study.outcome.clone()))
            }
            SlideKind::Closing => slides.push(Slide::Closing {
                title: study.title.clone(),
            }),
            _ => {}
        }
    }
    slides
}
