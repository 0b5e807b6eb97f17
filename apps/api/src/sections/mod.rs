//! Section renderers and the rendering registry.
//!
//! Each section is a pure function from `(&Profile, &FilterConfig)` to a
//! [`Fragment`]; an empty fragment means the section suppressed itself.
//! The registry maps stable section ids to renderers so the assembly loop
//! can follow an arbitrary `sections_order` without knowing any section's
//! internals.

pub mod activities;
pub mod certifications;
pub mod courses;
pub mod education;
pub mod experience;
pub mod honors;
pub mod markup;
pub mod projects;
pub mod recommendations;
pub mod skills;
pub mod volunteering;

use crate::filters::FilterConfig;
use crate::models::profile::Profile;

/// One rendered section: its HTML plus before/after entry counts for the
/// assembly report.
#[derive(Debug, Clone, Default)]
pub struct Fragment {
    pub html: String,
    /// Entries present in the source data before any filtering.
    pub total_entries: usize,
    /// Entries that survived filtering and were rendered.
    pub kept_entries: usize,
}

impl Fragment {
    pub fn new(html: String, total_entries: usize, kept_entries: usize) -> Self {
        Self {
            html,
            total_entries,
            kept_entries,
        }
    }

    /// A suppressed section: nothing rendered, nothing kept.
    pub fn empty(total_entries: usize) -> Self {
        Self {
            html: String::new(),
            total_entries,
            kept_entries: 0,
        }
    }

    pub fn is_empty(&self) -> bool {
        self.html.is_empty()
    }
}

/// A registered section: stable id, display label, renderer.
pub struct SectionSpec {
    pub id: &'static str,
    pub label: &'static str,
    pub render: fn(&Profile, &FilterConfig) -> Fragment,
}

/// Rendering order used when the profile carries no explicit order.
pub const DEFAULT_SECTION_ORDER: [&str; 10] = [
    "experience",
    "projects",
    "skills",
    "education",
    "certifications",
    "courses",
    "volunteering",
    "honors-awards",
    "activities",
    "recommendations",
];

const REGISTRY: [SectionSpec; 10] = [
    SectionSpec { id: "experience", label: "Experience", render: experience::render },
    SectionSpec { id: "projects", label: "Projects", render: projects::render },
    SectionSpec { id: "skills", label: "Special Skills", render: skills::render },
    SectionSpec { id: "education", label: "Education", render: education::render },
    SectionSpec { id: "certifications", label: "Certifications", render: certifications::render },
    SectionSpec { id: "courses", label: "Relevant Coursework", render: courses::render },
    SectionSpec { id: "volunteering", label: "Volunteering", render: volunteering::render },
    SectionSpec { id: "honors-awards", label: "Honors & Awards", render: honors::render },
    SectionSpec { id: "activities", label: "Activities & Misc.", render: activities::render },
    SectionSpec {
        id: "recommendations",
        label: "Recommendations",
        render: recommendations::render,
    },
];

/// Looks up a section by id. Unknown ids (e.g. typos in a preset's
/// `sections_order`) return `None` and are skipped by the assembler.
pub fn section_by_id(id: &str) -> Option<&'static SectionSpec> {
    REGISTRY.iter().find(|spec| spec.id == id)
}
