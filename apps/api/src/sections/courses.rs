//! Relevant coursework — sourced from the education section's course list,
//! shown only when the configured section priority admits it.

use crate::filters::config::section_visible;
use crate::filters::FilterConfig;
use crate::models::profile::{CourseEntry, Profile};
use crate::sections::markup::section_wrapper;
use crate::sections::Fragment;

pub fn render(profile: &Profile, config: &FilterConfig) -> Fragment {
    let total = profile.sections.education.courses.len();
    let priority = profile.resume_config.section_priority("courses");
    if !section_visible(config.density, priority) {
        return Fragment::empty(total);
    }

    let courses: Vec<&CourseEntry> = profile
        .sections
        .education
        .courses
        .iter()
        .filter(|c| c.name.as_deref().is_some_and(|n| !n.trim().is_empty()))
        .collect();
    if courses.is_empty() {
        return Fragment::empty(total);
    }

    let items = courses
        .iter()
        .map(|course| {
            let name = course.name.as_deref().unwrap_or("");
            match course.institution.as_deref() {
                Some(institution) if !institution.is_empty() => {
                    format!("<p>{name} — {institution}</p>")
                }
                _ => format!("<p>{name}</p>"),
            }
        })
        .collect::<Vec<_>>()
        .join("\n    ");

    let content = format!("<div class=\"courses-list\">\n    {items}\n    </div>");
    Fragment::new(
        section_wrapper("courses", "Relevant Coursework", &content),
        total,
        courses.len(),
    )
}
