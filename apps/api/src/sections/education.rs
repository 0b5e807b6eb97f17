//! Education section — institutions with degree lines, free-form
//! descriptions, and the "Activities and societies" string parsed into
//! bullets.

use crate::filters::FilterConfig;
use crate::models::profile::{EducationEntry, Profile};
use crate::sections::markup::{group_header, render_bullets, section_wrapper};
use crate::sections::Fragment;

const ACTIVITIES_PREFIX: &str = "Activities and societies:";

pub fn render(profile: &Profile, _config: &FilterConfig) -> Fragment {
    let entries = &profile.sections.education.education;
    if entries.is_empty() {
        return Fragment::empty(0);
    }

    let content = entries
        .iter()
        .map(render_entry)
        .collect::<Vec<_>>()
        .join("\n");

    Fragment::new(
        section_wrapper("education", "Education", &content),
        entries.len(),
        entries.len(),
    )
}

fn render_entry(entry: &EducationEntry) -> String {
    let mut parts = Vec::new();

    if let Some(institution) = entry.institution.as_deref() {
        parts.push(group_header(institution));
    }

    let degree_line = match (entry.degree.as_deref(), entry.field.as_deref()) {
        (Some(degree), Some(field)) => format!("{degree}, {field}"),
        (Some(degree), None) => degree.to_string(),
        (None, Some(field)) => field.to_string(),
        (None, None) => String::new(),
    };
    if !degree_line.is_empty() || entry.dates.is_some() {
        let dates = entry.dates.as_deref().unwrap_or("");
        parts.push(format!(
            "<div class=\"job-title-header\">\n  <h4>{degree_line}</h4>\n  \
             <p class=\"date-range\">{dates}</p>\n</div>"
        ));
    }

    if let Some(description) = entry.description.as_deref() {
        if !description.is_empty() {
            parts.push(format!("<p>{description}</p>"));
        }
    }

    let activities = parse_activities(entry.activities.as_deref());
    let list = render_bullets(&activities);
    if !list.is_empty() {
        parts.push(list);
    }

    parts.join("\n")
}

/// Splits a raw `"Activities and societies: a, b, c"` string into items;
/// the prefix is optional and matched case-sensitively as exported.
fn parse_activities(raw: Option<&str>) -> Vec<String> {
    let Some(raw) = raw else {
        return Vec::new();
    };
    let body = raw.strip_prefix(ACTIVITIES_PREFIX).unwrap_or(raw);
    body.split(',')
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .map(str::to_string)
        .collect()
}
