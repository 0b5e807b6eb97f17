//! Activities & misc. — organizational activities with bullet filtering,
//! plus a personal-interests line that only appears near full density.

use crate::filters::config::PERSONAL_INTERESTS_MIN_DENSITY;
use crate::filters::primitives::{filter_by_indices, filter_entry_bullets};
use crate::filters::FilterConfig;
use crate::models::preset::SectionFilters;
use crate::models::profile::{ActivityEntry, Profile};
use crate::sections::markup::{render_bullets, section_wrapper};
use crate::sections::Fragment;

pub fn render(profile: &Profile, config: &FilterConfig) -> Fragment {
    let section = &profile.sections.activities;
    let total = section.activities.len();
    let filters = section.preset_filters.clone().unwrap_or_default();

    let entries = select_entries(&section.activities, &filters);

    let surviving: Vec<(ActivityEntry, Vec<String>)> =
        filter_entry_bullets(entries, config.density, filters.bullet_priority_threshold);

    let mut parts: Vec<String> = surviving
        .iter()
        .map(|(entry, bullets)| render_entry(entry, bullets))
        .collect();

    if config.density >= PERSONAL_INTERESTS_MIN_DENSITY && !section.personal_interests.is_empty() {
        parts.push(format!(
            "<p><strong>Personal Interests:</strong> {}</p>",
            section.personal_interests.join(", ")
        ));
    }

    Fragment::new(
        section_wrapper("activities", "Activities & Misc.", &parts.join("\n")),
        total,
        surviving.len(),
    )
}

fn select_entries(entries: &[ActivityEntry], filters: &SectionFilters) -> Vec<ActivityEntry> {
    let mut kept = match &filters.selected_indices {
        Some(indices) => filter_by_indices(entries, indices),
        None => entries.to_vec(),
    };
    if filters.selected_indices.is_none() {
        if let Some(max) = filters.max_entries {
            kept.truncate(max);
        }
    }
    kept
}

fn render_entry(entry: &ActivityEntry, bullets: &[String]) -> String {
    let role = entry.role.as_deref().unwrap_or("");
    let organization = entry.organization.as_deref().unwrap_or("");
    let heading = match (role.is_empty(), organization.is_empty()) {
        (false, false) => format!("{role} — {organization}"),
        (false, true) => role.to_string(),
        (true, false) => organization.to_string(),
        (true, true) => String::new(),
    };
    let dates = entry.dates.as_deref().unwrap_or("");
    let header = format!(
        "<div class=\"job-title-header\">\n  <h4>{heading}</h4>\n  \
         <p class=\"date-range\">{dates}</p>\n</div>"
    );
    let list = render_bullets(bullets);
    if list.is_empty() {
        header
    } else {
        format!("{header}\n{list}")
    }
}
