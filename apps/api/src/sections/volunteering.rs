//! Volunteering — priority-gated, grouped by organization, with optional
//! category filtering from presets.

use crate::filters::config::section_visible;
use crate::filters::primitives::{
    filter_by_indices, filter_by_text_match, filter_by_timeframe, filter_entry_bullets,
};
use crate::filters::FilterConfig;
use crate::models::preset::SectionFilters;
use crate::models::profile::{Profile, VolunteeringEntry};
use crate::sections::markup::{group_by_key, group_header, render_bullets, section_wrapper};
use crate::sections::Fragment;

pub fn render(profile: &Profile, config: &FilterConfig) -> Fragment {
    let section = &profile.sections.volunteering;
    let total = section.entries.len();

    let priority = profile.resume_config.section_priority("volunteering");
    if !section_visible(config.density, priority) {
        return Fragment::empty(total);
    }

    let filters = section.preset_filters.clone().unwrap_or_default();

    let entries = select_entries(&section.entries, &filters, config);

    let surviving: Vec<(VolunteeringEntry, Vec<String>)> =
        filter_entry_bullets(entries, config.density, filters.bullet_priority_threshold);

    if surviving.is_empty() {
        return Fragment::empty(total);
    }

    let groups = group_by_key(&surviving, |(entry, _)| entry.organization.as_deref());
    let content = groups
        .iter()
        .map(|(organization, members)| {
            let items = members
                .iter()
                .map(|(entry, bullets)| render_entry(entry, bullets))
                .collect::<Vec<_>>()
                .join("\n");
            let header = group_header(organization);
            if header.is_empty() {
                items
            } else {
                format!("{header}\n{items}")
            }
        })
        .collect::<Vec<_>>()
        .join("\n");

    Fragment::new(
        section_wrapper("volunteering", "Volunteering", &content),
        total,
        surviving.len(),
    )
}

fn select_entries(
    entries: &[VolunteeringEntry],
    filters: &SectionFilters,
    config: &FilterConfig,
) -> Vec<VolunteeringEntry> {
    if let Some(indices) = &filters.selected_indices {
        return filter_by_indices(entries, indices);
    }

    let mut kept = filter_by_timeframe(entries, config);
    if let Some(category) = &filters.category_filter {
        kept = filter_by_text_match(&kept, |e| e.category.as_deref(), category);
    }
    if let Some(max) = filters.max_entries {
        kept.truncate(max);
    }
    kept
}

fn render_entry(entry: &VolunteeringEntry, bullets: &[String]) -> String {
    let role = entry.role.as_deref().unwrap_or("");
    let duration = entry.duration.as_deref().unwrap_or("");
    let mut parts = vec![format!(
        "<div class=\"job-title-header\">\n  <h4>{role}</h4>\n  \
         <p class=\"date-range\">{duration}</p>\n</div>"
    )];

    if let Some(description) = entry.description.as_deref() {
        if !description.is_empty() {
            parts.push(format!("<p>{description}</p>"));
        }
    }

    let list = render_bullets(bullets);
    if !list.is_empty() {
        parts.push(list);
    }

    if let Some(link) = entry.link.as_deref() {
        if !link.is_empty() {
            let title = entry.link_title.as_deref().unwrap_or(link);
            parts.push(format!("<p><a href=\"{link}\">{title}</a></p>"));
        }
    }

    parts.join("\n")
}
