//! Experience section — grouped by company, bullet-filtered per entry.

use crate::filters::primitives::{
    filter_by_indices, filter_by_timeframe, filter_entry_bullets, filter_management_roles,
};
use crate::filters::FilterConfig;
use crate::models::preset::SectionFilters;
use crate::models::profile::{ExperienceEntry, Profile};
use crate::sections::markup::{group_by_key, group_header, render_bullets, section_wrapper};
use crate::sections::Fragment;

pub const MANAGEMENT_ROLES_ONLY: &str = "management_roles_only";

pub fn render(profile: &Profile, config: &FilterConfig) -> Fragment {
    let section = &profile.sections.experience;
    let total = section.entries.len();
    let filters = section.preset_filters.clone().unwrap_or_default();

    let entries = select_entries(&section.entries, &filters, config);

    let surviving: Vec<(ExperienceEntry, Vec<String>)> =
        filter_entry_bullets(entries, config.density, filters.bullet_priority_threshold);

    if surviving.is_empty() {
        return Fragment::empty(total);
    }

    let groups = group_by_key(&surviving, |(entry, _)| entry.company.as_deref());
    let content = groups
        .iter()
        .map(|(company, members)| {
            let items = members
                .iter()
                .map(|(entry, bullets)| render_entry(entry, bullets))
                .collect::<Vec<_>>()
                .join("\n");
            let header = group_header(company);
            if header.is_empty() {
                items
            } else {
                format!("{header}\n{items}")
            }
        })
        .collect::<Vec<_>>()
        .join("\n");

    Fragment::new(
        section_wrapper("experience", "Experience", &content),
        total,
        surviving.len(),
    )
}

/// Entry-level selection: timeframe, then the management-role preset rule,
/// except that explicit `selected_indices` pick from the original list and
/// override both.
fn select_entries(
    entries: &[ExperienceEntry],
    filters: &SectionFilters,
    config: &FilterConfig,
) -> Vec<ExperienceEntry> {
    if let Some(indices) = &filters.selected_indices {
        return filter_by_indices(entries, indices);
    }

    let mut kept = filter_by_timeframe(entries, config);
    if filters.experience_filter.as_deref() == Some(MANAGEMENT_ROLES_ONLY) {
        kept = filter_management_roles(&kept, |e| e.title.as_deref());
    }
    if let Some(max) = filters.max_entries {
        kept.truncate(max);
    }
    kept
}

fn render_entry(entry: &ExperienceEntry, bullets: &[String]) -> String {
    let title = entry.title.as_deref().unwrap_or("");
    let duration = entry.duration.as_deref().unwrap_or("");
    let header = format!(
        "<div class=\"job-title-header\">\n  <h4>{title}</h4>\n  \
         <p class=\"date-range\">{duration}</p>\n</div>"
    );
    let list = render_bullets(bullets);
    if list.is_empty() {
        header
    } else {
        format!("{header}\n{list}")
    }
}
