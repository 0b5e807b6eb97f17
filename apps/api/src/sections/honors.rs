//! Honors & awards — priority-gated, grouped by issuer, with optional
//! company filtering from presets.

use crate::filters::config::section_visible;
use crate::filters::primitives::{filter_by_indices, filter_by_text_match, filter_by_timeframe};
use crate::filters::FilterConfig;
use crate::models::preset::SectionFilters;
use crate::models::profile::{HonorAwardEntry, Profile};
use crate::sections::markup::{group_by_key, group_header, section_wrapper};
use crate::sections::Fragment;

pub fn render(profile: &Profile, config: &FilterConfig) -> Fragment {
    let section = &profile.sections.honors_awards;
    let total = section.entries.len();

    let priority = profile.resume_config.section_priority("honors-awards");
    if !section_visible(config.density, priority) {
        return Fragment::empty(total);
    }

    let filters = section.preset_filters.clone().unwrap_or_default();

    let entries = select_entries(&section.entries, &filters, config);
    if entries.is_empty() {
        return Fragment::empty(total);
    }

    let groups = group_by_key(&entries, |entry| entry.issuer.as_deref());
    let content = groups
        .iter()
        .map(|(issuer, members)| {
            let items = members
                .iter()
                .map(|entry| render_entry(entry))
                .collect::<Vec<_>>()
                .join("\n");
            let header = group_header(issuer);
            if header.is_empty() {
                items
            } else {
                format!("{header}\n{items}")
            }
        })
        .collect::<Vec<_>>()
        .join("\n");

    Fragment::new(
        section_wrapper("honors-awards", "Honors & Awards", &content),
        total,
        entries.len(),
    )
}

fn select_entries(
    entries: &[HonorAwardEntry],
    filters: &SectionFilters,
    config: &FilterConfig,
) -> Vec<HonorAwardEntry> {
    if let Some(indices) = &filters.selected_indices {
        return filter_by_indices(entries, indices);
    }

    let mut kept = filter_by_timeframe(entries, config);
    if let Some(company) = &filters.company_filter {
        kept = filter_by_text_match(&kept, |e| e.associated_company.as_deref(), company);
    }
    if let Some(max) = filters.max_entries {
        kept.truncate(max);
    }
    kept
}

fn render_entry(entry: &HonorAwardEntry) -> String {
    let title = entry.title.as_deref().unwrap_or("");
    let date = entry.date.as_deref().unwrap_or("");
    let mut parts = vec![format!(
        "<div class=\"job-title-header\">\n  <h4>{title}</h4>\n  \
         <p class=\"date-range\">{date}</p>\n</div>"
    )];

    if let Some(description) = entry.description.as_deref() {
        if !description.is_empty() {
            parts.push(format!("<p>{description}</p>"));
        }
    }

    if let Some(link) = entry.link.as_deref() {
        if !link.is_empty() {
            let title = entry.link_title.as_deref().unwrap_or(link);
            parts.push(format!("<p><a href=\"{link}\">{title}</a></p>"));
        }
    }

    parts.join("\n")
}
