//! Projects section — partitioned into two independently suppressible
//! sub-sections: work projects and personal ("Supplemental") projects,
//! keyed by the `"Personal"` company sentinel.

use crate::filters::primitives::{
    filter_by_entry_priority, filter_by_indices, filter_by_timeframe, filter_entry_bullets,
};
use crate::filters::FilterConfig;
use crate::models::preset::SectionFilters;
use crate::models::profile::{Profile, ProjectEntry};
use crate::sections::markup::{render_bullets, section_wrapper};
use crate::sections::Fragment;

/// Company value that routes a project into the supplemental sub-section.
pub const PERSONAL_COMPANY: &str = "Personal";

pub fn render(profile: &Profile, config: &FilterConfig) -> Fragment {
    let section = &profile.sections.projects;
    let total = section.entries.len();
    let filters = section.preset_filters.clone().unwrap_or_default();

    let entries = select_entries(&section.entries, &filters, config);

    let surviving: Vec<(ProjectEntry, Vec<String>)> =
        filter_entry_bullets(entries, config.density, filters.bullet_priority_threshold);

    let (work, personal): (Vec<_>, Vec<_>) = surviving
        .into_iter()
        .partition(|(p, _)| p.company.as_deref() != Some(PERSONAL_COMPANY));

    let kept = work.len() + personal.len();
    let mut fragments = Vec::new();
    if !work.is_empty() {
        fragments.push(section_wrapper("projects", "Work Projects", &render_group(&work)));
    }
    if !personal.is_empty() {
        fragments.push(section_wrapper(
            "projects",
            "Supplemental Projects",
            &render_group(&personal),
        ));
    }
    Fragment::new(fragments.join("\n"), total, kept)
}

fn select_entries(
    entries: &[ProjectEntry],
    filters: &SectionFilters,
    config: &FilterConfig,
) -> Vec<ProjectEntry> {
    if let Some(indices) = &filters.selected_indices {
        return filter_by_indices(entries, indices);
    }

    let mut kept = filter_by_timeframe(entries, config);
    if let Some(threshold) = filters.priority_threshold {
        kept = filter_by_entry_priority(&kept, |p| p.priority, threshold);
    }
    if let Some(max) = filters.max_entries {
        kept.truncate(max);
    }
    kept
}

fn render_group(projects: &[(ProjectEntry, Vec<String>)]) -> String {
    projects
        .iter()
        .map(|(project, bullets)| {
            let name = project.name.as_deref().unwrap_or("");
            let header = format!("<div class=\"company-header\">\n  <h3>{name}</h3>\n</div>");
            let list = render_bullets(bullets);
            if list.is_empty() {
                header
            } else {
                format!("{header}\n{list}")
            }
        })
        .collect::<Vec<_>>()
        .join("\n")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::profile::{BasicInfo, EntryList, Sections};
    use chrono::NaiveDate;

    fn project(name: &str, company: &str, priority: u8) -> ProjectEntry {
        ProjectEntry {
            name: Some(name.to_string()),
            company: Some(company.to_string()),
            date: Some("Jan 2024 - Present".to_string()),
            bullet_points: vec!["did a thing".into()],
            bullet_priorities: Some(vec![9]),
            priority,
            ..ProjectEntry::default()
        }
    }

    fn profile(entries: Vec<ProjectEntry>, filters: Option<SectionFilters>) -> Profile {
        Profile {
            basic_info: BasicInfo::default(),
            sections: Sections {
                projects: EntryList {
                    entries,
                    preset_filters: filters,
                },
                ..Sections::default()
            },
            objective: None,
            sections_order: None,
            resume_config: Default::default(),
        }
    }

    fn config(density: u8) -> FilterConfig {
        FilterConfig::new(density, 0, NaiveDate::from_ymd_opt(2025, 1, 1).unwrap())
    }

    #[test]
    fn test_work_and_personal_split() {
        let p = profile(
            vec![project("Platform", "Acme", 5), project("Side Thing", "Personal", 5)],
            None,
        );
        let html = render(&p, &config(100)).html;
        assert!(html.contains("Work Projects"));
        assert!(html.contains("Supplemental Projects"));
        assert!(html.contains("<h3>Platform</h3>"));
        assert!(html.contains("<h3>Side Thing</h3>"));
    }

    #[test]
    fn test_subsections_suppress_independently() {
        let p = profile(vec![project("Platform", "Acme", 5)], None);
        let html = render(&p, &config(100)).html;
        assert!(html.contains("Work Projects"));
        assert!(!html.contains("Supplemental Projects"));
    }

    #[test]
    fn test_priority_threshold_from_preset() {
        let p = profile(
            vec![project("Big", "Acme", 8), project("Small", "Acme", 2)],
            Some(SectionFilters {
                priority_threshold: Some(5),
                ..SectionFilters::default()
            }),
        );
        let html = render(&p, &config(100)).html;
        assert!(html.contains("<h3>Big</h3>"));
        assert!(!html.contains("<h3>Small</h3>"));
    }

    #[test]
    fn test_empty_section_renders_nothing() {
        let p = profile(vec![], None);
        assert!(render(&p, &config(100)).is_empty());
    }
}
