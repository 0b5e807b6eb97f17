//! Certifications — flat list, priority-gated.

use crate::filters::config::section_visible;
use crate::filters::FilterConfig;
use crate::models::profile::{CertificationEntry, Profile};
use crate::sections::markup::section_wrapper;
use crate::sections::Fragment;

pub fn render(profile: &Profile, config: &FilterConfig) -> Fragment {
    let entries = &profile.sections.certifications.entries;
    let total = entries.len();

    let priority = profile.resume_config.section_priority("certifications");
    if !section_visible(config.density, priority) || entries.is_empty() {
        return Fragment::empty(total);
    }

    let content = entries
        .iter()
        .map(render_entry)
        .collect::<Vec<_>>()
        .join("\n    ");

    Fragment::new(
        section_wrapper("certifications", "Certifications", &content),
        total,
        total,
    )
}

fn render_entry(entry: &CertificationEntry) -> String {
    let mut line = entry.name.clone().unwrap_or_default();
    if let Some(org) = entry.issuing_organization.as_deref() {
        if !org.is_empty() {
            line = format!("{line} | {org}");
        }
    }
    if let Some(id) = entry.credential_id.as_deref() {
        if !id.is_empty() {
            line = format!("{line} | {id}");
        }
    }
    format!("<p>{line}</p>")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::profile::{BasicInfo, EntryList, ResumeConfig, Sections};
    use chrono::NaiveDate;

    fn profile(entries: Vec<CertificationEntry>, priority: Option<u8>) -> Profile {
        let mut resume_config = ResumeConfig::default();
        if let Some(p) = priority {
            resume_config
                .section_priorities
                .insert("certifications".into(), p);
        }
        Profile {
            basic_info: BasicInfo::default(),
            sections: Sections {
                certifications: EntryList {
                    entries,
                    preset_filters: None,
                },
                ..Sections::default()
            },
            objective: None,
            sections_order: None,
            resume_config,
        }
    }

    fn config(density: u8) -> FilterConfig {
        FilterConfig::new(density, 0, NaiveDate::from_ymd_opt(2025, 1, 1).unwrap())
    }

    #[test]
    fn test_renders_pipe_separated_fields() {
        let p = profile(
            vec![CertificationEntry {
                name: Some("AWS Solutions Architect".into()),
                issuing_organization: Some("Amazon Web Services".into()),
                credential_id: Some("ABC-123".into()),
                date: None,
            }],
            None,
        );
        let html = render(&p, &config(100)).html;
        assert!(html.contains("<p>AWS Solutions Architect | Amazon Web Services | ABC-123</p>"));
    }

    #[test]
    fn test_missing_fields_omitted_from_line() {
        let p = profile(
            vec![CertificationEntry {
                name: Some("CKA".into()),
                ..CertificationEntry::default()
            }],
            None,
        );
        let html = render(&p, &config(100)).html;
        assert!(html.contains("<p>CKA</p>"));
    }

    #[test]
    fn test_gated_by_section_priority() {
        let p = profile(
            vec![CertificationEntry {
                name: Some("CKA".into()),
                ..CertificationEntry::default()
            }],
            Some(6),
        );
        assert!(render(&p, &config(50)).is_empty());
        assert!(!render(&p, &config(60)).is_empty());
    }

    #[test]
    fn test_empty_suppressed() {
        assert!(render(&profile(vec![], None), &config(100)).is_empty());
    }
}
