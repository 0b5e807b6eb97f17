//! Assembly — the full pipeline run for one request.
//!
//! Pipeline: preset merge → ongoing-duration refresh → header block →
//! registry-driven section rendering in the effective order → concatenated
//! body plus a report of what was shown and what was filtered away.

use std::path::Path;

use serde::Serialize;
use tracing::{info, warn};

use crate::dates::{refresh_ongoing_durations, total_experience_years};
use crate::filters::FilterConfig;
use crate::models::profile::Profile;
use crate::preset::apply_preset;
use crate::sections::{section_by_id, DEFAULT_SECTION_ORDER};

pub struct Assembly {
    pub html: String,
    pub report: AssemblyReport,
}

#[derive(Debug, Clone, Serialize)]
pub struct AssemblyReport {
    pub density: u8,
    pub timeframe_years: u32,
    pub preset: Option<String>,
    pub total_experience_years: i32,
    pub sections: Vec<SectionReport>,
    pub visible_sections: Vec<String>,
    pub suppressed_sections: Vec<String>,
}

#[derive(Debug, Clone, Serialize)]
pub struct SectionReport {
    pub id: String,
    pub label: String,
    pub total_entries: usize,
    pub kept_entries: usize,
    pub visible: bool,
}

/// Runs the whole pipeline against a raw profile.
pub fn assemble(
    raw: &Profile,
    presets_dir: &Path,
    preset: Option<&str>,
    config: &FilterConfig,
) -> Assembly {
    let merged = apply_preset(raw, presets_dir, preset);
    let profile = refresh_ongoing_durations(&merged, config.now);

    let order = profile
        .sections_order
        .clone()
        .unwrap_or_else(|| DEFAULT_SECTION_ORDER.iter().map(|s| s.to_string()).collect());

    let mut body = vec![header_block(&profile)];
    let mut sections = Vec::new();

    for id in &order {
        let Some(spec) = section_by_id(id) else {
            warn!("Unknown section '{id}' in sections_order; skipped");
            continue;
        };
        let fragment = (spec.render)(&profile, config);
        let visible = !fragment.is_empty();
        sections.push(SectionReport {
            id: spec.id.to_string(),
            label: spec.label.to_string(),
            total_entries: fragment.total_entries,
            kept_entries: fragment.kept_entries,
            visible,
        });
        if visible {
            body.push(fragment.html);
        }
    }

    let visible_sections: Vec<String> = sections
        .iter()
        .filter(|s| s.visible)
        .map(|s| s.id.clone())
        .collect();
    let suppressed_sections: Vec<String> = sections
        .iter()
        .filter(|s| !s.visible)
        .map(|s| s.id.clone())
        .collect();

    info!(
        density = config.density,
        visible = visible_sections.len(),
        suppressed = suppressed_sections.len(),
        "Assembled resume"
    );

    Assembly {
        html: body.join("\n"),
        report: AssemblyReport {
            density: config.density,
            timeframe_years: config.timeframe_years,
            preset: preset.map(str::to_string),
            total_experience_years: total_experience_years(&profile, config.now),
            sections,
            visible_sections,
            suppressed_sections,
        },
    }
}

/// Name, headline, contact line, objective. Always first, never filtered.
fn header_block(profile: &Profile) -> String {
    let info = &profile.basic_info;
    let mut parts = vec!["<header class=\"resume-header\">".to_string()];

    if let Some(name) = info.name.as_deref() {
        parts.push(format!("  <h1>{name}</h1>"));
    }
    if let Some(headline) = info.headline.as_deref() {
        parts.push(format!("  <p class=\"headline\">{headline}</p>"));
    }

    let contact = &info.contact;
    let line: Vec<&str> = [
        contact.email.as_deref(),
        contact.phone.as_deref(),
        info.location.as_deref(),
        contact.linkedin.as_deref(),
        contact.website.as_deref(),
    ]
    .into_iter()
    .flatten()
    .filter(|s| !s.is_empty())
    .collect();
    if !line.is_empty() {
        parts.push(format!("  <p class=\"contact-line\">{}</p>", line.join(" • ")));
    }

    if let Some(objective) = profile.objective.as_deref() {
        if !objective.is_empty() {
            parts.push(format!("  <p class=\"objective\">{objective}</p>"));
        }
    }

    parts.push("</header>".to_string());
    parts.join("\n")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::profile::{
        BasicInfo, Contact, EntryList, ExperienceEntry, Profile, Sections,
    };
    use chrono::NaiveDate;

    fn base_profile() -> Profile {
        Profile {
            basic_info: BasicInfo {
                name: Some("Ada Lovelace".into()),
                headline: Some("Engineer".into()),
                location: Some("London".into()),
                contact: Contact {
                    email: Some("ada@example.com".into()),
                    ..Contact::default()
                },
                ..BasicInfo::default()
            },
            sections: Sections {
                experience: EntryList {
                    entries: vec![ExperienceEntry {
                        title: Some("Analyst".into()),
                        company: Some("Babbage & Co".into()),
                        duration: Some("Jan 2020 - Present".into()),
                        bullet_points: vec!["built the engine".into()],
                        bullet_priorities: Some(vec![9]),
                        ..ExperienceEntry::default()
                    }],
                    preset_filters: None,
                },
                ..Sections::default()
            },
            objective: Some("Build analytical engines".into()),
            sections_order: None,
            resume_config: Default::default(),
        }
    }

    fn config(density: u8) -> FilterConfig {
        FilterConfig::new(density, 0, NaiveDate::from_ymd_opt(2025, 1, 1).unwrap())
    }

    #[test]
    fn test_header_always_first() {
        let dir = tempfile::tempdir().unwrap();
        let assembly = assemble(&base_profile(), dir.path(), None, &config(100));
        assert!(assembly.html.starts_with("<header class=\"resume-header\">"));
        assert!(assembly.html.contains("<h1>Ada Lovelace</h1>"));
        assert!(assembly.html.contains("ada@example.com • London"));
        assert!(assembly.html.contains("Build analytical engines"));
    }

    #[test]
    fn test_report_tracks_visible_and_suppressed() {
        let dir = tempfile::tempdir().unwrap();
        let assembly = assemble(&base_profile(), dir.path(), None, &config(100));
        let report = &assembly.report;
        assert!(report.visible_sections.contains(&"experience".to_string()));
        assert!(report.suppressed_sections.contains(&"projects".to_string()));
        let exp = report.sections.iter().find(|s| s.id == "experience").unwrap();
        assert_eq!(exp.total_entries, 1);
        assert_eq!(exp.kept_entries, 1);
        // Jan 2020 start against the fixed 2025 clock
        assert_eq!(report.total_experience_years, 5);
    }

    /// Every section category populated with at least one entry that passes
    /// all gates at full density.
    fn fully_populated_profile() -> Profile {
        use crate::models::profile::{
            ActivitiesSection, ActivityEntry, CertificationEntry, CourseEntry,
            EducationEntry, EducationSection, HonorAwardEntry, InventorySkill,
            ProjectEntry, Recommendation, RecommendationsSection, SkillsSection,
            VolunteeringEntry,
        };

        let mut profile = base_profile();
        profile.sections.projects = EntryList {
            entries: vec![ProjectEntry {
                name: Some("Difference Engine".into()),
                company: Some("Babbage & Co".into()),
                date: Some("Jan 2021 - Dec 2022".into()),
                bullet_points: vec!["computed polynomials".into()],
                bullet_priorities: Some(vec![9]),
                ..ProjectEntry::default()
            }],
            preset_filters: None,
        };
        profile.sections.skills = SkillsSection {
            inventory: Some(vec![InventorySkill {
                name: "Rust".into(),
                priority: 9,
                market_demand: 8,
                contexts: vec!["language".into()],
            }]),
            ..SkillsSection::default()
        };
        profile.sections.education = EducationSection {
            education: vec![EducationEntry {
                institution: Some("University of London".into()),
                degree: Some("BSc".into()),
                field: Some("Mathematics".into()),
                ..EducationEntry::default()
            }],
            courses: vec![CourseEntry {
                name: Some("Number Theory".into()),
                institution: Some("University of London".into()),
                ..CourseEntry::default()
            }],
            preset_filters: None,
        };
        profile.sections.certifications = EntryList {
            entries: vec![CertificationEntry {
                name: Some("Certified Analyst".into()),
                ..CertificationEntry::default()
            }],
            preset_filters: None,
        };
        profile.sections.volunteering = EntryList {
            entries: vec![VolunteeringEntry {
                role: Some("Mentor".into()),
                organization: Some("Computing Society".into()),
                ..VolunteeringEntry::default()
            }],
            preset_filters: None,
        };
        profile.sections.honors_awards = EntryList {
            entries: vec![HonorAwardEntry {
                title: Some("Medal of Computation".into()),
                issuer: Some("Royal Society".into()),
                ..HonorAwardEntry::default()
            }],
            preset_filters: None,
        };
        profile.sections.activities = ActivitiesSection {
            activities: vec![ActivityEntry {
                role: Some("Speaker".into()),
                organization: Some("Lecture Circuit".into()),
                ..ActivityEntry::default()
            }],
            personal_interests: vec![],
            preset_filters: None,
        };
        profile.sections.recommendations = RecommendationsSection {
            received: vec![Recommendation {
                recommender_name: Some("Charles".into()),
                text: Some("Brilliant analyst".into()),
                priority: 9,
                ..Recommendation::default()
            }],
            given: vec![],
            preset_filters: None,
        };
        profile
    }

    #[test]
    fn test_full_density_shows_every_populated_section_in_default_order() {
        let dir = tempfile::tempdir().unwrap();
        let assembly = assemble(&fully_populated_profile(), dir.path(), None, &config(100));

        assert!(
            assembly.report.suppressed_sections.is_empty(),
            "suppressed at full density: {:?}",
            assembly.report.suppressed_sections
        );

        let mut previous = 0;
        for id in DEFAULT_SECTION_ORDER {
            let marker = format!("data-section=\"{id}\"");
            let at = assembly
                .html
                .find(&marker)
                .unwrap_or_else(|| panic!("section '{id}' missing from output"));
            assert!(at >= previous, "section '{id}' rendered out of order");
            previous = at;
        }
    }

    #[test]
    fn test_sections_order_override_respected() {
        let dir = tempfile::tempdir().unwrap();
        let mut profile = base_profile();
        profile.sections.skills.skills = vec![crate::models::profile::Skill {
            name: "Mathematics".into(),
            endorsements: 3,
        }];
        profile.sections_order = Some(vec!["skills".into(), "experience".into()]);
        let assembly = assemble(&profile, dir.path(), None, &config(100));
        let skills_at = assembly.html.find("data-section=\"skills\"").unwrap();
        let experience_at = assembly.html.find("data-section=\"experience\"").unwrap();
        assert!(skills_at < experience_at);
    }

    #[test]
    fn test_unknown_section_in_order_skipped() {
        let dir = tempfile::tempdir().unwrap();
        let mut profile = base_profile();
        profile.sections_order = Some(vec!["publications".into(), "experience".into()]);
        let assembly = assemble(&profile, dir.path(), None, &config(100));
        assert!(assembly.html.contains("data-section=\"experience\""));
        assert!(assembly.report.sections.iter().all(|s| s.id != "publications"));
    }

    #[test]
    fn test_ongoing_duration_refreshed_in_output() {
        let dir = tempfile::tempdir().unwrap();
        let mut profile = base_profile();
        profile.sections.experience.entries[0].duration =
            Some("Jan 2024 - Present · 1 mo".into());
        let assembly = assemble(&profile, dir.path(), None, &config(100));
        // Jan 2024 → Jan 2025 is 12 full months
        assert!(assembly.html.contains("Jan 2024 - Present · 1 yr"));
    }
}
