//! Preset merging — attaches a preset's per-section filter instructions to
//! the profile tree without discarding any original data.
//!
//! Merging always works on a defensive copy: callers keep the raw profile
//! alongside the merged one to compute total-vs-filtered statistics, so the
//! raw tree must never be touched. Presets do not stack; `apply_preset`
//! only ever accepts the raw profile, so a second merge cannot be expressed.

use std::collections::BTreeMap;
use std::path::Path;

use tracing::{info, warn};

use crate::models::preset::{Preset, SectionOverride};
use crate::models::profile::Profile;
use crate::preset::loader::load_preset;

/// Sentinel preset name meaning "no preset, raw profile".
pub const FULL_PRESET: &str = "full";

/// Loads and merges the named preset. Absent name, the `"full"` sentinel, or
/// any load failure all return the raw profile unchanged (logged).
pub fn apply_preset(raw: &Profile, presets_dir: &Path, name: Option<&str>) -> Profile {
    let name = match name {
        Some(name) if name != FULL_PRESET => name,
        _ => return raw.clone(),
    };

    let Some(preset) = load_preset(presets_dir, name) else {
        warn!("Falling back to raw profile: preset '{name}' failed to load");
        return raw.clone();
    };

    let merged = merge_preset_with_raw(raw, &preset);
    info!(
        "Applied preset: {}",
        preset.meta.name.as_deref().unwrap_or(name)
    );
    merged
}

/// Merges the preset's declared overrides into a copy of the raw profile.
///
/// Each section override lands as that section's `preset_filters`
/// side-channel; original entries stay in place. `bullet_priorities_overrides`
/// replaces the priority array of the addressed entries only. An `objective`
/// override replaces the top-level objective; `sections_order` replaces the
/// rendering order.
pub fn merge_preset_with_raw(raw: &Profile, preset: &Preset) -> Profile {
    let mut merged = raw.clone();
    let overrides = &preset.overrides;

    if overrides.is_empty() {
        warn!("Preset has no overrides; profile unchanged");
        return merged;
    }

    if let Some(skills) = &overrides.skills {
        merged.sections.skills.preset_skills = Some(skills.clone());
    }

    if let Some(experience) = &overrides.experience {
        merged.sections.experience.preset_filters = Some(experience.filters.clone());
        apply_bullet_overrides(
            &mut merged.sections.experience.entries,
            experience,
            |entry, priorities| entry.bullet_priorities = Some(priorities),
        );
    }

    if let Some(projects) = &overrides.projects {
        merged.sections.projects.preset_filters = Some(projects.filters.clone());
        apply_bullet_overrides(
            &mut merged.sections.projects.entries,
            projects,
            |entry, priorities| entry.bullet_priorities = Some(priorities),
        );
    }

    if let Some(activities) = &overrides.activities {
        merged.sections.activities.preset_filters = Some(activities.filters.clone());
        apply_bullet_overrides(
            &mut merged.sections.activities.activities,
            activities,
            |entry, priorities| entry.bullet_priorities = Some(priorities),
        );
    }

    if let Some(recommendations) = &overrides.recommendations {
        merged.sections.recommendations.preset_filters = Some(recommendations.filters.clone());
    }

    if let Some(objective) = &overrides.objective {
        merged.objective = Some(objective.clone());
    }

    if let Some(order) = &overrides.sections_order {
        merged.sections_order = Some(order.clone());
    }

    merged
}

/// Replaces `bullet_priorities` at each overridden index. Indices past the
/// end of the entry list are ignored, matching the index-filter contract.
fn apply_bullet_overrides<T>(
    entries: &mut [T],
    section: &SectionOverride,
    set_priorities: impl Fn(&mut T, Vec<u8>),
) {
    let Some(overrides) = &section.bullet_priorities_overrides else {
        return;
    };
    apply_override_map(entries, overrides, set_priorities);
}

fn apply_override_map<T>(
    entries: &mut [T],
    overrides: &BTreeMap<usize, Vec<u8>>,
    set_priorities: impl Fn(&mut T, Vec<u8>),
) {
    for (&index, priorities) in overrides {
        match entries.get_mut(index) {
            Some(entry) => set_priorities(entry, priorities.clone()),
            None => warn!("bullet_priorities_overrides index {index} out of range; skipped"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::preset::{PresetMeta, PresetOverrides, SectionFilters};
    use crate::models::profile::{BasicInfo, ExperienceEntry, Sections};

    fn profile_with_experience(entries: Vec<ExperienceEntry>) -> Profile {
        Profile {
            basic_info: BasicInfo::default(),
            sections: Sections {
                experience: crate::models::profile::EntryList {
                    entries,
                    preset_filters: None,
                },
                ..Sections::default()
            },
            objective: None,
            sections_order: None,
            resume_config: Default::default(),
        }
    }

    fn entry(title: &str, priorities: Option<Vec<u8>>) -> ExperienceEntry {
        ExperienceEntry {
            title: Some(title.to_string()),
            bullet_points: vec!["x".into(), "y".into()],
            bullet_priorities: priorities,
            ..ExperienceEntry::default()
        }
    }

    #[test]
    fn test_empty_overrides_leaves_entry_counts_unchanged() {
        let raw = profile_with_experience(vec![entry("a", None), entry("b", None)]);
        let merged = merge_preset_with_raw(&raw, &Preset::default());
        assert_eq!(
            merged.sections.experience.entries.len(),
            raw.sections.experience.entries.len()
        );
        assert!(merged.sections.experience.preset_filters.is_none());
    }

    #[test]
    fn test_merge_attaches_filters_without_dropping_entries() {
        let raw = profile_with_experience(vec![entry("a", None), entry("b", None)]);
        let preset = Preset {
            meta: PresetMeta::default(),
            overrides: PresetOverrides {
                experience: Some(SectionOverride {
                    filters: SectionFilters {
                        max_entries: Some(1),
                        ..SectionFilters::default()
                    },
                    bullet_priorities_overrides: None,
                }),
                ..PresetOverrides::default()
            },
        };

        let merged = merge_preset_with_raw(&raw, &preset);
        // Filters are attached as a side-channel; entries stay intact
        assert_eq!(merged.sections.experience.entries.len(), 2);
        assert_eq!(
            merged
                .sections
                .experience
                .preset_filters
                .as_ref()
                .unwrap()
                .max_entries,
            Some(1)
        );
        // Raw profile untouched
        assert!(raw.sections.experience.preset_filters.is_none());
    }

    #[test]
    fn test_bullet_priority_override_replaces_only_target_index() {
        let raw = profile_with_experience(vec![
            entry("a", Some(vec![5, 5])),
            entry("b", Some(vec![5, 5])),
        ]);
        let mut overrides = BTreeMap::new();
        overrides.insert(1usize, vec![9, 2]);
        overrides.insert(7usize, vec![1]); // out of range, skipped
        let preset = Preset {
            meta: PresetMeta::default(),
            overrides: PresetOverrides {
                experience: Some(SectionOverride {
                    filters: SectionFilters::default(),
                    bullet_priorities_overrides: Some(overrides),
                }),
                ..PresetOverrides::default()
            },
        };

        let merged = merge_preset_with_raw(&raw, &preset);
        assert_eq!(
            merged.sections.experience.entries[0].bullet_priorities,
            Some(vec![5, 5])
        );
        assert_eq!(
            merged.sections.experience.entries[1].bullet_priorities,
            Some(vec![9, 2])
        );
        // bulletPoints untouched
        assert_eq!(merged.sections.experience.entries[1].bullet_points.len(), 2);
    }

    #[test]
    fn test_objective_and_order_replacement() {
        let raw = profile_with_experience(vec![]);
        let preset = Preset {
            meta: PresetMeta::default(),
            overrides: PresetOverrides {
                objective: Some("Lead platform work".into()),
                sections_order: Some(vec!["skills".into(), "experience".into()]),
                ..PresetOverrides::default()
            },
        };
        let merged = merge_preset_with_raw(&raw, &preset);
        assert_eq!(merged.objective.as_deref(), Some("Lead platform work"));
        assert_eq!(
            merged.sections_order,
            Some(vec!["skills".to_string(), "experience".to_string()])
        );
    }

    #[test]
    fn test_apply_preset_full_sentinel_returns_raw() {
        let raw = profile_with_experience(vec![entry("a", None)]);
        let dir = tempfile::tempdir().unwrap();
        let merged = apply_preset(&raw, dir.path(), Some("full"));
        assert_eq!(merged.sections.experience.entries.len(), 1);
        assert!(merged.sections.experience.preset_filters.is_none());
    }

    #[test]
    fn test_apply_preset_missing_file_falls_back_to_raw() {
        let raw = profile_with_experience(vec![entry("a", None)]);
        let dir = tempfile::tempdir().unwrap();
        let merged = apply_preset(&raw, dir.path(), Some("ghost"));
        assert_eq!(merged.sections.experience.entries.len(), 1);
        assert!(merged.sections.experience.preset_filters.is_none());
    }
}
