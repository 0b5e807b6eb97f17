//! Preset data model — a named bundle of per-section overrides stored as its
//! own JSON file and merged onto the raw profile at request time.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::models::profile::PresetSkillGroup;

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Preset {
    #[serde(default)]
    pub meta: PresetMeta,
    #[serde(default)]
    pub overrides: PresetOverrides,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct PresetMeta {
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub description: Option<String>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct PresetOverrides {
    /// Replaces the skills display wholesale with curated category groups.
    #[serde(default)]
    pub skills: Option<Vec<PresetSkillGroup>>,
    #[serde(default)]
    pub experience: Option<SectionOverride>,
    #[serde(default)]
    pub projects: Option<SectionOverride>,
    #[serde(default)]
    pub activities: Option<SectionOverride>,
    #[serde(default)]
    pub recommendations: Option<SectionOverride>,
    #[serde(default)]
    pub objective: Option<String>,
    #[serde(default)]
    pub sections_order: Option<Vec<String>>,
}

impl PresetOverrides {
    pub fn is_empty(&self) -> bool {
        self.skills.is_none()
            && self.experience.is_none()
            && self.projects.is_none()
            && self.activities.is_none()
            && self.recommendations.is_none()
            && self.objective.is_none()
            && self.sections_order.is_none()
    }
}

/// One section's override block: filter instructions that become the
/// section's `preset_filters` side-channel, plus optional per-entry
/// replacement of `bullet_priorities`.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct SectionOverride {
    #[serde(flatten)]
    pub filters: SectionFilters,
    /// Entry index → replacement priority array. Applied at merge time to a
    /// defensive copy of the entry list; `bulletPoints` is never touched.
    #[serde(default)]
    pub bullet_priorities_overrides: Option<BTreeMap<usize, Vec<u8>>>,
}

/// Filter instructions a preset attaches to a section. All knobs are
/// optional; an absent knob means "filter does not apply".
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SectionFilters {
    /// Keep exactly these positions from the original list, in listed order.
    #[serde(default)]
    pub selected_indices: Option<Vec<usize>>,
    /// Direct bullet cutoff; takes precedence over the density-derived one.
    #[serde(default)]
    pub bullet_priority_threshold: Option<u8>,
    /// Entry-level priority floor (`entry.priority >= threshold`).
    #[serde(default)]
    pub priority_threshold: Option<u8>,
    /// `"management_roles_only"` is the only recognized value.
    #[serde(default)]
    pub experience_filter: Option<String>,
    /// Case-insensitive substring match against an entry's company field.
    #[serde(default)]
    pub company_filter: Option<String>,
    /// Case-insensitive substring match against an entry's category field.
    #[serde(default)]
    pub category_filter: Option<String>,
    #[serde(default)]
    pub max_entries: Option<usize>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_preset_with_empty_overrides() {
        let preset: Preset = serde_json::from_str(
            r#"{"meta": {"name": "one-page"}, "overrides": {}}"#,
        )
        .unwrap();
        assert!(preset.overrides.is_empty());
        assert_eq!(preset.meta.name.as_deref(), Some("one-page"));
    }

    #[test]
    fn test_section_override_flattens_filters() {
        let json = r#"{
            "experience_filter": "management_roles_only",
            "max_entries": 3,
            "bullet_priorities_overrides": {"0": [9, 9, 2]}
        }"#;
        let over: SectionOverride = serde_json::from_str(json).unwrap();
        assert_eq!(
            over.filters.experience_filter.as_deref(),
            Some("management_roles_only")
        );
        assert_eq!(over.filters.max_entries, Some(3));
        let overrides = over.bullet_priorities_overrides.unwrap();
        assert_eq!(overrides.get(&0), Some(&vec![9, 9, 2]));
    }

    #[test]
    fn test_selected_indices_parse() {
        let filters: SectionFilters =
            serde_json::from_str(r#"{"selected_indices": [2, 0]}"#).unwrap();
        assert_eq!(filters.selected_indices, Some(vec![2, 0]));
    }
}
