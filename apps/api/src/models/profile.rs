//! Profile data model — the normalized résumé tree the pipeline consumes.
//!
//! Field names mirror the on-disk JSON (`bulletPoints`, `skillsInventory`, …).
//! Every section type tolerates missing fields via `#[serde(default)]`: the
//! pipeline degrades to empty/unfiltered content instead of failing a load.

use std::collections::BTreeMap;

use serde::{Deserialize, Deserializer, Serialize};

use crate::models::preset::SectionFilters;

/// Root aggregate for one assembly run. Never mutated in place — preset
/// merging and duration refresh both produce new values.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Profile {
    pub basic_info: BasicInfo,
    #[serde(default)]
    pub sections: Sections,
    #[serde(default)]
    pub objective: Option<String>,
    /// Rendering order override. `None` → `DEFAULT_SECTION_ORDER` applies.
    #[serde(default)]
    pub sections_order: Option<Vec<String>>,
    #[serde(default)]
    pub resume_config: ResumeConfig,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct BasicInfo {
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub headline: Option<String>,
    #[serde(default)]
    pub summary: Option<String>,
    #[serde(default)]
    pub location: Option<String>,
    #[serde(default)]
    pub contact: Contact,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Contact {
    #[serde(default)]
    pub email: Option<String>,
    #[serde(default)]
    pub phone: Option<String>,
    #[serde(default)]
    pub linkedin: Option<String>,
    #[serde(default)]
    pub website: Option<String>,
}

/// Per-section metadata living in `profile.json`, not in the section files.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ResumeConfig {
    /// Section name → priority 1–10. A section is shown only when
    /// `density >= priority * 10`. Missing entries default to 5.
    #[serde(default)]
    pub section_priorities: BTreeMap<String, u8>,
}

impl ResumeConfig {
    pub fn section_priority(&self, section: &str) -> u8 {
        self.section_priorities.get(section).copied().unwrap_or(5)
    }
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Sections {
    #[serde(default)]
    pub experience: EntryList<ExperienceEntry>,
    #[serde(default)]
    pub projects: EntryList<ProjectEntry>,
    #[serde(default)]
    pub education: EducationSection,
    #[serde(default)]
    pub skills: SkillsSection,
    #[serde(default)]
    pub certifications: EntryList<CertificationEntry>,
    #[serde(default)]
    pub volunteering: EntryList<VolunteeringEntry>,
    #[serde(default, rename = "honors-awards")]
    pub honors_awards: EntryList<HonorAwardEntry>,
    #[serde(default)]
    pub activities: ActivitiesSection,
    #[serde(default)]
    pub recommendations: RecommendationsSection,
}

/// A flat entry-list section plus the filter side-channel a preset merge may
/// attach. Section files store either a bare JSON array or the wrapped form;
/// both deserialize into this.
#[derive(Debug, Clone, Serialize)]
pub struct EntryList<T> {
    pub entries: Vec<T>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub preset_filters: Option<SectionFilters>,
}

impl<T> Default for EntryList<T> {
    fn default() -> Self {
        Self {
            entries: Vec::new(),
            preset_filters: None,
        }
    }
}

#[derive(Deserialize)]
#[serde(untagged)]
enum EntryListRepr<T> {
    Bare(Vec<T>),
    Wrapped {
        #[serde(default = "Vec::new")]
        entries: Vec<T>,
        #[serde(default)]
        preset_filters: Option<SectionFilters>,
    },
}

impl<'de, T> Deserialize<'de> for EntryList<T>
where
    T: Deserialize<'de>,
{
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        Ok(match EntryListRepr::deserialize(deserializer)? {
            EntryListRepr::Bare(entries) => EntryList {
                entries,
                preset_filters: None,
            },
            EntryListRepr::Wrapped {
                entries,
                preset_filters,
            } => EntryList {
                entries,
                preset_filters,
            },
        })
    }
}

// ────────────────────────────────────────────────────────────────────────────
// Flat-list entry types
// ────────────────────────────────────────────────────────────────────────────

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ExperienceEntry {
    #[serde(default)]
    pub title: Option<String>,
    #[serde(default)]
    pub company: Option<String>,
    /// Range string, e.g. `"Jan 2024 - Present · 1 yr 6 mos"`.
    #[serde(default)]
    pub duration: Option<String>,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default, rename = "bulletPoints")]
    pub bullet_points: Vec<String>,
    /// Parallel to `bullet_points`; 1–10, higher = more important.
    #[serde(default)]
    pub bullet_priorities: Option<Vec<u8>>,
    #[serde(default)]
    pub skills: Vec<String>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ProjectEntry {
    #[serde(default)]
    pub name: Option<String>,
    /// `"Personal"` routes the project into the supplemental sub-section.
    #[serde(default)]
    pub company: Option<String>,
    #[serde(default)]
    pub date: Option<String>,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub url: Option<String>,
    #[serde(default, rename = "bulletPoints")]
    pub bullet_points: Vec<String>,
    #[serde(default)]
    pub bullet_priorities: Option<Vec<u8>>,
    #[serde(default = "default_priority")]
    pub priority: u8,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct CertificationEntry {
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub issuing_organization: Option<String>,
    #[serde(default)]
    pub date: Option<String>,
    #[serde(default)]
    pub credential_id: Option<String>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct CourseEntry {
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub institution: Option<String>,
    #[serde(default)]
    pub date: Option<String>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct VolunteeringEntry {
    #[serde(default)]
    pub role: Option<String>,
    #[serde(default)]
    pub organization: Option<String>,
    #[serde(default)]
    pub duration: Option<String>,
    #[serde(default)]
    pub category: Option<String>,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub link: Option<String>,
    #[serde(default)]
    pub link_title: Option<String>,
    #[serde(default, rename = "bulletPoints")]
    pub bullet_points: Vec<String>,
    #[serde(default)]
    pub bullet_priorities: Option<Vec<u8>>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct HonorAwardEntry {
    #[serde(default)]
    pub title: Option<String>,
    #[serde(default)]
    pub issuer: Option<String>,
    #[serde(default)]
    pub date: Option<String>,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub associated_company: Option<String>,
    #[serde(default)]
    pub link: Option<String>,
    #[serde(default)]
    pub link_title: Option<String>,
}

// ────────────────────────────────────────────────────────────────────────────
// Composite sections
// ────────────────────────────────────────────────────────────────────────────

/// Education credentials plus the coursework list rendered as its own section.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct EducationSection {
    #[serde(default)]
    pub education: Vec<EducationEntry>,
    #[serde(default)]
    pub courses: Vec<CourseEntry>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub preset_filters: Option<SectionFilters>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct EducationEntry {
    #[serde(default)]
    pub institution: Option<String>,
    #[serde(default)]
    pub degree: Option<String>,
    #[serde(default)]
    pub field: Option<String>,
    #[serde(default)]
    pub dates: Option<String>,
    #[serde(default)]
    pub description: Option<String>,
    /// Raw LinkedIn-style string: `"Activities and societies: a, b, c"`.
    #[serde(default)]
    pub activities: Option<String>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ActivitiesSection {
    #[serde(default)]
    pub activities: Vec<ActivityEntry>,
    #[serde(default)]
    pub personal_interests: Vec<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub preset_filters: Option<SectionFilters>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ActivityEntry {
    #[serde(default)]
    pub organization: Option<String>,
    #[serde(default)]
    pub role: Option<String>,
    #[serde(default)]
    pub dates: Option<String>,
    #[serde(default, rename = "bulletPoints")]
    pub bullet_points: Vec<String>,
    #[serde(default)]
    pub bullet_priorities: Option<Vec<u8>>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct RecommendationsSection {
    #[serde(default)]
    pub received: Vec<Recommendation>,
    #[serde(default)]
    pub given: Vec<Recommendation>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub preset_filters: Option<SectionFilters>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Recommendation {
    #[serde(default)]
    pub recommender_name: Option<String>,
    #[serde(default)]
    pub recommender_title_company: Option<String>,
    /// Combined field: `"September 9, 2024, Matthew reported directly to Joe"`.
    #[serde(default)]
    pub date: Option<String>,
    #[serde(default)]
    pub text: Option<String>,
    #[serde(default = "default_priority")]
    pub priority: u8,
}

/// Three mutually exclusive skill sources, tried in this precedence:
/// `preset_skills` > `inventory` > `skills`.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct SkillsSection {
    #[serde(default)]
    pub skills: Vec<Skill>,
    #[serde(default, rename = "skillsInventory")]
    pub inventory: Option<Vec<InventorySkill>>,
    /// Attached by the preset merge layer; ordered category groups.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub preset_skills: Option<Vec<PresetSkillGroup>>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Skill {
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub endorsements: u32,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct InventorySkill {
    #[serde(default)]
    pub name: String,
    #[serde(default = "default_priority")]
    pub priority: u8,
    #[serde(default, rename = "marketDemand")]
    pub market_demand: u8,
    /// Semantic usage contexts, matched against the category table.
    #[serde(default)]
    pub contexts: Vec<String>,
}

/// One named skill category in display order.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct PresetSkillGroup {
    pub category: String,
    #[serde(default)]
    pub skills: Vec<String>,
}

fn default_priority() -> u8 {
    1
}

// ────────────────────────────────────────────────────────────────────────────
// Accessor traits — the seams the filter primitives operate through
// ────────────────────────────────────────────────────────────────────────────

/// An entry carrying a résumé date string (single date or range).
pub trait DateStamped {
    fn date_text(&self) -> Option<&str>;
}

/// An entry carrying a bullet list with optional parallel priorities.
pub trait HasBullets {
    fn bullets(&self) -> &[String];
    fn bullet_priorities(&self) -> Option<&[u8]>;
}

impl DateStamped for ExperienceEntry {
    fn date_text(&self) -> Option<&str> {
        self.duration.as_deref()
    }
}

impl DateStamped for ProjectEntry {
    fn date_text(&self) -> Option<&str> {
        self.date.as_deref()
    }
}

impl DateStamped for VolunteeringEntry {
    fn date_text(&self) -> Option<&str> {
        self.duration.as_deref()
    }
}

impl DateStamped for HonorAwardEntry {
    fn date_text(&self) -> Option<&str> {
        self.date.as_deref()
    }
}

impl DateStamped for CertificationEntry {
    fn date_text(&self) -> Option<&str> {
        self.date.as_deref()
    }
}

impl HasBullets for ExperienceEntry {
    fn bullets(&self) -> &[String] {
        &self.bullet_points
    }
    fn bullet_priorities(&self) -> Option<&[u8]> {
        self.bullet_priorities.as_deref()
    }
}

impl HasBullets for ProjectEntry {
    fn bullets(&self) -> &[String] {
        &self.bullet_points
    }
    fn bullet_priorities(&self) -> Option<&[u8]> {
        self.bullet_priorities.as_deref()
    }
}

impl HasBullets for VolunteeringEntry {
    fn bullets(&self) -> &[String] {
        &self.bullet_points
    }
    fn bullet_priorities(&self) -> Option<&[u8]> {
        self.bullet_priorities.as_deref()
    }
}

impl HasBullets for ActivityEntry {
    fn bullets(&self) -> &[String] {
        &self.bullet_points
    }
    fn bullet_priorities(&self) -> Option<&[u8]> {
        self.bullet_priorities.as_deref()
    }
}
