//! Skills section — three mutually exclusive data sources tried in priority
//! order: preset-provided category lists, the skills inventory, then the raw
//! endorsement-counted skill list.
//!
//! Inventory skills are bucketed into a fixed taxonomy by matching their
//! declared contexts against `CONTEXT_CATEGORIES` (first matching row wins;
//! unmatched contexts fall through to Concepts & Methodologies) and sorted
//! within a category by `0.6 × priority + 0.4 × market demand`.

use crate::filters::config::section_visible;
use crate::filters::FilterConfig;
use crate::models::profile::{InventorySkill, PresetSkillGroup, Profile, Skill};
use crate::sections::markup::section_wrapper;
use crate::sections::Fragment;

/// Display order of the inventory taxonomy.
const CATEGORY_ORDER: [&str; 6] = [
    "Leadership",
    "Programming Languages",
    "Operating Systems",
    "Frameworks & Libraries",
    "Tools & Platforms",
    "Concepts & Methodologies",
];

/// Priority-ordered context → category table. Hand-tuned configuration data;
/// the first row whose keywords intersect a skill's contexts wins.
const CONTEXT_CATEGORIES: &[(&str, &[&str])] = &[
    ("Leadership", &["leadership", "management", "mentoring", "team", "strategy"]),
    ("Programming Languages", &["language", "programming", "scripting"]),
    ("Frameworks & Libraries", &["framework", "library", "frontend", "backend", "runtime"]),
    (
        "Tools & Platforms",
        &["tool", "platform", "cloud", "devops", "database", "infrastructure"],
    ),
    (
        "Concepts & Methodologies",
        &["concept", "methodology", "architecture", "process", "practice"],
    ),
];

const DEFAULT_CATEGORY: &str = "Concepts & Methodologies";

/// The Operating Systems category is a single synthesized sentence, shown
/// only at or above this density.
const OS_MIN_DENSITY: u8 = 80;
const OS_SENTENCE: &str = "Daily driver on Linux, macOS, and Windows";

pub fn render(profile: &Profile, config: &FilterConfig) -> Fragment {
    let section = &profile.sections.skills;
    let total = if let Some(preset) = &section.preset_skills {
        preset.iter().map(|g| g.skills.len()).sum()
    } else if let Some(inventory) = &section.inventory {
        inventory.len()
    } else {
        section.skills.len()
    };

    let priority = profile.resume_config.section_priority("skills");
    if !section_visible(config.density, priority) {
        tracing::debug!(
            density = config.density,
            required = priority as u16 * 10,
            "skills section below density threshold"
        );
        return Fragment::empty(total);
    }

    let groups = if let Some(preset) = &section.preset_skills {
        preset.clone()
    } else if let Some(inventory) = &section.inventory {
        categorize_inventory(inventory, config.density)
    } else {
        categorize_raw(&section.skills)
    };

    let kept = groups.iter().map(|g| g.skills.len()).sum();
    let content = groups
        .iter()
        .filter(|g| !g.skills.is_empty())
        .map(|g| format!("<p><strong>{}:</strong> {}</p>", g.category, g.skills.join(", ")))
        .collect::<Vec<_>>()
        .join("\n    ");

    Fragment::new(section_wrapper("skills", "Special Skills", &content), total, kept)
}

/// Weighted ranking score for inventory skills.
fn inventory_score(skill: &InventorySkill) -> f64 {
    0.6 * skill.priority as f64 + 0.4 * skill.market_demand as f64
}

fn category_for(skill: &InventorySkill) -> &'static str {
    for (category, keywords) in CONTEXT_CATEGORIES {
        let hit = skill.contexts.iter().any(|context| {
            let context = context.to_lowercase();
            keywords.iter().any(|kw| context.contains(kw))
        });
        if hit {
            return category;
        }
    }
    DEFAULT_CATEGORY
}

fn categorize_inventory(inventory: &[InventorySkill], density: u8) -> Vec<PresetSkillGroup> {
    let mut buckets: Vec<(&'static str, Vec<&InventorySkill>)> = CATEGORY_ORDER
        .iter()
        .map(|category| (*category, Vec::new()))
        .collect();

    for skill in inventory {
        let category = category_for(skill);
        if let Some((_, members)) = buckets.iter_mut().find(|(name, _)| *name == category) {
            members.push(skill);
        }
    }

    buckets
        .into_iter()
        .filter_map(|(category, mut members)| {
            if category == "Operating Systems" {
                // Synthesized category, not populated from the inventory
                if density >= OS_MIN_DENSITY {
                    return Some(PresetSkillGroup {
                        category: category.to_string(),
                        skills: vec![OS_SENTENCE.to_string()],
                    });
                }
                return None;
            }
            if members.is_empty() {
                return None;
            }
            members.sort_by(|a, b| {
                inventory_score(b)
                    .partial_cmp(&inventory_score(a))
                    .unwrap_or(std::cmp::Ordering::Equal)
            });
            Some(PresetSkillGroup {
                category: category.to_string(),
                skills: members.iter().map(|s| s.name.clone()).collect(),
            })
        })
        .collect()
}

const RAW_LANGUAGES: [&str; 6] = ["C++", "Java", "JavaScript", "PHP", "Python", "TypeScript"];
const RAW_FRAMEWORKS: [&str; 8] = [
    "Angular", "Express.js", "jQuery", "Next.js", "Node.js", "React.js", "Redux.js", "Vue.js",
];
const RAW_TOOLS: [&str; 7] = ["AWS", "Docker", "Git", "Linux", "Mac OS", "MongoDB", "Windows"];

/// Fallback categorization for the raw endorsement-counted list: keep
/// endorsed skills (or the first 15 when nothing is endorsed) and bucket
/// them by fixed name vocabularies.
fn categorize_raw(skills: &[Skill]) -> Vec<PresetSkillGroup> {
    let mut sorted: Vec<&Skill> = skills.iter().collect();
    sorted.sort_by(|a, b| b.endorsements.cmp(&a.endorsements));

    let any_endorsed = sorted.iter().any(|s| s.endorsements > 0);
    let top: Vec<&Skill> = if any_endorsed {
        sorted.into_iter().filter(|s| s.endorsements > 0).collect()
    } else {
        sorted.into_iter().take(15).collect()
    };

    let mut languages = Vec::new();
    let mut frameworks = Vec::new();
    let mut leadership = Vec::new();
    let mut tools = Vec::new();
    let mut other = Vec::new();

    for skill in top {
        let name = skill.name.as_str();
        if RAW_LANGUAGES.contains(&name) {
            languages.push(skill.name.clone());
        } else if RAW_FRAMEWORKS.contains(&name) {
            frameworks.push(skill.name.clone());
        } else if name.contains("Management")
            || name.contains("Leadership")
            || name == "Mentoring"
            || name == "Teaching"
        {
            leadership.push(skill.name.clone());
        } else if RAW_TOOLS.contains(&name) {
            tools.push(skill.name.clone());
        } else {
            other.push(skill.name.clone());
        }
    }

    [
        ("Programming Languages", languages),
        ("Frameworks & Libraries", frameworks),
        ("Tools & Platforms", tools),
        ("Leadership & Management", leadership),
        ("Other Technologies", other),
    ]
    .into_iter()
    .filter(|(_, skills)| !skills.is_empty())
    .map(|(category, skills)| PresetSkillGroup {
        category: category.to_string(),
        skills,
    })
    .collect()
}
