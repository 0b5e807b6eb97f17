//! Filesystem-backed profile storage.
//!
//! The profile lives as `profile.json` (identity, objective, section config)
//! plus one JSON file per section under `sections/`. A missing or broken
//! section file degrades to an empty section with a warning; only a broken
//! `profile.json` is fatal. Files are re-read on every assembly so edits show
//! up without a restart.

use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use serde::de::DeserializeOwned;
use tracing::{debug, warn};

use crate::models::profile::Profile;

/// Built-in stylesheet used when no template file resolves.
const FALLBACK_CSS: &str = "body { font-family: Georgia, serif; margin: 2rem; }\n\
    .section-label { font-weight: bold; text-transform: uppercase; }\n\
    .company-header h3 { margin-bottom: 0; }\n\
    .date-range { color: #555; }";

/// Shared stylesheet filename tried after the preset-specific one.
const SHARED_CSS: &str = "resume-styles.css";

/// Which candidate won the stylesheet resolution chain.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CssSource {
    /// `templates/{preset}.css`
    Preset,
    /// `templates/resume-styles.css`
    Shared,
    /// The compiled-in minimal stylesheet.
    Builtin,
}

#[derive(Debug, Clone)]
pub struct ProfileStore {
    pub profile_dir: PathBuf,
    pub presets_dir: PathBuf,
    pub templates_dir: PathBuf,
}

impl ProfileStore {
    pub fn new(profile_dir: PathBuf, presets_dir: PathBuf, templates_dir: PathBuf) -> Self {
        Self {
            profile_dir,
            presets_dir,
            templates_dir,
        }
    }

    /// Loads `profile.json` and every section file. Section failures are
    /// logged and skipped; the section stays at its default.
    pub fn load_profile(&self) -> Result<Profile> {
        let profile_path = self.profile_dir.join("profile.json");
        let raw = std::fs::read_to_string(&profile_path)
            .with_context(|| format!("reading {}", profile_path.display()))?;
        let mut profile: Profile = serde_json::from_str(&raw)
            .with_context(|| format!("parsing {}", profile_path.display()))?;

        let sections_dir = self.profile_dir.join("sections");
        let sections = &mut profile.sections;

        load_section(&sections_dir, "experience", &mut sections.experience);
        load_section(&sections_dir, "projects", &mut sections.projects);
        load_section(&sections_dir, "education", &mut sections.education);
        load_section(&sections_dir, "skills", &mut sections.skills);
        load_section(&sections_dir, "certifications", &mut sections.certifications);
        load_section(&sections_dir, "volunteering", &mut sections.volunteering);
        load_section(&sections_dir, "honors-awards", &mut sections.honors_awards);
        load_section(&sections_dir, "activities", &mut sections.activities);
        load_section(&sections_dir, "recommendations", &mut sections.recommendations);

        Ok(profile)
    }

    /// Resolves the stylesheet for a preset: `templates/{preset}.css`, then
    /// the shared `templates/resume-styles.css`, then the built-in fallback.
    /// The chain is deterministic so the same inputs always style the same;
    /// the returned [`CssSource`] says which candidate won.
    pub fn resolve_css(&self, preset: Option<&str>) -> (String, CssSource) {
        let mut candidates = Vec::new();
        if let Some(preset) = preset {
            candidates.push((
                self.templates_dir.join(format!("{preset}.css")),
                CssSource::Preset,
            ));
        }
        candidates.push((self.templates_dir.join(SHARED_CSS), CssSource::Shared));

        for (path, source) in candidates {
            if let Ok(css) = std::fs::read_to_string(&path) {
                debug!("Using stylesheet {}", path.display());
                return (css, source);
            }
        }
        debug!("No stylesheet on disk; using built-in fallback");
        (FALLBACK_CSS.to_string(), CssSource::Builtin)
    }
}

fn load_section<T: DeserializeOwned>(sections_dir: &Path, name: &str, target: &mut T) {
    let path = sections_dir.join(format!("{name}.json"));
    let raw = match std::fs::read_to_string(&path) {
        Ok(raw) => raw,
        Err(e) => {
            warn!("Section '{name}' unavailable ({e}); rendering without it");
            return;
        }
    };
    match serde_json::from_str::<T>(&raw) {
        Ok(value) => *target = value,
        Err(e) => warn!("Section '{name}' unparseable ({e}); rendering without it"),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn store(dir: &Path) -> ProfileStore {
        ProfileStore::new(
            dir.to_path_buf(),
            dir.join("presets"),
            dir.join("templates"),
        )
    }

    fn write(path: &Path, content: &str) {
        std::fs::create_dir_all(path.parent().unwrap()).unwrap();
        std::fs::write(path, content).unwrap();
    }

    const MINIMAL_PROFILE: &str = r#"{"basic_info": {"name": "Ada"}}"#;

    #[test]
    fn test_missing_profile_json_is_fatal() {
        let dir = tempfile::tempdir().unwrap();
        assert!(store(dir.path()).load_profile().is_err());
    }

    #[test]
    fn test_missing_section_files_degrade_to_empty() {
        let dir = tempfile::tempdir().unwrap();
        write(&dir.path().join("profile.json"), MINIMAL_PROFILE);
        let profile = store(dir.path()).load_profile().unwrap();
        assert!(profile.sections.experience.entries.is_empty());
        assert_eq!(profile.basic_info.name.as_deref(), Some("Ada"));
    }

    #[test]
    fn test_broken_section_file_skipped_not_fatal() {
        let dir = tempfile::tempdir().unwrap();
        write(&dir.path().join("profile.json"), MINIMAL_PROFILE);
        write(&dir.path().join("sections/experience.json"), "{not json");
        write(
            &dir.path().join("sections/projects.json"),
            r#"[{"name": "Widget", "bulletPoints": []}]"#,
        );
        let profile = store(dir.path()).load_profile().unwrap();
        assert!(profile.sections.experience.entries.is_empty());
        assert_eq!(profile.sections.projects.entries.len(), 1);
    }

    #[test]
    fn test_css_resolution_prefers_preset_stylesheet() {
        let dir = tempfile::tempdir().unwrap();
        write(&dir.path().join("templates/mgmt.css"), "/* mgmt */");
        write(&dir.path().join("templates/resume-styles.css"), "/* shared */");
        let s = store(dir.path());
        assert_eq!(
            s.resolve_css(Some("mgmt")),
            ("/* mgmt */".to_string(), CssSource::Preset)
        );
        assert_eq!(
            s.resolve_css(Some("other")),
            ("/* shared */".to_string(), CssSource::Shared)
        );
        assert_eq!(
            s.resolve_css(None),
            ("/* shared */".to_string(), CssSource::Shared)
        );
    }

    #[test]
    fn test_css_falls_back_to_builtin() {
        let dir = tempfile::tempdir().unwrap();
        let (css, source) = store(dir.path()).resolve_css(Some("anything"));
        assert!(css.contains("font-family"));
        assert_eq!(source, CssSource::Builtin);
    }
}
