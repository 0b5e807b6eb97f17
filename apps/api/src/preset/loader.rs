//! Preset loading. A missing or malformed preset file is never an error for
//! the caller — it logs a warning and the pipeline falls back to raw data.

use std::path::Path;

use tracing::warn;

use crate::models::preset::Preset;

/// Reads `{presets_dir}/{name}.json`. Returns `None` (logged) when the file
/// is missing or fails to parse.
pub fn load_preset(presets_dir: &Path, name: &str) -> Option<Preset> {
    let path = presets_dir.join(format!("{name}.json"));
    let raw = match std::fs::read_to_string(&path) {
        Ok(raw) => raw,
        Err(e) => {
            warn!("Preset '{name}' not found at {}: {e}", path.display());
            return None;
        }
    };
    match serde_json::from_str(&raw) {
        Ok(preset) => Some(preset),
        Err(e) => {
            warn!("Preset '{name}' is malformed: {e}");
            None
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_load_preset_from_disk() {
        let dir = tempfile::tempdir().unwrap();
        std::fs::write(
            dir.path().join("one-page.json"),
            r#"{"meta": {"name": "one-page"}, "overrides": {"objective": "Ship"}}"#,
        )
        .unwrap();

        let preset = load_preset(dir.path(), "one-page").unwrap();
        assert_eq!(preset.overrides.objective.as_deref(), Some("Ship"));
    }

    #[test]
    fn test_missing_preset_returns_none() {
        let dir = tempfile::tempdir().unwrap();
        assert!(load_preset(dir.path(), "nope").is_none());
    }

    #[test]
    fn test_malformed_preset_returns_none() {
        let dir = tempfile::tempdir().unwrap();
        std::fs::write(dir.path().join("broken.json"), "{not json").unwrap();
        assert!(load_preset(dir.path(), "broken").is_none());
    }
}
