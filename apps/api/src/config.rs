use std::path::PathBuf;

use anyhow::{Context, Result};

/// Application configuration loaded from environment variables.
#[derive(Debug, Clone)]
pub struct Config {
    /// Directory holding `profile.json` and `sections/`.
    pub profile_dir: PathBuf,
    /// Directory of `{name}.json` preset files.
    pub presets_dir: PathBuf,
    /// Directory of resume stylesheets.
    pub templates_dir: PathBuf,
    /// Base URL of the HTML→PDF converter service.
    pub converter_url: String,
    pub port: u16,
    pub rust_log: String,
}

impl Config {
    pub fn from_env() -> Result<Self> {
        dotenvy::dotenv().ok(); // load .env if present; ignore if missing

        Ok(Config {
            profile_dir: PathBuf::from(require_env("PROFILE_DIR")?),
            presets_dir: env_or("PRESETS_DIR", "data/presets").into(),
            templates_dir: env_or("TEMPLATES_DIR", "templates").into(),
            converter_url: env_or("CONVERTER_URL", "http://localhost:3000"),
            port: std::env::var("PORT")
                .unwrap_or_else(|_| "8080".to_string())
                .parse::<u16>()
                .context("PORT must be a valid port number")?,
            rust_log: std::env::var("RUST_LOG").unwrap_or_else(|_| "info".to_string()),
        })
    }
}

fn require_env(key: &str) -> Result<String> {
    std::env::var(key).with_context(|| format!("Required environment variable '{key}' is not set"))
}

fn env_or(key: &str, default: &str) -> String {
    std::env::var(key).unwrap_or_else(|_| default.to_string())
}
