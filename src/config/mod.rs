//! Configuration module
//!
//! Settings come from built-in defaults, an optional YAML file, a `.env`
//! file and environment variables, in increasing order of precedence.

mod settings;

pub use settings::*;

use anyhow::Result;
use std::path::{Path, PathBuf};
use tracing::{info, warn};

/// Environment variable naming an explicit settings file
pub const SETTINGS_PATH_VAR: &str = "INTEREST_PROXY_SETTINGS_PATH";

/// Load settings from the first settings file found, then apply the environment
pub fn load() -> Result<Settings> {
    let mut settings = match find_settings_file() {
        Some(path) => {
            info!("Loading settings from: {}", path.display());
            Settings::from_file(&path)?
        }
        None => {
            info!("No settings file found, using defaults");
            Settings::default()
        }
    };
    settings.merge_env();
    Ok(settings)
}

/// Load `.env` from the working directory or one of its parents.
///
/// Variables already present in the process environment are left alone.
pub fn load_dotenv() -> Option<PathBuf> {
    report_dotenv(dotenvy::dotenv())
}

/// Load a specific `.env` file, leaving existing variables alone
pub fn load_dotenv_from<P: AsRef<Path>>(path: P) -> Option<PathBuf> {
    let path = path.as_ref();
    report_dotenv(dotenvy::from_path(path).map(|_| path.to_path_buf()))
}

fn report_dotenv(result: dotenvy::Result<PathBuf>) -> Option<PathBuf> {
    match result {
        Ok(path) => {
            info!("Loaded environment from: {}", path.display());
            Some(path)
        }
        Err(e) if e.not_found() => None,
        Err(e) => {
            warn!("Ignoring unreadable .env file: {}", e);
            None
        }
    }
}

fn find_settings_file() -> Option<PathBuf> {
    if let Ok(path) = std::env::var(SETTINGS_PATH_VAR) {
        let path = PathBuf::from(path);
        if path.exists() {
            return Some(path);
        }
    }

    let mut candidates = vec![
        PathBuf::from("settings.yml"),
        PathBuf::from("config/settings.yml"),
    ];
    if let Some(dir) = dirs::config_dir() {
        candidates.push(dir.join("interest-proxy/settings.yml"));
    }

    candidates.into_iter().find(|p| p.exists())
}
