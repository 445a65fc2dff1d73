//! Persisted split settings (`<cache dir>/.splitpane/settings.json`).

use crate::split::config::SplitConfig;
use crate::split::view::DEFAULT_KEYBOARD_STEP;
use serde::{Deserialize, Serialize};
use std::io;
use std::path::{Path, PathBuf};

const SETTINGS_DIR: &str = ".splitpane";
const SETTINGS_FILE: &str = "settings.json";
const LOG_DIR: &str = "logs";

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Settings {
    #[serde(default)]
    pub split: SplitConfig,
    #[serde(default = "default_keyboard_step")]
    pub keyboard_step: f32,
}

fn default_keyboard_step() -> f32 {
    DEFAULT_KEYBOARD_STEP
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            split: SplitConfig::default(),
            keyboard_step: DEFAULT_KEYBOARD_STEP,
        }
    }
}

pub fn get_settings_path() -> Option<PathBuf> {
    get_cache_dir().map(|dir| dir.join(SETTINGS_DIR).join(SETTINGS_FILE))
}

pub fn get_log_dir() -> Option<PathBuf> {
    get_cache_dir().map(|dir| dir.join(SETTINGS_DIR).join(LOG_DIR))
}

pub fn ensure_settings_file() -> io::Result<PathBuf> {
    let path = get_settings_path().ok_or_else(|| {
        io::Error::new(
            io::ErrorKind::NotFound,
            "Cannot determine settings directory",
        )
    })?;
    write_default_settings(&path)?;
    Ok(path)
}

/// Write default settings to `path` unless a file already exists there.
pub fn write_default_settings(path: &Path) -> io::Result<()> {
    if path.exists() {
        return Ok(());
    }
    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent)?;
    }
    let content = serde_json::to_string_pretty(&Settings::default())
        .map_err(|e| io::Error::new(io::ErrorKind::InvalidData, e))?;
    std::fs::write(path, content)
}

pub fn ensure_log_dir() -> io::Result<PathBuf> {
    let dir = get_log_dir().ok_or_else(|| {
        io::Error::new(io::ErrorKind::NotFound, "Cannot determine log directory")
    })?;
    std::fs::create_dir_all(&dir)?;
    Ok(dir)
}

pub fn load_settings() -> Option<Settings> {
    let path = get_settings_path()?;
    match load_settings_from(&path) {
        Ok(settings) => Some(settings),
        Err(err) if err.kind() == io::ErrorKind::NotFound => None,
        Err(err) => {
            tracing::warn!(path = %path.display(), error = %err, "ignoring unreadable settings");
            None
        }
    }
}

pub fn load_settings_from(path: impl AsRef<Path>) -> io::Result<Settings> {
    let data = std::fs::read_to_string(path)?;
    serde_json::from_str(&data).map_err(|e| io::Error::new(io::ErrorKind::InvalidData, e))
}

fn get_cache_dir() -> Option<PathBuf> {
    #[cfg(target_os = "macos")]
    {
        return std::env::var("HOME")
            .ok()
            .map(|home| PathBuf::from(home).join("Library/Caches"));
    }

    #[cfg(target_os = "linux")]
    {
        if let Ok(xdg) = std::env::var("XDG_CACHE_HOME") {
            return Some(PathBuf::from(xdg));
        }
        return std::env::var("HOME")
            .ok()
            .map(|home| PathBuf::from(home).join(".cache"));
    }

    #[cfg(target_os = "windows")]
    {
        if let Ok(local) = std::env::var("LOCALAPPDATA") {
            return Some(PathBuf::from(local));
        }
        return std::env::var("APPDATA").ok().map(PathBuf::from);
    }

    #[cfg(not(any(target_os = "macos", target_os = "linux", target_os = "windows")))]
    {
        None
    }
}

#[cfg(test)]
#[path = "../tests/unit/settings.rs"]
mod tests;
