//! Settings persistence module.
//!
//! Loads and saves user preferences as JSON in `.tastebud/settings.json`.

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::path::Path;

use crate::app::state::{Preferences, Tab};
use crate::core::model::MAX_ENTRY_RATING;

/// Persisted settings that are saved between sessions.
///
/// Values are kept as strings so an unknown or hand-edited value falls back
/// to its default instead of failing the whole file.
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq, Eq)]
#[serde(rename_all = "camelCase", default)]
pub struct PersistedSettings {
    /// Tab shown at startup (`discover`, `diary`, `saved`, `stats`, `profile`).
    pub start_tab: String,
    /// Location shown in the discover header.
    pub location: String,
    /// Name used in the greeting and on the profile card.
    pub display_name: String,
    /// Number of rating icons on the log-food form (`1`..=`5`).
    pub max_rating: String,
}

fn parse_tab(s: &str) -> Tab {
    Tab::from_name(s).unwrap_or_default()
}

fn parse_max_rating(s: &str, default: u8) -> u8 {
    match s.trim().parse::<u8>() {
        Ok(n) if (1..=MAX_ENTRY_RATING).contains(&n) => n,
        _ => default,
    }
}

fn parse_text(s: &str, default: &str) -> String {
    let trimmed = s.trim();
    if trimmed.is_empty() {
        default.to_string()
    } else {
        trimmed.to_string()
    }
}

impl From<&Preferences> for PersistedSettings {
    fn from(prefs: &Preferences) -> Self {
        Self {
            start_tab: prefs.start_tab.name().to_string(),
            location: prefs.location.clone(),
            display_name: prefs.display_name.clone(),
            max_rating: prefs.max_rating.to_string(),
        }
    }
}

impl PersistedSettings {
    /// Applies these settings to `prefs`.
    ///
    /// Every field is parsed on its own; missing or invalid values are
    /// replaced with the defaults.
    pub fn apply_to(&self, prefs: &mut Preferences) {
        let defaults = Preferences::default();
        prefs.start_tab = parse_tab(&self.start_tab);
        prefs.location = parse_text(&self.location, &defaults.location);
        prefs.display_name = parse_text(&self.display_name, &defaults.display_name);
        prefs.max_rating = parse_max_rating(&self.max_rating, defaults.max_rating);
    }
}

/// Loads settings from the specified settings file path.
///
/// If the file doesn't exist, returns default settings.
///
/// # Errors
///
/// Returns an error if the file exists but cannot be read or parsed.
pub fn load_settings(path: &Path) -> Result<PersistedSettings> {
    if !path.exists() {
        return Ok(PersistedSettings::default());
    }

    let content = std::fs::read_to_string(path).context("Failed to read settings file")?;

    serde_json::from_str(&content).context("Failed to parse settings file")
}

/// Saves settings as pretty-printed JSON. The parent directory must exist.
///
/// # Errors
///
/// Returns an error if the file cannot be written.
pub fn save_settings(path: &Path, settings: &PersistedSettings) -> Result<()> {
    let json = serde_json::to_string_pretty(settings).context("Failed to serialize settings")?;

    std::fs::write(path, json).context("Failed to write settings file")
}
