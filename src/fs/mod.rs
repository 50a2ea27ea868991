//! File system operations.

use std::path::{Path, PathBuf};

use anyhow::Context;

pub mod settings;

pub use settings::{PersistedSettings, load_settings, save_settings};

/// Name of the per-directory configuration folder.
pub const TASTEBUD_DIR: &str = ".tastebud";

/// Holds all tastebud-related paths derived from a base directory.
///
/// Tests root this at a temporary directory instead of the working
/// directory.
///
/// # Example
///
/// ```
/// use std::path::Path;
/// use tastebud::fs::TastebudPaths;
///
/// let paths = TastebudPaths::new(Path::new("/tmp/test"));
/// assert_eq!(paths.settings_file(), Path::new("/tmp/test/.tastebud/settings.json"));
/// ```
#[derive(Debug, Clone)]
pub struct TastebudPaths {
    base: PathBuf,
}

impl TastebudPaths {
    /// Creates paths rooted at the given base directory.
    #[must_use]
    pub fn new(base: &Path) -> Self {
        Self {
            base: base.to_path_buf(),
        }
    }

    /// Creates paths rooted at the current working directory.
    ///
    /// # Errors
    ///
    /// Returns an error if the current directory cannot be determined.
    pub fn from_cwd() -> anyhow::Result<Self> {
        let base = std::env::current_dir().context("Failed to get current directory")?;
        Ok(Self { base })
    }

    #[must_use]
    pub fn base(&self) -> &Path {
        &self.base
    }

    /// Returns the `.tastebud` directory path.
    #[must_use]
    pub fn tastebud_dir(&self) -> PathBuf {
        self.base.join(TASTEBUD_DIR)
    }

    /// Returns the settings file path (`.tastebud/settings.json`).
    #[must_use]
    pub fn settings_file(&self) -> PathBuf {
        self.tastebud_dir().join("settings.json")
    }

    /// Returns the log file path (`.tastebud/tastebud.log`).
    #[must_use]
    pub fn log_file(&self) -> PathBuf {
        self.tastebud_dir().join("tastebud.log")
    }

    /// Ensures the `.tastebud` directory exists.
    ///
    /// # Errors
    ///
    /// Returns an error if the directory cannot be created.
    pub fn ensure_tastebud_dir(&self) -> anyhow::Result<()> {
        let dir = self.tastebud_dir();
        if !dir.exists() {
            std::fs::create_dir_all(&dir)
                .with_context(|| format!("Failed to create directory: {}", dir.display()))?;
        }
        Ok(())
    }

    /// Loads settings from the settings file.
    ///
    /// If the file doesn't exist, returns default settings.
    ///
    /// # Errors
    ///
    /// Returns an error if the file exists but cannot be read or parsed.
    pub fn load_settings(&self) -> anyhow::Result<PersistedSettings> {
        load_settings(&self.settings_file())
    }

    /// Saves settings, creating the `.tastebud` directory if needed.
    ///
    /// # Errors
    ///
    /// Returns an error if the directory cannot be created or the file cannot be written.
    pub fn save_settings(&self, settings: &PersistedSettings) -> anyhow::Result<()> {
        self.ensure_tastebud_dir()?;
        save_settings(&self.settings_file(), settings)
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used, clippy::expect_used)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn paths_are_derived_from_base() {
        let paths = TastebudPaths::new(Path::new("/test/base"));

        assert_eq!(paths.base(), Path::new("/test/base"));
        assert_eq!(paths.tastebud_dir(), Path::new("/test/base/.tastebud"));
        assert_eq!(
            paths.settings_file(),
            Path::new("/test/base/.tastebud/settings.json")
        );
        assert_eq!(
            paths.log_file(),
            Path::new("/test/base/.tastebud/tastebud.log")
        );
    }

    #[test]
    fn ensure_tastebud_dir_creates_directory() {
        let temp = TempDir::new().unwrap();
        let paths = TastebudPaths::new(temp.path());

        assert!(!paths.tastebud_dir().exists());
        paths.ensure_tastebud_dir().unwrap();
        assert!(paths.tastebud_dir().exists());
    }

    #[test]
    fn save_creates_directory_and_load_reads_back() {
        let temp = TempDir::new().unwrap();
        let paths = TastebudPaths::new(temp.path());

        let settings = PersistedSettings {
            start_tab: "saved".to_string(),
            location: "Brooklyn, NY".to_string(),
            display_name: "Sam".to_string(),
            max_rating: "5".to_string(),
        };

        paths.save_settings(&settings).unwrap();
        assert!(paths.settings_file().exists());
        assert_eq!(paths.load_settings().unwrap(), settings);
    }

    #[test]
    fn missing_settings_file_loads_defaults() {
        let temp = TempDir::new().unwrap();
        let paths = TastebudPaths::new(temp.path());
        assert_eq!(paths.load_settings().unwrap(), PersistedSettings::default());
    }
}
