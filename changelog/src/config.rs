use crate::error::ChangelogError;
use crate::types::Result;
use crate::utils::DEFAULT_CHANGE_CATEGORIES;
use chrono_tz::Tz;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

/// Name of the per-project settings file
pub const SETTINGS_FILE: &str = ".changyrc";

pub const DEFAULT_CHANGELOG_PATH: &str = "CHANGELOG.md";

pub const DEFAULT_TIMEZONE: &str = "UTC";

/// Per-project configuration, persisted as JSON in [`SETTINGS_FILE`]
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Settings {
    /// Changelog location, relative to the project directory
    #[serde(default = "default_path")]
    pub path: String,
    /// IANA time zone used to date new entries
    pub timezone: String,
    /// Category headings in the order they are sorted
    pub change_categories: Vec<String>,
}

fn default_path() -> String {
    DEFAULT_CHANGELOG_PATH.to_string()
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            path: default_path(),
            timezone: DEFAULT_TIMEZONE.to_string(),
            change_categories: DEFAULT_CHANGE_CATEGORIES.clone(),
        }
    }
}

impl Settings {
    #[must_use]
    pub fn settings_path(dir: &Path) -> PathBuf {
        dir.join(SETTINGS_FILE)
    }

    /// Checks the time zone and the category list
    ///
    /// # Errors
    /// Returns `InvalidSettings` describing the first problem found
    pub fn validate(&self) -> Result<()> {
        self.time_zone()?;

        if self.change_categories.is_empty() {
            return Err(ChangelogError::InvalidSettings(
                "changeCategories must contain at least one category".to_string(),
            ));
        }

        if let Some(pos) = self
            .change_categories
            .iter()
            .position(|c| c.trim().is_empty())
        {
            return Err(ChangelogError::InvalidSettings(format!(
                "changeCategories[{pos}] is blank"
            )));
        }

        if self.path.trim().is_empty() {
            return Err(ChangelogError::InvalidSettings(
                "path must not be empty".to_string(),
            ));
        }

        Ok(())
    }

    /// The configured time zone
    ///
    /// # Errors
    /// Returns `InvalidSettings` when the name is not a known IANA zone
    pub fn time_zone(&self) -> Result<Tz> {
        self.timezone.parse::<Tz>().map_err(|_| {
            ChangelogError::InvalidSettings(format!(
                "'{}' is not a valid IANA time zone",
                self.timezone
            ))
        })
    }

    /// Location of the changelog file for a project rooted at `dir`
    #[must_use]
    pub fn changelog_path(&self, dir: &Path) -> PathBuf {
        dir.join(&self.path)
    }

    /// Loads and validates the settings of the project rooted at `dir`
    ///
    /// Returns `Ok(None)` when the project has not been initialized.
    ///
    /// # Errors
    /// Returns an error if the file cannot be read, parsed or validated
    pub fn load(dir: &Path) -> Result<Option<Self>> {
        let path = Self::settings_path(dir);
        if !path.exists() {
            return Ok(None);
        }

        let content = fs::read_to_string(&path)?;
        let settings: Self = serde_json::from_str(&content).map_err(|e| {
            ChangelogError::SettingsFormat(e)
                .with_operation_context("load settings", Some(path.display().to_string()))
        })?;
        settings.validate()?;

        log::debug!("Loaded settings from {}", path.display());
        Ok(Some(settings))
    }

    /// Writes the settings of a new project rooted at `dir`
    ///
    /// # Errors
    /// Returns `AlreadyInitialized` if a settings file exists, or any validation or IO error
    pub fn save(&self, dir: &Path) -> Result<PathBuf> {
        let path = Self::settings_path(dir);
        if path.exists() {
            return Err(ChangelogError::AlreadyInitialized(path));
        }
        self.validate()?;

        let mut buffer = Vec::new();
        let formatter = serde_json::ser::PrettyFormatter::with_indent(b"    ");
        let mut serializer = serde_json::Serializer::with_formatter(&mut buffer, formatter);
        self.serialize(&mut serializer)?;
        fs::write(&path, buffer)?;

        log::debug!("Wrote settings to {}", path.display());
        Ok(path)
    }

    /// Position of `category` in the configured order, or the list length when absent
    #[must_use]
    pub fn category_priority(&self, category: &str) -> usize {
        self.change_categories
            .iter()
            .position(|c| c == category)
            .unwrap_or(self.change_categories.len())
    }
}
