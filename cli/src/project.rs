use crate::error::{CliError, Result, ResultExt};
use changelog::Settings;
use changelog::config::SETTINGS_FILE;
use std::path::{Path, PathBuf};

/// Absolute form of the `--cwd` argument
pub fn resolve_dir(cwd: &Path) -> Result<PathBuf> {
    cwd.canonicalize()
        .with_context(|| format!("Cannot access directory {}", cwd.display()))
}

/// Settings of an initialized project
pub fn load_settings(dir: &Path) -> Result<Settings> {
    let settings = Settings::load(dir).with_context(|| format!("Failed to load {SETTINGS_FILE}"))?;
    settings.ok_or_else(|| CliError::NotInitialized(dir.to_path_buf()))
}
