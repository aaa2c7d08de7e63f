use crate::error::{Result, ResultExt};
use crate::project;
use crate::ui;
use changelog::Settings;
use changelog::utils::DEFAULT_CHANGE_CATEGORIES;
use std::path::Path;

pub fn execute(
    cwd: &Path,
    timezone: String,
    path: String,
    change_categories: Option<Vec<String>>,
) -> Result<()> {
    ui::section_header("changy init");

    let dir = project::resolve_dir(cwd)?;
    let settings = Settings {
        path,
        timezone,
        change_categories: change_categories.unwrap_or_else(|| DEFAULT_CHANGE_CATEGORIES.clone()),
    };

    let written = settings
        .save(&dir)
        .with_context(|| "Failed to initialize changy")?;
    log::debug!("Settings: {settings:?}");

    ui::success_message(&format!("Wrote {}", written.display()));
    ui::info_message(&format!(
        "Entries will be dated in {} and written to {}",
        settings.timezone, settings.path
    ));
    ui::success_message("Completed initialization");
    Ok(())
}
