use crate::error::{Result, ResultExt};
use crate::project;
use changelog::{Changelog, HistorySelector, ast_to_object, stringify};
use std::path::Path;

/// Prints one changelog section, raw Markdown or JSON, and nothing when no section matches
pub fn execute(cwd: &Path, today: bool, date: Option<&str>, json: bool) -> Result<()> {
    let dir = project::resolve_dir(cwd)?;
    let settings = project::load_settings(&dir)?;

    let selector = HistorySelector::from_options(today, date, &settings)
        .with_context(|| "Failed to select a changelog entry")?;
    let changelog = Changelog::open_project(&dir, settings)?;

    let entry = changelog.history(&selector);
    if entry.is_empty() {
        log::info!("No changelog entry matches {selector:?}");
        return Ok(());
    }

    if json {
        if let Some(object) = ast_to_object(&entry).first() {
            println!("{}", serde_json::to_string_pretty(object)?);
        }
    } else {
        print!("{}", stringify(&entry));
    }

    Ok(())
}
