use crate::error::Result;
use crate::project;
use crate::ui;
use changelog::Changelog;
use std::path::Path;

pub fn execute(cwd: &Path) -> Result<()> {
    let dir = project::resolve_dir(cwd)?;
    let settings = project::load_settings(&dir)?;

    let mut changelog = Changelog::open_project(&dir, settings)?;
    let before = changelog.to_markdown();
    changelog.format();

    if changelog.to_markdown() == before {
        ui::info_message(&format!("{} is already formatted", changelog.path().display()));
        return Ok(());
    }

    changelog.save()?;
    ui::success_message(&format!("Formatted {}", changelog.path().display()));
    Ok(())
}
