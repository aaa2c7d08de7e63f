use crate::error::Result;
use crate::project;
use crate::ui;
use changelog::{ChangeEntry, Changelog, HistorySelector, Settings, stringify};
use dialoguer::theme::ColorfulTheme;
use dialoguer::{Confirm, Input, Select};
use std::path::Path;

fn prompt_category(theme: &ColorfulTheme, settings: &Settings) -> Result<String> {
    let index = Select::with_theme(theme)
        .with_prompt("What type of change is this?")
        .items(&settings.change_categories)
        .default(0)
        .interact()?;

    Ok(settings.change_categories[index].clone())
}

fn prompt_change(theme: &ColorfulTheme) -> Result<String> {
    let change: String = Input::with_theme(theme)
        .with_prompt("Enter your change")
        .validate_with(|input: &String| {
            if input.trim().is_empty() {
                Err("The change cannot be empty")
            } else {
                Ok(())
            }
        })
        .interact_text()?;

    Ok(change)
}

fn confirm(theme: &ColorfulTheme, prompt: &str, default: bool) -> Result<bool> {
    Ok(Confirm::with_theme(theme)
        .with_prompt(prompt)
        .default(default)
        .interact()?)
}

/// Prompts for changes until the user is happy, writing each accepted one
pub fn execute(
    cwd: &Path,
    change: Option<String>,
    category: Option<String>,
    yes: bool,
) -> Result<()> {
    ui::section_header("changy add");

    let dir = project::resolve_dir(cwd)?;
    let settings = project::load_settings(&dir)?;
    let theme = ColorfulTheme::default();
    let mut change = change;

    loop {
        let mut changelog = Changelog::open_project(&dir, settings.clone())?;
        let today = changelog.today()?;

        let category = match &category {
            Some(category) => category.clone(),
            None => prompt_category(&theme, &settings)?,
        };
        let text = match change.take() {
            Some(text) => text,
            None => prompt_change(&theme)?,
        };

        changelog.add_change(&ChangeEntry::new(category, text), today)?;

        let preview = changelog.history(&HistorySelector::Date(today.to_string()));
        ui::render_markdown(&stringify(&preview));
        println!();

        if !yes && !confirm(&theme, "Is this your desired changelog?", true)? {
            ui::warning_message("Discarded, let's try again");
            continue;
        }

        changelog.save()?;
        ui::success_message(&format!("Added to {}", settings.path));

        if yes || !confirm(&theme, "Add more changes?", false)? {
            break;
        }
    }

    ui::success_message("All done!");
    Ok(())
}
