use crate::ast::stringify;
use crate::config::Settings;
use crate::date::ChangelogDate;
use crate::error::ChangelogError;
use crate::formatter::format;
use crate::history::{HistorySelector, get_history};
use crate::merge::add_change;
use crate::node::Node;
use crate::parser::tokenize;
use crate::projector::ast_to_object;
use crate::types::{ChangeEntry, ChangelogEntry, Result};
use std::fs;
use std::path::{Path, PathBuf};

/// A changelog file held as its node sequence
#[derive(Debug, Clone)]
pub struct Changelog {
    path: PathBuf,
    nodes: Vec<Node>,
    settings: Settings,
}

impl Changelog {
    /// Reads and tokenizes the changelog at `path`
    ///
    /// A missing file is treated as an empty changelog; it is created on [`save`](Self::save).
    ///
    /// # Errors
    /// Returns error if the file exists but cannot be read
    pub fn open(path: impl Into<PathBuf>, settings: Settings) -> Result<Self> {
        let path = path.into();

        let content = if path.exists() {
            fs::read_to_string(&path).map_err(|e| {
                ChangelogError::ReadError(e)
                    .with_operation_context("read changelog", Some(path.display().to_string()))
            })?
        } else {
            log::debug!("{} does not exist yet, starting empty", path.display());
            String::new()
        };

        Ok(Self::parse(path, &content, settings))
    }

    /// Builds a changelog from in-memory Markdown that will be saved to `path`
    pub fn parse(path: impl Into<PathBuf>, content: &str, settings: Settings) -> Self {
        Self {
            path: path.into(),
            nodes: tokenize(content),
            settings,
        }
    }

    /// Opens the changelog configured for the project rooted at `dir`
    ///
    /// # Errors
    /// Returns error if the changelog cannot be read
    pub fn open_project(dir: &Path, settings: Settings) -> Result<Self> {
        let path = settings.changelog_path(dir);
        Self::open(path, settings)
    }

    #[must_use]
    pub fn path(&self) -> &Path {
        &self.path
    }

    #[must_use]
    pub fn nodes(&self) -> &[Node] {
        &self.nodes
    }

    #[must_use]
    pub const fn settings(&self) -> &Settings {
        &self.settings
    }

    /// Merges `entry` into the section for `date`
    ///
    /// On error the document is left exactly as it was.
    ///
    /// # Errors
    /// Returns error if the entry is blank or the document is malformed around the target category
    pub fn add_change(&mut self, entry: &ChangeEntry, date: ChangelogDate) -> Result<()> {
        self.nodes = add_change(entry, &date.to_string(), &self.settings, &self.nodes)?;
        Ok(())
    }

    /// Today's date in the configured time zone
    ///
    /// # Errors
    /// Returns error if the configured time zone is invalid
    pub fn today(&self) -> Result<ChangelogDate> {
        Ok(ChangelogDate::today(self.settings.time_zone()?))
    }

    /// Puts the document into canonical order and spacing
    pub fn format(&mut self) {
        self.nodes = format(&self.settings, &self.nodes);
    }

    /// The selected date section, empty when nothing matches
    #[must_use]
    pub fn history(&self, selector: &HistorySelector) -> Vec<Node> {
        get_history(&self.nodes, selector, &self.settings)
    }

    /// Every date section of the formatted document as plain records
    #[must_use]
    pub fn entries(&self) -> Vec<ChangelogEntry> {
        ast_to_object(&format(&self.settings, &self.nodes))
    }

    #[must_use]
    pub fn to_markdown(&self) -> String {
        stringify(&self.nodes)
    }

    /// Writes the document back to its path
    ///
    /// # Errors
    /// Returns error if the file cannot be written
    pub fn save(&self) -> Result<()> {
        fs::write(&self.path, self.to_markdown()).map_err(|e| {
            ChangelogError::ReadError(e)
                .with_operation_context("write changelog", Some(self.path.display().to_string()))
        })?;

        log::debug!("Wrote {}", self.path.display());
        Ok(())
    }
}
