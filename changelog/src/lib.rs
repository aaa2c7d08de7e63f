//! Date-keyed changelog documents.
//!
//! A changelog is a Markdown file of `# year.month.day` sections, each holding
//! `## Category` sections with a bullet list of changes. The document is kept
//! as a flat sequence of [`Node`]s so untouched text round-trips byte for byte.

pub mod ast;
pub mod config;
pub mod core;
pub mod date;
pub mod error;
pub mod formatter;
pub mod history;
pub mod merge;
pub mod node;
pub mod parser;
pub mod projector;
pub mod types;
pub mod utils;

pub use crate::ast::{Section, flatten, stringify, strip_heading_markup};
pub use crate::config::{SETTINGS_FILE, Settings};
pub use crate::core::Changelog;
pub use crate::date::ChangelogDate;
pub use crate::error::ChangelogError;
pub use crate::formatter::{FormatOptions, correct_to_expected_new_lines, format, format_with};
pub use crate::history::{HistorySelector, get_history};
pub use crate::merge::{InsertionPoint, add_change, locate};
pub use crate::node::{Heading, List, ListItem, Node};
pub use crate::parser::tokenize;
pub use crate::projector::ast_to_object;
pub use crate::types::{Categories, ChangeEntry, ChangelogEntry, Result};
