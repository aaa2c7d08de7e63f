use std::fmt::{self, Display, Formatter};
use std::path::PathBuf;
use thiserror::Error;

/// Error context to enrich error messages
#[derive(Debug)]
pub struct ErrorContext {
    pub operation: String,
    pub source: Option<String>,
}

impl Display for ErrorContext {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "Operation: {}", self.operation)?;
        if let Some(source) = &self.source {
            write!(f, " (source: {})", source)?;
        }
        Ok(())
    }
}

/// Errors that can occur when working with changelogs
#[derive(Error, Debug)]
pub enum ChangelogError {
    #[error("Failed to read or write changelog file: {0}")]
    ReadError(#[from] std::io::Error),

    #[error("Failed to encode or decode settings: {0}")]
    SettingsFormat(#[from] serde_json::Error),

    #[error("Invalid settings: {0}")]
    InvalidSettings(String),

    #[error("Settings file already exists at {}", .0.display())]
    AlreadyInitialized(PathBuf),

    #[error("Invalid date label: {0}")]
    InvalidDate(String),

    #[error("Category '{category}' under {date} is not followed by a list")]
    MissingList { date: String, category: String },

    #[error("Empty {0} supplied")]
    EmptyEntry(&'static str),

    #[error("{0}: {1}")]
    WithContext(String, Box<ChangelogError>),

    #[error("{context}: {source}")]
    ContextualError {
        context: ErrorContext,
        source: Box<ChangelogError>,
    },
}

impl ChangelogError {
    #[must_use]
    pub fn with_context<C: Into<String>>(self, context: C) -> Self {
        Self::WithContext(context.into(), Box::new(self))
    }

    #[must_use]
    pub fn with_operation_context(
        self,
        operation: impl Into<String>,
        source: Option<impl Into<String>>,
    ) -> Self {
        Self::ContextualError {
            context: ErrorContext {
                operation: operation.into(),
                source: source.map(Into::into),
            },
            source: Box::new(self),
        }
    }

    #[must_use]
    pub fn user_message(&self) -> String {
        match self {
            Self::ReadError(e) => format!("File operation failed: {e}"),
            Self::SettingsFormat(e) => format!("Settings file is not valid JSON: {e}"),
            Self::InvalidSettings(msg) => format!("Invalid settings: {msg}"),
            Self::AlreadyInitialized(path) => {
                format!("Already initialized ({} exists)", path.display())
            }
            Self::InvalidDate(label) => {
                format!("Invalid date '{label}', expected the format year.month.day")
            }
            Self::MissingList { date, category } => format!(
                "Malformed changelog: the '{category}' heading under {date} must be followed by a list"
            ),
            Self::EmptyEntry(field) => format!("The {field} cannot be empty"),
            Self::WithContext(ctx, err) => format!("{ctx}: {}", err.user_message()),
            Self::ContextualError { context, source } => {
                format!("{}: {}", context, source.user_message())
            }
        }
    }
}
