//! Block-level document nodes.
//!
//! A changelog is held as a flat, ordered sequence of [`Node`]s. Every node
//! carries the exact source text it was lexed from (`raw`), so concatenating
//! the raws of a sequence reproduces the document byte for byte.

/// Heading depth used for date sections (`# 2024.8.13`)
pub const DATE_DEPTH: u8 = 1;

/// Heading depth used for category sections (`## Added`)
pub const CATEGORY_DEPTH: u8 = 2;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Heading {
    pub depth: u8,
    /// Label with the heading markup removed
    pub text: String,
    pub raw: String,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ListItem {
    pub raw: String,
    /// Item content without its bullet marker
    pub text: String,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct List {
    pub raw: String,
    pub items: Vec<ListItem>,
}

/// One block of a changelog document
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Node {
    Heading(Heading),
    List(List),
    /// A run of blank lines
    Space { raw: String },
    /// Paragraphs, code blocks and anything else passed through untouched
    Other { raw: String },
}

impl Node {
    pub fn space(raw: impl Into<String>) -> Self {
        Self::Space { raw: raw.into() }
    }

    pub fn other(raw: impl Into<String>) -> Self {
        Self::Other { raw: raw.into() }
    }

    #[must_use]
    pub fn raw(&self) -> &str {
        match self {
            Self::Heading(heading) => &heading.raw,
            Self::List(list) => &list.raw,
            Self::Space { raw } | Self::Other { raw } => raw,
        }
    }

    pub fn raw_mut(&mut self) -> &mut String {
        match self {
            Self::Heading(heading) => &mut heading.raw,
            Self::List(list) => &mut list.raw,
            Self::Space { raw } | Self::Other { raw } => raw,
        }
    }

    #[must_use]
    pub const fn is_space(&self) -> bool {
        matches!(self, Self::Space { .. })
    }

    #[must_use]
    pub fn heading(&self) -> Option<&Heading> {
        match self {
            Self::Heading(heading) => Some(heading),
            _ => None,
        }
    }

    /// True for a depth-1 heading, the start of a date section
    #[must_use]
    pub fn is_date_heading(&self) -> bool {
        self.heading().is_some_and(|h| h.depth == DATE_DEPTH)
    }

    /// True for a depth-2 heading, the start of a category section
    #[must_use]
    pub fn is_category_heading(&self) -> bool {
        self.heading().is_some_and(|h| h.depth == CATEGORY_DEPTH)
    }

    /// Number of consecutive `\n` characters the raw form ends with
    #[must_use]
    pub fn trailing_newlines(&self) -> usize {
        self.raw().bytes().rev().take_while(|b| *b == b'\n').count()
    }
}
