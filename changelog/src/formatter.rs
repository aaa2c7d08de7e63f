//! Canonical ordering and spacing of a changelog document.
//!
//! 1. date sections are ordered newest first
//! 2. category sections follow the order configured in [`Settings`]
//! 3. sections end in exactly two newlines and the document in exactly one

use crate::ast::Section;
use crate::config::Settings;
use crate::date::ChangelogDate;
use crate::node::Node;
use std::cmp::Reverse;

/// Trailing newlines after every section
pub const SECTION_TRAILING_NEWLINES: usize = 2;

/// Trailing newlines at the very end of the document
pub const DOCUMENT_TRAILING_NEWLINES: usize = 1;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FormatOptions {
    pub section_newlines: usize,
    pub document_newlines: usize,
}

impl Default for FormatOptions {
    fn default() -> Self {
        Self {
            section_newlines: SECTION_TRAILING_NEWLINES,
            document_newlines: DOCUMENT_TRAILING_NEWLINES,
        }
    }
}

/// Formats `ast` with the default spacing
#[must_use]
pub fn format(settings: &Settings, ast: &[Node]) -> Vec<Node> {
    format_with(settings, ast, FormatOptions::default())
}

/// Sorts dates and categories and normalizes blank lines, returning a new sequence
#[must_use]
pub fn format_with(settings: &Settings, ast: &[Node], options: FormatOptions) -> Vec<Node> {
    let (preamble, sections) = partition(ast);

    let mut blocks: Vec<(Option<ChangelogDate>, Vec<Node>)> = sections
        .into_iter()
        .map(|mut section| {
            let mut categories: Vec<Section> = section
                .subsections
                .into_iter()
                .map(|category| normalize_section(category, options.section_newlines))
                .collect();
            categories.sort_by_key(|category| settings.category_priority(category.label()));
            section.subsections = categories;

            let date = section_date(&section);
            let nodes = correct_to_expected_new_lines(section.into_nodes(), options.section_newlines);
            (date, nodes)
        })
        .collect();

    // stable, so unparseable dates keep their relative order at the end
    blocks.sort_by_key(|(date, _)| Reverse(*date));

    let mut document = Vec::with_capacity(ast.len() + blocks.len());
    if preamble.iter().any(|node| !node.is_space()) {
        document.extend(correct_to_expected_new_lines(
            preamble,
            options.section_newlines,
        ));
    }
    document.extend(blocks.into_iter().flat_map(|(_, nodes)| nodes));

    correct_to_expected_new_lines(document, options.document_newlines)
}

/// Groups a flat sequence into date sections holding category sections
///
/// Nodes before the first date heading are returned separately as the preamble.
fn partition(ast: &[Node]) -> (Vec<Node>, Vec<Section>) {
    let mut preamble = Vec::new();
    let mut sections: Vec<Section> = Vec::new();

    for node in ast {
        if node.is_date_heading() {
            sections.push(Section::new(node.clone()));
            continue;
        }

        let Some(date) = sections.last_mut() else {
            preamble.push(node.clone());
            continue;
        };

        if node.is_category_heading() {
            date.subsections.push(Section::new(node.clone()));
        } else if let Some(category) = date.subsections.last_mut() {
            category.tokens.push(node.clone());
        } else {
            date.tokens.push(node.clone());
        }
    }

    (preamble, sections)
}

fn normalize_section(section: Section, count: usize) -> Section {
    let Section {
        heading,
        tokens,
        subsections,
    } = section;

    let mut nodes = Vec::with_capacity(tokens.len() + 2);
    nodes.push(heading);
    nodes.extend(tokens);
    let mut nodes = correct_to_expected_new_lines(nodes, count);

    // headings are never space nodes, so the first node survives normalization
    let heading = nodes.remove(0);
    Section {
        heading,
        tokens: nodes,
        subsections,
    }
}

fn section_date(section: &Section) -> Option<ChangelogDate> {
    let label = section.label();
    match ChangelogDate::parse(label) {
        Ok(date) => Some(date),
        Err(_) => {
            log::warn!("Date heading '{label}' is not a year.month.day date, sorting it last");
            None
        }
    }
}

/// Makes `nodes` end in exactly `count` newlines
///
/// Trailing space nodes are dropped, then the last remaining node is trimmed
/// when it ends in too many newlines or followed by a new space node when it
/// ends in too few. An empty or all-space sequence becomes empty.
#[must_use]
pub fn correct_to_expected_new_lines(mut nodes: Vec<Node>, count: usize) -> Vec<Node> {
    while nodes.last().is_some_and(Node::is_space) {
        nodes.pop();
    }

    let Some(last) = nodes.last_mut() else {
        return nodes;
    };

    let newlines = last.trailing_newlines();
    if newlines > count {
        let raw = last.raw_mut();
        let keep = raw.len() - (newlines - count);
        raw.truncate(keep);
    } else if newlines < count {
        nodes.push(Node::space("\n".repeat(count - newlines)));
    }

    nodes
}
