//! Inserting a single change into a changelog document.
//!
//! The document is scanned once by a small state machine that decides where
//! the change goes. The merged sequence is then built from copies of the
//! input nodes and passed through the formatter.

use crate::config::Settings;
use crate::error::ChangelogError;
use crate::formatter::format;
use crate::node::{List, ListItem, Node};
use crate::parser::tokenize;
use crate::types::{ChangeEntry, Result};

/// Where a change lands in the document
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InsertionPoint {
    /// No section for the date exists yet; it goes before index `at`, the first date heading
    NewDate { at: usize },
    /// The date exists without the category; a new category section goes before index `at`
    NewCategory { at: usize },
    /// The change is appended to the list at index `at`
    AppendToList { at: usize },
    /// The category heading at index `heading` is not followed by a list
    MissingList { heading: usize },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum ScanState {
    Seeking { first_date: Option<usize> },
    InDate,
    InCategory { heading: usize },
    Done(InsertionPoint),
}

struct Target<'a> {
    date: &'a str,
    category: &'a str,
}

impl Target<'_> {
    fn is_date(&self, node: &Node) -> bool {
        node.is_date_heading() && node.heading().is_some_and(|h| h.text == self.date)
    }

    fn is_category(&self, node: &Node) -> bool {
        node.is_category_heading() && node.heading().is_some_and(|h| h.text == self.category)
    }
}

fn step(state: ScanState, index: usize, node: &Node, target: &Target<'_>) -> ScanState {
    match state {
        ScanState::Seeking { .. } if target.is_date(node) => ScanState::InDate,
        ScanState::Seeking { first_date: None } if node.is_date_heading() => ScanState::Seeking {
            first_date: Some(index),
        },
        ScanState::InDate if node.is_date_heading() => {
            ScanState::Done(InsertionPoint::NewCategory { at: index })
        }
        ScanState::InDate if target.is_category(node) => ScanState::InCategory { heading: index },
        ScanState::InCategory { heading } => match node {
            Node::List(_) => ScanState::Done(InsertionPoint::AppendToList { at: index }),
            _ => ScanState::Done(InsertionPoint::MissingList { heading }),
        },
        other => other,
    }
}

fn finish(state: ScanState, len: usize) -> InsertionPoint {
    match state {
        ScanState::Seeking { first_date } => InsertionPoint::NewDate {
            at: first_date.unwrap_or(len),
        },
        ScanState::InDate => InsertionPoint::NewCategory { at: len },
        ScanState::InCategory { heading } => InsertionPoint::MissingList { heading },
        ScanState::Done(point) => point,
    }
}

/// Finds where a change for `category` under `date` belongs in `ast`
#[must_use]
pub fn locate(ast: &[Node], date: &str, category: &str) -> InsertionPoint {
    let target = Target { date, category };
    let mut state = ScanState::Seeking { first_date: None };

    for (index, node) in ast.iter().enumerate() {
        state = step(state, index, node, &target);
        if let ScanState::Done(point) = state {
            return point;
        }
    }

    finish(state, ast.len())
}

/// Adds `entry` under the `formatted_date` section of `ast` and returns the formatted result
///
/// `ast` is never modified. Categories missing from the settings are accepted
/// and sort after the configured ones.
///
/// # Errors
/// Returns `EmptyEntry` for a blank category or change and `MissingList`
/// when the matching category heading is not followed by a list
pub fn add_change(
    entry: &ChangeEntry,
    formatted_date: &str,
    settings: &Settings,
    ast: &[Node],
) -> Result<Vec<Node>> {
    let category = entry.category.trim();
    if category.is_empty() {
        return Err(ChangelogError::EmptyEntry("category"));
    }
    let change = entry.change.as_str();
    if change.trim().is_empty() {
        return Err(ChangelogError::EmptyEntry("change"));
    }

    let merged = match locate(ast, formatted_date, category) {
        InsertionPoint::NewDate { at } => {
            log::debug!("Creating section for {formatted_date}");
            splice(
                ast,
                at,
                tokenize(&format!(
                    "# {formatted_date}\n\n## {category}\n\n- {change}\n\n"
                )),
            )
        }
        InsertionPoint::NewCategory { at } => {
            log::debug!("Creating category '{category}' under {formatted_date}");
            splice(
                ast,
                at,
                tokenize(&format!("## {category}\n\n- {change}\n\n")),
            )
        }
        InsertionPoint::AppendToList { at } => {
            log::debug!("Appending to '{category}' under {formatted_date}");
            ast.iter()
                .enumerate()
                .map(|(index, node)| match node {
                    Node::List(list) if index == at => Node::List(with_item(list, change)),
                    _ => node.clone(),
                })
                .collect()
        }
        InsertionPoint::MissingList { heading } => {
            log::warn!(
                "Category heading '{}' under {formatted_date} is not followed by a list, leaving the changelog untouched",
                ast[heading].raw().trim()
            );
            return Err(ChangelogError::MissingList {
                date: formatted_date.to_string(),
                category: category.to_string(),
            });
        }
    };

    Ok(format(settings, &merged))
}

fn splice(ast: &[Node], at: usize, inserted: Vec<Node>) -> Vec<Node> {
    let mut nodes = Vec::with_capacity(ast.len() + inserted.len());
    nodes.extend_from_slice(&ast[..at]);
    nodes.extend(inserted);
    nodes.extend_from_slice(&ast[at..]);
    nodes
}

fn with_item(list: &List, change: &str) -> List {
    let mut raw = list.raw.trim_end().to_string();
    raw.push_str("\n- ");
    raw.push_str(change);

    let mut items = list.items.clone();
    items.push(ListItem {
        raw: format!("- {change}"),
        text: change.to_string(),
    });

    List { raw, items }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ast::stringify;

    fn settings() -> Settings {
        Settings {
            change_categories: vec!["Added".into(), "Changed".into(), "Fixed".into()],
            ..Settings::default()
        }
    }

    fn raws(nodes: &[Node]) -> Vec<&str> {
        nodes.iter().map(Node::raw).collect()
    }

    fn add(category: &str, change: &str, date: &str, markdown: &str) -> Result<Vec<Node>> {
        add_change(
            &ChangeEntry::new(category, change),
            date,
            &settings(),
            &tokenize(markdown),
        )
    }

    #[test]
    fn test_add_fresh() {
        let nodes = add("Added", "My addition", "2024.8.13", "").unwrap();

        assert_eq!(
            raws(&nodes),
            vec!["# 2024.8.13\n\n", "## Added\n\n", "- My addition", "\n"]
        );
    }

    #[test]
    fn test_add_new_category() {
        let nodes = add(
            "Changed",
            "My change",
            "2024.8.13",
            "# 2024.8.13\n\n## Added\n\n- My addition\n",
        )
        .unwrap();

        assert_eq!(
            raws(&nodes),
            vec![
                "# 2024.8.13\n\n",
                "## Added\n\n",
                "- My addition\n",
                "\n",
                "## Changed\n\n",
                "- My change",
                "\n",
            ]
        );
    }

    #[test]
    fn test_add_new_date() {
        let nodes = add(
            "Added",
            "My addition",
            "2024.8.14",
            "# 2024.8.13\n\n## Added\n\n- My addition\n",
        )
        .unwrap();

        assert_eq!(
            raws(&nodes),
            vec![
                "# 2024.8.14\n\n",
                "## Added\n\n",
                "- My addition",
                "\n\n",
                "# 2024.8.13\n\n",
                "## Added\n\n",
                "- My addition\n",
            ]
        );
    }

    #[test]
    fn test_add_to_existing_list() {
        let nodes = add(
            "Added",
            "My second addition",
            "2024.8.13",
            "# 2024.8.13\n\n## Added\n\n- My addition\n",
        )
        .unwrap();

        assert_eq!(
            stringify(&nodes),
            "# 2024.8.13\n\n## Added\n\n- My addition\n- My second addition\n"
        );
        let Node::List(list) = &nodes[2] else {
            panic!("expected a list, got {:?}", nodes[2]);
        };
        let texts: Vec<&str> = list.items.iter().map(|i| i.text.as_str()).collect();
        assert_eq!(texts, vec!["My addition", "My second addition"]);
    }

    #[test]
    fn test_add_into_middle_date() {
        let markdown = "# 2024.8.14\n\n## Added\n\n- A\n\n# 2024.8.13\n\n## Added\n\n- B\n\n# 2024.8.12\n\n## Added\n\n- C\n";

        let nodes = add("Fixed", "F", "2024.8.13", markdown).unwrap();
        assert_eq!(
            stringify(&nodes),
            "# 2024.8.14\n\n## Added\n\n- A\n\n# 2024.8.13\n\n## Added\n\n- B\n\n## Fixed\n\n- F\n\n# 2024.8.12\n\n## Added\n\n- C\n"
        );

        let nodes = add("Added", "B2", "2024.8.13", markdown).unwrap();
        assert_eq!(
            stringify(&nodes),
            "# 2024.8.14\n\n## Added\n\n- A\n\n# 2024.8.13\n\n## Added\n\n- B\n- B2\n\n# 2024.8.12\n\n## Added\n\n- C\n"
        );
    }

    #[test]
    fn test_new_category_sorts_before_existing() {
        let nodes = add(
            "Added",
            "New thing",
            "2024.8.13",
            "# 2024.8.13\n\n## Fixed\n\n- A fix\n",
        )
        .unwrap();

        assert_eq!(
            stringify(&nodes),
            "# 2024.8.13\n\n## Added\n\n- New thing\n\n## Fixed\n\n- A fix\n"
        );
    }

    #[test]
    fn test_unknown_category_is_accepted_and_sorted_last() {
        let nodes = add(
            "Security",
            "Patched",
            "2024.8.13",
            "# 2024.8.13\n\n## Fixed\n\n- A fix\n",
        )
        .unwrap();

        assert_eq!(
            stringify(&nodes),
            "# 2024.8.13\n\n## Fixed\n\n- A fix\n\n## Security\n\n- Patched\n"
        );
    }

    #[test]
    fn test_category_without_list_is_rejected() {
        let ast = tokenize("# 2024.8.13\n\n## Added\n\nNot a list\n");
        let before = ast.clone();

        let result = add_change(
            &ChangeEntry::new("Added", "My addition"),
            "2024.8.13",
            &settings(),
            &ast,
        );

        assert!(matches!(
            result,
            Err(ChangelogError::MissingList { ref date, ref category })
                if date == "2024.8.13" && category == "Added"
        ));
        assert_eq!(ast, before);
    }

    #[test]
    fn test_trailing_category_heading_is_rejected() {
        let result = add("Added", "x", "2024.8.13", "# 2024.8.13\n\n## Added\n");
        assert!(matches!(result, Err(ChangelogError::MissingList { .. })));
    }

    #[test]
    fn test_blank_entries_are_rejected() {
        assert!(matches!(
            add(" ", "x", "2024.8.13", ""),
            Err(ChangelogError::EmptyEntry("category"))
        ));
        assert!(matches!(
            add("Added", "  ", "2024.8.13", ""),
            Err(ChangelogError::EmptyEntry("change"))
        ));
    }

    #[test]
    fn test_input_is_not_mutated() {
        let ast = tokenize("# 2024.8.13\n\n## Added\n\n- My addition\n");
        let before = ast.clone();

        let _ = add_change(
            &ChangeEntry::new("Added", "Another"),
            "2024.8.13",
            &settings(),
            &ast,
        )
        .unwrap();

        assert_eq!(ast, before);
    }

    #[test]
    fn test_new_date_goes_below_preamble() {
        let nodes = add(
            "Added",
            "New",
            "2024.8.14",
            "Notes about this log.\n\n# 2024.8.13\n\n## Added\n\n- Old\n",
        )
        .unwrap();

        assert_eq!(
            stringify(&nodes),
            "Notes about this log.\n\n# 2024.8.14\n\n## Added\n\n- New\n\n# 2024.8.13\n\n## Added\n\n- Old\n"
        );
    }

    #[test]
    fn test_closing_hash_headings_match_their_text() {
        let nodes = add(
            "Added",
            "b",
            "2024.8.13",
            "# 2024.8.13\n\n## Fixed ##\n\n- f\n\n## Added ##\n\n- a\n",
        )
        .unwrap();

        assert_eq!(
            stringify(&nodes),
            "# 2024.8.13\n\n## Added ##\n\n- a\n- b\n\n## Fixed ##\n\n- f\n"
        );
    }

    #[test]
    fn test_locate() {
        let ast = tokenize("# 2024.8.14\n\n## Added\n\n- A\n\n# 2024.8.13\n\n## Fixed\n\n- B\n");

        assert_eq!(
            locate(&ast, "2024.8.12", "Added"),
            InsertionPoint::NewDate { at: 0 }
        );
        assert_eq!(locate(&[], "2024.8.12", "Added"), InsertionPoint::NewDate { at: 0 });
        assert_eq!(
            locate(&ast, "2024.8.14", "Fixed"),
            InsertionPoint::NewCategory { at: 4 }
        );
        assert_eq!(
            locate(&ast, "2024.8.13", "Added"),
            InsertionPoint::NewCategory { at: ast.len() }
        );
        assert_eq!(
            locate(&ast, "2024.8.13", "Fixed"),
            InsertionPoint::AppendToList { at: 6 }
        );
    }
}
