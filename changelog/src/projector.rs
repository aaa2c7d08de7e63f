use crate::node::Node;
use crate::types::{Categories, ChangelogEntry};

/// Projects a node sequence into one record per date section, in document order
///
/// A category heading contributes the items of the first list after it,
/// skipping blank space. A category repeated under one date has its items
/// merged into the first occurrence.
#[must_use]
pub fn ast_to_object(ast: &[Node]) -> Vec<ChangelogEntry> {
    let mut entries = Vec::new();
    let mut current: Option<ChangelogEntry> = None;

    for (index, node) in ast.iter().enumerate() {
        let Some(heading) = node.heading() else {
            continue;
        };

        if node.is_date_heading() {
            entries.extend(current.take());
            current = Some(ChangelogEntry {
                date: heading.text.clone(),
                categories: Categories::new(),
            });
            continue;
        }

        let Some(entry) = current.as_mut().filter(|_| node.is_category_heading()) else {
            continue;
        };

        let list = ast[index + 1..].iter().find(|next| !next.is_space());
        if let Some(Node::List(list)) = list {
            entry.categories.extend(
                &heading.text,
                list.items.iter().map(|item| item.text.clone()),
            );
        }
    }

    entries.extend(current);
    entries
}
