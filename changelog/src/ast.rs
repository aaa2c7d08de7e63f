use crate::node::Node;

pub use crate::utils::strip_heading_markup;

/// A heading together with the nodes that belong to it
///
/// Date sections hold category sections in `subsections` and any stray nodes
/// before the first category in `tokens`. Category sections hold their entry
/// content in `tokens` and have no subsections.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Section {
    pub heading: Node,
    pub tokens: Vec<Node>,
    pub subsections: Vec<Section>,
}

impl Section {
    pub fn new(heading: Node) -> Self {
        Self {
            heading,
            tokens: Vec::new(),
            subsections: Vec::new(),
        }
    }

    /// Label of the section heading with its markup removed
    #[must_use]
    pub fn label(&self) -> &str {
        self.heading
            .heading()
            .map_or_else(|| strip_heading_markup(self.heading.raw()), |h| h.text.as_str())
    }

    /// Heading, own tokens, then every subsection, in that order
    #[must_use]
    pub fn into_nodes(self) -> Vec<Node> {
        let mut nodes = Vec::with_capacity(1 + self.tokens.len());
        nodes.push(self.heading);
        nodes.extend(self.tokens);
        nodes.extend(flatten(self.subsections));
        nodes
    }
}

/// Flattens sections back into a node sequence
#[must_use]
pub fn flatten(sections: Vec<Section>) -> Vec<Node> {
    sections.into_iter().flat_map(Section::into_nodes).collect()
}

/// Concatenates the raw forms of `nodes`
#[must_use]
pub fn stringify(nodes: &[Node]) -> String {
    nodes.iter().map(Node::raw).collect()
}
