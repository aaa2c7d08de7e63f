//! Splits Markdown text into the flat node sequence the rest of the crate works on.
//!
//! Block boundaries come from `pulldown-cmark`; the whitespace between blocks is
//! then distributed so that every byte of the input lands in exactly one node:
//!
//! - a heading keeps trailing spaces on its line and the whole run of newlines after it
//! - any other block keeps trailing spaces on its last line
//! - a single following `\n` is appended to the preceding node
//! - longer runs of blank lines become [`Node::Space`]
//! - the end of the document, including spaces after its last newline, becomes [`Node::Space`]
//! - indentation in front of a block belongs to that block

use crate::node::{Heading, List, ListItem, Node};
use crate::utils::{
    ATX_HEADING_CLOSE_PATTERN, ATX_HEADING_OPEN_PATTERN, LIST_MARKER_PATTERN,
    SETEXT_UNDERLINE_PATTERN,
};
use pulldown_cmark::{Event, Options, Parser, Tag};
use std::ops::Range;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum BlockKind {
    Heading(u8),
    List,
    Rule,
    Other,
}

#[derive(Debug)]
struct Block {
    span: Range<usize>,
    kind: BlockKind,
    items: Vec<Range<usize>>,
}

impl Block {
    fn new(span: Range<usize>, kind: BlockKind) -> Self {
        Self {
            span,
            kind,
            items: Vec::new(),
        }
    }

    const fn absorbs_newlines(&self) -> bool {
        matches!(self.kind, BlockKind::Heading(_) | BlockKind::Rule)
    }
}

const fn is_blank(c: char) -> bool {
    matches!(c, ' ' | '\t' | '\n' | '\r')
}

/// Tokenizes `content` into block nodes whose raws concatenate back to `content`
#[must_use]
pub fn tokenize(content: &str) -> Vec<Node> {
    let blocks = cover_gaps(content, collect_blocks(content));
    assemble(content, &blocks)
}

fn kind_of(tag: &Tag<'_>) -> BlockKind {
    match tag {
        Tag::Heading { level, .. } => BlockKind::Heading(*level as u8),
        Tag::List(_) => BlockKind::List,
        _ => BlockKind::Other,
    }
}

/// Top-level blocks reported by the Markdown parser, trimmed of surrounding whitespace
fn collect_blocks(content: &str) -> Vec<Block> {
    let options =
        Options::ENABLE_TABLES | Options::ENABLE_STRIKETHROUGH | Options::ENABLE_TASKLISTS;
    let mut blocks: Vec<Block> = Vec::new();
    let mut current: Option<Block> = None;
    let mut depth = 0usize;

    for (event, range) in Parser::new_ext(content, options).into_offset_iter() {
        match event {
            Event::Start(tag) => {
                if depth == 0 {
                    current = Some(Block::new(range, kind_of(&tag)));
                } else if depth == 1 && matches!(tag, Tag::Item) {
                    if let Some(block) =
                        current.as_mut().filter(|b| b.kind == BlockKind::List)
                    {
                        block.items.push(range);
                    }
                }
                depth += 1;
            }
            Event::End(_) => {
                depth = depth.saturating_sub(1);
                if depth == 0 {
                    blocks.extend(current.take());
                }
            }
            Event::Rule if depth == 0 => blocks.push(Block::new(range, BlockKind::Rule)),
            _ if depth == 0 => blocks.push(Block::new(range, BlockKind::Other)),
            _ => {}
        }
    }

    let mut trimmed: Vec<Block> = Vec::with_capacity(blocks.len());
    for mut block in blocks {
        let Some(span) = trim_span(content, block.span.clone()) else {
            continue;
        };
        if trimmed.last().is_some_and(|prev| span.start < prev.span.end) {
            continue;
        }
        block.span = span;
        trimmed.push(block);
    }
    trimmed
}

fn trim_span(content: &str, span: Range<usize>) -> Option<Range<usize>> {
    let slice = content.get(span.clone())?;
    let start = span.start + (slice.len() - slice.trim_start_matches(is_blank).len());
    let end = span.start + slice.trim_end_matches(is_blank).len();
    (start < end).then_some(start..end)
}

/// Turns non-blank text the parser emitted no event for (link definitions) into opaque blocks
fn cover_gaps(content: &str, blocks: Vec<Block>) -> Vec<Block> {
    let mut covered = Vec::with_capacity(blocks.len());
    let mut cursor = 0;

    for block in blocks {
        covered.extend(
            trim_span(content, cursor..block.span.start)
                .map(|span| Block::new(span, BlockKind::Other)),
        );
        cursor = block.span.end;
        covered.push(block);
    }
    covered.extend(
        trim_span(content, cursor..content.len()).map(|span| Block::new(span, BlockKind::Other)),
    );

    covered
}

fn assemble(content: &str, blocks: &[Block]) -> Vec<Node> {
    let mut nodes = Vec::with_capacity(blocks.len() * 2);
    let Some(first) = blocks.first() else {
        if !content.is_empty() {
            nodes.push(Node::space(content));
        }
        return nodes;
    };

    let first_start = first.span.start;
    let mut cursor = match content[..first_start].rfind('\n') {
        Some(pos) => {
            nodes.push(Node::space(&content[..=pos]));
            pos + 1
        }
        None => 0,
    };

    for (i, block) in blocks.iter().enumerate() {
        let next_start = blocks.get(i + 1).map_or(content.len(), |b| b.span.start);
        let tail = &content[block.span.end..next_start];

        let mut end =
            block.span.end + (tail.len() - tail.trim_start_matches([' ', '\t', '\r']).len());
        if block.absorbs_newlines() {
            let rest = &content[end..next_start];
            end += rest.len() - rest.trim_start_matches(['\n', '\r']).len();
        }

        let rest = &content[end..next_start];
        let (blank, next_cursor) = match rest.rfind('\n') {
            Some(_) if i + 1 == blocks.len() => (rest, next_start),
            Some(pos) => (&rest[..=pos], end + pos + 1),
            None if i + 1 == blocks.len() => {
                end = next_start;
                ("", next_start)
            }
            None => ("", end),
        };

        let mut node = build_node(content, block, cursor..end);
        if blank == "\n" {
            node.raw_mut().push('\n');
            nodes.push(node);
        } else {
            nodes.push(node);
            if !blank.is_empty() {
                nodes.push(Node::space(blank));
            }
        }
        cursor = next_cursor;
    }

    nodes
}

fn build_node(content: &str, block: &Block, raw_span: Range<usize>) -> Node {
    let raw = content[raw_span].to_string();
    let core = &content[block.span.clone()];

    match block.kind {
        BlockKind::Heading(depth) => Node::Heading(Heading {
            depth,
            text: heading_text(core),
            raw,
        }),
        BlockKind::List => Node::List(List {
            raw,
            items: block
                .items
                .iter()
                .filter_map(|range| content.get(range.clone()))
                .map(|item| ListItem {
                    raw: item.trim_end().to_string(),
                    text: item_text(item),
                })
                .collect(),
        }),
        BlockKind::Rule | BlockKind::Other => Node::other(raw),
    }
}

fn heading_text(core: &str) -> String {
    if ATX_HEADING_OPEN_PATTERN.is_match(core) {
        let without_open = ATX_HEADING_OPEN_PATTERN.replace(core, "");
        let without_close = ATX_HEADING_CLOSE_PATTERN.replace(without_open.trim_end(), "");
        without_close.trim().to_string()
    } else {
        SETEXT_UNDERLINE_PATTERN
            .replace(core, "")
            .lines()
            .map(str::trim)
            .collect::<Vec<_>>()
            .join("\n")
    }
}

fn item_text(item: &str) -> String {
    let item = item.trim_end();
    let mut lines = item.lines();
    let first = lines
        .next()
        .map(|line| LIST_MARKER_PATTERN.replace(line, "").into_owned())
        .unwrap_or_default();

    std::iter::once(first)
        .chain(lines.map(|line| line.trim_start().to_string()))
        .collect::<Vec<_>>()
        .join("\n")
}
