//! Markdown to [`Node`] conversion.
//!
//! Parsing is delegated to `pulldown-cmark` (plain CommonMark, no
//! extensions). Its offset iterator is folded into a positioned tree: byte
//! ranges become 1-indexed line/column points through a table of line
//! start offsets.

use pulldown_cmark::{CodeBlockKind, Event, Options, Parser, Tag};
use std::ops::Range;

use super::node::{Node, NodeKind, Point, Position};

/// Byte offset to line/column mapping for one document.
struct LineIndex<'a> {
    text: &'a str,
    starts: Vec<usize>,
}

impl<'a> LineIndex<'a> {
    fn new(text: &'a str) -> Self {
        let starts = std::iter::once(0)
            .chain(text.match_indices('\n').map(|(i, _)| i + 1))
            .collect();
        Self { text, starts }
    }

    fn point(&self, offset: usize) -> Point {
        let offset = offset.min(self.text.len());
        let line = self.starts.partition_point(|&start| start <= offset);
        let line_start = self.starts[line - 1];
        let column = self.text[line_start..offset].chars().count() + 1;
        Point::new(line, column, offset)
    }

    /// Position of `range`, ignoring trailing whitespace and line endings.
    fn position(&self, range: &Range<usize>) -> Position {
        let end = range.end.min(self.text.len());
        let start = range.start.min(end);
        let trimmed = start + self.text[start..end].trim_end().len();
        Position::new(self.point(start), self.point(trimmed))
    }
}

/// An open container while events stream in.
struct Frame {
    kind: NodeKind,
    range: Range<usize>,
    children: Vec<Node>,
    /// Literal content of code and HTML blocks.
    literal: String,
}

impl Frame {
    fn new(kind: NodeKind, range: Range<usize>) -> Self {
        Self {
            kind,
            range,
            children: Vec::new(),
            literal: String::new(),
        }
    }

    fn collects_literal(&self) -> bool {
        matches!(self.kind, NodeKind::Code { .. } | NodeKind::Html(_))
    }

    fn finish(self, index: &LineIndex<'_>) -> Node {
        let kind = match self.kind {
            NodeKind::Code { lang, .. } => NodeKind::Code {
                lang,
                value: self
                    .literal
                    .strip_suffix('\n')
                    .unwrap_or(&self.literal)
                    .to_string(),
            },
            NodeKind::Html(_) => NodeKind::Html(self.literal.trim_end().to_string()),
            kind => kind,
        };
        Node::new(kind, Some(index.position(&self.range))).with_children(self.children)
    }

    /// Append a text leaf, merging it into a directly adjacent text node.
    fn push_text(&mut self, value: &str, position: Position) {
        if let Some(Node {
            kind: NodeKind::Text(previous),
            position: Some(previous_position),
            ..
        }) = self.children.last_mut()
        {
            if previous_position.end.offset == position.start.offset {
                previous.push_str(value);
                previous_position.end = position.end;
                return;
            }
        }
        self.children
            .push(Node::new(NodeKind::Text(value.to_string()), Some(position)));
    }

    fn push_leaf(&mut self, kind: NodeKind, position: Position) {
        self.children.push(Node::new(kind, Some(position)));
    }
}

fn kind_of(tag: &Tag<'_>) -> NodeKind {
    match tag {
        Tag::Paragraph => NodeKind::Paragraph,
        Tag::Heading { level, .. } => NodeKind::Heading {
            depth: *level as u8,
        },
        Tag::BlockQuote(..) => NodeKind::Blockquote,
        Tag::CodeBlock(kind) => NodeKind::Code {
            lang: match kind {
                CodeBlockKind::Fenced(info) => {
                    info.split_whitespace().next().map(str::to_string)
                }
                CodeBlockKind::Indented => None,
            },
            value: String::new(),
        },
        Tag::HtmlBlock => NodeKind::Html(String::new()),
        Tag::List(start) => NodeKind::List {
            ordered: start.is_some(),
        },
        Tag::Item => NodeKind::ListItem,
        Tag::Emphasis => NodeKind::Emphasis,
        Tag::Strong => NodeKind::Strong,
        Tag::Link { dest_url, .. } => NodeKind::Link {
            url: dest_url.to_string(),
        },
        Tag::Image { dest_url, .. } => NodeKind::Image {
            url: dest_url.to_string(),
        },
        _ => NodeKind::Other,
    }
}

/// Parse `text` into a positioned tree.
///
/// The root spans the whole document. Every other node spans its source
/// range without trailing whitespace, so `# Mercury.\n` yields a heading
/// at `1:1-1:11`.
pub fn parse(text: &str) -> Node {
    let index = LineIndex::new(text);
    let mut stack = vec![Frame::new(NodeKind::Root, 0..text.len())];

    for (event, range) in Parser::new_ext(text, Options::empty()).into_offset_iter() {
        if let Event::Start(tag) = &event {
            stack.push(Frame::new(kind_of(tag), range));
            continue;
        }
        if let Event::End(_) = &event {
            if stack.len() > 1 {
                if let Some(frame) = stack.pop() {
                    let node = frame.finish(&index);
                    if let Some(parent) = stack.last_mut() {
                        parent.children.push(node);
                    }
                }
            }
            continue;
        }

        let Some(frame) = stack.last_mut() else {
            continue;
        };
        let position = index.position(&range);
        match event {
            Event::Text(value) | Event::Html(value) | Event::InlineHtml(value)
                if frame.collects_literal() =>
            {
                frame.literal.push_str(&value);
            }
            Event::Text(value) => frame.push_text(&value, position),
            Event::SoftBreak | Event::HardBreak => frame.push_text("\n", position),
            Event::Code(value) => {
                frame.push_leaf(NodeKind::InlineCode(value.to_string()), position)
            }
            Event::Html(value) | Event::InlineHtml(value) => {
                frame.push_leaf(NodeKind::Html(value.trim_end().to_string()), position)
            }
            Event::Rule => frame.push_leaf(NodeKind::ThematicBreak, position),
            _ => {}
        }
    }

    let children = stack
        .into_iter()
        .next()
        .map(|root| root.children)
        .unwrap_or_default();
    Node::new(
        NodeKind::Root,
        Some(Position::new(index.point(0), index.point(text.len()))),
    )
    .with_children(children)
}
