//! Syntax tree types.
//!
//! The tree is a small mdast-like structure: every [`Node`] has a kind,
//! an optional source [`Position`], and children. Positions are optional
//! because the tree can be stripped of them (see [`remove_positions`]),
//! and rules must behave sensibly on such "generated" trees.

use std::fmt;

/// A place in the source document.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Point {
    /// Line (1-indexed).
    pub line: usize,
    /// Column (1-indexed).
    pub column: usize,
    /// Byte offset (0-indexed).
    pub offset: usize,
}

impl Point {
    /// Create a point.
    pub fn new(line: usize, column: usize, offset: usize) -> Self {
        Self {
            line,
            column,
            offset,
        }
    }
}

impl fmt::Display for Point {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{}", self.line, self.column)
    }
}

/// A range in the source document, end exclusive.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Position {
    pub start: Point,
    pub end: Point,
}

impl Position {
    /// Create a position from two points.
    pub fn new(start: Point, end: Point) -> Self {
        Self { start, end }
    }

    /// Whether `point` falls inside this range.
    pub fn contains(&self, point: Point) -> bool {
        (self.start.line, self.start.column) <= (point.line, point.column)
            && (point.line, point.column) < (self.end.line, self.end.column)
    }
}

impl fmt::Display for Position {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}-{}", self.start, self.end)
    }
}

/// Node types.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum NodeKind {
    Root,
    Heading { depth: u8 },
    Paragraph,
    Text(String),
    InlineCode(String),
    Html(String),
    Code { lang: Option<String>, value: String },
    ThematicBreak,
    Blockquote,
    List { ordered: bool },
    ListItem,
    Emphasis,
    Strong,
    Link { url: String },
    Image { url: String },
    /// Constructs no built-in rule inspects.
    Other,
}

/// A node in the syntax tree.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Node {
    pub kind: NodeKind,
    pub position: Option<Position>,
    pub children: Vec<Node>,
}

impl Node {
    /// Create a node without children.
    pub fn new(kind: NodeKind, position: Option<Position>) -> Self {
        Self {
            kind,
            position,
            children: Vec::new(),
        }
    }

    /// Attach children to this node.
    pub fn with_children(mut self, children: Vec<Node>) -> Self {
        self.children = children;
        self
    }

    /// Heading depth, if this is a heading.
    pub fn heading_depth(&self) -> Option<u8> {
        match self.kind {
            NodeKind::Heading { depth } => Some(depth),
            _ => None,
        }
    }

    /// Literal value of text, HTML, and code nodes.
    pub fn value(&self) -> Option<&str> {
        match &self.kind {
            NodeKind::Text(value) | NodeKind::InlineCode(value) | NodeKind::Html(value) => {
                Some(value)
            }
            NodeKind::Code { value, .. } => Some(value),
            _ => None,
        }
    }

    /// Textual content of this node and its descendants.
    pub fn text(&self) -> String {
        match self.value() {
            Some(value) => value.to_string(),
            None => self.children.iter().map(Node::text).collect(),
        }
    }

    /// Whether this node has no source position.
    pub fn is_generated(&self) -> bool {
        self.position.is_none()
    }

    /// Drop positional information from this node and all descendants.
    pub fn strip_positions(&mut self) {
        self.position = None;
        for child in &mut self.children {
            child.strip_positions();
        }
    }
}

/// Return a copy of `tree` without any positional information.
pub fn remove_positions(tree: &Node) -> Node {
    let mut tree = tree.clone();
    tree.strip_positions();
    tree
}

/// Walk `tree` in pre-order, calling `visitor` for every node.
pub fn visit<'a>(tree: &'a Node, visitor: &mut impl FnMut(&'a Node)) {
    visitor(tree);
    for child in &tree.children {
        visit(child, visitor);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn pos(sl: usize, sc: usize, el: usize, ec: usize) -> Option<Position> {
        Some(Position::new(Point::new(sl, sc, 0), Point::new(el, ec, 0)))
    }

    #[test]
    fn position_display() {
        let p = pos(3, 1, 3, 24).unwrap();
        assert_eq!(p.to_string(), "3:1-3:24");
        assert_eq!(p.start.to_string(), "3:1");
    }

    #[test]
    fn position_contains_is_end_exclusive() {
        let p = pos(2, 1, 4, 5).unwrap();
        assert!(p.contains(Point::new(2, 1, 0)));
        assert!(p.contains(Point::new(3, 80, 0)));
        assert!(!p.contains(Point::new(4, 5, 0)));
        assert!(!p.contains(Point::new(1, 9, 0)));
    }

    #[test]
    fn text_collects_descendants() {
        let heading = Node::new(NodeKind::Heading { depth: 1 }, pos(1, 1, 1, 8))
            .with_children(vec![Node::new(
                NodeKind::Text("Mercury".into()),
                pos(1, 3, 1, 8),
            )]);
        assert_eq!(heading.text(), "Mercury");
        assert_eq!(heading.heading_depth(), Some(1));
    }

    #[test]
    fn remove_positions_is_deep() {
        let tree = Node::new(NodeKind::Root, pos(1, 1, 1, 8)).with_children(vec![Node::new(
            NodeKind::Paragraph,
            pos(1, 1, 1, 8),
        )]);
        let stripped = remove_positions(&tree);
        assert!(stripped.is_generated());
        assert!(stripped.children[0].is_generated());
        assert!(!tree.is_generated());
    }

    #[test]
    fn visit_is_pre_order() {
        let tree = Node::new(NodeKind::Root, None).with_children(vec![
            Node::new(NodeKind::Heading { depth: 1 }, None)
                .with_children(vec![Node::new(NodeKind::Text("a".into()), None)]),
            Node::new(NodeKind::ThematicBreak, None),
        ]);
        let mut kinds = Vec::new();
        visit(&tree, &mut |node| kinds.push(node.kind.clone()));
        assert_eq!(kinds.len(), 4);
        assert_eq!(kinds[0], NodeKind::Root);
        assert_eq!(kinds[2], NodeKind::Text("a".into()));
        assert_eq!(kinds[3], NodeKind::ThematicBreak);
    }
}
