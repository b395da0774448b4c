//! Markdown syntax trees.
//!
//! A positioned mdast-like tree for rules to inspect:
//!
//! - [`parse`] turns raw text into a [`Node`] tree with 1-indexed positions
//! - [`remove_positions`] strips positions, producing a "generated" tree
//! - [`visit`] walks a tree in document order

pub mod node;
pub mod parser;

pub use node::{remove_positions, visit, Node, NodeKind, Point, Position};
pub use parser::parse;
