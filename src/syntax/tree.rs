//! Positioned views of a green tree. The green tree only knows widths; a
//! [`SyntaxNode`] pairs a green node with its absolute offset so consumers
//! can ask for ranges and spans.

use std::fmt;
use std::ops::Range;

use super::green::{Kind, Node};
use super::parse::ParseOptions;
use super::source::{LineIndex, Span};
use super::version::Version;

#[derive(Clone)]
pub struct SyntaxTree {
    root: Node,
    lines: LineIndex,
    options: ParseOptions,
}

impl SyntaxTree {
    pub(crate) fn new(root: Node, lines: LineIndex, options: ParseOptions) -> Self {
        Self {
            root,
            lines,
            options,
        }
    }

    pub fn root(&self) -> SyntaxNode<'_> {
        SyntaxNode {
            tree: self,
            green: &self.root,
            offset: 0,
        }
    }

    pub fn green(&self) -> &Node {
        &self.root
    }

    pub fn text(&self) -> &str {
        self.lines.text()
    }

    pub fn lines(&self) -> &LineIndex {
        &self.lines
    }

    pub fn version(&self) -> Version {
        self.options.version
    }

    pub fn filename(&self) -> &str {
        &self.options.filename
    }

    pub fn is_driver(&self) -> bool {
        self.options.is_driver
    }

    /// Every token of the tree, in source order.
    pub fn tokens(&self) -> impl Iterator<Item = SyntaxNode<'_>> + '_ {
        self.root().leaves()
    }
}

impl fmt::Debug for SyntaxTree {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Debug::fmt(&self.root, f)
    }
}

/// A node or token together with its position in the tree.
#[derive(Clone, Copy)]
pub struct SyntaxNode<'t> {
    tree: &'t SyntaxTree,
    green: &'t Node,
    offset: usize,
}

impl<'t> SyntaxNode<'t> {
    pub fn kind(&self) -> Kind {
        self.green.kind()
    }

    pub fn is_token(&self) -> bool {
        self.green.is_token()
    }

    pub fn green(&self) -> &'t Node {
        self.green
    }

    /// The text of this token. Nodes have none; use [`SyntaxNode::range`]
    /// with the source text instead.
    pub fn text(&self) -> Option<&'t str> {
        self.green.lexeme()
    }

    pub fn range(&self) -> Range<usize> {
        self.offset..self.offset + self.green.width()
    }

    pub fn span(&self) -> Span {
        self.tree.lines.span(self.range())
    }

    pub fn children(&self) -> impl Iterator<Item = SyntaxNode<'t>> + 't {
        let tree = self.tree;
        let green: &'t Node = self.green;
        let mut offset = self.offset;

        green.children().iter().map(move |green| {
            let child = SyntaxNode {
                tree,
                green,
                offset,
            };
            offset += green.width();
            child
        })
    }

    /// This node and all of its descendants, in preorder.
    pub fn descendants(&self) -> Descendants<'t> {
        Descendants { stack: vec![*self] }
    }

    /// All tokens under this node, in source order.
    pub fn leaves(&self) -> impl Iterator<Item = SyntaxNode<'t>> + 't {
        self.descendants().filter(SyntaxNode::is_token)
    }

    /// The first significant token under this node.
    pub fn first_token(&self) -> Option<SyntaxNode<'t>> {
        self.leaves().find(|token| !token.kind().is_extra())
    }
}

impl fmt::Debug for SyntaxNode<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:?}@{:?}", self.kind(), self.range())
    }
}

pub struct Descendants<'t> {
    stack: Vec<SyntaxNode<'t>>,
}

impl<'t> Iterator for Descendants<'t> {
    type Item = SyntaxNode<'t>;

    fn next(&mut self) -> Option<Self::Item> {
        let node = self.stack.pop()?;
        let children: Vec<_> = node.children().collect();
        self.stack.extend(children.into_iter().rev());
        Some(node)
    }
}
