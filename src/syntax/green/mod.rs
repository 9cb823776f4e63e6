mod checks;
mod debug;
mod kind;

use std::sync::Arc;

use smol_str::SmolStr;

pub use self::kind::Kind;

/// A green node is a lossless and immutable syntax tree facilitating sharing.
/// Each node stores its total width in bytes.
#[derive(Clone, Eq, Hash, PartialEq)]
pub struct Node {
    /// The total width of this node. This must be the equal to
    /// `self.data.width()`.
    pub(crate) width: usize,
    pub(crate) kind: Kind,
    pub(crate) data: Data,
}

/// A node contains either a string (if it is a token) or a set of children.
#[derive(Clone, Debug, Eq, Hash, PartialEq)]
pub enum Data {
    Node(Arc<[Node]>),
    Token(SmolStr),
}

impl Node {
    pub fn token(kind: Kind, lexeme: impl Into<SmolStr>) -> Self {
        let lexeme: SmolStr = lexeme.into();
        Self {
            width: lexeme.len(),
            kind,
            data: Data::Token(lexeme),
        }
    }

    pub fn node(kind: Kind, children: Vec<Node>) -> Self {
        let width = children.iter().map(|node| node.width).sum();
        Self {
            width,
            kind,
            data: Data::Node(children.into()),
        }
    }

    pub fn kind(&self) -> Kind {
        self.kind
    }

    pub fn width(&self) -> usize {
        self.width
    }

    pub fn is_token(&self) -> bool {
        matches!(self.data, Data::Token(_))
    }

    /// The children of this node, or an empty slice for tokens.
    pub fn children(&self) -> &[Node] {
        match &self.data {
            Data::Node(children) => children,
            Data::Token(_) => &[],
        }
    }

    /// The source text of this token, or `None` for nodes.
    pub fn lexeme(&self) -> Option<&str> {
        match &self.data {
            Data::Node(_) => None,
            Data::Token(lexeme) => Some(lexeme),
        }
    }
}
