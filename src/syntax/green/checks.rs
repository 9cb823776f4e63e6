use super::{Data, Kind, Node};

impl Node {
    /// The source text this tree was built from.
    pub fn write(&self) -> String {
        let mut result = String::with_capacity(self.width);
        let mut stack = vec![self];

        while let Some(node) = stack.pop() {
            match &node.data {
                Data::Node(children) => stack.extend(children.iter().rev()),
                Data::Token(lexeme) => result.push_str(lexeme),
            }
        }

        result
    }

    /// Panics if the tree is malformed:
    ///
    /// - a stored width disagrees with the contents,
    /// - a token is empty, or its text is not the spelling of its kind,
    /// - the end of input marker is stored,
    /// - a node other than the root has no children.
    pub fn check_invariants(&self) {
        self.check(true);
    }

    fn check(&self, root: bool) {
        assert_eq!(self.width, self.data.width(), "{:?} has the wrong width", self.kind);
        assert_ne!(Kind::Eof, self.kind, "the end of input is never stored");

        match &self.data {
            Data::Node(children) => {
                assert!(
                    root || !children.is_empty(),
                    "empty {:?} node",
                    self.kind
                );

                for child in children.iter() {
                    child.check(false);
                }
            }

            Data::Token(lexeme) => {
                assert!(!lexeme.is_empty(), "empty {:?} token", self.kind);

                if let Some(spelling) = self.kind.spelling() {
                    assert_eq!(spelling, lexeme.as_str(), "misspelled {:?}", self.kind);
                }
            }
        }
    }
}

impl Data {
    /// Get the width of this node data in bytes.
    pub fn width(&self) -> usize {
        match self {
            Self::Node(children) => children.iter().map(|node| node.width).sum(),
            Self::Token(lexeme) => lexeme.len(),
        }
    }
}
