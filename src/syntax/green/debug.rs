use std::fmt;

use super::{Data, Node};

/// `{:?}` renders a node as an S-expression on one line. `{:#?}` puts every
/// node and token on its own line, indented by depth, with token kinds.
impl fmt::Debug for Node {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if f.alternate() {
            self.outline(f, 0)
        } else {
            self.sexpr(f)
        }
    }
}

impl Node {
    fn sexpr(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.data {
            Data::Token(lexeme) => write!(f, "{:?}", lexeme.as_str()),
            Data::Node(children) => {
                write!(f, "({:?}", self.kind)?;

                for child in children.iter() {
                    write!(f, " ")?;
                    child.sexpr(f)?;
                }

                write!(f, ")")
            }
        }
    }

    fn outline(&self, f: &mut fmt::Formatter<'_>, depth: usize) -> fmt::Result {
        write!(f, "{:indent$}", "", indent = depth * 2)?;

        match &self.data {
            Data::Token(lexeme) => writeln!(f, "{:?} {:?}", self.kind, lexeme.as_str()),
            Data::Node(children) => {
                writeln!(f, "{:?}@{}", self.kind, self.width)?;
                children
                    .iter()
                    .try_for_each(|child| child.outline(f, depth + 1))
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::super::{Kind, Node};

    fn sample() -> Node {
        let sum = Node::node(
            Kind::InfixExpression,
            vec![
                Node::token(Kind::Number, "1"),
                Node::token(Kind::Plus, "+"),
                Node::token(Kind::Number, "2"),
            ],
        );

        Node::node(Kind::Program, vec![sum, Node::token(Kind::Whitespace, "\n")])
    }

    #[test]
    fn compact() {
        assert_eq!(
            r#"(Program (InfixExpression "1" "+" "2") "\n")"#,
            format!("{:?}", sample())
        );
    }

    #[test]
    fn outline() {
        let expected = "\
Program@4
  InfixExpression@3
    Number \"1\"
    Plus \"+\"
    Number \"2\"
  Whitespace \"\\n\"
";

        assert_eq!(expected, format!("{:#?}", sample()));
    }
}
