use std::ops::Range;

use crate::syntax::tree::{SyntaxNode, SyntaxTree};
use crate::syntax::Kind;

/// The token closing a node whose contents are indented one level deeper
/// than its delimiters.
pub fn indent_rule(kind: Kind) -> Option<Kind> {
    match kind {
        Kind::Arguments | Kind::Parameters => Some(Kind::RightParen),
        Kind::ListLiteral => Some(Kind::RightBracket),
        Kind::Block
        | Kind::ObjectLiteral
        | Kind::ObjectType
        | Kind::MatchExpression
        | Kind::ImplBlock
        | Kind::ImportItem => Some(Kind::RightBrace),
        _ => None,
    }
}

/// The range between the delimiters of a delimited node. If the node was
/// never closed, the inside extends to the end of the node.
fn inside(node: SyntaxNode) -> Option<Range<usize>> {
    let close = indent_rule(node.kind())?;
    let mut tokens = node.children().filter(SyntaxNode::is_token);

    let open = tokens.find(|token| token.kind().closing() == Some(close))?;
    let end = node
        .children()
        .filter(|child| child.kind() == close)
        .last()
        .map(|token| token.range().start)
        .unwrap_or(node.range().end);

    Some(open.range().end..end)
}

/// Foldable regions: the inside of every delimited node spanning more than
/// one line, in source order.
pub fn folds(tree: &SyntaxTree) -> Vec<Range<usize>> {
    let lines = tree.lines();

    tree.root()
        .descendants()
        .filter(|node| !node.is_token())
        .filter_map(|node| {
            let Range { start, end } = inside(node)?;
            (lines.location(start).line < lines.location(end).line).then_some(start..end)
        })
        .collect()
}

/// The number of delimited nodes whose inside contains the given offset.
pub fn indent_level(tree: &SyntaxTree, offset: usize) -> usize {
    let mut level = 0;
    let mut node = tree.root();

    loop {
        if let Some(inside) = inside(node) {
            if inside.start <= offset && offset <= inside.end {
                level += 1;
            }
        }

        let child = node.children().find(|child| {
            let range = child.range();
            !child.is_token() && range.start < offset && offset <= range.end
        });

        match child {
            Some(child) => node = child,
            None => break level,
        }
    }
}
