//! Comments are trivia, attached before the node they precede.

use super::legacy;
use crate::syntax::green::Kind;
use crate::syntax::parse::parse;

fn root_kinds(node: &crate::syntax::green::Node) -> Vec<Kind> {
    node.children().iter().map(|child| child.kind()).collect()
}

#[test]
fn line_comments() {
    let parse = parse("// comment\nlet x = 1;");
    assert!(parse.is_perfect());
    assert_eq!(
        vec![Kind::LineComment, Kind::Whitespace, Kind::LetStatement],
        root_kinds(parse.tree.green())
    );
}

#[test]
fn legacy_line_comments() {
    let parse = legacy("# comment\nlet x = 1;");
    assert!(parse.is_perfect(), "{:#?}", parse.diagnostics);
    assert_eq!(
        vec![
            Kind::LineComment,
            Kind::Whitespace,
            Kind::LetStatement,
            Kind::Semicolon,
        ],
        root_kinds(parse.tree.green())
    );
}

#[test]
fn block_comments() {
    let parse = parse("/* a\n b */ 1");
    assert!(parse.is_perfect());
    assert_eq!(
        vec![Kind::BlockComment, Kind::Whitespace, Kind::Number],
        root_kinds(parse.tree.green())
    );
}

#[test]
fn trailing_comments_stay_at_the_end() {
    let parse = parse("let x = 1; // done");
    assert_eq!(
        vec![Kind::LetStatement, Kind::Whitespace, Kind::LineComment],
        root_kinds(parse.tree.green())
    );
}

#[test]
fn comments_inside_nodes() {
    let parse = parse("let x = /* one */ 1;");
    let statement = &parse.tree.green().children()[0];

    assert_eq!(Kind::LetStatement, statement.kind());
    assert!(statement
        .children()
        .iter()
        .any(|child| child.kind() == Kind::BlockComment));
}

#[test]
fn slashes_are_division_in_legacy() {
    let parse = legacy("4 // 2");
    assert!(!parse.is_perfect());

    let parse = legacy("4 / 2");
    assert!(parse.is_perfect());
}
