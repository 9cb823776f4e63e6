//! Keywords are only keywords where the grammar allows them.

use super::{legacy, perfect};
use crate::syntax::green::{Kind, Node};
use crate::syntax::parse::parse;

fn token_kinds(node: &Node, out: &mut Vec<(Kind, String)>) {
    match node.lexeme() {
        Some(lexeme) if !node.kind().is_skipped() => out.push((node.kind(), lexeme.into())),
        Some(_) => {}
        None => node
            .children()
            .iter()
            .for_each(|child| token_kinds(child, out)),
    }
}

fn kind_of(source: &str, word: &str) -> Vec<Kind> {
    let parse = parse(source);
    assert!(parse.is_perfect(), "{:#?}", parse.diagnostics);

    let mut tokens = Vec::new();
    token_kinds(parse.tree.green(), &mut tokens);
    tokens
        .into_iter()
        .filter(|(_, lexeme)| lexeme == word)
        .map(|(kind, _)| kind)
        .collect()
}

#[test]
fn keywords_as_names() {
    assert_eq!(
        r#"(Program (LetStatement "let" "type" "=" "1" ";"))"#,
        perfect("let type = 1;")
    );

    assert_eq!(vec![Kind::Ident], kind_of("let type = 1;", "type"));
    assert_eq!(vec![Kind::Ident], kind_of("a.match;", "match"));
    assert_eq!(vec![Kind::Ident], kind_of("let o = new { from: 1 };", "from"));
}

#[test]
fn keywords_where_expected() {
    assert_eq!(vec![Kind::Type], kind_of("type T = num;", "type"));
    assert_eq!(vec![Kind::From], kind_of("import a from b;", "from"));
    assert_eq!(vec![Kind::BuiltinFunc], kind_of("print(1);", "print"));
}

#[test]
fn keywords_win_when_both_fit() {
    let kinds = kind_of("import { type T } from m;", "type");
    assert_eq!(vec![Kind::Type], kinds);
}

#[test]
fn versions_have_their_own_keywords() {
    let parse = legacy("let x = user");
    assert!(parse.is_perfect(), "{:#?}", parse.diagnostics);

    let mut tokens = Vec::new();
    token_kinds(parse.tree.green(), &mut tokens);
    assert!(tokens.contains(&(Kind::BuiltinVar, "user".into())));

    assert_eq!(vec![Kind::Ident], kind_of("let x = user;", "user"));
}
