use super::{legacy, shape};
use crate::syntax::errors::{ErrorType, Severity};
use crate::syntax::green::Kind;
use crate::syntax::parse::{parse, Parse};

#[test]
fn missing_expression_resumes_at_next_statement() {
    let parse = parse("let x = ; let y = 5;");

    assert_eq!(1, parse.diagnostics.len());
    let error = &parse.diagnostics[0];
    assert_eq!(ErrorType::Syntax, error.ty);
    assert_eq!("unexpected `;`", error.message);
    assert_eq!(8..9, error.span.range());
    assert_eq!(9, error.span.start.column);

    assert_eq!(
        r#"(Program (Error "let" "x" "=" ";") (LetStatement "let" "y" "=" "5" ";"))"#,
        shape(parse.tree.green())
    );
}

#[test]
fn errors_mention_what_was_expected() {
    let parse = parse("fn f( {}");
    let error = &parse.diagnostics[0];

    assert_eq!("unexpected `{`", error.message);
    assert!(error
        .notes
        .iter()
        .any(|(note, _)| note.contains("an identifier")));
}

#[test]
fn unclosed_delimiters_get_a_note() {
    let parse = parse("f(1, 2");

    assert_eq!(2, parse.diagnostics.len());
    assert_eq!("unexpected end of input", parse.diagnostics[0].message);

    let note = &parse.diagnostics[1];
    assert_eq!(Severity::Note, note.severity);
    assert_eq!(1..2, note.span.range());
    assert!(note.message.contains("`(`"));
}

#[test]
fn errors_are_not_cascaded() {
    let parse = parse("let = = = 1; let z = 2;");
    assert_eq!(1, parse.diagnostics.len());

    let statements = parse
        .tree
        .green()
        .children()
        .iter()
        .filter(|child| child.kind() == Kind::LetStatement)
        .count();
    assert_eq!(1, statements);
}

#[test]
fn lexical_errors_are_reported_and_kept() {
    let parse = parse("let x = 1 ¤ 2;");

    let lexical: Vec<_> = parse
        .diagnostics
        .iter()
        .filter(|diagnostic| diagnostic.ty == ErrorType::Lexical)
        .collect();

    assert_eq!(1, lexical.len());
    assert_eq!("unexpected character `¤`", lexical[0].message);
    assert_eq!("let x = 1 ¤ 2;", parse.tree.green().write());
}

#[test]
fn legacy_recovery_keeps_the_rest() {
    let parse = legacy("let x = ; print(x)");
    assert_eq!(1, parse.diagnostics.len());

    let kinds: Vec<Kind> = parse
        .tree
        .root()
        .descendants()
        .map(|node| node.kind())
        .collect();

    assert!(kinds.contains(&Kind::Error));
    assert!(kinds.contains(&Kind::CallExpression));
}

fn statements(parse: &Parse) -> usize {
    parse
        .tree
        .green()
        .children()
        .iter()
        .filter(|child| child.kind() == Kind::LetStatement)
        .count()
}

#[test]
fn unterminated_strings_end_their_statement() {
    let parse = parse("let x = \"abc\nlet y = 1;");

    assert_eq!(1, parse.diagnostics.len(), "{:#?}", parse.diagnostics);
    assert_eq!(ErrorType::Lexical, parse.diagnostics[0].ty);
    assert_eq!("unterminated string literal", parse.diagnostics[0].message);

    assert_eq!(2, statements(&parse));
    assert_eq!(
        r#"(Program (LetStatement "let" "x" "=" "\"abc") (LetStatement "let" "y" "=" "1" ";"))"#,
        shape(parse.tree.green())
    );
}

#[test]
fn stray_characters_are_reported_once() {
    let parse = parse("let x = 1 $ 2;");

    assert_eq!(1, parse.diagnostics.len(), "{:#?}", parse.diagnostics);
    assert_eq!("unexpected character `$`", parse.diagnostics[0].message);
    assert_eq!(1, statements(&parse));
}

#[test]
fn invalid_operands_keep_their_statement() {
    let parse = parse("let x = $;\nlet y = x + §;");

    assert_eq!(2, parse.diagnostics.len());
    assert!(parse
        .diagnostics
        .iter()
        .all(|diagnostic| diagnostic.ty == ErrorType::Lexical));
    assert_eq!(2, statements(&parse));
}

#[test]
fn missing_semicolons_at_line_ends() {
    let lines = parse("let x = 1\nlet y = 2;");

    assert_eq!(1, lines.diagnostics.len());
    assert_eq!("missing `;`", lines.diagnostics[0].message);
    assert_eq!(2, lines.diagnostics[0].span.start.line);
    assert_eq!(
        r#"(Program (LetStatement "let" "x" "=" "1") (LetStatement "let" "y" "=" "2" ";"))"#,
        shape(lines.tree.green())
    );

    let end = parse("let x = 1");
    assert_eq!(1, end.diagnostics.len());
    assert_eq!("missing `;`", end.diagnostics[0].message);
    assert_eq!(1, statements(&end));
    assert_eq!("let x = 1", end.tree.green().write());
}

#[test]
fn no_terminator_is_inserted_within_a_line() {
    let parse = parse("let x = 1 let y = 2;");

    assert_eq!(1, parse.diagnostics.len());
    assert!(parse.diagnostics[0].message.starts_with("unexpected"));
    assert_eq!(1, statements(&parse));
}
