use super::{legacy, shape};
use crate::syntax::green::Kind;

fn perfect(source: &str) -> String {
    let parse = legacy(source);
    assert!(parse.is_perfect(), "{source:?}: {:#?}", parse.diagnostics);
    shape(parse.tree.green())
}

#[test]
fn statements_are_separated() {
    assert_eq!(
        r#"(Program (LetStatement "let" "x" "=" "1") ";" (VariableName "x"))"#,
        perfect("let x = 1; x")
    );

    assert_eq!(r#"(Program "1" ";" "2" ";")"#, perfect("1; 2;"));
}

#[test]
fn assignment_is_loosest() {
    assert_eq!(
        concat!(
            r#"(Program (AssignExpression (VariableName "x") "=" "#,
            r#"(AssignExpression (VariableName "y") "+=" (InfixExpression "1" "+" "2"))))"#,
        ),
        perfect("x = y += 1 + 2")
    );
}

#[test]
fn pairs_and_casts() {
    assert_eq!(
        r#"(Program (PairExpression "'a'" "=>" (InfixExpression "1" "+" "2")))"#,
        perfect("'a' => 1 + 2")
    );

    assert_eq!(
        r#"(Program (CastExpression (VariableName "x") "as" (NamedType "str")))"#,
        perfect("x as str")
    );
}

#[test]
fn full_script() {
    let source = r#"
# Turn on the lamp when it is dark
import lamp as light from devices;
let x = 5;
if x > 3 { print('big') } else { log("small", x) };
for i in items { if i == 2 { continue }; print(i) };
fn greet(name) { print("hi " + name) };
while true { if x == 5 { break 1 } };
try { exit(1) } catch err { print(err) };
let y = x as str;
x += 1;
switch_on("lamp", on);
print(weather.temperature);
"key" => 3
"#;

    let parse = legacy(source);
    assert!(parse.is_perfect(), "{:#?}", parse.diagnostics);

    let kinds: Vec<Kind> = parse
        .tree
        .green()
        .children()
        .iter()
        .map(|child| child.kind())
        .filter(|kind| !kind.is_skipped() && *kind != Kind::Semicolon)
        .collect();

    assert_eq!(
        vec![
            Kind::ImportStatement,
            Kind::LetStatement,
            Kind::IfExpression,
            Kind::ForExpression,
            Kind::FunctionLiteral,
            Kind::WhileExpression,
            Kind::TryExpression,
            Kind::LetStatement,
            Kind::AssignExpression,
            Kind::CallExpression,
            Kind::CallExpression,
            Kind::PairExpression,
        ],
        kinds
    );
}
