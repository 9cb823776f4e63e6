use super::{parse, parse_with, Parse, ParseOptions};
use crate::syntax::green::{Kind, Node};
use crate::syntax::version::Version;

mod comments;
mod junk;
mod keywords;
mod legacy;
mod recovery;
mod valid;

/// Render a tree as an S-expression without trivia.
pub(super) fn shape(node: &Node) -> String {
    match node.lexeme() {
        Some(lexeme) => format!("{lexeme:?}"),
        None => {
            let mut out = format!("({:?}", node.kind());
            for child in node.children() {
                if child.kind().is_skipped() {
                    continue;
                }

                out.push(' ');
                out.push_str(&shape(child));
            }

            out.push(')');
            out
        }
    }
}

pub(super) fn legacy(source: &str) -> Parse {
    let _ = pretty_env_logger::try_init();
    parse_with(source, &ParseOptions::new(Version::Legacy))
}

/// Parse without errors and render the tree.
fn perfect(source: &str) -> String {
    let _ = pretty_env_logger::try_init();
    let parse = parse(source);
    assert!(parse.is_perfect(), "{source:?}: {:#?}", parse.diagnostics);
    shape(parse.tree.green())
}

#[test]
fn empty_source() {
    let parse = parse("");
    assert!(parse.is_perfect());
    assert_eq!(Kind::Program, parse.tree.green().kind());
    assert_eq!(0, parse.tree.green().width());
    assert!(parse.tree.green().children().is_empty());
}

#[test]
fn multiplication_binds_tighter() {
    assert_eq!(
        r#"(Program (InfixExpression "1" "+" (InfixExpression "2" "*" "3")))"#,
        perfect("1 + 2 * 3")
    );
}

#[test]
fn associativity() {
    assert_eq!(
        r#"(Program (InfixExpression (InfixExpression "1" "-" "2") "-" "3"))"#,
        perfect("1 - 2 - 3")
    );

    assert_eq!(
        r#"(Program (InfixExpression "2" "**" (InfixExpression "3" "**" "4")))"#,
        perfect("2 ** 3 ** 4")
    );
}

#[test]
fn comparisons_do_not_chain() {
    let parse = parse("1 == 2 == 3");
    assert_eq!(1, parse.diagnostics.len());
}

#[test]
fn postfix_chains() {
    assert_eq!(
        concat!(
            "(Program (UnwrapExpression (IndexExpression (CallExpression ",
            r#"(MemberExpression (VariableName "a") "." "b") (Arguments "(" "1" ")")) "#,
            r#""[" "2" "]") "?"))"#,
        ),
        perfect("a.b(1)[2]?")
    );
}

#[test]
fn prefix_binds_tighter_than_infix() {
    assert_eq!(
        r#"(Program (InfixExpression (PrefixExpression "-" "1") "*" "2"))"#,
        perfect("-1 * 2")
    );
}

#[test]
fn let_statement() {
    assert_eq!(
        r#"(Program (LetStatement "let" "x" "=" "1" ";"))"#,
        perfect("let x = 1;")
    );

    assert_eq!(
        r#"(Program (LetStatement "pub" "let" "x" ":" (OptionType "?" (NamedType "num")) "=" "none" ";"))"#,
        perfect("pub let x: ?num = none;")
    );
}

#[test]
fn assignments_are_right_associative() {
    assert_eq!(
        concat!(
            r#"(Program (ExpressionStatement (AssignExpression (VariableName "a") "=" "#,
            r#"(AssignExpression (VariableName "b") "+=" "1")) ";"))"#,
        ),
        perfect("a = b += 1;")
    );
}

#[test]
fn block_expressions_end_statements() {
    assert_eq!(
        concat!(
            r#"(Program (ExpressionStatement (IfExpression "if" (VariableName "x") "#,
            r#"(Block "{" "}"))) (PrefixExpression "-" "1"))"#,
        ),
        perfect("if x {} -1")
    );
}

#[test]
fn blocks_have_tail_expressions() {
    assert_eq!(
        concat!(
            r#"(Program (LetStatement "let" "x" "=" (Block "{" "#,
            r#"(LetStatement "let" "y" "=" "1" ";") (VariableName "y") "}") ";"))"#,
        ),
        perfect("let x = { let y = 1; y };")
    );
}

#[test]
fn ranges_and_casts() {
    assert_eq!(
        r#"(Program (RangeExpression "1" ".." (InfixExpression "2" "+" "3")))"#,
        perfect("1..2 + 3")
    );

    assert_eq!(
        r#"(Program (CastExpression (VariableName "x") "as" (ListType "[" (NamedType "num") "]")))"#,
        perfect("x as [num]")
    );
}

#[test]
fn imports() {
    assert_eq!(
        concat!(
            r#"(Program (ImportItem "import" "{" (ImportCandidate "a") "," "#,
            r#"(ImportCandidate "type" "B") "," "}" "from" (Module "m") ";"))"#,
        ),
        perfect("import { a, type B, } from m;")
    );
}

#[test]
fn full_script() {
    let source = r#"
import { Light, type Color } from lights;

@Hue type Hue = { brightness: num, color: ?str };

/* Runs every five minutes. */
#[trigger minute(5), inline]
pub fn main() -> null {
    let lights: [Light] = get_lights();
    for light in lights {
        if light.on { continue; }
        light.brightness += 10;
    }

    let level = match lights.len() {
        0 => "none",
        1..=3 => "few",
        _ => "many",
    };

    try {
        throw("boom");
    } catch err {
        println(err.message);
    }

    let square = fn(x: num) -> num { x ** 2 };
    let room = new { name: "kitchen", "on": true };
    while false { break; }
    loop { break; }
    return;
}

impl Dimmer for @Hue with { Brightness } {
    fn dim(self: Hue) {}
}
"#;

    let parse = parse(source);
    assert!(parse.is_perfect(), "{:#?}", parse.diagnostics);

    let items: Vec<Kind> = parse
        .tree
        .green()
        .children()
        .iter()
        .map(Node::kind)
        .filter(|kind| !kind.is_skipped())
        .collect();

    assert_eq!(
        vec![
            Kind::ImportItem,
            Kind::SingletonDefinition,
            Kind::FunctionDefinition,
            Kind::ImplBlock,
        ],
        items
    );
}
