//! Well formed programs parse without diagnostics.

use proptest::prelude::*;

use crate::syntax::grammar::keywords;
use crate::syntax::parse::parse;

/// Operators that chain without parentheses.
const CHAINING: &[&str] = &[
    "+", "-", "*", "/", "%", "**", "<<", ">>", "|", "^", "&", "||", "&&",
];

/// Operators that do not associate.
const COMPARISONS: &[&str] = &["==", "!=", "<", "<=", ">", ">="];

fn name() -> impl Strategy<Value = String> {
    "[a-z][a-z0-9_]{0,6}".prop_filter("keywords are reserved", |name| {
        keywords::resolve(keywords::CURRENT, name).is_none()
    })
}

fn expression() -> impl Strategy<Value = String> {
    let leaf = prop_oneof![name(), "[0-9]{1,4}", "\"[a-z ]{0,8}\""];

    leaf.prop_recursive(4, 32, 3, |inner| {
        prop_oneof![
            (inner.clone(), prop::sample::select(CHAINING), inner.clone())
                .prop_map(|(left, operator, right)| format!("{left} {operator} {right}")),
            (inner.clone(), prop::sample::select(COMPARISONS), inner.clone())
                .prop_map(|(left, operator, right)| format!("({left} {operator} {right})")),
            (name(), prop::collection::vec(inner.clone(), 0..3))
                .prop_map(|(function, arguments)| format!("{function}({})", arguments.join(", "))),
            (inner.clone(), name()).prop_map(|(object, field)| format!("({object}).{field}")),
            inner.prop_map(|inner| format!("({inner})")),
        ]
    })
}

fn statement() -> impl Strategy<Value = String> {
    prop_oneof![
        (name(), expression()).prop_map(|(name, value)| format!("let {name} = {value};")),
        (name(), expression()).prop_map(|(name, value)| format!("{name} += {value};")),
        expression().prop_map(|value| format!("{value};")),
        (expression(), prop::collection::vec(expression(), 0..3)).prop_map(|(condition, body)| {
            let body: Vec<String> = body.iter().map(|value| format!("    {value};")).collect();
            format!("while {condition} {{\n{}\n}}", body.join("\n"))
        }),
    ]
}

proptest! {
    #[test]
    fn statements_parse_cleanly(statements in prop::collection::vec(statement(), 0..6)) {
        let source = statements.join("\n");
        let parse = parse(&source);

        prop_assert!(parse.is_perfect(), "{source}\n{:#?}", parse.diagnostics);
        prop_assert_eq!(&source, &parse.tree.green().write());
    }
}
