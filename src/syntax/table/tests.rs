use super::{Action, Table};
use crate::syntax::grammar::{Grammar, GrammarBuilder, Symbol};
use crate::syntax::green::Kind;
use crate::syntax::version::Version;

/// `e -> e + e | e * e | e ** e | e == e | - e | number`
fn arithmetic() -> Grammar {
    let _ = pretty_env_logger::try_init();
    let mut g = GrammarBuilder::new("arithmetic");
    let program = g.node(Kind::Program);
    let e = g.hidden("e");

    g.rule(program, vec![e.into()]);
    for op in [Kind::Plus, Kind::Multiply, Kind::Power, Kind::Equal] {
        g.rule(e, vec![e.into(), op.into(), e.into()]);
    }
    g.rule_prec(e, vec![Kind::Minus.into(), e.into()], Kind::Not);
    g.rule(e, vec![Symbol::from(Kind::Number)]);

    g.nonassoc(&[Kind::Equal]);
    g.left(&[Kind::Plus]);
    g.left(&[Kind::Multiply]);
    g.right(&[Kind::Power]);
    g.right(&[Kind::Not]);

    g.finish(program, &[])
}

/// Drive the table over `input`, rendering every reduction of a binary or
/// prefix rule as a parenthesized group.
fn bracket(table: &Table, input: &[Kind]) -> Option<String> {
    let mut states = vec![0];
    let mut values: Vec<String> = Vec::new();
    let mut input = input.iter().copied().chain(std::iter::once(Kind::Eof));
    let mut next = input.next()?;

    loop {
        let state = *states.last()?;
        match table.action(state, next)? {
            Action::Shift(target) => {
                states.push(target);
                values.push(match next.spelling() {
                    Some(spelling) => spelling.to_string(),
                    None => "n".into(),
                });
                next = input.next()?;
            }

            Action::Reduce(rule) => {
                let rule = table.grammar().rule(rule);
                let count = rule.symbols.len();
                let parts = values.split_off(values.len() - count);
                states.truncate(states.len() - count);

                values.push(if count > 1 {
                    format!("({})", parts.join(" "))
                } else {
                    parts.concat()
                });

                let top = *states.last()?;
                states.push(table.goto(top, rule.lhs)?);
            }

            Action::Accept => return values.pop(),
        }
    }
}

#[test]
fn precedence_and_associativity() {
    let table = Table::build(arithmetic());
    let n = Kind::Number;

    let cases: &[(&[Kind], &str)] = &[
        (&[n, Kind::Plus, n, Kind::Multiply, n], "(n + (n * n))"),
        (&[n, Kind::Multiply, n, Kind::Plus, n], "((n * n) + n)"),
        (&[n, Kind::Plus, n, Kind::Plus, n], "((n + n) + n)"),
        (&[n, Kind::Power, n, Kind::Power, n], "(n ** (n ** n))"),
        (&[Kind::Minus, n, Kind::Multiply, n], "((- n) * n)"),
        (&[n, Kind::Equal, n, Kind::Plus, n], "(n == (n + n))"),
    ];

    for (input, expected) in cases {
        assert_eq!(Some(expected.to_string()), bracket(&table, input));
    }
}

#[test]
fn nonassociative_chains_are_errors() {
    let table = Table::build(arithmetic());
    let n = Kind::Number;
    assert_eq!(None, bracket(&table, &[n, Kind::Equal, n, Kind::Equal, n]));
}

#[test]
fn accepts_follows_reductions() {
    let table = Table::build(arithmetic());

    let Some(Action::Shift(after_number)) = table.action(0, Kind::Number) else {
        panic!("a number starts an expression");
    };

    let stack = [0, after_number];
    assert!(table.accepts(&stack, Kind::Plus));
    assert!(table.accepts(&stack, Kind::Eof));
    assert!(!table.accepts(&stack, Kind::Number));

    let expected = table.expected(&stack);
    assert!(expected.contains(&Kind::Multiply));
    assert!(!expected.contains(&Kind::Minus));
}

#[test]
fn stacks_after_a_shift() {
    let table = Table::build(arithmetic());

    let Some(Action::Shift(after_number)) = table.action(0, Kind::Number) else {
        panic!("a number starts an expression");
    };

    let stack = [0, after_number];
    let after_plus = table.after(&stack, Kind::Plus).expect("`+` follows a number");

    assert_eq!(0, after_plus[0]);
    assert!(table.accepts(&after_plus, Kind::Number));
    assert!(table.accepts(&after_plus, Kind::Minus));
    assert!(!table.accepts(&after_plus, Kind::Plus));

    assert_eq!(None, table.after(&stack, Kind::Number));
    assert_eq!(None, table.after(&stack, Kind::Eof));
}

#[test]
fn invalid_tokens_are_never_expected() {
    let table = Version::Current.table();
    assert!(table.accepts(&[0], Kind::Error));
    assert!(!table.expected(&[0]).contains(&Kind::Error));
}

#[test]
fn grammars_build() {
    for version in [Version::Current, Version::Legacy] {
        let table = version.table();
        assert!(table.state_count() > 1);
        assert!(table.accepts(&[0], Kind::Eof));
        assert!(!table.accepts(&[0], Kind::RightParen));
    }
}

#[test]
fn keywords_start_statements() {
    let table = Version::Current.table();
    assert!(table.accepts(&[0], Kind::Let));
    assert!(table.accepts(&[0], Kind::Fn));
    assert!(table.accepts(&[0], Kind::Import));
    assert!(!table.accepts(&[0], Kind::Else));

    let table = Version::Legacy.table();
    assert!(table.accepts(&[0], Kind::Let));
    assert!(!table.accepts(&[0], Kind::Impl));
}
