//! The parser should be pure and total.

use proptest::{prop_assert_eq, proptest};

use super::legacy;
use crate::syntax::green::Kind;
use crate::syntax::parse::parse;

proptest! {
    #[test]
    fn doesnt_crash(s in r".*") {
        let _ = parse(&s);
        let _ = legacy(&s);
    }

    #[test]
    fn doesnt_crash_on_near_misses(s in r"(let|fn|if|\{|\}|\(|\)|\[|\]|;|,|=|\+|x|1|#|@a| |\n){0,40}") {
        let parse = parse(&s);
        prop_assert_eq!(Kind::Program, parse.tree.green().kind());
    }
}

#[test]
fn tolerates_tiny_gibberish() {
    let _ = parse("ï¿¼0{");
}

#[test]
fn en_quad() {
    let _ = parse("\u{2000}");
}

#[test]
fn nonsense_in_parens() {
    let _ = parse("(\u{a8ff}");
}

#[test]
fn only_closing_delimiters() {
    let parse = parse(")]}");
    assert!(!parse.is_perfect());
    assert_eq!(")]}", parse.tree.green().write());
}
