//! Keyword spellings per grammar version. The lexer only produces
//! identifiers; these tables give the candidate keyword for an identifier,
//! which the parser accepts only where the grammar allows it.

use crate::syntax::green::Kind;
use crate::syntax::version::Version;

/// Sorted by spelling.
pub static CURRENT: &[(&str, Kind)] = &[
    ("as", Kind::As),
    ("assert", Kind::BuiltinFunc),
    ("break", Kind::Break),
    ("catch", Kind::Catch),
    ("continue", Kind::Continue),
    ("debug", Kind::BuiltinFunc),
    ("else", Kind::Else),
    ("exit", Kind::BuiltinFunc),
    ("false", Kind::False),
    ("fn", Kind::Fn),
    ("for", Kind::For),
    ("from", Kind::From),
    ("if", Kind::If),
    ("impl", Kind::Impl),
    ("import", Kind::Import),
    ("in", Kind::In),
    ("let", Kind::Let),
    ("loop", Kind::Loop),
    ("match", Kind::Match),
    ("new", Kind::New),
    ("none", Kind::None),
    ("null", Kind::Null),
    ("off", Kind::Off),
    ("on", Kind::On),
    ("print", Kind::BuiltinFunc),
    ("println", Kind::BuiltinFunc),
    ("pub", Kind::Pub),
    ("return", Kind::Return),
    ("templ", Kind::Templ),
    ("throw", Kind::BuiltinFunc),
    ("trigger", Kind::Trigger),
    ("true", Kind::True),
    ("try", Kind::Try),
    ("type", Kind::Type),
    ("while", Kind::While),
    ("with", Kind::With),
];

/// Sorted by spelling.
pub static LEGACY: &[(&str, Kind)] = &[
    ("as", Kind::As),
    ("assert", Kind::BuiltinFunc),
    ("bool", Kind::PrimitiveType),
    ("break", Kind::Break),
    ("catch", Kind::Catch),
    ("continue", Kind::Continue),
    ("else", Kind::Else),
    ("exec", Kind::BuiltinFunc),
    ("exit", Kind::BuiltinFunc),
    ("false", Kind::False),
    ("fn", Kind::Fn),
    ("for", Kind::For),
    ("from", Kind::From),
    ("get", Kind::BuiltinFunc),
    ("http", Kind::BuiltinFunc),
    ("if", Kind::If),
    ("import", Kind::Import),
    ("in", Kind::In),
    ("let", Kind::Let),
    ("log", Kind::BuiltinFunc),
    ("loop", Kind::Loop),
    ("notify", Kind::BuiltinFunc),
    ("null", Kind::Null),
    ("num", Kind::PrimitiveType),
    ("off", Kind::Off),
    ("on", Kind::On),
    ("print", Kind::BuiltinFunc),
    ("return", Kind::Return),
    ("sleep", Kind::BuiltinFunc),
    ("str", Kind::PrimitiveType),
    ("switch", Kind::BuiltinFunc),
    ("switch_on", Kind::BuiltinFunc),
    ("throw", Kind::BuiltinFunc),
    ("time", Kind::BuiltinVar),
    ("true", Kind::True),
    ("try", Kind::Try),
    ("user", Kind::BuiltinVar),
    ("weather", Kind::BuiltinVar),
    ("while", Kind::While),
];

/// The keyword table of a language version.
pub fn of(version: Version) -> &'static [(&'static str, Kind)] {
    match version {
        Version::Current => CURRENT,
        Version::Legacy => LEGACY,
    }
}

/// The keyword candidate for an identifier, if any.
pub fn resolve(table: &[(&str, Kind)], ident: &str) -> Option<Kind> {
    table
        .binary_search_by(|(spelling, _)| (*spelling).cmp(ident))
        .ok()
        .map(|index| table[index].1)
}

#[cfg(test)]
mod tests {
    use super::{resolve, CURRENT, LEGACY};
    use crate::syntax::green::Kind;

    #[test]
    fn tables_are_sorted() {
        for table in [CURRENT, LEGACY] {
            assert!(table.windows(2).all(|pair| pair[0].0 < pair[1].0));
        }
    }

    #[test]
    fn lookups() {
        assert_eq!(Some(Kind::Type), resolve(CURRENT, "type"));
        assert_eq!(Some(Kind::BuiltinFunc), resolve(CURRENT, "println"));
        assert_eq!(None, resolve(CURRENT, "Type"));
        assert_eq!(None, resolve(LEGACY, "type"));
        assert_eq!(Some(Kind::BuiltinVar), resolve(LEGACY, "weather"));
    }
}
