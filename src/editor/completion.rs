use crate::syntax::grammar::keywords;
use crate::syntax::{Kind, Version};

#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub struct Completion {
    pub label: &'static str,
    pub kind: Kind,
}

impl Completion {
    pub fn is_builtin(&self) -> bool {
        matches!(self.kind, Kind::BuiltinFunc | Kind::BuiltinVar)
    }
}

/// Keywords and builtins of a language version, sorted by spelling.
pub fn keyword_completions(version: Version) -> Vec<Completion> {
    keywords::of(version)
        .iter()
        .map(|&(label, kind)| Completion { label, kind })
        .collect()
}
