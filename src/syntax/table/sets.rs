use std::fmt;

use crate::syntax::green::Kind;

/// A set of terminals, indexed by the discriminant of their [`Kind`].
#[derive(Clone, Copy, Default, Eq, Hash, PartialEq)]
pub struct TermSet([u64; 4]);

impl TermSet {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn single(kind: Kind) -> Self {
        let mut set = Self::new();
        set.insert(kind);
        set
    }

    pub fn insert(&mut self, kind: Kind) -> bool {
        let (word, bit) = Self::locate(kind);
        let fresh = self.0[word] & bit == 0;
        self.0[word] |= bit;
        fresh
    }

    pub fn contains(&self, kind: Kind) -> bool {
        let (word, bit) = Self::locate(kind);
        self.0[word] & bit != 0
    }

    /// Add every terminal in `other`, returning whether anything changed.
    pub fn union(&mut self, other: &TermSet) -> bool {
        let mut changed = false;
        for (mine, theirs) in self.0.iter_mut().zip(other.0) {
            let merged = *mine | theirs;
            changed |= merged != *mine;
            *mine = merged;
        }
        changed
    }

    pub fn is_empty(&self) -> bool {
        self.0.iter().all(|word| *word == 0)
    }

    /// Iterate the members, given the universe they are drawn from.
    pub fn iter<'a>(&'a self, terminals: &'a [Kind]) -> impl Iterator<Item = Kind> + 'a {
        terminals.iter().copied().filter(|kind| self.contains(*kind))
    }

    fn locate(kind: Kind) -> (usize, u64) {
        let index = kind as u8;
        (usize::from(index / 64), 1 << (index % 64))
    }
}

impl fmt::Debug for TermSet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut set = f.debug_set();
        for index in 0..=u8::MAX {
            let (word, bit) = (usize::from(index / 64), 1u64 << (index % 64));
            if self.0[word] & bit != 0 {
                set.entry(&index);
            }
        }
        set.finish()
    }
}

#[cfg(test)]
mod tests {
    use super::TermSet;
    use crate::syntax::green::Kind;

    #[test]
    fn union_reports_change() {
        let mut a = TermSet::single(Kind::Plus);
        let b = TermSet::single(Kind::Eof);

        assert!(a.union(&b));
        assert!(!a.union(&b));
        assert!(a.contains(Kind::Plus));
        assert!(a.contains(Kind::Eof));
        assert!(!a.contains(Kind::Minus));
    }

    #[test]
    fn insert_is_idempotent() {
        let mut set = TermSet::new();
        assert!(set.is_empty());
        assert!(set.insert(Kind::Ident));
        assert!(!set.insert(Kind::Ident));
        assert!(!set.is_empty());
    }
}
