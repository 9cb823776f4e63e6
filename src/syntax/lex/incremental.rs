use std::ops::Range;

use super::{Lexeme, RawTokens};
use crate::syntax::version::Version;

/// A replacement of `range` in the old text by `inserted` bytes of new text.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct Edit {
    pub range: Range<usize>,
    pub inserted: usize,
}

/// Re-lex `source`, the result of applying `edit` to the text `old` was lexed
/// from. Lexing restarts one token before the edit and stops as soon as the
/// new token boundaries line up with old ones past the edit, since the lexer
/// gives the same tokens from any token boundary.
pub fn relex(version: Version, old: &[Lexeme], source: &str, edit: &Edit) -> Vec<Lexeme> {
    let mut starts = Vec::with_capacity(old.len() + 1);
    let mut offset = 0;
    for lexeme in old {
        starts.push(offset);
        offset += lexeme.width;
    }
    starts.push(offset);

    let touching = starts[1..]
        .iter()
        .position(|&end| end >= edit.range.start)
        .unwrap_or(old.len());

    // One more token back: the lexer looks up to two bytes past a token.
    let first = touching.saturating_sub(1);
    let restart = starts[first];

    let removed = edit.range.len();
    let edited_end = edit.range.start + edit.inserted;

    let mut result = old[..first].to_vec();
    let mut relexed = 0;

    for (kind, error, range) in RawTokens::new(source, restart, version) {
        relexed += 1;
        result.push(Lexeme {
            kind,
            width: range.len(),
            error,
        });

        if range.end < edited_end {
            continue;
        }

        let old_end = range.end + removed - edit.inserted;
        if let Ok(index) = starts.binary_search(&old_end) {
            if old_end >= edit.range.end && index < old.len() {
                result.extend_from_slice(&old[index..]);
                break;
            }
        }
    }

    log::trace!(
        "relexed {relexed} tokens, reused {} of {}",
        result.len() - relexed,
        old.len()
    );

    result
}
