pub mod legend;

use lsp_types::{SemanticToken, SemanticTokens};

use crate::editor::{self, Highlight};
use crate::syntax::SyntaxTree;

pub fn compute(tree: &SyntaxTree) -> SemanticTokens {
    let mut builder = SemanticTokensBuilder::new(tree.text());

    for highlight in editor::highlight(tree) {
        builder.add_highlight(highlight);
    }

    builder.build()
}

/// Algorithm: in order to avoid having to traverse the entire source for every
/// token, we store the result of the previous `start_byte -> line, column`
/// mapping, and only retraverse if the given span is less than the start byte.
/// Otherwise, we just traverse the string from the start_byte and compute a
/// delta. Columns count UTF-16 code units.
struct SemanticTokensBuilder<'s> {
    source: &'s str,
    tokens: Vec<SemanticToken>,

    /// The start index of the previous span we traversed.
    previous: Option<usize>,
}

struct RelativeSpan {
    delta_line: usize,
    delta_column: usize,
    length: usize,
}

impl<'s> SemanticTokensBuilder<'s> {
    pub fn new(source: &'s str) -> Self {
        Self {
            source,
            tokens: Vec::new(),
            previous: None,
        }
    }

    pub fn build(self) -> SemanticTokens {
        SemanticTokens {
            result_id: None,
            data: self.tokens,
        }
    }

    /// Add a highlighted token to this list of semantic tokens.
    pub fn add_highlight(&mut self, highlight: Highlight) {
        if let Some((ty, modifiers)) = legend::for_category(highlight.category) {
            let relative = self.translate(highlight.range.start, highlight.range.end);
            self.previous = Some(highlight.range.start);
            self.push_token(relative, ty, modifiers);
        }
    }

    /// Push the given type and modifiers at the given span to the token list.
    fn push_token(&mut self, relative: RelativeSpan, ty: u32, modifiers: u32) {
        let Ok(delta_line) = u32::try_from(relative.delta_line) else {
            return;
        };
        let Ok(delta_start) = u32::try_from(relative.delta_column) else {
            return;
        };
        let Ok(length) = u32::try_from(relative.length) else {
            return;
        };

        self.tokens.push(SemanticToken {
            delta_line,
            delta_start,
            length,
            token_type: ty,
            token_modifiers_bitset: modifiers,
        });
    }

    /// Translate the given byte range into a span relative to `self.previous`.
    /// Tokens spanning several lines are cut at the first line break.
    /// This does *not* replace `self.previous`.
    fn translate(&self, start: usize, end: usize) -> RelativeSpan {
        let (source, mut index) = match self.previous {
            Some(previous) if previous <= start => (&self.source[previous..], previous),
            _ => (self.source, 0),
        };

        let mut delta_line = 0;
        let mut delta_column = 0;

        for c in source.chars() {
            if index >= start {
                break;
            }

            index += c.len_utf8();

            if c == '\n' {
                delta_line += 1;
                delta_column = 0;
            } else {
                delta_column += c.len_utf16();
            }
        }

        let length = self.source[start..end]
            .chars()
            .take_while(|c| *c != '\n')
            .map(char::len_utf16)
            .sum();

        RelativeSpan {
            delta_line,
            delta_column,
            length,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::{compute, legend};
    use crate::editor::Category;
    use crate::syntax::parse;

    #[test]
    fn tokens_are_delta_encoded() {
        let parse = parse("let s = \"é\";\nlet x = s;");
        let data = compute(&parse.tree).data;

        let encoded: Vec<_> = data
            .iter()
            .map(|token| (token.delta_line, token.delta_start, token.length))
            .collect();

        // let s = "é" / let x = s
        assert_eq!(
            vec![
                (0, 0, 3),
                (0, 4, 1),
                (0, 2, 1),
                (0, 2, 3),
                (1, 0, 3),
                (0, 4, 1),
                (0, 2, 1),
                (0, 2, 1),
            ],
            encoded
        );
    }

    #[test]
    fn punctuation_is_left_alone() {
        assert_eq!(None, legend::for_category(Category::Bracket));
        assert!(legend::for_category(Category::BuiltinFunction).is_some());
    }
}
