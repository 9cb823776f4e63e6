use std::ops::Range;

use serde::Serialize;

/// A position in a source text. Lines and columns start at one, and columns
/// count characters; `index` is a byte offset.
#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq, Serialize)]
pub struct Location {
    pub line: usize,
    pub column: usize,
    pub index: usize,
}

impl Location {
    pub const START: Location = Location {
        line: 1,
        column: 1,
        index: 0,
    };

    /// The location just after `text`, if `text` starts at this location.
    pub fn advance(self, text: &str) -> Location {
        let mut location = self;
        for c in text.chars() {
            if c == '\n' {
                location.line += 1;
                location.column = 1;
            } else {
                location.column += 1;
            }
        }

        location.index += text.len();
        location
    }
}

impl Default for Location {
    fn default() -> Self {
        Self::START
    }
}

impl PartialOrd for Location {
    fn partial_cmp(&self, other: &Self) -> Option<std::cmp::Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for Location {
    fn cmp(&self, other: &Self) -> std::cmp::Ordering {
        self.index.cmp(&other.index)
    }
}

/// A half-open region of a source text.
#[derive(Clone, Copy, Debug, Default, Eq, Hash, PartialEq, Serialize)]
pub struct Span {
    pub start: Location,
    pub end: Location,
}

impl Span {
    pub fn new(start: Location, end: Location) -> Self {
        debug_assert!(start <= end);
        Self { start, end }
    }

    pub fn empty(at: Location) -> Self {
        Self { start: at, end: at }
    }

    pub fn range(&self) -> Range<usize> {
        self.start.index..self.end.index
    }

    pub fn length(&self) -> usize {
        self.end.index - self.start.index
    }

    pub fn contains(&self, other: &Span) -> bool {
        self.start <= other.start && other.end <= self.end
    }
}

/// Maps byte offsets of a text to line and column positions and back.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct LineIndex {
    text: String,
    /// Byte offset of the start of every line.
    lines: Vec<usize>,
}

impl LineIndex {
    pub fn new(text: &str) -> Self {
        let lines = std::iter::once(0)
            .chain(text.match_indices('\n').map(|(at, _)| at + 1))
            .collect();

        Self {
            text: text.into(),
            lines,
        }
    }

    pub fn text(&self) -> &str {
        &self.text
    }

    /// The zero-based line containing the given offset.
    fn line_of(&self, offset: usize) -> usize {
        self.lines.partition_point(|&start| start <= offset) - 1
    }

    pub fn location(&self, offset: usize) -> Location {
        let offset = self.clamp(offset);
        let line = self.line_of(offset);
        let column = self.text[self.lines[line]..offset].chars().count() + 1;

        Location {
            line: line + 1,
            column,
            index: offset,
        }
    }

    pub fn span(&self, range: Range<usize>) -> Span {
        Span::new(self.location(range.start), self.location(range.end))
    }

    /// The zero-based line and UTF-16 column of an offset, as used by the
    /// language server protocol.
    pub fn utf16_position(&self, offset: usize) -> (u32, u32) {
        let offset = self.clamp(offset);
        let line = self.line_of(offset);
        let column: usize = self.text[self.lines[line]..offset]
            .chars()
            .map(char::len_utf16)
            .sum();

        (line as u32, column as u32)
    }

    /// The byte offset of a zero-based line and UTF-16 column. Positions past
    /// the end of a line are clamped to its end.
    pub fn utf16_offset(&self, line: u32, column: u32) -> usize {
        let Some(&start) = self.lines.get(line as usize) else {
            return self.text.len();
        };

        let end = self
            .lines
            .get(line as usize + 1)
            .map(|&next| next - 1)
            .unwrap_or(self.text.len());

        let mut units = 0;
        for (at, c) in self.text[start..end].char_indices() {
            if units >= column as usize {
                return start + at;
            }

            units += c.len_utf16();
        }

        end
    }

    /// Clamp an offset into the text and back onto a character boundary.
    fn clamp(&self, offset: usize) -> usize {
        let mut offset = offset.min(self.text.len());
        while !self.text.is_char_boundary(offset) {
            offset -= 1;
        }
        offset
    }
}

#[cfg(test)]
mod tests {
    use super::{LineIndex, Location};

    #[test]
    fn locations_are_one_based() {
        let index = LineIndex::new("let x\n  = 5;");
        assert_eq!(Location::START, index.location(0));
        assert_eq!(
            Location {
                line: 2,
                column: 3,
                index: 8
            },
            index.location(8)
        );
    }

    #[test]
    fn columns_count_characters() {
        let index = LineIndex::new("'æøå' + x");
        assert_eq!(6, index.location("'æøå'".len()).column);
    }

    #[test]
    fn advance_agrees_with_index() {
        let text = "a\n bc\n\n d";
        let index = LineIndex::new(text);
        let mut location = Location::START;

        for (at, c) in text.char_indices() {
            assert_eq!(index.location(at), location);
            location = location.advance(&text[at..at + c.len_utf8()]);
        }

        assert_eq!(index.location(text.len()), location);
    }

    #[test]
    fn utf16_round_trip() {
        let text = "x = '𐺰';\ny";
        let index = LineIndex::new(text);

        let (line, column) = index.utf16_position(text.find(';').unwrap());
        assert_eq!((0, 7), (line, column));
        assert_eq!(text.find(';').unwrap(), index.utf16_offset(line, column));
        assert_eq!(text.len() - 1, index.utf16_offset(1, 0));
        assert_eq!(text.find('\n').unwrap(), index.utf16_offset(0, 100));
    }
}
