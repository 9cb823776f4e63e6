use std::ops::Range;

use ::log::trace;
use lsp_types::{Position, TextDocumentContentChangeEvent, Url};

use super::{Server, Tracked};
use crate::syntax::{Document, LineIndex, ParseOptions};

impl Server {
    pub fn insert_document(&mut self, name: Url, version: i32, text: String) {
        let options = ParseOptions::new(self.options.grammar).with_filename(name.as_str());
        let document = Document::new(text, options);
        self.tracked.insert(name, Tracked { document, version });
    }

    /// Apply the changes in order, returning `false` if the document is not
    /// tracked.
    pub fn apply_changes(
        &mut self,
        name: &Url,
        version: i32,
        changes: Vec<TextDocumentContentChangeEvent>,
    ) -> bool {
        let Some(tracked) = self.tracked.get_mut(name) else {
            return false;
        };

        for change in changes {
            match change.range {
                Some(range) => {
                    let range = to_offsets(tracked.document.tree().lines(), range);
                    trace!("editing {range:?} of `{name}`");
                    tracked.document.edit(range, &change.text);
                }

                None => tracked.document.replace(change.text),
            }
        }

        tracked.version = version;
        true
    }
}

/// Byte offsets of a protocol range, which counts UTF-16 code units.
pub fn to_offsets(lines: &LineIndex, range: lsp_types::Range) -> Range<usize> {
    let start = to_offset(lines, range.start);
    let end = to_offset(lines, range.end).max(start);
    start..end
}

pub fn to_offset(lines: &LineIndex, position: Position) -> usize {
    lines.utf16_offset(position.line, position.character)
}

pub fn to_position(lines: &LineIndex, offset: usize) -> Position {
    let (line, character) = lines.utf16_position(offset);
    Position { line, character }
}
