use lsp_types::{CompletionItem, CompletionItemKind, FoldingRange, FoldingRangeKind};

use crate::editor::{self, Completion};
use crate::syntax::{Kind, SyntaxTree, Version};

/// Folds end on the line before the closing delimiter, so that it stays
/// visible.
pub fn folding_ranges(tree: &SyntaxTree) -> Vec<FoldingRange> {
    let lines = tree.lines();

    editor::folds(tree)
        .into_iter()
        .filter_map(|range| {
            let (start_line, start_character) = lines.utf16_position(range.start);
            let (end_line, _) = lines.utf16_position(range.end);
            let end_line = end_line.checked_sub(1)?;

            (start_line < end_line).then(|| FoldingRange {
                start_line,
                start_character: Some(start_character),
                end_line,
                kind: Some(FoldingRangeKind::Region),
                ..Default::default()
            })
        })
        .collect()
}

pub fn completions(version: Version) -> Vec<CompletionItem> {
    editor::keyword_completions(version)
        .into_iter()
        .map(|completion| CompletionItem {
            label: completion.label.into(),
            kind: Some(item_kind(&completion)),
            ..Default::default()
        })
        .collect()
}

fn item_kind(completion: &Completion) -> CompletionItemKind {
    match completion.kind {
        Kind::BuiltinFunc => CompletionItemKind::FUNCTION,
        Kind::BuiltinVar => CompletionItemKind::VARIABLE,
        Kind::PrimitiveType => CompletionItemKind::CLASS,
        _ => CompletionItemKind::KEYWORD,
    }
}
