use lsp_document::{IndexedText, Pos, TextAdapter, TextMap};
use lsp_types::{
    Diagnostic, DiagnosticRelatedInformation, DiagnosticSeverity, Location, NumberOrString,
    Position, Range, Url,
};

use super::Server;
use crate::meta;
use crate::syntax::errors::{self, ErrorType, Severity};
use crate::syntax::Span;

impl Server {
    pub fn send_diagnostics(&mut self, name: &Url) {
        let Some(tracked) = self.tracked.get(name) else {
            return;
        };

        let builder = DiagnosticBuilder::new(name, tracked.document.text());
        let diagnostics = tracked
            .document
            .diagnostics()
            .iter()
            .map(|diagnostic| builder.build(diagnostic))
            .collect();

        let version = Some(tracked.version);
        self.client
            .publish_diagnostics(name.clone(), diagnostics, version);
    }
}

struct DiagnosticBuilder<'a> {
    name: &'a Url,
    text: IndexedText<&'a str>,
}

impl<'a> DiagnosticBuilder<'a> {
    pub fn new(name: &'a Url, text: &'a str) -> Self {
        Self {
            name,
            text: IndexedText::new(text),
        }
    }

    pub fn build(&self, diagnostic: &errors::Diagnostic) -> Diagnostic {
        let severity = match diagnostic.severity {
            Severity::Error => DiagnosticSeverity::ERROR,
            Severity::Note => DiagnosticSeverity::INFORMATION,
        };

        let related_information = diagnostic
            .labels
            .iter()
            .map(|(message, span)| DiagnosticRelatedInformation {
                location: Location {
                    uri: self.name.clone(),
                    range: self.span_to_range(*span),
                },
                message: message.clone(),
            })
            .collect();

        let code = match diagnostic.ty {
            ErrorType::Lexical => "lexical",
            ErrorType::Syntax => "syntax",
        };

        let mut message = diagnostic.message.clone();
        for (note, _) in diagnostic.notes.iter() {
            message.push('\n');
            message.push_str(note);
        }

        Diagnostic {
            range: self.span_to_range(diagnostic.span),
            severity: Some(severity),
            code: Some(NumberOrString::String(code.into())),
            code_description: None,
            source: Some(meta::NAME.into()),
            message,
            related_information: Some(related_information),
            tags: None,
            data: None,
        }
    }

    pub fn span_to_range(&self, span: Span) -> Range {
        let range = self
            .text
            .offset_range_to_range(span.start.index..span.end.index)
            .unwrap_or(Pos::new(0, 0)..Pos::new(0, 0));
        let range = self.text.range_to_lsp_range(&range).unwrap_or_default();

        Range {
            start: Position {
                line: range.start.line,
                character: range.start.character,
            },
            end: Position {
                line: range.end.line,
                character: range.end.character,
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use lsp_types::{DiagnosticSeverity, Position, Url};

    use super::DiagnosticBuilder;
    use crate::syntax::parse;

    #[test]
    fn errors_and_notes() {
        let name = Url::parse("file:///script.hms").unwrap();
        let source = "f(1, 2";
        let parse = parse(source);
        let builder = DiagnosticBuilder::new(&name, source);

        let built: Vec<_> = parse
            .diagnostics
            .iter()
            .map(|diagnostic| builder.build(diagnostic))
            .collect();

        assert_eq!(2, built.len());
        assert_eq!(Some(DiagnosticSeverity::ERROR), built[0].severity);
        assert!(built[0].message.starts_with("unexpected end of input"));

        assert_eq!(Some(DiagnosticSeverity::INFORMATION), built[1].severity);
        assert_eq!(Position::new(0, 1), built[1].range.start);
        assert_eq!(Position::new(0, 2), built[1].range.end);
    }
}
