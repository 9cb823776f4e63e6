use super::errors::{Diagnostic, Diagnostics, ErrorType, Severity};
use super::green::Kind;
use super::lex::LexError;
use super::source::Span;

/// Lists longer than this are cut short in "expected one of" notes.
const MAX_EXPECTED: usize = 8;

impl Diagnostics {
    pub(crate) fn lex_error(&mut self, at: Span) -> LexErrors {
        LexErrors {
            diagnostics: self,
            primary: at,
        }
    }

    pub(crate) fn parse_error(&mut self, at: Span) -> ParseErrors {
        ParseErrors {
            diagnostics: self,
            primary: at,
        }
    }
}

pub(crate) struct LexErrors<'a> {
    diagnostics: &'a mut Diagnostics,
    primary: Span,
}

impl LexErrors<'_> {
    pub fn invalid_token(&mut self, cause: LexError, lexeme: &str) {
        let error = match cause {
            LexError::UnterminatedString => self
                .error("unterminated string literal")
                .with_note("strings cannot span multiple lines"),

            LexError::UnterminatedComment => self
                .error("unterminated block comment")
                .with_help("close the comment with `*/`"),

            LexError::UnexpectedCharacter => {
                let shown = lexeme.escape_debug();
                self.error(format!("unexpected character `{shown}`"))
            }
        };

        self.diagnostics.add(error);
    }

    fn error(&self, message: impl Into<String>) -> Diagnostic {
        Diagnostic::new(ErrorType::Lexical, Severity::Error, self.primary, message)
    }
}

pub(crate) struct ParseErrors<'a> {
    diagnostics: &'a mut Diagnostics,
    primary: Span,
}

impl ParseErrors<'_> {
    pub fn unexpected(&mut self, found: Kind, lexeme: &str, expected: &[Kind]) {
        let found = match found {
            Kind::Eof => "end of input".to_string(),
            Kind::Ident => format!("identifier `{lexeme}`"),
            Kind::Number | Kind::String => format!("literal {lexeme}"),
            other => other.describe(),
        };

        let mut error = self.error(format!("unexpected {found}"));
        if let Some(note) = expected_note(expected) {
            error = error.with_note(note);
        }

        self.diagnostics.add(error);
    }

    pub fn missing(&mut self, terminator: Kind) {
        let error = self.error(format!("missing {}", terminator.describe()));
        self.diagnostics.add(error);
    }

    pub fn unclosed_delimiter(&mut self, delimiter: Kind) {
        let note = Diagnostic::new(
            ErrorType::Syntax,
            Severity::Note,
            self.primary,
            format!("this {} is never closed", delimiter.describe()),
        );

        let note = match delimiter.closing() {
            Some(closing) => note.with_help(format!("add a matching {}", closing.describe())),
            None => note,
        };

        self.diagnostics.add(note);
    }

    fn error(&self, message: impl Into<String>) -> Diagnostic {
        Diagnostic::new(ErrorType::Syntax, Severity::Error, self.primary, message)
    }
}

fn expected_note(expected: &[Kind]) -> Option<String> {
    let mut described: Vec<String> = Vec::new();
    for kind in expected {
        let description = kind.describe();
        if !described.contains(&description) {
            described.push(description);
        }
    }

    match described.len() {
        0 => None,
        1 => Some(format!("expected {}", described[0])),
        n if n <= MAX_EXPECTED => Some(format!("expected one of {}", described.join(", "))),
        _ => {
            let shown = described[..MAX_EXPECTED].join(", ");
            Some(format!("expected one of {shown}, ..."))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::expected_note;
    use crate::syntax::green::Kind;

    #[test]
    fn single_expectation() {
        assert_eq!(
            Some("expected `;`".to_string()),
            expected_note(&[Kind::Semicolon])
        );
    }

    #[test]
    fn duplicate_descriptions_collapse() {
        assert_eq!(
            Some("expected one of a comment, `)`".to_string()),
            expected_note(&[Kind::LineComment, Kind::BlockComment, Kind::RightParen])
        );
    }

    #[test]
    fn long_lists_are_cut() {
        let expected = [
            Kind::Let,
            Kind::Fn,
            Kind::If,
            Kind::While,
            Kind::For,
            Kind::Loop,
            Kind::Return,
            Kind::Break,
            Kind::Continue,
        ];

        let note = expected_note(&expected).unwrap();
        assert!(note.ends_with(", ..."));
        assert!(!note.contains("`continue`"));
    }
}
