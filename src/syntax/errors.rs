use serde::Serialize;

use super::source::Span;

/// Stores reported diagnostics in the order they were reported.
#[derive(Clone, Debug, Default)]
pub struct Diagnostics {
    diagnostics: Vec<Diagnostic>,
    num_errors: usize,
}

impl Diagnostics {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn add(&mut self, diagnostic: Diagnostic) {
        if diagnostic.severity == Severity::Error {
            self.num_errors += 1;
        }

        self.diagnostics.push(diagnostic);
    }

    pub fn is_perfect(&self) -> bool {
        self.num_errors == 0
    }

    pub fn num_errors(&self) -> usize {
        self.num_errors
    }

    pub fn iter(&self) -> impl Iterator<Item = &Diagnostic> + '_ {
        self.diagnostics.iter()
    }

    pub fn into_vec(self) -> Vec<Diagnostic> {
        self.diagnostics
    }
}

#[derive(Clone, Debug, Eq, PartialEq)]
pub struct Diagnostic {
    pub ty: ErrorType,
    pub severity: Severity,
    pub span: Span,
    pub message: String,
    pub labels: Vec<(String, Span)>,
    pub notes: Vec<(String, NoteType)>,
}

impl Diagnostic {
    pub fn new(ty: ErrorType, severity: Severity, span: Span, message: impl Into<String>) -> Self {
        Self {
            ty,
            severity,
            span,
            message: message.into(),
            labels: Vec::new(),
            notes: Vec::new(),
        }
    }

    pub fn with_label(mut self, at: Span, message: impl Into<String>) -> Self {
        self.labels.push((message.into(), at));
        self
    }

    pub fn with_help(mut self, message: impl Into<String>) -> Self {
        self.notes.push((message.into(), NoteType::Help));
        self
    }

    pub fn with_note(mut self, message: impl Into<String>) -> Self {
        self.notes.push((message.into(), NoteType::Note));
        self
    }

    /// The shape in which the execution engine reports its own errors, so
    /// that front end and runtime errors render the same way.
    pub fn report<'a>(&'a self, filename: &'a str) -> Report<'a> {
        let span = ReportSpan {
            start: self.span.start,
            end: self.span.end,
            filename,
        };

        match self.severity {
            Severity::Error => Report {
                syntax_error: Some(SyntaxErrorReport {
                    message: &self.message,
                }),
                diagnostic_error: None,
                span,
            },

            Severity::Note => Report {
                syntax_error: None,
                diagnostic_error: Some(DiagnosticReport {
                    kind: self.severity,
                    message: &self.message,
                    notes: self.notes.iter().map(|(note, _)| note.as_str()).collect(),
                }),
                span,
            },
        }
    }
}

#[derive(Clone, Copy, Debug, Eq, Hash, Ord, PartialEq, PartialOrd, Serialize)]
pub enum ErrorType {
    Lexical,
    Syntax,
}

#[derive(Clone, Copy, Debug, Eq, Hash, Ord, PartialEq, PartialOrd, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Severity {
    Error,
    Note,
}

#[derive(Clone, Copy, Debug, Eq, Hash, Ord, PartialEq, PartialOrd)]
pub enum NoteType {
    Note,
    Help,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Report<'a> {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub syntax_error: Option<SyntaxErrorReport<'a>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub diagnostic_error: Option<DiagnosticReport<'a>>,
    pub span: ReportSpan<'a>,
}

#[derive(Debug, Serialize)]
pub struct SyntaxErrorReport<'a> {
    pub message: &'a str,
}

#[derive(Debug, Serialize)]
pub struct DiagnosticReport<'a> {
    pub kind: Severity,
    pub message: &'a str,
    pub notes: Vec<&'a str>,
}

#[derive(Debug, Serialize)]
pub struct ReportSpan<'a> {
    pub start: super::source::Location,
    pub end: super::source::Location,
    pub filename: &'a str,
}
