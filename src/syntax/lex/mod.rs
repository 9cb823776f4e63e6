//! The lexer turns source text into tokens. It never fails: characters that
//! do not start any token become [`Kind::Error`] tokens, and scanning
//! continues after them.

mod incremental;
mod tokens;


use std::ops::Range;

use logos::Logos;

pub use self::incremental::{relex, Edit};
pub use self::tokens::LexError;
use self::tokens::{Hash, Slash, Token as Raw};
use super::green::Kind;
use super::source::{Location, Span};
use super::version::Version;

/// A token with its position and text in the source.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub struct Token<'src> {
    pub kind: Kind,
    pub span: Span,
    pub text: &'src str,
    /// Set for [`Kind::Error`] tokens.
    pub error: Option<LexError>,
}

/// A token without its position, as cached by documents between edits.
#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq)]
pub struct Lexeme {
    pub kind: Kind,
    pub width: usize,
    pub error: Option<LexError>,
}

/// Lex the whole of `source`.
pub fn tokenize(source: &str, version: Version) -> Tokens<'_> {
    tokenize_from(source, Location::START, version)
}

/// Lex `source` starting at `start`, which must be a token boundary. The
/// result is the same as the tail of a full lex.
pub fn tokenize_from(source: &str, start: Location, version: Version) -> Tokens<'_> {
    Tokens {
        raw: RawTokens::new(source, start.index, version),
        source,
        location: start,
    }
}

/// Lex `source` into position-less lexemes.
pub fn lexemes(source: &str, version: Version) -> Vec<Lexeme> {
    RawTokens::new(source, 0, version)
        .map(|(kind, error, range)| Lexeme {
            kind,
            width: range.len(),
            error,
        })
        .collect()
}

/// Recover positioned tokens from lexemes of `source`.
pub fn tokens_of<'a, 'src: 'a>(
    source: &'src str,
    lexemes: &'a [Lexeme],
) -> impl Iterator<Item = Token<'src>> + 'a {
    let mut location = Location::START;
    lexemes.iter().map(move |lexeme| {
        let start = location;
        let text = &source[start.index..start.index + lexeme.width];
        location = start.advance(text);

        Token {
            kind: lexeme.kind,
            span: Span::new(start, location),
            text,
            error: lexeme.error,
        }
    })
}

pub struct Tokens<'src> {
    raw: RawTokens<'src>,
    source: &'src str,
    location: Location,
}

impl<'src> Iterator for Tokens<'src> {
    type Item = Token<'src>;

    fn next(&mut self) -> Option<Self::Item> {
        let (kind, error, range) = self.raw.next()?;
        let text = &self.source[range];
        let start = self.location;
        self.location = start.advance(text);

        Some(Token {
            kind,
            span: Span::new(start, self.location),
            text,
            error,
        })
    }
}

/// Token kinds and lexical errors with absolute byte ranges.
struct RawTokens<'src> {
    lexer: logos::Lexer<'src, Raw>,
    offset: usize,
    peeked: Option<(Result<Raw, LexError>, Range<usize>)>,
}

impl<'src> RawTokens<'src> {
    fn new(source: &'src str, offset: usize, version: Version) -> Self {
        Self {
            lexer: Raw::lexer_with_extras(&source[offset..], version),
            offset,
            peeked: None,
        }
    }

    fn advance(&mut self) -> Option<(Result<Raw, LexError>, Range<usize>)> {
        if let Some(peeked) = self.peeked.take() {
            return Some(peeked);
        }

        let result = self.lexer.next()?;
        Some((result, self.lexer.span()))
    }
}

impl Iterator for RawTokens<'_> {
    type Item = (Kind, Option<LexError>, Range<usize>);

    fn next(&mut self) -> Option<Self::Item> {
        let (result, range) = self.advance()?;
        let text = self.lexer.source();
        let mut end = range.end;

        // An unmatched character must not be split into several error tokens.
        while !text.is_char_boundary(end) {
            match self.advance() {
                Some((Err(_), next)) if next.start == end => end = next.end,
                Some(other) => {
                    self.peeked = Some(other);
                    break;
                }
                None => break,
            }
        }

        let range = self.offset + range.start..self.offset + end;
        let kind = match result {
            Err(error) => return Some((Kind::Error, Some(error), range)),
            Ok(Raw::Ident) => Kind::Ident,
            Ok(Raw::SingletonIdent) => Kind::SingletonIdent,
            Ok(Raw::Number) => Kind::Number,
            Ok(Raw::String) => Kind::String,
            Ok(Raw::Hash(Hash::Annotation)) => Kind::Hash,
            Ok(Raw::Hash(Hash::Comment)) => Kind::LineComment,
            Ok(Raw::Slash(Slash::Divide)) => Kind::Divide,
            Ok(Raw::Slash(Slash::LineComment)) => Kind::LineComment,
            Ok(Raw::Slash(Slash::BlockComment)) => Kind::BlockComment,
            Ok(Raw::LeftParen) => Kind::LeftParen,
            Ok(Raw::RightParen) => Kind::RightParen,
            Ok(Raw::LeftBracket) => Kind::LeftBracket,
            Ok(Raw::RightBracket) => Kind::RightBracket,
            Ok(Raw::LeftBrace) => Kind::LeftBrace,
            Ok(Raw::RightBrace) => Kind::RightBrace,
            Ok(Raw::Comma) => Kind::Comma,
            Ok(Raw::Semicolon) => Kind::Semicolon,
            Ok(Raw::Colon) => Kind::Colon,
            Ok(Raw::Dot) => Kind::Dot,
            Ok(Raw::DotDot) => Kind::DotDot,
            Ok(Raw::DotDotEqual) => Kind::DotDotEqual,
            Ok(Raw::QuestionMark) => Kind::QuestionMark,
            Ok(Raw::Arrow) => Kind::Arrow,
            Ok(Raw::FatArrow) => Kind::FatArrow,
            Ok(Raw::Plus) => Kind::Plus,
            Ok(Raw::Minus) => Kind::Minus,
            Ok(Raw::Multiply) => Kind::Multiply,
            Ok(Raw::Modulo) => Kind::Modulo,
            Ok(Raw::Power) => Kind::Power,
            Ok(Raw::ShiftLeft) => Kind::ShiftLeft,
            Ok(Raw::ShiftRight) => Kind::ShiftRight,
            Ok(Raw::BitOr) => Kind::BitOr,
            Ok(Raw::BitXor) => Kind::BitXor,
            Ok(Raw::BitAnd) => Kind::BitAnd,
            Ok(Raw::LogicalOr) => Kind::LogicalOr,
            Ok(Raw::LogicalAnd) => Kind::LogicalAnd,
            Ok(Raw::Not) => Kind::Not,
            Ok(Raw::Equal) => Kind::Equal,
            Ok(Raw::NotEqual) => Kind::NotEqual,
            Ok(Raw::LessThan) => Kind::LessThan,
            Ok(Raw::LessThanEqual) => Kind::LessThanEqual,
            Ok(Raw::GreaterThan) => Kind::GreaterThan,
            Ok(Raw::GreaterThanEqual) => Kind::GreaterThanEqual,
            Ok(Raw::Assign) => Kind::Assign,
            Ok(Raw::PlusAssign) => Kind::PlusAssign,
            Ok(Raw::MinusAssign) => Kind::MinusAssign,
            Ok(Raw::MultiplyAssign) => Kind::MultiplyAssign,
            Ok(Raw::DivideAssign) => Kind::DivideAssign,
            Ok(Raw::ModuloAssign) => Kind::ModuloAssign,
            Ok(Raw::PowerAssign) => Kind::PowerAssign,
            Ok(Raw::ShiftLeftAssign) => Kind::ShiftLeftAssign,
            Ok(Raw::ShiftRightAssign) => Kind::ShiftRightAssign,
            Ok(Raw::BitOrAssign) => Kind::BitOrAssign,
            Ok(Raw::BitAndAssign) => Kind::BitAndAssign,
            Ok(Raw::BitXorAssign) => Kind::BitXorAssign,
            Ok(Raw::Whitespace) => Kind::Whitespace,
        };

        Some((kind, None, range))
    }
}
