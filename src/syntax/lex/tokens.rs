use logos::{Lexer, Logos};

use crate::syntax::version::Version;

/// Why a stretch of text did not form a token.
#[derive(Clone, Copy, Debug, Default, Eq, Hash, PartialEq)]
pub enum LexError {
    #[default]
    UnexpectedCharacter,
    UnterminatedString,
    UnterminatedComment,
}

#[derive(Logos, Clone, Copy, Debug, Eq, PartialEq)]
#[logos(extras = Version)]
#[logos(error = LexError)]
pub enum Token {
    #[regex(r"[\p{XID_Start}_][\p{XID_Continue}]*")]
    Ident,

    #[regex(r"@[\p{XID_Start}_][\p{XID_Continue}]*")]
    SingletonIdent,

    #[regex(r"[0-9][0-9_]*", number)]
    Number,

    #[token("\"", |lex| string(lex, '"'))]
    #[token("'", |lex| string(lex, '\''))]
    String,

    #[token("#", hash)]
    Hash(Hash),

    #[token("/", slash)]
    Slash(Slash),

    #[token("(")]
    LeftParen,
    #[token(")")]
    RightParen,
    #[token("[")]
    LeftBracket,
    #[token("]")]
    RightBracket,
    #[token("{")]
    LeftBrace,
    #[token("}")]
    RightBrace,
    #[token(",")]
    Comma,
    #[token(";")]
    Semicolon,
    #[token(":")]
    Colon,
    #[token(".")]
    Dot,
    #[token("..")]
    DotDot,
    #[token("..=")]
    DotDotEqual,
    #[token("?")]
    QuestionMark,
    #[token("->")]
    Arrow,
    #[token("=>")]
    FatArrow,

    #[token("+")]
    Plus,
    #[token("-")]
    Minus,
    #[token("*")]
    Multiply,
    #[token("%")]
    Modulo,
    #[token("**")]
    Power,
    #[token("<<")]
    ShiftLeft,
    #[token(">>")]
    ShiftRight,
    #[token("|")]
    BitOr,
    #[token("^")]
    BitXor,
    #[token("&")]
    BitAnd,
    #[token("||")]
    LogicalOr,
    #[token("&&")]
    LogicalAnd,
    #[token("!")]
    Not,
    #[token("==")]
    Equal,
    #[token("!=")]
    NotEqual,
    #[token("<")]
    LessThan,
    #[token("<=")]
    LessThanEqual,
    #[token(">")]
    GreaterThan,
    #[token(">=")]
    GreaterThanEqual,

    #[token("=")]
    Assign,
    #[token("+=")]
    PlusAssign,
    #[token("-=")]
    MinusAssign,
    #[token("*=")]
    MultiplyAssign,
    #[token("/=")]
    DivideAssign,
    #[token("%=")]
    ModuloAssign,
    #[token("**=")]
    PowerAssign,
    #[token("<<=")]
    ShiftLeftAssign,
    #[token(">>=")]
    ShiftRightAssign,
    #[token("|=")]
    BitOrAssign,
    #[token("&=")]
    BitAndAssign,
    #[token("^=")]
    BitXorAssign,

    // Whitespace is tokenized as a bunch of non-lineshifts followed by a
    // single lineshift to ensure lexing produces the same result if done on a
    // line-by-line basis or on the entire string.
    #[regex(r"[\s--[\n\r]]+[\n\r]?|[\n\r]")]
    Whitespace,
}

/// What a `#` turned out to be.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum Hash {
    Annotation,
    Comment,
}

/// What a `/` turned out to be.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum Slash {
    Divide,
    LineComment,
    BlockComment,
}

/// Take a fractional part only if a digit follows the dot, so that `1..2`
/// remains a range.
fn number(lex: &mut Lexer<Token>) {
    let rest = lex.remainder().as_bytes();
    if rest.len() >= 2 && rest[0] == b'.' && rest[1].is_ascii_digit() {
        let fraction = 1 + rest[1..]
            .iter()
            .take_while(|b| b.is_ascii_digit() || **b == b'_')
            .count();
        lex.bump(fraction);
    }
}

/// Scan to the closing quote. Unterminated strings end before the line break
/// so the next line lexes normally.
fn string(lex: &mut Lexer<Token>, quote: char) -> Result<(), LexError> {
    let rest = lex.remainder();
    let mut chars = rest.char_indices().peekable();

    while let Some((at, c)) = chars.next() {
        match c {
            '\\' => match chars.peek() {
                Some((_, '\n' | '\r')) | None => {
                    lex.bump(at + 1);
                    return Err(LexError::UnterminatedString);
                }

                Some(_) => {
                    chars.next();
                }
            },

            '\n' | '\r' => {
                lex.bump(at);
                return Err(LexError::UnterminatedString);
            }

            c if c == quote => {
                lex.bump(at + c.len_utf8());
                return Ok(());
            }

            _ => {}
        }
    }

    lex.bump(rest.len());
    Err(LexError::UnterminatedString)
}

fn hash(lex: &mut Lexer<Token>) -> Hash {
    match lex.extras {
        Version::Current => Hash::Annotation,
        Version::Legacy => {
            lex.bump(line_length(lex.remainder()));
            Hash::Comment
        }
    }
}

fn slash(lex: &mut Lexer<Token>) -> Result<Slash, LexError> {
    if lex.extras == Version::Legacy {
        return Ok(Slash::Divide);
    }

    let rest = lex.remainder();
    if let Some(comment) = rest.strip_prefix('/') {
        lex.bump(1 + line_length(comment));
        Ok(Slash::LineComment)
    } else if let Some(comment) = rest.strip_prefix('*') {
        match comment.find("*/") {
            Some(end) => {
                lex.bump(1 + end + 2);
                Ok(Slash::BlockComment)
            }

            None => {
                lex.bump(rest.len());
                Err(LexError::UnterminatedComment)
            }
        }
    } else {
        Ok(Slash::Divide)
    }
}

/// The length of the text up to, but not including, the next line break.
fn line_length(text: &str) -> usize {
    text.find(['\n', '\r']).unwrap_or(text.len())
}
