use std::ops::Range;

use crate::syntax::tree::{SyntaxNode, SyntaxTree};
use crate::syntax::Kind;

#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq)]
pub enum Category {
    ControlKeyword,
    OperatorKeyword,
    DefinitionKeyword,
    ModuleKeyword,
    Modifier,
    Keyword,

    Bool,
    Null,
    Number,
    String,
    Comment,

    ArithmeticOperator,
    LogicOperator,
    BitwiseOperator,
    CompareOperator,
    DefinitionOperator,
    UpdateOperator,
    Punctuation,
    Bracket,
    Separator,

    TypeName,
    Namespace,
    Function,
    Property,
    LocalVariable,
    Variable,
    Singleton,
    Annotation,
    BuiltinFunction,
    BuiltinVariable,

    Invalid,
}

/// A classified token.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct Highlight {
    pub range: Range<usize>,
    pub category: Category,
}

/// Categories by the kinds of a token's ancestors, ending with the token
/// itself. The first selector that is a suffix of the path wins.
static SELECTORS: &[(&[Kind], Category)] = &[
    (&[Kind::CallExpression, Kind::VariableName, Kind::Ident], Category::Function),
    (&[Kind::CallExpression, Kind::MemberExpression, Kind::Ident], Category::Function),
    (&[Kind::Module, Kind::Ident], Category::Namespace),
    (&[Kind::ImportStatement, Kind::Ident], Category::Namespace),
    (&[Kind::FunctionDefinition, Kind::Ident], Category::Function),
    (&[Kind::FunctionLiteral, Kind::Ident], Category::Function),
    (&[Kind::TriggerAnnotation, Kind::Ident], Category::Function),
    (&[Kind::Annotation, Kind::Ident], Category::Annotation),
    (&[Kind::TypeDefinition, Kind::Ident], Category::TypeName),
    (&[Kind::SingletonDefinition, Kind::Ident], Category::TypeName),
    (&[Kind::ImplBlock, Kind::Ident], Category::TypeName),
    (&[Kind::ImplCapabilities, Kind::Ident], Category::TypeName),
    (&[Kind::NamedType, Kind::Ident], Category::TypeName),
    (&[Kind::Parameter, Kind::Ident], Category::LocalVariable),
    (&[Kind::ForStatement, Kind::Ident], Category::LocalVariable),
    (&[Kind::ForExpression, Kind::Ident], Category::LocalVariable),
    (&[Kind::TryExpression, Kind::Ident], Category::LocalVariable),
    (&[Kind::MemberExpression, Kind::Ident], Category::Property),
    (&[Kind::ObjectField, Kind::Ident], Category::Property),
    (&[Kind::ObjectTypeField, Kind::Ident], Category::Property),
    (&[Kind::ImportCandidate, Kind::Ident], Category::Variable),
    (&[Kind::LetStatement, Kind::Ident], Category::Variable),
    (&[Kind::VariableName, Kind::Ident], Category::Variable),
];

/// The category of a token, given the kinds on the path from the root down
/// to and including the token.
pub fn classify(path: &[Kind]) -> Option<Category> {
    SELECTORS
        .iter()
        .find(|(selector, _)| path.ends_with(selector))
        .map(|(_, category)| *category)
        .or_else(|| path.last().and_then(|kind| token_category(*kind)))
}

fn token_category(kind: Kind) -> Option<Category> {
    Some(match kind {
        Kind::For
        | Kind::While
        | Kind::Loop
        | Kind::If
        | Kind::Else
        | Kind::Match
        | Kind::Try
        | Kind::Catch
        | Kind::Return
        | Kind::Break
        | Kind::Continue => Category::ControlKeyword,

        Kind::In => Category::OperatorKeyword,
        Kind::Let | Kind::Fn | Kind::Type | Kind::Impl | Kind::Templ | Kind::Trigger => {
            Category::DefinitionKeyword
        }
        Kind::Import | Kind::From => Category::ModuleKeyword,
        Kind::Pub => Category::Modifier,
        Kind::As | Kind::New | Kind::With => Category::Keyword,

        Kind::True | Kind::False | Kind::On | Kind::Off => Category::Bool,
        Kind::Null | Kind::None => Category::Null,
        Kind::Number => Category::Number,
        Kind::String => Category::String,
        Kind::LineComment | Kind::BlockComment => Category::Comment,

        Kind::Plus
        | Kind::Minus
        | Kind::Multiply
        | Kind::Divide
        | Kind::Modulo
        | Kind::Power => Category::ArithmeticOperator,
        Kind::LogicalOr | Kind::LogicalAnd | Kind::Not => Category::LogicOperator,
        Kind::BitOr | Kind::BitXor | Kind::BitAnd | Kind::ShiftLeft | Kind::ShiftRight => {
            Category::BitwiseOperator
        }
        Kind::Equal
        | Kind::NotEqual
        | Kind::LessThan
        | Kind::LessThanEqual
        | Kind::GreaterThan
        | Kind::GreaterThanEqual => Category::CompareOperator,
        Kind::Assign => Category::DefinitionOperator,
        Kind::PlusAssign
        | Kind::MinusAssign
        | Kind::MultiplyAssign
        | Kind::DivideAssign
        | Kind::ModuloAssign
        | Kind::PowerAssign
        | Kind::ShiftLeftAssign
        | Kind::ShiftRightAssign
        | Kind::BitOrAssign
        | Kind::BitAndAssign
        | Kind::BitXorAssign => Category::UpdateOperator,

        Kind::LeftParen
        | Kind::RightParen
        | Kind::LeftBracket
        | Kind::RightBracket
        | Kind::LeftBrace
        | Kind::RightBrace => Category::Bracket,
        Kind::Dot | Kind::Comma | Kind::Semicolon | Kind::Colon => Category::Separator,
        Kind::DotDot | Kind::DotDotEqual | Kind::QuestionMark | Kind::Arrow | Kind::FatArrow => {
            Category::Punctuation
        }
        Kind::Hash => Category::Annotation,

        Kind::SingletonIdent => Category::Singleton,
        Kind::PrimitiveType => Category::TypeName,
        Kind::BuiltinFunc => Category::BuiltinFunction,
        Kind::BuiltinVar => Category::BuiltinVariable,
        Kind::Error => Category::Invalid,

        _ => return None,
    })
}

/// Classify every token of the tree, in source order.
pub fn highlight(tree: &SyntaxTree) -> Vec<Highlight> {
    let mut highlights = Vec::new();
    let mut path = Vec::new();
    walk(tree.root(), &mut path, &mut highlights);
    highlights
}

fn walk(node: SyntaxNode, path: &mut Vec<Kind>, out: &mut Vec<Highlight>) {
    path.push(node.kind());

    if node.is_token() {
        if let Some(category) = classify(path) {
            out.push(Highlight {
                range: node.range(),
                category,
            });
        }
    } else {
        for child in node.children() {
            walk(child, path, out);
        }
    }

    path.pop();
}
