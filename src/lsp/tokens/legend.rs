use lsp_types::{SemanticTokenModifier, SemanticTokenType, SemanticTokensLegend};

use crate::editor::Category;

pub fn get() -> SemanticTokensLegend {
    SemanticTokensLegend {
        token_types: TYPES.into(),
        token_modifiers: MODIFIERS.into(),
    }
}

/// Get the semantic token type and the modifiers for the given category, if
/// it is to be highlighted. Punctuation is left to the client's grammar.
pub fn for_category(category: Category) -> Option<(u32, u32)> {
    match category {
        Category::ControlKeyword
        | Category::OperatorKeyword
        | Category::DefinitionKeyword
        | Category::ModuleKeyword
        | Category::Keyword
        | Category::Bool
        | Category::Null => Some((types::KEYWORD, mods::NONE)),
        Category::Modifier => Some((types::MODIFIER, mods::NONE)),

        Category::Number => Some((types::NUMBER, mods::NONE)),
        Category::String => Some((types::STRING, mods::NONE)),
        Category::Comment => Some((types::COMMENT, mods::NONE)),

        Category::ArithmeticOperator
        | Category::LogicOperator
        | Category::BitwiseOperator
        | Category::CompareOperator
        | Category::DefinitionOperator
        | Category::UpdateOperator => Some((types::OPERATOR, mods::NONE)),

        Category::Punctuation | Category::Bracket | Category::Separator => None,

        Category::TypeName => Some((types::TYPE, mods::NONE)),
        Category::Namespace => Some((types::NAMESPACE, mods::NONE)),
        Category::Function => Some((types::FUNCTION, mods::NONE)),
        Category::Property => Some((types::PROPERTY, mods::NONE)),
        Category::LocalVariable => Some((types::PARAMETER, mods::NONE)),
        Category::Variable => Some((types::VARIABLE, mods::NONE)),
        Category::Singleton => Some((types::VARIABLE, mods::READONLY)),
        Category::Annotation => Some((types::MACRO, mods::NONE)),
        Category::BuiltinFunction => Some((types::FUNCTION, mods::DEFAULT_LIBRARY)),
        Category::BuiltinVariable => Some((types::VARIABLE, mods::DEFAULT_LIBRARY)),

        Category::Invalid => None,
    }
}

const TYPES: [SemanticTokenType; 13] = [
    SemanticTokenType::COMMENT,
    SemanticTokenType::NUMBER,
    SemanticTokenType::STRING,
    SemanticTokenType::KEYWORD,
    SemanticTokenType::OPERATOR,
    SemanticTokenType::MODIFIER,
    SemanticTokenType::TYPE,
    SemanticTokenType::NAMESPACE,
    SemanticTokenType::FUNCTION,
    SemanticTokenType::PROPERTY,
    SemanticTokenType::PARAMETER,
    SemanticTokenType::VARIABLE,
    SemanticTokenType::MACRO,
];

const MODIFIERS: [SemanticTokenModifier; 2] = [
    SemanticTokenModifier::READONLY,
    SemanticTokenModifier::DEFAULT_LIBRARY,
];

mod types {
    pub const COMMENT: u32 = 0;
    pub const NUMBER: u32 = 1;
    pub const STRING: u32 = 2;
    pub const KEYWORD: u32 = 3;
    pub const OPERATOR: u32 = 4;
    pub const MODIFIER: u32 = 5;
    pub const TYPE: u32 = 6;
    pub const NAMESPACE: u32 = 7;
    pub const FUNCTION: u32 = 8;
    pub const PROPERTY: u32 = 9;
    pub const PARAMETER: u32 = 10;
    pub const VARIABLE: u32 = 11;
    pub const MACRO: u32 = 12;
}

mod mods {
    pub const NONE: u32 = 0;
    pub const READONLY: u32 = 1;
    pub const DEFAULT_LIBRARY: u32 = 1 << 1;
}
