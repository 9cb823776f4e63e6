/// Every kind of token and node that can appear in a green tree. Keywords are
/// never produced by the lexer; they are specialized from [`Kind::Ident`] by
/// the parser where the grammar expects them.
#[repr(u8)]
#[derive(Clone, Copy, Debug, Eq, Hash, Ord, PartialEq, PartialOrd)]
pub enum Kind {
    /// Unrecognized input, or a subtree the parser recovered from.
    Error,

    // Trivia
    /// Arbitrary whitespace, ending at the first line break
    Whitespace,
    /// `// ...` or `# ...` depending on the grammar version
    LineComment,
    /// `/* ... */`
    BlockComment,

    /// The end of input. Only used as a lookahead, never stored in a tree.
    Eof,

    // Tokens
    /// An identifier
    Ident,
    /// An identifier prefixed with `@`
    SingletonIdent,
    /// An integer or floating point literal
    Number,
    /// A single or double quoted string literal
    String,

    // Keywords
    Import,
    Type,
    Templ,
    Trigger,
    From,
    Let,
    Pub,
    Fn,
    Return,
    Break,
    Continue,
    Loop,
    While,
    For,
    In,
    If,
    Else,
    Match,
    Try,
    Catch,
    As,
    New,
    Impl,
    With,
    True,
    False,
    On,
    Off,
    Null,
    None,
    /// A function provided by the runtime, such as `print`
    BuiltinFunc,
    /// A variable provided by the runtime, such as `weather`
    BuiltinVar,
    /// `str`, `bool` or `num`
    PrimitiveType,

    // Punctuation
    /// `(`
    LeftParen,
    /// `)`
    RightParen,
    /// `[`
    LeftBracket,
    /// `]`
    RightBracket,
    /// `{`
    LeftBrace,
    /// `}`
    RightBrace,
    /// `,`
    Comma,
    /// `;`
    Semicolon,
    /// `:`
    Colon,
    /// `.`
    Dot,
    /// `..`
    DotDot,
    /// `..=`
    DotDotEqual,
    /// `?`
    QuestionMark,
    /// `->`
    Arrow,
    /// `=>`
    FatArrow,
    /// `#`
    Hash,

    // Operators
    Plus,
    Minus,
    Multiply,
    Divide,
    Modulo,
    Power,
    ShiftLeft,
    ShiftRight,
    BitOr,
    BitXor,
    BitAnd,
    LogicalOr,
    LogicalAnd,
    Not,
    Equal,
    NotEqual,
    LessThan,
    LessThanEqual,
    GreaterThan,
    GreaterThanEqual,

    // Assignment operators
    Assign,
    PlusAssign,
    MinusAssign,
    MultiplyAssign,
    DivideAssign,
    ModuloAssign,
    PowerAssign,
    ShiftLeftAssign,
    ShiftRightAssign,
    BitOrAssign,
    BitAndAssign,
    BitXorAssign,

    // Items
    Program,
    ImportItem,
    ImportCandidate,
    Module,
    ImportStatement,
    FunctionDefinition,
    Parameters,
    Parameter,
    Annotation,
    TriggerAnnotation,
    SingletonDefinition,
    ImplBlock,
    ImplCapabilities,
    TypeDefinition,

    // Statements
    LetStatement,
    ReturnStatement,
    BreakStatement,
    ContinueStatement,
    LoopStatement,
    WhileStatement,
    ForStatement,
    ExpressionStatement,
    Block,

    // Types
    NamedType,
    SingletonType,
    ListType,
    OptionType,
    ObjectType,
    ObjectTypeField,
    FunctionType,

    // Expressions
    VariableName,
    ListLiteral,
    ObjectLiteral,
    ObjectField,
    FunctionLiteral,
    ParenthesizedExpression,
    PrefixExpression,
    InfixExpression,
    RangeExpression,
    AssignExpression,
    CastExpression,
    CallExpression,
    Arguments,
    IndexExpression,
    MemberExpression,
    UnwrapExpression,
    IfExpression,
    MatchExpression,
    MatchArm,
    TryExpression,
    PairExpression,
    ForExpression,
    WhileExpression,
    LoopExpression,
}

impl Kind {
    /// Returns `true` if this represents something without semantic
    /// significance (other than as a token separator)
    pub fn is_skipped(&self) -> bool {
        matches!(self, Kind::Whitespace | Kind::LineComment | Kind::BlockComment)
    }

    /// Returns `true` for trivia and errors. Of these, only invalid tokens
    /// standing in for an operand ever reach the grammar.
    pub fn is_extra(&self) -> bool {
        self.is_skipped() || matches!(self, Kind::Error)
    }

    /// The closing delimiter matching this opening delimiter.
    pub fn closing(&self) -> Option<Kind> {
        match self {
            Kind::LeftParen => Some(Kind::RightParen),
            Kind::LeftBracket => Some(Kind::RightBracket),
            Kind::LeftBrace => Some(Kind::RightBrace),
            _ => None,
        }
    }

    /// The fixed source text of this token kind, if it has one.
    pub fn spelling(&self) -> Option<&'static str> {
        Some(match self {
            Kind::Import => "import",
            Kind::Type => "type",
            Kind::Templ => "templ",
            Kind::Trigger => "trigger",
            Kind::From => "from",
            Kind::Let => "let",
            Kind::Pub => "pub",
            Kind::Fn => "fn",
            Kind::Return => "return",
            Kind::Break => "break",
            Kind::Continue => "continue",
            Kind::Loop => "loop",
            Kind::While => "while",
            Kind::For => "for",
            Kind::In => "in",
            Kind::If => "if",
            Kind::Else => "else",
            Kind::Match => "match",
            Kind::Try => "try",
            Kind::Catch => "catch",
            Kind::As => "as",
            Kind::New => "new",
            Kind::Impl => "impl",
            Kind::With => "with",
            Kind::True => "true",
            Kind::False => "false",
            Kind::On => "on",
            Kind::Off => "off",
            Kind::Null => "null",
            Kind::None => "none",

            Kind::LeftParen => "(",
            Kind::RightParen => ")",
            Kind::LeftBracket => "[",
            Kind::RightBracket => "]",
            Kind::LeftBrace => "{",
            Kind::RightBrace => "}",
            Kind::Comma => ",",
            Kind::Semicolon => ";",
            Kind::Colon => ":",
            Kind::Dot => ".",
            Kind::DotDot => "..",
            Kind::DotDotEqual => "..=",
            Kind::QuestionMark => "?",
            Kind::Arrow => "->",
            Kind::FatArrow => "=>",
            Kind::Hash => "#",

            Kind::Plus => "+",
            Kind::Minus => "-",
            Kind::Multiply => "*",
            Kind::Divide => "/",
            Kind::Modulo => "%",
            Kind::Power => "**",
            Kind::ShiftLeft => "<<",
            Kind::ShiftRight => ">>",
            Kind::BitOr => "|",
            Kind::BitXor => "^",
            Kind::BitAnd => "&",
            Kind::LogicalOr => "||",
            Kind::LogicalAnd => "&&",
            Kind::Not => "!",
            Kind::Equal => "==",
            Kind::NotEqual => "!=",
            Kind::LessThan => "<",
            Kind::LessThanEqual => "<=",
            Kind::GreaterThan => ">",
            Kind::GreaterThanEqual => ">=",

            Kind::Assign => "=",
            Kind::PlusAssign => "+=",
            Kind::MinusAssign => "-=",
            Kind::MultiplyAssign => "*=",
            Kind::DivideAssign => "/=",
            Kind::ModuloAssign => "%=",
            Kind::PowerAssign => "**=",
            Kind::ShiftLeftAssign => "<<=",
            Kind::ShiftRightAssign => ">>=",
            Kind::BitOrAssign => "|=",
            Kind::BitAndAssign => "&=",
            Kind::BitXorAssign => "^=",

            _ => return None,
        })
    }

    /// A human readable description of a token kind, for diagnostics.
    pub fn describe(&self) -> String {
        if let Some(spelling) = self.spelling() {
            return format!("`{spelling}`");
        }

        match self {
            Kind::Error => "invalid input".into(),
            Kind::Whitespace => "whitespace".into(),
            Kind::LineComment | Kind::BlockComment => "a comment".into(),
            Kind::Eof => "end of input".into(),
            Kind::Ident => "an identifier".into(),
            Kind::SingletonIdent => "a singleton".into(),
            Kind::Number => "a number".into(),
            Kind::String => "a string".into(),
            Kind::BuiltinFunc => "a builtin function".into(),
            Kind::BuiltinVar => "a builtin variable".into(),
            Kind::PrimitiveType => "a type".into(),
            other => format!("{other:?}"),
        }
    }
}
