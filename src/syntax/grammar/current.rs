//! Homescript as accepted by the current runtime.
//!
//! ```text
//! program   = { item | statement } [ expr ]
//! item      = import | function | singleton | impl
//! statement = let | type | return | break | continue | loop | while | for
//!           | expr ";" | assign ";" | block-expr
//! ```
//!
//! Expressions that end in a block (`if`, `match`, `try` and bare blocks)
//! need no semicolon in statement position. Where such an expression could
//! also continue as an operand, the statement reading wins, which is why the
//! statement rules are declared before the expression rules.

use super::keywords;
use super::{Grammar, GrammarBuilder, Symbol};
use crate::syntax::green::Kind;

const INFIX: &[Kind] = &[
    Kind::BitOr,
    Kind::BitXor,
    Kind::BitAnd,
    Kind::ShiftLeft,
    Kind::ShiftRight,
    Kind::Plus,
    Kind::Minus,
    Kind::Multiply,
    Kind::Divide,
    Kind::Modulo,
    Kind::Power,
    Kind::LogicalOr,
    Kind::LogicalAnd,
    Kind::Equal,
    Kind::NotEqual,
    Kind::LessThan,
    Kind::LessThanEqual,
    Kind::GreaterThan,
    Kind::GreaterThanEqual,
];

const ASSIGN: &[Kind] = &[
    Kind::Assign,
    Kind::PlusAssign,
    Kind::MinusAssign,
    Kind::MultiplyAssign,
    Kind::DivideAssign,
    Kind::ModuloAssign,
    Kind::PowerAssign,
    Kind::ShiftLeftAssign,
    Kind::ShiftRightAssign,
    Kind::BitOrAssign,
    Kind::BitAndAssign,
    Kind::BitXorAssign,
];

const LITERALS: &[Kind] = &[
    Kind::Number,
    Kind::String,
    Kind::True,
    Kind::False,
    Kind::On,
    Kind::Off,
    Kind::Null,
    Kind::None,
    Kind::BuiltinFunc,
];

pub fn grammar() -> Grammar {
    let mut g = GrammarBuilder::new("current");

    let program = g.node(Kind::Program);
    let top_items = g.hidden("top-items");
    let top_item = g.hidden("top-item");

    // Items
    let import_item = g.node(Kind::ImportItem);
    let import_target = g.hidden("import-target");
    let candidates = g.hidden("import-candidates");
    let import_candidate = g.node(Kind::ImportCandidate);
    let module = g.node(Kind::Module);
    let function_definition = g.node(Kind::FunctionDefinition);
    let function_core = g.hidden("function");
    let parameters = g.node(Kind::Parameters);
    let parameter_list = g.hidden("parameter-list");
    let parameter = g.node(Kind::Parameter);
    let annotations = g.hidden("annotations");
    let annotation = g.node(Kind::Annotation);
    let annotation_items = g.hidden("annotation-items");
    let annotation_item = g.hidden("annotation-item");
    let trigger_annotation = g.node(Kind::TriggerAnnotation);
    let singleton_definition = g.node(Kind::SingletonDefinition);
    let impl_block = g.node(Kind::ImplBlock);
    let impl_head = g.hidden("impl-head");
    let impl_capabilities = g.node(Kind::ImplCapabilities);
    let ident_list = g.hidden("ident-list");
    let impl_body = g.hidden("impl-body");

    // Statements
    let statement = g.hidden("statement");
    let statements = g.hidden("statements");
    let let_statement = g.node(Kind::LetStatement);
    let let_core = g.hidden("let");
    let type_definition = g.node(Kind::TypeDefinition);
    let type_core = g.hidden("type-definition");
    let return_statement = g.node(Kind::ReturnStatement);
    let break_statement = g.node(Kind::BreakStatement);
    let continue_statement = g.node(Kind::ContinueStatement);
    let loop_statement = g.node(Kind::LoopStatement);
    let while_statement = g.node(Kind::WhileStatement);
    let for_statement = g.node(Kind::ForStatement);
    let expression_statement = g.node(Kind::ExpressionStatement);
    let block = g.node(Kind::Block);
    let block_body = g.hidden("block-body");

    // Types
    let ty = g.hidden("type");
    let named_type = g.node(Kind::NamedType);
    let singleton_type = g.node(Kind::SingletonType);
    let list_type = g.node(Kind::ListType);
    let option_type = g.node(Kind::OptionType);
    let object_type = g.node(Kind::ObjectType);
    let type_fields = g.hidden("object-type-fields");
    let object_type_field = g.node(Kind::ObjectTypeField);
    let function_type = g.node(Kind::FunctionType);
    let type_list = g.hidden("type-list");

    // Expressions
    let expr = g.hidden("expression");
    let block_expr = g.hidden("expression-with-block");
    let expr_list = g.hidden("expression-list");
    let variable_name = g.node(Kind::VariableName);
    let list_literal = g.node(Kind::ListLiteral);
    let object_literal = g.node(Kind::ObjectLiteral);
    let fields = g.hidden("object-fields");
    let object_field = g.node(Kind::ObjectField);
    let function_literal = g.node(Kind::FunctionLiteral);
    let parenthesized = g.node(Kind::ParenthesizedExpression);
    let prefix = g.node(Kind::PrefixExpression);
    let infix = g.node(Kind::InfixExpression);
    let range = g.node(Kind::RangeExpression);
    let cast = g.node(Kind::CastExpression);
    let call = g.node(Kind::CallExpression);
    let arguments = g.node(Kind::Arguments);
    let index = g.node(Kind::IndexExpression);
    let member = g.node(Kind::MemberExpression);
    let unwrap = g.node(Kind::UnwrapExpression);
    let if_expression = g.node(Kind::IfExpression);
    let match_expression = g.node(Kind::MatchExpression);
    let arms = g.hidden("match-arms");
    let match_arm = g.node(Kind::MatchArm);
    let try_expression = g.node(Kind::TryExpression);
    let assign_expression = g.node(Kind::AssignExpression);
    let assign_rhs = g.hidden("assign-value");
    let assign_op = g.hidden("assign-operator");

    // Program
    rule!(g, program => top_items);
    rule!(g, program => top_items, expr);
    rule!(g, top_items =>);
    rule!(g, top_items => top_items, top_item);
    for item in [statement, import_item, function_definition, singleton_definition, impl_block] {
        rule!(g, top_item => item);
    }

    // Statements, ahead of expressions
    for form in [
        let_statement,
        type_definition,
        return_statement,
        break_statement,
        continue_statement,
        loop_statement,
        while_statement,
        for_statement,
        expression_statement,
    ] {
        rule!(g, statement => form);
    }

    rule!(g, expression_statement => block_expr);
    rule!(g, expression_statement => expr, Kind::Semicolon);
    rule!(g, expression_statement => assign_expression, Kind::Semicolon);

    rule!(g, statements =>);
    rule!(g, statements => statements, statement);

    rule!(g, let_statement => let_core);
    rule!(g, let_statement => Kind::Pub, let_core);
    rule!(g, let_core => Kind::Let, Kind::Ident, Kind::Assign, expr, Kind::Semicolon);
    rule!(g, let_core => Kind::Let, Kind::Ident, Kind::Colon, ty, Kind::Assign, expr, Kind::Semicolon);

    rule!(g, type_definition => type_core);
    rule!(g, type_definition => Kind::Pub, type_core);
    rule!(g, type_core => Kind::Type, Kind::Ident, Kind::Assign, ty, Kind::Semicolon);

    rule!(g, return_statement => Kind::Return, Kind::Semicolon);
    rule!(g, return_statement => Kind::Return, expr, Kind::Semicolon);
    rule!(g, break_statement => Kind::Break, Kind::Semicolon);
    rule!(g, continue_statement => Kind::Continue, Kind::Semicolon);
    rule!(g, loop_statement => Kind::Loop, block);
    rule!(g, while_statement => Kind::While, expr, block);
    rule!(g, for_statement => Kind::For, Kind::Ident, Kind::In, expr, block);

    rule!(g, block => Kind::LeftBrace, block_body, Kind::RightBrace);
    rule!(g, block_body => statements);
    rule!(g, block_body => statements, expr);

    // Imports
    rule!(g, import_item => Kind::Import, import_target, Kind::From, module, Kind::Semicolon);
    rule!(g, import_target => import_candidate);
    rule!(g, import_target => Kind::LeftBrace, candidates, Kind::RightBrace);
    rule!(g, import_target => Kind::LeftBrace, candidates, Kind::Comma, Kind::RightBrace);
    rule!(g, candidates => import_candidate);
    rule!(g, candidates => candidates, Kind::Comma, import_candidate);
    rule!(g, import_candidate => Kind::Ident);
    for kind in [Kind::Type, Kind::Templ, Kind::Trigger] {
        rule!(g, import_candidate => kind, Kind::Ident);
    }
    rule!(g, module => Kind::Ident);

    // Functions
    rule!(g, function_definition => function_core);
    rule!(g, function_definition => Kind::Pub, function_core);
    rule!(g, function_definition => annotations, function_core);
    rule!(g, function_definition => annotations, Kind::Pub, function_core);
    rule!(g, function_core => Kind::Fn, Kind::Ident, parameters, block);
    rule!(g, function_core => Kind::Fn, Kind::Ident, parameters, Kind::Arrow, ty, block);

    rule!(g, parameters => Kind::LeftParen, Kind::RightParen);
    rule!(g, parameters => Kind::LeftParen, parameter_list, Kind::RightParen);
    rule!(g, parameters => Kind::LeftParen, parameter_list, Kind::Comma, Kind::RightParen);
    rule!(g, parameter_list => parameter);
    rule!(g, parameter_list => parameter_list, Kind::Comma, parameter);
    rule!(g, parameter => Kind::Ident);
    rule!(g, parameter => Kind::Ident, Kind::Colon, ty);

    rule!(g, annotations => annotation);
    rule!(g, annotations => annotations, annotation);
    rule!(g, annotation => Kind::Hash, Kind::LeftBracket, annotation_items, Kind::RightBracket);
    rule!(g, annotation_items => annotation_item);
    rule!(g, annotation_items => annotation_items, Kind::Comma, annotation_item);
    rule!(g, annotation_item => Kind::Ident);
    rule!(g, annotation_item => trigger_annotation);
    rule!(g, trigger_annotation => Kind::Trigger, Kind::Ident);
    rule!(g, trigger_annotation => Kind::Trigger, Kind::Ident, arguments);

    // Singletons and implementations
    rule!(g, singleton_definition => Kind::SingletonIdent, Kind::Type, Kind::Ident, Kind::Assign, ty, Kind::Semicolon);

    rule!(g, impl_block => Kind::Impl, impl_head, Kind::LeftBrace, impl_body, Kind::RightBrace);
    rule!(g, impl_head => Kind::SingletonIdent);
    rule!(g, impl_head => Kind::Ident, Kind::For, Kind::SingletonIdent);
    rule!(g, impl_head => Kind::Ident, Kind::For, Kind::SingletonIdent, impl_capabilities);
    rule!(g, impl_capabilities => Kind::With, Kind::LeftBrace, Kind::RightBrace);
    rule!(g, impl_capabilities => Kind::With, Kind::LeftBrace, ident_list, Kind::RightBrace);
    rule!(g, impl_capabilities => Kind::With, Kind::LeftBrace, ident_list, Kind::Comma, Kind::RightBrace);
    rule!(g, ident_list => Kind::Ident);
    rule!(g, ident_list => ident_list, Kind::Comma, Kind::Ident);
    rule!(g, impl_body =>);
    rule!(g, impl_body => impl_body, function_definition);

    // Types
    for form in [named_type, singleton_type, list_type, option_type, object_type, function_type] {
        rule!(g, ty => form);
    }

    rule!(g, named_type => Kind::Ident);
    rule!(g, named_type => Kind::Null);
    rule!(g, singleton_type => Kind::SingletonIdent);
    rule!(g, list_type => Kind::LeftBracket, ty, Kind::RightBracket);
    rule!(g, option_type => Kind::QuestionMark, ty);

    rule!(g, object_type => Kind::LeftBrace, Kind::RightBrace);
    rule!(g, object_type => Kind::LeftBrace, Kind::QuestionMark, Kind::RightBrace);
    rule!(g, object_type => Kind::LeftBrace, type_fields, Kind::RightBrace);
    rule!(g, object_type => Kind::LeftBrace, type_fields, Kind::Comma, Kind::RightBrace);
    rule!(g, type_fields => object_type_field);
    rule!(g, type_fields => type_fields, Kind::Comma, object_type_field);
    rule!(g, object_type_field => Kind::Ident, Kind::Colon, ty);
    rule!(g, object_type_field => Kind::String, Kind::Colon, ty);

    rule!(g, function_type => Kind::Fn, Kind::LeftParen, Kind::RightParen, Kind::Arrow, ty);
    rule!(g, function_type => Kind::Fn, Kind::LeftParen, type_list, Kind::RightParen, Kind::Arrow, ty);
    rule!(g, function_type => Kind::Fn, Kind::LeftParen, type_list, Kind::Comma, Kind::RightParen, Kind::Arrow, ty);
    rule!(g, type_list => ty);
    rule!(g, type_list => type_list, Kind::Comma, ty);

    // Expressions
    for form in [block, if_expression, match_expression, try_expression] {
        rule!(g, block_expr => form);
    }

    rule!(g, expr => block_expr);
    for literal in LITERALS {
        rule!(g, expr => *literal);
    }

    // An invalid token where an operand belongs is that operand.
    rule!(g, expr => Kind::Error);

    for form in [
        variable_name,
        list_literal,
        object_literal,
        function_literal,
        parenthesized,
        prefix,
        infix,
        range,
        cast,
        call,
        index,
        member,
        unwrap,
    ] {
        rule!(g, expr => form);
    }

    rule!(g, expr_list => expr);
    rule!(g, expr_list => expr_list, Kind::Comma, expr);

    rule!(g, variable_name => Kind::Ident);
    rule!(g, variable_name => Kind::SingletonIdent);

    rule!(g, list_literal => Kind::LeftBracket, Kind::RightBracket);
    rule!(g, list_literal => Kind::LeftBracket, expr_list, Kind::RightBracket);
    rule!(g, list_literal => Kind::LeftBracket, expr_list, Kind::Comma, Kind::RightBracket);

    rule!(g, object_literal => Kind::New, Kind::LeftBrace, Kind::RightBrace);
    rule!(g, object_literal => Kind::New, Kind::LeftBrace, fields, Kind::RightBrace);
    rule!(g, object_literal => Kind::New, Kind::LeftBrace, fields, Kind::Comma, Kind::RightBrace);
    rule!(g, fields => object_field);
    rule!(g, fields => fields, Kind::Comma, object_field);
    rule!(g, object_field => Kind::Ident, Kind::Colon, expr);
    rule!(g, object_field => Kind::String, Kind::Colon, expr);

    rule!(g, function_literal => Kind::Fn, parameters, block);
    rule!(g, function_literal => Kind::Fn, parameters, Kind::Arrow, ty, block);

    rule!(g, parenthesized => Kind::LeftParen, expr, Kind::RightParen);

    g.rule_prec(prefix, vec![Kind::Minus.into(), expr.into()], Kind::Not);
    rule!(g, prefix => Kind::Not, expr);

    for operator in INFIX {
        rule!(g, infix => expr, *operator, expr);
    }

    rule!(g, range => expr, Kind::DotDot, expr);
    rule!(g, range => expr, Kind::DotDotEqual, expr);
    rule!(g, cast => expr, Kind::As, ty);

    rule!(g, call => expr, arguments);
    rule!(g, arguments => Kind::LeftParen, Kind::RightParen);
    rule!(g, arguments => Kind::LeftParen, expr_list, Kind::RightParen);
    rule!(g, arguments => Kind::LeftParen, expr_list, Kind::Comma, Kind::RightParen);

    rule!(g, index => expr, Kind::LeftBracket, expr, Kind::RightBracket);
    rule!(g, member => expr, Kind::Dot, Kind::Ident);
    rule!(g, unwrap => expr, Kind::QuestionMark);

    rule!(g, if_expression => Kind::If, expr, block);
    rule!(g, if_expression => Kind::If, expr, block, Kind::Else, block);
    rule!(g, if_expression => Kind::If, expr, block, Kind::Else, if_expression);

    rule!(g, match_expression => Kind::Match, expr, Kind::LeftBrace, Kind::RightBrace);
    rule!(g, match_expression => Kind::Match, expr, Kind::LeftBrace, arms, Kind::RightBrace);
    rule!(g, match_expression => Kind::Match, expr, Kind::LeftBrace, arms, Kind::Comma, Kind::RightBrace);
    rule!(g, arms => match_arm);
    rule!(g, arms => arms, Kind::Comma, match_arm);
    rule!(g, match_arm => expr, Kind::FatArrow, expr);

    rule!(g, try_expression => Kind::Try, block, Kind::Catch, Kind::Ident, block);

    rule!(g, assign_expression => expr, assign_op, assign_rhs);
    rule!(g, assign_rhs => expr);
    rule!(g, assign_rhs => assign_expression);
    for operator in ASSIGN {
        rule!(g, assign_op => *operator);
    }

    // Loosest first
    g.nonassoc(&[Kind::DotDot, Kind::DotDotEqual]);
    g.left(&[Kind::LogicalOr]);
    g.left(&[Kind::LogicalAnd]);
    g.nonassoc(&[
        Kind::Equal,
        Kind::NotEqual,
        Kind::LessThan,
        Kind::LessThanEqual,
        Kind::GreaterThan,
        Kind::GreaterThanEqual,
    ]);
    g.left(&[Kind::BitOr]);
    g.left(&[Kind::BitXor]);
    g.left(&[Kind::BitAnd]);
    g.left(&[Kind::ShiftLeft, Kind::ShiftRight]);
    g.left(&[Kind::Plus, Kind::Minus]);
    g.left(&[Kind::Multiply, Kind::Divide, Kind::Modulo]);
    g.right(&[Kind::Power]);
    g.left(&[Kind::As]);
    g.right(&[Kind::Not]);
    g.left(&[
        Kind::LeftParen,
        Kind::LeftBracket,
        Kind::Dot,
        Kind::QuestionMark,
    ]);

    g.finish(program, keywords::CURRENT)
}
