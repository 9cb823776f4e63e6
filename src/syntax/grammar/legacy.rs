//! Homescript v1. Everything is an expression and statements are separated
//! by semicolons, with an optional trailing one.

use super::keywords;
use super::{Grammar, GrammarBuilder, Symbol};
use crate::syntax::green::Kind;

const INFIX: &[Kind] = &[
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
];

const LITERALS: &[Kind] = &[
    Kind::Number,
    Kind::String,
    Kind::True,
    Kind::False,
    Kind::On,
    Kind::Off,
    Kind::Null,
    Kind::BuiltinFunc,
    Kind::BuiltinVar,
];

pub fn grammar() -> Grammar {
    let mut g = GrammarBuilder::new("legacy");

    let program = g.node(Kind::Program);
    let statements = g.hidden("statements");
    let statement_list = g.hidden("statement-list");
    let statement = g.hidden("statement");
    let block = g.node(Kind::Block);

    let let_statement = g.node(Kind::LetStatement);
    let import_statement = g.node(Kind::ImportStatement);
    let break_statement = g.node(Kind::BreakStatement);
    let continue_statement = g.node(Kind::ContinueStatement);
    let return_statement = g.node(Kind::ReturnStatement);

    let expr = g.hidden("expression");
    let expr_list = g.hidden("expression-list");
    let variable_name = g.node(Kind::VariableName);
    let pair = g.node(Kind::PairExpression);
    let if_expression = g.node(Kind::IfExpression);
    let for_expression = g.node(Kind::ForExpression);
    let while_expression = g.node(Kind::WhileExpression);
    let loop_expression = g.node(Kind::LoopExpression);
    let function_literal = g.node(Kind::FunctionLiteral);
    let parameters = g.node(Kind::Parameters);
    let parameter_list = g.hidden("parameter-list");
    let parameter = g.node(Kind::Parameter);
    let try_expression = g.node(Kind::TryExpression);
    let parenthesized = g.node(Kind::ParenthesizedExpression);
    let prefix = g.node(Kind::PrefixExpression);
    let infix = g.node(Kind::InfixExpression);
    let member = g.node(Kind::MemberExpression);
    let call = g.node(Kind::CallExpression);
    let arguments = g.node(Kind::Arguments);
    let assign = g.node(Kind::AssignExpression);
    let assign_op = g.hidden("assign-operator");
    let cast = g.node(Kind::CastExpression);
    let named_type = g.node(Kind::NamedType);

    rule!(g, program => statements);
    rule!(g, statements =>);
    rule!(g, statements => statement_list);
    rule!(g, statements => statement_list, Kind::Semicolon);
    rule!(g, statement_list => statement);
    rule!(g, statement_list => statement_list, Kind::Semicolon, statement);
    rule!(g, block => Kind::LeftBrace, statements, Kind::RightBrace);

    for form in [
        let_statement,
        import_statement,
        break_statement,
        continue_statement,
        return_statement,
        expr,
    ] {
        rule!(g, statement => form);
    }

    rule!(g, let_statement => Kind::Let, Kind::Ident, Kind::Assign, expr);
    rule!(g, import_statement => Kind::Import, Kind::Ident, Kind::From, Kind::Ident);
    rule!(g, import_statement => Kind::Import, Kind::Ident, Kind::As, Kind::Ident, Kind::From, Kind::Ident);
    rule!(g, break_statement => Kind::Break);
    rule!(g, break_statement => Kind::Break, expr);
    rule!(g, continue_statement => Kind::Continue);
    rule!(g, return_statement => Kind::Return);
    rule!(g, return_statement => Kind::Return, expr);

    for literal in LITERALS {
        rule!(g, expr => *literal);
    }
    rule!(g, expr => Kind::Error);

    for form in [
        variable_name,
        pair,
        if_expression,
        for_expression,
        while_expression,
        loop_expression,
        function_literal,
        try_expression,
        parenthesized,
        prefix,
        infix,
        member,
        call,
        assign,
        cast,
    ] {
        rule!(g, expr => form);
    }

    rule!(g, expr_list => expr);
    rule!(g, expr_list => expr_list, Kind::Comma, expr);

    rule!(g, variable_name => Kind::Ident);
    rule!(g, pair => Kind::String, Kind::FatArrow, expr);

    rule!(g, if_expression => Kind::If, expr, block);
    rule!(g, if_expression => Kind::If, expr, block, Kind::Else, block);
    rule!(g, if_expression => Kind::If, expr, block, Kind::Else, if_expression);
    rule!(g, for_expression => Kind::For, Kind::Ident, Kind::In, expr, block);
    rule!(g, while_expression => Kind::While, expr, block);
    rule!(g, loop_expression => Kind::Loop, block);

    rule!(g, function_literal => Kind::Fn, parameters, block);
    rule!(g, function_literal => Kind::Fn, Kind::Ident, parameters, block);
    rule!(g, parameters => Kind::LeftParen, Kind::RightParen);
    rule!(g, parameters => Kind::LeftParen, parameter_list, Kind::RightParen);
    rule!(g, parameter_list => parameter);
    rule!(g, parameter_list => parameter_list, Kind::Comma, parameter);
    rule!(g, parameter => Kind::Ident);

    rule!(g, try_expression => Kind::Try, block, Kind::Catch, Kind::Ident, block);
    rule!(g, parenthesized => Kind::LeftParen, expr, Kind::RightParen);

    g.rule_prec(prefix, vec![Kind::Minus.into(), expr.into()], Kind::Not);
    rule!(g, prefix => Kind::Not, expr);

    for operator in INFIX {
        rule!(g, infix => expr, *operator, expr);
    }

    rule!(g, member => expr, Kind::Dot, Kind::Ident);
    rule!(g, call => expr, arguments);
    rule!(g, arguments => Kind::LeftParen, Kind::RightParen);
    rule!(g, arguments => Kind::LeftParen, expr_list, Kind::RightParen);

    g.rule_prec(assign, vec![expr.into(), assign_op.into(), expr.into()], Kind::Assign);
    for operator in ASSIGN {
        rule!(g, assign_op => *operator);
    }

    rule!(g, cast => expr, Kind::As, named_type);
    rule!(g, named_type => Kind::PrimitiveType);

    // Loosest first
    g.right(ASSIGN);
    g.right(&[Kind::FatArrow]);
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
    g.left(&[Kind::Plus, Kind::Minus]);
    g.left(&[Kind::Multiply, Kind::Divide, Kind::Modulo]);
    g.right(&[Kind::Power]);
    g.left(&[Kind::As]);
    g.right(&[Kind::Not]);
    g.left(&[Kind::Dot, Kind::LeftParen]);

    g.finish(program, keywords::LEGACY)
}
