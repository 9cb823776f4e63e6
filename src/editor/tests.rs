use super::{classify, folds, highlight, indent_level, indent_rule, keyword_completions, Category};
use crate::syntax::{parse, parse_with, Kind, ParseOptions, Version};

fn categories(source: &str, version: Version) -> Vec<(&str, Category)> {
    let parse = parse_with(source, &ParseOptions::new(version));
    highlight(&parse.tree)
        .into_iter()
        .map(|highlight| (&source[highlight.range], highlight.category))
        .collect()
}

#[test]
fn selectors_prefer_specific_paths() {
    let call = [Kind::Program, Kind::CallExpression, Kind::VariableName, Kind::Ident];
    let name = [Kind::Program, Kind::VariableName, Kind::Ident];

    assert_eq!(Some(Category::Function), classify(&call));
    assert_eq!(Some(Category::Variable), classify(&name));
    assert_eq!(Some(Category::Invalid), classify(&[Kind::Program, Kind::Error]));
    assert_eq!(None, classify(&[Kind::Program, Kind::Whitespace]));
}

#[test]
fn function_definition() {
    let source = "fn greet(name: str) {\n    print(name.len());\n}";

    assert_eq!(
        vec![
            ("fn", Category::DefinitionKeyword),
            ("greet", Category::Function),
            ("(", Category::Bracket),
            ("name", Category::LocalVariable),
            (":", Category::Separator),
            ("str", Category::TypeName),
            (")", Category::Bracket),
            ("{", Category::Bracket),
            ("print", Category::BuiltinFunction),
            ("(", Category::Bracket),
            ("name", Category::Variable),
            (".", Category::Separator),
            ("len", Category::Function),
            ("(", Category::Bracket),
            (")", Category::Bracket),
            (")", Category::Bracket),
            (";", Category::Separator),
            ("}", Category::Bracket),
        ],
        categories(source, Version::Current)
    );
}

#[test]
fn properties_and_operators() {
    let source = "x.y += 1 << 2;";

    assert_eq!(
        vec![
            ("x", Category::Variable),
            (".", Category::Separator),
            ("y", Category::Property),
            ("+=", Category::UpdateOperator),
            ("1", Category::Number),
            ("<<", Category::BitwiseOperator),
            ("2", Category::Number),
            (";", Category::Separator),
        ],
        categories(source, Version::Current)
    );
}

#[test]
fn legacy_comments_and_builtins() {
    let highlighted = categories("# note\nweather", Version::Legacy);

    assert_eq!(
        vec![("# note", Category::Comment), ("weather", Category::BuiltinVariable)],
        highlighted
    );
}

#[test]
fn multiline_delimiters_fold() {
    let source = "fn f() {\n    let x = [\n        1,\n        2,\n    ];\n}";
    let parse = parse(source);

    let block = source.find('{').unwrap() + 1..source.rfind('}').unwrap();
    let list = source.find('[').unwrap() + 1..source.find(']').unwrap();

    assert_eq!(vec![block, list], folds(&parse.tree));
}

#[test]
fn single_lines_do_not_fold() {
    let parse = parse("fn f(a, b) { g(a, [b]) }");
    assert!(folds(&parse.tree).is_empty());
}

#[test]
fn indentation() {
    let source = "fn f() {\n    g(\n        1,\n    );\n}";
    let parse = parse(source);

    assert_eq!(0, indent_level(&parse.tree, 0));
    assert_eq!(1, indent_level(&parse.tree, source.find('g').unwrap()));
    assert_eq!(2, indent_level(&parse.tree, source.find('1').unwrap()));

    assert_eq!(Some(Kind::RightParen), indent_rule(Kind::Arguments));
    assert_eq!(Some(Kind::RightBrace), indent_rule(Kind::MatchExpression));
    assert_eq!(None, indent_rule(Kind::InfixExpression));
}

#[test]
fn completions_follow_the_version() {
    let current = keyword_completions(Version::Current);
    let legacy = keyword_completions(Version::Legacy);

    let find = |list: &[super::Completion], label: &str| {
        list.iter().find(|completion| completion.label == label).copied()
    };

    assert_eq!(Some(Kind::Type), find(&current, "type").map(|c| c.kind));
    assert!(find(&current, "println").is_some_and(|c| c.is_builtin()));
    assert!(find(&legacy, "type").is_none());
    assert!(find(&legacy, "weather").is_some_and(|c| c.is_builtin()));
}
