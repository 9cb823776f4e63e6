use super::render;
use crate::syntax::parse;

#[test]
fn renders_position_and_notes() {
    let parse = parse("let x = ;");
    let diagnostic = parse.diagnostics.first().expect("an error");

    let rendered = render("script.hms", diagnostic);
    let mut lines = rendered.lines();

    assert_eq!(
        Some("script.hms:1:9: error: unexpected `;`"),
        lines.next()
    );
    assert!(lines.all(|line| line.starts_with("  ")));
}

#[test]
fn check_fails_on_errors() {
    let dir = std::env::temp_dir().join(format!("hmsc-batch-{}", std::process::id()));
    std::fs::create_dir_all(&dir).unwrap();

    let good = dir.join("good.hms");
    let bad = dir.join("bad.hms");
    std::fs::write(&good, "let x = 1;\n").unwrap();
    std::fs::write(&bad, "let x = ;\n").unwrap();

    assert!(super::check(&good, Default::default(), false).is_ok());
    assert!(super::check(&bad, Default::default(), true).is_err());

    std::fs::remove_dir_all(&dir).unwrap();
}
