use proptest::{prop_assert_eq, proptest};

use crate::syntax::document::Document;
use crate::syntax::parse::{parse_with, ParseOptions};
use crate::syntax::version::Version;

proptest! {
    #[test]
    fn edits_match_fresh_parses(
        old in r#"[a-z0-9 \n"'/*{}();=+]{0,40}"#,
        start in 0usize..48,
        len in 0usize..8,
        inserted in r#"[a-z0-9 \n"'/*{}();=+]{0,6}"#,
    ) {
        let start = start.min(old.len());
        let end = (start + len).min(old.len());

        let mut document = Document::new(old.clone(), ParseOptions::default());
        document.edit(start..end, &inserted);

        let mut expected = old.clone();
        expected.replace_range(start..end, &inserted);
        let fresh = parse_with(&expected, &ParseOptions::default());

        prop_assert_eq!(&expected, document.text());
        prop_assert_eq!(fresh.tree.green(), document.tree().green());
        prop_assert_eq!(&fresh.diagnostics, &document.diagnostics().to_vec());
    }
}

#[test]
fn edits_update_the_tree() {
    let mut document = Document::new("let x = ;", ParseOptions::default());
    assert_eq!(1, document.diagnostics().len());

    document.edit(8..8, "42");
    assert_eq!("let x = 42;", document.text());
    assert!(document.diagnostics().is_empty());
}

#[test]
fn edits_are_clamped_to_characters() {
    let mut document = Document::new("let s = 'æ';", ParseOptions::default());
    document.edit(10..10, "ø");

    assert!(document.text().is_char_boundary(0));
    assert_eq!(document.text().len(), document.tree().green().width());
}

#[test]
fn replace_relexes_everything() {
    let options = ParseOptions::new(Version::Legacy);
    let mut document = Document::new("# comment", options);
    document.replace("let x = 1 # again");

    assert!(document.diagnostics().is_empty());
    assert_eq!("let x = 1 # again", document.text());
    assert_eq!(Version::Legacy, document.tree().version());
}
