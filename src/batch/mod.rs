//! At the command line, the front end is mostly used as a "batch" tool - run
//! once over a file, printing what it finds.

use std::fmt::Write as _;
use std::path::Path;

use anyhow::anyhow;
use log::info;

use crate::syntax::errors::NoteType;
use crate::syntax::{parse_with, tokenize, Diagnostic, ParseOptions, Severity, Version};

#[cfg(test)]
mod tests;

/// Parse the file and print its diagnostics. Fails if there were any errors.
pub fn check(path: &Path, version: Version, json: bool) -> anyhow::Result<()> {
    let source = std::fs::read_to_string(path)?;
    let filename = path.display().to_string();
    let options = ParseOptions::new(version).with_filename(filename.as_str());

    let parse = parse_with(&source, &options);
    info!("checked `{filename}` with {} diagnostics", parse.diagnostics.len());

    for diagnostic in parse.diagnostics.iter() {
        if json {
            println!("{}", serde_json::to_string(&diagnostic.report(&filename))?);
        } else {
            eprint!("{}", render(&filename, diagnostic));
        }
    }

    let errors = parse
        .diagnostics
        .iter()
        .filter(|diagnostic| diagnostic.severity == Severity::Error)
        .count();

    if errors == 0 {
        Ok(())
    } else {
        Err(anyhow!("{errors} syntax errors in `{filename}`"))
    }
}

/// Print every token of the file, one per line.
pub fn tokens(path: &Path, version: Version) -> anyhow::Result<()> {
    let source = std::fs::read_to_string(path)?;

    for token in tokenize(&source, version) {
        let start = token.span.start;
        println!(
            "{}:{} {:?} {:?}",
            start.line, start.column, token.kind, token.text
        );
    }

    Ok(())
}

/// Print the syntax tree of the file.
pub fn tree(path: &Path, version: Version) -> anyhow::Result<()> {
    let source = std::fs::read_to_string(path)?;
    let filename = path.display().to_string();
    let parse = parse_with(&source, &ParseOptions::new(version).with_filename(filename));

    println!("{:#?}", parse.tree);
    Ok(())
}

/// Render a diagnostic as `file:line:column: severity: message`, followed by
/// its labels and notes.
pub fn render(filename: &str, diagnostic: &Diagnostic) -> String {
    let severity = match diagnostic.severity {
        Severity::Error => "error",
        Severity::Note => "note",
    };

    let start = diagnostic.span.start;
    let mut out = format!(
        "{filename}:{}:{}: {severity}: {}\n",
        start.line, start.column, diagnostic.message
    );

    for (message, span) in diagnostic.labels.iter() {
        let _ = writeln!(
            out,
            "  {filename}:{}:{}: {message}",
            span.start.line, span.start.column
        );
    }

    for (message, ty) in diagnostic.notes.iter() {
        let prefix = match ty {
            NoteType::Note => "note",
            NoteType::Help => "help",
        };

        let _ = writeln!(out, "  = {prefix}: {message}");
    }

    out
}
