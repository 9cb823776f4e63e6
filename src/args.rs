use std::path::PathBuf;
use std::str::FromStr;

use argh::FromArgs;

use crate::syntax::Version;

/// A front end for Homescript: syntax checking and a language server.
#[derive(FromArgs, Debug)]
pub struct Args {
    #[argh(subcommand)]
    pub command: Command,
}

#[derive(FromArgs, Debug)]
#[argh(subcommand)]
pub enum Command {
    Check(Check),
    Tokens(Tokens),
    Tree(Tree),
    Lsp(Lsp),
}

/// Check a script for syntax errors.
#[derive(FromArgs, Debug)]
#[argh(subcommand, name = "check")]
pub struct Check {
    /// the source file to check
    #[argh(positional)]
    pub path: PathBuf,

    /// the language version (`current` or `legacy`)
    #[argh(option, default = "Version::Current")]
    pub grammar: Version,

    /// report errors as json, in the shape the runtime uses
    #[argh(switch)]
    pub json: bool,

    /// the amount of logging to perform
    #[argh(option)]
    pub log: Option<LogLevel>,
}

/// Print the tokens of a script.
#[derive(FromArgs, Debug)]
#[argh(subcommand, name = "tokens")]
pub struct Tokens {
    /// the source file to lex
    #[argh(positional)]
    pub path: PathBuf,

    /// the language version (`current` or `legacy`)
    #[argh(option, default = "Version::Current")]
    pub grammar: Version,
}

/// Print the syntax tree of a script.
#[derive(FromArgs, Debug)]
#[argh(subcommand, name = "tree")]
pub struct Tree {
    /// the source file to parse
    #[argh(positional)]
    pub path: PathBuf,

    /// the language version (`current` or `legacy`)
    #[argh(option, default = "Version::Current")]
    pub grammar: Version,
}

/// Run as a language server over stdio.
#[derive(FromArgs, Debug)]
#[argh(subcommand, name = "lsp")]
pub struct Lsp {
    /// the amount of logging to perform.
    #[argh(option, default = "LogLevel::Off")]
    pub log: LogLevel,
}

#[derive(Clone, Copy, Debug)]
pub enum LogLevel {
    Off,
    Trace,
    Debug,
    Info,
    Warning,
    Error,
}

impl LogLevel {
    pub fn to_level_filter(&self) -> log::LevelFilter {
        match self {
            LogLevel::Off => log::LevelFilter::Off,
            LogLevel::Trace => log::LevelFilter::Trace,
            LogLevel::Debug => log::LevelFilter::Debug,
            LogLevel::Info => log::LevelFilter::Info,
            LogLevel::Warning => log::LevelFilter::Warn,
            LogLevel::Error => log::LevelFilter::Error,
        }
    }
}

impl FromStr for LogLevel {
    type Err = &'static str;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "off" => Ok(Self::Off),
            "trace" => Ok(Self::Trace),
            "debug" => Ok(Self::Debug),
            "info" => Ok(Self::Info),
            "warning" => Ok(Self::Warning),
            "error" => Ok(Self::Error),

            _ => Err("expected one of `off`, `trace`, `debug`, `info`, `warning`, or `error`"),
        }
    }
}
