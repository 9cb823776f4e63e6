use hmsc::args::{Args, Command, LogLevel};
use hmsc::{batch, lsp};
use simple_logger::SimpleLogger;

fn main() -> anyhow::Result<()> {
    let args: Args = argh::from_env();

    match args.command {
        Command::Check(check) => {
            init_logging(check.log)?;
            batch::check(&check.path, check.grammar, check.json)
        }

        Command::Tokens(tokens) => batch::tokens(&tokens.path, tokens.grammar),
        Command::Tree(tree) => batch::tree(&tree.path, tree.grammar),

        Command::Lsp(args) => {
            lsp::run(args.log.to_level_filter())?;
            Ok(())
        }
    }
}

fn init_logging(level: Option<LogLevel>) -> anyhow::Result<()> {
    let Some(level) = level else {
        return Ok(());
    };

    SimpleLogger::new()
        .with_level(level.to_level_filter())
        .init()?;

    Ok(())
}
