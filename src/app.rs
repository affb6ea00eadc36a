use crate::cli::{Cli, Command};
use crate::commands;
use crate::context::AppContext;
use crate::error::AppResult;

pub fn run(cli: Cli) -> AppResult<()> {
    let Cli {
        base_path,
        template,
        json,
        verbose: _,
        command,
    } = cli;

    let ctx = AppContext::bootstrap(base_path, template, json)?;

    match command {
        Command::Path => commands::inspect::path(&ctx),
        Command::Exists => commands::inspect::exists(&ctx),
        Command::Source => commands::inspect::source(&ctx),
        Command::Init => commands::init::run(&ctx),
        Command::Get(args) => commands::get::run(&ctx, args),
        Command::List => commands::list::run(&ctx),
        Command::Set(args) => commands::set::run(&ctx, args),
        Command::Unset(args) => commands::set::unset(&ctx, args),
        Command::Replace(args) => commands::set::replace(&ctx, args),
    }
}
