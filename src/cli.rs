use std::path::PathBuf;

use clap::{ArgAction, Args, Parser, Subcommand};

use crate::config::paths::DEFAULT_TEMPLATE;

#[derive(Debug, Parser)]
#[command(name = "reduxrc", version, about = "Manage per-project .reduxrc settings")]
pub struct Cli {
    #[arg(
        long,
        global = true,
        env = "REDUXRC_BASE_PATH",
        help = "Project directory (defaults to the current directory)"
    )]
    pub base_path: Option<PathBuf>,
    #[arg(
        long,
        global = true,
        default_value = DEFAULT_TEMPLATE,
        help = "Template name looked up under <base-path>/templates/"
    )]
    pub template: String,
    #[arg(long, global = true, help = "Emit JSON output")]
    pub json: bool,
    #[arg(short = 'v', long, global = true, action = ArgAction::Count, help = "Verbose logging")]
    pub verbose: u8,
    #[command(subcommand)]
    pub command: Command,
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// Print the settings file path
    Path,
    /// Report whether the settings file exists
    Exists,
    /// Overwrite the settings file with the template
    Init,
    /// Print where the loaded settings came from
    Source,
    Get(GetArgs),
    List,
    Set(SetArgs),
    Unset(UnsetArgs),
    Replace(ReplaceArgs),
}

#[derive(Debug, Args)]
pub struct GetArgs {
    #[arg(help = "Setting name")]
    pub key: String,
}

#[derive(Debug, Args)]
pub struct SetArgs {
    #[arg(help = "Setting name")]
    pub key: String,
    #[arg(help = "JSON value; anything that is not valid JSON is stored as a string")]
    pub value: String,
}

#[derive(Debug, Args)]
pub struct UnsetArgs {
    #[arg(help = "Setting name")]
    pub key: String,
}

#[derive(Debug, Args)]
pub struct ReplaceArgs {
    #[arg(help = "JSON object replacing every setting")]
    pub settings: String,
}
