pub mod app;
pub mod cli;
pub mod commands;
pub mod config;
pub mod context;
pub mod error;
pub mod output;
pub mod probe;

use cli::Cli;
use error::AppResult;

pub use config::{ProjectSettings, Settings, SettingsSource};
pub use error::AppError;

pub fn run(cli: Cli) -> AppResult<()> {
    app::run(cli)
}
