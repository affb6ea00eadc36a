use clap::Parser;
use tracing_subscriber::EnvFilter;

fn main() {
    let cli = reduxrc::cli::Cli::parse();

    let level = match cli.verbose {
        0 => "warn",
        1 => "info",
        _ => "debug",
    };
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(level)),
        )
        .init();

    if let Err(err) = reduxrc::run(cli) {
        eprintln!("error: {err}");
        std::process::exit(1);
    }
}
