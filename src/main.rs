//! envhub - share encrypted environment variables with your team.

use clap::Parser;
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

use envhub::cli::{self, output, Cli};
use envhub::core::constants;

fn main() {
    let cli = Cli::parse();

    // Logs go to stderr so `export` output stays clean
    let filter = EnvFilter::try_from_env(constants::LOG_ENV).unwrap_or_else(|_| {
        if cli.verbose {
            EnvFilter::new("envhub=debug")
        } else {
            EnvFilter::new("envhub=warn")
        }
    });

    tracing_subscriber::registry()
        .with(filter)
        .with(
            fmt::layer()
                .with_target(false)
                .without_time()
                .with_writer(std::io::stderr),
        )
        .init();

    match cli::execute(cli.command) {
        Ok(code) => std::process::exit(code),
        Err(e) => {
            output::error(&e.to_string());
            if let Some(hint) = cli::hint(&e) {
                output::hint(&hint);
            }
            std::process::exit(e.exit_code());
        }
    }
}
