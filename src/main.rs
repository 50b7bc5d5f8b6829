use clap::Parser;
use tracing_subscriber::EnvFilter;

use polywatch_notify::{cli, errors, run};

#[tokio::main]
async fn main() {
    let cli = cli::Cli::parse();

    // Initialize logging
    let log_level = match cli.verbose {
        0 => "info",
        1 => "debug",
        _ => "trace",
    };

    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(log_level));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .init();

    match run::run(cli).await {
        Ok(()) => {}
        Err(e) => {
            eprintln!("Error: {}", e);
            let exit_code = match &e {
                errors::NotifyError::Config(_) => 2,
                _ => 1,
            };
            std::process::exit(exit_code);
        }
    }
}
