mod cli;

use clap::Parser;
use iconsmith_config::Settings;
use std::process::ExitCode;
use tracing_subscriber::EnvFilter;

fn init_tracing(verbosity: u8) {
    let default_directive = match verbosity {
        0 => "info",
        1 => "debug",
        _ => "trace",
    };
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_directive));
    tracing_subscriber::fmt().with_env_filter(filter).init();
}

#[tokio::main]
async fn main() -> ExitCode {
    let cli = cli::Cli::parse();
    init_tracing(cli.verbose);

    let settings = match Settings::load(&cli) {
        Ok(settings) => settings,
        Err(err) => {
            tracing::error!(error = ?err, "could not load configuration");
            return ExitCode::FAILURE;
        }
    };

    match iconsmith::run(&settings).await {
        Ok(report) => {
            for line in report.lines() {
                println!("{line}");
            }
            ExitCode::SUCCESS
        }
        Err(err) => {
            tracing::error!(error = ?err, "run failed");
            ExitCode::FAILURE
        }
    }
}
