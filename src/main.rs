mod cli;

use std::process::ExitCode;

use clap::Parser;
use tracing::error;
use tracing_subscriber::EnvFilter;

fn main() -> ExitCode {
    let args = cli::Args::parse();

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new(args.log_filter())),
        )
        .with_writer(std::io::stderr)
        .with_target(false)
        .compact()
        .init();

    if let Err(err) = args.validate() {
        error!("{err}");
        return ExitCode::FAILURE;
    }

    match sales_summary::run(&args.input, &args.output) {
        Ok(summary) => {
            println!(
                "Summarized {} rows into {} categories: {}",
                summary.rows,
                summary.categories.len(),
                args.output.display()
            );
            ExitCode::SUCCESS
        }
        Err(err) => {
            error!(kind = %err.kind(), "{err}");
            ExitCode::FAILURE
        }
    }
}
