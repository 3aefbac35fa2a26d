//! Command-line arguments.

use std::path::PathBuf;

use clap::Parser;
use thiserror::Error;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum Error {
    #[error("input and output must be different files: {}", .0.display())]
    SamePath(PathBuf),
}

/// Summarize sales records by category into a JSON document.
#[derive(Parser, Debug, Clone)]
#[command(author, version, about, long_about = None)]
pub struct Args {
    /// CSV file with at least `Category` and `Amount` columns
    #[arg(
        short,
        long,
        value_name = "FILE",
        default_value = "data/sales_data.csv",
        env = "SALES_SUMMARY_INPUT"
    )]
    pub input: PathBuf,

    /// Where to write the JSON summary
    #[arg(
        short,
        long,
        value_name = "FILE",
        default_value = "output/summary.json",
        env = "SALES_SUMMARY_OUTPUT"
    )]
    pub output: PathBuf,

    /// Enable debug logging
    #[arg(short, long, conflicts_with = "quiet")]
    pub verbose: bool,

    /// Only log errors
    #[arg(short, long)]
    pub quiet: bool,
}

impl Args {
    pub fn validate(&self) -> Result<(), Error> {
        if self.input == self.output {
            return Err(Error::SamePath(self.input.clone()));
        }
        Ok(())
    }

    /// Default log filter when `RUST_LOG` is not set.
    pub fn log_filter(&self) -> &'static str {
        if self.quiet {
            "error"
        } else if self.verbose {
            "debug"
        } else {
            "info"
        }
    }
}
