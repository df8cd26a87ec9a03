//! Largest Empty Square
//!
//! Reads map documents from the named files, or from standard input when no
//! file is given, and prints each map with its largest empty square filled
//! in. Invalid maps print `map error` on stderr and do not affect the exit
//! status.

use std::io::{self, BufWriter};
use std::path::PathBuf;
use std::process::ExitCode;

use clap::Parser;

use bsq::pipeline;

/// Finds and fills the largest empty square in each map.
#[derive(Parser)]
#[command(name = "bsq")]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Map files to process in order; reads standard input when omitted.
    files: Vec<PathBuf>,
}

fn main() -> ExitCode {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();

    let cli = Cli::parse();

    let stdout = io::stdout();
    let mut out = BufWriter::new(stdout.lock());
    let mut err = io::stderr().lock();

    let result = if cli.files.is_empty() {
        pipeline::run_reader(&mut io::stdin().lock(), &mut out, &mut err)
    } else {
        pipeline::run_files(&cli.files, &mut out, &mut err)
    };

    match result {
        Ok(summary) => {
            log::debug!(
                "processed {} documents, {} failed",
                summary.processed,
                summary.failed
            );
            ExitCode::SUCCESS
        }
        Err(e) => {
            log::error!("failed to write output: {e}");
            ExitCode::FAILURE
        }
    }
}
