//! dnatraits: summarize consumer DNA genotype exports.
//!
//! CLI entry point using clap for argument parsing.

mod commands;

use std::process::ExitCode;

use anyhow::Result;
use clap::Parser;
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(
    name = "dnatraits",
    version,
    about = "Parse 23andMe-style raw genotype files and report a few traits",
    long_about = "Reads one or more 23andMe-style raw genotype exports, prints record counts,\n\
                  example SNP lookups and illustrative trait heuristics for each file.\n\
                  Exits with status 1 if any file fails to open or parse."
)]
struct Cli {
    /// Verbosity level (can be repeated: -v, -vv, -vvv)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    verbose: u8,

    #[command(flatten)]
    report: commands::report::ReportArgs,
}

fn main() -> Result<ExitCode> {
    let cli = Cli::parse();

    // Set up logging
    let filter = match cli.verbose {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    };
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(filter)),
        )
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();

    tracing::info!("dnatraits v{}", env!("CARGO_PKG_VERSION"));

    let all_ok = commands::report::run(cli.report)?;
    Ok(if all_ok {
        ExitCode::SUCCESS
    } else {
        ExitCode::FAILURE
    })
}
