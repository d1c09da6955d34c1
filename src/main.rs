use std::io::IsTerminal;
use std::process::ExitCode;

use clap::Parser;
use tracing_subscriber::EnvFilter;

use fasta_renamer::cli;

/// Exit status for any fatal error
const FAILURE_EXIT_CODE: u8 = 255;

fn main() -> ExitCode {
    let cli = cli::Cli::parse();

    // Initialize logging based on verbosity flag
    let filter = if cli.verbose {
        EnvFilter::new("fasta_renamer=debug,info")
    } else {
        EnvFilter::new("fasta_renamer=warn")
    };

    // Warnings share stdout with the error message
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .without_time()
        .with_ansi(std::io::stdout().is_terminal())
        .with_writer(std::io::stdout)
        .init();

    match cli::rename::run(&cli) {
        Ok(_) => ExitCode::SUCCESS,
        Err(e) => {
            println!("{e:#}");
            ExitCode::from(FAILURE_EXIT_CODE)
        }
    }
}
