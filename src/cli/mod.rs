//! Command-line interface for fasta-renamer.
//!
//! ## Usage
//!
//! ```text
//! # Rename headers using a lookup table
//! fasta-renamer --fasta contigs.fa --table names.tsv --out renamed.fa
//!
//! # Gzipped inputs are read transparently; write a JSON run report
//! fasta-renamer --fasta contigs.fa.gz --table names.tsv --out renamed.fa --report run.json
//! ```
//!
//! The table has one `fasta_id genome chromosome c[ircular]|l[inear]` record
//! per line. Warnings go to standard output. Any fatal error is printed there
//! too and the process exits with status 255.

use std::path::PathBuf;

use clap::Parser;

use crate::core::types::UnmatchedDetection;

pub mod rename;

#[derive(Parser)]
#[command(name = "fasta-renamer")]
#[command(author = "Fulcrum Genomics")]
#[command(version)]
#[command(about = "Replace fasta identifiers with genome and chromosome")]
#[command(
    long_about = "fasta-renamer rewrites FASTA headers using a lookup table.\n\nEach header whose name contains a table id is renamed to genome&chromosome&topology and its description is prefixed with ac=<id>. Sequence lines are copied unchanged."
)]
pub struct Cli {
    /// Input fasta file
    #[arg(long, value_name = "FILE", required = true)]
    pub fasta: PathBuf,

    /// Table (fasta_id genome chromosome c[ircular]/l[inear])
    #[arg(long, value_name = "FILE", required = true)]
    pub table: PathBuf,

    /// Output new fasta file
    #[arg(long, value_name = "FILE", required = true)]
    pub out: PathBuf,

    /// Write a JSON summary of a completed run, including all warnings
    #[arg(long, value_name = "FILE")]
    pub report: Option<PathBuf>,

    /// How to decide that a header was not replaced
    #[arg(long, value_enum, default_value_t = UnmatchedDetection::Flag)]
    pub unmatched_detection: UnmatchedDetection,

    /// Enable verbose output
    #[arg(short, long)]
    pub verbose: bool,
}
