use std::io::Write;
use std::path::PathBuf;

use anyhow::Context;
use serde::Serialize;
use tracing::{debug, info, warn};

use crate::cli::Cli;
use crate::core::diagnostics::Diagnostic;
use crate::core::types::UnmatchedDetection;
use crate::parsing::table::load_table_reader;
use crate::rewrite::{HeaderRewriter, RewriteConfig, RewriteSummary};
use crate::utils::io::{create_output, open_input};

/// Everything known about a finished run, as written by `--report`
#[derive(Debug, Serialize)]
pub struct RunReport {
    pub fasta: PathBuf,
    pub table: PathBuf,
    pub out: PathBuf,
    pub unmatched_detection: UnmatchedDetection,
    /// Distinct ids loaded from the table
    pub table_entries: usize,
    pub table_diagnostics: Vec<Diagnostic>,
    pub rewrite: RewriteSummary,
}

pub fn run(cli: &Cli) -> anyhow::Result<RunReport> {
    // All three files are opened up front so nothing is processed if one is unusable
    let fasta = open_input(&cli.fasta, "fasta")?;
    let table = open_input(&cli.table, "table")?;
    let out = create_output(&cli.out, "output")?;

    let load = load_table_reader(table)
        .with_context(|| format!("Failed to load table {}", cli.table.display()))?;
    for diagnostic in &load.diagnostics {
        warn!("{diagnostic}");
    }
    debug!("Loaded {} table entries", load.map.len());

    let config = RewriteConfig {
        unmatched_detection: cli.unmatched_detection,
    };
    let rewriter = HeaderRewriter::new(&load.map, config);
    let summary = rewriter
        .rewrite_stream(fasta, out)
        .with_context(|| format!("Failed to rewrite {}", cli.fasta.display()))?;
    for diagnostic in &summary.diagnostics {
        warn!("{diagnostic}");
    }

    info!(
        "Renamed {} of {} headers ({} lines) into {}",
        summary.renamed,
        summary.headers,
        summary.lines,
        cli.out.display()
    );

    let report = RunReport {
        fasta: cli.fasta.clone(),
        table: cli.table.clone(),
        out: cli.out.clone(),
        unmatched_detection: cli.unmatched_detection,
        table_entries: load.map.len(),
        table_diagnostics: load.diagnostics,
        rewrite: summary,
    };

    // The report only exists for runs that completed
    if let Some(path) = &cli.report {
        let mut writer = create_output(path, "report")?;
        serde_json::to_writer_pretty(&mut writer, &report).context("Failed to write report")?;
        writeln!(writer)?;
        writer.flush()?;
    }

    Ok(report)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::TempDir;

    fn write_file(dir: &TempDir, name: &str, content: &str) -> PathBuf {
        let path = dir.path().join(name);
        let mut file = std::fs::File::create(&path).unwrap();
        file.write_all(content.as_bytes()).unwrap();
        path
    }

    fn cli(fasta: PathBuf, table: PathBuf, out: PathBuf) -> Cli {
        Cli {
            fasta,
            table,
            out,
            report: None,
            unmatched_detection: crate::core::types::UnmatchedDetection::Flag,
            verbose: false,
        }
    }

    #[test]
    fn test_run_end_to_end() {
        let dir = TempDir::new().unwrap();
        let fasta = write_file(&dir, "in.fa", ">seq1 some description\nACGT\n>other x\nGG\n");
        let table = write_file(&dir, "names.tsv", "seq1 genomeA chr1 circular\nbroken\n");
        let out = dir.path().join("out.fa");

        let mut args = cli(fasta, table, out.clone());
        args.report = Some(dir.path().join("report.json"));
        let report = run(&args).unwrap();

        assert_eq!(
            std::fs::read_to_string(&out).unwrap(),
            ">genomeA&chr1&circular ac=seq1 some description\nACGT\n>other x\nGG\n"
        );
        assert_eq!(report.table_entries, 1);
        assert_eq!(report.table_diagnostics.len(), 1);
        assert_eq!(report.rewrite.renamed, 1);
        assert_eq!(report.rewrite.diagnostics.len(), 1);

        let json: serde_json::Value =
            serde_json::from_str(&std::fs::read_to_string(dir.path().join("report.json")).unwrap())
                .unwrap();
        assert_eq!(json["table_entries"], 1);
        assert_eq!(json["rewrite"]["headers"], 2);
        assert_eq!(
            json["table_diagnostics"][0]["kind"],
            "malformed_table_row"
        );
    }

    #[test]
    fn test_failed_run_leaves_no_report() {
        let dir = TempDir::new().unwrap();
        let fasta = write_file(&dir, "in.fa", ">seq1 d\nACGT\n>broken\n");
        let table = write_file(&dir, "names.tsv", "seq1 g c l\n");
        let report = dir.path().join("report.json");

        let mut args = cli(fasta, table, dir.path().join("out.fa"));
        args.report = Some(report.clone());
        let err = run(&args).unwrap_err();

        assert!(err.to_string().contains("Failed to rewrite"));
        assert!(!report.exists());
    }

    #[test]
    fn test_run_missing_table_writes_nothing() {
        let dir = TempDir::new().unwrap();
        let fasta = write_file(&dir, "in.fa", ">seq1 d\n");
        let out = dir.path().join("out.fa");

        let err = run(&cli(fasta, dir.path().join("missing.tsv"), out.clone())).unwrap_err();
        assert!(err.to_string().contains("table file"));
        assert!(!out.exists());
    }
}
