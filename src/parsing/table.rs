//! Loader for the id → genome/chromosome/topology lookup table.
//!
//! One record per line, fields separated by arbitrary whitespace:
//!
//! ```text
//! fasta_id  genome  chromosome  c[ircular]|l[inear]
//! ```
//!
//! Extra trailing fields are ignored and blank lines are skipped. Lines with
//! fewer than four fields are reported as diagnostics and skipped.

use std::io::BufRead;
use std::path::Path;

use thiserror::Error;
use tracing::debug;

use crate::core::diagnostics::Diagnostic;
use crate::core::name_map::{NameMap, TableRecord};
use crate::utils::io::{open_input, OpenError};

#[derive(Error, Debug)]
pub enum TableError {
    #[error(transparent)]
    Open(#[from] OpenError),

    #[error(transparent)]
    Io(#[from] std::io::Error),
}

/// Result of loading a table: the mapping plus any skipped-line warnings
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TableLoad {
    pub map: NameMap,
    pub diagnostics: Vec<Diagnostic>,
}

/// Parse one trimmed, non-empty table line
#[must_use]
pub fn parse_record(line: &[u8]) -> Option<TableRecord> {
    let mut fields = line
        .split(u8::is_ascii_whitespace)
        .filter(|field| !field.is_empty());
    let id = fields.next()?;
    let genome = fields.next()?;
    let chromosome = fields.next()?;
    let topology = fields.next()?;
    Some(TableRecord::new(id, genome, chromosome, topology))
}

/// Add one raw table line to `load`. `line_number` is 1-based.
fn load_line(load: &mut TableLoad, line_number: usize, raw: &[u8]) {
    let line = raw.trim_ascii();
    if line.is_empty() {
        return;
    }

    let Some(record) = parse_record(line) else {
        load.diagnostics.push(Diagnostic::MalformedTableRow {
            line_number,
            line: String::from_utf8_lossy(line).into_owned(),
        });
        return;
    };

    debug!(
        "table line {line_number}: {} -> {} ({})",
        String::from_utf8_lossy(&record.id),
        String::from_utf8_lossy(&record.composite()),
        record.topology_kind()
    );
    if let Some(previous) = load.map.insert_record(&record) {
        debug!(
            "table id {} redefined (was {})",
            String::from_utf8_lossy(&record.id),
            String::from_utf8_lossy(&previous)
        );
    }
}

/// Load a table from in-memory text
#[must_use]
pub fn load_table_text(text: &str) -> TableLoad {
    let mut load = TableLoad::default();
    for (i, line) in text.lines().enumerate() {
        load_line(&mut load, i + 1, line.as_bytes());
    }
    load
}

/// Load a table from a buffered reader.
///
/// Lines are handled as bytes; ids and names need not be UTF-8.
///
/// # Errors
///
/// Returns `TableError::Io` if reading fails.
pub fn load_table_reader<R: BufRead>(mut reader: R) -> Result<TableLoad, TableError> {
    let mut load = TableLoad::default();
    let mut buf = Vec::new();
    let mut line_number = 0;

    loop {
        buf.clear();
        if reader.read_until(b'\n', &mut buf)? == 0 {
            break;
        }
        line_number += 1;
        load_line(&mut load, line_number, &buf);
    }

    Ok(load)
}

/// Load a table from a file, decompressing `.gz`/`.bgz` transparently
///
/// # Errors
///
/// Returns `TableError::Open` if the file cannot be opened, or
/// `TableError::Io` if reading fails.
pub fn load_table_file(path: &Path) -> Result<TableLoad, TableError> {
    load_table_reader(open_input(path, "table")?)
}
