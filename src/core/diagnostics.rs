//! Recoverable conditions reported while loading the table and rewriting headers.
//!
//! The library never prints these; callers decide where they go.

use serde::Serialize;

/// A non-fatal warning. Line numbers are 1-based.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum Diagnostic {
    /// A non-empty table line with fewer than four fields
    MalformedTableRow { line_number: usize, line: String },

    /// A FASTA header whose name contained no table id
    UnmatchedHeaderName { line_number: usize, name: String },
}

impl std::fmt::Display for Diagnostic {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::MalformedTableRow { line, .. } => write!(f, "bad line in table: {line}"),
            Self::UnmatchedHeaderName { name, .. } => write!(f, "name {name} was not replaced"),
        }
    }
}

impl Diagnostic {
    #[must_use]
    pub fn line_number(&self) -> usize {
        match self {
            Self::MalformedTableRow { line_number, .. }
            | Self::UnmatchedHeaderName { line_number, .. } => *line_number,
        }
    }
}
