use std::io::{BufRead, Write};

use serde::Serialize;
use thiserror::Error;

use crate::core::diagnostics::Diagnostic;
use crate::core::name_map::NameMap;
use crate::core::types::UnmatchedDetection;
use crate::parsing::fasta::{header_content, split_header, split_terminator, HEADER_PREFIX};

/// Prefix put in front of the original id in rewritten descriptions
pub const ACCESSION_TAG: &[u8] = b"ac=";

#[derive(Error, Debug)]
pub enum RewriteError {
    #[error(transparent)]
    Io(#[from] std::io::Error),

    #[error("header on line {line_number} has no space-separated description: {line}")]
    MissingDescription { line_number: usize, line: String },
}

/// Configuration for the header rewriter
#[derive(Debug, Clone, Copy, Default)]
pub struct RewriteConfig {
    pub unmatched_detection: UnmatchedDetection,
}

/// Outcome of rewriting a single header
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HeaderRewrite {
    /// Header line without its terminator, starting with `>`
    pub line: Vec<u8>,
    /// Table id found in the name, if any
    pub matched_id: Option<Vec<u8>>,
    /// Set when the header counts as not replaced
    pub diagnostic: Option<Diagnostic>,
}

/// Counts and warnings from one rewriting pass
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct RewriteSummary {
    /// Total lines read (and written)
    pub lines: usize,
    /// Lines starting with `>`
    pub headers: usize,
    /// Headers whose name was replaced by a composite name
    pub renamed: usize,
    pub diagnostics: Vec<Diagnostic>,
}

/// Rewrites FASTA header names using an ordered id → composite mapping
pub struct HeaderRewriter<'a> {
    map: &'a NameMap,
    config: RewriteConfig,
}

impl<'a> HeaderRewriter<'a> {
    #[must_use]
    pub fn new(map: &'a NameMap, config: RewriteConfig) -> Self {
        Self { map, config }
    }

    /// Rewrite the content of one header line (after `>`, without terminator).
    ///
    /// The first table id (in table order) contained in the name replaces the
    /// name with its composite value, and the description becomes
    /// `ac=<id> <trimmed description>`. Bytes are copied as-is; nothing here
    /// requires UTF-8.
    ///
    /// # Errors
    ///
    /// Returns `RewriteError::MissingDescription` if the header has no space.
    pub fn rewrite_header(
        &self,
        line_number: usize,
        content: &[u8],
    ) -> Result<HeaderRewrite, RewriteError> {
        let header = split_header(content).ok_or_else(|| RewriteError::MissingDescription {
            line_number,
            line: format!(">{}", String::from_utf8_lossy(content)),
        })?;

        let mut line = Vec::with_capacity(content.len() + ACCESSION_TAG.len() + 64);
        line.push(HEADER_PREFIX);

        let matched = self.map.find_in(header.name);
        let name: &[u8] = match matched {
            Some((id, composite)) => {
                line.extend_from_slice(composite);
                line.push(b' ');
                line.extend_from_slice(ACCESSION_TAG);
                line.extend_from_slice(id);
                line.push(b' ');
                line.extend_from_slice(header.description.trim_ascii());
                composite
            }
            None => {
                line.extend_from_slice(content);
                header.name
            }
        };

        let unmatched = match self.config.unmatched_detection {
            UnmatchedDetection::Flag => matched.is_none(),
            UnmatchedDetection::NameEquality => name == header.name,
        };
        let diagnostic = unmatched.then(|| Diagnostic::UnmatchedHeaderName {
            line_number,
            name: String::from_utf8_lossy(header.name).into_owned(),
        });

        Ok(HeaderRewrite {
            line,
            matched_id: matched.map(|(id, _)| id.to_vec()),
            diagnostic,
        })
    }

    /// Copy `reader` to `writer` line by line, rewriting header lines.
    ///
    /// Non-header lines and every line terminator are written byte for byte,
    /// so the output has exactly as many lines as the input.
    ///
    /// # Errors
    ///
    /// Returns `RewriteError::Io` on read/write failure, or
    /// `RewriteError::MissingDescription` for a header without a space.
    pub fn rewrite_stream<R: BufRead, W: Write>(
        &self,
        mut reader: R,
        mut writer: W,
    ) -> Result<RewriteSummary, RewriteError> {
        let mut summary = RewriteSummary::default();
        let mut buf = Vec::new();

        loop {
            buf.clear();
            if reader.read_until(b'\n', &mut buf)? == 0 {
                break;
            }
            summary.lines += 1;

            let (content, terminator) = split_terminator(&buf);
            let Some(header) = header_content(content) else {
                writer.write_all(&buf)?;
                continue;
            };

            summary.headers += 1;
            let rewrite = self.rewrite_header(summary.lines, header)?;
            if rewrite.matched_id.is_some() {
                summary.renamed += 1;
            }
            if let Some(diagnostic) = rewrite.diagnostic {
                summary.diagnostics.push(diagnostic);
            }

            writer.write_all(&rewrite.line)?;
            writer.write_all(terminator)?;
        }

        writer.flush()?;
        Ok(summary)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::parsing::table::load_table_text;

    fn rewrite(table: &str, fasta: &str) -> (String, RewriteSummary) {
        rewrite_with(table, fasta, RewriteConfig::default())
    }

    fn rewrite_with(table: &str, fasta: &str, config: RewriteConfig) -> (String, RewriteSummary) {
        let load = load_table_text(table);
        let rewriter = HeaderRewriter::new(&load.map, config);
        let mut out = Vec::new();
        let summary = rewriter.rewrite_stream(fasta.as_bytes(), &mut out).unwrap();
        (String::from_utf8(out).unwrap(), summary)
    }

    #[test]
    fn test_matched_header() {
        let (out, summary) = rewrite(
            "seq1 genomeA chr1 circular\n",
            ">seq1 some description\nACGT\n",
        );
        assert_eq!(out, ">genomeA&chr1&circular ac=seq1 some description\nACGT\n");
        assert_eq!(summary.headers, 1);
        assert_eq!(summary.renamed, 1);
        assert!(summary.diagnostics.is_empty());
    }

    #[test]
    fn test_unmatched_header_unchanged() {
        let (out, summary) = rewrite("", ">unknownX desc\n");
        assert_eq!(out, ">unknownX desc\n");
        assert_eq!(summary.renamed, 0);
        assert_eq!(
            summary.diagnostics,
            vec![Diagnostic::UnmatchedHeaderName {
                line_number: 1,
                name: "unknownX".to_string(),
            }]
        );
    }

    #[test]
    fn test_sequence_lines_pass_through() {
        let fasta = "ACGTACGT\n  >not a header\n\nNNNN";
        let (out, summary) = rewrite("ACGT g c l\n", fasta);
        assert_eq!(out, fasta);
        assert_eq!(summary.headers, 0);
        assert_eq!(summary.lines, 4);
    }

    #[test]
    fn test_first_match_wins() {
        let (out, _) = rewrite("ab gAB cAB c\na gA cA l\n", ">xabx d\n");
        assert_eq!(out, ">gAB&cAB&c ac=ab d\n");

        let (out, _) = rewrite("a gA cA l\nab gAB cAB c\n", ">xabx d\n");
        assert_eq!(out, ">gA&cA&l ac=a d\n");
    }

    #[test]
    fn test_substring_match_anywhere_in_name() {
        let (out, _) = rewrite("NC_001 g chrM c\n", ">lcl|NC_001.1_x mito\n");
        assert_eq!(out, ">g&chrM&c ac=NC_001 mito\n");
    }

    #[test]
    fn test_description_trimmed_only_when_matched() {
        let (out, _) = rewrite("s g c l\n", ">s   spaced  \n>t   spaced  \n");
        assert_eq!(out, ">g&c&l ac=s spaced\n>t   spaced  \n");
    }

    #[test]
    fn test_empty_description() {
        let (out, _) = rewrite("s g c l\n", ">s \n");
        assert_eq!(out, ">g&c&l ac=s \n");
    }

    #[test]
    fn test_line_count_preserved() {
        let fasta = ">s1 a\nAC\nGT\n>s2 b\nTT\n>u c\nGG\n";
        let (out, summary) = rewrite("s1 g c l\ns2 g c2 c\n", fasta);
        assert_eq!(out.lines().count(), fasta.lines().count());
        assert_eq!(summary.lines, 7);
        assert_eq!(summary.headers, 3);
        assert_eq!(summary.renamed, 2);
        assert_eq!(summary.diagnostics.len(), 1);
        assert_eq!(summary.diagnostics[0].line_number(), 6);
    }

    #[test]
    fn test_crlf_terminators_preserved() {
        let (out, _) = rewrite("s g c l\n", ">s d\r\nACGT\r\n");
        assert_eq!(out, ">g&c&l ac=s d\r\nACGT\r\n");
    }

    #[test]
    fn test_last_header_without_newline() {
        let (out, _) = rewrite("s g c l\n", "ACGT\n>s d");
        assert_eq!(out, "ACGT\n>g&c&l ac=s d");
    }

    #[test]
    fn test_non_utf8_sequence_line_passes_through() {
        let load = load_table_text("seq1 g c l\n");
        let rewriter = HeaderRewriter::new(&load.map, RewriteConfig::default());
        let fasta = b">seq1 d\nACGT\xff\n\xfe\xfd\r\n";

        let mut out = Vec::new();
        let summary = rewriter.rewrite_stream(&fasta[..], &mut out).unwrap();
        assert_eq!(out, b">g&c&l ac=seq1 d\nACGT\xff\n\xfe\xfd\r\n");
        assert_eq!(summary.lines, 3);
    }

    #[test]
    fn test_non_utf8_header_description() {
        let load = load_table_text("seq1 g c l\n");
        let rewriter = HeaderRewriter::new(&load.map, RewriteConfig::default());
        let fasta = b">seq1 E. coli M\xfcnchen\nACGT\n>other K\xf6ln\nGG\n";

        let mut out = Vec::new();
        let summary = rewriter.rewrite_stream(&fasta[..], &mut out).unwrap();
        assert_eq!(
            out,
            b">g&c&l ac=seq1 E. coli M\xfcnchen\nACGT\n>other K\xf6ln\nGG\n"
        );
        assert_eq!(summary.renamed, 1);
        assert_eq!(summary.diagnostics.len(), 1);
    }

    #[test]
    fn test_io_error_message_is_the_cause() {
        let err = RewriteError::from(std::io::Error::new(std::io::ErrorKind::Other, "disk full"));
        assert_eq!(err.to_string(), "disk full");
        assert!(std::error::Error::source(&err).is_none());
    }

    #[test]
    fn test_header_without_space_is_error() {
        let load = load_table_text("s g c l\n");
        let rewriter = HeaderRewriter::new(&load.map, RewriteConfig::default());
        let mut out = Vec::new();
        let result = rewriter.rewrite_stream(">ok d\n>s\nACGT\n".as_bytes(), &mut out);
        match result {
            Err(RewriteError::MissingDescription { line_number, line }) => {
                assert_eq!(line_number, 2);
                assert_eq!(line, ">s");
            }
            other => panic!("expected MissingDescription, got {other:?}"),
        }
    }

    #[test]
    fn test_name_equality_reports_coincidental_identity() {
        // Composite value equal to the original name
        let map = {
            let mut map = NameMap::new();
            map.insert("x", "x");
            map
        };
        let legacy = HeaderRewriter::new(
            &map,
            RewriteConfig {
                unmatched_detection: UnmatchedDetection::NameEquality,
            },
        );
        let rewrite = legacy.rewrite_header(1, b"x d").unwrap();
        assert_eq!(rewrite.line, b">x ac=x d");
        assert_eq!(rewrite.matched_id.as_deref(), Some(&b"x"[..]));
        assert!(rewrite.diagnostic.is_some());

        let flagged = HeaderRewriter::new(&map, RewriteConfig::default());
        let rewrite = flagged.rewrite_header(1, b"x d").unwrap();
        assert!(rewrite.diagnostic.is_none());
    }

    #[test]
    fn test_name_equality_reports_unmatched() {
        let config = RewriteConfig {
            unmatched_detection: UnmatchedDetection::NameEquality,
        };
        let (out, summary) = rewrite_with("s g c l\n", ">q d\n", config);
        assert_eq!(out, ">q d\n");
        assert_eq!(summary.diagnostics.len(), 1);
    }
}
