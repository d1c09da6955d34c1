//! Header rewriting.
//!
//! [`HeaderRewriter`] streams FASTA text and replaces each header name with
//! the composite name of the first table id found inside it:
//!
//! ```text
//! table:  seq1  genomeA  chr1  circular
//! input:  >seq1 some description
//! output: >genomeA&chr1&circular ac=seq1 some description
//! ```
//!
//! Headers with no matching id are written unchanged and reported as
//! [`Diagnostic::UnmatchedHeaderName`](crate::core::diagnostics::Diagnostic).
//!
//! ## Example
//!
//! ```rust
//! use fasta_renamer::parsing::table::load_table_text;
//! use fasta_renamer::rewrite::{HeaderRewriter, RewriteConfig};
//!
//! let load = load_table_text("seq1 genomeA chr1 circular\n");
//! let rewriter = HeaderRewriter::new(&load.map, RewriteConfig::default());
//!
//! let mut out = Vec::new();
//! let summary = rewriter
//!     .rewrite_stream(">seq1 some description\nACGT\n".as_bytes(), &mut out)
//!     .unwrap();
//!
//! assert_eq!(
//!     String::from_utf8(out).unwrap(),
//!     ">genomeA&chr1&circular ac=seq1 some description\nACGT\n"
//! );
//! assert_eq!(summary.renamed, 1);
//! ```

pub mod rewriter;

pub use rewriter::{HeaderRewrite, HeaderRewriter, RewriteConfig, RewriteError, RewriteSummary};
