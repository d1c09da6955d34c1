//! # fasta-renamer
//!
//! Rewrites FASTA headers using a lookup table, replacing each sequence
//! identifier with a `genome&chromosome&topology` composite name.
//!
//! Assembly pipelines often need every contig labelled with the genome it
//! belongs to, its chromosome name and whether it is circular or linear.
//! `fasta-renamer` takes a small whitespace-delimited table of
//! `fasta_id genome chromosome c|l` rows and rewrites every header whose name
//! contains one of the ids:
//!
//! ```text
//! >NC_000913.3 Escherichia coli K-12
//! ```
//!
//! becomes
//!
//! ```text
//! >ecoli&chr&c ac=NC_000913 Escherichia coli K-12
//! ```
//!
//! Sequence lines are copied untouched and the output has the same number of
//! lines as the input.
//!
//! ## Example
//!
//! ```rust
//! use fasta_renamer::{load_table_text, HeaderRewriter, RewriteConfig};
//!
//! let load = load_table_text("NC_000913 ecoli chr c\n");
//! let rewriter = HeaderRewriter::new(&load.map, RewriteConfig::default());
//!
//! let rewrite = rewriter
//!     .rewrite_header(1, b"NC_000913.3 Escherichia coli K-12")
//!     .unwrap();
//! assert_eq!(rewrite.line, b">ecoli&chr&c ac=NC_000913 Escherichia coli K-12");
//! ```
//!
//! ## Modules
//!
//! - [`core`]: Table records, the ordered name map, and diagnostics
//! - [`parsing`]: Table loader and FASTA line helpers
//! - [`rewrite`]: The streaming header rewriter
//! - [`cli`]: Command-line interface implementation
//! - [`utils`]: File opening with transparent gzip support

pub mod cli;
pub mod core;
pub mod parsing;
pub mod rewrite;
pub mod utils;

// Re-export commonly used types for convenience
pub use crate::core::diagnostics::Diagnostic;
pub use crate::core::name_map::{NameMap, TableRecord};
pub use crate::core::types::*;
pub use crate::parsing::table::{load_table_file, load_table_text, TableLoad};
pub use crate::rewrite::{HeaderRewriter, RewriteConfig, RewriteSummary};
