//! Parsers for the two input formats.
//!
//! - **Lookup table** ([`table`]): whitespace-delimited
//!   `fasta_id genome chromosome topology` records
//! - **FASTA** ([`fasta`]): line classification and header splitting
//!
//! ## Example
//!
//! ```rust
//! use fasta_renamer::parsing::table::load_table_text;
//!
//! let load = load_table_text("seq1 genomeA chr1 circular\nbad line\n");
//! assert_eq!(load.map.get("seq1"), Some(&b"genomeA&chr1&circular"[..]));
//! assert_eq!(load.diagnostics.len(), 1);
//! ```

pub mod fasta;
pub mod table;
