//! Core data types for header renaming.
//!
//! - [`TableRecord`](name_map::TableRecord): one parsed table row
//! - [`NameMap`](name_map::NameMap): insertion-ordered id → composite name mapping
//! - [`Diagnostic`](diagnostics::Diagnostic): recoverable warnings
//! - [`Topology`](types::Topology), [`UnmatchedDetection`](types::UnmatchedDetection)
//!
//! ## Composite names
//!
//! Each table row `id genome chromosome topology` maps `id` to
//! `genome&chromosome&topology`:
//!
//! | id       | genome  | chromosome | topology | composite                 |
//! |----------|---------|------------|----------|---------------------------|
//! | NC_001   | ecoli   | chr        | c        | `ecoli&chr&c`             |
//! | ctg17    | yeast   | chrIV      | linear   | `yeast&chrIV&linear`      |

pub mod diagnostics;
pub mod name_map;
pub mod types;
