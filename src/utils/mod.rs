//! File-handling helpers shared by the parsers and the CLI.

pub mod io;
