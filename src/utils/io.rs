//! Opening input and output files.
//!
//! Inputs ending in `.gz` or `.bgz` are decompressed transparently.

use std::fs::File;
use std::io::{BufRead, BufReader, BufWriter};
use std::path::{Path, PathBuf};

use flate2::read::MultiGzDecoder;

/// Failure to open one of the files named on the command line
#[derive(Debug, thiserror::Error)]
pub enum OpenError {
    #[error("cannot open {role} file '{}'", .path.display())]
    Open {
        role: &'static str,
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

/// Check if the path is a gzipped file
#[allow(clippy::case_sensitive_file_extension_comparisons)] // Already lowercased
#[must_use]
pub fn is_gzipped(path: &Path) -> bool {
    let path_str = path.to_string_lossy().to_lowercase();
    path_str.ends_with(".gz") || path_str.ends_with(".bgz")
}

/// Open a file for line-oriented reading.
///
/// `role` names the file in error messages (e.g. "fasta", "table").
///
/// # Errors
///
/// Returns `OpenError::Open` if the file cannot be opened.
pub fn open_input(path: &Path, role: &'static str) -> Result<Box<dyn BufRead>, OpenError> {
    let file = File::open(path).map_err(|source| OpenError::Open {
        role,
        path: path.to_path_buf(),
        source,
    })?;

    if is_gzipped(path) {
        // bgzip files are a series of gzip members
        Ok(Box::new(BufReader::new(MultiGzDecoder::new(file))))
    } else {
        Ok(Box::new(BufReader::new(file)))
    }
}

/// Create (or truncate) a file for buffered writing.
///
/// # Errors
///
/// Returns `OpenError::Open` if the file cannot be created.
pub fn create_output(path: &Path, role: &'static str) -> Result<BufWriter<File>, OpenError> {
    File::create(path)
        .map(BufWriter::new)
        .map_err(|source| OpenError::Open {
            role,
            path: path.to_path_buf(),
            source,
        })
}
