//! Line-level view of FASTA text.
//!
//! Only header lines (starting with `>`) are interpreted. Everything else is
//! treated as opaque bytes and never inspected, so sequence and description
//! text need not be valid UTF-8.

use memchr::memchr;

/// Marker that starts a FASTA header line
pub const HEADER_PREFIX: u8 = b'>';

/// A FASTA header split into its name and description
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Header<'a> {
    /// Bytes between `>` and the first space
    pub name: &'a [u8],
    /// Everything after the first space, verbatim
    pub description: &'a [u8],
}

/// Split a line into its content and its terminator (`"\r\n"`, `"\n"` or `""`)
#[must_use]
pub fn split_terminator(line: &[u8]) -> (&[u8], &[u8]) {
    if let Some(content) = line.strip_suffix(b"\r\n") {
        (content, &line[content.len()..])
    } else if let Some(content) = line.strip_suffix(b"\n") {
        (content, &line[content.len()..])
    } else {
        (line, &line[line.len()..])
    }
}

/// Return the header content after `>` if `line` is a header line
#[must_use]
pub fn header_content(line: &[u8]) -> Option<&[u8]> {
    line.strip_prefix(&[HEADER_PREFIX])
}

/// Split header content (without `>` or line terminator) at the first space.
///
/// Returns `None` when there is no space, i.e. the header has no description.
#[must_use]
pub fn split_header(content: &[u8]) -> Option<Header<'_>> {
    memchr(b' ', content).map(|i| Header {
        name: &content[..i],
        description: &content[i + 1..],
    })
}
