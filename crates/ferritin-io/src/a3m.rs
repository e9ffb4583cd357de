//! A3M Alignments
//!
//! A3M files alternate header lines (starting with `>`) with sequence lines.
//! Lowercase letters in a sequence line are insertions relative to the query
//! and are not part of the aligned columns; they are dropped before encoding.
//!
//! ```
//! use ferritin_io::parse_a3m;
//! let aln = parse_a3m(">query\nARND\n>hit\nAkR-D\n").unwrap();
//! assert_eq!(aln.n_sequences(), 2);
//! assert_eq!(aln.decode_row(1).unwrap(), "AR-D");
//! ```
use ferritin_core::{encode_residue, Alignment, MsaError};
use log::debug;
use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::Path;

/// An A3M reader.
pub struct Reader<R> {
    inner: R,
}

impl<R> Reader<R> {
    /// Returns a reference to the underlying reader.
    pub fn get_ref(&self) -> &R {
        &self.inner
    }
    /// Unwraps and returns the underlying reader.
    pub fn into_inner(self) -> R {
        self.inner
    }
}

impl<R> Reader<R>
where
    R: BufRead,
{
    /// Creates an A3M reader.
    pub fn new(inner: R) -> Self {
        Self { inner }
    }

    /// Reads the remaining input as one alignment.
    pub fn read_alignment(&mut self) -> Result<Alignment, MsaError> {
        let mut rows: Vec<Vec<u8>> = Vec::new();
        // blank lines following a sequence line; dropped if they run to EOF
        let mut blank_run = 0;
        let mut after_header = false;
        let mut line = String::new();
        while self.inner.read_line(&mut line)? > 0 {
            if line.trim().is_empty() && !after_header {
                blank_run += 1;
            } else {
                rows.resize(rows.len() + blank_run, Vec::new());
                blank_run = 0;
                match encode_line(&line) {
                    Some(row) => {
                        rows.push(row);
                        after_header = false;
                    }
                    None => after_header = true,
                }
            }
            line.clear();
        }
        if blank_run > 0 {
            debug!("Ignoring {} blank line(s) at end of input", blank_run);
        }
        let alignment = Alignment::from_rows(rows)?;
        debug!(
            "Parsed A3M alignment: {} sequences x {} columns",
            alignment.n_sequences(),
            alignment.n_columns()
        );
        Ok(alignment)
    }
}

/// Encoded row of a sequence line; `None` for headers.
fn encode_line(line: &str) -> Option<Vec<u8>> {
    if line.starts_with('>') {
        return None;
    }
    Some(
        line.trim_end()
            .chars()
            .filter(|c| !c.is_ascii_lowercase())
            .map(encode_residue)
            .collect(),
    )
}

/// Parse A3M text into an alignment.
pub fn parse_a3m(text: &str) -> Result<Alignment, MsaError> {
    Reader::new(text.as_bytes()).read_alignment()
}

/// Read and parse an A3M file.
pub fn read_a3m_file<P: AsRef<Path>>(path: P) -> Result<Alignment, MsaError> {
    let file = File::open(path)?;
    Reader::new(BufReader::new(file)).read_alignment()
}
