use thiserror::Error;

/// Errors raised while building an [`Alignment`](crate::Alignment).
#[derive(Debug, Error)]
pub enum MsaError {
    #[error("malformed alignment: row {row} has {found} columns, expected {expected}")]
    MalformedAlignment {
        row: usize,
        expected: usize,
        found: usize,
    },
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

/// Errors raised while rewriting structure files.
#[derive(Debug, Error)]
pub enum StructureError {
    #[error("unsupported format: {0}")]
    UnsupportedFormat(String),
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

#[derive(Debug, Error)]
pub enum StyleError {
    #[error("Color must be 'lDDT' (default), 'chain', or 'rainbow', got '{0}'")]
    UnknownColorScheme(String),
}
