//! Error types for bioprep

use thiserror::Error;

/// Result type alias for bioprep operations
pub type Result<T> = std::result::Result<T, BioprepError>;

/// Error types that can occur in bioprep
#[derive(Debug, Error)]
pub enum BioprepError {
    /// I/O error
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Invalid FASTQ format
    #[error("Invalid FASTQ format at line {line}: {msg}")]
    InvalidFastqFormat {
        /// Line number where error occurred
        line: usize,
        /// Error message
        msg: String,
    },

    /// A filter bound that cannot be used as a numeric range
    #[error("Invalid {label} bounds: {value}")]
    InvalidBounds {
        /// Which bound category failed ("GC" or "length")
        label: String,
        /// The offending value
        value: String,
    },

    /// GC content requested for an empty sequence
    #[error("Cannot compute GC content of an empty sequence")]
    EmptySequence,

    /// Mean quality requested for an empty quality string
    #[error("Cannot compute mean quality of an empty quality string")]
    EmptyQuality,
}
