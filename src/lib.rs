//! bioprep: sequencing-read preparation utilities
//!
//! # Overview
//!
//! bioprep bundles the small file-handling chores that precede real
//! analysis: filtering FASTQ reads by GC content, length, and mean quality,
//! flattening multiline FASTA files, mining protein names out of BLAST text
//! reports, and basic DNA/RNA sequence transforms.
//!
//! ## Quick Start
//!
//! ```no_run
//! use bioprep::filter::{filter_fastq, FilterConfig};
//!
//! # fn main() -> bioprep::Result<()> {
//! let config = FilterConfig {
//!     gc_bounds: (20.0, 80.0).into(),
//!     quality_threshold: 15.0,
//!     ..Default::default()
//! };
//!
//! // Survivors are returned and written to filtered/sample_filtered.fastq
//! let kept = filter_fastq(
//!     "sample.fastq",
//!     &config,
//!     Some("sample_filtered.fastq".as_ref()),
//! )?;
//! println!("{} reads passed", kept.len());
//! # Ok(())
//! # }
//! ```
//!
//! ## Module Organization
//!
//! - [`filter`]: the FASTQ filtering pipeline (bounds, predicates, orchestrator)
//! - [`io`]: FASTQ reading/writing and FASTA flattening
//! - [`formats`]: BLAST text-report mining
//! - [`operations`]: per-read metrics and single-sequence transforms

#![warn(missing_docs)]
#![warn(rustdoc::missing_crate_level_docs)]

pub mod error;
pub mod filter;
pub mod formats;
pub mod io;
pub mod operations;
pub mod types;

// Re-export commonly used types
pub use error::{BioprepError, Result};
pub use filter::{filter_fastq, filter_records, Bounds, FilterConfig};
pub use io::{read_fastq, write_fastq};
pub use types::{FastaRecord, FastqRecord, RecordSet};

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
