//! FASTQ filtering pipeline
//!
//! Reads a FASTQ file into a [`RecordSet`], applies three independent
//! predicates per record (GC-content bounds, length bounds, mean-quality
//! threshold), and optionally writes the survivors back out. Bounds are
//! normalized once per run, before any record is looked at; any read or
//! bounds error aborts the whole operation with no partial result.

mod bounds;

pub use bounds::Bounds;

use std::path::Path;

use tracing::{debug, info};

use crate::error::Result;
use crate::io::{read_fastq, write_fastq};
use crate::operations::{passes_gc, passes_quality};
use crate::types::RecordSet;

/// Default length upper bound, effectively unbounded for real reads
const DEFAULT_MAX_LENGTH: f64 = 4_294_967_296.0; // 2^32

/// Filtering thresholds for [`filter_fastq`]
///
/// The defaults pass any GC content and any realistic read length, and
/// require a mean quality strictly above zero.
///
/// # Example
///
/// ```
/// use bioprep::filter::FilterConfig;
///
/// let config = FilterConfig {
///     gc_bounds: 50.0.into(),           // (0, 50)
///     length_bounds: (0.0, 10.0).into(),
///     quality_threshold: 30.0,
/// };
/// # let _ = config;
/// ```
#[derive(Debug, Clone)]
pub struct FilterConfig {
    /// GC-content bounds in percent, inclusive on both ends
    pub gc_bounds: Bounds,
    /// Sequence length bounds, inclusive on both ends
    pub length_bounds: Bounds,
    /// Mean-quality threshold; records must score strictly above it
    pub quality_threshold: f64,
}

impl Default for FilterConfig {
    fn default() -> Self {
        Self {
            gc_bounds: Bounds::Range(0.0, 100.0),
            length_bounds: Bounds::Range(0.0, DEFAULT_MAX_LENGTH),
            quality_threshold: 0.0,
        }
    }
}

/// Check whether a sequence's length falls within `[min, max]`
///
/// Both ends are inclusive. Lengths are compared as `f64` because bounds
/// share one numeric representation with the GC filter.
pub fn passes_length(seq: &[u8], min: f64, max: f64) -> bool {
    let len = seq.len() as f64;
    min <= len && len <= max
}

/// Filter an in-memory record set
///
/// Resolves both bound specifications once, then retains exactly the records
/// passing all three predicates. The result is a new set; the input is left
/// untouched.
///
/// # Errors
///
/// - [`BioprepError::InvalidBounds`](crate::BioprepError::InvalidBounds) if
///   a bound is non-finite (detected before any record is processed)
/// - [`BioprepError::EmptySequence`](crate::BioprepError::EmptySequence) /
///   [`BioprepError::EmptyQuality`](crate::BioprepError::EmptyQuality) if a
///   record has a zero-length sequence or quality string
pub fn filter_records(records: &RecordSet, config: &FilterConfig) -> Result<RecordSet> {
    let (gc_min, gc_max) = config.gc_bounds.resolve("GC")?;
    let (len_min, len_max) = config.length_bounds.resolve("length")?;

    let mut filtered = RecordSet::new();
    for record in records {
        if passes_gc(&record.sequence, gc_min, gc_max)?
            && passes_length(&record.sequence, len_min, len_max)
            && passes_quality(&record.quality, config.quality_threshold)?
        {
            filtered.insert(record.clone());
        }
    }

    debug!(
        kept = filtered.len(),
        total = records.len(),
        "applied GC/length/quality filters"
    );
    Ok(filtered)
}

/// Filter a FASTQ file, optionally writing the survivors
///
/// Reads the whole file via [`read_fastq`], filters with [`filter_records`],
/// and returns the surviving records. When `output` is `Some(name)`, the
/// result is also persisted via [`write_fastq`] under the `filtered/`
/// directory (subject to its skip-if-exists policy).
///
/// # Example
///
/// ```no_run
/// use bioprep::filter::{filter_fastq, FilterConfig};
///
/// # fn main() -> bioprep::Result<()> {
/// let config = FilterConfig {
///     gc_bounds: (20.0, 80.0).into(),
///     quality_threshold: 15.0,
///     ..Default::default()
/// };
/// let kept = filter_fastq("reads.fastq", &config, Some("reads_filtered.fastq".as_ref()))?;
/// println!("{} reads kept", kept.len());
/// # Ok(())
/// # }
/// ```
pub fn filter_fastq<P: AsRef<Path>>(
    input: P,
    config: &FilterConfig,
    output: Option<&Path>,
) -> Result<RecordSet> {
    let records = read_fastq(&input)?;
    let filtered = filter_records(&records, config)?;

    info!(
        input = %input.as_ref().display(),
        kept = filtered.len(),
        total = records.len(),
        "filtered FASTQ records"
    );

    if let Some(name) = output {
        write_fastq(&filtered, name)?;
    }

    Ok(filtered)
}
