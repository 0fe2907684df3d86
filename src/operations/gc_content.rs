//! GC content calculation
//!
//! GC content is reported as a percentage of the full sequence length, not of
//! the ACGT bases alone: an `N` (or any other character) counts toward the
//! denominator but never the numerator. Counting is case-insensitive, so
//! soft-masked (lowercase) bases contribute like their uppercase forms.

use crate::error::{BioprepError, Result};
use crate::operations::round2;

/// Calculate the GC content of a sequence as a percentage
///
/// Returns the share of `G`/`C` bases (either case) in the sequence, as a
/// percentage in `[0, 100]` rounded to two decimal places.
///
/// # Errors
///
/// Returns [`BioprepError::EmptySequence`] for a zero-length sequence, since
/// the percentage is undefined there.
///
/// # Example
///
/// ```
/// use bioprep::operations::gc_content;
///
/// # fn main() -> bioprep::Result<()> {
/// assert_eq!(gc_content(b"ATGC")?, 50.0);
/// assert_eq!(gc_content(b"GGCC")?, 100.0);
/// assert_eq!(gc_content(b"ATgc")?, 50.0); // case-insensitive
/// assert_eq!(gc_content(b"GCN")?, 66.67); // N counts toward length
/// # Ok(())
/// # }
/// ```
pub fn gc_content(seq: &[u8]) -> Result<f64> {
    if seq.is_empty() {
        return Err(BioprepError::EmptySequence);
    }

    let gc = seq
        .iter()
        .filter(|&&base| matches!(base, b'G' | b'g' | b'C' | b'c'))
        .count();

    Ok(round2(gc as f64 / seq.len() as f64 * 100.0))
}

/// Check whether a sequence's GC content falls within `[min, max]`
///
/// Both ends are inclusive. Errors propagate from [`gc_content`] for empty
/// sequences.
pub fn passes_gc(seq: &[u8], min: f64, max: f64) -> Result<bool> {
    let gc = gc_content(seq)?;
    Ok(min <= gc && gc <= max)
}
