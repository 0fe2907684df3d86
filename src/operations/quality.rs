//! Mean Phred quality calculation
//!
//! Quality strings are Phred+33 encoded: the score of each base is its ASCII
//! code minus 33, so printable characters map to scores 0..=93.

use crate::error::{BioprepError, Result};
use crate::operations::round2;

/// Phred+33 encoding offset
const PHRED_OFFSET: i64 = 33;

/// Calculate the mean Phred quality score of a quality string
///
/// Decodes each character as `code - 33` and averages, rounding to two
/// decimal places.
///
/// # Errors
///
/// Returns [`BioprepError::EmptyQuality`] for an empty quality string.
///
/// # Example
///
/// ```
/// use bioprep::operations::mean_quality;
///
/// # fn main() -> bioprep::Result<()> {
/// assert_eq!(mean_quality(b"IIII")?, 40.0); // 'I' = 73 -> Q40
/// assert_eq!(mean_quality(b"!!!!")?, 0.0);  // '!' = 33 -> Q0
/// # Ok(())
/// # }
/// ```
pub fn mean_quality(qual: &[u8]) -> Result<f64> {
    if qual.is_empty() {
        return Err(BioprepError::EmptyQuality);
    }

    let sum: i64 = qual.iter().map(|&code| code as i64 - PHRED_OFFSET).sum();
    Ok(round2(sum as f64 / qual.len() as f64))
}

/// Check whether a quality string's mean score exceeds `threshold`
///
/// The comparison is strictly greater-than, unlike the inclusive GC and
/// length bounds. A read at exactly the threshold is rejected.
pub fn passes_quality(qual: &[u8], threshold: f64) -> Result<bool> {
    Ok(mean_quality(qual)? > threshold)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_mean_quality_uniform() {
        assert_eq!(mean_quality(b"IIII").unwrap(), 40.0);
        assert_eq!(mean_quality(b"!!!").unwrap(), 0.0);
    }

    #[test]
    fn test_mean_quality_mixed() {
        // '!' = Q0, 'I' = Q40
        assert_eq!(mean_quality(b"!I").unwrap(), 20.0);
        // '#' = Q2, '5' = Q20 -> mean 11.0
        assert_eq!(mean_quality(b"#5").unwrap(), 11.0);
    }

    #[test]
    fn test_mean_quality_rounding() {
        // Q0, Q0, Q1 -> 1/3 -> 0.33
        assert_eq!(mean_quality(b"!!\"").unwrap(), 0.33);
    }

    #[test]
    fn test_mean_quality_empty_is_error() {
        assert!(matches!(
            mean_quality(b""),
            Err(BioprepError::EmptyQuality)
        ));
    }

    #[test]
    fn test_passes_quality_strict_threshold() {
        // Mean is exactly 40.0: strictly-greater comparison rejects it
        assert!(!passes_quality(b"IIII", 40.0).unwrap());
        assert!(passes_quality(b"IIII", 39.99).unwrap());
        assert!(!passes_quality(b"IIII", 40.01).unwrap());
    }

    // Property-based tests
    use proptest::prelude::*;

    proptest! {
        /// Mean quality of printable Phred+33 characters is in [0, 93]
        #[test]
        fn prop_mean_quality_in_range(qual in "[!-~]{1,300}") {
            let mean = mean_quality(qual.as_bytes()).unwrap();
            prop_assert!((0.0..=93.0).contains(&mean));
        }

        /// A uniform quality string averages to its single score
        #[test]
        fn prop_uniform_quality(code in 33u8..=126, len in 1usize..100) {
            let qual = vec![code; len];
            let mean = mean_quality(&qual).unwrap();
            prop_assert_eq!(mean, (code - 33) as f64);
        }
    }
}
