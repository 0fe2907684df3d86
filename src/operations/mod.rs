//! Sequence metrics and manipulation primitives
//!
//! This module provides:
//! - Per-read metrics used by the filtering pipeline (GC content, mean
//!   Phred quality) together with their predicate forms
//! - Single-sequence transformations (reverse, complement, transcribe,
//!   reverse complement, nucleic-acid validation)

pub mod gc_content;
pub mod quality;
pub mod sequence;

pub use gc_content::{gc_content, passes_gc};
pub use quality::{mean_quality, passes_quality};

pub use sequence::{
    complement, is_nucleic_acid, reverse, reverse_complement, transcribe,
};

/// Round to two decimal places, the precision all metrics report at.
pub(crate) fn round2(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}
