//! Filter bound specifications
//!
//! A bound can be given either as a single scalar, interpreted as an upper
//! bound with an implicit lower bound of zero, or as an explicit
//! `(min, max)` pair. The two shapes are modeled as a tagged union and
//! normalized exactly once per filtering run into a concrete `(min, max)`
//! pair.

use crate::error::{BioprepError, Result};

/// A filter bound specification
///
/// Construct via `From`:
///
/// ```
/// use bioprep::filter::Bounds;
///
/// let upper: Bounds = 50.0.into();          // -> (0, 50)
/// let range: Bounds = (40.0, 60.0).into();  // -> (40, 60)
/// # let _ = (upper, range);
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Bounds {
    /// A single scalar used as the upper bound; the lower bound is 0
    Upper(f64),
    /// An explicit `(min, max)` pair, used as given
    Range(f64, f64),
}

impl Bounds {
    /// Normalize into a concrete `(min, max)` pair
    ///
    /// `Upper(v)` resolves to `(0, v)`; `Range(min, max)` is returned as
    /// given. Ordering is not validated: a range with `min > max` resolves
    /// cleanly and simply rejects every record.
    ///
    /// # Errors
    ///
    /// Returns [`BioprepError::InvalidBounds`] if either bound is NaN or
    /// infinite. `label` names the bound category ("GC", "length") in the
    /// error message.
    pub fn resolve(&self, label: &str) -> Result<(f64, f64)> {
        let (min, max) = match *self {
            Bounds::Upper(max) => (0.0, max),
            Bounds::Range(min, max) => (min, max),
        };

        for value in [min, max] {
            if !value.is_finite() {
                return Err(BioprepError::InvalidBounds {
                    label: label.to_string(),
                    value: value.to_string(),
                });
            }
        }

        Ok((min, max))
    }
}

impl From<f64> for Bounds {
    fn from(max: f64) -> Self {
        Bounds::Upper(max)
    }
}

impl From<(f64, f64)> for Bounds {
    fn from((min, max): (f64, f64)) -> Self {
        Bounds::Range(min, max)
    }
}
