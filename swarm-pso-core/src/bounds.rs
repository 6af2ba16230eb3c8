//! Search space bounds
//!
//! The search space is an ordered list of closed intervals, one per
//! dimension. Particle positions are clamped into it after every move.

use serde::Serialize;

use crate::{Error, Result};

/// One axis of the search box, `min < max`
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct DimensionBound {
    min: f64,
    max: f64,
}

impl DimensionBound {
    /// Create a bound, rejecting empty, inverted or non-finite intervals.
    pub fn new(min: f64, max: f64) -> Result<Self> {
        // `!(min < max)` also catches NaN.
        if !min.is_finite() || !max.is_finite() || !(min < max) {
            return Err(Error::InvalidBound { min, max });
        }
        Ok(Self { min, max })
    }

    /// Lower bound
    pub const fn min(&self) -> f64 {
        self.min
    }

    /// Upper bound
    pub const fn max(&self) -> f64 {
        self.max
    }

    /// Width of the interval
    pub fn range(&self) -> f64 {
        self.max - self.min
    }

    /// Pull `value` back into `[min, max]`.
    pub fn clamp(&self, value: f64) -> f64 {
        if value > self.max {
            self.max
        } else if value < self.min {
            self.min
        } else {
            value
        }
    }

    /// Whether `value` lies inside the closed interval
    pub fn contains(&self, value: f64) -> bool {
        (self.min..=self.max).contains(&value)
    }
}

/// Ordered set of dimension bounds
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct SearchSpace {
    dimensions: Vec<DimensionBound>,
}

impl SearchSpace {
    /// Create an empty search space
    pub fn new() -> Self {
        Self::default()
    }

    /// Append one validated dimension.
    pub fn push(&mut self, min: f64, max: f64) -> Result<()> {
        self.dimensions.push(DimensionBound::new(min, max)?);
        Ok(())
    }

    /// Build a space with `dim` identical dimensions.
    pub fn uniform(dim: usize, min: f64, max: f64) -> Result<Self> {
        let bound = DimensionBound::new(min, max)?;
        Ok(Self {
            dimensions: vec![bound; dim],
        })
    }

    /// Number of dimensions
    pub fn len(&self) -> usize {
        self.dimensions.len()
    }

    /// Whether no dimension has been added yet
    pub fn is_empty(&self) -> bool {
        self.dimensions.is_empty()
    }

    /// Iterate over the bounds in order
    pub fn iter(&self) -> core::slice::Iter<'_, DimensionBound> {
        self.dimensions.iter()
    }

    /// Bounds as a slice
    pub fn as_slice(&self) -> &[DimensionBound] {
        &self.dimensions
    }

    /// Whether every coordinate of `position` lies within its bound
    pub fn contains(&self, position: &[f64]) -> bool {
        position.len() == self.len()
            && self
                .dimensions
                .iter()
                .zip(position)
                .all(|(bound, &x)| bound.contains(x))
    }
}

impl<'a> IntoIterator for &'a SearchSpace {
    type Item = &'a DimensionBound;
    type IntoIter = core::slice::Iter<'a, DimensionBound>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}
