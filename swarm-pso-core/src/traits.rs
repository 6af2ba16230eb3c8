//! Core traits for swarm-pso
//!
//! [`Objective`] is the seam between the optimizer and the caller's cost
//! function. Plain closures returning `f64` implement it directly; closures
//! that can fail are wrapped in [`Fallible`].

/// Error raised by a failing objective function
pub type ObjectiveError = Box<dyn std::error::Error + Send + Sync + 'static>;

/// A cost function to be minimized
pub trait Objective {
    /// Evaluate the cost of `position`. Lower is better.
    fn evaluate(&self, position: &[f64]) -> Result<f64, ObjectiveError>;
}

impl<F> Objective for F
where
    F: Fn(&[f64]) -> f64,
{
    fn evaluate(&self, position: &[f64]) -> Result<f64, ObjectiveError> {
        Ok(self(position))
    }
}

/// Adapter for cost functions that can fail.
///
/// The first error aborts the solve and is returned as
/// [`crate::Error::Objective`].
#[derive(Debug, Clone, Copy)]
pub struct Fallible<F>(pub F);

impl<F, E> Objective for Fallible<F>
where
    F: Fn(&[f64]) -> Result<f64, E>,
    E: Into<ObjectiveError>,
{
    fn evaluate(&self, position: &[f64]) -> Result<f64, ObjectiveError> {
        (self.0)(position).map_err(Into::into)
    }
}
