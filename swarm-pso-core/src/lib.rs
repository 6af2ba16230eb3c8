//! # swarm-pso Core
//!
//! Particle swarm optimization for black-box cost functions over a bounded,
//! axis-aligned search box.
//!
//! This crate provides:
//! - Search space bounds and clamping
//! - The tuned parameter table used to fill in unset swarm parameters
//! - Swarm state and the velocity/position update rule
//! - The [`ParticleSwarmOptimizer`] solve loop
//! - Standard benchmark cost functions
//!
//! ## Example
//!
//! ```rust
//! use rand::{rngs::StdRng, SeedableRng};
//! use swarm_pso_core::ParticleSwarmOptimizer;
//!
//! let mut pso = ParticleSwarmOptimizer::with_rng(
//!     |x: &[f64]| x[0].cos().abs(),
//!     StdRng::seed_from_u64(7),
//! );
//! pso.add_dimension(-std::f64::consts::PI, std::f64::consts::PI)?;
//!
//! let solution = pso.solve()?;
//! assert!(solution.cost < 0.01);
//! # Ok::<(), swarm_pso_core::Error>(())
//! ```

#![forbid(unsafe_code)]

pub mod benchmarks;
pub mod bounds;
pub mod config;
pub mod heuristics;
pub mod optimizer;
pub mod swarm;
pub mod traits;

pub use bounds::{DimensionBound, SearchSpace};
pub use config::{OptimizerConfig, SwarmParameters, DEFAULT_ITERATIONS};
pub use heuristics::{nearest_record, ParameterRecord, PARAMETER_TABLE};
pub use optimizer::{ParticleSwarmOptimizer, Solution};
pub use traits::{Fallible, Objective, ObjectiveError};

/// Prelude module for convenient imports
pub mod prelude {
    pub use crate::bounds::*;
    pub use crate::config::*;
    pub use crate::optimizer::*;
    pub use crate::traits::*;
    pub use crate::{Error, Result};
}

/// Result type for swarm-pso operations
pub type Result<T> = core::result::Result<T, Error>;

/// Error type for swarm-pso core operations
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// A dimension bound is not a finite interval with `min < max`
    #[error("invalid dimension bound [{min}, {max}]: min must be finite and strictly below max")]
    InvalidBound {
        /// Requested lower bound
        min: f64,
        /// Requested upper bound
        max: f64,
    },
    /// `solve` was called before any dimension was added
    #[error("search space has no dimensions")]
    EmptySearchSpace,
    /// The resolved swarm size is zero
    #[error("swarm size must be positive")]
    EmptySwarm,
    /// The configured iteration count is zero
    #[error("iteration count must be positive")]
    NoIterations,
    /// The objective function reported a failure; the solve was aborted
    #[error("objective evaluation failed: {0}")]
    Objective(#[source] ObjectiveError),
}
