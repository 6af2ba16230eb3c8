//! # swarm-pso
//!
//! **Gradient-free minimization of black-box cost functions with particle swarm optimization.**
//!
//! Give the optimizer a cost function and a box of `(min, max)` bounds; it
//! returns the best position the swarm found and its cost. Swarm size,
//! inertia and the cognitive/social coefficients are picked from a tuned
//! table unless set explicitly.
//!
//! ## Quick Start
//!
//! ```rust
//! use swarm_pso::prelude::*;
//!
//! let mut pso = ParticleSwarmOptimizer::new(|x: &[f64]| (x[0] - 1.0).powi(2) + x[1].powi(2));
//! pso.add_dimension(-5.0, 5.0)?;
//! pso.add_dimension(-5.0, 5.0)?;
//! pso.set_iterations(300);
//!
//! let (position, cost) = pso.solve()?.into_parts();
//! assert_eq!(position.len(), 2);
//! assert!(cost < 1e-3);
//! # Ok::<(), swarm_pso::Error>(())
//! ```
//!
//! ## Crate Structure
//!
//! - [`swarm_pso_core`]: the optimization engine
//! - [`report`]: JSON reports for benchmark runs

#![forbid(unsafe_code)]

// Re-export the engine
pub use swarm_pso_core as core;

// Re-export commonly used items at the top level
pub use swarm_pso_core::{
    benchmarks::{self, Benchmark},
    DimensionBound, Error, Fallible, Objective, OptimizerConfig, ParticleSwarmOptimizer, Result,
    SearchSpace, Solution, SwarmParameters,
};

/// Benchmark run reports (std-only).
pub mod report;

/// Prelude module for convenient imports
///
/// ```rust
/// use swarm_pso::prelude::*;
/// ```
pub mod prelude {
    pub use crate::core::prelude::*;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_top_level_reexports() {
        let config = OptimizerConfig::new().with_iterations(10).with_swarm_size(4);
        let mut pso = ParticleSwarmOptimizer::new(benchmarks::sphere).with_config(config);
        pso.add_dimension(-1.0, 1.0).unwrap();

        let solution = pso.solve().unwrap();
        assert_eq!(solution.evaluations, 4 * 11);
        assert!(pso.search_space().contains(&solution.position));
    }
}
