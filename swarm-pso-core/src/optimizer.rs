//! The particle swarm optimizer
//!
//! [`ParticleSwarmOptimizer`] owns the objective, the search space, the
//! configuration and the random source. Every call to
//! [`ParticleSwarmOptimizer::solve`] resolves parameters, builds a fresh
//! [`SwarmState`], runs the configured number of passes and returns the
//! global best. Nothing from one solve leaks into the next except the
//! advanced random source.

use rand::rngs::StdRng;
use rand::SeedableRng;
use rand_core::RngCore;
use serde::{Deserialize, Serialize};

use crate::bounds::SearchSpace;
use crate::config::{OptimizerConfig, SwarmParameters};
use crate::swarm::SwarmState;
use crate::traits::Objective;
use crate::{Error, Result};

/// Outcome of one solve
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Solution {
    /// Best position found
    pub position: Vec<f64>,
    /// Cost at [`Self::position`]
    pub cost: f64,
    /// Parameters the swarm actually ran with
    pub parameters: SwarmParameters,
    /// Total objective evaluations, initialization included
    pub evaluations: usize,
}

impl Solution {
    /// Split into `(position, cost)`.
    pub fn into_parts(self) -> (Vec<f64>, f64) {
        (self.position, self.cost)
    }
}

/// Generator seeded from the wall clock.
fn time_seeded_rng() -> StdRng {
    use std::time::{SystemTime, UNIX_EPOCH};
    let nanos = SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .unwrap_or_default()
        .as_nanos() as u64;
    StdRng::seed_from_u64(nanos)
}

/// Minimizes an [`Objective`] over a box-bounded search space.
///
/// Runs are reproducible only with an injected, seeded random source; see
/// [`Self::with_rng`].
pub struct ParticleSwarmOptimizer<O, R = StdRng> {
    objective: O,
    space: SearchSpace,
    config: OptimizerConfig,
    rng: R,
}

impl<O: Objective> ParticleSwarmOptimizer<O> {
    /// Create an optimizer with a time-seeded random source and default
    /// configuration.
    pub fn new(objective: O) -> Self {
        Self::with_rng(objective, time_seeded_rng())
    }
}

impl<O: Objective, R: RngCore> ParticleSwarmOptimizer<O, R> {
    /// Create an optimizer drawing from `rng`.
    pub fn with_rng(objective: O, rng: R) -> Self {
        Self {
            objective,
            space: SearchSpace::new(),
            config: OptimizerConfig::default(),
            rng,
        }
    }

    /// Append a dimension bounded by `[min, max]`.
    pub fn add_dimension(&mut self, min: f64, max: f64) -> Result<&mut Self> {
        self.space.push(min, max)?;
        Ok(self)
    }

    /// Append several dimensions, stopping at the first invalid bound.
    pub fn with_dimensions<I>(mut self, bounds: I) -> Result<Self>
    where
        I: IntoIterator<Item = (f64, f64)>,
    {
        for (min, max) in bounds {
            self.space.push(min, max)?;
        }
        Ok(self)
    }

    /// Replace the whole search space
    pub fn with_search_space(mut self, space: SearchSpace) -> Self {
        self.space = space;
        self
    }

    /// Replace the whole configuration
    pub fn with_config(mut self, config: OptimizerConfig) -> Self {
        self.config = config;
        self
    }

    /// Set the iteration count
    pub fn set_iterations(&mut self, iterations: usize) -> &mut Self {
        self.config.iterations = iterations;
        self
    }

    /// Set the swarm size
    pub fn set_swarm_size(&mut self, size: usize) -> &mut Self {
        self.config.swarm_size = Some(size);
        self
    }

    /// Set the inertia weight (ω)
    pub fn set_inertia(&mut self, inertia: f64) -> &mut Self {
        self.config.inertia = Some(inertia);
        self
    }

    /// Set the cognitive coefficient (φp)
    pub fn set_cognitive(&mut self, cognitive: f64) -> &mut Self {
        self.config.cognitive = Some(cognitive);
        self
    }

    /// Set the social coefficient (φg)
    pub fn set_social(&mut self, social: f64) -> &mut Self {
        self.config.social = Some(social);
        self
    }

    /// Current configuration, unset fields still unset
    pub fn config(&self) -> &OptimizerConfig {
        &self.config
    }

    /// Current search space
    pub fn search_space(&self) -> &SearchSpace {
        &self.space
    }

    /// Parameters the next solve would run with.
    pub fn resolved_parameters(&self) -> Result<SwarmParameters> {
        if self.space.is_empty() {
            return Err(Error::EmptySearchSpace);
        }
        self.config.resolve(self.space.len())
    }

    /// Run initialization and every configured pass, returning the best
    /// position found.
    ///
    /// Fails before touching the objective if there are no dimensions, no
    /// iterations or no particles. The first objective error aborts the run.
    pub fn solve(&mut self) -> Result<Solution> {
        let parameters = self.resolved_parameters()?;
        let iterations = self.config.iterations;

        let span = tracing::debug_span!(
            "pso_solve",
            dimensions = self.space.len(),
            iterations
        );
        let _enter = span.enter();
        tracing::debug!(
            swarm_size = parameters.swarm_size,
            inertia = parameters.inertia,
            cognitive = parameters.cognitive,
            social = parameters.social,
            "resolved swarm parameters"
        );

        let mut state =
            SwarmState::initialize(&self.space, &parameters, &self.objective, &mut self.rng)?;
        for _ in 0..iterations {
            state.step(&self.space, &parameters, &self.objective, &mut self.rng)?;
        }

        let evaluations = state.evaluations();
        let (position, cost) = state.into_best();
        tracing::debug!(cost, evaluations, "solve finished");

        Ok(Solution {
            position,
            cost,
            parameters,
            evaluations,
        })
    }
}

impl<O, R> core::fmt::Debug for ParticleSwarmOptimizer<O, R> {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("ParticleSwarmOptimizer")
            .field("space", &self.space)
            .field("config", &self.config)
            .finish_non_exhaustive()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::benchmarks;
    use crate::traits::Fallible;
    use std::cell::Cell;

    /// Delegating generator that counts 64-bit draws.
    struct CountingRng {
        inner: StdRng,
        draws: usize,
    }

    impl CountingRng {
        fn new(seed: u64) -> Self {
            Self {
                inner: StdRng::seed_from_u64(seed),
                draws: 0,
            }
        }
    }

    impl RngCore for CountingRng {
        fn next_u32(&mut self) -> u32 {
            self.inner.next_u32()
        }

        fn next_u64(&mut self) -> u64 {
            self.draws += 1;
            self.inner.next_u64()
        }

        fn fill_bytes(&mut self, dest: &mut [u8]) {
            self.inner.fill_bytes(dest)
        }

        fn try_fill_bytes(&mut self, dest: &mut [u8]) -> core::result::Result<(), rand_core::Error> {
            self.inner.try_fill_bytes(dest)
        }
    }

    fn seeded<O: Objective>(objective: O, seed: u64) -> ParticleSwarmOptimizer<O> {
        ParticleSwarmOptimizer::with_rng(objective, StdRng::seed_from_u64(seed))
    }

    #[test]
    fn test_solve_without_dimensions_fails() {
        let mut pso = seeded(benchmarks::sphere, 1);
        assert!(matches!(pso.solve(), Err(Error::EmptySearchSpace)));
    }

    #[test]
    fn test_add_dimension_rejects_degenerate_bounds() {
        let mut pso = seeded(benchmarks::sphere, 1);
        assert!(matches!(
            pso.add_dimension(5.0, 5.0),
            Err(Error::InvalidBound { .. })
        ));
        assert!(matches!(
            pso.add_dimension(5.0, 3.0),
            Err(Error::InvalidBound { .. })
        ));
        assert!(pso.search_space().is_empty());
    }

    #[test]
    fn test_zero_iterations_or_particles_fail_before_evaluating() {
        let calls = Cell::new(0usize);
        let counting = |x: &[f64]| {
            calls.set(calls.get() + 1);
            benchmarks::sphere(x)
        };

        let mut pso = seeded(&counting, 1);
        pso.add_dimension(-1.0, 1.0).unwrap();
        pso.set_iterations(0);
        assert!(matches!(pso.solve(), Err(Error::NoIterations)));

        pso.set_iterations(10).set_swarm_size(0);
        assert!(matches!(pso.solve(), Err(Error::EmptySwarm)));
        assert_eq!(calls.get(), 0);
    }

    #[test]
    fn test_explicit_parameters_are_kept() {
        let mut pso = seeded(benchmarks::sphere, 3);
        pso.add_dimension(-1.0, 1.0).unwrap();
        pso.set_iterations(20).set_swarm_size(7).set_inertia(0.5);

        let solution = pso.solve().unwrap();
        assert_eq!(solution.parameters.swarm_size, 7);
        assert_eq!(solution.parameters.inertia, 0.5);
        assert_eq!(solution.parameters.cognitive, 2.5586);
        assert_eq!(solution.evaluations, 7 + 20 * 7);
        assert!(pso.config().cognitive.is_none());
    }

    #[test]
    fn test_random_factors_are_shared_across_dimensions() {
        let (dims, size, iterations) = (4, 6, 15);
        let mut rng = CountingRng::new(9);
        {
            let mut pso = ParticleSwarmOptimizer::with_rng(benchmarks::sphere, &mut rng)
                .with_config(
                    OptimizerConfig::new()
                        .with_iterations(iterations)
                        .with_swarm_size(size),
                )
                .with_search_space(SearchSpace::uniform(dims, -3.0, 3.0).unwrap());
            pso.solve().unwrap();
        }
        assert_eq!(rng.draws, size * 2 * dims + iterations * size * 2);
    }

    #[test]
    fn test_seeded_runs_are_bit_identical() {
        let run = || {
            let mut pso = seeded(benchmarks::rastrigin, 42)
                .with_dimensions([(-5.12, 5.12), (-5.12, 5.12), (-1.0, 3.0)])
                .unwrap();
            pso.set_iterations(100);
            pso.solve().unwrap()
        };

        let a = run();
        let b = run();
        assert_eq!(a.cost.to_bits(), b.cost.to_bits());
        assert_eq!(
            a.position.iter().map(|x| x.to_bits()).collect::<Vec<_>>(),
            b.position.iter().map(|x| x.to_bits()).collect::<Vec<_>>()
        );
    }

    #[test]
    fn test_repeated_solves_start_from_fresh_state() {
        let mut pso = seeded(benchmarks::sphere, 5);
        pso.add_dimension(-10.0, 10.0).unwrap();
        pso.set_iterations(30);

        let first = pso.solve().unwrap();
        let second = pso.solve().unwrap();
        assert_eq!(first.evaluations, second.evaluations);
        assert_eq!(first.parameters, second.parameters);
    }

    #[test]
    fn test_objective_error_aborts_solve() {
        let calls = Cell::new(0usize);
        let flaky = Fallible(|x: &[f64]| {
            calls.set(calls.get() + 1);
            if calls.get() > 40 {
                Err(format!("evaluation {} failed", calls.get()))
            } else {
                Ok(benchmarks::sphere(x))
            }
        });

        let mut pso = seeded(flaky, 8);
        pso.add_dimension(-1.0, 1.0).unwrap();
        pso.set_swarm_size(10).set_iterations(50);

        match pso.solve() {
            Err(Error::Objective(e)) => assert_eq!(e.to_string(), "evaluation 41 failed"),
            other => panic!("expected objective error, got {other:?}"),
        }
        assert_eq!(calls.get(), 41);
    }
}
