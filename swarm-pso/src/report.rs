//! JSON run reports for benchmark solves.
//!
//! A [`RunReport`] records what was asked (function, dimensionality,
//! configuration, seed) next to what came back, so a run can be compared
//! or repeated later.

use rand::rngs::StdRng;
use rand::SeedableRng;
use serde::{Deserialize, Serialize};

use swarm_pso_core::benchmarks::Benchmark;
use swarm_pso_core::{OptimizerConfig, ParticleSwarmOptimizer, Result, Solution};

/// One benchmark solve and its outcome.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RunReport {
    /// Benchmark function name
    pub function: String,
    /// Problem dimensionality
    pub dimensions: usize,
    /// Configuration as supplied, unset fields still unset
    pub config: OptimizerConfig,
    /// Seed of the random source
    pub seed: u64,
    pub solution: Solution,
}

/// Solve `benchmark` over its usual domain in `dimensions` dimensions.
pub fn run_benchmark(
    benchmark: Benchmark,
    dimensions: usize,
    config: OptimizerConfig,
    seed: u64,
) -> Result<RunReport> {
    tracing::info!(function = %benchmark, dimensions, seed, "running benchmark");

    let mut pso = ParticleSwarmOptimizer::with_rng(benchmark.function(), StdRng::seed_from_u64(seed))
        .with_search_space(benchmark.search_space(dimensions)?)
        .with_config(config.clone());
    let solution = pso.solve()?;

    Ok(RunReport {
        function: benchmark.name().to_string(),
        dimensions,
        config,
        seed,
        solution,
    })
}

/// Pretty-printed JSON for `report`.
pub fn to_json(report: &RunReport) -> serde_json::Result<String> {
    serde_json::to_string_pretty(report)
}
