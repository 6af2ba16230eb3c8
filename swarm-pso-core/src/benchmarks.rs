//! Standard benchmark cost functions
//!
//! Used by the test suite, the benches and the command-line runner. Each
//! [`Benchmark`] carries its conventional search domain.

use core::fmt;
use core::str::FromStr;
use std::f64::consts::PI;

use crate::bounds::SearchSpace;
use crate::Result;

/// Sphere: `Σ xᵢ²`, minimum 0 at the origin.
#[must_use]
pub fn sphere(x: &[f64]) -> f64 {
    x.iter().map(|xi| xi * xi).sum()
}

/// Rosenbrock valley, minimum 0 at `(1, ..., 1)`.
#[must_use]
pub fn rosenbrock(x: &[f64]) -> f64 {
    x.windows(2)
        .map(|w| {
            let a = w[1] - w[0] * w[0];
            let b = 1.0 - w[0];
            100.0 * a * a + b * b
        })
        .sum()
}

/// Rastrigin: multimodal lattice, minimum 0 at the origin.
#[must_use]
pub fn rastrigin(x: &[f64]) -> f64 {
    let n = x.len() as f64;
    10.0 * n
        + x.iter()
            .map(|xi| xi * xi - 10.0 * (2.0 * PI * xi).cos())
            .sum::<f64>()
}

/// `Σ |cos xᵢ|`, zero at every odd multiple of π/2 on every axis.
#[must_use]
pub fn abs_cos(x: &[f64]) -> f64 {
    x.iter().map(|xi| xi.cos().abs()).sum()
}

/// Named benchmark with its usual search domain
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Benchmark {
    /// [`sphere`] over `[-100, 100]`
    Sphere,
    /// [`rosenbrock`] over `[-30, 30]`
    Rosenbrock,
    /// [`rastrigin`] over `[-5.12, 5.12]`
    Rastrigin,
    /// [`abs_cos`] over `[-2π, 2π]`
    AbsCos,
}

impl Benchmark {
    /// All benchmarks, in display order
    pub const ALL: [Benchmark; 4] = [
        Benchmark::Sphere,
        Benchmark::Rosenbrock,
        Benchmark::Rastrigin,
        Benchmark::AbsCos,
    ];

    /// Short name accepted by [`FromStr`]
    pub const fn name(self) -> &'static str {
        match self {
            Benchmark::Sphere => "sphere",
            Benchmark::Rosenbrock => "rosenbrock",
            Benchmark::Rastrigin => "rastrigin",
            Benchmark::AbsCos => "abs-cos",
        }
    }

    /// The cost function
    pub fn function(self) -> fn(&[f64]) -> f64 {
        match self {
            Benchmark::Sphere => sphere,
            Benchmark::Rosenbrock => rosenbrock,
            Benchmark::Rastrigin => rastrigin,
            Benchmark::AbsCos => abs_cos,
        }
    }

    /// Per-axis search interval
    pub fn domain(self) -> (f64, f64) {
        match self {
            Benchmark::Sphere => (-100.0, 100.0),
            Benchmark::Rosenbrock => (-30.0, 30.0),
            Benchmark::Rastrigin => (-5.12, 5.12),
            Benchmark::AbsCos => (-2.0 * PI, 2.0 * PI),
        }
    }

    /// Search space of `dim` copies of [`Self::domain`]
    pub fn search_space(self, dim: usize) -> Result<SearchSpace> {
        let (min, max) = self.domain();
        SearchSpace::uniform(dim, min, max)
    }
}

impl fmt::Display for Benchmark {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Unknown benchmark name
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown benchmark function: {0}")]
pub struct UnknownBenchmark(pub String);

impl FromStr for Benchmark {
    type Err = UnknownBenchmark;

    fn from_str(s: &str) -> core::result::Result<Self, Self::Err> {
        Benchmark::ALL
            .into_iter()
            .find(|b| b.name() == s)
            .ok_or_else(|| UnknownBenchmark(s.to_string()))
    }
}
