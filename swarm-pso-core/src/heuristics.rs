//! Tuned PSO parameter table
//!
//! Records come from an empirical study that tuned swarm size, inertia and
//! the acceleration coefficients per problem dimensionality and number of
//! function evaluations. The evaluation budget is used as a stand-in for the
//! requested iteration count.
//!
//! Lookup is two linear scans:
//! 1. nearest dimensionality, first record wins ties
//! 2. nearest evaluation budget within that dimensionality, last record wins ties

use serde::Serialize;

/// One row of the tuned parameter table
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct ParameterRecord {
    /// Problem dimensionality the row was tuned for
    pub dimensions: usize,
    /// Number of objective evaluations the row was tuned for
    pub evaluation_budget: usize,
    /// Swarm size
    pub size: usize,
    /// Inertia weight (ω)
    pub inertia: f64,
    /// Cognitive coefficient (φp)
    pub cognitive: f64,
    /// Social coefficient (φg)
    pub social: f64,
}

const fn record(
    dimensions: usize,
    evaluation_budget: usize,
    size: usize,
    inertia: f64,
    cognitive: f64,
    social: f64,
) -> ParameterRecord {
    ParameterRecord {
        dimensions,
        evaluation_budget,
        size,
        inertia,
        cognitive,
        social,
    }
}

/// Built-in parameter table, ordered by dimensionality then budget.
pub static PARAMETER_TABLE: [ParameterRecord; 11] = [
    record(2, 400, 25, 0.3925, 2.5586, 1.3358),
    record(2, 4000, 156, 0.4091, 2.1304, 1.0575),
    record(5, 1000, 63, -0.3593, -0.7238, 2.0289),
    record(5, 10000, 223, -0.3699, -0.1207, 3.3657),
    record(10, 2000, 63, 0.6571, 1.6319, 0.6239),
    record(10, 20000, 53, -0.3488, -0.2746, 4.8976),
    record(20, 40000, 69, -0.4438, -0.2699, 3.3950),
    record(20, 400000, 149, -0.3236, -0.1136, 3.9789),
    record(30, 600000, 95, -0.6031, -0.6485, 2.6475),
    record(50, 100000, 106, -0.2256, -0.1564, 3.8876),
    record(100, 200000, 161, -0.2089, -0.0787, 3.7637),
];

/// Pick the table row closest to a problem of `dimensions` dimensions solved
/// in `iterations` iterations.
pub fn nearest_record(dimensions: usize, iterations: usize) -> &'static ParameterRecord {
    let mut nearest_dim = PARAMETER_TABLE[0].dimensions;
    for row in &PARAMETER_TABLE[1..] {
        if dimensions.abs_diff(row.dimensions) < dimensions.abs_diff(nearest_dim) {
            nearest_dim = row.dimensions;
        }
    }

    let mut best: Option<&'static ParameterRecord> = None;
    for row in PARAMETER_TABLE.iter().filter(|r| r.dimensions == nearest_dim) {
        let closer_or_equal = best.map_or(true, |b| {
            iterations.abs_diff(row.evaluation_budget) <= iterations.abs_diff(b.evaluation_budget)
        });
        if closer_or_equal {
            best = Some(row);
        }
    }

    // nearest_dim was taken from the table, so the filter matches at least one row.
    best.unwrap_or(&PARAMETER_TABLE[0])
}
