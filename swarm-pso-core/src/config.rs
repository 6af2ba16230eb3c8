//! Optimizer configuration
//!
//! Every swarm parameter is optional. Whatever the caller leaves unset is
//! filled in from [`crate::heuristics`] when a solve starts; explicit values
//! are never overridden.

use serde::{Deserialize, Serialize};

use crate::heuristics::nearest_record;
use crate::{Error, Result};

/// Iteration count used when the caller does not set one
pub const DEFAULT_ITERATIONS: usize = 500;

/// Particle Swarm Optimization (PSO) configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct OptimizerConfig {
    /// Number of passes over the swarm
    pub iterations: usize,
    /// Number of particles in the swarm
    pub swarm_size: Option<usize>,
    /// Inertia weight (ω)
    pub inertia: Option<f64>,
    /// Cognitive coefficient (φp, attraction to personal best)
    pub cognitive: Option<f64>,
    /// Social coefficient (φg, attraction to global best)
    pub social: Option<f64>,
}

impl Default for OptimizerConfig {
    fn default() -> Self {
        Self {
            iterations: DEFAULT_ITERATIONS,
            swarm_size: None,
            inertia: None,
            cognitive: None,
            social: None,
        }
    }
}

impl OptimizerConfig {
    /// Create a configuration with every swarm parameter unset
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the iteration count
    pub fn with_iterations(mut self, iterations: usize) -> Self {
        self.iterations = iterations;
        self
    }

    /// Set the swarm size
    pub fn with_swarm_size(mut self, size: usize) -> Self {
        self.swarm_size = Some(size);
        self
    }

    /// Set the inertia weight
    pub fn with_inertia(mut self, inertia: f64) -> Self {
        self.inertia = Some(inertia);
        self
    }

    /// Set the cognitive coefficient
    pub fn with_cognitive(mut self, cognitive: f64) -> Self {
        self.cognitive = Some(cognitive);
        self
    }

    /// Set the social coefficient
    pub fn with_social(mut self, social: f64) -> Self {
        self.social = Some(social);
        self
    }

    /// Fill unset fields for a problem with `dimensions` dimensions.
    ///
    /// Fails when the iteration count or the resolved swarm size is zero.
    pub fn resolve(&self, dimensions: usize) -> Result<SwarmParameters> {
        if self.iterations == 0 {
            return Err(Error::NoIterations);
        }

        let row = nearest_record(dimensions, self.iterations);
        let params = SwarmParameters {
            swarm_size: self.swarm_size.unwrap_or(row.size),
            inertia: self.inertia.unwrap_or(row.inertia),
            cognitive: self.cognitive.unwrap_or(row.cognitive),
            social: self.social.unwrap_or(row.social),
        };

        if params.swarm_size == 0 {
            return Err(Error::EmptySwarm);
        }
        Ok(params)
    }
}

/// Fully resolved swarm parameters for one solve
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SwarmParameters {
    /// Number of particles
    pub swarm_size: usize,
    /// Inertia weight (ω)
    pub inertia: f64,
    /// Cognitive coefficient (φp)
    pub cognitive: f64,
    /// Social coefficient (φg)
    pub social: f64,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_config_builder() {
        let config = OptimizerConfig::new()
            .with_iterations(50)
            .with_swarm_size(12)
            .with_inertia(0.7);

        assert_eq!(config.iterations, 50);
        assert_eq!(config.swarm_size, Some(12));
        assert!(config.cognitive.is_none());
    }

    #[test]
    fn test_resolve_fills_only_unset_fields() {
        let config = OptimizerConfig::new()
            .with_iterations(400)
            .with_inertia(0.9)
            .with_social(2.0);

        let params = config.resolve(2).unwrap();
        assert_eq!(params.swarm_size, 25);
        assert_eq!(params.inertia, 0.9);
        assert_eq!(params.cognitive, 2.5586);
        assert_eq!(params.social, 2.0);
    }

    #[test]
    fn test_resolve_uses_table_for_large_problems() {
        let params = OptimizerConfig::new()
            .with_iterations(200_000)
            .resolve(100)
            .unwrap();
        assert_eq!(
            params,
            SwarmParameters {
                swarm_size: 161,
                inertia: -0.2089,
                cognitive: -0.0787,
                social: 3.7637,
            }
        );
    }

    #[test]
    fn test_resolve_rejects_zero_iterations_and_empty_swarm() {
        assert!(matches!(
            OptimizerConfig::new().with_iterations(0).resolve(3),
            Err(Error::NoIterations)
        ));
        assert!(matches!(
            OptimizerConfig::new().with_swarm_size(0).resolve(3),
            Err(Error::EmptySwarm)
        ));
    }

    #[test]
    fn test_config_from_partial_json() {
        let config: OptimizerConfig =
            serde_json::from_str(r#"{"swarm_size": 40, "social": 1.5}"#).unwrap();
        assert_eq!(config.iterations, DEFAULT_ITERATIONS);
        assert_eq!(config.swarm_size, Some(40));
        assert_eq!(config.social, Some(1.5));
        assert!(config.inertia.is_none());
    }
}
