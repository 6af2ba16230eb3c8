//! Swarm state and the PSO update rule
//!
//! A [`SwarmState`] is built fresh for every solve and advanced one pass at a
//! time with [`SwarmState::step`]. Particles are visited in a fixed order and
//! a global-best improvement is visible to the very next particle in the same
//! pass, so a seeded run is bit-reproducible.
//!
//! ## Random draws
//!
//! - initialization: two draws per particle per dimension (position, then velocity)
//! - each pass: two draws per particle (`r_p`, then `r_g`), shared by all dimensions

use rand::Rng;
use rand_core::RngCore;

use crate::bounds::SearchSpace;
use crate::config::SwarmParameters;
use crate::traits::Objective;
use crate::{Error, Result};

/// Particle state in PSO
#[derive(Debug, Clone, PartialEq)]
pub struct Particle {
    /// Current position
    pub position: Vec<f64>,
    /// Current velocity
    pub velocity: Vec<f64>,
    /// Personal best position
    pub best_position: Vec<f64>,
    /// Cost of the personal best position
    pub best_cost: f64,
}

impl Particle {
    /// Place a particle uniformly in `space` with a velocity spanning
    /// `[-range, range)` on every axis. `best_cost` is left at infinity until
    /// the first evaluation.
    fn spawn<R: RngCore + ?Sized>(space: &SearchSpace, rng: &mut R) -> Self {
        let mut position = Vec::with_capacity(space.len());
        let mut velocity = Vec::with_capacity(space.len());
        for bound in space {
            let range = bound.range();
            position.push(bound.min() + range * rng.gen::<f64>());
            velocity.push(-range + range * 2.0 * rng.gen::<f64>());
        }
        Self {
            best_position: position.clone(),
            position,
            velocity,
            best_cost: f64::INFINITY,
        }
    }

    /// Apply one velocity/position update with the given random factors and
    /// clamp the new position into `space`. Velocity is left unclamped.
    pub fn advance(
        &mut self,
        params: &SwarmParameters,
        r_p: f64,
        r_g: f64,
        global_best: &[f64],
        space: &SearchSpace,
    ) {
        let moves = self
            .position
            .iter_mut()
            .zip(self.velocity.iter_mut())
            .zip(self.best_position.iter().zip(global_best))
            .zip(space);

        for (((x, v), (&best, &global)), bound) in moves {
            *v = params.inertia * *v
                + params.cognitive * r_p * (best - *x)
                + params.social * r_g * (global - *x);
            *x += *v;
            *x = bound.clamp(*x);
        }
    }

    /// Record `cost` for the current position, keeping it if it beats the
    /// personal best.
    fn observe(&mut self, cost: f64) {
        if cost < self.best_cost {
            self.best_position.copy_from_slice(&self.position);
            self.best_cost = cost;
        }
    }
}

/// Mutable state of one solve
#[derive(Debug, Clone)]
pub struct SwarmState {
    particles: Vec<Particle>,
    global_best_position: Vec<f64>,
    global_best_cost: f64,
    evaluations: usize,
}

impl SwarmState {
    /// Spawn and evaluate `params.swarm_size` particles.
    ///
    /// The global best is the lowest-cost initial particle; on ties the
    /// earliest one wins.
    pub fn initialize<O, R>(
        space: &SearchSpace,
        params: &SwarmParameters,
        objective: &O,
        rng: &mut R,
    ) -> Result<Self>
    where
        O: Objective + ?Sized,
        R: RngCore + ?Sized,
    {
        if space.is_empty() {
            return Err(Error::EmptySearchSpace);
        }
        if params.swarm_size == 0 {
            return Err(Error::EmptySwarm);
        }

        let mut particles = Vec::with_capacity(params.swarm_size);
        let mut global_best_position = Vec::new();
        let mut global_best_cost = f64::INFINITY;

        for i in 0..params.swarm_size {
            let mut particle = Particle::spawn(space, rng);
            let cost = objective.evaluate(&particle.position).map_err(Error::Objective)?;
            particle.best_cost = cost;
            if i == 0 || cost < global_best_cost {
                global_best_position = particle.position.clone();
                global_best_cost = cost;
            }
            particles.push(particle);
        }

        Ok(Self {
            particles,
            global_best_position,
            global_best_cost,
            evaluations: params.swarm_size,
        })
    }

    /// Run one pass over the swarm.
    pub fn step<O, R>(
        &mut self,
        space: &SearchSpace,
        params: &SwarmParameters,
        objective: &O,
        rng: &mut R,
    ) -> Result<()>
    where
        O: Objective + ?Sized,
        R: RngCore + ?Sized,
    {
        let Self {
            particles,
            global_best_position,
            global_best_cost,
            evaluations,
        } = self;

        for particle in particles.iter_mut() {
            let r_p = rng.gen::<f64>();
            let r_g = rng.gen::<f64>();
            particle.advance(params, r_p, r_g, global_best_position, space);

            let cost = objective.evaluate(&particle.position).map_err(Error::Objective)?;
            *evaluations += 1;

            particle.observe(cost);
            if cost < *global_best_cost {
                global_best_position.copy_from_slice(&particle.position);
                *global_best_cost = cost;
                tracing::trace!(cost, "global best improved");
            }
        }
        Ok(())
    }

    /// Particles in visiting order
    pub fn particles(&self) -> &[Particle] {
        &self.particles
    }

    /// Best position seen by any particle
    pub fn global_best_position(&self) -> &[f64] {
        &self.global_best_position
    }

    /// Cost of [`Self::global_best_position`]
    pub fn global_best_cost(&self) -> f64 {
        self.global_best_cost
    }

    /// Number of objective evaluations so far
    pub fn evaluations(&self) -> usize {
        self.evaluations
    }

    /// Consume the state, keeping only the global best.
    pub fn into_best(self) -> (Vec<f64>, f64) {
        (self.global_best_position, self.global_best_cost)
    }
}
